//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use grade_config::GradebookConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_database_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "school.db"
url = "libsql://grades-school.turso.io"
auth_token = "secret-token"
"#,
        )?;

        let config: GradebookConfig =
            Figment::from(Serialized::defaults(GradebookConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.database.path, "school.db");
        assert_eq!(config.database.url, "libsql://grades-school.turso.io");
        assert_eq!(config.database.auth_token, "secret-token");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "gradebook.toml",
            r#"
[database]
path = "local-project.db"
"#,
        )?;

        let config = GradebookConfig::load().expect("config loads");
        assert_eq!(config.database.path, "local-project.db");
        assert!(!config.database.is_remote());
        Ok(())
    });
}

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "gradebook.toml",
            r#"
[database]
path = "from-file.db"
"#,
        )?;
        jail.set_env("GRADEBOOK_DATABASE__PATH", "from-env.db");

        let config = GradebookConfig::load().expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn env_only_remote_configuration() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADEBOOK_DATABASE__URL", "libsql://grades.turso.io");
        jail.set_env("GRADEBOOK_DATABASE__AUTH_TOKEN", "tok");

        let config = GradebookConfig::load().expect("config loads");
        assert!(config.database.is_remote());
        assert_eq!(config.database.host(), Some("grades.turso.io"));
        Ok(())
    });
}

#[test]
fn url_without_token_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("GRADEBOOK_DATABASE__URL", "libsql://grades.turso.io");

        let result = GradebookConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
