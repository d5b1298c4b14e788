use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    location: String,
    remote: bool,
}

/// Handle `gradebook init`. Opening the context already ran the migrations.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = InitResponse {
        location: ctx.config.database.location(),
        remote: ctx.service.db().is_remote(),
    };
    output(&response, flags.format)
}
