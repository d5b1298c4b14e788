use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::handle(ctx, flags),
        Commands::Person { action } => commands::person::handle(&action, ctx, flags).await,
        Commands::Curriculum { action } => commands::curriculum::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Validation { action } => commands::validation::handle(&action, ctx, flags).await,
        Commands::Grade { action } => commands::grade::handle(&action, ctx, flags).await,
    }
}
