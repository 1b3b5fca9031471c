//! `rolekeeper create`: create a role.

use rolekeeper_core::application::RoleLifecycleService;
use tracing::instrument;

use crate::{
    cli::CreateArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let role = service
        .create(&args.name)
        .with_cli_context(|| format!("creating role '{}'", args.name))?;

    if output.is_json() {
        return output.json(&service.describe(&role));
    }
    output.success(&format!("Created role {role}"))?;
    Ok(())
}
