//! `rolekeeper update`: rename a role.

use rolekeeper_core::application::RoleLifecycleService;
use tracing::instrument;

use crate::{
    cli::UpdateArgs,
    commands::role_id,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = args.id))]
pub fn execute(
    args: UpdateArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let id = role_id(args.id)?;
    let role = service
        .update(id, &args.name)
        .with_cli_context(|| format!("renaming role #{id}"))?;

    if output.is_json() {
        return output.json(&service.describe(&role));
    }
    output.success(&format!("Updated role {role}"))?;
    Ok(())
}
