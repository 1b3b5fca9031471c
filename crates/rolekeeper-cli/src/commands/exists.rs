//! `rolekeeper exists`: print whether a role name is taken.
//!
//! Prints `true` or `false` and exits 0 either way.

use rolekeeper_core::{application::RoleLifecycleService, domain::RoleName};

use crate::{
    cli::NameArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: NameArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let exists = service
        .exists(&args.name)
        .with_cli_context(|| format!("checking role '{}'", args.name))?;

    if output.is_json() {
        return output.json(&serde_json::json!({
            "name": RoleName::normalize(&args.name),
            "exists": exists,
        }));
    }
    output.data(if exists { "true" } else { "false" })?;
    Ok(())
}
