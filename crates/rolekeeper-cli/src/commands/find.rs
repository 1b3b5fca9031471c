//! `rolekeeper find`: show a role by name.

use rolekeeper_core::application::RoleLifecycleService;

use crate::{
    cli::NameArgs,
    commands::show_role,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: NameArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let role = service
        .get_by_name(&args.name)
        .with_cli_context(|| format!("looking up role '{}'", args.name))?;
    show_role(service, &role, output)
}
