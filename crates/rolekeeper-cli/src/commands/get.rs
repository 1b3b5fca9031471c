//! `rolekeeper get`: show a role by id.

use rolekeeper_core::application::RoleLifecycleService;

use crate::{
    cli::GetArgs,
    commands::{role_id, show_role},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: GetArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let id = role_id(args.id)?;
    let role = service
        .get_by_id(id)
        .with_cli_context(|| format!("looking up role #{id}"))?;
    show_role(service, &role, output)
}
