//! Command handlers.
//!
//! Role commands receive the [`RoleLifecycleService`] already wired by
//! [`crate::runtime`]; they only translate arguments and render results.

pub mod completions;
pub mod config;
pub mod count;
pub mod create;
pub mod delete;
pub mod exists;
pub mod find;
pub mod get;
pub mod init;
pub mod list;
pub mod update;

use rolekeeper_core::{
    application::RoleLifecycleService,
    domain::{Role, RoleId},
    error::RoleError,
};

use crate::{error::CliResult, output::OutputManager};

/// Checked id from a raw command-line number.
pub(crate) fn role_id(raw: i64) -> CliResult<RoleId> {
    Ok(RoleId::new(raw).map_err(RoleError::from)?)
}

/// Render one role: JSON object, or a short detail block.
pub(crate) fn show_role(
    service: &RoleLifecycleService,
    role: &Role,
    output: &OutputManager,
) -> CliResult<()> {
    let info = service.describe(role);
    if output.is_json() {
        return output.json(&info);
    }

    output.header(&info.name)?;
    if let Some(id) = info.id {
        output.print(&format!("  Id:       {id}"))?;
    }
    output.print(&format!("  Created:  {}", info.created_at))?;
    if info.system {
        output.print(&format!(
            "  System:   yes {}",
            output.dim("(read-only)")
        ))?;
    }
    Ok(())
}
