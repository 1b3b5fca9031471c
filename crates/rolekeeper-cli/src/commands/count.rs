//! `rolekeeper count`: print the number of roles.

use rolekeeper_core::application::RoleLifecycleService;

use crate::{
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(service: &RoleLifecycleService, output: &OutputManager) -> CliResult<()> {
    let count = service.count().with_cli_context(|| "counting roles")?;

    if output.is_json() {
        return output.json(&serde_json::json!({ "count": count }));
    }
    output.data(&count.to_string())?;
    Ok(())
}
