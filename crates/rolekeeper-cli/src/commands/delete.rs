//! `rolekeeper delete`: delete a role, after confirmation.

use std::io::{self, IsTerminal};

use rolekeeper_core::application::RoleLifecycleService;
use tracing::{info, instrument};

use crate::{
    cli::DeleteArgs,
    commands::role_id,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Delete a role.
///
/// Asks first unless `--yes`, `--quiet` or JSON output is in effect. System
/// roles skip the prompt; the service refuses them anyway.
#[instrument(skip_all, fields(id = args.id))]
pub fn execute(
    args: DeleteArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let id = role_id(args.id)?;
    let role = service
        .get_by_id(id)
        .with_cli_context(|| format!("looking up role #{id}"))?;

    let is_system = service.describe(&role).system;
    let ask = !(args.yes || output.is_quiet() || output.is_json() || is_system);
    if ask && !confirm(&format!("Delete role {role}? This cannot be undone"))? {
        info!("Delete declined");
        return Err(CliError::Cancelled);
    }

    service
        .delete(id)
        .with_cli_context(|| format!("deleting role #{id}"))?;

    if output.is_json() {
        return output.json(&serde_json::json!({ "deleted": id.get() }));
    }
    output.success(&format!("Deleted role {role}"))?;
    Ok(())
}

fn confirm(prompt: &str) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    if io::stdin().is_terminal() {
        return dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| CliError::IoError {
                message: "failed to read confirmation input".into(),
                source: e.into(),
            });
    }

    confirm_line(prompt)
}

fn confirm_line(prompt: &str) -> CliResult<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    io::stdout().flush().with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
