//! `rolekeeper init`: create a default configuration file.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults to the active config path.
pub fn execute(args: InitArgs, config_file: Option<&Path>, output: &OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = AppConfig::active_config_path(config_file);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_default()?;

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn render_default() -> CliResult<String> {
    toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_has_every_section() {
        let text = render_default().unwrap();
        for section in ["[storage]", "[policy]", "[output]"] {
            assert!(text.contains(section), "{section} missing from:\n{text}");
        }
        assert!(text.contains("SYS_"));
    }
}
