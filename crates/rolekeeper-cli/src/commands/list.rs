//! Implementation of the `rolekeeper list` command.

use rolekeeper_core::application::{RoleInfo, RoleLifecycleService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    service: &RoleLifecycleService,
    output: &OutputManager,
) -> CliResult<()> {
    let roles = match &args.search {
        Some(pattern) => service
            .search_by_name(pattern)
            .with_cli_context(|| format!("searching roles for '{pattern}'"))?,
        None => service.list().with_cli_context(|| "listing roles")?,
    };
    let infos: Vec<RoleInfo> = roles.iter().map(|r| service.describe(r)).collect();

    // A global `--output-format json` wins over the default table.
    let format = if output.is_json() && args.format == ListFormat::Table {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if infos.is_empty() {
                output.info(match args.search {
                    Some(_) => "No roles match",
                    None => "No roles yet. Try: rolekeeper create <NAME>",
                })?;
                return Ok(());
            }
            output.header("Roles:")?;
            for line in table_rows(&infos) {
                output.print(&line)?;
            }
        }

        ListFormat::Json => output.json(&infos)?,

        ListFormat::List => {
            for info in &infos {
                output.data(&info.name)?;
            }
        }

        ListFormat::Csv => {
            output.data("id,name,created_at,system")?;
            for info in &infos {
                output.data(&csv_row(info))?;
            }
        }
    }

    Ok(())
}

fn table_rows(infos: &[RoleInfo]) -> Vec<String> {
    let id_width = infos
        .iter()
        .filter_map(|i| i.id)
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = infos.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);

    infos
        .iter()
        .map(|info| {
            let id = info.id.map(|id| id.to_string()).unwrap_or_default();
            let marker = if info.system { "  [system]" } else { "" };
            format!(
                "  {id:>id_width$}  {name:<name_width$}  {created}{marker}",
                name = info.name,
                created = info.created_at,
            )
        })
        .collect()
}

fn csv_row(info: &RoleInfo) -> String {
    format!(
        "{},{},{},{}",
        info.id.map(|id| id.to_string()).unwrap_or_default(),
        csv_field(&info.name),
        info.created_at,
        info.system
    )
}

/// Quote a field when it contains a separator, a quote or a line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: i64, name: &str, system: bool) -> RoleInfo {
        RoleInfo {
            id: Some(id),
            name: name.into(),
            created_at: "2024-05-01T09:30:00Z".into(),
            system,
        }
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("OPS TEAM"), "OPS TEAM");
        assert_eq!(csv_field("A,B"), "\"A,B\"");
        assert_eq!(csv_field("SAY \"HI\""), "\"SAY \"\"HI\"\"\"");
    }

    #[test]
    fn csv_row_layout() {
        assert_eq!(
            csv_row(&info(7, "ADMIN", true)),
            "7,ADMIN,2024-05-01T09:30:00Z,true"
        );
    }

    #[test]
    fn table_aligns_columns_and_marks_system_roles() {
        let rows = table_rows(&[info(1, "ADMIN", true), info(12, "OPS", false)]);
        assert_eq!(rows[0], "   1  ADMIN  2024-05-01T09:30:00Z  [system]");
        assert_eq!(rows[1], "  12  OPS    2024-05-01T09:30:00Z");
    }
}
