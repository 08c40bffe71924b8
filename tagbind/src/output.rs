use crate::commands::RewriteReport;
use crate::config::Config;
use crate::constants::{DRY_RUN_MESSAGE, SUCCESS_MESSAGE};
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::io::Write;

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print one row per replacement rule with its match count.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_table(writer: &mut impl Write, report: &RewriteReport) -> std::io::Result<()> {
    writeln!(writer, "\n{}", "Handler Rewrites".bold().underline())?;

    let mut table = create_table(vec!["Key", "Action", "Replaced"]);
    for rule in &report.rules {
        let count = if rule.count == 0 {
            Cell::new(rule.count).add_attribute(Attribute::Dim)
        } else {
            Cell::new(rule.count).fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(&rule.key).add_attribute(Attribute::Bold),
            Cell::new(rule.action),
            count,
        ]);
    }

    writeln!(writer, "{table}")?;
    writeln!(
        writer,
        "{} {} in {}\n",
        "Total:".bold(),
        report.total_replacements,
        report.file
    )?;
    Ok(())
}

/// Print the closing line of a run.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_completion(writer: &mut impl Write, report: &RewriteReport) -> std::io::Result<()> {
    if report.dry_run {
        writeln!(writer, "{}", DRY_RUN_MESSAGE.yellow())
    } else {
        writeln!(writer, "{}", SUCCESS_MESSAGE.green())
    }
}

/// Warn on stderr about config files that were found but could not be parsed.
pub fn print_rejected_configs(config: &Config) {
    for (path, reason) in &config.rejected_files {
        eprintln!(
            "{} ignoring {}: {}",
            "Warning:".yellow().bold(),
            normalize_display_path(path),
            reason
        );
    }
}

/// Report rules that found nothing on stderr.
pub fn print_unmatched(report: &RewriteReport) {
    for rule in report.unmatched() {
        eprintln!("[VERBOSE] No match for {}", rule.pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RuleOutcome;
    use crate::rules::HandlerAction;

    fn report(dry_run: bool) -> RewriteReport {
        RewriteReport {
            file: "Window.xaml".to_owned(),
            dry_run,
            changed: true,
            total_replacements: 2,
            rules: vec![RuleOutcome {
                key: "Doxology".to_owned(),
                action: HandlerAction::Select,
                pattern: r#"Click="DoxologySelect_Click""#.to_owned(),
                replacement: r#"Click="ElementSelect_Click" Tag="Doxology""#.to_owned(),
                count: 2,
            }],
        }
    }

    #[test]
    fn test_print_completion() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        print_completion(&mut buffer, &report(false)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "XAML file updated successfully\n");

        let mut buffer = Vec::new();
        print_completion(&mut buffer, &report(true)).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("[DRY-RUN]"));
    }

    #[test]
    fn test_print_rule_table() {
        let mut buffer = Vec::new();
        print_rule_table(&mut buffer, &report(false)).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Doxology"));
        assert!(output.contains("Select"));
        assert!(output.contains("Window.xaml"));
    }
}
