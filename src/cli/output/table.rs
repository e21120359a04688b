//! Table output formatting for CLI commands
//!
//! Provides formatted table output for plugin listings using comfy-table.
//! Supports color-coded cells, automatic column sizing, and accessibility
//! fallbacks for terminals without color.

use crate::domain::models::PluginManifest;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<usize>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<usize>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format plugin manifests with their enabled state as a table
    pub fn format_plugins(&self, rows: &[(PluginManifest, bool)]) -> String {
        let mut table = self.create_base_table();

        // Header row
        table.set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Capability").add_attribute(Attribute::Bold),
            Cell::new("State").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
        ]);

        // Data rows
        for (manifest, enabled) in rows {
            let state_text = if *enabled { "enabled" } else { "disabled" };
            let state_cell = if self.use_colors {
                Cell::new(state_text).fg(state_color(*enabled))
            } else {
                Cell::new(format!("{} {}", state_icon(*enabled), state_text))
            };

            table.add_row(vec![
                Cell::new(&manifest.name),
                Cell::new(&manifest.version),
                Cell::new(manifest.capability.as_str()),
                state_cell,
                Cell::new(truncate_text(&manifest.description, 50)),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        // Apply max width if set
        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map enabled state to color
fn state_color(enabled: bool) -> Color {
    if enabled {
        Color::Green
    } else {
        Color::DarkGrey
    }
}

/// Map enabled state to icon
fn state_icon(enabled: bool) -> &'static str {
    if enabled {
        "✓"
    } else {
        "⊘"
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let keep: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{keep}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PluginCapability;

    fn manifest(name: &str) -> PluginManifest {
        PluginManifest::new(name, PluginCapability::Custom)
            .with_description("A plugin used in formatter tests")
    }

    #[test]
    fn test_table_formatter_new() {
        let formatter = TableFormatter::new();
        assert_eq!(formatter.max_width, None);
    }

    #[test]
    fn test_table_formatter_with_config() {
        let formatter = TableFormatter::with_config(false, Some(120));
        assert!(!formatter.use_colors);
        assert_eq!(formatter.max_width, Some(120));
    }

    #[test]
    fn test_format_plugins() {
        let rows = vec![(manifest("maps"), true), (manifest("camera"), false)];

        let formatter = TableFormatter::with_config(false, None);
        let output = formatter.format_plugins(&rows);

        assert!(output.contains("maps"));
        assert!(output.contains("camera"));
        assert!(output.contains("enabled"));
        assert!(output.contains("disabled"));
        assert!(output.contains("custom"));
    }

    #[test]
    fn test_state_icon_mapping() {
        assert_eq!(state_icon(true), "✓");
        assert_eq!(state_icon(false), "⊘");
    }

    #[test]
    fn test_state_color_mapping() {
        assert_eq!(state_color(true), Color::Green);
        assert_eq!(state_color(false), Color::DarkGrey);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("this is a very long text", 10), "this is...");
        assert_eq!(truncate_text("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_text_edge_cases() {
        assert_eq!(truncate_text("", 10), "");
        assert_eq!(truncate_text("abc", 3), "abc");
        assert_eq!(truncate_text("abcd", 3), "...");
    }

    #[test]
    fn test_truncate_text_cuts_between_characters() {
        // Lengths are counted in characters, so multi-byte text never gets
        // split mid-encoding.
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
        assert_eq!(
            truncate_text("カメラプラグインの説明テキスト", 10),
            "カメラプラグイ..."
        );
        // Two characters fit in five even though they span six bytes.
        assert_eq!(truncate_text("説明", 5), "説明");
    }

    #[test]
    fn test_format_plugins_truncates_multibyte_description() {
        let rows = vec![(manifest("maps").with_description("地図".repeat(30)), true)];

        let formatter = TableFormatter::with_config(false, None);
        let output = formatter.format_plugins(&rows);

        assert!(output.contains("maps"));
        assert!(output.contains("..."));
    }
}
