//! Visual theme and styling.

use console::Style;

/// Terminal theme for deployenv output.
#[derive(Debug, Clone)]
pub struct DeployEnvTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for DeployEnvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployEnvTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a key-value line with the key padded for alignment.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        format!(
            "  {} {}",
            self.key.apply_to(format!("{:<14}", format!("{}:", key))),
            self.value.apply_to(value)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_error() {
        let msg = DeployEnvTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_field_aligned() {
        let theme = DeployEnvTheme::plain();
        let short = theme.format_field("Debug", "true");
        let long = theme.format_field("Query limit", "64");
        assert_eq!(short.find("true"), long.find("64"));
        assert!(short.starts_with("  Debug:"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DeployEnvTheme::default();
        let new = DeployEnvTheme::new();
        assert_eq!(default.format_error("test"), new.format_error("test"));
    }
}
