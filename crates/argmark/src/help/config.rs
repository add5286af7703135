//! Help rendering configuration.

use std::collections::BTreeMap;

use console::Style;

use crate::output::OutputMode;

/// Named styles used by the help template's `style` filter.
///
/// Unknown style names render their text unstyled.
#[derive(Debug, Clone, Default)]
pub struct HelpTheme {
    styles: BTreeMap<String, Style>,
}

impl HelpTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a style according to the output mode.
    ///
    /// ```
    /// use argmark::help::HelpTheme;
    /// use argmark::OutputMode;
    /// use console::Style;
    ///
    /// let theme = HelpTheme::new().add("header", Style::new().bold());
    /// assert_eq!(theme.apply("header", "Usage:", OutputMode::Text), "Usage:");
    /// assert_eq!(
    ///     theme.apply("header", "Usage:", OutputMode::TermDebug),
    ///     "[header]Usage:[/header]"
    /// );
    /// ```
    pub fn apply(&self, name: &str, text: &str, mode: OutputMode) -> String {
        if mode.is_debug() {
            return self.apply_debug(name, text);
        }
        self.apply_with_color(name, text, mode.should_use_color())
    }

    pub(crate) fn apply_with_color(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    pub(crate) fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.has(name) && !text.is_empty() {
            format!("[{}]{}[/{}]", name, text, name)
        } else {
            text.to_string()
        }
    }
}

/// Configuration for help rendering.
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Custom minijinja template. If None, uses the default template.
    pub template: Option<String>,
    /// Custom theme. If None, uses [`default_help_theme`].
    pub theme: Option<HelpTheme>,
    /// Output mode. If None, uses Auto (auto-detects).
    pub output_mode: Option<OutputMode>,
}

/// Returns the default theme for help rendering.
///
/// Section headers are bold and underlined and the program name is bold.
pub fn default_help_theme() -> HelpTheme {
    HelpTheme::new()
        .add("header", Style::new().bold().underlined())
        .add("name", Style::new().bold())
        .add("item", Style::new())
        .add("desc", Style::new())
}
