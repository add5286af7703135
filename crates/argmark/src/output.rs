//! Output mode control for help rendering.

use console::Term;

/// Controls whether rendered help includes ANSI styling.
///
/// - `Auto` - Detect terminal capabilities on stdout (default)
/// - `Term` - Always include ANSI escape codes
/// - `Text` - Never include ANSI escape codes
/// - `TermDebug` - Render style names as bracket tags, e.g. `[header]Usage:[/header]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    TermDebug,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision about whether to use color.
    ///
    /// `TermDebug` returns `false`; it is handled separately by the style filter.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
            OutputMode::TermDebug => false,
        }
    }

    /// Returns true if this is debug mode (bracket tags instead of ANSI).
    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }
}
