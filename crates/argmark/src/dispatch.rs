//! Detection of help and version requests ahead of binding.

use tracing::debug;

use crate::schema::Schema;
use crate::tokens::ClassifiedTokens;

/// Spellings that request help when help is enabled.
pub const HELP_SPELLINGS: [&str; 2] = ["-h", "--help"];

/// Spelling that requests the version when version output is enabled.
pub const VERSION_SPELLING: &str = "--version";

/// What the parser should do after inspecting meta flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No meta request; proceed to binding.
    Continue,
    /// Render help, then terminate.
    ExitAfterHelp,
    /// Render the version, then terminate.
    ExitAfterVersion,
}

/// Checks for help and version requests.
///
/// Help wins over version when both are requested. Only meta flags the
/// schema enables are considered, and nothing about the other arguments is
/// inspected, so missing required arguments never block these requests.
pub fn check_meta(schema: &Schema, tokens: &ClassifiedTokens) -> DispatchOutcome {
    let meta = schema.meta();

    if meta.help_enabled && HELP_SPELLINGS.iter().any(|s| tokens.is_present(s)) {
        debug!("help requested");
        return DispatchOutcome::ExitAfterHelp;
    }
    if meta.version_enabled && tokens.is_present(VERSION_SPELLING) {
        debug!("version requested");
        return DispatchOutcome::ExitAfterVersion;
    }

    DispatchOutcome::Continue
}
