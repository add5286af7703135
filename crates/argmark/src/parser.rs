//! Parser configuration and the top-level parse flow.
//!
//! A [`Parser`] ties the pieces together:
//!
//! ```text
//! raw args ─► strip "--" prefix ─► classify ─► help/version? ─► bind
//!                                                   │
//!                                                   └─► render, write, exit(0)
//! ```
//!
//! Termination after help or version goes through an injectable exit hook.
//! The default hook calls [`std::process::exit`]; tests install one that
//! records the status and returns, in which case [`Parser::parse_from`]
//! returns the matching [`ParseOutcome`] without binding anything.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::debug;

use crate::bind::{bind, validate_slots};
use crate::dispatch::{check_meta, DispatchOutcome};
use crate::error::Result;
use crate::help::{render_help, HelpConfig};
use crate::schema::Args;
use crate::tokens::{classify, strip_harness_prefix};
use crate::version::render_version;

/// Termination hook invoked with the exit status after help or version output.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Result of a parse call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// All declarations were processed and the target was updated.
    Bound,
    /// Help was printed and the exit hook returned.
    HelpShown,
    /// The version was printed and the exit hook returned.
    VersionShown,
}

/// Configurable argument parser.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use argmark::{Args, OutputMode, ParseOutcome, Parser};
/// use argmark::help::HelpConfig;
///
/// #[derive(Args, Default)]
/// #[argmark(name = "tool", help)]
/// struct Cli {
///     #[arg(required)]
///     file: String,
/// }
///
/// let status = Arc::new(Mutex::new(None));
/// let seen = status.clone();
///
/// let mut parser = Parser::new()
///     .help_config(HelpConfig {
///         output_mode: Some(OutputMode::Text),
///         ..Default::default()
///     })
///     .output(std::io::sink())
///     .exit_with(move |code| *seen.lock().unwrap() = Some(code));
///
/// let mut cli = Cli::default();
/// let outcome = parser.parse_from(&mut cli, ["--help"]).unwrap();
/// assert_eq!(outcome, ParseOutcome::HelpShown);
/// assert_eq!(*status.lock().unwrap(), Some(0));
/// ```
pub struct Parser {
    help: HelpConfig,
    output: Box<dyn Write>,
    exit: ExitHook,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            help: HelpConfig::default(),
            output: Box::new(io::stdout()),
            exit: Arc::new(|code| std::process::exit(code)),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the help rendering configuration.
    pub fn help_config(mut self, config: HelpConfig) -> Self {
        self.help = config;
        self
    }

    /// Sets where help and version text is written. Defaults to stdout.
    ///
    /// [`OutputMode::Auto`](crate::OutputMode::Auto) still detects color
    /// support on stdout, not on this writer. Set an explicit
    /// `output_mode` in the [`HelpConfig`] when writing elsewhere.
    pub fn output(mut self, writer: impl Write + 'static) -> Self {
        self.output = Box::new(writer);
        self
    }

    /// Replaces the termination hook. Defaults to [`std::process::exit`].
    pub fn exit_with(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit = Arc::new(hook);
        self
    }

    /// Parses the process arguments (excluding the program path) into `target`.
    pub fn parse<T: Args>(&mut self, target: &mut T) -> Result<ParseOutcome> {
        self.parse_from(target, std::env::args().skip(1))
    }

    /// Parses an explicit argument vector into `target`.
    ///
    /// `args` must not include the program path. Everything up to and
    /// including the first `--` is discarded before classification.
    ///
    /// # Errors
    ///
    /// See [`ArgError`](crate::ArgError). Fields bound before a
    /// [`MissingRequiredArgument`](crate::ArgError::MissingRequiredArgument)
    /// or [`UnsupportedFieldType`](crate::ArgError::UnsupportedFieldType)
    /// error keep their new values.
    pub fn parse_from<T, I, S>(&mut self, target: &mut T, args: I) -> Result<ParseOutcome>
    where
        T: Args,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schema = T::schema()?;
        let raw: Vec<String> = args.into_iter().map(Into::into).collect();
        let args = strip_harness_prefix(&raw);
        if args.len() != raw.len() {
            debug!(dropped = raw.len() - args.len(), "dropped arguments before separator");
        }

        let tokens = classify(args);
        debug!(
            flags = tokens.flags().count(),
            positionals = tokens.positionals().len(),
            "classified arguments"
        );

        match check_meta(schema, &tokens) {
            DispatchOutcome::ExitAfterHelp => {
                let text = render_help(schema, &self.help)?;
                self.finish(&text)?;
                return Ok(ParseOutcome::HelpShown);
            }
            DispatchOutcome::ExitAfterVersion => {
                let text = render_version(schema);
                self.finish(&text)?;
                return Ok(ParseOutcome::VersionShown);
            }
            DispatchOutcome::Continue => {}
        }

        validate_slots(schema, target)?;
        bind(schema, target, &tokens)?;
        Ok(ParseOutcome::Bound)
    }

    /// Writes the text and hands control to the exit hook.
    fn finish(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        (self.exit)(0);
        debug!("exit hook returned");
        Ok(())
    }
}
