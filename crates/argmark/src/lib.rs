//! Argmark - declarative command-line argument binding.
//!
//! Describe the accepted flags, positional arguments and program metadata by
//! annotating a struct, and argmark fills its fields from the raw argument
//! list.
//!
//! # Quick Start
//!
//! ```rust
//! use argmark::Args;
//!
//! #[derive(Args, Default)]
//! #[argmark(name = "mytool", version = "1.2.3", help)]
//! struct Cli {
//!     #[arg(short = 'n', long = "name", desc = "User name")]
//!     name: String,
//!
//!     #[arg(short, long, desc = "Age of the user")]
//!     age: i64,
//!
//!     #[arg(required, desc = "Input file")]
//!     file: String,
//! }
//!
//! let mut cli = Cli::default();
//! argmark::parse_from(&mut cli, ["--name", "Alice", "-a", "30", "notes.txt"]).unwrap();
//!
//! assert_eq!(cli.name, "Alice");
//! assert_eq!(cli.age, 30);
//! assert_eq!(cli.file, "notes.txt");
//! ```
//!
//! # Matching Rules
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `--long value` / `-s value` | Binds `value` to the named field |
//! | `--long` with no value | Binds the literal `"true"` (boolean switches) |
//! | `--long` and `-s` both given | The long spelling wins |
//! | bare tokens | Fill positional fields in declaration order |
//! | `-h`, `--help` | Prints help and exits with status 0 (if enabled) |
//! | `--version` | Prints the version and exits with status 0 (if enabled) |
//! | `host args -- app args` | Everything up to and including `--` is dropped |
//!
//! Unknown flags and surplus positionals are ignored. A value that does not
//! parse as the field's type (`--age abc`) leaves the field unchanged rather
//! than failing. Tokens starting with `-` are always flags, so negative
//! numbers cannot be passed positionally.
//!
//! # Attributes
//!
//! Container attributes, `#[argmark(...)]`:
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `name = "..."` | Program name for the usage line (default: lowercased struct name) |
//! | `about = "..."` | Description shown under the usage line |
//! | `version = "..."` | Enables `--version` with this string |
//! | `version` | Enables `--version` without a string |
//! | `help` | Enables `-h` / `--help` |
//!
//! Field attributes, `#[arg(...)]`:
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `short` | Short flag from the lowercased first letter of the field name |
//! | `short = 'x'` | Explicit short flag |
//! | `long` | Long flag from the lowercased field name |
//! | `long = "..."` | Explicit long flag |
//! | `required` | Fail with [`ArgError::MissingRequiredArgument`] when absent |
//! | `desc = "..."` | Description for help output |
//! | `skip` | Not an argument |
//!
//! Fields without `short` or `long` are positional. Field types must
//! implement [`ArgValue`]: `String`, integers, floats, `bool`, or `Option`
//! of those.
//!
//! # Testing Help and Version
//!
//! Help and version output terminate the process through a hook that
//! [`Parser::exit_with`] replaces, so both paths can be exercised in tests.

extern crate self as argmark;

pub mod bind;
pub mod dispatch;
mod error;
pub mod help;
mod output;
mod parser;
mod schema;
pub mod tokens;
mod value;
pub mod version;

pub use argmark_macros::Args;
pub use error::{ArgError, Result};
pub use output::OutputMode;
pub use parser::{ExitHook, ParseOutcome, Parser};
pub use schema::{ArgKind, Args, ArgumentDeclaration, Schema, SchemaBuilder, SchemaMeta};
pub use value::{ArgSlot, ArgValue, Value, ValueType};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
}

/// Parses the process arguments into `target` with the default [`Parser`].
///
/// Help and version requests print to stdout and exit the process.
pub fn parse<T: Args>(target: &mut T) -> Result<ParseOutcome> {
    Parser::default().parse(target)
}

/// Parses an explicit argument vector (excluding the program path) into
/// `target` with the default [`Parser`].
pub fn parse_from<T, I, S>(target: &mut T, args: I) -> Result<ParseOutcome>
where
    T: Args,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::default().parse_from(target, args)
}
