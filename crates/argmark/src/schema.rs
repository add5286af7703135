//! Schema description: argument declarations and program metadata.
//!
//! A [`Schema`] is the ordered list of [`ArgumentDeclaration`]s for one
//! struct shape, plus its [`SchemaMeta`]. It is usually produced by
//! `#[derive(Args)]` and cached per type, but can also be assembled by hand
//! with [`Schema::builder`].
//!
//! # Example
//!
//! ```
//! use argmark::{ArgumentDeclaration, Schema, ValueType};
//!
//! let schema = Schema::builder()
//!     .name("mytool")
//!     .version("1.2.3")
//!     .help()
//!     .arg(ArgumentDeclaration::new("name", ValueType::String).short('n').long("name"))
//!     .arg(ArgumentDeclaration::new("file", ValueType::String).required())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.declarations().len(), 2);
//! assert!(schema.declarations()[1].is_positional());
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{ArgError, Result};
use crate::value::{ArgSlot, ValueType};

/// How an argument is matched on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArgKind {
    /// Matched by position among the non-flag tokens.
    Positional,
    /// Matched by `--long` and/or `-s` spelling.
    Named,
}

/// One argument's schema entry.
///
/// The [`kind`](Self::kind) is derived from the flag forms: a declaration is
/// [`ArgKind::Named`] iff it has a long or a short form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentDeclaration {
    name: String,
    long: Option<String>,
    short: Option<char>,
    required: bool,
    description: Option<String>,
    value_type: ValueType,
}

impl ArgumentDeclaration {
    /// Creates a positional, optional declaration.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            long: None,
            short: None,
            required: false,
            description: None,
            value_type,
        }
    }

    /// Sets an explicit long form (`"age"` matches `--age`).
    ///
    /// An empty string clears the long form.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        let long = long.into();
        self.long = if long.is_empty() { None } else { Some(long) };
        self
    }

    /// Derives the long form from the declaration name, lowercased.
    pub fn auto_long(mut self) -> Self {
        self.long = Some(self.name.to_lowercase());
        self
    }

    /// Sets an explicit short form (`'a'` matches `-a`).
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Derives the short form from the lowercased first character of the name.
    pub fn auto_short(mut self) -> Self {
        self.short = self.name.chars().next().and_then(|c| c.to_lowercase().next());
        self
    }

    /// Marks the declaration as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the human-readable description shown in help.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArgKind {
        if self.long.is_some() || self.short.is_some() {
            ArgKind::Named
        } else {
            ArgKind::Positional
        }
    }

    pub fn is_positional(&self) -> bool {
        self.kind() == ArgKind::Positional
    }

    pub fn long_form(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn short_form(&self) -> Option<char> {
        self.short
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the flag spellings for this declaration, long first.
    ///
    /// Positional declarations return an empty list.
    pub fn spellings(&self) -> Vec<String> {
        let mut spellings = Vec::with_capacity(2);
        if let Some(long) = &self.long {
            spellings.push(format!("--{}", long));
        }
        if let Some(short) = self.short {
            spellings.push(format!("-{}", short));
        }
        spellings
    }
}

/// Program-level metadata: name, version and the built-in meta flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaMeta {
    pub name: Option<String>,
    pub about: Option<String>,
    pub version: Option<String>,
    /// Whether `--version` is recognized.
    pub version_enabled: bool,
    /// Whether `-h` / `--help` are recognized.
    pub help_enabled: bool,
}

/// A validated, ordered set of argument declarations for one struct shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    meta: SchemaMeta,
    declarations: Vec<ArgumentDeclaration>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn meta(&self) -> &SchemaMeta {
        &self.meta
    }

    /// Declarations in declaration order, which is also positional
    /// consumption order.
    pub fn declarations(&self) -> &[ArgumentDeclaration] {
        &self.declarations
    }

    pub fn positionals(&self) -> impl Iterator<Item = &ArgumentDeclaration> {
        self.declarations.iter().filter(|d| d.is_positional())
    }

    pub fn named(&self) -> impl Iterator<Item = &ArgumentDeclaration> {
        self.declarations.iter().filter(|d| !d.is_positional())
    }

    /// Returns true if any option appears in help: a named declaration or an
    /// enabled meta flag.
    pub fn has_options(&self) -> bool {
        self.meta.help_enabled || self.meta.version_enabled || self.named().next().is_some()
    }
}

/// Builder for [`Schema`], validating on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    meta: SchemaMeta,
    declarations: Vec<ArgumentDeclaration>,
}

impl SchemaBuilder {
    /// Sets the program name used in the usage line.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.meta.name = Some(name.into());
        self
    }

    /// Sets a one-line description shown under the usage line.
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.meta.about = Some(about.into());
        self
    }

    /// Enables `--version` and records the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.meta.version = Some(version.into());
        self.meta.version_enabled = true;
        self
    }

    /// Enables `--version` without a version string.
    pub fn version_flag(mut self) -> Self {
        self.meta.version_enabled = true;
        self
    }

    /// Enables `-h` / `--help`.
    pub fn help(mut self) -> Self {
        self.meta.help_enabled = true;
        self
    }

    pub fn arg(mut self, declaration: ArgumentDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Validates the declarations and produces the schema.
    ///
    /// # Errors
    ///
    /// Returns [`ArgError::InvalidSchema`] for empty or duplicate names.
    ///
    /// Flag spellings are not checked for collisions. Two declarations may
    /// share a spelling and both bind from it, and a declaration may reuse
    /// `-h`, `--help` or `--version`: when the matching meta flag is enabled
    /// the help or version request takes priority.
    pub fn build(self) -> Result<Schema> {
        let mut names = HashSet::new();

        for decl in &self.declarations {
            if decl.name.trim().is_empty() {
                return Err(ArgError::invalid("argument declaration with an empty name"));
            }
            if !names.insert(decl.name.as_str()) {
                return Err(ArgError::invalid(format!(
                    "argument '{}' is declared more than once",
                    decl.name
                )));
            }
        }

        Ok(Schema {
            meta: self.meta,
            declarations: self.declarations,
        })
    }
}

/// A struct whose fields can be populated from command-line arguments.
///
/// Usually derived with `#[derive(Args)]`; see the crate documentation for
/// the attribute syntax.
///
/// # Manual Implementation
///
/// ```
/// use argmark::{ArgError, ArgSlot, ArgumentDeclaration, Args, Schema, ValueType};
/// use once_cell::sync::OnceCell;
///
/// #[derive(Default)]
/// struct Cli {
///     name: String,
///     verbose: bool,
/// }
///
/// impl Args for Cli {
///     fn schema() -> Result<&'static Schema, ArgError> {
///         static SCHEMA: OnceCell<Schema> = OnceCell::new();
///         SCHEMA.get_or_try_init(|| {
///             Schema::builder()
///                 .name("cli")
///                 .arg(ArgumentDeclaration::new("name", ValueType::String).required())
///                 .arg(ArgumentDeclaration::new("verbose", ValueType::Bool).auto_long())
///                 .build()
///         })
///     }
///
///     fn slot_mut(&mut self, name: &str) -> Option<&mut dyn ArgSlot> {
///         match name {
///             "name" => Some(&mut self.name),
///             "verbose" => Some(&mut self.verbose),
///             _ => None,
///         }
///     }
/// }
///
/// let mut cli = Cli::default();
/// argmark::parse_from(&mut cli, ["Alice", "--verbose"]).unwrap();
/// assert_eq!(cli.name, "Alice");
/// assert!(cli.verbose);
/// ```
pub trait Args {
    /// Returns the schema for this type, built once and cached.
    fn schema() -> Result<&'static Schema>
    where
        Self: Sized;

    /// Returns the value slot for the declaration called `name`.
    fn slot_mut(&mut self, name: &str) -> Option<&mut dyn ArgSlot>;
}
