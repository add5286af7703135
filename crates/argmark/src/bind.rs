//! The binder: matches declarations against classified tokens and writes
//! coerced values into the target's slots.
//!
//! For each declaration, in declaration order:
//!
//! 1. Named declarations look up `--long` then `-short` in the flag values.
//!    If neither carries a value but either spelling is present, the raw
//!    value is `"true"`.
//! 2. Positional declarations take the next unconsumed positional token.
//! 3. With no raw value, a required declaration fails the parse with
//!    [`ArgError::MissingRequiredArgument`]; an optional one keeps its
//!    current value.
//! 4. A raw value is coerced to the declared type. Malformed literals leave
//!    the slot untouched without an error.
//!
//! Binding is fail-fast and not transactional: fields bound before an error
//! keep their new values.

use std::collections::HashSet;

use tracing::debug;

use crate::dispatch::{HELP_SPELLINGS, VERSION_SPELLING};
use crate::error::{ArgError, Result};
use crate::schema::{ArgKind, Args, ArgumentDeclaration, Schema};
use crate::tokens::ClassifiedTokens;

/// Checks that the target exposes a slot for every declaration.
///
/// Run before binding so a mismatched manual [`Args`] implementation fails
/// without mutating anything.
pub fn validate_slots<T: Args + ?Sized>(schema: &Schema, target: &mut T) -> Result<()> {
    for decl in schema.declarations() {
        if target.slot_mut(decl.name()).is_none() {
            return Err(ArgError::invalid(format!(
                "no value slot for argument '{}'",
                decl.name()
            )));
        }
    }
    Ok(())
}

/// Finds the raw value for a named declaration.
///
/// Long spelling beats short spelling; a value beats bare presence.
fn named_value<'a>(decl: &ArgumentDeclaration, tokens: &'a ClassifiedTokens) -> Option<&'a str> {
    let spellings = decl.spellings();

    if let Some(value) = spellings.iter().find_map(|s| tokens.value_of(s)) {
        return Some(value);
    }
    if spellings.iter().any(|s| tokens.is_present(s)) {
        return Some("true");
    }
    None
}

/// Binds every declaration of `schema` into `target`.
///
/// # Errors
///
/// - [`ArgError::MissingRequiredArgument`] when a required declaration has no value.
/// - [`ArgError::UnsupportedFieldType`] when a slot cannot hold the declared type.
/// - [`ArgError::InvalidSchema`] when the target has no slot for a declaration.
pub fn bind<T: Args + ?Sized>(
    schema: &Schema,
    target: &mut T,
    tokens: &ClassifiedTokens,
) -> Result<()> {
    let mut positionals = tokens.positionals().iter();

    for decl in schema.declarations() {
        let raw = match decl.kind() {
            ArgKind::Named => named_value(decl, tokens),
            ArgKind::Positional => positionals.next().map(String::as_str),
        };

        let Some(raw) = raw else {
            if decl.is_required() {
                return Err(ArgError::MissingRequiredArgument(decl.name().to_string()));
            }
            continue;
        };

        let slot = target.slot_mut(decl.name()).ok_or_else(|| {
            ArgError::invalid(format!("no value slot for argument '{}'", decl.name()))
        })?;

        if slot.value_type() != decl.value_type() {
            return Err(ArgError::UnsupportedFieldType {
                name: decl.name().to_string(),
                type_name: slot.type_name(),
            });
        }

        match decl.value_type().coerce(raw) {
            Some(value) => {
                let coerced = value.value_type();
                if slot.assign_value(value) {
                    debug!(arg = decl.name(), value = raw, ty = %coerced, "bound argument");
                } else {
                    debug!(arg = decl.name(), value = raw, "value out of range, field left unchanged");
                }
            }
            None => {
                debug!(
                    arg = decl.name(),
                    value = raw,
                    expected = %decl.value_type(),
                    "malformed value, field left unchanged"
                );
            }
        }
    }

    let surplus = positionals.len();
    if surplus > 0 {
        debug!(count = surplus, "ignoring surplus positional arguments");
    }
    log_unrecognized_flags(schema, tokens);

    Ok(())
}

fn log_unrecognized_flags(schema: &Schema, tokens: &ClassifiedTokens) {
    let mut known: HashSet<String> = schema
        .declarations()
        .iter()
        .flat_map(ArgumentDeclaration::spellings)
        .collect();
    if schema.meta().help_enabled {
        known.extend(HELP_SPELLINGS.iter().map(|s| s.to_string()));
    }
    if schema.meta().version_enabled {
        known.insert(VERSION_SPELLING.to_string());
    }

    for flag in tokens.flags().filter(|f| !known.contains(*f)) {
        debug!(flag, "ignoring unrecognized flag");
    }
}
