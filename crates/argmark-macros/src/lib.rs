//! Proc macros for argmark.
//!
//! This crate provides the [`Args`] derive, which turns an annotated struct
//! into an argument schema and a field binding table. Use it through the
//! `argmark` re-export rather than depending on this crate directly.
//!
//! For working examples, see `argmark/tests/derive.rs`.

mod args;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Args` trait for argument structs.
///
/// The generated implementation builds the struct's `Schema` once, on first
/// use, and maps each declaration name to its field for binding.
///
/// # Container Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `name = "..."` | Program name (default: lowercased struct name) |
/// | `about = "..."` | Program description |
/// | `version = "..."` | Enable `--version` with this string |
/// | `version` | Enable `--version` without a string |
/// | `help` | Enable `-h` / `--help` |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `short` / `short = 'x'` | Short flag, derived or explicit |
/// | `long` / `long = "..."` | Long flag, derived or explicit |
/// | `required` | Must be supplied |
/// | `desc = "..."` | Help description |
/// | `skip` | Exclude this field |
///
/// A field with neither `short` nor `long` is positional. Every non-skipped
/// field type must implement `argmark::ArgValue`.
///
/// # Example
///
/// ```ignore
/// use argmark::Args;
///
/// #[derive(Args, Default)]
/// #[argmark(name = "mytool", version = "1.2.3", help)]
/// struct Cli {
///     #[arg(short, long, desc = "Verbose output")]
///     verbose: bool,
///
///     #[arg(required, desc = "Input file")]
///     file: String,
///
///     #[arg(skip)]
///     cache: Vec<String>,
/// }
/// ```
///
/// # Compile-Time Errors
///
/// - Applied to an enum, union, tuple struct or generic struct
/// - Unknown attribute keys
/// - `short` values longer than one character
#[proc_macro_derive(Args, attributes(argmark, arg))]
pub fn args_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    args::args_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
