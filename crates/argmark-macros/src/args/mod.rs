//! Implementation of the `#[derive(Args)]` macro.
//!
//! Field and container annotations are parsed into an argument schema
//! builder chain plus a name-to-field slot table.

mod attrs;
mod derive;

pub use derive::args_derive_impl;
