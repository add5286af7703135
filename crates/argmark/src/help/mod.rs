//! Help rendering for argument schemas.
//!
//! - [`render_help`]: Render help text for a schema
//! - [`HelpConfig`]: Configuration for help rendering
//! - [`HelpTheme`]: Named styles applied by the template's `style` filter
//! - [`default_help_theme`]: Returns the default theme for help

mod config;
mod data;
mod render;

pub use config::{default_help_theme, HelpConfig, HelpTheme};
pub use render::render_help;
