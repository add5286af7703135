//! Version string rendering.

use crate::schema::Schema;

/// Returned when a schema enables `--version` without declaring a version.
pub const UNSPECIFIED_VERSION: &str = "No version specified";

/// Returns the declared version string, or [`UNSPECIFIED_VERSION`].
pub fn render_version(schema: &Schema) -> String {
    schema
        .meta()
        .version
        .clone()
        .unwrap_or_else(|| UNSPECIFIED_VERSION.to_string())
}
