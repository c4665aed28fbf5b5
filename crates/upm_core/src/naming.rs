//! Package name sanitization.

use crate::error::{CoreError, CoreResult};

/// Replace spaces with hyphens. Applied to the package name on every edit.
pub fn hyphenate(value: &str) -> String {
    value.replace(' ', "-")
}

/// Compose the canonical package identifier `com.<author>.<name>`, lower-cased.
pub fn sanitize(name: &str, author_name: &str) -> String {
    format!("com.{}.{}", hyphenate(author_name), hyphenate(name)).to_lowercase()
}

/// Reject values that would place the package root outside its parent
/// directory once joined into the identifier.
pub fn ensure_single_component(field: &str, value: &str) -> CoreResult<()> {
    if value.contains(['/', '\\']) {
        return Err(CoreError::PathSeparator {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
