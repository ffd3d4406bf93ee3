//! File-name classification shared by the tree icons and the syntax table.

/// Lowercase text after the last `.`; a name without a dot is its own
/// extension.
pub(crate) fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
