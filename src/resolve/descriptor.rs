//! Reading the application identifier out of an AIR application descriptor.

use crate::error::ResolveError;
use crate::fs::FileSystem;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Find the application `<id>` in descriptor XML.
///
/// Commented-out elements are ignored, since descriptor templates often keep
/// an example `<id>` inside a comment.
pub fn find_application_id(content: &str) -> Option<String> {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();

    let comment_re = COMMENT_REGEX.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));
    let id_re =
        ID_REGEX.get_or_init(|| Regex::new(r"<id>\s*([A-Za-z0-9.\-]+)\s*</id>").expect("Invalid id regex"));

    let content = comment_re.replace_all(content, "");
    id_re
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Read the descriptor at `path` and extract its identifier.
///
/// A read failure is fatal. A readable descriptor without a usable `<id>`
/// yields `Ok(None)`.
pub fn read_application_id(fs: &dyn FileSystem, path: &Path) -> Result<Option<String>, ResolveError> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| ResolveError::DescriptorRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(find_application_id(&content))
}
