//! Filename derivation for downloaded files.

use url::Url;

use crate::error::{Error, Result};

/// Determine the local filename for a download.
///
/// The `Content-Disposition` `filename=` parameter wins; otherwise the last
/// path segment of the response URL is used. The result must be a bare file
/// name.
pub fn resolve_filename(content_disposition: Option<&str>, url: &Url) -> Result<String> {
    let name = content_disposition
        .and_then(filename_from_content_disposition)
        .or_else(|| filename_from_url(url))
        .ok_or(Error::MissingFilename)?;

    sanitize_filename(&name)
}

/// Extract the `filename=` parameter from a `Content-Disposition` header.
///
/// A quoted value runs to its closing quote, so it may contain `;`. An
/// unquoted value runs up to the next `;`. It is not unescaped.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let pos = header.to_ascii_lowercase().find("filename=")?;
    let value = header[pos + "filename=".len()..].trim_start();

    let filename = if let Some(quoted) = value.strip_prefix('"') {
        let end = quoted.find('"').unwrap_or(quoted.len());
        &quoted[..end]
    } else {
        let end = value.find(';').unwrap_or(value.len());
        value[..end].trim().trim_matches('"')
    };
    if filename.is_empty() {
        None
    } else {
        Some(filename.to_string())
    }
}

/// Last non-empty path segment of a URL, percent-decoded.
pub fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;

    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());

    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Validate that a filename cannot escape the output directory.
///
/// Returns an error if the name contains path separators, null bytes, or is a
/// relative directory reference. The name is otherwise returned unchanged.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::MissingFilename);
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    Ok(name.to_string())
}
