//! Prefix-based version resolution against the loaded catalog.

use thiserror::Error;

use crate::catalog::{Catalog, Os};
use crate::version::{is_valid_version, version_less_than};

/// Why a lookup produced no URL. All variants surface to clients as the
/// same 404 "not found"; the distinction exists for logs and tests only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Path OS segment is not in the recognized set.
    #[error("unrecognized os segment")]
    InvalidOs,
    /// Version segment is empty or contains characters outside [0-9.].
    #[error("version segment is not digits-and-dots")]
    InvalidVersionFormat,
    /// No catalog key matched, or the matched entry has no download URL.
    #[error("no matching catalog entry with a download URL")]
    NoMatchingEntry,
}

/// Resolves `(os, version)` to the download URL of the best-matching
/// catalog key.
///
/// An exact key match wins immediately. Otherwise every key with
/// `version` as a literal string prefix competes, and
/// [`version_less_than`] decides replacement; since that comparator
/// returns true on equality, the last-scanned key among numerically
/// equal candidates wins. Prefix matching is lexical, not numeric:
/// "1.2" matches the key "1.20.0".
pub fn resolve<'a>(
    catalog: &'a Catalog,
    os: &str,
    version: &str,
) -> Result<&'a str, ResolveError> {
    let os = Os::parse(os).ok_or(ResolveError::InvalidOs)?;
    if !is_valid_version(version) {
        return Err(ResolveError::InvalidVersionFormat);
    }

    let table = catalog.for_os(os);
    let mut best = "";
    for key in table.keys().map(String::as_str) {
        if key == version {
            best = key;
            break;
        }
        if key.starts_with(version) && version_less_than(best, key) {
            best = key;
        }
    }

    table
        .get(best)
        .and_then(|info| info.download_url.as_deref())
        .filter(|url| !url.is_empty())
        .ok_or(ResolveError::NoMatchingEntry)
}
