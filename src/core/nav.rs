//! # Navigation
//!
//! Route entries and the active-link resolver that drives the header title.
//!
//! The resolver is pure: given the current route and an ordered list of
//! entries, it picks the one to highlight. Order matters — entries should be
//! listed most-specific-first when their paths overlap, because the first
//! match wins. Not matching anything is a normal outcome, not an error; the
//! header falls back to the app label.

use serde::{Deserialize, Serialize};

/// A labeled route used to render navigation UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// The one route that is matched by exact equality only, never by prefix.
///
/// `/social` has sub-routes (feed, friends) whose headers are supplied by
/// their own screens; letting `/social` prefix-match them highlighted the
/// wrong tab. Exact-only is the fix — keep it that way.
pub const EXACT_ONLY_PATH: &str = "/social";

/// Select the entry to highlight for `current_path`.
///
/// The first entry wins for which either the path is exactly equal, or the
/// path is a prefix of `current_path` — except [`EXACT_ONLY_PATH`], which
/// never matches by prefix. Returns `None` when nothing matches.
pub fn resolve_active<'a>(current_path: &str, entries: &'a [NavEntry]) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| {
        if entry.path == current_path {
            return true;
        }
        if entry.path == EXACT_ONLY_PATH {
            return false;
        }
        current_path.starts_with(&entry.path)
    })
}

/// The label to show for `current_path`, or `fallback` when no entry matches.
pub fn active_label<'a>(
    current_path: &str,
    entries: &'a [NavEntry],
    fallback: &'a str,
) -> &'a str {
    resolve_active(current_path, entries)
        .map(|entry| entry.label.as_str())
        .unwrap_or(fallback)
}
