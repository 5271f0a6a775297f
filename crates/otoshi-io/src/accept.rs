//! Accepted-type filter for file intake.
//!
//! An [`AcceptFilter`] holds the list of file types a drop target is
//! willing to take.  Entries are either MIME types (`application/json`,
//! `image/*`) or filename suffixes (`.json`, `*.json`, bare `json`),
//! mirroring what the HTML `accept` attribute understands.

use serde::{Deserialize, Serialize};

/// Accepted MIME types and filename suffixes for a drop target.
///
/// A file matches when **any** entry matches its MIME type or its
/// filename.  An empty filter matches nothing, so a dropzone configured
/// with one discards every drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcceptFilter {
    entries: Vec<String>,
}

impl AcceptFilter {
    /// Build a filter from accepted-type entries.
    ///
    /// Entries containing `/` are treated as MIME types; everything
    /// else as a filename suffix.  Entries are kept verbatim and
    /// normalized at match time, so filters coming out of
    /// deserialization behave the same as constructed ones.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the filter has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of accepted-type entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check a file's MIME type and filename against the filter.
    ///
    /// MIME entries compare ASCII case-insensitively; `type/*` entries
    /// match on the major type.  Suffix entries match the end of the
    /// lowercased filename, so `Data.JSON` passes a `.json` entry.
    /// An empty or unknown `mime` can still match via suffix.
    #[must_use]
    pub fn matches(&self, mime: &str, filename: &str) -> bool {
        let name = filename.to_ascii_lowercase();
        self.entries.iter().any(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                false
            } else if entry.contains('/') {
                mime_matches(entry, mime)
            } else {
                name.ends_with(&normalize_suffix(entry))
            }
        })
    }

    /// Render the filter as an HTML `accept` attribute value.
    ///
    /// Suffix entries are normalized to `.ext` form; MIME entries are
    /// kept as written.  Empty entries are skipped.
    #[must_use]
    pub fn accept_attr(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            if entry.contains('/') {
                parts.push(entry.to_string());
            } else {
                parts.push(normalize_suffix(entry));
            }
        }
        parts.join(",")
    }
}

/// Match a MIME entry against a file's MIME type.
///
/// An unknown (empty) MIME type never matches a MIME entry -- suffix
/// entries are the fallback for files the browser cannot classify.
fn mime_matches(entry: &str, mime: &str) -> bool {
    if mime.is_empty() {
        return false;
    }
    if let Some(major) = entry.strip_suffix("/*") {
        mime.split('/')
            .next()
            .is_some_and(|m| m.eq_ignore_ascii_case(major))
    } else {
        entry.eq_ignore_ascii_case(mime)
    }
}

/// Normalize a suffix entry to lowercased `.ext` form.
///
/// Accepts `.json`, `*.json`, and bare `json` spellings.
fn normalize_suffix(entry: &str) -> String {
    let trimmed = entry.trim_start_matches('*');
    let with_dot = if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    };
    with_dot.to_ascii_lowercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exact_mime_entry_matches() {
        let filter = AcceptFilter::new(["application/json"]);
        assert!(filter.matches("application/json", "payload.bin"));
        assert!(!filter.matches("text/plain", "payload.bin"));
    }

    #[test]
    fn mime_comparison_is_case_insensitive() {
        let filter = AcceptFilter::new(["application/JSON"]);
        assert!(filter.matches("Application/Json", "x"));
    }

    #[test]
    fn mime_family_matches_major_type() {
        let filter = AcceptFilter::new(["image/*"]);
        assert!(filter.matches("image/png", "photo"));
        assert!(filter.matches("image/webp", "photo"));
        assert!(!filter.matches("text/plain", "photo"));
    }

    #[test]
    fn suffix_spellings_are_equivalent() {
        for entry in [".json", "*.json", "json"] {
            let filter = AcceptFilter::new([entry]);
            assert!(
                filter.matches("", "export.json"),
                "entry {entry:?} should match export.json"
            );
        }
    }

    #[test]
    fn filename_match_is_case_insensitive() {
        let filter = AcceptFilter::new([".json"]);
        assert!(filter.matches("", "DATA.JSON"));
    }

    #[test]
    fn unknown_mime_still_matches_by_suffix() {
        let filter = AcceptFilter::new(["application/json", ".json"]);
        assert!(filter.matches("", "settings.json"));
    }

    #[test]
    fn unknown_mime_never_matches_mime_entries() {
        let filter = AcceptFilter::new(["application/json", "image/*"]);
        assert!(!filter.matches("", "settings.json"));
    }

    #[test]
    fn filename_without_extension_needs_mime() {
        let filter = AcceptFilter::new([".json"]);
        assert!(!filter.matches("application/json", "README"));
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = AcceptFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
        assert!(!filter.matches("text/plain", "notes.txt"));
    }

    #[test]
    fn whitespace_and_empty_entries_are_ignored() {
        let filter = AcceptFilter::new(["  .json  ", ""]);
        assert!(filter.matches("", "a.json"));
        assert!(!filter.matches("", "a.txt"));
    }

    #[test]
    fn accept_attr_normalizes_suffix_entries() {
        let filter = AcceptFilter::new(["*.JSON", "csv", "image/*", ""]);
        assert_eq!(filter.accept_attr(), ".json,.csv,image/*");
    }

    #[test]
    fn serde_round_trip_preserves_matching() {
        let filter = AcceptFilter::new(["application/json", "*.csv"]);
        let json = serde_json::to_string(&filter).unwrap();
        let restored: AcceptFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, filter);
        assert!(restored.matches("", "table.CSV"));
        assert!(restored.matches("application/json", "blob"));
    }
}
