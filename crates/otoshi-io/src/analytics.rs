//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker, during tests, or
//! on non-browser targets).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.  Because the
//! interesting part of an intake event is a user-controlled filename
//! extension, the fragment is sanitized rather than asserted.

use wasm_bindgen::prelude::*;

/// Longest extension fragment kept in an event name.
const MAX_EXTENSION_CHARS: usize = 16;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record a file accepted via drag-and-drop.
///
/// Fires an event named `drop_<ext>` (e.g., `drop_json`), or
/// `drop_none` for files without an extension.
pub fn track_drop(extension: Option<&str>) {
    track_file_event("drop", extension);
}

/// Record a file accepted via the picker.
///
/// Fires an event named `pick_<ext>`, or `pick_none` for files
/// without an extension.
pub fn track_pick(extension: Option<&str>) {
    track_file_event("pick", extension);
}

fn track_file_event(prefix: &str, extension: Option<&str>) {
    let name = format!("{prefix}_{}", sanitize_extension(extension));
    debug_assert!(
        name.len() <= 200,
        "event name exceeds 200-character limit: {name:?}"
    );
    track_event(&name);
}

/// Reduce a filename extension to a safe event-name fragment:
/// lowercase ASCII alphanumerics and underscores, bounded length.
/// Anything else maps to `_`; missing or empty extensions map to
/// `none`.
fn sanitize_extension(extension: Option<&str>) -> String {
    let Some(ext) = extension else {
        return "none".to_string();
    };
    let cleaned: String = ext
        .chars()
        .take(MAX_EXTENSION_CHARS)
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() { c } else { '_' }
        })
        .collect();
    if cleaned.is_empty() {
        "none".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_lowercased() {
        assert_eq!(sanitize_extension(Some("JSON")), "json");
    }

    #[test]
    fn unsafe_characters_become_underscores() {
        assert_eq!(sanitize_extension(Some("c++")), "c__");
        assert_eq!(sanitize_extension(Some("tar.gz")), "tar_gz");
    }

    #[test]
    fn missing_or_empty_extension_maps_to_none() {
        assert_eq!(sanitize_extension(None), "none");
        assert_eq!(sanitize_extension(Some("")), "none");
    }

    #[test]
    fn long_extensions_are_bounded() {
        let long = "x".repeat(500);
        let cleaned = sanitize_extension(Some(&long));
        assert_eq!(cleaned.len(), MAX_EXTENSION_CHARS);
    }
}
