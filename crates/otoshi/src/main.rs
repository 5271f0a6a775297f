use std::rc::Rc;

use dioxus::prelude::*;
use otoshi_io::{AcceptFilter, DroppedFile, FileDropzone, FilePicker, FileState, provide_file_state};

/// File types the inspector accepts.
const ACCEPTED_TYPES: &[&str] = &[
    "application/json",
    "text/*",
    ".json",
    ".csv",
    ".txt",
    ".md",
    ".log",
    ".toml",
];

/// Longest text preview shown for a file, in bytes.
const PREVIEW_LIMIT: usize = 4096;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Provides the shared file state, wraps the whole page in the drop
/// overlay, and renders either a placeholder or the details card for
/// the current file.
fn app() -> Element {
    let files = provide_file_state();
    let accept = AcceptFilter::new(ACCEPTED_TYPES.iter().copied());

    rsx! {
        style { dangerous_inner_html: otoshi_io::STYLE }
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        FileDropzone {
            accept: accept.clone(),
            drop_text: "Drop file to inspect",

            div { class: "app-shell",
                header { class: "app-header",
                    h1 { "otoshi" }
                    p { class: "app-subtitle",
                        "Drop a text or data file anywhere on the page to inspect it"
                    }
                }

                main { class: "app-content",
                    if let Some(ref file) = files.current() {
                        {file_card(file, files)}
                    } else {
                        div { class: "app-placeholder",
                            p { "No file yet. Drop one anywhere, or use the picker below." }
                        }
                    }
                }

                footer { class: "app-footer",
                    FilePicker {
                        accept: accept.clone(),
                        label: "Choose File",
                    }
                }
            }
        }
    }
}

/// Details card for the current file.
fn file_card(file: &Rc<DroppedFile>, mut files: FileState) -> Element {
    let size = format_size(file.len());
    let mime = if file.mime().is_empty() {
        "unknown"
    } else {
        file.mime()
    };
    let preview = file.text().map(|text| truncate_utf8(text, PREVIEW_LIMIT));

    rsx! {
        div { class: "file-card",
            div { class: "file-card-header",
                h2 { "{file.name()}" }
                button {
                    class: "file-card-clear",
                    onclick: move |_| files.clear(),
                    "Clear"
                }
            }

            dl { class: "file-card-meta",
                dt { "Type" }
                dd { "{mime}" }
                dt { "Size" }
                dd { "{size}" }
                if let Some(ext) = file.extension() {
                    dt { "Extension" }
                    dd { "{ext}" }
                }
            }

            if let Some((text, truncated)) = preview {
                section { class: "file-card-preview",
                    h3 { "Preview" }
                    pre { "{text}" }
                    if truncated {
                        p { class: "file-card-note",
                            "Preview truncated to the first {PREVIEW_LIMIT} bytes"
                        }
                    }
                }
            } else {
                p { class: "file-card-note", "Binary content, no text preview" }
            }
        }
    }
}

/// Cut `text` to at most `limit` bytes on a char boundary.
///
/// Returns the (possibly shortened) slice and whether anything was cut.
fn truncate_utf8(text: &str, limit: usize) -> (&str, bool) {
    if text.len() <= limit {
        return (text, false);
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], true)
}

/// Human-readable byte size: `842 B`, `12.3 KiB`, `4.0 MiB`.
#[allow(clippy::cast_precision_loss)]
fn format_size(len: usize) -> String {
    if len < 1024 {
        return format!("{len} B");
    }
    let mut value = len as f64 / 1024.0;
    let mut unit = "KiB";
    for next in ["MiB", "GiB"] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sizes_stay_in_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn sizes_scale_through_units() {
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(1024 * 1024), "1.0 MiB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0 GiB");
    }

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate_utf8("hello", 10), ("hello", false));
        assert_eq!(truncate_utf8("hello", 5), ("hello", false));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "éé" is four bytes; a limit of three lands mid-char.
        let (cut, truncated) = truncate_utf8("éé", 3);
        assert!(truncated);
        assert_eq!(cut, "é");
    }
}
