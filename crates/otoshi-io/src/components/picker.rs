//! File picker button.
//!
//! The explicit-selection counterpart to the dropzone: a styled label
//! wrapping a hidden `<input type="file">`.  Validation and forwarding
//! go through the same [`AcceptFilter`] / [`FileState`] path, but the
//! picker surfaces problems inline since it has its own UI to do so.

use dioxus::html::HasFileData;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

use crate::accept::AcceptFilter;
use crate::analytics;
use crate::file::DroppedFile;
use crate::state::use_file_state;

/// Props for the [`FilePicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilePickerProps {
    /// Accepted MIME types and filename suffixes; also rendered as the
    /// input's `accept` attribute.
    accept: AcceptFilter,
    /// Button label.
    #[props(default = String::from("Choose File"))]
    label: String,
}

/// A file-picker button forwarding into the shared file state.
///
/// The input's `accept` attribute narrows the browser's file dialog,
/// but that is advisory only, so the selection is validated against
/// the filter again before it is read.  Unsupported selections and
/// read failures are shown inline below the button.
///
/// Must be rendered below a
/// [`provide_file_state`](crate::provide_file_state) call.
#[component]
pub fn FilePicker(props: FilePickerProps) -> Element {
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut files = use_file_state();

    let accept_attr = props.accept.accept_attr();

    let accept = props.accept.clone();
    let handle_files = move |evt: FormEvent| {
        let accept = accept.clone();
        async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let mime = file.content_type().unwrap_or_default();
            if !accept.matches(&mime, &name) {
                error.set(Some(format!("Unsupported file type: {name}")));
                return;
            }
            match DroppedFile::read(&file).await {
                Ok(picked) => {
                    filename.set(Some(picked.name().to_string()));
                    error.set(None);
                    analytics::track_pick(picked.extension());
                    files.set(picked);
                }
                Err(e) => {
                    warn!("failed to read picked file {name:?}: {e}");
                    error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    rsx! {
        div { class: "otoshi-picker",
            if let Some(ref name) = filename() {
                p { class: "otoshi-picker-loaded", "Loaded: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "otoshi-picker-error", "{err}" }
            }

            label { class: "otoshi-picker-button",
                Icon { icon: LdUpload, width: 16, height: 16 }
                input {
                    r#type: "file",
                    accept: "{accept_attr}",
                    class: "otoshi-picker-input",
                    onchange: handle_files,
                }
                "{props.label}"
            }
        }
    }
}
