//! Drag-and-drop overlay dropzone.
//!
//! [`FileDropzone`] wraps arbitrary content and turns the whole area
//! into a drop target.  While a drag with a payload is over it, a
//! full-viewport overlay invites the drop; on drop, the first file is
//! validated against the configured [`AcceptFilter`] and forwarded to
//! the shared [`FileState`](crate::FileState).  Non-matching and empty
//! drops are discarded without user-visible feedback.

use dioxus::html::HasFileData;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::accept::AcceptFilter;
use crate::analytics;
use crate::file::DroppedFile;
use crate::state::use_file_state;

/// Balance of drag-enter/leave events over the dropzone subtree.
///
/// Browsers fire a fresh enter/leave pair for every child element the
/// cursor crosses, so a plain boolean flickers off while moving
/// between children.  The drag has truly left only when the balance
/// returns to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct DragDepth(u32);

impl DragDepth {
    fn enter(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Returns `true` when the drag has fully left the subtree.
    fn leave(&mut self) -> bool {
        self.0 = self.0.saturating_sub(1);
        self.0 == 0
    }

    fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Props for the [`FileDropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileDropzoneProps {
    /// Accepted MIME types and filename suffixes.
    accept: AcceptFilter,
    /// Prompt shown in the overlay while a drag is over the zone.
    drop_text: String,
    /// Content wrapped by the dropzone.
    children: Element,
}

/// A drag-and-drop zone wrapping the given children.
///
/// Tracks drag-enter/leave with a reentrant counter so enter/leave
/// pairs from nested child elements do not hide the overlay while the
/// cursor is still inside.  On drop, only the first file is
/// considered: if it matches `accept` it is read and stored in the
/// shared file state, otherwise it is silently ignored.
///
/// Must be rendered below a
/// [`provide_file_state`](crate::provide_file_state) call.
#[component]
pub fn FileDropzone(props: FileDropzoneProps) -> Element {
    let mut depth = use_signal(DragDepth::default);
    let mut dragging = use_signal(|| false);
    let mut files = use_file_state();

    let accept = props.accept.clone();
    let handle_drop = move |evt: DragEvent| {
        let accept = accept.clone();
        async move {
            evt.prevent_default();
            evt.stop_propagation();
            dragging.set(false);
            depth.write().reset();

            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();
            let mime = file.content_type().unwrap_or_default();
            if !accept.matches(&mime, &name) {
                debug!("discarding dropped file {name:?} ({mime:?}): not an accepted type");
                return;
            }
            match DroppedFile::read(&file).await {
                Ok(dropped) => {
                    analytics::track_drop(dropped.extension());
                    files.set(dropped);
                }
                Err(e) => warn!("failed to read dropped file {name:?}: {e}"),
            }
        }
    };

    rsx! {
        div {
            class: "otoshi-dropzone",
            ondragenter: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                depth.write().enter();
                if drag_has_payload(&evt) {
                    dragging.set(true);
                }
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                if depth.write().leave() {
                    dragging.set(false);
                }
            },
            ondragover: move |evt: DragEvent| {
                // Without this the browser navigates to the dropped
                // file instead of delivering a drop event.
                evt.prevent_default();
                evt.stop_propagation();
            },
            ondrop: handle_drop,

            if dragging() {
                div { class: "otoshi-overlay",
                    div { class: "otoshi-overlay-scrim" }
                    div { class: "otoshi-overlay-panel",
                        p { class: "otoshi-overlay-text", "{props.drop_text}" }
                    }
                }
            }

            {props.children}
        }
    }
}

/// Whether the drag carries any payload items.
///
/// File contents are not readable during drag-enter, but the
/// `DataTransfer` item list length is.  Renderers that expose no
/// platform event are assumed to carry a payload so the overlay still
/// appears.
fn drag_has_payload(evt: &DragEvent) -> bool {
    evt.data()
        .downcast::<web_sys::DragEvent>()
        .and_then(web_sys::DragEvent::data_transfer)
        .is_none_or(|transfer| transfer.items().length() > 0)
}

#[cfg(test)]
mod tests {
    use super::DragDepth;

    #[test]
    fn nested_children_do_not_end_the_drag() {
        let mut depth = DragDepth::default();
        depth.enter(); // container
        depth.enter(); // child element
        assert!(
            !depth.leave(),
            "leaving a child must keep the drag active"
        );
        assert!(depth.leave(), "leaving the container ends the drag");
    }

    #[test]
    fn deeply_nested_sequences_balance_out() {
        let mut depth = DragDepth::default();
        for _ in 0..5 {
            depth.enter();
        }
        for _ in 0..4 {
            assert!(!depth.leave());
        }
        assert!(depth.leave());
    }

    #[test]
    fn unbalanced_leave_saturates_at_zero() {
        let mut depth = DragDepth::default();
        assert!(depth.leave(), "leave on an idle counter reports gone");
        depth.enter();
        assert!(depth.leave(), "saturation must not underflow");
    }

    #[test]
    fn reset_clears_any_depth() {
        let mut depth = DragDepth::default();
        depth.enter();
        depth.enter();
        depth.reset();
        assert_eq!(depth, DragDepth::default());
        depth.enter();
        assert!(depth.leave());
    }
}
