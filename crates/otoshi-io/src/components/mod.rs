//! Dioxus UI components for otoshi.
//!
//! Provides the drag-and-drop overlay dropzone and the file-picker
//! button.  Both validate against the same [`AcceptFilter`](crate::AcceptFilter)
//! and forward accepted files into the shared
//! [`FileState`](crate::FileState).

mod dropzone;
mod picker;

pub use dropzone::FileDropzone;
pub use picker::FilePicker;
