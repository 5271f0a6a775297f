//! Shared current-file state.
//!
//! The dropzone and picker forward accepted files into a
//! [`FileState`] provided through component context, so any part of
//! the application can react to "the current file" without prop
//! drilling.  Provide it once at the root, consume it anywhere below.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::file::DroppedFile;

/// Handle to the shared current-file slot.
///
/// Cheap to copy; clones of the handle all point at the same signal.
/// Files are kept behind [`Rc`] so reading the state never copies the
/// byte buffer.
#[derive(Clone, Copy)]
pub struct FileState {
    current: Signal<Option<Rc<DroppedFile>>>,
}

/// Register a [`FileState`] in context and return it.
///
/// Call once from the application root component, above every
/// [`FileDropzone`](crate::FileDropzone) or
/// [`FilePicker`](crate::FilePicker).
pub fn provide_file_state() -> FileState {
    use_context_provider(|| FileState {
        current: Signal::new(None),
    })
}

/// Consume the [`FileState`] registered by [`provide_file_state`].
///
/// # Panics
///
/// Panics when no ancestor component has called
/// [`provide_file_state`].
#[must_use]
pub fn use_file_state() -> FileState {
    use_context()
}

impl FileState {
    /// The current file, if one has been accepted.
    ///
    /// Reactive: components reading this re-render when it changes.
    #[must_use]
    pub fn current(&self) -> Option<Rc<DroppedFile>> {
        self.current.cloned()
    }

    /// Replace the current file.
    pub fn set(&mut self, file: DroppedFile) {
        self.current.set(Some(Rc::new(file)));
    }

    /// Drop the current file, returning the state to empty.
    pub fn clear(&mut self) {
        self.current.set(None);
    }
}
