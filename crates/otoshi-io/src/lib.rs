//! otoshi-io: Browser file intake and Dioxus component library.
//!
//! Provides a drag-and-drop overlay dropzone that wraps application
//! content, a file-picker button, an accepted-type filter, and a
//! shared current-file state that both components forward accepted
//! files into.

pub mod accept;
pub mod analytics;
pub mod components;
pub mod file;
pub mod state;

pub use accept::AcceptFilter;
pub use components::{FileDropzone, FilePicker};
pub use file::{DroppedFile, FileReadError};
pub use state::{FileState, provide_file_state, use_file_state};

/// The library stylesheet.
///
/// Inline it once near the document root, e.g.
/// `style { dangerous_inner_html: otoshi_io::STYLE }`.  Theming goes
/// through the CSS custom properties declared at the top of the sheet;
/// override them from the host application's own styles.
pub const STYLE: &str = include_str!("style.css");
