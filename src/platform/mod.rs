// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface that the rest of the codebase uses to talk
// to the OS shell: file pickers, message boxes, the window title and the print
// dialog.  No `unsafe` lives here; all Win32 FFI is confined to the `win32`
// sub-module and never leaks outward.

use std::path::{Path, PathBuf};

#[cfg(windows)]
pub mod win32;

/// Modal UI services owned by the main window.
///
/// Every method blocks until the user answers.  A cancelled picker returns
/// `None`, never an empty path.
pub(crate) trait Shell {
    /// Printer target handed to `TextEditor::print`.
    type Printer;

    /// Ask for a file to open.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a destination, pre-filled with `current` when there is one.
    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf>;

    /// Ask whether unsaved changes should be saved.  `true` means Yes.
    fn confirm_save_changes(&mut self) -> bool;

    /// Show a modal warning.
    fn warn(&mut self, message: &str);

    /// Replace the main window's title bar text.
    fn set_title(&mut self, title: &str);

    /// Show the print dialog.  `None` when the user rejected it or no
    /// printer could be reached.
    fn select_printer(&mut self) -> Option<Self::Printer>;
}
