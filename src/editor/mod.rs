// ── Editor component abstraction ──────────────────────────────────────────────
//
// `TextEditor` is the only view the command core (`app`) has of the text
// buffer.  The buffer itself lives inside the editor control; the core reads
// and writes it through these methods and never caches it.
//
// On Windows the implementation is `scintilla::ScintillaView`.  Tests use an
// in-memory stand-in.

#[cfg(windows)]
pub mod scintilla;

use crate::error::Result;

/// A text-display-and-edit control that owns the document buffer.
///
/// Methods take `&self`: the control keeps its own state behind a window
/// handle, exactly as a Win32 child window does.
pub(crate) trait TextEditor {
    /// Printer target produced by the platform print dialog.
    type Printer;

    /// The whole buffer as text.
    fn text(&self) -> String;

    /// Replace the whole buffer and start a fresh undo history.
    fn set_text(&self, text: &str);

    /// `true` when the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    fn copy(&self);
    fn cut(&self);
    fn paste(&self);
    fn undo(&self);
    fn redo(&self);

    /// Render the whole buffer to `printer`, one or more pages.
    fn print(&self, printer: &Self::Printer) -> Result<()>;
}
