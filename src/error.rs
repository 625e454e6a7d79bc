// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Notepad return `error::Result<T>`.  No panics
// in production paths; errors surface as modal warnings (see
// `platform::Shell::warn`), so the `Display` text is what the user reads.

use std::io;

use thiserror::Error;

/// Every error that Notepad can produce.
#[derive(Debug, Error)]
pub enum NotepadError {
    /// Reading a document from disk failed.
    #[error("Couldn't open the file: {0}")]
    Open(#[source] io::Error),

    /// Writing a document to disk failed.
    #[error("Couldn't save the file: {0}")]
    Save(#[source] io::Error),

    /// The print dialog was rejected or no printer could be reached.
    #[error("Cannot access printer")]
    PrinterUnavailable,

    /// A Win32 API call returned a failure code.
    #[error("{function} failed (error {code:#010x})")]
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },
}

// Convert a windows-crate error (HRESULT) directly into a NotepadError so that
// `?` can be used on `windows::core::Result<T>` throughout the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for NotepadError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NotepadError>;
