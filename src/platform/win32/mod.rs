// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is one of exactly two modules in the codebase where `unsafe` code is
// permitted (the other is `editor::scintilla`).  Every `unsafe` block MUST
// carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod dialogs; // common open/save dialogs and message boxes
pub mod print; // print dialog and printer device context
pub mod shell; // `platform::Shell` over the dialogs above
pub mod window; // main window, WndProc, message loop

use windows::Win32::Foundation::GetLastError;

use crate::error::NotepadError;

/// Encode `s` as a null-terminated UTF-16 buffer for `PCWSTR` arguments.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Capture the current Win32 last-error code and wrap it in a `NotepadError`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(function: &'static str) -> NotepadError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    NotepadError::Win32 {
        function,
        code: code.0,
    }
}
