// ── Common dialogs ─────────────────────────────────────────────────────────────
//
// Thin wrappers around the Win32 common-dialog and message-box APIs.  The file
// pickers return `Some(path)` on user confirmation and `None` on cancel or
// error, so a cancelled dialog can never be mistaken for an empty path.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use std::path::{Path, PathBuf};

use windows::{
    core::{PCWSTR, PWSTR},
    Win32::{
        Foundation::HWND,
        UI::{
            Controls::Dialogs::{
                GetOpenFileNameW, GetSaveFileNameW, OFN_FILEMUSTEXIST, OFN_HIDEREADONLY,
                OFN_OVERWRITEPROMPT, OFN_PATHMUSTEXIST, OPENFILENAMEW,
            },
            WindowsAndMessaging::{
                MessageBoxW, IDYES, MB_ICONERROR, MB_ICONWARNING, MB_OK, MB_YESNO,
                MESSAGEBOX_STYLE,
            },
        },
    },
};

use super::wide;

// ── Buffer size ───────────────────────────────────────────────────────────────

/// Maximum path length in `WCHAR`s, including the null terminator.
/// `MAX_PATH` (260) is too short for modern Windows paths; use 32 768 which
/// is the documented maximum for `\\?\` extended paths.
const PATH_BUF_LEN: usize = 32_768;

/// Null-separated display/pattern pairs ending with a double null.
const FILTER: &str = "All Files (*.*)\0*.*\0Text Files (*.txt)\0*.txt\0\0";

// ── Open dialog ───────────────────────────────────────────────────────────────

/// Show the standard "Open file" dialog.
///
/// Returns the chosen path, or `None` if the user cancelled.
pub(crate) fn show_open_dialog(hwnd_owner: HWND) -> Option<PathBuf> {
    let mut buf = vec![0u16; PATH_BUF_LEN];
    let filter: Vec<u16> = FILTER.encode_utf16().collect();
    let title = wide("Open file");

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: hwnd_owner,
        lpstrFilter: PCWSTR(filter.as_ptr()),
        lpstrFile: PWSTR(buf.as_mut_ptr()),
        nMaxFile: PATH_BUF_LEN as u32,
        lpstrTitle: PCWSTR(title.as_ptr()),
        Flags: OFN_FILEMUSTEXIST | OFN_PATHMUSTEXIST | OFN_HIDEREADONLY,
        ..Default::default()
    };

    // SAFETY: `ofn` is fully initialised; `buf`, `filter` and `title` outlive
    // this call.  GetOpenFileNameW reads and writes only within the buffers we
    // provided.  Called on the UI thread (required for modal dialogs).
    let ok = unsafe { GetOpenFileNameW(&mut ofn) };

    ok.as_bool().then(|| path_from_buf(&buf))
}

// ── Save dialog ───────────────────────────────────────────────────────────────

/// Show the standard "Save as" dialog, pre-filled with `current` if given.
///
/// Returns the chosen path, or `None` if cancelled.
pub(crate) fn show_save_dialog(hwnd_owner: HWND, current: Option<&Path>) -> Option<PathBuf> {
    let default_name = current
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut buf: Vec<u16> = default_name
        .encode_utf16()
        .chain(std::iter::repeat(0))
        .take(PATH_BUF_LEN)
        .collect();
    // Guarantee termination even for an absurdly long default name.
    buf[PATH_BUF_LEN - 1] = 0;

    let filter: Vec<u16> = FILTER.encode_utf16().collect();
    let title = wide("Save as");

    let mut ofn = OPENFILENAMEW {
        lStructSize: std::mem::size_of::<OPENFILENAMEW>() as u32,
        hwndOwner: hwnd_owner,
        lpstrFilter: PCWSTR(filter.as_ptr()),
        lpstrFile: PWSTR(buf.as_mut_ptr()),
        nMaxFile: PATH_BUF_LEN as u32,
        lpstrTitle: PCWSTR(title.as_ptr()),
        Flags: OFN_OVERWRITEPROMPT | OFN_PATHMUSTEXIST,
        ..Default::default()
    };

    // SAFETY: same invariants as show_open_dialog above.
    let ok = unsafe { GetSaveFileNameW(&mut ofn) };

    ok.as_bool().then(|| path_from_buf(&buf))
}

// ── Message boxes ─────────────────────────────────────────────────────────────

/// Ask a Yes/No question.  Returns `true` for Yes.
pub(crate) fn ask_yes_no(hwnd_owner: HWND, caption: &str, question: &str) -> bool {
    message_box(hwnd_owner, caption, question, MB_YESNO | MB_ICONWARNING) == IDYES.0
}

/// Show a modal warning with a single OK button.
pub(crate) fn show_warning(hwnd_owner: HWND, caption: &str, message: &str) {
    message_box(hwnd_owner, caption, message, MB_OK | MB_ICONWARNING);
}

/// Show an ownerless error box.  Used by `main()` when startup fails.
pub(crate) fn show_error(caption: &str, message: &str) {
    message_box(HWND::default(), caption, message, MB_OK | MB_ICONERROR);
}

fn message_box(hwnd_owner: HWND, caption: &str, text: &str, style: MESSAGEBOX_STYLE) -> i32 {
    let text_wide = wide(text);
    let caption_wide = wide(caption);
    // SAFETY: both buffers are valid null-terminated UTF-16 strings that remain
    // allocated for the duration of the MessageBoxW call.  A null owner is
    // allowed and yields an unowned dialog.
    unsafe {
        MessageBoxW(
            hwnd_owner,
            PCWSTR(text_wide.as_ptr()),
            PCWSTR(caption_wide.as_ptr()),
            style,
        )
    }
    .0
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Convert a null-terminated UTF-16 buffer to a `PathBuf`.
fn path_from_buf(buf: &[u16]) -> PathBuf {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    PathBuf::from(String::from_utf16_lossy(&buf[..len]))
}
