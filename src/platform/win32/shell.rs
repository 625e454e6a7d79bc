// ── Win32 shell services ──────────────────────────────────────────────────────
//
// `Win32Shell` implements `platform::Shell` for one owner window by routing
// each request to the matching common dialog or message box.

#![allow(unsafe_code)]

use std::path::{Path, PathBuf};

use windows::{core::PCWSTR, Win32::Foundation::HWND, Win32::UI::WindowsAndMessaging::SetWindowTextW};

use tracing::warn;

use super::{dialogs, print, wide};
use crate::platform::Shell;

/// Caption of every warning and question box.
const WARNING_CAPTION: &str = "Warning";

/// Question asked before discarding a modified buffer.
const SAVE_CHANGES_QUESTION: &str = "File has unsaved changes\n\nSave?";

/// Modal services for the main window `hwnd`.
pub(crate) struct Win32Shell {
    hwnd: HWND,
}

impl Win32Shell {
    pub(crate) fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl Shell for Win32Shell {
    type Printer = print::PrinterDc;

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        dialogs::show_open_dialog(self.hwnd)
    }

    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf> {
        dialogs::show_save_dialog(self.hwnd, current)
    }

    fn confirm_save_changes(&mut self) -> bool {
        dialogs::ask_yes_no(self.hwnd, WARNING_CAPTION, SAVE_CHANGES_QUESTION)
    }

    fn warn(&mut self, message: &str) {
        dialogs::show_warning(self.hwnd, WARNING_CAPTION, message);
    }

    fn set_title(&mut self, title: &str) {
        let title_wide = wide(title);
        // SAFETY: hwnd is the live main window; title_wide is null-terminated
        // and outlives the call.
        if let Err(e) = unsafe { SetWindowTextW(self.hwnd, PCWSTR(title_wide.as_ptr())) } {
            warn!(error = %e, "SetWindowTextW failed");
        }
    }

    fn select_printer(&mut self) -> Option<print::PrinterDc> {
        print::select_printer(self.hwnd)
    }
}
