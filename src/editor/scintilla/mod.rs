// ── Scintilla child-window hosting ────────────────────────────────────────────
//
// This is one of exactly two modules where `unsafe` is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment.
//
// ── DLL ownership model ───────────────────────────────────────────────────────
//
// `SciDll` owns the single `LoadLibraryW` call for `SciLexer.dll`.  It is
// stored in the main window state and outlives the `ScintillaView`, which
// holds only a child `HWND`.
//
// Drop order inside the window state (Rust drops fields in declaration order):
//   1. `app` (pure Rust, no HWNDs)
//   2. `sci` — a stale HWND; the window state is only dropped on the
//      parent's WM_NCDESTROY, after Windows destroyed every child; no-op drop
//   3. `sci_dll` — `FreeLibrary` called here, after all windows are gone

#![allow(unsafe_code)]

pub mod messages;

use messages::{
    SC_CP_UTF8, SC_PRINT_BLACKONWHITE, SCI_APPENDTEXT, SCI_CLEARALL, SCI_EMPTYUNDOBUFFER,
    SCI_FORMATRANGE, SCI_GETLENGTH, SCI_GETTEXT, SCI_REDO, SCI_SETCARETFORE, SCI_SETCODEPAGE,
    SCI_SETMARGINWIDTHN, SCI_SETPRINTCOLOURMODE, SCI_SETSAVEPOINT, SCI_SETSELBACK,
    SCI_SETSELFORE, SCI_STYLECLEARALL, SCI_STYLESETBACK, SCI_STYLESETFONT, SCI_STYLESETFORE,
    SCI_STYLESETSIZE, WM_COPY, WM_CUT, WM_PASTE, WM_UNDO,
};

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HINSTANCE, HMODULE, HWND, LPARAM, RECT, WPARAM},
        Graphics::Gdi::HDC,
        Storage::Xps::{EndDoc, EndPage, StartDocW, StartPage, DOCINFOW},
        System::LibraryLoader::{FreeLibrary, LoadLibraryW},
        UI::WindowsAndMessaging::{
            CreateWindowExW, SendMessageW, HMENU, WINDOW_EX_STYLE, WS_CHILD, WS_CLIPSIBLINGS,
            WS_VISIBLE,
        },
    },
};

use tracing::debug;

use crate::{
    editor::TextEditor,
    error::Result,
    platform::win32::{last_error, print::PrinterDc, wide},
};

// ── DLL identity ──────────────────────────────────────────────────────────────

const DLL_NAME: &str = "SciLexer.dll";
const CLASS_NAME: &str = "Scintilla";

/// Spooler job name shown in the print queue.
const PRINT_JOB_NAME: &str = "Notepad document";

/// Scintilla margins are numbered 0..=4.
const MARGIN_COUNT: usize = 5;

/// One `SendMessageW` call: message, WPARAM, LPARAM.
type Message = (u32, usize, isize);

/// Messages that replace the whole document with `text`, drop the undo
/// history and mark the result as the save point.
///
/// The text goes in with an explicit length so bytes after an embedded NUL
/// survive.  The LPARAM points into `text`, which must outlive the sends.
fn replace_text_messages(text: &[u8]) -> [Message; 4] {
    [
        (SCI_CLEARALL, 0, 0),
        (SCI_APPENDTEXT, text.len(), text.as_ptr() as isize),
        (SCI_EMPTYUNDOBUFFER, 0, 0),
        (SCI_SETSAVEPOINT, 0, 0),
    ]
}

/// Messages that collapse every margin to zero width.
fn hide_margin_messages() -> impl Iterator<Item = Message> {
    (0..MARGIN_COUNT).map(|margin| (SCI_SETMARGINWIDTHN, margin, 0))
}

// ── SciDll ────────────────────────────────────────────────────────────────────

/// RAII handle to the loaded `SciLexer.dll`.
///
/// Loading the DLL causes it to register the `"Scintilla"` window class.
/// `FreeLibrary` is called on `Drop`, which must happen after the
/// `ScintillaView` child window has been destroyed.
pub(crate) struct SciDll(HMODULE);

impl SciDll {
    /// Load `SciLexer.dll` from the application directory.
    pub(crate) fn load() -> Result<Self> {
        let path = wide(DLL_NAME);
        // SAFETY: path is a valid null-terminated UTF-16 string.
        // LoadLibraryW searches the application directory first on Win10/11.
        let dll = unsafe { LoadLibraryW(PCWSTR(path.as_ptr())) }?;
        debug!("loaded {DLL_NAME}");
        Ok(Self(dll))
    }
}

impl Drop for SciDll {
    fn drop(&mut self) {
        // SAFETY: self.0 was returned by a successful LoadLibraryW and has not
        // been freed since.  The ScintillaView HWND is already destroyed
        // (the owning state is dropped on the parent's WM_NCDESTROY).
        unsafe {
            let _ = FreeLibrary(self.0);
        }
    }
}

// ── FFI layout for SCI_FORMATRANGE ────────────────────────────────────────────

/// `Sci_CharacterRange`: positions are `long` (32-bit on Windows).
#[repr(C)]
struct CharacterRange {
    cp_min: i32,
    cp_max: i32,
}

/// `Sci_RangeToFormat`.
#[repr(C)]
struct RangeToFormat {
    hdc: HDC,
    hdc_target: HDC,
    rc: RECT,
    rc_page: RECT,
    chrg: CharacterRange,
}

// ── ScintillaView ─────────────────────────────────────────────────────────────

/// A hosted Scintilla editor child window.
///
/// Does **not** own the `SciLexer.dll` module handle.  The child `HWND` is
/// destroyed automatically by Windows when the parent is destroyed.
pub(crate) struct ScintillaView {
    hwnd: HWND,
}

impl ScintillaView {
    /// Create a visible, zero-sized Scintilla child window inside `hwnd_parent`.
    ///
    /// `_dll` proves that `SciLexer.dll` is loaded and the `"Scintilla"` class
    /// is registered.  The parent sizes it on WM_SIZE.
    pub(crate) fn create(hwnd_parent: HWND, hinstance: HINSTANCE, _dll: &SciDll) -> Result<Self> {
        let class_wide = wide(CLASS_NAME);

        // SAFETY: class_wide is null-terminated UTF-16 for the class registered
        // by SciLexer.dll (_dll proves the DLL is loaded).  hwnd_parent and
        // hinstance are valid Win32 handles from WM_CREATE.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                PCWSTR(class_wide.as_ptr()),
                PCWSTR::null(),
                WS_CHILD | WS_VISIBLE | WS_CLIPSIBLINGS,
                0, 0, 0, 0,
                hwnd_parent,
                HMENU::default(),
                hinstance,
                None,
            )
        }?;

        // SAFETY: hwnd is a valid Scintilla window.  SCI_SETCODEPAGE with
        // SC_CP_UTF8 is documented safe initialisation.
        unsafe {
            let _ = SendMessageW(hwnd, SCI_SETCODEPAGE, WPARAM(SC_CP_UTF8), LPARAM(0));
        }

        Ok(Self { hwnd })
    }

    /// The Scintilla child window handle.  Valid until the parent is destroyed.
    pub(crate) fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn send(&self, msg: u32, wparam: usize, lparam: isize) -> isize {
        // SAFETY: hwnd is a live Scintilla window for as long as `self` is
        // reachable from the window state.  Every caller passes a documented
        // message whose pointer arguments (if any) outlive this call.
        unsafe { SendMessageW(self.hwnd, msg, WPARAM(wparam), LPARAM(lparam)).0 }
    }

    // ── Document operations ───────────────────────────────────────────────────

    /// Total byte length of the document (excluding null terminator).
    pub(crate) fn doc_len(&self) -> usize {
        self.send(SCI_GETLENGTH, 0, 0) as usize
    }

    /// Read the full document text as UTF-8 bytes (without null terminator).
    pub(crate) fn get_text(&self) -> Vec<u8> {
        let len = self.doc_len();
        let mut buf = vec![0u8; len + 1];
        // buf is len+1 bytes; SCI_GETTEXT with matching buffer size stays in bounds.
        self.send(SCI_GETTEXT, len + 1, buf.as_mut_ptr() as isize);
        buf.truncate(len);
        buf
    }

    /// Replace all document text (UTF-8), drop the undo history and mark the
    /// result as the save point.
    pub(crate) fn set_text_bytes(&self, text: &[u8]) {
        // `text` outlives every synchronous send below.
        for (msg, wparam, lparam) in replace_text_messages(text) {
            self.send(msg, wparam, lparam);
        }
    }

    // ── Styling ───────────────────────────────────────────────────────────────

    pub(crate) fn style_set_fore(&self, style: usize, colour: u32) {
        self.send(SCI_STYLESETFORE, style, colour as isize);
    }

    pub(crate) fn style_set_back(&self, style: usize, colour: u32) {
        self.send(SCI_STYLESETBACK, style, colour as isize);
    }

    /// `face` must be null-terminated.
    pub(crate) fn style_set_font(&self, style: usize, face: &[u8]) {
        debug_assert_eq!(face.last(), Some(&0));
        self.send(SCI_STYLESETFONT, style, face.as_ptr() as isize);
    }

    pub(crate) fn style_set_size(&self, style: usize, points: usize) {
        self.send(SCI_STYLESETSIZE, style, points as isize);
    }

    pub(crate) fn style_clear_all(&self) {
        self.send(SCI_STYLECLEARALL, 0, 0);
    }

    pub(crate) fn set_selection_colours(&self, fore: u32, back: u32) {
        self.send(SCI_SETSELFORE, 1, fore as isize);
        self.send(SCI_SETSELBACK, 1, back as isize);
    }

    pub(crate) fn set_caret_colour(&self, colour: u32) {
        self.send(SCI_SETCARETFORE, colour as usize, 0);
    }

    /// Remove the symbol margin Scintilla shows by default, so the editor
    /// background runs to the window edge.
    pub(crate) fn hide_margins(&self) {
        for (msg, wparam, lparam) in hide_margin_messages() {
            self.send(msg, wparam, lparam);
        }
    }

    pub(crate) fn set_print_black_on_white(&self) {
        self.send(SCI_SETPRINTCOLOURMODE, SC_PRINT_BLACKONWHITE, 0);
    }

    // ── Printing ──────────────────────────────────────────────────────────────

    /// Lay the whole document out page by page on `printer`.
    ///
    /// An empty document still produces one blank page.
    fn print_pages(&self, printer: &PrinterDc) -> Result<()> {
        let hdc = printer.hdc();
        let name = wide(PRINT_JOB_NAME);
        let doc_info = DOCINFOW {
            cbSize: std::mem::size_of::<DOCINFOW>() as i32,
            lpszDocName: PCWSTR(name.as_ptr()),
            ..Default::default()
        };

        // SAFETY: hdc is a live printer DC owned by `printer`; doc_info and the
        // name buffer it points into outlive the call.
        if unsafe { StartDocW(hdc, &doc_info) } <= 0 {
            return Err(last_error("StartDocW"));
        }

        let len = i32::try_from(self.doc_len()).unwrap_or(i32::MAX);
        let mut range = RangeToFormat {
            hdc,
            hdc_target: hdc,
            rc: printer.printable_rect(),
            rc_page: printer.page_rect(),
            chrg: CharacterRange { cp_min: 0, cp_max: len },
        };

        let mut pages = 0usize;
        let result = loop {
            // SAFETY: hdc is inside an open print job.
            if unsafe { StartPage(hdc) } <= 0 {
                break Err(last_error("StartPage"));
            }
            // `range` is a #[repr(C)] Sci_RangeToFormat living on this stack
            // frame for the duration of the synchronous SendMessageW.
            let next = self.send(SCI_FORMATRANGE, 1, &range as *const RangeToFormat as isize) as i32;
            // SAFETY: matches the StartPage above.
            if unsafe { EndPage(hdc) } <= 0 {
                break Err(last_error("EndPage"));
            }
            pages += 1;
            if next <= range.chrg.cp_min || next >= len {
                break Ok(());
            }
            range.chrg.cp_min = next;
        };

        // Release Scintilla's cached layout for the printer DC.
        self.send(SCI_FORMATRANGE, 0, 0);

        // SAFETY: closes the job opened by StartDocW above, on every path.
        let ended = unsafe { EndDoc(hdc) };
        result?;
        if ended <= 0 {
            return Err(last_error("EndDoc"));
        }
        debug!(pages, "print job spooled");
        Ok(())
    }
}

// ── TextEditor ────────────────────────────────────────────────────────────────

impl TextEditor for ScintillaView {
    type Printer = PrinterDc;

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.get_text()).into_owned()
    }

    fn set_text(&self, text: &str) {
        self.set_text_bytes(text.as_bytes());
    }

    fn is_empty(&self) -> bool {
        self.doc_len() == 0
    }

    fn copy(&self) {
        self.send(WM_COPY, 0, 0);
    }

    fn cut(&self) {
        self.send(WM_CUT, 0, 0);
    }

    fn paste(&self) {
        self.send(WM_PASTE, 0, 0);
    }

    fn undo(&self) {
        self.send(WM_UNDO, 0, 0);
    }

    fn redo(&self) {
        self.send(SCI_REDO, 0, 0);
    }

    fn print(&self, printer: &PrinterDc) -> Result<()> {
        self.print_pages(printer)
    }
}
