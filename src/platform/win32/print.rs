// ── Print dialog & printer device context ─────────────────────────────────────
//
// `select_printer` runs the common Print dialog and hands back an owned
// printer DC.  The page layout itself is done by Scintilla
// (`ScintillaView::print`), which only needs the DC and two rectangles.

#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::{GlobalFree, HGLOBAL, HWND, RECT},
    Graphics::Gdi::{DeleteDC, GetDeviceCaps, HDC, HORZRES, LOGPIXELSX, LOGPIXELSY, VERTRES},
    UI::Controls::Dialogs::{
        PrintDlgW, PD_NOPAGENUMS, PD_NOSELECTION, PD_RETURNDC, PD_USEDEVMODECOPIESANDCOLLATE,
        PRINTDLGW,
    },
};

use tracing::debug;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Blank border around the printed text, in hundredths of an inch.
const MARGIN_HUNDREDTHS: i32 = 75;

// ── PrinterDc ─────────────────────────────────────────────────────────────────

/// RAII owner of a printer device context returned by `PrintDlgW`.
pub(crate) struct PrinterDc {
    hdc: HDC,
    /// Printable area in device units.
    width: i32,
    height: i32,
    /// Device resolution in dots per inch.
    dpi_x: i32,
    dpi_y: i32,
}

impl PrinterDc {
    pub(crate) fn hdc(&self) -> HDC {
        self.hdc
    }

    /// The full printable area of the page, in device units.
    pub(crate) fn page_rect(&self) -> RECT {
        RECT { left: 0, top: 0, right: self.width, bottom: self.height }
    }

    /// The page area minus the margins, in device units.
    pub(crate) fn printable_rect(&self) -> RECT {
        inset(self.page_rect(), self.dpi_x, self.dpi_y)
    }
}

impl Drop for PrinterDc {
    fn drop(&mut self) {
        // SAFETY: hdc came from PrintDlgW with PD_RETURNDC; the caller owns it
        // and it has not been deleted elsewhere.
        unsafe {
            let _ = DeleteDC(self.hdc);
        }
    }
}

/// Shrink `page` by the margin, converted to device units.  Falls back to the
/// whole page if the margins would leave nothing to print into.
fn inset(page: RECT, dpi_x: i32, dpi_y: i32) -> RECT {
    let mx = dpi_x * MARGIN_HUNDREDTHS / 100;
    let my = dpi_y * MARGIN_HUNDREDTHS / 100;
    if page.right - 2 * mx <= 0 || page.bottom - 2 * my <= 0 {
        return page;
    }
    RECT {
        left: page.left + mx,
        top: page.top + my,
        right: page.right - mx,
        bottom: page.bottom - my,
    }
}

// ── Print dialog ──────────────────────────────────────────────────────────────

/// Show the standard Print dialog.
///
/// Returns `None` when the user cancels or no printer DC could be created.
pub(crate) fn select_printer(hwnd_owner: HWND) -> Option<PrinterDc> {
    let mut pd = PRINTDLGW {
        lStructSize: std::mem::size_of::<PRINTDLGW>() as u32,
        hwndOwner: hwnd_owner,
        Flags: PD_RETURNDC | PD_NOPAGENUMS | PD_NOSELECTION | PD_USEDEVMODECOPIESANDCOLLATE,
        nCopies: 1,
        ..Default::default()
    };

    // SAFETY: `pd` is fully initialised and lives across the call; the dialog
    // is modal on the UI thread.
    let ok = unsafe { PrintDlgW(&mut pd) }.as_bool();

    // The dialog allocates the DEVMODE/DEVNAMES blocks even when it returns a
    // DC; they are not needed once the DC exists.
    free_global(pd.hDevMode);
    free_global(pd.hDevNames);

    if !ok || pd.hDC.0.is_null() {
        debug!(ok, "print dialog returned no printer");
        return None;
    }

    let hdc = pd.hDC;
    // SAFETY: hdc is a valid printer DC just returned by PrintDlgW.
    let (width, height, dpi_x, dpi_y) = unsafe {
        (
            GetDeviceCaps(hdc, HORZRES),
            GetDeviceCaps(hdc, VERTRES),
            GetDeviceCaps(hdc, LOGPIXELSX),
            GetDeviceCaps(hdc, LOGPIXELSY),
        )
    };
    debug!(width, height, dpi_x, dpi_y, "printer selected");

    Some(PrinterDc { hdc, width, height, dpi_x, dpi_y })
}

fn free_global(handle: HGLOBAL) {
    if handle.0.is_null() {
        return;
    }
    // SAFETY: handle was allocated by PrintDlgW for the caller to free, and is
    // freed exactly once.
    unsafe {
        let _ = GlobalFree(handle);
    }
}
