// ── Scintilla message constants ───────────────────────────────────────────────
//
// Source of truth: Scintilla.h (https://www.scintilla.org/ScintillaDoc.html)
// Only the subset Notepad sends is listed here.
// All SCI_* values are sent via SendMessageW(hwnd_sci, SCI_*, wparam, lparam).

// ── Code page ─────────────────────────────────────────────────────────────────

/// Set the code page.  Pass `SC_CP_UTF8` as WPARAM.
pub(super) const SCI_SETCODEPAGE: u32 = 2037;
/// UTF-8 code page value for `SCI_SETCODEPAGE`.
pub(super) const SC_CP_UTF8: usize = 65001;

// ── Document content ──────────────────────────────────────────────────────────

/// Delete all document text.
pub(super) const SCI_CLEARALL: u32 = 2004;
/// Append bytes at the end.  WPARAM=byte length; LPARAM=UTF-8 pointer.
/// Embedded NULs are kept, unlike `SCI_SETTEXT`.
pub(super) const SCI_APPENDTEXT: u32 = 2282;
/// Return byte count of the document (excluding null terminator).
pub(super) const SCI_GETLENGTH: u32 = 2006;
/// Copy document bytes.  WPARAM=buffer len (incl. null); LPARAM=buffer ptr.
pub(super) const SCI_GETTEXT: u32 = 2182;
/// Drop the whole undo history.
pub(super) const SCI_EMPTYUNDOBUFFER: u32 = 2175;
/// Mark the current state as the save point.
pub(super) const SCI_SETSAVEPOINT: u32 = 2014;

// ── Edit operations ───────────────────────────────────────────────────────────

/// Redo the last undone action (no standard Win32 equivalent).
pub(super) const SCI_REDO: u32 = 2011;

// Standard Win32 clipboard messages — Scintilla processes these natively.
/// Cut selection to clipboard.
pub(super) const WM_CUT:   u32 = 0x0300;
/// Copy selection to clipboard.
pub(super) const WM_COPY:  u32 = 0x0301;
/// Paste from clipboard.
pub(super) const WM_PASTE: u32 = 0x0302;
/// Undo last action (Win32 standard; Scintilla also processes this).
pub(super) const WM_UNDO:  u32 = 0x0304;

// ── Styling ───────────────────────────────────────────────────────────────────

/// Copy `STYLE_DEFAULT` into every style slot.
pub(super) const SCI_STYLECLEARALL: u32 = 2050;
/// WPARAM=style; LPARAM=COLORREF.
pub(super) const SCI_STYLESETFORE: u32 = 2051;
/// WPARAM=style; LPARAM=COLORREF.
pub(super) const SCI_STYLESETBACK: u32 = 2052;
/// WPARAM=style; LPARAM=points.
pub(super) const SCI_STYLESETSIZE: u32 = 2055;
/// WPARAM=style; LPARAM=null-terminated font name.
pub(super) const SCI_STYLESETFONT: u32 = 2056;
/// WPARAM=use-setting flag; LPARAM=COLORREF.
pub(super) const SCI_SETSELFORE: u32 = 2067;
/// WPARAM=use-setting flag; LPARAM=COLORREF.
pub(super) const SCI_SETSELBACK: u32 = 2068;
/// WPARAM=COLORREF.
pub(super) const SCI_SETCARETFORE: u32 = 2069;
/// WPARAM=margin index; LPARAM=pixel width.
pub(super) const SCI_SETMARGINWIDTHN: u32 = 2242;

/// Style slot every other style inherits from.
pub(crate) const STYLE_DEFAULT: usize = 32;

// ── Printing ──────────────────────────────────────────────────────────────────

/// Render a range to a device context.  WPARAM=draw flag; LPARAM=`*RangeToFormat`
/// (or 0 to release the layout cache).  Returns the first unprinted position.
pub(super) const SCI_FORMATRANGE: u32 = 2151;
/// Colour mode used when printing.
pub(super) const SCI_SETPRINTCOLOURMODE: u32 = 2148;
/// Print black text on white regardless of screen styles.
pub(super) const SC_PRINT_BLACKONWHITE: usize = 2;
