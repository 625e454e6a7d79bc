// ── Dark colour theme ─────────────────────────────────────────────────────────
//
// A single Fusion-style dark palette, applied to the Scintilla view and to the
// main window frame.
//
// Colour conventions:
//   • Palette entries are written as (R, G, B).
//   • The `rgb!` macro converts to the Win32/Scintilla BGR COLORREF layout
//     (0x00BBGGRR) before anything is passed to the API.

/// Convert (R, G, B) → BGR COLORREF.
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        (($b as u32) << 16) | (($g as u32) << 8) | ($r as u32)
    };
}

// ── Palette ───────────────────────────────────────────────────────────────────

/// Colours of the dark theme, all in COLORREF form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    /// Window frame and menu-adjacent chrome.
    pub(crate) window: u32,
    /// Editor background.
    pub(crate) base: u32,
    /// Editor text.
    pub(crate) text: u32,
    /// Selection background.
    pub(crate) highlight: u32,
    /// Selection text.
    pub(crate) highlighted_text: u32,
    pub(crate) caret: u32,
}

pub(crate) const DARK: Palette = Palette {
    window: rgb!(53, 53, 53),
    base: rgb!(25, 25, 25),
    text: rgb!(0xFF, 0xFF, 0xFF),
    highlight: rgb!(42, 130, 218),
    highlighted_text: rgb!(0x00, 0x00, 0x00),
    caret: rgb!(0xFF, 0xFF, 0xFF),
};

/// Editor font face, null-terminated for Scintilla.
pub(crate) const FONT_FACE: &[u8] = b"Consolas\0";

/// Editor font size in points.
pub(crate) const FONT_SIZE: usize = 10;

// ── Application ───────────────────────────────────────────────────────────────

/// Apply `p` to `sci`.
///
/// Sequence:
/// 1. Set `STYLE_DEFAULT` font, size, and colours.
/// 2. `style_clear_all` clones those into every style slot.
/// 3. Hide the margins, then override selection and caret.
/// 4. Force black-on-white printing so paper output ignores the dark theme.
#[cfg(windows)]
pub(crate) fn apply(sci: &crate::editor::scintilla::ScintillaView, p: &Palette) {
    use crate::editor::scintilla::messages::STYLE_DEFAULT;

    sci.style_set_fore(STYLE_DEFAULT, p.text);
    sci.style_set_back(STYLE_DEFAULT, p.base);
    sci.style_set_font(STYLE_DEFAULT, FONT_FACE);
    sci.style_set_size(STYLE_DEFAULT, FONT_SIZE);
    sci.style_clear_all();

    sci.hide_margins();
    sci.set_selection_colours(p.highlighted_text, p.highlight);
    sci.set_caret_colour(p.caret);
    sci.set_print_black_on_white();
}

// ── Tests ─────────────────────────────────────────────────────────────────────
