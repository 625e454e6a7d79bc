// ── Command vocabulary ────────────────────────────────────────────────────────
//
// Pure Rust description of every user command: menu ids, labels, keyboard
// shortcuts and the menu-bar layout.  No Win32 calls here; `platform::win32`
// turns these tables into HMENUs and an accelerator table.

/// A single user command, triggered from the menu bar or a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Exit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
}

/// A keyboard shortcut.  `key` is the Win32 virtual-key code, which equals
/// the upper-case ASCII letter for `A`–`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shortcut {
    pub(crate) ctrl: bool,
    pub(crate) shift: bool,
    pub(crate) key: u8,
}

const fn ctrl(key: u8) -> Shortcut {
    Shortcut { ctrl: true, shift: false, key }
}

const fn ctrl_shift(key: u8) -> Shortcut {
    Shortcut { ctrl: true, shift: true, key }
}

// ── Menu command IDs ──────────────────────────────────────────────────────────

const IDM_FILE_NEW: u16 = 1001;
const IDM_FILE_OPEN: u16 = 1002;
const IDM_FILE_SAVE: u16 = 1003;
const IDM_FILE_SAVE_AS: u16 = 1004;
const IDM_FILE_PRINT: u16 = 1005;
const IDM_FILE_EXIT: u16 = 1099;
const IDM_EDIT_UNDO: u16 = 2001;
const IDM_EDIT_REDO: u16 = 2002;
const IDM_EDIT_CUT: u16 = 2003;
const IDM_EDIT_COPY: u16 = 2004;
const IDM_EDIT_PASTE: u16 = 2005;

impl Command {
    /// Every command, in menu order.
    pub(crate) const ALL: [Command; 11] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Print,
        Command::Exit,
        Command::Undo,
        Command::Redo,
        Command::Cut,
        Command::Copy,
        Command::Paste,
    ];

    /// The `WM_COMMAND` identifier for this command.
    pub(crate) fn id(self) -> u16 {
        match self {
            Self::New => IDM_FILE_NEW,
            Self::Open => IDM_FILE_OPEN,
            Self::Save => IDM_FILE_SAVE,
            Self::SaveAs => IDM_FILE_SAVE_AS,
            Self::Print => IDM_FILE_PRINT,
            Self::Exit => IDM_FILE_EXIT,
            Self::Undo => IDM_EDIT_UNDO,
            Self::Redo => IDM_EDIT_REDO,
            Self::Cut => IDM_EDIT_CUT,
            Self::Copy => IDM_EDIT_COPY,
            Self::Paste => IDM_EDIT_PASTE,
        }
    }

    /// Map a `WM_COMMAND` identifier back to a command.
    pub(crate) fn from_id(id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Menu caption without the shortcut hint (`&` marks the mnemonic).
    fn caption(self) -> &'static str {
        match self {
            Self::New => "&New",
            Self::Open => "&Open…",
            Self::Save => "&Save",
            Self::SaveAs => "Save &As…",
            Self::Print => "&Print…",
            Self::Exit => "E&xit",
            Self::Undo => "&Undo",
            Self::Redo => "&Redo",
            Self::Cut => "Cu&t",
            Self::Copy => "&Copy",
            Self::Paste => "&Paste",
        }
    }

    /// Keyboard shortcut routed through the accelerator table, if any.
    ///
    /// Exit has none of its own: Alt+F4 is handled by the system as WM_CLOSE.
    pub(crate) fn shortcut(self) -> Option<Shortcut> {
        match self {
            Self::New => Some(ctrl(b'N')),
            Self::Open => Some(ctrl(b'O')),
            Self::Save => Some(ctrl(b'S')),
            Self::SaveAs => Some(ctrl_shift(b'S')),
            Self::Print => Some(ctrl(b'P')),
            Self::Exit => None,
            Self::Undo => Some(ctrl(b'Z')),
            Self::Redo => Some(ctrl(b'Y')),
            Self::Cut => Some(ctrl(b'X')),
            Self::Copy => Some(ctrl(b'C')),
            Self::Paste => Some(ctrl(b'V')),
        }
    }

    /// Full menu label, e.g. `"Save &As…\tCtrl+Shift+S"`.
    pub(crate) fn menu_label(self) -> String {
        let hint = match (self, self.shortcut()) {
            (Self::Exit, _) => "Alt+F4".to_owned(),
            (_, Some(s)) => s.to_string(),
            (_, None) => return self.caption().to_owned(),
        };
        format!("{}\t{hint}", self.caption())
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key as char)
    }
}

// ── Menu layout ───────────────────────────────────────────────────────────────

/// One row in a drop-down menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
    Command(Command),
    Separator,
}

/// A top-level drop-down: caption plus its rows.
pub(crate) struct Menu {
    pub(crate) caption: &'static str,
    pub(crate) items: &'static [MenuItem],
}

/// The menu bar, left to right.
pub(crate) const MENU_BAR: [Menu; 2] = [
    Menu {
        caption: "&File",
        items: &[
            MenuItem::Command(Command::New),
            MenuItem::Command(Command::Open),
            MenuItem::Command(Command::Save),
            MenuItem::Command(Command::SaveAs),
            MenuItem::Separator,
            MenuItem::Command(Command::Print),
            MenuItem::Separator,
            MenuItem::Command(Command::Exit),
        ],
    },
    Menu {
        caption: "&Edit",
        items: &[
            MenuItem::Command(Command::Undo),
            MenuItem::Command(Command::Redo),
            MenuItem::Separator,
            MenuItem::Command(Command::Cut),
            MenuItem::Command(Command::Copy),
            MenuItem::Command(Command::Paste),
        ],
    },
];

// ── Tests ─────────────────────────────────────────────────────────────────────
