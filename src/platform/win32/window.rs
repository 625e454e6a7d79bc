// ── Main window ───────────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the main window class and create the top-level window.
//   • Build the menu bar and accelerator table from `commands`.
//   • Host the Scintilla child and keep it filling the client area.
//   • Run the Win32 message loop and dispatch WM_COMMAND to `App::execute`.
//
// Window state lives in a `Box<WindowState>` whose pointer is stored in
// GWLP_USERDATA.  It is attached right after creation and reclaimed in
// WM_NCDESTROY, which Windows sends after every child window is gone.

#![allow(unsafe_code)]

use std::cell::RefCell;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{BOOL, COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM},
        Graphics::{
            Dwm::{DwmSetWindowAttribute, DWMWA_USE_IMMERSIVE_DARK_MODE},
            Gdi::{CreateSolidBrush, UpdateWindow},
        },
        System::LibraryLoader::GetModuleHandleW,
        UI::{
            HiDpi::{
                GetDpiForSystem, SetProcessDpiAwarenessContext,
                DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
            },
            Input::KeyboardAndMouse::SetFocus,
            WindowsAndMessaging::{
                AppendMenuW, CreateAcceleratorTableW, CreateMenu, CreatePopupMenu,
                CreateWindowExW, DefWindowProcW, DestroyAcceleratorTable, DestroyWindow,
                DispatchMessageW, GetClientRect, GetMessageW, GetWindowLongPtrW, LoadCursorW,
                LoadIconW, MoveWindow, PostQuitMessage, RegisterClassExW, SetWindowLongPtrW, ShowWindow,
                TranslateAcceleratorW, TranslateMessage, ACCEL, CS_HREDRAW, CS_VREDRAW,
                CW_USEDEFAULT, FCONTROL, FSHIFT, FVIRTKEY, GWLP_USERDATA, HACCEL, HMENU,
                IDC_ARROW, IDI_APPLICATION, MF_POPUP, MF_SEPARATOR, MF_STRING, MSG, SW_SHOW,
                WINDOW_EX_STYLE, WM_CLOSE, WM_COMMAND, WM_DESTROY, WM_NCDESTROY, WM_SETFOCUS,
                WM_SIZE, WNDCLASSEXW, WS_CLIPCHILDREN, WS_OVERLAPPEDWINDOW,
            },
        },
    },
};

use tracing::{debug, info};

use super::{dialogs, last_error, shell::Win32Shell, wide};
use crate::{
    app::{App, Flow, APP_NAME},
    commands::{Command, MenuItem, MENU_BAR},
    editor::scintilla::{SciDll, ScintillaView},
    error::Result,
    theme,
};

// ── Window identity ───────────────────────────────────────────────────────────

/// Name used to register (and later find) the main window class.
const CLASS_NAME: &str = "NotepadMainWindow";

/// Default window width at 96 DPI.
const DEFAULT_WIDTH: i32 = 800;

/// Default window height at 96 DPI.
const DEFAULT_HEIGHT: i32 = 600;

const BASE_DPI: u32 = 96;

// ── Window state ──────────────────────────────────────────────────────────────

/// Everything the WndProc needs, owned by the main window.
///
/// Field order is drop order: `sci_dll` must go last.
struct WindowState {
    /// Borrowed mutably for the duration of one command.  Modal dialogs pump
    /// messages, so a second WM_COMMAND can arrive while the first still runs;
    /// `try_borrow_mut` turns that into a no-op.
    app: RefCell<App>,
    sci: ScintillaView,
    _sci_dll: SciDll,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Create the main window and drive the message loop until it closes.
pub(crate) fn run() -> Result<()> {
    let t0 = std::time::Instant::now();

    // SAFETY: must precede all window creation; single call at process start.
    // Failure (e.g. awareness already set by a manifest) is harmless.
    if unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }
        .is_err()
    {
        debug!("per-monitor DPI awareness unavailable");
    }

    // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
    // always valid for the process lifetime.
    let hmodule = unsafe { GetModuleHandleW(None) }?;
    let hinstance = HINSTANCE(hmodule.0);

    register_class(hinstance)?;
    let sci_dll = SciDll::load()?;
    let hwnd = create_window(hinstance)?;

    let sci = match ScintillaView::create(hwnd, hinstance, &sci_dll) {
        Ok(sci) => sci,
        Err(e) => {
            // SAFETY: hwnd is the window created above; no state is attached yet.
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(e);
        }
    };
    theme::apply(&sci, &theme::DARK);

    let state = Box::new(WindowState {
        app: RefCell::new(App::new()),
        sci,
        _sci_dll: sci_dll,
    });
    // SAFETY: hwnd is valid; ownership of the box moves into the window and is
    // taken back exactly once in WM_NCDESTROY.
    unsafe {
        let _ = SetWindowLongPtrW(hwnd, GWLP_USERDATA, Box::into_raw(state) as isize);
    }
    layout(hwnd);

    // SAFETY: hwnd is valid.  ShowWindow returns the previous visibility state
    // and UpdateWindow a success BOOL; both are intentionally ignored.
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }
    focus_editor(hwnd);

    info!(
        elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0,
        "window visible"
    );

    let accel = Accelerators::create()?;
    message_loop(hwnd, &accel)
}

/// Show a modal error dialog with the given message.
///
/// Used by `main()` when `run()` returns an error.
pub(crate) fn show_error_dialog(message: &str) {
    dialogs::show_error(&format!("{APP_NAME} \u{2014} Fatal Error"), message);
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class(hinstance: HINSTANCE) -> Result<()> {
    // SAFETY: LoadIconW with IDI_APPLICATION loads a built-in resource that
    // exists on all Windows versions.
    let icon = unsafe { LoadIconW(None, IDI_APPLICATION) }?;

    // SAFETY: LoadCursorW with IDC_ARROW loads a built-in resource.
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }?;

    // SAFETY: CreateSolidBrush has no preconditions.  The brush belongs to the
    // window class for the rest of the process.
    let bg_brush = unsafe { CreateSolidBrush(COLORREF(theme::DARK.window)) };

    let class_name = wide(CLASS_NAME);
    let wndclass = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wnd_proc),
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: hinstance,
        hIcon: icon,
        hCursor: cursor,
        hbrBackground: bg_brush,
        lpszMenuName: PCWSTR::null(),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        hIconSm: icon,
    };

    // SAFETY: wndclass is fully initialised with valid handles; RegisterClassExW
    // copies the class name before returning.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        return Err(last_error("RegisterClassExW"));
    }

    Ok(())
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(hinstance: HINSTANCE) -> Result<HWND> {
    let menu = build_menu()?;
    let class_name = wide(CLASS_NAME);
    let title = wide(APP_NAME);
    // SAFETY: GetDpiForSystem takes no parameters and always succeeds on Win10+.
    let dpi = unsafe { GetDpiForSystem() };

    // SAFETY: the class was just registered; hinstance is the exe's module;
    // class_name and title outlive the call.  A null parent creates a
    // top-level window and the menu is owned by it from here on.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            scale(DEFAULT_WIDTH, dpi),
            scale(DEFAULT_HEIGHT, dpi),
            HWND::default(),
            menu,
            hinstance,
            None,
        )
    }?;

    apply_dark_frame(hwnd);
    Ok(hwnd)
}

/// Ask DWM for a dark title bar.  Older Windows builds reject the attribute,
/// which only costs the light frame.
fn apply_dark_frame(hwnd: HWND) {
    let enabled = BOOL::from(true);
    // SAFETY: hwnd is a live top-level window; the attribute value is a BOOL
    // on this stack frame whose size is passed alongside it.
    let result = unsafe {
        DwmSetWindowAttribute(
            hwnd,
            DWMWA_USE_IMMERSIVE_DARK_MODE,
            &enabled as *const BOOL as *const std::ffi::c_void,
            std::mem::size_of::<BOOL>() as u32,
        )
    };
    if let Err(e) = result {
        debug!(error = %e, "dark title bar unavailable");
    }
}

/// Scale a pixel value defined at 96 DPI to `dpi`.
fn scale(px: i32, dpi: u32) -> i32 {
    let dpi = if dpi == 0 { BASE_DPI } else { dpi };
    px * dpi as i32 / BASE_DPI as i32
}

// ── Menu construction ─────────────────────────────────────────────────────────

fn build_menu() -> Result<HMENU> {
    // SAFETY: CreateMenu/CreatePopupMenu have no preconditions.  AppendMenuW
    // copies each label, so the temporary UTF-16 buffers may drop afterwards.
    // The uIDNewItem parameter for MF_POPUP is the child HMENU cast to usize.
    unsafe {
        let bar = CreateMenu()?;
        for menu in &MENU_BAR {
            let popup = CreatePopupMenu()?;
            for item in menu.items {
                match item {
                    MenuItem::Command(cmd) => {
                        let label = wide(&cmd.menu_label());
                        AppendMenuW(popup, MF_STRING, usize::from(cmd.id()), PCWSTR(label.as_ptr()))?;
                    }
                    MenuItem::Separator => {
                        AppendMenuW(popup, MF_SEPARATOR, 0, PCWSTR::null())?;
                    }
                }
            }
            let caption = wide(menu.caption);
            AppendMenuW(bar, MF_POPUP, popup.0 as usize, PCWSTR(caption.as_ptr()))?;
        }
        Ok(bar)
    }
}

// ── Keyboard accelerators ─────────────────────────────────────────────────────

/// RAII owner of the accelerator table built from `Command::shortcut`.
struct Accelerators(HACCEL);

impl Accelerators {
    fn create() -> Result<Self> {
        let entries: Vec<ACCEL> = Command::ALL
            .into_iter()
            .filter_map(|cmd| {
                let s = cmd.shortcut()?;
                let mut flags = FVIRTKEY;
                if s.ctrl {
                    flags = flags | FCONTROL;
                }
                if s.shift {
                    flags = flags | FSHIFT;
                }
                Some(ACCEL { fVirt: flags, key: u16::from(s.key), cmd: cmd.id() })
            })
            .collect();

        // SAFETY: entries is a valid slice of ACCEL; the table copies it.
        let table = unsafe { CreateAcceleratorTableW(&entries) }?;
        debug!(count = entries.len(), "accelerators installed");
        Ok(Self(table))
    }
}

impl Drop for Accelerators {
    fn drop(&mut self) {
        // SAFETY: self.0 came from CreateAcceleratorTableW and is destroyed once.
        unsafe {
            let _ = DestroyAcceleratorTable(self.0);
        }
    }
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop(hwnd: HWND, accel: &Accelerators) -> Result<()> {
    let mut msg = MSG::default();

    loop {
        // SAFETY: &mut msg is a valid MSG pointer; a null HWND retrieves
        // messages for all windows on this thread; 0,0 accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match ret.0 {
            -1 => return Err(last_error("GetMessageW")),
            // WM_QUIT
            0 => break,
            _ => unsafe {
                // SAFETY: msg was populated by a successful GetMessageW call and
                // accel.0 is a live table.  A translated accelerator has already
                // been sent as WM_COMMAND and must not be dispatched again.
                if TranslateAcceleratorW(hwnd, accel.0, &msg) == 0 {
                    let _ = TranslateMessage(&msg);
                    let _ = DispatchMessageW(&msg);
                }
            },
        }
    }

    Ok(())
}

// ── State access ──────────────────────────────────────────────────────────────

/// Borrow the state attached to `hwnd`, if any.
///
/// # Safety
/// Must be called on the UI thread from within a message handler of `hwnd`,
/// and the reference must not outlive that handler.
unsafe fn attached_state<'a>(hwnd: HWND) -> Option<&'a WindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const WindowState;
    ptr.as_ref()
}

/// Size the Scintilla child to the full client area.
fn layout(hwnd: HWND) {
    let mut rc = RECT::default();
    // SAFETY: hwnd is the live main window; rc is a valid out-pointer.
    if unsafe { GetClientRect(hwnd, &mut rc) }.is_err() {
        return;
    }
    resize_editor(hwnd, rc.right - rc.left, rc.bottom - rc.top);
}

fn resize_editor(hwnd: HWND, width: i32, height: i32) {
    // SAFETY: called from the UI thread during a handler of hwnd.
    let Some(state) = (unsafe { attached_state(hwnd) }) else {
        return;
    };
    // SAFETY: the Scintilla HWND is a live child of hwnd.
    unsafe {
        let _ = MoveWindow(state.sci.hwnd(), 0, 0, width, height, true);
    }
}

fn focus_editor(hwnd: HWND) {
    // SAFETY: called from the UI thread during a handler of hwnd.
    if let Some(state) = unsafe { attached_state(hwnd) } {
        // SAFETY: the Scintilla HWND is a live child of hwnd.
        unsafe {
            let _ = SetFocus(state.sci.hwnd());
        }
    }
}

/// Run one command against the attached state.
fn on_command(hwnd: HWND, cmd: Command) -> Flow {
    // SAFETY: called from the UI thread during WM_COMMAND for hwnd.
    let Some(state) = (unsafe { attached_state(hwnd) }) else {
        return Flow::Continue;
    };
    let Ok(mut app) = state.app.try_borrow_mut() else {
        debug!(command = ?cmd, "ignored while another command is running");
        return Flow::Continue;
    };
    let mut shell = Win32Shell::new(hwnd);
    app.execute(cmd, &state.sci, &mut shell)
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        // ── Lifecycle ─────────────────────────────────────────────────────────
        WM_CLOSE => {
            // No save prompt: closing behaves exactly like File → Exit.
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }

        WM_NCDESTROY => {
            let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut WindowState;
            if !ptr.is_null() {
                // SAFETY: ptr came from Box::into_raw in run() and was just
                // detached from the window, so it is reclaimed exactly once.
                drop(Box::from_raw(ptr));
            }
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }

        // ── Layout / focus ────────────────────────────────────────────────────
        WM_SIZE => {
            // lparam low word = new client width, high word = new client height.
            let width = (lparam.0 & 0xFFFF) as i32;
            let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
            resize_editor(hwnd, width, height);
            LRESULT(0)
        }

        WM_SETFOCUS => {
            focus_editor(hwnd);
            LRESULT(0)
        }

        // ── Commands ──────────────────────────────────────────────────────────
        WM_COMMAND => {
            // Low word of WPARAM is the command identifier.
            let cmd_id = (wparam.0 & 0xFFFF) as u16;
            match Command::from_id(cmd_id) {
                Some(cmd) => {
                    if on_command(hwnd, cmd) == Flow::Exit {
                        let _ = DestroyWindow(hwnd);
                    }
                    LRESULT(0)
                }
                None => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}
