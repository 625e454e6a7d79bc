// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32`   – Win32 / WinAPI FFI
//   • `editor::scintilla` – Scintilla child-window hosting
// Each unsafe block in those modules MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that log output is visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]
// Off Windows only the command core and its tests are built.
#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod commands;
mod editor;
mod error;
mod platform;
mod theme;

use tracing::Level;

fn init_logging() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(windows)]
fn main() {
    init_logging();
    if let Err(e) = platform::win32::window::run() {
        tracing::error!(error = %e, "startup failed");
        // Startup failed before or during the message loop.
        // Show a modal error dialog — the only safe output path in a GUI app.
        platform::win32::window::show_error_dialog(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    init_logging();
    tracing::error!("{} requires Windows", app::APP_NAME);
    std::process::exit(1);
}
