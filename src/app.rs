// ── Application lifecycle & command handling ──────────────────────────────────
//
// A single `App` is created with the main window and owned by its window state
// for the lifetime of the window.  All mutations happen on the UI thread; there
// is no global mutable state.
//
// `App` only knows its collaborators through `TextEditor` (the buffer) and
// `Shell` (dialogs, title, printer), so every handler here is testable without
// a window.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    commands::Command,
    editor::TextEditor,
    error::{NotepadError, Result},
    platform::Shell,
};

/// Title bar text when no file is bound.
pub(crate) const APP_NAME: &str = "Notepad";

// ── DocumentState ─────────────────────────────────────────────────────────────

/// State of the single open document.
///
/// The text itself is never stored here; it lives in the editor control.
#[derive(Debug, Default)]
pub(crate) struct DocumentState {
    /// Path the buffer was last loaded from or saved to; `None` while untitled.
    pub(crate) path: Option<PathBuf>,
}

impl DocumentState {
    fn new_untitled() -> Self {
        Self::default()
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// What the window should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Result of a save attempt, as seen by callers that must decide whether to
/// go on discarding the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveOutcome {
    Saved,
    Cancelled,
    Failed,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub(crate) struct App {
    pub(crate) doc: DocumentState,
}

impl App {
    /// Create a fresh `App` with an untitled document.
    pub(crate) fn new() -> Self {
        Self {
            doc: DocumentState::new_untitled(),
        }
    }

    /// Title bar text: the literal path when bound, the app name otherwise.
    pub(crate) fn window_title(&self) -> String {
        match &self.doc.path {
            Some(path) => path.display().to_string(),
            None => APP_NAME.to_owned(),
        }
    }

    /// Run one user command to completion.
    pub(crate) fn execute<E, S>(&mut self, cmd: Command, editor: &E, shell: &mut S) -> Flow
    where
        E: TextEditor,
        S: Shell<Printer = E::Printer>,
    {
        debug!(command = ?cmd, "dispatch");
        match cmd {
            Command::New => self.new_document(editor, shell),
            Command::Open => self.open(editor, shell),
            Command::Save => {
                self.save(editor, shell);
            }
            Command::SaveAs => {
                self.save_as(editor, shell);
            }
            Command::Print => Self::print(editor, shell),
            Command::Exit => return Flow::Exit,
            Command::Undo => editor.undo(),
            Command::Redo => editor.redo(),
            Command::Cut => editor.cut(),
            Command::Copy => editor.copy(),
            Command::Paste => editor.paste(),
        }
        Flow::Continue
    }

    // ── File open ─────────────────────────────────────────────────────────────

    /// Replace the buffer with the contents of a user-chosen file.
    ///
    /// The path is only recorded once the read has succeeded, so a failed open
    /// leaves the document exactly as it was.
    fn open<E: TextEditor, S: Shell>(&mut self, editor: &E, shell: &mut S) {
        let Some(path) = shell.pick_open_path() else {
            debug!("open cancelled");
            return;
        };

        match read_document(&path) {
            Ok(text) => {
                editor.set_text(&text);
                info!(path = %path.display(), bytes = text.len(), "opened");
                self.doc.path = Some(path);
                shell.set_title(&self.window_title());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "open failed");
                shell.warn(&e.to_string());
            }
        }
    }

    // ── File save ─────────────────────────────────────────────────────────────

    /// Write the buffer to the bound path, or fall through to Save As.
    fn save<E: TextEditor, S: Shell>(&mut self, editor: &E, shell: &mut S) -> SaveOutcome {
        let Some(path) = self.doc.path.clone() else {
            return self.save_as(editor, shell);
        };
        Self::write_reporting(&path, &editor.text(), shell)
    }

    /// Ask for a destination, write the buffer there and bind to it.
    fn save_as<E: TextEditor, S: Shell>(&mut self, editor: &E, shell: &mut S) -> SaveOutcome {
        let Some(path) = shell.pick_save_path(self.doc.path.as_deref()) else {
            debug!("save as cancelled");
            return SaveOutcome::Cancelled;
        };

        let outcome = Self::write_reporting(&path, &editor.text(), shell);
        if outcome == SaveOutcome::Saved {
            self.doc.path = Some(path);
            shell.set_title(&self.window_title());
        }
        outcome
    }

    fn write_reporting<S: Shell>(path: &Path, text: &str, shell: &mut S) -> SaveOutcome {
        match write_document(path, text) {
            Ok(()) => {
                info!(path = %path.display(), bytes = text.len(), "saved");
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                shell.warn(&e.to_string());
                SaveOutcome::Failed
            }
        }
    }

    // ── New ───────────────────────────────────────────────────────────────────

    /// Start an empty untitled document, guarding unsaved changes.
    ///
    /// | Buffer | Bound? | Behaviour |
    /// |---|---|---|
    /// | empty | any | reset |
    /// | text | no | ask; Yes → Save As, reset if saved; No → reset |
    /// | text | yes, matches disk | reset |
    /// | text | yes, differs | ask; Yes → Save, reset if saved; No → reset |
    ///
    /// A bound file that can no longer be read aborts with a warning.
    fn new_document<E: TextEditor, S: Shell>(&mut self, editor: &E, shell: &mut S) {
        if !editor.is_empty() {
            match self.doc.path.clone() {
                None => {
                    if shell.confirm_save_changes()
                        && self.save_as(editor, shell) != SaveOutcome::Saved
                    {
                        return;
                    }
                }
                Some(path) => {
                    let on_disk = match read_document(&path) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(path = %path.display(), error = %e, "new: reread failed");
                            shell.warn(&e.to_string());
                            return;
                        }
                    };
                    if on_disk != editor.text()
                        && shell.confirm_save_changes()
                        && self.save(editor, shell) != SaveOutcome::Saved
                    {
                        return;
                    }
                }
            }
        }

        self.doc = DocumentState::new_untitled();
        editor.set_text("");
        shell.set_title(&self.window_title());
        debug!("new document");
    }

    // ── Print ─────────────────────────────────────────────────────────────────

    fn print<E, S>(editor: &E, shell: &mut S)
    where
        E: TextEditor,
        S: Shell<Printer = E::Printer>,
    {
        let Some(printer) = shell.select_printer() else {
            warn!("print dialog rejected");
            shell.warn(&NotepadError::PrinterUnavailable.to_string());
            return;
        };
        match editor.print(&printer) {
            Ok(()) => info!("printed"),
            Err(e) => {
                warn!(error = %e, "print failed");
                shell.warn(&e.to_string());
            }
        }
    }
}

// ── Disk I/O ──────────────────────────────────────────────────────────────────

/// Read a document as UTF-8; invalid sequences become U+FFFD.
fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(NotepadError::Open)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Truncate `path` and write `text` to it.
fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(NotepadError::Save)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use tempfile::TempDir;

    use super::*;

    // ── Test doubles ──────────────────────────────────────────────────────────

    /// Records which pass-through edit operations ran.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum EditOp {
        Copy,
        Cut,
        Paste,
        Undo,
        Redo,
    }

    #[derive(Default)]
    struct MemoryEditor {
        text: RefCell<String>,
        ops: RefCell<Vec<EditOp>>,
        printed: RefCell<Vec<String>>,
        print_fails: bool,
    }

    impl MemoryEditor {
        fn with_text(text: &str) -> Self {
            let ed = Self::default();
            *ed.text.borrow_mut() = text.to_owned();
            ed
        }

        fn type_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_owned();
        }
    }

    impl TextEditor for MemoryEditor {
        type Printer = &'static str;

        fn text(&self) -> String {
            self.text.borrow().clone()
        }
        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_owned();
        }
        fn copy(&self) {
            self.ops.borrow_mut().push(EditOp::Copy);
        }
        fn cut(&self) {
            self.ops.borrow_mut().push(EditOp::Cut);
        }
        fn paste(&self) {
            self.ops.borrow_mut().push(EditOp::Paste);
        }
        fn undo(&self) {
            self.ops.borrow_mut().push(EditOp::Undo);
        }
        fn redo(&self) {
            self.ops.borrow_mut().push(EditOp::Redo);
        }
        fn print(&self, printer: &&'static str) -> Result<()> {
            if self.print_fails {
                return Err(NotepadError::Win32 { function: "StartDocW", code: 5 });
            }
            self.printed.borrow_mut().push(format!("{printer}: {}", self.text()));
            Ok(())
        }
    }

    /// Answers dialogs from pre-loaded queues and records what was shown.
    #[derive(Default)]
    struct ScriptedShell {
        open_paths: VecDeque<Option<PathBuf>>,
        save_paths: VecDeque<Option<PathBuf>>,
        answers: VecDeque<bool>,
        printer: Option<&'static str>,
        questions: usize,
        save_prompts: Vec<Option<PathBuf>>,
        warnings: Vec<String>,
        titles: Vec<String>,
    }

    impl ScriptedShell {
        fn last_title(&self) -> Option<&str> {
            self.titles.last().map(String::as_str)
        }
    }

    impl Shell for ScriptedShell {
        type Printer = &'static str;

        fn pick_open_path(&mut self) -> Option<PathBuf> {
            self.open_paths.pop_front().expect("unexpected open dialog")
        }
        fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf> {
            self.save_prompts.push(current.map(Path::to_path_buf));
            self.save_paths.pop_front().expect("unexpected save dialog")
        }
        fn confirm_save_changes(&mut self) -> bool {
            self.questions += 1;
            self.answers.pop_front().expect("unexpected question")
        }
        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_owned());
        }
        fn set_title(&mut self, title: &str) {
            self.titles.push(title.to_owned());
        }
        fn select_printer(&mut self) -> Option<&'static str> {
            self.printer
        }
    }

    fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).expect("write fixture");
        path
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("read back")
    }

    // ── Title ─────────────────────────────────────────────────────────────────

    #[test]
    fn title_untitled_is_app_name() {
        assert_eq!(App::new().window_title(), "Notepad");
    }

    #[test]
    fn title_bound_is_literal_path() {
        let mut app = App::new();
        app.doc.path = Some(PathBuf::from("/tmp/a.txt"));
        assert_eq!(app.window_title(), PathBuf::from("/tmp/a.txt").display().to_string());
    }

    // ── Open ──────────────────────────────────────────────────────────────────

    #[test]
    fn open_loads_file_and_binds() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "line one\nline two\n");
        let mut app = App::new();
        let editor = MemoryEditor::with_text("old");
        let mut shell = ScriptedShell {
            open_paths: VecDeque::from([Some(path.clone())]),
            ..Default::default()
        };

        let flow = app.execute(Command::Open, &editor, &mut shell);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(editor.text(), "line one\nline two\n");
        assert_eq!(app.doc.path.as_deref(), Some(path.as_path()));
        assert_eq!(shell.last_title(), Some(path.display().to_string().as_str()));
        assert!(shell.warnings.is_empty());
    }

    #[test]
    fn open_cancelled_is_silent_noop() {
        let mut app = App::new();
        app.doc.path = Some(PathBuf::from("keep.txt"));
        let editor = MemoryEditor::with_text("keep me");
        let mut shell = ScriptedShell {
            open_paths: VecDeque::from([None]),
            ..Default::default()
        };

        app.execute(Command::Open, &editor, &mut shell);

        assert_eq!(editor.text(), "keep me");
        assert_eq!(app.doc.path, Some(PathBuf::from("keep.txt")));
        assert!(shell.warnings.is_empty());
        assert!(shell.titles.is_empty());
    }

    #[test]
    fn open_failure_warns_and_leaves_state_untouched() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let mut app = App::new();
        app.doc.path = Some(PathBuf::from("keep.txt"));
        let editor = MemoryEditor::with_text("keep me");
        let mut shell = ScriptedShell {
            open_paths: VecDeque::from([Some(missing)]),
            ..Default::default()
        };

        app.execute(Command::Open, &editor, &mut shell);

        assert_eq!(shell.warnings.len(), 1);
        assert!(shell.warnings[0].starts_with("Couldn't open the file: "));
        assert_eq!(editor.text(), "keep me");
        assert_eq!(app.doc.path, Some(PathBuf::from("keep.txt")));
        assert!(shell.titles.is_empty());
    }

    #[test]
    fn open_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xE9").unwrap();
        let mut app = App::new();
        let editor = MemoryEditor::default();
        let mut shell = ScriptedShell {
            open_paths: VecDeque::from([Some(path)]),
            ..Default::default()
        };

        app.execute(Command::Open, &editor, &mut shell);

        assert_eq!(editor.text(), "caf\u{FFFD}");
    }

    #[test]
    fn open_keeps_text_after_embedded_nul() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nul.txt");
        fs::write(&path, b"a\0b").unwrap();
        let mut app = App::new();
        let editor = MemoryEditor::default();
        let mut shell = ScriptedShell {
            open_paths: VecDeque::from([Some(path.clone())]),
            ..Default::default()
        };

        app.execute(Command::Open, &editor, &mut shell);
        app.execute(Command::Save, &editor, &mut shell);

        assert_eq!(editor.text(), "a\0b");
        assert_eq!(fs::read(&path).unwrap(), b"a\0b");
        assert!(shell.warnings.is_empty());
    }

    // ── Save / Save As ────────────────────────────────────────────────────────

    #[test]
    fn save_untitled_goes_through_save_as() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        let mut app = App::new();
        let editor = MemoryEditor::with_text("Hello");
        let mut shell = ScriptedShell {
            save_paths: VecDeque::from([Some(target.clone())]),
            ..Default::default()
        };

        app.execute(Command::Save, &editor, &mut shell);

        assert_eq!(read(&target), "Hello");
        assert_eq!(app.doc.path.as_deref(), Some(target.as_path()));
        assert_eq!(shell.last_title(), Some(target.display().to_string().as_str()));
        assert_eq!(shell.save_prompts, vec![None]);
    }

    #[test]
    fn save_as_then_save_round_trips() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("notes.txt");
        let mut app = App::new();
        let editor = MemoryEditor::with_text("first draft\r\nwith CRLF\r\n");
        let mut shell = ScriptedShell {
            save_paths: VecDeque::from([Some(target.clone())]),
            ..Default::default()
        };

        app.execute(Command::SaveAs, &editor, &mut shell);
        app.execute(Command::Save, &editor, &mut shell);

        assert_eq!(read(&target), "first draft\r\nwith CRLF\r\n");
        // Only the Save As asked for a path.
        assert_eq!(shell.save_prompts.len(), 1);
    }

    #[test]
    fn save_bound_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "a much longer previous body");
        let mut app = App::new();
        app.doc.path = Some(path.clone());
        let editor = MemoryEditor::with_text("short");
        let mut shell = ScriptedShell::default();

        app.execute(Command::Save, &editor, &mut shell);

        assert_eq!(read(&path), "short");
        assert!(shell.titles.is_empty());
    }

    #[test]
    fn save_as_prefills_current_path() {
        let dir = TempDir::new().unwrap();
        let current = write(&dir, "a.txt", "x");
        let mut app = App::new();
        app.doc.path = Some(current.clone());
        let editor = MemoryEditor::with_text("x");
        let mut shell = ScriptedShell {
            save_paths: VecDeque::from([None]),
            ..Default::default()
        };

        app.execute(Command::SaveAs, &editor, &mut shell);

        assert_eq!(shell.save_prompts, vec![Some(current.clone())]);
        assert_eq!(app.doc.path, Some(current));
        assert!(shell.warnings.is_empty());
    }

    #[test]
    fn save_as_failure_keeps_previous_binding() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be opened for writing.
        let target = dir.path().to_path_buf();
        let mut app = App::new();
        let editor = MemoryEditor::with_text("Hello");
        let mut shell = ScriptedShell {
            save_paths: VecDeque::from([Some(target)]),
            ..Default::default()
        };

        app.execute(Command::SaveAs, &editor, &mut shell);

        assert_eq!(shell.warnings.len(), 1);
        assert!(shell.warnings[0].starts_with("Couldn't save the file: "));
        assert_eq!(app.doc.path, None);
        assert!(shell.titles.is_empty());
    }

    // ── New ───────────────────────────────────────────────────────────────────

    #[test]
    fn new_on_empty_buffer_resets_without_asking() {
        let mut app = App::new();
        app.doc.path = Some(PathBuf::from("/nowhere/a.txt"));
        let editor = MemoryEditor::default();
        let mut shell = ScriptedShell::default();

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(app.doc.path, None);
        assert_eq!(editor.text(), "");
        assert_eq!(shell.questions, 0);
        assert_eq!(shell.last_title(), Some(APP_NAME));
    }

    #[test]
    fn new_on_matching_buffer_resets_silently() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "Hello");
        let mut app = App::new();
        app.doc.path = Some(path);
        let editor = MemoryEditor::with_text("Hello");
        let mut shell = ScriptedShell::default();

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(shell.questions, 0);
        assert_eq!(app.doc.path, None);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn new_on_modified_buffer_declined_discards_changes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "Hello");
        let mut app = App::new();
        app.doc.path = Some(path.clone());
        let editor = MemoryEditor::with_text("Hello");
        editor.type_text("Hello!");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([false]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(shell.questions, 1);
        assert_eq!(app.doc.path, None);
        assert_eq!(editor.text(), "");
        assert_eq!(read(&path), "Hello");
    }

    #[test]
    fn new_on_modified_buffer_accepted_saves_then_resets() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "Hello");
        let mut app = App::new();
        app.doc.path = Some(path.clone());
        let editor = MemoryEditor::with_text("Hello!");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([true]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(read(&path), "Hello!");
        assert_eq!(app.doc.path, None);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn new_untitled_declined_clears_buffer() {
        let mut app = App::new();
        let editor = MemoryEditor::with_text("scratch");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([false]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(editor.text(), "");
        assert_eq!(app.doc.path, None);
    }

    #[test]
    fn new_untitled_accepted_saves_as_then_clears() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("scratch.txt");
        let mut app = App::new();
        let editor = MemoryEditor::with_text("scratch");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([true]),
            save_paths: VecDeque::from([Some(target.clone())]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(read(&target), "scratch");
        assert_eq!(editor.text(), "");
        assert_eq!(app.doc.path, None);
        assert_eq!(shell.last_title(), Some(APP_NAME));
    }

    #[test]
    fn new_untitled_save_cancelled_keeps_buffer() {
        let mut app = App::new();
        let editor = MemoryEditor::with_text("scratch");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([true]),
            save_paths: VecDeque::from([None]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(editor.text(), "scratch");
        assert!(shell.titles.is_empty());
    }

    /// A file that can be read but not written, even by an administrator.
    #[cfg(target_os = "linux")]
    fn read_only_file(_dir: &TempDir) -> PathBuf {
        PathBuf::from("/proc/version")
    }

    #[cfg(not(target_os = "linux"))]
    fn read_only_file(dir: &TempDir) -> PathBuf {
        let path = write(dir, "locked.txt", "Hello");
        let mut perms = fs::metadata(&path).expect("stat fixture").permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).expect("lock fixture");
        path
    }

    #[test]
    fn new_on_modified_buffer_keeps_it_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let path = read_only_file(&dir);
        let on_disk = read(&path);
        let mut app = App::new();
        app.doc.path = Some(path.clone());
        let editor = MemoryEditor::with_text("Hello!");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([true]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(shell.questions, 1);
        assert_eq!(shell.warnings.len(), 1);
        assert!(shell.warnings[0].starts_with("Couldn't save the file: "));
        assert_eq!(editor.text(), "Hello!");
        assert_eq!(app.doc.path, Some(path.clone()));
        assert_eq!(read(&path), on_disk);
        assert!(shell.titles.is_empty());
    }

    #[test]
    fn new_untitled_keeps_buffer_when_save_as_fails() {
        let dir = TempDir::new().unwrap();
        let unreachable = dir.path().join("no-such-dir").join("scratch.txt");
        let mut app = App::new();
        let editor = MemoryEditor::with_text("scratch");
        let mut shell = ScriptedShell {
            answers: VecDeque::from([true]),
            save_paths: VecDeque::from([Some(unreachable.clone())]),
            ..Default::default()
        };

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(shell.warnings.len(), 1);
        assert!(shell.warnings[0].starts_with("Couldn't save the file: "));
        assert_eq!(editor.text(), "scratch");
        assert_eq!(app.doc.path, None);
        assert!(!unreachable.exists());
        assert!(shell.titles.is_empty());
    }

    #[test]
    fn new_aborts_when_bound_file_vanished() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone.txt");
        let mut app = App::new();
        app.doc.path = Some(gone.clone());
        let editor = MemoryEditor::with_text("unsaved work");
        let mut shell = ScriptedShell::default();

        app.execute(Command::New, &editor, &mut shell);

        assert_eq!(shell.warnings.len(), 1);
        assert_eq!(shell.questions, 0);
        assert_eq!(editor.text(), "unsaved work");
        assert_eq!(app.doc.path, Some(gone));
    }

    // ── Print ─────────────────────────────────────────────────────────────────

    #[test]
    fn print_renders_buffer_to_chosen_printer() {
        let mut app = App::new();
        let editor = MemoryEditor::with_text("page body");
        let mut shell = ScriptedShell {
            printer: Some("Printer"),
            ..Default::default()
        };

        app.execute(Command::Print, &editor, &mut shell);

        assert_eq!(*editor.printed.borrow(), vec!["Printer: page body".to_owned()]);
        assert!(shell.warnings.is_empty());
    }

    #[test]
    fn print_rejected_warns_cannot_access_printer() {
        let mut app = App::new();
        let editor = MemoryEditor::with_text("page body");
        let mut shell = ScriptedShell::default();

        app.execute(Command::Print, &editor, &mut shell);

        assert_eq!(shell.warnings, vec!["Cannot access printer".to_owned()]);
        assert!(editor.printed.borrow().is_empty());
    }

    #[test]
    fn print_failure_is_reported() {
        let mut app = App::new();
        let editor = MemoryEditor {
            print_fails: true,
            ..MemoryEditor::with_text("x")
        };
        let mut shell = ScriptedShell {
            printer: Some("Printer"),
            ..Default::default()
        };

        app.execute(Command::Print, &editor, &mut shell);

        assert_eq!(shell.warnings, vec!["StartDocW failed (error 0x00000005)".to_owned()]);
    }

    // ── Edit pass-through / Exit ──────────────────────────────────────────────

    #[test]
    fn edit_commands_pass_through() {
        let mut app = App::new();
        let editor = MemoryEditor::default();
        let mut shell = ScriptedShell::default();

        for cmd in [Command::Copy, Command::Cut, Command::Paste, Command::Undo, Command::Redo] {
            app.execute(cmd, &editor, &mut shell);
        }

        assert_eq!(
            *editor.ops.borrow(),
            vec![EditOp::Copy, EditOp::Cut, EditOp::Paste, EditOp::Undo, EditOp::Redo]
        );
    }

    #[test]
    fn redo_is_not_copy() {
        let mut app = App::new();
        let editor = MemoryEditor::default();
        let mut shell = ScriptedShell::default();

        app.execute(Command::Redo, &editor, &mut shell);

        assert_eq!(*editor.ops.borrow(), vec![EditOp::Redo]);
    }

    #[test]
    fn exit_ends_without_prompt() {
        let mut app = App::new();
        let editor = MemoryEditor::with_text("unsaved");
        let mut shell = ScriptedShell::default();

        assert_eq!(app.execute(Command::Exit, &editor, &mut shell), Flow::Exit);
        assert_eq!(shell.questions, 0);
    }
}
