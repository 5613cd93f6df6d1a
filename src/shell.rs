//! Line-oriented command shell standing in for the app's screens.
//!
//! Each input line is one user action: a tap on a card menu, a keystroke batch
//! in the editor, a sort choice. The shell applies it to the shared store or to
//! the open editor sheet, and re-renders the home screen whenever the store
//! reports a change through its observer.

use crate::constants::DISCARD_PROMPT;
use crate::editor::EditorSheet;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{CloseOutcome, EditorMode, EntryStore, JournalEntry};
use crate::screen::HomeScreen;
use std::cell::{Cell, Ref, RefCell};
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, info, warn};

const HELP: &str = "\
commands:
  list                 show the home screen
  json                 print all entries as JSON
  new                  open the editor for a new entry
  edit <n>             open the editor for card n
  title <text>         set the draft title
  body <text>          set the draft body
  save                 save the draft
  close                close the editor
  discard | keep       answer the discard confirmation
  delete <n>           delete card n
  bookmark <n>         toggle the bookmark on card n
  sort bookmark|date   reorder the cards
  quit                 leave
";

/// Card ordering offered by the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Bookmark,
    Date,
}

/// One parsed input line. Card positions are 1-based, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Json,
    Help,
    New,
    Edit(usize),
    Title(String),
    Body(String),
    Save,
    Close,
    Discard,
    Keep,
    Delete(usize),
    Bookmark(usize),
    Sort(SortOrder),
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim_start()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "new" => Command::New,
            "edit" => Command::Edit(parse_position(word, rest)?),
            "title" => Command::Title(rest.to_string()),
            "body" => Command::Body(rest.to_string()),
            "save" => Command::Save,
            "close" => Command::Close,
            "discard" => Command::Discard,
            "keep" => Command::Keep,
            "delete" | "rm" => Command::Delete(parse_position(word, rest)?),
            "bookmark" => Command::Bookmark(parse_position(word, rest)?),
            "sort" => match rest.to_ascii_lowercase().as_str() {
                "bookmark" | "bookmarks" => Command::Sort(SortOrder::Bookmark),
                "date" => Command::Sort(SortOrder::Date),
                other => {
                    return Err(AppError::Command(format!(
                        "unknown sort order '{}', use 'bookmark' or 'date'",
                        other
                    )))
                }
            },
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::Command(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };
        Ok(command)
    }
}

impl Command {
    /// The command word, without arguments. Safe to log: never carries entry text.
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Json => "json",
            Command::Help => "help",
            Command::New => "new",
            Command::Edit(_) => "edit",
            Command::Title(_) => "title",
            Command::Body(_) => "body",
            Command::Save => "save",
            Command::Close => "close",
            Command::Discard => "discard",
            Command::Keep => "keep",
            Command::Delete(_) => "delete",
            Command::Bookmark(_) => "bookmark",
            Command::Sort(_) => "sort",
            Command::Quit => "quit",
        }
    }
}

fn parse_position(command: &str, arg: &str) -> AppResult<usize> {
    match arg.trim().parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(AppError::Command(format!(
            "'{}' needs a card number, got '{}'",
            command, arg
        ))),
    }
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The running application: a store, at most one open editor, and an output.
pub struct Shell {
    store: Rc<RefCell<EntryStore>>,
    editor: Option<EditorSheet<'static>>,
    changed: Rc<Cell<bool>>,
}

impl Shell {
    /// Takes ownership of `store` and starts observing it.
    pub fn new(store: EntryStore) -> Self {
        let store = Rc::new(RefCell::new(store));
        let changed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&changed);
        store.borrow_mut().subscribe(move |entries| {
            flag.set(true);
            debug!(count = entries.len(), "Store changed");
        });

        Shell {
            store,
            editor: None,
            changed,
        }
    }

    pub fn store(&self) -> Ref<'_, EntryStore> {
        self.store.borrow()
    }

    /// True while an editor sheet is presented.
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// `quit` with an open editor closes it first, and stays in the loop
    /// while that close is waiting for a discard confirmation.
    ///
    /// Rejected commands are reported on `out` and do not stop the loop; only
    /// I/O failures do.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        self.render_home(out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let outcome = line
                .parse::<Command>()
                .and_then(|command| self.execute(command, out));

            match outcome {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e @ (AppError::Command(_) | AppError::NotFound(_) | AppError::Session(_))) => {
                    warn!(error = %e, "Command rejected");
                    writeln!(out, "error: {}", e)?;
                }
                Err(e) => return Err(e),
            }

            if self.changed.replace(false) {
                self.render_home(out)?;
            }
        }

        if let Some(sheet) = self.editor.as_ref().filter(|sheet| sheet.session().is_dirty()) {
            warn!(
                presentation = %sheet.session().mode().presentation_id(),
                "Input ended with an unsaved draft; it is lost"
            );
        }

        Ok(())
    }

    /// Applies one command.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        debug!(command = command.name(), "Executing command");
        match command {
            Command::List => self.render_home(out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(self.store.borrow().entries())?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => write!(out, "{}", HELP)?,
            Command::New => {
                self.open_editor(EditorMode::New)?;
                writeln!(out, "editing new entry")?;
            }
            Command::Edit(position) => {
                let entry = self.entry_at(position)?;
                let title = entry.title.clone();
                self.open_editor(EditorMode::Edit(entry))?;
                writeln!(out, "editing: {}", title)?;
            }
            Command::Title(text) => self.editor_mut()?.set_title(text)?,
            Command::Body(text) => self.editor_mut()?.set_body(text)?,
            Command::Save => {
                self.editor_mut()?.save()?;
                self.dismiss_finished_editor();
                writeln!(out, "saved")?;
            }
            Command::Close => {
                let outcome = self.editor_mut()?.close()?;
                match outcome {
                    CloseOutcome::Discarded => {
                        self.dismiss_finished_editor();
                        writeln!(out, "closed")?;
                    }
                    CloseOutcome::NeedsConfirmation => {
                        writeln!(out, "{} (discard/keep)", DISCARD_PROMPT)?;
                    }
                }
            }
            Command::Discard => {
                self.editor_mut()?.discard()?;
                self.dismiss_finished_editor();
                writeln!(out, "discarded")?;
            }
            Command::Keep => {
                self.editor_mut()?.keep_editing()?;
                writeln!(out, "back to editing")?;
            }
            Command::Delete(position) => {
                let id = self.entry_at(position)?.id;
                self.store.borrow_mut().delete(id);
            }
            Command::Bookmark(position) => {
                let id = self.entry_at(position)?.id;
                self.store.borrow_mut().toggle_bookmark(id);
            }
            Command::Sort(SortOrder::Bookmark) => self.store.borrow_mut().sort_by_bookmark(),
            Command::Sort(SortOrder::Date) => self.store.borrow_mut().sort_by_date_descending(),
            Command::Quit => return self.quit(out),
        }
        Ok(Flow::Continue)
    }

    fn quit<W: Write>(&mut self, out: &mut W) -> AppResult<Flow> {
        let Some(sheet) = self.editor.as_mut() else {
            return Ok(Flow::Quit);
        };

        match sheet.close()? {
            CloseOutcome::Discarded => {
                self.dismiss_finished_editor();
                writeln!(out, "closed")?;
                Ok(Flow::Quit)
            }
            CloseOutcome::NeedsConfirmation => {
                writeln!(out, "{} (discard/keep)", DISCARD_PROMPT)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn open_editor(&mut self, mode: EditorMode) -> AppResult<()> {
        if self.editor.is_some() {
            return Err(AppError::Command(
                "an editor is already open, save or close it first".to_string(),
            ));
        }

        let is_new = mode == EditorMode::New;
        let store = Rc::clone(&self.store);
        let sheet = EditorSheet::new(
            mode,
            move |entry: JournalEntry| {
                let mut store = store.borrow_mut();
                if is_new {
                    store.add(entry.title, entry.body, entry.date);
                } else {
                    store.update(entry);
                }
            },
            || {},
        );
        info!(
            presentation = %sheet.session().mode().presentation_id(),
            "Editor opened"
        );
        self.editor = Some(sheet);
        Ok(())
    }

    fn editor_mut(&mut self) -> AppResult<&mut EditorSheet<'static>> {
        self.editor
            .as_mut()
            .ok_or_else(|| AppError::Command("no editor is open, use 'new' or 'edit <n>'".to_string()))
    }

    fn dismiss_finished_editor(&mut self) {
        if self.editor.as_ref().is_some_and(|sheet| sheet.is_finished()) {
            self.editor = None;
        }
    }

    fn entry_at(&self, position: usize) -> AppResult<JournalEntry> {
        position
            .checked_sub(1)
            .and_then(|index| self.store.borrow().entries().get(index).cloned())
            .ok_or_else(|| AppError::NotFound(format!("no card at position {}", position)))
    }

    fn render_home<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let store = self.store.borrow();
        let screen = HomeScreen::for_store(&store);
        write!(out, "{}", screen.render(store.entries()))?;
        Ok(())
    }
}
