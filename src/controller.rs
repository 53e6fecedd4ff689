//! The mutation controller: owns the document, the rendered rows of the
//! active list, and the task input field. Every mutation persists the whole
//! document, keeps rows and records in step, and recomputes progress.

use crate::io::persistence;
use crate::io::store::KeyValueStore;
use crate::model::document::{Document, TaskId};
use crate::ops::list_ops::{self, ListError};
use crate::ops::progress::{Celebration, Progress};
use crate::ops::task_ops::{self, TaskError};
use crate::util::line_input::LineInput;

/// Banner text when a write fails
pub const SAVE_FAILED: &str = "Could not save. Storage unavailable.";

/// Error type for controller operations. All of these are validation
/// failures that leave state untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    #[error(transparent)]
    Task(#[from] TaskError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error("no task at row {0}")]
    RowOutOfRange(usize),
}

/// Something the UI should show after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Transient error for the banner
    Error(String),
    /// The active list just became fully complete
    Celebrate,
}

/// One rendered task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TaskId,
    pub text: String,
    pub checked: bool,
}

impl Row {
    /// Completed tasks have to be unchecked before they can be edited
    pub fn edit_enabled(&self) -> bool {
        !self.checked
    }
}

/// A delete waiting for the user to confirm it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub row: usize,
    pub id: TaskId,
    pub text: String,
}

pub struct Controller {
    doc: Document,
    store: Box<dyn KeyValueStore>,
    rows: Vec<Row>,
    input: LineInput,
    pending_edit: Option<usize>,
    progress: Progress,
    celebration: Celebration,
    feedback: Vec<Feedback>,
}

impl Controller {
    /// Load the document from `store` and render the selected list.
    pub fn open(mut store: Box<dyn KeyValueStore>) -> Self {
        let doc = persistence::load(store.as_mut());
        let mut controller = Controller {
            doc,
            store,
            rows: Vec::new(),
            input: LineInput::default(),
            pending_edit: None,
            progress: Progress::default(),
            celebration: Celebration::default(),
            feedback: Vec::new(),
        };
        controller.load_tasks();
        controller
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selected_list(&self) -> &str {
        &self.doc.selected_list
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// True when the empty-state indicator should show
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn pending_edit(&self) -> Option<usize> {
        self.pending_edit
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LineInput {
        &mut self.input
    }

    /// Drain feedback accumulated since the last call
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }

    // -----------------------------------------------------------------------
    // Rendering state
    // -----------------------------------------------------------------------

    /// Rebuild the rows from the active list's records
    pub fn load_tasks(&mut self) {
        self.doc.ensure_selected();
        self.rows = self
            .doc
            .active_tasks()
            .iter()
            .map(|t| Row {
                id: t.id,
                text: t.text.clone(),
                checked: t.completed,
            })
            .collect();
        self.refresh();
    }

    /// Recompute progress over the rows and check for the celebration
    fn refresh(&mut self) {
        self.progress = Progress::from_flags(self.rows.iter().map(|r| r.checked));
        if self.celebration.observe(self.progress) {
            tracing::info!(list = %self.doc.selected_list, "all tasks complete");
            self.feedback.push(Feedback::Celebrate);
        }
    }

    /// Write the document; a failure is reported and retried on the next
    /// mutation, in-memory state stays as it is
    fn persist(&mut self) {
        if let Err(e) = persistence::save(self.store.as_mut(), &self.doc) {
            tracing::error!(error = %e, "failed to save document");
            self.feedback.push(Feedback::Error(SAVE_FAILED.to_string()));
        }
    }

    fn row(&self, row: usize) -> Result<&Row, TodoError> {
        self.rows.get(row).ok_or(TodoError::RowOutOfRange(row))
    }

    // -----------------------------------------------------------------------
    // Lists
    // -----------------------------------------------------------------------

    pub fn select_list(&mut self, name: &str) -> Result<(), TodoError> {
        list_ops::select_list(&mut self.doc, name)?;
        tracing::debug!(list = name, "selected list");
        self.persist();
        self.load_tasks();
        Ok(())
    }

    pub fn add_list(&mut self, name: &str) -> Result<(), TodoError> {
        let name = list_ops::add_list(&mut self.doc, name)?;
        tracing::debug!(list = %name, "created list");
        self.persist();
        self.load_tasks();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Add a task to the active list, at `insert_at` when given (appending if
    /// out of range). Returns the row it landed on.
    pub fn add(
        &mut self,
        text: &str,
        completed: bool,
        insert_at: Option<usize>,
    ) -> Result<usize, TodoError> {
        self.doc.ensure_selected();
        let list = self.doc.selected_list.clone();
        let (index, id) = task_ops::add_task(&mut self.doc, &list, text, completed, insert_at)?;

        let text = self.doc.lists[&list][index].text.clone();
        let row = match insert_at {
            Some(i) if i < self.rows.len() => i,
            _ => self.rows.len(),
        };
        self.rows.insert(
            row,
            Row {
                id,
                text,
                checked: completed,
            },
        );
        tracing::debug!(list = %list, row, "added task");

        self.persist();
        self.refresh();
        self.input.clear();
        self.pending_edit = None;
        Ok(row)
    }

    /// The add action: submit the input field. With an edit pending, the
    /// task goes back to the position it was taken from.
    pub fn submit(&mut self) -> Result<usize, TodoError> {
        let text = self.input.text().to_string();
        self.add(&text, false, self.pending_edit)
    }

    /// Flip a row's checkbox. Returns the new state.
    pub fn toggle(&mut self, row: usize) -> Result<bool, TodoError> {
        let list = self.doc.selected_list.clone();
        let r = self
            .rows
            .get_mut(row)
            .ok_or(TodoError::RowOutOfRange(row))?;
        r.checked = !r.checked;
        let (id, checked) = (r.id, r.checked);

        match task_ops::set_completed(&mut self.doc, &list, id, checked) {
            Ok(()) => self.persist(),
            Err(e) => tracing::warn!(row, error = %e, "toggle: no matching task in document"),
        }
        self.refresh();
        Ok(checked)
    }

    /// Move a task into the input field for editing.
    ///
    /// The task leaves the document right away and only returns when the
    /// input is submitted. Abandoning the input loses it.
    pub fn edit(&mut self, row: usize) -> Result<(), TodoError> {
        let r = self.row(row)?;
        if !r.edit_enabled() {
            return Err(TaskError::CompletedNotEditable.into());
        }
        let (id, row_text) = (r.id, r.text.clone());
        let list = self.doc.selected_list.clone();
        let (text, removed) = match task_ops::take_for_edit(&mut self.doc, &list, id) {
            Ok((_, task)) => (task.text, true),
            Err(TaskError::CompletedNotEditable) => {
                return Err(TaskError::CompletedNotEditable.into());
            }
            Err(e) => {
                tracing::warn!(row, error = %e, "edit: no matching task in document");
                (row_text, false)
            }
        };

        if let Some(prev) = self.pending_edit {
            tracing::warn!(
                row = prev,
                text = self.input.text(),
                "edit started while another was pending; earlier task discarded"
            );
        }
        self.input.set(text);
        self.pending_edit = Some(row);
        self.rows.remove(row);
        tracing::debug!(list = %list, row, "editing task");

        if removed {
            self.persist();
        }
        self.refresh();
        Ok(())
    }

    /// First half of a delete: capture what the user is being asked about.
    pub fn request_delete(&self, row: usize) -> Result<PendingDelete, TodoError> {
        let r = self.row(row)?;
        Ok(PendingDelete {
            row,
            id: r.id,
            text: r.text.clone(),
        })
    }

    /// Second half of a delete, after the user said yes.
    pub fn confirm_delete(&mut self, pending: &PendingDelete) {
        let Some(row) = self.rows.iter().position(|r| r.id == pending.id) else {
            tracing::warn!(row = pending.row, "delete: row no longer rendered");
            return;
        };
        self.rows.remove(row);

        let list = self.doc.selected_list.clone();
        match task_ops::remove_task(&mut self.doc, &list, pending.id) {
            Ok(_) => self.persist(),
            Err(e) => tracing::warn!(row, error = %e, "delete: no matching task in document"),
        }
        tracing::debug!(list = %list, row, "deleted task");
        self.refresh();
    }

    /// Clear the input field. A pending edit is dropped with it.
    pub fn cancel_input(&mut self) {
        if let Some(row) = self.pending_edit.take() {
            tracing::warn!(
                row,
                text = self.input.text(),
                "pending edit abandoned; task discarded"
            );
        }
        self.input.clear();
    }

    /// Called on exit
    pub fn shutdown(&mut self) {
        if let Some(row) = self.pending_edit {
            tracing::warn!(
                row,
                text = self.input.text(),
                "exiting with an edit pending; task discarded"
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::persistence::{STORAGE_KEY, backup_key, decode};
    use crate::io::store::MemoryStore;
    use crate::model::document::Task;
    use pretty_assertions::assert_eq;

    fn open(store: &MemoryStore) -> Controller {
        Controller::open(Box::new(store.clone()))
    }

    fn stored(store: &MemoryStore) -> Document {
        decode(&store.value(STORAGE_KEY).expect("document saved")).unwrap()
    }

    fn stored_tasks(store: &MemoryStore) -> Vec<Task> {
        stored(store).active_tasks().to_vec()
    }

    fn task(text: &str, completed: bool) -> Task {
        Task {
            text: text.into(),
            completed,
            id: TaskId::default(),
        }
    }

    fn celebrations(c: &mut Controller) -> usize {
        c.take_feedback()
            .into_iter()
            .filter(|f| *f == Feedback::Celebrate)
            .count()
    }

    #[test]
    fn add_appends_and_persists() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        assert!(c.is_empty());

        c.add("Buy milk", false, None).unwrap();
        assert_eq!(c.rows().len(), 1);
        assert!(!c.is_empty());
        assert_eq!(stored_tasks(&store), vec![task("Buy milk", false)]);
    }

    #[test]
    fn add_empty_or_whitespace_changes_nothing() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("keep", false, None).unwrap();
        let before = store.value(STORAGE_KEY);

        assert_eq!(
            c.add("", false, None),
            Err(TodoError::Task(TaskError::EmptyText))
        );
        assert_eq!(
            c.add("   ", false, None),
            Err(TodoError::Task(TaskError::EmptyText))
        );
        assert_eq!(c.rows().len(), 1);
        assert_eq!(store.value(STORAGE_KEY), before);
        assert_eq!(
            TodoError::Task(TaskError::EmptyText).to_string(),
            "Task cannot be empty!"
        );
    }

    #[test]
    fn submit_clears_input() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.input_mut().set("  Walk dog  ");
        assert_eq!(c.submit(), Ok(0));
        assert!(c.input().is_empty());
        assert_eq!(stored_tasks(&store), vec![task("Walk dog", false)]);
    }

    #[test]
    fn insert_at_keeps_rows_and_records_in_step() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("a", false, None).unwrap();
        c.add("c", false, None).unwrap();
        assert_eq!(c.add("b", false, Some(1)), Ok(1));
        assert_eq!(c.add("z", false, Some(99)), Ok(3));

        let rows: Vec<&str> = c.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(rows, vec!["a", "b", "c", "z"]);
        let records: Vec<String> = stored_tasks(&store).into_iter().map(|t| t.text).collect();
        assert_eq!(records, vec!["a", "b", "c", "z"]);
    }

    #[test]
    fn toggle_flips_only_that_record() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        for t in ["a", "b", "c"] {
            c.add(t, false, None).unwrap();
        }
        assert_eq!(c.toggle(1), Ok(true));
        assert_eq!(
            stored_tasks(&store),
            vec![task("a", false), task("b", true), task("c", false)]
        );
        assert!(!c.rows()[1].edit_enabled());

        assert_eq!(c.toggle(1), Ok(false));
        assert_eq!(
            stored_tasks(&store),
            vec![task("a", false), task("b", false), task("c", false)]
        );
        assert!(c.rows()[1].edit_enabled());
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        assert_eq!(c.toggle(0), Err(TodoError::RowOutOfRange(0)));
    }

    #[test]
    fn toggle_desync_only_updates_row() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("a", false, None).unwrap();
        c.document_mut().active_tasks_mut().clear();
        let before = store.value(STORAGE_KEY);

        assert_eq!(c.toggle(0), Ok(true));
        assert!(c.rows()[0].checked);
        assert!(c.document().active_tasks().is_empty());
        assert_eq!(store.value(STORAGE_KEY), before);
        assert_eq!(c.progress(), Progress { completed: 1, total: 1 });
    }

    #[test]
    fn progress_scenario_with_single_celebration() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("Buy milk", false, None).unwrap();
        c.add("Walk dog", false, None).unwrap();
        c.take_feedback();

        c.toggle(0).unwrap();
        assert_eq!(c.progress().label(), "1 / 2");
        assert_eq!(c.progress().percent(), 50.0);
        assert_eq!(celebrations(&mut c), 0);

        c.toggle(1).unwrap();
        assert_eq!(c.progress().label(), "2 / 2");
        assert_eq!(c.progress().percent(), 100.0);
        assert_eq!(celebrations(&mut c), 1);
    }

    #[test]
    fn celebration_refires_after_uncheck_and_recomplete() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("a", false, None).unwrap();
        c.add("b", false, None).unwrap();
        c.toggle(0).unwrap();
        c.toggle(1).unwrap();
        assert_eq!(celebrations(&mut c), 1);

        // Adding a completed task keeps the list complete: no second fire.
        c.add("c", true, None).unwrap();
        assert_eq!(celebrations(&mut c), 0);

        c.toggle(1).unwrap();
        assert_eq!(celebrations(&mut c), 0);
        c.toggle(1).unwrap();
        assert_eq!(celebrations(&mut c), 1);
    }

    #[test]
    fn edit_then_submit_restores_position() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("Task A", false, None).unwrap();

        c.edit(0).unwrap();
        assert_eq!(c.input().text(), "Task A");
        assert_eq!(c.pending_edit(), Some(0));
        assert!(c.is_empty());
        assert!(stored_tasks(&store).is_empty());

        c.input_mut().set("Task A edited");
        assert_eq!(c.submit(), Ok(0));
        assert_eq!(c.pending_edit(), None);
        assert_eq!(stored_tasks(&store), vec![task("Task A edited", false)]);
    }

    #[test]
    fn edit_middle_task_goes_back_in_place() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        for t in ["one", "two", "three"] {
            c.add(t, false, None).unwrap();
        }
        c.edit(1).unwrap();
        c.input_mut().set("TWO");
        assert_eq!(c.submit(), Ok(1));
        let records: Vec<String> = stored_tasks(&store).into_iter().map(|t| t.text).collect();
        assert_eq!(records, vec!["one", "TWO", "three"]);
    }

    #[test]
    fn edit_refuses_completed_task() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("done already", false, None).unwrap();
        c.toggle(0).unwrap();

        assert_eq!(
            c.edit(0),
            Err(TodoError::Task(TaskError::CompletedNotEditable))
        );
        assert_eq!(c.rows().len(), 1);
        assert!(c.input().is_empty());
        assert_eq!(c.pending_edit(), None);
    }

    #[test]
    fn edit_desync_still_prefills() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("ghost", false, None).unwrap();
        c.document_mut().active_tasks_mut().clear();
        let before = store.value(STORAGE_KEY);

        c.edit(0).unwrap();
        assert_eq!(c.input().text(), "ghost");
        assert!(c.is_empty());
        assert_eq!(store.value(STORAGE_KEY), before);
    }

    #[test]
    fn abandoned_edit_loses_the_task() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("fragile", false, None).unwrap();
        c.edit(0).unwrap();
        c.cancel_input();

        assert_eq!(c.pending_edit(), None);
        assert!(c.input().is_empty());
        assert!(stored_tasks(&store).is_empty());
    }

    #[test]
    fn delete_only_task_empties_list() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("only", false, None).unwrap();

        let pending = c.request_delete(0).unwrap();
        assert_eq!(pending.text, "only");
        // Nothing happens until confirmed.
        assert_eq!(c.rows().len(), 1);

        c.confirm_delete(&pending);
        assert!(c.is_empty());
        assert!(stored_tasks(&store).is_empty());
        assert_eq!(c.progress(), Progress::default());
    }

    #[test]
    fn delete_resolves_by_id_not_position() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        for t in ["a", "b", "c"] {
            c.add(t, false, None).unwrap();
        }
        let pending = c.request_delete(2).unwrap();
        // A record in front of the target disappears underneath the rows.
        c.document_mut().active_tasks_mut().remove(0);

        c.confirm_delete(&pending);
        let rows: Vec<&str> = c.rows().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(rows, vec!["a", "b"]);
        let records: Vec<String> = stored_tasks(&store).into_iter().map(|t| t.text).collect();
        assert_eq!(records, vec!["b"]);
    }

    #[test]
    fn delete_desync_still_removes_row() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("ghost", false, None).unwrap();
        let pending = c.request_delete(0).unwrap();
        c.document_mut().active_tasks_mut().clear();

        c.confirm_delete(&pending);
        assert!(c.is_empty());
    }

    #[test]
    fn save_failure_reports_and_retries_next_time() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        store.set_fail_writes(true);

        c.add("x", false, None).unwrap();
        assert_eq!(c.rows().len(), 1);
        assert_eq!(
            c.take_feedback(),
            vec![Feedback::Error(SAVE_FAILED.to_string())]
        );
        assert!(store.value(STORAGE_KEY).is_none());

        store.set_fail_writes(false);
        c.add("y", false, None).unwrap();
        assert_eq!(
            stored_tasks(&store),
            vec![task("x", false), task("y", false)]
        );
    }

    #[test]
    fn add_list_selects_and_renders_it() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("in default", false, None).unwrap();

        c.add_list("Work").unwrap();
        assert_eq!(c.selected_list(), "Work");
        assert!(c.is_empty());
        assert_eq!(stored(&store).selected_list, "Work");

        assert_eq!(
            c.add_list("Work"),
            Err(TodoError::List(ListError::AlreadyExists("Work".into())))
        );
        assert_eq!(
            c.add_list(""),
            Err(TodoError::List(ListError::EmptyName))
        );
    }

    #[test]
    fn select_list_reloads_rows() {
        let store = MemoryStore::new();
        let mut c = open(&store);
        c.add("default task", false, None).unwrap();
        c.add_list("Work").unwrap();
        c.add("work task", false, None).unwrap();

        c.select_list("Default").unwrap();
        assert_eq!(c.rows()[0].text, "default task");
        assert_eq!(stored(&store).selected_list, "Default");
    }

    #[test]
    fn corrupt_storage_resets_on_open() {
        let store = MemoryStore::with_value(STORAGE_KEY, r#"{"foo": 1}"#);
        let c = open(&store);
        assert_eq!(c.document(), &Document::default());
        assert_eq!(store.value(&backup_key()).as_deref(), Some(r#"{"foo": 1}"#));
    }

    #[test]
    fn reopening_shows_saved_rows() {
        let store = MemoryStore::new();
        {
            let mut c = open(&store);
            c.add("persisted", false, None).unwrap();
            c.toggle(0).unwrap();
        }
        let c = open(&store);
        assert_eq!(c.rows().len(), 1);
        assert!(c.rows()[0].checked);
        assert_eq!(c.progress().label(), "1 / 1");
    }
}
