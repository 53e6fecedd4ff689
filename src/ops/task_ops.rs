use crate::model::document::{Document, Task, TaskId};

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task cannot be empty!")]
    EmptyText,
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("Completed tasks can't be edited")]
    CompletedNotEditable,
    #[error("no list named {0}")]
    UnknownList(String),
}

/// Trim task text, rejecting empty and whitespace-only input.
pub fn validate_text(text: &str) -> Result<&str, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(TaskError::EmptyText)
    } else {
        Ok(trimmed)
    }
}

/// Insert a task into `list`, before the task currently at `at`.
/// `None` or an out-of-range index appends. Returns the index used.
pub fn insert_task(
    doc: &mut Document,
    list: &str,
    task: Task,
    at: Option<usize>,
) -> Result<usize, TaskError> {
    let tasks = doc
        .lists
        .get_mut(list)
        .ok_or_else(|| TaskError::UnknownList(list.to_string()))?;
    let index = match at {
        Some(i) if i < tasks.len() => i,
        _ => tasks.len(),
    };
    tasks.insert(index, task);
    Ok(index)
}

/// Create and insert a task from raw user text.
pub fn add_task(
    doc: &mut Document,
    list: &str,
    text: &str,
    completed: bool,
    at: Option<usize>,
) -> Result<(usize, TaskId), TaskError> {
    let text = validate_text(text)?.to_string();
    if !doc.lists.contains_key(list) {
        return Err(TaskError::UnknownList(list.to_string()));
    }
    let task = doc.new_task(text, completed);
    let id = task.id;
    let index = insert_task(doc, list, task, at)?;
    Ok((index, id))
}

/// Set a task's completed flag.
pub fn set_completed(
    doc: &mut Document,
    list: &str,
    id: TaskId,
    completed: bool,
) -> Result<(), TaskError> {
    let task = doc.find_mut(list, id).ok_or(TaskError::NotFound(id))?;
    task.completed = completed;
    Ok(())
}

/// Remove a task, returning its former position and the record.
pub fn remove_task(doc: &mut Document, list: &str, id: TaskId) -> Result<(usize, Task), TaskError> {
    let index = doc.position_of(list, id).ok_or(TaskError::NotFound(id))?;
    let tasks = doc
        .lists
        .get_mut(list)
        .ok_or_else(|| TaskError::UnknownList(list.to_string()))?;
    Ok((index, tasks.remove(index)))
}

/// Take a task out of its list for editing. Refuses completed tasks.
///
/// The task is gone from the document when this returns; it only comes back
/// when the edited text is submitted at the returned position.
pub fn take_for_edit(doc: &mut Document, list: &str, id: TaskId) -> Result<(usize, Task), TaskError> {
    let task = doc.find(list, id).ok_or(TaskError::NotFound(id))?;
    if task.completed {
        return Err(TaskError::CompletedNotEditable);
    }
    remove_task(doc, list, id)
}

/// Id of the task at a 1-based position, as shown by the CLI.
pub fn id_at(doc: &Document, list: &str, position: usize) -> Option<TaskId> {
    let tasks = doc.lists.get(list)?;
    position
        .checked_sub(1)
        .and_then(|i| tasks.get(i))
        .map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(doc: &Document, list: &str) -> Vec<String> {
        doc.lists[list].iter().map(|t| t.text.clone()).collect()
    }

    fn doc_with(texts: &[&str]) -> Document {
        let mut doc = Document::default();
        for t in texts {
            add_task(&mut doc, "Default", t, false, None).unwrap();
        }
        doc
    }

    #[test]
    fn add_appends_trimmed_text() {
        let mut doc = Document::default();
        let (index, _) = add_task(&mut doc, "Default", "  Buy milk \n", false, None).unwrap();
        assert_eq!(index, 0);
        assert_eq!(doc.lists["Default"][0].text, "Buy milk");
        assert!(!doc.lists["Default"][0].completed);
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut doc = Document::default();
        assert_eq!(
            add_task(&mut doc, "Default", "", false, None),
            Err(TaskError::EmptyText)
        );
        assert_eq!(
            add_task(&mut doc, "Default", " \t ", false, None),
            Err(TaskError::EmptyText)
        );
        assert!(doc.lists["Default"].is_empty());
    }

    #[test]
    fn add_to_unknown_list_fails() {
        let mut doc = Document::default();
        assert_eq!(
            add_task(&mut doc, "Nope", "x", false, None),
            Err(TaskError::UnknownList("Nope".into()))
        );
    }

    #[test]
    fn insert_at_index_goes_before_current_task() {
        let mut doc = doc_with(&["a", "c"]);
        let (index, _) = add_task(&mut doc, "Default", "b", false, Some(1)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(texts(&doc, "Default"), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_out_of_range_appends() {
        let mut doc = doc_with(&["a"]);
        let (index, _) = add_task(&mut doc, "Default", "z", false, Some(42)).unwrap();
        assert_eq!(index, 1);
        assert_eq!(texts(&doc, "Default"), vec!["a", "z"]);
    }

    #[test]
    fn set_completed_only_touches_target() {
        let mut doc = doc_with(&["a", "b", "c"]);
        let id = doc.lists["Default"][1].id;
        set_completed(&mut doc, "Default", id, true).unwrap();
        let flags: Vec<bool> = doc.lists["Default"].iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn set_completed_unknown_id_is_not_found() {
        let mut doc = doc_with(&["a"]);
        assert_eq!(
            set_completed(&mut doc, "Default", TaskId(999), true),
            Err(TaskError::NotFound(TaskId(999)))
        );
    }

    #[test]
    fn remove_returns_position() {
        let mut doc = doc_with(&["a", "b"]);
        let id = doc.lists["Default"][1].id;
        let (index, task) = remove_task(&mut doc, "Default", id).unwrap();
        assert_eq!(index, 1);
        assert_eq!(task.text, "b");
        assert_eq!(texts(&doc, "Default"), vec!["a"]);
    }

    #[test]
    fn take_for_edit_refuses_completed() {
        let mut doc = doc_with(&["a"]);
        let id = doc.lists["Default"][0].id;
        set_completed(&mut doc, "Default", id, true).unwrap();
        assert_eq!(
            take_for_edit(&mut doc, "Default", id),
            Err(TaskError::CompletedNotEditable)
        );
        assert_eq!(doc.lists["Default"].len(), 1);
    }

    #[test]
    fn id_at_is_one_based() {
        let doc = doc_with(&["a", "b"]);
        assert_eq!(id_at(&doc, "Default", 2), Some(doc.lists["Default"][1].id));
        assert_eq!(id_at(&doc, "Default", 0), None);
        assert_eq!(id_at(&doc, "Default", 3), None);
    }
}
