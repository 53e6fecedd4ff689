use crate::model::document::Document;

/// Error type for list operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ListError {
    #[error("List name required!")]
    EmptyName,
    #[error("List already exists!")]
    AlreadyExists(String),
    #[error("no list named {0}")]
    NotFound(String),
}

/// Create an empty list and make it the selected one.
/// Names are trimmed before the duplicate check, so `" Work"` collides with
/// `"Work"`. Matching is otherwise exact and case-sensitive.
pub fn add_list(doc: &mut Document, name: &str) -> Result<String, ListError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListError::EmptyName);
    }
    if doc.lists.contains_key(name) {
        return Err(ListError::AlreadyExists(name.to_string()));
    }
    doc.lists.insert(name.to_string(), Vec::new());
    doc.selected_list = name.to_string();
    Ok(name.to_string())
}

/// Switch the active list. Only existing lists can be selected.
pub fn select_list(doc: &mut Document, name: &str) -> Result<(), ListError> {
    if !doc.lists.contains_key(name) {
        return Err(ListError::NotFound(name.to_string()));
    }
    doc.selected_list = name.to_string();
    Ok(())
}
