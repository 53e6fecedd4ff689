use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name of the list every fresh document starts with
pub const DEFAULT_LIST: &str = "Default";

/// Runtime identity of a task.
///
/// Assigned when a task is loaded or created and never written to storage.
/// Rendered rows carry the id of the record they show, so a row always
/// resolves to its own record even if positions shift underneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub completed: bool,

    #[serde(skip)]
    pub id: TaskId,
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.completed == other.completed
    }
}

impl Eq for Task {}

/// The whole persisted state: every list plus which one is active.
///
/// Serialized as `{ "selectedList": ..., "lists": { name: [task, ...] } }`.
/// List order is insertion order and survives a save/load round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default = "default_list_name", deserialize_with = "list_name_or_default")]
    pub selected_list: String,
    pub lists: IndexMap<String, Vec<Task>>,

    #[serde(skip)]
    next_id: u64,
}

fn default_list_name() -> String {
    DEFAULT_LIST.to_string()
}

/// A null, blank, or non-string selection falls back to the default list
fn list_name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) if !name.is_empty() => name,
        _ => default_list_name(),
    })
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Default for Document {
    fn default() -> Self {
        let mut lists = IndexMap::new();
        lists.insert(DEFAULT_LIST.to_string(), Vec::new());
        Document {
            selected_list: DEFAULT_LIST.to_string(),
            lists,
            next_id: 0,
        }
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.selected_list == other.selected_list && self.lists == other.lists
    }
}

impl Eq for Document {}

impl Document {
    /// Build a task with a fresh id. The task is not inserted anywhere.
    pub fn new_task(&mut self, text: String, completed: bool) -> Task {
        let id = self.next_task_id();
        Task {
            text,
            completed,
            id,
        }
    }

    fn next_task_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    /// Give every task a fresh id (after deserializing)
    pub fn assign_ids(&mut self) {
        let mut next = self.next_id;
        for tasks in self.lists.values_mut() {
            for task in tasks.iter_mut() {
                next += 1;
                task.id = TaskId(next);
            }
        }
        self.next_id = next;
    }

    /// Create an empty list under `name` if none exists
    pub fn ensure_list(&mut self, name: &str) {
        if !self.lists.contains_key(name) {
            self.lists.insert(name.to_string(), Vec::new());
        }
    }

    /// Make sure the selected list has an entry
    pub fn ensure_selected(&mut self) {
        if self.selected_list.is_empty() {
            self.selected_list = default_list_name();
        }
        let name = self.selected_list.clone();
        self.ensure_list(&name);
    }

    /// Tasks of the active list (empty if the entry is missing)
    pub fn active_tasks(&self) -> &[Task] {
        self.lists
            .get(&self.selected_list)
            .map_or(&[], |tasks| tasks.as_slice())
    }

    /// Tasks of the active list, creating the entry if needed
    pub fn active_tasks_mut(&mut self) -> &mut Vec<Task> {
        self.ensure_selected();
        self.lists
            .entry(self.selected_list.clone())
            .or_default()
    }

    /// Position of a task within a list
    pub fn position_of(&self, list: &str, id: TaskId) -> Option<usize> {
        self.lists.get(list)?.iter().position(|t| t.id == id)
    }

    /// Find a task in a list by id
    pub fn find(&self, list: &str, id: TaskId) -> Option<&Task> {
        self.lists.get(list)?.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, list: &str, id: TaskId) -> Option<&mut Task> {
        self.lists.get_mut(list)?.iter_mut().find(|t| t.id == id)
    }

    /// List names in display order
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(|k| k.as_str())
    }
}
