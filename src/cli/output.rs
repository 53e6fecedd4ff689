use serde::Serialize;

use crate::model::document::{Document, Task};
use crate::ops::progress::Progress;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    /// 1-based position in its list
    pub index: usize,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ProgressJson {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub list: String,
    pub tasks: Vec<TaskJson>,
    pub progress: ProgressJson,
}

#[derive(Serialize)]
pub struct ListInfoJson {
    pub name: String,
    pub selected: bool,
    pub progress: ProgressJson,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(index: usize, task: &Task) -> TaskJson {
    TaskJson {
        index: index + 1,
        text: task.text.clone(),
        completed: task.completed,
    }
}

pub fn progress_of(tasks: &[Task]) -> Progress {
    Progress::from_flags(tasks.iter().map(|t| t.completed))
}

pub fn progress_to_json(progress: Progress) -> ProgressJson {
    ProgressJson {
        completed: progress.completed,
        total: progress.total,
        percent: progress.percent(),
    }
}

pub fn task_list_json(list: &str, tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        list: list.to_string(),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(i, t)| task_to_json(i, t))
            .collect(),
        progress: progress_to_json(progress_of(tasks)),
    }
}

pub fn lists_json(doc: &Document) -> Vec<ListInfoJson> {
    doc.lists
        .iter()
        .map(|(name, tasks)| ListInfoJson {
            name: name.clone(),
            selected: *name == doc.selected_list,
            progress: progress_to_json(progress_of(tasks)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `  2 [x] Walk dog`
pub fn format_task_line(index: usize, task: &Task, index_width: usize) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    format!(
        "{:>width$} {} {}",
        index + 1,
        check,
        task.text,
        width = index_width
    )
}

/// Full listing of one list: a header, the tasks, and the progress readout
pub fn format_task_list(list: &str, tasks: &[Task]) -> String {
    let progress = progress_of(tasks);
    let mut out = format!("{list}\n");
    let index_width = tasks.len().to_string().len();
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format_task_line(i, task, index_width));
        out.push('\n');
    }
    out.push_str(&format!(
        "{}  {:.0}%\n",
        progress.label(),
        progress.percent()
    ));
    out
}

/// One line per list, the selected one starred
pub fn format_lists(doc: &Document) -> String {
    let mut out = String::new();
    for (name, tasks) in &doc.lists {
        let marker = if *name == doc.selected_list { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker} {name}  {}\n",
            progress_of(tasks).label()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::document::TaskId;
    use insta::assert_snapshot;

    fn task(text: &str, completed: bool) -> Task {
        Task {
            text: text.into(),
            completed,
            id: TaskId::default(),
        }
    }

    #[test]
    fn task_list_text() {
        let tasks = vec![task("Buy milk", true), task("Walk dog", false)];
        assert_snapshot!(format_task_list("Default", &tasks).trim_end(), @r"
        Default
        1 [x] Buy milk
        2 [ ] Walk dog
        1 / 2  50%
        ");
    }

    #[test]
    fn indexes_right_align() {
        let tasks: Vec<Task> = (0..10).map(|i| task(&format!("t{i}"), false)).collect();
        assert_eq!(format_task_line(0, &tasks[0], 2), " 1 [ ] t0");
        assert_eq!(format_task_line(9, &tasks[9], 2), "10 [ ] t9");
    }

    #[test]
    fn lists_mark_selection() {
        let mut doc = Document::default();
        doc.lists.insert("Work".into(), vec![task("ship", false)]);
        assert_eq!(format_lists(&doc), "* Default  0 / 0\n  Work  0 / 1\n");
    }

    #[test]
    fn json_indexes_are_one_based() {
        let json = task_list_json("Default", &[task("a", false), task("b", true)]);
        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["tasks"][1]["index"], 2);
        assert_eq!(value["progress"]["percent"], 50.0);
    }
}
