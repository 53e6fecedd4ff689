use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::persistence;
use crate::io::store::FileStore;
use crate::model::document::Document;
use crate::ops::list_ops::{self, ListError};
use crate::ops::task_ops;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand against the store in `storage_dir`
pub fn dispatch(command: Commands, json: bool, storage_dir: &Path) -> CmdResult {
    let mut store = FileStore::new(storage_dir);
    let mut doc = persistence::load(&mut store);

    match command {
        // Read commands
        Commands::Lists => cmd_lists(&doc, json),
        Commands::List(args) => cmd_list(&doc, args, json),

        // Write commands
        Commands::Add(args) => {
            cmd_add(&mut doc, args, json)?;
            save(&mut store, &doc)
        }
        Commands::Done(args) => {
            cmd_done(&mut doc, args, json)?;
            save(&mut store, &doc)
        }
        Commands::Rm(args) => {
            cmd_rm(&mut doc, args, json)?;
            save(&mut store, &doc)
        }
        Commands::NewList(args) => {
            cmd_new_list(&mut doc, args)?;
            save(&mut store, &doc)
        }
        Commands::Select(args) => {
            cmd_select(&mut doc, args)?;
            save(&mut store, &doc)
        }
    }
}

fn save(store: &mut FileStore, doc: &Document) -> CmdResult {
    persistence::save(store, doc)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The list a command targets: `--list` when given, else the selected one
fn resolve_list(doc: &Document, list: Option<String>) -> Result<String, ListError> {
    match list {
        Some(name) if doc.lists.contains_key(&name) => Ok(name),
        Some(name) => Err(ListError::NotFound(name)),
        None => Ok(doc.selected_list.clone()),
    }
}

fn task_at(doc: &Document, list: &str, index: usize) -> Result<crate::model::TaskId, String> {
    task_ops::id_at(doc, list, index).ok_or_else(|| format!("no task {index} in list {list}"))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_lists(doc: &Document, json: bool) -> CmdResult {
    if json {
        println!("{}", serde_json::to_string_pretty(&lists_json(doc))?);
    } else {
        print!("{}", format_lists(doc));
    }
    Ok(())
}

fn cmd_list(doc: &Document, args: ListArgs, json: bool) -> CmdResult {
    let list = resolve_list(doc, args.list)?;
    let tasks = &doc.lists[&list];
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&task_list_json(&list, tasks))?
        );
    } else {
        print!("{}", format_task_list(&list, tasks));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(doc: &mut Document, args: AddArgs, json: bool) -> CmdResult {
    let list = resolve_list(doc, args.list)?;
    let (index, _) = task_ops::add_task(doc, &list, &args.text, false, None)?;
    tracing::debug!(list = %list, index, "cli: added task");
    let task = &doc.lists[&list][index];
    if json {
        println!("{}", serde_json::to_string(&task_to_json(index, task))?);
    } else {
        println!("{}", index + 1);
    }
    Ok(())
}

fn cmd_done(doc: &mut Document, args: IndexArgs, json: bool) -> CmdResult {
    let list = resolve_list(doc, args.list)?;
    let id = task_at(doc, &list, args.index)?;
    let completed = doc.find(&list, id).is_some_and(|t| !t.completed);
    task_ops::set_completed(doc, &list, id, completed)?;
    tracing::debug!(list = %list, index = args.index, completed, "cli: toggled task");

    let index = args.index - 1;
    let task = &doc.lists[&list][index];
    if json {
        println!("{}", serde_json::to_string(&task_to_json(index, task))?);
    } else {
        println!("{}", format_task_line(index, task, 1));
    }
    Ok(())
}

fn cmd_rm(doc: &mut Document, args: IndexArgs, json: bool) -> CmdResult {
    let list = resolve_list(doc, args.list)?;
    let id = task_at(doc, &list, args.index)?;
    let (index, task) = task_ops::remove_task(doc, &list, id)?;
    tracing::debug!(list = %list, index, "cli: removed task");
    if json {
        println!("{}", serde_json::to_string(&task_to_json(index, &task))?);
    } else {
        println!("removed: {}", task.text);
    }
    Ok(())
}

fn cmd_new_list(doc: &mut Document, args: NameArgs) -> CmdResult {
    let name = list_ops::add_list(doc, &args.name)?;
    tracing::debug!(list = %name, "cli: created list");
    println!("{name}");
    Ok(())
}

fn cmd_select(doc: &mut Document, args: NameArgs) -> CmdResult {
    list_ops::select_list(doc, &args.name)?;
    tracing::debug!(list = %args.name, "cli: selected list");
    Ok(())
}
