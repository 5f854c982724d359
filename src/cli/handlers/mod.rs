use std::path::{Path, PathBuf};

use chrono::Local;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::read_config;
use crate::io::default_data_dir;
use crate::io::store_io::{self, StoreError};
use crate::model::config::AppConfig;
use crate::model::task::TaskId;
use crate::ops::due::due_tasks;
use crate::ops::filter::{FilterSpec, StatusFilter};
use crate::ops::task_ops::{TaskDraft, TaskError};
use crate::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = match cli.data_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => default_data_dir(),
    };

    match cli.command {
        // Read commands
        Commands::List(args) => cmd_list(args, &data_dir, json),
        Commands::Show(args) => cmd_show(args, &data_dir, json),
        Commands::Due => cmd_due(&data_dir, json),

        // Write commands
        Commands::Add(args) => cmd_add(args, &data_dir, json),
        Commands::Edit(args) => cmd_edit(args, &data_dir),
        Commands::Done(args) => cmd_set_completed(args.id, true, &data_dir),
        Commands::Undone(args) => cmd_set_completed(args.id, false, &data_dir),
        Commands::Rm(args) => cmd_rm(args, &data_dir),
        Commands::Mv(args) => cmd_mv(args, &data_dir),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the store for this session.
///
/// Corrupt stored data is recoverable: warn and start from an empty
/// collection rather than crash. A blob written by a newer version is not —
/// starting empty there would clobber data this build cannot read.
fn load_store(data_dir: &Path) -> Result<TaskStore, StoreError> {
    match store_io::load_tasks(data_dir) {
        Ok(tasks) => Ok(TaskStore::new(tasks)),
        Err(StoreError::Corrupt(e)) => {
            eprintln!("warning: stored tasks are corrupt ({e}); starting with an empty list");
            Ok(TaskStore::default())
        }
        Err(e) => Err(e),
    }
}

fn load_config(data_dir: &Path) -> Result<AppConfig, Box<dyn std::error::Error>> {
    Ok(read_config(data_dir)?)
}

fn save(data_dir: &Path, store: &TaskStore) -> Result<(), StoreError> {
    store_io::save_tasks(data_dir, store.tasks())
}

fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(raw)
        .ok_or_else(|| format!("invalid status '{raw}' (expected: completed, pending)"))
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(data_dir)?;
    let store = load_store(data_dir)?;

    let mut spec = FilterSpec::new();
    if let Some(ref keyword) = args.keyword {
        spec = spec.keyword(keyword);
    }
    if let Some(ref status) = args.status {
        spec = spec.status(parse_status(status)?);
    } else if !config.list.show_completed && !args.all {
        spec = spec.status(StatusFilter::Pending);
    }
    if let Some(ref category) = args.category {
        spec = spec.category(category);
    }
    if let Some(from) = args.from {
        spec = spec.date_from(from);
    }
    if let Some(to) = args.to {
        spec = spec.date_to(to);
    }

    // Pair each filtered row with its position in the full collection so
    // the listing stays addressable for `mv` and `show`.
    let rows: Vec<(usize, _)> = store
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| spec.matches(task))
        .collect();

    if json {
        let listing = TaskListJson {
            tasks: rows
                .iter()
                .map(|(pos, task)| task_to_json(task, *pos))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else if rows.is_empty() {
        println!("no tasks");
    } else {
        for (pos, task) in &rows {
            println!("{}", format_task_row(task, *pos));
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(data_dir)?;
    let task = store.get(args.id).ok_or(TaskError::NotFound(args.id))?;
    let position = store.position(args.id).unwrap_or(0);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&task_to_json(task, position))?
        );
    } else {
        for line in format_task_detail(task, position) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_due(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(data_dir)?;
    let today = Local::now().date_naive();
    let due = due_tasks(store.tasks(), today);

    if json {
        let listing = TaskListJson {
            tasks: due
                .iter()
                .map(|task| {
                    let pos = store.position(task.id).unwrap_or(0);
                    task_to_json(task, pos)
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else if due.is_empty() {
        println!("nothing due");
    } else {
        for task in &due {
            let pos = store.position(task.id).unwrap_or(0);
            println!("{}", format_task_row(task, pos));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(data_dir)?;
    let mut store = load_store(data_dir)?;

    let draft = TaskDraft {
        title: args.title,
        category: args.category.unwrap_or_default(),
        due_date: args.due,
        priority: args.priority,
    };
    let id = store.add(&draft, config.add.default_priority)?;
    save(data_dir, &store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&AddedJson { id })?);
    } else {
        println!("{id}");
    }
    Ok(())
}

fn cmd_edit(args: EditArgs, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir)?;
    let existing = store
        .get(args.id)
        .ok_or(TaskError::NotFound(args.id))?
        .clone();

    let due_date = if args.clear_due {
        None
    } else {
        args.due.or(existing.due_date)
    };
    let draft = TaskDraft {
        title: args.title.unwrap_or(existing.title),
        category: args.category.unwrap_or(existing.category),
        due_date,
        priority: args.priority,
    };
    store.edit(args.id, &draft)?;
    save(data_dir, &store)?;
    Ok(())
}

fn cmd_set_completed(
    id: TaskId,
    completed: bool,
    data_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir)?;
    store.set_completed(id, completed)?;
    save(data_dir, &store)?;
    Ok(())
}

fn cmd_rm(args: IdArgs, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(data_dir)?;
    let removed = store.remove(args.id)?;
    save(data_dir, &store)?;
    println!("deleted: {}", removed.title);
    Ok(())
}

fn cmd_mv(args: MvArgs, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if args.from == 0 || args.to == 0 {
        return Err("positions are 1-based".into());
    }
    let mut store = load_store(data_dir)?;
    store.move_task(args.from - 1, args.to - 1)?;
    save(data_dir, &store)?;
    Ok(())
}
