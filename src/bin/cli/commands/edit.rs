use anyhow::{bail, Result};
use chrono::Duration;

use studyloop::storage::HistoryEditor;

use crate::app::App;
use crate::prompt;

pub fn run(app: &App, name: &str, query: &str) -> Result<()> {
    let store = app.open(name)?;
    let today = app.today();
    let query_lower = query.to_lowercase();

    // Past occurrences are off limits; future ones are always eligible,
    // today's only after explicit confirmation
    let mut due_today = Vec::new();
    let mut future = Vec::new();
    for lesson in store.lessons() {
        if !lesson.topic.to_lowercase().contains(&query_lower) {
            continue;
        }
        if lesson.scheduled == today {
            due_today.push(lesson.clone());
        } else if lesson.scheduled > today {
            future.push(lesson.clone());
        }
    }

    if due_today.is_empty() && future.is_empty() {
        println!("No lessons matching '{}' scheduled today or later.", query);
        return Ok(());
    }

    let mut targets = future;
    if !due_today.is_empty() {
        println!("Matching lessons scheduled today:");
        for lesson in &due_today {
            println!("  - {}", lesson.display_name());
        }
        if prompt::yes_no("Also move today's lessons (y/n)? ")? {
            targets.extend(due_today);
        }
    }

    if targets.is_empty() {
        println!("Nothing to edit.");
        return Ok(());
    }

    println!("Lessons to move:");
    for lesson in &targets {
        println!("  - {}", lesson.display_name());
    }

    // Validate the shift before any file is touched
    let input = prompt::line("Days to shift by (signed, for example 7 or -3): ")?;
    let shift: i64 = match input.parse() {
        Ok(days) => days,
        Err(_) => bail!("'{}' is not a valid signed number of days", input),
    };

    let editor = HistoryEditor::new(&app.snapshots);
    for lesson in &targets {
        let new_date = lesson.scheduled + Duration::days(shift);
        let touched = editor.edit_lesson(name, &lesson.display_name(), new_date)?;
        println!(
            "Moved {} to {} across {} snapshots.",
            lesson.display_name(),
            new_date,
            touched
        );
    }

    // Refresh in-memory state through the standard load policy
    let store = app.open(name)?;
    println!("Reloaded '{}' with {} lessons.", name, store.len());
    Ok(())
}
