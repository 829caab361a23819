use anyhow::Result;

use studyloop::schedule::session;

use crate::app::App;
use crate::prompt;

/// Percent rendering of a mastery level
fn percent(level: f64) -> String {
    format!("{:.0}%", level * 100.0)
}

pub fn run(app: &App, name: &str) -> Result<()> {
    let mut store = app.open(name)?;
    let today = app.today();

    let due = store.due_indices(today);
    if due.is_empty() {
        println!("No lessons to study today.");
        return Ok(());
    }

    // Strictly in store order; every due lesson gets exactly one outcome
    for (i, &index) in due.iter().enumerate() {
        let lesson = store.lessons()[index].clone();
        println!("Lesson {}/{}.", i + 1, due.len());
        println!("Now studying {}.", lesson.display_name());

        let days_late = session::days_late(&lesson, today);
        if days_late > 0 {
            println!(
                "NOTE: You are {} days late. Therefore a penalty will be applied to your today's progression.",
                days_late
            );
        }

        let understood = prompt::yes_no("Do you understand well today's topic (y/n)? ")?;
        let (updated, report) = session::apply_outcome(&lesson, understood, today);

        println!(
            "Your level progressed from {} to {}.",
            percent(report.old_level),
            percent(report.new_level)
        );
        println!("You will next be tested on {}.", report.next_review.format("%d %b"));
        println!("{}", "-".repeat(80));

        store.replace(index, updated);
    }
    println!("You have finished studying for today!");

    app.snapshots.save(name, store.lessons(), today)?;
    Ok(())
}
