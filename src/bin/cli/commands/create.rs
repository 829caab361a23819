use anyhow::Result;

use studyloop::schedule::{LessonStore, TimetableRule};

use crate::app::App;
use crate::prompt;

pub fn run(app: &App, name: &str) -> Result<()> {
    let mut store = LessonStore::new();

    loop {
        let topic = prompt::line("Please enter the name of the lesson to add (for example: Physics): ")?;
        let start = prompt::date("Please enter the date of the first occurrence (YYYY-MM-DD): ")?;
        let end = prompt::date("Please enter the end date, exclusive (YYYY-MM-DD): ")?;
        let weekdays =
            prompt::weekdays("Please enter the weekday(s) of this lesson (for example: monday friday): ")?;

        store.add_lessons(&TimetableRule {
            topic,
            start,
            end,
            weekdays,
        });

        let again = prompt::yes_no(&format!(
            "There are currently {} lessons. Do you want to add another lesson (y/n)? ",
            store.len()
        ))?;
        if !again {
            break;
        }
    }

    app.snapshots.save(name, store.lessons(), app.today())?;
    println!("Schedule '{}' saved with {} lessons.", name, store.len());
    Ok(())
}
