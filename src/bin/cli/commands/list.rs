use anyhow::Result;
use chrono::Duration;

use studyloop::schedule::LessonStore;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let schedules = app.snapshots.list_schedules()?;
    let today = app.today();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for name in &schedules {
                let store = LessonStore::from_lessons(app.snapshots.load(name)?);
                let forecast: Vec<serde_json::Value> = (0..7)
                    .map(|delta| {
                        let date = today + Duration::days(delta);
                        serde_json::json!({
                            "date": date.to_string(),
                            "lessons": store.forecast(date).len(),
                        })
                    })
                    .collect();
                output.push(serde_json::json!({
                    "name": name,
                    "lessonCount": store.len(),
                    "forecast": forecast,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if schedules.is_empty() {
                println!("No schedules found.");
                return Ok(());
            }

            println!("List of schedules:");
            for name in &schedules {
                let store = LessonStore::from_lessons(app.snapshots.load(name)?);
                println!("* {}", name);
                for delta in 0..7 {
                    let date = today + Duration::days(delta);
                    let label = if delta == 0 {
                        "today".to_string()
                    } else {
                        date.format("%A").to_string().to_lowercase()
                    };
                    let pending = store.forecast(date).len();
                    println!("  * {:<10}: {:>2} lessons to study", label, pending);
                }
            }
        }
    }

    Ok(())
}
