use anyhow::Result;

use studyloop::progression;

use crate::app::App;

pub fn run(app: &App, name: &str) -> Result<()> {
    let series = progression::progression_series(&app.snapshots, name)?;
    if series.is_empty() {
        println!("No level changes recorded for '{}' yet.", name);
        return Ok(());
    }

    for lesson in &series {
        println!("{}", lesson.name);
        for sample in &lesson.samples {
            let bar = "#".repeat((sample.level * 20.0).round() as usize);
            println!("  {}  {:>4.0}%  {}", sample.date, sample.level * 100.0, bar);
        }
        println!();
    }

    Ok(())
}
