//! Interactive stdin prompts with validation loops

use std::io::{self, Write};

use anyhow::Result;
use chrono::{NaiveDate, Weekday};

/// Print a prompt and read one trimmed line from stdin
pub fn line(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Ask a y/n question until one of the two is given
pub fn yes_no(msg: &str) -> Result<bool> {
    loop {
        match line(msg)?.as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// Ask for a date until it parses as YYYY-MM-DD
pub fn date(msg: &str) -> Result<NaiveDate> {
    loop {
        match NaiveDate::parse_from_str(&line(msg)?, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("ERROR: Incorrect date format."),
        }
    }
}

/// Ask for a space-separated weekday list until every name is valid and
/// at least one is given
pub fn weekdays(msg: &str) -> Result<Vec<Weekday>> {
    loop {
        let input = line(msg)?;

        let mut days = Vec::new();
        let mut all_valid = true;
        for word in input.split_whitespace() {
            match word.parse::<Weekday>() {
                Ok(day) => days.push(day),
                Err(_) => {
                    println!(
                        "ERROR: {} is not a valid weekday. Valid weekdays are: \
                         monday, tuesday, wednesday, thursday, friday, saturday, sunday.",
                        word
                    );
                    all_valid = false;
                    break;
                }
            }
        }

        if all_valid && !days.is_empty() {
            return Ok(days);
        }
    }
}
