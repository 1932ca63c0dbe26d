use address_book::domain::ports::{FixedClock, Storage};
use address_book::{Assistant, JsonFileStorage};
use anyhow::Result;
use chrono::NaiveDate;
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap())
}

fn run_session(storage: JsonFileStorage, input: &str) -> Result<String> {
    let mut assistant = Assistant::load(storage, clock(), 7)?;
    let mut output = Vec::new();
    assistant.run(input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output)?)
}

fn replies(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches("Enter a command: "))
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_full_session_persists_between_runs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("addressbook.json");

    let first = run_session(
        JsonFileStorage::new(&path),
        "add John 1234567890\n\
         add John 1234567890\n\
         add-birthday John 01.01.2030\n\
         show-birthday John\n\
         add Jane 0987654321\n\
         add-birthday Jane 02.01.1995\n\
         close\n",
    )?;

    assert_eq!(
        replies(&first),
        vec![
            "Contact added.",
            "Error: Phone 1234567890 already exists in contact John.",
            "Birthday added.",
            "01.01.2030",
            "Contact added.",
            "Birthday added.",
            "Good bye!",
        ]
    );

    let second = run_session(
        JsonFileStorage::new(&path),
        "all\nbirthdays\nchange John 1234567890 1112223333\nphone John\ndelete Jane\nphone Jane\nexit\n",
    )?;

    assert_eq!(
        replies(&second),
        vec![
            "Contact: John, Phones: 1234567890, Birthday: 01.01.2030",
            "Contact: Jane, Phones: 0987654321, Birthday: 02.01.1995",
            "Upcoming Birthdays:",
            "John: 01.01.2026",
            "Jane: 02.01.2026",
            "Phone number updated for contact 'John'.",
            "Phone numbers for 'John': 1112223333",
            "Contact 'Jane' has been deleted.",
            "Error: Contact 'Jane' has not been found.",
            "Good bye!",
        ]
    );

    let book = JsonFileStorage::new(&path).load()?;
    assert_eq!(book.len(), 1);
    Ok(())
}

#[test]
fn test_corrupt_file_refuses_to_start() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("addressbook.json");
    std::fs::write(&path, "{ broken")?;

    assert!(Assistant::load(JsonFileStorage::new(&path), clock(), 7).is_err());
    assert_eq!(std::fs::read_to_string(&path)?, "{ broken");
    Ok(())
}
