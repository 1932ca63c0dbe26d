//! One function per command. Each takes the raw arguments and the book and
//! returns the text to show, or the error to report.

use crate::domain::{AddressBook, Name, Phone, Record};
use crate::utils::error::{BookError, Result};
use chrono::NaiveDate;

fn expect_args<'a, const N: usize>(args: &'a [String], usage: &str) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(BookError::missing_arguments(usage));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Creates the contact, or appends the phone when the name is already known.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, phone] = expect_args(args, "Provide exactly two arguments: name and phone.")?;
    let phone = Phone::new(phone)?;

    if book.contains(name) {
        book.find_mut(name)?.add_phone(phone.as_str())?;
        return Ok("Phone added to existing contact.".to_string());
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone.as_str())?;
    book.add(record)?;
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, old_phone, new_phone] =
        expect_args(args, "Provide name, old phone, and new phone.")?;
    book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok(format!("Phone number updated for contact '{}'.", name))
}

pub fn remove_contact(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name] = expect_args(args, "Provide exactly one name to delete the contact.")?;
    book.delete(name)?;
    Ok(format!("Contact '{}' has been deleted.", name))
}

pub fn show_phone(args: &[String], book: &AddressBook) -> Result<String> {
    let [name] = expect_args(args, "Please provide exactly one name.")?;
    let record = book.find(name)?;
    if record.phones().is_empty() {
        return Ok(format!("No phone numbers found for contact '{}'.", name));
    }
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(format!("Phone numbers for '{}': {}", name, phones.join(", ")))
}

pub fn show_all(book: &AddressBook) -> Result<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    let lines: Vec<String> = book.iter().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}

/// The reply says "updated" when a birthday was already on record.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String> {
    let [name, birthday] = expect_args(args, "Provide name and birthday.")?;
    let record = book.find_mut(name)?;
    let had_birthday = record.birthday().is_some();
    record.add_birthday(birthday)?;
    Ok(if had_birthday {
        "Birthday updated."
    } else {
        "Birthday added."
    }
    .to_string())
}

pub fn show_birthday(args: &[String], book: &AddressBook) -> Result<String> {
    let [name] = expect_args(args, "Please enter a name.")?;
    Ok(match book.find(name)?.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "No birthday found.".to_string(),
    })
}

pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> Result<String> {
    let upcoming = book.upcoming_birthdays(today, window_days)?;
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(format!("Upcoming Birthdays:\n{}", lines.join("\n")))
}
