use crate::domain::fields::BIRTHDAY_FORMAT;
use crate::domain::record::Record;
use crate::utils::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Name-keyed registry of records. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookSnapshot", into = "BookSnapshot")]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// On-disk shape of the book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

/// A contact whose next birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        let key = record.name().to_string();
        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateContactError { name: key });
        }
        tracing::debug!(contact = %key, "adding contact");
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.records.get(name).ok_or_else(|| not_found(name))
    }

    /// Records are edited in place through the returned reference.
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records.get_mut(name).ok_or_else(|| not_found(name))
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let record = self.records.remove(name).ok_or_else(|| not_found(name))?;
        self.order.retain(|key| key != name);
        tracing::debug!(contact = %name, "deleted contact");
        Ok(record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose next birthday is `0..window_days` days after `today`.
    ///
    /// A birthday that already passed this year is moved to next year. A
    /// 29 February birthday is celebrated on 28 February in common years.
    /// The first record whose date cannot be projected fails the whole query.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Result<Vec<UpcomingBirthday>> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let next = next_occurrence(birthday.date(), today).ok_or_else(|| {
                BookError::InvalidBirthdayError {
                    contact: record.name().to_string(),
                    reason: format!(
                        "{} cannot be projected from {}",
                        birthday,
                        today.format(BIRTHDAY_FORMAT)
                    ),
                }
            })?;

            let delta = (next - today).num_days();
            if (0..i64::from(window_days)).contains(&delta) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: next,
                });
            }
        }

        tracing::debug!(
            window_days,
            matches = upcoming.len(),
            "computed upcoming birthdays"
        );
        Ok(upcoming)
    }
}

fn not_found(name: &str) -> BookError {
    BookError::ContactNotFoundError {
        name: name.to_string(),
    }
}

/// Month/day of `birthday` in `year`, with 29 Feb falling back to 28 Feb.
fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    occurrence_in(birthday, today.year().checked_add(1)?)
}

impl TryFrom<BookSnapshot> for AddressBook {
    type Error = BookError;

    fn try_from(snapshot: BookSnapshot) -> Result<Self> {
        let mut book = AddressBook::new();
        for record in snapshot.contacts {
            record.ensure_unique_phones()?;
            book.add(record)?;
        }
        Ok(book)
    }
}

impl From<AddressBook> for BookSnapshot {
    fn from(mut book: AddressBook) -> Self {
        let contacts = book
            .order
            .iter()
            .filter_map(|key| book.records.remove(key))
            .collect();
        BookSnapshot { contacts }
    }
}
