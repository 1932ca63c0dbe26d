//! Validated scalar values held by a contact record.
//!
//! Each type checks its input once, at construction, and is immutable after
//! that. They share nothing but `Display`.

use crate::utils::error::{BookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_FORMAT_MESSAGE: &str = "Phone number must contain exactly 10 digits.";
const BIRTHDAY_FORMAT_MESSAGE: &str = "Invalid date format. Use DD.MM.YYYY";

/// Contact name, the unique key of a record in the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BookError::validation("Contact name cannot be empty."));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// Ten ASCII digits, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookError::validation(PHONE_FORMAT_MESSAGE));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A calendar date entered as `DD.MM.YYYY`. Only the date is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        // day and month may be one or two digits, the year is always four
        let year_well_formed = value
            .rsplit_once('.')
            .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
        if !year_well_formed {
            return Err(BookError::validation(BIRTHDAY_FORMAT_MESSAGE));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| BookError::validation(BIRTHDAY_FORMAT_MESSAGE))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
