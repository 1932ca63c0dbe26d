use crate::domain::address_book::AddressBook;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Durable home of the address book between sessions.
pub trait Storage {
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> Result<AddressBook>;
    fn save(&self, book: &AddressBook) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> &str;
    fn birthday_window_days(&self) -> u32;
}

/// Source of "today" for the birthday window.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always answers the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
