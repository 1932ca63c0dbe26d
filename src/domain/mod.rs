// Domain layer: contact model and the ports its collaborators implement.

pub mod address_book;
pub mod fields;
pub mod ports;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use fields::{Birthday, Name, Phone};
pub use record::Record;
