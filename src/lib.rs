pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::JsonFileStorage;
pub use app::{Assistant, Reply};
pub use config::{CliConfig, Settings};
pub use domain::{AddressBook, Birthday, Name, Phone, Record, UpcomingBirthday};
pub use utils::error::{BookError, Result};
