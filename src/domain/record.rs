use crate::domain::fields::{Birthday, Name, Phone};
use crate::utils::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a fixed name, phones in insertion order, an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        let phone = Phone::new(number)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhoneError {
                phone: phone.to_string(),
                contact: self.name.to_string(),
            });
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<()> {
        let index = self.position_of(number)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces `old` with `new` in place, so listing order survives edits.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::new(new)?;
        let index = self.position_of(old)?;
        // an edit must not leave the same number twice
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == replacement)
        {
            return Err(BookError::DuplicatePhoneError {
                phone: replacement.to_string(),
                contact: self.name.to_string(),
            });
        }
        self.phones[index] = replacement;
        Ok(())
    }

    /// Returns `None` for numbers that are absent or not valid phones at all.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Loaded records bypass `add_phone`, so uniqueness is rechecked.
    pub(crate) fn ensure_unique_phones(&self) -> Result<()> {
        for (i, phone) in self.phones.iter().enumerate() {
            if self.phones[..i].contains(phone) {
                return Err(BookError::DuplicatePhoneError {
                    phone: phone.to_string(),
                    contact: self.name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn position_of(&self, number: &str) -> Result<usize> {
        let phone = Phone::new(number)?;
        self.phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| BookError::PhoneNotFoundError {
                phone: phone.to_string(),
                contact: self.name.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact: {}, Phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        Record::new(Name::new("John").unwrap())
    }

    fn numbers(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_add_phone_keeps_insertion_order() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();
        assert_eq!(numbers(&record), vec!["1111111111", "2222222222", "3333333333"]);
    }

    #[test]
    fn test_duplicate_phone_leaves_record_unchanged() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        let err = record.add_phone("1234567890").unwrap_err();
        assert!(matches!(err, BookError::DuplicatePhoneError { .. }));
        assert_eq!(numbers(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_is_validation_error() {
        let mut record = john();
        assert!(matches!(
            record.add_phone("12345"),
            Err(BookError::ValidationError { .. })
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.remove_phone("1111111111").unwrap();
        assert_eq!(numbers(&record), vec!["2222222222"]);

        let err = record.remove_phone("1111111111").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phone 1111111111 has not been found in contact John."
        );
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        record.edit_phone("2222222222", "9999999999").unwrap();
        assert_eq!(numbers(&record), vec!["1111111111", "9999999999", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_errors() {
        let mut record = john();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        assert!(matches!(
            record.edit_phone("5555555555", "6666666666"),
            Err(BookError::PhoneNotFoundError { .. })
        ));
        assert!(matches!(
            record.edit_phone("1111111111", "bad"),
            Err(BookError::ValidationError { .. })
        ));
        assert!(matches!(
            record.edit_phone("1111111111", "2222222222"),
            Err(BookError::DuplicatePhoneError { .. })
        ));
        // same number in place is a no-op, not a conflict
        record.edit_phone("1111111111", "1111111111").unwrap();
        assert_eq!(numbers(&record), vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(
            record.find_phone("1234567890").map(Phone::as_str),
            Some("1234567890")
        );
        assert!(record.find_phone("0000000000").is_none());
        assert!(record.find_phone("not-a-phone").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = john();
        record.add_birthday("01.01.2000").unwrap();
        record.add_birthday("02.02.2002").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.2002");

        assert!(record.add_birthday("2002-02-02").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.2002");
    }

    #[test]
    fn test_display() {
        let mut record = john();
        assert_eq!(record.to_string(), "Contact: John, Phones: ");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact: John, Phones: 1111111111; 2222222222"
        );

        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact: John, Phones: 1111111111; 2222222222, Birthday: 15.06.1990"
        );
    }
}
