use crate::errors::{StoreError, StoreResult};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

const MAX_KEY_LEN: usize = 64;

static KEY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

/// The date string an entry is stored under, checked so it can be used as part of a file name.
///
/// The key is opaque: `2024-05-01` is the expected shape, but anything made of ASCII letters,
/// digits, `-`, `_` and `.` is accepted. Separators, `..` and whitespace are rejected so a key
/// can never point outside the storage root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey(String);

impl EntryKey {
    pub fn parse(input: &str) -> StoreResult<Self> {
        let invalid = |reason: &str| StoreError::InvalidKey {
            key: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("the date is empty"));
        }
        if input.len() > MAX_KEY_LEN {
            return Err(invalid("the date is too long"));
        }
        if input.contains("..") {
            return Err(invalid("'..' is not allowed"));
        }
        if !KEY_CHARS.is_match(input) {
            return Err(invalid(
                "only letters, digits, '-', '_' and '.' are allowed",
            ));
        }
        if input == "." {
            return Err(invalid("'.' is not allowed"));
        }
        Ok(Self(input.to_string()))
    }

    /// Key for a calendar date, `YYYY-MM-DD`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Key for the current local date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
