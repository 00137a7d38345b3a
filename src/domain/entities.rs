//! Domain entities: validated player records

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};

/// Name a player falls back to when their name is reset.
pub const ANONYMOUS: &str = "Anonymous";

/// Player unique identifier.
///
/// Always holds the canonical decimal form of a positive integer:
/// no surrounding whitespace, no sign, no leading zeros.
/// The value is kept as text, so there is no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerUid(String);

impl PlayerUid {
    /// Parse and normalize a uid.
    ///
    /// `"007"` → `"7"`, `" 42 "` → `"42"`, `"+5"` → `"5"`, `"1_000"` → `"1000"`.
    /// A single `_` may separate two digits. Only ASCII digits are accepted;
    /// other Unicode decimal digits are rejected.
    /// Zero, negative and non-numeric input is rejected.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();

        if let Some(rest) = trimmed.strip_prefix('-') {
            if decimal_digits(rest).is_some() {
                return Err(DomainError::InvalidUid(format!(
                    "'{}' must be a positive integer",
                    value
                )));
            }
        }

        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits = decimal_digits(unsigned).ok_or_else(|| {
            DomainError::InvalidUid(format!(
                "'{}' is not convertible to a positive integer",
                value
            ))
        })?;

        let canonical = digits.trim_start_matches('0');
        if canonical.is_empty() {
            return Err(DomainError::InvalidUid(format!(
                "'{}' must be a positive integer",
                value
            )));
        }

        Ok(Self(canonical.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digits of a decimal literal with its `_` separators removed.
///
/// `_` must sit between two digits: `1_000` is fine, `_1`, `1_` and `1__0` are not.
fn decimal_digits(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let starts_with_digit = bytes.first().is_some_and(u8::is_ascii_digit);
    let ends_with_digit = bytes.last().is_some_and(u8::is_ascii_digit);
    if !starts_with_digit || !ends_with_digit || s.contains("__") {
        return None;
    }
    if !bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') {
        return None;
    }
    Some(s.replace('_', ""))
}

impl FromStr for PlayerUid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlayerUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player display name, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn parse(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "player name must be a non-empty string".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PlayerName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered player.
///
/// Both fields are validated on construction and on every assignment.
/// A failed assignment leaves the player unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    uid: PlayerUid,
    name: PlayerName,
}

impl Player {
    pub fn new(uid: &str, name: &str) -> DomainResult<Self> {
        Ok(Self {
            uid: PlayerUid::parse(uid)?,
            name: PlayerName::parse(name)?,
        })
    }

    /// Build a player from loosely typed values, e.g. fields of a roster file.
    ///
    /// Both values must be strings; numbers, booleans and tables are rejected
    /// with the error kind of the field they were meant for.
    pub fn from_values(uid: &toml::Value, name: &toml::Value) -> DomainResult<Self> {
        let uid = uid.as_str().ok_or_else(|| {
            DomainError::InvalidUid(format!("expected a string, got {}", uid.type_str()))
        })?;
        let name = name.as_str().ok_or_else(|| {
            DomainError::InvalidName(format!("expected a string, got {}", name.type_str()))
        })?;
        Self::new(uid, name)
    }

    pub fn uid(&self) -> &str {
        self.uid.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn set_uid(&mut self, value: &str) -> DomainResult<()> {
        self.uid = PlayerUid::parse(value)?;
        Ok(())
    }

    pub fn set_name(&mut self, value: &str) -> DomainResult<()> {
        self.name = PlayerName::parse(value)?;
        Ok(())
    }

    /// Revert the name to [`ANONYMOUS`].
    pub fn reset_name(&mut self) {
        self.name = PlayerName::anonymous();
    }

    /// Uids cannot be removed once set; this always fails.
    pub fn reset_uid(&mut self) -> DomainResult<()> {
        Err(DomainError::ImmutableField("uid"))
    }

    /// Human readable form, e.g. `Player (uid=1 named Alice)`.
    pub fn summary(&self) -> String {
        format!("Player (uid={} named {})", self.uid, self.name)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player(uid='{}', name='{}')", self.uid, self.name)
    }
}
