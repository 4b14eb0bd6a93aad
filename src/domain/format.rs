use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::FilterError;

/// String layout applied to resolved dates.
///
/// The `H:i` pair of the ISO and full layouts is filled from the minute and
/// second of the reference instant, not hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateFormat {
    /// `Y-m-d H:i`
    Iso,
    /// `d/m/Y`
    Short,
    /// `d/m/Y`
    It,
    /// `m/d/Y`
    En,
    /// `d/m/Y H:i`
    FullIt,
    /// `m/d/Y H:i`
    FullEn,
    /// `d-m-Y`
    #[default]
    Default,
}

impl DateFormat {
    pub const ALL: [DateFormat; 7] = [
        DateFormat::Iso,
        DateFormat::Short,
        DateFormat::It,
        DateFormat::En,
        DateFormat::FullIt,
        DateFormat::FullEn,
        DateFormat::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DateFormat::Iso => "ISO",
            DateFormat::Short => "short",
            DateFormat::It => "it",
            DateFormat::En => "en",
            DateFormat::FullIt => "full-it",
            DateFormat::FullEn => "full-en",
            DateFormat::Default => "default",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d %M:%S",
            DateFormat::Short | DateFormat::It => "%d/%m/%Y",
            DateFormat::En => "%m/%d/%Y",
            DateFormat::FullIt => "%d/%m/%Y %M:%S",
            DateFormat::FullEn => "%m/%d/%Y %M:%S",
            DateFormat::Default => "%d-%m-%Y",
        }
    }

    pub fn render(self, value: NaiveDateTime) -> String {
        value.format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DateFormat {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                FilterError::misconfiguration(format!("unknown formatDateString {s:?}"))
            })
    }
}

impl TryFrom<String> for DateFormat {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.name().to_string()
    }
}
