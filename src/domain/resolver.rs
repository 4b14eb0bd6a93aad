use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::domain::calendar::{add_days, first_of_month, monday_of};
use crate::domain::preset::{NO_FILTER, Profile, StandardPreset};
use crate::domain::{DateRange, FilterConfig, FilterError};

/// A resolved range, either as dates or rendered with the configured format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedRange {
    Dates(DateRange),
    Formatted { from: String, to: String },
}

impl ResolvedRange {
    /// `(from, to)` as standalone values.
    pub fn endpoints(&self) -> (RangeValue, RangeValue) {
        match self {
            ResolvedRange::Dates(range) => (
                RangeValue::Date(range.start_datetime()),
                RangeValue::Date(range.end_datetime()),
            ),
            ResolvedRange::Formatted { from, to } => {
                (RangeValue::Text(from.clone()), RangeValue::Text(to.clone()))
            }
        }
    }
}

/// One end of a resolved range, as handed to hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeValue {
    Date(NaiveDateTime),
    Text(String),
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeValue::Date(date) => write!(f, "{}", date.date()),
            RangeValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// What a preset selection means for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Clear the active date filter.
    NoFilter,
    /// The host supplies the range through its own flow.
    DeferToCustom(u8),
    Range(ResolvedRange),
}

/// Maps preset codes to date ranges for one [`FilterConfig`].
///
/// Holds no state besides the configuration, so resolving is repeatable
/// and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct DateRangeResolver {
    config: FilterConfig,
}

impl DateRangeResolver {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Parses a raw select value and resolves it.
    pub fn resolve_value(&self, raw: &str, now: NaiveDateTime) -> Result<Outcome, FilterError> {
        self.resolve(parse_preset(raw)?, now)
    }

    /// Resolves `preset` against the reference instant `now`.
    ///
    /// Presets outside the profile's domain, or not offered by the
    /// configuration, are rejected with [`FilterError::InvalidPreset`].
    pub fn resolve(&self, preset: i64, now: NaiveDateTime) -> Result<Outcome, FilterError> {
        let code = u8::try_from(preset)
            .ok()
            .filter(|&code| code <= self.config.profile().max_code())
            .filter(|&code| self.config.is_offered(code))
            .ok_or_else(|| FilterError::invalid_preset(preset))?;

        if code == NO_FILTER {
            return Ok(Outcome::NoFilter);
        }

        let today = now.date();
        let range = match self.config.profile() {
            Profile::Standard => match StandardPreset::from_code(code) {
                Some(StandardPreset::Custom) => return Ok(Outcome::DeferToCustom(code)),
                Some(preset) => standard_range(preset, today),
                None => None,
            },
            Profile::Bucket => bucket_range(code, self.config.serie(), today),
        }
        .ok_or(FilterError::DateOutOfRange { preset: code })?
        .at(now.time());

        log::debug!(
            "preset {code} ({}) resolved to {}..={}",
            self.config.profile(),
            range.start(),
            range.end()
        );

        Ok(Outcome::Range(self.render(range)))
    }

    fn render(&self, range: DateRange) -> ResolvedRange {
        if !self.config.convert_to_string() {
            return ResolvedRange::Dates(range);
        }
        let format = self.config.format();
        ResolvedRange::Formatted {
            from: format.render(range.start_datetime()),
            to: format.render(range.end_datetime()),
        }
    }
}

/// Parses a select value as a preset number. Surrounding whitespace is
/// ignored; anything else that is not an integer is rejected.
pub fn parse_preset(raw: &str) -> Result<i64, FilterError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FilterError::invalid_preset(raw))
}

/// Named presets. Everything except "today" is anchored on yesterday.
fn standard_range(preset: StandardPreset, today: NaiveDate) -> Option<DateRange> {
    let yesterday = add_days(today, -1)?;
    match preset {
        StandardPreset::Today => Some(DateRange::day(today)),
        StandardPreset::Yesterday => Some(DateRange::day(yesterday)),
        StandardPreset::Last7Days => Some(DateRange::between(add_days(yesterday, -6)?, yesterday)),
        StandardPreset::LastWeek => DateRange::week(add_days(monday_of(yesterday)?, -7)?),
        StandardPreset::Last30Days => {
            Some(DateRange::between(add_days(yesterday, -29)?, yesterday))
        }
        StandardPreset::LastMonth => {
            let first = first_of_month(yesterday, -1)?;
            DateRange::month(first.year(), first.month())
        }
        StandardPreset::NoFilter | StandardPreset::Custom => None,
    }
}

/// Bucket `k` spans `[today - k*serie, today - (k-1)*serie]`, anchored on
/// today itself.
fn bucket_range(bucket: u8, serie: u32, today: NaiveDate) -> Option<DateRange> {
    let serie = i64::from(serie);
    let bucket = i64::from(bucket);
    let from = add_days(today, -serie * bucket)?;
    let to = add_days(today, -serie * (bucket - 1))?;
    Some(DateRange::between(from, to))
}
