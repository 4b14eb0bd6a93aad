use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::FilterError;

/// Preset code that clears the filter, in both profiles.
pub const NO_FILTER: u8 = 0;

/// Number of day buckets offered by the bucket profile.
pub const BUCKET_COUNT: u8 = 6;

/// Which preset table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Profile {
    /// Named presets: today, yesterday, last week, ...
    #[default]
    #[serde(rename = "none")]
    Standard,
    /// Consecutive buckets of `serie` days counting back from today.
    #[serde(rename = "range")]
    Bucket,
}

impl Profile {
    /// Highest preset code of the profile's domain.
    pub fn max_code(self) -> u8 {
        match self {
            Profile::Standard => StandardPreset::Custom.code(),
            Profile::Bucket => BUCKET_COUNT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Standard => "none",
            Profile::Bucket => "range",
        }
    }

    /// Labels shown for every code of the domain when the caller overrides
    /// none of them.
    pub fn default_labels(self, serie: u32) -> BTreeMap<u8, String> {
        match self {
            Profile::Standard => StandardPreset::ALL
                .into_iter()
                .map(|preset| (preset.code(), preset.label().to_string()))
                .collect(),
            Profile::Bucket => {
                let mut labels = BTreeMap::new();
                labels.insert(NO_FILTER, StandardPreset::NoFilter.label().to_string());
                for bucket in 1..=BUCKET_COUNT {
                    labels.insert(bucket, bucket_label(bucket, serie));
                }
                labels
            }
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Profile {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Profile::Standard),
            "range" => Ok(Profile::Bucket),
            other => Err(FilterError::misconfiguration(format!(
                "unknown filter type {other:?} (expected \"none\" or \"range\")"
            ))),
        }
    }
}

fn bucket_label(bucket: u8, serie: u32) -> String {
    let serie = u64::from(serie);
    let bucket = u64::from(bucket);
    if bucket == 1 {
        format!("{serie} days ago")
    } else {
        format!("{} - {} days ago", (bucket - 1) * serie, bucket * serie)
    }
}

/// The named presets of the standard profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StandardPreset {
    NoFilter,
    Today,
    Yesterday,
    Last7Days,
    LastWeek,
    Last30Days,
    LastMonth,
    Custom,
}

impl StandardPreset {
    pub const ALL: [StandardPreset; 8] = [
        StandardPreset::NoFilter,
        StandardPreset::Today,
        StandardPreset::Yesterday,
        StandardPreset::Last7Days,
        StandardPreset::LastWeek,
        StandardPreset::Last30Days,
        StandardPreset::LastMonth,
        StandardPreset::Custom,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StandardPreset::NoFilter => "No filter",
            StandardPreset::Today => "Today",
            StandardPreset::Yesterday => "Yesterday",
            StandardPreset::Last7Days => "Last 7 days",
            StandardPreset::LastWeek => "Last week",
            StandardPreset::Last30Days => "Last 30 days",
            StandardPreset::LastMonth => "Last month",
            StandardPreset::Custom => "Custom",
        }
    }
}

/// One entry of the preset list a select widget would show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetOption {
    pub code: u8,
    pub label: String,
}
