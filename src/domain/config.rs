use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::preset::{NO_FILTER, PresetOption, Profile, StandardPreset};
use crate::domain::{DateFormat, FilterError};

pub const DEFAULT_SERIE: u32 = 10;

/// Caller-supplied option overrides, keyed like the host widget options.
///
/// Every field is optional; unset fields fall back to the defaults when the
/// options are turned into a [`FilterConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOptions {
    pub values: Option<BTreeMap<u8, String>>,
    pub range_values: Option<BTreeMap<u8, String>>,
    pub serie: Option<i64>,
    #[serde(rename = "type")]
    pub filter_type: Option<String>,
    pub format_date_string: Option<String>,
    pub custom_filter: Option<bool>,
    pub convert_date_to_string: Option<bool>,
    pub empty_filter: Option<bool>,
}

impl FilterOptions {
    /// Field-wise merge where values set in `overrides` win. Label maps are
    /// merged per code.
    pub fn overlay(self, overrides: FilterOptions) -> Self {
        Self {
            values: merge_labels(self.values, overrides.values),
            range_values: merge_labels(self.range_values, overrides.range_values),
            serie: overrides.serie.or(self.serie),
            filter_type: overrides.filter_type.or(self.filter_type),
            format_date_string: overrides.format_date_string.or(self.format_date_string),
            custom_filter: overrides.custom_filter.or(self.custom_filter),
            convert_date_to_string: overrides
                .convert_date_to_string
                .or(self.convert_date_to_string),
            empty_filter: overrides.empty_filter.or(self.empty_filter),
        }
    }
}

fn merge_labels(
    base: Option<BTreeMap<u8, String>>,
    overrides: Option<BTreeMap<u8, String>>,
) -> Option<BTreeMap<u8, String>> {
    match (base, overrides) {
        (Some(mut base), Some(overrides)) => {
            base.extend(overrides);
            Some(base)
        }
        (base, overrides) => overrides.or(base),
    }
}

/// Validated, immutable filter configuration.
///
/// Each instance owns its own label table; the presets that are not
/// offered (no-filter when `empty_filter` is off, custom when
/// `custom_filter` is off) are simply absent from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    profile: Profile,
    serie: u32,
    empty_filter: bool,
    custom_filter: bool,
    format: DateFormat,
    convert_to_string: bool,
    labels: BTreeMap<u8, String>,
}

impl FilterConfig {
    pub fn from_options(options: FilterOptions) -> Result<Self, FilterError> {
        let profile = options
            .filter_type
            .as_deref()
            .map(str::parse::<Profile>)
            .transpose()?
            .unwrap_or_default();

        let serie = match options.serie {
            None => DEFAULT_SERIE,
            Some(serie) => u32::try_from(serie)
                .ok()
                .filter(|&serie| serie > 0)
                .ok_or_else(|| {
                    FilterError::misconfiguration(format!(
                        "serie must be a positive number of days, got {serie}"
                    ))
                })?,
        };

        let format = options
            .format_date_string
            .as_deref()
            .map(str::parse::<DateFormat>)
            .transpose()?
            .unwrap_or_default();

        let empty_filter = options.empty_filter.unwrap_or(true);
        let mut custom_filter = options.custom_filter.unwrap_or(false);
        if custom_filter && profile == Profile::Bucket {
            log::warn!("customFilter has no effect with filter type \"range\"; ignoring it");
            custom_filter = false;
        }

        let (overrides, ignored) = match profile {
            Profile::Standard => (options.values, options.range_values),
            Profile::Bucket => (options.range_values, options.values),
        };
        if ignored.is_some() {
            log::debug!("label overrides for the inactive profile are ignored");
        }

        let mut labels = profile.default_labels(serie);
        for (code, label) in overrides.unwrap_or_default() {
            if code > profile.max_code() {
                return Err(FilterError::misconfiguration(format!(
                    "label given for preset {code}, outside the \"{profile}\" presets 0..={}",
                    profile.max_code()
                )));
            }
            labels.insert(code, label);
        }

        if !empty_filter {
            labels.remove(&NO_FILTER);
        }
        if profile == Profile::Standard && !custom_filter {
            labels.remove(&StandardPreset::Custom.code());
        }

        Ok(Self {
            profile,
            serie,
            empty_filter,
            custom_filter,
            format,
            convert_to_string: options.convert_date_to_string.unwrap_or(true),
            labels,
        })
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn serie(&self) -> u32 {
        self.serie
    }

    pub fn empty_filter(&self) -> bool {
        self.empty_filter
    }

    pub fn custom_filter(&self) -> bool {
        self.custom_filter
    }

    pub fn format(&self) -> DateFormat {
        self.format
    }

    pub fn convert_to_string(&self) -> bool {
        self.convert_to_string
    }

    pub fn is_offered(&self, code: u8) -> bool {
        self.labels.contains_key(&code)
    }

    /// Offered presets in ascending code order.
    pub fn offered_presets(&self) -> Vec<PresetOption> {
        self.labels
            .iter()
            .map(|(&code, label)| PresetOption {
                code,
                label: label.clone(),
            })
            .collect()
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        let profile = Profile::Standard;
        let mut labels = profile.default_labels(DEFAULT_SERIE);
        labels.remove(&StandardPreset::Custom.code());
        Self {
            profile,
            serie: DEFAULT_SERIE,
            empty_filter: true,
            custom_filter: false,
            format: DateFormat::Default,
            convert_to_string: true,
            labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(config: &FilterConfig) -> Vec<u8> {
        config.offered_presets().iter().map(|o| o.code).collect()
    }

    #[test]
    fn test_defaults_match_empty_options() {
        let config = FilterConfig::from_options(FilterOptions::default()).unwrap();
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.profile(), Profile::Standard);
        assert_eq!(config.serie(), 10);
        assert_eq!(config.format(), DateFormat::Default);
        assert!(config.convert_to_string());
        assert_eq!(codes(&config), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_custom_filter_offers_preset_seven() {
        let options = FilterOptions {
            custom_filter: Some(true),
            ..Default::default()
        };
        let config = FilterConfig::from_options(options).unwrap();
        assert!(config.is_offered(7));
        assert_eq!(codes(&config), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_empty_filter_off_drops_no_filter() {
        let options = FilterOptions {
            empty_filter: Some(false),
            ..Default::default()
        };
        let config = FilterConfig::from_options(options).unwrap();
        assert!(!config.is_offered(0));
        assert_eq!(codes(&config), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_filter_off_applies_to_bucket_profile() {
        let options = FilterOptions {
            filter_type: Some("range".into()),
            empty_filter: Some(false),
            ..Default::default()
        };
        let config = FilterConfig::from_options(options).unwrap();
        assert_eq!(codes(&config), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_custom_filter_ignored_for_bucket_profile() {
        let options = FilterOptions {
            filter_type: Some("range".into()),
            custom_filter: Some(true),
            ..Default::default()
        };
        let config = FilterConfig::from_options(options).unwrap();
        assert!(!config.custom_filter());
        assert!(!config.is_offered(7));
    }

    #[test]
    fn test_non_positive_serie_is_rejected() {
        for serie in [0, -5, i64::from(u32::MAX) + 1] {
            let options = FilterOptions {
                serie: Some(serie),
                ..Default::default()
            };
            assert!(matches!(
                FilterConfig::from_options(options),
                Err(FilterError::Misconfiguration(_))
            ));
        }
    }

    #[test]
    fn test_unknown_type_and_format_are_rejected() {
        let bad_type = FilterOptions {
            filter_type: Some("weekly".into()),
            ..Default::default()
        };
        assert!(FilterConfig::from_options(bad_type).is_err());

        let bad_format = FilterOptions {
            format_date_string: Some("de".into()),
            ..Default::default()
        };
        assert!(FilterConfig::from_options(bad_format).is_err());
    }

    #[test]
    fn test_label_overrides_are_merged() {
        let options = FilterOptions {
            values: Some(BTreeMap::from([(1, "Oggi".to_string())])),
            ..Default::default()
        };
        let config = FilterConfig::from_options(options).unwrap();
        let offered = config.offered_presets();
        assert_eq!(offered[1].label, "Oggi");
        assert_eq!(offered[2].label, "Yesterday");
    }

    #[test]
    fn test_label_override_outside_domain_is_rejected() {
        let options = FilterOptions {
            filter_type: Some("range".into()),
            range_values: Some(BTreeMap::from([(7, "Too far".to_string())])),
            ..Default::default()
        };
        assert!(matches!(
            FilterConfig::from_options(options),
            Err(FilterError::Misconfiguration(_))
        ));
    }

    #[test]
    fn test_instances_do_not_share_labels() {
        let without_empty = FilterConfig::from_options(FilterOptions {
            empty_filter: Some(false),
            ..Default::default()
        })
        .unwrap();
        let with_defaults = FilterConfig::from_options(FilterOptions::default()).unwrap();
        assert!(!without_empty.is_offered(0));
        assert!(with_defaults.is_offered(0));
    }

    #[test]
    fn test_options_deserialize_from_host_keys() {
        let json = r#"{
            "type": "range",
            "serie": 7,
            "formatDateString": "en",
            "convertDateToString": false,
            "emptyFilter": false,
            "rangeValues": { "1": "This week" }
        }"#;
        let options: FilterOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.filter_type.as_deref(), Some("range"));
        assert_eq!(options.serie, Some(7));

        let config = FilterConfig::from_options(options).unwrap();
        assert_eq!(config.profile(), Profile::Bucket);
        assert_eq!(config.format(), DateFormat::En);
        assert!(!config.convert_to_string());
        assert_eq!(config.offered_presets()[0].label, "This week");
    }

    #[test]
    fn test_unknown_option_key_is_rejected() {
        let result = serde_json::from_str::<FilterOptions>(r#"{ "series": 3 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let base = FilterOptions {
            serie: Some(5),
            format_date_string: Some("it".into()),
            values: Some(BTreeMap::from([(1, "Oggi".to_string())])),
            ..Default::default()
        };
        let overrides = FilterOptions {
            serie: Some(15),
            values: Some(BTreeMap::from([(2, "Ieri".to_string())])),
            ..Default::default()
        };
        let merged = base.overlay(overrides);
        assert_eq!(merged.serie, Some(15));
        assert_eq!(merged.format_date_string.as_deref(), Some("it"));
        assert_eq!(merged.values.unwrap().len(), 2);
    }
}
