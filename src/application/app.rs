use crate::domain::{
    DateRangeResolver, FilterConfig, FilterError, Outcome, PresetOption, parse_preset,
};
use crate::infrastructure::{HookRegistry, LoggingHook};
use chrono::{Local, NaiveDateTime};

/// The date filter as a select widget sees it: a list of options to show
/// and a change handler that resolves the selection and notifies hooks.
pub struct FilterSelect {
    resolver: DateRangeResolver,
    hooks: HookRegistry,
}

impl FilterSelect {
    pub fn new(config: FilterConfig, hooks: HookRegistry) -> Self {
        Self {
            resolver: DateRangeResolver::new(config),
            hooks,
        }
    }

    pub fn with_default_plugins(config: FilterConfig) -> Self {
        let mut hooks = HookRegistry::new();
        hooks.register(LoggingHook);
        Self::new(config, hooks)
    }

    pub fn without_plugins(config: FilterConfig) -> Self {
        Self::new(config, HookRegistry::new())
    }

    pub fn config(&self) -> &FilterConfig {
        self.resolver.config()
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Entries to populate the select with, in code order.
    pub fn options(&self) -> Vec<PresetOption> {
        self.config().offered_presets()
    }

    /// Handles a change of the select to `raw`, using the local clock.
    pub fn on_change(&self, raw: &str) -> Result<Outcome, FilterError> {
        self.on_change_at(raw, Local::now().naive_local())
    }

    /// Handles a change of the select to `raw` relative to `now`.
    pub fn on_change_at(&self, raw: &str, now: NaiveDateTime) -> Result<Outcome, FilterError> {
        let preset = parse_preset(raw).inspect_err(|_| {
            log::error!("Select values must be numbers --> {:?}", raw);
        })?;

        self.hooks.start_change(preset);

        let outcome = self.resolver.resolve(preset, now).inspect_err(|e| {
            log::warn!("Rejected selection: {}", e);
        })?;

        match &outcome {
            Outcome::NoFilter => self.hooks.selected_no_filter(),
            Outcome::DeferToCustom(preset) => self.hooks.selected_customize_filter(*preset),
            Outcome::Range(range) => {
                let (from, to) = range.endpoints();
                self.hooks.end_change(&to, &from);
            }
        }

        Ok(outcome)
    }
}
