use crate::domain::RangeValue;
use anyhow::Result;

/// Trait for host code that wants to hear about filter selections.
///
/// Every notification has a no-op default so a hook only implements the
/// ones it cares about.
pub trait FilterHook: Send + Sync {
    /// Called with the parsed preset before it is resolved
    fn on_start_change(&self, _preset: i64) -> Result<()> {
        Ok(())
    }

    /// Called with the resolved range. `to` comes first.
    fn on_end_change(&self, _to: &RangeValue, _from: &RangeValue) -> Result<()> {
        Ok(())
    }

    /// Called when the no-filter preset is selected
    fn on_selected_no_filter(&self) -> Result<()> {
        Ok(())
    }

    /// Called when the custom preset is selected; the host supplies the range
    fn on_selected_customize_filter(&self, _preset: u8) -> Result<()> {
        Ok(())
    }

    /// Human-readable name for this hook
    fn name(&self) -> &str;
}

/// Registry for managing filter hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn FilterHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a new filter hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: FilterHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    pub fn start_change(&self, preset: i64) {
        self.each(|hook| hook.on_start_change(preset));
    }

    pub fn end_change(&self, to: &RangeValue, from: &RangeValue) {
        self.each(|hook| hook.on_end_change(to, from));
    }

    pub fn selected_no_filter(&self) {
        self.each(|hook| hook.on_selected_no_filter());
    }

    pub fn selected_customize_filter(&self, preset: u8) {
        self.each(|hook| hook.on_selected_customize_filter(preset));
    }

    /// Runs `notify` on every hook; a failing hook does not stop the others.
    fn each<F>(&self, notify: F)
    where
        F: Fn(&dyn FilterHook) -> Result<()>,
    {
        for hook in &self.hooks {
            if let Err(e) = notify(hook.as_ref()) {
                log::warn!("Hook '{}' failed: {:#}", hook.name(), e);
            }
        }
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
