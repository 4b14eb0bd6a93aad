use crate::domain::RangeValue;
use crate::infrastructure::FilterHook;
use anyhow::Result;

/// Plugin that reports every filter notification through the `log` facade
pub struct LoggingHook;

impl FilterHook for LoggingHook {
    fn on_start_change(&self, preset: i64) -> Result<()> {
        log::info!("Filter changed to preset {}", preset);
        Ok(())
    }

    fn on_end_change(&self, to: &RangeValue, from: &RangeValue) -> Result<()> {
        log::info!("Filter range: {} .. {}", from, to);
        Ok(())
    }

    fn on_selected_no_filter(&self) -> Result<()> {
        log::info!("Filter cleared");
        Ok(())
    }

    fn on_selected_customize_filter(&self, preset: u8) -> Result<()> {
        log::info!("Custom range requested (preset {})", preset);
        Ok(())
    }

    fn name(&self) -> &str {
        "Logging"
    }
}
