/// Test utilities for hook dispatch
///
/// `RecordingHook` stores every notification it receives. Clones share the
/// same log, so a test can register one clone and inspect the other.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::infrastructure::test_utils::test_harness::RecordingHook;
///
/// #[test]
/// fn my_test() {
///     let recording = RecordingHook::default();
///     let mut hooks = HookRegistry::new();
///     hooks.register(recording.clone());
///
///     // Drive a FilterSelect with `hooks`...
///     assert!(recording.notifications().is_empty());
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::domain::RangeValue;
    use crate::infrastructure::FilterHook;
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Notification {
        StartChange(i64),
        EndChange { to: RangeValue, from: RangeValue },
        NoFilter,
        CustomizeFilter(u8),
    }

    /// Hook that records notifications in arrival order
    #[derive(Debug, Clone, Default)]
    pub struct RecordingHook {
        log: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingHook {
        pub fn notifications(&self) -> Vec<Notification> {
            self.log.lock().unwrap().clone()
        }

        fn push(&self, notification: Notification) -> Result<()> {
            self.log.lock().unwrap().push(notification);
            Ok(())
        }
    }

    impl FilterHook for RecordingHook {
        fn on_start_change(&self, preset: i64) -> Result<()> {
            self.push(Notification::StartChange(preset))
        }

        fn on_end_change(&self, to: &RangeValue, from: &RangeValue) -> Result<()> {
            self.push(Notification::EndChange {
                to: to.clone(),
                from: from.clone(),
            })
        }

        fn on_selected_no_filter(&self) -> Result<()> {
            self.push(Notification::NoFilter)
        }

        fn on_selected_customize_filter(&self, preset: u8) -> Result<()> {
            self.push(Notification::CustomizeFilter(preset))
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    /// Friday 2024-03-15 at midnight, the reference instant used across tests
    pub fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::infrastructure::FilterHook;

    #[test]
    fn test_clones_share_the_log() {
        let recording = RecordingHook::default();
        let registered = recording.clone();

        registered.on_start_change(4).unwrap();
        registered.on_selected_no_filter().unwrap();

        assert_eq!(
            recording.notifications(),
            vec![Notification::StartChange(4), Notification::NoFilter]
        );
    }

    #[test]
    fn test_reference_is_a_friday() {
        use chrono::{Datelike, Weekday};
        assert_eq!(reference_now().weekday(), Weekday::Fri);
    }
}
