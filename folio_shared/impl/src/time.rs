use chrono::{DateTime, SubsecRound, Utc};
use folio_di::Build;
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    /// Current time, truncated to whole milliseconds.
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn now_has_millisecond_precision() {
        // Act
        let now = TimeServiceImpl.now();

        // Assert
        assert_eq!(now.nanosecond() % 1_000_000, 0);
        assert!(Utc::now() >= now);
    }
}
