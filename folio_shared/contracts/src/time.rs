use chrono::{DateTime, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_now(mut self, time: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(time);
        self
    }

    /// Expects one call per entry of `times`, answering them in order.
    pub fn with_now_sequence(mut self, times: Vec<DateTime<Utc>>) -> Self {
        let count = times.len();
        let mut times = times.into_iter();
        self.expect_now()
            .times(count)
            .returning(move || times.next().unwrap());
        self
    }
}
