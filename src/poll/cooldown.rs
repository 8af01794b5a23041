use chrono::{DateTime, Duration, Utc};

/// Per-source breaker guarding re-fetches of a known-failing dependency.
/// Callers pass `now` explicitly; the breaker never reads the clock itself.
#[derive(Debug, Clone)]
pub struct SourceCooldown {
    cooldown: Duration,
    failure_threshold: u32,
    consecutive_failures: u32,
    open_until: Option<DateTime<Utc>>,
}

impl SourceCooldown {
    pub fn new(cooldown: Duration, failure_threshold: u32) -> Self {
        Self {
            cooldown,
            failure_threshold: failure_threshold.max(1),
            consecutive_failures: 0,
            open_until: None,
        }
    }

    /// While open, the owning source must not be re-fetched.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.open_until.is_some_and(|until| now < until)
    }

    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
        self.open_until = None;
    }

    pub fn record_failure(&mut self, now: DateTime<Utc>) {
        self.consecutive_failures += 1;
        if self.consecutive_failures >= self.failure_threshold {
            self.open_until = Some(now + self.cooldown);
        }
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
    }

    #[test]
    fn opens_after_threshold_failures() {
        let mut cd = SourceCooldown::new(Duration::seconds(30), 2);
        let now = t0();
        cd.record_failure(now);
        assert!(!cd.is_open(now));
        cd.record_failure(now);
        assert!(cd.is_open(now));
        assert!(cd.is_open(now + Duration::seconds(29)));
        assert!(!cd.is_open(now + Duration::seconds(30)));
    }

    #[test]
    fn success_closes_and_resets() {
        let mut cd = SourceCooldown::new(Duration::seconds(30), 1);
        let now = t0();
        cd.record_failure(now);
        assert!(cd.is_open(now));
        cd.record_success();
        assert!(!cd.is_open(now));
        assert_eq!(cd.consecutive_failures(), 0);
    }
}
