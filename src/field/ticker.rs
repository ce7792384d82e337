//! Fixed-period ticker.
//!
//! Not a real timer: the owner asks `due(now)` once per frame and runs that
//! many steps. A stopped ticker never reports due ticks, so stopping it is
//! enough to guarantee no further autonomous mutation.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start (or restart) counting from `now`. First tick lands one period later.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks elapsed by `now`, capped at `max`.
    ///
    /// When more than `max` are pending the backlog is dropped and the
    /// schedule restarts from `now`.
    pub fn due(&mut self, now: Instant, max: u32) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };

        let mut count = 0;
        while next <= now && count < max {
            count += 1;
            next += self.period;
        }
        if next <= now {
            next = now + self.period;
        }

        self.next_due = Some(next);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Duration = Duration::from_millis(50);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::new(P);
        let now = Instant::now();
        assert_eq!(t.due(now + Duration::from_secs(10), 100), 0);

        t.start(now);
        t.stop();
        assert!(!t.is_running());
        assert_eq!(t.due(now + Duration::from_secs(10), 100), 0);
    }

    #[test]
    fn counts_whole_periods() {
        let mut t = Ticker::new(P);
        let start = Instant::now();
        t.start(start);

        assert_eq!(t.due(start + Duration::from_millis(49), 10), 0);
        assert_eq!(t.due(start + Duration::from_millis(50), 10), 1);
        assert_eq!(t.due(start + Duration::from_millis(175), 10), 2);
        assert_eq!(t.due(start + Duration::from_millis(199), 10), 0);
        assert_eq!(t.due(start + Duration::from_millis(200), 10), 1);
    }

    #[test]
    fn backlog_is_capped_and_resynced() {
        let mut t = Ticker::new(P);
        let start = Instant::now();
        t.start(start);

        let late = start + Duration::from_secs(5);
        assert_eq!(t.due(late, 10), 10);
        assert_eq!(t.due(late + Duration::from_millis(10), 10), 0);
        assert_eq!(t.due(late + P, 10), 1);
    }
}
