//! Keyed sliding-window rate limiter.
//!
//! Per-key submission timestamps live in process memory only; limits reset on
//! restart and are not shared between instances. That is an accepted trade-off
//! for a single-process deployment. The component is owned and injected by the
//! caller rather than living in module-global state, so a shared external
//! store can replace it without touching the handlers.

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Limited,
}

pub struct SlidingWindowLimiter {
    max_requests: usize,
    window: TimeDelta,
    entries: DashMap<String, Vec<DateTime<Utc>>>,
    last_prune: Mutex<DateTime<Utc>>,
}

impl SlidingWindowLimiter {
    /// `max_requests` submissions per trailing `window` per key.
    pub fn new(max_requests: usize, window: TimeDelta) -> Self {
        Self {
            max_requests,
            window,
            entries: DashMap::new(),
            last_prune: Mutex::new(Utc::now()),
        }
    }

    /// Check the key against the window and record this attempt.
    ///
    /// The attempt is recorded even when the decision is `Limited`: a caller
    /// who keeps hammering a limited key keeps refreshing their own window.
    /// Intentional — sustained abuse tightens the effective limit instead of
    /// draining off as the window slides.
    pub fn check_and_record(&self, key: &str) -> Decision {
        self.check_and_record_at(key, Utc::now())
    }

    /// Clock-injected variant of [`check_and_record`](Self::check_and_record).
    pub fn check_and_record_at(&self, key: &str, now: DateTime<Utc>) -> Decision {
        self.maybe_prune(now);

        let mut timestamps = self.entries.entry(key.to_owned()).or_default();
        timestamps.retain(|t| now.signed_duration_since(*t) < self.window);
        timestamps.push(now);

        if timestamps.len() > self.max_requests {
            tracing::debug!(key, attempts = timestamps.len(), "rate limit exceeded");
            Decision::Limited
        } else {
            Decision::Allowed
        }
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }

    /// Drop keys whose every timestamp has aged out of the window.
    ///
    /// Runs at most once per window length so the sweep cost stays off the
    /// request path under normal traffic.
    fn maybe_prune(&self, now: DateTime<Utc>) {
        {
            let mut last = self.last_prune.lock();
            if now.signed_duration_since(*last) < self.window {
                return;
            }
            *last = now;
        }
        let window = self.window;
        self.entries
            .retain(|_, timestamps| {
                timestamps
                    .iter()
                    .any(|t| now.signed_duration_since(*t) < window)
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(5, TimeDelta::minutes(15))
    }

    #[test]
    fn fifth_attempt_allowed_sixth_limited() {
        let limiter = limiter();
        let t0 = Utc::now();
        for i in 0..5 {
            let at = t0 + TimeDelta::seconds(i);
            assert_eq!(limiter.check_and_record_at("1.2.3.4", at), Decision::Allowed);
        }
        assert_eq!(
            limiter.check_and_record_at("1.2.3.4", t0 + TimeDelta::seconds(5)),
            Decision::Limited
        );
    }

    #[test]
    fn keys_are_independent() {
        let limiter = limiter();
        let t0 = Utc::now();
        for i in 0..5 {
            limiter.check_and_record_at("a", t0 + TimeDelta::seconds(i));
        }
        assert_eq!(limiter.check_and_record_at("a", t0), Decision::Limited);
        assert_eq!(limiter.check_and_record_at("b", t0), Decision::Allowed);
    }

    #[test]
    fn window_slides() {
        let limiter = limiter();
        let t0 = Utc::now();
        for i in 0..5 {
            limiter.check_and_record_at("a", t0 + TimeDelta::seconds(i));
        }
        // 16 minutes later the old attempts have aged out.
        let later = t0 + TimeDelta::minutes(16);
        assert_eq!(limiter.check_and_record_at("a", later), Decision::Allowed);
    }

    #[test]
    fn limited_attempts_still_consume_slots() {
        let limiter = SlidingWindowLimiter::new(2, TimeDelta::minutes(15));
        let t0 = Utc::now();
        limiter.check_and_record_at("a", t0);
        limiter.check_and_record_at("a", t0 + TimeDelta::seconds(1));
        // Third attempt is limited but still recorded.
        assert_eq!(
            limiter.check_and_record_at("a", t0 + TimeDelta::seconds(2)),
            Decision::Limited
        );
        // 14 minutes after t0 the rejected attempt from t0+2s is still inside
        // the window, so the caller remains limited.
        assert_eq!(
            limiter.check_and_record_at("a", t0 + TimeDelta::minutes(14)),
            Decision::Limited
        );
    }

    #[test]
    fn stale_keys_are_pruned() {
        let limiter = limiter();
        let t0 = Utc::now();
        limiter.check_and_record_at("old", t0);
        assert_eq!(limiter.tracked_keys(), 1);

        // A fresh attempt for a different key an hour later triggers the
        // opportunistic sweep and drops the stale entry.
        limiter.check_and_record_at("new", t0 + TimeDelta::hours(1));
        assert_eq!(limiter.tracked_keys(), 1);
    }
}
