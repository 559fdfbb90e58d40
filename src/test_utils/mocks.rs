//! In-memory doubles for the application ports.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::{
    app_error::{AppError, AppResult},
    application::ports::{clock::Clock, reply_picker::ReplyPicker, waitlist_sink::WaitlistSink},
    domain::entities::{delivery_status::DeliveryStatus, waitlist::WaitlistSubmission},
};

/// Clock that only moves when told to. `sleep` records the duration and
/// advances time by it instead of waiting.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap())
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
            sleeps: Mutex::new(Vec::new()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(by).unwrap();
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
        tokio::task::yield_now().await;
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
pub struct SequencePicker {
    picks: Vec<usize>,
    cursor: AtomicUsize,
    requested: Mutex<Vec<usize>>,
}

impl SequencePicker {
    pub fn new(picks: Vec<usize>) -> Self {
        assert!(!picks.is_empty(), "SequencePicker needs at least one pick");
        Self {
            picks,
            cursor: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// The `len` argument of every `pick` call.
    pub fn requested_lengths(&self) -> Vec<usize> {
        self.requested.lock().unwrap().clone()
    }
}

impl ReplyPicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        self.requested.lock().unwrap().push(len);
        let i = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.picks[i % self.picks.len()]
    }
}

/// Sink that keeps every submission and answers with a fixed status.
pub struct RecordingSink {
    status: DeliveryStatus,
    submissions: Mutex<Vec<WaitlistSubmission>>,
}

impl RecordingSink {
    pub fn new(status: DeliveryStatus) -> Self {
        Self {
            status,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submissions(&self) -> Vec<WaitlistSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistSink for RecordingSink {
    async fn deliver(&self, submission: &WaitlistSubmission) -> AppResult<DeliveryStatus> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(self.status)
    }
}

/// Sink whose transport always fails.
#[derive(Default)]
pub struct FailingSink {
    calls: AtomicUsize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistSink for FailingSink {
    async fn deliver(&self, _submission: &WaitlistSubmission) -> AppResult<DeliveryStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Delivery("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_clock_sleep_advances_time() {
        let clock = ManualClock::new();
        let start = clock.now();

        clock.sleep(Duration::from_millis(1500)).await;

        assert_eq!(clock.now() - start, chrono::Duration::milliseconds(1500));
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(1500)]);
    }

    #[test]
    fn sequence_picker_cycles() {
        let picker = SequencePicker::new(vec![1, 4]);
        let picks: Vec<usize> = (0..5).map(|_| picker.pick(6)).collect();
        assert_eq!(picks, vec![1, 4, 1, 4, 1]);
        assert_eq!(picker.requested_lengths(), vec![6; 5]);
    }
}
