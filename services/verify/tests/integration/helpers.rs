use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use malasosta_verify::domain::ports::{Clock, Mailer};
use malasosta_verify::domain::types::{SLOT_MILLIS, TimeSlot};
use malasosta_verify::error::VerifyServiceError;

// ── MockMailer ───────────────────────────────────────────────────────────────

/// Records every delivery attempt; optionally fails each one after recording
/// it, so tests can assert "exactly one attempt, no retry".
#[derive(Clone)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Shared handle to the recorded `(to, code)` deliveries for
    /// post-execution inspection.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send_code(&self, to: &str, code: &str) -> Result<(), VerifyServiceError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_owned(), code.to_owned()));
        if self.fail {
            return Err(VerifyServiceError::Transport(anyhow::anyhow!(
                "mail API returned 500"
            )));
        }
        Ok(())
    }
}

// ── FrozenClock ──────────────────────────────────────────────────────────────

/// Clock pinned to an arbitrary instant, addressable by slot.
#[derive(Clone, Copy)]
pub struct FrozenClock {
    at: DateTime<Utc>,
}

impl FrozenClock {
    /// Freeze at the first millisecond of the given slot.
    pub fn at_slot(slot: TimeSlot) -> Self {
        Self::within_slot(slot, 0)
    }

    /// Freeze at an offset in milliseconds into the given slot.
    pub fn within_slot(slot: TimeSlot, offset_millis: i64) -> Self {
        let millis = slot * SLOT_MILLIS + offset_millis;
        Self {
            at: Utc.timestamp_millis_opt(millis).unwrap(),
        }
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

// ── Test fixtures ────────────────────────────────────────────────────────────

pub const TEST_OTP_SECRET: &str = "test-otp-secret-for-unit-tests-only";

/// `derive_code("a@b.it", 1000, TEST_OTP_SECRET)`, computed once from an
/// independent implementation of the derivation and pinned here.
pub const REFERENCE_EMAIL: &str = "a@b.it";
pub const REFERENCE_SLOT: TimeSlot = 1000;
pub const REFERENCE_CODE: &str = "521638";
