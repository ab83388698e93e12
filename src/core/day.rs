//! Lifecycle of a single day's entry/exit record.
//!
//! ```text
//! NoEntry ──entry──▶ Entered ──exit──▶ PendingConfirmation ──submit──▶ AwaitingAcknowledgement
//!                      ▲                      │                              │        │
//!                      └───────cancel─────────┘                              │      done
//!                      └────────────────────────abandon──────────────────────┘        ▼
//!                                                                                 Submitted
//! ```
//!
//! The state is never stored: it is derived on every call from today's entry
//! log and the pending submission record. Each transition loads the current
//! records, builds new values and saves them back.

use crate::core::calculator::DayView;
use crate::core::clock::Clock;
use crate::core::storage::Storage;
use crate::core::submission::{FormSpec, build_form_link};
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry_log::EntryLog;
use crate::models::pending::{PendingSubmission, SubmissionForm};
use crate::utils::date::today_in;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    NoEntry,
    Entered,
    PendingConfirmation,
    AwaitingAcknowledgement,
    Submitted,
}

impl DayState {
    pub fn label(&self) -> &'static str {
        match self {
            DayState::NoEntry => "no entry",
            DayState::Entered => "entered",
            DayState::PendingConfirmation => "exited, waiting for confirmation",
            DayState::AwaitingAcknowledgement => "form link issued, waiting for acknowledgement",
            DayState::Submitted => "submitted",
        }
    }
}

/// Today's records as loaded from storage. Anything dated another day is dropped.
struct Snapshot {
    today: NaiveDate,
    log: Option<EntryLog>,
    pending: Option<PendingSubmission>,
}

impl Snapshot {
    fn state(&self) -> DayState {
        match &self.log {
            None => DayState::NoEntry,
            Some(log) if log.is_submitted => DayState::Submitted,
            Some(log) if log.exit_time.is_none() => DayState::Entered,
            Some(_) => match &self.pending {
                Some(p) if p.link_built() => DayState::AwaitingAcknowledgement,
                _ => DayState::PendingConfirmation,
            },
        }
    }

    /// Today's log; only called once the state guarantees it exists.
    fn log(&self) -> AppResult<&EntryLog> {
        self.log.as_ref().ok_or(AppError::NotEntered)
    }
}

pub struct DayTracker<'a, S: KeyValueStore, C: Clock> {
    storage: &'a mut Storage<S>,
    clock: &'a C,
    offset: FixedOffset,
}

impl<'a, S: KeyValueStore, C: Clock> DayTracker<'a, S, C> {
    pub fn new(storage: &'a mut Storage<S>, clock: &'a C, offset: FixedOffset) -> Self {
        Self {
            storage,
            clock,
            offset,
        }
    }

    pub fn today(&self) -> NaiveDate {
        today_in(self.clock.now(), &self.offset)
    }

    fn snapshot(&self) -> AppResult<Snapshot> {
        let today = self.today();

        let log = self.storage.entry_log()?.filter(|l| l.is_for(today));
        let pending = self.storage.pending()?.filter(|p| {
            p.log.is_for(today) && log.as_ref().is_some_and(|l| l.exit_time.is_some())
        });

        Ok(Snapshot {
            today,
            log,
            pending,
        })
    }

    pub fn state(&self) -> AppResult<DayState> {
        Ok(self.snapshot()?.state())
    }

    /// Today's record, or `None` when there is none or it is stale.
    pub fn today_log(&self) -> AppResult<Option<EntryLog>> {
        Ok(self.snapshot()?.log)
    }

    pub fn pending(&self) -> AppResult<Option<PendingSubmission>> {
        Ok(self.snapshot()?.pending)
    }

    pub fn has_entered_today(&self) -> AppResult<bool> {
        Ok(self.snapshot()?.log.is_some())
    }

    pub fn has_exited_today(&self) -> AppResult<bool> {
        Ok(self
            .snapshot()?
            .log
            .is_some_and(|l| l.exit_time.is_some()))
    }

    pub fn is_submitted_today(&self) -> AppResult<bool> {
        Ok(self.snapshot()?.log.is_some_and(|l| l.is_submitted))
    }

    /// Display values for this instant, read fresh from storage.
    ///
    /// Another process may have marked the exit or the day may have rolled
    /// over since the last call; both show up here as a view that no longer
    /// ticks.
    pub fn view(&self, work_hours: f64) -> AppResult<DayView> {
        let log = self.snapshot()?.log;
        Ok(DayView::compute(
            log.as_ref(),
            work_hours,
            self.clock.now(),
            &self.offset,
        ))
    }

    /// Mark today's entry at `at`, or now.
    pub fn mark_entry(&mut self, at: Option<DateTime<Utc>>) -> AppResult<EntryLog> {
        let snap = self.snapshot()?;
        match snap.state() {
            DayState::NoEntry => {}
            DayState::Submitted => return Err(AppError::AlreadySubmitted),
            _ => return Err(AppError::AlreadyEntered),
        }

        let entry_time = at.unwrap_or_else(|| self.clock.now());

        let log = EntryLog::new(entry_time, snap.today);
        self.storage.save_entry_log(&log)?;
        // Whatever is left over belongs to an earlier day.
        self.storage.clear_pending()?;

        tracing::debug!(date = %snap.today, entry = %entry_time, "entry marked");
        Ok(log)
    }

    /// Record the exit now and hold `form` until the user confirms the hand-off.
    pub fn mark_exit(&mut self, form: SubmissionForm) -> AppResult<EntryLog> {
        let snap = self.snapshot()?;
        match snap.state() {
            DayState::Entered => {}
            DayState::NoEntry => return Err(AppError::NotEntered),
            _ => return Err(AppError::AlreadyExited),
        }

        let log = snap.log()?.with_exit(self.clock.now());
        self.storage.save_entry_log(&log)?;
        self.storage
            .save_pending(&PendingSubmission::new(log.clone(), form))?;

        tracing::debug!(date = %snap.today, "exit marked, confirmation pending");
        Ok(log)
    }

    /// Build the pre-filled form link for the pending exit.
    ///
    /// The record is not marked submitted here; that only happens through
    /// [`DayTracker::acknowledge_submitted`].
    pub fn confirm_and_build_link(&mut self, spec: &FormSpec) -> AppResult<String> {
        let snap = self.snapshot()?;
        match snap.state() {
            DayState::PendingConfirmation | DayState::AwaitingAcknowledgement => {}
            DayState::Submitted => return Err(AppError::AlreadySubmitted),
            DayState::NoEntry | DayState::Entered => return Err(AppError::NoPendingSubmission),
        }

        let log = snap.log()?;
        let form = snap
            .pending
            .as_ref()
            .map(|p| p.form.clone())
            .unwrap_or_default();

        let link = build_form_link(spec, log, &form, &self.offset)?;
        let pending = PendingSubmission::new(log.clone(), form).with_link(link.clone());
        self.storage.save_pending(&pending)?;

        Ok(link)
    }

    /// The user reports the form as sent: the day is closed.
    pub fn acknowledge_submitted(&mut self) -> AppResult<EntryLog> {
        let snap = self.expect_awaiting()?;

        let log = snap.log()?.submitted();
        self.storage.save_entry_log(&log)?;
        self.storage.clear_pending()?;

        Ok(log)
    }

    /// The user closed the form without sending it: the exit is undone.
    pub fn acknowledge_abandoned(&mut self) -> AppResult<EntryLog> {
        let snap = self.expect_awaiting()?;
        self.revert_exit(&snap)
    }

    /// Drop the pending exit before any link was built.
    pub fn cancel_pending(&mut self) -> AppResult<EntryLog> {
        let snap = self.snapshot()?;
        match snap.state() {
            DayState::PendingConfirmation => {}
            DayState::AwaitingAcknowledgement => return Err(AppError::LinkAlreadyBuilt),
            DayState::Submitted => return Err(AppError::AlreadySubmitted),
            DayState::NoEntry | DayState::Entered => return Err(AppError::NoPendingSubmission),
        }
        self.revert_exit(&snap)
    }

    /// Forget today's record and any pending submission.
    pub fn reset(&mut self) -> AppResult<()> {
        self.storage.clear_entry_log()?;
        self.storage.clear_pending()?;
        Ok(())
    }

    fn expect_awaiting(&self) -> AppResult<Snapshot> {
        let snap = self.snapshot()?;
        match snap.state() {
            DayState::AwaitingAcknowledgement => Ok(snap),
            DayState::PendingConfirmation => Err(AppError::LinkNotBuilt),
            DayState::Submitted => Err(AppError::AlreadySubmitted),
            DayState::NoEntry | DayState::Entered => Err(AppError::NoPendingSubmission),
        }
    }

    fn revert_exit(&mut self, snap: &Snapshot) -> AppResult<EntryLog> {
        let log = snap.log()?.without_exit();
        self.storage.save_entry_log(&log)?;
        self.storage.clear_pending()?;

        tracing::debug!(date = %snap.today, "exit reverted");
        Ok(log)
    }
}
