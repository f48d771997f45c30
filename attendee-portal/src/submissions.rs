use std::{
    collections::HashSet,
    fmt::Display,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Logical operations that send a single backend request per submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    AddAttendee,
    DeleteAttendee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Key of a single submission: what is being done and on behalf of whom
type SubmissionKey = (Operation, String);

/// Registry of the submissions currently waiting on the backend. A submission moves from
/// [SubmitState::Idle] to [SubmitState::Submitting] when [Submissions::begin] hands out a
/// [SubmissionGuard] and back to idle once that guard is dropped, which also happens when the
/// request that owns the guard is abandoned.
#[derive(Debug, Clone, Default)]
pub struct Submissions {
    in_flight: Arc<Mutex<HashSet<SubmissionKey>>>,
}

impl Submissions {
    fn lock(&self) -> MutexGuard<'_, HashSet<SubmissionKey>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a submission of `operation` for `subject`. Returns [None] if the same submission is
    /// already in flight.
    pub fn begin<S: Display>(&self, operation: Operation, subject: S) -> Option<SubmissionGuard> {
        let key = (operation, subject.to_string());
        if !self.lock().insert(key.clone()) {
            log::warn!("Dropped duplicate {:?} submission for {}", key.0, key.1);
            return None;
        }
        Some(SubmissionGuard {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn state<S: Display>(&self, operation: Operation, subject: S) -> SubmitState {
        if self.lock().contains(&(operation, subject.to_string())) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }
}

/// Marks a submission as in flight for as long as it is alive
#[derive(Debug)]
pub struct SubmissionGuard {
    key: SubmissionKey,
    in_flight: Arc<Mutex<HashSet<SubmissionKey>>>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
