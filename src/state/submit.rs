//! Form submission state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle`. `begin` is the double-submit guard: it only
//! yields the `Submitting` state from `Idle`, so a click while a request is
//! in flight is dropped. `finish` returns to `Idle` on success and failure
//! alike; the triggering control is disabled exactly while `Submitting`.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    /// Enter `Submitting`, or `None` while a submission is already in flight.
    #[must_use]
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Submitting),
            Self::Submitting => None,
        }
    }

    /// Completion from either outcome returns the form to `Idle`.
    #[must_use]
    pub fn finish(self) -> Self {
        Self::Idle
    }

    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}
