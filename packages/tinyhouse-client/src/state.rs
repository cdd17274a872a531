//! Request state machine.
//!
//! A request hook owns one [`RequestState`] and changes it only by feeding
//! [`Action`]s through [`reduce`]. The reducer is pure: no IO, no clock,
//! no interior state.
//!
//! | Action            | Resulting state                                   |
//! |-------------------|---------------------------------------------------|
//! | `Fetch`           | previous state with `loading = true`              |
//! | `FetchSuccess(d)` | `{ data: Some(d), loading: false, error: false }` |
//! | `FetchError`      | previous state with `loading = false, error = true` |
//!
//! `Action` is a closed enum, so an unrecognised action cannot reach the
//! reducer at all.

/// What a view renders from: the last data, and two flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: bool,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: false,
        }
    }
}

/// Lifecycle position of a request, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been dispatched yet
    Idle,
    Pending,
    Success,
    Error,
}

impl Phase {
    pub fn is_settled(self) -> bool {
        matches!(self, Phase::Success | Phase::Error)
    }
}

impl<T> RequestState<T> {
    pub fn phase(&self) -> Phase {
        match (self.loading, self.error, self.data.is_some()) {
            (true, _, _) => Phase::Pending,
            (false, true, _) => Phase::Error,
            (false, false, true) => Phase::Success,
            (false, false, false) => Phase::Idle,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    Fetch,
    FetchSuccess(T),
    FetchError,
}

impl<T> Action<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fetch => "FETCH",
            Action::FetchSuccess(_) => "FETCH_SUCCESS",
            Action::FetchError => "FETCH_ERROR",
        }
    }
}

/// Apply one action. `FetchSuccess` replaces `data` wholesale; `Fetch` and
/// `FetchError` leave it untouched.
pub fn reduce<T>(state: RequestState<T>, action: Action<T>) -> RequestState<T> {
    match action {
        Action::Fetch => RequestState {
            loading: true,
            ..state
        },
        Action::FetchSuccess(payload) => RequestState {
            data: Some(payload),
            loading: false,
            error: false,
        },
        Action::FetchError => RequestState {
            loading: false,
            error: true,
            ..state
        },
    }
}
