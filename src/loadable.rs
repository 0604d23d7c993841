use std::future::Future;

use crate::error::ApiError;

/// Fetch state of a piece of page data
///
/// A reload does not discard what was already shown: `Loading` and `Error`
/// carry the last successfully loaded value, if any.
#[derive(Debug)]
pub enum Loadable<T, E = ApiError> {
    /// Nothing requested yet
    Idle,
    Loading {
        previous: Option<T>,
    },
    Success(T),
    Error {
        error: E,
        previous: Option<T>,
    },
}

impl<T, E> Default for Loadable<T, E> {
    fn default() -> Self {
        Loadable::Idle
    }
}

impl<T, E> Loadable<T, E> {
    /// Mark a request as in flight, keeping the last good value
    pub fn begin(&mut self) {
        let previous = self.take_latest();
        *self = Loadable::Loading { previous };
    }

    /// Record the outcome of a request
    pub fn settle(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(value) => Loadable::Success(value),
            Err(error) => Loadable::Error {
                error,
                previous: self.take_latest(),
            },
        };
    }

    /// Run `fut` and store its outcome
    ///
    /// The state never stays `Loading` once the future has resolved.
    pub async fn load<F>(&mut self, fut: F) -> Option<&T>
    where
        F: Future<Output = Result<T, E>>,
    {
        self.begin();
        let result = fut.await;
        self.settle(result);
        self.value()
    }

    pub fn reset(&mut self) {
        *self = Loadable::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Loadable::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading { .. })
    }

    /// Value of the most recent request, only if it succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Last successfully loaded value, even if a later request is pending or failed
    pub fn latest(&self) -> Option<&T> {
        match self {
            Loadable::Idle => None,
            Loadable::Success(value) => Some(value),
            Loadable::Loading { previous } | Loadable::Error { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Loadable::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    fn take_latest(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Loadable::Idle => None,
            Loadable::Success(value) => Some(value),
            Loadable::Loading { previous } | Loadable::Error { previous, .. } => previous,
        }
    }
}

impl<T, E> Loadable<Vec<T>, E> {
    /// Last loaded items, or an empty slice if nothing has loaded yet
    pub fn items(&self) -> &[T] {
        self.latest().map(Vec::as_slice).unwrap_or(&[])
    }
}
