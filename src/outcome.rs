//! Tagged results and the fault-containing call boundary.
//!
//! Every safe operation returns an [`Outcome`]: it either succeeded with a
//! value, was skipped because an input was blank, or failed with the fault
//! attached. Best-effort callers collapse it with [`Outcome::value`],
//! [`Outcome::is_succeeded`] or [`Outcome::or_false`]; callers that need to
//! tell "didn't happen" from "isn't true" match on it directly.
//!
//! [`safe_call`] is the single place where faults are absorbed.

// ============================================================================
// Imports
// ============================================================================

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::error::{Error, Result, STATUS_FAULT, STATUS_SUCCESS};

// ============================================================================
// SkipReason
// ============================================================================

/// Why an operation never reached the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipReason {
    field: &'static str,
}

impl SkipReason {
    /// Creates a skip reason naming the blank input.
    #[inline]
    #[must_use]
    pub const fn blank(field: &'static str) -> Self {
        Self { field }
    }

    /// Returns the name of the blank input.
    #[inline]
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blank input: {}", self.field)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a safe operation.
#[derive(Debug)]
#[must_use]
pub enum Outcome<T> {
    /// The operation ran and produced a value.
    Succeeded(T),
    /// An input was blank; the driver was not contacted.
    Skipped(SkipReason),
    /// The operation was attempted and faulted.
    Failed(Error),
}

impl<T> Outcome<T> {
    /// Returns `true` for [`Outcome::Succeeded`].
    #[inline]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` for [`Outcome::Skipped`].
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Returns `true` for [`Outcome::Failed`].
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the success value, `None` otherwise.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Succeeded(v) => Some(v),
            Self::Skipped(_) | Self::Failed(_) => None,
        }
    }

    /// Returns the fault, if the operation failed.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Succeeded(_) | Self::Skipped(_) => None,
        }
    }

    /// Maps the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Succeeded(v) => Outcome::Succeeded(f(v)),
            Self::Skipped(r) => Outcome::Skipped(r),
            Self::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Converts to a `Result`, reporting a skip as [`Error::BlankInput`].
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Succeeded(v) => Ok(v),
            Self::Skipped(r) => Err(Error::blank_input(r.field())),
            Self::Failed(e) => Err(e),
        }
    }

    /// Returns the legacy integer status.
    ///
    /// | Outcome | Code |
    /// |---------|------|
    /// | `Succeeded` | `1` |
    /// | `Skipped` | `0` |
    /// | `Failed` | see [`Error::status_code`] |
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Succeeded(_) => STATUS_SUCCESS,
            Self::Skipped(_) => STATUS_FAULT,
            Self::Failed(e) => e.status_code(),
        }
    }
}

impl Outcome<bool> {
    /// Returns the boolean result, `false` on skip or fault.
    #[inline]
    pub fn or_false(self) -> bool {
        matches!(self, Self::Succeeded(true))
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(v) => Self::Succeeded(v),
            Err(e) => Self::Failed(e),
        }
    }
}

// ============================================================================
// Input Checks
// ============================================================================

/// Returns the first named input that is empty.
///
/// Inputs are checked in order; only emptiness counts (whitespace is a
/// legitimate selector or text).
#[must_use]
pub fn first_blank(inputs: &[(&'static str, &str)]) -> Option<SkipReason> {
    inputs
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|&(field, _)| SkipReason::blank(field))
}

// ============================================================================
// safe_call
// ============================================================================

/// Runs `op` inside the fault boundary.
///
/// 1. If any of `inputs` is empty, returns [`Outcome::Skipped`] without
///    calling `op`.
/// 2. Otherwise awaits `op()`. An `Err` becomes [`Outcome::Failed`]; a panic
///    raised while polling becomes [`Outcome::Failed`] with
///    [`Error::DriverPanic`].
///
/// # Example
///
/// ```ignore
/// let outcome = safe_call("text", &[("identifier", identifier)], || async {
///     driver.text(&element).await
/// })
/// .await;
/// ```
pub async fn safe_call<T, F, Fut>(
    operation: &'static str,
    inputs: &[(&'static str, &str)],
    op: F,
) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(reason) = first_blank(inputs) {
        debug!(operation, field = reason.field(), "Skipping operation on blank input");
        return Outcome::Skipped(reason);
    }

    match AssertUnwindSafe(async move { op().await })
        .catch_unwind()
        .await
    {
        Ok(Ok(value)) => Outcome::Succeeded(value),
        Ok(Err(e)) => {
            debug!(operation, error = %e, "Operation failed");
            Outcome::Failed(e)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(operation, %message, "Driver panicked");
            Outcome::Failed(Error::driver_panic(message))
        }
    }
}

/// Extracts a printable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
