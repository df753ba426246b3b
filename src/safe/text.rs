//! Text reads and the confirmed text entry.
//!
//! [`set_text`] is the one operation with sequencing:
//!
//! ```text
//! Idle -> Cleared -> Submitted -> Confirmed
//!                             \-> TimedOut
//! ```
//!
//! `Confirmed` is `Outcome::Succeeded(())` (status `1`); `TimedOut` is
//! `Outcome::Failed(Error::Timeout)` (status `-1`). A fault in any phase is
//! status `0`.

use std::fmt;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, trace};

use crate::driver::WebDriver;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::locator::attributes;
use crate::options::WaitOptions;
use crate::outcome::{Outcome, first_blank, safe_call};

use super::locate::with_located;
use super::properties::try_attribute;

// ============================================================================
// Read
// ============================================================================

/// Reads the element's visible text, trimmed.
pub async fn try_text<D>(driver: &D, element: &ElementId) -> Outcome<String>
where
    D: WebDriver + ?Sized,
{
    safe_call("text", &[], || async {
        let text = driver.text(element).await?;
        Ok(text.trim().to_string())
    })
    .await
}

/// Best-effort form of [`try_text`].
pub async fn text<D>(driver: &D, element: &ElementId) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_text(driver, element).await.value()
}

/// Locates an element and reads its trimmed text.
pub async fn try_text_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<String>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_text(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_text_by`].
pub async fn text_by<D>(driver: &D, identifier: &str, kind: &str) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_text_by(driver, identifier, kind).await.value()
}

/// Reads the element's `value` attribute.
pub async fn try_value<D>(driver: &D, element: &ElementId) -> Outcome<Option<String>>
where
    D: WebDriver + ?Sized,
{
    try_attribute(driver, element, attributes::VALUE).await
}

/// Best-effort form of [`try_value`].
pub async fn value<D>(driver: &D, element: &ElementId) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_value(driver, element).await.value().flatten()
}

/// Locates an element and reads its `value` attribute.
pub async fn try_value_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<Option<String>>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_value(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_value_by`].
pub async fn value_by<D>(driver: &D, identifier: &str, kind: &str) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_value_by(driver, identifier, kind)
        .await
        .value()
        .flatten()
}

// ============================================================================
// Write
// ============================================================================

/// Phase of a text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Idle,
    Cleared,
    Submitted,
    Confirmed,
    TimedOut,
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Cleared => "cleared",
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::TimedOut => "timed out",
        };
        f.write_str(name)
    }
}

/// Replaces the element's content with `text` and waits until the element
/// shows it.
///
/// Blank `text` is skipped. On timeout the call returns only after
/// `wait.timeout` has elapsed.
pub async fn set_text<D>(driver: &D, element: &ElementId, text: &str, wait: &WaitOptions) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("set_text", &[("text", text)], || async {
        let mut state = EntryState::Idle;
        trace!(element_id = %element, %state, "Entering text");

        driver.clear(element).await?;
        state = EntryState::Cleared;
        trace!(element_id = %element, %state, "Entering text");

        driver.send_keys(element, text).await?;
        state = EntryState::Submitted;
        trace!(element_id = %element, %state, "Entering text");

        let result = wait_for_text(driver, element, text, wait).await;
        state = match &result {
            Ok(()) => EntryState::Confirmed,
            Err(e) if e.is_timeout() => EntryState::TimedOut,
            Err(_) => state,
        };
        debug!(element_id = %element, %state, "Text entry finished");
        result
    })
    .await
}

/// Locates an element and runs [`set_text`] on it.
pub async fn set_text_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    text: &str,
    wait: &WaitOptions,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    if let Some(reason) = first_blank(&[("text", text)]) {
        return Outcome::Skipped(reason);
    }

    with_located(driver, identifier, kind, |element| async move {
        set_text(driver, &element, text, wait).await
    })
    .await
}

// ============================================================================
// Wait
// ============================================================================

/// Deadline used when the requested bound overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Blocks until the element's text contains `expected` or `wait.timeout`
/// elapses.
///
/// A stale reference counts as "not yet" and is re-checked on the next
/// poll. Other driver faults end the wait immediately.
pub async fn wait_for_text<D>(
    driver: &D,
    element: &ElementId,
    expected: &str,
    wait: &WaitOptions,
) -> Result<()>
where
    D: WebDriver + ?Sized,
{
    let started = Instant::now();
    let deadline = started
        .checked_add(wait.timeout)
        .unwrap_or_else(|| started + FAR_FUTURE);

    loop {
        match driver.text(element).await {
            Ok(current) if current.contains(expected) => return Ok(()),
            Ok(_) => {}
            Err(e) if e.is_stale() => {
                trace!(element_id = %element, "Stale element while waiting for text");
            }
            Err(e) => return Err(e),
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(Error::timeout(
                format!("text {expected:?} present in {element}"),
                wait.timeout_ms(),
            ));
        }
        sleep(wait.poll_interval.min(deadline - now)).await;
    }
}
