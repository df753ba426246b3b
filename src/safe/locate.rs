//! Locator dispatcher.
//!
//! Maps an `(identifier, kind label)` pair to exactly one lookup strategy
//! and performs a single driver lookup. There is no fallback between
//! strategies and no retry.

use std::future::Future;

use tracing::debug;

use crate::driver::WebDriver;
use crate::error::Error;
use crate::identifiers::ElementId;
use crate::locator::By;
use crate::outcome::{Outcome, safe_call};

// ============================================================================
// Typed Lookup
// ============================================================================

/// Finds an element with a typed locator.
///
/// A blank locator value is skipped without contacting the driver. A driver
/// fault during the lookup is reported as [`Error::LookupFailed`].
pub async fn try_find<D>(driver: &D, by: &By) -> Outcome<ElementId>
where
    D: WebDriver + ?Sized,
{
    let outcome = safe_call("find", &[("identifier", by.value())], || async {
        debug!(strategy = by.strategy(), value = by.value(), "Finding element");
        driver.find_element(by).await
    })
    .await;

    into_not_found(outcome, || by.to_string())
}

/// Best-effort form of [`try_find`].
pub async fn find<D>(driver: &D, by: &By) -> Option<ElementId>
where
    D: WebDriver + ?Sized,
{
    try_find(driver, by).await.value()
}

// ============================================================================
// Label Dispatch
// ============================================================================

/// Resolves `identifier` using the strategy named by `kind`.
///
/// | Input | Outcome |
/// |-------|---------|
/// | blank `identifier` or `kind` | `Skipped`, driver untouched |
/// | unrecognized `kind` | `Failed(UnknownLocatorKind)`, driver untouched |
/// | no match | `Failed(ElementNotFound)` |
/// | driver fault | `Failed(LookupFailed)` |
/// | match | `Succeeded(element)` |
///
/// # Example
///
/// ```ignore
/// let outcome = try_locate_element(&driver, "//button[@type='submit']", "XPath").await;
/// ```
pub async fn try_locate_element<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<ElementId>
where
    D: WebDriver + ?Sized,
{
    let outcome = safe_call(
        "locate_element",
        &[("identifier", identifier), ("locator kind", kind)],
        || async {
            let by = By::from_label(kind, identifier)?;
            debug!(strategy = by.strategy(), value = by.value(), "Locating element");
            driver.find_element(&by).await
        },
    )
    .await;

    into_not_found(outcome, || format!("{kind}:{identifier}"))
}

/// Best-effort form of [`try_locate_element`].
///
/// Returns `None` for blank input, an unknown kind, no match and any fault.
pub async fn locate_element<D>(driver: &D, identifier: &str, kind: &str) -> Option<ElementId>
where
    D: WebDriver + ?Sized,
{
    try_locate_element(driver, identifier, kind).await.value()
}

// ============================================================================
// Internal
// ============================================================================

/// Folds lookup faults into the not-found category.
///
/// Input errors and genuine misses pass through unchanged.
fn into_not_found(
    outcome: Outcome<ElementId>,
    selector: impl FnOnce() -> String,
) -> Outcome<ElementId> {
    match outcome {
        Outcome::Failed(e) if !e.is_not_found() && !e.is_input_error() => {
            Outcome::Failed(Error::lookup_failed(selector(), e))
        }
        other => other,
    }
}

/// Locates an element, then hands it to `op`.
///
/// Skips and failures of the lookup short-circuit `op`.
pub(crate) async fn with_located<D, T, F, Fut>(
    driver: &D,
    identifier: &str,
    kind: &str,
    op: F,
) -> Outcome<T>
where
    D: WebDriver + ?Sized,
    F: FnOnce(ElementId) -> Fut,
    Fut: Future<Output = Outcome<T>>,
{
    match try_locate_element(driver, identifier, kind).await {
        Outcome::Succeeded(element) => op(element).await,
        Outcome::Skipped(reason) => Outcome::Skipped(reason),
        Outcome::Failed(e) => Outcome::Failed(e),
    }
}
