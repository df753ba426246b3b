//! Attribute and state reads.

use tracing::trace;

use crate::driver::{Point, Size, WebDriver};
use crate::identifiers::ElementId;
use crate::outcome::{Outcome, first_blank, safe_call};

use super::locate::with_located;

// ============================================================================
// Attributes
// ============================================================================

/// Reads an attribute. `Succeeded(None)` means the attribute is absent.
///
/// A blank attribute name is skipped.
pub async fn try_attribute<D>(driver: &D, element: &ElementId, name: &str) -> Outcome<Option<String>>
where
    D: WebDriver + ?Sized,
{
    safe_call("attribute", &[("attribute", name)], || async {
        trace!(element_id = %element, name, "Reading attribute");
        driver.attribute(element, name).await
    })
    .await
}

/// Best-effort form of [`try_attribute`].
///
/// `None` covers an absent attribute, blank input and faults alike.
pub async fn attribute<D>(driver: &D, element: &ElementId, name: &str) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_attribute(driver, element, name).await.value().flatten()
}

/// Locates an element and reads an attribute.
pub async fn try_attribute_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    name: &str,
) -> Outcome<Option<String>>
where
    D: WebDriver + ?Sized,
{
    if let Some(reason) = first_blank(&[("attribute", name)]) {
        return Outcome::Skipped(reason);
    }

    with_located(driver, identifier, kind, |element| async move {
        try_attribute(driver, &element, name).await
    })
    .await
}

/// Best-effort form of [`try_attribute_by`].
pub async fn attribute_by<D>(driver: &D, identifier: &str, kind: &str, name: &str) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_attribute_by(driver, identifier, kind, name)
        .await
        .value()
        .flatten()
}

// ============================================================================
// State
// ============================================================================

/// Reads whether the element is displayed.
pub async fn try_is_displayed<D>(driver: &D, element: &ElementId) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    safe_call("is_displayed", &[], || driver.is_displayed(element)).await
}

/// Best-effort form of [`try_is_displayed`].
pub async fn is_displayed<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_displayed(driver, element).await.or_false()
}

/// Locates an element and reads whether it is displayed.
pub async fn try_is_displayed_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_is_displayed(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_is_displayed_by`].
pub async fn is_displayed_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_displayed_by(driver, identifier, kind)
        .await
        .or_false()
}

/// Reads whether the element is selected.
pub async fn try_is_selected<D>(driver: &D, element: &ElementId) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    safe_call("is_selected", &[], || driver.is_selected(element)).await
}

/// Best-effort form of [`try_is_selected`].
pub async fn is_selected<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_selected(driver, element).await.or_false()
}

/// Locates an element and reads whether it is selected.
pub async fn try_is_selected_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_is_selected(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_is_selected_by`].
pub async fn is_selected_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_selected_by(driver, identifier, kind)
        .await
        .or_false()
}

/// Reads whether the element is enabled.
pub async fn try_is_enabled<D>(driver: &D, element: &ElementId) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    safe_call("is_enabled", &[], || driver.is_enabled(element)).await
}

/// Best-effort form of [`try_is_enabled`].
pub async fn is_enabled<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_enabled(driver, element).await.or_false()
}

/// Locates an element and reads whether it is enabled.
pub async fn try_is_enabled_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<bool>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_is_enabled(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_is_enabled_by`].
pub async fn is_enabled_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_is_enabled_by(driver, identifier, kind)
        .await
        .or_false()
}

// ============================================================================
// Geometry
// ============================================================================

/// Reads the element's size.
pub async fn try_size<D>(driver: &D, element: &ElementId) -> Outcome<Size>
where
    D: WebDriver + ?Sized,
{
    safe_call("size", &[], || async {
        let rect = driver.rect(element).await?;
        Ok(rect.size())
    })
    .await
}

/// Best-effort form of [`try_size`].
pub async fn size<D>(driver: &D, element: &ElementId) -> Option<Size>
where
    D: WebDriver + ?Sized,
{
    try_size(driver, element).await.value()
}

/// Locates an element and reads its size.
pub async fn try_size_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<Size>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_size(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_size_by`].
pub async fn size_by<D>(driver: &D, identifier: &str, kind: &str) -> Option<Size>
where
    D: WebDriver + ?Sized,
{
    try_size_by(driver, identifier, kind).await.value()
}

/// Reads the element's top-left position.
pub async fn try_location<D>(driver: &D, element: &ElementId) -> Outcome<Point>
where
    D: WebDriver + ?Sized,
{
    safe_call("location", &[], || async {
        let rect = driver.rect(element).await?;
        Ok(rect.location())
    })
    .await
}

/// Best-effort form of [`try_location`].
pub async fn location<D>(driver: &D, element: &ElementId) -> Option<Point>
where
    D: WebDriver + ?Sized,
{
    try_location(driver, element).await.value()
}

/// Locates an element and reads its top-left position.
pub async fn try_location_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<Point>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_location(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_location_by`].
pub async fn location_by<D>(driver: &D, identifier: &str, kind: &str) -> Option<Point>
where
    D: WebDriver + ?Sized,
{
    try_location_by(driver, identifier, kind).await.value()
}
