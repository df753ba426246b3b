//! Pointer interactions: click, double click, right click, hover,
//! drag-and-drop and rotate gestures.
//!
//! Boolean operations come in pairs: `try_<op>` returns the full
//! [`Outcome`], `<op>` collapses it to `true`/`false`. Rotation reports a
//! status and returns the [`Outcome`] only.

use tracing::debug;

use crate::driver::{PointerAction, WebDriver};
use crate::error::Error;
use crate::identifiers::ElementId;
use crate::outcome::{Outcome, first_blank, safe_call};

use super::locate::with_located;

// ============================================================================
// Click
// ============================================================================

/// Clicks the element.
pub async fn try_click<D>(driver: &D, element: &ElementId) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("click", &[], || async {
        debug!(element_id = %element, "Clicking element");
        driver.click(element).await
    })
    .await
}

/// Best-effort form of [`try_click`].
pub async fn click<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_click(driver, element).await.is_succeeded()
}

/// Locates and clicks an element.
pub async fn try_click_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_click(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_click_by`].
pub async fn click_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_click_by(driver, identifier, kind).await.is_succeeded()
}

// ============================================================================
// Gestures
// ============================================================================

/// Double-clicks the element.
pub async fn try_double_click<D>(driver: &D, element: &ElementId) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    gesture(
        driver,
        "double_click",
        vec![PointerAction::DoubleClick {
            element_id: element.clone(),
        }],
    )
    .await
}

/// Best-effort form of [`try_double_click`].
pub async fn double_click<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_double_click(driver, element).await.is_succeeded()
}

/// Locates and double-clicks an element.
pub async fn try_double_click_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_double_click(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_double_click_by`].
pub async fn double_click_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_double_click_by(driver, identifier, kind)
        .await
        .is_succeeded()
}

/// Right-clicks (context clicks) the element.
pub async fn try_right_click<D>(driver: &D, element: &ElementId) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    gesture(
        driver,
        "right_click",
        vec![PointerAction::ContextClick {
            element_id: element.clone(),
        }],
    )
    .await
}

/// Best-effort form of [`try_right_click`].
pub async fn right_click<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_right_click(driver, element).await.is_succeeded()
}

/// Locates and right-clicks an element.
pub async fn try_right_click_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_right_click(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_right_click_by`].
pub async fn right_click_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_right_click_by(driver, identifier, kind)
        .await
        .is_succeeded()
}

/// Moves the pointer onto the element.
pub async fn try_move_to<D>(driver: &D, element: &ElementId) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    gesture(driver, "move_to", vec![PointerAction::move_to(element)]).await
}

/// Best-effort form of [`try_move_to`].
pub async fn move_to<D>(driver: &D, element: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_move_to(driver, element).await.is_succeeded()
}

/// Locates an element and moves the pointer onto it.
pub async fn try_move_to_by<D>(driver: &D, identifier: &str, kind: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_move_to(driver, &element).await
    })
    .await
}

/// Best-effort form of [`try_move_to_by`].
pub async fn move_to_by<D>(driver: &D, identifier: &str, kind: &str) -> bool
where
    D: WebDriver + ?Sized,
{
    try_move_to_by(driver, identifier, kind).await.is_succeeded()
}

// ============================================================================
// Drag and Drop
// ============================================================================

/// Drags `source` onto `target`.
pub async fn try_drag_and_drop<D>(driver: &D, source: &ElementId, target: &ElementId) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    gesture(
        driver,
        "drag_and_drop",
        PointerAction::drag_and_drop(source, target),
    )
    .await
}

/// Best-effort form of [`try_drag_and_drop`].
pub async fn drag_and_drop<D>(driver: &D, source: &ElementId, target: &ElementId) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_and_drop(driver, source, target)
        .await
        .is_succeeded()
}

/// Locates the source element and drags it onto `target`.
pub async fn try_drag_located_onto<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    target: &ElementId,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |source| async move {
        try_drag_and_drop(driver, &source, target).await
    })
    .await
}

/// Best-effort form of [`try_drag_located_onto`].
pub async fn drag_located_onto<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    target: &ElementId,
) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_located_onto(driver, identifier, kind, target)
        .await
        .is_succeeded()
}

/// Drags `source` onto a located target element.
pub async fn try_drag_onto_located<D>(
    driver: &D,
    source: &ElementId,
    identifier: &str,
    kind: &str,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |target| async move {
        try_drag_and_drop(driver, source, &target).await
    })
    .await
}

/// Best-effort form of [`try_drag_onto_located`].
pub async fn drag_onto_located<D>(
    driver: &D,
    source: &ElementId,
    identifier: &str,
    kind: &str,
) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_onto_located(driver, source, identifier, kind)
        .await
        .is_succeeded()
}

/// Locates both elements and drags the first onto the second.
///
/// All four inputs are checked before either lookup.
pub async fn try_drag_and_drop_by<D>(
    driver: &D,
    source: &str,
    source_kind: &str,
    target: &str,
    target_kind: &str,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    if let Some(reason) = first_blank(&[
        ("source", source),
        ("source kind", source_kind),
        ("target", target),
        ("target kind", target_kind),
    ]) {
        return Outcome::Skipped(reason);
    }

    with_located(driver, source, source_kind, |source| async move {
        with_located(driver, target, target_kind, |target| async move {
            try_drag_and_drop(driver, &source, &target).await
        })
        .await
    })
    .await
}

/// Best-effort form of [`try_drag_and_drop_by`].
pub async fn drag_and_drop_by<D>(
    driver: &D,
    source: &str,
    source_kind: &str,
    target: &str,
    target_kind: &str,
) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_and_drop_by(driver, source, source_kind, target, target_kind)
        .await
        .is_succeeded()
}

/// Drags the element by a pixel offset.
pub async fn try_drag_by_offset<D>(driver: &D, element: &ElementId, dx: i32, dy: i32) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    gesture(
        driver,
        "drag_by_offset",
        PointerAction::drag_by(element, dx, dy),
    )
    .await
}

/// Best-effort form of [`try_drag_by_offset`].
pub async fn drag_by_offset<D>(driver: &D, element: &ElementId, dx: i32, dy: i32) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_by_offset(driver, element, dx, dy)
        .await
        .is_succeeded()
}

/// Locates an element and drags it by a pixel offset.
pub async fn try_drag_by_offset_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    dx: i32,
    dy: i32,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        try_drag_by_offset(driver, &element, dx, dy).await
    })
    .await
}

/// Best-effort form of [`try_drag_by_offset_by`].
pub async fn drag_by_offset_by<D>(driver: &D, identifier: &str, kind: &str, dx: i32, dy: i32) -> bool
where
    D: WebDriver + ?Sized,
{
    try_drag_by_offset_by(driver, identifier, kind, dx, dy)
        .await
        .is_succeeded()
}

// ============================================================================
// Rotate
// ============================================================================

/// Rotates a dial-like element by dragging it horizontally.
///
/// | Status | Meaning |
/// |--------|---------|
/// | `1` | rotated |
/// | `-1` | pointer could not be moved onto the element |
/// | `0` | any other fault |
pub async fn rotate_horizontal<D>(driver: &D, element: &ElementId, x_offset: i32) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    rotate(driver, element, x_offset, 0).await
}

/// Rotates a dial-like element by dragging it vertically.
///
/// Same statuses as [`rotate_horizontal`].
pub async fn rotate_vertical<D>(driver: &D, element: &ElementId, y_offset: i32) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    rotate(driver, element, 0, y_offset).await
}

/// Locates an element and rotates it horizontally.
///
/// An element that cannot be located reports status `-2`.
pub async fn rotate_horizontal_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    x_offset: i32,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        rotate(driver, &element, x_offset, 0).await
    })
    .await
}

/// Locates an element and rotates it vertically.
///
/// An element that cannot be located reports status `-2`.
pub async fn rotate_vertical_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    y_offset: i32,
) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| async move {
        rotate(driver, &element, 0, y_offset).await
    })
    .await
}

async fn rotate<D>(driver: &D, element: &ElementId, dx: i32, dy: i32) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("rotate", &[], || async {
        if let Outcome::Failed(e) = try_move_to(driver, element).await {
            debug!(element_id = %element, error = %e, "Move before rotate failed");
            return Err(Error::move_failed(element.clone()));
        }

        debug!(element_id = %element, dx, dy, "Rotating element");
        driver
            .perform_actions(&[
                PointerAction::down_on(element),
                PointerAction::move_by(dx, dy),
                PointerAction::Up,
            ])
            .await
    })
    .await
}

// ============================================================================
// Internal
// ============================================================================

async fn gesture<D>(driver: &D, operation: &'static str, actions: Vec<PointerAction>) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call(operation, &[], || async {
        debug!(operation, steps = actions.len(), "Performing pointer gesture");
        driver.perform_actions(&actions).await
    })
    .await
}
