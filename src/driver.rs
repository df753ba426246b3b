//! The driver seam.
//!
//! [`WebDriver`] is the contract a browser backend implements. Every safe
//! operation in [`crate::safe`] is written against it, so a backend only has
//! to expose these primitive calls; fault containment, input checks and
//! sentinel mapping live on this side.
//!
//! Session lifecycle is the backend's concern. A `&D: WebDriver` cannot be
//! null, so "no session" is not a runtime case here.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::identifiers::ElementId;
use crate::locator::By;

// ============================================================================
// Geometry
// ============================================================================

/// Element position on the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: i64,
    /// Vertical offset from the top edge.
    pub y: i64,
}

/// Element dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub width: u64,
    /// Height.
    pub height: u64,
}

/// Element bounding rectangle as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ElementRect {
    /// Creates a rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parses a `{x, y, width, height}` JSON object.
    ///
    /// Missing fields read as `0.0`; a non-numeric field is an
    /// [`Error::Json`](crate::Error::Json).
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Returns the top-left corner, truncated to whole pixels.
    #[must_use]
    pub fn location(&self) -> Point {
        Point {
            x: self.x as i64,
            y: self.y as i64,
        }
    }

    /// Returns the dimensions, truncated to whole pixels.
    ///
    /// Negative extents clamp to zero.
    #[must_use]
    pub fn size(&self) -> Size {
        Size {
            width: self.width.max(0.0) as u64,
            height: self.height.max(0.0) as u64,
        }
    }
}

// ============================================================================
// Pointer Actions
// ============================================================================

/// One step of a pointer gesture.
///
/// A gesture is a slice of these handed to
/// [`WebDriver::perform_actions`] and executed in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum PointerAction {
    /// Move the pointer to the element's center.
    #[serde(rename = "pointer.moveTo")]
    MoveTo {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Move the pointer relative to its current position.
    #[serde(rename = "pointer.moveBy")]
    MoveBy {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },

    /// Press the primary button, optionally over an element.
    #[serde(rename = "pointer.down")]
    Down {
        /// Element to press on (current position if absent).
        #[serde(rename = "elementId", skip_serializing_if = "Option::is_none")]
        element_id: Option<ElementId>,
    },

    /// Release the primary button.
    #[serde(rename = "pointer.up")]
    Up,

    /// Double click on the element.
    #[serde(rename = "pointer.doubleClick")]
    DoubleClick {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Secondary-button click on the element.
    #[serde(rename = "pointer.contextClick")]
    ContextClick {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },
}

impl PointerAction {
    /// Creates a move-to step.
    #[inline]
    pub fn move_to(element_id: &ElementId) -> Self {
        Self::MoveTo {
            element_id: element_id.clone(),
        }
    }

    /// Creates a relative move step.
    #[inline]
    pub fn move_by(dx: i32, dy: i32) -> Self {
        Self::MoveBy { dx, dy }
    }

    /// Creates a press step over an element.
    #[inline]
    pub fn down_on(element_id: &ElementId) -> Self {
        Self::Down {
            element_id: Some(element_id.clone()),
        }
    }

    /// Builds a drag from `source` onto `target`.
    #[must_use]
    pub fn drag_and_drop(source: &ElementId, target: &ElementId) -> Vec<Self> {
        vec![
            Self::down_on(source),
            Self::move_to(target),
            Self::Up,
        ]
    }

    /// Builds a drag of `source` by an offset.
    #[must_use]
    pub fn drag_by(source: &ElementId, dx: i32, dy: i32) -> Vec<Self> {
        vec![Self::down_on(source), Self::move_by(dx, dy), Self::Up]
    }
}

// ============================================================================
// WebDriver
// ============================================================================

/// Primitive operations of a live browser session.
///
/// Implementations report every failure as an `Err`; element lookups that
/// match nothing return [`Error::ElementNotFound`](crate::Error::ElementNotFound).
#[async_trait]
pub trait WebDriver: Send + Sync {
    /// Finds the first element matching the locator.
    async fn find_element(&self, by: &By) -> Result<ElementId>;

    /// Finds all descendants of `parent` matching the locator.
    async fn find_child_elements(&self, parent: &ElementId, by: &By) -> Result<Vec<ElementId>>;

    /// Returns the element's lowercase tag name.
    async fn tag_name(&self, element: &ElementId) -> Result<String>;

    /// Returns the element's rendered text.
    async fn text(&self, element: &ElementId) -> Result<String>;

    /// Returns an attribute value, `None` if absent.
    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>>;

    /// Returns whether the element is rendered visibly.
    async fn is_displayed(&self, element: &ElementId) -> Result<bool>;

    /// Returns whether the element (option, checkbox, radio) is selected.
    async fn is_selected(&self, element: &ElementId) -> Result<bool>;

    /// Returns whether the element is enabled.
    async fn is_enabled(&self, element: &ElementId) -> Result<bool>;

    /// Returns the element's bounding rectangle.
    async fn rect(&self, element: &ElementId) -> Result<ElementRect>;

    /// Clicks the element.
    async fn click(&self, element: &ElementId) -> Result<()>;

    /// Clears an editable element.
    async fn clear(&self, element: &ElementId) -> Result<()>;

    /// Types text into the element.
    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()>;

    /// Performs a pointer gesture.
    async fn perform_actions(&self, actions: &[PointerAction]) -> Result<()>;

    /// Captures the viewport as base64-encoded PNG.
    async fn screenshot(&self) -> Result<String>;
}

// ============================================================================
// Tests
// ============================================================================
