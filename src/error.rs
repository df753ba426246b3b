//! Error types for safe automation.
//!
//! This module defines the fault taxonomy used throughout the crate. The
//! best-effort API never returns these directly; they surface through
//! [`Outcome::Failed`](crate::outcome::Outcome::Failed) and the `try_*`
//! functions for callers that want precise diagnostics.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Input | [`Error::BlankInput`], [`Error::UnknownLocatorKind`] |
//! | Element | [`Error::ElementNotFound`], [`Error::LookupFailed`], [`Error::StaleElement`], [`Error::UnexpectedTagName`] |
//! | Select | [`Error::NoSuchOption`], [`Error::NotMultiple`] |
//! | Recoverable | [`Error::MoveFailed`], [`Error::Timeout`], [`Error::FileExists`] |
//! | Driver | [`Error::Driver`], [`Error::DriverPanic`] |
//! | External | [`Error::Io`], [`Error::Json`], [`Error::Image`], [`Error::Base64`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::path::PathBuf;
use std::result::Result as StdResult;

use base64::DecodeError;
use image::ImageError;
use thiserror::Error;

use crate::identifiers::ElementId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Status Codes
// ============================================================================

/// Legacy status code for a successful operation.
pub const STATUS_SUCCESS: i32 = 1;

/// Legacy status code for a skipped operation or a generic fault.
pub const STATUS_FAULT: i32 = 0;

/// Legacy status code for a known recoverable condition.
pub const STATUS_RECOVERABLE: i32 = -1;

/// Legacy status code for a target element that could not be located.
pub const STATUS_NOT_FOUND: i32 = -2;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// A required string input was empty.
    #[error("Blank input: {field}")]
    BlankInput {
        /// Name of the blank input.
        field: &'static str,
    },

    /// Locator kind label matched none of the supported kinds.
    ///
    /// Kept apart from [`Error::ElementNotFound`] so a caller misconfiguration
    /// is never mistaken for an absent element.
    #[error("Unknown locator kind: {label:?}")]
    UnknownLocatorKind {
        /// The label that failed to parse.
        label: String,
    },

    // ========================================================================
    // Element Errors
    // ========================================================================
    /// No element matched the locator.
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Locator in `strategy:value` form.
        selector: String,
    },

    /// The driver faulted while resolving a locator.
    ///
    /// Reported as not found; the driver's fault is kept as the source.
    #[error("Element lookup failed for {selector}: {source}")]
    LookupFailed {
        /// Locator in `strategy:value` form.
        selector: String,
        /// The fault raised during the lookup.
        #[source]
        source: Box<Error>,
    },

    /// Element reference is no longer attached to the DOM.
    #[error("Stale element: {element_id}")]
    StaleElement {
        /// The stale element's ID.
        element_id: ElementId,
    },

    /// Element has a different tag than the operation requires.
    #[error("Expected <{expected}> element but found <{actual}>")]
    UnexpectedTagName {
        /// Required tag name.
        expected: &'static str,
        /// Tag name reported by the driver.
        actual: String,
    },

    // ========================================================================
    // Select Errors
    // ========================================================================
    /// No `<option>` matched the request.
    #[error("No such option: {message}")]
    NoSuchOption {
        /// What was looked for.
        message: String,
    },

    /// Deselection attempted on a single-choice `<select>`.
    #[error("Only a multi-select can be deselected")]
    NotMultiple,

    // ========================================================================
    // Recoverable Conditions
    // ========================================================================
    /// Pointer could not be moved onto the element.
    #[error("Could not move to element: {element_id}")]
    MoveFailed {
        /// Target element.
        element_id: ElementId,
    },

    /// Bounded wait elapsed before the condition held.
    #[error("Timeout after {timeout_ms}ms: {operation}")]
    Timeout {
        /// Description of the awaited condition.
        operation: String,
        /// Milliseconds waited.
        timeout_ms: u64,
    },

    /// Screenshot target already exists.
    #[error("File already exists: {}", path.display())]
    FileExists {
        /// Path that was not overwritten.
        path: PathBuf,
    },

    // ========================================================================
    // Driver Errors
    // ========================================================================
    /// Fault reported by the underlying driver.
    #[error("Driver error: {message}")]
    Driver {
        /// Driver-provided description.
        message: String,
    },

    /// The underlying driver panicked during the call.
    #[error("Driver panicked: {message}")]
    DriverPanic {
        /// Panic payload, when it was a string.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decode/encode error.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Base64 decode error.
    #[error("Base64 error: {0}")]
    Base64(#[from] DecodeError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a blank input error.
    #[inline]
    pub fn blank_input(field: &'static str) -> Self {
        Self::BlankInput { field }
    }

    /// Creates an unknown locator kind error.
    #[inline]
    pub fn unknown_locator_kind(label: impl Into<String>) -> Self {
        Self::UnknownLocatorKind {
            label: label.into(),
        }
    }

    /// Creates an element not found error.
    #[inline]
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    /// Wraps a fault raised while resolving `selector`.
    #[inline]
    pub fn lookup_failed(selector: impl Into<String>, source: Error) -> Self {
        Self::LookupFailed {
            selector: selector.into(),
            source: Box::new(source),
        }
    }

    /// Creates a stale element error.
    #[inline]
    pub fn stale_element(element_id: ElementId) -> Self {
        Self::StaleElement { element_id }
    }

    /// Creates an unexpected tag name error.
    #[inline]
    pub fn unexpected_tag_name(expected: &'static str, actual: impl Into<String>) -> Self {
        Self::UnexpectedTagName {
            expected,
            actual: actual.into(),
        }
    }

    /// Creates a missing option error.
    #[inline]
    pub fn no_such_option(message: impl Into<String>) -> Self {
        Self::NoSuchOption {
            message: message.into(),
        }
    }

    /// Creates a move failed error.
    #[inline]
    pub fn move_failed(element_id: ElementId) -> Self {
        Self::MoveFailed { element_id }
    }

    /// Creates a timeout error.
    #[inline]
    pub fn timeout(operation: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_ms,
        }
    }

    /// Creates a file exists error.
    #[inline]
    pub fn file_exists(path: impl Into<PathBuf>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Creates a driver error.
    #[inline]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Creates a driver panic error.
    #[inline]
    pub fn driver_panic(message: impl Into<String>) -> Self {
        Self::DriverPanic {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the element could not be located.
    ///
    /// A lookup that faulted counts as not found.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ElementNotFound { .. } | Self::LookupFailed { .. }
        )
    }

    /// Returns `true` if the element reference went stale.
    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleElement { .. })
    }

    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if this is a known, non-fatal domain condition.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MoveFailed { .. } | Self::Timeout { .. } | Self::FileExists { .. }
        )
    }

    /// Returns `true` if the caller supplied unusable input.
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::BlankInput { .. } | Self::UnknownLocatorKind { .. }
        )
    }

    /// Returns the legacy integer status for this failure.
    ///
    /// `-1` for recoverable conditions, `-2` for an unlocated element,
    /// `0` for everything else.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        if self.is_recoverable() {
            STATUS_RECOVERABLE
        } else if self.is_not_found() {
            STATUS_NOT_FOUND
        } else {
            STATUS_FAULT
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
