//! Fault-absorbing operations.
//!
//! Every function here follows the same contract:
//!
//! 1. Blank string inputs short-circuit to [`Outcome::Skipped`] before the
//!    driver is touched.
//! 2. The driver call runs inside [`safe_call`](crate::outcome::safe_call);
//!    errors and panics become [`Outcome::Failed`].
//! 3. Nothing is ever propagated to the caller.
//!
//! Functions that take an element reference have a `_by` twin taking an
//! `(identifier, kind label)` pair, resolved through
//! [`locate::locate_element`] on every call.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `locate` | Locator dispatcher |
//! | `actions` | Click, gestures, drag-and-drop, rotate |
//! | `properties` | Attributes, state flags, size and location |
//! | `text` | Text reads and confirmed text entry |
//! | `select` | `<select>` dropdowns |
//! | `screenshot` | Page and element screenshots |
//!
//! [`Outcome::Skipped`]: crate::outcome::Outcome::Skipped
//! [`Outcome::Failed`]: crate::outcome::Outcome::Failed

// ============================================================================
// Submodules
// ============================================================================

pub mod actions;
pub mod locate;
pub mod properties;
pub mod screenshot;
pub mod select;
pub mod text;

// ============================================================================
// Re-exports
// ============================================================================

pub use locate::{find, locate_element, try_find, try_locate_element};
pub use select::Select;
