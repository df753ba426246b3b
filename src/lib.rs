//! Safe Automation - fault-absorbing helpers over a WebDriver session.
//!
//! Every operation locates a UI element (or takes one) and performs a single
//! native call: click, read an attribute, select an option, read text, take
//! a screenshot. Faults never escape; each operation degrades to a sentinel
//! value instead.
//!
//! # Architecture
//!
//! - **Locator dispatcher**: `(identifier, kind label)` → one lookup strategy
//!   → zero or one element. No fallback between strategies.
//! - **Safe-call convention**: validate inputs, run the driver call inside a
//!   fault boundary, map the result into an [`Outcome`].
//!
//! The browser backend is reached only through the [`WebDriver`] trait; this
//! crate never creates or closes a session.
//!
//! # Quick Start
//!
//! ```ignore
//! use safe_automation::safe::{actions, text};
//!
//! async fn login<D: safe_automation::WebDriver>(driver: &D) {
//!     // Best-effort: plain sentinels.
//!     let clicked: bool = actions::click_by(driver, "login", "Id").await;
//!     let banner: Option<String> = text::text_by(driver, "h1", "CssSelector").await;
//!
//!     // Precise: the tagged outcome.
//!     match actions::try_click_by(driver, "//button", "XPath").await {
//!         safe_automation::Outcome::Succeeded(()) => {}
//!         safe_automation::Outcome::Skipped(reason) => eprintln!("{reason}"),
//!         safe_automation::Outcome::Failed(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`driver`] | [`WebDriver`] trait, geometry and pointer actions |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | [`ElementId`] |
//! | [`locator`] | [`LocatorKind`] and [`By`] |
//! | [`options`] | [`WaitOptions`] |
//! | [`outcome`] | [`Outcome`] and the fault boundary |
//! | [`safe`] | The safe operations |

// ============================================================================
// Modules
// ============================================================================

/// Driver seam: the trait a browser backend implements.
pub mod driver;

/// Error types and result aliases.
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Locator strategies and common selector constants.
pub mod locator;

/// Bounded wait configuration.
pub mod options;

/// Tagged results and the fault boundary.
pub mod outcome;

/// Fault-absorbing operations.
pub mod safe;

// ============================================================================
// Re-exports
// ============================================================================

pub use driver::{ElementRect, Point, PointerAction, Size, WebDriver};
pub use error::{Error, Result};
pub use identifiers::ElementId;
pub use locator::{By, LocatorKind};
pub use options::WaitOptions;
pub use outcome::{Outcome, SkipReason, safe_call};
pub use safe::{Select, locate_element, try_locate_element};
