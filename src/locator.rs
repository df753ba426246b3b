//! Element locator strategies.
//!
//! Four lookup strategies are supported, selected either through the typed
//! [`By`] enum or through the exact string labels used by string-located
//! operations (`"XPath"`, `"ClassName"`, `"CssSelector"`, `"Id"`).
//!
//! # Example
//!
//! ```
//! use safe_automation::locator::{By, LocatorKind};
//!
//! let by = By::from_label("CssSelector", "button.primary").unwrap();
//! assert_eq!(by.kind(), LocatorKind::CssSelector);
//! assert_eq!(by.value(), "button.primary");
//!
//! // Labels are matched exactly.
//! assert!(By::from_label("cssselector", "button").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// LocatorKind
// ============================================================================

/// Closed set of lookup strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorKind {
    /// XPath expression.
    XPath,
    /// Single class name.
    ClassName,
    /// CSS selector.
    CssSelector,
    /// Element `id` attribute.
    Id,
}

impl LocatorKind {
    /// Every supported kind, in dispatch order.
    pub const ALL: [LocatorKind; 4] = [
        LocatorKind::XPath,
        LocatorKind::ClassName,
        LocatorKind::CssSelector,
        LocatorKind::Id,
    ];

    /// Returns the exact label this kind is selected by.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::XPath => "XPath",
            Self::ClassName => "ClassName",
            Self::CssSelector => "CssSelector",
            Self::Id => "Id",
        }
    }

    /// Parses a label. Case-sensitive, no partial matches.
    pub fn parse(label: &str) -> Result<Self> {
        match label {
            "XPath" => Ok(Self::XPath),
            "ClassName" => Ok(Self::ClassName),
            "CssSelector" => Ok(Self::CssSelector),
            "Id" => Ok(Self::Id),
            other => Err(Error::unknown_locator_kind(other)),
        }
    }
}

impl FromStr for LocatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// By
// ============================================================================

/// Element locator: a strategy paired with its lookup value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value")]
pub enum By {
    /// XPath expression.
    ///
    /// ```ignore
    /// By::XPath("//button[@type='submit']".into())
    /// ```
    XPath(String),

    /// Class name (single class).
    ClassName(String),

    /// CSS selector.
    ///
    /// ```ignore
    /// By::CssSelector("[data-testid='submit']".into())
    /// ```
    CssSelector(String),

    /// Element ID.
    Id(String),
}

impl By {
    /// Creates an XPath locator.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a class name locator.
    #[inline]
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::ClassName(class.into())
    }

    /// Creates a CSS selector locator.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::CssSelector(selector.into())
    }

    /// Creates an ID locator.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a locator of the given kind.
    pub fn new(kind: LocatorKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            LocatorKind::XPath => Self::XPath(value),
            LocatorKind::ClassName => Self::ClassName(value),
            LocatorKind::CssSelector => Self::CssSelector(value),
            LocatorKind::Id => Self::Id(value),
        }
    }

    /// Creates a locator from a kind label and a value.
    ///
    /// Fails with [`Error::UnknownLocatorKind`] if the label is not one of
    /// the four exact labels.
    pub fn from_label(label: &str, value: impl Into<String>) -> Result<Self> {
        LocatorKind::parse(label).map(|kind| Self::new(kind, value))
    }

    /// Returns the strategy of this locator.
    #[must_use]
    pub fn kind(&self) -> LocatorKind {
        match self {
            Self::XPath(_) => LocatorKind::XPath,
            Self::ClassName(_) => LocatorKind::ClassName,
            Self::CssSelector(_) => LocatorKind::CssSelector,
            Self::Id(_) => LocatorKind::Id,
        }
    }

    /// Returns the strategy label.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.kind().label()
    }

    /// Returns the lookup value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::XPath(v) | Self::ClassName(v) | Self::CssSelector(v) | Self::Id(v) => v,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.strategy(), self.value())
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Attribute names commonly read from elements.
pub mod attributes {
    /// `title` attribute.
    pub const TITLE: &str = "title";
    /// `value` attribute.
    pub const VALUE: &str = "value";
    /// `href` attribute.
    pub const HREF: &str = "href";
    /// `placeholder` attribute.
    pub const PLACEHOLDER: &str = "placeholder";
    /// `submenutitle` attribute.
    pub const SUBMENU_TITLE: &str = "submenutitle";
}

/// Tag selectors usable with [`By::CssSelector`](super::By::CssSelector).
pub mod tags {
    pub const SPAN: &str = "span";
    pub const DIV: &str = "div";
    pub const INPUT: &str = "input";
    pub const BUTTON: &str = "button";
    pub const LABEL: &str = "label";
    pub const TEXT_AREA: &str = "textarea";
    pub const GROUP: &str = "group";
    pub const ITEM: &str = "item";
    pub const OPTION: &str = "option";
    pub const SELECT: &str = "select";
    pub const LINK: &str = "a";
    pub const BODY: &str = "body";
    pub const HEAD: &str = "head";
    pub const HEADER: &str = "header";
    pub const DIALOG: &str = "dialog";
    pub const H1: &str = "h1";
    pub const H2: &str = "h2";
    pub const H3: &str = "h3";
    pub const H4: &str = "h4";
    pub const H5: &str = "h5";
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in LocatorKind::ALL {
            assert_eq!(LocatorKind::parse(kind.label()).unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(LocatorKind::parse("xpath").is_err());
        assert!(LocatorKind::parse("Css").is_err());
        assert!(LocatorKind::parse(" Id").is_err());
        assert!(matches!(
            LocatorKind::parse("Name"),
            Err(Error::UnknownLocatorKind { .. })
        ));
    }

    #[test]
    fn test_by_xpath() {
        let by = By::xpath("//button");
        assert_eq!(by.strategy(), "XPath");
        assert_eq!(by.value(), "//button");
    }

    #[test]
    fn test_by_from_label() {
        let by = By::from_label("ClassName", "btn").unwrap();
        assert_eq!(by, By::ClassName("btn".to_string()));
        assert_eq!(by.to_string(), "ClassName:btn");
    }

    #[test]
    fn test_by_serde() {
        let json = serde_json::to_value(By::id("login")).unwrap();
        assert_eq!(json, serde_json::json!({"strategy": "Id", "value": "login"}));
    }

    proptest! {
        #[test]
        fn unknown_labels_never_parse(label in "\\PC*") {
            let known = LocatorKind::ALL.iter().any(|k| k.label() == label);
            prop_assert_eq!(LocatorKind::parse(&label).is_ok(), known);
        }
    }
}
