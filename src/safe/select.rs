//! `<select>` dropdown handling.
//!
//! [`Select`] wraps a located `<select>` element and implements option
//! lookup and (de)selection on top of the primitive driver calls. The free
//! functions in this module are the safe forms: selection changes report an
//! [`Outcome`], queries have `try_*` and best-effort pairs.
//!
//! # Example
//!
//! ```ignore
//! use safe_automation::safe::select;
//!
//! if let Some(country) = select::to_select_by(&driver, "country", "Id").await {
//!     select::select_by_visible_text(&country, "Norway").await;
//!     let chosen = select::first_selected_option_text(&country).await;
//! }
//! ```

use std::fmt;

use tracing::debug;

use crate::driver::WebDriver;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::locator::{By, attributes, tags};
use crate::outcome::{Outcome, first_blank, safe_call};

use super::locate::with_located;

// ============================================================================
// Select
// ============================================================================

/// A `<select>` element bound to a driver.
pub struct Select<'a, D: WebDriver + ?Sized> {
    driver: &'a D,
    element: ElementId,
    multiple: bool,
}

impl<D: WebDriver + ?Sized> fmt::Debug for Select<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("element", &self.element)
            .field("multiple", &self.multiple)
            .finish_non_exhaustive()
    }
}

impl<'a, D: WebDriver + ?Sized> Select<'a, D> {
    /// Wraps `element`, which must be a `<select>`.
    pub async fn new(driver: &'a D, element: ElementId) -> Result<Self> {
        let tag = driver.tag_name(&element).await?;
        if !tag.eq_ignore_ascii_case(tags::SELECT) {
            return Err(Error::unexpected_tag_name(tags::SELECT, tag));
        }

        let multiple = driver
            .attribute(&element, "multiple")
            .await?
            .is_some_and(|v| v != "false");

        Ok(Self {
            driver,
            element,
            multiple,
        })
    }

    /// Returns the wrapped element.
    #[inline]
    #[must_use]
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    /// Returns `true` if more than one option may be selected.
    #[inline]
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Returns all `<option>` elements, in document order.
    pub async fn options(&self) -> Result<Vec<ElementId>> {
        self.driver
            .find_child_elements(&self.element, &By::css(tags::OPTION))
            .await
    }

    /// Returns the selected options, in document order.
    pub async fn all_selected_options(&self) -> Result<Vec<ElementId>> {
        let mut selected = Vec::new();
        for option in self.options().await? {
            if self.driver.is_selected(&option).await? {
                selected.push(option);
            }
        }
        Ok(selected)
    }

    /// Returns the first selected option.
    pub async fn first_selected_option(&self) -> Result<ElementId> {
        for option in self.options().await? {
            if self.driver.is_selected(&option).await? {
                return Ok(option);
            }
        }
        Err(Error::no_such_option("no options are selected"))
    }

    /// Returns the position of the first selected option.
    ///
    /// Options are matched by trimmed text, so the first of several options
    /// sharing the selected option's text wins.
    pub async fn index_of_selected_option(&self) -> Result<usize> {
        let selected = self.first_selected_option().await?;
        let selected_text = self.option_text(&selected).await?;

        for (index, option) in self.options().await?.iter().enumerate() {
            if self.option_text(option).await? == selected_text {
                return Ok(index);
            }
        }
        Err(Error::no_such_option(format!(
            "text {selected_text:?} is not among the options"
        )))
    }

    /// Selects the option at `index`.
    pub async fn select_by_index(&self, index: usize) -> Result<()> {
        let option = self.option_at(index).await?;
        self.set_selected(&option, true).await
    }

    /// Selects every option whose trimmed text equals `text`.
    ///
    /// A single-choice select stops at the first match.
    pub async fn select_by_visible_text(&self, text: &str) -> Result<()> {
        let mut matched = false;
        for option in self.options().await? {
            if self.option_text(&option).await? == text {
                self.set_selected(&option, true).await?;
                matched = true;
                if !self.multiple {
                    break;
                }
            }
        }
        Self::require_match(matched, || format!("text {text:?}"))
    }

    /// Selects every option whose `value` attribute equals `value`.
    ///
    /// A single-choice select stops at the first match.
    pub async fn select_by_value(&self, value: &str) -> Result<()> {
        let mut matched = false;
        for option in self.options().await? {
            if self.option_value(&option).await?.as_deref() == Some(value) {
                self.set_selected(&option, true).await?;
                matched = true;
                if !self.multiple {
                    break;
                }
            }
        }
        Self::require_match(matched, || format!("value {value:?}"))
    }

    /// Clears every selected option. Multi-select only.
    pub async fn deselect_all(&self) -> Result<()> {
        self.require_multiple()?;
        for option in self.options().await? {
            self.set_selected(&option, false).await?;
        }
        Ok(())
    }

    /// Deselects the option at `index`. Multi-select only.
    pub async fn deselect_by_index(&self, index: usize) -> Result<()> {
        self.require_multiple()?;
        let option = self.option_at(index).await?;
        self.set_selected(&option, false).await
    }

    /// Deselects options whose trimmed text equals `text`. Multi-select only.
    pub async fn deselect_by_visible_text(&self, text: &str) -> Result<()> {
        self.require_multiple()?;
        let mut matched = false;
        for option in self.options().await? {
            if self.option_text(&option).await? == text {
                self.set_selected(&option, false).await?;
                matched = true;
            }
        }
        Self::require_match(matched, || format!("text {text:?}"))
    }

    /// Deselects options whose `value` attribute equals `value`.
    /// Multi-select only.
    pub async fn deselect_by_value(&self, value: &str) -> Result<()> {
        self.require_multiple()?;
        let mut matched = false;
        for option in self.options().await? {
            if self.option_value(&option).await?.as_deref() == Some(value) {
                self.set_selected(&option, false).await?;
                matched = true;
            }
        }
        Self::require_match(matched, || format!("value {value:?}"))
    }
}

// ============================================================================
// Select - Internal
// ============================================================================

impl<D: WebDriver + ?Sized> Select<'_, D> {
    async fn option_at(&self, index: usize) -> Result<ElementId> {
        let mut options = self.options().await?;
        if index >= options.len() {
            return Err(Error::no_such_option(format!(
                "index {index} (select has {} options)",
                options.len()
            )));
        }
        Ok(options.swap_remove(index))
    }

    async fn option_text(&self, option: &ElementId) -> Result<String> {
        Ok(self.driver.text(option).await?.trim().to_string())
    }

    async fn option_value(&self, option: &ElementId) -> Result<Option<String>> {
        self.driver.attribute(option, attributes::VALUE).await
    }

    /// Clicks the option only if its state differs.
    async fn set_selected(&self, option: &ElementId, selected: bool) -> Result<()> {
        if self.driver.is_selected(option).await? != selected {
            debug!(select = %self.element, option = %option, selected, "Toggling option");
            self.driver.click(option).await?;
        }
        Ok(())
    }

    fn require_multiple(&self) -> Result<()> {
        if self.multiple {
            Ok(())
        } else {
            Err(Error::NotMultiple)
        }
    }

    fn require_match(matched: bool, what: impl FnOnce() -> String) -> Result<()> {
        if matched {
            Ok(())
        } else {
            Err(Error::no_such_option(what()))
        }
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Wraps `element` as a [`Select`].
pub async fn try_to_select<D>(driver: &D, element: ElementId) -> Outcome<Select<'_, D>>
where
    D: WebDriver + ?Sized,
{
    safe_call("to_select", &[], || Select::new(driver, element)).await
}

/// Best-effort form of [`try_to_select`].
pub async fn to_select<D>(driver: &D, element: ElementId) -> Option<Select<'_, D>>
where
    D: WebDriver + ?Sized,
{
    try_to_select(driver, element).await.value()
}

/// Locates an element and wraps it as a [`Select`].
pub async fn try_to_select_by<'a, D>(
    driver: &'a D,
    identifier: &str,
    kind: &str,
) -> Outcome<Select<'a, D>>
where
    D: WebDriver + ?Sized,
{
    with_located(driver, identifier, kind, |element| {
        try_to_select(driver, element)
    })
    .await
}

/// Best-effort form of [`try_to_select_by`].
pub async fn to_select_by<'a, D>(driver: &'a D, identifier: &str, kind: &str) -> Option<Select<'a, D>>
where
    D: WebDriver + ?Sized,
{
    try_to_select_by(driver, identifier, kind).await.value()
}

// ============================================================================
// Queries
// ============================================================================

/// Lists all options.
pub async fn try_options<D>(select: &Select<'_, D>) -> Outcome<Vec<ElementId>>
where
    D: WebDriver + ?Sized,
{
    safe_call("options", &[], || select.options()).await
}

/// Best-effort form of [`try_options`].
pub async fn options<D>(select: &Select<'_, D>) -> Option<Vec<ElementId>>
where
    D: WebDriver + ?Sized,
{
    try_options(select).await.value()
}

/// Returns the first selected option.
pub async fn try_first_selected_option<D>(select: &Select<'_, D>) -> Outcome<ElementId>
where
    D: WebDriver + ?Sized,
{
    safe_call("first_selected_option", &[], || select.first_selected_option()).await
}

/// Best-effort form of [`try_first_selected_option`].
pub async fn first_selected_option<D>(select: &Select<'_, D>) -> Option<ElementId>
where
    D: WebDriver + ?Sized,
{
    try_first_selected_option(select).await.value()
}

/// Lists the selected options.
pub async fn try_all_selected_options<D>(select: &Select<'_, D>) -> Outcome<Vec<ElementId>>
where
    D: WebDriver + ?Sized,
{
    safe_call("all_selected_options", &[], || select.all_selected_options()).await
}

/// Best-effort form of [`try_all_selected_options`].
pub async fn all_selected_options<D>(select: &Select<'_, D>) -> Option<Vec<ElementId>>
where
    D: WebDriver + ?Sized,
{
    try_all_selected_options(select).await.value()
}

/// Returns the trimmed text of the first selected option.
pub async fn try_first_selected_option_text<D>(select: &Select<'_, D>) -> Outcome<String>
where
    D: WebDriver + ?Sized,
{
    safe_call("first_selected_option_text", &[], || async {
        let option = select.first_selected_option().await?;
        select.option_text(&option).await
    })
    .await
}

/// Best-effort form of [`try_first_selected_option_text`].
pub async fn first_selected_option_text<D>(select: &Select<'_, D>) -> Option<String>
where
    D: WebDriver + ?Sized,
{
    try_first_selected_option_text(select).await.value()
}

/// Returns the position of the selected option.
pub async fn try_index_of_selected_option<D>(select: &Select<'_, D>) -> Outcome<usize>
where
    D: WebDriver + ?Sized,
{
    safe_call("index_of_selected_option", &[], || {
        select.index_of_selected_option()
    })
    .await
}

/// Best-effort form of [`try_index_of_selected_option`].
pub async fn index_of_selected_option<D>(select: &Select<'_, D>) -> Option<usize>
where
    D: WebDriver + ?Sized,
{
    try_index_of_selected_option(select).await.value()
}

// ============================================================================
// Selection
// ============================================================================

/// Selects the option at `index`. Out of range is a fault (status `0`).
pub async fn select_by_index<D>(select: &Select<'_, D>, index: usize) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("select_by_index", &[], || select.select_by_index(index)).await
}

/// Selects each listed index in order, stopping at the first fault.
pub async fn select_by_indexes<D>(select: &Select<'_, D>, indexes: &[usize]) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("select_by_indexes", &[], || async {
        for &index in indexes {
            select.select_by_index(index).await?;
        }
        Ok(())
    })
    .await
}

/// Deselects the option at `index`.
pub async fn deselect_by_index<D>(select: &Select<'_, D>, index: usize) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("deselect_by_index", &[], || select.deselect_by_index(index)).await
}

/// Selects options by visible text.
pub async fn select_by_visible_text<D>(select: &Select<'_, D>, text: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("select_by_visible_text", &[("text", text)], || {
        select.select_by_visible_text(text)
    })
    .await
}

/// Selects options by each listed visible text, stopping at the first fault.
pub async fn select_by_visible_texts<D>(select: &Select<'_, D>, texts: &[&str]) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    if let Some(reason) = texts.iter().find_map(|t| first_blank(&[("text", *t)])) {
        return Outcome::Skipped(reason);
    }

    safe_call("select_by_visible_texts", &[], || async {
        for text in texts {
            select.select_by_visible_text(text).await?;
        }
        Ok(())
    })
    .await
}

/// Deselects options by visible text.
pub async fn deselect_by_visible_text<D>(select: &Select<'_, D>, text: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("deselect_by_visible_text", &[("text", text)], || {
        select.deselect_by_visible_text(text)
    })
    .await
}

/// Selects options by `value` attribute.
pub async fn select_by_value<D>(select: &Select<'_, D>, value: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("select_by_value", &[("value", value)], || {
        select.select_by_value(value)
    })
    .await
}

/// Selects options by each listed value, stopping at the first fault.
pub async fn select_by_values<D>(select: &Select<'_, D>, values: &[&str]) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    if let Some(reason) = values.iter().find_map(|v| first_blank(&[("value", *v)])) {
        return Outcome::Skipped(reason);
    }

    safe_call("select_by_values", &[], || async {
        for value in values {
            select.select_by_value(value).await?;
        }
        Ok(())
    })
    .await
}

/// Deselects options by `value` attribute.
pub async fn deselect_by_value<D>(select: &Select<'_, D>, value: &str) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("deselect_by_value", &[("value", value)], || {
        select.deselect_by_value(value)
    })
    .await
}

/// Clears every selection of a multi-select.
pub async fn deselect_all<D>(select: &Select<'_, D>) -> Outcome<()>
where
    D: WebDriver + ?Sized,
{
    safe_call("deselect_all", &[], || select.deselect_all()).await
}
