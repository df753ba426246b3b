//! Shared test utilities.
//!
//! Provides a recording stub driver that models a small page:
//! - Elements matched by exact locator
//! - `<select>` elements with `<option>` children
//! - Fault injection (error or panic on every call)
//! - Call counting to prove the driver was never contacted

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use safe_automation::{By, ElementId, ElementRect, Error, PointerAction, Result, WebDriver};

// ============================================================================
// Logging
// ============================================================================

/// Installs a test subscriber once; `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("safe_automation=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Types
// ============================================================================

/// How the stub answers calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Serve from the modeled page.
    Normal,
    /// Return a driver error from every call.
    Fail,
    /// Panic inside every call.
    Panic,
}

/// One modeled element.
#[derive(Debug, Clone)]
pub struct StubElement {
    pub id: ElementId,
    pub tag: String,
    pub text: String,
    pub attributes: HashMap<String, String>,
    pub displayed: bool,
    pub selected: bool,
    pub enabled: bool,
    pub rect: ElementRect,
    pub locators: Vec<By>,
    pub children: Vec<ElementId>,
    pub parent: Option<ElementId>,
    /// Whether typed keys become visible text.
    pub echo_keys: bool,
}

impl StubElement {
    pub fn new(id: &str) -> Self {
        Self {
            id: ElementId::new(id),
            tag: "div".to_string(),
            text: String::new(),
            attributes: HashMap::new(),
            displayed: true,
            selected: false,
            enabled: true,
            rect: ElementRect::new(0.0, 0.0, 10.0, 10.0),
            locators: Vec::new(),
            children: Vec::new(),
            parent: None,
            echo_keys: true,
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = ElementRect::new(x, y, width, height);
        self
    }

    pub fn matches(mut self, by: By) -> Self {
        self.locators.push(by);
        self
    }

    pub fn ignore_keys(mut self) -> Self {
        self.echo_keys = false;
        self
    }
}

#[derive(Debug, Default)]
struct Page {
    elements: HashMap<ElementId, StubElement>,
    order: Vec<ElementId>,
    actions: Vec<PointerAction>,
    clicks: Vec<ElementId>,
    screenshot: Option<String>,
    fail_move_to: bool,
}

// ============================================================================
// StubDriver
// ============================================================================

/// In-memory driver that records every call.
pub struct StubDriver {
    page: Mutex<Page>,
    mode: Mutex<Mode>,
    calls: AtomicUsize,
}

impl StubDriver {
    pub fn new() -> Self {
        Self {
            page: Mutex::new(Page::default()),
            mode: Mutex::new(Mode::Normal),
            calls: AtomicUsize::new(0),
        }
    }

    /// Adds a top-level element.
    pub fn with_element(self, element: StubElement) -> Self {
        self.insert(element);
        self
    }

    /// Adds a `<select>` matched by `by` with one `<option>` per text.
    ///
    /// Option values are the lowercase texts. A single-choice select starts
    /// with its first option selected, as browsers do.
    pub fn with_select(self, id: &str, by: By, texts: &[&str], multiple: bool) -> Self {
        let mut select = StubElement::new(id).tag("select").matches(by);
        if multiple {
            select = select.attribute("multiple", "true");
        }

        for (index, text) in texts.iter().enumerate() {
            let option_id = ElementId::new(format!("{id}-opt{index}"));
            let mut option = StubElement::new(option_id.as_str())
                .tag("option")
                .text(&format!("  {text} "))
                .attribute("value", &text.to_lowercase());
            option.parent = Some(select.id.clone());
            option.selected = !multiple && index == 0;
            select.children.push(option_id);
            self.insert(option);
        }

        self.insert(select);
        self
    }

    /// Sets the page capture to a `width` x `height` PNG.
    ///
    /// The left half is red, the right half blue.
    pub fn with_page_image(self, width: u32, height: u32) -> Self {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode stub page");
        self.page.lock().screenshot = Some(Base64Standard.encode(out.into_inner()));
        self
    }

    /// Makes every pointer move-to step fail.
    pub fn with_failing_move_to(self) -> Self {
        self.page.lock().fail_move_to = true;
        self
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock() = mode;
    }

    /// Number of trait calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn actions(&self) -> Vec<PointerAction> {
        self.page.lock().actions.clone()
    }

    pub fn clicks(&self) -> Vec<ElementId> {
        self.page.lock().clicks.clone()
    }

    pub fn element(&self, id: &str) -> StubElement {
        self.page
            .lock()
            .elements
            .get(&ElementId::new(id))
            .cloned()
            .expect("unknown stub element")
    }

    fn insert(&self, element: StubElement) {
        let mut page = self.page.lock();
        page.order.push(element.id.clone());
        page.elements.insert(element.id.clone(), element);
    }

    /// Counts the call and applies the fault mode.
    fn enter(&self, method: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.mode.lock() {
            Mode::Normal => Ok(()),
            Mode::Fail => Err(Error::driver(format!("stub failure in {method}"))),
            Mode::Panic => panic!("stub panic in {method}"),
        }
    }

    fn read<T>(&self, element: &ElementId, f: impl FnOnce(&StubElement) -> T) -> Result<T> {
        let page = self.page.lock();
        page.elements
            .get(element)
            .map(f)
            .ok_or_else(|| Error::stale_element(element.clone()))
    }

    fn write<T>(&self, element: &ElementId, f: impl FnOnce(&mut StubElement) -> T) -> Result<T> {
        let mut page = self.page.lock();
        page.elements
            .get_mut(element)
            .map(f)
            .ok_or_else(|| Error::stale_element(element.clone()))
    }
}

// ============================================================================
// WebDriver
// ============================================================================

#[async_trait]
impl WebDriver for StubDriver {
    async fn find_element(&self, by: &By) -> Result<ElementId> {
        self.enter("find_element")?;
        let page = self.page.lock();
        page.order
            .iter()
            .find(|id| page.elements[*id].locators.contains(by))
            .cloned()
            .ok_or_else(|| Error::element_not_found(by.to_string()))
    }

    async fn find_child_elements(&self, parent: &ElementId, by: &By) -> Result<Vec<ElementId>> {
        self.enter("find_child_elements")?;
        let page = self.page.lock();
        let parent = page
            .elements
            .get(parent)
            .ok_or_else(|| Error::stale_element(parent.clone()))?;

        Ok(parent
            .children
            .iter()
            .filter(|id| {
                let child = &page.elements[*id];
                child.locators.contains(by)
                    || matches!(by, By::CssSelector(tag) if *tag == child.tag)
            })
            .cloned()
            .collect())
    }

    async fn tag_name(&self, element: &ElementId) -> Result<String> {
        self.enter("tag_name")?;
        self.read(element, |e| e.tag.clone())
    }

    async fn text(&self, element: &ElementId) -> Result<String> {
        self.enter("text")?;
        self.read(element, |e| e.text.clone())
    }

    async fn attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>> {
        self.enter("attribute")?;
        self.read(element, |e| e.attributes.get(name).cloned())
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool> {
        self.enter("is_displayed")?;
        self.read(element, |e| e.displayed)
    }

    async fn is_selected(&self, element: &ElementId) -> Result<bool> {
        self.enter("is_selected")?;
        self.read(element, |e| e.selected)
    }

    async fn is_enabled(&self, element: &ElementId) -> Result<bool> {
        self.enter("is_enabled")?;
        self.read(element, |e| e.enabled)
    }

    async fn rect(&self, element: &ElementId) -> Result<ElementRect> {
        self.enter("rect")?;
        self.read(element, |e| e.rect)
    }

    async fn click(&self, element: &ElementId) -> Result<()> {
        self.enter("click")?;
        let mut page = self.page.lock();
        let clicked = page
            .elements
            .get(element)
            .cloned()
            .ok_or_else(|| Error::stale_element(element.clone()))?;
        page.clicks.push(element.clone());

        if clicked.tag != "option" {
            return Ok(());
        }

        let Some(parent_id) = clicked.parent else {
            return Ok(());
        };
        let parent = page.elements[&parent_id].clone();
        let multiple = parent.attributes.contains_key("multiple");

        for sibling in &parent.children {
            let node = page.elements.get_mut(sibling).expect("option exists");
            if sibling == element {
                node.selected = if multiple { !node.selected } else { true };
            } else if !multiple {
                node.selected = false;
            }
        }
        Ok(())
    }

    async fn clear(&self, element: &ElementId) -> Result<()> {
        self.enter("clear")?;
        self.write(element, |e| e.text.clear())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
        self.enter("send_keys")?;
        self.write(element, |e| {
            if e.echo_keys {
                e.text.push_str(text);
            }
        })
    }

    async fn perform_actions(&self, actions: &[PointerAction]) -> Result<()> {
        self.enter("perform_actions")?;
        let mut page = self.page.lock();
        if page.fail_move_to
            && actions
                .iter()
                .any(|a| matches!(a, PointerAction::MoveTo { .. }))
        {
            return Err(Error::driver("move target out of bounds"));
        }
        page.actions.extend_from_slice(actions);
        Ok(())
    }

    async fn screenshot(&self) -> Result<String> {
        self.enter("screenshot")?;
        self.page
            .lock()
            .screenshot
            .clone()
            .ok_or_else(|| Error::driver("no page image configured"))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A page with one element per locator kind plus a few extras.
pub fn sample_page() -> StubDriver {
    StubDriver::new()
        .with_element(
            StubElement::new("heading")
                .tag("h1")
                .text("  Welcome back \n")
                .attribute("title", "greeting")
                .rect(12.4, 30.9, 200.0, 40.0)
                .matches(By::xpath("//h1"))
                .matches(By::css("h1.title")),
        )
        .with_element(
            StubElement::new("submit")
                .tag("button")
                .text("Submit")
                .matches(By::id("submit"))
                .matches(By::class_name("primary")),
        )
        .with_element(
            StubElement::new("email")
                .tag("input")
                .attribute("value", "old@example.com")
                .attribute("placeholder", "Email")
                .matches(By::id("email")),
        )
        .with_element(
            StubElement::new("banner")
                .tag("div")
                .text("Sale")
                .hidden()
                .disabled()
                .matches(By::class_name("banner")),
        )
        .with_element(
            StubElement::new("agree")
                .tag("input")
                .selected()
                .matches(By::id("agree")),
        )
}
