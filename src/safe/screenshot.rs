//! Page and element screenshots written to `dir/name`.
//!
//! An existing file at the target path is never overwritten: the operation
//! reports [`Error::FileExists`] (status `-1`) and leaves the file as it was.
//!
//! | Status | Meaning |
//! |--------|---------|
//! | `1` | image written |
//! | `0` | blank input or fault |
//! | `-1` | target file already exists |
//! | `-2` | element could not be located (`_by` forms) |

// ============================================================================
// Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::{Cursor, ErrorKind, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Standard;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::driver::{ElementRect, WebDriver};
use crate::error::{Error, Result};
use crate::identifiers::ElementId;
use crate::outcome::{Outcome, SkipReason, safe_call};

use super::locate::with_located;

// ============================================================================
// Page
// ============================================================================

/// Captures the viewport and writes it as PNG to `dir/name`.
///
/// Returns the written path.
pub async fn screenshot<D>(driver: &D, dir: impl AsRef<Path>, name: &str) -> Outcome<PathBuf>
where
    D: WebDriver + ?Sized,
{
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Outcome::Skipped(SkipReason::blank("directory"));
    }

    safe_call("screenshot", &[("file name", name)], || async {
        let path = target_path(dir, name)?;
        let bytes = capture(driver).await?;
        write_new(&path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Saved screenshot");
        Ok(path)
    })
    .await
}

// ============================================================================
// Element
// ============================================================================

/// Captures the viewport, crops it to the element and writes it as PNG to
/// `dir/name`.
pub async fn element_screenshot<D>(
    driver: &D,
    element: &ElementId,
    dir: impl AsRef<Path>,
    name: &str,
) -> Outcome<PathBuf>
where
    D: WebDriver + ?Sized,
{
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Outcome::Skipped(SkipReason::blank("directory"));
    }

    safe_call("element_screenshot", &[("file name", name)], || async {
        let path = target_path(dir, name)?;
        let page = capture(driver).await?;
        let rect = driver.rect(element).await?;
        let cropped = crop_png(&page, &rect)?;
        write_new(&path, &cropped)?;
        debug!(
            element_id = %element,
            path = %path.display(),
            bytes = cropped.len(),
            "Saved element screenshot"
        );
        Ok(path)
    })
    .await
}

/// Locates an element and runs [`element_screenshot`] on it.
///
/// All inputs are checked before the lookup.
pub async fn element_screenshot_by<D>(
    driver: &D,
    identifier: &str,
    kind: &str,
    dir: impl AsRef<Path>,
    name: &str,
) -> Outcome<PathBuf>
where
    D: WebDriver + ?Sized,
{
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Outcome::Skipped(SkipReason::blank("directory"));
    }
    if name.is_empty() {
        return Outcome::Skipped(SkipReason::blank("file name"));
    }

    with_located(driver, identifier, kind, |element| async move {
        element_screenshot(driver, &element, dir, name).await
    })
    .await
}

// ============================================================================
// Internal
// ============================================================================

/// Joins the target path, refusing one that already exists.
fn target_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.exists() {
        return Err(Error::file_exists(path));
    }
    Ok(path)
}

/// Captures the viewport and decodes the driver's base64 payload.
async fn capture<D>(driver: &D) -> Result<Vec<u8>>
where
    D: WebDriver + ?Sized,
{
    let data = driver.screenshot().await?;
    Ok(Base64Standard.decode(data.trim())?)
}

/// Writes `bytes` to a file that must not exist yet.
fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::file_exists(path),
            _ => Error::Io(e),
        })?;
    file.write_all(bytes)?;
    Ok(())
}

/// Crops a page image to `rect` and re-encodes it as PNG.
///
/// A partially visible element is clipped to the image bounds. An element
/// that does not intersect the image is an error.
fn crop_png(page: &[u8], rect: &ElementRect) -> Result<Vec<u8>> {
    let location = rect.location();
    let size = rect.size();
    if size.width == 0 || size.height == 0 {
        return Err(Error::driver("Element has zero dimensions"));
    }

    let img: DynamicImage = image::load_from_memory(page)?;
    let (img_width, img_height) = img.dimensions();

    let extent = |len: u64| i64::try_from(len).unwrap_or(i64::MAX);
    let left = location.x.max(0);
    let top = location.y.max(0);
    let right = location
        .x
        .saturating_add(extent(size.width))
        .min(i64::from(img_width));
    let bottom = location
        .y
        .saturating_add(extent(size.height))
        .min(i64::from(img_height));

    if left >= right || top >= bottom {
        return Err(Error::driver(format!(
            "Element at ({}, {}) lies outside the {img_width}x{img_height} capture",
            location.x, location.y
        )));
    }

    // Bounded by the image dimensions above.
    let (x, y) = (left as u32, top as u32);
    let (width, height) = ((right - left) as u32, (bottom - top) as u32);

    let cropped = img.crop_imm(x, y, width, height);

    let mut output = Cursor::new(Vec::new());
    cropped.write_to(&mut output, ImageFormat::Png)?;
    Ok(output.into_inner())
}

// ============================================================================
// Tests
// ============================================================================
