//! Release table extraction from a DistroWatch comparison page
//!
//! The page carries one table whose header row starts with a `Feature`
//! cell followed by one cell per release (newest first). Each package row
//! starts with a header cell holding a link named after the package,
//! followed by the version shipped in each release.

use super::distrowatch::SOURCE_NAME;
use crate::domain::DistroHistory;
use crate::error::SourceError;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Header cell text that marks the release row
const RELEASE_ROW_MARKER: &str = "Feature";

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static DATA_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

/// Extract the release history of `package` from a comparison page
pub fn extract_history(
    html: &str,
    distribution: &str,
    package: &str,
) -> Result<DistroHistory, SourceError> {
    let document = Html::parse_document(html);
    let title = page_title(&document).unwrap_or_else(|| distribution.to_string());

    let release_row = document
        .select(&HEADER_CELL)
        .find(|th| text_of(th).trim() == RELEASE_ROW_MARKER)
        .and_then(parent_element)
        .ok_or_else(|| SourceError::distribution_not_found(distribution, SOURCE_NAME))?;

    let distro_versions: Vec<String> = release_row.select(&DATA_CELL).map(stripped_text).collect();

    let package_row = document
        .select(&LINK)
        .find(|a| text_of(a).trim() == package)
        .and_then(parent_element)
        .and_then(parent_element)
        .ok_or_else(|| SourceError::package_not_found(package, distribution))?;

    let package_versions = package_row
        .select(&DATA_CELL)
        .map(|td| text_of(&td).trim().to_string());

    Ok(DistroHistory::from_columns(
        title,
        package_versions,
        distro_versions,
    ))
}

/// Display name from `<title>`: everything after the first space
fn page_title(document: &Html) -> Option<String> {
    let raw = document.select(&TITLE).next().map(|t| text_of(&t))?;
    let raw = raw.trim();

    let name = match raw.split_once(' ') {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
        _ => raw,
    };

    (!name.is_empty()).then(|| name.to_string())
}

fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Non-blank text fragments, trimmed and joined by single spaces
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
