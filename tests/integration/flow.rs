//! Dropdown rendering, visibility toggling, and navigation on selection.

use crate::common::PageBuilder;
use apiselector::dom::{Display, Dom};
use apiselector::selector::{MD_APISELECTOR, MD_APISELECTOR_CURRENT, MD_APISELECTOR_LINK};
use apiselector::{ApiSelector, Location, MemoryStore, Mode, Navigator, SelectorError};
use pretty_assertions::assert_eq;
use rstest::rstest;

type Selector = ApiSelector<Location, MemoryStore>;
type TestResult = Result<(), Box<dyn std::error::Error>>;

fn init_at(path: &str) -> Result<Selector, SelectorError> {
    ApiSelector::init(
        PageBuilder::new().build(),
        Location::new(path),
        MemoryStore::new(),
    )
}

fn button_text(dom: &Dom) -> Result<String, Box<dyn std::error::Error>> {
    let button = dom
        .by_class(MD_APISELECTOR_CURRENT)
        .into_iter()
        .next()
        .ok_or("no dropdown button")?;
    Ok(dom.text(button).to_string())
}

fn item_display(dom: &Dom, short_name: &str) -> Result<Display, Box<dyn std::error::Error>> {
    let item = dom
        .by_id(short_name)
        .ok_or_else(|| format!("no nav item tagged {short_name}"))?;
    Ok(dom.display(item))
}

#[test]
fn test_dropdown_rendered_once_on_reference_page() -> TestResult {
    let selector = init_at("/reference/sync/client")?;
    assert_eq!(selector.dom().by_class(MD_APISELECTOR).len(), 1);

    let entries: Vec<&str> = selector
        .dom()
        .by_class(MD_APISELECTOR_LINK)
        .into_iter()
        .map(|link| selector.dom().text(link))
        .collect();
    assert_eq!(entries, vec!["Asynchronous", "Synchronous"]);
    Ok(())
}

#[test]
fn test_dropdown_skipped_off_reference_pages() -> TestResult {
    let selector = init_at("/reference/client")?;
    assert!(selector.dom().by_class(MD_APISELECTOR).is_empty());
    // Navigation is still relabeled and tagged.
    assert!(selector.dom().by_id("Sync").is_some());
    assert!(selector.dom().by_id("Async").is_some());
    Ok(())
}

#[test]
fn test_nav_anchors_relabeled() -> TestResult {
    let selector = init_at("/reference/sync/client")?;
    for short_name in ["Sync", "Async"] {
        let item = selector
            .dom()
            .by_id(short_name)
            .ok_or("missing tagged item")?;
        let label = selector
            .dom()
            .children(item)
            .first()
            .copied()
            .ok_or("tagged item has no label")?;
        assert_eq!(selector.dom().text(label), "sfapi_client");
    }
    Ok(())
}

#[rstest]
#[case(Mode::Synchronous)]
#[case(Mode::Asynchronous)]
fn test_exactly_one_entry_visible(#[case] mode: Mode) -> TestResult {
    let mut selector = init_at("/reference/sync/client")?;
    selector.apply_mode(mode);

    let shown = item_display(selector.dom(), mode.short_name())?;
    let hidden = item_display(selector.dom(), mode.other().short_name())?;
    assert_eq!(shown, Display::ListItem);
    assert_eq!(hidden, Display::None);
    assert_eq!(button_text(selector.dom())?, mode.long_name());
    Ok(())
}

#[test]
fn test_apply_mode_is_idempotent() -> TestResult {
    let mut selector = init_at("/reference/sync/client")?;
    selector.apply_mode(Mode::Asynchronous);
    let first = (
        item_display(selector.dom(), "Sync")?,
        item_display(selector.dom(), "Async")?,
        button_text(selector.dom())?,
    );

    selector.apply_mode(Mode::Asynchronous);
    let second = (
        item_display(selector.dom(), "Sync")?,
        item_display(selector.dom(), "Async")?,
        button_text(selector.dom())?,
    );
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_select_rewrites_path() -> TestResult {
    let mut selector = init_at("/reference/async/client")?;
    assert_eq!(selector.mode(), Mode::Asynchronous);

    selector.select(Mode::Synchronous)?;
    assert_eq!(selector.navigator().pathname(), "/reference/sync/client");
    assert_eq!(selector.mode(), Mode::Synchronous);
    Ok(())
}

#[test]
fn test_select_redirects_from_root() -> TestResult {
    let mut selector = init_at("/")?;
    selector.select(Mode::Asynchronous)?;
    assert_eq!(selector.navigator().pathname(), "/reference/async/client");
    Ok(())
}

#[test]
fn test_select_by_entry_text() -> TestResult {
    let mut selector = init_at("/reference/sync/client")?;
    selector.select_label("Asynchronous")?;
    assert_eq!(selector.mode(), Mode::Asynchronous);
    assert_eq!(selector.navigator().pathname(), "/reference/async/client");
    Ok(())
}

#[test]
fn test_select_rejects_unknown_label() -> TestResult {
    let mut selector = init_at("/reference/sync/client")?;
    let error = selector
        .select_label("Blocking")
        .err()
        .ok_or("expected an error")?;
    assert!(matches!(error, SelectorError::UnknownLabel(_)));
    Ok(())
}

#[test]
fn test_missing_header_fails_on_reference_page() -> TestResult {
    let error = ApiSelector::init(
        PageBuilder::new().without_header().build(),
        Location::new("/reference/sync/client"),
        MemoryStore::new(),
    )
    .err()
    .ok_or("expected an error")?;
    assert!(matches!(error, SelectorError::MissingHeaderTopic));
    Ok(())
}

#[test]
fn test_missing_header_tolerated_off_reference_pages() -> TestResult {
    let selector = ApiSelector::init(
        PageBuilder::new().without_header().build(),
        Location::new("/reference/client"),
        MemoryStore::new(),
    )?;
    assert_eq!(selector.mode(), Mode::Synchronous);
    Ok(())
}

#[test]
fn test_missing_nav_anchor_fails() -> TestResult {
    let error = ApiSelector::init(
        PageBuilder::new().without_async_anchor().build(),
        Location::new("/reference/sync/client"),
        MemoryStore::new(),
    )
    .err()
    .ok_or("expected an error")?;
    assert!(matches!(
        error,
        SelectorError::MissingNavAnchor(Mode::Asynchronous)
    ));
    Ok(())
}
