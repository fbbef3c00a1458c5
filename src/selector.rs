//! The sync/async reference selector component.
//!
//! One instance per page load. [`ApiSelector::init`] mirrors what the
//! documentation site's script does when the page is evaluated: render
//! the dropdown on reference pages, relabel the two navigation entries,
//! and apply whichever mode the URL or the stored preference names.
//! [`ApiSelector::select`] is the dropdown click handler.

use crate::dom::{Display, Dom, NodeId, find_by_label};
use crate::error::SelectorError;
use crate::location::Navigator;
use crate::mode::Mode;
use crate::path;
use crate::prefs::{PREFERENCE_KEY, PreferenceStore};
use tracing::{debug, info};

/// Class of navigation links in the site theme.
pub const MD_NAV_LINK: &str = "md-nav__link";
/// Class of the header region the dropdown is mounted into.
pub const MD_HEADER_TOPIC: &str = "md-header__topic";

// The dropdown reuses the theme's version-selector styling.
/// Class of the dropdown container.
pub const MD_APISELECTOR: &str = "md-version";
/// Class of the dropdown button showing the current mode.
pub const MD_APISELECTOR_CURRENT: &str = "md-version__current";
/// Class of the dropdown entry list.
pub const MD_APISELECTOR_LIST: &str = "md-version__list";
/// Class of a dropdown entry.
pub const MD_APISELECTOR_ITEM: &str = "md-version__item";
/// Class of a dropdown entry's link.
pub const MD_APISELECTOR_LINK: &str = "md-version__link";

/// Display name both navigation anchors are relabeled to.
const CLIENT_NAME: &str = "sfapi_client";

/// Handles to the elements the selector keeps mutating after init.
#[derive(Debug, Clone, Copy)]
struct Handles {
    sync_item: NodeId,
    async_item: NodeId,
    /// Dropdown button, present only on reference pages.
    button: Option<NodeId>,
}

/// The reference mode selector, owning the page model and its seams.
#[derive(Debug)]
pub struct ApiSelector<N, P> {
    dom: Dom,
    nav: N,
    prefs: P,
    handles: Handles,
    mode: Mode,
}

impl<N: Navigator, P: PreferenceStore> ApiSelector<N, P> {
    /// Initialize the selector against a freshly built page.
    ///
    /// On reference pages (path carries a mode marker) the dropdown is
    /// rendered and the marker's mode applied and navigated to; elsewhere
    /// the stored preference or the synchronous default is applied
    /// without touching the URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is missing the header topic region
    /// (reference pages only) or either navigation anchor.
    pub fn init(mut dom: Dom, nav: N, prefs: P) -> Result<Self, SelectorError> {
        let path_mode = path::mode_in_path(nav.pathname());

        let button = if path_mode.is_some() {
            Some(render_dropdown(&mut dom)?)
        } else {
            debug!(path = nav.pathname(), "not a reference page, dropdown skipped");
            None
        };

        let sync_item = tag_nav_entry(&mut dom, Mode::Synchronous)?;
        let async_item = tag_nav_entry(&mut dom, Mode::Asynchronous)?;

        let mut selector = Self {
            dom,
            nav,
            prefs,
            handles: Handles {
                sync_item,
                async_item,
                button,
            },
            mode: Mode::default(),
        };

        match path_mode {
            Some(mode) => {
                debug!(%mode, "resolved reference mode from path");
                selector.apply_mode(mode);
                selector.navigate_to_mode(mode);
            }
            None => {
                // Load-time fallback applies visibility only; the URL is
                // rewritten solely on explicit selection.
                let stored = selector.prefs.get(PREFERENCE_KEY);
                let mode = path::resolve(selector.nav.pathname(), stored.as_deref());
                debug!(%mode, stored = stored.as_deref(), "resolved mode from preference");
                selector.apply_mode(mode);
            }
        }

        Ok(selector)
    }

    /// Make `mode`'s navigation entry the visible one and update the
    /// dropdown label. Idempotent.
    pub fn apply_mode(&mut self, mode: Mode) {
        let (shown, hidden) = match mode {
            Mode::Synchronous => (self.handles.sync_item, self.handles.async_item),
            Mode::Asynchronous => (self.handles.async_item, self.handles.sync_item),
        };
        self.dom.set_display(shown, Display::ListItem);
        self.dom.set_display(hidden, Display::None);
        if let Some(button) = self.handles.button {
            self.dom.set_text(button, mode.long_name());
        }
        self.mode = mode;
    }

    /// Rewrite the location for `mode` if the path does not already name it.
    pub fn navigate_to_mode(&mut self, mode: Mode) {
        if let Some(next) = path::rewrite(self.nav.pathname(), mode) {
            info!(from = self.nav.pathname(), to = %next, "navigating to reference path");
            self.nav.assign(next);
        }
    }

    /// Handle an explicit selection: apply, navigate, persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be persisted; visibility
    /// and location are already updated at that point.
    pub fn select(&mut self, mode: Mode) -> Result<(), SelectorError> {
        info!(%mode, "reference mode selected");
        self.apply_mode(mode);
        self.navigate_to_mode(mode);
        self.prefs
            .set(PREFERENCE_KEY, mode.short_name())
            .map_err(SelectorError::Preferences)?;
        Ok(())
    }

    /// Handle a click by the clicked entry's visible text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text matches neither mode label, or if
    /// persisting the preference fails.
    pub fn select_label(&mut self, label: &str) -> Result<(), SelectorError> {
        let mode = Mode::from_long_name(label)
            .ok_or_else(|| SelectorError::UnknownLabel(label.to_string()))?;
        self.select(mode)
    }

    /// The currently applied mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The page model, for hosts rendering it back out.
    #[must_use]
    pub const fn dom(&self) -> &Dom {
        &self.dom
    }

    /// The navigator, for hosts inspecting the resulting location.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.nav
    }

    /// The preference store, for hosts carrying it across page loads.
    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.prefs
    }
}

/// Build the dropdown under the first header topic element.
///
/// Tree: `div.md-version > (button.md-version__current, ul.md-version__list
/// > 2 li.md-version__item > a.md-version__link)`. Entry order and the
/// button's initial label match the original markup.
fn render_dropdown(dom: &mut Dom) -> Result<NodeId, SelectorError> {
    let topic = dom
        .by_class(MD_HEADER_TOPIC)
        .into_iter()
        .next()
        .ok_or(SelectorError::MissingHeaderTopic)?;

    let container = dom.create_element("div");
    dom.set_class(container, MD_APISELECTOR);

    let button = dom.create_element("button");
    dom.set_class(button, MD_APISELECTOR_CURRENT);
    dom.set_text(button, Mode::Synchronous.long_name());

    let list = dom.create_element("ul");
    dom.set_class(list, MD_APISELECTOR_LIST);
    for mode in [Mode::Asynchronous, Mode::Synchronous] {
        let item = dom.create_element("li");
        dom.set_class(item, MD_APISELECTOR_ITEM);
        let link = dom.create_element("a");
        dom.set_class(link, MD_APISELECTOR_LINK);
        dom.set_text(link, mode.long_name());
        dom.append_child(item, link);
        dom.append_child(list, item);
    }

    dom.append_child(container, button);
    dom.append_child(container, list);
    dom.append_child(topic, container);
    Ok(button)
}

/// Relabel `mode`'s navigation anchor and tag its parent list item.
fn tag_nav_entry(dom: &mut Dom, mode: Mode) -> Result<NodeId, SelectorError> {
    let labels: Vec<NodeId> = dom
        .by_class(MD_NAV_LINK)
        .into_iter()
        .filter(|&node| dom.tag(node) == "label")
        .collect();
    let anchor =
        find_by_label(dom, labels, mode.short_name()).ok_or(SelectorError::MissingNavAnchor(mode))?;
    dom.set_text(anchor, CLIENT_NAME);

    let item = dom
        .parent(anchor)
        .ok_or(SelectorError::MissingNavAnchor(mode))?;
    dom.set_id(item, mode.short_name());
    Ok(item)
}
