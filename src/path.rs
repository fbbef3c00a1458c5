//! Pure URL-path logic for the reference section.
//!
//! These functions decide which mode a path names and how a path changes
//! when the reader switches modes. They never touch the browser location;
//! [`crate::selector::ApiSelector`] applies their results through its
//! [`crate::location::Navigator`].

use crate::mode::Mode;

/// Path readers land on when switching modes from the site root.
const REFERENCE_LANDING: &str = "client";

/// Which mode, if any, the path names via its marker segment.
///
/// The synchronous marker is checked first, matching the original
/// selector's branch order.
#[must_use]
pub fn mode_in_path(path: &str) -> Option<Mode> {
    if path.contains(Mode::Synchronous.path_prefix()) {
        Some(Mode::Synchronous)
    } else if path.contains(Mode::Asynchronous.path_prefix()) {
        Some(Mode::Asynchronous)
    } else {
        None
    }
}

/// Resolve the active mode at load time.
///
/// The path wins over the stored preference; a stored preference counts
/// only when it is exactly the asynchronous short name; everything else
/// (absent, stale, garbage) falls back to the synchronous default.
#[must_use]
pub fn resolve(path: &str, stored: Option<&str>) -> Mode {
    mode_in_path(path).unwrap_or_else(|| match stored {
        Some(name) if name == Mode::Asynchronous.short_name() => Mode::Asynchronous,
        _ => Mode::Synchronous,
    })
}

/// Compute the path a mode switch should navigate to.
///
/// Returns `None` when the path already carries the target marker, in
/// which case the location is left alone. From the site root this
/// redirects to the canonical reference landing page; elsewhere the
/// opposite marker is swapped for the target one with the rest of the
/// path preserved. A path with neither marker comes back unchanged,
/// matching the original's replace-with-no-match behavior.
#[must_use]
pub fn rewrite(path: &str, mode: Mode) -> Option<String> {
    let prefix = mode.path_prefix();
    if path == "/" {
        return Some(format!("/reference{prefix}/{REFERENCE_LANDING}"));
    }
    if path.contains(prefix) {
        return None;
    }
    Some(path.replacen(mode.other().path_prefix(), prefix, 1))
}
