//! Browser-location seam.

/// The selector's view of `window.location`.
///
/// Hosts that can trigger a real navigation implement this; assigning a
/// path is expected to reload the page in a browser environment.
pub trait Navigator {
    /// The current URL path.
    fn pathname(&self) -> &str;

    /// Navigate to a new URL path.
    fn assign(&mut self, path: String);
}

/// Plain in-process location, used by tests and non-browser hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
}

impl Location {
    /// Create a location at the given path.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

impl Navigator for Location {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn assign(&mut self, path: String) {
        self.pathname = path;
    }
}
