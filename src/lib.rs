//! Sync/Async API reference selector for the client documentation site.
//!
//! The docs publish two renditions of the API reference, one for the
//! blocking client and one for the asyncio client. This crate models the
//! page-side component that lets readers switch between them: a dropdown
//! in the page header, a pair of navigation entries of which exactly one
//! is visible, a URL path that names the active mode, and a persisted
//! preference used when the URL does not disambiguate.

pub mod dom;
pub mod error;
pub mod location;
pub mod mode;
pub mod path;
pub mod prefs;
pub mod selector;

pub use dom::Dom;
pub use error::SelectorError;
pub use location::{Location, Navigator};
pub use mode::Mode;
pub use prefs::{FileStore, MemoryStore, PreferenceStore};
pub use selector::ApiSelector;
