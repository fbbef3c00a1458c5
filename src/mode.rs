//! The two-variant reference mode.
//!
//! Every literal the selector needs (DOM id, storage value, button label,
//! URL marker) is derived from [`Mode`], so the sync and async spellings
//! live in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of the API reference is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// The blocking client reference.
    #[default]
    #[serde(rename = "Sync")]
    Synchronous,
    /// The asyncio client reference.
    #[serde(rename = "Async")]
    Asynchronous,
}

impl Mode {
    /// Single-word tag used for DOM ids and the persisted preference.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Synchronous => "Sync",
            Self::Asynchronous => "Async",
        }
    }

    /// Human-readable label shown on the dropdown button and its entries.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Synchronous => "Synchronous",
            Self::Asynchronous => "Asynchronous",
        }
    }

    /// URL path segment marking a page as belonging to this mode.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Synchronous => "/sync",
            Self::Asynchronous => "/async",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Synchronous => Self::Asynchronous,
            Self::Asynchronous => Self::Synchronous,
        }
    }

    /// Parse a short name ("Sync"/"Async") back into a mode.
    #[must_use]
    pub fn from_short_name(name: &str) -> Option<Self> {
        [Self::Synchronous, Self::Asynchronous]
            .into_iter()
            .find(|mode| mode.short_name() == name)
    }

    /// Parse a long name ("Synchronous"/"Asynchronous") back into a mode.
    #[must_use]
    pub fn from_long_name(name: &str) -> Option<Self> {
        [Self::Synchronous, Self::Asynchronous]
            .into_iter()
            .find(|mode| mode.long_name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}
