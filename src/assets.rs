// SPDX-License-Identifier: MPL-2.0
//! Collaborator interface for icons and sound cues.
//!
//! The scheduler never loads or decodes assets itself; it holds opaque
//! [`ImageHandle`]s produced by the host's [`AssetProvider`] and asks the
//! provider to play cues by name. Handles are cheap to clone and remain
//! valid for the lifetime of the provider.

use crate::error::Result;

/// Sound cue played when a card enters a slot.
pub const NOTICE_CUE: &str = "notice";

/// Opaque reference to a host-owned image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    name: String,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The provider-side name this handle was created from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Host-implemented asset access: icon lookup and audio cues.
pub trait AssetProvider {
    /// Resolves an icon by name (e.g. `"tip"`, `"preFig"`).
    fn load_icon(&self, name: &str) -> Result<ImageHandle>;

    /// Fires a one-shot sound cue. Must not block.
    fn play_cue(&self, name: &str);
}
