//! Scoped host effects held while the mobile menu is open.
//!
//! A [`ScopedEffect`] performs its host call when acquired and the matching
//! reversal when dropped, so every exit path out of the open state (toggle,
//! escape, overlay click, route change, unmount) releases it.

use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Side effects the navigation controller needs from its host environment.
pub trait NavigationHost: Send + Sync {
    /// Prevent the page body from scrolling behind the overlay.
    fn lock_scroll(&self);

    fn unlock_scroll(&self);

    /// Start delivering Escape key presses to the controller.
    fn add_escape_listener(&self);

    fn remove_escape_listener(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    ScrollLock,
    EscapeListener,
}

/// A host effect that is released when this value is dropped.
pub struct ScopedEffect {
    host: Arc<dyn NavigationHost>,
    kind: EffectKind,
}

impl ScopedEffect {
    pub fn acquire(host: Arc<dyn NavigationHost>, kind: EffectKind) -> Self {
        match kind {
            EffectKind::ScrollLock => host.lock_scroll(),
            EffectKind::EscapeListener => host.add_escape_listener(),
        }
        trace!("Acquired {:?}", kind);
        Self { host, kind }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }
}

impl Drop for ScopedEffect {
    fn drop(&mut self) {
        match self.kind {
            EffectKind::ScrollLock => self.host.unlock_scroll(),
            EffectKind::EscapeListener => self.host.remove_escape_listener(),
        }
        trace!("Released {:?}", self.kind);
    }
}

impl fmt::Debug for ScopedEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedEffect").field("kind", &self.kind).finish()
    }
}
