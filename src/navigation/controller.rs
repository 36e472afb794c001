//! Mobile navigation overlay state.
//!
//! ```text
//!            toggle
//!   Closed ─────────► Open
//!     ▲  ◄─────────────┤ toggle / escape / overlay click
//!     │                │ select destination (route change deferred)
//!     └────────────────┘ route change completed (from any state)
//! ```
//!
//! The open state and its host effects are one value (`Option<OpenEffects>`):
//! the scroll lock and escape listener exist exactly while the menu is open.

use crate::navigation::{
    EffectKind, NavigationHost, PendingNavigation, Router, ScopedEffect, ScrollState,
    NAVIGATION_DELAY,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM-style key name ("Escape", "Enter", ...) to a `Key`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Discrete UI events driving the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    Toggle,
    SelectDestination(String),
    OverlayClick,
    KeyDown(Key),
    Scroll(f64),
    RouteChangeCompleted,
}

#[derive(Debug)]
struct OpenEffects {
    _scroll_lock: ScopedEffect,
    _escape_listener: ScopedEffect,
}

/// Owner of the "menu open" flag and everything gated on it.
pub struct NavigationController {
    host: Arc<dyn NavigationHost>,
    router: Arc<dyn Router>,
    runtime: Handle,
    open: Option<OpenEffects>,
    pending: Option<PendingNavigation>,
    scroll: ScrollState,
    delay: Duration,
}

impl NavigationController {
    /// Mount a controller in the `Closed` state.
    ///
    /// Deferred route changes run on `runtime`; the controller itself may be
    /// driven from any thread, inside a runtime or not.
    pub fn mount(
        host: Arc<dyn NavigationHost>,
        router: Arc<dyn Router>,
        runtime: Handle,
    ) -> Self {
        Self {
            host,
            router,
            runtime,
            open: None,
            pending: None,
            scroll: ScrollState::default(),
            delay: NAVIGATION_DELAY,
        }
    }

    /// Override the close-animation delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn state(&self) -> MenuState {
        if self.open.is_some() {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.open.is_some()
    }

    pub fn escape_listener_active(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    /// The most recently scheduled navigation, if it has neither committed
    /// nor been cancelled.
    pub fn pending_navigation(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref().filter(|p| p.is_pending())
    }

    /// Whether `path` is the route currently displayed.
    pub fn is_active(&self, path: &str) -> bool {
        self.router.current_path() == path
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close("toggle");
        } else {
            self.open();
        }
    }

    /// Close the menu and schedule a route change to `path`.
    ///
    /// Any previously scheduled navigation is cancelled first. The returned
    /// handle can cancel this one.
    pub fn select_destination(&mut self, path: &str) -> PendingNavigation {
        self.cancel_pending();
        self.close("destination selected");

        debug!("Deferring navigation to {} by {:?}", path, self.delay);
        let pending = PendingNavigation::schedule(
            &self.runtime,
            Arc::clone(&self.router),
            path,
            self.delay,
        );
        self.pending = Some(pending.clone());
        pending
    }

    pub fn overlay_click(&mut self) {
        self.close("overlay click");
    }

    /// Key presses only reach the controller while the escape listener is
    /// registered, i.e. while the menu is open.
    pub fn key_down(&mut self, key: &Key) {
        if !self.escape_listener_active() {
            return;
        }
        if *key == Key::Escape {
            self.close("escape");
        }
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        if self.scroll.update(offset_y) {
            debug!("Header scrolled = {}", self.scroll.is_scrolled());
        }
    }

    pub fn route_change_completed(&mut self) {
        self.close("route change");
    }

    /// Dispatch a UI event. Returns the handle when the event scheduled a
    /// navigation.
    pub fn handle(&mut self, event: NavEvent) -> Option<PendingNavigation> {
        match event {
            NavEvent::Toggle => self.toggle(),
            NavEvent::SelectDestination(path) => return Some(self.select_destination(&path)),
            NavEvent::OverlayClick => self.overlay_click(),
            NavEvent::KeyDown(key) => self.key_down(&key),
            NavEvent::Scroll(offset_y) => self.on_scroll(offset_y),
            NavEvent::RouteChangeCompleted => self.route_change_completed(),
        }
        None
    }

    /// Tear the controller down, releasing every effect and cancelling any
    /// navigation that has not committed.
    pub fn unmount(self) {}

    fn open(&mut self) {
        // Reopening leaves the awaiting period; a stale route change must not
        // fire under the open menu.
        self.cancel_pending();
        debug!("Opening navigation menu");
        self.open = Some(OpenEffects {
            _scroll_lock: ScopedEffect::acquire(Arc::clone(&self.host), EffectKind::ScrollLock),
            _escape_listener: ScopedEffect::acquire(
                Arc::clone(&self.host),
                EffectKind::EscapeListener,
            ),
        });
    }

    fn close(&mut self, reason: &str) {
        if self.open.take().is_some() {
            debug!("Closed navigation menu ({})", reason);
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.cancel_pending();
        self.open = None;
    }
}
