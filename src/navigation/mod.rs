//! Mobile navigation state.
//!
//! - `controller`: `NavigationController`, the open/closed state machine
//! - `effect`: host effects (scroll lock, escape listener) scoped to the open state
//! - `deferred`: the `Router` capability and cancellable deferred route changes
//! - `scroll`: header scroll flag

mod controller;
mod deferred;
mod effect;
mod scroll;

pub use controller::{Key, MenuState, NavEvent, NavigationController};
pub use deferred::{PendingNavigation, Router, NAVIGATION_DELAY};
pub use effect::{EffectKind, NavigationHost, ScopedEffect};
pub use scroll::{ScrollState, SCROLL_THRESHOLD};

#[cfg(test)]
pub(crate) mod testing {
    use super::{NavigationHost, Router};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::runtime::Runtime;

    /// Current-thread runtime with a paused clock, for tests that drive the
    /// controller from plain synchronous code.
    pub fn paused_runtime() -> Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap()
    }

    /// Host that records the effects applied to it.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        scroll_locked: AtomicBool,
        escape_listeners: AtomicUsize,
        registrations: AtomicUsize,
    }

    impl FakeHost {
        pub fn scroll_locked(&self) -> bool {
            self.scroll_locked.load(Ordering::SeqCst)
        }

        pub fn escape_listeners(&self) -> usize {
            self.escape_listeners.load(Ordering::SeqCst)
        }

        pub fn listener_registrations(&self) -> usize {
            self.registrations.load(Ordering::SeqCst)
        }
    }

    impl NavigationHost for FakeHost {
        fn lock_scroll(&self) {
            self.scroll_locked.store(true, Ordering::SeqCst);
        }

        fn unlock_scroll(&self) {
            self.scroll_locked.store(false, Ordering::SeqCst);
        }

        fn add_escape_listener(&self) {
            self.escape_listeners.fetch_add(1, Ordering::SeqCst);
            self.registrations.fetch_add(1, Ordering::SeqCst);
        }

        fn remove_escape_listener(&self) {
            self.escape_listeners.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Router that records every navigation.
    #[derive(Debug)]
    pub struct FakeRouter {
        current: Mutex<String>,
        navigations: Mutex<Vec<String>>,
    }

    impl FakeRouter {
        pub fn at(path: &str) -> Self {
            Self {
                current: Mutex::new(path.to_string()),
                navigations: Mutex::new(Vec::new()),
            }
        }

        pub fn navigations(&self) -> Vec<String> {
            self.navigations.lock().unwrap().clone()
        }

        pub fn set_current(&self, path: &str) {
            *self.current.lock().unwrap() = path.to_string();
        }
    }

    impl Router for FakeRouter {
        fn navigate(&self, path: &str) {
            self.navigations.lock().unwrap().push(path.to_string());
            self.set_current(path);
        }

        fn current_path(&self) -> String {
            self.current.lock().unwrap().clone()
        }
    }
}
