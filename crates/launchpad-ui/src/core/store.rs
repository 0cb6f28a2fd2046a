//! Shared yewdux store slices and the handles components receive as props.
//!
//! # Design
//! - All slices live in one `yewdux::Context` created by the app root; nothing uses the
//!   global dispatch, so each running app owns exactly one theme flag and one bonus flag.
//! - Handles are passed explicitly to the components that read or write them.
//! - Handle equality is identity: clones of one handle compare equal, separately
//!   constructed handles do not.

use crate::core::auth::AuthState;
use crate::core::preferences::{PreferenceError, PreferenceStore};
use crate::core::theme::ThemeMode;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use yew::Callback;
use yewdux::Context;
use yewdux::prelude::{Dispatch, Store};

/// Theme slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct ThemeSlice {
    /// Active theme mode.
    pub mode: ThemeMode,
    /// Whether the stored preference has been read into this context.
    pub loaded: bool,
}

/// Easter-egg flag slice. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Store)]
pub struct BonusSlice {
    /// Whether the bonus visuals are on.
    pub enabled: bool,
}

/// Session snapshot slice published by the auth gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SessionSlice {
    /// Current auth state.
    pub state: AuthState,
}

/// Live subscription to a slice; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription<S: Store> {
    _dispatch: Dispatch<S>,
}

/// Typed handle over one slice of a context.
pub struct StoreHandle<S: Store> {
    cx: Context,
    token: Rc<()>,
    _slice: PhantomData<S>,
}

impl<S: Store> StoreHandle<S> {
    /// Bind a handle to the slice `S` in `cx`.
    #[must_use]
    pub fn new(cx: &Context) -> Self {
        Self {
            cx: cx.clone(),
            token: Rc::new(()),
            _slice: PhantomData,
        }
    }

    fn dispatch(&self) -> Dispatch<S> {
        Dispatch::new(&self.cx)
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> Rc<S> {
        self.dispatch().get()
    }

    /// Replace the value; listeners run only if it changed.
    pub fn set(&self, value: S) {
        self.dispatch().set(value);
    }

    /// Mutate the value in place.
    pub fn reduce<F>(&self, f: F)
    where
        S: Clone,
        F: FnOnce(&mut S),
    {
        self.dispatch().reduce_mut(f);
    }

    /// Register a listener. It is called with the current value right away and on every
    /// later change until the returned subscription is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<S>
    where
        F: Fn(Rc<S>) + 'static,
    {
        Subscription {
            _dispatch: self.dispatch().subscribe(Callback::from(listener)),
        }
    }
}

impl<S: Store> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            cx: self.cx.clone(),
            token: Rc::clone(&self.token),
            _slice: PhantomData,
        }
    }
}

impl<S: Store> PartialEq for StoreHandle<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.token, &other.token)
    }
}

impl<S: Store> fmt::Debug for StoreHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}

/// Dark-mode flag with write-through persistence.
#[derive(Clone)]
pub struct ThemeStore {
    slice: StoreHandle<ThemeSlice>,
    prefs: Rc<dyn PreferenceStore>,
}

impl ThemeStore {
    /// Open the theme slice. The stored preference is read only by the first open on a
    /// context; later opens join the existing value.
    #[must_use]
    pub fn open(cx: &Context, prefs: Rc<dyn PreferenceStore>, default_dark: bool) -> Self {
        let slice = StoreHandle::<ThemeSlice>::new(cx);
        if !slice.get().loaded {
            let dark_mode = prefs.load_dark_mode().unwrap_or(default_dark);
            slice.set(ThemeSlice {
                mode: ThemeMode::from_dark(dark_mode),
                loaded: true,
            });
        }
        Self { slice, prefs }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.slice.get().mode
    }

    /// Whether dark mode is on.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.mode().is_dark()
    }

    /// Set the flag, then write it through to the preference store. The in-memory value
    /// changes even when the write fails.
    ///
    /// # Errors
    ///
    /// Returns the preference store's error when persisting fails.
    pub fn set(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        self.slice.set(ThemeSlice {
            mode: ThemeMode::from_dark(dark_mode),
            loaded: true,
        });
        self.prefs.save_dark_mode(dark_mode)
    }

    /// Flip the flag.
    ///
    /// # Errors
    ///
    /// Returns the preference store's error when persisting fails.
    pub fn toggle(&self) -> Result<(), PreferenceError> {
        self.set(!self.dark_mode())
    }

    /// Listen for mode changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<ThemeSlice>
    where
        F: Fn(ThemeMode) + 'static,
    {
        self.slice.subscribe(move |slice| listener(slice.mode))
    }
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.slice == other.slice
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

/// App-lifetime bonus flag, initially off.
#[derive(Clone, Debug, PartialEq)]
pub struct BonusStore {
    slice: StoreHandle<BonusSlice>,
}

impl BonusStore {
    /// Bind to the bonus slice in `cx`. A fresh context starts off; an existing flag is
    /// joined, not reset.
    #[must_use]
    pub fn new(cx: &Context) -> Self {
        Self {
            slice: StoreHandle::new(cx),
        }
    }

    /// Whether the flag is on.
    #[must_use]
    pub fn get(&self) -> bool {
        self.slice.get().enabled
    }

    /// Set the flag.
    pub fn set(&self, enabled: bool) {
        self.slice.set(BonusSlice { enabled });
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.get();
        self.set(next);
        next
    }

    /// Listen for flag changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<BonusSlice>
    where
        F: Fn(bool) + 'static,
    {
        self.slice.subscribe(move |slice| listener(slice.enabled))
    }
}

/// Session snapshot published by the gateway and read by the shell.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    slice: StoreHandle<SessionSlice>,
}

impl SessionStore {
    /// Bind to the session slice in `cx` without touching the published state.
    #[must_use]
    pub fn new(cx: &Context) -> Self {
        Self {
            slice: StoreHandle::new(cx),
        }
    }

    /// Current auth state.
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.slice.get().state.clone()
    }

    /// Publish a new auth state.
    pub fn publish(&self, state: AuthState) {
        self.slice.set(SessionSlice { state });
    }

    /// Mark a login/logout as in flight.
    pub fn begin_transition(&self) {
        self.slice.reduce(|slice| slice.state.is_loading = true);
    }

    /// Clear the in-flight marker after a transition that did not leave the page.
    pub fn end_transition(&self) {
        self.slice.reduce(|slice| slice.state.is_loading = false);
    }

    /// Listen for session changes.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<SessionSlice>
    where
        F: Fn(AuthState) + 'static,
    {
        self.slice.subscribe(move |slice| listener(slice.state.clone()))
    }
}
