//! Hooks that re-render a component when an injected store changes.

use crate::core::auth::AuthState;
use crate::core::store::{BonusStore, SessionStore, ThemeStore};
use crate::core::theme::ThemeMode;
use yew::prelude::*;

#[hook]
pub(crate) fn use_theme_mode(store: &ThemeStore) -> ThemeMode {
    let mode = use_state_eq(|| store.mode());
    {
        let mode = mode.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.subscribe(move |next| mode.set(next));
            move || drop(subscription)
        });
    }
    *mode
}

#[hook]
pub(crate) fn use_bonus(store: &BonusStore) -> bool {
    let enabled = use_state_eq(|| store.get());
    {
        let enabled = enabled.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.subscribe(move |next| enabled.set(next));
            move || drop(subscription)
        });
    }
    *enabled
}

#[hook]
pub(crate) fn use_session(store: &SessionStore) -> AuthState {
    let state = use_state_eq(|| store.get());
    {
        let state = state.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.subscribe(move |next| state.set(next));
            move || drop(subscription)
        });
    }
    (*state).clone()
}
