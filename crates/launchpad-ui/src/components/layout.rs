//! Full-page wrapper: content slot plus the header.
//!
//! # Design
//! - The bonus flag only adds a class to the container; children always render.

use crate::components::header::AppHeader;
use crate::components::hooks::use_bonus;
use crate::core::auth::AuthHandle;
use crate::core::config::ShellConfig;
use crate::core::menu::MenuEntry;
use crate::core::store::{BonusStore, SessionStore, ThemeStore};
use crate::core::ui::container_class;
use std::rc::Rc;
use yew::prelude::*;

/// Props for [`Layout`].
#[derive(Properties, PartialEq)]
pub(crate) struct LayoutProps {
    /// Page content rendered inside the container.
    #[prop_or_default]
    pub children: Children,
    /// Shell configuration passed to the header.
    pub config: Rc<ShellConfig>,
    /// Dark-mode flag.
    pub theme: ThemeStore,
    /// Bonus flag; adds the `electric-dream` class when on.
    pub bonus: BonusStore,
    /// Session snapshot.
    pub session: SessionStore,
    /// Auth gateway.
    pub auth: AuthHandle,
    /// Return address for logout.
    pub return_to: AttrValue,
    /// Launcher entries; `None` uses the built-in list.
    #[prop_or_default]
    pub entries: Option<Rc<[MenuEntry]>>,
}

#[function_component(Layout)]
pub(crate) fn layout(props: &LayoutProps) -> Html {
    let bonus = use_bonus(&props.bonus);

    html! {
        <div class="App-backdrop">
            <main class={container_class(bonus)}>
                {for props.children.iter()}
            </main>
            <AppHeader
                class={classes!("App-header")}
                config={props.config.clone()}
                theme={props.theme.clone()}
                bonus={props.bonus.clone()}
                session={props.session.clone()}
                auth={props.auth.clone()}
                return_to={props.return_to.clone()}
                entries={props.entries.clone()}
            />
        </div>
    }
}
