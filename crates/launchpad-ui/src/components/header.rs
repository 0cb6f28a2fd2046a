//! Page header: brand block, standalone theme button and the launcher menu.

use crate::components::dropdown_menu::DropdownMenu;
use crate::components::hooks::use_theme_mode;
use crate::components::icons::Icon;
use crate::core::auth::AuthHandle;
use crate::core::config::ShellConfig;
use crate::core::menu::MenuEntry;
use crate::core::store::{BonusStore, SessionStore, ThemeStore};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

/// Props for [`ThemeButton`].
#[derive(Properties, PartialEq)]
pub(crate) struct ThemeButtonProps {
    /// Dark-mode flag shared with the menu's theme row.
    pub theme: ThemeStore,
}

/// Header theme toggle. Writes the same store the in-menu theme row writes.
#[function_component(ThemeButton)]
pub(crate) fn theme_button(props: &ThemeButtonProps) -> Html {
    let mode = use_theme_mode(&props.theme);
    let onclick = {
        let theme = props.theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = theme.toggle() {
                console::error!("theme preference not saved", err.to_string());
            }
        })
    };

    html! {
        <button
            type="button"
            class="flex-1 ui !bg-transparent"
            aria-label="Toggle theme"
            {onclick}
        >
            <Icon kind={mode.icon()} class={classes!("w-5", "h-5", "text-white")} />
        </button>
    }
}

/// Props for [`AppHeader`].
#[derive(Properties, PartialEq)]
pub(crate) struct AppHeaderProps {
    /// Extra classes for the `<header>` element.
    #[prop_or_default]
    pub class: Classes,
    /// Brand and logo settings.
    pub config: Rc<ShellConfig>,
    /// Dark-mode flag; picks the logo variant.
    pub theme: ThemeStore,
    /// Bonus flag handed to the menu.
    pub bonus: BonusStore,
    /// Session snapshot handed to the menu.
    pub session: SessionStore,
    /// Gateway handed to the menu.
    pub auth: AuthHandle,
    /// Return address for logout.
    pub return_to: AttrValue,
    /// Launcher entries; `None` uses the built-in list.
    #[prop_or_default]
    pub entries: Option<Rc<[MenuEntry]>>,
}

#[function_component(AppHeader)]
pub(crate) fn app_header(props: &AppHeaderProps) -> Html {
    let mode = use_theme_mode(&props.theme);
    let config = &props.config;
    let logo_src = config.logo.url(mode.logo()).to_string();

    html! {
        <header class={props.class.clone()}>
            <div class="container flex">
                <a
                    href={config.brand_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex-1 pb-1.5"
                >
                    <div class="flex items-center gap-2 hover:-translate-y-1 transition-all duration-250">
                        <div>
                            <img
                                src={logo_src}
                                alt={config.brand_name.clone()}
                                class="h-8 w-auto translate-y-1 opacity-90"
                            />
                        </div>
                        <div class="flex flex-col items-left text-left justify-center -space-y-2 text-black/75 dark:text-white/90 dark:hover:text-white">
                            <div class="text-2xl font-normal">{config.brand_name.clone()}</div>
                            <div class="font-semibold text-xs tracking-tighter flex-nowrap whitespace-nowrap">
                                {config.brand_tagline.clone()}
                            </div>
                        </div>
                    </div>
                </a>
                <nav class="items-center flex gap-2">
                    <ThemeButton theme={props.theme.clone()} />
                    <DropdownMenu
                        entries={props.entries.clone()}
                        theme={props.theme.clone()}
                        bonus={props.bonus.clone()}
                        session={props.session.clone()}
                        auth={props.auth.clone()}
                        return_to={props.return_to.clone()}
                    />
                </nav>
            </div>
        </header>
    }
}
