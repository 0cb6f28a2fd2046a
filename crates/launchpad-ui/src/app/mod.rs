//! App root: builds the shared stores once and mounts the layout.

use crate::components::layout::Layout;
use crate::core::auth::AuthHandle;
use crate::core::config::ShellConfig;
use crate::core::menu::MenuEntry;
use crate::core::store::{BonusStore, SessionStore, ThemeStore};
use crate::core::theme::ThemeMode;
use auth::RedirectAuthGateway;
use preferences::{LocalStoragePreferences, load_config, origin, system_prefers_dark};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::Context;

mod auth;
mod preferences;

/// Everything the shell shares, created once per app.
struct Shell {
    config: Rc<ShellConfig>,
    theme: ThemeStore,
    bonus: BonusStore,
    session: SessionStore,
    auth: AuthHandle,
    entries: Option<Rc<[MenuEntry]>>,
    return_to: AttrValue,
}

impl Shell {
    fn boot() -> Self {
        let config = load_config();
        let cx = Context::new();
        let prefs = Rc::new(LocalStoragePreferences::new(
            config.theme_storage_key.clone(),
        ));
        let theme = ThemeStore::open(
            &cx,
            prefs,
            config.default_dark_mode || system_prefers_dark(),
        );
        let bonus = BonusStore::new(&cx);
        let session = SessionStore::new(&cx);
        session.publish(config.session.clone().into_state());
        let auth = AuthHandle::new(RedirectAuthGateway::new(
            config.auth.clone(),
            session.clone(),
        ));
        let entries = config.menu_entries().map(Rc::from);
        Self {
            config: Rc::new(config),
            theme,
            bonus,
            session,
            auth,
            entries,
            return_to: AttrValue::from(origin()),
        }
    }
}

#[function_component(LaunchpadApp)]
pub(crate) fn launchpad_app() -> Html {
    let shell = use_memo((), |_| Shell::boot());

    use_effect_with(shell.theme.clone(), |theme| {
        let subscription = theme.subscribe(apply_theme);
        move || drop(subscription)
    });

    html! {
        <Layout
            config={shell.config.clone()}
            theme={shell.theme.clone()}
            bonus={shell.bonus.clone()}
            session={shell.session.clone()}
            auth={shell.auth.clone()}
            return_to={shell.return_to.clone()}
            entries={shell.entries.clone()}
        >
            <section class="App-content">
                <h1 class="text-3xl font-semibold">{shell.config.brand_name.clone()}</h1>
                <p class="opacity-75">{shell.config.brand_tagline.clone()}</p>
            </section>
        </Layout>
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(root) = gloo::utils::document().document_element() {
        let _ = root.set_attribute("data-theme", mode.as_str());
        let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
    }
}

/// Mount the shell into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LaunchpadApp>::with_root(root).render();
    } else {
        yew::Renderer::<LaunchpadApp>::new().render();
    }
}
