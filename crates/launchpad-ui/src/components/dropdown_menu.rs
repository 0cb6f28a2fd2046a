//! Launcher dropdown: trigger button plus a floating panel of rows.
//!
//! # Design
//! - Row derivation, focus movement and activation live in `core::menu`; this component
//!   only owns the `MenuState` and wires DOM events to it.
//! - Session commands are spawned and forgotten; a failure is logged, never shown.

use crate::components::hooks::{use_session, use_theme_mode};
use crate::components::icons::Icon;
use crate::components::menu_item::MenuItemButton;
use crate::core::auth::{AuthCommand, AuthHandle};
use crate::core::menu::{
    KeyOutcome, LEAVE_MILLIS, MenuEffects, MenuEntry, MenuKey, MenuRow, MenuState, RowGroup,
    build_rows, default_entries, trigger,
};
use crate::core::store::{BonusStore, SessionStore, ThemeStore};
use crate::core::ui::panel_class;
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Props for [`DropdownMenu`].
#[derive(Properties, PartialEq)]
pub(crate) struct DropdownMenuProps {
    /// Launcher entries; `None` uses the built-in list.
    #[prop_or_default]
    pub entries: Option<Rc<[MenuEntry]>>,
    /// Dark-mode flag toggled by the theme row.
    pub theme: ThemeStore,
    /// Bonus flag toggled by the Easter Eggs row.
    pub bonus: BonusStore,
    /// Session snapshot driving the trigger and session rows.
    pub session: SessionStore,
    /// Gateway receiving login/logout commands.
    pub auth: AuthHandle,
    /// URL the identity provider returns to after logout.
    pub return_to: AttrValue,
}

#[function_component(DropdownMenu)]
pub(crate) fn dropdown_menu(props: &DropdownMenuProps) -> Html {
    let entries = use_memo(props.entries.clone(), |entries| {
        entries
            .as_deref()
            .map_or_else(default_entries, <[MenuEntry]>::to_vec)
    });
    let mode = use_theme_mode(&props.theme);
    let auth = use_session(&props.session);
    let menu = use_state_eq(MenuState::default);
    let root = use_node_ref();

    let rows: Rc<Vec<MenuRow>> = Rc::new(build_rows(&entries, &auth, mode));
    let row_refs = use_memo(rows.len(), |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let trigger = trigger(&auth);
    let open = menu.is_open();
    let closing = menu.is_closing();

    let on_activate = {
        let menu = menu.clone();
        let rows = rows.clone();
        let theme = props.theme.clone();
        let bonus = props.bonus.clone();
        let session = props.session.clone();
        let handle = props.auth.clone();
        let return_to = props.return_to.clone();
        Callback::from(move |index: usize| {
            let auth = session.get();
            let mut next = (*menu).clone();
            let outcome = next.activate(
                index,
                &rows,
                MenuEffects {
                    theme: &theme,
                    bonus: &bonus,
                    auth: &auth,
                    return_to: &return_to,
                },
            );
            menu.set(next);
            match outcome {
                Ok(Some(command)) => fire(&handle, command),
                Ok(None) => {}
                Err(err) => console::error!("theme preference not saved", err.to_string()),
            }
        })
    };

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*menu).clone();
            next.toggle();
            menu.set(next);
        })
    };

    let on_keydown = {
        let menu = menu.clone();
        let rows = rows.clone();
        let on_activate = on_activate.clone();
        Callback::from(move |event: KeyboardEvent| {
            let Some(key) = MenuKey::from_key(&event.key()) else {
                return;
            };
            let mut next = (*menu).clone();
            match next.handle_key(key, &rows) {
                KeyOutcome::Ignored => {}
                KeyOutcome::Handled => {
                    event.prevent_default();
                    menu.set(next);
                }
                KeyOutcome::Activate(index) => {
                    event.prevent_default();
                    on_activate.emit(index);
                }
            }
        })
    };

    let on_keyup = Callback::from(|event: KeyboardEvent| {
        if MenuKey::clicks_on_release(&event.key()) {
            event.prevent_default();
        }
    });

    let on_leave = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*menu).clone();
            next.leave();
            menu.set(next);
        })
    };

    {
        let row_refs = row_refs.clone();
        use_effect_with(menu.active(), move |active| {
            if let Some(row) = active
                .and_then(|index| row_refs.get(index))
                .and_then(NodeRef::cast::<web_sys::HtmlElement>)
            {
                let _ = row.focus();
            }
        });
    }

    {
        let menu = menu.clone();
        use_effect_with(closing, move |closing| {
            let timeout = closing.then(|| {
                Timeout::new(LEAVE_MILLIS, move || {
                    let mut next = (*menu).clone();
                    next.settle();
                    menu.set(next);
                })
            });
            move || drop(timeout)
        });
    }

    {
        let menu = menu.clone();
        let root = root.clone();
        use_effect_with(open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                        .zip(root.cast::<web_sys::Node>())
                        .is_some_and(|(target, root)| root.contains(Some(&target)));
                    if !inside {
                        let mut next = (*menu).clone();
                        next.close();
                        menu.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let render_group = |group: RowGroup| -> Html {
        html! {
            <div class="px-1 py-1">
                {for rows.iter().enumerate().filter(|(_, row)| row.group == group).map(|(index, row)| {
                    let on_focus = {
                        let menu = menu.clone();
                        let rows = rows.clone();
                        Callback::from(move |()| {
                            let mut next = (*menu).clone();
                            next.focus(index, &rows);
                            menu.set(next);
                        })
                    };
                    let on_activate = on_activate.reform(move |()| index);
                    html! {
                        <MenuItemButton
                            key={index}
                            label={row.label.clone()}
                            icon={row.icon}
                            disabled={row.disabled}
                            active={menu.active() == Some(index)}
                            node_ref={row_refs.get(index).cloned().unwrap_or_default()}
                            {on_activate}
                            {on_focus}
                        />
                    }
                })}
            </div>
        }
    };

    html! {
        <nav
            ref={root}
            class="relative inline-flex text-left text-gray-900"
            onkeydown={on_keydown}
            onkeyup={on_keyup}
        >
            <button
                type="button"
                class="flex ui"
                aria-haspopup="menu"
                aria-expanded={open.to_string()}
                onclick={on_toggle}
            >
                <div class="flex-1 text-left flex-nowrap">{trigger.label}</div>
                <Icon
                    kind={trigger.icon}
                    class={classes!("w-5", "h-5", "ml-2", "mr-1", "text-violet-200", "hover:text-violet-100", "flex-0")}
                />
            </button>
            if menu.panel_visible() {
                <div
                    role="menu"
                    class={panel_class(open)}
                    aria-hidden={(!open).then_some("true")}
                    onmouseleave={on_leave}
                >
                    {render_group(RowGroup::Entries)}
                    {render_group(RowGroup::Session)}
                </div>
            }
        </nav>
    }
}

fn fire(handle: &AuthHandle, command: AuthCommand) {
    let request = handle.dispatch(command);
    yew::platform::spawn_local(async move {
        if let Err(err) = request.await {
            console::warn!("authentication request failed", err.to_string());
        }
    });
}
