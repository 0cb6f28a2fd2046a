//! Single actionable row inside the launcher panel.
//!
//! # Design
//! - Stateless: output depends only on props.
//! - A disabled row wires a no-op into the button, so the real handler is unreachable.

use crate::components::icons::Icon;
use crate::core::icons::IconKind;
use crate::core::ui::{RowVisual, activation_handler, row_class};
use yew::prelude::*;

/// Props for [`MenuItemButton`].
#[derive(Properties, PartialEq)]
pub(crate) struct MenuItemButtonProps {
    /// Visible row label.
    pub label: AttrValue,
    /// Leading glyph.
    pub icon: IconKind,
    /// Fired on click unless the row is disabled.
    pub on_activate: Callback<()>,
    /// Renders the muted style and swallows all input.
    #[prop_or_default]
    pub disabled: bool,
    /// Focus state owned by the surrounding menu.
    #[prop_or_default]
    pub active: bool,
    /// Fired when the pointer enters or browser focus lands on the row.
    #[prop_or_default]
    pub on_focus: Callback<()>,
    /// Handle the menu uses to move browser focus onto this row.
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(MenuItemButton)]
pub(crate) fn menu_item_button(props: &MenuItemButtonProps) -> Html {
    let visual = RowVisual::resolve(props.active, props.disabled);
    let onclick = activation_handler(
        props.disabled,
        &props.on_activate.reform(|_: MouseEvent| ()),
    );
    let onmouseenter = activation_handler(
        props.disabled,
        &props.on_focus.reform(|_: MouseEvent| ()),
    );
    let onfocus = activation_handler(
        props.disabled,
        &props.on_focus.reform(|_: FocusEvent| ()),
    );

    html! {
        <button
            ref={props.node_ref.clone()}
            type="button"
            role="menuitem"
            tabindex={if props.active { "0" } else { "-1" }}
            class={row_class(visual)}
            disabled={props.disabled}
            aria-disabled={props.disabled.to_string()}
            data-active={props.active.to_string()}
            {onclick}
            {onmouseenter}
            {onfocus}
        >
            <Icon
                kind={props.icon}
                class={classes!("w-5", "h-5", "mr-2", "group-hover:text-white", "group-hover:disabled:text-gray-400")}
            />
            {props.label.clone()}
        </button>
    }
}
