//! SVG glyphs for [`IconKind`] tags.

use crate::core::icons::IconKind;
use yew::prelude::*;

/// Props for [`Icon`].
#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    /// Glyph to draw.
    pub kind: IconKind,
    /// Extra classes for the `<svg>` element.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; without one the icon is hidden from assistive tech.
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            data-icon={props.kind.as_str()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {glyph(props.kind)}
        </svg>
    }
}

fn glyph(kind: IconKind) -> Html {
    match kind {
        IconKind::Clipboard => html! { <>
            <rect x="8" y="2" width="8" height="4" rx="1" ry="1" />
            <path d="M8 4H6a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-2M16 4h2a2 2 0 0 1 2 2v4m1 4H11m4-4l-4 4l4 4" />
        </> },
        IconKind::Archive => html! { <>
            <rect x="2" y="3" width="20" height="5" rx="1" />
            <path d="M4 8v11a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8m-10 4h4" />
        </> },
        IconKind::Chevron => html! { <path d="m18 15l-6-6l-6 6" /> },
        IconKind::User => html! { <>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </> },
        IconKind::ArrowRight => html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="m12 16l4-4l-4-4m-4 4h8" />
        </> },
        IconKind::Logout => html! {
            <path d="m16 17l5-5l-5-5m5 5H9m0 9H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" />
        },
        IconKind::Moon => html! {
            <path d="M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" />
        },
        IconKind::Sun => html! { <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </> },
        IconKind::QuestionMark => html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3m.08 4h.01" />
        </> },
    }
}
