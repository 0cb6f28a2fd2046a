//! Pure presentation helpers extracted from components for non-wasm testing.

use yew::Callback;

/// Visual state of a menu row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowVisual {
    /// Neutral style.
    Inactive,
    /// Pointer or keyboard focus is on the row.
    Active,
    /// Muted, non-interactive style.
    Disabled,
}

impl RowVisual {
    /// Resolve the visual state; disabled wins over focus.
    #[must_use]
    pub const fn resolve(active: bool, disabled: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

const ROW_BASE: &str = "group flex rounded-md items-center w-full px-2 py-2 text-sm";

/// Class list for a menu row. Identical inputs give identical output.
#[must_use]
pub fn row_class(visual: RowVisual) -> String {
    let tone = match visual {
        RowVisual::Active => "bg-brand-500 text-white",
        RowVisual::Inactive => "text-gray-900",
        RowVisual::Disabled => "text-gray-400 cursor-not-allowed",
    };
    format!("{tone} {ROW_BASE}")
}

/// The handler actually wired to a row's input element. A disabled row gets a no-op,
/// never the real handler behind a runtime check.
#[must_use]
pub fn activation_handler<IN: 'static>(disabled: bool, handler: &Callback<IN>) -> Callback<IN> {
    if disabled {
        Callback::noop()
    } else {
        handler.clone()
    }
}

const PANEL_BASE: &str = "App-menu-items absolute right-0 bottom-10 origin-bottom-right transition transform";

/// Class list for the dropdown panel: enter state while open, leave state while closing.
#[must_use]
pub fn panel_class(open: bool) -> String {
    let phase = if open {
        "ease-out duration-100 opacity-100 scale-100"
    } else {
        "ease-in duration-75 opacity-0 scale-95"
    };
    format!("{PANEL_BASE} {phase}")
}

/// Class list for the page container; the bonus variant only adds a class.
#[must_use]
pub fn container_class(bonus: bool) -> String {
    if bonus {
        "App-container electric-dream".to_string()
    } else {
        "App-container".to_string()
    }
}
