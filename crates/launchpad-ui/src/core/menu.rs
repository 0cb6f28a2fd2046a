//! Launcher dropdown model: rows, open/closed state, keyboard focus and activation.
//!
//! # Design
//! - Rows are derived from entries plus auth/theme snapshots on every render; nothing
//!   here caches derived rows.
//! - The caller-supplied entry list is only read, never reordered or mutated.
//! - Activation applies store effects directly and hands session commands back to the
//!   caller, which fires them without awaiting the outcome.
//! - The selected label is kept for interface compatibility; nothing reads it yet.

use crate::core::auth::{AuthCommand, AuthState};
use crate::core::icons::IconKind;
use crate::core::preferences::PreferenceError;
use crate::core::store::{BonusStore, ThemeStore};
use crate::core::theme::ThemeMode;

/// Initial value of the selected label.
pub const LAUNCHER_LABEL: &str = "Launcher";
/// Label of the bonus toggle row.
pub const EASTER_EGGS_LABEL: &str = "Easter Eggs";
/// Label of the explicit logout row.
pub const LOGOUT_LABEL: &str = "Logout";

/// One caller-supplied launcher entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Display label.
    pub label: String,
    /// Leading icon.
    pub icon: IconKind,
}

impl MenuEntry {
    /// Build an entry.
    #[must_use]
    pub fn new(label: impl Into<String>, icon: IconKind) -> Self {
        Self {
            label: label.into(),
            icon,
        }
    }
}

/// Built-in entries used when the caller supplies none.
#[must_use]
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("Timers", IconKind::Clipboard),
        MenuEntry::new("Profile", IconKind::Archive),
        MenuEntry::new("Settings", IconKind::Archive),
    ]
}

/// Visual grouping of rows inside the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowGroup {
    /// Launcher entries and the bonus toggle.
    Entries,
    /// Theme and session rows.
    Session,
}

/// What activating a row does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Record the entry label as the current selection.
    Select(String),
    /// Flip the bonus flag.
    ToggleBonus,
    /// Flip dark mode.
    ToggleTheme,
    /// End the session.
    Logout,
    /// Log in, or log out when already signed in.
    LoginOrLogout,
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRow {
    /// Display label.
    pub label: String,
    /// Leading icon.
    pub icon: IconKind,
    /// Disabled rows never dispatch.
    pub disabled: bool,
    /// Panel group.
    pub group: RowGroup,
    /// Activation behavior.
    pub action: MenuAction,
}

impl MenuRow {
    fn new(label: impl Into<String>, icon: IconKind, group: RowGroup, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            icon,
            disabled: false,
            group,
            action,
        }
    }

    const fn disabled_when(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Derive the panel rows in render order.
#[must_use]
pub fn build_rows(entries: &[MenuEntry], auth: &AuthState, theme: ThemeMode) -> Vec<MenuRow> {
    let mut rows: Vec<MenuRow> = entries
        .iter()
        .map(|entry| {
            MenuRow::new(
                entry.label.clone(),
                entry.icon,
                RowGroup::Entries,
                MenuAction::Select(entry.label.clone()),
            )
        })
        .collect();
    rows.push(
        MenuRow::new(
            EASTER_EGGS_LABEL,
            IconKind::QuestionMark,
            RowGroup::Entries,
            MenuAction::ToggleBonus,
        )
        .disabled_when(!auth.is_authenticated),
    );
    rows.push(MenuRow::new(
        theme.menu_label(),
        theme.icon(),
        RowGroup::Session,
        MenuAction::ToggleTheme,
    ));
    if auth.is_authenticated {
        rows.push(MenuRow::new(
            LOGOUT_LABEL,
            IconKind::Logout,
            RowGroup::Session,
            MenuAction::Logout,
        ));
    }
    rows.push(MenuRow::new(
        auth.display_name(),
        IconKind::User,
        RowGroup::Session,
        MenuAction::LoginOrLogout,
    ));
    rows
}

/// Trigger button contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigger {
    /// Button label.
    pub label: String,
    /// Trailing icon.
    pub icon: IconKind,
}

/// Trigger label and icon for the current session.
#[must_use]
pub fn trigger(auth: &AuthState) -> Trigger {
    Trigger {
        label: auth.display_name().to_string(),
        icon: if auth.is_loading {
            IconKind::ArrowRight
        } else {
            IconKind::Chevron
        },
    }
}

/// Session command for the login/logout row; `None` while a transition is in flight.
#[must_use]
pub fn session_command(auth: &AuthState, return_to: &str) -> Option<AuthCommand> {
    if auth.is_loading {
        None
    } else if auth.is_authenticated {
        Some(AuthCommand::Logout {
            return_to: return_to.to_string(),
        })
    } else {
        Some(AuthCommand::Login)
    }
}

/// Shared state a row activation may touch.
#[derive(Clone, Copy, Debug)]
pub struct MenuEffects<'a> {
    /// Dark-mode store.
    pub theme: &'a ThemeStore,
    /// Bonus flag store.
    pub bonus: &'a BonusStore,
    /// Auth snapshot at activation time.
    pub auth: &'a AuthState,
    /// Origin URL to return to after logout.
    pub return_to: &'a str,
}

/// Keys the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    /// Move focus down.
    Down,
    /// Move focus up.
    Up,
    /// Focus the first enabled row.
    Home,
    /// Focus the last enabled row.
    End,
    /// Activate the focused row.
    Activate,
    /// Close the panel.
    Escape,
}

impl MenuKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "Enter" | " " => Some(Self::Activate),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Whether releasing `key` would click the focused button. Space clicks on release,
    /// after the press has already been handled, so the release must be cancelled too.
    #[must_use]
    pub fn clicks_on_release(key: &str) -> bool {
        key == " "
    }
}

/// Result of a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key did nothing.
    Ignored,
    /// State changed; nothing else to do.
    Handled,
    /// Caller should activate the row at this index.
    Activate(usize),
}

/// How long the panel keeps rendering after it closes, for the leave transition.
pub const LEAVE_MILLIS: u32 = 75;

/// Dropdown open/closed state with focus and the selected label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    closing: bool,
    active: Option<usize>,
    selected: String,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            open: false,
            closing: false,
            active: None,
            selected: LAUNCHER_LABEL.to_string(),
        }
    }
}

impl MenuState {
    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the panel is closed but still playing its leave transition.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        self.closing
    }

    /// Whether the panel should be in the DOM.
    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        self.open || self.closing
    }

    /// Row index holding pointer/keyboard focus.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Last selected entry label.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Trigger activation: open when closed, close when open.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open_at(None);
        }
    }

    /// Hide the panel and release focus. The panel enters its leave transition until
    /// [`MenuState::settle`] is called.
    pub fn close(&mut self) {
        self.closing = self.open || self.closing;
        self.open = false;
        self.active = None;
    }

    /// End the leave transition.
    pub fn settle(&mut self) {
        self.closing = false;
    }

    /// Pointer or browser focus moved onto a row. Disabled rows never take focus.
    pub fn focus(&mut self, index: usize, rows: &[MenuRow]) {
        if rows.get(index).is_some_and(|row| !row.disabled) {
            self.active = Some(index);
        }
    }

    /// Pointer left the panel.
    pub fn leave(&mut self) {
        self.active = None;
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: MenuKey, rows: &[MenuRow]) -> KeyOutcome {
        if !self.open {
            return match key {
                MenuKey::Down | MenuKey::Activate | MenuKey::Home => {
                    self.open_at(first_enabled(rows));
                    KeyOutcome::Handled
                }
                MenuKey::Up | MenuKey::End => {
                    self.open_at(last_enabled(rows));
                    KeyOutcome::Handled
                }
                MenuKey::Escape => KeyOutcome::Ignored,
            };
        }
        match key {
            MenuKey::Down => {
                self.active = step(rows, self.active, true);
                KeyOutcome::Handled
            }
            MenuKey::Up => {
                self.active = step(rows, self.active, false);
                KeyOutcome::Handled
            }
            MenuKey::Home => {
                self.active = first_enabled(rows);
                KeyOutcome::Handled
            }
            MenuKey::End => {
                self.active = last_enabled(rows);
                KeyOutcome::Handled
            }
            MenuKey::Activate => self
                .active
                .map_or(KeyOutcome::Ignored, KeyOutcome::Activate),
            MenuKey::Escape => {
                self.close();
                KeyOutcome::Handled
            }
        }
    }

    /// Activate the row at `index`. Enabled rows apply their effect and close the panel;
    /// disabled or missing rows change nothing. Session commands are returned for the
    /// caller to fire.
    ///
    /// # Errors
    ///
    /// Returns the preference error when a theme toggle fails to persist. The theme flag
    /// and the panel state have still been updated.
    pub fn activate(
        &mut self,
        index: usize,
        rows: &[MenuRow],
        effects: MenuEffects<'_>,
    ) -> Result<Option<AuthCommand>, PreferenceError> {
        let Some(row) = rows.get(index) else {
            return Ok(None);
        };
        if row.disabled {
            return Ok(None);
        }
        self.close();
        match &row.action {
            MenuAction::Select(label) => {
                self.selected.clone_from(label);
                Ok(None)
            }
            MenuAction::ToggleBonus => {
                effects.bonus.toggle();
                Ok(None)
            }
            MenuAction::ToggleTheme => effects.theme.toggle().map(|()| None),
            MenuAction::Logout => Ok((!effects.auth.is_loading).then(|| AuthCommand::Logout {
                return_to: effects.return_to.to_string(),
            })),
            MenuAction::LoginOrLogout => Ok(session_command(effects.auth, effects.return_to)),
        }
    }

    fn open_at(&mut self, active: Option<usize>) {
        self.open = true;
        self.closing = false;
        self.active = active;
    }
}

fn first_enabled(rows: &[MenuRow]) -> Option<usize> {
    rows.iter().position(|row| !row.disabled)
}

fn last_enabled(rows: &[MenuRow]) -> Option<usize> {
    rows.iter().rposition(|row| !row.disabled)
}

fn step(rows: &[MenuRow], from: Option<usize>, forward: bool) -> Option<usize> {
    let len = rows.len();
    if len == 0 {
        return None;
    }
    let Some(start) = from else {
        return if forward {
            first_enabled(rows)
        } else {
            last_enabled(rows)
        };
    };
    (1..=len)
        .map(|offset| {
            if forward {
                (start + offset) % len
            } else {
                (start + len - offset % len) % len
            }
        })
        .find(|&index| !rows[index].disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preferences::MemoryPreferences;
    use crate::core::ui::container_class;
    use std::rc::Rc;
    use yewdux::Context;

    const ORIGIN: &str = "https://lab.example";

    struct Harness {
        theme: ThemeStore,
        bonus: BonusStore,
    }

    impl Harness {
        fn new(dark_mode: bool) -> Self {
            let cx = Context::new();
            Self {
                theme: ThemeStore::open(
                    &cx,
                    Rc::new(MemoryPreferences::with_dark_mode(dark_mode)),
                    false,
                ),
                bonus: BonusStore::new(&cx),
            }
        }

        fn effects<'a>(&'a self, auth: &'a AuthState) -> MenuEffects<'a> {
            MenuEffects {
                theme: &self.theme,
                bonus: &self.bonus,
                auth,
                return_to: ORIGIN,
            }
        }

        fn rows(&self, entries: &[MenuEntry], auth: &AuthState) -> Vec<MenuRow> {
            build_rows(entries, auth, self.theme.mode())
        }
    }

    fn two_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("Timers", IconKind::Clipboard),
            MenuEntry::new("Profile", IconKind::Archive),
        ]
    }

    fn labels(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter().map(|row| row.label.as_str()).collect()
    }

    fn index_of(rows: &[MenuRow], action: &MenuAction) -> usize {
        rows.iter()
            .position(|row| &row.action == action)
            .unwrap_or_else(|| panic!("missing row for {action:?}"))
    }

    fn opened() -> MenuState {
        let mut state = MenuState::default();
        state.toggle();
        state
    }

    #[test]
    fn default_entries_match_launcher_list() {
        assert_eq!(
            labels(&build_rows(
                &default_entries(),
                &AuthState::default(),
                ThemeMode::Light
            ))[..3],
            ["Timers", "Profile", "Settings"]
        );
    }

    #[test]
    fn signed_out_light_scenario_renders_five_rows() {
        let harness = Harness::new(false);
        let rows = harness.rows(&two_entries(), &AuthState::default());
        assert_eq!(
            labels(&rows),
            ["Timers", "Profile", "Easter Eggs", "Light Theme", "Login"]
        );
        assert!(rows[2].disabled);
        assert!(!rows[4].disabled);
        assert_eq!(rows[3].icon, IconKind::Sun);
        assert_eq!(
            rows.iter().map(|row| row.group).collect::<Vec<_>>(),
            [
                RowGroup::Entries,
                RowGroup::Entries,
                RowGroup::Entries,
                RowGroup::Session,
                RowGroup::Session
            ]
        );
    }

    #[test]
    fn signed_in_dark_scenario_renders_six_rows() {
        let harness = Harness::new(true);
        harness.bonus.set(true);
        let rows = harness.rows(&two_entries(), &AuthState::signed_in("Ada"));
        assert_eq!(
            labels(&rows),
            [
                "Timers",
                "Profile",
                "Easter Eggs",
                "Dark Theme",
                "Logout",
                "Ada"
            ]
        );
        assert!(rows.iter().all(|row| !row.disabled));
        assert_eq!(rows[3].icon, IconKind::Moon);
        assert_eq!(rows[4].icon, IconKind::Logout);
        assert!(container_class(harness.bonus.get()).contains("electric-dream"));
    }

    #[test]
    fn entry_order_is_preserved_for_any_list() {
        let entries: Vec<MenuEntry> = ["Zeta", "Alpha", "Mid", "Alpha"]
            .into_iter()
            .map(|label| MenuEntry::new(label, IconKind::Archive))
            .collect();
        let snapshot = entries.clone();
        let rows = build_rows(&entries, &AuthState::default(), ThemeMode::Light);
        assert_eq!(rows.len(), entries.len() + 3);
        assert_eq!(labels(&rows[..4]), ["Zeta", "Alpha", "Mid", "Alpha"]);
        assert_eq!(rows[4].action, MenuAction::ToggleBonus);
        assert_eq!(rows[5].action, MenuAction::ToggleTheme);
        assert_eq!(rows[6].action, MenuAction::LoginOrLogout);
        assert_eq!(entries, snapshot);
    }

    #[test]
    fn empty_entry_list_keeps_fixed_rows() {
        let rows = build_rows(&[], &AuthState::default(), ThemeMode::Light);
        assert_eq!(labels(&rows), ["Easter Eggs", "Light Theme", "Login"]);
    }

    #[test]
    fn trigger_reflects_session() {
        assert_eq!(
            trigger(&AuthState::default()),
            Trigger {
                label: "Login".to_string(),
                icon: IconKind::Chevron
            }
        );
        let mut loading = AuthState::signed_in("Ada");
        loading.is_loading = true;
        assert_eq!(
            trigger(&loading),
            Trigger {
                label: "Ada".to_string(),
                icon: IconKind::ArrowRight
            }
        );
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut state = MenuState::default();
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn selecting_entry_sets_label_and_closes() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::default();
        let rows = harness.rows(&two_entries(), &auth);
        let mut state = opened();
        assert_eq!(state.selected(), LAUNCHER_LABEL);

        let command = state.activate(1, &rows, harness.effects(&auth))?;
        assert_eq!(command, None);
        assert_eq!(state.selected(), "Profile");
        assert!(!state.is_open());
        assert!(!harness.bonus.get());
        assert!(!harness.theme.dark_mode());
        Ok(())
    }

    #[test]
    fn easter_eggs_disabled_when_signed_out() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::default();
        let rows = harness.rows(&two_entries(), &auth);
        let index = index_of(&rows, &MenuAction::ToggleBonus);
        let mut state = opened();

        assert_eq!(state.activate(index, &rows, harness.effects(&auth))?, None);
        assert!(!harness.bonus.get());
        assert!(state.is_open());
        Ok(())
    }

    #[test]
    fn easter_eggs_double_toggle_when_signed_in() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::signed_in("Ada");
        let rows = harness.rows(&two_entries(), &auth);
        let index = index_of(&rows, &MenuAction::ToggleBonus);

        opened().activate(index, &rows, harness.effects(&auth))?;
        assert!(harness.bonus.get());
        opened().activate(index, &rows, harness.effects(&auth))?;
        assert!(!harness.bonus.get());
        Ok(())
    }

    #[test]
    fn theme_row_toggles_shared_flag() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::default();
        let rows = harness.rows(&two_entries(), &auth);
        let index = index_of(&rows, &MenuAction::ToggleTheme);

        opened().activate(index, &rows, harness.effects(&auth))?;
        assert!(harness.theme.dark_mode());

        let header_button = harness.theme.clone();
        header_button.toggle()?;
        assert!(!harness.theme.dark_mode());
        assert_eq!(
            harness.rows(&two_entries(), &auth)[index].label,
            "Light Theme"
        );
        Ok(())
    }

    #[test]
    fn login_row_dispatches_by_session() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);

        let signed_out = AuthState::default();
        let rows = harness.rows(&[], &signed_out);
        let index = index_of(&rows, &MenuAction::LoginOrLogout);
        assert_eq!(
            opened().activate(index, &rows, harness.effects(&signed_out))?,
            Some(AuthCommand::Login)
        );

        let signed_in = AuthState::signed_in("Ada");
        let rows = harness.rows(&[], &signed_in);
        let expected = Some(AuthCommand::Logout {
            return_to: ORIGIN.to_string(),
        });
        for action in [MenuAction::Logout, MenuAction::LoginOrLogout] {
            let index = index_of(&rows, &action);
            assert_eq!(
                opened().activate(index, &rows, harness.effects(&signed_in))?,
                expected
            );
        }
        Ok(())
    }

    #[test]
    fn session_rows_are_noops_while_loading() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        for mut auth in [AuthState::default(), AuthState::signed_in("Ada")] {
            auth.is_loading = true;
            let rows = harness.rows(&[], &auth);
            for (index, row) in rows.iter().enumerate() {
                if matches!(row.action, MenuAction::Logout | MenuAction::LoginOrLogout) {
                    assert_eq!(
                        opened().activate(index, &rows, harness.effects(&auth))?,
                        None
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn out_of_range_activation_is_ignored() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::default();
        let rows = harness.rows(&[], &auth);
        let mut state = opened();
        assert_eq!(state.activate(99, &rows, harness.effects(&auth))?, None);
        assert!(state.is_open());
        Ok(())
    }

    #[test]
    fn focus_skips_disabled_rows() {
        let rows = build_rows(&two_entries(), &AuthState::default(), ThemeMode::Light);
        let mut state = opened();
        state.focus(2, &rows);
        assert_eq!(state.active(), None);
        state.focus(1, &rows);
        assert_eq!(state.active(), Some(1));
        state.leave();
        assert_eq!(state.active(), None);
    }

    #[test]
    fn enter_activates_the_row_focus_moved_to() -> Result<(), PreferenceError> {
        let harness = Harness::new(false);
        let auth = AuthState::default();
        let rows = harness.rows(&two_entries(), &auth);
        let mut state = opened();

        state.focus(0, &rows);
        state.focus(1, &rows);
        let KeyOutcome::Activate(index) = state.handle_key(MenuKey::Activate, &rows) else {
            panic!("enter on a focused row should activate it");
        };
        assert_eq!(index, 1);

        state.activate(index, &rows, harness.effects(&auth))?;
        assert_eq!(state.selected(), "Profile");
        Ok(())
    }

    #[test]
    fn closing_keeps_panel_until_settled() {
        let mut state = opened();
        assert!(state.panel_visible());
        assert!(!state.is_closing());

        state.toggle();
        assert!(!state.is_open());
        assert!(state.is_closing());
        assert!(state.panel_visible());

        state.settle();
        assert!(!state.panel_visible());

        state.close();
        assert!(!state.is_closing());
    }

    #[test]
    fn reopening_cancels_leave_transition() {
        let rows = build_rows(&two_entries(), &AuthState::default(), ThemeMode::Light);
        let mut state = opened();
        state.close();
        assert!(state.is_closing());

        assert_eq!(state.handle_key(MenuKey::Down, &rows), KeyOutcome::Handled);
        assert!(state.is_open());
        assert!(!state.is_closing());
    }

    #[test]
    fn keyboard_navigation_wraps_and_skips_disabled() {
        let rows = build_rows(&two_entries(), &AuthState::default(), ThemeMode::Light);
        let mut state = MenuState::default();

        assert_eq!(state.handle_key(MenuKey::Down, &rows), KeyOutcome::Handled);
        assert!(state.is_open());
        assert_eq!(state.active(), Some(0));

        state.handle_key(MenuKey::Down, &rows);
        state.handle_key(MenuKey::Down, &rows);
        assert_eq!(state.active(), Some(3));

        state.handle_key(MenuKey::Up, &rows);
        assert_eq!(state.active(), Some(1));

        state.handle_key(MenuKey::End, &rows);
        assert_eq!(state.active(), Some(4));
        state.handle_key(MenuKey::Down, &rows);
        assert_eq!(state.active(), Some(0));
        state.handle_key(MenuKey::Up, &rows);
        assert_eq!(state.active(), Some(4));

        assert_eq!(
            state.handle_key(MenuKey::Activate, &rows),
            KeyOutcome::Activate(4)
        );
        assert_eq!(state.handle_key(MenuKey::Escape, &rows), KeyOutcome::Handled);
        assert!(!state.is_open());
        assert_eq!(state.active(), None);
        assert_eq!(
            state.handle_key(MenuKey::Escape, &rows),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn key_names_map_to_menu_keys() {
        assert_eq!(MenuKey::from_key("ArrowDown"), Some(MenuKey::Down));
        assert_eq!(MenuKey::from_key(" "), Some(MenuKey::Activate));
        assert_eq!(MenuKey::from_key("Tab"), None);
        assert!(MenuKey::clicks_on_release(" "));
        assert!(!MenuKey::clicks_on_release("Enter"));
    }
}
