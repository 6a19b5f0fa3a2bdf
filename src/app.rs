use chrono::{Local, NaiveDate};
use color_eyre::Result;
use tracing::info;

use crate::anim::{Press, Timeline};
use crate::events::{load_mock_events, Event};
use crate::icons::IconKind;
use crate::settings::{self, SettingsOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Which element is currently showing press feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    Action(usize),
    Card(usize),
    Row(usize),
    Logout,
}

pub struct ActionShortcut {
    pub title: &'static str,
    pub icon: IconKind,
}

pub const ACTION_SHORTCUTS: [ActionShortcut; 3] = [
    ActionShortcut {
        title: "New event",
        icon: IconKind::Plus,
    },
    ActionShortcut {
        title: "Event gallery",
        icon: IconKind::Calendar,
    },
    ActionShortcut {
        title: "Video effects",
        icon: IconKind::Star,
    },
];

pub struct App {
    pub running: bool,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub status_message: Option<String>,
    // Home screen state, owned here and dropped with the app.
    pub search_text: String,
    pub events: Vec<Event>,
    pub selected_event: usize,
    pub home_entrance: Timeline,
    // Settings screen state.
    pub settings: Vec<SettingsOption>,
    pub selected_row: usize,
    press: Option<(PressTarget, Press)>,
}

impl App {
    pub fn new() -> Result<Self> {
        Self::with_today(Local::now().date_naive())
    }

    fn with_today(today: NaiveDate) -> Result<Self> {
        let events = load_mock_events(today)?;
        Ok(Self {
            running: true,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            show_help: false,
            status_message: None,
            search_text: String::new(),
            events,
            selected_event: 0,
            home_entrance: Timeline::start(),
            settings: settings::options(),
            selected_row: 0,
            press: None,
        })
    }

    /// Advance per-frame state: drop finished press feedback.
    pub fn tick(&mut self) {
        if self.press.is_some_and(|(_, press)| press.is_finished()) {
            self.press = None;
        }
    }

    pub fn select_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.input_mode = InputMode::Normal;
        self.press = None;
        if screen == Screen::Home {
            // Re-entering restarts the entrance choreography.
            self.home_entrance.restart();
        }
    }

    pub fn toggle_screen(&mut self) {
        match self.screen {
            Screen::Home => self.select_screen(Screen::Settings),
            Screen::Settings => self.select_screen(Screen::Home),
        }
    }

    // ── Search field ──

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn leave_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_push(&mut self, c: char) {
        self.search_text.push(c);
    }

    pub fn search_backspace(&mut self) {
        self.search_text.pop();
    }

    // ── Home screen ──

    pub fn next_event(&mut self) {
        if !self.events.is_empty() {
            self.selected_event = (self.selected_event + 1).min(self.events.len() - 1);
        }
    }

    pub fn prev_event(&mut self) {
        self.selected_event = self.selected_event.saturating_sub(1);
    }

    pub fn view_selected_event(&mut self) {
        if let Some(event) = self.events.get(self.selected_event) {
            info!(event = %event.title, "view event");
            self.status_message = Some(format!("Viewing {}", event.title));
            self.press(PressTarget::Card(self.selected_event));
        }
    }

    pub fn favorite_selected_event(&mut self) {
        if let Some(event) = self.events.get(self.selected_event) {
            info!(event = %event.title, "favorite event");
            self.status_message = Some(format!("Favorited {}", event.title));
            self.press(PressTarget::Card(self.selected_event));
        }
    }

    pub fn camera_selected_event(&mut self) {
        if let Some(event) = self.events.get(self.selected_event) {
            info!(event = %event.title, "open camera");
            self.press(PressTarget::Card(self.selected_event));
        }
    }

    pub fn run_action(&mut self, index: usize) {
        if let Some(shortcut) = ACTION_SHORTCUTS.get(index) {
            info!(action = shortcut.title, "action shortcut");
            self.status_message = Some(format!("{}: logged", shortcut.title));
            self.press(PressTarget::Action(index));
        }
    }

    pub fn see_all_events(&mut self) {
        info!("see all events");
        self.status_message = Some("See all events: logged".to_string());
    }

    // ── Settings screen ──

    /// Rows on the settings screen, the logout affordance included.
    pub fn settings_rows(&self) -> usize {
        self.settings.len() + 1
    }

    pub fn next_row(&mut self) {
        self.selected_row = (self.selected_row + 1).min(self.settings_rows() - 1);
    }

    pub fn prev_row(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn activate_selected_row(&mut self) {
        if self.selected_row == self.settings.len() {
            self.logout();
            return;
        }
        if let Some(option) = self.settings.get(self.selected_row) {
            info!(row = option.title, action = ?option.action, "settings row");
            self.status_message = Some(format!("{}: logged", option.title));
            self.press(PressTarget::Row(self.selected_row));
        }
    }

    fn logout(&mut self) {
        info!("logout");
        self.press(PressTarget::Logout);
        self.running = false;
    }

    // ── Press feedback ──

    fn press(&mut self, target: PressTarget) {
        self.press = Some((target, Press::new()));
    }

    pub fn press_intensity(&self, target: PressTarget) -> f32 {
        match self.press {
            Some((pressed, press)) if pressed == target => press.intensity(),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_today(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()).unwrap()
    }

    #[test]
    fn loads_decorated_mock_events() {
        let app = app();
        assert_eq!(app.events.len(), 2);
        assert_eq!(app.events[0].days_left, 2);
    }

    #[test]
    fn search_editing_only_touches_the_bound_string() {
        let mut app = app();
        app.enter_search();
        for c in "tech".chars() {
            app.search_push(c);
        }
        assert_eq!(app.search_text, "tech");
        app.search_backspace();
        assert_eq!(app.search_text, "tec");
        // No filtering: the rendered list is untouched.
        assert_eq!(app.events.len(), 2);
        app.search_backspace();
        app.search_backspace();
        app.search_backspace();
        app.search_backspace();
        assert_eq!(app.search_text, "");
    }

    #[test]
    fn returning_home_restarts_the_entrance() {
        let mut app = app();
        app.home_entrance = Timeline::settled();
        app.select_screen(Screen::Settings);
        app.select_screen(Screen::Home);
        assert!(app.home_entrance.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn screen_switch_leaves_search_mode() {
        let mut app = app();
        app.enter_search();
        app.select_screen(Screen::Settings);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.screen, Screen::Settings);
        app.toggle_screen();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn event_selection_stays_in_bounds() {
        let mut app = app();
        app.prev_event();
        assert_eq!(app.selected_event, 0);
        app.next_event();
        app.next_event();
        app.next_event();
        assert_eq!(app.selected_event, 1);
    }

    #[test]
    fn row_selection_includes_logout() {
        let mut app = app();
        for _ in 0..10 {
            app.next_row();
        }
        assert_eq!(app.selected_row, app.settings.len());
    }

    #[test]
    fn logout_stops_the_app() {
        let mut app = app();
        app.select_screen(Screen::Settings);
        for _ in 0..10 {
            app.next_row();
        }
        app.activate_selected_row();
        assert!(!app.running);
    }

    #[test]
    fn activation_starts_press_feedback() {
        let mut app = app();
        app.view_selected_event();
        assert!(app.press_intensity(PressTarget::Card(0)) > 0.0);
        assert_eq!(app.press_intensity(PressTarget::Card(1)), 0.0);
    }

    #[test]
    fn actions_set_a_status_message() {
        let mut app = app();
        app.run_action(0);
        assert!(app.status_message.as_deref().unwrap().contains("New event"));
        app.run_action(9);
        // Out-of-range shortcut indexes are ignored.
        assert!(app.running);
    }
}
