mod anim;
mod app;
mod components;
mod event;
mod events;
mod icons;
mod settings;
mod theme;
mod tui;

use std::time::Duration;

use app::{App, InputMode, Screen};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Short poll timeout keeps entrance and press animations moving.
const TICK: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let mut app = App::new()?;
    info!("event screens ready");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

/// Traces go to a file so the alternate screen stays clean. Logging is
/// silently disabled when no writable location exists.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join("events-tui")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("events-tui.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer().with_writer(file).with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();

        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content + status bar
            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            match app.screen {
                Screen::Home => components::HomeView::render(frame, layout[0], app),
                Screen::Settings => components::SettingsView::render(frame, layout[0], app),
            }

            if app.show_help {
                render_help(frame, area);
            }

            render_status_bar(frame, layout[1], app, area.width);
        })?;

        if let Some(key) = event::next_key_event(TICK)? {
            // Clear status message on any key
            app.status_message = None;

            // Help overlay takes priority
            if app.show_help {
                if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::Search => handle_search_input(app, key.code),
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
            }
        }
    }

    Ok(())
}

fn handle_search_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.leave_search(),
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Tab, _) => app.toggle_screen(),
        (KeyCode::Char('1'), _) => app.select_screen(Screen::Home),
        (KeyCode::Char('2'), _) => app.select_screen(Screen::Settings),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => match app.screen {
            Screen::Home => handle_home_input(app, code),
            Screen::Settings => handle_settings_input(app, code),
        },
    }
}

fn handle_home_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Down | KeyCode::Char('j') => app.next_event(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_event(),
        KeyCode::Enter => app.view_selected_event(),
        KeyCode::Char('n') => app.run_action(0),
        KeyCode::Char('g') => app.run_action(1),
        KeyCode::Char('e') => app.run_action(2),
        KeyCode::Char('f') => app.favorite_selected_event(),
        KeyCode::Char('c') => app.camera_selected_event(),
        KeyCode::Char('a') => app.see_all_events(),
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.next_row(),
        KeyCode::Up | KeyCode::Char('k') => app.prev_row(),
        KeyCode::Enter => app.activate_selected_row(),
        _ => {}
    }
}

fn render_status_bar(frame: &mut ratatui::Frame, area: Rect, app: &App, w: u16) {
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let w = w as usize;
    let status = theme::current().status;

    let screen_str = match app.screen {
        Screen::Home => "[1]Home",
        Screen::Settings => "[2]Settings",
    };

    let focus_indicator = match app.input_mode {
        InputMode::Search => " [Search]",
        InputMode::Normal => "",
    };

    // Show status message if present, otherwise show context-aware hints
    let right_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        match app.screen {
            Screen::Home if w >= 95 => {
                " Tab:Screen /:Search jk:Cards Enter:View n:New g:Gallery e:Effects f:Fav ?:Help q:Quit"
                    .to_string()
            }
            Screen::Home if w >= 50 => " /:Search jk:Cards Enter:View q:Quit".to_string(),
            Screen::Settings if w >= 60 => {
                " Tab:Screen jk:Rows Enter:Open ?:Help q:Quit".to_string()
            }
            Screen::Settings if w >= 35 => " jk:Rows Enter:Open q:Quit".to_string(),
            _ => " ?:Help q:Quit".to_string(),
        }
    };

    let left = format!(" {}{} ", screen_str, focus_indicator);
    let padding_len = w.saturating_sub(left.len() + right_text.len());
    let padding = " ".repeat(padding_len);

    let line = Line::from(vec![
        Span::styled(left, status),
        Span::styled(padding, status),
        Span::styled(right_text, status),
    ]);

    let bar = Paragraph::new(line).style(status);
    frame.render_widget(bar, area);
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let t = theme::current();

    let popup_w = area.width.min(48).max(30);
    let popup_h = area.height.min(20).max(12);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(t.accent)
        .borders(Borders::ALL)
        .border_style(t.accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = t.accent;
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let lines = vec![
        Line::from(Span::styled("Screens", section_style)),
        Line::from(vec![
            Span::styled("  Tab / 1 / 2  ", key_style),
            Span::styled("Switch Home / Settings", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Home", section_style)),
        Line::from(vec![
            Span::styled("  /           ", key_style),
            Span::styled("Focus the search field", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  j/k         ", key_style),
            Span::styled("Select event card", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", key_style),
            Span::styled("View selected event", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  n/g/e       ", key_style),
            Span::styled("New event / Gallery / Effects", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  f/c         ", key_style),
            Span::styled("Favorite / camera on a card", desc_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("Settings", section_style)),
        Line::from(vec![
            Span::styled("  j/k         ", key_style),
            Span::styled("Select row", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter       ", key_style),
            Span::styled("Open row / sign out", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", t.dim),
            Span::styled("Esc       ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keys_edit_the_bound_string() {
        let mut app = App::new().unwrap();
        app.enter_search();
        for c in "expo".chars() {
            handle_search_input(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.search_text, "expo");

        handle_search_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.search_text, "exp");

        handle_search_input(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        // The text survives leaving the field.
        assert_eq!(app.search_text, "exp");
    }

    #[test]
    fn enter_also_leaves_the_search_field() {
        let mut app = App::new().unwrap();
        app.enter_search();
        handle_search_input(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
