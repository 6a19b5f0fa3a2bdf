use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::anim::{self, Easing, Transition};
use crate::app::{App, InputMode, PressTarget, ACTION_SHORTCUTS};
use crate::icons::IconKind;
use crate::theme::{self, Theme};

use super::action_card::ActionCard;
use super::event_card::{EventCard, CARD_HEIGHT};

// Entrance choreography, keeping the mobile design's timings.
const HEADER_IN: Transition = Transition::new(0, 500, Easing::EaseOut);
const SEARCH_IN: Transition = Transition::new(
    100,
    500,
    Easing::Spring {
        damping: 12.0,
        stiffness: 100.0,
    },
);

fn action_in(index: usize) -> Transition {
    Transition::new(200 + index as u64 * 100, 400, Easing::EaseOut)
}

fn card_in(index: usize) -> Transition {
    Transition::new(
        500 + index as u64 * 150,
        500,
        Easing::Spring {
            damping: 15.0,
            stiffness: 100.0,
        },
    )
}

pub struct HomeView;

impl HomeView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = theme::current();
        let elapsed = app.home_entrance.elapsed();

        let layout = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(3), // search bar
            Constraint::Length(4), // action shortcuts
            Constraint::Length(1), // section header
            Constraint::Min(0),    // event cards
        ])
        .split(area);

        render_header(frame, layout[0], theme, HEADER_IN.progress(elapsed));
        render_search(frame, layout[1], app, theme, SEARCH_IN.progress(elapsed));
        render_actions(frame, layout[2], app, elapsed);
        render_section_header(frame, layout[3], theme);
        render_cards(frame, layout[4], app, elapsed);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, progress: f32) {
    let area = anim::slide_from_above(area, progress, 2);
    if area.height == 0 {
        return;
    }

    let w = area.width as usize;
    let title = "Welcome back";
    let arrow = format!("[{}]", IconKind::ArrowRight.glyph());
    let gap = w.saturating_sub(title.chars().count() + arrow.chars().count());

    let lines = vec![
        Line::from(vec![
            Span::styled(title, anim::faded(theme.header, theme.bg, progress)),
            Span::raw(" ".repeat(gap)),
            Span::styled(arrow, anim::faded(theme.accent, theme.bg, progress)),
        ]),
        Line::from(Span::styled(
            "Manage your events in style",
            anim::faded(theme.dim, theme.bg, progress),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, progress: f32) {
    let area = anim::slide_down(area, progress, 2);
    if area.height < 2 {
        return;
    }

    let active = app.input_mode == InputMode::Search;
    let border = if active { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(anim::faded(border, theme.bg, progress));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prefix = format!("{} ", IconKind::Search.glyph());
    let line = if app.search_text.is_empty() && !active {
        Line::from(vec![
            Span::styled(prefix, anim::faded(theme.dim, theme.bg, progress)),
            Span::styled(
                "Search events...",
                anim::faded(theme.dim, theme.bg, progress),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(prefix, anim::faded(theme.dim, theme.bg, progress)),
            Span::styled(
                app.search_text.clone(),
                anim::faded(theme.header, theme.bg, progress),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if active {
        let x = inner.x + 2 + app.search_text.chars().count() as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_actions(frame: &mut Frame, area: Rect, app: &App, elapsed: std::time::Duration) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (i, shortcut) in ACTION_SHORTCUTS.iter().enumerate() {
        ActionCard::render(
            frame,
            columns[i],
            shortcut,
            action_in(i).progress(elapsed),
            app.press_intensity(PressTarget::Action(i)),
        );
    }
}

fn render_section_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let w = area.width as usize;
    let title = "Upcoming events";
    let see_all = format!("See all {}", IconKind::ArrowRight.glyph());
    let gap = w.saturating_sub(title.chars().count() + see_all.chars().count());

    let line = Line::from(vec![
        Span::styled(title, theme.header),
        Span::raw(" ".repeat(gap)),
        Span::styled(see_all, theme.accent),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App, elapsed: std::time::Duration) {
    let stride = CARD_HEIGHT + 1;
    if area.height == 0 || app.events.is_empty() {
        return;
    }
    let visible = ((area.height / stride).max(1)) as usize;
    let start = app.selected_event.saturating_sub(visible - 1);

    for (i, event) in app.events.iter().enumerate().skip(start).take(visible) {
        let y = area.y + ((i - start) as u16) * stride;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let slot = Rect::new(area.x, y, area.width, height);
        EventCard::render(
            frame,
            slot,
            event,
            card_in(i).progress(elapsed),
            i == app.selected_event,
            app.press_intensity(PressTarget::Card(i)),
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::anim::Timeline;
    use crate::app::App;

    use super::*;

    fn rendered(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| HomeView::render(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut content = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                content.push_str(buffer[(x, y)].symbol());
            }
            content.push('\n');
        }
        content
    }

    fn settled_app() -> App {
        let mut app = App::new().unwrap();
        // Overwrite the clock-derived list so the test is date-stable.
        app.events = crate::events::load_mock_events(
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
        )
        .unwrap();
        app.home_entrance = Timeline::settled();
        app
    }

    #[test]
    fn shows_one_card_per_mock_record_in_order() {
        let app = settled_app();
        let content = rendered(&app, 80, 40);
        let first = content.find("Summer Launch").expect("first card missing");
        let second = content.find("Tech Conference").expect("second card missing");
        assert!(first < second, "cards out of order");
    }

    #[test]
    fn shows_derived_days_left_badges() {
        let app = settled_app();
        let content = rendered(&app, 80, 40);
        assert!(content.contains("2 days"));
        assert!(content.contains("Tech"));
    }

    #[test]
    fn shows_typed_search_text() {
        let mut app = settled_app();
        app.enter_search();
        for c in "party".chars() {
            app.search_push(c);
        }
        let content = rendered(&app, 80, 40);
        assert!(content.contains("party"));
        // Typing filters nothing.
        assert!(content.contains("Summer Launch"));
        assert!(content.contains("Tech Conference"));
    }

    #[test]
    fn survives_tiny_areas() {
        let app = settled_app();
        // Just exercising the clipping paths.
        let _ = rendered(&app, 20, 8);
        let _ = rendered(&app, 5, 3);
    }
}
