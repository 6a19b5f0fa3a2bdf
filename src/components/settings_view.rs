use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, PressTarget};
use crate::icons::IconKind;
use crate::settings::SettingsOption;
use crate::theme::{self, Theme};

const ROW_HEIGHT: u16 = 2;

pub struct SettingsView;

impl SettingsView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = theme::current();
        let group_height = app.settings.len() as u16 * ROW_HEIGHT + 2;

        let layout = Layout::vertical([
            Constraint::Length(2),            // header
            Constraint::Length(1),            // gap
            Constraint::Length(group_height), // settings group
            Constraint::Length(1),            // gap
            Constraint::Length(3),            // logout
            Constraint::Min(0),
        ])
        .split(area);

        render_header(frame, layout[0], theme);
        render_group(frame, layout[2], app, theme);
        render_logout(frame, layout[4], app, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled(IconKind::Gear.glyph(), theme.accent),
            Span::raw(" "),
            Span::styled("Settings", theme.header),
        ]),
        Line::from(Span::styled("Personalize your experience", theme.dim)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_group(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, option) in app.settings.iter().enumerate() {
        let y = inner.y + i as u16 * ROW_HEIGHT;
        if y >= inner.bottom() {
            break;
        }
        let height = ROW_HEIGHT.min(inner.bottom() - y);
        let row = Rect::new(inner.x, y, inner.width, height);
        SettingsRow::render(
            frame,
            row,
            option,
            i == app.selected_row,
            app.press_intensity(PressTarget::Row(i)),
        );
    }
}

pub struct SettingsRow;

impl SettingsRow {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        option: &SettingsOption,
        selected: bool,
        press: f32,
    ) {
        let theme = theme::current();
        let w = area.width as usize;

        let icon = format!(" {} ", option.icon.glyph());
        let title_style = if selected { theme.selected } else { theme.header };
        let chevron = IconKind::ChevronRight.glyph();
        let left_width = icon.chars().count() + 1 + option.title.chars().count();
        let gap = w.saturating_sub(left_width + chevron.chars().count() + 1);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(icon, Style::default().fg(Color::White).bg(option.accent)),
                Span::raw(" "),
                Span::styled(option.title, title_style),
                Span::raw(" ".repeat(gap)),
                Span::styled(chevron, theme.dim),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled(option.subtitle, theme.dim),
            ]),
        ];

        if let Some(bg) = super::press_bg(theme, press) {
            lines = lines
                .into_iter()
                .map(|line| line.style(Style::default().bg(bg)))
                .collect();
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_logout(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let selected = app.selected_row == app.settings.len();
    let border = if selected { theme.danger } else { theme.border };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border);
    if let Some(bg) = super::press_bg(theme, app.press_intensity(PressTarget::Logout)) {
        block = block.style(Style::default().bg(bg));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(IconKind::LogOut.glyph(), theme.danger),
        Span::raw(" "),
        Span::styled("Sign out", theme.danger),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::{App, Screen};

    use super::*;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| SettingsView::render(frame, frame.area(), app))
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

    #[test]
    fn shows_all_rows_and_logout() {
        let mut app = App::new().unwrap();
        app.select_screen(Screen::Settings);
        let content = rendered(&app);
        for title in ["Profile", "Notifications", "Privacy", "Help", "About"] {
            assert!(content.contains(title), "missing row {title}");
        }
        assert!(content.contains("Sign out"));
        assert!(content.contains("Personalize your experience"));
    }
}
