use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::anim;
use crate::events::Event;
use crate::icons::IconKind;
use crate::theme;

pub const CARD_HEIGHT: u16 = 7;
const CARD_TRAVEL: u16 = 3;

pub struct EventCard;

impl EventCard {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        event: &Event,
        progress: f32,
        selected: bool,
        press: f32,
    ) {
        let theme = theme::current();
        let area = anim::slide_down(area, progress, CARD_TRAVEL);
        if area.height < 2 {
            return;
        }

        let border_style = if selected {
            theme.accent
        } else {
            theme.border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(anim::faded(border_style, theme.bg, progress));
        if let Some(bg) = super::press_bg(theme, press) {
            block = block.style(Style::default().bg(bg));
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let w = inner.width as usize;
        let badge_style = anim::faded(
            Style::default()
                .fg(Color::White)
                .bg(theme::PURPLE)
                .add_modifier(Modifier::BOLD),
            theme.bg,
            progress,
        );
        let dim = anim::faded(theme.dim, theme.bg, progress);
        let header = anim::faded(theme.header, theme.bg, progress);

        // Days-left badge left, category badge right.
        let days = format!(" {} ", event.days_left_display());
        let category = format!(" {} ", event.category);
        let gap = w.saturating_sub(days.chars().count() + category.chars().count());
        let badges = Line::from(vec![
            Span::styled(days, badge_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(category, badge_style),
        ]);

        // Stand-in for the remote picture; fetching is out of scope.
        let image = Line::from(Span::styled(
            format!("▒▒ {}", truncated(&event.image, w.saturating_sub(3))),
            dim,
        ));

        let date = Line::from(Span::styled(event.date.clone(), dim));

        let actions = format!(
            "{}  {}",
            IconKind::Heart.glyph(),
            IconKind::Camera.glyph()
        );
        let title_gap = w.saturating_sub(event.title.chars().count() + actions.chars().count());
        let title = Line::from(vec![
            Span::styled(event.title.clone(), header),
            Span::raw(" ".repeat(title_gap)),
            Span::styled(actions, dim),
        ]);

        let lines = vec![badges, image, date, title];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncated("short", 10), "short");
        assert_eq!(truncated("abcdef", 4), "abc…");
        assert_eq!(truncated("héllo wörld", 6), "héllo…");
    }
}
