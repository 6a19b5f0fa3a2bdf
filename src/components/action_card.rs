use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::anim;
use crate::app::ActionShortcut;
use crate::theme;

const CARD_TRAVEL: u16 = 2;

pub struct ActionCard;

impl ActionCard {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        shortcut: &ActionShortcut,
        progress: f32,
        press: f32,
    ) {
        let theme = theme::current();
        let area = anim::slide_down(area, progress, CARD_TRAVEL);
        if area.height < 2 {
            return;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(anim::faded(theme.border, theme.bg, progress));
        if let Some(bg) = super::press_bg(theme, press) {
            block = block.style(Style::default().bg(bg));
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let icon = Line::from(Span::styled(
            shortcut.icon.glyph(),
            anim::faded(theme.accent, theme.bg, progress),
        ))
        .centered();
        let title = Line::from(Span::styled(
            shortcut.title,
            anim::faded(theme.dim, theme.bg, progress),
        ))
        .centered();

        frame.render_widget(Paragraph::new(vec![icon, title]), inner);
    }
}
