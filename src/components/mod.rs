pub mod action_card;
pub mod event_card;
pub mod home_view;
pub mod settings_view;

pub use home_view::HomeView;
pub use settings_view::SettingsView;

use ratatui::style::Color;

use crate::anim;
use crate::theme::Theme;

/// Background tint for press feedback, fading out with the pulse.
pub(crate) fn press_bg(theme: &Theme, intensity: f32) -> Option<Color> {
    if intensity <= 0.0 {
        return None;
    }
    let highlight = theme.highlight.bg?;
    Some(anim::fade(highlight, theme.bg, intensity))
}
