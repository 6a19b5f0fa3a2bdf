/// Closed set of icon variants components can select from, instead of
/// runtime-substituted icon types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Plus,
    Calendar,
    Star,
    Search,
    ArrowRight,
    Heart,
    Camera,
    User,
    Bell,
    Shield,
    HelpCircle,
    Info,
    ChevronRight,
    LogOut,
    Gear,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Plus => "+",
            IconKind::Calendar => "▦",
            IconKind::Star => "✦",
            IconKind::Search => "⌕",
            IconKind::ArrowRight => "→",
            IconKind::Heart => "♥",
            IconKind::Camera => "◉",
            IconKind::User => "☺",
            IconKind::Bell => "◆",
            IconKind::Shield => "▣",
            IconKind::HelpCircle => "?",
            IconKind::Info => "i",
            IconKind::ChevronRight => "›",
            IconKind::LogOut => "⏏",
            IconKind::Gear => "⚙",
        }
    }
}
