use ratatui::style::Color;

use crate::icons::IconKind;
use crate::theme;

/// Action behind a settings row. Dispatch is a diagnostic trace stand-in for
/// navigation; nothing else happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Profile,
    Notifications,
    Privacy,
    Help,
    About,
    Logout,
}

/// One navigation row on the settings screen. Static configuration,
/// constructed once and never mutated.
#[derive(Debug, Clone)]
pub struct SettingsOption {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: IconKind,
    pub accent: Color,
    pub action: SettingsAction,
}

pub fn options() -> Vec<SettingsOption> {
    vec![
        SettingsOption {
            id: "1",
            title: "Profile",
            subtitle: "Manage your personal information",
            icon: IconKind::User,
            accent: theme::PURPLE,
            action: SettingsAction::Profile,
        },
        SettingsOption {
            id: "2",
            title: "Notifications",
            subtitle: "Configure your preferences",
            icon: IconKind::Bell,
            accent: theme::AMBER,
            action: SettingsAction::Notifications,
        },
        SettingsOption {
            id: "3",
            title: "Privacy",
            subtitle: "Control your privacy and data",
            icon: IconKind::Shield,
            accent: theme::EMERALD,
            action: SettingsAction::Privacy,
        },
        SettingsOption {
            id: "4",
            title: "Help",
            subtitle: "Find answers to your questions",
            icon: IconKind::HelpCircle,
            accent: theme::BLUE,
            action: SettingsAction::Help,
        },
        SettingsOption {
            id: "5",
            title: "About",
            subtitle: "Information about the app",
            icon: IconKind::Info,
            accent: theme::SLATE,
            action: SettingsAction::About,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_rows_with_unique_ids() {
        let options = options();
        assert_eq!(options.len(), 5);
        let ids: std::collections::HashSet<_> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), options.len());
    }

    #[test]
    fn no_row_carries_logout() {
        // Logout is its own affordance below the group.
        assert!(options().iter().all(|o| o.action != SettingsAction::Logout));
    }
}
