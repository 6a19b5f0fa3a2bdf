#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date in `DD/MM/YYYY` form.
    pub date: String,
    /// Remote picture URI. Fetching is delegated to the host environment.
    pub image: String,
    /// Derived from `date` at load time, never stored authoritatively.
    pub days_left: u32,
    pub category: String,
}

impl Event {
    pub fn days_left_display(&self) -> String {
        if self.days_left == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.days_left)
        }
    }
}
