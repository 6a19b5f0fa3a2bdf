pub mod date;
pub mod event;
pub mod mock;

pub use date::{days_left, DateParseError};
pub use event::Event;
pub use mock::load_mock_events;
