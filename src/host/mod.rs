// Terminal host environment for the menu button
// Lays the widget out, hit-tests pointer positions and dispatches crossterm events

pub mod dispatch;
pub mod layout;

pub use dispatch::Dispatcher;
pub use layout::{trigger_text, Hit, MenuLayout};
