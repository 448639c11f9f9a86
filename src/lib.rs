// Menu button library
// A menu button that opens a menu of actions, plus the terminal host that drives it

pub mod app;
pub mod config;
pub mod host;
pub mod logging;
pub mod menu;
pub mod ui;

/// Target frames per second for the host loop
pub const TARGET_FPS: u64 = 30;
