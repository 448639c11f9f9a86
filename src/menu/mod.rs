// Menu button module
// State machine, input handlers and rendering for one trigger + action menu pair

pub mod input;
pub mod render;
pub mod state;

pub use input::{Key, MenuHandlers, Propagation, Target};
pub use render::{render_menu_button, MenuColors};
pub use state::{ActionCallback, InputFocus, ItemId, MenuButton, MenuItem, MenuMarkup};
