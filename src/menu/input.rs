// Menu button input handling
// Keyboard and pointer events from the host, routed to state transitions

use crossterm::event::KeyCode;
use tracing::debug;

use super::state::{ItemId, MenuButton};

/// Keys the menu button reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Escape,
    /// Any key the widget leaves to the host
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Element an event is delivered to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Trigger,
    Item(ItemId),
}

/// Whether the event was consumed by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// Handled; the host must not apply its own default behaviour
    Stop,
    /// Not handled; the host may act on it
    Continue,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        self == Propagation::Stop
    }
}

/// Handlers a host environment calls when input reaches the widget
pub trait MenuHandlers {
    /// Key pressed while `target` owns input focus
    fn on_key_down(&mut self, target: Target, key: Key) -> Propagation;

    /// Pointer click (press and release) on `target`
    fn on_click(&mut self, target: Target) -> Propagation;

    /// Pointer entered `item`
    fn on_hover_enter(&mut self, item: ItemId);

    /// Pointer pressed outside the widget; delivered in the capture phase
    /// before any other handler sees the event
    fn on_outside_activate(&mut self);
}

impl MenuHandlers for MenuButton {
    fn on_key_down(&mut self, target: Target, key: Key) -> Propagation {
        match target {
            Target::Trigger => handle_trigger_key(self, key),
            Target::Item(item) => handle_item_key(self, item, key),
        }
    }

    fn on_click(&mut self, target: Target) -> Propagation {
        match target {
            Target::Trigger => {
                if self.is_open() {
                    self.close();
                    self.focus_trigger();
                } else {
                    self.open();
                    self.focus_first();
                }
                Propagation::Stop
            }
            Target::Item(item) => {
                self.perform_action(item);
                Propagation::Continue
            }
        }
    }

    fn on_hover_enter(&mut self, item: ItemId) {
        if self.is_open() {
            self.focus_item(item);
        }
    }

    fn on_outside_activate(&mut self) {
        if self.is_open() {
            debug!("pointer down outside the menu button");
            self.close();
            self.focus_trigger();
        }
    }
}

fn handle_trigger_key(button: &mut MenuButton, key: Key) -> Propagation {
    match key {
        // Not a toggle: an open menu re-opens at the first item
        Key::Enter | Key::Space | Key::ArrowDown => {
            button.open();
            button.focus_first();
            Propagation::Stop
        }
        Key::ArrowUp => {
            button.open();
            button.focus_last();
            Propagation::Stop
        }
        Key::Escape => {
            button.close();
            Propagation::Stop
        }
        Key::Other => Propagation::Continue,
    }
}

fn handle_item_key(button: &mut MenuButton, item: ItemId, key: Key) -> Propagation {
    match key {
        Key::Enter | Key::Space => {
            button.perform_action(item);
            Propagation::Stop
        }
        Key::Escape => {
            button.close();
            button.focus_trigger();
            Propagation::Stop
        }
        Key::ArrowUp => {
            let _ = button.focus_previous(item);
            Propagation::Stop
        }
        Key::ArrowDown => {
            let _ = button.focus_next(item);
            Propagation::Stop
        }
        Key::Other => Propagation::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::state::tests::button_with;
    use crate::menu::state::InputFocus;

    #[test]
    fn test_key_codes_map_to_widget_keys() {
        assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
        assert_eq!(Key::from(KeyCode::Char(' ')), Key::Space);
        assert_eq!(Key::from(KeyCode::Up), Key::ArrowUp);
        assert_eq!(Key::from(KeyCode::Down), Key::ArrowDown);
        assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
        assert_eq!(Key::from(KeyCode::Char('x')), Key::Other);
        assert_eq!(Key::from(KeyCode::Tab), Key::Other);
    }

    #[test]
    fn test_arrow_down_walks_and_wraps() {
        let (mut button, _) = button_with(&["A", "B", "C"]);
        button.focus_trigger();

        assert!(button.on_key_down(Target::Trigger, Key::ArrowDown).is_stopped());
        assert!(button.is_open());
        assert_eq!(button.focused_item(), Some(ItemId(0)));

        for expected in [1, 2, 0] {
            let InputFocus::Item(current) = button.input_focus() else {
                panic!("an item should own input focus");
            };
            let _ = button.on_key_down(Target::Item(current), Key::ArrowDown);
            assert_eq!(button.focused_item(), Some(ItemId(expected)));
        }
    }

    #[test]
    fn test_arrow_up_on_trigger_focuses_last() {
        let (mut button, _) = button_with(&["A", "B", "C"]);

        let _ = button.on_key_down(Target::Trigger, Key::ArrowUp);

        assert!(button.is_open());
        assert_eq!(button.focused_item(), Some(ItemId(2)));

        let _ = button.on_key_down(Target::Item(ItemId(2)), Key::ArrowUp);
        assert_eq!(button.focused_item(), Some(ItemId(1)));
    }

    #[test]
    fn test_escape_on_item_closes_and_focuses_trigger() {
        let (mut button, chosen) = button_with(&["A", "B"]);
        let _ = button.on_key_down(Target::Trigger, Key::Enter);
        assert_eq!(button.focused_item(), Some(ItemId(0)));

        assert!(button.on_key_down(Target::Item(ItemId(0)), Key::Escape).is_stopped());

        assert!(!button.is_open());
        assert_eq!(button.input_focus(), InputFocus::Trigger);
        assert!(chosen.borrow().is_empty());
    }

    #[test]
    fn test_escape_on_trigger_closes() {
        let (mut button, _) = button_with(&["A"]);
        button.open();
        button.focus_trigger();

        let _ = button.on_key_down(Target::Trigger, Key::Escape);

        assert!(!button.is_open());
    }

    #[test]
    fn test_enter_on_item_performs_action() {
        let (mut button, chosen) = button_with(&["A", "B", "C"]);
        let _ = button.on_key_down(Target::Trigger, Key::ArrowDown);
        let _ = button.on_key_down(Target::Item(ItemId(0)), Key::ArrowDown);

        let _ = button.on_key_down(Target::Item(ItemId(1)), Key::Enter);

        assert!(!button.is_open());
        assert_eq!(button.input_focus(), InputFocus::Trigger);
        assert_eq!(*chosen.borrow(), vec![(ItemId(1), "B".to_string())]);
    }

    #[test]
    fn test_space_on_item_performs_action() {
        let (mut button, chosen) = button_with(&["A", "B"]);
        let _ = button.on_key_down(Target::Trigger, Key::ArrowUp);

        let _ = button.on_key_down(Target::Item(ItemId(1)), Key::Space);

        assert_eq!(chosen.borrow().len(), 1);
        assert!(!button.is_open());
    }

    #[test]
    fn test_enter_on_open_trigger_refocuses_first_item() {
        let (mut button, _) = button_with(&["A", "B", "C"]);
        let _ = button.on_key_down(Target::Trigger, Key::ArrowUp);
        assert_eq!(button.focused_item(), Some(ItemId(2)));

        let _ = button.on_key_down(Target::Trigger, Key::Enter);

        assert!(button.is_open());
        assert_eq!(button.focused_item(), Some(ItemId(0)));
    }

    #[test]
    fn test_unhandled_keys_continue() {
        let (mut button, _) = button_with(&["A"]);

        assert_eq!(
            button.on_key_down(Target::Trigger, Key::Other),
            Propagation::Continue
        );
        assert!(!button.is_open());
    }

    #[test]
    fn test_trigger_click_toggles() {
        let (mut button, _) = button_with(&["A", "B"]);

        let _ = button.on_click(Target::Trigger);
        assert!(button.is_open());
        assert_eq!(button.focused_item(), Some(ItemId(0)));

        let _ = button.on_click(Target::Trigger);
        assert!(!button.is_open());
        assert_eq!(button.input_focus(), InputFocus::Trigger);
    }

    #[test]
    fn test_item_click_performs_action() {
        let (mut button, chosen) = button_with(&["A", "B", "C"]);
        let _ = button.on_click(Target::Trigger);

        let _ = button.on_click(Target::Item(ItemId(2)));

        assert!(!button.is_open());
        assert_eq!(*chosen.borrow(), vec![(ItemId(2), "C".to_string())]);
    }

    #[test]
    fn test_hover_moves_focus_only_while_open() {
        let (mut button, _) = button_with(&["A", "B", "C"]);

        button.on_hover_enter(ItemId(1));
        assert_eq!(button.focused_item(), None);

        let _ = button.on_click(Target::Trigger);
        button.on_hover_enter(ItemId(2));

        assert!(button.is_open());
        assert_eq!(button.focused_item(), Some(ItemId(2)));
    }

    #[test]
    fn test_outside_activate_closes_open_menu() {
        let (mut button, _) = button_with(&["A"]);
        let _ = button.on_key_down(Target::Trigger, Key::Enter);

        button.on_outside_activate();

        assert!(!button.is_open());
        assert_eq!(button.input_focus(), InputFocus::Trigger);
    }

    #[test]
    fn test_outside_activate_ignored_when_closed() {
        let (mut button, _) = button_with(&["A"]);
        button.blur();

        button.on_outside_activate();

        assert_eq!(button.input_focus(), InputFocus::Elsewhere);
    }

    #[test]
    fn test_empty_menu_still_opens() {
        let (mut button, _) = button_with(&[]);

        let _ = button.on_key_down(Target::Trigger, Key::ArrowDown);

        assert!(button.is_open());
        assert_eq!(button.focused_item(), None);
    }
}
