// Event dispatch from crossterm into the menu button handlers
//
// Pointer-down events run a capture phase first: registered outside
// observers check the pointer against the widget bounds before any
// target handler reacts to the same event.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use super::layout::{Hit, MenuLayout};
use crate::menu::{InputFocus, ItemId, Key, MenuHandlers, Propagation, Target};

/// Routes terminal events to a widget implementing [`MenuHandlers`]
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Registered outside-activation observers (widgets watching for
    /// pointer-down outside their bounds)
    outside_observers: usize,
    /// Element under the last left-button press, for click detection
    pressed: Option<Hit>,
    /// Item the pointer is currently over
    hovered: Option<ItemId>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the widget for capture-phase pointer-down notifications.
    /// Called once at startup; the registration lives as long as the dispatcher.
    pub fn register_outside_observer(&mut self) {
        self.outside_observers += 1;
    }

    pub fn observes_outside(&self) -> bool {
        self.outside_observers > 0
    }

    /// Deliver `event` to `handlers`. `focus` names the element owning input
    /// focus and `layout` the widget bounds from the last frame.
    pub fn dispatch<H: MenuHandlers>(
        &mut self,
        event: &Event,
        handlers: &mut H,
        focus: InputFocus,
        layout: &MenuLayout,
    ) -> Propagation {
        // Hidden items cannot stay hovered; the next pointer move over a
        // shown item is a fresh enter
        if layout.items.is_empty() {
            self.hovered = None;
        }

        match event {
            Event::Key(key) => self.dispatch_key(key, handlers, focus),
            Event::Mouse(mouse) => self.dispatch_mouse(mouse, handlers, layout),
            _ => Propagation::Continue,
        }
    }

    fn dispatch_key<H: MenuHandlers>(
        &mut self,
        key: &KeyEvent,
        handlers: &mut H,
        focus: InputFocus,
    ) -> Propagation {
        if key.kind != KeyEventKind::Press {
            return Propagation::Continue;
        }

        let target = match focus {
            InputFocus::Trigger => Target::Trigger,
            InputFocus::Item(item) => Target::Item(item),
            InputFocus::Elsewhere => return Propagation::Continue,
        };

        trace!(?target, code = ?key.code, "key down");
        handlers.on_key_down(target, Key::from(key.code))
    }

    fn dispatch_mouse<H: MenuHandlers>(
        &mut self,
        mouse: &MouseEvent,
        handlers: &mut H,
        layout: &MenuLayout,
    ) -> Propagation {
        let hit = layout.hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Capture phase
                if self.observes_outside() && hit == Hit::Outside {
                    handlers.on_outside_activate();
                }
                self.pressed = Some(hit);
                Propagation::Continue
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pressed.take();
                if pressed != Some(hit) {
                    return Propagation::Continue;
                }

                match hit {
                    Hit::Trigger => handlers.on_click(Target::Trigger),
                    Hit::Item(item) => {
                        self.hovered = None;
                        handlers.on_click(Target::Item(item))
                    }
                    Hit::Menu | Hit::Outside => Propagation::Continue,
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let over = match hit {
                    Hit::Item(item) => Some(item),
                    _ => None,
                };

                if over != self.hovered {
                    self.hovered = over;
                    if let Some(item) = over {
                        handlers.on_hover_enter(item);
                    }
                }
                Propagation::Continue
            }
            _ => Propagation::Continue,
        }
    }
}
