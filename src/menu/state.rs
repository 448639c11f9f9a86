// Menu button state: open/closed visibility, focus cursor and input focus

use tracing::{debug, warn};

/// Position of an item in the menu. Items are identified by position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// One selectable action in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    payload: Option<String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: None,
        }
    }

    /// Attach an action payload that differs from the display label
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Get display text for the item
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text handed to the host when the item is chosen (the label unless a payload is set)
    pub fn action_text(&self) -> &str {
        self.payload.as_deref().unwrap_or(&self.label)
    }
}

/// The structure a menu button binds to: one trigger and an ordered item list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuMarkup {
    /// Trigger label, `None` when the markup has no usable trigger
    pub trigger_label: Option<String>,
    /// Items in presentation and navigation order
    pub items: Vec<MenuItem>,
}

/// Which element currently owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// The menu button itself
    Trigger,
    /// A menu item
    Item(ItemId),
    /// Something outside the widget
    Elsewhere,
}

/// Callback invoked with the chosen item
pub type ActionCallback = Box<dyn FnMut(ItemId, &MenuItem)>;

/// A menu button and its popup menu of actions
pub struct MenuButton {
    trigger_label: String,
    items: Vec<MenuItem>,
    /// Item carrying the focus indicator (the single tab stop inside the menu)
    focused: Option<ItemId>,
    /// Mirrors `aria-expanded` on the trigger
    expanded: bool,
    input_focus: InputFocus,
    on_action: ActionCallback,
}

impl MenuButton {
    /// Bind to `markup`. Malformed markup never fails: a missing trigger gets an
    /// empty label and an empty item list makes every focus operation a no-op.
    pub fn new<F>(markup: MenuMarkup, on_action: F) -> Self
    where
        F: FnMut(ItemId, &MenuItem) + 'static,
    {
        let trigger_label = match markup.trigger_label {
            Some(label) => label,
            None => {
                warn!("menu markup has no trigger label, using an unlabeled trigger");
                String::new()
            }
        };

        if markup.items.is_empty() {
            warn!("menu markup has no items, keyboard navigation is disabled");
        }

        debug!(
            trigger = %trigger_label,
            items = markup.items.len(),
            "menu button constructed"
        );

        Self {
            trigger_label,
            items: markup.items,
            focused: None,
            expanded: false,
            input_focus: InputFocus::Elsewhere,
            on_action: Box::new(on_action),
        }
    }

    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(id.0)
    }

    pub fn first_item(&self) -> Option<ItemId> {
        if self.items.is_empty() {
            None
        } else {
            Some(ItemId(0))
        }
    }

    pub fn last_item(&self) -> Option<ItemId> {
        self.items.len().checked_sub(1).map(ItemId)
    }

    /// Item holding the focus indicator, if any
    pub fn focused_item(&self) -> Option<ItemId> {
        self.focused
    }

    pub fn input_focus(&self) -> InputFocus {
        self.input_focus
    }

    pub fn is_open(&self) -> bool {
        self.expanded
    }

    /// Show the menu and mark the trigger expanded
    pub fn open(&mut self) {
        if !self.expanded {
            debug!("menu opened");
        }
        self.expanded = true;
    }

    /// Hide the menu. Hidden items cannot keep focus, so input focus
    /// sitting on an item goes back to the trigger.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }

        self.expanded = false;
        self.focused = None;
        if matches!(self.input_focus, InputFocus::Item(_)) {
            self.input_focus = InputFocus::Trigger;
        }
        debug!("menu closed");
    }

    /// Move the focus indicator and input focus to `item`
    pub fn focus_item(&mut self, item: ItemId) {
        if item.0 >= self.items.len() {
            return;
        }

        self.focused = Some(item);
        self.input_focus = InputFocus::Item(item);
    }

    pub fn focus_first(&mut self) {
        if let Some(first) = self.first_item() {
            self.focus_item(first);
        }
    }

    pub fn focus_last(&mut self) {
        if let Some(last) = self.last_item() {
            self.focus_item(last);
        }
    }

    /// Focus the item before `current`, wrapping from the first to the last
    pub fn focus_previous(&mut self, current: ItemId) -> Option<ItemId> {
        if current.0 >= self.items.len() {
            return None;
        }

        let previous = if Some(current) == self.first_item() {
            self.last_item()?
        } else {
            ItemId(current.0 - 1)
        };
        self.focus_item(previous);
        Some(previous)
    }

    /// Focus the item after `current`, wrapping from the last to the first
    pub fn focus_next(&mut self, current: ItemId) -> Option<ItemId> {
        if current.0 >= self.items.len() {
            return None;
        }

        let next = if Some(current) == self.last_item() {
            self.first_item()?
        } else {
            ItemId(current.0 + 1)
        };
        self.focus_item(next);
        Some(next)
    }

    pub fn focus_trigger(&mut self) {
        self.input_focus = InputFocus::Trigger;
    }

    /// Input focus leaves the widget (e.g. tabbing to another control)
    pub fn blur(&mut self) {
        self.close();
        self.input_focus = InputFocus::Elsewhere;
    }

    /// Hand `item` to the action callback, then close and return focus to the trigger
    pub fn perform_action(&mut self, item: ItemId) {
        let Some(menu_item) = self.items.get(item.0) else {
            return;
        };

        debug!(item = item.0, label = menu_item.label(), "performing menu action");
        (self.on_action)(item, menu_item);
        self.close();
        self.focus_trigger();
    }
}
