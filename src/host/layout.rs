// Screen geometry for the menu button: where the trigger, popup and items sit

use ratatui::{layout::Rect, text::Line};

use crate::menu::{ItemId, MenuButton};

/// Trigger is a bordered one-line button
const TRIGGER_HEIGHT: u16 = 3;

/// Borders plus one column of padding on each side
const TRIGGER_CHROME: u16 = 4;

/// Borders plus the "> " focus prefix
const MENU_CHROME: u16 = 4;

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger,
    Item(ItemId),
    /// Inside the popup but not on an item (borders)
    Menu,
    Outside,
}

/// Bounds of a menu button as last laid out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLayout {
    pub trigger: Rect,
    /// Popup bounds, present only while the menu is open
    pub menu: Option<Rect>,
    /// Visible item rows
    pub items: Vec<(ItemId, Rect)>,
    /// Index of the first visible item when the popup is clipped
    pub scroll: usize,
}

impl MenuLayout {
    /// Lay the widget out with its trigger at the top-left of `anchor`.
    /// The popup drops below the trigger and is clipped to `anchor`.
    pub fn compute(anchor: Rect, button: &MenuButton) -> Self {
        Self::compute_scrolled(anchor, button, 0)
    }

    /// Like [`MenuLayout::compute`], starting from the previous frame's
    /// `scroll` so a clipped popup only scrolls when focus leaves the window
    pub fn compute_scrolled(anchor: Rect, button: &MenuButton, scroll: usize) -> Self {
        let trigger_text = trigger_text(button);
        let trigger = Rect {
            x: anchor.x,
            y: anchor.y,
            width: text_width(&trigger_text)
                .saturating_add(TRIGGER_CHROME)
                .min(anchor.width),
            height: TRIGGER_HEIGHT.min(anchor.height),
        };

        if !button.is_open() {
            return Self {
                trigger,
                menu: None,
                items: Vec::new(),
                scroll: 0,
            };
        }

        let widest_item = button
            .items()
            .iter()
            .map(|item| text_width(item.label()))
            .max()
            .unwrap_or(0);

        let menu_top = trigger.y.saturating_add(trigger.height);
        let anchor_bottom = anchor.y.saturating_add(anchor.height);
        let anchor_right = anchor.x.saturating_add(anchor.width);
        let menu = Rect {
            x: trigger.x,
            y: menu_top,
            width: widest_item
                .saturating_add(MENU_CHROME)
                .max(trigger.width)
                .min(anchor_right.saturating_sub(trigger.x)),
            height: u16::try_from(button.items().len())
                .unwrap_or(u16::MAX)
                .saturating_add(2)
                .min(anchor_bottom.saturating_sub(menu_top)),
        };

        // Rows inside the borders. A clipped popup shows a window of items
        // that always contains the focused one.
        let rows = usize::from(menu.height.saturating_sub(2));
        let mut scroll = scroll.min(button.items().len().saturating_sub(rows));
        if let Some(ItemId(focused)) = button.focused_item() {
            if focused < scroll {
                scroll = focused;
            } else if rows > 0 && focused >= scroll + rows {
                scroll = focused + 1 - rows;
            }
        }
        let items = (scroll..button.items().len())
            .take(rows)
            .enumerate()
            .map(|(row, i)| {
                let rect = Rect {
                    x: menu.x + 1,
                    y: menu
                        .y
                        .saturating_add(1)
                        .saturating_add(u16::try_from(row).unwrap_or(u16::MAX)),
                    width: menu.width.saturating_sub(2),
                    height: 1,
                };
                (ItemId(i), rect)
            })
            .collect();

        Self {
            trigger,
            menu: Some(menu),
            items,
            scroll,
        }
    }

    /// Find what lies under the cell at (`column`, `row`)
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        if rect_contains(self.trigger, column, row) {
            return Hit::Trigger;
        }

        if let Some((id, _)) = self
            .items
            .iter()
            .find(|(_, rect)| rect_contains(*rect, column, row))
        {
            return Hit::Item(*id);
        }

        match self.menu {
            Some(menu) if rect_contains(menu, column, row) => Hit::Menu,
            _ => Hit::Outside,
        }
    }

    /// Whether (`column`, `row`) lies within the widget's bounds
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.hit_test(column, row) != Hit::Outside
    }
}

/// Trigger caption; the arrow mirrors the expanded state
pub fn trigger_text(button: &MenuButton) -> String {
    let marker = if button.is_open() { "▾" } else { "▸" };
    if button.trigger_label().is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", button.trigger_label(), marker)
    }
}

/// Display width in terminal cells
fn text_width(text: &str) -> u16 {
    u16::try_from(Line::from(text).width()).unwrap_or(u16::MAX)
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
