// Menu button rendering with Ratatui

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::{InputFocus, MenuButton};
use crate::config::DisplayConfig;
use crate::host::{trigger_text, MenuLayout};

/// Colors used to draw the trigger and its popup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuColors {
    pub trigger: Color,
    pub focus: Color,
    pub menu_border: Color,
}

impl Default for MenuColors {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for MenuColors {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            trigger: rgb(display.trigger_color),
            focus: rgb(display.focus_color),
            menu_border: rgb(display.menu_border_color),
        }
    }
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Render the trigger and, when open, the popup menu on top of everything else
pub fn render_menu_button(
    frame: &mut Frame,
    button: &MenuButton,
    layout: &MenuLayout,
    colors: &MenuColors,
) {
    let trigger_focused = button.input_focus() == InputFocus::Trigger;
    let trigger_style = if trigger_focused {
        Style::default()
            .fg(colors.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.trigger)
    };

    let trigger = Paragraph::new(Line::from(Span::styled(trigger_text(button), trigger_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(trigger_style),
        );
    frame.render_widget(trigger, layout.trigger);

    let Some(menu_area) = layout.menu else {
        return;
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.menu_border))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    frame.render_widget(block, menu_area);

    for (id, area) in &layout.items {
        let Some(item) = button.item(*id) else {
            continue;
        };

        let is_focused = button.focused_item() == Some(*id);
        let prefix = if is_focused { "> " } else { "  " };
        let text = format!("{}{}", prefix, item.label());

        let line = if is_focused {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(colors.focus)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(text, Style::default().fg(Color::White)))
        };

        frame.render_widget(Paragraph::new(line), *area);
    }
}
