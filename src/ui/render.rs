// Page rendering with Ratatui: title, menu button, action output and controls hint

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::menu::{render_menu_button, InputFocus};

/// Regions of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title: Rect,
    /// Where the menu button sits; its popup may overlap the output field
    pub widget: Rect,
    pub output: Rect,
    pub hint: Rect,
}

pub fn page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Menu button
            Constraint::Length(3), // Action output
            Constraint::Length(1), // Controls hint
        ])
        .split(area);

    let widget_bottom = chunks[2].y + chunks[2].height;
    let widget = Rect {
        x: chunks[1].x + 2u16.min(chunks[1].width),
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(4),
        height: widget_bottom.saturating_sub(chunks[1].y),
    };

    PageLayout {
        title: chunks[0],
        widget,
        output: chunks[2],
        hint: chunks[3],
    }
}

/// Render the whole page; the popup is drawn last so it sits on top
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let page = page_layout(area);

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Menu Button Actions",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, page.title);

    render_output(frame, app, page.output);
    render_hint(frame, app, page.hint);
    render_menu_button(frame, app.button(), app.layout(), app.colors());
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.button().input_focus() == InputFocus::Elsewhere;
    let border_color = if focused {
        app.colors().focus
    } else {
        app.output_color()
    };

    let text = match app.output() {
        Some(text) => Span::styled(text.to_string(), Style::default().fg(Color::White)),
        None => Span::styled("(no action chosen)", Style::default().fg(Color::DarkGray)),
    };

    let output = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" Last Action ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(output, area);
}

fn render_hint(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Gray)),
            Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter/Space", Style::default().fg(Color::Gray)),
            Span::styled(": Open/Select  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Gray)),
            Span::styled(": Close  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Tab", Style::default().fg(Color::Gray)),
            Span::styled(": Focus  ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.quit_label().to_string(), Style::default().fg(Color::Gray)),
            Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
        ]),
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 20;

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn draw(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn app() -> App {
        let mut app = App::new(&Config::default());
        app.resize(Rect::new(0, 0, WIDTH, HEIGHT));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_page_layout_stacks_regions() {
        let page = page_layout(Rect::new(0, 0, WIDTH, HEIGHT));

        assert_eq!(page.title, Rect::new(0, 0, WIDTH, 3));
        assert_eq!(page.hint, Rect::new(0, HEIGHT - 1, WIDTH, 1));
        assert_eq!(page.widget.y, 3);
        assert_eq!(page.widget.y + page.widget.height, page.output.y + page.output.height);
    }

    #[test]
    fn test_closed_menu_shows_only_trigger() {
        let lines = draw(&app());
        let screen = lines.join("\n");

        assert!(screen.contains("Actions ▸"));
        assert!(!screen.contains("Action 1"));
        assert!(screen.contains("(no action chosen)"));
    }

    #[test]
    fn test_open_menu_highlights_focused_item() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);

        let screen = draw(&app).join("\n");

        assert!(screen.contains("Actions ▾"));
        assert!(screen.contains("  Action 1"));
        assert!(screen.contains("> Action 2"));
        assert!(screen.contains("  Action 4"));
    }

    #[test]
    fn test_chosen_action_appears_in_output() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        let lines = draw(&app);
        let output_row = &lines[(HEIGHT - 3) as usize];

        assert!(output_row.contains("Action 4"));
        assert!(!lines.join("\n").contains("> Action"));
    }

    #[test]
    fn test_hint_shows_configured_quit_key() {
        let mut config = Config::default();
        config.keybindings.quit = "X".to_string();
        let mut app = App::new(&config);
        app.resize(Rect::new(0, 0, WIDTH, HEIGHT));

        let lines = draw(&app);
        let hint = &lines[(HEIGHT - 1) as usize];

        assert!(hint.contains("X: Quit"));
        assert!(!hint.contains("Q: Quit"));
    }
}
