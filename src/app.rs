// Application host: owns the menu button, routes terminal events, reacts to chosen actions

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, style::Color, Terminal};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::host::{Dispatcher, MenuLayout};
use crate::menu::render::rgb;
use crate::menu::{InputFocus, ItemId, MenuButton, MenuColors, Propagation};
use crate::ui::{self, page_layout};
use crate::TARGET_FPS;

/// An action chosen from the menu, reported by the action callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenAction {
    pub item: ItemId,
    pub text: String,
}

pub struct App {
    button: MenuButton,
    dispatcher: Dispatcher,
    /// Region the widget is laid out in
    anchor: Rect,
    /// Widget bounds matching what was last drawn
    layout: MenuLayout,
    actions: Receiver<ChosenAction>,
    /// Text of the last chosen action
    output: Option<String>,
    /// Feedback line (clipboard results)
    status: Option<String>,
    quit_key: KeyCode,
    /// Quit binding as written in the config, for the controls hint
    quit_label: String,
    copy_to_clipboard: bool,
    colors: MenuColors,
    output_color: Color,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut button = MenuButton::new(config.menu.to_markup(), move |item, menu_item| {
            let _ = tx.send(ChosenAction {
                item,
                text: menu_item.action_text().to_string(),
            });
        });
        button.focus_trigger();

        let mut dispatcher = Dispatcher::new();
        dispatcher.register_outside_observer();

        Self {
            button,
            dispatcher,
            anchor: Rect::default(),
            layout: MenuLayout::default(),
            actions: rx,
            output: None,
            status: None,
            quit_key: config.keybindings.quit_key(),
            quit_label: config.keybindings.quit.trim().to_string(),
            copy_to_clipboard: config.behavior.copy_to_clipboard,
            colors: MenuColors::from(&config.display),
            output_color: rgb(config.display.output_color),
            should_quit: false,
        }
    }

    pub fn button(&self) -> &MenuButton {
        &self.button
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn quit_label(&self) -> &str {
        &self.quit_label
    }

    pub fn colors(&self) -> &MenuColors {
        &self.colors
    }

    pub fn output_color(&self) -> Color {
        self.output_color
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recompute the widget placement for a screen of `area`
    pub fn resize(&mut self, area: Rect) {
        self.anchor = page_layout(area).widget;
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout =
            MenuLayout::compute_scrolled(self.anchor, &self.button, self.layout.scroll);
    }

    /// Deliver one terminal event to the widget, then to the app's own key handling
    pub fn handle_event(&mut self, event: &Event) {
        // Feedback lasts until the next key press or click
        if matches!(
            event,
            Event::Key(_)
                | Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    ..
                })
        ) {
            self.status = None;
        }

        let focus = self.button.input_focus();
        let propagation = self
            .dispatcher
            .dispatch(event, &mut self.button, focus, &self.layout);

        self.drain_actions();

        match event {
            Event::Key(key) if propagation == Propagation::Continue => self.handle_app_key(key),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, *width, *height)),
            _ => {}
        }

        // The popup appears or disappears with the open state
        self.relayout();
    }

    fn handle_app_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            code if same_key(code, self.quit_key) => {
                debug!("quit requested");
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Tab moves input focus between the menu button and the output field
    fn cycle_focus(&mut self) {
        match self.button.input_focus() {
            InputFocus::Elsewhere => self.button.focus_trigger(),
            InputFocus::Trigger | InputFocus::Item(_) => self.button.blur(),
        }
    }

    fn drain_actions(&mut self) {
        while let Ok(action) = self.actions.try_recv() {
            info!(item = action.item.0, text = %action.text, "menu action chosen");
            if self.copy_to_clipboard {
                self.copy_text(&action.text);
            }
            self.output = Some(action.text);
        }
    }

    fn copy_text(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(_) => {
                    self.status = Some("Copied to clipboard!".to_string());
                }
                Err(e) => {
                    warn!("failed to copy action text: {}", e);
                    self.status = Some(format!("Copy failed: {}", e));
                }
            },
            Err(e) => {
                warn!("clipboard unavailable: {}", e);
                self.status = Some(format!("Clipboard unavailable: {}", e));
            }
        }
    }

    /// Draw and handle events until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let frame_duration = Duration::from_millis(1000 / TARGET_FPS);
        info!("event loop started");

        while !self.should_quit {
            let size = terminal.size()?;
            self.resize(Rect::new(0, 0, size.width, size.height));
            let app: &App = self;
            terminal.draw(|frame| ui::render(frame, app))?;

            if event::poll(frame_duration)? {
                let event = event::read()?;
                self.handle_event(&event);

                // Drain whatever else is already queued
                while !self.should_quit && event::poll(Duration::ZERO)? {
                    let event = event::read()?;
                    self.handle_event(&event);
                }
            }
        }

        info!("event loop finished");
        Ok(())
    }
}

/// Character keys compare case-insensitively
fn same_key(pressed: KeyCode, binding: KeyCode) -> bool {
    match (pressed, binding) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    }
}
