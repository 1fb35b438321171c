use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Message, Model};
use crate::editor::{Command, Direction, RunLength};

/// Map a key to the editor command it triggers.
///
/// Keys without an editor meaning return `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s' | 'S') => Some(Command::Save),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Home => Some(Command::Home),
        KeyCode::Char(c) if c.is_ascii_digit() => RunLength::from_digit(c).map(Command::PlaceRun),
        KeyCode::Char('r' | 'R') => Some(Command::ReverseDirection),
        KeyCode::Char('x' | 'X') => Some(Command::ExchangeColor),
        KeyCode::Char('s' | 'S') => Some(Command::Save),
        KeyCode::Char('t' | 'T') => Some(Command::SetTrue),
        KeyCode::Char('f' | 'F') => Some(Command::SetFalse),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::ClearCell),
        _ => None,
    }
}

impl App {
    pub(super) fn handle_event(&self, event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize", format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Redraw)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::Char('e' | 'E') => Some(Message::ExportPng),
            KeyCode::F(5) => Some(Message::Reload),
            _ => command_for_key(key).map(Message::Edit),
        }
    }

    pub(super) fn view(&self, model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
