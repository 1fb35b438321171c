use crate::app::{Model, ToastLevel};
use crate::editor::Command;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Apply an editor command
    Edit(Command),

    // File
    /// Write the grid to the PNG export path
    ExportPng,
    /// Reload the field file from disk
    Reload,

    // Help
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// Saving, exporting and reloading happen afterwards in the side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(msg, Message::Quit | Message::Edit(Command::Save)) {
        model.quit_confirmed = false;
    }
    if !matches!(msg, Message::Reload) {
        model.reload_confirmed = false;
    }

    match msg {
        Message::Edit(command) => {
            tracing::debug!(?command, "apply");
            if model.editor.apply(command) {
                model.dirty = true;
            }
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
        }
        Message::Quit => {
            if model.dirty && !model.quit_confirmed {
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes! Press q again to quit, or s to save",
                );
                model.quit_confirmed = true;
            } else {
                model.should_quit = true;
            }
        }
        // ExportPng/Reload: handled in effects (side effect)
        // Redraw: no state change needed
        Message::ExportPng | Message::Reload | Message::Redraw => {}
    }

    model
}
