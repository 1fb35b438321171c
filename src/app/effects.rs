use crate::app::{App, Message, Model, ToastLevel};
use crate::editor::Command;

impl App {
    /// Perform the I/O a message asks for.
    ///
    /// Runs on the event thread right after [`update`](crate::app::update),
    /// so a save or export has finished before the next key is read.
    pub(super) fn handle_message_side_effects(&self, model: &mut Model, msg: &Message) {
        match msg {
            Message::Edit(Command::Save) => match model.save_to_disk() {
                Ok(()) => {
                    tracing::info!(path = %model.file_path.display(), "saved field");
                    model.show_toast(ToastLevel::Info, format!("Saved {}", model.display_name()));
                }
                Err(err) => {
                    tracing::warn!(%err, "save failed");
                    crate::perf::log_event("save.error", err.to_string());
                    // Edits are still unsaved, so the next quit must warn again
                    model.quit_confirmed = false;
                    model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                }
            },
            Message::ExportPng => match model.export_png() {
                Ok(()) => {
                    tracing::info!(path = %model.png_path.display(), "exported png");
                    let name = model
                        .png_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    model.show_toast(ToastLevel::Info, format!("Exported {name}"));
                }
                Err(err) => {
                    tracing::warn!(%err, "export failed");
                    crate::perf::log_event("export.error", err.to_string());
                    model.show_toast(ToastLevel::Error, format!("Export failed: {err}"));
                }
            },
            Message::Reload => {
                if model.dirty && !model.reload_confirmed {
                    model.show_toast(
                        ToastLevel::Warning,
                        "Unsaved changes! Press F5 again to discard them and reload",
                    );
                    model.reload_confirmed = true;
                    return;
                }
                model.reload_confirmed = false;
                match model.reload_from_disk() {
                    Ok(()) => model.show_toast(ToastLevel::Info, "Reloaded"),
                    Err(err) => {
                        tracing::warn!(%err, "reload failed");
                        crate::perf::log_event("reload.error", err.to_string());
                        model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
                    }
                }
            }
            _ => {}
        }
    }
}
