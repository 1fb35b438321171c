use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::editor::EditorState;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the field file cannot be loaded, the terminal
    /// cannot be initialized, or the event loop hits an I/O failure.
    pub fn run(&self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        // Load before touching the terminal so errors print normally
        let load_scope = crate::perf::scope("app.load");
        let grid = crate::codec::load(&self.file_path)
            .with_context(|| format!("Failed to open {}", self.file_path.display()))?;
        drop(load_scope);
        tracing::info!(
            path = %self.file_path.display(),
            width = grid.width(),
            height = grid.height(),
            "loaded field"
        );

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - pixelfield requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = Model::new(
            self.file_path.clone(),
            EditorState::new(grid),
            (size.width, size.height),
        )
        .with_raster(self.raster)
        .with_lookaround(self.lookaround);

        let result = self.event_loop(&mut terminal, &mut model);

        ratatui::restore();

        result
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| self.view(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            // One event at a time: each is applied, its I/O finished and the
            // frame redrawn before the next is read.
            if event::poll(Duration::from_millis(250))?
                && let Some(msg) = self.handle_event(&event::read()?, model)
            {
                crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
                if msg == Message::Redraw {
                    terminal.clear()?;
                }
                let side_msg = msg.clone();
                *model = update(std::mem::take(model), msg);
                self.handle_message_side_effects(model, &side_msg);
                needs_render = true;
            }
        }
        Ok(())
    }
}
