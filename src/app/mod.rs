pub mod headless;
pub mod input;
pub mod render;
pub mod state;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub use headless::RunSummary;
pub use state::App;

use cpim_tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let frame_time = Duration::from_secs_f64(1.0 / self.config.run.target_fps as f64);
        let mut last_sweep = Instant::now();

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            while event::poll(Duration::from_millis(1))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.controller.is_running() && last_sweep.elapsed() >= frame_time {
                self.step();
                last_sweep = Instant::now();
            } else {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }

        if self.controller.is_running() {
            self.dispatch(cpim_core::control::Command::Stop);
        }
        Ok(())
    }
}
