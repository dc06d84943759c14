use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use cpim_tui::{LatticeWidget, StatusWidget};

use crate::app::state::App;

/// Width of the status column.
const STATUS_WIDTH: u16 = 46;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(STATUS_WIDTH)])
            .split(f.area());

        let sim = &self.controller.simulation;
        let snapshot = sim.snapshot();
        f.render_widget(LatticeWidget::new(&snapshot), chunks[0]);

        let status = StatusWidget {
            census: sim.census(),
            params: sim.params(),
            generation: sim.generation(),
            running: self.controller.is_running(),
            initialized: sim.is_initialized(),
            selected_init: self.selected_init,
            mean_sweep_ms: self
                .metrics
                .mean_sweep_duration()
                .map(|d| d.as_secs_f64() * 1000.0),
            message: self.message.as_deref(),
        };
        f.render_widget(status, chunks[1]);
    }
}
