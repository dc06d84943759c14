use cpim_core::config::Parameters;
use cpim_data::{Census, InitialCondition};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub census: &'a Census,
    pub params: &'a Parameters,
    pub generation: u64,
    pub running: bool,
    pub initialized: bool,
    pub selected_init: InitialCondition,
    pub mean_sweep_ms: Option<f64>,
    pub message: Option<&'a str>,
}

fn fraction_text(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.3}"))
}

impl<'a> StatusWidget<'a> {
    fn run_state(&self) -> (&'static str, Color) {
        if self.census.is_extinct() && self.initialized {
            ("EXTINCT", Color::Red)
        } else if self.running {
            ("RUNNING", Color::Green)
        } else if self.initialized {
            ("STOPPED", Color::Yellow)
        } else {
            ("NOT INITIALIZED", Color::DarkGray)
        }
    }
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Status ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let (state, color) = self.run_state();
        Paragraph::new(format!("{state} | Gen: {}", self.generation))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .render(lines[0], buf);

        let density = self.census.density();
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(density.clamp(0.0, 1.0))
            .label(format!("Density: {density:.3}"))
            .render(lines[1], buf);

        Paragraph::new(format!(
            "Up: {}  Down: {}",
            fraction_text(self.census.up_fraction()),
            fraction_text(self.census.down_fraction())
        ))
        .style(Style::default().fg(Color::Yellow))
        .render(lines[2], buf);

        Paragraph::new(format!(
            "Occupied: {} | Undiff: {}",
            self.census.occupied, self.census.undifferentiated
        ))
        .render(lines[3], buf);

        let p = self.params;
        Paragraph::new(format!(
            "Birth: {:.2}  Death: {:.2}  Diff: {:.2}",
            p.birth_rate, p.death_rate, p.differentiation_rate
        ))
        .render(lines[4], buf);
        Paragraph::new(format!(
            "T: {:.3}  J: {:.2}  B: {:.2}  r: {}",
            p.temperature, p.coupling, p.magnetic_field, p.neighborhood_radius
        ))
        .render(lines[5], buf);

        Paragraph::new(format!(
            "Init: {} ({})",
            self.selected_init.option_number(),
            self.selected_init.label()
        ))
        .render(lines[6], buf);

        let timing = self
            .mean_sweep_ms
            .map_or_else(|| "—".to_string(), |ms| format!("{ms:.2} ms/sweep"));
        Paragraph::new(timing)
            .style(Style::default().fg(Color::DarkGray))
            .render(lines[7], buf);

        if let Some(msg) = self.message {
            Paragraph::new(msg.to_string())
                .style(Style::default().fg(Color::Magenta))
                .render(lines[8], buf);
        }

        Paragraph::new(
            "[i]nit [1-5] option [s]tart [p]ause [e]xport [q]uit\n\
             b/B d/D f/F rates  t/T temp  j/J coupling  m/M field  r radius",
        )
        .style(Style::default().fg(Color::DarkGray))
        .render(lines[10], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_empty_lattice_shows_placeholder_fractions() {
        let census = Census::empty(100);
        let params = Parameters::default();
        let widget = StatusWidget {
            census: &census,
            params: &params,
            generation: 0,
            running: false,
            initialized: false,
            selected_init: InitialCondition::default(),
            mean_sweep_ms: None,
            message: None,
        };
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("NOT INITIALIZED"));
        assert!(row_text(&buf, 3).contains("Up: —"));
    }
}
