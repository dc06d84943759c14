use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use cpim_core::palette::SitePalette;
use cpim_core::snapshot::LatticeSnapshot;
use cpim_data::SiteState;

/// Draws a lattice snapshot with upper-half blocks: each terminal cell
/// shows two lattice rows, the top one as foreground and the bottom one as
/// background. The lattice is resampled to the available area.
pub struct LatticeWidget<'a> {
    snapshot: &'a LatticeSnapshot,
}

impl<'a> LatticeWidget<'a> {
    pub fn new(snapshot: &'a LatticeSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn color_for(state: SiteState) -> Color {
        let [r, g, b] = state.rgb();
        Color::Rgb(r, g, b)
    }

    /// Lattice coordinate sampled for screen column `col` and pixel row
    /// `row` of an area `cols` wide and `rows` tall (in lattice pixels).
    pub fn sample_coords(
        snapshot: &LatticeSnapshot,
        col: u16,
        row: u16,
        cols: u16,
        rows: u16,
    ) -> (usize, usize) {
        let x = (col as usize * snapshot.width) / cols.max(1) as usize;
        let y = (row as usize * snapshot.height) / rows.max(1) as usize;
        (x.min(snapshot.width - 1), y.min(snapshot.height - 1))
    }
}

impl<'a> Widget for LatticeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " Lattice {}x{} ",
            self.snapshot.width, self.snapshot.height
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 || self.snapshot.cells.is_empty() {
            return;
        }

        let pixel_rows = inner.height * 2;
        for cy in 0..inner.height {
            for cx in 0..inner.width {
                let (tx, ty) =
                    Self::sample_coords(self.snapshot, cx, cy * 2, inner.width, pixel_rows);
                let (bx, by) =
                    Self::sample_coords(self.snapshot, cx, cy * 2 + 1, inner.width, pixel_rows);
                let top = Self::color_for(self.snapshot.get(tx, ty));
                let bottom = Self::color_for(self.snapshot.get(bx, by));

                let cell = &mut buf[(inner.x + cx, inner.y + cy)];
                cell.set_symbol("▀").set_fg(top).set_bg(bottom);
            }
        }
    }
}
