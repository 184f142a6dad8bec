//! BoardView: maps engine snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::EngineSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Side panel width in terminal columns
const PANEL_W: u16 = 12;
/// Gap between a board frame and its panel
const PANEL_GAP: u16 = 2;
/// Gap between two boards
const BOARD_GAP: u16 = 4;

/// Renders one board (frame, field, active piece) plus its side panel.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size (field plus border) for a snapshot
    ///
    /// Saturates at `u16::MAX`; anything that large is clipped by the viewport.
    pub fn frame_size(&self, snap: &EngineSnapshot) -> (u16, u16) {
        (
            scaled(snap.cols, self.cell_w).saturating_add(2),
            scaled(snap.rows, self.cell_h).saturating_add(2),
        )
    }

    /// Width of frame plus side panel
    pub fn footprint_width(&self, snap: &EngineSnapshot) -> u16 {
        self.frame_size(snap)
            .0
            .saturating_add(PANEL_GAP + PANEL_W)
    }

    /// Clear `fb` and draw every board side by side, centered.
    ///
    /// `titles` labels the boards in order; missing titles are left blank.
    pub fn render_into(
        &self,
        snaps: &[EngineSnapshot],
        titles: &[&str],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let total_w = snaps
            .iter()
            .map(|s| self.footprint_width(s))
            .fold(0u16, u16::saturating_add)
            .saturating_add(scaled(snaps.len().saturating_sub(1), BOARD_GAP));
        let frame_h = snaps
            .iter()
            .map(|s| self.frame_size(s).1)
            .max()
            .unwrap_or(0);

        let mut x = viewport.width.saturating_sub(total_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        for (i, snap) in snaps.iter().enumerate() {
            self.draw_board(fb, snap, titles.get(i).copied(), x, y);
            x = x
                .saturating_add(self.footprint_width(snap))
                .saturating_add(BOARD_GAP);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snaps: &[EngineSnapshot],
        titles: &[&str],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snaps, titles, viewport, &mut fb);
        fb
    }

    /// Draw one board with its frame's top-left corner at `(x, y)`.
    pub fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &EngineSnapshot,
        title: Option<&str>,
        x: u16,
        y: u16,
    ) {
        let (frame_w, frame_h) = self.frame_size(snap);
        fb.draw_box(x, y, frame_w, frame_h, BORDER);

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell(row, col) {
                    Some(tile) => self.fill_cell(fb, x, y, row, col, '█', tile_style(tile.color())),
                    None => self.fill_cell(fb, x, y, row, col, '·', EMPTY),
                }
            }
        }

        // Active piece; rows above the field are not drawn.
        let style = tile_style(snap.active.kind.color());
        let origin = snap.active.offset;
        for (r, line) in snap.active.shape.iter().enumerate() {
            for (c, &filled) in line.iter().enumerate() {
                let row = origin.row + r as i32;
                let col = origin.col + c as i32;
                let inside =
                    row >= 0 && col >= 0 && (row as usize) < snap.rows && (col as usize) < snap.cols;
                if filled && inside {
                    self.fill_cell(fb, x, y, row as usize, col as usize, '█', style);
                }
            }
        }

        self.draw_side_panel(
            fb,
            snap,
            title,
            x.saturating_add(frame_w).saturating_add(PANEL_GAP),
            y,
        );

        if snap.game_over() {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let tx = x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(tx, y.saturating_add(frame_h / 2), text, OVERLAY);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame_x.saturating_add(1).saturating_add(scaled(col, self.cell_w));
        let py = frame_y.saturating_add(1).saturating_add(scaled(row, self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &EngineSnapshot,
        title: Option<&str>,
        x: u16,
        mut y: u16,
    ) {
        if let Some(title) = title {
            fb.put_str(x, y, title, LABEL);
            y = y.saturating_add(2);
        }

        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_u32(x, y.saturating_add(1), snap.score, VALUE);
        y = y.saturating_add(3);

        fb.put_str(x, y, "LINES", LABEL);
        fb.put_u32(x, y.saturating_add(1), snap.lines, VALUE);
        y = y.saturating_add(3);

        fb.put_str(x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        let style = tile_style(snap.next.kind.color());
        for (r, line) in snap.next.shape.iter().enumerate() {
            for (c, &filled) in line.iter().enumerate() {
                if filled {
                    let px = x.saturating_add(c as u16 * 2);
                    let py = y.saturating_add(r as u16);
                    fb.put_str(px, py, "██", CellStyle { bg: Rgb::new(0, 0, 0), ..style });
                }
            }
        }
    }
}

/// `count * unit` in terminal cells, saturating at `u16::MAX`
fn scaled(count: usize, unit: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(unit)
}

fn tile_style(color: Rgb) -> CellStyle {
    CellStyle::new(color, FIELD_BG).bold()
}

/// The main menu screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    const LINES: [&'static str; 6] = [
        "TWIN TETRIS",
        "",
        "p  single player",
        "m  two player",
        "",
        "q  quit",
    ];

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let text_w = Self::LINES
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height.saturating_sub(Self::LINES.len() as u16) / 2;

        for (i, line) in Self::LINES.iter().enumerate() {
            let style = if i == 0 { OVERLAY } else { VALUE };
            fb.put_str(x, y + i as u16, line, style);
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Engine, EngineConfig, SequenceSource};
    use crate::types::{Intent, PieceKind, MAX_GRID_SIZE};

    fn engine(kinds: &[PieceKind]) -> Engine {
        Engine::with_source(
            EngineConfig::default(),
            Box::new(SequenceSource::new(kinds.to_vec())),
        )
        .unwrap()
    }

    fn find(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
        (0..fb.height()).find_map(|y| {
            fb.row_text(y)
                .find(needle)
                .map(|byte| (fb.row_text(y)[..byte].chars().count() as u16, y))
        })
    }

    #[test]
    fn single_board_is_framed_and_centered() {
        let snap = engine(&[PieceKind::O]).snapshot();
        let view = BoardView::default();
        let fb = view.render(&[snap.clone()], &[], Viewport::new(80, 24));

        let (frame_w, frame_h) = view.frame_size(&snap);
        assert_eq!((frame_w, frame_h), (22, 22));

        let x = (80 - view.footprint_width(&snap)) / 2;
        assert_eq!(fb.get(x, 1).map(|c| c.ch), Some('┌'));
        assert_eq!(fb.get(x + frame_w - 1, 1 + frame_h - 1).map(|c| c.ch), Some('┘'));
        assert!(find(&fb, "SCORE").is_some());
        assert!(find(&fb, "NEXT").is_some());
        assert!(find(&fb, "GAME OVER").is_none());
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let snap = engine(&[PieceKind::O]).snapshot();
        let view = BoardView::default();
        let mut fb = FrameBuffer::new(60, 24);
        view.draw_board(&mut fb, &snap, None, 0, 0);

        // O at (0,3) covers grid (1,4): two chars per cell, one for the border.
        let cell = fb.get(1 + 4 * 2, 1 + 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PieceKind::O.color());

        let empty = fb.get(1, 1).unwrap();
        assert_eq!(empty.ch, '·');
    }

    #[test]
    fn locked_cells_use_tile_color() {
        let mut engine = engine(&[PieceKind::Z, PieceKind::I]);
        engine.set_intent(Intent::HardDrop, true);
        while engine.pieces_locked() == 0 {
            engine.update();
        }
        let snap = engine.snapshot();
        let view = BoardView::default();
        let mut fb = FrameBuffer::new(60, 24);
        view.draw_board(&mut fb, &snap, None, 0, 0);

        // Z rests with its lower half on row 19, columns 4 and 5.
        let cell = fb.get(1 + 4 * 2, 1 + 19).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, PieceKind::Z.color());
    }

    #[test]
    fn game_over_overlay() {
        let mut snap = engine(&[PieceKind::T]).snapshot();
        snap.running = false;
        let fb = BoardView::default().render(&[snap], &[], Viewport::new(80, 24));
        assert!(find(&fb, "GAME OVER").is_some());
    }

    #[test]
    fn two_boards_sit_side_by_side() {
        let a = engine(&[PieceKind::I]).snapshot();
        let b = engine(&[PieceKind::J]).snapshot();
        let fb = BoardView::default().render(
            &[a, b],
            &["PLAYER 1", "PLAYER 2"],
            Viewport::new(100, 24),
        );

        let (x1, y1) = find(&fb, "PLAYER 1").unwrap();
        let (x2, y2) = find(&fb, "PLAYER 2").unwrap();
        assert_eq!(y1, y2);
        assert!(x2 > x1 + 22);

        let corners = fb.row_text(y1).matches('┌').count();
        assert_eq!(corners, 2);
    }

    #[test]
    fn oversized_boards_saturate_instead_of_overflowing() {
        let mut snap = engine(&[PieceKind::T]).snapshot();
        snap.cols = 40_000;
        let view = BoardView::new(2, 1);
        assert_eq!(view.frame_size(&snap).0, u16::MAX);
        assert_eq!(view.footprint_width(&snap), u16::MAX);
        assert_eq!(view.frame_size(&snap).1, 22);
    }

    #[test]
    fn largest_grid_renders_clipped() {
        let config = EngineConfig::default().with_dimensions(MAX_GRID_SIZE, MAX_GRID_SIZE);
        let snap = Engine::with_config(config).unwrap().snapshot();
        let fb = BoardView::default().render(&[snap.clone(), snap], &[], Viewport::new(80, 24));
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some('┌'));
    }

    #[test]
    fn menu_lists_modes() {
        let fb = MenuView.render(Viewport::new(40, 12));
        assert!(find(&fb, "TWIN TETRIS").is_some());
        assert!(find(&fb, "single player").is_some());
        assert!(find(&fb, "two player").is_some());
    }
}
