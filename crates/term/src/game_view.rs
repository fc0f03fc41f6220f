//! GameView: maps a `GameSnapshot` (plus the running turn animation) into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{row_col, GameSnapshot, TurnAnim};
use crate::fb::{CellStyle, FrameBuffer, Rgb, TermCell};
use crate::types::{BoardLayout, Cell, TurnPhase, BOARD_SIZE, COLOR_COUNT, EMPTY};

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

/// Everything drawn in one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardScene<'a> {
    /// Board is the animated render board while a turn plays
    pub snapshot: &'a GameSnapshot,
    pub anim: Option<&'a TurnAnim>,
    /// Keyboard cursor (flat index)
    pub cursor: Option<usize>,
    /// One-line status shown under the panel
    pub status: &'a str,
}

impl<'a> BoardScene<'a> {
    pub fn new(snapshot: &'a GameSnapshot) -> Self {
        Self {
            snapshot,
            anim: None,
            cursor: None,
            status: "",
        }
    }

    pub fn with_anim(mut self, anim: &'a TurnAnim) -> Self {
        self.anim = Some(anim);
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = status;
        self
    }

    fn active_anim(&self) -> Option<&'a TurnAnim> {
        self.anim.filter(|a| a.active())
    }
}

const BG: Rgb = Rgb::new(22, 26, 34);
const GRID_BG: Rgb = Rgb::new(33, 39, 49);
const GRID_BG_ALT: Rgb = Rgb::new(38, 45, 56);
const GRID_LINE: Rgb = Rgb::new(64, 76, 92);
const CURSOR_BG: Rgb = Rgb::new(78, 92, 116);
const SELECTED: Rgb = Rgb::new(245, 245, 245);
const TEXT: Rgb = Rgb::new(218, 230, 247);

const BALL_COLORS: [Rgb; COLOR_COUNT as usize] = [
    Rgb::new(229, 73, 81),
    Rgb::new(255, 156, 71),
    Rgb::new(248, 225, 68),
    Rgb::new(110, 207, 93),
    Rgb::new(83, 186, 230),
    Rgb::new(80, 118, 228),
    Rgb::new(181, 106, 214),
];

/// Color of a ball; `None` for empty or unknown cells.
pub fn ball_rgb(color: Cell) -> Option<Rgb> {
    match color {
        EMPTY => None,
        c => BALL_COLORS.get(c as usize - 1).copied(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BallSize {
    Full,
    Small,
}

/// Terminal renderer for the Lines board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square in common terminal fonts.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_SIZE as u16 * self.cell_w + 2,
            BOARD_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Where the board lands for a given viewport. Used for mouse hit testing.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardLayout {
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render a frame into an existing framebuffer and return the board layout.
    ///
    /// Allocation-free once the framebuffer has the viewport size.
    pub fn render_into(
        &self,
        scene: &BoardScene<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> BoardLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TermCell::new(' ', CellStyle::new(TEXT, BG)));

        let layout = self.layout(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let start_x = layout.origin_x - 1;
        let start_y = layout.origin_y - 1;

        fb.draw_box(start_x, start_y, frame_w, frame_h, CellStyle::new(GRID_LINE, BG));

        let snap = scene.snapshot;
        let anim = scene.active_anim();

        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let (row, col) = row_col(idx);
            let (px, py) = layout.cell_origin(row, col);

            let mut bg = if (row + col) % 2 == 0 { GRID_BG } else { GRID_BG_ALT };
            if scene.cursor == Some(idx) {
                bg = CURSOR_BG;
            }
            let selected = snap.selected == Some(idx) && anim.is_none();
            if selected {
                bg = SELECTED;
            }
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::new(GRID_LINE, bg));

            let color = snap.cell(row, col);
            match ball_rgb(color) {
                Some(fg) => {
                    let size = match anim.and_then(|a| a.spawn_scale(idx)) {
                        Some(scale) if scale < 0.5 => BallSize::Small,
                        _ => BallSize::Full,
                    };
                    let fg = if selected { fg.lighten(0.25) } else { fg };
                    self.draw_ball(fb, px, py, fg, bg, size, selected);
                }
                None => {
                    let dot = CellStyle::new(GRID_LINE, bg).dim();
                    fb.put_char(px + (self.cell_w - 1) / 2, py + (self.cell_h - 1) / 2, '·', dot);
                }
            }
        }

        if let Some(anim) = anim {
            self.draw_anim(fb, &layout, anim);
        }

        self.draw_side_panel(fb, scene, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h, snap.score);
        }

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &BoardScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_ball(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        fg: Rgb,
        bg: Rgb,
        size: BallSize,
        bold: bool,
    ) {
        let mut style = CellStyle::new(fg, bg);
        if bold {
            style = style.bold();
        }
        match size {
            BallSize::Full => {
                let inset = if self.cell_w >= 3 { 1 } else { 0 };
                fb.fill_rect(px + inset, py, self.cell_w - 2 * inset, self.cell_h, '█', style);
            }
            BallSize::Small => {
                fb.put_char(px + (self.cell_w - 1) / 2, py + (self.cell_h - 1) / 2, '●', style);
            }
        }
    }

    fn draw_anim(&self, fb: &mut FrameBuffer, layout: &BoardLayout, anim: &TurnAnim) {
        match anim.phase() {
            TurnPhase::Move => {
                let Some((a, b, frac)) = anim.move_segment() else {
                    return;
                };
                let Some(fg) = ball_rgb(anim.movement().color) else {
                    return;
                };
                let (ax, ay) = layout.cell_origin(row_col(a).0, row_col(a).1);
                let (bx, by) = layout.cell_origin(row_col(b).0, row_col(b).1);
                let lerp = |from: u16, to: u16| {
                    (from as f32 + (to as f32 - from as f32) * frac).round() as u16
                };
                let (px, py) = (lerp(ax, bx), lerp(ay, by));
                let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or(GRID_BG);
                self.draw_ball(fb, px, py, fg, bg, BallSize::Full, true);
            }
            TurnPhase::Clear => {
                for ball in anim.cleared() {
                    let Some(fg) = ball_rgb(ball.color) else {
                        continue;
                    };
                    let (row, col) = row_col(ball.index);
                    let (px, py) = layout.cell_origin(row, col);
                    let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or(GRID_BG);
                    let inset = if self.cell_w >= 3 { 1 } else { 0 };
                    let style = CellStyle::new(fg.lighten(0.4), bg).dim();
                    fb.fill_rect(px + inset, py, self.cell_w - 2 * inset, self.cell_h, '░', style);
                }
            }
            TurnPhase::Spawn | TurnPhase::None => {}
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &BoardScene<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(TEXT, BG).bold();
        let value = CellStyle::new(TEXT, BG);
        let hint = CellStyle::new(GRID_LINE, BG);
        let snap = scene.snapshot;

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for (i, &color) in snap.next_colors.iter().enumerate() {
            let fg = ball_rgb(color).unwrap_or(GRID_LINE);
            fb.put_char(panel_x + 2 * i as u16, y, '●', CellStyle::new(fg, BG).bold());
        }
        y += 2;

        fb.put_str(panel_x, y, "FREE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.empty_cells, value);
        y += 2;

        if !scene.status.is_empty() {
            fb.put_str(panel_x, y, scene.status, value);
        }
        y += 2;

        for line in ["click/space: select", "arrows/hjkl: cursor", "r: restart", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        score: u32,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
        let mid_y = start_y + frame_h / 2;

        let title = "GAME OVER";
        let x = start_x + frame_w.saturating_sub(title.len() as u16) / 2;
        fb.put_str(x, mid_y.saturating_sub(1), title, style);

        // "score N" centered under the title
        let digits = score.checked_ilog10().unwrap_or(0) as u16 + 1;
        let line_w = 6 + digits;
        let x = start_x + frame_w.saturating_sub(line_w) / 2;
        let after = fb.put_str(x, mid_y, "score ", style);
        fb.put_u32(after, mid_y, score, style);

        let hint = "r: restart";
        let x = start_x + frame_w.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(x, mid_y + 1, hint, CellStyle::new(TEXT, BG));
    }
}

/// Width reserved right of the board for the side panel.
const PANEL_W: u16 = 22;
