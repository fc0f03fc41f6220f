//! Terminal Lines runner (default binary).
//!
//! Mouse or keyboard input, a framebuffer-based renderer and one session
//! stepped every frame with the measured frame time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_lines::core::GameSnapshot;
use tui_lines::input::{handle_key_event, handle_mouse_event, should_quit, BoardCursor, InputCommand};
use tui_lines::session::{write_status, Session, SessionConfig, TurnLog};
use tui_lines::term::{BoardScene, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

/// Frame interval while a turn animates.
const ANIM_FRAME: Duration = Duration::from_millis(16);
/// Input poll interval while idle.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    // Report a bad log path before the terminal switches to raw mode.
    let log = match config.turn_log_path.as_deref() {
        Some(path) => TurnLog::open(path)?,
        None => TurnLog::disabled(),
    };
    let mut session = Session::with_log(config, log);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut cursor = BoardCursor::new();
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut status = String::with_capacity(32);
    let mut last_burst = 0usize;

    let started = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // Input.
        let timeout = if session.is_animating() {
            ANIM_FRAME.saturating_sub(last_frame.elapsed())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let layout = view.layout(Viewport::new(w, h));

            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &layout),
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.force();
                    None
                }
                _ => None,
            };

            if matches!(
                command,
                Some(InputCommand::ClickCell { .. } | InputCommand::ClickCursor | InputCommand::Restart)
            ) {
                last_burst = 0;
            }

            match command {
                Some(InputCommand::ClickCell { row, col }) => {
                    cursor.place(row, col);
                    session.click(row, col);
                }
                Some(InputCommand::ClickCursor) => {
                    session.click(cursor.row() as i32, cursor.col() as i32);
                }
                Some(InputCommand::MoveCursor { d_row, d_col }) => cursor.shift(d_row, d_col),
                Some(InputCommand::Restart) => session.restart_fresh(),
                None => {}
            }
        }

        // Step.
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let out = session.step(dt);
        if let Some(balls) = out.clear_burst.filter(|b| !b.is_empty()) {
            last_burst = balls.len();
        }
        let animating = out.animating;

        write_status(&mut status, session.last_cue(), last_burst);

        // Render.
        session.snapshot_into(&mut snap);
        let fingerprint = snap.fingerprint() ^ (cursor.index() as u64) << 56;
        let now_ms = started.elapsed().as_millis() as u64;
        if !throttle.should_render(now_ms, fingerprint, animating) {
            continue;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut scene = BoardScene::new(&snap)
            .with_cursor(cursor.index())
            .with_status(&status);
        if animating {
            scene = scene.with_anim(session.anim());
        }
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
