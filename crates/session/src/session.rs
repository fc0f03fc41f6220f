//! Session: one player's game plus the turn animation in front of it.
//!
//! Frame loop contract:
//!
//! 1. feed clicks with [`Session::click`] (ignored while a turn animates)
//! 2. call [`Session::step`] once per frame with the elapsed time
//! 3. draw [`Session::snapshot`], which shows the animated board mid-turn

use crate::config::SessionConfig;
use crate::core::{turn, BallAt, Board, Game, GameSnapshot, TurnAnim, TurnClickResult};
use crate::cue::AudioCue;
use crate::turn_log::{LogRecord, TurnLog};

/// What happened during one [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutput<'a> {
    /// Balls to burst into particles; set only on the frame the move lands
    pub clear_burst: Option<&'a [BallAt]>,
    /// A turn is still playing after this step
    pub animating: bool,
}

#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    game: Game,
    anim: TurnAnim,
    /// Board shown to the player; trails the game board while a turn animates
    render: Board,
    last_click: TurnClickResult,
    last_cue: Option<AudioCue>,
    log: TurnLog,
}

impl Session {
    /// New session. A turn log path that cannot be opened leaves logging off.
    pub fn new(config: SessionConfig) -> Self {
        let log = config
            .turn_log_path
            .as_deref()
            .and_then(|path| TurnLog::open(path).ok())
            .unwrap_or_else(TurnLog::disabled);
        Self::with_log(config, log)
    }

    /// New session writing turns to `log`.
    pub fn with_log(config: SessionConfig, log: TurnLog) -> Self {
        let anim = TurnAnim::with_durations(config.move_secs, config.clear_secs, config.spawn_secs);
        let game = Game::new(config.game_seed());
        let render = *game.board();
        let mut session = Self {
            config,
            game,
            anim,
            render,
            last_click: TurnClickResult::default(),
            last_cue: None,
            log,
        };
        session.log_restart();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn anim(&self) -> &TurnAnim {
        &self.anim
    }

    /// Board as currently shown
    pub fn render_board(&self) -> &Board {
        &self.render
    }

    pub fn is_animating(&self) -> bool {
        self.anim.active()
    }

    /// Cue of the most recent click or restart
    pub fn last_cue(&self) -> Option<AudioCue> {
        self.last_cue
    }

    pub fn turn_log_enabled(&self) -> bool {
        self.log.is_enabled()
    }

    /// Click the board cell at (row, col).
    ///
    /// Returns `None`, leaving the game untouched, while a turn is animating.
    pub fn click(&mut self, row: i32, col: i32) -> Option<&TurnClickResult> {
        if self.anim.active() {
            return None;
        }

        turn::click_into(&mut self.game, row, col, &mut self.last_click);
        let report = self.game.last_turn();

        if let Some(cue) = AudioCue::for_click(&self.last_click, report) {
            self.last_cue = Some(cue);
        }

        if self.last_click.has_move_animation {
            let r = &self.last_click;
            self.anim
                .start(&r.before_board, self.game.board(), r.from, r.to, &r.path);
            self.anim.begin_render(&mut self.render);

            let record = LogRecord::turn(
                r,
                report,
                self.game.empty_count(),
                self.game.game_over(),
            );
            self.log.record(&record);
        } else {
            self.render = *self.game.board();
        }

        Some(&self.last_click)
    }

    /// Advance the animation by `dt` seconds, clamped to `[0, max_frame_dt]`.
    pub fn step(&mut self, dt: f32) -> StepOutput<'_> {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_frame_dt)
        } else {
            0.0
        };

        let burst = self.anim.update(dt, &mut self.render);
        if !self.anim.active() {
            self.render = *self.game.board();
        }

        StepOutput {
            clear_burst: burst.then(|| self.anim.cleared()),
            animating: self.anim.active(),
        }
    }

    /// Start over with `seed`. A running animation is dropped immediately.
    pub fn restart(&mut self, seed: u32) {
        self.game.init(seed);
        self.anim.reset();
        self.render = *self.game.board();
        self.last_click.clear();
        self.last_cue = Some(AudioCue::Restart);
        self.log_restart();
    }

    /// Start over with the configured seed (or the clock).
    pub fn restart_fresh(&mut self) {
        let seed = self.config.game_seed();
        self.restart(seed);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        if self.anim.active() {
            self.render.write_grid(&mut out.board);
            out.board_hash = self.render.fingerprint();
            out.empty_cells = self.render.empty_count() as u32;
        }
    }

    /// Renderer view: the animated board mid-turn, the live board otherwise.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn log_restart(&mut self) {
        self.log.record(&LogRecord::Restart {
            seed: self.game.seed(),
            empty_cells: self.game.empty_count(),
        });
    }
}
