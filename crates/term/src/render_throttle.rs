//! Frame pacing for the terminal loop.

/// Default refresh interval for frames where nothing moves.
pub const STATIC_REFRESH_MS: u64 = 250;

/// Decides when a frame is worth flushing to the terminal.
///
/// Animated frames always render. Static frames render when the scene
/// fingerprint changes, and otherwise at most once per refresh interval.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    static_refresh_ms: u64,
    last_render_ms: Option<u64>,
    last_fingerprint: u64,
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REFRESH_MS)
    }
}

impl RenderThrottle {
    pub fn new(static_refresh_ms: u64) -> Self {
        Self {
            static_refresh_ms,
            last_render_ms: None,
            last_fingerprint: 0,
        }
    }

    /// Render on the next call no matter what (resize, restart).
    pub fn force(&mut self) {
        self.last_render_ms = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = match self.last_render_ms {
            None => true,
            Some(_) if animating => true,
            Some(_) if fingerprint != self.last_fingerprint => true,
            Some(last) => now_ms.saturating_sub(last) >= self.static_refresh_ms,
        };
        if due {
            self.last_render_ms = Some(now_ms);
            self.last_fingerprint = fingerprint;
        }
        due
    }
}
