//! Animation driver: the play/pause/restart state machine.
//!
//! [`Driver`] owns the board, the renderer, the drawing surface and the
//! random source. It does not schedule anything itself: the host calls
//! [`Driver::on_frame`] from its animation-frame callback while the driver
//! is playing, and the driver decides whether enough time has passed to
//! advance a generation at the configured frame rate.
//!
//! ```text
//!            play()
//!   Stopped ────────▶ Playing ──┐ on_frame(now): tick when due
//!      ▲                 │   ◀──┘
//!      └──── pause() ────┘
//!      └──── restart() ◀─ (from either state: clear, new board, redraw)
//! ```

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, StepSummary};
use crate::config::{GameConfig, Layout};
use crate::render::{Renderer, Surface};

/// Whether the tick loop is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No generations advance.
    Stopped,
    /// Generations advance on animation frames at the target rate.
    Playing,
}

/// What happened on one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The driver is stopped; the host should stop scheduling frames.
    Idle,
    /// Playing, but the next generation is not due yet.
    Waiting,
    /// A generation was advanced and redrawn.
    Ticked(StepSummary),
}

/// Controller for one game session.
#[derive(Debug)]
pub struct Driver<S, R> {
    state: DriverState,
    board: Board,
    layout: Layout,
    density: f64,
    frame_interval_ms: f64,
    renderer: Renderer,
    surface: S,
    rng: R,
    generation: u64,
    last_tick_ms: Option<f64>,
}

impl<S: Surface, R: Rng> Driver<S, R> {
    /// Create a stopped driver with a freshly randomized board and paint
    /// it onto `surface`.
    pub fn new(config: &GameConfig, layout: Layout, mut surface: S, mut rng: R) -> Self {
        let board = Board::random(layout.dims, config.density, &mut rng);
        let renderer = Renderer::new(layout.cell_size, config.background.clone());
        surface.clear();
        renderer.draw(&board, &mut surface);
        info!(
            rows = layout.dims.rows,
            cols = layout.dims.cols,
            cell_size = layout.cell_size,
            fps = config.fps,
            population = board.population(),
            "Driver initialized"
        );
        Self {
            state: DriverState::Stopped,
            board,
            layout,
            density: config.density,
            frame_interval_ms: config.frame_interval_ms(),
            renderer,
            surface,
            rng,
            generation: 0,
            last_tick_ms: None,
        }
    }

    /// Start the tick loop.
    ///
    /// Returns `true` on the Stopped to Playing transition and `false` if
    /// already playing, so the host never runs two frame loops.
    pub fn play(&mut self) -> bool {
        if self.state == DriverState::Playing {
            return false;
        }
        self.state = DriverState::Playing;
        self.last_tick_ms = None;
        debug!(generation = self.generation, "Playing");
        true
    }

    /// Halt the tick loop.
    ///
    /// Returns `true` on the Playing to Stopped transition.
    pub fn pause(&mut self) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        self.state = DriverState::Stopped;
        debug!(generation = self.generation, "Paused");
        true
    }

    /// Stop, clear the surface and start over with a new random board of
    /// the same dimensions, drawn as generation zero.
    pub fn restart(&mut self) {
        self.state = DriverState::Stopped;
        self.last_tick_ms = None;
        self.surface.clear();
        self.board = Board::random(self.layout.dims, self.density, &mut self.rng);
        self.renderer.draw(&self.board, &mut self.surface);
        self.generation = 0;
        info!(population = self.board.population(), "Board restarted");
    }

    /// Handle one animation frame at host time `now_ms`.
    ///
    /// Advances at most one generation, and only when playing and at least
    /// one frame interval has passed since the previous tick. The first
    /// frame after [`play`](Self::play) always ticks.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameOutcome {
        if self.state == DriverState::Stopped {
            return FrameOutcome::Idle;
        }
        if let Some(last) = self.last_tick_ms {
            if now_ms - last < self.frame_interval_ms {
                return FrameOutcome::Waiting;
            }
        }
        self.last_tick_ms = Some(now_ms);
        FrameOutcome::Ticked(self.tick())
    }

    /// Advance one generation and redraw, regardless of state or timing.
    pub fn tick(&mut self) -> StepSummary {
        let summary = self.board.step();
        self.renderer.draw(&self.board, &mut self.surface);
        self.generation = self.generation.saturating_add(1);
        debug!(
            generation = self.generation,
            births = summary.births,
            deaths = summary.deaths,
            population = summary.population,
            "Tick"
        );
        summary
    }

    /// Current state.
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// Whether the tick loop is running.
    pub fn is_playing(&self) -> bool {
        self.state == DriverState::Playing
    }

    /// Generations advanced since the last restart.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The current board.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Board layout fixed at construction.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// The drawing surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}
