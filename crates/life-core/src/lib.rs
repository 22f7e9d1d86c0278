//! Board, rule engine, animation driver and renderer for the Life
//! simulation.
//!
//! This crate is host-agnostic and builds for both native targets and
//! `wasm32-unknown-unknown`. The browser bindings live in `life-web`.
//!
//! # Modules
//!
//! - [`cell`] -- [`Cell`] and [`Position`], with neighbor lists fixed at
//!   construction.
//! - [`board`] -- the fixed-size [`Board`] and its two-phase generation
//!   step.
//! - [`rule`] -- the B3/S23 transition rule.
//! - [`driver`] -- the play/pause/restart [`Driver`] state machine.
//! - [`render`] -- the [`Renderer`] and the [`Surface`] it paints on.
//! - [`config`] -- [`GameConfig`] and canvas [`Layout`].
//!
//! [`Cell`]: cell::Cell
//! [`Position`]: cell::Position
//! [`Board`]: board::Board
//! [`Driver`]: driver::Driver
//! [`Renderer`]: render::Renderer
//! [`Surface`]: render::Surface
//! [`GameConfig`]: config::GameConfig
//! [`Layout`]: config::Layout

pub mod board;
pub mod cell;
pub mod config;
pub mod driver;
pub mod render;
pub mod rule;

pub use board::{Board, Dimensions, StepSummary};
pub use cell::{Cell, Position};
pub use config::{ConfigError, GameConfig, Layout};
pub use driver::{Driver, DriverState, FrameOutcome};
pub use render::{Rect, Renderer, Rgb, Surface};
