//! Static file server for the Life simulation.
//!
//! Serves the HTML entry page at `GET /` and the asset directory (page
//! script, stylesheet and the `life-web` wasm bundle) under
//! `GET /public/*`. There is no other routing and no server-side state.

pub mod config;
pub mod error;
pub mod router;
pub mod server;

pub use config::{ConfigError, LifeConfig, ServerConfig};
pub use error::AppError;
pub use router::build_router;
pub use server::{ServerError, start_server};
