//! Rounded-corner outline construction for keyboard PCBs.
//!
//! Board edges, cutouts and wrist rests are traced as chains of straight
//! runs and fillet arcs (or cubic Beziers) between anchor points taken from
//! placed components, then appended to a layer of the board document.

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::TraceConfig;
pub use error::{BoardlineError, Result};
