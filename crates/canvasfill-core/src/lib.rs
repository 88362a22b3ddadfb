//! # Canvasfill Core
//!
//! Host-facing contracts for the canvas fill pipeline:
//!
//! - **Configuration**: the fill method and prompt threaded explicitly
//!   through every region-builder and dispatcher call
//! - **Errors**: the synthesis error taxonomy (recoverable, cancelled,
//!   fatal) using `thiserror`
//! - **Capabilities**: the three small typed traits the host implements
//!   (selection, synthesis, history)
//!
//! The geometry crates stay side-effect free; everything user-visible or
//! host-coupled goes through the types defined here.

pub mod capability;
pub mod config;
pub mod error;

pub use capability::{HistoryCapability, SelectionCapability, SynthesisCapability};
pub use config::{FillConfig, FillMethod};
pub use error::{FillError, Result, SynthesisError};
