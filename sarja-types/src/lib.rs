//! sarja-types
//!
//! Shared data-transfer types for the sarja ecosystem.
//!
//! - `error`: the unified [`SarjaError`] taxonomy.
//! - `enums`: the wire enums ([`Frequency`], [`Transform`], [`FillPolicy`])
//!   with their stable codes.
//! - `config`: engine configuration ([`SarjaConfig`]).
#![warn(missing_docs)]

/// Engine configuration types.
pub mod config;
/// Wire enums and their stable codes.
pub mod enums;
/// The unified error taxonomy.
pub mod error;

pub use config::SarjaConfig;
pub use enums::{FillPolicy, Frequency, Transform};
pub use error::SarjaError;
