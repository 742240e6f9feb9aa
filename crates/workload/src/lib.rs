//! TPC-C transaction mix and input generation.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐    one draw     ┌──────────────────────┐
//! │ TransactionMix │ ──────────────▶ │ TransactionType      │
//! └────────────────┘                 └──────────┬───────────┘
//!                                               │
//!            ScaleParameters + GeneratorConstants + RNG
//!                                               ▼
//!                                    ┌──────────────────────┐
//!                                    │ policies::generate_* │
//!                                    └──────────┬───────────┘
//!                                               ▼
//!                                       TransactionInput
//! ```
//!
//! All randomness comes from the RNG passed in, so a seeded RNG reproduces
//! the same stream of inputs (apart from wall-clock timestamps).

pub mod constants;
pub mod last_name;
pub mod mix;
pub mod policies;
pub mod random;

mod generator;

pub use constants::{ConstantsError, GeneratorConstants, IdDistribution};
pub use generator::{TpccWorkload, WorkloadGenerator};
pub use mix::TransactionMix;
