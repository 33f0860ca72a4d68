//! Page ordering for booklet imposition
//!
//! This module computes which source page goes in each printed position:
//! - Signature splitting and nested leaf order
//! - Manual duplex resequencing for printers without a duplex unit

mod duplex;
mod signature;
mod types;

pub use duplex::*;
pub use signature::*;
pub use types::*;
