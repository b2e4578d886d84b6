//! Calculation logic for the gross-up engine.
//!
//! This module contains the gross-up computation itself and the batch
//! driver that applies it independently to a collection of rows.

mod batch;
mod gross_up;

pub use batch::compute_batch;
pub use gross_up::compute_gross_up;
