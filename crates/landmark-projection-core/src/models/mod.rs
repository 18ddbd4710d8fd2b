//! Parameter records shared with external parameter storage.
//!
//! Poses and intrinsics are exchanged with solvers as flat 6-element vectors.
//! The slot order is a fixed contract: [`PoseSlot`] and [`IntrinsicsSlot`]
//! name every index so call sites never rely on bare offsets.

mod intrinsics;
mod landmark;
mod pose;

pub use intrinsics::*;
pub use landmark::*;
pub use pose::*;

use thiserror::Error;

/// Errors raised while unpacking flat parameter slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("expected parameter slice of length {expected}, got {got}")]
    WrongLength { expected: usize, got: usize },
}

pub(crate) fn check_len<T>(values: &[T], expected: usize) -> Result<(), SlotError> {
    if values.len() != expected {
        return Err(SlotError::WrongLength {
            expected,
            got: values.len(),
        });
    }
    Ok(())
}
