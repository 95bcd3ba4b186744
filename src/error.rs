// This module defines the error type shared by every stage of the backend using the thiserror
// crate. EmitError covers the fatal conditions the passes can hit: an opcode with no encoding
// on the selected chip, a pseudo instruction that was never lowered, a format precondition that
// does not hold (offset out of range, more than one literal, a cache bit the generation lacks),
// memory instructions the chip cannot execute, a vertex or fragment shader without a final
// export, a branch that needs relaxation but carries no scratch registers, IR validation
// failures and text front end parse errors. Encoder variants carry the printed instruction or
// program, the others a block index or source line.
// EmitResult<T> is the matching Result alias used throughout the crate.

//! Error types for the shader backend.

use crate::ir::{ChipClass, HwStage};
use thiserror::Error;

/// Main error type for wait insertion and assembly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("Unsupported opcode: {rendered} (on {chip})")]
    UnsupportedOpcode { rendered: String, chip: ChipClass },

    #[error("Pseudo instruction reached the assembler: {rendered}")]
    PseudoInstruction { rendered: String },

    #[error("Cannot encode {rendered}: {reason}")]
    InvalidEncoding { rendered: String, reason: String },

    #[error("Memory instruction not available on {chip}: {rendered}")]
    UnsupportedMemoryOp { rendered: String, chip: ChipClass },

    #[error("Missing export in {stage} shader:\n{program}")]
    MissingExport { stage: HwStage, program: String },

    #[error("Branch in BB{block} is out of range and has no scratch registers for a long jump")]
    BranchOutOfRange { block: u32 },

    #[error("Invalid program: BB{block}, instruction {index}: {reason}")]
    Validation {
        block: u32,
        index: usize,
        reason: String,
    },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Result type alias for backend operations.
pub type EmitResult<T> = Result<T, EmitError>;

impl EmitError {
    pub(crate) fn invalid(instr: &crate::ir::Instruction, reason: impl Into<String>) -> Self {
        EmitError::InvalidEncoding {
            rendered: instr.to_string(),
            reason: reason.into(),
        }
    }
}
