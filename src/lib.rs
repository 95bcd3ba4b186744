//! gcn-codegen - the final stages of a GCN/RDNA shader backend.
//!
//! Takes a register-allocated program, inserts the `s_waitcnt` instructions
//! the asynchronous memory counters require and assembles the result into
//! machine words, resolving branches and constant pool addresses.
//!
//! # Primary Usage
//!
//! ```ignore
//! use gcn_codegen::{text, EmitOptions, EmitSession};
//!
//! let mut program = text::parse_program(source)?;
//! let mut session = EmitSession::new(EmitOptions::from_env());
//! let binary = session.compile(&mut program)?;
//! ```
//!
//! # Architecture
//!
//! - [`ir`] - program representation, opcode tables, printer and validator
//! - [`waitcnt`] - wait-count insertion
//! - [`assembler`] - encoding, branch and constant address fixups
//! - [`text`] - parser for the printed program form
//! - [`session`] - runs the passes and collects statistics

pub mod assembler;
pub mod config;
pub mod error;
pub mod ir;
pub mod session;
pub mod text;
pub mod waitcnt;

pub use assembler::{emit_program, AssemblyStats, Binary};
pub use config::{DebugFlags, EmitOptions};
pub use error::{EmitError, EmitResult};
pub use ir::{ChipClass, HwStage, Program};
pub use session::{EmitSession, SessionStats};
pub use waitcnt::{insert_wait_states, WaitcntStats};
