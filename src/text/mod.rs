//! Text front end.
//!
//! Reads programs in the form printed by the `Display` impls in
//! [`crate::ir::print`], so a dumped program can be edited and fed back to
//! the backend.
//!
//! ```text
//! ; comments run to the end of the line
//! .chip gfx9
//! .stage fs
//! .constdata 0102030405
//! BB0: kind:top_level+export_end
//!     v0 = v_interp_mov_f32 2 attr:0 chan:1
//!     exp v0, v0, v0, v0 en:0xf dest:0
//!     s_endpgm
//! ```
//!
//! Header directives (`.chip`, `.stage`, `.wave`, `.workgroup`, `.wgp`,
//! `.early_rast`, `.vs_input`, `.constdata`) must come before the first
//! block; `.chip` and `.stage` are required.

mod parser;

use crate::error::EmitResult;
use crate::ir::{Instruction, Program};

/// Parse a whole program.
pub fn parse_program(text: &str) -> EmitResult<Program> {
    parser::parse(text)
}

/// Parse a single instruction line.
pub fn parse_instruction(line: &str) -> EmitResult<Instruction> {
    parser::parse_instruction(line.trim())
        .map_err(|message| crate::error::EmitError::Parse { line: 1, message })
}
