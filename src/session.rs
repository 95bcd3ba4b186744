//! Backend session: runs the passes over programs and keeps statistics.
//!
//! A session owns the [`EmitOptions`] for every program it compiles and
//! accumulates counters across them, so a driver compiling a whole pipeline
//! can print one summary at the end.

use crate::assembler::{emit_program, Binary};
use crate::config::{DebugFlags, EmitOptions};
use crate::error::EmitResult;
use crate::ir::{validate::validate, Program};
use crate::waitcnt::insert_wait_states;
use hashbrown::HashMap;
use std::fmt;

/// Runs validation, wait insertion and assembly.
#[derive(Debug, Default)]
pub struct EmitSession {
    options: EmitOptions,

    /// Session statistics for debugging and tuning.
    stats: SessionStats,
}

impl EmitSession {
    /// Create a new session with the given options.
    pub fn new(options: EmitOptions) -> Self {
        Self {
            options,
            stats: SessionStats::default(),
        }
    }

    /// A session configured from the environment.
    pub fn from_env() -> Self {
        Self::new(EmitOptions::from_env())
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Compile `program` into machine code.
    ///
    /// The program is modified in place: waits are inserted, final exports
    /// marked and block offsets filled in. Nothing is recorded if any step
    /// fails.
    pub fn compile(&mut self, program: &mut Program) -> EmitResult<Binary> {
        if self.options.debug.contains(DebugFlags::VALIDATE_IR) {
            validate(program)?;
        }

        let waits = if self.options.insert_waits {
            let stats = insert_wait_states(program, &self.options)?;
            log::debug!(
                "wait pass: {} block visits, {} waits",
                stats.block_visits,
                stats.waits_emitted
            );
            Some(stats)
        } else {
            None
        };

        let binary = emit_program(program)?;

        self.record_program(program, &binary);
        if let Some(waits) = waits {
            self.stats.block_visits += waits.block_visits;
            self.stats.waits_emitted += waits.waits_emitted;
        }
        Ok(binary)
    }

    fn record_program(&mut self, program: &Program, binary: &Binary) {
        let size = binary.code.len() * 4;
        self.stats.programs_compiled += 1;
        self.stats.total_code_size += size;
        self.stats.largest_program_size = self.stats.largest_program_size.max(size);
        self.stats.long_jumps += binary.stats.long_jumps;
        self.stats.erratum_nops += binary.stats.erratum_nops;

        for instr in program.blocks.iter().flat_map(|block| &block.instructions) {
            self.stats.instructions_emitted += 1;
            *self
                .stats
                .instruction_counts
                .entry(instr.opcode.name())
                .or_insert(0) += 1;
        }
    }

    /// Get session statistics.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

/// Counters accumulated over every program of a session.
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub programs_compiled: usize,

    /// Code size in bytes, including padding and constant data.
    pub total_code_size: usize,

    pub largest_program_size: usize,

    pub instructions_emitted: usize,

    /// Count of each opcode in the final programs.
    pub instruction_counts: HashMap<&'static str, usize>,

    pub waits_emitted: usize,

    pub block_visits: usize,

    pub long_jumps: usize,

    pub erratum_nops: usize,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Emit Session Statistics:")?;
        writeln!(f, "  Programs compiled: {}", self.programs_compiled)?;
        writeln!(f, "  Instructions emitted: {}", self.instructions_emitted)?;
        writeln!(f, "  Total code size: {} bytes", self.total_code_size)?;
        writeln!(f, "  Largest program: {} bytes", self.largest_program_size)?;
        writeln!(
            f,
            "  Waits: {} ({} block visits)",
            self.waits_emitted, self.block_visits
        )?;
        if self.long_jumps + self.erratum_nops > 0 {
            writeln!(
                f,
                "  Long jumps: {}, erratum nops: {}",
                self.long_jumps, self.erratum_nops
            )?;
        }

        if !self.instruction_counts.is_empty() {
            writeln!(f, "  Instruction breakdown:")?;
            let mut sorted: Vec<_> = self.instruction_counts.iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

            for (opcode, count) in sorted.iter().take(10) {
                writeln!(f, "    {}: {}", opcode, count)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmitError;
    use crate::ir::{
        BlockKind, ChipClass, Definition, HwStage, Instruction, Opcode, Operand, PhysReg,
        RegClass,
    };

    fn compute_program() -> Program {
        let mut program = Program::new(ChipClass::Gfx9, HwStage::Cs);
        let b = program.create_block(BlockKind::TOP_LEVEL);
        program.block_mut(b).instructions = vec![
            Instruction::native(
                Opcode::SLoadDword,
                vec![Definition::new(PhysReg::new(4), RegClass::S1)],
                vec![
                    Operand::reg(PhysReg::new(0), RegClass::S2),
                    Operand::c32(0),
                ],
            ),
            Instruction::sop2(
                Opcode::SAddU32,
                vec![Definition::new(PhysReg::new(5), RegClass::S1)],
                vec![
                    Operand::reg(PhysReg::new(4), RegClass::S1),
                    Operand::c32(1),
                ],
            ),
            Instruction::sopp(Opcode::SEndpgm, 0),
        ];
        program
    }

    #[test]
    fn test_session_statistics() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut session = EmitSession::new(EmitOptions::default());

        let binary = session.compile(&mut compute_program()).unwrap();
        assert_eq!(session.stats().waits_emitted, 1);
        session.compile(&mut compute_program()).unwrap();

        let stats = session.stats();
        assert_eq!(stats.programs_compiled, 2);
        assert_eq!(stats.instructions_emitted, 8);
        assert_eq!(stats.instruction_counts["s_waitcnt"], 2);
        assert_eq!(stats.total_code_size, 2 * binary.code.len() * 4);
        assert_eq!(stats.waits_emitted, 2);

        let output = stats.to_string();
        assert!(output.contains("Programs compiled: 2"));
        assert!(output.contains("s_waitcnt: 2"));
    }

    #[test]
    fn test_without_wait_insertion() {
        let mut session = EmitSession::new(EmitOptions {
            insert_waits: false,
            ..EmitOptions::default()
        });
        let mut program = compute_program();
        let binary = session.compile(&mut program).unwrap();
        assert_eq!(program.instruction_count(), 3);
        assert_eq!(binary.exec_size, 4 * 4);
        assert_eq!(session.stats().waits_emitted, 0);
    }

    #[test]
    fn test_validation_failure_records_nothing() {
        let mut session = EmitSession::new(EmitOptions {
            debug: DebugFlags::VALIDATE_IR,
            ..EmitOptions::default()
        });
        let mut program = compute_program();
        program
            .block_mut(0)
            .instructions
            .insert(0, Instruction::branch(Opcode::SBranch, 7, None));
        let err = session.compile(&mut program).unwrap_err();
        assert!(matches!(err, EmitError::Validation { block: 0, index: 0, .. }));
        assert_eq!(session.stats().programs_compiled, 0);
    }
}
