// This module turns a wait-annotated Program into the flat word stream the shader processor
// fetches. emit_program drives the whole job: it marks the final exports of vertex, NGG and
// fragment shaders, walks the blocks in layout order handing every instruction to the per-format
// encoder while recording block start offsets, branch positions and constant address literals,
// then resolves branches (relaxing them to long jumps where the 16-bit displacement runs out and
// working around the GFX10 0x3f branch offset erratum), pads GFX10+ code with s_code_end for the
// instruction prefetcher, patches the constant address literals and finally appends the
// constant pool. AsmContext is the scratch state shared by those steps; insert_code is the only
// way words are spliced into the middle of the stream so every recorded position stays valid.

//! Machine code emission.

mod branch;
mod constaddr;
mod encode;
mod exports;

use crate::error::{EmitError, EmitResult};
use crate::ir::{ChipClass, Instruction, Opcode, OpcodeTable, PhysReg, Program};
use std::fmt;

pub use encode::buffer_format;

/// Counters describing what the assembler had to do beyond plain encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub branches: usize,
    pub long_jumps: usize,
    /// `s_nop`s inserted after branches hitting the 0x3f offset erratum.
    pub erratum_nops: usize,
    pub constaddrs: usize,
    pub padding_words: usize,
}

impl fmt::Display for AssemblyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} branches ({} long jumps, {} erratum nops), {} constant addresses, {} padding words",
            self.branches, self.long_jumps, self.erratum_nops, self.constaddrs, self.padding_words
        )
    }
}

/// Output of the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    /// Code words, padding and the constant pool.
    pub code: Vec<u32>,
    /// Size in bytes of the executable part, before padding and constant data.
    pub exec_size: usize,
    /// Final word offset of every block.
    pub block_offsets: Vec<u32>,
    pub stats: AssemblyStats,
}

impl Binary {
    /// Executable words only.
    pub fn exec_words(&self) -> &[u32] {
        &self.code[..self.exec_size / 4]
    }

    /// The whole buffer as little-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.code.iter().flat_map(|word| word.to_le_bytes()).collect()
    }
}

/// A hardware branch waiting for its displacement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BranchInfo {
    /// Word position of the branch (or of the first word of its long jump).
    pub pos: usize,
    pub target: u32,
    pub opcode: Opcode,
    /// SGPR pair a long jump may clobber.
    pub scratch: Option<PhysReg>,
    /// Once relaxed: word count from `pos` up to and including the
    /// displacement literal.
    pub long_jump: Option<usize>,
    /// Block the branch lives in.
    pub block: u32,
}

/// A `s_getpc_b64` + `s_add_u32` pair addressing the constant pool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ConstaddrInfo {
    /// Word position right after `s_getpc_b64`, the value it reads.
    pub getpc_end: usize,
    /// Word position of the literal of `s_add_u32`.
    pub add_literal: usize,
}

pub(crate) struct AsmContext {
    pub chip: ChipClass,
    opcodes: OpcodeTable,
    pub branches: Vec<BranchInfo>,
    pub constaddrs: Vec<ConstaddrInfo>,
    pub block_offsets: Vec<usize>,
    pub block_count: usize,
    pub current_block: u32,
    pub subvector_begin: Option<usize>,
    pub stats: AssemblyStats,
}

impl AsmContext {
    pub fn new(chip: ChipClass, block_count: usize) -> Self {
        Self {
            chip,
            opcodes: OpcodeTable::for_chip(chip),
            branches: Vec::new(),
            constaddrs: Vec::new(),
            block_offsets: Vec::with_capacity(block_count),
            block_count,
            current_block: 0,
            subvector_begin: None,
            stats: AssemblyStats::default(),
        }
    }

    /// Hardware opcode of `instr` on this chip.
    pub fn opcode(&self, instr: &Instruction) -> EmitResult<u32> {
        self.opcodes
            .get(instr.opcode)
            .ok_or_else(|| EmitError::UnsupportedOpcode {
                rendered: instr.to_string(),
                chip: self.chip,
            })
    }

    /// Encode a single instruction outside the main stream.
    pub fn assemble(&mut self, instr: &Instruction) -> EmitResult<Vec<u32>> {
        let mut words = Vec::with_capacity(2);
        encode::emit_instruction(self, &mut words, instr)?;
        Ok(words)
    }

    /// Splice `words` into `out` before `before` and move every recorded
    /// position at or after it.
    pub fn insert_code(&mut self, out: &mut Vec<u32>, before: usize, words: &[u32]) {
        let count = words.len();
        out.splice(before..before, words.iter().copied());

        for offset in &mut self.block_offsets {
            if *offset >= before {
                *offset += count;
            }
        }
        // Branches are recorded in stream order.
        let first = self.branches.partition_point(|branch| branch.pos < before);
        for branch in &mut self.branches[first..] {
            branch.pos += count;
        }
        for constaddr in &mut self.constaddrs {
            if constaddr.getpc_end >= before {
                constaddr.getpc_end += count;
            }
            if constaddr.add_literal >= before {
                constaddr.add_literal += count;
            }
        }
    }
}

/// Encode `program`, resolve its branches and append the constant pool.
///
/// Marks the final exports of the program in place and stores the final
/// block offsets in its blocks.
pub fn emit_program(program: &mut Program) -> EmitResult<Binary> {
    let chip = program.chip_class;
    log::debug!(
        "assembling {} blocks for {} {}",
        program.blocks.len(),
        chip,
        program.stage
    );

    if program.stage.needs_final_export() {
        exports::fix_exports(program)?;
    }

    let mut ctx = AsmContext::new(chip, program.blocks.len());
    let mut code = Vec::with_capacity(program.instruction_count() * 2);
    for block in &program.blocks {
        ctx.block_offsets.push(code.len());
        ctx.current_block = block.index;
        for instr in &block.instructions {
            encode::emit_instruction(&mut ctx, &mut code, instr)?;
        }
    }
    if ctx.subvector_begin.is_some() {
        return Err(EmitError::InvalidEncoding {
            rendered: Opcode::SSubvectorLoopBegin.to_string(),
            reason: "no matching s_subvector_loop_end".to_string(),
        });
    }
    ctx.stats.branches = ctx.branches.len();

    branch::fix_branches(&mut ctx, &mut code)?;

    let exec_size = code.len() * 4;

    if chip >= ChipClass::Gfx10 {
        // Keep the prefetcher inside mapped memory.
        let code_end = ctx.assemble(&Instruction::sopp(Opcode::SCodeEnd, 0))?;
        let final_size = (code.len() + 3 * 16).next_multiple_of(16);
        ctx.stats.padding_words = final_size - code.len();
        code.resize(final_size, code_end[0]);
    }

    constaddr::fix_constaddrs(&mut ctx, &mut code);

    code.extend(program.constant_data.chunks(4).map(|chunk| {
        let mut bytes = [0u8; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        u32::from_le_bytes(bytes)
    }));

    for (block, &offset) in program.blocks.iter_mut().zip(&ctx.block_offsets) {
        block.offset = offset as u32;
    }

    log::debug!(
        "assembled {} words ({} executable bytes): {}",
        code.len(),
        exec_size,
        ctx.stats
    );

    Ok(Binary {
        code,
        exec_size,
        block_offsets: ctx.block_offsets.iter().map(|&o| o as u32).collect(),
        stats: ctx.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BlockKind, HwStage};

    fn constaddr_program(chip: ChipClass) -> Program {
        let mut program = Program::new(chip, HwStage::Cs);
        let b = program.create_block(BlockKind::TOP_LEVEL);
        program.block_mut(b).instructions = vec![
            Instruction::constaddr(PhysReg::new(0), 8),
            Instruction::sopp(Opcode::SEndpgm, 0),
        ];
        program.constant_data = vec![1, 2, 3, 4, 5, 6];
        program
    }

    #[test]
    fn test_constaddr_gfx9() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut program = constaddr_program(ChipClass::Gfx9);
        let binary = emit_program(&mut program).unwrap();

        assert_eq!(binary.exec_size, 20);
        assert_eq!(binary.code[0], 0xbe80_1c00);
        assert_eq!(binary.code[1], 0x8000_ff00);
        // Five code words after the getpc at word 0, plus the requested offset.
        assert_eq!(binary.code[2], 4 * 4 + 8);
        assert_eq!(binary.code[3], 0x8201_8001);
        assert_eq!(binary.code[4], 0xbf81_0000);
        assert_eq!(&binary.code[5..], &[0x0403_0201, 0x0000_0605]);
        assert_eq!(binary.stats.constaddrs, 1);
    }

    #[test]
    fn test_code_end_padding_gfx10() {
        let mut program = constaddr_program(ChipClass::Gfx10);
        let binary = emit_program(&mut program).unwrap();

        assert_eq!(binary.exec_size, 20);
        assert_eq!(binary.stats.padding_words, 64 - 5);
        assert!(binary.code[5..64].iter().all(|&w| w == 0xbf9f_0000));
        assert_eq!(binary.code[2], 63 * 4 + 8);
        assert_eq!(binary.code.len(), 66);
        assert_eq!(binary.exec_words().len(), 5);
    }

    #[test]
    fn test_insert_code_moves_positions() {
        let mut ctx = AsmContext::new(ChipClass::Gfx9, 3);
        ctx.block_offsets = vec![0, 4, 9];
        ctx.branches.push(BranchInfo {
            pos: 3,
            target: 2,
            opcode: Opcode::SBranch,
            scratch: None,
            long_jump: None,
            block: 0,
        });
        ctx.branches.push(BranchInfo {
            pos: 8,
            target: 0,
            opcode: Opcode::SBranch,
            scratch: None,
            long_jump: None,
            block: 1,
        });
        ctx.constaddrs.push(ConstaddrInfo {
            getpc_end: 5,
            add_literal: 6,
        });
        let mut out = vec![0; 10];
        ctx.insert_code(&mut out, 4, &[7, 7]);

        assert_eq!(out.len(), 12);
        assert_eq!(&out[4..6], &[7, 7]);
        assert_eq!(ctx.block_offsets, vec![0, 6, 11]);
        assert_eq!(ctx.branches[0].pos, 3);
        assert_eq!(ctx.branches[1].pos, 10);
        assert_eq!(ctx.constaddrs[0].getpc_end, 7);
        assert_eq!(ctx.constaddrs[0].add_literal, 8);
    }
}
