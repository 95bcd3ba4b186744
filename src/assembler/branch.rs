// Branch displacement resolution. SOPP branches carry a signed 16-bit word displacement relative
// to the next instruction. Once every block has an offset, fix_branches patches each recorded
// branch; a branch whose target is out of range is rewritten in place into a long jump through
// its scratch SGPR pair (s_getpc_b64, add the byte distance, s_setpc_b64), which grows the stream
// and can push other branches out of range, so the scan restarts until nothing changes. On GFX10
// a branch whose displacement is exactly 0x3f misbehaves; an s_nop after it moves the target
// out of the bad spot.

//! Branch fixup and long-jump relaxation.

use super::{encode, AsmContext, BranchInfo};
use crate::error::{EmitError, EmitResult};
use crate::ir::{ChipClass, Definition, Instruction, Opcode, Operand, PhysReg, RegClass};

/// Displacement the GFX10 branch unit mishandles.
const GFX10_BAD_OFFSET: i64 = 0x3f;

fn displacement(ctx: &AsmContext, branch: &BranchInfo) -> i64 {
    ctx.block_offsets[branch.target as usize] as i64 - branch.pos as i64 - 1
}

pub(super) fn fix_branches(ctx: &mut AsmContext, out: &mut Vec<u32>) -> EmitResult<()> {
    loop {
        if ctx.chip == ChipClass::Gfx10 {
            fix_branches_gfx10(ctx, out)?;
        }

        let mut relaxed = false;
        for index in 0..ctx.branches.len() {
            let branch = ctx.branches[index];
            let target = ctx.block_offsets[branch.target as usize];
            let delta = displacement(ctx, &branch);

            match branch.long_jump {
                Some(literal) => {
                    let after_getpc = branch.pos + literal - 2;
                    let distance = (target as i64 - after_getpc as i64) * 4;
                    out[branch.pos + literal - 1] = distance as u32;
                }
                None if i16::try_from(delta).is_err() => {
                    let backwards = target < branch.pos;
                    let (words, literal) = emit_long_jump(ctx, &branch, backwards)?;
                    log::debug!(
                        "relaxing branch in BB{} to BB{} ({} words away) into a long jump",
                        branch.block,
                        branch.target,
                        delta
                    );
                    out[branch.pos] = words[0];
                    ctx.branches[index].long_jump = Some(literal);
                    ctx.insert_code(out, branch.pos + 1, &words[1..]);
                    ctx.stats.long_jumps += 1;
                    relaxed = true;
                    break;
                }
                None => {
                    out[branch.pos] = (out[branch.pos] & 0xffff_0000) | (delta as i16 as u16 as u32);
                }
            }
        }

        if !relaxed {
            return Ok(());
        }
    }
}

fn fix_branches_gfx10(ctx: &mut AsmContext, out: &mut Vec<u32>) -> EmitResult<()> {
    let nop = ctx.assemble(&Instruction::sopp(Opcode::SNop, 0))?;
    loop {
        let bad = ctx
            .branches
            .iter()
            .find(|branch| {
                branch.long_jump.is_none() && displacement(ctx, branch) == GFX10_BAD_OFFSET
            })
            .map(|branch| branch.pos);
        let Some(pos) = bad else {
            return Ok(());
        };
        log::debug!("inserting s_nop after the branch at word {pos}");
        ctx.insert_code(out, pos + 1, &nop);
        ctx.stats.erratum_nops += 1;
    }
}

fn inverted(opcode: Opcode) -> Option<Opcode> {
    Some(match opcode {
        Opcode::SCbranchScc0 => Opcode::SCbranchScc1,
        Opcode::SCbranchScc1 => Opcode::SCbranchScc0,
        Opcode::SCbranchVccz => Opcode::SCbranchVccnz,
        Opcode::SCbranchVccnz => Opcode::SCbranchVccz,
        Opcode::SCbranchExecz => Opcode::SCbranchExecnz,
        Opcode::SCbranchExecnz => Opcode::SCbranchExecz,
        _ => return None,
    })
}

/// Encode the long-jump replacement of `branch`.
///
/// Returns the words and the word count up to and including the
/// displacement literal, which the fixup loop patches.
fn emit_long_jump(
    ctx: &mut AsmContext,
    branch: &BranchInfo,
    backwards: bool,
) -> EmitResult<(Vec<u32>, usize)> {
    let scratch = branch
        .scratch
        .ok_or(EmitError::BranchOutOfRange { block: branch.block })?;
    let lo = scratch;
    let hi = scratch.offset(1);
    let s1 = |reg: PhysReg| Definition::new(reg, RegClass::S1);
    let op = |reg: PhysReg| Operand::reg(reg, RegClass::S1);

    let mut sequence = Vec::with_capacity(7);
    if branch.opcode != Opcode::SBranch {
        let skip = inverted(branch.opcode).ok_or(EmitError::BranchOutOfRange {
            block: branch.block,
        })?;
        // Skip the remaining seven words when the condition is false.
        sequence.push(Instruction::sopp(skip, 7));
    }
    // The new PC, with SCC stashed in bit 0 by the carry-in.
    sequence.push(Instruction::sop1(
        Opcode::SGetpcB64,
        vec![Definition::new(scratch, RegClass::S2)],
        Vec::new(),
    ));
    sequence.push(Instruction::sop2(
        Opcode::SAddcU32,
        vec![s1(lo)],
        vec![op(lo), Operand::literal(0)],
    ));
    let literal_at = sequence.len();
    sequence.push(Instruction::sop2(
        Opcode::SAddcU32,
        vec![s1(hi)],
        vec![op(hi), Operand::c32(if backwards { u32::MAX } else { 0 })],
    ));
    // Restore SCC and clear bit 0 again.
    sequence.push(Instruction::sopc(
        Opcode::SBitcmp1B32,
        vec![op(lo), Operand::zero()],
    ));
    sequence.push(Instruction::sop1(
        Opcode::SBitset0B32,
        vec![s1(lo)],
        vec![Operand::zero()],
    ));
    sequence.push(Instruction::sop1(
        Opcode::SSetpcB64,
        Vec::new(),
        vec![Operand::reg(scratch, RegClass::S2)],
    ));

    let mut words = Vec::with_capacity(8);
    let mut literal = 0;
    for (index, instr) in sequence.iter().enumerate() {
        if index == literal_at {
            literal = words.len();
        }
        encode::emit_instruction(ctx, &mut words, instr)?;
    }
    Ok((words, literal))
}
