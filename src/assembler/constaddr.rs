//! Constant pool addressing.
//!
//! `p_constaddr dst, offset` becomes
//!
//! ```text
//! s_getpc_b64 dst
//! s_add_u32   dst.lo, dst.lo, <literal>
//! s_addc_u32  dst.hi, dst.hi, 0
//! ```
//!
//! The literal starts out as `offset` and gets the distance from the PC read
//! to the constant pool added once the final code size is known.

use super::{encode, AsmContext, ConstaddrInfo};
use crate::error::{EmitError, EmitResult};
use crate::ir::{Definition, Instruction, Opcode, Operand, RegClass};

pub(super) fn emit_constaddr(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
) -> EmitResult<()> {
    let dest = instr
        .definitions
        .first()
        .map(|def| def.phys_reg())
        .ok_or_else(|| EmitError::invalid(instr, "missing destination"))?;
    let offset = instr
        .operands
        .first()
        .and_then(Operand::constant_value)
        .ok_or_else(|| EmitError::invalid(instr, "offset must be a constant"))?;
    let lo = dest;
    let hi = dest.offset(1);

    encode::emit_instruction(
        ctx,
        out,
        &Instruction::sop1(
            Opcode::SGetpcB64,
            vec![Definition::new(dest, RegClass::S2)],
            Vec::new(),
        ),
    )?;
    let getpc_end = out.len();
    encode::emit_instruction(
        ctx,
        out,
        &Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(lo, RegClass::S1)],
            vec![Operand::reg(lo, RegClass::S1), Operand::literal(offset)],
        ),
    )?;
    ctx.constaddrs.push(ConstaddrInfo {
        getpc_end,
        add_literal: out.len() - 1,
    });
    encode::emit_instruction(
        ctx,
        out,
        &Instruction::sop2(
            Opcode::SAddcU32,
            vec![Definition::new(hi, RegClass::S1)],
            vec![Operand::reg(hi, RegClass::S1), Operand::zero()],
        ),
    )
}

/// Add the distance to the constant pool, which starts right after `out`.
pub(super) fn fix_constaddrs(ctx: &mut AsmContext, out: &mut [u32]) {
    let pool = out.len();
    for constaddr in &ctx.constaddrs {
        let distance = ((pool - constaddr.getpc_end) * 4) as u32;
        out[constaddr.add_literal] = out[constaddr.add_literal].wrapping_add(distance);
        log::debug!(
            "constant pool address at word {}: +{} bytes",
            constaddr.add_literal,
            distance
        );
    }
    ctx.stats.constaddrs = ctx.constaddrs.len();
}
