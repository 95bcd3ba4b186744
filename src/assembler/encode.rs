// This module packs single instructions into machine words. emit_instruction is the entry point:
// it lowers p_constaddr, rejects pseudo instructions and format/opcode mismatches, looks the
// opcode up in the generation table, encodes the format and appends the trailing literal dword
// when an operand needs one. Each format has its own layout function; the bit positions of
// several fields move between GFX6-7, GFX8-9 and GFX10, and a few cache bits or addressing
// modes only exist on some generations, which is reported as InvalidEncoding instead of being
// silently dropped. DPP and SDWA are encoded by re-encoding the VOP1/VOP2/VOPC form with a
// placeholder source (250 or 249) and appending the control word; VOP3 promotes VOP1, VOP2 and
// VINTRP opcodes by the generation-specific offset. SOPP branches are recorded in the AsmContext
// so the branch fixup can patch their displacement once the layout is known.

//! Per-format instruction encoding.

use super::{AsmContext, BranchInfo};
use crate::error::{EmitError, EmitResult};
use crate::ir::{
    BaseFormat, ChipClass, Dpp, Ds, Export, FlatLike, Format, Instruction, Interp, Mimg, Mtbuf,
    Mubuf, Opcode, Operand, PhysReg, RegClass, Sdwa, Smem, Sopk, Sopp, Vop3, Vop3p,
};

/// Encode `instr` at the end of `out`.
pub(crate) fn emit_instruction(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
) -> EmitResult<()> {
    if instr.opcode == Opcode::PConstaddr {
        return super::constaddr::emit_constaddr(ctx, out, instr);
    }
    if instr.format.is_pseudo() {
        return Err(EmitError::PseudoInstruction {
            rendered: instr.to_string(),
        });
    }
    if !instr.format.compatible_with(instr.opcode.base_format()) {
        return Err(EmitError::invalid(
            instr,
            format!("{} cannot be encoded as {}", instr.opcode, instr.format.name()),
        ));
    }

    let opcode = ctx.opcode(instr)?;
    let literal = literal_operand(ctx.chip, instr)?;
    let start = out.len();
    encode(ctx, out, instr, opcode)?;
    if let Some(value) = literal {
        out.push(value);
    }
    log::trace!("{} -> {} words", instr, out.len() - start);
    Ok(())
}

/// The value of the trailing literal dword, if any.
fn literal_operand(chip: ChipClass, instr: &Instruction) -> EmitResult<Option<u32>> {
    // SMEM offsets are encoded in place.
    if matches!(instr.format, Format::Smem(_)) {
        return Ok(None);
    }
    let mut literal = None;
    for value in instr
        .operands
        .iter()
        .filter(|op| op.is_literal())
        .filter_map(Operand::constant_value)
    {
        match literal {
            Some(existing) if existing != value => {
                return Err(EmitError::invalid(instr, "more than one literal operand"));
            }
            _ => literal = Some(value),
        }
    }
    if literal.is_some() && !takes_literal(chip, &instr.format) {
        return Err(EmitError::invalid(
            instr,
            format!("{} cannot take a literal on {}", instr.format.name(), chip),
        ));
    }
    Ok(literal)
}

fn takes_literal(chip: ChipClass, format: &Format) -> bool {
    match format {
        Format::Sop1 | Format::Sop2 | Format::Sopc | Format::Vop1 | Format::Vop2 | Format::Vopc => {
            true
        }
        Format::Vop3(_) | Format::Vop3p(_) => chip >= ChipClass::Gfx10,
        _ => false,
    }
}

fn operand(instr: &Instruction, index: usize) -> EmitResult<&Operand> {
    instr
        .operands
        .get(index)
        .ok_or_else(|| EmitError::invalid(instr, format!("missing operand {index}")))
}

fn src(instr: &Instruction, index: usize) -> EmitResult<u32> {
    operand(instr, index).map(|op| op.phys_reg().reg())
}

fn src_or_zero(instr: &Instruction, index: usize) -> u32 {
    instr.operands.get(index).map_or(0, |op| op.phys_reg().reg())
}

fn dst(instr: &Instruction, index: usize) -> EmitResult<u32> {
    instr
        .definitions
        .get(index)
        .map(|def| def.phys_reg().reg())
        .ok_or_else(|| EmitError::invalid(instr, format!("missing definition {index}")))
}

fn dst_or_zero(instr: &Instruction, index: usize) -> u32 {
    instr
        .definitions
        .get(index)
        .map_or(0, |def| def.phys_reg().reg())
}

fn bit(flag: bool, shift: u32) -> u32 {
    (flag as u32) << shift
}

fn encode(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
    opcode: u32,
) -> EmitResult<()> {
    let chip = ctx.chip;
    match instr.format {
        Format::Sop2 => out.push(
            0b10 << 30
                | opcode << 23
                | dst_or_zero(instr, 0) << 16
                | src_or_zero(instr, 1) << 8
                | src_or_zero(instr, 0),
        ),
        Format::Sopk(sopk) => sopk_word(ctx, out, instr, sopk, opcode)?,
        Format::Sop1 => {
            let mut opcode = opcode;
            if opcode >= 55 && chip <= ChipClass::Gfx9 {
                opcode -= 4;
            }
            out.push(
                0b1_0111_1101 << 23
                    | dst_or_zero(instr, 0) << 16
                    | opcode << 8
                    | src_or_zero(instr, 0),
            );
        }
        Format::Sopc => out.push(
            0b1_0111_1110 << 23 | opcode << 16 | src_or_zero(instr, 1) << 8 | src_or_zero(instr, 0),
        ),
        Format::Sopp(sopp) => sopp_word(ctx, out, instr, sopp, opcode)?,
        Format::Smem(smem) => smem_words(chip, out, instr, &smem, opcode)?,
        Format::Vop2 => out.push(
            opcode << 25
                | (0xff & dst(instr, 0)?) << 17
                | (0xff & src(instr, 1)?) << 9
                | src(instr, 0)?,
        ),
        Format::Vop1 => out.push(
            0b011_1111 << 25
                | (0xff & dst_or_zero(instr, 0)) << 17
                | opcode << 9
                | src_or_zero(instr, 0),
        ),
        Format::Vopc => out.push(
            0b011_1110 << 25 | opcode << 17 | (0xff & src(instr, 1)?) << 9 | src(instr, 0)?,
        ),
        Format::Vintrp(interp) => vintrp_word(chip, out, instr, &interp, opcode)?,
        Format::Ds(ds) => ds_words(chip, out, instr, &ds, opcode)?,
        Format::Mubuf(mubuf) => mubuf_words(chip, out, instr, &mubuf, opcode)?,
        Format::Mtbuf(mtbuf) => mtbuf_words(chip, out, instr, &mtbuf, opcode)?,
        Format::Mimg(mimg) => mimg_words(chip, out, instr, &mimg, opcode)?,
        Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat) => {
            flat_words(chip, out, instr, &flat, opcode)?
        }
        Format::Exp(exp) => exp_words(chip, out, instr, &exp)?,
        Format::Vop3(vop3) => vop3_words(chip, out, instr, &vop3, opcode)?,
        Format::Vop3p(vop3p) => vop3p_words(chip, out, instr, &vop3p, opcode)?,
        Format::Dpp(dpp) => dpp_words(ctx, out, instr, &dpp, opcode)?,
        Format::Sdwa(sdwa) => sdwa_words(ctx, out, instr, &sdwa, opcode)?,
        Format::Pseudo | Format::PseudoBranch(_) | Format::PseudoBarrier(_) => {
            return Err(EmitError::PseudoInstruction {
                rendered: instr.to_string(),
            });
        }
    }
    Ok(())
}

fn sopk_word(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
    sopk: Sopk,
    opcode: u32,
) -> EmitResult<()> {
    let mut imm = sopk.imm as u32;
    match instr.opcode {
        Opcode::SSubvectorLoopBegin => {
            if ctx.subvector_begin.is_some() {
                return Err(EmitError::invalid(instr, "nested subvector loop"));
            }
            ctx.subvector_begin = Some(out.len());
        }
        Opcode::SSubvectorLoopEnd => {
            let begin = ctx
                .subvector_begin
                .take()
                .ok_or_else(|| EmitError::invalid(instr, "no matching s_subvector_loop_begin"))?;
            // Begin jumps past the end, end jumps back to just after begin.
            let distance = out.len() - begin;
            out[begin] |= distance as u32 & 0xffff;
            imm = (begin as i64 - out.len() as i64) as u16 as u32;
        }
        _ => {}
    }

    let reg = match (instr.definitions.first(), instr.operands.first()) {
        (Some(def), _) if def.phys_reg() != PhysReg::SCC => def.phys_reg().reg(),
        (_, Some(op)) if op.is_reg() && op.phys_reg().reg() <= 127 => op.phys_reg().reg(),
        _ => 0,
    };
    out.push(0b1011 << 28 | opcode << 23 | reg << 16 | imm);
    Ok(())
}

fn sopp_word(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
    sopp: Sopp,
    opcode: u32,
) -> EmitResult<()> {
    if let Some(target) = sopp.block {
        if target as usize >= ctx.block_count {
            return Err(EmitError::invalid(
                instr,
                format!("branch to missing block BB{target}"),
            ));
        }
        ctx.branches.push(BranchInfo {
            pos: out.len(),
            target,
            opcode: instr.opcode,
            scratch: instr.definitions.first().map(|def| def.phys_reg()),
            long_jump: None,
            block: ctx.current_block,
        });
    }
    out.push(0b1_0111_1111 << 23 | opcode << 16 | (sopp.imm & 0xffff));
    Ok(())
}

fn smem_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    smem: &Smem,
    opcode: u32,
) -> EmitResult<()> {
    let is_load = !instr.definitions.is_empty();
    let soe = instr.operands.len() >= if is_load { 3 } else { 4 };
    let sbase = instr.operands.first().map_or(0, |op| op.phys_reg().reg() >> 1);
    let offset = instr.operands.get(1);

    if chip <= ChipClass::Gfx7 {
        let mut word = 0b11000 << 27 | opcode << 22 | dst_or_zero(instr, 0) << 15 | sbase << 9;
        let mut literal = None;
        if let Some(op) = offset {
            match op.constant_value() {
                None => word |= op.phys_reg().reg(),
                // Dword offsets past the 8-bit immediate go into a literal.
                Some(value) if value >= 1024 => {
                    if chip < ChipClass::Gfx7 {
                        return Err(EmitError::invalid(
                            instr,
                            format!("offset {value} needs a literal, which GFX6 lacks"),
                        ));
                    }
                    word |= PhysReg::LITERAL.reg();
                    literal = Some(value >> 2);
                }
                Some(value) => word |= value >> 2 | 1 << 8,
            }
        }
        out.push(word);
        out.extend(literal);
        return Ok(());
    }

    let mut word = if chip <= ChipClass::Gfx9 {
        if smem.dlc {
            return Err(EmitError::invalid(instr, "dlc requires GFX10"));
        }
        0b11_0000 << 26 | bit(smem.nv, 15)
    } else {
        if smem.nv {
            return Err(EmitError::invalid(instr, "nv is not available on GFX10"));
        }
        0b11_1101 << 26 | bit(smem.dlc, 14)
    };
    word |= opcode << 18 | bit(smem.glc, 16);
    if chip <= ChipClass::Gfx9 && offset.is_some_and(Operand::is_constant) {
        word |= 1 << 17;
    }
    if chip == ChipClass::Gfx9 && soe {
        word |= 1 << 14;
    }
    if is_load {
        word |= dst(instr, 0)? << 6;
    } else if instr.operands.len() >= 3 {
        word |= src(instr, 2)? << 6;
    }
    word |= sbase;
    out.push(word);

    let mut imm = 0;
    // GFX10 disables SOFFSET with null, GFX9 with the SOE bit.
    let mut soffset = if chip >= ChipClass::Gfx10 {
        PhysReg::SGPR_NULL.reg()
    } else {
        0
    };
    if let Some(op) = offset {
        match op.constant_value() {
            Some(value) => imm = value,
            None if chip <= ChipClass::Gfx9 => imm = op.phys_reg().reg(),
            None if soe => {
                return Err(EmitError::invalid(instr, "two SGPR offsets"));
            }
            None => soffset = op.phys_reg().reg(),
        }
        if soe {
            if chip < ChipClass::Gfx9 {
                return Err(EmitError::invalid(
                    instr,
                    "SGPR plus immediate offset requires GFX9",
                ));
            }
            let extra = operand(instr, instr.operands.len() - 1)?;
            if extra.is_constant() {
                return Err(EmitError::invalid(instr, "second offset must be an SGPR"));
            }
            soffset = extra.phys_reg().reg();
        }
    }
    if imm > 0xf_ffff {
        return Err(EmitError::invalid(instr, format!("offset {imm} out of range")));
    }
    out.push(imm | soffset << 25);
    Ok(())
}

fn vintrp_word(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    interp: &Interp,
    opcode: u32,
) -> EmitResult<()> {
    let mut word = match chip {
        ChipClass::Gfx8 | ChipClass::Gfx9 => 0b11_0101 << 26,
        _ => 0b11_0010 << 26,
    };
    word |= (0xff & dst(instr, 0)?) << 18;
    word |= opcode << 16;
    word |= (interp.attribute as u32) << 10;
    word |= (interp.component as u32 & 0x3) << 8;
    word |= interp_source(instr)?;
    out.push(word);
    Ok(())
}

/// `v_interp_mov_f32` selects a parameter slot, the others read a VGPR.
fn interp_source(instr: &Instruction) -> EmitResult<u32> {
    let op = operand(instr, 0)?;
    if instr.opcode == Opcode::VInterpMovF32 {
        Ok(op.constant_value().unwrap_or(0) & 0x3)
    } else {
        Ok(0xff & op.phys_reg().reg())
    }
}

fn ds_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    ds: &Ds,
    opcode: u32,
) -> EmitResult<()> {
    let mut word = 0b11_0110 << 26;
    if matches!(chip, ChipClass::Gfx8 | ChipClass::Gfx9) {
        word |= opcode << 17 | bit(ds.gds, 16);
    } else {
        word |= opcode << 18 | bit(ds.gds, 17);
    }
    word |= (ds.offset1 as u32) << 8 | ds.offset0 as u32;
    out.push(word);

    // m0 is implicit.
    let data = |index: usize| {
        instr
            .operands
            .get(index)
            .map(|op| op.phys_reg())
            .filter(|&reg| reg != PhysReg::M0)
            .map_or(0, |reg| 0xff & reg.reg())
    };
    out.push(
        (0xff & dst_or_zero(instr, 0)) << 24
            | data(2) << 16
            | data(1) << 8
            | (0xff & src(instr, 0)?),
    );
    Ok(())
}

/// VDATA of a buffer access: the stored value or the loaded destination.
fn buffer_data(instr: &Instruction) -> EmitResult<u32> {
    match instr.operands.get(3) {
        Some(op) => Ok(op.phys_reg().reg()),
        None => dst(instr, 0),
    }
}

fn mubuf_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    mubuf: &Mubuf,
    opcode: u32,
) -> EmitResult<()> {
    if mubuf.addr64 && chip > ChipClass::Gfx7 {
        return Err(EmitError::invalid(instr, "addr64 requires GFX6-7"));
    }
    if mubuf.dlc && chip < ChipClass::Gfx10 {
        return Err(EmitError::invalid(instr, "dlc requires GFX10"));
    }
    if mubuf.offset > 0xfff {
        return Err(EmitError::invalid(
            instr,
            format!("offset {} out of range", mubuf.offset),
        ));
    }

    let mut word = 0b11_1000 << 26
        | opcode << 18
        | bit(mubuf.lds, 16)
        | bit(mubuf.glc, 14)
        | bit(mubuf.idxen, 13)
        | bit(mubuf.offen, 12)
        | mubuf.offset as u32;
    match chip {
        ChipClass::Gfx6 | ChipClass::Gfx7 => word |= bit(mubuf.addr64, 15),
        ChipClass::Gfx8 | ChipClass::Gfx9 => word |= bit(mubuf.slc, 17),
        _ => word |= bit(mubuf.dlc, 15),
    }
    out.push(word);

    let mut word = src(instr, 2)? << 24
        | bit(mubuf.tfe, 23)
        | (src(instr, 0)? >> 2) << 16
        | (0xff & buffer_data(instr)?) << 8
        | (0xff & src(instr, 1)?);
    if !matches!(chip, ChipClass::Gfx8 | ChipClass::Gfx9) {
        word |= bit(mubuf.slc, 22);
    }
    out.push(word);
    Ok(())
}

/// The image format field of a typed buffer access.
///
/// Up to GFX9 this is `dfmt | nfmt << 4`; GFX10 replaced the pair with one
/// unified format enumeration. `None` if the combination has no GFX10 format.
pub fn buffer_format(chip: ChipClass, dfmt: u8, nfmt: u8) -> Option<u32> {
    if chip < ChipClass::Gfx10 {
        return (dfmt <= 0xf && nfmt <= 0x7).then_some(dfmt as u32 | (nfmt as u32) << 4);
    }
    if dfmt == 0 {
        return Some(0);
    }
    // The UINT entry of each data format; the other number formats sit
    // around it in a fixed order.
    let (uint, has_norm, has_float) = match dfmt {
        1 => (5, true, false),
        2 => (11, true, true),
        3 => (18, true, false),
        4 => (20, false, true),
        5 => (27, true, true),
        6 => (34, true, true),
        7 => (41, true, true),
        8 => (48, true, false),
        9 => (54, true, false),
        10 => (60, true, false),
        11 => (62, false, true),
        12 => (69, true, true),
        13 => (72, false, true),
        14 => (75, false, true),
        _ => return None,
    };
    match nfmt {
        0..=3 if has_norm => Some(uint + nfmt as u32 - 4),
        4 | 5 => Some(uint + nfmt as u32 - 4),
        7 if has_float => Some(uint + 2),
        _ => None,
    }
}

fn mtbuf_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    mtbuf: &Mtbuf,
    opcode: u32,
) -> EmitResult<()> {
    let format = buffer_format(chip, mtbuf.dfmt, mtbuf.nfmt).ok_or_else(|| {
        EmitError::invalid(
            instr,
            format!("no buffer format for dfmt {} nfmt {}", mtbuf.dfmt, mtbuf.nfmt),
        )
    })?;
    if mtbuf.dlc && chip < ChipClass::Gfx10 {
        return Err(EmitError::invalid(instr, "dlc requires GFX10"));
    }
    if mtbuf.offset > 0xfff {
        return Err(EmitError::invalid(
            instr,
            format!("offset {} out of range", mtbuf.offset),
        ));
    }

    // On GFX10 DLC takes the place of the top opcode bit, which moves to
    // the second word.
    let mut word = 0b11_1010 << 26
        | bit(mtbuf.dlc, 15)
        | bit(mtbuf.glc, 14)
        | bit(mtbuf.idxen, 13)
        | bit(mtbuf.offen, 12)
        | mtbuf.offset as u32
        | format << 19;
    if matches!(chip, ChipClass::Gfx8 | ChipClass::Gfx9) {
        word |= opcode << 15;
    } else {
        word |= (opcode & 0x7) << 16;
    }
    out.push(word);

    let mut word = src(instr, 2)? << 24
        | bit(mtbuf.tfe, 23)
        | bit(mtbuf.slc, 22)
        | (src(instr, 0)? >> 2) << 16
        | (0xff & buffer_data(instr)?) << 8
        | (0xff & src(instr, 1)?);
    if chip >= ChipClass::Gfx10 {
        word |= ((opcode & 0x8) >> 3) << 21;
    }
    out.push(word);
    Ok(())
}

fn mimg_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    mimg: &Mimg,
    opcode: u32,
) -> EmitResult<()> {
    if instr.operands.len() < 4 {
        return Err(EmitError::invalid(instr, "image access without an address"));
    }
    let address = &instr.operands[3..];
    let first = address[0].phys_reg();
    let use_nsa = address
        .iter()
        .enumerate()
        .skip(1)
        .any(|(i, op)| op.phys_reg() != first.offset(i as u32));
    let nsa_dwords = if use_nsa {
        if chip < ChipClass::Gfx10 {
            return Err(EmitError::invalid(
                instr,
                "non-contiguous address registers require GFX10",
            ));
        }
        (address.len() - 1).div_ceil(4)
    } else {
        0
    };
    if mimg.d16 && chip < ChipClass::Gfx9 {
        return Err(EmitError::invalid(instr, "d16 requires GFX9"));
    }

    let mut word = 0b11_1100 << 26
        | bit(mimg.slc, 25)
        | (opcode & 0x7f) << 18
        | (opcode >> 7) & 1
        | bit(mimg.lwe, 17)
        | bit(mimg.tfe, 16)
        | bit(mimg.glc, 13)
        | bit(mimg.unrm, 12)
        | (mimg.dmask as u32 & 0xf) << 8;
    if chip <= ChipClass::Gfx9 {
        if mimg.dlc {
            return Err(EmitError::invalid(instr, "dlc requires GFX10"));
        }
        if mimg.r128 {
            return Err(EmitError::invalid(instr, "r128 requires GFX10"));
        }
        word |= bit(mimg.a16, 15) | bit(mimg.da, 14);
    } else {
        // A16 moved to the second word, R128 took its place.
        word |= bit(mimg.r128, 15)
            | (nsa_dwords as u32) << 1
            | (mimg.dim as u32 & 0x7) << 3
            | bit(mimg.dlc, 7);
    }
    out.push(word);

    let mut word = 0xff & first.reg();
    if let Some(def) = instr.definitions.first() {
        word |= (0xff & def.phys_reg().reg()) << 8;
    } else if !instr.operands[2].is_undefined() {
        word |= (0xff & instr.operands[2].phys_reg().reg()) << 8;
    }
    word |= (0x1f & (instr.operands[0].phys_reg().reg() >> 2)) << 16;
    if !instr.operands[1].is_undefined() {
        word |= (0x1f & (instr.operands[1].phys_reg().reg() >> 2)) << 21;
    }
    word |= bit(mimg.d16, 31);
    if chip >= ChipClass::Gfx10 {
        word |= bit(mimg.a16, 30);
    }
    out.push(word);

    if nsa_dwords > 0 {
        let start = out.len();
        out.resize(start + nsa_dwords, 0);
        for (i, op) in address[1..].iter().enumerate() {
            out[start + i / 4] |= (0xff & op.phys_reg().reg()) << (i % 4 * 8);
        }
    }
    Ok(())
}

fn flat_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    flat: &FlatLike,
    opcode: u32,
) -> EmitResult<()> {
    let is_flat = matches!(instr.format, Format::Flat(_));
    let offset = flat.offset as i32;
    let range = match chip {
        ChipClass::Gfx6 | ChipClass::Gfx7 | ChipClass::Gfx8 => 0..=0,
        ChipClass::Gfx9 if is_flat => 0..=4095,
        ChipClass::Gfx9 => -4096..=4095,
        // GFX10 FLAT ignores its offset field.
        _ if is_flat => 0..=0,
        _ => -2048..=2047,
    };
    if !range.contains(&offset) {
        return Err(EmitError::invalid(
            instr,
            format!("offset {offset} out of range on {chip}"),
        ));
    }
    if flat.dlc && chip < ChipClass::Gfx10 {
        return Err(EmitError::invalid(instr, "dlc requires GFX10"));
    }
    if flat.nv && chip >= ChipClass::Gfx10 {
        return Err(EmitError::invalid(instr, "nv is not available on GFX10"));
    }

    let mut word = 0b11_0111 << 26 | opcode << 18;
    word |= if chip <= ChipClass::Gfx9 {
        offset as u32 & 0x1fff
    } else {
        offset as u32 & 0xfff
    };
    match instr.format {
        Format::Scratch(_) => word |= 1 << 14,
        Format::Global(_) => word |= 2 << 14,
        _ => {}
    }
    word |= bit(flat.lds, 13) | bit(flat.glc, 16) | bit(flat.slc, 17);
    if chip >= ChipClass::Gfx10 {
        word |= bit(flat.dlc, 12);
    }
    out.push(word);

    let mut word = 0xff & src(instr, 0)?;
    if let Some(def) = instr.definitions.first() {
        word |= (0xff & def.phys_reg().reg()) << 24;
    }
    if let Some(data) = instr.operands.get(2) {
        word |= (0xff & data.phys_reg().reg()) << 8;
    }
    match instr.operands.get(1).filter(|op| !op.is_undefined()) {
        Some(_) if is_flat => {
            return Err(EmitError::invalid(instr, "FLAT cannot take an SGPR address"));
        }
        Some(saddr) => {
            let reg = saddr.phys_reg().reg();
            if chip <= ChipClass::Gfx9 && reg == 0x7f {
                return Err(EmitError::invalid(instr, "exec_hi cannot be an SGPR address"));
            }
            word |= reg << 16;
        }
        // GFX10 FLAT reads SADDR as well.
        None if !is_flat || chip >= ChipClass::Gfx10 => {
            word |= if chip <= ChipClass::Gfx9 {
                0x7f << 16
            } else {
                PhysReg::SGPR_NULL.reg() << 16
            };
        }
        None => {}
    }
    word |= bit(flat.nv, 23);
    out.push(word);
    Ok(())
}

fn exp_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    exp: &Export,
) -> EmitResult<()> {
    if instr.operands.len() != 4 {
        return Err(EmitError::invalid(instr, "export needs four operands"));
    }
    let mut word = match chip {
        ChipClass::Gfx8 | ChipClass::Gfx9 => 0b11_0001 << 26,
        _ => 0b11_1110 << 26,
    };
    word |= bit(exp.valid_mask, 12)
        | bit(exp.done, 11)
        | bit(exp.compressed, 10)
        | (exp.dest as u32) << 4
        | exp.enabled_mask as u32 & 0xf;
    out.push(word);

    let word = instr
        .operands
        .iter()
        .enumerate()
        .fold(0, |word, (i, op)| word | (0xff & op.phys_reg().reg()) << (i * 8));
    out.push(word);
    Ok(())
}

fn vop3_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    vop3: &Vop3,
    opcode: u32,
) -> EmitResult<()> {
    if instr.operands.len() > 3 {
        return Err(EmitError::invalid(instr, "VOP3 takes at most three sources"));
    }
    let opcode = match instr.opcode.base_format() {
        BaseFormat::Vop2 => opcode + 0x100,
        BaseFormat::Vop1 if matches!(chip, ChipClass::Gfx8 | ChipClass::Gfx9) => opcode + 0x140,
        BaseFormat::Vop1 => opcode + 0x180,
        BaseFormat::Vintrp => opcode + 0x270,
        _ => opcode,
    };

    let mut word = if chip <= ChipClass::Gfx9 {
        0b11_0100 << 26
    } else {
        0b11_0101 << 26
    };
    if chip <= ChipClass::Gfx7 {
        word |= opcode << 17 | bit(vop3.clamp, 11);
    } else {
        word |= opcode << 16 | bit(vop3.clamp, 15);
    }
    word |= (vop3.opsel as u32 & 0xf) << 11;
    for (i, &abs) in vop3.abs.iter().enumerate() {
        word |= bit(abs, 8 + i as u32);
    }
    if instr.definitions.len() == 2 {
        word |= dst(instr, 1)? << 8;
    }
    word |= 0xff & dst_or_zero(instr, 0);
    out.push(word);

    let mut word = if instr.opcode == Opcode::VInterpMovF32 {
        interp_source(instr)?
    } else {
        // src2 of v_writelane breaks some disassemblers.
        let count = if instr.opcode == Opcode::VWritelaneB32 {
            2
        } else {
            instr.operands.len()
        };
        instr.operands[..count.min(instr.operands.len())]
            .iter()
            .enumerate()
            .fold(0, |word, (i, op)| word | op.phys_reg().reg() << (i * 9))
    };
    word |= (vop3.omod as u32 & 0x3) << 27;
    for (i, &neg) in vop3.neg.iter().enumerate() {
        word |= bit(neg, 29 + i as u32);
    }
    out.push(word);
    Ok(())
}

fn vop3p_words(
    chip: ChipClass,
    out: &mut Vec<u32>,
    instr: &Instruction,
    vop3p: &Vop3p,
    opcode: u32,
) -> EmitResult<()> {
    let mut word = match chip {
        ChipClass::Gfx9 => 0b1_1010_0111 << 23,
        ChipClass::Gfx10 | ChipClass::Gfx10_3 => 0b11_0011 << 26,
        _ => return Err(EmitError::invalid(instr, "packed math requires GFX9")),
    };
    if instr.operands.len() > 3 {
        return Err(EmitError::invalid(instr, "VOP3P takes at most three sources"));
    }
    word |= opcode << 16
        | bit(vop3p.clamp, 15)
        | (vop3p.opsel_lo as u32 & 0x7) << 11
        | bit(vop3p.opsel_hi & 0x4 != 0, 14);
    for (i, &neg) in vop3p.neg_hi.iter().enumerate() {
        word |= bit(neg, 8 + i as u32);
    }
    word |= 0xff & dst(instr, 0)?;
    out.push(word);

    let mut word = instr
        .operands
        .iter()
        .enumerate()
        .fold(0, |word, (i, op)| word | op.phys_reg().reg() << (i * 9));
    word |= (vop3p.opsel_hi as u32 & 0x3) << 27;
    for (i, &neg) in vop3p.neg_lo.iter().enumerate() {
        word |= bit(neg, 29 + i as u32);
    }
    out.push(word);
    Ok(())
}

/// `instr` in its native VOP format with src0 replaced by `placeholder`.
fn with_placeholder(instr: &Instruction, placeholder: u32) -> Instruction {
    let mut base = instr.clone();
    base.operands[0] = Operand::reg(PhysReg::new(placeholder), RegClass::V1);
    base.format = Format::default_for(instr.opcode.base_format());
    base
}

fn dpp_words(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
    dpp: &Dpp,
    opcode: u32,
) -> EmitResult<()> {
    if ctx.chip < ChipClass::Gfx8 {
        return Err(EmitError::invalid(instr, "DPP requires GFX8"));
    }
    let src0 = operand(instr, 0)?.phys_reg();
    encode(ctx, out, &with_placeholder(instr, 250), opcode)?;

    let mut word = (dpp.row_mask as u32 & 0xf) << 28
        | (dpp.bank_mask as u32 & 0xf) << 24
        | bit(dpp.abs[1], 23)
        | bit(dpp.neg[1], 22)
        | bit(dpp.abs[0], 21)
        | bit(dpp.neg[0], 20)
        | bit(dpp.bound_ctrl, 19)
        | (dpp.dpp_ctrl as u32 & 0x1ff) << 8
        | (0xff & src0.reg());
    // Fetch inactive lanes like GFX9 does.
    if ctx.chip >= ChipClass::Gfx10 {
        word |= 1 << 18;
    }
    out.push(word);
    Ok(())
}

fn sdwa_words(
    ctx: &mut AsmContext,
    out: &mut Vec<u32>,
    instr: &Instruction,
    sdwa: &Sdwa,
    opcode: u32,
) -> EmitResult<()> {
    if ctx.chip < ChipClass::Gfx8 {
        return Err(EmitError::invalid(instr, "SDWA requires GFX8"));
    }
    let src0 = operand(instr, 0)?.phys_reg();
    encode(ctx, out, &with_placeholder(instr, 249), opcode)?;

    let mut word = 0;
    if instr.opcode.base_format() == BaseFormat::Vopc {
        if let Some(sdst) = instr
            .definitions
            .first()
            .map(|def| def.phys_reg())
            .filter(|&reg| reg != PhysReg::VCC)
        {
            word |= sdst.reg() << 8 | 1 << 15;
        }
        word |= bit(sdwa.clamp, 13);
    } else {
        let def = instr
            .definitions
            .first()
            .ok_or_else(|| EmitError::invalid(instr, "missing definition 0"))?;
        word |= sdwa.dst_sel.to_sdwa_sel(def.phys_reg().byte()) << 8;
        // dst_unused: preserve the untouched bytes of sub-dword results.
        let dst_unused = if def.bytes() < 4 {
            2
        } else {
            sdwa.dst_sel.sign_extend as u32
        };
        word |= dst_unused << 11 | bit(sdwa.clamp, 13) | (sdwa.omod as u32 & 0x3) << 14;
    }

    word |= sdwa.sel[0].to_sdwa_sel(src0.byte()) << 16
        | bit(sdwa.sel[0].sign_extend, 19)
        | bit(sdwa.neg[0], 20)
        | bit(sdwa.abs[0], 21)
        | (0xff & src0.reg())
        | bit(src0.reg() < PhysReg::FIRST_VGPR, 23);
    if let Some(src1) = instr.operands.get(1).map(|op| op.phys_reg()) {
        word |= sdwa.sel[1].to_sdwa_sel(src1.byte()) << 24
            | bit(sdwa.sel[1].sign_extend, 27)
            | bit(sdwa.neg[1], 28)
            | bit(sdwa.abs[1], 29)
            | bit(src1.reg() < PhysReg::FIRST_VGPR, 31);
    }
    out.push(word);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Definition, SubdwordSel};

    fn sgpr(index: u32) -> Operand {
        Operand::reg(PhysReg::new(index), RegClass::S1)
    }

    fn vgpr(index: u32) -> Operand {
        Operand::reg(PhysReg::vgpr(index), RegClass::V1)
    }

    fn vdef(index: u32) -> Definition {
        Definition::new(PhysReg::vgpr(index), RegClass::V1)
    }

    fn assemble(chip: ChipClass, instr: &Instruction) -> EmitResult<Vec<u32>> {
        AsmContext::new(chip, 1).assemble(instr)
    }

    #[test]
    fn test_scalar_alu() {
        let _ = env_logger::builder().is_test(true).try_init();
        let add = Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![sgpr(1), sgpr(2)],
        );
        assert_eq!(assemble(ChipClass::Gfx9, &add).unwrap(), vec![0x8000_0201]);

        let mov = Instruction::sop1(
            Opcode::SMovB32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::c32(0x1234_5678)],
        );
        assert_eq!(
            assemble(ChipClass::Gfx10, &mov).unwrap(),
            vec![0xbe80_03ff, 0x1234_5678]
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &Instruction::waitcnt(0)).unwrap(),
            vec![0xbf8c_0000]
        );
    }

    #[test]
    fn test_vector_alu() {
        let mov = Instruction::vop1(Opcode::VMovB32, vdef(0), vgpr(1));
        assert_eq!(assemble(ChipClass::Gfx9, &mov).unwrap(), vec![0x7e00_0301]);

        let add = Instruction::vop2(Opcode::VAddF32, vdef(0), vgpr(1), vgpr(2));
        assert_eq!(assemble(ChipClass::Gfx9, &add).unwrap(), vec![0x0200_0501]);

        let mut e64 = add.clone();
        e64.format = Format::Vop3(Vop3::default());
        assert_eq!(
            assemble(ChipClass::Gfx9, &e64).unwrap(),
            vec![0xd101_0000, 0x0002_0501]
        );

        let cmp = Instruction::new(
            Opcode::VCmpLtF32,
            Format::Vopc,
            vec![Definition::new(PhysReg::VCC, RegClass::S2)],
            vec![vgpr(0), vgpr(1)],
        );
        assert_eq!(assemble(ChipClass::Gfx9, &cmp).unwrap(), vec![0x7c82_0300]);
    }

    #[test]
    fn test_memory() {
        let global = Instruction::new(
            Opcode::GlobalLoadDword,
            Format::Global(FlatLike::default()),
            vec![vdef(1)],
            vec![
                Operand::reg(PhysReg::vgpr(2), RegClass::V2),
                Operand::undef(),
            ],
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &global).unwrap(),
            vec![0xdc50_8000, 0x017f_0002]
        );
        assert_eq!(
            assemble(ChipClass::Gfx10, &global).unwrap(),
            vec![0xdc30_8000, 0x017d_0002]
        );

        let smem = Instruction::new(
            Opcode::SLoadDword,
            Format::Smem(Smem::default()),
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::reg(PhysReg::new(2), RegClass::S2), Operand::c32(16)],
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &smem).unwrap(),
            vec![0xc002_0001, 0x0000_0010]
        );
        assert_eq!(
            assemble(ChipClass::Gfx10, &smem).unwrap(),
            vec![0xf400_0001, 0xfa00_0010]
        );

        let ds = Instruction::new(
            Opcode::DsWriteB32,
            Format::Ds(Ds::default()),
            Vec::new(),
            vec![vgpr(1), vgpr(2)],
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &ds).unwrap(),
            vec![0xd81a_0000, 0x0000_0201]
        );

        let mubuf = Instruction::new(
            Opcode::BufferLoadDword,
            Format::Mubuf(Mubuf {
                offen: true,
                ..Mubuf::default()
            }),
            vec![vdef(1)],
            vec![
                Operand::reg(PhysReg::new(4), RegClass::S4),
                vgpr(2),
                Operand::zero(),
            ],
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &mubuf).unwrap(),
            vec![0xe050_1000, 0x8001_0102]
        );
    }

    #[test]
    fn test_smrd_literal_offset() {
        let load = Instruction::new(
            Opcode::SLoadDword,
            Format::Smem(Smem::default()),
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::reg(PhysReg::new(2), RegClass::S2), Operand::c32(4096)],
        );
        let words = assemble(ChipClass::Gfx7, &load).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0] & 0xff, 0xff);
        assert_eq!(words[1], 1024);
        assert!(matches!(
            assemble(ChipClass::Gfx6, &load),
            Err(EmitError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_export() {
        let exp = Instruction::new(
            Opcode::Exp,
            Format::Exp(Export {
                enabled_mask: 0xf,
                dest: Export::DEST_POS,
                done: true,
                ..Export::default()
            }),
            Vec::new(),
            vec![vgpr(0), vgpr(1), vgpr(2), vgpr(3)],
        );
        assert_eq!(
            assemble(ChipClass::Gfx9, &exp).unwrap(),
            vec![0xc400_08cf, 0x0302_0100]
        );
    }

    #[test]
    fn test_nsa_image_sample() {
        let sample = Instruction::new(
            Opcode::ImageSample,
            Format::Mimg(Mimg {
                dmask: 0xf,
                dim: 1,
                ..Mimg::default()
            }),
            vec![Definition::new(PhysReg::vgpr(0), RegClass::V4)],
            vec![
                Operand::reg(PhysReg::new(0), RegClass::S8),
                Operand::reg(PhysReg::new(8), RegClass::S4),
                Operand::undef(),
                vgpr(4),
                vgpr(6),
            ],
        );
        assert_eq!(
            assemble(ChipClass::Gfx10, &sample).unwrap(),
            vec![0xf080_0f0a, 0x0040_0004, 0x0000_0006]
        );
        assert!(matches!(
            assemble(ChipClass::Gfx9, &sample),
            Err(EmitError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_dpp_and_sdwa() {
        let mut mov = Instruction::vop1(Opcode::VMovB32, vdef(0), vgpr(1));
        mov.format = Format::Dpp(Dpp {
            dpp_ctrl: 0x111,
            ..Dpp::default()
        });
        assert_eq!(
            assemble(ChipClass::Gfx9, &mov).unwrap(),
            vec![0x7e00_02fa, 0xff01_1101]
        );

        mov.format = Format::Sdwa(Sdwa {
            sel: [SubdwordSel::new(2, 2, false), SubdwordSel::DWORD],
            ..Sdwa::default()
        });
        assert_eq!(
            assemble(ChipClass::Gfx9, &mov).unwrap(),
            vec![0x7e00_02f9, 0x0005_0601]
        );
        assert!(assemble(ChipClass::Gfx7, &mov).is_err());
    }

    #[test]
    fn test_buffer_format() {
        assert_eq!(buffer_format(ChipClass::Gfx9, 4, 7), Some(0x74));
        assert_eq!(buffer_format(ChipClass::Gfx10, 4, 7), Some(22));
        assert_eq!(buffer_format(ChipClass::Gfx10, 14, 4), Some(75));
        assert_eq!(buffer_format(ChipClass::Gfx10, 1, 0), Some(1));
        assert_eq!(buffer_format(ChipClass::Gfx10, 1, 7), None);
        assert_eq!(buffer_format(ChipClass::Gfx10, 4, 0), None);
    }

    #[test]
    fn test_rejected_instructions() {
        let two_literals = Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::c32(1000), Operand::c32(2000)],
        );
        assert!(matches!(
            assemble(ChipClass::Gfx9, &two_literals),
            Err(EmitError::InvalidEncoding { .. })
        ));

        let same_literal = Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::c32(1000), Operand::c32(1000)],
        );
        assert_eq!(assemble(ChipClass::Gfx9, &same_literal).unwrap().len(), 2);

        let barrier = Instruction::barrier(Default::default(), Default::default());
        assert!(matches!(
            assemble(ChipClass::Gfx9, &barrier),
            Err(EmitError::PseudoInstruction { .. })
        ));

        let err = assemble(ChipClass::Gfx9, &Instruction::waitcnt_vscnt(0)).unwrap_err();
        assert!(err.to_string().starts_with("Unsupported opcode: "));
    }

    #[test]
    fn test_subvector_loop() {
        let mut ctx = AsmContext::new(ChipClass::Gfx10, 1);
        let mut out = Vec::new();
        let begin = Instruction::sopk(Opcode::SSubvectorLoopBegin, Vec::new(), 0);
        let end = Instruction::sopk(Opcode::SSubvectorLoopEnd, Vec::new(), 0);
        emit_instruction(&mut ctx, &mut out, &begin).unwrap();
        emit_instruction(&mut ctx, &mut out, &Instruction::sopp(Opcode::SNop, 0)).unwrap();
        emit_instruction(&mut ctx, &mut out, &end).unwrap();

        assert_eq!(out[0] & 0xffff, 2);
        assert_eq!(out[2] & 0xffff, 0xfffe);
        assert!(emit_instruction(&mut ctx, &mut out, &end).is_err());
    }
}
