//! Line parser for the textual program form.

use crate::error::{EmitError, EmitResult};
use crate::ir::sync::{SEMANTICS_NAMES, STORAGE_NAMES};
use crate::ir::{
    Block, BlockKind, ChipClass, Definition, Dpp, Format, HwStage, Instruction, MemorySyncInfo,
    Opcode, Operand, PhysReg, Program, RegClass, RegType, Sdwa, SubdwordSel, SyncScope, Vop3,
};

pub(super) fn parse(text: &str) -> EmitResult<Program> {
    let mut parser = Parser::new();

    for (index, raw) in text.lines().enumerate() {
        parser.line = index + 1;
        let line = raw.find(';').map_or(raw, |end| &raw[..end]).trim();
        if line.is_empty() {
            continue;
        }
        parser.parse_line(line).map_err(|message| EmitError::Parse {
            line: index + 1,
            message,
        })?;
    }

    parser.finish()
}

struct Parser {
    line: usize,
    program: Program,
    has_chip: bool,
    has_stage: bool,
}

impl Parser {
    fn new() -> Self {
        Self {
            line: 0,
            program: Program::new(ChipClass::Gfx9, HwStage::Cs),
            has_chip: false,
            has_stage: false,
        }
    }

    fn parse_line(&mut self, line: &str) -> Result<(), String> {
        if let Some(directive) = line.strip_prefix('.') {
            return self.parse_directive(directive);
        }
        let is_label = line
            .split_whitespace()
            .next()
            .is_some_and(|token| token.starts_with("BB") && token.ends_with(':'));
        if is_label {
            return self.parse_block_header(line);
        }

        let instr = parse_instruction(line)?;
        self.program
            .blocks
            .last_mut()
            .ok_or_else(|| "instruction outside of a block".to_string())?
            .instructions
            .push(instr);
        Ok(())
    }

    fn parse_directive(&mut self, directive: &str) -> Result<(), String> {
        let (name, arg) = match directive.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (directive, ""),
        };
        if !self.program.blocks.is_empty() {
            return Err(format!("directive .{name} after the first block"));
        }

        match name {
            "chip" => {
                self.program.chip_class =
                    ChipClass::from_name(arg).ok_or_else(|| format!("unknown chip `{arg}`"))?;
                self.has_chip = true;
            }
            "stage" => {
                self.program.stage =
                    HwStage::from_name(arg).ok_or_else(|| format!("unknown stage `{arg}`"))?;
                self.has_stage = true;
            }
            "wave" => {
                let size = number(arg)?;
                if size != 32 && size != 64 {
                    return Err(format!("wave size must be 32 or 64, not {size}"));
                }
                self.program.wave_size = size;
            }
            "workgroup" => self.program.workgroup_size = number(arg)?,
            "wgp" => self.program.wgp_mode = true,
            "early_rast" => self.program.early_rast = true,
            "vs_input" => {
                let (reg, rc) = parse_reg(arg)?;
                self.program.vs_inputs.push(Definition::new(reg, rc));
            }
            "constdata" => self.program.constant_data = hex_bytes(arg)?,
            _ => return Err(format!("unknown directive .{name}")),
        }
        Ok(())
    }

    fn parse_block_header(&mut self, line: &str) -> Result<(), String> {
        if !self.has_chip || !self.has_stage {
            return Err("blocks must follow the .chip and .stage directives".to_string());
        }

        let mut tokens = line.split_whitespace();
        let label = tokens.next().unwrap_or_default().trim_end_matches(':');
        let index = block_ref(label)?;
        if index as usize != self.program.blocks.len() {
            return Err(format!(
                "expected BB{} but found {label}",
                self.program.blocks.len()
            ));
        }

        let mut block = Block::new(index, BlockKind::empty());
        for token in tokens {
            let (key, value) = token
                .split_once(':')
                .ok_or_else(|| format!("malformed block attribute `{token}`"))?;
            match key {
                "kind" => {
                    for name in value.split('+') {
                        block.kind |= BlockKind::from_name(&name.to_ascii_uppercase())
                            .ok_or_else(|| format!("unknown block kind `{name}`"))?;
                    }
                }
                "depth" => block.loop_nest_depth = number(value)?,
                "preds" => {
                    block.linear_preds = block_list(value)?;
                    block.logical_preds = block.linear_preds.clone();
                }
                "linear_preds" => block.linear_preds = block_list(value)?,
                "logical_preds" => block.logical_preds = block_list(value)?,
                _ => return Err(format!("unknown block attribute `{key}`")),
            }
        }

        self.program.blocks.push(block);
        Ok(())
    }

    fn finish(self) -> EmitResult<Program> {
        let fail = |message: String| EmitError::Parse {
            line: self.line,
            message,
        };
        if !self.has_chip {
            return Err(fail("missing .chip directive".to_string()));
        }
        if !self.has_stage {
            return Err(fail("missing .stage directive".to_string()));
        }

        let count = self.program.blocks.len() as u32;
        for block in &self.program.blocks {
            let mut preds = block.linear_preds.iter().chain(&block.logical_preds);
            if let Some(pred) = preds.find(|&&pred| pred >= count) {
                return Err(fail(format!(
                    "BB{} has a predecessor BB{pred} that does not exist",
                    block.index
                )));
            }
        }

        log::debug!(
            "parsed {} blocks, {} instructions for {} {}",
            self.program.blocks.len(),
            self.program.instruction_count(),
            self.program.chip_class,
            self.program.stage
        );
        Ok(self.program)
    }
}

/// Parse `defs = mnemonic operands modifiers`.
pub(super) fn parse_instruction(line: &str) -> Result<Instruction, String> {
    let (defs, rest) = match line.split_once(" = ") {
        Some((defs, rest)) => (Some(defs), rest),
        None => (None, line),
    };

    let mut definitions = Vec::new();
    for def in defs.into_iter().flat_map(|defs| defs.split(',')) {
        let (reg, rc) = parse_reg(def.trim())?;
        definitions.push(Definition::new(reg, rc));
    }

    let mut tokens = rest.split_whitespace();
    let mnemonic = tokens
        .next()
        .ok_or_else(|| "missing opcode".to_string())?;
    let opcode =
        Opcode::from_name(mnemonic).ok_or_else(|| format!("unknown opcode `{mnemonic}`"))?;

    // Operands are comma separated, modifiers follow the last one.
    let mut operands = Vec::new();
    let mut modifiers = Vec::new();
    let mut in_operands = true;
    for token in tokens {
        if in_operands {
            let (text, more) = match token.strip_suffix(',') {
                Some(text) => (text, true),
                None => (token, false),
            };
            match parse_operand(text) {
                Ok(op) => {
                    operands.push(op);
                    in_operands = more;
                    continue;
                }
                Err(err) if more => return Err(err),
                Err(_) => in_operands = false,
            }
        }
        modifiers.push(token);
    }

    let format = parse_format(opcode, &modifiers)?;
    Ok(Instruction::new(opcode, format, definitions, operands))
}

fn parse_operand(text: &str) -> Result<Operand, String> {
    if text == "undef" {
        return Ok(Operand::undef());
    }
    if let Some(value) = text.strip_prefix("lit(").and_then(|t| t.strip_suffix(')')) {
        return Ok(Operand::literal(constant(value)?));
    }
    if text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return Ok(Operand::c32(constant(text)?));
    }
    let (reg, rc) = parse_reg(text)?;
    Ok(Operand::reg(reg, rc))
}

/// Register names as printed: `s5`, `s[0:3]`, `v7`, `v[2:3]`, `v1.b2x1`, or
/// one of the special register names.
fn parse_reg(text: &str) -> Result<(PhysReg, RegClass), String> {
    let named = match text {
        "vcc" => Some((PhysReg::VCC, RegClass::S2)),
        "vcc_lo" => Some((PhysReg::VCC, RegClass::S1)),
        "vcc_hi" => Some((PhysReg::VCC_HI, RegClass::S1)),
        "m0" => Some((PhysReg::M0, RegClass::S1)),
        "null" => Some((PhysReg::SGPR_NULL, RegClass::S1)),
        "exec" => Some((PhysReg::EXEC, RegClass::S2)),
        "exec_lo" => Some((PhysReg::EXEC, RegClass::S1)),
        "exec_hi" => Some((PhysReg::EXEC_HI, RegClass::S1)),
        "scc" => Some((PhysReg::SCC, RegClass::S1)),
        _ => None,
    };
    if let Some(named) = named {
        return Ok(named);
    }

    let invalid = || format!("invalid register `{text}`");
    let (ty, rest) = if let Some(rest) = text.strip_prefix('v') {
        (RegType::Vgpr, rest)
    } else if let Some(rest) = text.strip_prefix('s') {
        (RegType::Sgpr, rest)
    } else {
        return Err(invalid());
    };

    if ty == RegType::Vgpr {
        if let Some((index, sub)) = rest.split_once(".b") {
            let (byte, bytes) = sub.split_once('x').ok_or_else(invalid)?;
            let index: u32 = number(index).map_err(|_| invalid())?;
            let byte: u32 = number(byte).map_err(|_| invalid())?;
            let bytes: u32 = number(bytes).map_err(|_| invalid())?;
            if index >= 256 || byte > 3 || !(1..=3).contains(&bytes) {
                return Err(invalid());
            }
            return Ok((
                PhysReg::with_byte(PhysReg::FIRST_VGPR + index, byte),
                RegClass::subdword(bytes),
            ));
        }
    }

    let (first, size) = match rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        Some(range) => {
            let (lo, hi) = range.split_once(':').ok_or_else(invalid)?;
            let lo: u32 = number(lo).map_err(|_| invalid())?;
            let hi: u32 = number(hi).map_err(|_| invalid())?;
            if hi < lo {
                return Err(invalid());
            }
            (lo, hi - lo + 1)
        }
        None => (number(rest).map_err(|_| invalid())?, 1),
    };
    if size > 32 || first + size > 256 {
        return Err(format!("register range `{text}` out of bounds"));
    }

    let reg = match ty {
        RegType::Vgpr => PhysReg::vgpr(first),
        RegType::Sgpr => PhysReg::new(first),
    };
    Ok((reg, RegClass::new(ty, size)))
}

fn parse_format(opcode: Opcode, modifiers: &[&str]) -> Result<Format, String> {
    let mut format = Format::default_for(opcode.base_format());
    for (i, &modifier) in modifiers.iter().enumerate() {
        match modifier {
            "e64" if i == 0 => format = Format::Vop3(Vop3::default()),
            "dpp" if i == 0 => format = Format::Dpp(Dpp::default()),
            "sdwa" if i == 0 => format = Format::Sdwa(Sdwa::default()),
            _ => apply_modifier(&mut format, modifier)?,
        }
    }
    Ok(format)
}

fn sync_of(format: &mut Format) -> Option<&mut MemorySyncInfo> {
    match format {
        Format::PseudoBarrier(barrier) => Some(&mut barrier.sync),
        Format::Smem(smem) => Some(&mut smem.sync),
        Format::Ds(ds) => Some(&mut ds.sync),
        Format::Mtbuf(mtbuf) => Some(&mut mtbuf.sync),
        Format::Mubuf(mubuf) => Some(&mut mubuf.sync),
        Format::Mimg(mimg) => Some(&mut mimg.sync),
        Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat) => Some(&mut flat.sync),
        _ => None,
    }
}

fn apply_sync(sync: &mut MemorySyncInfo, key: &str, value: &str) -> Result<bool, String> {
    match key {
        "storage" => sync.storage = flag_list(&STORAGE_NAMES, value)?,
        "semantics" => sync.semantics = flag_list(&SEMANTICS_NAMES, value)?,
        "scope" => {
            sync.scope =
                SyncScope::from_name(value).ok_or_else(|| format!("unknown scope `{value}`"))?
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn apply_modifier(format: &mut Format, token: &str) -> Result<(), String> {
    let (key, value) = match token.split_once(':') {
        Some((key, value)) => (key, Some(value)),
        None => (token, None),
    };
    let name = format.name();
    let unknown = || format!("modifier `{token}` does not apply to {name}");

    if let (Some(sync), Some(value)) = (sync_of(format), value) {
        if apply_sync(sync, key, value)? {
            return Ok(());
        }
    }

    let handled = match value {
        None => set_flag(format, key),
        Some(value) => set_value(format, key, value)?,
    };
    if handled {
        Ok(())
    } else {
        Err(unknown())
    }
}

fn set_flag(format: &mut Format, key: &str) -> bool {
    let flag = match (format, key) {
        (Format::Smem(smem), "glc") => &mut smem.glc,
        (Format::Smem(smem), "dlc") => &mut smem.dlc,
        (Format::Smem(smem), "nv") => &mut smem.nv,
        (Format::Ds(ds), "gds") => &mut ds.gds,
        (Format::Mubuf(mubuf), key) => match key {
            "offen" => &mut mubuf.offen,
            "idxen" => &mut mubuf.idxen,
            "addr64" => &mut mubuf.addr64,
            "glc" => &mut mubuf.glc,
            "dlc" => &mut mubuf.dlc,
            "slc" => &mut mubuf.slc,
            "tfe" => &mut mubuf.tfe,
            "lds" => &mut mubuf.lds,
            _ => return false,
        },
        (Format::Mtbuf(mtbuf), key) => match key {
            "offen" => &mut mtbuf.offen,
            "idxen" => &mut mtbuf.idxen,
            "glc" => &mut mtbuf.glc,
            "dlc" => &mut mtbuf.dlc,
            "slc" => &mut mtbuf.slc,
            "tfe" => &mut mtbuf.tfe,
            _ => return false,
        },
        (Format::Mimg(mimg), key) => match key {
            "unrm" => &mut mimg.unrm,
            "da" => &mut mimg.da,
            "glc" => &mut mimg.glc,
            "dlc" => &mut mimg.dlc,
            "slc" => &mut mimg.slc,
            "tfe" => &mut mimg.tfe,
            "lwe" => &mut mimg.lwe,
            "r128" => &mut mimg.r128,
            "a16" => &mut mimg.a16,
            "d16" => &mut mimg.d16,
            _ => return false,
        },
        (Format::Exp(exp), key) => match key {
            "compr" => &mut exp.compressed,
            "done" => &mut exp.done,
            "vm" => &mut exp.valid_mask,
            _ => return false,
        },
        (Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat), key) => match key {
            "glc" => &mut flat.glc,
            "slc" => &mut flat.slc,
            "dlc" => &mut flat.dlc,
            "lds" => &mut flat.lds,
            "nv" => &mut flat.nv,
            _ => return false,
        },
        (Format::Vop3(vop3), "clamp") => &mut vop3.clamp,
        (Format::Vop3p(vop3p), "clamp") => &mut vop3p.clamp,
        (Format::Dpp(dpp), "bound_ctrl") => &mut dpp.bound_ctrl,
        (Format::Sdwa(sdwa), "clamp") => &mut sdwa.clamp,
        _ => return false,
    };
    *flag = true;
    true
}

fn set_value(format: &mut Format, key: &str, value: &str) -> Result<bool, String> {
    match (format, key) {
        (Format::PseudoBranch(branch), "block") => branch.target = block_ref(value)?,
        (Format::PseudoBarrier(barrier), "exec_scope") => {
            barrier.exec_scope =
                SyncScope::from_name(value).ok_or_else(|| format!("unknown scope `{value}`"))?
        }
        (Format::Sopk(sopk), "imm") => sopk.imm = number(value)?,
        (Format::Sopp(sopp), "imm") => sopp.imm = number(value)?,
        (Format::Sopp(sopp), "block") => sopp.block = Some(block_ref(value)?),
        (Format::Ds(ds), "offset0") => ds.offset0 = number(value)?,
        (Format::Ds(ds), "offset1") => ds.offset1 = number(value)?,
        (Format::Mubuf(mubuf), "offset") => mubuf.offset = number(value)?,
        (Format::Mtbuf(mtbuf), "offset") => mtbuf.offset = number(value)?,
        (Format::Mtbuf(mtbuf), "dfmt") => mtbuf.dfmt = number(value)?,
        (Format::Mtbuf(mtbuf), "nfmt") => mtbuf.nfmt = number(value)?,
        (Format::Mimg(mimg), "dmask") => mimg.dmask = number(value)?,
        (Format::Mimg(mimg), "dim") => mimg.dim = number(value)?,
        (Format::Exp(exp), "en") => exp.enabled_mask = number(value)?,
        (Format::Exp(exp), "dest") => exp.dest = number(value)?,
        (Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat), "offset") => {
            flat.offset = number(value)?
        }
        (Format::Vintrp(interp), "attr") => interp.attribute = number(value)?,
        (Format::Vintrp(interp), "chan") => interp.component = number(value)?,
        (Format::Vop3(vop3), key) => match key {
            "abs" => vop3.abs = bit_mask(value)?,
            "neg" => vop3.neg = bit_mask(value)?,
            "opsel" => vop3.opsel = number(value)?,
            "omod" => vop3.omod = number(value)?,
            _ => return Ok(false),
        },
        (Format::Vop3p(vop3p), key) => match key {
            "opsel_lo" => vop3p.opsel_lo = number(value)?,
            "opsel_hi" => vop3p.opsel_hi = number(value)?,
            "neg_lo" => vop3p.neg_lo = bit_mask(value)?,
            "neg_hi" => vop3p.neg_hi = bit_mask(value)?,
            _ => return Ok(false),
        },
        (Format::Dpp(dpp), key) => match key {
            "dpp_ctrl" => dpp.dpp_ctrl = number(value)?,
            "row_mask" => dpp.row_mask = number(value)?,
            "bank_mask" => dpp.bank_mask = number(value)?,
            "abs" => dpp.abs = bit_mask(value)?,
            "neg" => dpp.neg = bit_mask(value)?,
            _ => return Ok(false),
        },
        (Format::Sdwa(sdwa), key) => match key {
            "sel0" => sdwa.sel[0] = subdword_sel(value)?,
            "sel1" => sdwa.sel[1] = subdword_sel(value)?,
            "dst_sel" => sdwa.dst_sel = subdword_sel(value)?,
            "abs" => sdwa.abs = bit_mask(value)?,
            "neg" => sdwa.neg = bit_mask(value)?,
            "omod" => sdwa.omod = number(value)?,
            _ => return Ok(false),
        },
        _ => return Ok(false),
    }
    Ok(true)
}

/// Decimal or `0x` hexadecimal, optionally negative.
fn number<T: TryFrom<i64>>(text: &str) -> Result<T, String> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    let magnitude = match digits.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(|_| format!("invalid number `{text}`"))?;
    let value = if negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| format!("number `{text}` out of range"))
}

/// A 32-bit constant; negative values are stored as their two's complement.
fn constant(text: &str) -> Result<u32, String> {
    let value: i64 = number(text)?;
    let converted = if value < 0 {
        i32::try_from(value).map(|v| v as u32)
    } else {
        u32::try_from(value)
    };
    converted.map_err(|_| format!("constant `{text}` does not fit in 32 bits"))
}

fn bit_mask<const N: usize>(text: &str) -> Result<[bool; N], String> {
    let bits: u8 = number(text)?;
    if u32::from(bits) >> N != 0 {
        return Err(format!("mask `{text}` has more than {N} bits"));
    }
    Ok(std::array::from_fn(|i| bits & (1 << i) != 0))
}

fn flag_list<T: bitflags::Flags + Copy>(names: &[(&str, T)], list: &str) -> Result<T, String> {
    list.split('+').try_fold(T::empty(), |acc, name| {
        names
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, flag)| acc.union(flag))
            .ok_or_else(|| format!("unknown name `{name}`"))
    })
}

fn subdword_sel(text: &str) -> Result<SubdwordSel, String> {
    if text == "dword" {
        return Ok(SubdwordSel::DWORD);
    }
    let invalid = || format!("invalid selection `{text}`");
    let sign_extend = match text.as_bytes().first() {
        Some(b's') => true,
        Some(b'u') => false,
        _ => return Err(invalid()),
    };
    let rest = &text[1..];
    let (size, index) = if let Some(index) = rest.strip_prefix("byte") {
        (1u8, index)
    } else if let Some(index) = rest.strip_prefix("word") {
        (2u8, index)
    } else {
        return Err(invalid());
    };
    let index: u8 = number(index).map_err(|_| invalid())?;
    if index >= 4 / size {
        return Err(invalid());
    }
    Ok(SubdwordSel::new(size, index * size, sign_extend))
}

fn block_ref(text: &str) -> Result<u32, String> {
    text.strip_prefix("BB")
        .and_then(|index| index.parse().ok())
        .ok_or_else(|| format!("expected a block label but found `{text}`"))
}

fn block_list(text: &str) -> Result<Vec<u32>, String> {
    text.split(',').map(block_ref).collect()
}

fn hex_bytes(text: &str) -> Result<Vec<u8>, String> {
    if text.len() % 2 != 0 || !text.is_ascii() {
        return Err("constant data needs two hex digits per byte".to_string());
    }
    (0..text.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&text[i..i + 2], 16)
                .map_err(|_| format!("invalid constant data byte `{}`", &text[i..i + 2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{FlatLike, StorageClass};

    #[test]
    fn test_registers() {
        assert_eq!(parse_reg("s5").unwrap(), (PhysReg::new(5), RegClass::S1));
        assert_eq!(parse_reg("s[4:7]").unwrap(), (PhysReg::new(4), RegClass::S4));
        assert_eq!(parse_reg("v[2:3]").unwrap(), (PhysReg::vgpr(2), RegClass::V2));
        assert_eq!(parse_reg("exec").unwrap(), (PhysReg::EXEC, RegClass::S2));
        assert_eq!(
            parse_reg("v1.b2x1").unwrap(),
            (PhysReg::with_byte(257, 2), RegClass::V1B)
        );
        assert!(parse_reg("slc").is_err());
        assert!(parse_reg("v[3:2]").is_err());
        assert!(parse_reg("v[250:259]").is_err());
    }

    #[test]
    fn test_operands() {
        assert_eq!(parse_operand("-16").unwrap(), Operand::c32(-16i32 as u32));
        assert_eq!(parse_operand("0x3f800000").unwrap(), Operand::c32(0x3f80_0000));
        assert_eq!(parse_operand("lit(0x8)").unwrap(), Operand::literal(8));
        assert!(parse_operand("undef").unwrap().is_undefined());
        assert!(parse_operand("0x100000000").is_err());
    }

    #[test]
    fn test_instruction_with_modifiers() {
        let instr = parse_instruction(
            "v1 = global_load_dword v[2:3], undef offset:-16 glc storage:buffer scope:device",
        )
        .unwrap();
        assert_eq!(instr.opcode, Opcode::GlobalLoadDword);
        assert_eq!(instr.operands.len(), 2);
        assert_eq!(
            instr.format,
            Format::Global(FlatLike {
                offset: -16,
                glc: true,
                sync: MemorySyncInfo::new(
                    StorageClass::BUFFER,
                    Default::default(),
                    SyncScope::Device
                ),
                ..FlatLike::default()
            })
        );

        let instr = parse_instruction("v0 = v_add_f32 v1, 0x3f800000 e64 neg:1 clamp").unwrap();
        match instr.format {
            Format::Vop3(vop3) => {
                assert!(vop3.clamp);
                assert_eq!(vop3.neg, [true, false, false]);
            }
            other => panic!("unexpected format {other:?}"),
        }

        let instr = parse_instruction("s_waitcnt imm:0xc07f").unwrap();
        assert!(instr.operands.is_empty());
        assert_eq!(instr, Instruction::waitcnt(0xc07f));
    }

    #[test]
    fn test_instruction_errors() {
        assert!(parse_instruction("v0 = v_bogus v1").is_err());
        assert!(parse_instruction("v0 = v_mov_b32 q1, v2").is_err());
        let err = parse_instruction("s_waitcnt offset:4").unwrap_err();
        assert!(err.contains("does not apply to SOPP"), "{err}");
    }

    #[test]
    fn test_sdwa_selections() {
        assert_eq!(subdword_sel("sbyte1").unwrap(), SubdwordSel::new(1, 1, true));
        assert_eq!(subdword_sel("uword1").unwrap(), SubdwordSel::new(2, 2, false));
        assert!(subdword_sel("uword2").is_err());
    }
}
