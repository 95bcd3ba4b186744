//! Textual rendering of programs.
//!
//! The format is line oriented and is read back by [`crate::text`]:
//!
//! ```text
//! .chip gfx10
//! .stage cs
//! BB0: kind:top_level+uniform
//!     v1 = global_load_dword v[0:1], undef offset:16 storage:buffer
//!     s_waitcnt imm:0xc3f7
//! ```

use super::instr::{Format, Instruction, SubdwordSel};
use super::opcode::BaseFormat;
use super::sync::{MemorySyncInfo, SyncScope};
use super::{Block, Program};
use std::fmt;

fn flag(out: &mut Vec<String>, name: &str, set: bool) {
    if set {
        out.push(name.to_string());
    }
}

fn value(out: &mut Vec<String>, name: &str, v: impl fmt::Display + PartialEq + Default) {
    if v != Default::default() {
        out.push(format!("{name}:{v}"));
    }
}

fn mask<const N: usize>(out: &mut Vec<String>, name: &str, bits: [bool; N]) {
    let m = bits
        .iter()
        .enumerate()
        .fold(0u8, |m, (i, &b)| m | ((b as u8) << i));
    value(out, name, m);
}

fn sync(out: &mut Vec<String>, sync: &MemorySyncInfo) {
    if !sync.is_empty() {
        out.push(sync.to_string());
    }
}

impl fmt::Display for SubdwordSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign_extend { 's' } else { 'u' };
        match self.size {
            1 => write!(f, "{sign}byte{}", self.offset),
            2 => write!(f, "{sign}word{}", self.offset / 2),
            _ => f.write_str("dword"),
        }
    }
}

/// Format modifiers, in the order the parser accepts them.
pub(crate) fn modifiers(format: &Format, base: BaseFormat) -> Vec<String> {
    let mut out = Vec::new();
    match format {
        Format::Pseudo | Format::Sop1 | Format::Sop2 | Format::Sopc => {}
        Format::Vop1 | Format::Vop2 | Format::Vopc => {}
        Format::PseudoBranch(branch) => out.push(format!("block:BB{}", branch.target)),
        Format::PseudoBarrier(barrier) => {
            sync(&mut out, &barrier.sync);
            if barrier.exec_scope != SyncScope::Invocation {
                out.push(format!("exec_scope:{}", barrier.exec_scope));
            }
        }
        Format::Sopk(sopk) => value(&mut out, "imm", sopk.imm),
        Format::Sopp(sopp) => {
            if let Some(block) = sopp.block {
                out.push(format!("block:BB{block}"));
            }
            if sopp.imm != 0 {
                out.push(format!("imm:0x{:x}", sopp.imm));
            }
        }
        Format::Smem(smem) => {
            flag(&mut out, "glc", smem.glc);
            flag(&mut out, "dlc", smem.dlc);
            flag(&mut out, "nv", smem.nv);
            sync(&mut out, &smem.sync);
        }
        Format::Ds(ds) => {
            value(&mut out, "offset0", ds.offset0);
            value(&mut out, "offset1", ds.offset1);
            flag(&mut out, "gds", ds.gds);
            sync(&mut out, &ds.sync);
        }
        Format::Mubuf(mubuf) => {
            value(&mut out, "offset", mubuf.offset);
            flag(&mut out, "offen", mubuf.offen);
            flag(&mut out, "idxen", mubuf.idxen);
            flag(&mut out, "addr64", mubuf.addr64);
            flag(&mut out, "glc", mubuf.glc);
            flag(&mut out, "dlc", mubuf.dlc);
            flag(&mut out, "slc", mubuf.slc);
            flag(&mut out, "tfe", mubuf.tfe);
            flag(&mut out, "lds", mubuf.lds);
            sync(&mut out, &mubuf.sync);
        }
        Format::Mtbuf(mtbuf) => {
            value(&mut out, "dfmt", mtbuf.dfmt);
            value(&mut out, "nfmt", mtbuf.nfmt);
            value(&mut out, "offset", mtbuf.offset);
            flag(&mut out, "offen", mtbuf.offen);
            flag(&mut out, "idxen", mtbuf.idxen);
            flag(&mut out, "glc", mtbuf.glc);
            flag(&mut out, "dlc", mtbuf.dlc);
            flag(&mut out, "slc", mtbuf.slc);
            flag(&mut out, "tfe", mtbuf.tfe);
            sync(&mut out, &mtbuf.sync);
        }
        Format::Mimg(mimg) => {
            out.push(format!("dmask:0x{:x}", mimg.dmask));
            value(&mut out, "dim", mimg.dim);
            flag(&mut out, "unrm", mimg.unrm);
            flag(&mut out, "da", mimg.da);
            flag(&mut out, "glc", mimg.glc);
            flag(&mut out, "dlc", mimg.dlc);
            flag(&mut out, "slc", mimg.slc);
            flag(&mut out, "tfe", mimg.tfe);
            flag(&mut out, "lwe", mimg.lwe);
            flag(&mut out, "r128", mimg.r128);
            flag(&mut out, "a16", mimg.a16);
            flag(&mut out, "d16", mimg.d16);
            sync(&mut out, &mimg.sync);
        }
        Format::Exp(exp) => {
            out.push(format!("en:0x{:x}", exp.enabled_mask));
            out.push(format!("dest:{}", exp.dest));
            flag(&mut out, "compr", exp.compressed);
            flag(&mut out, "done", exp.done);
            flag(&mut out, "vm", exp.valid_mask);
        }
        Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat) => {
            value(&mut out, "offset", flat.offset);
            flag(&mut out, "glc", flat.glc);
            flag(&mut out, "slc", flat.slc);
            flag(&mut out, "dlc", flat.dlc);
            flag(&mut out, "lds", flat.lds);
            flag(&mut out, "nv", flat.nv);
            sync(&mut out, &flat.sync);
        }
        Format::Vintrp(interp) => {
            out.push(format!("attr:{}", interp.attribute));
            out.push(format!("chan:{}", interp.component));
        }
        Format::Vop3(vop3) => {
            flag(&mut out, "e64", base != BaseFormat::Vop3);
            mask(&mut out, "abs", vop3.abs);
            mask(&mut out, "neg", vop3.neg);
            value(&mut out, "opsel", vop3.opsel);
            flag(&mut out, "clamp", vop3.clamp);
            value(&mut out, "omod", vop3.omod);
        }
        Format::Vop3p(vop3p) => {
            value(&mut out, "opsel_lo", vop3p.opsel_lo);
            if vop3p.opsel_hi != 0b111 {
                out.push(format!("opsel_hi:{}", vop3p.opsel_hi));
            }
            mask(&mut out, "neg_lo", vop3p.neg_lo);
            mask(&mut out, "neg_hi", vop3p.neg_hi);
            flag(&mut out, "clamp", vop3p.clamp);
        }
        Format::Dpp(dpp) => {
            out.push("dpp".to_string());
            out.push(format!("dpp_ctrl:0x{:x}", dpp.dpp_ctrl));
            if dpp.row_mask != 0xf {
                out.push(format!("row_mask:0x{:x}", dpp.row_mask));
            }
            if dpp.bank_mask != 0xf {
                out.push(format!("bank_mask:0x{:x}", dpp.bank_mask));
            }
            mask(&mut out, "abs", dpp.abs);
            mask(&mut out, "neg", dpp.neg);
            flag(&mut out, "bound_ctrl", dpp.bound_ctrl);
        }
        Format::Sdwa(sdwa) => {
            out.push("sdwa".to_string());
            for (i, sel) in sdwa.sel.iter().enumerate() {
                if *sel != SubdwordSel::DWORD {
                    out.push(format!("sel{i}:{sel}"));
                }
            }
            if sdwa.dst_sel != SubdwordSel::DWORD {
                out.push(format!("dst_sel:{}", sdwa.dst_sel));
            }
            mask(&mut out, "abs", sdwa.abs);
            mask(&mut out, "neg", sdwa.neg);
            flag(&mut out, "clamp", sdwa.clamp);
            value(&mut out, "omod", sdwa.omod);
        }
    }
    out
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, def) in self.definitions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{def}")?;
        }
        if !self.definitions.is_empty() {
            f.write_str(" = ")?;
        }
        f.write_str(self.opcode.name())?;
        for (i, op) in self.operands.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{op}")?;
        }
        for m in modifiers(&self.format, self.opcode.base_format()) {
            write!(f, " {m}")?;
        }
        Ok(())
    }
}

fn block_list(list: &[u32]) -> String {
    list.iter()
        .map(|b| format!("BB{b}"))
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BB{}:", self.index)?;
        if !self.kind.is_empty() {
            let kinds: Vec<String> = self
                .kind
                .iter_names()
                .map(|(name, _)| name.to_ascii_lowercase())
                .collect();
            write!(f, " kind:{}", kinds.join("+"))?;
        }
        if self.loop_nest_depth != 0 {
            write!(f, " depth:{}", self.loop_nest_depth)?;
        }
        if self.linear_preds == self.logical_preds {
            if !self.linear_preds.is_empty() {
                write!(f, " preds:{}", block_list(&self.linear_preds))?;
            }
        } else {
            if !self.linear_preds.is_empty() {
                write!(f, " linear_preds:{}", block_list(&self.linear_preds))?;
            }
            if !self.logical_preds.is_empty() {
                write!(f, " logical_preds:{}", block_list(&self.logical_preds))?;
            }
        }
        writeln!(f)?;
        for instr in &self.instructions {
            writeln!(f, "    {instr}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".chip {}", self.chip_class)?;
        writeln!(f, ".stage {}", self.stage)?;
        writeln!(f, ".wave {}", self.wave_size)?;
        writeln!(f, ".workgroup {}", self.workgroup_size)?;
        if self.wgp_mode {
            writeln!(f, ".wgp")?;
        }
        if self.early_rast {
            writeln!(f, ".early_rast")?;
        }
        for input in &self.vs_inputs {
            writeln!(f, ".vs_input {input}")?;
        }
        if !self.constant_data.is_empty() {
            let hex: String = self
                .constant_data
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect();
            writeln!(f, ".constdata {hex}")?;
        }
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{
        Definition, FlatLike, MemorySyncInfo, Opcode, Operand, PhysReg, RegClass, StorageClass,
    };

    #[test]
    fn test_print_instruction() {
        let load = Instruction::new(
            Opcode::GlobalLoadDword,
            Format::Global(FlatLike {
                offset: 16,
                glc: true,
                sync: MemorySyncInfo::storage(StorageClass::BUFFER),
                ..FlatLike::default()
            }),
            vec![Definition::new(PhysReg::vgpr(1), RegClass::V1)],
            vec![
                Operand::reg(PhysReg::vgpr(2), RegClass::V2),
                Operand::undef(),
            ],
        );
        assert_eq!(
            load.to_string(),
            "v1 = global_load_dword v[2:3], undef offset:16 glc storage:buffer"
        );

        let wait = Instruction::waitcnt(0xc07f);
        assert_eq!(wait.to_string(), "s_waitcnt imm:0xc07f");

        let branch = Instruction::branch(Opcode::SCbranchScc0, 2, Some(PhysReg::new(10)));
        assert_eq!(branch.to_string(), "s[10:11] = s_cbranch_scc0 block:BB2");
    }

    #[test]
    fn test_print_vop3_promotion() {
        let add = Instruction::new(
            Opcode::VAddF32,
            Format::Vop3(crate::ir::Vop3 {
                clamp: true,
                neg: [true, false, false],
                ..Default::default()
            }),
            vec![Definition::new(PhysReg::vgpr(0), RegClass::V1)],
            vec![
                Operand::reg(PhysReg::vgpr(1), RegClass::V1),
                Operand::c32(0x3f80_0000),
            ],
        );
        assert_eq!(add.to_string(), "v0 = v_add_f32 v1, 0x3f800000 e64 neg:1 clamp");
    }
}
