//! Convenience constructors for common instruction shapes.

use super::instr::{Barrier, Format, Instruction, Sopk, Sopp};
use super::opcode::Opcode;
use super::reg::{Definition, Operand, PhysReg, RegClass};
use super::sync::{MemorySyncInfo, SyncScope};
use super::BaseFormat;

impl Instruction {
    /// An instruction in its opcode's native format with default side data.
    pub fn native(opcode: Opcode, definitions: Vec<Definition>, operands: Vec<Operand>) -> Self {
        Self::new(
            opcode,
            Format::default_for(opcode.base_format()),
            definitions,
            operands,
        )
    }

    pub fn sop1(opcode: Opcode, definitions: Vec<Definition>, operands: Vec<Operand>) -> Self {
        Self::new(opcode, Format::Sop1, definitions, operands)
    }

    pub fn sop2(opcode: Opcode, definitions: Vec<Definition>, operands: Vec<Operand>) -> Self {
        Self::new(opcode, Format::Sop2, definitions, operands)
    }

    pub fn sopc(opcode: Opcode, operands: Vec<Operand>) -> Self {
        Self::new(
            opcode,
            Format::Sopc,
            vec![Definition::new(PhysReg::SCC, RegClass::S1)],
            operands,
        )
    }

    pub fn sopk(opcode: Opcode, definitions: Vec<Definition>, imm: u16) -> Self {
        Self::new(opcode, Format::Sopk(Sopk { imm }), definitions, Vec::new())
    }

    pub fn sopp(opcode: Opcode, imm: u32) -> Self {
        Self::new(
            opcode,
            Format::Sopp(Sopp { imm, block: None }),
            Vec::new(),
            Vec::new(),
        )
    }

    /// A hardware branch to `target`. `scratch` is an SGPR pair the assembler
    /// may clobber if the branch has to become a long jump.
    pub fn branch(opcode: Opcode, target: u32, scratch: Option<PhysReg>) -> Self {
        let definitions = scratch
            .map(|reg| vec![Definition::new(reg, RegClass::S2)])
            .unwrap_or_default();
        Self::new(
            opcode,
            Format::Sopp(Sopp {
                imm: 0,
                block: Some(target),
            }),
            definitions,
            Vec::new(),
        )
    }

    pub fn waitcnt(packed: u16) -> Self {
        Self::sopp(Opcode::SWaitcnt, packed as u32)
    }

    pub fn waitcnt_vscnt(count: u16) -> Self {
        Self::sopk(
            Opcode::SWaitcntVscnt,
            vec![Definition::new(PhysReg::SGPR_NULL, RegClass::S1)],
            count,
        )
    }

    pub fn vop1(opcode: Opcode, def: Definition, src: Operand) -> Self {
        Self::new(opcode, Format::Vop1, vec![def], vec![src])
    }

    pub fn vop2(opcode: Opcode, def: Definition, src0: Operand, src1: Operand) -> Self {
        Self::new(opcode, Format::Vop2, vec![def], vec![src0, src1])
    }

    pub fn barrier(sync: MemorySyncInfo, exec_scope: SyncScope) -> Self {
        Self::new(
            Opcode::PBarrier,
            Format::PseudoBarrier(Barrier { sync, exec_scope }),
            Vec::new(),
            Vec::new(),
        )
    }

    /// Materialise the address of `offset` bytes into the constant pool in an
    /// SGPR pair.
    pub fn constaddr(dest: PhysReg, offset: u32) -> Self {
        Self::new(
            Opcode::PConstaddr,
            Format::default_for(BaseFormat::Pseudo),
            vec![Definition::new(dest, RegClass::S2)],
            vec![Operand::c32(offset)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_scratch() {
        let branch = Instruction::branch(Opcode::SBranch, 3, Some(PhysReg::new(20)));
        assert_eq!(branch.branch_target(), Some(3));
        assert_eq!(branch.definitions[0].reg_class(), RegClass::S2);
        assert!(Instruction::branch(Opcode::SBranch, 3, None)
            .definitions
            .is_empty());
    }

    #[test]
    fn test_native_format() {
        let instr = Instruction::native(Opcode::GlobalLoadDword, Vec::new(), Vec::new());
        assert!(matches!(instr.format, Format::Global(_)));
        let instr = Instruction::native(Opcode::VMadF32, Vec::new(), Vec::new());
        assert!(matches!(instr.format, Format::Vop3(_)));
    }
}
