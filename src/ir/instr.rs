//! Machine instructions.
//!
//! An instruction carries exactly one [`Format`]; the variant holds the side
//! data that only makes sense for that encoding, so the assembler can match on
//! it exhaustively.

use super::opcode::{BaseFormat, Opcode};
use super::reg::{Definition, Operand};
use super::sync::{MemorySyncInfo, SyncScope};

/// SOPK immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sopk {
    pub imm: u16,
}

/// SOPP immediate and, for branches, the target block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sopp {
    pub imm: u32,
    pub block: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Smem {
    pub sync: MemorySyncInfo,
    pub glc: bool,
    pub dlc: bool,
    pub nv: bool,
}

/// Local/global data share access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ds {
    pub sync: MemorySyncInfo,
    pub offset0: u16,
    pub offset1: u8,
    pub gds: bool,
}

/// Untyped buffer access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mubuf {
    pub sync: MemorySyncInfo,
    pub offset: u16,
    pub offen: bool,
    pub idxen: bool,
    pub addr64: bool,
    pub glc: bool,
    pub dlc: bool,
    pub slc: bool,
    pub tfe: bool,
    pub lds: bool,
}

/// Typed buffer access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mtbuf {
    pub sync: MemorySyncInfo,
    pub dfmt: u8,
    pub nfmt: u8,
    pub offset: u16,
    pub offen: bool,
    pub idxen: bool,
    pub glc: bool,
    pub dlc: bool,
    pub slc: bool,
    pub tfe: bool,
}

/// Image access. Operands are resource, sampler, store data, then addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mimg {
    pub sync: MemorySyncInfo,
    pub dmask: u8,
    pub dim: u8,
    pub unrm: bool,
    pub da: bool,
    pub glc: bool,
    pub dlc: bool,
    pub slc: bool,
    pub tfe: bool,
    pub lwe: bool,
    pub r128: bool,
    pub a16: bool,
    pub d16: bool,
}

/// Export to a render target, position or parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Export {
    pub enabled_mask: u8,
    pub dest: u8,
    pub compressed: bool,
    pub done: bool,
    pub valid_mask: bool,
}

impl Export {
    pub const DEST_MRT0: u8 = 0;
    pub const DEST_MRTZ: u8 = 8;
    pub const DEST_NULL: u8 = 9;
    pub const DEST_POS: u8 = 12;
    pub const DEST_PRIM: u8 = 20;
    pub const DEST_PARAM: u8 = 32;

    pub fn is_position(&self) -> bool {
        (Self::DEST_POS..Self::DEST_POS + 4).contains(&self.dest)
    }
}

/// Flat, global and scratch accesses share this layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlatLike {
    pub sync: MemorySyncInfo,
    pub offset: i16,
    pub glc: bool,
    pub slc: bool,
    pub dlc: bool,
    pub lds: bool,
    pub nv: bool,
}

/// Parameter interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interp {
    pub attribute: u8,
    pub component: u8,
}

/// VOP3 source and output modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vop3 {
    pub abs: [bool; 3],
    pub neg: [bool; 3],
    pub opsel: u8,
    pub clamp: bool,
    pub omod: u8,
}

/// Packed math modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vop3p {
    pub neg_lo: [bool; 3],
    pub neg_hi: [bool; 3],
    pub opsel_lo: u8,
    pub opsel_hi: u8,
    pub clamp: bool,
}

impl Default for Vop3p {
    fn default() -> Self {
        Self {
            neg_lo: [false; 3],
            neg_hi: [false; 3],
            opsel_lo: 0,
            opsel_hi: 0b111,
            clamp: false,
        }
    }
}

/// Data-parallel lane permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dpp {
    pub dpp_ctrl: u16,
    pub row_mask: u8,
    pub bank_mask: u8,
    pub abs: [bool; 2],
    pub neg: [bool; 2],
    pub bound_ctrl: bool,
}

impl Default for Dpp {
    fn default() -> Self {
        Self {
            dpp_ctrl: 0,
            row_mask: 0xf,
            bank_mask: 0xf,
            abs: [false; 2],
            neg: [false; 2],
            bound_ctrl: false,
        }
    }
}

/// Byte or word selection of a sub-dword operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubdwordSel {
    pub size: u8,
    pub offset: u8,
    pub sign_extend: bool,
}

impl SubdwordSel {
    pub const DWORD: SubdwordSel = SubdwordSel::new(4, 0, false);

    pub const fn new(size: u8, offset: u8, sign_extend: bool) -> Self {
        Self {
            size,
            offset,
            sign_extend,
        }
    }

    /// The SDWA_SEL field value for an operand living at `reg_byte_offset`.
    pub fn to_sdwa_sel(self, reg_byte_offset: u32) -> u32 {
        let byte = reg_byte_offset + self.offset as u32;
        match self.size {
            1 => byte,
            2 => 4 + (byte >> 1),
            _ => 6,
        }
    }
}

impl Default for SubdwordSel {
    fn default() -> Self {
        Self::DWORD
    }
}

/// Sub-dword addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sdwa {
    pub sel: [SubdwordSel; 2],
    pub dst_sel: SubdwordSel,
    pub abs: [bool; 2],
    pub neg: [bool; 2],
    pub clamp: bool,
    pub omod: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Barrier {
    pub sync: MemorySyncInfo,
    pub exec_scope: SyncScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PseudoBranch {
    pub target: u32,
}

/// Encoding format together with its side data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Pseudo,
    PseudoBranch(PseudoBranch),
    PseudoBarrier(Barrier),
    Sop1,
    Sop2,
    Sopk(Sopk),
    Sopp(Sopp),
    Sopc,
    Smem(Smem),
    Ds(Ds),
    Mtbuf(Mtbuf),
    Mubuf(Mubuf),
    Mimg(Mimg),
    Exp(Export),
    Flat(FlatLike),
    Global(FlatLike),
    Scratch(FlatLike),
    Vop1,
    Vop2,
    Vopc,
    Vintrp(Interp),
    /// 64-bit encoding of a VOP1/VOP2/VOPC/VINTRP opcode, or a VOP3-only one.
    Vop3(Vop3),
    Vop3p(Vop3p),
    /// VOP1/VOP2/VOPC with a DPP control word.
    Dpp(Dpp),
    /// VOP1/VOP2/VOPC with an SDWA control word.
    Sdwa(Sdwa),
}

impl Format {
    /// Default side data for an opcode's native format.
    pub fn default_for(base: BaseFormat) -> Self {
        match base {
            BaseFormat::Pseudo => Format::Pseudo,
            BaseFormat::PseudoBranch => Format::PseudoBranch(PseudoBranch::default()),
            BaseFormat::PseudoBarrier => Format::PseudoBarrier(Barrier::default()),
            BaseFormat::Sop1 => Format::Sop1,
            BaseFormat::Sop2 => Format::Sop2,
            BaseFormat::Sopk => Format::Sopk(Sopk::default()),
            BaseFormat::Sopp => Format::Sopp(Sopp::default()),
            BaseFormat::Sopc => Format::Sopc,
            BaseFormat::Smem => Format::Smem(Smem::default()),
            BaseFormat::Ds => Format::Ds(Ds::default()),
            BaseFormat::Mtbuf => Format::Mtbuf(Mtbuf::default()),
            BaseFormat::Mubuf => Format::Mubuf(Mubuf::default()),
            BaseFormat::Mimg => Format::Mimg(Mimg {
                dmask: 0xf,
                ..Mimg::default()
            }),
            BaseFormat::Exp => Format::Exp(Export::default()),
            BaseFormat::Flat => Format::Flat(FlatLike::default()),
            BaseFormat::Global => Format::Global(FlatLike::default()),
            BaseFormat::Scratch => Format::Scratch(FlatLike::default()),
            BaseFormat::Vop1 => Format::Vop1,
            BaseFormat::Vop2 => Format::Vop2,
            BaseFormat::Vopc => Format::Vopc,
            BaseFormat::Vintrp => Format::Vintrp(Interp::default()),
            BaseFormat::Vop3 => Format::Vop3(Vop3::default()),
            BaseFormat::Vop3p => Format::Vop3p(Vop3p::default()),
        }
    }

    /// Whether an opcode natively encoded as `base` may carry this format.
    pub fn compatible_with(&self, base: BaseFormat) -> bool {
        match self {
            Format::Vop3(_) => base == BaseFormat::Vop3 || base.is_vop3_promotable(),
            Format::Dpp(_) | Format::Sdwa(_) => {
                matches!(base, BaseFormat::Vop1 | BaseFormat::Vop2 | BaseFormat::Vopc)
            }
            _ => Format::default_for(base).same_variant(self),
        }
    }

    fn same_variant(&self, other: &Format) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Pseudo => "pseudo",
            Format::PseudoBranch(_) => "pseudo branch",
            Format::PseudoBarrier(_) => "pseudo barrier",
            Format::Sop1 => "SOP1",
            Format::Sop2 => "SOP2",
            Format::Sopk(_) => "SOPK",
            Format::Sopp(_) => "SOPP",
            Format::Sopc => "SOPC",
            Format::Smem(_) => "SMEM",
            Format::Ds(_) => "DS",
            Format::Mtbuf(_) => "MTBUF",
            Format::Mubuf(_) => "MUBUF",
            Format::Mimg(_) => "MIMG",
            Format::Exp(_) => "EXP",
            Format::Flat(_) => "FLAT",
            Format::Global(_) => "GLOBAL",
            Format::Scratch(_) => "SCRATCH",
            Format::Vop1 => "VOP1",
            Format::Vop2 => "VOP2",
            Format::Vopc => "VOPC",
            Format::Vintrp(_) => "VINTRP",
            Format::Vop3(_) => "VOP3",
            Format::Vop3p(_) => "VOP3P",
            Format::Dpp(_) => "DPP",
            Format::Sdwa(_) => "SDWA",
        }
    }

    pub fn is_pseudo(&self) -> bool {
        matches!(
            self,
            Format::Pseudo | Format::PseudoBranch(_) | Format::PseudoBarrier(_)
        )
    }

    /// Memory synchronisation info of memory formats.
    pub fn sync_info(&self) -> MemorySyncInfo {
        match self {
            Format::Smem(smem) => smem.sync,
            Format::Ds(ds) => ds.sync,
            Format::Mtbuf(mtbuf) => mtbuf.sync,
            Format::Mubuf(mubuf) => mubuf.sync,
            Format::Mimg(mimg) => mimg.sync,
            Format::Flat(flat) | Format::Global(flat) | Format::Scratch(flat) => flat.sync,
            _ => MemorySyncInfo::default(),
        }
    }
}

/// A machine or pseudo instruction with assigned registers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub opcode: Opcode,
    pub format: Format,
    pub operands: Vec<Operand>,
    pub definitions: Vec<Definition>,
}

impl Instruction {
    pub fn new(
        opcode: Opcode,
        format: Format,
        definitions: Vec<Definition>,
        operands: Vec<Operand>,
    ) -> Self {
        Self {
            opcode,
            format,
            operands,
            definitions,
        }
    }

    /// Buffer and image accesses, which share the in-order vector memory path.
    pub fn is_vmem(&self) -> bool {
        matches!(
            self.format,
            Format::Mtbuf(_) | Format::Mubuf(_) | Format::Mimg(_)
        )
    }

    /// Image sample with a sampler descriptor.
    pub fn has_sampler(&self) -> bool {
        matches!(self.format, Format::Mimg(_))
            && self.operands.get(1).is_some_and(|op| {
                !op.is_undefined() && op.reg_class() == super::RegClass::S4
            })
    }

    pub fn sync_info(&self) -> MemorySyncInfo {
        self.format.sync_info()
    }

    /// Target block of a hardware branch.
    pub fn branch_target(&self) -> Option<u32> {
        match self.format {
            Format::Sopp(sopp) => sopp.block,
            Format::PseudoBranch(branch) => Some(branch.target),
            _ => None,
        }
    }

    pub fn writes_exec(&self) -> bool {
        self.definitions
            .first()
            .is_some_and(|def| def.phys_reg() == super::PhysReg::EXEC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compatibility() {
        assert!(Format::Vop3(Vop3::default()).compatible_with(BaseFormat::Vop2));
        assert!(Format::Vop3(Vop3::default()).compatible_with(BaseFormat::Vintrp));
        assert!(!Format::Vop3(Vop3::default()).compatible_with(BaseFormat::Sop2));
        assert!(Format::Dpp(Dpp::default()).compatible_with(BaseFormat::Vop1));
        assert!(!Format::Sdwa(Sdwa::default()).compatible_with(BaseFormat::Vop3));
        assert!(Format::Sopp(Sopp {
            imm: 3,
            block: None
        })
        .compatible_with(BaseFormat::Sopp));
        assert!(!Format::Sop1.compatible_with(BaseFormat::Sop2));
        assert!(Format::Global(FlatLike::default()).compatible_with(BaseFormat::Global));
        assert!(!Format::Global(FlatLike::default()).compatible_with(BaseFormat::Flat));
    }

    #[test]
    fn test_sdwa_sel() {
        assert_eq!(SubdwordSel::new(1, 0, false).to_sdwa_sel(2), 2);
        assert_eq!(SubdwordSel::new(2, 2, false).to_sdwa_sel(0), 5);
        assert_eq!(SubdwordSel::new(2, 0, false).to_sdwa_sel(2), 5);
        assert_eq!(SubdwordSel::DWORD.to_sdwa_sel(0), 6);
    }
}
