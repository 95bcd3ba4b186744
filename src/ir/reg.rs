//! Physical registers, register classes, operands and definitions.

use std::fmt;

/// A physical register slot with a byte offset.
///
/// Slots 0-255 form the scalar source operand space (SGPRs, special registers,
/// inline constants), slots 256-511 are VGPRs. The byte offset only matters for
/// sub-dword VGPR accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PhysReg {
    reg_b: u16,
}

impl PhysReg {
    pub const VCC: PhysReg = PhysReg::new(106);
    pub const VCC_HI: PhysReg = PhysReg::new(107);
    pub const M0: PhysReg = PhysReg::new(124);
    pub const SGPR_NULL: PhysReg = PhysReg::new(125);
    pub const EXEC: PhysReg = PhysReg::new(126);
    pub const EXEC_HI: PhysReg = PhysReg::new(127);
    pub const SCC: PhysReg = PhysReg::new(253);
    pub const LITERAL: PhysReg = PhysReg::new(255);
    pub const FIRST_VGPR: u32 = 256;

    pub const fn new(reg: u32) -> Self {
        Self {
            reg_b: (reg << 2) as u16,
        }
    }

    pub const fn with_byte(reg: u32, byte: u32) -> Self {
        Self {
            reg_b: ((reg << 2) | (byte & 3)) as u16,
        }
    }

    pub fn vgpr(index: u32) -> Self {
        Self::new(Self::FIRST_VGPR + index)
    }

    /// Register slot number.
    pub const fn reg(self) -> u32 {
        (self.reg_b >> 2) as u32
    }

    pub const fn byte(self) -> u32 {
        (self.reg_b & 3) as u32
    }

    pub const fn reg_b(self) -> u32 {
        self.reg_b as u32
    }

    pub fn is_vgpr(self) -> bool {
        self.reg() >= Self::FIRST_VGPR
    }

    /// The slot `dwords` registers further on, byte offset dropped.
    pub fn offset(self, dwords: u32) -> Self {
        Self::new(self.reg() + dwords)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegType {
    Sgpr,
    Vgpr,
}

/// Register file and size of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegClass {
    ty: RegType,
    bytes: u8,
    linear: bool,
}

impl RegClass {
    pub const S1: RegClass = RegClass::new(RegType::Sgpr, 1);
    pub const S2: RegClass = RegClass::new(RegType::Sgpr, 2);
    pub const S3: RegClass = RegClass::new(RegType::Sgpr, 3);
    pub const S4: RegClass = RegClass::new(RegType::Sgpr, 4);
    pub const S8: RegClass = RegClass::new(RegType::Sgpr, 8);
    pub const S16: RegClass = RegClass::new(RegType::Sgpr, 16);
    pub const V1: RegClass = RegClass::new(RegType::Vgpr, 1);
    pub const V2: RegClass = RegClass::new(RegType::Vgpr, 2);
    pub const V3: RegClass = RegClass::new(RegType::Vgpr, 3);
    pub const V4: RegClass = RegClass::new(RegType::Vgpr, 4);
    pub const V1B: RegClass = RegClass::subdword(1);
    pub const V2B: RegClass = RegClass::subdword(2);

    pub const fn new(ty: RegType, dwords: u32) -> Self {
        Self {
            ty,
            bytes: (dwords * 4) as u8,
            linear: matches!(ty, RegType::Sgpr),
        }
    }

    /// A VGPR class smaller than a dword.
    pub const fn subdword(bytes: u32) -> Self {
        Self {
            ty: RegType::Vgpr,
            bytes: bytes as u8,
            linear: false,
        }
    }

    /// The same class, but live in all lanes regardless of exec.
    pub const fn as_linear(self) -> Self {
        Self {
            linear: true,
            ..self
        }
    }

    pub fn ty(self) -> RegType {
        self.ty
    }

    pub fn bytes(self) -> u32 {
        self.bytes as u32
    }

    /// Size in dwords, rounded up.
    pub fn size(self) -> u32 {
        (self.bytes as u32).div_ceil(4)
    }

    pub fn is_linear(self) -> bool {
        self.linear
    }

    pub fn is_subdword(self) -> bool {
        self.bytes % 4 != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Reg(PhysReg),
    Constant(u32),
    /// A constant always encoded as a trailing literal dword.
    Literal(u32),
    Undefined,
}

/// An instruction source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    kind: OperandKind,
    rc: RegClass,
}

/// Source field code of an inline constant, if `value` has one.
pub fn inline_constant(value: u32) -> Option<u32> {
    let signed = value as i32;
    match signed {
        0..=64 => Some(128 + value),
        -16..=-1 => Some((192 - signed) as u32),
        _ => match value {
            0x3f00_0000 => Some(240), // 0.5
            0xbf00_0000 => Some(241), // -0.5
            0x3f80_0000 => Some(242), // 1.0
            0xbf80_0000 => Some(243), // -1.0
            0x4000_0000 => Some(244), // 2.0
            0xc000_0000 => Some(245), // -2.0
            0x4080_0000 => Some(246), // 4.0
            0xc080_0000 => Some(247), // -4.0
            0x3e22_f983 => Some(248), // 1/(2*pi)
            _ => None,
        },
    }
}

impl Operand {
    pub fn reg(reg: PhysReg, rc: RegClass) -> Self {
        Self {
            kind: OperandKind::Reg(reg),
            rc,
        }
    }

    /// A 32-bit constant, inline or literal depending on its value.
    pub fn c32(value: u32) -> Self {
        Self {
            kind: OperandKind::Constant(value),
            rc: RegClass::S1,
        }
    }

    /// A constant forced into the literal slot even if it could be inlined.
    pub fn literal(value: u32) -> Self {
        Self {
            kind: OperandKind::Literal(value),
            rc: RegClass::S1,
        }
    }

    pub fn zero() -> Self {
        Self::c32(0)
    }

    pub fn undef() -> Self {
        Self {
            kind: OperandKind::Undefined,
            rc: RegClass::S1,
        }
    }

    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    pub fn reg_class(&self) -> RegClass {
        self.rc
    }

    /// Size in dwords.
    pub fn size(&self) -> u32 {
        self.rc.size()
    }

    pub fn is_reg(&self) -> bool {
        matches!(self.kind, OperandKind::Reg(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind, OperandKind::Constant(_) | OperandKind::Literal(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self.kind, OperandKind::Undefined)
    }

    /// A constant that needs a trailing literal dword.
    pub fn is_literal(&self) -> bool {
        match self.kind {
            OperandKind::Constant(value) => inline_constant(value).is_none(),
            OperandKind::Literal(_) => true,
            _ => false,
        }
    }

    pub fn constant_value(&self) -> Option<u32> {
        match self.kind {
            OperandKind::Constant(value) | OperandKind::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The source operand code: register slot, inline constant code or the
    /// literal marker.
    pub fn phys_reg(&self) -> PhysReg {
        match self.kind {
            OperandKind::Reg(reg) => reg,
            OperandKind::Constant(value) => {
                PhysReg::new(inline_constant(value).unwrap_or(PhysReg::LITERAL.reg()))
            }
            OperandKind::Literal(_) => PhysReg::LITERAL,
            OperandKind::Undefined => PhysReg::new(128),
        }
    }

    /// Register slots read by this operand.
    pub fn slots(&self) -> impl Iterator<Item = PhysReg> {
        let (base, count) = match self.kind {
            OperandKind::Reg(reg) => (reg, self.size()),
            _ => (PhysReg::default(), 0),
        };
        (0..count).map(move |i| base.offset(i))
    }
}

/// An instruction destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Definition {
    reg: PhysReg,
    rc: RegClass,
}

impl Definition {
    pub fn new(reg: PhysReg, rc: RegClass) -> Self {
        Self { reg, rc }
    }

    pub fn phys_reg(&self) -> PhysReg {
        self.reg
    }

    pub fn reg_class(&self) -> RegClass {
        self.rc
    }

    pub fn size(&self) -> u32 {
        self.rc.size()
    }

    pub fn bytes(&self) -> u32 {
        self.rc.bytes()
    }

    pub fn slots(&self) -> impl Iterator<Item = PhysReg> {
        let base = self.reg;
        (0..self.size()).map(move |i| base.offset(i))
    }
}

/// Write a register range the way the printer and parser expect it.
pub(crate) fn fmt_reg(f: &mut fmt::Formatter<'_>, reg: PhysReg, rc: RegClass) -> fmt::Result {
    let size = rc.size();
    if rc.ty() == RegType::Vgpr {
        let index = reg.reg().saturating_sub(PhysReg::FIRST_VGPR);
        if rc.is_subdword() {
            return write!(f, "v{}.b{}x{}", index, reg.byte(), rc.bytes());
        }
        return if size == 1 {
            write!(f, "v{index}")
        } else {
            write!(f, "v[{}:{}]", index, index + size - 1)
        };
    }

    let named = match (reg.reg(), size) {
        (106, 2) => Some("vcc"),
        (106, 1) => Some("vcc_lo"),
        (107, 1) => Some("vcc_hi"),
        (124, 1) => Some("m0"),
        (125, 1) => Some("null"),
        (126, 2) => Some("exec"),
        (126, 1) => Some("exec_lo"),
        (127, 1) => Some("exec_hi"),
        (253, 1) => Some("scc"),
        _ => None,
    };
    match named {
        Some(name) => f.write_str(name),
        None if size == 1 => write!(f, "s{}", reg.reg()),
        None => write!(f, "s[{}:{}]", reg.reg(), reg.reg() + size - 1),
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OperandKind::Reg(reg) => fmt_reg(f, reg, self.rc),
            OperandKind::Constant(value) => {
                let signed = value as i32;
                if (-16..=64).contains(&signed) {
                    write!(f, "{signed}")
                } else {
                    write!(f, "0x{value:x}")
                }
            }
            OperandKind::Literal(value) => write!(f, "lit(0x{value:x})"),
            OperandKind::Undefined => f.write_str("undef"),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_reg(f, self.reg, self.rc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_constants() {
        assert_eq!(Operand::c32(0).phys_reg().reg(), 128);
        assert_eq!(Operand::c32(64).phys_reg().reg(), 192);
        assert_eq!(Operand::c32(-1i32 as u32).phys_reg().reg(), 193);
        assert_eq!(Operand::c32(-16i32 as u32).phys_reg().reg(), 208);
        assert_eq!(Operand::c32(0x3f80_0000).phys_reg().reg(), 242);
        assert!(Operand::c32(65).is_literal());
        assert!(Operand::c32(-17i32 as u32).is_literal());
        assert!(!Operand::c32(0xbf80_0000).is_literal());
        assert_eq!(Operand::c32(1000).phys_reg(), PhysReg::LITERAL);
        assert!(Operand::literal(0).is_literal());
        assert_eq!(Operand::literal(0).phys_reg(), PhysReg::LITERAL);
    }

    #[test]
    fn test_slots() {
        let op = Operand::reg(PhysReg::vgpr(4), RegClass::V3);
        let slots: Vec<u32> = op.slots().map(|r| r.reg()).collect();
        assert_eq!(slots, vec![260, 261, 262]);
        assert_eq!(Operand::c32(5).slots().count(), 0);

        let def = Definition::new(PhysReg::new(10), RegClass::S2);
        assert_eq!(def.slots().map(|r| r.reg()).collect::<Vec<_>>(), vec![10, 11]);
    }

    #[test]
    fn test_register_classes() {
        assert!(RegClass::S2.is_linear());
        assert!(!RegClass::V2.is_linear());
        assert!(RegClass::V2.as_linear().is_linear());
        assert_eq!(RegClass::V2B.size(), 1);
        assert!(RegClass::V2B.is_subdword());
        assert_eq!(RegClass::S16.size(), 16);
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::reg(PhysReg::vgpr(0), RegClass::V2).to_string(), "v[0:1]");
        assert_eq!(Operand::reg(PhysReg::new(4), RegClass::S4).to_string(), "s[4:7]");
        assert_eq!(Operand::reg(PhysReg::VCC, RegClass::S2).to_string(), "vcc");
        assert_eq!(Operand::reg(PhysReg::EXEC, RegClass::S1).to_string(), "exec_lo");
        assert_eq!(Operand::c32(-4i32 as u32).to_string(), "-4");
        assert_eq!(Operand::c32(0x1234).to_string(), "0x1234");
        assert_eq!(
            Definition::new(PhysReg::with_byte(259, 2), RegClass::V2B).to_string(),
            "v3.b2x2"
        );
    }
}
