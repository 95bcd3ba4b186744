// This module holds the in-memory program representation consumed by the wait-count pass and
// the assembler. A Program is an arena of Blocks addressed by index; each Block owns its
// machine Instructions, its linear and logical predecessor lists, its kind flags and, after
// assembly, its word offset. Registers are already physically assigned when a Program reaches
// this crate, so operands and definitions carry PhysReg values rather than virtual temporaries.
// Submodules provide the opcode tables, register and operand types, memory synchronisation
// info, the per-format instruction representation, construction helpers, the textual printer
// and a structural validator.

//! Shader program representation.

pub mod builder;
pub mod instr;
pub mod opcode;
pub mod print;
pub mod reg;
pub mod sync;
pub mod validate;

pub use instr::{
    Barrier, Dpp, Ds, Export, FlatLike, Format, Instruction, Interp, Mimg, Mtbuf, Mubuf,
    PseudoBranch, Sdwa, Smem, Sopk, Sopp, SubdwordSel, Vop3, Vop3p,
};
pub use opcode::{BaseFormat, Opcode, OpcodeTable};
pub use reg::{Definition, Operand, OperandKind, PhysReg, RegClass, RegType};
pub use sync::{MemorySyncInfo, Semantics, StorageClass, SyncScope};

use bitflags::bitflags;
use std::fmt;

/// Hardware generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChipClass {
    Gfx6,
    Gfx7,
    Gfx8,
    Gfx9,
    Gfx10,
    Gfx10_3,
}

impl ChipClass {
    pub const ALL: [ChipClass; 6] = [
        ChipClass::Gfx6,
        ChipClass::Gfx7,
        ChipClass::Gfx8,
        ChipClass::Gfx9,
        ChipClass::Gfx10,
        ChipClass::Gfx10_3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChipClass::Gfx6 => "gfx6",
            ChipClass::Gfx7 => "gfx7",
            ChipClass::Gfx8 => "gfx8",
            ChipClass::Gfx9 => "gfx9",
            ChipClass::Gfx10 => "gfx10",
            ChipClass::Gfx10_3 => "gfx10.3",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ChipClass::ALL.into_iter().find(|chip| chip.name() == name)
    }
}

impl fmt::Display for ChipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hardware shader stage the program runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HwStage {
    Vs,
    Ngg,
    Fs,
    Gs,
    Hs,
    Ls,
    Es,
    Cs,
}

impl HwStage {
    pub const ALL: [HwStage; 8] = [
        HwStage::Vs,
        HwStage::Ngg,
        HwStage::Fs,
        HwStage::Gs,
        HwStage::Hs,
        HwStage::Ls,
        HwStage::Es,
        HwStage::Cs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HwStage::Vs => "vs",
            HwStage::Ngg => "ngg",
            HwStage::Fs => "fs",
            HwStage::Gs => "gs",
            HwStage::Hs => "hs",
            HwStage::Ls => "ls",
            HwStage::Es => "es",
            HwStage::Cs => "cs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        HwStage::ALL.into_iter().find(|stage| stage.name() == name)
    }

    /// Stages whose last export must be flagged `done`.
    pub fn needs_final_export(self) -> bool {
        matches!(self, HwStage::Vs | HwStage::Ngg | HwStage::Fs)
    }
}

impl fmt::Display for HwStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Control-flow classification of a block.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct BlockKind: u32 {
        const UNIFORM = 1 << 0;
        const TOP_LEVEL = 1 << 1;
        const LOOP_PREHEADER = 1 << 2;
        const LOOP_HEADER = 1 << 3;
        const LOOP_EXIT = 1 << 4;
        const CONTINUE = 1 << 5;
        const BREAK = 1 << 6;
        const BRANCH = 1 << 7;
        const MERGE = 1 << 8;
        const INVERT = 1 << 9;
        const EXPORT_END = 1 << 10;
    }
}

/// A basic block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: u32,
    pub instructions: Vec<Instruction>,
    /// Word offset of the first instruction, valid after assembly.
    pub offset: u32,
    pub linear_preds: Vec<u32>,
    pub logical_preds: Vec<u32>,
    pub kind: BlockKind,
    pub loop_nest_depth: u32,
}

impl Block {
    pub fn new(index: u32, kind: BlockKind) -> Self {
        Self {
            index,
            instructions: Vec::new(),
            offset: 0,
            linear_preds: Vec::new(),
            logical_preds: Vec::new(),
            kind,
            loop_nest_depth: 0,
        }
    }
}

/// A register-allocated shader program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub blocks: Vec<Block>,
    pub chip_class: ChipClass,
    pub stage: HwStage,
    pub wave_size: u32,
    pub workgroup_size: u32,
    /// Workgroup processor mode (two compute units share one workgroup).
    pub wgp_mode: bool,
    /// Rasterization starts after the first `done` position export.
    pub early_rast: bool,
    /// Registers written by vertex fetches still in flight at program start.
    pub vs_inputs: Vec<Definition>,
    pub constant_data: Vec<u8>,
}

impl Program {
    /// Create an empty program.
    pub fn new(chip_class: ChipClass, stage: HwStage) -> Self {
        Self {
            blocks: Vec::new(),
            chip_class,
            stage,
            wave_size: 64,
            workgroup_size: 64,
            wgp_mode: false,
            early_rast: false,
            vs_inputs: Vec::new(),
            constant_data: Vec::new(),
        }
    }

    /// Append a new block and return its index.
    pub fn create_block(&mut self, kind: BlockKind) -> u32 {
        let index = self.blocks.len() as u32;
        self.blocks.push(Block::new(index, kind));
        index
    }

    /// Add a control-flow edge that is both linear and logical.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.add_linear_edge(from, to);
        self.add_logical_edge(from, to);
    }

    pub fn add_linear_edge(&mut self, from: u32, to: u32) {
        self.blocks[to as usize].linear_preds.push(from);
    }

    pub fn add_logical_edge(&mut self, from: u32, to: u32) {
        self.blocks[to as usize].logical_preds.push(from);
    }

    pub fn block(&self, index: u32) -> &Block {
        &self.blocks[index as usize]
    }

    pub fn block_mut(&mut self, index: u32) -> &mut Block {
        &mut self.blocks[index as usize]
    }

    pub fn instruction_count(&self) -> usize {
        self.blocks.iter().map(|b| b.instructions.len()).sum()
    }
}
