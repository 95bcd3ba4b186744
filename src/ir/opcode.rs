//! Opcode enumeration and per-generation encoding tables.
//!
//! Every opcode lives in a single table row carrying its mnemonic, the
//! instruction format it is natively encoded with, and the numeric opcode for
//! the three encoding families (GFX6-7, GFX8-9 and GFX10+). `-1` marks an
//! opcode that does not exist on that family.

use super::ChipClass;
use hashbrown::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// The native encoding format of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseFormat {
    Pseudo,
    PseudoBranch,
    PseudoBarrier,
    Sop1,
    Sop2,
    Sopk,
    Sopp,
    Sopc,
    Smem,
    Ds,
    Mtbuf,
    Mubuf,
    Mimg,
    Exp,
    Flat,
    Global,
    Scratch,
    Vop1,
    Vop2,
    Vopc,
    Vop3,
    Vop3p,
    Vintrp,
}

impl BaseFormat {
    pub fn is_pseudo(self) -> bool {
        matches!(
            self,
            BaseFormat::Pseudo | BaseFormat::PseudoBranch | BaseFormat::PseudoBarrier
        )
    }

    /// VALU formats that can be promoted to the 64-bit VOP3 encoding.
    pub fn is_vop3_promotable(self) -> bool {
        matches!(
            self,
            BaseFormat::Vop1 | BaseFormat::Vop2 | BaseFormat::Vopc | BaseFormat::Vintrp
        )
    }
}

macro_rules! define_opcodes {
    ($($variant:ident = $name:literal, $format:ident, $gfx7:expr, $gfx9:expr, $gfx10:expr;)*) => {
        /// Machine and pseudo opcodes known to the backend.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Opcode {
            $($variant,)*
        }

        impl Opcode {
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            /// Assembler mnemonic.
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name,)*
                }
            }

            pub fn base_format(self) -> BaseFormat {
                match self {
                    $(Opcode::$variant => BaseFormat::$format,)*
                }
            }
        }

        static GFX7_OPCODES: &[i16] = &[$($gfx7,)*];
        static GFX9_OPCODES: &[i16] = &[$($gfx9,)*];
        static GFX10_OPCODES: &[i16] = &[$($gfx10,)*];
    };
}

impl Opcode {
    /// Look an opcode up by mnemonic.
    pub fn from_name(name: &str) -> Option<Opcode> {
        static BY_NAME: OnceLock<HashMap<&'static str, Opcode>> = OnceLock::new();
        BY_NAME
            .get_or_init(|| Opcode::ALL.iter().map(|&op| (op.name(), op)).collect())
            .get(name)
            .copied()
    }

    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Opcode::SBranch
                | Opcode::SCbranchScc0
                | Opcode::SCbranchScc1
                | Opcode::SCbranchVccz
                | Opcode::SCbranchVccnz
                | Opcode::SCbranchExecz
                | Opcode::SCbranchExecnz
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric opcodes of one encoding family.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeTable {
    numbers: &'static [i16],
}

impl OpcodeTable {
    /// Select the table used for `chip`.
    pub fn for_chip(chip: ChipClass) -> Self {
        let numbers = match chip {
            ChipClass::Gfx6 | ChipClass::Gfx7 => GFX7_OPCODES,
            ChipClass::Gfx8 | ChipClass::Gfx9 => GFX9_OPCODES,
            ChipClass::Gfx10 | ChipClass::Gfx10_3 => GFX10_OPCODES,
        };
        Self { numbers }
    }

    /// Hardware opcode number, `None` if the opcode does not exist here.
    pub fn get(&self, op: Opcode) -> Option<u32> {
        let number = self.numbers[op as usize];
        (number >= 0).then_some(number as u32)
    }
}

define_opcodes! {
    // Pseudo
    PConstaddr = "p_constaddr", Pseudo, -1, -1, -1;
    PLogicalEnd = "p_logical_end", Pseudo, -1, -1, -1;
    PLogicalStart = "p_logical_start", Pseudo, -1, -1, -1;
    PParallelcopy = "p_parallelcopy", Pseudo, -1, -1, -1;
    PStartpgm = "p_startpgm", Pseudo, -1, -1, -1;
    PUnitTest = "p_unit_test", Pseudo, -1, -1, -1;

    // PseudoBranch
    PBranch = "p_branch", PseudoBranch, -1, -1, -1;
    PCbranchNz = "p_cbranch_nz", PseudoBranch, -1, -1, -1;
    PCbranchZ = "p_cbranch_z", PseudoBranch, -1, -1, -1;

    // PseudoBarrier
    PBarrier = "p_barrier", PseudoBarrier, -1, -1, -1;

    // Sop2
    SAddU32 = "s_add_u32", Sop2, 0x00, 0x00, 0x00;
    SSubU32 = "s_sub_u32", Sop2, 0x01, 0x01, 0x01;
    SAddI32 = "s_add_i32", Sop2, 0x02, 0x02, 0x02;
    SSubI32 = "s_sub_i32", Sop2, 0x03, 0x03, 0x03;
    SAddcU32 = "s_addc_u32", Sop2, 0x04, 0x04, 0x04;
    SSubbU32 = "s_subb_u32", Sop2, 0x05, 0x05, 0x05;
    SMinI32 = "s_min_i32", Sop2, 0x06, 0x06, 0x06;
    SMinU32 = "s_min_u32", Sop2, 0x07, 0x07, 0x07;
    SMaxI32 = "s_max_i32", Sop2, 0x08, 0x08, 0x08;
    SMaxU32 = "s_max_u32", Sop2, 0x09, 0x09, 0x09;
    SCselectB32 = "s_cselect_b32", Sop2, 0x0a, 0x0a, 0x0a;
    SCselectB64 = "s_cselect_b64", Sop2, 0x0b, 0x0b, 0x0b;
    SAndB32 = "s_and_b32", Sop2, 0x0e, 0x0c, 0x0e;
    SAndB64 = "s_and_b64", Sop2, 0x0f, 0x0d, 0x0f;
    SOrB32 = "s_or_b32", Sop2, 0x10, 0x0e, 0x10;
    SOrB64 = "s_or_b64", Sop2, 0x11, 0x0f, 0x11;
    SXorB32 = "s_xor_b32", Sop2, 0x12, 0x10, 0x12;
    SXorB64 = "s_xor_b64", Sop2, 0x13, 0x11, 0x13;
    SAndn2B32 = "s_andn2_b32", Sop2, 0x14, 0x12, 0x14;
    SAndn2B64 = "s_andn2_b64", Sop2, 0x15, 0x13, 0x15;
    SOrn2B32 = "s_orn2_b32", Sop2, 0x16, 0x14, 0x16;
    SOrn2B64 = "s_orn2_b64", Sop2, 0x17, 0x15, 0x17;
    SNandB32 = "s_nand_b32", Sop2, 0x18, 0x16, 0x18;
    SNandB64 = "s_nand_b64", Sop2, 0x19, 0x17, 0x19;
    SNorB32 = "s_nor_b32", Sop2, 0x1a, 0x18, 0x1a;
    SNorB64 = "s_nor_b64", Sop2, 0x1b, 0x19, 0x1b;
    SXnorB32 = "s_xnor_b32", Sop2, 0x1c, 0x1a, 0x1c;
    SXnorB64 = "s_xnor_b64", Sop2, 0x1d, 0x1b, 0x1d;
    SLshlB32 = "s_lshl_b32", Sop2, 0x1e, 0x1c, 0x1e;
    SLshlB64 = "s_lshl_b64", Sop2, 0x1f, 0x1d, 0x1f;
    SLshrB32 = "s_lshr_b32", Sop2, 0x20, 0x1e, 0x20;
    SLshrB64 = "s_lshr_b64", Sop2, 0x21, 0x1f, 0x21;
    SAshrI32 = "s_ashr_i32", Sop2, 0x22, 0x20, 0x22;
    SAshrI64 = "s_ashr_i64", Sop2, 0x23, 0x21, 0x23;
    SBfmB32 = "s_bfm_b32", Sop2, 0x24, 0x22, 0x24;
    SBfmB64 = "s_bfm_b64", Sop2, 0x25, 0x23, 0x25;
    SMulI32 = "s_mul_i32", Sop2, 0x26, 0x24, 0x26;
    SBfeU32 = "s_bfe_u32", Sop2, 0x27, 0x25, 0x27;
    SBfeI32 = "s_bfe_i32", Sop2, 0x28, 0x26, 0x28;
    SBfeU64 = "s_bfe_u64", Sop2, 0x29, 0x27, 0x29;
    SBfeI64 = "s_bfe_i64", Sop2, 0x2a, 0x28, 0x2a;
    SAbsdiffI32 = "s_absdiff_i32", Sop2, 0x2c, 0x2a, 0x2c;
    SLshl1AddU32 = "s_lshl1_add_u32", Sop2, -1, 0x2e, 0x2e;
    SLshl2AddU32 = "s_lshl2_add_u32", Sop2, -1, 0x2f, 0x2f;
    SLshl3AddU32 = "s_lshl3_add_u32", Sop2, -1, 0x30, 0x30;
    SLshl4AddU32 = "s_lshl4_add_u32", Sop2, -1, 0x31, 0x31;
    SPackLlB32B16 = "s_pack_ll_b32_b16", Sop2, -1, 0x32, 0x32;
    SPackLhB32B16 = "s_pack_lh_b32_b16", Sop2, -1, 0x33, 0x33;
    SPackHhB32B16 = "s_pack_hh_b32_b16", Sop2, -1, 0x34, 0x34;
    SMulHiU32 = "s_mul_hi_u32", Sop2, -1, 0x2c, 0x35;
    SMulHiI32 = "s_mul_hi_i32", Sop2, -1, 0x2d, 0x36;
    PConstaddrAddlo = "p_constaddr_addlo", Sop2, -1, -1, -1;
    SCbranchGFork = "s_cbranch_g_fork", Sop2, 0x2b, 0x29, -1;
    SRfeRestoreB64 = "s_rfe_restore_b64", Sop2, -1, 0x2b, -1;

    // Sopk
    SMovkI32 = "s_movk_i32", Sopk, 0x00, 0x00, 0x00;
    SVersion = "s_version", Sopk, -1, -1, 0x01;
    SCmovkI32 = "s_cmovk_i32", Sopk, 0x02, 0x01, 0x02;
    SCmpkEqI32 = "s_cmpk_eq_i32", Sopk, 0x03, 0x02, 0x03;
    SCmpkLgI32 = "s_cmpk_lg_i32", Sopk, 0x04, 0x03, 0x04;
    SCmpkGtI32 = "s_cmpk_gt_i32", Sopk, 0x05, 0x04, 0x05;
    SCmpkGeI32 = "s_cmpk_ge_i32", Sopk, 0x06, 0x05, 0x06;
    SCmpkLtI32 = "s_cmpk_lt_i32", Sopk, 0x07, 0x06, 0x07;
    SCmpkLeI32 = "s_cmpk_le_i32", Sopk, 0x08, 0x07, 0x08;
    SCmpkEqU32 = "s_cmpk_eq_u32", Sopk, 0x09, 0x08, 0x09;
    SCmpkLgU32 = "s_cmpk_lg_u32", Sopk, 0x0a, 0x09, 0x0a;
    SCmpkGtU32 = "s_cmpk_gt_u32", Sopk, 0x0b, 0x0a, 0x0b;
    SCmpkGeU32 = "s_cmpk_ge_u32", Sopk, 0x0c, 0x0b, 0x0c;
    SCmpkLtU32 = "s_cmpk_lt_u32", Sopk, 0x0d, 0x0c, 0x0d;
    SCmpkLeU32 = "s_cmpk_le_u32", Sopk, 0x0e, 0x0d, 0x0e;
    SAddkI32 = "s_addk_i32", Sopk, 0x0f, 0x0e, 0x0f;
    SMulkI32 = "s_mulk_i32", Sopk, 0x10, 0x0f, 0x10;
    SGetregB32 = "s_getreg_b32", Sopk, 0x12, 0x11, 0x12;
    SSetregB32 = "s_setreg_b32", Sopk, 0x13, 0x12, 0x13;
    SSetregImm32B32 = "s_setreg_imm32_b32", Sopk, 0x15, 0x14, 0x15;
    SCallB64 = "s_call_b64", Sopk, -1, 0x15, 0x16;
    SWaitcntVscnt = "s_waitcnt_vscnt", Sopk, -1, -1, 0x17;
    SWaitcntVmcnt = "s_waitcnt_vmcnt", Sopk, -1, -1, 0x18;
    SWaitcntExpcnt = "s_waitcnt_expcnt", Sopk, -1, -1, 0x19;
    SWaitcntLgkmcnt = "s_waitcnt_lgkmcnt", Sopk, -1, -1, 0x1a;
    SSubvectorLoopBegin = "s_subvector_loop_begin", Sopk, -1, -1, 0x1b;
    SSubvectorLoopEnd = "s_subvector_loop_end", Sopk, -1, -1, 0x1c;
    SCbranchIFork = "s_cbranch_i_fork", Sopk, 0x11, 0x10, -1;

    // Sop1
    SMovB32 = "s_mov_b32", Sop1, 0x03, 0x00, 0x03;
    SMovB64 = "s_mov_b64", Sop1, 0x04, 0x01, 0x04;
    SCmovB32 = "s_cmov_b32", Sop1, 0x05, 0x02, 0x05;
    SCmovB64 = "s_cmov_b64", Sop1, 0x06, 0x03, 0x06;
    SNotB32 = "s_not_b32", Sop1, 0x07, 0x04, 0x07;
    SNotB64 = "s_not_b64", Sop1, 0x08, 0x05, 0x08;
    SWqmB32 = "s_wqm_b32", Sop1, 0x09, 0x06, 0x09;
    SWqmB64 = "s_wqm_b64", Sop1, 0x0a, 0x07, 0x0a;
    SBrevB32 = "s_brev_b32", Sop1, 0x0b, 0x08, 0x0b;
    SBrevB64 = "s_brev_b64", Sop1, 0x0c, 0x09, 0x0c;
    SBcnt0I32B32 = "s_bcnt0_i32_b32", Sop1, 0x0d, 0x0a, 0x0d;
    SBcnt0I32B64 = "s_bcnt0_i32_b64", Sop1, 0x0e, 0x0b, 0x0e;
    SBcnt1I32B32 = "s_bcnt1_i32_b32", Sop1, 0x0f, 0x0c, 0x0f;
    SBcnt1I32B64 = "s_bcnt1_i32_b64", Sop1, 0x10, 0x0d, 0x10;
    SFf0I32B32 = "s_ff0_i32_b32", Sop1, 0x11, 0x0e, 0x11;
    SFf0I32B64 = "s_ff0_i32_b64", Sop1, 0x12, 0x0f, 0x12;
    SFf1I32B32 = "s_ff1_i32_b32", Sop1, 0x13, 0x10, 0x13;
    SFf1I32B64 = "s_ff1_i32_b64", Sop1, 0x14, 0x11, 0x14;
    SFlbitI32B32 = "s_flbit_i32_b32", Sop1, 0x15, 0x12, 0x15;
    SFlbitI32B64 = "s_flbit_i32_b64", Sop1, 0x16, 0x13, 0x16;
    SFlbitI32 = "s_flbit_i32", Sop1, 0x17, 0x14, 0x17;
    SFlbitI32I64 = "s_flbit_i32_i64", Sop1, 0x18, 0x15, 0x18;
    SSextI32I8 = "s_sext_i32_i8", Sop1, 0x19, 0x16, 0x19;
    SSextI32I16 = "s_sext_i32_i16", Sop1, 0x1a, 0x17, 0x1a;
    SBitset0B32 = "s_bitset0_b32", Sop1, 0x1b, 0x18, 0x1b;
    SBitset0B64 = "s_bitset0_b64", Sop1, 0x1c, 0x19, 0x1c;
    SBitset1B32 = "s_bitset1_b32", Sop1, 0x1d, 0x1a, 0x1d;
    SBitset1B64 = "s_bitset1_b64", Sop1, 0x1e, 0x1b, 0x1e;
    SGetpcB64 = "s_getpc_b64", Sop1, 0x1f, 0x1c, 0x1f;
    SSetpcB64 = "s_setpc_b64", Sop1, 0x20, 0x1d, 0x20;
    SSwappcB64 = "s_swappc_b64", Sop1, 0x21, 0x1e, 0x21;
    SRfeB64 = "s_rfe_b64", Sop1, 0x22, 0x1f, 0x22;
    SAndSaveexecB64 = "s_and_saveexec_b64", Sop1, 0x24, 0x20, 0x24;
    SOrSaveexecB64 = "s_or_saveexec_b64", Sop1, 0x25, 0x21, 0x25;
    SXorSaveexecB64 = "s_xor_saveexec_b64", Sop1, 0x26, 0x22, 0x26;
    SAndn2SaveexecB64 = "s_andn2_saveexec_b64", Sop1, 0x27, 0x23, 0x27;
    SOrn2SaveexecB64 = "s_orn2_saveexec_b64", Sop1, 0x28, 0x24, 0x28;
    SNandSaveexecB64 = "s_nand_saveexec_b64", Sop1, 0x29, 0x25, 0x29;
    SNorSaveexecB64 = "s_nor_saveexec_b64", Sop1, 0x2a, 0x26, 0x2a;
    SXnorSaveexecB64 = "s_xnor_saveexec_b64", Sop1, 0x2b, 0x27, 0x2b;
    SQuadmaskB32 = "s_quadmask_b32", Sop1, 0x2c, 0x28, 0x2c;
    SQuadmaskB64 = "s_quadmask_b64", Sop1, 0x2d, 0x29, 0x2d;
    SMovrelsB32 = "s_movrels_b32", Sop1, 0x2e, 0x2a, 0x2e;
    SMovrelsB64 = "s_movrels_b64", Sop1, 0x2f, 0x2b, 0x2f;
    SMovreldB32 = "s_movreld_b32", Sop1, 0x30, 0x2c, 0x30;
    SMovreldB64 = "s_movreld_b64", Sop1, 0x31, 0x2d, 0x31;
    SAbsI32 = "s_abs_i32", Sop1, 0x34, 0x30, 0x34;
    SMovFedB32 = "s_mov_fed_b32", Sop1, 0x35, -1, 0x35;
    SAndn1SaveexecB64 = "s_andn1_saveexec_b64", Sop1, -1, 0x33, 0x37;
    SOrn1SaveexecB64 = "s_orn1_saveexec_b64", Sop1, -1, 0x34, 0x38;
    SAndn1WrexecB64 = "s_andn1_wrexec_b64", Sop1, -1, 0x35, 0x39;
    SAndn2WrexecB64 = "s_andn2_wrexec_b64", Sop1, -1, 0x36, 0x3a;
    SBitreplicateB64B32 = "s_bitreplicate_b64_b32", Sop1, -1, 0x37, 0x3b;
    SAndSaveexecB32 = "s_and_saveexec_b32", Sop1, -1, -1, 0x3c;
    SOrSaveexecB32 = "s_or_saveexec_b32", Sop1, -1, -1, 0x3d;
    SXorSaveexecB32 = "s_xor_saveexec_b32", Sop1, -1, -1, 0x3e;
    SAndn2SaveexecB32 = "s_andn2_saveexec_b32", Sop1, -1, -1, 0x3f;
    SOrn2SaveexecB32 = "s_orn2_saveexec_b32", Sop1, -1, -1, 0x40;
    SNandSaveexecB32 = "s_nand_saveexec_b32", Sop1, -1, -1, 0x41;
    SNorSaveexecB32 = "s_nor_saveexec_b32", Sop1, -1, -1, 0x42;
    SXnorSaveexecB32 = "s_xnor_saveexec_b32", Sop1, -1, -1, 0x43;
    SAndn1SaveexecB32 = "s_andn1_saveexec_b32", Sop1, -1, -1, 0x44;
    SOrn1SaveexecB32 = "s_orn1_saveexec_b32", Sop1, -1, -1, 0x45;
    SAndn1WrexecB32 = "s_andn1_wrexec_b32", Sop1, -1, -1, 0x46;
    SAndn2WrexecB32 = "s_andn2_wrexec_b32", Sop1, -1, -1, 0x47;
    SMovrelsd2B32 = "s_movrelsd_2_b32", Sop1, -1, -1, 0x49;
    PConstaddrGetpc = "p_constaddr_getpc", Sop1, -1, -1, -1;
    SCbranchJoin = "s_cbranch_join", Sop1, 0x32, 0x2e, -1;
    SSetGprIdxIdx = "s_set_gpr_idx_idx", Sop1, -1, 0x32, -1;

    // Sopc
    SCmpEqI32 = "s_cmp_eq_i32", Sopc, 0x00, 0x00, 0x00;
    SCmpLgI32 = "s_cmp_lg_i32", Sopc, 0x01, 0x01, 0x01;
    SCmpGtI32 = "s_cmp_gt_i32", Sopc, 0x02, 0x02, 0x02;
    SCmpGeI32 = "s_cmp_ge_i32", Sopc, 0x03, 0x03, 0x03;
    SCmpLtI32 = "s_cmp_lt_i32", Sopc, 0x04, 0x04, 0x04;
    SCmpLeI32 = "s_cmp_le_i32", Sopc, 0x05, 0x05, 0x05;
    SCmpEqU32 = "s_cmp_eq_u32", Sopc, 0x06, 0x06, 0x06;
    SCmpLgU32 = "s_cmp_lg_u32", Sopc, 0x07, 0x07, 0x07;
    SCmpGtU32 = "s_cmp_gt_u32", Sopc, 0x08, 0x08, 0x08;
    SCmpGeU32 = "s_cmp_ge_u32", Sopc, 0x09, 0x09, 0x09;
    SCmpLtU32 = "s_cmp_lt_u32", Sopc, 0x0a, 0x0a, 0x0a;
    SCmpLeU32 = "s_cmp_le_u32", Sopc, 0x0b, 0x0b, 0x0b;
    SBitcmp0B32 = "s_bitcmp0_b32", Sopc, 0x0c, 0x0c, 0x0c;
    SBitcmp1B32 = "s_bitcmp1_b32", Sopc, 0x0d, 0x0d, 0x0d;
    SBitcmp0B64 = "s_bitcmp0_b64", Sopc, 0x0e, 0x0e, 0x0e;
    SBitcmp1B64 = "s_bitcmp1_b64", Sopc, 0x0f, 0x0f, 0x0f;
    SCmpEqU64 = "s_cmp_eq_u64", Sopc, -1, 0x12, 0x12;
    SCmpLgU64 = "s_cmp_lg_u64", Sopc, -1, 0x13, 0x13;
    SSetvskip = "s_setvskip", Sopc, 0x10, 0x10, -1;
    SSetGprIdxOn = "s_set_gpr_idx_on", Sopc, -1, 0x11, -1;

    // Sopp
    SNop = "s_nop", Sopp, 0x00, 0x00, 0x00;
    SEndpgm = "s_endpgm", Sopp, 0x01, 0x01, 0x01;
    SBranch = "s_branch", Sopp, 0x02, 0x02, 0x02;
    SWakeup = "s_wakeup", Sopp, -1, 0x03, 0x03;
    SCbranchScc0 = "s_cbranch_scc0", Sopp, 0x04, 0x04, 0x04;
    SCbranchScc1 = "s_cbranch_scc1", Sopp, 0x05, 0x05, 0x05;
    SCbranchVccz = "s_cbranch_vccz", Sopp, 0x06, 0x06, 0x06;
    SCbranchVccnz = "s_cbranch_vccnz", Sopp, 0x07, 0x07, 0x07;
    SCbranchExecz = "s_cbranch_execz", Sopp, 0x08, 0x08, 0x08;
    SCbranchExecnz = "s_cbranch_execnz", Sopp, 0x09, 0x09, 0x09;
    SBarrier = "s_barrier", Sopp, 0x0a, 0x0a, 0x0a;
    SSetkill = "s_setkill", Sopp, 0x0b, 0x0b, 0x0b;
    SWaitcnt = "s_waitcnt", Sopp, 0x0c, 0x0c, 0x0c;
    SSethalt = "s_sethalt", Sopp, 0x0d, 0x0d, 0x0d;
    SSleep = "s_sleep", Sopp, 0x0e, 0x0e, 0x0e;
    SSetprio = "s_setprio", Sopp, 0x0f, 0x0f, 0x0f;
    SSendmsg = "s_sendmsg", Sopp, 0x10, 0x10, 0x10;
    SSendmsghalt = "s_sendmsghalt", Sopp, 0x11, 0x11, 0x11;
    STrap = "s_trap", Sopp, 0x12, 0x12, 0x12;
    SIcacheInv = "s_icache_inv", Sopp, 0x13, 0x13, 0x13;
    SIncperflevel = "s_incperflevel", Sopp, 0x14, 0x14, 0x14;
    SDecperflevel = "s_decperflevel", Sopp, 0x15, 0x15, 0x15;
    STtracedata = "s_ttracedata", Sopp, 0x16, 0x16, 0x16;
    SCbranchCdbgsys = "s_cbranch_cdbgsys", Sopp, 0x17, 0x17, 0x17;
    SCbranchCdbguser = "s_cbranch_cdbguser", Sopp, 0x18, 0x18, 0x18;
    SCbranchCdbgsysOrUser = "s_cbranch_cdbgsys_or_user", Sopp, 0x19, 0x19, 0x19;
    SCbranchCdbgsysAndUser = "s_cbranch_cdbgsys_and_user", Sopp, 0x1a, 0x1a, 0x1a;
    SEndpgmSaved = "s_endpgm_saved", Sopp, -1, 0x1b, 0x1b;
    SEndpgmOrderedPsDone = "s_endpgm_ordered_ps_done", Sopp, -1, 0x1e, 0x1e;
    SCodeEnd = "s_code_end", Sopp, -1, -1, 0x1f;
    SInstPrefetch = "s_inst_prefetch", Sopp, -1, -1, 0x20;
    SClause = "s_clause", Sopp, -1, -1, 0x21;
    SWaitIdle = "s_wait_idle", Sopp, -1, -1, 0x22;
    SWaitcntDepctr = "s_waitcnt_depctr", Sopp, -1, -1, 0x23;
    SRoundMode = "s_round_mode", Sopp, -1, -1, 0x24;
    SDenormMode = "s_denorm_mode", Sopp, -1, -1, 0x25;
    STtracedataImm = "s_ttracedata_imm", Sopp, -1, -1, 0x26;
    SSetGprIdxOff = "s_set_gpr_idx_off", Sopp, -1, 0x1c, -1;
    SSetGprIdxMode = "s_set_gpr_idx_mode", Sopp, -1, 0x1d, -1;

    // Smem
    SLoadDword = "s_load_dword", Smem, 0x00, 0x00, 0x00;
    SLoadDwordx2 = "s_load_dwordx2", Smem, 0x01, 0x01, 0x01;
    SLoadDwordx4 = "s_load_dwordx4", Smem, 0x02, 0x02, 0x02;
    SLoadDwordx8 = "s_load_dwordx8", Smem, 0x03, 0x03, 0x03;
    SLoadDwordx16 = "s_load_dwordx16", Smem, 0x04, 0x04, 0x04;
    SScratchLoadDword = "s_scratch_load_dword", Smem, -1, 0x05, 0x05;
    SScratchLoadDwordx2 = "s_scratch_load_dwordx2", Smem, -1, 0x06, 0x06;
    SScratchLoadDwordx4 = "s_scratch_load_dwordx4", Smem, -1, 0x07, 0x07;
    SBufferLoadDword = "s_buffer_load_dword", Smem, 0x08, 0x08, 0x08;
    SBufferLoadDwordx2 = "s_buffer_load_dwordx2", Smem, 0x09, 0x09, 0x09;
    SBufferLoadDwordx4 = "s_buffer_load_dwordx4", Smem, 0x0a, 0x0a, 0x0a;
    SBufferLoadDwordx8 = "s_buffer_load_dwordx8", Smem, 0x0b, 0x0b, 0x0b;
    SBufferLoadDwordx16 = "s_buffer_load_dwordx16", Smem, 0x0c, 0x0c, 0x0c;
    SStoreDword = "s_store_dword", Smem, -1, 0x10, 0x10;
    SStoreDwordx2 = "s_store_dwordx2", Smem, -1, 0x11, 0x11;
    SStoreDwordx4 = "s_store_dwordx4", Smem, -1, 0x12, 0x12;
    SScratchStoreDword = "s_scratch_store_dword", Smem, -1, 0x15, 0x15;
    SScratchStoreDwordx2 = "s_scratch_store_dwordx2", Smem, -1, 0x16, 0x16;
    SScratchStoreDwordx4 = "s_scratch_store_dwordx4", Smem, -1, 0x17, 0x17;
    SBufferStoreDword = "s_buffer_store_dword", Smem, -1, 0x18, 0x18;
    SBufferStoreDwordx2 = "s_buffer_store_dwordx2", Smem, -1, 0x19, 0x19;
    SBufferStoreDwordx4 = "s_buffer_store_dwordx4", Smem, -1, 0x1a, 0x1a;
    SGl1Inv = "s_gl1_inv", Smem, -1, 0x1f, 0x1f;
    SDcacheInv = "s_dcache_inv", Smem, 0x1f, 0x20, 0x20;
    SDcacheWb = "s_dcache_wb", Smem, -1, 0x21, 0x21;
    SMemtime = "s_memtime", Smem, 0x1e, 0x24, 0x24;
    SMemrealtime = "s_memrealtime", Smem, -1, 0x25, 0x25;
    SAtcProbe = "s_atc_probe", Smem, -1, 0x26, 0x26;
    SAtcProbeBuffer = "s_atc_probe_buffer", Smem, -1, 0x27, 0x27;
    SDcacheDiscard = "s_dcache_discard", Smem, -1, 0x28, 0x28;
    SDcacheDiscardX2 = "s_dcache_discard_x2", Smem, -1, 0x29, 0x29;
    SGetWaveidInWorkgroup = "s_get_waveid_in_workgroup", Smem, -1, -1, 0x2a;
    SBufferAtomicSwap = "s_buffer_atomic_swap", Smem, -1, 0x40, 0x40;
    SBufferAtomicCmpswap = "s_buffer_atomic_cmpswap", Smem, -1, 0x41, 0x41;
    SBufferAtomicAdd = "s_buffer_atomic_add", Smem, -1, 0x42, 0x42;
    SBufferAtomicAddX2 = "s_buffer_atomic_add_x2", Smem, -1, 0x62, 0x62;
    SAtomicSwap = "s_atomic_swap", Smem, -1, 0x80, 0x80;
    SAtomicCmpswap = "s_atomic_cmpswap", Smem, -1, 0x81, 0x81;
    SAtomicAdd = "s_atomic_add", Smem, -1, 0x82, 0x82;
    SAtomicAddX2 = "s_atomic_add_x2", Smem, -1, 0xa2, 0xa2;
    SDcacheInvVol = "s_dcache_inv_vol", Smem, 0x1d, 0x22, -1;
    SDcacheWbVol = "s_dcache_wb_vol", Smem, -1, 0x23, -1;

    // Vop2
    VCndmaskB32 = "v_cndmask_b32", Vop2, 0x00, 0x00, 0x01;
    VAddF32 = "v_add_f32", Vop2, 0x03, 0x01, 0x03;
    VSubF32 = "v_sub_f32", Vop2, 0x04, 0x02, 0x04;
    VSubrevF32 = "v_subrev_f32", Vop2, 0x05, 0x03, 0x05;
    VMacLegacyF32 = "v_mac_legacy_f32", Vop2, 0x06, -1, 0x06;
    VMulLegacyF32 = "v_mul_legacy_f32", Vop2, 0x07, 0x04, 0x07;
    VMulF32 = "v_mul_f32", Vop2, 0x08, 0x05, 0x08;
    VMulI32I24 = "v_mul_i32_i24", Vop2, 0x09, 0x06, 0x09;
    VMulHiI32I24 = "v_mul_hi_i32_i24", Vop2, 0x0a, 0x07, 0x0a;
    VMulU32U24 = "v_mul_u32_u24", Vop2, 0x0b, 0x08, 0x0b;
    VMulHiU32U24 = "v_mul_hi_u32_u24", Vop2, 0x0c, 0x09, 0x0c;
    VDot4cI32I8 = "v_dot4c_i32_i8", Vop2, -1, 0x39, 0x0d;
    VMinF32 = "v_min_f32", Vop2, 0x0f, 0x0a, 0x0f;
    VMaxF32 = "v_max_f32", Vop2, 0x10, 0x0b, 0x10;
    VMinI32 = "v_min_i32", Vop2, 0x11, 0x0c, 0x11;
    VMaxI32 = "v_max_i32", Vop2, 0x12, 0x0d, 0x12;
    VMinU32 = "v_min_u32", Vop2, 0x13, 0x0e, 0x13;
    VMaxU32 = "v_max_u32", Vop2, 0x14, 0x0f, 0x14;
    VLshrrevB32 = "v_lshrrev_b32", Vop2, 0x16, 0x10, 0x16;
    VAshrrevI32 = "v_ashrrev_i32", Vop2, 0x18, 0x11, 0x18;
    VLshlrevB32 = "v_lshlrev_b32", Vop2, 0x1a, 0x12, 0x1a;
    VAndB32 = "v_and_b32", Vop2, 0x1b, 0x13, 0x1b;
    VOrB32 = "v_or_b32", Vop2, 0x1c, 0x14, 0x1c;
    VXorB32 = "v_xor_b32", Vop2, 0x1d, 0x15, 0x1d;
    VXnorB32 = "v_xnor_b32", Vop2, -1, -1, 0x1e;
    VMacF32 = "v_mac_f32", Vop2, 0x1f, 0x16, 0x1f;
    VMadmkF32 = "v_madmk_f32", Vop2, 0x20, 0x17, 0x20;
    VMadakF32 = "v_madak_f32", Vop2, 0x21, 0x18, 0x21;
    VAddU32 = "v_add_u32", Vop2, -1, 0x34, 0x25;
    VSubU32 = "v_sub_u32", Vop2, -1, 0x35, 0x26;
    VSubrevU32 = "v_subrev_u32", Vop2, -1, 0x36, 0x27;
    VAddcCoU32 = "v_addc_co_u32", Vop2, 0x28, 0x1c, 0x28;
    VSubbCoU32 = "v_subb_co_u32", Vop2, 0x29, 0x1d, 0x29;
    VSubbrevCoU32 = "v_subbrev_co_u32", Vop2, 0x2a, 0x1e, 0x2a;
    VFmacF32 = "v_fmac_f32", Vop2, -1, -1, 0x2b;
    VFmamkF32 = "v_fmamk_f32", Vop2, -1, -1, 0x2c;
    VFmaakF32 = "v_fmaak_f32", Vop2, -1, -1, 0x2d;
    VCvtPkrtzF16F32 = "v_cvt_pkrtz_f16_f32", Vop2, 0x2f, -1, 0x2f;
    VAddF16 = "v_add_f16", Vop2, -1, 0x1f, 0x32;
    VSubF16 = "v_sub_f16", Vop2, -1, 0x20, 0x33;
    VSubrevF16 = "v_subrev_f16", Vop2, -1, 0x21, 0x34;
    VMulF16 = "v_mul_f16", Vop2, -1, 0x22, 0x35;
    VFmacF16 = "v_fmac_f16", Vop2, -1, -1, 0x36;
    VFmamkF16 = "v_fmamk_f16", Vop2, -1, -1, 0x37;
    VFmaakF16 = "v_fmaak_f16", Vop2, -1, -1, 0x38;
    VMaxF16 = "v_max_f16", Vop2, -1, 0x2d, 0x39;
    VMinF16 = "v_min_f16", Vop2, -1, 0x2e, 0x3a;
    VLdexpF16 = "v_ldexp_f16", Vop2, -1, 0x33, 0x3b;
    VPkFmacF16 = "v_pk_fmac_f16", Vop2, -1, -1, 0x3c;
    VReadlaneB32 = "v_readlane_b32", Vop2, 0x01, -1, -1;
    VWritelaneB32 = "v_writelane_b32", Vop2, 0x02, -1, -1;
    VMinLegacyF32 = "v_min_legacy_f32", Vop2, 0x0d, -1, -1;
    VMaxLegacyF32 = "v_max_legacy_f32", Vop2, 0x0e, -1, -1;
    VLshrB32 = "v_lshr_b32", Vop2, 0x15, -1, -1;
    VAshrI32 = "v_ashr_i32", Vop2, 0x17, -1, -1;
    VLshlB32 = "v_lshl_b32", Vop2, 0x19, -1, -1;
    VMacF16 = "v_mac_f16", Vop2, -1, 0x23, -1;
    VMadmkF16 = "v_madmk_f16", Vop2, -1, 0x24, -1;
    VMbcntHiU32B32 = "v_mbcnt_hi_u32_b32", Vop2, 0x24, -1, -1;
    VAddCoU32 = "v_add_co_u32", Vop2, 0x25, 0x19, -1;
    VMadakF16 = "v_madak_f16", Vop2, -1, 0x25, -1;
    VAddU16 = "v_add_u16", Vop2, -1, 0x26, -1;
    VSubCoU32 = "v_sub_co_u32", Vop2, 0x26, 0x1a, -1;
    VSubU16 = "v_sub_u16", Vop2, -1, 0x27, -1;
    VSubrevCoU32 = "v_subrev_co_u32", Vop2, 0x27, 0x1b, -1;
    VSubrevU16 = "v_subrev_u16", Vop2, -1, 0x28, -1;
    VMulLoU16 = "v_mul_lo_u16", Vop2, -1, 0x29, -1;
    VLshlrevB16 = "v_lshlrev_b16", Vop2, -1, 0x2a, -1;
    VLshrrevB16 = "v_lshrrev_b16", Vop2, -1, 0x2b, -1;
    VAshrrevI16 = "v_ashrrev_i16", Vop2, -1, 0x2c, -1;
    VMaxU16 = "v_max_u16", Vop2, -1, 0x2f, -1;
    VMaxI16 = "v_max_i16", Vop2, -1, 0x30, -1;
    VMinU16 = "v_min_u16", Vop2, -1, 0x31, -1;
    VMinI16 = "v_min_i16", Vop2, -1, 0x32, -1;

    // Vop1
    VNop = "v_nop", Vop1, 0x00, 0x00, 0x00;
    VMovB32 = "v_mov_b32", Vop1, 0x01, 0x01, 0x01;
    VReadfirstlaneB32 = "v_readfirstlane_b32", Vop1, 0x02, 0x02, 0x02;
    VCvtI32F64 = "v_cvt_i32_f64", Vop1, 0x03, 0x03, 0x03;
    VCvtF64I32 = "v_cvt_f64_i32", Vop1, 0x04, 0x04, 0x04;
    VCvtF32I32 = "v_cvt_f32_i32", Vop1, 0x05, 0x05, 0x05;
    VCvtF32U32 = "v_cvt_f32_u32", Vop1, 0x06, 0x06, 0x06;
    VCvtU32F32 = "v_cvt_u32_f32", Vop1, 0x07, 0x07, 0x07;
    VCvtI32F32 = "v_cvt_i32_f32", Vop1, 0x08, 0x08, 0x08;
    VMovFedB32 = "v_mov_fed_b32", Vop1, 0x09, -1, 0x09;
    VCvtF16F32 = "v_cvt_f16_f32", Vop1, 0x0a, 0x0a, 0x0a;
    VCvtF32F16 = "v_cvt_f32_f16", Vop1, 0x0b, 0x0b, 0x0b;
    VCvtRpiI32F32 = "v_cvt_rpi_i32_f32", Vop1, 0x0c, 0x0c, 0x0c;
    VCvtFlrI32F32 = "v_cvt_flr_i32_f32", Vop1, 0x0d, 0x0d, 0x0d;
    VCvtOffF32I4 = "v_cvt_off_f32_i4", Vop1, 0x0e, 0x0e, 0x0e;
    VCvtF32F64 = "v_cvt_f32_f64", Vop1, 0x0f, 0x0f, 0x0f;
    VCvtF64F32 = "v_cvt_f64_f32", Vop1, 0x10, 0x10, 0x10;
    VCvtF32Ubyte0 = "v_cvt_f32_ubyte0", Vop1, 0x11, 0x11, 0x11;
    VCvtF32Ubyte1 = "v_cvt_f32_ubyte1", Vop1, 0x12, 0x12, 0x12;
    VCvtF32Ubyte2 = "v_cvt_f32_ubyte2", Vop1, 0x13, 0x13, 0x13;
    VCvtF32Ubyte3 = "v_cvt_f32_ubyte3", Vop1, 0x14, 0x14, 0x14;
    VCvtU32F64 = "v_cvt_u32_f64", Vop1, 0x15, 0x15, 0x15;
    VCvtF64U32 = "v_cvt_f64_u32", Vop1, 0x16, 0x16, 0x16;
    VTruncF64 = "v_trunc_f64", Vop1, 0x17, 0x17, 0x17;
    VCeilF64 = "v_ceil_f64", Vop1, 0x18, 0x18, 0x18;
    VRndneF64 = "v_rndne_f64", Vop1, 0x19, 0x19, 0x19;
    VFloorF64 = "v_floor_f64", Vop1, 0x1a, 0x1a, 0x1a;
    VPipeflush = "v_pipeflush", Vop1, -1, -1, 0x1b;
    VFractF32 = "v_fract_f32", Vop1, 0x20, 0x1b, 0x20;
    VTruncF32 = "v_trunc_f32", Vop1, 0x21, 0x1c, 0x21;
    VCeilF32 = "v_ceil_f32", Vop1, 0x22, 0x1d, 0x22;
    VRndneF32 = "v_rndne_f32", Vop1, 0x23, 0x1e, 0x23;
    VFloorF32 = "v_floor_f32", Vop1, 0x24, 0x1f, 0x24;
    VExpF32 = "v_exp_f32", Vop1, 0x25, 0x20, 0x25;
    VLogF32 = "v_log_f32", Vop1, 0x27, 0x21, 0x27;
    VRcpF32 = "v_rcp_f32", Vop1, 0x2a, 0x22, 0x2a;
    VRcpIflagF32 = "v_rcp_iflag_f32", Vop1, 0x2b, 0x23, 0x2b;
    VRsqF32 = "v_rsq_f32", Vop1, 0x2e, 0x24, 0x2e;
    VRcpF64 = "v_rcp_f64", Vop1, 0x2f, 0x25, 0x2f;
    VRsqF64 = "v_rsq_f64", Vop1, 0x31, 0x26, 0x31;
    VSqrtF32 = "v_sqrt_f32", Vop1, 0x33, 0x27, 0x33;
    VSqrtF64 = "v_sqrt_f64", Vop1, 0x34, 0x28, 0x34;
    VSinF32 = "v_sin_f32", Vop1, 0x35, 0x29, 0x35;
    VCosF32 = "v_cos_f32", Vop1, 0x36, 0x2a, 0x36;
    VNotB32 = "v_not_b32", Vop1, 0x37, 0x2b, 0x37;
    VBfrevB32 = "v_bfrev_b32", Vop1, 0x38, 0x2c, 0x38;
    VFfbhU32 = "v_ffbh_u32", Vop1, 0x39, 0x2d, 0x39;
    VFfblB32 = "v_ffbl_b32", Vop1, 0x3a, 0x2e, 0x3a;
    VFfbhI32 = "v_ffbh_i32", Vop1, 0x3b, 0x2f, 0x3b;
    VFrexpExpI32F64 = "v_frexp_exp_i32_f64", Vop1, 0x3c, 0x30, 0x3c;
    VFrexpMantF64 = "v_frexp_mant_f64", Vop1, 0x3d, 0x31, 0x3d;
    VFractF64 = "v_fract_f64", Vop1, 0x3e, 0x32, 0x3e;
    VFrexpExpI32F32 = "v_frexp_exp_i32_f32", Vop1, 0x3f, 0x33, 0x3f;
    VFrexpMantF32 = "v_frexp_mant_f32", Vop1, 0x40, 0x34, 0x40;
    VClrexcp = "v_clrexcp", Vop1, 0x41, 0x35, 0x41;
    VMovreldB32 = "v_movreld_b32", Vop1, 0x42, -1, 0x42;
    VMovrelsB32 = "v_movrels_b32", Vop1, 0x43, -1, 0x43;
    VMovrelsdB32 = "v_movrelsd_b32", Vop1, 0x44, -1, 0x44;
    VMovrelsd2B32 = "v_movrelsd_2_b32", Vop1, -1, -1, 0x48;
    VCvtF16U16 = "v_cvt_f16_u16", Vop1, -1, 0x39, 0x50;
    VCvtF16I16 = "v_cvt_f16_i16", Vop1, -1, 0x3a, 0x51;
    VCvtU16F16 = "v_cvt_u16_f16", Vop1, -1, 0x3b, 0x52;
    VCvtI16F16 = "v_cvt_i16_f16", Vop1, -1, 0x3c, 0x53;
    VRcpF16 = "v_rcp_f16", Vop1, -1, 0x3d, 0x54;
    VSqrtF16 = "v_sqrt_f16", Vop1, -1, 0x3e, 0x55;
    VRsqF16 = "v_rsq_f16", Vop1, -1, 0x3f, 0x56;
    VLogF16 = "v_log_f16", Vop1, -1, 0x40, 0x57;
    VExpF16 = "v_exp_f16", Vop1, -1, 0x41, 0x58;
    VFrexpMantF16 = "v_frexp_mant_f16", Vop1, -1, 0x42, 0x59;
    VFrexpExpI16F16 = "v_frexp_exp_i16_f16", Vop1, -1, 0x43, 0x5a;
    VFloorF16 = "v_floor_f16", Vop1, -1, 0x44, 0x5b;
    VCeilF16 = "v_ceil_f16", Vop1, -1, 0x45, 0x5c;
    VTruncF16 = "v_trunc_f16", Vop1, -1, 0x46, 0x5d;
    VRndneF16 = "v_rndne_f16", Vop1, -1, 0x47, 0x5e;
    VFractF16 = "v_fract_f16", Vop1, -1, 0x48, 0x5f;
    VSinF16 = "v_sin_f16", Vop1, -1, 0x49, 0x60;
    VCosF16 = "v_cos_f16", Vop1, -1, 0x4a, 0x61;
    VSatPkU8I16 = "v_sat_pk_u8_i16", Vop1, -1, 0x4f, 0x62;
    VCvtNormI16F16 = "v_cvt_norm_i16_f16", Vop1, -1, 0x4d, 0x63;
    VCvtNormU16F16 = "v_cvt_norm_u16_f16", Vop1, -1, 0x4e, 0x64;
    VSwapB32 = "v_swap_b32", Vop1, -1, 0x51, 0x65;
    VSwaprelB32 = "v_swaprel_b32", Vop1, -1, -1, 0x68;
    PCvtF16F32Rtne = "p_cvt_f16_f32_rtne", Vop1, -1, -1, -1;
    VLogClampF32 = "v_log_clamp_f32", Vop1, 0x26, -1, -1;
    VRcpClampF32 = "v_rcp_clamp_f32", Vop1, 0x28, -1, -1;
    VRcpLegacyF32 = "v_rcp_legacy_f32", Vop1, 0x29, -1, -1;
    VRsqClampF32 = "v_rsq_clamp_f32", Vop1, 0x2c, -1, -1;
    VRsqLegacyF32 = "v_rsq_legacy_f32", Vop1, 0x2d, -1, -1;
    VRcpClampF64 = "v_rcp_clamp_f64", Vop1, 0x30, -1, -1;
    VRsqClampF64 = "v_rsq_clamp_f64", Vop1, 0x32, -1, -1;
    VScreenPartition4seB32 = "v_screen_partition_4se_b32", Vop1, -1, 0x37, -1;
    VExpLegacyF32 = "v_exp_legacy_f32", Vop1, 0x46, 0x4b, -1;
    VLogLegacyF32 = "v_log_legacy_f32", Vop1, 0x45, 0x4c, -1;

    // Vopc
    VCmpFF32 = "v_cmp_f_f32", Vopc, 0x00, 0x40, 0x00;
    VCmpLtF32 = "v_cmp_lt_f32", Vopc, 0x01, 0x41, 0x01;
    VCmpEqF32 = "v_cmp_eq_f32", Vopc, 0x02, 0x42, 0x02;
    VCmpLeF32 = "v_cmp_le_f32", Vopc, 0x03, 0x43, 0x03;
    VCmpGtF32 = "v_cmp_gt_f32", Vopc, 0x04, 0x44, 0x04;
    VCmpLgF32 = "v_cmp_lg_f32", Vopc, 0x05, 0x45, 0x05;
    VCmpGeF32 = "v_cmp_ge_f32", Vopc, 0x06, 0x46, 0x06;
    VCmpOF32 = "v_cmp_o_f32", Vopc, 0x07, 0x47, 0x07;
    VCmpUF32 = "v_cmp_u_f32", Vopc, 0x08, 0x48, 0x08;
    VCmpNgeF32 = "v_cmp_nge_f32", Vopc, 0x09, 0x49, 0x09;
    VCmpNlgF32 = "v_cmp_nlg_f32", Vopc, 0x0a, 0x4a, 0x0a;
    VCmpNgtF32 = "v_cmp_ngt_f32", Vopc, 0x0b, 0x4b, 0x0b;
    VCmpNleF32 = "v_cmp_nle_f32", Vopc, 0x0c, 0x4c, 0x0c;
    VCmpNeqF32 = "v_cmp_neq_f32", Vopc, 0x0d, 0x4d, 0x0d;
    VCmpNltF32 = "v_cmp_nlt_f32", Vopc, 0x0e, 0x4e, 0x0e;
    VCmpTruF32 = "v_cmp_tru_f32", Vopc, 0x0f, 0x4f, 0x0f;
    VCmpxFF32 = "v_cmpx_f_f32", Vopc, 0x10, 0x50, 0x10;
    VCmpxLtF32 = "v_cmpx_lt_f32", Vopc, 0x11, 0x51, 0x11;
    VCmpxEqF32 = "v_cmpx_eq_f32", Vopc, 0x12, 0x52, 0x12;
    VCmpxLeF32 = "v_cmpx_le_f32", Vopc, 0x13, 0x53, 0x13;
    VCmpxGtF32 = "v_cmpx_gt_f32", Vopc, 0x14, 0x54, 0x14;
    VCmpxLgF32 = "v_cmpx_lg_f32", Vopc, 0x15, 0x55, 0x15;
    VCmpxGeF32 = "v_cmpx_ge_f32", Vopc, 0x16, 0x56, 0x16;
    VCmpxOF32 = "v_cmpx_o_f32", Vopc, 0x17, 0x57, 0x17;
    VCmpxUF32 = "v_cmpx_u_f32", Vopc, 0x18, 0x58, 0x18;
    VCmpxNgeF32 = "v_cmpx_nge_f32", Vopc, 0x19, 0x59, 0x19;
    VCmpxNlgF32 = "v_cmpx_nlg_f32", Vopc, 0x1a, 0x5a, 0x1a;
    VCmpxNgtF32 = "v_cmpx_ngt_f32", Vopc, 0x1b, 0x5b, 0x1b;
    VCmpxNleF32 = "v_cmpx_nle_f32", Vopc, 0x1c, 0x5c, 0x1c;
    VCmpxNeqF32 = "v_cmpx_neq_f32", Vopc, 0x1d, 0x5d, 0x1d;
    VCmpxNltF32 = "v_cmpx_nlt_f32", Vopc, 0x1e, 0x5e, 0x1e;
    VCmpxTruF32 = "v_cmpx_tru_f32", Vopc, 0x1f, 0x5f, 0x1f;
    VCmpFI32 = "v_cmp_f_i32", Vopc, 0x80, 0xc0, 0x80;
    VCmpLtI32 = "v_cmp_lt_i32", Vopc, 0x81, 0xc1, 0x81;
    VCmpEqI32 = "v_cmp_eq_i32", Vopc, 0x82, 0xc2, 0x82;
    VCmpLeI32 = "v_cmp_le_i32", Vopc, 0x83, 0xc3, 0x83;
    VCmpGtI32 = "v_cmp_gt_i32", Vopc, 0x84, 0xc4, 0x84;
    VCmpLgI32 = "v_cmp_lg_i32", Vopc, 0x85, 0xc5, 0x85;
    VCmpGeI32 = "v_cmp_ge_i32", Vopc, 0x86, 0xc6, 0x86;
    VCmpTruI32 = "v_cmp_tru_i32", Vopc, 0x87, 0xc7, 0x87;
    VCmpxFI32 = "v_cmpx_f_i32", Vopc, 0x90, 0xd0, 0x90;
    VCmpxLtI32 = "v_cmpx_lt_i32", Vopc, 0x91, 0xd1, 0x91;
    VCmpxEqI32 = "v_cmpx_eq_i32", Vopc, 0x92, 0xd2, 0x92;
    VCmpxLeI32 = "v_cmpx_le_i32", Vopc, 0x93, 0xd3, 0x93;
    VCmpxGtI32 = "v_cmpx_gt_i32", Vopc, 0x94, 0xd4, 0x94;
    VCmpxLgI32 = "v_cmpx_lg_i32", Vopc, 0x95, 0xd5, 0x95;
    VCmpxGeI32 = "v_cmpx_ge_i32", Vopc, 0x96, 0xd6, 0x96;
    VCmpxTruI32 = "v_cmpx_tru_i32", Vopc, 0x97, 0xd7, 0x97;
    VCmpFU32 = "v_cmp_f_u32", Vopc, 0xc0, 0xc8, 0xc0;
    VCmpLtU32 = "v_cmp_lt_u32", Vopc, 0xc1, 0xc9, 0xc1;
    VCmpEqU32 = "v_cmp_eq_u32", Vopc, 0xc2, 0xca, 0xc2;
    VCmpLeU32 = "v_cmp_le_u32", Vopc, 0xc3, 0xcb, 0xc3;
    VCmpGtU32 = "v_cmp_gt_u32", Vopc, 0xc4, 0xcc, 0xc4;
    VCmpLgU32 = "v_cmp_lg_u32", Vopc, 0xc5, 0xcd, 0xc5;
    VCmpGeU32 = "v_cmp_ge_u32", Vopc, 0xc6, 0xce, 0xc6;
    VCmpTruU32 = "v_cmp_tru_u32", Vopc, 0xc7, 0xcf, 0xc7;
    VCmpxFU32 = "v_cmpx_f_u32", Vopc, 0xd0, 0xd8, 0xd0;
    VCmpxLtU32 = "v_cmpx_lt_u32", Vopc, 0xd1, 0xd9, 0xd1;
    VCmpxEqU32 = "v_cmpx_eq_u32", Vopc, 0xd2, 0xda, 0xd2;
    VCmpxLeU32 = "v_cmpx_le_u32", Vopc, 0xd3, 0xdb, 0xd3;
    VCmpxGtU32 = "v_cmpx_gt_u32", Vopc, 0xd4, 0xdc, 0xd4;
    VCmpxLgU32 = "v_cmpx_lg_u32", Vopc, 0xd5, 0xdd, 0xd5;
    VCmpxGeU32 = "v_cmpx_ge_u32", Vopc, 0xd6, 0xde, 0xd6;
    VCmpxTruU32 = "v_cmpx_tru_u32", Vopc, 0xd7, 0xdf, 0xd7;

    // Vop3p
    VPkMadI16 = "v_pk_mad_i16", Vop3p, -1, 0x00, 0x00;
    VPkMulLoU16 = "v_pk_mul_lo_u16", Vop3p, -1, 0x01, 0x01;
    VPkAddI16 = "v_pk_add_i16", Vop3p, -1, 0x02, 0x02;
    VPkSubI16 = "v_pk_sub_i16", Vop3p, -1, 0x03, 0x03;
    VPkLshlrevB16 = "v_pk_lshlrev_b16", Vop3p, -1, 0x04, 0x04;
    VPkLshrrevB16 = "v_pk_lshrrev_b16", Vop3p, -1, 0x05, 0x05;
    VPkAshrrevI16 = "v_pk_ashrrev_i16", Vop3p, -1, 0x06, 0x06;
    VPkMaxI16 = "v_pk_max_i16", Vop3p, -1, 0x07, 0x07;
    VPkMinI16 = "v_pk_min_i16", Vop3p, -1, 0x08, 0x08;
    VPkMadU16 = "v_pk_mad_u16", Vop3p, -1, 0x09, 0x09;
    VPkAddU16 = "v_pk_add_u16", Vop3p, -1, 0x0a, 0x0a;
    VPkSubU16 = "v_pk_sub_u16", Vop3p, -1, 0x0b, 0x0b;
    VPkMaxU16 = "v_pk_max_u16", Vop3p, -1, 0x0c, 0x0c;
    VPkMinU16 = "v_pk_min_u16", Vop3p, -1, 0x0d, 0x0d;
    VPkFmaF16 = "v_pk_fma_f16", Vop3p, -1, 0x0e, 0x0e;
    VPkAddF16 = "v_pk_add_f16", Vop3p, -1, 0x0f, 0x0f;
    VPkMulF16 = "v_pk_mul_f16", Vop3p, -1, 0x10, 0x10;
    VPkMinF16 = "v_pk_min_f16", Vop3p, -1, 0x11, 0x11;
    VPkMaxF16 = "v_pk_max_f16", Vop3p, -1, 0x12, 0x12;
    VDot2I32I16 = "v_dot2_i32_i16", Vop3p, -1, 0x26, 0x14;
    VDot2U32U16 = "v_dot2_u32_u16", Vop3p, -1, 0x27, 0x15;
    VDot4I32I8 = "v_dot4_i32_i8", Vop3p, -1, 0x28, 0x16;
    VDot4U32U8 = "v_dot4_u32_u8", Vop3p, -1, 0x29, 0x17;
    VFmaMixF32 = "v_fma_mix_f32", Vop3p, -1, 0x20, 0x20;
    VFmaMixloF16 = "v_fma_mixlo_f16", Vop3p, -1, 0x21, 0x21;
    VFmaMixhiF16 = "v_fma_mixhi_f16", Vop3p, -1, 0x22, 0x22;

    // Vintrp
    VInterpP1F32 = "v_interp_p1_f32", Vintrp, 0x00, 0x00, 0x00;
    VInterpP2F32 = "v_interp_p2_f32", Vintrp, 0x01, 0x01, 0x01;
    VInterpMovF32 = "v_interp_mov_f32", Vintrp, 0x02, 0x02, 0x02;

    // Vop3
    VCvtPkrtzF16F32E64 = "v_cvt_pkrtz_f16_f32_e64", Vop3, 0x12f, 0x296, 0x12f;
    VFmaLegacyF32 = "v_fma_legacy_f32", Vop3, -1, -1, 0x140;
    VMadLegacyF32 = "v_mad_legacy_f32", Vop3, 0x140, 0x1c0, 0x140;
    VMadF32 = "v_mad_f32", Vop3, 0x141, 0x1c1, 0x141;
    VMadI32I24 = "v_mad_i32_i24", Vop3, 0x142, 0x1c2, 0x142;
    VMadU32U24 = "v_mad_u32_u24", Vop3, 0x143, 0x1c3, 0x143;
    VCubeidF32 = "v_cubeid_f32", Vop3, 0x144, 0x1c4, 0x144;
    VCubescF32 = "v_cubesc_f32", Vop3, 0x145, 0x1c5, 0x145;
    VCubetcF32 = "v_cubetc_f32", Vop3, 0x146, 0x1c6, 0x146;
    VCubemaF32 = "v_cubema_f32", Vop3, 0x147, 0x1c7, 0x147;
    VBfeU32 = "v_bfe_u32", Vop3, 0x148, 0x1c8, 0x148;
    VBfeI32 = "v_bfe_i32", Vop3, 0x149, 0x1c9, 0x149;
    VBfiB32 = "v_bfi_b32", Vop3, 0x14a, 0x1ca, 0x14a;
    VFmaF32 = "v_fma_f32", Vop3, 0x14b, 0x1cb, 0x14b;
    VFmaF64 = "v_fma_f64", Vop3, 0x14c, 0x1cc, 0x14c;
    VLerpU8 = "v_lerp_u8", Vop3, 0x14d, 0x1cd, 0x14d;
    VAlignbitB32 = "v_alignbit_b32", Vop3, 0x14e, 0x1ce, 0x14e;
    VAlignbyteB32 = "v_alignbyte_b32", Vop3, 0x14f, 0x1cf, 0x14f;
    VMullitF32 = "v_mullit_f32", Vop3, 0x150, -1, 0x150;
    VMin3F32 = "v_min3_f32", Vop3, 0x151, 0x1d0, 0x151;
    VMin3I32 = "v_min3_i32", Vop3, 0x152, 0x1d1, 0x152;
    VMin3U32 = "v_min3_u32", Vop3, 0x153, 0x1d2, 0x153;
    VMax3F32 = "v_max3_f32", Vop3, 0x154, 0x1d3, 0x154;
    VMax3I32 = "v_max3_i32", Vop3, 0x155, 0x1d4, 0x155;
    VMax3U32 = "v_max3_u32", Vop3, 0x156, 0x1d5, 0x156;
    VMed3F32 = "v_med3_f32", Vop3, 0x157, 0x1d6, 0x157;
    VMed3I32 = "v_med3_i32", Vop3, 0x158, 0x1d7, 0x158;
    VMed3U32 = "v_med3_u32", Vop3, 0x159, 0x1d8, 0x159;
    VSadU8 = "v_sad_u8", Vop3, 0x15a, 0x1d9, 0x15a;
    VSadHiU8 = "v_sad_hi_u8", Vop3, 0x15b, 0x1da, 0x15b;
    VSadU16 = "v_sad_u16", Vop3, 0x15c, 0x1db, 0x15c;
    VSadU32 = "v_sad_u32", Vop3, 0x15d, 0x1dc, 0x15d;
    VCvtPkU8F32 = "v_cvt_pk_u8_f32", Vop3, 0x15e, 0x1dd, 0x15e;
    VDivFixupF32 = "v_div_fixup_f32", Vop3, 0x15f, 0x1de, 0x15f;
    VDivFixupF64 = "v_div_fixup_f64", Vop3, 0x160, 0x1df, 0x160;
    VAddF64 = "v_add_f64", Vop3, 0x164, 0x280, 0x164;
    VMulF64 = "v_mul_f64", Vop3, 0x165, 0x281, 0x165;
    VMinF64 = "v_min_f64", Vop3, 0x166, 0x282, 0x166;
    VMaxF64 = "v_max_f64", Vop3, 0x167, 0x283, 0x167;
    VLdexpF64 = "v_ldexp_f64", Vop3, 0x168, 0x284, 0x168;
    VMulLoU32 = "v_mul_lo_u32", Vop3, 0x169, 0x285, 0x169;
    VMulHiU32 = "v_mul_hi_u32", Vop3, 0x16a, 0x286, 0x16a;
    VMulLoI32 = "v_mul_lo_i32", Vop3, 0x16b, 0x285, 0x16b;
    VMulHiI32 = "v_mul_hi_i32", Vop3, 0x16c, 0x287, 0x16c;
    VDivScaleF32 = "v_div_scale_f32", Vop3, 0x16d, 0x1e0, 0x16d;
    VDivScaleF64 = "v_div_scale_f64", Vop3, 0x16e, 0x1e1, 0x16e;
    VDivFmasF32 = "v_div_fmas_f32", Vop3, 0x16f, 0x1e2, 0x16f;
    VDivFmasF64 = "v_div_fmas_f64", Vop3, 0x170, 0x1e3, 0x170;
    VMsadU8 = "v_msad_u8", Vop3, 0x171, 0x1e4, 0x171;
    VQsadPkU16U8 = "v_qsad_pk_u16_u8", Vop3, 0x172, 0x1e5, 0x172;
    VMqsadPkU16U8 = "v_mqsad_pk_u16_u8", Vop3, 0x173, 0x1e6, 0x173;
    VTrigPreopF64 = "v_trig_preop_f64", Vop3, 0x174, 0x292, 0x174;
    VMqsadU32U8 = "v_mqsad_u32_u8", Vop3, 0x175, 0x1e7, 0x175;
    VMadU64U32 = "v_mad_u64_u32", Vop3, 0x176, 0x1e8, 0x176;
    VMadI64I32 = "v_mad_i64_i32", Vop3, 0x177, 0x1e9, 0x177;
    VXor3B32 = "v_xor3_b32", Vop3, -1, -1, 0x178;
    VLshlrevB64 = "v_lshlrev_b64", Vop3, -1, 0x28f, 0x2ff;
    VLshrrevB64 = "v_lshrrev_b64", Vop3, -1, 0x290, 0x300;
    VAshrrevI64 = "v_ashrrev_i64", Vop3, -1, 0x291, 0x301;
    VAddU16E64 = "v_add_u16_e64", Vop3, -1, -1, 0x303;
    VSubU16E64 = "v_sub_u16_e64", Vop3, -1, -1, 0x304;
    VMulLoU16E64 = "v_mul_lo_u16_e64", Vop3, -1, -1, 0x305;
    VLshrrevB16E64 = "v_lshrrev_b16_e64", Vop3, -1, -1, 0x307;
    VAshrrevI16E64 = "v_ashrrev_i16_e64", Vop3, -1, -1, 0x308;
    VMaxU16E64 = "v_max_u16_e64", Vop3, -1, -1, 0x309;
    VMaxI16E64 = "v_max_i16_e64", Vop3, -1, -1, 0x30a;
    VMinU16E64 = "v_min_u16_e64", Vop3, -1, -1, 0x30b;
    VMinI16E64 = "v_min_i16_e64", Vop3, -1, -1, 0x30c;
    VAddI16 = "v_add_i16", Vop3, -1, 0x29e, 0x30d;
    VSubI16 = "v_sub_i16", Vop3, -1, 0x29f, 0x30e;
    VAddCoU32E64 = "v_add_co_u32_e64", Vop3, -1, -1, 0x30f;
    VSubCoU32E64 = "v_sub_co_u32_e64", Vop3, -1, -1, 0x310;
    VPackB32F16 = "v_pack_b32_f16", Vop3, -1, 0x2a0, 0x311;
    VCvtPknormI16F16 = "v_cvt_pknorm_i16_f16", Vop3, -1, 0x299, 0x312;
    VCvtPknormU16F16 = "v_cvt_pknorm_u16_f16", Vop3, -1, 0x29a, 0x313;
    VLshlrevB16E64 = "v_lshlrev_b16_e64", Vop3, -1, -1, 0x314;
    VSubrevCoU32E64 = "v_subrev_co_u32_e64", Vop3, -1, -1, 0x319;
    VMadU16 = "v_mad_u16", Vop3, -1, 0x204, 0x340;
    VPermB32 = "v_perm_b32", Vop3, -1, 0x1ed, 0x344;
    VXadU32 = "v_xad_u32", Vop3, -1, 0x1f3, 0x345;
    VLshlAddU32 = "v_lshl_add_u32", Vop3, -1, 0x1fd, 0x346;
    VAddLshlU32 = "v_add_lshl_u32", Vop3, -1, 0x1fe, 0x347;
    VFmaF16 = "v_fma_f16", Vop3, -1, 0x206, 0x34b;
    VMin3F16 = "v_min3_f16", Vop3, -1, 0x1f4, 0x351;
    VMin3I16 = "v_min3_i16", Vop3, -1, 0x1f5, 0x352;
    VMin3U16 = "v_min3_u16", Vop3, -1, 0x1f6, 0x353;
    VMax3F16 = "v_max3_f16", Vop3, -1, 0x1f7, 0x354;
    VMax3I16 = "v_max3_i16", Vop3, -1, 0x1f8, 0x355;
    VMax3U16 = "v_max3_u16", Vop3, -1, 0x1f9, 0x356;
    VMed3F16 = "v_med3_f16", Vop3, -1, 0x1fa, 0x357;
    VMed3I16 = "v_med3_i16", Vop3, -1, 0x1fb, 0x358;
    VMed3U16 = "v_med3_u16", Vop3, -1, 0x1fc, 0x359;
    VMadI16 = "v_mad_i16", Vop3, -1, 0x205, 0x35e;
    VDivFixupF16 = "v_div_fixup_f16", Vop3, -1, 0x207, 0x35f;
    VReadlaneB32E64 = "v_readlane_b32_e64", Vop3, -1, 0x289, 0x360;
    VWritelaneB32E64 = "v_writelane_b32_e64", Vop3, -1, 0x28a, 0x361;
    VLdexpF32 = "v_ldexp_f32", Vop3, 0x12b, 0x288, 0x362;
    VBfmB32 = "v_bfm_b32", Vop3, 0x11e, 0x293, 0x363;
    VBcntU32B32 = "v_bcnt_u32_b32", Vop3, 0x122, 0x28b, 0x364;
    VMbcntLoU32B32 = "v_mbcnt_lo_u32_b32", Vop3, 0x123, 0x28c, 0x365;
    VMbcntHiU32B32E64 = "v_mbcnt_hi_u32_b32_e64", Vop3, -1, 0x28d, 0x366;
    VCvtPknormI16F32 = "v_cvt_pknorm_i16_f32", Vop3, 0x12d, 0x294, 0x368;
    VCvtPknormU16F32 = "v_cvt_pknorm_u16_f32", Vop3, 0x12e, 0x295, 0x369;
    VCvtPkU16U32 = "v_cvt_pk_u16_u32", Vop3, 0x130, 0x297, 0x36a;
    VCvtPkI16I32 = "v_cvt_pk_i16_i32", Vop3, 0x131, 0x298, 0x36b;
    VAdd3U32 = "v_add3_u32", Vop3, -1, 0x1ff, 0x36d;
    VLshlOrB32 = "v_lshl_or_b32", Vop3, -1, 0x200, 0x36f;
    VAndOrB32 = "v_and_or_b32", Vop3, -1, 0x201, 0x371;
    VOr3B32 = "v_or3_b32", Vop3, -1, 0x202, 0x372;
    VMadU32U16 = "v_mad_u32_u16", Vop3, -1, 0x1f1, 0x373;
    VMadI32I16 = "v_mad_i32_i16", Vop3, -1, 0x1f2, 0x375;
    VSubI32 = "v_sub_i32", Vop3, -1, 0x29d, 0x376;
    VPermlane16B32 = "v_permlane16_b32", Vop3, -1, -1, 0x377;
    VPermlanex16B32 = "v_permlanex16_b32", Vop3, -1, -1, 0x378;
    VAddI32 = "v_add_i32", Vop3, -1, 0x29c, 0x37f;
    VMqsadU8 = "v_mqsad_u8", Vop3, -1, -1, -1;
    VQsadU8 = "v_qsad_u8", Vop3, -1, -1, -1;
    VLshlB64 = "v_lshl_b64", Vop3, 0x161, -1, -1;
    VLshrB64 = "v_lshr_b64", Vop3, 0x162, -1, -1;
    VAshrI64 = "v_ashr_i64", Vop3, 0x163, -1, -1;
    VMadLegacyF16 = "v_mad_legacy_f16", Vop3, -1, 0x1ea, -1;
    VMadLegacyU16 = "v_mad_legacy_u16", Vop3, -1, 0x1eb, -1;
    VMadLegacyI16 = "v_mad_legacy_i16", Vop3, -1, 0x1ec, -1;
    VFmaLegacyF16 = "v_fma_legacy_f16", Vop3, -1, 0x1ee, -1;
    VDivFixupLegacyF16 = "v_div_fixup_legacy_f16", Vop3, -1, 0x1ef, -1;
    VCvtPkaccumU8F32 = "v_cvt_pkaccum_u8_f32", Vop3, 0x12c, 0x1f0, -1;
    VMadF16 = "v_mad_f16", Vop3, -1, 0x203, -1;

    // Ds
    DsAddU32 = "ds_add_u32", Ds, 0x00, 0x00, 0x00;
    DsSubU32 = "ds_sub_u32", Ds, 0x01, 0x01, 0x01;
    DsRsubU32 = "ds_rsub_u32", Ds, 0x02, 0x02, 0x02;
    DsIncU32 = "ds_inc_u32", Ds, 0x03, 0x03, 0x03;
    DsDecU32 = "ds_dec_u32", Ds, 0x04, 0x04, 0x04;
    DsMinI32 = "ds_min_i32", Ds, 0x05, 0x05, 0x05;
    DsMaxI32 = "ds_max_i32", Ds, 0x06, 0x06, 0x06;
    DsMinU32 = "ds_min_u32", Ds, 0x07, 0x07, 0x07;
    DsMaxU32 = "ds_max_u32", Ds, 0x08, 0x08, 0x08;
    DsAndB32 = "ds_and_b32", Ds, 0x09, 0x09, 0x09;
    DsOrB32 = "ds_or_b32", Ds, 0x0a, 0x0a, 0x0a;
    DsXorB32 = "ds_xor_b32", Ds, 0x0b, 0x0b, 0x0b;
    DsMskorB32 = "ds_mskor_b32", Ds, 0x0c, 0x0c, 0x0c;
    DsWriteB32 = "ds_write_b32", Ds, 0x0d, 0x0d, 0x0d;
    DsWrite2B32 = "ds_write2_b32", Ds, 0x0e, 0x0e, 0x0e;
    DsCmpstB32 = "ds_cmpst_b32", Ds, 0x10, 0x10, 0x10;
    DsCmpstF32 = "ds_cmpst_f32", Ds, 0x11, 0x11, 0x11;
    DsMinF32 = "ds_min_f32", Ds, 0x12, 0x12, 0x12;
    DsMaxF32 = "ds_max_f32", Ds, 0x13, 0x13, 0x13;
    DsNop = "ds_nop", Ds, 0x14, 0x14, 0x14;
    DsAddF32 = "ds_add_f32", Ds, -1, 0x15, 0x15;
    DsGwsSemaReleaseAll = "ds_gws_sema_release_all", Ds, 0x18, 0x98, 0x18;
    DsGwsInit = "ds_gws_init", Ds, 0x19, 0x99, 0x19;
    DsGwsSemaV = "ds_gws_sema_v", Ds, 0x1a, 0x9a, 0x1a;
    DsGwsSemaBr = "ds_gws_sema_br", Ds, 0x1b, 0x9b, 0x1b;
    DsGwsSemaP = "ds_gws_sema_p", Ds, 0x1c, 0x9c, 0x1c;
    DsGwsBarrier = "ds_gws_barrier", Ds, 0x1d, 0x9d, 0x1d;
    DsWriteB8 = "ds_write_b8", Ds, 0x1e, 0x1e, 0x1e;
    DsWriteB16 = "ds_write_b16", Ds, 0x1f, 0x1f, 0x1f;
    DsAddRtnU32 = "ds_add_rtn_u32", Ds, 0x20, 0x20, 0x20;
    DsWrxchgRtnB32 = "ds_wrxchg_rtn_b32", Ds, 0x2d, 0x2d, 0x2d;
    DsCmpstRtnB32 = "ds_cmpst_rtn_b32", Ds, 0x30, 0x30, 0x30;
    DsSwizzleB32 = "ds_swizzle_b32", Ds, 0x35, 0x3d, 0x35;
    DsReadB32 = "ds_read_b32", Ds, 0x36, 0x36, 0x36;
    DsRead2B32 = "ds_read2_b32", Ds, 0x37, 0x37, 0x37;
    DsReadI8 = "ds_read_i8", Ds, 0x39, 0x39, 0x39;
    DsReadU8 = "ds_read_u8", Ds, 0x3a, 0x3a, 0x3a;
    DsReadI16 = "ds_read_i16", Ds, 0x3b, 0x3b, 0x3b;
    DsReadU16 = "ds_read_u16", Ds, 0x3c, 0x3c, 0x3c;
    DsConsume = "ds_consume", Ds, 0x3d, 0xbd, 0x3d;
    DsAppend = "ds_append", Ds, 0x3e, 0xbe, 0x3e;
    DsOrderedCount = "ds_ordered_count", Ds, 0x3f, 0xbf, 0x3f;
    DsAddU64 = "ds_add_u64", Ds, 0x40, 0x40, 0x40;
    DsSubU64 = "ds_sub_u64", Ds, 0x41, 0x41, 0x41;
    DsRsubU64 = "ds_rsub_u64", Ds, 0x42, 0x42, 0x42;
    DsIncU64 = "ds_inc_u64", Ds, 0x43, 0x43, 0x43;
    DsDecU64 = "ds_dec_u64", Ds, 0x44, 0x44, 0x44;
    DsMinI64 = "ds_min_i64", Ds, 0x45, 0x45, 0x45;
    DsMaxI64 = "ds_max_i64", Ds, 0x46, 0x46, 0x46;
    DsMinU64 = "ds_min_u64", Ds, 0x47, 0x47, 0x47;
    DsMaxU64 = "ds_max_u64", Ds, 0x48, 0x48, 0x48;
    DsAndB64 = "ds_and_b64", Ds, 0x49, 0x49, 0x49;
    DsOrB64 = "ds_or_b64", Ds, 0x4a, 0x4a, 0x4a;
    DsXorB64 = "ds_xor_b64", Ds, 0x4b, 0x4b, 0x4b;
    DsMskorB64 = "ds_mskor_b64", Ds, 0x4c, 0x4c, 0x4c;
    DsWriteB64 = "ds_write_b64", Ds, 0x4d, 0x4d, 0x4d;
    DsWrite2B64 = "ds_write2_b64", Ds, 0x4e, 0x4e, 0x4e;
    DsCmpstB64 = "ds_cmpst_b64", Ds, 0x50, 0x50, 0x50;
    DsCmpstF64 = "ds_cmpst_f64", Ds, 0x51, 0x51, 0x51;
    DsMinF64 = "ds_min_f64", Ds, 0x52, 0x52, 0x52;
    DsMaxF64 = "ds_max_f64", Ds, 0x53, 0x53, 0x53;
    DsReadB64 = "ds_read_b64", Ds, 0x76, 0x76, 0x76;
    DsRead2B64 = "ds_read2_b64", Ds, 0x77, 0x77, 0x77;
    DsWriteB8D16Hi = "ds_write_b8_d16_hi", Ds, -1, 0x54, 0xa0;
    DsWriteB16D16Hi = "ds_write_b16_d16_hi", Ds, -1, 0x55, 0xa1;
    DsReadU8D16 = "ds_read_u8_d16", Ds, -1, 0x56, 0xa2;
    DsReadU8D16Hi = "ds_read_u8_d16_hi", Ds, -1, 0x57, 0xa3;
    DsReadI8D16 = "ds_read_i8_d16", Ds, -1, 0x58, 0xa4;
    DsReadI8D16Hi = "ds_read_i8_d16_hi", Ds, -1, 0x59, 0xa5;
    DsReadU16D16 = "ds_read_u16_d16", Ds, -1, 0x5a, 0xa6;
    DsReadU16D16Hi = "ds_read_u16_d16_hi", Ds, -1, 0x5b, 0xa7;
    DsWriteAddtidB32 = "ds_write_addtid_b32", Ds, -1, 0x1d, 0xb0;
    DsReadAddtidB32 = "ds_read_addtid_b32", Ds, -1, 0xb6, 0xb1;
    DsPermuteB32 = "ds_permute_b32", Ds, -1, 0x3e, 0xb2;
    DsBpermuteB32 = "ds_bpermute_b32", Ds, -1, 0x3f, 0xb3;
    DsWriteB96 = "ds_write_b96", Ds, 0xde, 0xde, 0xde;
    DsWriteB128 = "ds_write_b128", Ds, 0xdf, 0xdf, 0xdf;
    DsReadB96 = "ds_read_b96", Ds, 0xfe, 0xfe, 0xfe;
    DsReadB128 = "ds_read_b128", Ds, 0xff, 0xff, 0xff;

    // Mubuf
    BufferLoadFormatX = "buffer_load_format_x", Mubuf, 0x00, 0x00, 0x00;
    BufferLoadFormatXy = "buffer_load_format_xy", Mubuf, 0x01, 0x01, 0x01;
    BufferLoadFormatXyz = "buffer_load_format_xyz", Mubuf, 0x02, 0x02, 0x02;
    BufferLoadFormatXyzw = "buffer_load_format_xyzw", Mubuf, 0x03, 0x03, 0x03;
    BufferStoreFormatX = "buffer_store_format_x", Mubuf, 0x04, 0x04, 0x04;
    BufferStoreFormatXy = "buffer_store_format_xy", Mubuf, 0x05, 0x05, 0x05;
    BufferStoreFormatXyz = "buffer_store_format_xyz", Mubuf, 0x06, 0x06, 0x06;
    BufferStoreFormatXyzw = "buffer_store_format_xyzw", Mubuf, 0x07, 0x07, 0x07;
    BufferLoadUbyte = "buffer_load_ubyte", Mubuf, 0x08, 0x10, 0x08;
    BufferLoadSbyte = "buffer_load_sbyte", Mubuf, 0x09, 0x11, 0x09;
    BufferLoadUshort = "buffer_load_ushort", Mubuf, 0x0a, 0x12, 0x0a;
    BufferLoadSshort = "buffer_load_sshort", Mubuf, 0x0b, 0x13, 0x0b;
    BufferLoadDword = "buffer_load_dword", Mubuf, 0x0c, 0x14, 0x0c;
    BufferLoadDwordx2 = "buffer_load_dwordx2", Mubuf, 0x0d, 0x15, 0x0d;
    BufferLoadDwordx4 = "buffer_load_dwordx4", Mubuf, 0x0e, 0x17, 0x0e;
    BufferLoadDwordx3 = "buffer_load_dwordx3", Mubuf, 0x0f, 0x16, 0x0f;
    BufferStoreByte = "buffer_store_byte", Mubuf, 0x18, 0x18, 0x18;
    BufferStoreByteD16Hi = "buffer_store_byte_d16_hi", Mubuf, -1, 0x19, 0x19;
    BufferStoreShort = "buffer_store_short", Mubuf, 0x1a, 0x1a, 0x1a;
    BufferStoreShortD16Hi = "buffer_store_short_d16_hi", Mubuf, -1, 0x1b, 0x1b;
    BufferStoreDword = "buffer_store_dword", Mubuf, 0x1c, 0x1c, 0x1c;
    BufferStoreDwordx2 = "buffer_store_dwordx2", Mubuf, 0x1d, 0x1d, 0x1d;
    BufferStoreDwordx4 = "buffer_store_dwordx4", Mubuf, 0x1e, 0x1f, 0x1e;
    BufferStoreDwordx3 = "buffer_store_dwordx3", Mubuf, 0x1f, 0x1e, 0x1f;
    BufferLoadUbyteD16 = "buffer_load_ubyte_d16", Mubuf, -1, 0x20, 0x20;
    BufferLoadUbyteD16Hi = "buffer_load_ubyte_d16_hi", Mubuf, -1, 0x21, 0x21;
    BufferLoadSbyteD16 = "buffer_load_sbyte_d16", Mubuf, -1, 0x22, 0x22;
    BufferLoadSbyteD16Hi = "buffer_load_sbyte_d16_hi", Mubuf, -1, 0x23, 0x23;
    BufferLoadShortD16 = "buffer_load_short_d16", Mubuf, -1, 0x24, 0x24;
    BufferLoadShortD16Hi = "buffer_load_short_d16_hi", Mubuf, -1, 0x25, 0x25;
    BufferLoadFormatD16HiX = "buffer_load_format_d16_hi_x", Mubuf, -1, 0x26, 0x26;
    BufferStoreFormatD16HiX = "buffer_store_format_d16_hi_x", Mubuf, -1, 0x27, 0x27;
    BufferAtomicSwap = "buffer_atomic_swap", Mubuf, 0x30, 0x40, 0x30;
    BufferAtomicCmpswap = "buffer_atomic_cmpswap", Mubuf, 0x31, 0x41, 0x31;
    BufferAtomicAdd = "buffer_atomic_add", Mubuf, 0x32, 0x42, 0x32;
    BufferAtomicAddX2 = "buffer_atomic_add_x2", Mubuf, 0x52, 0x62, 0x52;
    BufferGl0Inv = "buffer_gl0_inv", Mubuf, -1, -1, 0x71;
    BufferGl1Inv = "buffer_gl1_inv", Mubuf, -1, -1, 0x72;
    BufferLoadFormatD16X = "buffer_load_format_d16_x", Mubuf, -1, 0x08, 0x80;
    BufferLoadFormatD16Xy = "buffer_load_format_d16_xy", Mubuf, -1, 0x09, 0x81;
    BufferLoadFormatD16Xyz = "buffer_load_format_d16_xyz", Mubuf, -1, 0x0a, 0x82;
    BufferLoadFormatD16Xyzw = "buffer_load_format_d16_xyzw", Mubuf, -1, 0x0b, 0x83;
    BufferStoreFormatD16X = "buffer_store_format_d16_x", Mubuf, -1, 0x0c, 0x84;
    BufferStoreFormatD16Xy = "buffer_store_format_d16_xy", Mubuf, -1, 0x0d, 0x85;
    BufferStoreFormatD16Xyz = "buffer_store_format_d16_xyz", Mubuf, -1, 0x0e, 0x86;
    BufferStoreFormatD16Xyzw = "buffer_store_format_d16_xyzw", Mubuf, -1, 0x0f, 0x87;
    BufferStoreLdsDword = "buffer_store_lds_dword", Mubuf, -1, 0x3d, -1;
    BufferWbinvl1Vol = "buffer_wbinvl1_vol", Mubuf, 0x70, 0x3f, -1;
    BufferWbinvl1 = "buffer_wbinvl1", Mubuf, 0x71, 0x3e, -1;

    // Mtbuf
    TbufferLoadFormatX = "tbuffer_load_format_x", Mtbuf, 0x00, 0x00, 0x00;
    TbufferLoadFormatXy = "tbuffer_load_format_xy", Mtbuf, 0x01, 0x01, 0x01;
    TbufferLoadFormatXyz = "tbuffer_load_format_xyz", Mtbuf, 0x02, 0x02, 0x02;
    TbufferLoadFormatXyzw = "tbuffer_load_format_xyzw", Mtbuf, 0x03, 0x03, 0x03;
    TbufferStoreFormatX = "tbuffer_store_format_x", Mtbuf, 0x04, 0x04, 0x04;
    TbufferStoreFormatXy = "tbuffer_store_format_xy", Mtbuf, 0x05, 0x05, 0x05;
    TbufferStoreFormatXyz = "tbuffer_store_format_xyz", Mtbuf, 0x06, 0x06, 0x06;
    TbufferStoreFormatXyzw = "tbuffer_store_format_xyzw", Mtbuf, 0x07, 0x07, 0x07;
    TbufferLoadFormatD16X = "tbuffer_load_format_d16_x", Mtbuf, -1, 0x08, 0x08;
    TbufferLoadFormatD16Xy = "tbuffer_load_format_d16_xy", Mtbuf, -1, 0x09, 0x09;
    TbufferLoadFormatD16Xyz = "tbuffer_load_format_d16_xyz", Mtbuf, -1, 0x0a, 0x0a;
    TbufferLoadFormatD16Xyzw = "tbuffer_load_format_d16_xyzw", Mtbuf, -1, 0x0b, 0x0b;
    TbufferStoreFormatD16X = "tbuffer_store_format_d16_x", Mtbuf, -1, 0x0c, 0x0c;
    TbufferStoreFormatD16Xy = "tbuffer_store_format_d16_xy", Mtbuf, -1, 0x0d, 0x0d;
    TbufferStoreFormatD16Xyz = "tbuffer_store_format_d16_xyz", Mtbuf, -1, 0x0e, 0x0e;
    TbufferStoreFormatD16Xyzw = "tbuffer_store_format_d16_xyzw", Mtbuf, -1, 0x0f, 0x0f;

    // Mimg
    ImageLoad = "image_load", Mimg, 0x00, 0x00, 0x00;
    ImageLoadMip = "image_load_mip", Mimg, 0x01, 0x01, 0x01;
    ImageLoadPck = "image_load_pck", Mimg, 0x02, 0x02, 0x02;
    ImageLoadPckSgn = "image_load_pck_sgn", Mimg, 0x03, 0x03, 0x03;
    ImageLoadMipPck = "image_load_mip_pck", Mimg, 0x04, 0x04, 0x04;
    ImageLoadMipPckSgn = "image_load_mip_pck_sgn", Mimg, 0x05, 0x05, 0x05;
    ImageStore = "image_store", Mimg, 0x08, 0x08, 0x08;
    ImageStoreMip = "image_store_mip", Mimg, 0x09, 0x09, 0x09;
    ImageStorePck = "image_store_pck", Mimg, 0x0a, 0x0a, 0x0a;
    ImageStoreMipPck = "image_store_mip_pck", Mimg, 0x0b, 0x0b, 0x0b;
    ImageGetResinfo = "image_get_resinfo", Mimg, 0x0e, 0x0e, 0x0e;
    ImageAtomicSwap = "image_atomic_swap", Mimg, 0x0f, 0x10, 0x0f;
    ImageAtomicCmpswap = "image_atomic_cmpswap", Mimg, 0x10, 0x11, 0x10;
    ImageAtomicAdd = "image_atomic_add", Mimg, 0x11, 0x12, 0x11;
    ImageSample = "image_sample", Mimg, 0x20, 0x20, 0x20;
    ImageSampleD = "image_sample_d", Mimg, 0x22, 0x22, 0x22;
    ImageSampleL = "image_sample_l", Mimg, 0x24, 0x24, 0x24;
    ImageSampleB = "image_sample_b", Mimg, 0x25, 0x25, 0x25;
    ImageSampleLz = "image_sample_lz", Mimg, 0x27, 0x27, 0x27;
    ImageGather4 = "image_gather4", Mimg, 0x40, 0x40, 0x40;
    ImageGather4L = "image_gather4_l", Mimg, 0x44, 0x44, 0x44;
    ImageGather4B = "image_gather4_b", Mimg, 0x45, 0x45, 0x45;
    ImageGather4Lz = "image_gather4_lz", Mimg, 0x47, 0x47, 0x47;
    ImageGetLod = "image_get_lod", Mimg, 0x60, 0x60, 0x60;
    ImageMsaaLoad = "image_msaa_load", Mimg, -1, -1, 0x80;
    ImageBvh64IntersectRay = "image_bvh64_intersect_ray", Mimg, -1, -1, 0xe7;

    // Exp
    Exp = "exp", Exp, 0x00, 0x00, 0x00;

    // Flat
    FlatLoadUbyte = "flat_load_ubyte", Flat, 0x08, 0x10, 0x08;
    FlatLoadSbyte = "flat_load_sbyte", Flat, 0x09, 0x11, 0x09;
    FlatLoadUshort = "flat_load_ushort", Flat, 0x0a, 0x12, 0x0a;
    FlatLoadSshort = "flat_load_sshort", Flat, 0x0b, 0x13, 0x0b;
    FlatLoadDword = "flat_load_dword", Flat, 0x0c, 0x14, 0x0c;
    FlatLoadDwordx2 = "flat_load_dwordx2", Flat, 0x0d, 0x15, 0x0d;
    FlatLoadDwordx4 = "flat_load_dwordx4", Flat, 0x0e, 0x17, 0x0e;
    FlatLoadDwordx3 = "flat_load_dwordx3", Flat, 0x0f, 0x16, 0x0f;
    FlatStoreByte = "flat_store_byte", Flat, 0x18, 0x18, 0x18;
    FlatStoreByteD16Hi = "flat_store_byte_d16_hi", Flat, -1, 0x19, 0x19;
    FlatStoreShort = "flat_store_short", Flat, 0x1a, 0x1a, 0x1a;
    FlatStoreShortD16Hi = "flat_store_short_d16_hi", Flat, -1, 0x1b, 0x1b;
    FlatStoreDword = "flat_store_dword", Flat, 0x1c, 0x1c, 0x1c;
    FlatStoreDwordx2 = "flat_store_dwordx2", Flat, 0x1d, 0x1d, 0x1d;
    FlatStoreDwordx4 = "flat_store_dwordx4", Flat, 0x1e, 0x1f, 0x1e;
    FlatStoreDwordx3 = "flat_store_dwordx3", Flat, 0x1f, 0x1e, 0x1f;
    FlatLoadUbyteD16 = "flat_load_ubyte_d16", Flat, -1, 0x20, 0x20;
    FlatLoadUbyteD16Hi = "flat_load_ubyte_d16_hi", Flat, -1, 0x21, 0x21;
    FlatLoadSbyteD16 = "flat_load_sbyte_d16", Flat, -1, 0x22, 0x22;
    FlatLoadSbyteD16Hi = "flat_load_sbyte_d16_hi", Flat, -1, 0x23, 0x23;
    FlatLoadShortD16 = "flat_load_short_d16", Flat, -1, 0x24, 0x24;
    FlatLoadShortD16Hi = "flat_load_short_d16_hi", Flat, -1, 0x25, 0x25;
    FlatAtomicSwap = "flat_atomic_swap", Flat, 0x30, 0x40, 0x30;
    FlatAtomicCmpswap = "flat_atomic_cmpswap", Flat, 0x31, 0x41, 0x31;
    FlatAtomicAdd = "flat_atomic_add", Flat, 0x32, 0x42, 0x32;
    FlatAtomicAddX2 = "flat_atomic_add_x2", Flat, 0x52, 0x62, 0x52;

    // Global
    GlobalLoadUbyte = "global_load_ubyte", Global, -1, 0x10, 0x08;
    GlobalLoadSbyte = "global_load_sbyte", Global, -1, 0x11, 0x09;
    GlobalLoadUshort = "global_load_ushort", Global, -1, 0x12, 0x0a;
    GlobalLoadSshort = "global_load_sshort", Global, -1, 0x13, 0x0b;
    GlobalLoadDword = "global_load_dword", Global, -1, 0x14, 0x0c;
    GlobalLoadDwordx2 = "global_load_dwordx2", Global, -1, 0x15, 0x0d;
    GlobalLoadDwordx4 = "global_load_dwordx4", Global, -1, 0x17, 0x0e;
    GlobalLoadDwordx3 = "global_load_dwordx3", Global, -1, 0x16, 0x0f;
    GlobalLoadDwordAddtid = "global_load_dword_addtid", Global, -1, -1, 0x16;
    GlobalStoreDwordAddtid = "global_store_dword_addtid", Global, -1, -1, 0x17;
    GlobalStoreByte = "global_store_byte", Global, -1, 0x18, 0x18;
    GlobalStoreByteD16Hi = "global_store_byte_d16_hi", Global, -1, 0x19, 0x19;
    GlobalStoreShort = "global_store_short", Global, -1, 0x1a, 0x1a;
    GlobalStoreShortD16Hi = "global_store_short_d16_hi", Global, -1, 0x1b, 0x1b;
    GlobalStoreDword = "global_store_dword", Global, -1, 0x1c, 0x1c;
    GlobalStoreDwordx2 = "global_store_dwordx2", Global, -1, 0x1d, 0x1d;
    GlobalStoreDwordx4 = "global_store_dwordx4", Global, -1, 0x1f, 0x1e;
    GlobalStoreDwordx3 = "global_store_dwordx3", Global, -1, 0x1e, 0x1f;
    GlobalLoadUbyteD16 = "global_load_ubyte_d16", Global, -1, 0x20, 0x20;
    GlobalLoadUbyteD16Hi = "global_load_ubyte_d16_hi", Global, -1, 0x21, 0x21;
    GlobalLoadSbyteD16 = "global_load_sbyte_d16", Global, -1, 0x22, 0x22;
    GlobalLoadSbyteD16Hi = "global_load_sbyte_d16_hi", Global, -1, 0x23, 0x23;
    GlobalLoadShortD16 = "global_load_short_d16", Global, -1, 0x24, 0x24;
    GlobalLoadShortD16Hi = "global_load_short_d16_hi", Global, -1, 0x25, 0x25;
    GlobalAtomicSwap = "global_atomic_swap", Global, -1, 0x40, 0x30;
    GlobalAtomicCmpswap = "global_atomic_cmpswap", Global, -1, 0x41, 0x31;
    GlobalAtomicAdd = "global_atomic_add", Global, -1, 0x42, 0x32;
    GlobalAtomicAddX2 = "global_atomic_add_x2", Global, -1, 0x62, 0x52;

    // Scratch
    ScratchLoadUbyte = "scratch_load_ubyte", Scratch, -1, 0x10, 0x08;
    ScratchLoadSbyte = "scratch_load_sbyte", Scratch, -1, 0x11, 0x09;
    ScratchLoadUshort = "scratch_load_ushort", Scratch, -1, 0x12, 0x0a;
    ScratchLoadSshort = "scratch_load_sshort", Scratch, -1, 0x13, 0x0b;
    ScratchLoadDword = "scratch_load_dword", Scratch, -1, 0x14, 0x0c;
    ScratchLoadDwordx2 = "scratch_load_dwordx2", Scratch, -1, 0x15, 0x0d;
    ScratchLoadDwordx4 = "scratch_load_dwordx4", Scratch, -1, 0x17, 0x0e;
    ScratchLoadDwordx3 = "scratch_load_dwordx3", Scratch, -1, 0x16, 0x0f;
    ScratchStoreByte = "scratch_store_byte", Scratch, -1, 0x18, 0x18;
    ScratchStoreByteD16Hi = "scratch_store_byte_d16_hi", Scratch, -1, 0x19, 0x19;
    ScratchStoreShort = "scratch_store_short", Scratch, -1, 0x1a, 0x1a;
    ScratchStoreShortD16Hi = "scratch_store_short_d16_hi", Scratch, -1, 0x1b, 0x1b;
    ScratchStoreDword = "scratch_store_dword", Scratch, -1, 0x1c, 0x1c;
    ScratchStoreDwordx2 = "scratch_store_dwordx2", Scratch, -1, 0x1d, 0x1d;
    ScratchStoreDwordx4 = "scratch_store_dwordx4", Scratch, -1, 0x1f, 0x1e;
    ScratchStoreDwordx3 = "scratch_store_dwordx3", Scratch, -1, 0x1e, 0x1f;
    ScratchLoadUbyteD16 = "scratch_load_ubyte_d16", Scratch, -1, 0x20, 0x20;
    ScratchLoadUbyteD16Hi = "scratch_load_ubyte_d16_hi", Scratch, -1, 0x21, 0x21;
    ScratchLoadSbyteD16 = "scratch_load_sbyte_d16", Scratch, -1, 0x22, 0x22;
    ScratchLoadSbyteD16Hi = "scratch_load_sbyte_d16_hi", Scratch, -1, 0x23, 0x23;
    ScratchLoadShortD16 = "scratch_load_short_d16", Scratch, -1, 0x24, 0x24;
    ScratchLoadShortD16Hi = "scratch_load_short_d16_hi", Scratch, -1, 0x25, 0x25;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(Opcode::from_name("s_waitcnt"), Some(Opcode::SWaitcnt));
        assert_eq!(Opcode::from_name("v_add_co_u32_e64"), Some(Opcode::VAddCoU32E64));
        assert_eq!(Opcode::from_name("v_does_not_exist"), None);
        for &op in Opcode::ALL {
            assert_eq!(Opcode::from_name(op.name()), Some(op));
        }
    }

    #[test]
    fn test_generation_columns() {
        let gfx7 = OpcodeTable::for_chip(ChipClass::Gfx7);
        let gfx9 = OpcodeTable::for_chip(ChipClass::Gfx9);
        let gfx10 = OpcodeTable::for_chip(ChipClass::Gfx10_3);

        assert_eq!(gfx7.get(Opcode::SMovB32), Some(3));
        assert_eq!(gfx9.get(Opcode::SMovB32), Some(0));
        assert_eq!(gfx10.get(Opcode::SMovB32), Some(3));

        assert_eq!(gfx9.get(Opcode::SWaitcntVscnt), None);
        assert_eq!(gfx10.get(Opcode::SWaitcntVscnt), Some(0x17));
        assert_eq!(gfx7.get(Opcode::GlobalLoadDword), None);
        assert_eq!(gfx10.get(Opcode::VMadF32), Some(0x141));
        assert_eq!(gfx9.get(Opcode::VMadF32), Some(0x1c1));
    }

    #[test]
    fn test_pseudo_opcodes_have_no_encoding() {
        for &op in Opcode::ALL {
            if op.base_format().is_pseudo() {
                for chip in [ChipClass::Gfx6, ChipClass::Gfx9, ChipClass::Gfx10] {
                    assert_eq!(OpcodeTable::for_chip(chip).get(op), None, "{op}");
                }
            }
        }
    }
}
