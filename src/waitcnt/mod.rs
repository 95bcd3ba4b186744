// This module implements wait-count insertion. Memory loads, exports, scalar loads and messages
// complete asynchronously; the hardware only tracks how many operations of each class are still
// in flight (vm, exp, lgkm and, from GFX10, vs). Before an instruction reads or overwrites a
// register that such an operation will write (or is still reading), the program must execute an
// s_waitcnt that bounds the relevant counter low enough to guarantee that operation retired.
//
// The pass is a forward dataflow analysis. Each block has an input and output WaitCtx; inputs
// are the join of predecessor outputs (linear edges carry the scalar scoreboard, logical edges
// the vector one). Blocks are visited in layout order; a loop exit jumps back to its header
// until a sweep over the loop body changes nothing, which is tracked by a loop header stack and
// a loop progress depth. Within a block, `kill` computes the wait an instruction needs and
// retires it from the state, `gen` records the operations the instruction starts, and queued
// waits are materialised right before the next real instruction. Existing waits and pseudo
// barriers in the input are folded into the queue and disappear from the stream.

//! Wait-count insertion.

pub mod ctx;
pub mod imm;
#[cfg(test)]
mod proptests;

pub use ctx::{Target, WaitCtx, WaitEntry};
pub use imm::{Counter, WaitEvent, WaitImm};

use crate::config::EmitOptions;
use crate::error::{EmitError, EmitResult};
use crate::ir::{
    Block, ChipClass, Export, Format, Instruction, MemorySyncInfo, Opcode, Operand, PhysReg,
    Program, RegClass, Semantics,
};
use crate::ir::validate::check_predecessors;

/// Counters describing one run of the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitcntStats {
    /// Iterations of the block loop, including skipped and repeated visits.
    pub block_visits: usize,
    /// Blocks whose instructions were actually rewritten.
    pub blocks_processed: usize,
    /// `s_waitcnt` and `s_waitcnt_vscnt` instructions in the output.
    pub waits_emitted: usize,
}

/// Wait encoded by an existing wait instruction, if `instr` is one.
fn parse_wait_instr(ctx: &WaitCtx, instr: &Instruction) -> EmitResult<WaitImm> {
    match (instr.opcode, instr.format) {
        (Opcode::SWaitcntVscnt, Format::Sopk(sopk))
            if instr
                .definitions
                .first()
                .is_some_and(|def| def.phys_reg() == PhysReg::SGPR_NULL) =>
        {
            if ctx.target.chip < ChipClass::Gfx10 {
                return Err(EmitError::UnsupportedMemoryOp {
                    rendered: instr.to_string(),
                    chip: ctx.target.chip,
                });
            }
            let mut imm = WaitImm::new();
            imm.vs = sopk.imm.min(ctx.max_vs_cnt as u16) as u8;
            Ok(imm)
        }
        (Opcode::SWaitcnt, Format::Sopp(sopp)) => {
            Ok(WaitImm::unpack(ctx.target.chip, sopp.imm as u16))
        }
        _ => Ok(WaitImm::new()),
    }
}

/// Fold in the scoreboard entries of every register `instr` reads or writes.
fn check_instr(ctx: &WaitCtx, wait: &mut WaitImm, instr: &Instruction) {
    for op in &instr.operands {
        for slot in op.slots() {
            if let Some(entry) = ctx.gpr_map.get(&slot).filter(|e| e.wait_on_read) {
                wait.combine(&entry.imm);
            }
        }
    }

    let has_sampler = instr.has_sampler();
    for def in &instr.definitions {
        for slot in def.slots() {
            let Some(entry) = ctx.gpr_map.get(&slot) else {
                continue;
            };

            // Vector memory returns in issue order, as long as both accesses
            // take the same sampler path.
            if instr.is_vmem()
                && (entry.events & WaitEvent::VM_EVENTS) == WaitEvent::VMEM
                && entry.has_vmem_nosampler == !has_sampler
                && entry.has_vmem_sampler == has_sampler
            {
                continue;
            }

            // So does LDS, and GDS.
            if let Format::Ds(ds) = instr.format {
                let event = if ds.gds { WaitEvent::GDS } else { WaitEvent::LDS };
                if (entry.events & WaitEvent::LGKM_EVENTS) == event {
                    continue;
                }
            }

            wait.combine(&entry.imm);
        }
    }
}

/// Compute the wait `instr` needs and retire it from `ctx`.
fn kill(ctx: &mut WaitCtx, instr: &Instruction, options: &EmitOptions) -> EmitResult<WaitImm> {
    let mut imm = WaitImm::new();
    let parsed = parse_wait_instr(ctx, instr)?;

    if options.force_waitcnt() {
        imm = ctx.wait_for_all();
        imm.combine(&parsed);
        ctx.apply_wait(&mut imm);
        return Ok(imm);
    }

    if ctx.exp_cnt > 0 || ctx.vm_cnt > 0 || ctx.lgkm_cnt > 0 {
        check_instr(ctx, &mut imm, instr);
    }

    if !parsed.is_empty() {
        let mut merged = parsed;
        if merged.combine(&imm) {
            log::warn!("tightening `{}` to {}", instr, merged);
        }
        imm = merged;
    }

    // Scalar stores must land before the cache is written back.
    if ctx.lgkm_cnt > 0 && instr.opcode == Opcode::SDcacheWb {
        imm.lgkm = 0;
    }

    // GFX10 scalar loads can return stale data after a store to the same
    // address unless the store has completed.
    if ctx.target.chip >= ChipClass::Gfx10 {
        if let Format::Smem(smem) = instr.format {
            if ctx.pending_s_buffer_store
                && !instr.definitions.is_empty()
                && !smem.sync.can_reorder()
            {
                imm.lgkm = 0;
            }
        }
    }

    // Rasterization may start at the first position export, so pending
    // stores must be visible to the fragment stage by then.
    if ctx.target.early_rast {
        if let Format::Exp(exp) = instr.format {
            if (Export::DEST_POS..Export::DEST_PRIM).contains(&exp.dest) {
                if ctx.vs_cnt > 0 {
                    imm.vs = 0;
                }
                if ctx.vm_cnt > 0 {
                    imm.vm = 0;
                }
            }
        }
    }

    let barrier = match instr.format {
        Format::PseudoBarrier(barrier) => ctx.perform_barrier(barrier.sync, Semantics::ACQREL),
        _ => ctx.perform_barrier(instr.sync_info(), Semantics::RELEASE),
    };
    imm.combine(&barrier);

    ctx.apply_wait(&mut imm);
    Ok(imm)
}

fn insert_operand_entry(ctx: &mut WaitCtx, op: &Operand, event: WaitEvent) {
    if let crate::ir::OperandKind::Reg(reg) = op.kind() {
        ctx.insert_wait_entry(reg, op.reg_class(), event, false, false);
    }
}

/// Record the asynchronous operations `instr` starts.
fn gen_instr(ctx: &mut WaitCtx, instr: &Instruction) -> EmitResult<()> {
    let chip = ctx.target.chip;
    let unsupported = || EmitError::UnsupportedMemoryOp {
        rendered: instr.to_string(),
        chip,
    };

    match instr.format {
        Format::Exp(exp) => {
            let event = if exp.dest <= Export::DEST_NULL {
                WaitEvent::EXP_MRT_NULL
            } else if exp.dest <= Export::DEST_POS + 3 {
                WaitEvent::EXP_POS
            } else {
                WaitEvent::EXP_PARAM
            };
            ctx.update_counters(event, MemorySyncInfo::default());

            // Exported VGPRs may not be overwritten until the export has read them.
            for i in (0..4).filter(|i| exp.enabled_mask & (1 << i) != 0) {
                let index = if exp.compressed { i >> 1 } else { i };
                if let Some(op) = instr.operands.get(index) {
                    insert_operand_entry(ctx, op, event);
                }
            }
            ctx.insert_wait_entry(PhysReg::EXEC, RegClass::S2, event, false, false);
        }
        Format::Flat(flat) => {
            if chip < ChipClass::Gfx7 {
                return Err(unsupported());
            }
            if chip < ChipClass::Gfx10 && !instr.definitions.is_empty() {
                ctx.update_counters_for_flat_load(flat.sync);
            } else {
                ctx.update_counters(WaitEvent::FLAT, flat.sync);
            }
            if let Some(def) = instr.definitions.first() {
                ctx.insert_wait_entry(
                    def.phys_reg(),
                    def.reg_class(),
                    WaitEvent::FLAT,
                    true,
                    false,
                );
            }
        }
        Format::Smem(smem) => {
            ctx.update_counters(WaitEvent::SMEM, smem.sync);
            if let Some(def) = instr.definitions.first() {
                ctx.insert_wait_entry(
                    def.phys_reg(),
                    def.reg_class(),
                    WaitEvent::SMEM,
                    true,
                    false,
                );
            } else if chip >= ChipClass::Gfx10 && !smem.sync.can_reorder() {
                ctx.pending_s_buffer_store = true;
            }
        }
        Format::Ds(ds) => {
            let event = if ds.gds { WaitEvent::GDS } else { WaitEvent::LDS };
            ctx.update_counters(event, ds.sync);
            if ds.gds {
                ctx.update_counters(WaitEvent::GDS_GPR_LOCK, MemorySyncInfo::default());
            }

            if let Some(def) = instr.definitions.first() {
                ctx.insert_wait_entry(def.phys_reg(), def.reg_class(), event, true, false);
            }

            if ds.gds {
                for op in &instr.operands {
                    insert_operand_entry(ctx, op, WaitEvent::GDS_GPR_LOCK);
                }
                ctx.insert_wait_entry(
                    PhysReg::EXEC,
                    RegClass::S2,
                    WaitEvent::GDS_GPR_LOCK,
                    false,
                    false,
                );
            }
        }
        Format::Mubuf(_)
        | Format::Mtbuf(_)
        | Format::Mimg(_)
        | Format::Global(_)
        | Format::Scratch(_) => {
            if matches!(instr.format, Format::Global(_) | Format::Scratch(_))
                && chip < ChipClass::Gfx9
            {
                return Err(unsupported());
            }

            let event = if !instr.definitions.is_empty() || chip < ChipClass::Gfx10 {
                WaitEvent::VMEM
            } else {
                WaitEvent::VMEM_STORE
            };
            ctx.update_counters(event, instr.sync_info());

            let has_sampler = instr.has_sampler();
            if let Some(def) = instr.definitions.first() {
                ctx.insert_wait_entry(def.phys_reg(), def.reg_class(), event, true, has_sampler);
            }

            // GFX6 keeps store data VGPRs locked until the export counter drains.
            if chip == ChipClass::Gfx6 {
                let locked = match instr.format {
                    Format::Mimg(_) => instr.operands.get(2).filter(|op| !op.is_undefined()),
                    _ if instr.operands.len() == 4 => instr.operands.get(3),
                    _ => None,
                };
                if let Some(op) = locked {
                    ctx.update_counters(WaitEvent::VMEM_GPR_LOCK, MemorySyncInfo::default());
                    insert_operand_entry(ctx, op, WaitEvent::VMEM_GPR_LOCK);
                }
            }
        }
        Format::Sopp(_) if matches!(instr.opcode, Opcode::SSendmsg | Opcode::SSendmsghalt) => {
            ctx.update_counters(WaitEvent::SENDMSG, MemorySyncInfo::default());
        }
        _ => {}
    }
    Ok(())
}

/// Materialise `imm` as wait instructions.
fn emit_waitcnt(ctx: &WaitCtx, out: &mut Vec<Instruction>, mut imm: WaitImm) {
    if imm.vs != WaitImm::UNSET {
        log::trace!("  s_waitcnt_vscnt {}", imm.vs);
        out.push(Instruction::waitcnt_vscnt(imm.vs as u16));
        imm.vs = WaitImm::UNSET;
    }
    if !imm.is_empty() {
        log::trace!("  s_waitcnt {}", imm);
        out.push(Instruction::waitcnt(imm.pack(ctx.target.chip)));
    }
}

fn handle_block(ctx: &mut WaitCtx, block: &mut Block, options: &EmitOptions) -> EmitResult<()> {
    let mut out = Vec::with_capacity(block.instructions.len());
    let mut queued = WaitImm::new();

    for instr in std::mem::take(&mut block.instructions) {
        let is_wait = !parse_wait_instr(ctx, &instr)?.is_empty();

        queued.combine(&kill(ctx, &instr, options)?);
        gen_instr(ctx, &instr)?;

        if matches!(instr.format, Format::PseudoBarrier(_)) || is_wait {
            continue;
        }

        if !queued.is_empty() {
            emit_waitcnt(ctx, &mut out, queued);
            queued = WaitImm::new();
        }
        let sync = instr.sync_info();
        out.push(instr);

        let mut acquire = ctx.perform_barrier(sync, Semantics::ACQUIRE);
        if !acquire.is_empty() {
            ctx.apply_wait(&mut acquire);
            queued.combine(&acquire);
        }
    }

    // Operations started by the last instruction drain before control leaves the block.
    if options.force_waitcnt() {
        let mut drain = ctx.wait_for_all();
        ctx.apply_wait(&mut drain);
        queued.combine(&drain);
    }

    if !queued.is_empty() {
        emit_waitcnt(ctx, &mut out, queued);
    }

    block.instructions = out;
    Ok(())
}

/// Seed the entry state with vertex inputs still being fetched.
fn entry_state(program: &Program, target: Target) -> WaitCtx {
    let mut ctx = WaitCtx::new(target);
    for input in &program.vs_inputs {
        ctx.update_counters(WaitEvent::VMEM, MemorySyncInfo::default());
        ctx.insert_wait_entry(
            input.phys_reg(),
            input.reg_class(),
            WaitEvent::VMEM,
            true,
            false,
        );
    }
    ctx
}

/// Insert the waits `program` needs, replacing any already present.
pub fn insert_wait_states(
    program: &mut Program,
    options: &EmitOptions,
) -> EmitResult<WaitcntStats> {
    check_predecessors(program)?;
    let target = Target::of(program);
    let count = program.blocks.len();
    let mut stats = WaitcntStats::default();
    let mut done = vec![false; count];
    let mut in_ctx = vec![WaitCtx::new(target); count];
    let mut out_ctx = vec![WaitCtx::new(target); count];
    if count > 0 {
        in_ctx[0] = entry_state(program, target);
    }

    log::debug!(
        "inserting waits: {} blocks on {}",
        count,
        program.chip_class
    );

    let mut loop_headers: Vec<usize> = Vec::new();
    let mut loop_progress = 0usize;
    let mut i = 0;
    while i < count {
        let index = i;
        i += 1;
        stats.block_visits += 1;

        let kind = program.blocks[index].kind;
        if kind.contains(crate::ir::BlockKind::LOOP_HEADER) {
            loop_headers.push(index);
        } else if kind.contains(crate::ir::BlockKind::LOOP_EXIT) {
            if let Some(&header) = loop_headers.last() {
                let repeat = loop_progress == loop_headers.len();
                if repeat {
                    i = header;
                }
                loop_headers.pop();
                loop_progress = loop_progress.min(loop_headers.len());
                if repeat {
                    log::trace!("BB{}: loop changed, revisiting from BB{}", index, header);
                    continue;
                }
            }
        }

        let mut ctx = in_ctx[index].clone();
        let block = &mut program.blocks[index];
        let mut changed = false;
        for &pred in &block.linear_preds {
            changed |= ctx.join(&out_ctx[pred as usize], false);
        }
        for &pred in &block.logical_preds {
            changed |= ctx.join(&out_ctx[pred as usize], true);
        }

        if done[index] && !changed {
            in_ctx[index] = ctx;
            continue;
        }
        in_ctx[index] = ctx.clone();

        if block.instructions.is_empty() {
            out_ctx[index] = ctx;
            continue;
        }

        loop_progress = loop_progress.max(block.loop_nest_depth as usize);
        done[index] = true;

        log::trace!("BB{}: processing", index);
        handle_block(&mut ctx, block, options)?;
        stats.blocks_processed += 1;
        out_ctx[index] = ctx;
    }

    stats.waits_emitted = program
        .blocks
        .iter()
        .flat_map(|b| &b.instructions)
        .filter(|i| matches!(i.opcode, Opcode::SWaitcnt | Opcode::SWaitcntVscnt))
        .count();

    log::debug!(
        "waits done: {} visits, {} blocks processed, {} waits",
        stats.block_visits,
        stats.blocks_processed,
        stats.waits_emitted
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{
        BlockKind, Definition, FlatLike, HwStage, Mubuf, Smem, StorageClass, SyncScope,
    };

    fn global_load(dst: u32, addr: u32) -> Instruction {
        Instruction::new(
            Opcode::GlobalLoadDword,
            Format::Global(FlatLike::default()),
            vec![Definition::new(PhysReg::vgpr(dst), RegClass::V1)],
            vec![
                Operand::reg(PhysReg::vgpr(addr), RegClass::V2),
                Operand::undef(),
            ],
        )
    }

    fn vmov(dst: u32, src: u32) -> Instruction {
        Instruction::vop1(
            Opcode::VMovB32,
            Definition::new(PhysReg::vgpr(dst), RegClass::V1),
            Operand::reg(PhysReg::vgpr(src), RegClass::V1),
        )
    }

    fn single_block(chip: ChipClass, instrs: Vec<Instruction>) -> Program {
        let mut program = Program::new(chip, HwStage::Cs);
        let b = program.create_block(BlockKind::TOP_LEVEL);
        program.block_mut(b).instructions = instrs;
        program
    }

    fn waits(program: &Program) -> Vec<WaitImm> {
        program.blocks[0]
            .instructions
            .iter()
            .filter_map(|i| match i.format {
                Format::Sopp(sopp) if i.opcode == Opcode::SWaitcnt => {
                    Some(WaitImm::unpack(program.chip_class, sopp.imm as u16))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_wait_for_oldest_load() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut program = single_block(
            ChipClass::Gfx9,
            vec![global_load(0, 10), global_load(1, 10), vmov(2, 0)],
        );
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let instrs = &program.blocks[0].instructions;
        assert_eq!(instrs.len(), 4);
        assert_eq!(instrs[2].opcode, Opcode::SWaitcnt);
        assert_eq!(waits(&program)[0].vm, 1);
    }

    #[test]
    fn test_back_to_back_buffer_loads_need_no_wait() {
        let load = |dst: u32| {
            Instruction::new(
                Opcode::BufferLoadDword,
                Format::Mubuf(Mubuf::default()),
                vec![Definition::new(PhysReg::vgpr(dst), RegClass::V1)],
                vec![
                    Operand::reg(PhysReg::new(8), RegClass::S4),
                    Operand::reg(PhysReg::vgpr(5), RegClass::V1),
                    Operand::zero(),
                ],
            )
        };
        // Overwriting the destination of an in-order load with another load is fine.
        let mut program = single_block(ChipClass::Gfx10, vec![load(0), load(0)]);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        assert_eq!(program.blocks[0].instructions.len(), 2);
    }

    #[test]
    fn test_gfx10_scalar_store_then_load() {
        let store = Instruction::new(
            Opcode::SBufferStoreDword,
            Format::Smem(Smem {
                sync: MemorySyncInfo::storage(StorageClass::BUFFER),
                ..Smem::default()
            }),
            Vec::new(),
            vec![
                Operand::reg(PhysReg::new(4), RegClass::S4),
                Operand::zero(),
                Operand::reg(PhysReg::new(0), RegClass::S1),
            ],
        );
        let load = Instruction::new(
            Opcode::SBufferLoadDword,
            Format::Smem(Smem {
                sync: MemorySyncInfo::storage(StorageClass::BUFFER),
                ..Smem::default()
            }),
            vec![Definition::new(PhysReg::new(1), RegClass::S1)],
            vec![
                Operand::reg(PhysReg::new(4), RegClass::S4),
                Operand::zero(),
            ],
        );
        let mut program = single_block(ChipClass::Gfx10, vec![store, load]);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let waits = waits(&program);
        assert_eq!(waits.len(), 1);
        assert_eq!(waits[0].lgkm, 0);
        assert_eq!(program.blocks[0].instructions[1].opcode, Opcode::SWaitcnt);
    }

    #[test]
    fn test_existing_wait_is_absorbed() {
        let mut program = single_block(
            ChipClass::Gfx10,
            vec![
                global_load(0, 10),
                Instruction::waitcnt(0),
                vmov(2, 5),
                vmov(3, 0),
            ],
        );
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let instrs = &program.blocks[0].instructions;
        // The input wait now sits directly before the next real instruction.
        assert_eq!(instrs.len(), 4);
        assert_eq!(instrs[1].opcode, Opcode::SWaitcnt);
        assert_eq!(instrs[3].opcode, Opcode::VMovB32);
    }

    #[test]
    fn test_barrier_is_consumed() {
        let store = Instruction::new(
            Opcode::GlobalStoreDword,
            Format::Global(FlatLike {
                sync: MemorySyncInfo::storage(StorageClass::BUFFER),
                ..FlatLike::default()
            }),
            Vec::new(),
            vec![
                Operand::reg(PhysReg::vgpr(0), RegClass::V2),
                Operand::undef(),
                Operand::reg(PhysReg::vgpr(2), RegClass::V1),
            ],
        );
        let barrier = Instruction::barrier(
            MemorySyncInfo::new(StorageClass::BUFFER, Semantics::ACQREL, SyncScope::Device),
            SyncScope::Workgroup,
        );
        let mut program = single_block(ChipClass::Gfx10, vec![store, barrier, vmov(4, 5)]);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let instrs = &program.blocks[0].instructions;
        assert_eq!(instrs.len(), 3);
        assert_eq!(instrs[1].opcode, Opcode::SWaitcntVscnt);
        assert!(matches!(instrs[1].format, Format::Sopk(sopk) if sopk.imm == 0));
    }

    #[test]
    fn test_flat_on_gfx6_is_rejected() {
        let flat = Instruction::new(
            Opcode::FlatLoadDword,
            Format::Flat(FlatLike::default()),
            vec![Definition::new(PhysReg::vgpr(0), RegClass::V1)],
            vec![Operand::reg(PhysReg::vgpr(2), RegClass::V2)],
        );
        let mut program = single_block(ChipClass::Gfx6, vec![flat]);
        assert!(matches!(
            insert_wait_states(&mut program, &EmitOptions::default()),
            Err(EmitError::UnsupportedMemoryOp { .. })
        ));
    }

    #[test]
    fn test_missing_predecessor_is_an_error() {
        let mut program = single_block(ChipClass::Gfx9, vec![vmov(0, 1)]);
        program.blocks[0].logical_preds.push(5);
        let err = insert_wait_states(&mut program, &EmitOptions::default()).unwrap_err();
        assert!(
            matches!(err, EmitError::Validation { block: 0, .. }),
            "{err}"
        );
        assert!(err.to_string().contains("BB5"));
    }

    #[test]
    fn test_messages_count_as_lgkm() {
        let program = single_block(ChipClass::Gfx9, Vec::new());
        let mut ctx = WaitCtx::new(Target::of(&program));
        gen_instr(&mut ctx, &Instruction::sopp(Opcode::SSendmsg, 0x3)).unwrap();
        gen_instr(&mut ctx, &Instruction::sopp(Opcode::SSendmsghalt, 0x3)).unwrap();
        assert_eq!(ctx.lgkm_cnt, 2);
        assert_eq!(ctx.vm_cnt, 0);
        assert_eq!(ctx.exp_cnt, 0);
        assert_eq!(ctx.wait_for_all().lgkm, 0);
    }

    #[test]
    fn test_forced_wait_drains_at_block_end() {
        let mut program = single_block(ChipClass::Gfx9, vec![vmov(4, 5), global_load(0, 10)]);
        let exit = program.create_block(BlockKind::TOP_LEVEL);
        program.add_edge(0, exit);
        program
            .block_mut(exit)
            .instructions
            .push(Instruction::sopp(Opcode::SEndpgm, 0));

        let options = EmitOptions {
            debug: crate::config::DebugFlags::FORCE_WAITCNT,
            ..EmitOptions::default()
        };
        insert_wait_states(&mut program, &options).unwrap();

        let first: Vec<Opcode> = program.blocks[0]
            .instructions
            .iter()
            .map(|i| i.opcode)
            .collect();
        assert_eq!(
            first,
            vec![Opcode::VMovB32, Opcode::GlobalLoadDword, Opcode::SWaitcnt]
        );
        assert_eq!(waits(&program)[0].vm, 0);
        assert_eq!(program.blocks[1].instructions.len(), 1);
    }
}
