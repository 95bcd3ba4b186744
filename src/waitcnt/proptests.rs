use super::{gen_instr, insert_wait_states, kill, WaitCtx, WaitImm};
use crate::config::EmitOptions;
use crate::ir::{
    BlockKind, ChipClass, Definition, Ds, FlatLike, Format, HwStage, Instruction, Opcode,
    Operand, PhysReg, Program, RegClass, Smem,
};
use hashbrown::HashMap;
use proptest::prelude::*;

const REGS: u32 = 6;
const MAX_OPS: usize = 40;
/// Ops per block in the CFG programs, kept small so repeated loop bodies stay
/// below the counter maxima.
const BLOCK_OPS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    GlobalLoad { dst: u32 },
    LdsRead { dst: u32 },
    ScalarLoad { dst: u32 },
    VectorUse { dst: u32, src: u32 },
    ScalarUse { dst: u32, src: u32 },
    MixedUse { dst: u32, src: u32 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let reg = 0..REGS;
    prop_oneof![
        2 => reg.clone().prop_map(|dst| Op::GlobalLoad { dst }),
        2 => reg.clone().prop_map(|dst| Op::LdsRead { dst }),
        2 => reg.clone().prop_map(|dst| Op::ScalarLoad { dst }),
        3 => (reg.clone(), reg.clone()).prop_map(|(dst, src)| Op::VectorUse { dst, src }),
        2 => (reg.clone(), reg.clone()).prop_map(|(dst, src)| Op::ScalarUse { dst, src }),
        1 => (reg.clone(), reg).prop_map(|(dst, src)| Op::MixedUse { dst, src }),
    ]
}

fn vgpr(index: u32) -> Operand {
    Operand::reg(PhysReg::vgpr(index), RegClass::V1)
}

fn sgpr(index: u32) -> Operand {
    Operand::reg(PhysReg::new(index), RegClass::S1)
}

fn lower(op: Op) -> Instruction {
    let vdef = |i: u32| Definition::new(PhysReg::vgpr(i), RegClass::V1);
    let sdef = |i: u32| Definition::new(PhysReg::new(i), RegClass::S1);
    match op {
        Op::GlobalLoad { dst } => Instruction::new(
            Opcode::GlobalLoadDword,
            Format::Global(FlatLike::default()),
            vec![vdef(dst)],
            vec![
                Operand::reg(PhysReg::vgpr(10), RegClass::V2),
                Operand::undef(),
            ],
        ),
        Op::LdsRead { dst } => Instruction::new(
            Opcode::DsReadB32,
            Format::Ds(Ds::default()),
            vec![vdef(dst)],
            vec![vgpr(12)],
        ),
        Op::ScalarLoad { dst } => Instruction::new(
            Opcode::SLoadDword,
            Format::Smem(Smem::default()),
            vec![sdef(dst)],
            vec![
                Operand::reg(PhysReg::new(20), RegClass::S2),
                Operand::c32(dst * 4),
            ],
        ),
        Op::VectorUse { dst, src } => Instruction::vop1(Opcode::VMovB32, vdef(dst), vgpr(src)),
        Op::ScalarUse { dst, src } => {
            Instruction::sop1(Opcode::SMovB32, vec![sdef(dst)], vec![sgpr(src)])
        }
        Op::MixedUse { dst, src } => Instruction::vop1(Opcode::VMovB32, vdef(dst), sgpr(src)),
    }
}

fn program(chip: ChipClass, ops: &[Op]) -> Program {
    let mut program = Program::new(chip, HwStage::Cs);
    let b = program.create_block(BlockKind::TOP_LEVEL);
    program.block_mut(b).instructions = ops.iter().map(|&op| lower(op)).collect();
    program
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// BB0 branches to BB1 or BB2, both fall into BB3.
    Diamond,
    /// BB0 enters the self loop BB1, which exits to BB2.
    Loop,
}

fn cfg_program(chip: ChipClass, shape: Shape, bodies: &[Vec<Op>]) -> Program {
    let mut program = Program::new(chip, HwStage::Cs);
    let kinds = match shape {
        Shape::Diamond => vec![
            BlockKind::TOP_LEVEL,
            BlockKind::BRANCH,
            BlockKind::BRANCH,
            BlockKind::TOP_LEVEL.union(BlockKind::MERGE),
        ],
        Shape::Loop => vec![
            BlockKind::TOP_LEVEL.union(BlockKind::LOOP_PREHEADER),
            BlockKind::LOOP_HEADER,
            BlockKind::TOP_LEVEL.union(BlockKind::LOOP_EXIT),
        ],
    };
    for (kind, ops) in kinds.into_iter().zip(bodies) {
        let b = program.create_block(kind);
        program.block_mut(b).instructions = ops.iter().map(|&op| lower(op)).collect();
    }
    match shape {
        Shape::Diamond => {
            for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
                program.add_edge(from, to);
            }
        }
        Shape::Loop => {
            program.block_mut(1).loop_nest_depth = 1;
            for (from, to) in [(0, 1), (1, 1), (1, 2)] {
                program.add_edge(from, to);
            }
        }
    }
    program
}

/// Block sequences an execution of `shape` can take.
fn paths(shape: Shape) -> Vec<Vec<usize>> {
    match shape {
        Shape::Diamond => vec![vec![0, 1, 3], vec![0, 2, 3]],
        Shape::Loop => (1..=3)
            .map(|trips| {
                let mut path = vec![0];
                path.extend(std::iter::repeat(1).take(trips));
                path.push(2);
                path
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Vmem,
    Lds,
    Smem,
}

struct Pending {
    class: Class,
    done: bool,
}

/// Replay `instrs`, retiring operations only when every completion order the
/// hardware allows guarantees it. Returns the index of the first instruction
/// that touches a register whose writer may still be in flight.
fn first_hazard(chip: ChipClass, instrs: &[Instruction]) -> Option<usize> {
    let mut ops: Vec<Pending> = Vec::new();
    let mut writer: HashMap<PhysReg, usize> = HashMap::new();

    for (index, instr) in instrs.iter().enumerate() {
        if let (Opcode::SWaitcnt, Format::Sopp(sopp)) = (instr.opcode, instr.format) {
            let imm = WaitImm::unpack(chip, sopp.imm as u16);
            let retired: Vec<usize> = (0..ops.len())
                .filter(|&id| !ops[id].done)
                .filter(|&id| {
                    let younger = |class: Class| {
                        ops[id + 1..]
                            .iter()
                            .filter(|p| !p.done && p.class == class)
                            .count()
                    };
                    match ops[id].class {
                        // In order: the op is pending only if all younger ones are.
                        Class::Vmem => younger(Class::Vmem) >= imm.vm as usize,
                        Class::Lds => younger(Class::Lds) >= imm.lgkm as usize,
                        // Any order: only a full drain guarantees completion.
                        Class::Smem => imm.lgkm == 0,
                    }
                })
                .collect();
            for id in retired {
                ops[id].done = true;
            }
            continue;
        }

        let in_flight =
            |reg: &PhysReg| writer.get(reg).map(|&id| (id, !ops[id].done)).filter(|p| p.1);

        for op in &instr.operands {
            if op.slots().any(|slot| in_flight(&slot).is_some()) {
                return Some(index);
            }
        }

        let class = match instr.format {
            Format::Global(_) => Some(Class::Vmem),
            Format::Ds(_) => Some(Class::Lds),
            Format::Smem(_) => Some(Class::Smem),
            _ => None,
        };
        for def in &instr.definitions {
            for slot in def.slots() {
                if let Some((id, _)) = in_flight(&slot) {
                    // LDS results land in order, so overwriting with LDS is safe.
                    if !(class == Some(Class::Lds) && ops[id].class == Class::Lds) {
                        return Some(index);
                    }
                }
            }
        }

        let id = class.map(|class| {
            ops.push(Pending { class, done: false });
            ops.len() - 1
        });
        for def in &instr.definitions {
            for slot in def.slots() {
                match id {
                    Some(id) => writer.insert(slot, id),
                    None => writer.remove(&slot),
                };
            }
        }
    }
    None
}

/// State after running the transfer functions over `ops`.
fn state_after(chip: ChipClass, ops: &[Op]) -> WaitCtx {
    let program = program(chip, ops);
    let mut ctx = WaitCtx::new(super::Target::of(&program));
    let options = EmitOptions::default();
    for instr in &program.blocks[0].instructions {
        kill(&mut ctx, instr, &options).unwrap();
        gen_instr(&mut ctx, instr).unwrap();
    }
    ctx
}

fn no_weaker(joined: &WaitImm, input: &WaitImm) -> bool {
    joined.vm <= input.vm
        && joined.exp <= input.exp
        && joined.lgkm <= input.lgkm
        && joined.vs <= input.vs
}

fn chip_strategy() -> impl Strategy<Value = ChipClass> {
    prop_oneof![Just(ChipClass::Gfx9), Just(ChipClass::Gfx10)]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![Just(Shape::Diamond), Just(Shape::Loop)]
}

proptest! {
    #[test]
    fn waits_cover_every_completion_order(
        chip in chip_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..MAX_OPS),
    ) {
        let mut program = program(chip, &ops);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let hazard = first_hazard(chip, &program.blocks[0].instructions);
        prop_assert_eq!(hazard, None, "{}", program);
    }

    #[test]
    fn waits_hold_along_every_path(
        chip in chip_strategy(),
        shape in shape_strategy(),
        bodies in prop::collection::vec(prop::collection::vec(op_strategy(), 0..BLOCK_OPS), 4),
    ) {
        let mut program = cfg_program(chip, shape, &bodies);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        for path in paths(shape) {
            let trace: Vec<Instruction> = path
                .iter()
                .flat_map(|&b| program.blocks[b].instructions.iter().cloned())
                .collect();
            let hazard = first_hazard(chip, &trace);
            prop_assert_eq!(hazard, None, "path {:?}\n{}", path, program);
        }
    }

    #[test]
    fn rerunning_the_pass_changes_nothing(
        ops in prop::collection::vec(op_strategy(), 1..MAX_OPS),
    ) {
        let mut program = program(ChipClass::Gfx10, &ops);
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        let once = program.clone();
        insert_wait_states(&mut program, &EmitOptions::default()).unwrap();
        prop_assert_eq!(once, program);
    }

    #[test]
    fn join_is_an_upper_bound(
        chip in chip_strategy(),
        a in prop::collection::vec(op_strategy(), 0..MAX_OPS),
        b in prop::collection::vec(op_strategy(), 0..MAX_OPS),
    ) {
        let a = state_after(chip, &a);
        let b = state_after(chip, &b);
        let mut joined = a.clone();
        joined.join(&b, true);
        joined.join(&b, false);

        for input in [&a, &b] {
            prop_assert!(joined.vm_cnt >= input.vm_cnt);
            prop_assert!(joined.lgkm_cnt >= input.lgkm_cnt);
            prop_assert!(joined.exp_cnt >= input.exp_cnt);
            prop_assert!(joined.vs_cnt >= input.vs_cnt);
            for (reg, entry) in &input.gpr_map {
                let merged = joined.gpr_map.get(reg);
                prop_assert!(merged.is_some());
                let merged = merged.unwrap();
                prop_assert!(no_weaker(&merged.imm, &entry.imm));
                prop_assert!(merged.events.contains(entry.events));
                prop_assert!(merged.counters.contains(entry.counters));
            }
            for i in 0..input.barrier_imm.len() {
                prop_assert!(no_weaker(&joined.barrier_imm[i], &input.barrier_imm[i]));
            }
        }

        let mut again = joined.clone();
        prop_assert!(!again.join(&b, true));
        prop_assert!(!again.join(&a, false));
    }
}
