//! Final export marking.
//!
//! The hardware needs the last position export of a vertex or NGG shader, and
//! the last export of a fragment shader, flagged `done`; fragment shaders also
//! set `vm` (valid mask). Only blocks ending the export sequence are scanned,
//! backwards, stopping at a write of exec.

use crate::error::{EmitError, EmitResult};
use crate::ir::{BlockKind, Format, HwStage, Program};

pub(super) fn fix_exports(program: &mut Program) -> EmitResult<()> {
    let positions_only = matches!(program.stage, HwStage::Vs | HwStage::Ngg);
    let mut exported = false;

    for block in &mut program.blocks {
        if !block.kind.contains(BlockKind::EXPORT_END) {
            continue;
        }
        for instr in block.instructions.iter_mut().rev() {
            if let Format::Exp(exp) = &mut instr.format {
                if positions_only {
                    if exp.is_position() {
                        exp.done = true;
                        exported = true;
                        break;
                    }
                } else {
                    exp.done = true;
                    exp.valid_mask = true;
                    exported = true;
                    break;
                }
            } else if instr.writes_exec() {
                break;
            }
        }
    }

    if !exported {
        return Err(EmitError::MissingExport {
            stage: program.stage,
            program: program.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ChipClass, Definition, Export, Instruction, Opcode, Operand, PhysReg, RegClass};

    fn export(dest: u8) -> Instruction {
        Instruction::new(
            Opcode::Exp,
            Format::Exp(Export {
                enabled_mask: 0xf,
                dest,
                ..Export::default()
            }),
            Vec::new(),
            vec![Operand::reg(PhysReg::vgpr(0), RegClass::V1); 4],
        )
    }

    fn flags(instr: &Instruction) -> (bool, bool) {
        match instr.format {
            Format::Exp(exp) => (exp.done, exp.valid_mask),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_vertex_marks_last_position() {
        let mut program = Program::new(ChipClass::Gfx9, HwStage::Vs);
        let b = program.create_block(BlockKind::TOP_LEVEL | BlockKind::EXPORT_END);
        program.block_mut(b).instructions = vec![
            export(Export::DEST_POS),
            export(Export::DEST_POS + 1),
            export(Export::DEST_PARAM),
        ];
        fix_exports(&mut program).unwrap();

        let instrs = &program.blocks[0].instructions;
        assert_eq!(flags(&instrs[0]), (false, false));
        assert_eq!(flags(&instrs[1]), (true, false));
        assert_eq!(flags(&instrs[2]), (false, false));
    }

    #[test]
    fn test_fragment_marks_last_export() {
        let mut program = Program::new(ChipClass::Gfx10, HwStage::Fs);
        let b = program.create_block(BlockKind::EXPORT_END);
        program.block_mut(b).instructions = vec![
            export(Export::DEST_MRT0),
            export(Export::DEST_MRTZ),
            Instruction::sopp(Opcode::SEndpgm, 0),
        ];
        fix_exports(&mut program).unwrap();
        assert_eq!(flags(&program.blocks[0].instructions[1]), (true, true));
        assert_eq!(flags(&program.blocks[0].instructions[0]), (false, false));
    }

    #[test]
    fn test_exec_write_stops_scan() {
        let mut program = Program::new(ChipClass::Gfx9, HwStage::Fs);
        let b = program.create_block(BlockKind::EXPORT_END);
        program.block_mut(b).instructions = vec![
            export(Export::DEST_MRT0),
            Instruction::sop1(
                Opcode::SMovB64,
                vec![Definition::new(PhysReg::EXEC, RegClass::S2)],
                vec![Operand::c32(0)],
            ),
        ];
        let err = fix_exports(&mut program).unwrap_err();
        assert!(matches!(err, EmitError::MissingExport { stage: HwStage::Fs, .. }));
        assert!(err.to_string().starts_with("Missing export in fs shader"));
    }
}
