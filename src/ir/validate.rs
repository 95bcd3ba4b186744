//! Structural checks run before the backend passes when `VALIDATE_IR` is set.

use super::{Format, Instruction, Program};
use crate::error::{EmitError, EmitResult};

fn check_instruction(program: &Program, instr: &Instruction) -> Result<(), String> {
    let base = instr.opcode.base_format();
    if !instr.format.compatible_with(base) {
        return Err(format!(
            "{} ({:?}) cannot be encoded as {}",
            instr.opcode,
            base,
            instr.format.name()
        ));
    }

    if let Some(target) = instr.branch_target() {
        if target as usize >= program.blocks.len() {
            return Err(format!("branch to missing block BB{target}"));
        }
    }

    let mut literal = None;
    for op in instr.operands.iter().filter(|op| op.is_literal()) {
        let value = op.constant_value();
        match literal {
            None => literal = value,
            Some(existing) if Some(existing) != value => {
                return Err("more than one distinct literal".to_string())
            }
            Some(_) => {}
        }
    }

    if let Format::Exp(exp) = instr.format {
        if instr.operands.len() != 4 {
            return Err("exports take exactly four operands".to_string());
        }
        if exp.enabled_mask > 0xf {
            return Err("export mask wider than four channels".to_string());
        }
    }

    Ok(())
}

/// Reject predecessor edges naming blocks past the end of the program.
pub(crate) fn check_predecessors(program: &Program) -> EmitResult<()> {
    let count = program.blocks.len();
    for (i, block) in program.blocks.iter().enumerate() {
        let mut preds = block.linear_preds.iter().chain(&block.logical_preds);
        if let Some(pred) = preds.find(|&&p| p as usize >= count) {
            return Err(EmitError::Validation {
                block: i as u32,
                index: 0,
                reason: format!("predecessor BB{pred} does not exist"),
            });
        }
    }
    Ok(())
}

/// Check block indices, predecessor lists and every instruction's format.
pub fn validate(program: &Program) -> EmitResult<()> {
    let count = program.blocks.len();
    check_predecessors(program)?;
    for (i, block) in program.blocks.iter().enumerate() {
        let fail = |index: usize, reason: String| EmitError::Validation {
            block: block.index,
            index,
            reason,
        };

        if block.index as usize != i {
            return Err(fail(0, format!("block stored at position {i}")));
        }

        for (index, instr) in block.instructions.iter().enumerate() {
            check_instruction(program, instr).map_err(|reason| fail(index, reason))?;
        }
    }
    log::trace!("validated {} blocks", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{
        BlockKind, ChipClass, Definition, HwStage, Opcode, Operand, PhysReg, RegClass,
    };

    fn program() -> Program {
        let mut program = Program::new(ChipClass::Gfx10, HwStage::Cs);
        program.create_block(BlockKind::TOP_LEVEL);
        program
    }

    #[test]
    fn test_valid_program() {
        let mut program = program();
        program.blocks[0].instructions.push(Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::c32(1000), Operand::c32(1000)],
        ));
        assert!(validate(&program).is_ok());
    }

    #[test]
    fn test_two_literals() {
        let mut program = program();
        program.blocks[0].instructions.push(Instruction::sop2(
            Opcode::SAddU32,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::c32(1000), Operand::c32(2000)],
        ));
        assert!(matches!(
            validate(&program),
            Err(EmitError::Validation { block: 0, index: 0, .. })
        ));
    }

    #[test]
    fn test_bad_branch_and_format() {
        let mut program = program();
        program.blocks[0]
            .instructions
            .push(Instruction::branch(Opcode::SBranch, 7, None));
        assert!(validate(&program).is_err());

        let mut program = self::program();
        program.blocks[0].instructions.push(Instruction::new(
            Opcode::SMovB32,
            Format::Sop2,
            vec![Definition::new(PhysReg::new(0), RegClass::S1)],
            vec![Operand::zero()],
        ));
        assert!(validate(&program).is_err());
    }

    #[test]
    fn test_bad_predecessor() {
        let mut program = program();
        program.blocks[0].linear_preds.push(3);
        assert!(validate(&program).is_err());
    }
}
