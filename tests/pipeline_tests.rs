//! End-to-end runs of the session over text programs.

use gcn_codegen::ir::Opcode;
use gcn_codegen::{text, DebugFlags, EmitError, EmitOptions, EmitSession};

const LOOP_SHADER: &str = "
; Sums a buffer into v4, one dword per iteration.
.chip gfx10
.stage cs
.wave 32
.workgroup 128
BB0: kind:top_level+loop_preheader+uniform
    s[8:11] = s_load_dwordx4 s[0:1], 0 storage:buffer
    v4 = v_mov_b32 0
    s2 = s_mov_b32 0
BB1: kind:loop_header+uniform depth:1 preds:BB0,BB1
    v5 = buffer_load_dword s[8:11], v6, s2 offen storage:buffer
    s2 = s_add_u32 s2, 4
    s_cmp_lg_u32 s2, 0x100
    v4 = v_add_f32 v4, v5
    s[12:13] = s_cbranch_scc1 block:BB1
BB2: kind:top_level+loop_exit+uniform preds:BB1
    global_store_dword v[0:1], undef, v4 storage:buffer
    s_endpgm
";

#[test]
fn test_loop_shader() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut program = text::parse_program(LOOP_SHADER).unwrap();
    let mut session = EmitSession::new(EmitOptions {
        debug: DebugFlags::VALIDATE_IR,
        ..EmitOptions::default()
    });
    let binary = session.compile(&mut program).unwrap();

    // The descriptor load lands before its first use in the loop and the
    // buffer load before the add.
    let body: Vec<Opcode> = program.blocks[1]
        .instructions
        .iter()
        .map(|instr| instr.opcode)
        .collect();
    assert_eq!(
        body,
        vec![
            Opcode::SWaitcnt,
            Opcode::BufferLoadDword,
            Opcode::SAddU32,
            Opcode::SCmpLgU32,
            Opcode::SWaitcnt,
            Opcode::VAddF32,
            Opcode::SCbranchScc1,
        ]
    );
    assert_eq!(binary.block_offsets.len(), 3);
    assert_eq!(binary.exec_size % 4, 0);
    assert_eq!(session.stats().programs_compiled, 1);
    assert!(session.stats().waits_emitted >= 2);
}

#[test]
fn test_printed_program_reassembles_identically() {
    let mut program = text::parse_program(LOOP_SHADER).unwrap();
    let first = EmitSession::default().compile(&mut program).unwrap();

    // The printed program already carries its waits and final exports.
    let mut reparsed = text::parse_program(&program.to_string()).unwrap();
    let second = EmitSession::default().compile(&mut reparsed).unwrap();
    assert_eq!(first, second);
    assert_eq!(program, reparsed);
}

#[test]
fn test_validation_catches_bad_branch() {
    let mut program = text::parse_program(
        ".chip gfx9\n.stage cs\nBB0:\n    s_branch block:BB4\n    s_endpgm\n",
    )
    .unwrap();
    let mut session = EmitSession::new(EmitOptions {
        debug: DebugFlags::VALIDATE_IR,
        ..EmitOptions::default()
    });
    let err = session.compile(&mut program).unwrap_err();
    assert!(
        matches!(err, EmitError::Validation { block: 0, index: 0, .. }),
        "{err}"
    );
    assert!(err.to_string().contains("BB4"));
}

#[test]
fn test_parse_error_surfaces_line() {
    let err = text::parse_program(".chip gfx9\n.stage cs\nBB0:\n    s_endpgm bogus\n").unwrap_err();
    assert_eq!(
        err,
        EmitError::Parse {
            line: 4,
            message: "modifier `bogus` does not apply to SOPP".to_string(),
        }
    );
}
