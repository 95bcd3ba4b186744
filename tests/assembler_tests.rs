//! Assembly of complete programs: exports, constant pool, branches and errors.

use gcn_codegen::ir::{ChipClass, HwStage, Program};
use gcn_codegen::{emit_program, text, EmitError, EmitOptions, EmitSession};

fn parse(source: &str) -> Program {
    text::parse_program(source).unwrap_or_else(|e| panic!("failed to parse program: {e}"))
}

fn assemble(source: &str) -> Result<gcn_codegen::Binary, EmitError> {
    let _ = env_logger::builder().is_test(true).try_init();
    EmitSession::new(EmitOptions::default()).compile(&mut parse(source))
}

#[test]
fn test_fragment_shader_export() {
    let binary = assemble(
        "
.chip gfx9
.stage fs
BB0: kind:top_level+export_end
    v0 = v_mov_b32 0x3f800000
    exp v0, v0, v0, v0 en:0xf dest:0
    s_endpgm
",
    )
    .unwrap();

    // The only export becomes `done vm`.
    assert_eq!(
        binary.code,
        vec![0x7e00_02f2, 0xc400_180f, 0x0000_0000, 0xbf81_0000]
    );
    assert_eq!(binary.exec_size, 16);
    assert_eq!(
        binary.to_bytes()[..8],
        [0xf2, 0x02, 0x00, 0x7e, 0x0f, 0x18, 0x00, 0xc4]
    );
}

#[test]
fn test_vertex_shader_marks_position_only() {
    let mut program = parse(
        "
.chip gfx10
.stage vs
BB0: kind:top_level+export_end
    exp v0, v1, v2, v3 en:0xf dest:12
    exp v4, v4, v4, v4 en:0xf dest:32
    s_endpgm
",
    );
    let binary = emit_program(&mut program).unwrap();

    let printed = program.to_string();
    assert!(printed.contains("exp v0, v1, v2, v3 en:0xf dest:12 done\n"), "{printed}");
    assert!(printed.contains("exp v4, v4, v4, v4 en:0xf dest:32\n"), "{printed}");
    // GFX10 export encoding with done set.
    assert_eq!(binary.code[0], 0xf800_08cf);
}

#[test]
fn test_missing_export() {
    let err = assemble(
        "
.chip gfx9
.stage fs
BB0: kind:top_level+export_end
    v0 = v_mov_b32 0
    s_endpgm
",
    )
    .unwrap_err();
    assert!(
        matches!(err, EmitError::MissingExport { stage: HwStage::Fs, .. }),
        "{err}"
    );
    let message = err.to_string();
    assert!(message.starts_with("Missing export in fs shader:\n"), "{message}");
    assert!(message.contains("BB0: kind:top_level+export_end"), "{message}");
}

#[test]
fn test_compute_shader_needs_no_export() {
    let binary = assemble(".chip gfx9\n.stage cs\nBB0:\n    s_endpgm\n").unwrap();
    assert_eq!(binary.code, vec![0xbf81_0000]);
}

#[test]
fn test_constant_pool_gfx10() {
    let mut program = parse(
        "
.chip gfx10
.stage cs
.constdata 0102030405060708
BB0: kind:top_level
    s[4:5] = p_constaddr 0
    s_endpgm
",
    );
    let binary = emit_program(&mut program).unwrap();

    assert_eq!(
        binary.exec_words(),
        &[0xbe84_1f00, 0x8004_ff04, 63 * 4, 0x8205_8005, 0xbf81_0000]
    );
    assert_eq!(binary.exec_size, 20);
    assert_eq!(binary.stats.padding_words, 59);
    assert!(binary.code[5..64].iter().all(|&word| word == 0xbf9f_0000));
    assert_eq!(&binary.code[64..], &[0x0403_0201, 0x0807_0605]);
}

#[test]
fn test_long_branch_from_text() {
    let mut source = String::from(
        ".chip gfx10\n.stage cs\nBB0: kind:top_level\n    s[10:11] = s_branch block:BB2\nBB1: kind:top_level preds:BB0\n",
    );
    for _ in 0..40_000 {
        source.push_str("    s_nop\n");
    }
    source.push_str("BB2: kind:top_level preds:BB0,BB1\n    s_endpgm\n");

    let mut program = parse(&source);
    let binary = emit_program(&mut program).unwrap();

    assert_eq!(binary.stats.long_jumps, 1);
    assert_eq!(binary.block_offsets, vec![0, 7, 40_007]);
    assert_eq!(program.blocks[2].offset, 40_007);
    assert_eq!(binary.exec_size, 40_008 * 4);
    // s_getpc_b64 s[10:11]
    assert_eq!(binary.code[0], 0xbe8a_1f00);
    assert_eq!(binary.code[2], (40_007 - 1) * 4);
    assert_eq!(binary.code.len() % 16, 0);
    assert!(binary.code.len() >= 40_008 + 48);
}

#[test]
fn test_short_branch_back_to_loop_header() {
    let mut program = parse(
        "
.chip gfx9
.stage cs
BB0: kind:top_level+loop_preheader
    s0 = s_mov_b32 0
BB1: kind:loop_header depth:1 preds:BB0,BB1
    s0 = s_add_u32 s0, 1
    s_cbranch_scc1 block:BB1
BB2: kind:top_level+loop_exit preds:BB1
    s_endpgm
",
    );
    let binary = emit_program(&mut program).unwrap();
    assert_eq!(binary.block_offsets, vec![0, 1, 3]);
    // Branch at word 2 back to word 1.
    assert_eq!(binary.code[2], 0xbf85_fffe);
}

#[test]
fn test_unsupported_opcode() {
    let mut program = parse(
        "
.chip gfx10
.stage cs
BB0: kind:top_level
    v0 = v_fmac_f32 v1, v2
    s_endpgm
",
    );
    let mut gfx9 = program.clone();
    gfx9.chip_class = ChipClass::Gfx9;
    let err = emit_program(&mut gfx9).unwrap_err();
    assert_eq!(
        err,
        EmitError::UnsupportedOpcode {
            rendered: "v0 = v_fmac_f32 v1, v2".to_string(),
            chip: ChipClass::Gfx9,
        }
    );
    assert!(err.to_string().starts_with("Unsupported opcode: v0 = v_fmac_f32"));

    assert!(emit_program(&mut program).is_ok());
}

#[test]
fn test_two_literals_rejected() {
    let err = assemble(
        "
.chip gfx9
.stage cs
BB0:
    s0 = s_add_u32 0x1000, 0x2000
    s_endpgm
",
    )
    .unwrap_err();
    assert!(matches!(err, EmitError::InvalidEncoding { .. }), "{err}");
}
