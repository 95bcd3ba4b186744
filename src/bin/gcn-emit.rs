//! Assemble a textual shader program.
//!
//! Reads a program in the printed text form (from a file or stdin), inserts
//! waits, assembles it and writes the words as hex or raw little-endian bytes.

use clap::Parser;
use gcn_codegen::config::{DebugFlags, EmitOptions};
use gcn_codegen::ir::ChipClass;
use gcn_codegen::session::EmitSession;
use gcn_codegen::text;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gcn-emit", version, about = "Insert waits into and assemble a GCN/RDNA shader program")]
struct Cli {
    /// Program to assemble; stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Override the `.chip` directive of the input.
    #[arg(long, value_parser = parse_chip)]
    chip: Option<ChipClass>,

    /// Wait for every outstanding counter after each instruction.
    #[arg(long)]
    force_waitcnt: bool,

    /// Assemble the program as is, without wait insertion.
    #[arg(long, conflicts_with = "force_waitcnt")]
    no_waitcnt: bool,

    /// Validate the program before running the passes.
    #[arg(long)]
    validate: bool,

    /// Print the program after wait insertion to stderr.
    #[arg(long)]
    print: bool,

    /// Print session statistics to stderr.
    #[arg(long)]
    stats: bool,

    /// Write raw little-endian words to FILE instead of hex to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn parse_chip(name: &str) -> Result<ChipClass, String> {
    ChipClass::from_name(name).ok_or_else(|| {
        let known: Vec<_> = ChipClass::ALL.iter().map(|chip| chip.name()).collect();
        format!("unknown chip `{name}`, expected one of {}", known.join(", "))
    })
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let source = read_input(cli.input.as_ref())?;
    let mut program = text::parse_program(&source)?;
    if let Some(chip) = cli.chip {
        program.chip_class = chip;
    }

    let mut options = EmitOptions::from_env();
    options.insert_waits = !cli.no_waitcnt;
    if cli.force_waitcnt {
        options.debug |= DebugFlags::FORCE_WAITCNT;
    }
    if cli.validate {
        options.debug |= DebugFlags::VALIDATE_IR;
    }

    let mut session = EmitSession::new(options);
    let binary = session.compile(&mut program)?;

    if cli.print {
        eprint!("{program}");
    }
    if cli.stats {
        eprintln!("{}", binary.stats);
        eprint!("{}", session.stats());
    }

    match &cli.output {
        Some(path) => fs::write(path, binary.to_bytes())?,
        None => {
            let mut stdout = io::stdout().lock();
            for (i, word) in binary.code.iter().enumerate() {
                if i * 4 == binary.exec_size {
                    writeln!(stdout, "; padding and constant data")?;
                }
                writeln!(stdout, "{word:08x}")?;
            }
        }
    }
    Ok(())
}
