//! Command-line syntax analyzer for the Jack language
//!
//! Usage:
//!   jack `<path>` [--format `<format>`] [--stdout]
//!
//! `<path>` is a single `.jack` file or a directory; directories are scanned
//! non-recursively for `.jack` files. Each input produces one output file
//! beside it (`Main.jack` → `Main.xml` for the parse tree, `MainT.xml` for
//! the token listing). A failed file leaves no output behind: results are
//! staged to a temporary file and only made visible on success.

use clap::{Arg, ArgAction, Command};
use jack_parser::jack::processor::{self, OutputFormat, ProcessError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = Command::new("jack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Syntax analyzer for the Jack language")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to a .jack file or a directory of .jack files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'ast-tag' (parse tree), 'tokens', or 'token-json'")
                .default_value("ast-tag"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print results to standard output instead of writing files")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format_name = matches.get_one::<String>("format").expect("format has a default");
    let to_stdout = matches.get_flag("stdout");

    let format = match OutputFormat::from_name(format_name) {
        Ok(format) => format,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let inputs = match collect_inputs(Path::new(path)) {
        Ok(inputs) => inputs,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for input in &inputs {
        if let Err(err) = run_one(input, format, to_stdout) {
            eprintln!("{}: {}", input.display(), err);
            failures += 1;
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Resolve the positional path to the list of input files.
///
/// Directories are scanned one level deep for `.jack` files, sorted so runs
/// are deterministic. A file path is taken as-is.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|err| format!("{}: {}", path.display(), err))?;
        let mut inputs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|candidate| candidate.extension().is_some_and(|ext| ext == "jack"))
            .collect();
        inputs.sort();
        if inputs.is_empty() {
            return Err(format!("{}: no .jack files found", path.display()));
        }
        Ok(inputs)
    } else if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(format!("{}: no such file or directory", path.display()))
    }
}

/// Analyze one input and publish (or print) its result
fn run_one(input: &Path, format: OutputFormat, to_stdout: bool) -> Result<(), ProcessError> {
    let output = processor::process_file(input, format)?;
    if to_stdout {
        print!("{}", output);
        return Ok(());
    }
    let target = output_path(input, format);
    publish(&target, &output)
        .map_err(|err| ProcessError::Io(format!("{}: {}", target.display(), err)))
}

/// Output path beside the input, with the format's suffix substituted
fn output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    input.with_file_name(format.output_file_name(&stem))
}

/// Write to a staging file in the destination directory, then persist over
/// the final name, so a failure leaves either nothing or a complete result
fn publish(target: &Path, contents: &str) -> std::io::Result<()> {
    let dir = target.parent().filter(|p| !p.as_os_str().is_empty());
    let mut staged = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
    staged.write_all(contents.as_bytes())?;
    staged.persist(target).map_err(|err| err.error)?;
    Ok(())
}
