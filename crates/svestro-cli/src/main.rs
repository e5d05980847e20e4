//! Svestro CLI.
//!
//! Generates an Astro content config from a Sveltia CMS config, either from
//! positional arguments or by prompting for them.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use console::Term;

use svestro_compiler::{CompileResult, Compiler, CompilerConfig};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "svestro")]
#[command(version)]
#[command(about = "Generate Astro content configuration from Sveltia CMS configuration")]
struct Cli {
    /// Path to the Sveltia config file
    config: Option<PathBuf>,

    /// Path of the Astro content config to write
    output: Option<PathBuf>,

    /// Path prefix for collection base paths
    #[arg(short, long, value_name = "PATH")]
    prefix: Option<String>,

    /// Config format (yaml or json), inferred from the file extension by default
    #[arg(short, long)]
    format: Option<String>,

    /// Validate the Sveltia config without writing anything
    #[arg(long)]
    check: bool,

    /// Skip identifier and duplicate checks
    #[arg(long)]
    skip_validation: bool,
}

/// What the CLI was asked to do.
#[derive(Debug, PartialEq)]
enum Mode {
    Interactive,
    Compile(CompilerConfig),
    Check(CompilerConfig),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> miette::Result<()> {
    match resolve_mode(cli)? {
        Mode::Interactive => {
            // Prompting needs a terminal on both ends
            if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
                run_interactive()
            } else {
                Err(miette::miette!(
                    "No config path given. Run 'svestro --help' for usage or 'svestro' in a terminal for interactive mode."
                ))
            }
        }
        Mode::Compile(config) => compile(config, false),
        Mode::Check(config) => compile(config, true),
    }
}

/// Maps parsed arguments to a mode, rejecting incomplete combinations.
fn resolve_mode(cli: Cli) -> miette::Result<Mode> {
    let Cli {
        config,
        output,
        prefix,
        format,
        check,
        skip_validation,
    } = cli;

    let Some(config_path) = config else {
        if check {
            return Err(miette::miette!("CONFIG is required when using --check"));
        }
        return Ok(Mode::Interactive);
    };

    let defaults = CompilerConfig::default();
    let mut compiler_config = CompilerConfig {
        config_path,
        out_path: defaults.out_path,
        path_prefix: prefix.filter(|p| !p.is_empty()),
        format,
        skip_validation,
    };

    if check {
        if let Some(out_path) = output {
            compiler_config.out_path = out_path;
        }
        return Ok(Mode::Check(compiler_config));
    }

    let Some(out_path) = output else {
        return Err(miette::miette!("OUTPUT is required when CONFIG is given"));
    };
    compiler_config.out_path = out_path;

    Ok(Mode::Compile(compiler_config))
}

/// Prompts for the paths, then compiles.
fn run_interactive() -> miette::Result<()> {
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    ui::info("Welcome to Svestro - Sveltia to Astro Config Generator");
    println!();

    let term = Term::stdout();
    let defaults = CompilerConfig::default();

    let config_path = loop {
        let answer = prompt(
            &term,
            "Path to your Sveltia config file:",
            Some(defaults.config_path.to_string_lossy().as_ref()),
        )?;
        let path = PathBuf::from(answer);
        if path.is_file() {
            break path;
        }
        ui::warn(&format!("File not found: {}", path.display()));
    };

    let out_path = PathBuf::from(prompt(
        &term,
        "Where should the Astro content config be saved?",
        Some(defaults.out_path.to_string_lossy().as_ref()),
    )?);

    let prefix = prompt(&term, "Path prefix for collection base path:", None)?;

    println!();
    compile(
        CompilerConfig {
            config_path,
            out_path,
            path_prefix: Some(prefix).filter(|p| !p.is_empty()),
            ..defaults
        },
        false,
    )
}

/// Reads one answer; an empty answer takes the default.
fn prompt(term: &Term, question: &str, default: Option<&str>) -> miette::Result<String> {
    term.write_str(&ui::prompt_label(question, default))
        .map_err(|e| miette::miette!("Failed to write prompt: {}", e))?;
    let answer = term
        .read_line()
        .map_err(|e| miette::miette!("Failed to read answer: {}", e))?;

    let answer = answer.trim();
    Ok(match default {
        Some(default) if answer.is_empty() => default.to_string(),
        _ => answer.to_string(),
    })
}

/// Runs the compiler and reports the outcome.
fn compile(config: CompilerConfig, check_only: bool) -> miette::Result<()> {
    let compiler = Compiler::new(config);
    let config = compiler.config();

    if !config.config_path.exists() {
        return Err(miette::miette!(
            "Input file not found: {}",
            config.config_path.display()
        ));
    }
    if config.skip_validation {
        ui::warn("Skipping identifier and duplicate checks");
    }

    let start = Instant::now();
    let spinner = ui::spinner(if check_only {
        "Checking Sveltia config..."
    } else {
        "Generating Astro content config..."
    });

    let result = if check_only {
        compiler.check()
    } else {
        compiler.compile()
    };
    spinner.finish_and_clear();

    let result = result?;
    report(&result, check_only);
    ui::timing(if check_only { "Checked" } else { "Generated" }, start.elapsed().as_millis());

    Ok(())
}

fn report(result: &CompileResult, check_only: bool) {
    if check_only {
        ui::success("Looking good.");
    } else {
        ui::success(&format!(
            "Successfully generated Astro content config at: {}",
            result.output_path.display()
        ));
    }

    ui::info(&format!("Generated {} collection(s)", result.collections));
    if !result.locales.is_empty() {
        ui::info(&format!(
            "Found {} locale(s): {}",
            result.locales.len(),
            result.locales.join(", ")
        ));
    }
    ui::dim(&format!("export const collections = {{ {} }}", result.constants.join(", ")));
}
