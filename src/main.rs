use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[clap(name = "grin", version)]
pub struct CLArgs {
    /// Defaults to running a program read from standard input.
    #[clap(subcommand)]
    pub routine: Option<GrinCommand>,
}

#[derive(Debug, Subcommand)]
pub enum GrinCommand {
    /// Print the tokens of every program line.
    Tokenize {
        path: Option<PathBuf>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    /// Check that a program is well formed without running it.
    Parse {
        path: Option<PathBuf>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ErrorFormat,
    },
    /// Run a program. Without a path the program is read from standard input
    /// up to its `.` line and the rest of standard input feeds INNUM/INSTR.
    Run {
        path: Option<PathBuf>,
        /// Abort after executing this many statements.
        #[clap(long = "step-limit")]
        step_limit: Option<u64>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: ErrorFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Debug,
    Basic,
    Pretty,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let args = CLArgs::parse();
    let routine = args.routine.unwrap_or(GrinCommand::Run {
        path: None,
        step_limit: None,
        format: ErrorFormat::Basic,
    });
    // Program text and the program's own input share this reader.
    let mut stdin = std::io::stdin().lock();

    match routine {
        GrinCommand::Tokenize { path, format } => {
            let lines = read_source(path.as_deref(), &mut stdin)?;
            tokenize(&lines, &format);
        }
        GrinCommand::Parse { path, format } => {
            let lines = read_source(path.as_deref(), &mut stdin)?;
            let name = display_name(path.as_deref());
            if parse(&lines, &name, &format).is_some() {
                println!("Parsed successfully");
            }
        }
        GrinCommand::Run {
            path,
            step_limit,
            format,
        } => {
            let lines = read_source(path.as_deref(), &mut stdin)?;
            let name = display_name(path.as_deref());
            let config = grin::InterpreterConfig { step_limit };
            run(&lines, &name, &format, config, &mut stdin);
        }
    }
    // Grin reports program errors as output, never through the exit status.
    Ok(())
}

/// Logs go to stderr and are only enabled when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(path: Option<&Path>, stdin: &mut impl BufRead) -> Result<Vec<String>> {
    use grin::shell::read_program_lines;

    match path {
        Some(path) => {
            tracing::debug!(?path, "reading program");
            let file = File::open(path).wrap_err_with(|| format!("Failed to open {path:?}"))?;
            read_program_lines(BufReader::new(file)).wrap_err("Failed to read program")
        }
        None => read_program_lines(stdin).wrap_err("Failed to read program"),
    }
}

fn display_name(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<stdin>".into(),
    }
}

fn report(text: &str, format: &ErrorFormat) {
    match format {
        ErrorFormat::Pretty => eprint!("{text}"),
        ErrorFormat::Debug | ErrorFormat::Basic => println!("{text}"),
    }
}

fn tokenize(lines: &[String], format: &TokenFormat) {
    use grin::lexer::formatter::{BasicFormatter, DebugFormatter, TokenFormatter};
    use grin::lexer::Lexer;
    use grin::shell::TERMINATOR;

    let formatter: Box<dyn TokenFormatter> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
    };
    for (index, line) in lines.iter().enumerate() {
        for token_or_error in Lexer::new(line, (index + 1) as u32) {
            match token_or_error {
                Ok(token) => println!("{}", formatter.format(&token)),
                Err(error) => {
                    println!("{}", formatter.format_lexical_error(&error));
                    break;
                }
            }
        }
        if line.trim() == TERMINATOR {
            break;
        }
    }
}

fn parse(
    lines: &[String],
    name: &str,
    format: &ErrorFormat,
) -> Option<Vec<grin::parser::TokenLine>> {
    use grin::parser::formatter::{
        BasicFormatter, DebugFormatter, ParserFormatter, PrettyFormatter,
    };

    match grin::parser::parse(lines) {
        Ok(program) => Some(program),
        Err(error) => {
            let formatter: Box<dyn ParserFormatter + '_> = match format {
                ErrorFormat::Debug => Box::new(DebugFormatter),
                ErrorFormat::Basic => Box::new(BasicFormatter),
                ErrorFormat::Pretty => Box::new(PrettyFormatter::new(name, lines)),
            };
            report(&formatter.format_error(&error), format);
            None
        }
    }
}

fn run(
    lines: &[String],
    name: &str,
    format: &ErrorFormat,
    config: grin::InterpreterConfig,
    stdin: &mut impl BufRead,
) {
    use grin::interpreter::context::IoContext;
    use grin::interpreter::formatter::{
        BasicFormatter, DebugFormatter, ErrorFormatter, PrettyFormatter,
    };
    use grin::interpreter::Interpreter;
    use grin::ExecutionError;

    let Some(program) = parse(lines, name, format) else {
        return;
    };
    let result = Interpreter::new(&program)
        .map_err(ExecutionError::from)
        .and_then(|interpreter| {
            interpreter
                .with_config(config)
                .run(&mut IoContext::new(stdin, std::io::stdout()))
                .map_err(ExecutionError::from)
        });

    if let Err(error) = result {
        let formatter: Box<dyn ErrorFormatter + '_> = match format {
            ErrorFormat::Debug => Box::new(DebugFormatter),
            ErrorFormat::Basic => Box::new(BasicFormatter),
            ErrorFormat::Pretty => Box::new(PrettyFormatter::new(name, lines)),
        };
        report(&formatter.format_error(&error), format);
    }
}
