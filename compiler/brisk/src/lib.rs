//! Brisk CLI support: argument parsing and one-shot evaluation.
//!
//! The binary is a thin wrapper; everything it does lives here so it can
//! be driven from tests with an in-memory input and a buffer handler.

use std::io::BufRead;
use std::sync::Once;

use brisk_eval::{input_error, Environment, EvalConfig, EvalResult, Interpreter, OutputHandler};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunOptions),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stack capacity override from `--capacity`.
    pub capacity: Option<usize>,
    /// Program text from `-e`; otherwise the first input line.
    pub program: Option<String>,
}

impl RunOptions {
    /// `base` with the command-line overrides applied.
    pub fn config(&self, base: EvalConfig) -> EvalConfig {
        match self.capacity {
            Some(capacity) => base.with_stack_capacity(capacity),
            None => base,
        }
    }
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = RunOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--capacity" => {
                let raw = args.get(i + 1).ok_or("--capacity needs a value")?;
                let capacity = raw
                    .parse::<usize>()
                    .map_err(|e| format!("invalid capacity `{raw}`: {e}"))?;
                options.capacity = Some(capacity);
                i += 2;
            }
            "-e" => {
                let program = args.get(i + 1).ok_or("-e needs a program")?;
                options.program = Some(program.clone());
                i += 2;
            }
            other => {
                if let Some(raw) = other.strip_prefix("--capacity=") {
                    let capacity = raw
                        .parse::<usize>()
                        .map_err(|e| format!("invalid capacity `{raw}`: {e}"))?;
                    options.capacity = Some(capacity);
                    i += 1;
                } else {
                    return Err(format!("unknown argument `{other}`"));
                }
            }
        }
    }
    Ok(Command::Run(options))
}

pub fn usage() -> &'static str {
    "Usage: brisk [options]\n\
     \n\
     Reads one program line from stdin (or takes it from -e), evaluates it,\n\
     and prints the final stack. Remaining input lines are read by `l`.\n\
     \n\
     Options:\n  \
       -e <program>       Evaluate <program> instead of the first input line\n  \
       --capacity <N>     Maximum stack depth (default 10000, or BRISK_STACK_CAPACITY)\n  \
       -h, --help         Show this message\n"
}

/// Evaluate one program and print the final stack to `output`.
///
/// Without `-e` the first line of `input` is the program; either way the
/// rest of `input` feeds `l`. On error, including unreadable input,
/// nothing is printed.
pub fn run(
    options: &RunOptions,
    config: EvalConfig,
    mut input: impl BufRead + 'static,
    output: &OutputHandler,
) -> EvalResult {
    let program = match &options.program {
        Some(program) => program.clone(),
        None => {
            let mut line = String::new();
            input.read_line(&mut line).map_err(input_error)?;
            line
        }
    };
    tracing::debug!(capacity = config.stack_capacity, "evaluating");

    let mut interp = Interpreter::new(config).with_input(input);
    let mut stack = interp.new_stack();
    let mut env = Environment::new();
    interp.run(&mut stack, &mut env, &program)?;
    output.print_stack(&stack);
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use brisk_eval::EvalError;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn eval(options: &RunOptions, input: &'static str) -> EvalResult<String> {
        let output = OutputHandler::buffer();
        run(
            options,
            options.config(EvalConfig::default()),
            Cursor::new(input),
            &output,
        )?;
        Ok(output.get_output())
    }

    #[test]
    fn parses_flags() {
        assert_eq!(
            parse_args(&args(&["--capacity", "8", "-e", "1 2 +"])),
            Ok(Command::Run(RunOptions {
                capacity: Some(8),
                program: Some("1 2 +".to_string()),
            }))
        );
        assert_eq!(
            parse_args(&args(&["--capacity=3"])),
            Ok(Command::Run(RunOptions {
                capacity: Some(3),
                program: None,
            }))
        );
        assert_eq!(parse_args(&args(&["-e", "1", "--help"])), Ok(Command::Help));
        assert_eq!(parse_args(&[]), Ok(Command::Run(RunOptions::default())));
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse_args(&args(&["--capacity"])).is_err());
        assert!(parse_args(&args(&["--capacity", "lots"])).is_err());
        assert!(parse_args(&args(&["-e"])).is_err());
        assert!(parse_args(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn program_from_first_line() {
        let options = RunOptions::default();
        assert_eq!(eval(&options, "5 2 -\n").unwrap(), "3\n");
        assert_eq!(eval(&options, "l l +\nab\ncd\n").unwrap(), "ab\ncd\n\n");
    }

    #[test]
    fn program_from_flag_reads_all_input() {
        let options = RunOptions {
            capacity: None,
            program: Some("l i 2 *".to_string()),
        };
        assert_eq!(eval(&options, "21\n").unwrap(), "42\n");
    }

    #[test]
    fn unreadable_program_line_is_an_error() {
        let options = RunOptions::default();
        let output = OutputHandler::buffer();
        let input: &'static [u8] = b"1 2 +\xff\n";
        let result = run(&options, EvalConfig::default(), input, &output);
        assert!(matches!(result, Err(EvalError::Input { .. })));
        assert_eq!(output.get_output(), "");
    }

    #[test]
    fn unreadable_input_line_is_an_error() {
        let options = RunOptions::default();
        let output = OutputHandler::buffer();
        let input: &'static [u8] = b"l\n\xff\xfe\n";
        let result = run(&options, EvalConfig::default(), input, &output);
        assert!(matches!(result, Err(EvalError::Input { .. })));
        assert_eq!(output.get_output(), "");
    }

    #[test]
    fn capacity_override() {
        let options = RunOptions {
            capacity: Some(1),
            program: Some("1 2".to_string()),
        };
        assert_eq!(
            eval(&options, ""),
            Err(EvalError::StackOverflow { capacity: 1 })
        );
    }
}
