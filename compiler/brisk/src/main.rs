//! Brisk CLI
//!
//! Evaluates one program and prints the final stack.

use brisk::{init_tracing, parse_args, run, usage, Command};
use brisk_eval::{EvalConfig, OutputHandler};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print!("{}", usage());
            return;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };

    let config = options.config(EvalConfig::from_env());
    let stdin = std::io::BufReader::new(std::io::stdin());
    if let Err(e) = run(&options, config, stdin, &OutputHandler::stdout()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
