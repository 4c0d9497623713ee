use cat_rs::Interpreter;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// Runs C@ programs, or reads statements from stdin when no file is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Echo every source line to stderr before it is evaluated.
    #[arg(short, long)]
    echo: bool,

    /// Program to run, one statement per line.
    file: Option<PathBuf>,
}

/// Evaluates every line of `source`, reporting failures to `errors` and
/// carrying on. Returns whether all lines succeeded.
fn run_source<R, O, E>(source: R, output: O, errors: &mut E, echo: bool) -> std::io::Result<bool>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut interpreter = Interpreter::new(output);
    let mut succeeded = true;
    for (number, line) in source.lines().enumerate() {
        let line = line?;
        if echo {
            writeln!(errors, "{:>4} | {}", number + 1, line)?;
        }
        if let Err(e) = interpreter.run_line(&line) {
            writeln!(errors, "Error on line {}, {}", number + 1, e)?;
            succeeded = false;
        }
    }
    Ok(succeeded)
}

fn run_prompt(echo: bool) -> std::io::Result<()> {
    let mut interpreter = Interpreter::new(std::io::stdout());

    print!("> ");
    std::io::stdout().flush()?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if echo {
            eprintln!("| {}", line);
        }
        if let Err(e) = interpreter.run_line(&line) {
            println!("Error, {}", e);
        }

        print!("> ");
        std::io::stdout().flush()?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let outcome = match &args.file {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| {
                eprintln!("Failed to read '{}': {}", path.display(), e);
                std::process::exit(1);
            });
            run_source(BufReader::new(file), std::io::stdout().lock(), &mut std::io::stderr(), args.echo)
        },
        None => run_prompt(args.echo).map(|_| true),
    };

    match outcome {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("I/O failure: {}", e);
            std::process::exit(1);
        },
    }
}
