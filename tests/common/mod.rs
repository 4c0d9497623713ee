use cat_rs::{Interpreter, Result};

/// Runs every line of `program` in one session and returns the printed text
/// together with each line's outcome.
pub fn exec(program: &str) -> (String, Vec<Result<()>>) {
    let mut interpreter = Interpreter::new(Vec::new());
    let outcomes: Vec<Result<()>> = program.lines().map(|line| interpreter.run_line(line)).collect();
    (String::from_utf8(interpreter.into_output()).unwrap(), outcomes)
}

/// Like `exec`, but every line must succeed.
pub fn exec_ok(program: &str) -> String {
    let (output, outcomes) = exec(program);
    for (number, outcome) in outcomes.iter().enumerate() {
        if let Err(e) = outcome {
            panic!("line {} failed: {}", number + 1, e);
        }
    }
    output
}
