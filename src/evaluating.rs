use crate::error_handling::*;
use crate::formatting::*;
use crate::parsing::*;
use crate::scanning::*;
use std::collections::HashMap;
use std::io::Write;

/// One C@ session: variables and output mode live as long as the interpreter.
pub struct Interpreter<W: Write> {
    variables: HashMap<String, i64>,
    mode: OutputMode,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Self{variables: HashMap::new(), mode: OutputMode::default(), output}
    }

    /// Runs one tokenized line. Session state only changes once the whole
    /// line has parsed, so a failing line leaves everything as it was.
    pub fn evaluate(&mut self, tokens: &[&str]) -> Result<()> {
        let action = parse(tokens, &self.variables)?;
        match action {
            Action::print(value) => writeln!(self.output, "{}", self.mode.format(value))?,
            Action::configure(mode) => self.mode = mode,
            Action::assign(name, value) => {
                self.variables.insert(name, value);
            },
            Action::nothing => {},
        }
        Ok(())
    }

    pub fn run_line(&mut self, line: &str) -> Result<()> {
        self.evaluate(&tokenize(line))
    }

    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
