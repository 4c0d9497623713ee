use crate::error_handling::*;
use crate::formatting::*;
use crate::scanning::*;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
}

impl BinaryOperator {
    /// Arithmetic wraps on overflow; only a zero divisor is an error.
    pub fn call(&self, left: i64, right: i64) -> Result<i64> {
        use BinaryOperator::*;
        match self {
            addition => Ok(left.wrapping_add(right)),
            subtraction => Ok(left.wrapping_sub(right)),
            multiplication => Ok(left.wrapping_mul(right)),
            division => {
                if right == 0 {
                    Err(CatError::division_by_zero)
                } else {
                    Ok(left.wrapping_div(right))
                }
            },
        }
    }

    fn is_additive(&self) -> bool {
        use BinaryOperator::*;
        matches!(self, addition | subtraction)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl FromStr for BinaryOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            _ => Err(InvalidOperator),
        }
    }
}

/// The effect of one successfully parsed line, applied by the caller.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    print(i64),
    configure(OutputMode),
    assign(String, i64),
    nothing,
}

pub fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}

pub struct Parser<'a, S: Scanner<'a>> {
    source: S,
    variables: &'a HashMap<String, i64>,
}

impl<'a, S: Scanner<'a>> Parser<'a, S> {
    pub fn new(source: S, variables: &'a HashMap<String, i64>) -> Self {
        Self{source, variables}
    }

    /// Parses exactly one statement and requires the line to end after it.
    pub fn parse_statement(&mut self) -> Result<Action> {
        let token = self.source.peek();
        let action = match token {
            _ if !self.source.is_valid() => Action::nothing,
            "print" => {
                self.source.consume("print")?;
                Action::print(self.parse_math_exp()?)
            },
            "config" => {
                self.source.consume("config")?;
                Action::configure(self.parse_mode()?)
            },
            _ if is_identifier(token) => {
                self.source.consume(token)?;
                let target = token;
                self.source.consume("=")?;
                Action::assign(target.into(), self.parse_math_exp()?)
            },
            _ => return Err(CatError::unrecognized_statement(token.into())),
        };

        if self.source.is_valid() {
            return Err(CatError::trailing_tokens(self.source.peek().into()));
        }
        Ok(action)
    }

    fn parse_mode(&mut self) -> Result<OutputMode> {
        let token = self.source.peek();
        if !self.source.is_valid() {
            return Err(CatError::unexpected_token("dec, hex or bin".into()));
        }
        let mode = token.parse()?;
        self.source.consume(token)?;
        Ok(mode)
    }

    pub fn parse_math_exp(&mut self) -> Result<i64> {
        self.parse_sum_exp()
    }

    fn parse_sum_exp(&mut self) -> Result<i64> {
        let mut result = self.parse_product_exp()?;
        loop {
            let token = self.source.peek();
            match token.parse::<BinaryOperator>() {
                Ok(operator) if operator.is_additive() => {
                    self.source.consume(token)?;
                    let right = self.parse_product_exp()?;
                    result = operator.call(result, right)?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    fn parse_product_exp(&mut self) -> Result<i64> {
        let mut result = self.parse_primary_exp()?;
        loop {
            let token = self.source.peek();
            match token.parse::<BinaryOperator>() {
                Ok(operator) if !operator.is_additive() => {
                    self.source.consume(token)?;
                    let right = self.parse_primary_exp()?;
                    result = operator.call(result, right)?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    fn parse_primary_exp(&mut self) -> Result<i64> {
        let token = self.source.peek();
        if !self.source.is_valid() {
            return Err(CatError::unexpected_token("an expression".into()));
        }

        if is_integer(token) {
            let value = token.parse().map_err(|_| CatError::invalid_number(token.into()))?;
            self.source.consume(token)?;
            Ok(value)
        } else if is_identifier(token) {
            let value = self.variables.get(token).copied()
                .ok_or_else(|| CatError::undefined_variable(token.into()))?;
            self.source.consume(token)?;
            Ok(value)
        } else if token == "(" {
            self.source.consume("(")?;
            let value = self.parse_math_exp()?;
            if self.source.peek() != ")" {
                return Err(CatError::unmatched_paren);
            }
            self.source.consume(")")?;
            Ok(value)
        } else {
            Err(CatError::expected_primary(token.into()))
        }
    }
}

pub fn parse(tokens: &[&str], variables: &HashMap<String, i64>) -> Result<Action> {
    Parser::new(LineScanner::new(tokens), variables).parse_statement()
}
