use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("expected '{expected}', found '{found}'")]
    token_mismatch { expected: String, found: String },

    #[error("line ended while expecting {0}")]
    unexpected_token(String),

    #[error("expected a number, variable or '(', found '{0}'")]
    expected_primary(String),

    #[error("could not find matching ')'")]
    unmatched_paren,

    #[error("identifier, '{0}', is not defined")]
    undefined_variable(String),

    #[error("division by zero")]
    division_by_zero,

    #[error("'{0}' is not a valid mode, expected dec, hex or bin")]
    invalid_config_mode(String),

    #[error("'{0}' does not start a statement")]
    unrecognized_statement(String),

    #[error("did not expect '{0}' after the end of the statement")]
    trailing_tokens(String),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("could not write output")]
    output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatError>;
