use crate::error_handling::*;
use std::str::FromStr;

/// Width of the `bin` rendering; negative values wrap into it.
pub const BINARY_WIDTH: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    decimal,
    hexadecimal,
    binary,
}

impl OutputMode {
    pub fn format(&self, value: i64) -> String {
        use OutputMode::*;
        match self {
            decimal => value.to_string(),
            hexadecimal => {
                let sign = if value < 0 { "-" } else { "" };
                format!("{}0x{:x}", sign, value.unsigned_abs())
            },
            binary => format!("{:0width$b}", value as u16, width = BINARY_WIDTH),
        }
    }
}

impl FromStr for OutputMode {
    type Err = CatError;

    fn from_str(s: &str) -> Result<Self> {
        use OutputMode::*;
        match s {
            "dec" => Ok(decimal),
            "hex" => Ok(hexadecimal),
            "bin" => Ok(binary),
            _ => Err(CatError::invalid_config_mode(s.into())),
        }
    }
}
