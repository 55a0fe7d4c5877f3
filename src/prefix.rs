use std::fmt;

pub const BIN_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    Empty,
    WrongLength(usize),
    NonDigit(char),
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixError::Empty => write!(f, "BIN is empty; enter exactly {BIN_LENGTH} digits"),
            PrefixError::WrongLength(len) => write!(
                f,
                "BIN must be exactly {BIN_LENGTH} digits, got {len} character(s)"
            ),
            PrefixError::NonDigit(ch) => write!(f, "BIN contains non-digit character '{ch}'"),
        }
    }
}

impl std::error::Error for PrefixError {}

impl Prefix {
    pub fn parse(input: &str) -> Result<Self, PrefixError> {
        if input.is_empty() {
            return Err(PrefixError::Empty);
        }
        if let Some(ch) = input.chars().find(|ch| !ch.is_ascii_digit()) {
            return Err(PrefixError::NonDigit(ch));
        }
        if input.len() != BIN_LENGTH {
            return Err(PrefixError::WrongLength(input.chars().count()));
        }
        if input.starts_with('0') {
            log::warn!("BIN {} starts with 0 - this is unusual but allowed", input);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
