use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A compact residue label of the form `[chain[.]]number[insert]`.
///
/// Examples are `A12`, `A12B`, `A.12`, `1.12` (a numeric chain label needs the
/// dot separator), and `12` or `-3` for residues on a blank chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueSpec {
    pub chain: char,
    pub number: isize,
    pub insertion_code: char,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseResidueSpecError {
    #[error("Residue spec is empty")]
    Empty,
    #[error("Invalid chain label '{0}' in residue spec (must be a single character)")]
    InvalidChain(String),
    #[error("Residue spec '{0}' does not contain a residue number")]
    MissingNumber(String),
    #[error("Residue number in '{0}' is out of range")]
    InvalidNumber(String),
    #[error("Unexpected trailing characters in residue spec '{0}'")]
    TrailingCharacters(String),
}

impl ResidueSpec {
    pub fn new(chain: char, number: isize, insertion_code: char) -> Self {
        Self {
            chain,
            number,
            insertion_code,
        }
    }
}

impl FromStr for ResidueSpec {
    type Err = ParseResidueSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let first = spec.chars().next().ok_or(ParseResidueSpecError::Empty)?;

        let (chain, rest) = if let Some((label, rest)) = spec.split_once('.') {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => (c, rest),
                _ => return Err(ParseResidueSpecError::InvalidChain(label.to_string())),
            }
        } else if first.is_ascii_alphabetic() {
            (first, &spec[first.len_utf8()..])
        } else {
            (' ', spec)
        };

        let number_end = rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map_or(rest.len(), |(i, _)| i);
        let number_str = &rest[..number_end];
        if number_str.is_empty() || number_str == "-" {
            return Err(ParseResidueSpecError::MissingNumber(spec.to_string()));
        }
        let number = number_str
            .parse::<isize>()
            .map_err(|_| ParseResidueSpecError::InvalidNumber(spec.to_string()))?;

        let mut tail = rest[number_end..].chars();
        let insertion_code = match (tail.next(), tail.next()) {
            (None, _) => ' ',
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(ParseResidueSpecError::TrailingCharacters(spec.to_string())),
        };

        Ok(Self::new(chain, number, insertion_code))
    }
}

impl fmt::Display for ResidueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chain {
            ' ' => {}
            c if c.is_ascii_alphabetic() => write!(f, "{}", c)?,
            c => write!(f, "{}.", c)?,
        }
        write!(f, "{}", self.number)?;
        if self.insertion_code != ' ' {
            write!(f, "{}", self.insertion_code)?;
        }
        Ok(())
    }
}
