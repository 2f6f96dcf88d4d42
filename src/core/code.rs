//! Three-digit code representation
//!
//! A Code stores a secret or guess as a plain integer in 0..=999; leading
//! zeros are significant for comparison and display, so the value always
//! renders zero-padded ("007").

use std::fmt;

/// A 3-digit code (secret or guess) in the range 000-999
///
/// Stored as a plain integer; digit access is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u16);

/// Number of codes in the full domain (000-999)
pub const DOMAIN_SIZE: usize = 1000;

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    OutOfRange(u16),
    NotNumeric(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(f, "Code must be in 000-999, got {value}")
            }
            Self::NotNumeric(text) => write!(f, "Code must be a number: {text:?}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from an integer value
    ///
    /// # Errors
    /// Returns `CodeError::OutOfRange` if the value is greater than 999.
    ///
    /// # Examples
    /// ```
    /// use number_mind::core::Code;
    ///
    /// let code = Code::new(7).unwrap();
    /// assert_eq!(code.to_string(), "007");
    ///
    /// assert!(Code::new(1000).is_err());
    /// ```
    pub const fn new(value: u16) -> Result<Self, CodeError> {
        if value > 999 {
            return Err(CodeError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Get the raw integer value (0-999)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Get the digits as [hundreds, tens, units]
    ///
    /// # Examples
    /// ```
    /// use number_mind::core::Code;
    ///
    /// let code = Code::new(314).unwrap();
    /// assert_eq!(code.digits(), [3, 1, 4]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn digits(self) -> [u8; 3] {
        [
            (self.0 / 100) as u8,
            (self.0 / 10 % 10) as u8,
            (self.0 % 10) as u8,
        ]
    }

    /// Iterate over the full 000-999 domain in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DOMAIN_SIZE as u16).map(Self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.len() > 3 || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CodeError::NotNumeric(s.to_string()));
        }
        let value: u16 = trimmed
            .parse()
            .map_err(|_| CodeError::NotNumeric(s.to_string()))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(314).unwrap();
        assert_eq!(code.value(), 314);
        assert_eq!(code.digits(), [3, 1, 4]);
    }

    #[test]
    fn code_creation_out_of_range() {
        assert!(matches!(Code::new(1000), Err(CodeError::OutOfRange(1000))));
        assert!(matches!(
            Code::new(u16::MAX),
            Err(CodeError::OutOfRange(_))
        ));
    }

    #[test]
    fn code_boundaries() {
        assert_eq!(Code::new(0).unwrap().digits(), [0, 0, 0]);
        assert_eq!(Code::new(999).unwrap().digits(), [9, 9, 9]);
    }

    #[test]
    fn code_display_zero_padded() {
        assert_eq!(Code::new(0).unwrap().to_string(), "000");
        assert_eq!(Code::new(7).unwrap().to_string(), "007");
        assert_eq!(Code::new(42).unwrap().to_string(), "042");
        assert_eq!(Code::new(999).unwrap().to_string(), "999");
    }

    #[test]
    fn code_from_str_valid() {
        assert_eq!("314".parse::<Code>().unwrap(), Code::new(314).unwrap());
        assert_eq!("007".parse::<Code>().unwrap(), Code::new(7).unwrap());
        assert_eq!("7".parse::<Code>().unwrap(), Code::new(7).unwrap());
        assert_eq!(" 42 ".parse::<Code>().unwrap(), Code::new(42).unwrap());
    }

    #[test]
    fn code_from_str_invalid() {
        assert!("".parse::<Code>().is_err());
        assert!("abc".parse::<Code>().is_err());
        assert!("1000".parse::<Code>().is_err()); // Four digits
        assert!("-14".parse::<Code>().is_err());
        assert!("3.1".parse::<Code>().is_err());
    }

    #[test]
    fn code_all_covers_domain() {
        let all: Vec<Code> = Code::all().collect();
        assert_eq!(all.len(), DOMAIN_SIZE);
        assert_eq!(all[0].value(), 0);
        assert_eq!(all[999].value(), 999);

        // Ascending order
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn code_ordering_is_numeric() {
        let a = Code::new(7).unwrap();
        let b = Code::new(70).unwrap();
        let c = Code::new(700).unwrap();
        assert!(a < b && b < c);
    }
}
