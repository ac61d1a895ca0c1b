use std::fmt;
use thiserror::Error;

/// Which closed code set a failed lookup was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Alpha2,
    Alpha3,
    Currency,
    StreetDirection,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupKind::Alpha2 => "alpha-2 code",
            LookupKind::Alpha3 => "alpha-3 code",
            LookupKind::Currency => "currency code",
            LookupKind::StreetDirection => "street direction",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{kind} not found: {input:?}")]
    NotFound { kind: LookupKind, input: String },
}

impl LookupError {
    pub fn not_found(kind: LookupKind, input: &str) -> Self {
        LookupError::NotFound {
            kind,
            input: input.to_string(),
        }
    }

    /// The string that failed to resolve, exactly as the caller passed it.
    pub fn input(&self) -> &str {
        match self {
            LookupError::NotFound { input, .. } => input,
        }
    }

    pub fn kind(&self) -> LookupKind {
        match self {
            LookupError::NotFound { kind, .. } => *kind,
        }
    }
}
