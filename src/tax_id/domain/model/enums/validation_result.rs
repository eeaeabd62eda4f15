use super::invalid_reason::InvalidReason;

/// Outcome of running a checksum validator over a raw identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }
}
