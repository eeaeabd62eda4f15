use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    WrongLength,
    RepeatedDigit,
    CheckDigitMismatch,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongLength => "wrong_length",
            Self::RepeatedDigit => "repeated_digit",
            Self::CheckDigitMismatch => "check_digit_mismatch",
        }
    }
}
