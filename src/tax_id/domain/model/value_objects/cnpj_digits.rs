use lazy_static::lazy_static;
use regex::Regex;

use crate::tax_id::domain::model::enums::invalid_reason::InvalidReason;

pub const CNPJ_LENGTH: usize = 14;
pub const CNPJ_BASE_LENGTH: usize = 12;

// XX.XXX.XXX/XXXX-XX
const CNPJ_SEPARATORS: [(usize, char); 4] = [(2, '.'), (5, '.'), (8, '/'), (12, '-')];

lazy_static! {
    static ref NON_DIGIT_REGEX: Regex = Regex::new("[^0-9]+").expect("valid regex");
}

/// Strips every character that is not an ASCII decimal digit.
pub fn normalize(raw: &str) -> String {
    NON_DIGIT_REGEX.replace_all(raw, "").into_owned()
}

/// Groups a normalized 14-digit string as `XX.XXX.XXX/XXXX-XX`.
///
/// Anything else is returned as is; callers check the validation result
/// before displaying the grouped form.
pub fn format(normalized: &str) -> String {
    if normalized.len() != CNPJ_LENGTH || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return normalized.to_string();
    }

    let mut formatted = String::with_capacity(CNPJ_LENGTH + CNPJ_SEPARATORS.len());
    for (idx, c) in normalized.chars().enumerate() {
        if let Some((_, separator)) = CNPJ_SEPARATORS.iter().find(|(at, _)| *at == idx) {
            formatted.push(*separator);
        }
        formatted.push(c);
    }
    formatted
}

/// Fourteen CNPJ digits that passed the structural checks. The check digits
/// have not been verified yet.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CnpjDigits([u32; CNPJ_LENGTH]);

impl CnpjDigits {
    pub fn parse(raw: &str) -> Result<Self, InvalidReason> {
        let digits: [u32; CNPJ_LENGTH] = normalize(raw)
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| InvalidReason::WrongLength)?;

        if digits.iter().all(|digit| *digit == digits[0]) {
            return Err(InvalidReason::RepeatedDigit);
        }

        Ok(Self(digits))
    }

    pub fn base(&self) -> &[u32] {
        &self.0[..CNPJ_BASE_LENGTH]
    }

    /// The base followed by the first check digit.
    pub fn base_with_first_check_digit(&self) -> &[u32] {
        &self.0[..=CNPJ_BASE_LENGTH]
    }

    pub fn first_check_digit(&self) -> u32 {
        self.0[CNPJ_BASE_LENGTH]
    }

    pub fn second_check_digit(&self) -> u32 {
        self.0[CNPJ_BASE_LENGTH + 1]
    }

    pub fn value(&self) -> String {
        self.0
            .iter()
            .filter_map(|digit| char::from_digit(*digit, 10))
            .collect()
    }

    pub fn formatted(&self) -> String {
        format(&self.value())
    }
}
