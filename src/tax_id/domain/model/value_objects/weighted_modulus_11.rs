use std::iter;

const MODULUS: u32 = 11;
const MIN_WEIGHT: u32 = 2;
const MAX_WEIGHT: u32 = 9;

/// Weighted modulus-11 check digit scheme.
///
/// Weights start at `initial_weight`, decrease by one per position and wrap
/// from 2 back to 9. The check digit is `0` when the weighted sum leaves a
/// remainder below 2, otherwise `11 - remainder`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightedModulus11 {
    initial_weight: u32,
}

impl WeightedModulus11 {
    /// Weights 5,4,3,2,9,8,...,2 over the 12-digit CNPJ base.
    pub const CNPJ_FIRST_DIGIT: Self = Self { initial_weight: 5 };
    /// Weights 6,5,4,3,2,9,...,2 over the base plus the first check digit.
    pub const CNPJ_SECOND_DIGIT: Self = Self { initial_weight: 6 };

    pub fn new(initial_weight: u32) -> Option<Self> {
        (MIN_WEIGHT..=MAX_WEIGHT)
            .contains(&initial_weight)
            .then_some(Self { initial_weight })
    }

    pub fn initial_weight(&self) -> u32 {
        self.initial_weight
    }

    pub fn weights(&self) -> impl Iterator<Item = u32> {
        iter::successors(Some(self.initial_weight), |weight| {
            Some(if *weight <= MIN_WEIGHT {
                MAX_WEIGHT
            } else {
                weight - 1
            })
        })
    }

    pub fn check_digit(&self, digits: &[u32]) -> u32 {
        let remainder = digits
            .iter()
            .zip(self.weights())
            .fold(0, |acc, (digit, weight)| (acc + digit * weight) % MODULUS);

        if remainder < 2 { 0 } else { MODULUS - remainder }
    }
}
