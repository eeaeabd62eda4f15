pub mod cnpj;
pub mod cnpj_digits;
pub mod weighted_modulus_11;
