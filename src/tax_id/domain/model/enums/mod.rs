pub mod invalid_reason;
pub mod tax_id_domain_error;
pub mod validation_result;
