use async_trait::async_trait;

use crate::tax_id::domain::model::{
    enums::{tax_id_domain_error::TaxIdDomainError, validation_result::ValidationResult},
    queries::validate_tax_id_query::ValidateTaxIdQuery,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxIdValidationOutcome {
    pub result: ValidationResult,
    pub normalized: String,
    /// Present whenever the normalized input has exactly 14 digits.
    pub formatted: Option<String>,
}

#[async_trait]
pub trait TaxIdQueryService: Send + Sync {
    async fn handle_validate_tax_id(
        &self,
        query: ValidateTaxIdQuery,
    ) -> Result<TaxIdValidationOutcome, TaxIdDomainError>;
}
