use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::tax_id::domain::{
    model::enums::invalid_reason::InvalidReason,
    services::tax_id_query_service::TaxIdValidationOutcome,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TaxIdValidationResponseResource {
    pub valid: bool,
    pub cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnpj_formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
}

impl From<TaxIdValidationOutcome> for TaxIdValidationResponseResource {
    fn from(outcome: TaxIdValidationOutcome) -> Self {
        Self {
            valid: outcome.result.is_valid(),
            cnpj: outcome.normalized,
            cnpj_formatted: outcome.formatted,
            reason: outcome.result.reason(),
        }
    }
}
