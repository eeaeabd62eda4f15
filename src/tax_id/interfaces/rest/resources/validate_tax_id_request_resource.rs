use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ValidateTaxIdRequestResource {
    #[validate(length(max = 64))]
    pub cnpj: String,
}
