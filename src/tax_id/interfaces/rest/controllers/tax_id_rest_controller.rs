use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::tax_id::{
    domain::{
        model::{
            enums::tax_id_domain_error::TaxIdDomainError,
            queries::validate_tax_id_query::ValidateTaxIdQuery,
        },
        services::tax_id_query_service::TaxIdQueryService,
    },
    interfaces::rest::resources::{
        tax_id_error_response_resource::TaxIdErrorResponseResource,
        tax_id_validation_response_resource::TaxIdValidationResponseResource,
        validate_tax_id_request_resource::ValidateTaxIdRequestResource,
    },
};

#[derive(Clone)]
pub struct TaxIdRestControllerState {
    pub query_service: Arc<dyn TaxIdQueryService>,
    pub max_input_length: usize,
}

pub fn router(state: TaxIdRestControllerState) -> Router {
    Router::new()
        .route("/validate/cnpj", post(validate_cnpj_body))
        .route("/validate/cnpj/:cnpj", get(validate_cnpj))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/validate/cnpj/{cnpj}",
    tag = "tax-id",
    params((
        "cnpj" = String,
        Path,
        description = "CNPJ digits, optionally with `.` and `-`. Send `/` as `%2F`, or use `POST /validate/cnpj` for the punctuated form"
    )),
    responses(
        (status = 200, description = "Validation outcome", body = TaxIdValidationResponseResource),
        (status = 400, description = "Input rejected before validation", body = TaxIdErrorResponseResource)
    )
)]
pub async fn validate_cnpj(
    State(state): State<TaxIdRestControllerState>,
    Path(cnpj): Path<String>,
) -> Result<Json<TaxIdValidationResponseResource>, (StatusCode, Json<TaxIdErrorResponseResource>)>
{
    handle_validation(&state, cnpj).await
}

#[utoipa::path(
    post,
    path = "/validate/cnpj",
    tag = "tax-id",
    request_body = ValidateTaxIdRequestResource,
    responses(
        (status = 200, description = "Validation outcome", body = TaxIdValidationResponseResource),
        (status = 400, description = "Invalid request", body = TaxIdErrorResponseResource)
    )
)]
pub async fn validate_cnpj_body(
    State(state): State<TaxIdRestControllerState>,
    Json(request): Json<ValidateTaxIdRequestResource>,
) -> Result<Json<TaxIdValidationResponseResource>, (StatusCode, Json<TaxIdErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err(map_domain_error(TaxIdDomainError::InvalidRequest(
            validation_error.to_string(),
        )));
    }

    handle_validation(&state, request.cnpj).await
}

async fn handle_validation(
    state: &TaxIdRestControllerState,
    raw: String,
) -> Result<Json<TaxIdValidationResponseResource>, (StatusCode, Json<TaxIdErrorResponseResource>)>
{
    let query = ValidateTaxIdQuery::new(raw, state.max_input_length).map_err(map_domain_error)?;

    let outcome = state
        .query_service
        .handle_validate_tax_id(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(outcome.into()))
}

fn map_domain_error(error: TaxIdDomainError) -> (StatusCode, Json<TaxIdErrorResponseResource>) {
    let status = match error {
        TaxIdDomainError::InputTooLong { .. } | TaxIdDomainError::InvalidRequest(_) => {
            StatusCode::BAD_REQUEST
        }
    };

    tracing::warn!(%error, "tax id request rejected");

    (
        status,
        Json(TaxIdErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
