use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    tax_id::{
        application::query_services::tax_id_query_service_impl::TaxIdQueryServiceImpl,
        domain::services::checksum_validator::CnpjChecksumValidator,
        interfaces::rest::controllers::tax_id_rest_controller::{TaxIdRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_tax_id_router(config: &AppConfig) -> Router {
    let query_service = Arc::new(TaxIdQueryServiceImpl::new(Arc::new(CnpjChecksumValidator)));

    router(TaxIdRestControllerState {
        query_service,
        max_input_length: config.tax_id_max_input_length,
    })
}
