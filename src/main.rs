use axum::Router;
use cnpj_validation_api::{
    config::{app_config::AppConfig, logger::init_logger},
    tax_id::{
        build_tax_id_router,
        domain::model::enums::invalid_reason::InvalidReason,
        interfaces::rest::resources::{
            tax_id_error_response_resource::TaxIdErrorResponseResource,
            tax_id_validation_response_resource::TaxIdValidationResponseResource,
            validate_tax_id_request_resource::ValidateTaxIdRequestResource,
        },
    },
};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cnpj_validation_api::tax_id::interfaces::rest::controllers::tax_id_rest_controller::validate_cnpj,
        cnpj_validation_api::tax_id::interfaces::rest::controllers::tax_id_rest_controller::validate_cnpj_body
    ),
    components(
        schemas(
            ValidateTaxIdRequestResource,
            TaxIdValidationResponseResource,
            TaxIdErrorResponseResource,
            InvalidReason
        )
    ),
    tags(
        (name = "tax-id", description = "Brazilian CNPJ check digit validation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_logger(config.log_format);

    let app = Router::new()
        .merge(build_tax_id_router(&config))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "server listening on http://localhost:{}", config.port);
    tracing::info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
