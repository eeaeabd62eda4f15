pub mod tax_id_error_response_resource;
pub mod tax_id_validation_response_resource;
pub mod validate_tax_id_request_resource;
