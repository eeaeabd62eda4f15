pub mod checksum_validator;
pub mod tax_id_query_service;
