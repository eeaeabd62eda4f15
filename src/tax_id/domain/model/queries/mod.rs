pub mod validate_tax_id_query;
