pub mod tax_id_query_service_impl;
