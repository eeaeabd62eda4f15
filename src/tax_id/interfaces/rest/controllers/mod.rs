pub mod tax_id_rest_controller;
