pub mod config;
pub mod tax_id;
