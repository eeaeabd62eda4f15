
pub use fixtures::{
    REMAINDER_ONE_CNPJ, REMAINDER_ZERO_CNPJ, VALID_CNPJ, VALID_CNPJ_FORMATTED, validate_query,
};
pub use harness::{create_controller_state, create_fake_query_harness, create_query_harness};
