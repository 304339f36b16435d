//! Desktop client tests

pub mod http_client_test;
pub mod storage_test;
