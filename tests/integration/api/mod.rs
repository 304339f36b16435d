//! HTTP endpoint tests driven through the router with `tower::ServiceExt`

pub mod add_data_test;
pub mod cleanup_test;
pub mod list_test;
