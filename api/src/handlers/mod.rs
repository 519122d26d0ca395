//! Request helpers shared by all routes

pub mod error;
pub mod headers;

pub use error::{
    domain_error_response, json_config, query_config, request_id, success_response,
    validation_response, REQUEST_ID_HEADER,
};
pub use headers::first_header;
