//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into facade calls and renders the
//! results as tagged records.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies and their conversion into domain input
//! - [`extract`] - JSON body extractor with validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration under `/api/v1`

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
