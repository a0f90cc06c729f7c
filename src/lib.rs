//! condo-api - an in-memory condo and listing catalog behind a JSON HTTP API

pub mod catalog;
pub mod http_server;
