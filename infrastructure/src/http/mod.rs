//! HTTP adapter for the prediction backend
//!
//! Implements ChurnGateway by POSTing JSON to the backend's chat endpoint.

pub mod error;
pub mod gateway;
pub mod protocol;
