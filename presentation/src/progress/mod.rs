//! Progress reporting while waiting for the backend

pub mod reporter;
