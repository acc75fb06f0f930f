//! Request and Response models for the component cache API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PutComponentRequest;
pub use responses::{
    ContainsResponse, ErrorResponse, GetComponentResponse, HealthResponse, PutComponentResponse,
    RecencyResponse, StatsResponse,
};
