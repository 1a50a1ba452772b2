// Shared fixtures and helpers for the integration tests.

pub mod fixtures;
pub mod helpers;
