//! Tests against a real PostgreSQL database or a running server.
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test integration -- --ignored

mod api_tests;
mod store_tests;
