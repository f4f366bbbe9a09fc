//! Routes Module
//!
//! This module assembles the HTTP routes for the application under the
//! fixed `/dev` base path.

/// Router assembly
pub mod router;

// Re-export commonly used items
pub use router::{create_router, BASE_PATH};
