//! Request handlers for the content and lead endpoints.
//!
//! Each submodule provides async handler functions for one collection.
//! Handlers delegate to the corresponding repository in `paris_db` and map
//! errors via [`crate::error::AppError`]. Listing endpoints return bare
//! JSON arrays with the database `_id` stripped.

pub mod appointments;
pub mod posts;
pub mod services;
pub mod testimonials;
