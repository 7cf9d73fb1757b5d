//! Entity models for the content collections.
//!
//! Each struct maps one-to-one onto a MongoDB document. The database
//! `_id` is deserialized on reads but never serialized, so it stays out of
//! both inserted documents (the server generates it) and API responses.

pub mod appointment;
pub mod post;
pub mod service;
pub mod team_member;
pub mod testimonial;

pub use appointment::AppointmentRequest;
pub use post::Post;
pub use service::Service;
pub use team_member::TeamMember;
pub use testimonial::Testimonial;
