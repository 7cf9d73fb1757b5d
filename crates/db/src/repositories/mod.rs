//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&Database` as the first argument. Filter documents are built by
//! dedicated associated functions so the query shapes can be unit tested.

pub mod appointment_repo;
pub mod meta_repo;
pub mod post_repo;
pub mod service_repo;
pub mod testimonial_repo;

pub use appointment_repo::AppointmentRepo;
pub use meta_repo::MetaRepo;
pub use post_repo::PostRepo;
pub use service_repo::ServiceRepo;
pub use testimonial_repo::TestimonialRepo;
