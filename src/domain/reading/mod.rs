//! Reading aggregate

pub mod model;
pub mod repository;

pub use model::Reading;
pub use repository::ReadingRepository;
