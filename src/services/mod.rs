pub use errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod enrichment;
pub mod errors;
pub mod places;
pub mod reviews;
