pub mod categories;
pub mod places;
pub mod reviews;
