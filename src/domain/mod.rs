pub mod category;
pub mod place;
pub mod review;
pub mod types;
