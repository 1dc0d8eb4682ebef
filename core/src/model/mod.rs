pub mod advice;
pub mod analysis;
pub mod numbers;
pub mod report;
pub mod user;
