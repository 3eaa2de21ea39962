pub mod auth;
pub mod company;
pub mod interview;
pub mod placement;
pub mod stats;
pub mod student;
