//! Row types (`FromRow`) and request DTOs, one module per table.

pub mod company;
pub mod interview;
pub mod placement;
pub mod session;
pub mod student;
pub mod user;
