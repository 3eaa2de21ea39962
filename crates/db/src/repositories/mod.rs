//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method touching
//! owned data takes the owner's `user_id` explicitly; a row belonging to
//! another owner is indistinguishable from a missing one.

pub mod company_repo;
pub mod interview_repo;
pub mod interview_student_repo;
pub mod placement_repo;
pub mod session_repo;
pub mod student_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use interview_repo::InterviewRepo;
pub use interview_student_repo::InterviewStudentRepo;
pub use placement_repo::PlacementRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
