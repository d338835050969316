pub mod about;
pub mod academics;
pub mod admissions;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod partners;
pub mod policies;
pub mod staff;
pub mod student_life;
pub mod transport;
