pub mod config;
pub mod fees;

pub use config::SCHOOL;
