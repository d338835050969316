pub mod aggregate;
pub mod data;
