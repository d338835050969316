pub mod catalog;
pub mod date_utils;
pub mod selection;
pub mod theme;
