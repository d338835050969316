pub mod catalog_state;
pub mod components;
pub mod head;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod theme;
