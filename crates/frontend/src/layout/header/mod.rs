pub mod header;
pub mod nav_menu;

pub use header::Header;
pub use nav_menu::{NavGroupMenu, NavMenuBar};
