pub mod card_animated;
pub mod catalog_grid;
pub mod catalog_toolbar;
pub mod empty_state;
pub mod page_header;
pub mod remote_image;
pub mod stat_card;
pub mod ui;
