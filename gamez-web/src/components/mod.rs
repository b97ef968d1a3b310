pub mod background;
pub mod catalog_grid;
pub mod footer;
pub mod header;
pub mod intro_video;
pub mod search_bar;
