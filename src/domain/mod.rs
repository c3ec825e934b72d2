pub mod graph_layout;
pub mod models;
pub mod palette;
pub mod source;
