pub mod render;

pub use render::{page_layout, render, PageLayout};
