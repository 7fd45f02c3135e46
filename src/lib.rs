pub mod data;
pub mod input;
pub mod logic;
pub mod render;
