pub mod atlas;
pub mod error;
pub mod image;
pub mod png;
pub mod tables;

pub use atlas::{Atlas, GroupLayout, Sprite};
pub use error::AssetError;
pub use image::Image;
pub use rgb;
