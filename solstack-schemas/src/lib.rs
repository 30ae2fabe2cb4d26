pub mod file_formats;
pub mod layer;
pub mod material;
pub mod result;
