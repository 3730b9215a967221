//! Page-level components

mod landing;

pub use landing::*;
