mod gallery_query;

pub use gallery_query::{build_gallery_view, GalleryFilter};
