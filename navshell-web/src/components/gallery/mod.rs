pub mod img_gallery;

pub use img_gallery::ImgGallery;
