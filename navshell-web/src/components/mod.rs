pub mod gallery;
pub mod layout;
pub mod navigation;
