pub mod use_carousel;
pub mod use_menu_controller;
pub mod use_outside_click;

pub use use_carousel::{use_carousel, CarouselState};
pub use use_menu_controller::{use_menu_controller, MenuHandle};
pub use use_outside_click::use_outside_click;
