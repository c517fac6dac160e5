pub mod menu_item;
pub mod side_menu;

pub use menu_item::MenuItem;
pub use side_menu::SideMenu;
