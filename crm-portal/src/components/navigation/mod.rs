pub mod navigation_menu;

pub use navigation_menu::NavigationMenu;
