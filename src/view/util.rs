pub mod widget_menu;
