pub mod dropdown_widget;
