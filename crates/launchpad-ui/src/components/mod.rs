pub(crate) mod dropdown_menu;
pub(crate) mod header;
pub(crate) mod hooks;
pub(crate) mod icons;
pub(crate) mod layout;
pub(crate) mod menu_item;
