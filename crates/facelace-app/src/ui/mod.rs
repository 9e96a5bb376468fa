pub(crate) mod controls;
pub(crate) mod cube_net;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod main_screen;
pub(crate) mod move_list;
pub(crate) mod net_theme;
pub(crate) mod palette;
pub(crate) mod settings;
pub(crate) mod status_line;
