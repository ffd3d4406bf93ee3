pub(crate) mod icon_button;
pub(crate) mod resize_grips;
