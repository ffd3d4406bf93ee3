pub(crate) mod chrome;
pub(crate) mod editor;
pub(crate) mod explorer;
pub(crate) mod flow;
pub(crate) mod keyboard;
pub(crate) mod window;
