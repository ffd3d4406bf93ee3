pub(crate) mod chrome;
pub(crate) mod editor;
pub(crate) mod explorer;
