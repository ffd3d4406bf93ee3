pub(crate) mod file_kind;
pub(crate) mod ui;
