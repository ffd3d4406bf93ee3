pub(crate) mod editor_pane;
pub(crate) mod find_bar;
pub(crate) mod status_bar;
