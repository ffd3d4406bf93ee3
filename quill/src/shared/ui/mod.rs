pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod theme;
pub(crate) mod tree_style;
