pub(crate) mod sidebar_tree;
