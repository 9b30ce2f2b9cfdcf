pub(crate) mod spacer;
