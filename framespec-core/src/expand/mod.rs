pub(crate) mod frames;
pub(crate) mod permute;
pub(crate) mod template;
pub(crate) mod tokens;
