pub(crate) mod chunk;
pub(crate) mod model;
pub(crate) mod progression;
