pub(crate) mod config;
pub(crate) mod job;
pub(crate) mod tasks;
