//! Pack Handlers

pub(crate) mod calculate;
