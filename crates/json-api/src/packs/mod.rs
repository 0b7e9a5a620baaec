//! Packs

mod budget;
mod errors;
mod handlers;

pub(crate) use handlers::*;
