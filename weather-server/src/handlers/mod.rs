//! Request handlers, one module per endpoint group

pub mod export;
pub mod index;
pub mod lookup;
pub mod weather;
