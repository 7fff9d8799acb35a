//! Commands - host to engine bridge

mod instances;
mod session;

pub use instances::*;
pub use session::*;
