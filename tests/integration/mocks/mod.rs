
pub use transports::*;
