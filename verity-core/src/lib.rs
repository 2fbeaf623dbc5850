// Core types for the Verity validation engine
// The value wrapper rules inspect, HTTP status classification, and the
// decorated error every validation failure is reported through.

pub mod error;
pub mod status;
pub mod value;

pub use error::*;
pub use status::*;
pub use value::*;

pub use verity_log::Level;
