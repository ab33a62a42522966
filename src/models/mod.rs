mod location;
mod request;

pub use location::LocationSpec;
pub use request::{AppendRequest, WriteRequest};
