mod decode;
mod status;

pub use decode::decode_handler;
pub use status::{health_handler, info_handler, INFO_MESSAGE};
