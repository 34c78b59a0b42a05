//! Value types for media types.

mod media_type;
mod parts;
mod proptests;

pub use media_type::MediaType;
pub use parts::MediaTypeParts;
