pub mod error;
pub mod common;
pub mod types;

pub use common::guid::{
    guid_to_bytes, uuid_to_bytes, guid_le_to_slice, bytes_to_guid, slice_to_guid, GUID_BYTES
};
pub use types::UuidBytes;
pub use uuid;
