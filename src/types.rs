use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::common::guid::{bytes_to_guid, guid_le_to_slice, guid_to_bytes, GUID_BYTES};
use crate::error::{malformed_slice, Error, Result};

/// A UUID in its 16-byte big-endian encoding.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UuidBytes(pub [u8; GUID_BYTES]);

impl UuidBytes {
    pub const fn from_bytes(bytes: [u8; GUID_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn parse(guid: &str) -> Result<Self> {
        Ok(Self(guid_to_bytes(guid)?))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; GUID_BYTES] = bytes.try_into()
            .map_err(|e| malformed_slice(bytes.len(), e))?;

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; GUID_BYTES] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Mixed-endian GUID layout, see [`guid_le_to_slice`].
    pub fn to_bytes_le(&self) -> [u8; GUID_BYTES] {
        Uuid::from_bytes(self.0).to_bytes_le()
    }

    /// Parses straight into the mixed-endian layout without keeping the big-endian form.
    pub fn parse_le(guid: &str) -> Result<[u8; GUID_BYTES]> {
        guid_le_to_slice(guid)
    }
}

impl fmt::Display for UuidBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_guid(&self.0))
    }
}

impl FromStr for UuidBytes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UuidBytes {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&[u8]> for UuidBytes {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl From<[u8; GUID_BYTES]> for UuidBytes {
    fn from(bytes: [u8; GUID_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<UuidBytes> for [u8; GUID_BYTES] {
    fn from(value: UuidBytes) -> Self {
        value.0
    }
}

impl From<Uuid> for UuidBytes {
    fn from(uuid: Uuid) -> Self {
        Self(*uuid.as_bytes())
    }
}

impl From<&Uuid> for UuidBytes {
    fn from(uuid: &Uuid) -> Self {
        Self(*uuid.as_bytes())
    }
}

impl From<UuidBytes> for Uuid {
    fn from(value: UuidBytes) -> Self {
        Uuid::from_bytes(value.0)
    }
}

impl AsRef<[u8]> for UuidBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
