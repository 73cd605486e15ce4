/// Binary encoding of a Mapping.
///
/// Layout (little-endian):
///
/// ```text
/// header   magic "RMAP" | version u32 | entry_count u32
/// entry    source_len u32 | source bytes | dest_len u32 | dest bytes
/// ```
///
/// Entries are written sorted by source identity, so equal mappings always
/// encode to equal bytes.

use bytemuck::{Pod, Zeroable};
use crate::error::{Error, Result};
use crate::{matremap_bail, matremap_err, matremap_error};
use crate::resource::MaterialIdentity;
use super::table::Mapping;

/// File magic
pub const MAPPING_MAGIC: [u8; 4] = *b"RMAP";

/// Current format version
pub const MAPPING_FORMAT_VERSION: u32 = 1;

const LOG_SOURCE: &str = "matremap::MappingCodec";

/// Fixed-size file header
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct MappingHeader {
    magic: [u8; 4],
    version: u32,
    entry_count: u32,
}

const HEADER_SIZE: usize = std::mem::size_of::<MappingHeader>();

/// Encode a mapping
pub fn serialize(mapping: &Mapping) -> Vec<u8> {
    let header = MappingHeader {
        magic: MAPPING_MAGIC,
        version: MAPPING_FORMAT_VERSION.to_le(),
        entry_count: (mapping.len() as u32).to_le(),
    };

    let mut bytes = Vec::with_capacity(HEADER_SIZE);
    bytes.extend_from_slice(bytemuck::bytes_of(&header));
    for (source, destination) in mapping.sorted_entries() {
        write_string(&mut bytes, source.as_str());
        write_string(&mut bytes, destination.as_str());
    }
    bytes
}

/// Decode a mapping.
///
/// # Errors
///
/// `UnsupportedVersion` for a version this build does not read, and
/// `MalformedMapping` for anything else that is not a well-formed mapping
/// (truncation, wrong magic, bad UTF-8, duplicate source, trailing bytes).
pub fn deserialize(bytes: &[u8]) -> Result<Mapping> {
    let mut reader = ByteReader::new(bytes);

    let header: MappingHeader = bytemuck::pod_read_unaligned(reader.take(HEADER_SIZE, "header")?);
    if header.magic != MAPPING_MAGIC {
        matremap_bail!(LOG_SOURCE, MalformedMapping,
            "Bad magic {:?}, expected {:?}", header.magic, MAPPING_MAGIC);
    }
    let version = u32::from_le(header.version);
    if version != MAPPING_FORMAT_VERSION {
        matremap_error!(LOG_SOURCE, "Unsupported mapping format version {}", version);
        return Err(Error::UnsupportedVersion(version));
    }
    let entry_count = u32::from_le(header.entry_count) as usize;

    // Each entry is at least two length prefixes
    if entry_count > reader.remaining() / 8 {
        matremap_bail!(LOG_SOURCE, MalformedMapping,
            "Header announces {} entries but only {} bytes follow",
            entry_count, reader.remaining());
    }

    let mut mapping = Mapping::new();
    for index in 0..entry_count {
        let source = reader.read_string("source")?;
        let destination = reader.read_string("destination")?;
        if mapping.insert(source.clone(), destination).is_some() {
            matremap_bail!(LOG_SOURCE, MalformedMapping,
                "Entry {} repeats source {}", index, source);
        }
    }

    if reader.remaining() != 0 {
        matremap_bail!(LOG_SOURCE, MalformedMapping,
            "{} trailing bytes after {} entries", reader.remaining(), entry_count);
    }

    Ok(mapping)
}

fn write_string(bytes: &mut Vec<u8>, value: &str) {
    bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
    bytes.extend_from_slice(value.as_bytes());
}

/// Bounds-checked cursor over the encoded bytes
struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(matremap_err!(LOG_SOURCE, MalformedMapping,
                "Truncated {} at offset {}: need {} bytes, have {}",
                what, self.offset, len, self.remaining()));
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn read_u32(&mut self, what: &str) -> Result<u32> {
        let raw = self.take(4, what)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    fn read_string(&mut self, what: &str) -> Result<MaterialIdentity> {
        let len = self.read_u32(what)? as usize;
        let offset = self.offset;
        let raw = self.take(len, what)?;
        let value = std::str::from_utf8(raw).map_err(|e| {
            matremap_err!(LOG_SOURCE, MalformedMapping,
                "Invalid UTF-8 in {} at offset {}: {}", what, offset, e)
        })?;
        Ok(MaterialIdentity::new(value))
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
