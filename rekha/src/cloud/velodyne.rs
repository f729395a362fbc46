//! Velodyne-style raw point records.
//!
//! Format: a flat sequence of IEEE-754 single-precision floats with no
//! header. Every 4 floats form one record:
//!
//! ```text
//! offset  size  field
//!      0     4  x            (f32)
//!      4     4  y            (f32)
//!      8     4  z            (f32)
//!     12     4  reflectance  (f32)
//! ```
//!
//! The file length must be a multiple of [`RECORD_BYTES`]. Element byte
//! order is chosen by the caller.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::point_cloud::PointCloud2D;
use crate::core::Point2D;
use crate::error::{Error, Result};

/// Number of f32 values per record.
pub const RECORD_WIDTH: usize = 4;

/// Size of one record in bytes.
pub const RECORD_BYTES: usize = RECORD_WIDTH * std::mem::size_of::<f32>();

/// Byte order of the f32 elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
    /// Byte order of the host
    Native,
}

impl ByteOrder {
    #[inline]
    fn decode(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
            ByteOrder::Native => f32::from_ne_bytes(bytes),
        }
    }

    #[inline]
    fn encode(self, value: f32) -> [u8; 4] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Native => value.to_ne_bytes(),
        }
    }
}

/// One raw sensor return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VelodyneRecord {
    /// X in meters
    pub x: f32,
    /// Y in meters
    pub y: f32,
    /// Z in meters
    pub z: f32,
    /// Return intensity
    pub reflectance: f32,
}

impl VelodyneRecord {
    /// Create a new record.
    pub fn new(x: f32, y: f32, z: f32, reflectance: f32) -> Self {
        Self {
            x,
            y,
            z,
            reflectance,
        }
    }

    /// Planar projection (drops z and reflectance).
    #[inline]
    pub fn xy(&self) -> Point2D {
        Point2D::new(self.x as f64, self.y as f64)
    }

    fn fields(&self) -> [f32; RECORD_WIDTH] {
        [self.x, self.y, self.z, self.reflectance]
    }
}

/// Decode records from raw bytes.
///
/// # Errors
/// [`Error::MalformedRecordFile`] if `bytes.len()` is not a multiple of
/// [`RECORD_BYTES`].
pub fn parse_records(bytes: &[u8], order: ByteOrder) -> Result<Vec<VelodyneRecord>> {
    if bytes.len() % RECORD_BYTES != 0 {
        log::warn!(
            "Record data has {} trailing bytes ({} total)",
            bytes.len() % RECORD_BYTES,
            bytes.len()
        );
        return Err(Error::MalformedRecordFile {
            len: bytes.len(),
            record_bytes: RECORD_BYTES,
        });
    }

    let records = bytes
        .chunks_exact(RECORD_BYTES)
        .map(|chunk| {
            let mut fields = [0.0f32; RECORD_WIDTH];
            for (field, raw) in fields.iter_mut().zip(chunk.chunks_exact(4)) {
                *field = order.decode([raw[0], raw[1], raw[2], raw[3]]);
            }
            VelodyneRecord::new(fields[0], fields[1], fields[2], fields[3])
        })
        .collect();

    Ok(records)
}

/// Encode records to raw bytes; exact inverse of [`parse_records`].
pub fn encode_records(records: &[VelodyneRecord], order: ByteOrder) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(records.len() * RECORD_BYTES);
    for record in records {
        for value in record.fields() {
            bytes.extend_from_slice(&order.encode(value));
        }
    }
    bytes
}

/// Read all records from a reader.
pub fn read_records_from<R: Read>(reader: &mut R, order: ByteOrder) -> Result<Vec<VelodyneRecord>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_records(&bytes, order)
}

/// Read all records from a file.
pub fn read_records(path: &Path, order: ByteOrder) -> Result<Vec<VelodyneRecord>> {
    let mut reader = BufReader::new(File::open(path)?);
    let records = read_records_from(&mut reader, order)?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records to a writer.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[VelodyneRecord],
    order: ByteOrder,
) -> Result<()> {
    writer.write_all(&encode_records(records, order))?;
    Ok(())
}

/// Write records to a file, replacing it if present.
pub fn save_records(path: &Path, records: &[VelodyneRecord], order: ByteOrder) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records, order)?;
    writer.flush()?;
    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Project records onto the XY plane.
pub fn records_to_cloud(records: &[VelodyneRecord]) -> PointCloud2D {
    records.iter().map(VelodyneRecord::xy).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VelodyneRecord> {
        vec![
            VelodyneRecord::new(1.0, -2.5, 0.25, 0.5),
            VelodyneRecord::new(-0.125, 3.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn test_record_bytes() {
        assert_eq!(RECORD_BYTES, 16);
    }

    #[test]
    fn test_little_endian_layout() {
        let bytes = encode_records(&[VelodyneRecord::new(1.0, 0.0, 0.0, 0.0)], ByteOrder::Little);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &[0x00, 0x00, 0x80, 0x3f]);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_big_endian_layout() {
        let bytes = encode_records(&[VelodyneRecord::new(1.0, 0.0, 0.0, 0.0)], ByteOrder::Big);
        assert_eq!(&bytes[0..4], &[0x3f, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_parse_roundtrip_each_order() {
        for order in [ByteOrder::Little, ByteOrder::Big, ByteOrder::Native] {
            let bytes = encode_records(&sample(), order);
            assert_eq!(parse_records(&bytes, order).unwrap(), sample());
            assert_eq!(encode_records(&parse_records(&bytes, order).unwrap(), order), bytes);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_records(&[], ByteOrder::Little).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_input_rejected() {
        let bytes = encode_records(&sample(), ByteOrder::Little);
        for cut in [1, 4, 15] {
            let err = parse_records(&bytes[..bytes.len() - cut], ByteOrder::Little).unwrap_err();
            assert!(matches!(
                err,
                Error::MalformedRecordFile { record_bytes: 16, .. }
            ));
        }
    }

    #[test]
    fn test_read_from_reader() {
        let bytes = encode_records(&sample(), ByteOrder::Big);
        let mut cursor = std::io::Cursor::new(bytes);
        assert_eq!(read_records_from(&mut cursor, ByteOrder::Big).unwrap(), sample());
    }

    #[test]
    fn test_records_to_cloud() {
        let cloud = records_to_cloud(&sample());
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.point_at(0), Some(Point2D::new(1.0, -2.5)));
        assert_eq!(cloud.point_at(1), Some(Point2D::new(-0.125, 3.0)));
    }

    #[test]
    fn test_byte_order_serde() {
        let order: ByteOrder = serde_yaml::from_str("big").unwrap();
        assert_eq!(order, ByteOrder::Big);
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }
}
