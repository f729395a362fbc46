//! Raw record files on disk.

use std::path::PathBuf;

use tempfile::TempDir;

use rekha::cloud::velodyne::{
    encode_records, read_records, records_to_cloud, save_records, RECORD_BYTES,
};
use rekha::{ByteOrder, Error, Point2D, RekhaConfig, RigidTransform2D, VelodyneRecord};

fn records(n: usize) -> Vec<VelodyneRecord> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            VelodyneRecord::new(f * 0.5, -f, f * 0.01, (i % 7) as f32 / 7.0)
        })
        .collect()
}

fn temp_file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn file_roundtrip_is_byte_exact() {
    let dir = TempDir::new().unwrap();
    for order in [ByteOrder::Little, ByteOrder::Big] {
        let path = temp_file(&dir, "scan.bin");
        let original = records(64);
        save_records(&path, &original, order).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 64 * RECORD_BYTES);
        assert_eq!(bytes, encode_records(&original, order));

        let loaded = read_records(&path, order).unwrap();
        assert_eq!(loaded, original);
    }
}

#[test]
fn hand_written_little_endian_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "manual.bin");

    let mut bytes = Vec::new();
    for v in [1.5f32, -2.0, 0.25, 0.75] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(&path, &bytes).unwrap();

    let loaded = read_records(&path, ByteOrder::Little).unwrap();
    assert_eq!(loaded, vec![VelodyneRecord::new(1.5, -2.0, 0.25, 0.75)]);
}

#[test]
fn truncated_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "short.bin");
    let mut bytes = encode_records(&records(3), ByteOrder::Little);
    bytes.truncate(bytes.len() - 8);
    std::fs::write(&path, &bytes).unwrap();

    match read_records(&path, ByteOrder::Little) {
        Err(Error::MalformedRecordFile { len, record_bytes }) => {
            assert_eq!(len, 40);
            assert_eq!(record_bytes, 16);
        }
        other => panic!("expected MalformedRecordFile, got {:?}", other),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_records(&temp_file(&dir, "absent.bin"), ByteOrder::Little).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn mounted_cloud_from_config() {
    let config = RekhaConfig::from_yaml(
        r#"
velodyne:
  byte_order: big
  mount:
    rotation: [[0.0, -1.0], [1.0, 0.0]]
    translation: { x: 1.0, y: 0.0 }
"#,
    )
    .unwrap();

    let dir = TempDir::new().unwrap();
    let path = temp_file(&dir, "mounted.bin");
    save_records(
        &path,
        &[VelodyneRecord::new(1.0, 0.0, 5.0, 0.3)],
        config.velodyne.byte_order,
    )
    .unwrap();

    let loaded = read_records(&path, config.velodyne.byte_order).unwrap();
    let cloud = records_to_cloud(&loaded).transform(&config.mount_transform().unwrap());
    let expected = RigidTransform2D::from_angle_translation(90.0, Point2D::new(1.0, 0.0))
        .apply(Point2D::new(1.0, 0.0));

    assert_eq!(cloud.len(), 1);
    assert!(cloud.point_at(0).unwrap().approx_eq(&expected, 1e-9));
    assert!(expected.approx_eq(&Point2D::new(1.0, 1.0), 1e-9));
}
