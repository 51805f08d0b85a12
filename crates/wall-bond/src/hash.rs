use sha2::{Digest, Sha256};
use wall_core::{Course, ErrorInfo, WallError};

/// Serializes the courses to a compact binary representation using `bincode`.
pub fn layout_to_bytes(courses: &[Course]) -> Result<Vec<u8>, WallError> {
    bincode::serialize(courses)
        .map_err(|err| WallError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores courses from their binary representation.
pub fn layout_from_bytes(bytes: &[u8]) -> Result<Vec<Course>, WallError> {
    bincode::deserialize(bytes)
        .map_err(|err| WallError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))
}

/// Hex SHA-256 of the layout: course count, then every brick's kind and
/// position in tenths of a millimetre.
pub fn canonical_hash(courses: &[Course]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((courses.len() as u64).to_le_bytes());
    for course in courses {
        hasher.update(course.index.to_le_bytes());
        hasher.update((course.bricks.len() as u64).to_le_bytes());
        for brick in &course.bricks {
            hasher.update(brick.kind().as_str().as_bytes());
            hasher.update(b":");
            hasher.update(brick.x.tenths().to_le_bytes());
            hasher.update(brick.y.tenths().to_le_bytes());
            hasher.update(brick.spec.length.tenths().to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}
