use std::io::Cursor;
use std::path::Path;
use exif::{In, Reader, Tag, Value};
use tracing::warn;

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,        // EXIF 6
    Half,             // EXIF 3
    CounterClockwise, // EXIF 8
}

impl Rotation {
    // Values involving flips (2, 4, 5, 7) are treated as upright
    pub fn from_exif(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

/// Reads the EXIF orientation of a JPEG held in memory. Other formats and
/// unreadable metadata come back upright.
pub fn rotation_for(path: &Path, bytes: &[u8]) -> Rotation {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return Rotation::None;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .map_or(Rotation::None, Rotation::from_exif),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            Rotation::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_exif_values() {
        assert_eq!(Rotation::from_exif(1), Rotation::None);
        assert_eq!(Rotation::from_exif(3), Rotation::Half);
        assert_eq!(Rotation::from_exif(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_exif(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_exif(5), Rotation::None);
    }

    #[test]
    fn non_jpeg_and_garbage_are_upright() {
        assert_eq!(rotation_for(Path::new("a.png"), b"\x89PNG"), Rotation::None);
        assert_eq!(rotation_for(Path::new("a.JPG"), b"not a jpeg"), Rotation::None);
    }
}
