use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),

    #[error("failed to decode {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to create texture for {path:?}: {message}")]
    Texture { path: PathBuf, message: String },
}

/// Quarter turns applied to an image according to its EXIF orientation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rotation {
    None,
    Half,             // 180 deg
    Clockwise,        // 90 deg clockwise
    CounterClockwise, // 90 deg counter-clockwise
}

impl Rotation {
    // Orientations involving flips (2, 4, 5, 7) are drawn unrotated.
    pub fn from_exif(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Rotation::None => {}
            Rotation::Half => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Rotation::Clockwise => image.rotate_cw(),
            Rotation::CounterClockwise => image.rotate_ccw(),
        }
    }
}

fn is_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

/// Maps a banner location onto the filesystem. A leading `/` is relative to `root`.
pub fn resolve_location(root: &Path, location: &str) -> PathBuf {
    root.join(location.trim_start_matches('/'))
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source| LoadError::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(LoadError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = ?image_path, error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Loads an image file as a texture, rotating JPEGs upright first.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let file_bytes = fs::read(image_path).map_err(|source| LoadError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliable for JPEG
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_exif(exif_orientation(image_path, &file_bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes).map_err(
        |e| LoadError::Decode {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        },
    )?;

    if rotation != Rotation::None {
        debug!(path = ?image_path, ?rotation, "applying EXIF rotation");
        rotation.apply(&mut image);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rotation_follows_exif_orientation() {
        assert_eq!(Rotation::from_exif(1), Rotation::None);
        assert_eq!(Rotation::from_exif(3), Rotation::Half);
        assert_eq!(Rotation::from_exif(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_exif(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_exif(2), Rotation::None);
    }

    #[test]
    fn leading_slash_is_relative_to_root() {
        let root = Path::new("/srv/site");
        assert_eq!(
            resolve_location(root, "/static/image/banner.png"),
            PathBuf::from("/srv/site/static/image/banner.png")
        );
        assert_eq!(
            resolve_location(root, "img/a.png"),
            PathBuf::from("/srv/site/img/a.png")
        );
    }

    #[test]
    fn directory_listing_keeps_sorted_images_only() {
        let dir = tempdir().expect("tempdir");
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"").expect("write fixture");
        }
        fs::create_dir(dir.path().join("nested.png")).expect("create subdir");

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .expect("listing succeeds")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.jpg", "b.PNG", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("notes.txt"), b"").expect("write fixture");

        let result = load_sorted_image_paths(dir.path());
        assert!(matches!(result, Err(LoadError::NoImages(_))));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let result = load_sorted_image_paths(&dir.path().join("absent"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
