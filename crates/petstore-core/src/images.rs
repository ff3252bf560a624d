// Rust guideline compliant 2026-10-17

//! Image upload helpers.
//!
//! Uploaded images are written into a flat directory. A name that is already
//! taken gets a `1` inserted before its extension until it is free, so earlier
//! uploads are never overwritten.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Content types accepted for Pet images.
pub const SUPPORTED_IMAGE_TYPES: [&str; 6] = [
    "image/gif",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/svg+xml",
];

/// Returns true if the content type is an accepted image format.
pub fn is_supported_image(content_type: &str) -> bool {
    SUPPORTED_IMAGE_TYPES.contains(&content_type)
}

/// Reduces a client-supplied file name to a safe, flat name.
///
/// Only the final path component is kept, for both `/` and `\` separators.
///
/// # Errors
///
/// Returns `Error::InvalidFileName` if nothing usable remains.
pub fn sanitize_file_name(raw: &str) -> Result<String> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return Err(Error::InvalidFileName(raw.to_string()));
    }

    Ok(name.to_string())
}

/// Returns a file name that does not yet exist in `dir`.
///
/// `dog.png` becomes `dog1.png`, then `dog11.png`, and so on. Names without an
/// extension get the `1` appended.
pub fn unique_file_name(dir: &Path, name: &str) -> String {
    let mut candidate = name.to_string();
    while dir.join(&candidate).exists() {
        candidate = bump_file_name(&candidate);
    }
    candidate
}

fn bump_file_name(name: &str) -> String {
    match name.rfind('.') {
        Some(index) => format!("{}1{}", &name[..index], &name[index..]),
        None => format!("{}1", name),
    }
}

/// Flat directory that stores uploaded Pet images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Creates an image store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the image directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` under a unique name derived from `file_name`.
    ///
    /// # Returns
    ///
    /// The name the image was stored under.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unusable or the file cannot be written.
    pub fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        use std::fs::OpenOptions;
        use std::io::Write;

        let name = sanitize_file_name(file_name)?;
        std::fs::create_dir_all(&self.dir)?;

        // create_new guards against a racing upload claiming the same name.
        let mut stored = unique_file_name(&self.dir, &name);
        let mut file = loop {
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.dir.join(&stored))
            {
                Ok(file) => break file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    stored = unique_file_name(&self.dir, &bump_file_name(&stored));
                }
                Err(e) => return Err(Error::Io(e)),
            }
        };

        file.write_all(bytes)?;
        file.sync_all()?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_supported_image_types() {
        assert!(is_supported_image("image/png"));
        assert!(is_supported_image("image/svg+xml"));
        assert!(!is_supported_image("image/bmp"));
        assert!(!is_supported_image("text/plain"));
        assert!(!is_supported_image("IMAGE/PNG"));
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\dog.png").unwrap(), "dog.png");
        assert_eq!(sanitize_file_name("dog.png").unwrap(), "dog.png");
    }

    #[test]
    fn test_sanitize_rejects_empty_names() {
        assert!(sanitize_file_name("").is_err());
        assert!(sanitize_file_name("photos/").is_err());
        assert!(sanitize_file_name("..").is_err());
    }

    #[test]
    fn test_unique_file_name_inserts_before_extension() {
        let temp = TempDir::new().unwrap();
        assert_eq!(unique_file_name(temp.path(), "dog.png"), "dog.png");

        std::fs::write(temp.path().join("dog.png"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "dog.png"), "dog1.png");

        std::fs::write(temp.path().join("dog1.png"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "dog.png"), "dog11.png");
    }

    #[test]
    fn test_unique_file_name_without_extension() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dog"), b"x").unwrap();
        assert_eq!(unique_file_name(temp.path(), "dog"), "dog1");
    }

    #[test]
    fn test_image_store_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = ImageStore::new(temp.path().join("images"));

        let first = store.save("cat.jpg", b"one").unwrap();
        let second = store.save("cat.jpg", b"two").unwrap();

        assert_eq!(first, "cat.jpg");
        assert_eq!(second, "cat1.jpg");
        assert_eq!(std::fs::read(store.dir().join(&first)).unwrap(), b"one");
        assert_eq!(std::fs::read(store.dir().join(&second)).unwrap(), b"two");
    }
}
