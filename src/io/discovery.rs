use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::ImageFormat;

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }
    Ok(())
}

fn has_json_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Every supported image file below `root`, at any depth, sorted by path.
pub fn scan_images_recursive(root: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(root)?;

    let mut images = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let path = entry.path();
        if entry.file_type().is_file() && ImageFormat::is_supported(path) {
            images.push(path.to_path_buf());
        } else if entry.file_type().is_file() {
            debug!("Ignoring non-image file: {:?}", path);
        }
    }
    Ok(images)
}

/// Supported image files directly inside `dir`, sorted by file name.
pub fn scan_images_flat(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && ImageFormat::is_supported(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Every `*.json` file below `dir`, at any depth, sorted by path.
pub fn scan_json_recursive(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.file_type().is_file() && has_json_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_recursive_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("b.png"));
        touch(&root.join("Caries/a.JPG"));
        touch(&root.join("Caries/deep/c.jpeg"));
        touch(&root.join("notes.txt"));
        touch(&root.join("Caries/readme.md"));

        let found = scan_images_recursive(root).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("Caries/a.JPG"),
                PathBuf::from("Caries/deep/c.jpeg"),
                PathBuf::from("b.png"),
            ]
        );
    }

    #[test]
    fn test_flat_scan_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("z.png"));
        touch(&root.join("a.jpg"));
        touch(&root.join("sub/inner.png"));
        touch(&root.join("a.jpg.json"));
        fs::create_dir_all(root.join("folder.png")).unwrap();

        let found = scan_images_flat(root).unwrap();
        assert_eq!(found, vec![root.join("a.jpg"), root.join("z.png")]);
    }

    #[test]
    fn test_json_scan() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.png.json"));
        touch(&root.join("Caries/b.jpg.json"));
        touch(&root.join("Caries/b.jpg"));

        let found = scan_json_recursive(root).unwrap();
        assert_eq!(found, vec![root.join("Caries/b.jpg.json"), root.join("a.png.json")]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(scan_images_flat(&missing), Err(Error::NotFound(_))));
        assert!(matches!(scan_images_recursive(&missing), Err(Error::NotFound(_))));
    }
}
