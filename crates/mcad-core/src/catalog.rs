use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::consts::FOLDER_PREFIX;
use crate::error::{McadError, Result};
use crate::metadata::ImageMetadata;

/// An image together with its metadata file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePair {
    pub folder: String,
    pub png_file: String,
    pub png_path: PathBuf,
    pub metadata_path: PathBuf,
}

/// Read-only view over the crater image data tree.
///
/// Layout: `<root>/Folder NNN/<image>.png` with a `<image>.json` metadata
/// file next to each image.
#[derive(Clone, Debug)]
pub struct DataCatalog {
    root: PathBuf,
}

impl DataCatalog {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(McadError::DataDirNotFound(root));
        }
        debug!(root = %root.display(), "opened data catalog");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Image folders (subdirectories named `Folder...`), sorted by name.
    pub fn list_folders(&self) -> Result<Vec<String>> {
        let mut folders = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(FOLDER_PREFIX) {
                    folders.push(name.to_string());
                }
            }
        }
        folders.sort();
        Ok(folders)
    }

    /// PNG file names in `folder` (extension matched case-insensitively), sorted.
    pub fn list_png_files(&self, folder: &str) -> Result<Vec<String>> {
        let dir = self.folder_path(folder)?;
        if !dir.is_dir() {
            return Err(McadError::FolderNotFound(folder.to_string()));
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if has_png_extension(&path) {
                if let Some(name) = entry.file_name().to_str() {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Path of the metadata file belonging to `file`.
    ///
    /// A `.png` extension (any case) is replaced by `.json`; any other name
    /// is used as is.
    pub fn metadata_path(&self, folder: &str, file: &str) -> Result<PathBuf> {
        let dir = self.folder_path(folder)?;
        check_name(file)?;
        let path = dir.join(file);
        if has_png_extension(&path) {
            Ok(path.with_extension("json"))
        } else {
            Ok(path)
        }
    }

    pub fn read_metadata(&self, folder: &str, file: &str) -> Result<ImageMetadata> {
        let path = self.metadata_path(folder, file)?;
        if !path.is_file() {
            return Err(McadError::MetadataNotFound(path));
        }
        let text = std::fs::read_to_string(&path)?;
        ImageMetadata::from_json(&text).inspect_err(|e| {
            warn!(path = %path.display(), "failed to decode metadata: {e}");
        })
    }

    pub fn png_path(&self, folder: &str, file: &str) -> Result<PathBuf> {
        let dir = self.folder_path(folder)?;
        check_name(file)?;
        Ok(dir.join(file))
    }

    /// Raw PNG bytes.
    pub fn read_png(&self, folder: &str, file: &str) -> Result<Vec<u8>> {
        let path = self.png_path(folder, file)?;
        if !path.is_file() {
            return Err(McadError::ImageNotFound(path));
        }
        Ok(std::fs::read(path)?)
    }

    /// Decoded image.
    pub fn load_image(&self, folder: &str, file: &str) -> Result<image::DynamicImage> {
        let bytes = self.read_png(folder, file)?;
        Ok(image::load_from_memory_with_format(
            &bytes,
            image::ImageFormat::Png,
        )?)
    }

    /// Every image in every folder that has a metadata file next to it.
    pub fn image_pairs(&self) -> Result<Vec<ImagePair>> {
        let mut pairs = Vec::new();
        for folder in self.list_folders()? {
            for png_file in self.list_png_files(&folder)? {
                let metadata_path = self.metadata_path(&folder, &png_file)?;
                if !metadata_path.is_file() {
                    continue;
                }
                pairs.push(ImagePair {
                    png_path: self.png_path(&folder, &png_file)?,
                    folder: folder.clone(),
                    png_file,
                    metadata_path,
                });
            }
        }
        debug!(count = pairs.len(), "collected image/metadata pairs");
        Ok(pairs)
    }

    fn folder_path(&self, folder: &str) -> Result<PathBuf> {
        check_name(folder)?;
        Ok(self.root.join(folder))
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Names must be a single normal path component.
fn check_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(McadError::InvalidName(name.to_string())),
    }
}
