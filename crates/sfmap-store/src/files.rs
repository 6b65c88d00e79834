use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sfmap_core::{CategorizedOutput, Category, Metadata};

use crate::error::StoreError;

pub const METADATA_FILE: &str = "metadata.json";

/// Paths written by [`write_output`], with the record count of each category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub categories: Vec<(Category, PathBuf, usize)>,
    pub metadata: PathBuf,
}

impl WrittenFiles {
    #[must_use]
    pub fn paths(&self) -> Vec<&Path> {
        self.categories
            .iter()
            .map(|(_, path, _)| path.as_path())
            .chain(std::iter::once(self.metadata.as_path()))
            .collect()
    }
}

/// Writes every category file and `metadata.json` into `dir`.
///
/// The directory is created if needed. Each file is written to a sibling
/// temporary path and renamed into place, so a concurrent reader sees either
/// the previous file or the new one.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory cannot be created or a file
/// cannot be written, and [`StoreError::Json`] if serialization fails.
pub fn write_output(dir: &Path, output: &CategorizedOutput) -> Result<WrittenFiles, StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut categories = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let records = output.category(category);
        let path = dir.join(category.file_name());
        write_json(&path, records)?;
        tracing::debug!(
            %category,
            count = records.len(),
            path = %path.display(),
            "wrote category"
        );
        categories.push((category, path, records.len()));
    }

    let metadata = dir.join(METADATA_FILE);
    write_json(&metadata, &output.metadata())?;

    tracing::info!(
        dir = %dir.display(),
        records = output.total_records(),
        version = output.schema_version,
        last_build = %output.build_identifier,
        "map data written"
    );

    Ok(WrittenFiles {
        categories,
        metadata,
    })
}

/// Reads one category file back as raw JSON.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file does not exist,
/// [`StoreError::Io`] on any other read failure and [`StoreError::Json`] if
/// the content is not valid JSON.
pub fn read_category(dir: &Path, category: Category) -> Result<serde_json::Value, StoreError> {
    read_json(&dir.join(category.file_name()))
}

/// Reads `metadata.json`.
///
/// # Errors
///
/// Same as [`read_category`]; [`StoreError::Json`] also covers a file that
/// is valid JSON but lacks `version` or `lastBuild`.
pub fn read_metadata(dir: &Path) -> Result<Metadata, StoreError> {
    let path = dir.join(METADATA_FILE);
    let value = read_json(&path)?;
    serde_json::from_value(value).map_err(|source| StoreError::Json { path, source })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    bytes.push(b'\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, &bytes).map_err(|source| StoreError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json(path: &Path) -> Result<serde_json::Value, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}
