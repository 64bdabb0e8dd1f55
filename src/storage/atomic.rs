use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{StripError, StripResult};

/// How the spliced content reaches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, sync it, then rename over the target.
    #[default]
    Atomic,
    /// Truncate the target and write into it directly.
    InPlace,
}

/// Scoped read and replace of a single text file
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    /// A symlinked target is resolved so writes land on the file it points to.
    pub fn new<P: AsRef<Path>>(path: P) -> StripResult<Self> {
        let path = Self::resolve(path.as_ref())?;
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve(path: &Path) -> StripResult<PathBuf> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let target = fs::canonicalize(path).map_err(|e| StripError::from_io(path, e))?;
                tracing::debug!("Resolved symlink {:?} -> {:?}", path, target);
                Ok(target)
            }
            _ => Ok(path.to_path_buf()),
        }
    }

    /// Generate a temporary file path next to the target so rename stays on one filesystem
    fn temp_path(path: &Path) -> StripResult<PathBuf> {
        let file_name = path
            .file_name()
            .ok_or_else(|| StripError::InvalidPath(path.to_path_buf()))?;

        let temp_name = format!(
            ".{}.tmp.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    /// Read the whole file as UTF-8. The handle is closed before returning.
    pub fn read_to_string(&self) -> StripResult<String> {
        let bytes = {
            let mut file = File::open(&self.path).map_err(|e| StripError::from_io(&self.path, e))?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)
                .map_err(|e| StripError::from_io(&self.path, e))?;
            bytes
        };

        String::from_utf8(bytes).map_err(|e| StripError::Encoding {
            path: self.path.clone(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    pub fn write(&self, content: &str, mode: WriteMode) -> StripResult<()> {
        match mode {
            WriteMode::Atomic => self.write_atomic(content.as_bytes()),
            WriteMode::InPlace => self.write_in_place(content.as_bytes()),
        }
    }

    fn write_atomic(&self, content: &[u8]) -> StripResult<()> {
        let permissions = fs::metadata(&self.path)
            .map_err(|e| StripError::from_io(&self.path, e))?
            .permissions();

        let result = self.write_temp(content).and_then(|()| {
            fs::set_permissions(&self.temp_path, permissions)
                .map_err(|e| StripError::from_io(&self.temp_path, e))?;
            fs::rename(&self.temp_path, &self.path).map_err(|e| StripError::from_io(&self.path, e))
        });

        if result.is_err() {
            self.discard_temp();
        }

        result
    }

    fn write_temp(&self, content: &[u8]) -> StripResult<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.temp_path)
            .map_err(|e| StripError::from_io(&self.temp_path, e))?;

        temp_file
            .write_all(content)
            .map_err(|e| StripError::from_io(&self.temp_path, e))?;

        temp_file
            .sync_all()
            .map_err(|e| StripError::from_io(&self.temp_path, e))
    }

    fn write_in_place(&self, content: &[u8]) -> StripResult<()> {
        // Never create the target here: a vanished file is an error, not a new file.
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| StripError::from_io(&self.path, e))?;

        file.write_all(content)
            .map_err(|e| StripError::from_io(&self.path, e))?;
        file.flush().map_err(|e| StripError::from_io(&self.path, e))
    }

    fn discard_temp(&self) {
        if self.temp_path.exists() {
            if let Err(e) = fs::remove_file(&self.temp_path) {
                tracing::warn!("Failed to remove temporary file {:?}: {}", self.temp_path, e);
            }
        }
    }
}
