use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::ScanError;
use crate::source::MappedSource;

/// A read-only memory mapping of an input file.
///
/// Zero-length files cannot be mapped on every platform, so they are
/// represented without a mapping and expose an empty region.
pub struct MappedFile {
    path: PathBuf,
    map: Option<Mmap>,
}

impl MappedFile {
    /// Open `path` and map its full contents.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Mapping`] if the file cannot be opened,
    /// inspected, or mapped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref().to_path_buf();
        let mapping_error = |source| ScanError::Mapping {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(mapping_error)?;
        let len = file.metadata().map_err(mapping_error)?.len();

        let map = if len == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only. Truncating the file while it
            // is mapped is undefined behaviour; inputs are treated as
            // immutable for the duration of a scan.
            Some(unsafe { Mmap::map(&file) }.map_err(mapping_error)?)
        };

        log::debug!("mapped {} ({len} bytes)", path.display());
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A line source over the whole file.
    pub fn source(&self) -> MappedSource<'_> {
        MappedSource::new(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::LineScanner;
    use std::io::Write;

    #[test]
    fn maps_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"MNO,1,2,3,4,5\nother\n").unwrap();
        file.flush().unwrap();

        let mapped = MappedFile::open(file.path()).unwrap();
        assert_eq!(mapped.as_bytes(), b"MNO,1,2,3,4,5\nother\n");
        assert_eq!(mapped.path(), file.path());

        let mut scanner = LineScanner::new(mapped.source());
        assert_eq!(scanner.read_line().unwrap().unwrap().as_bytes(), b"MNO,1,2,3,4,5");
        assert_eq!(scanner.read_line().unwrap().unwrap().as_bytes(), b"other");
        assert!(scanner.read_line().unwrap().is_none());
    }

    #[test]
    fn empty_file_maps_to_empty_region() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mapped = MappedFile::open(file.path()).unwrap();
        assert!(mapped.is_empty());
        assert!(LineScanner::new(mapped.source()).read_line().unwrap().is_none());
    }

    #[test]
    fn missing_file_is_a_mapping_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = MappedFile::open(&path).err().unwrap();
        assert!(matches!(err, ScanError::Mapping { ref path, .. } if path.ends_with("absent.csv")));
        assert!(err.to_string().starts_with("cannot map "));
    }
}
