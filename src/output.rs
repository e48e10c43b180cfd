//! Writing assets to disk and bundling them into a ZIP archive

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::assets::AssetSet;
use crate::error::GenerateError;

/// Write every asset to `<dir>/<name>`, creating `dir` if needed
///
/// Existing files are overwritten. On failure, files written so far stay on
/// disk.
pub fn write_assets(assets: &AssetSet, dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        let path = dir.join(asset.name);
        fs::write(&path, &asset.content).map_err(|source| GenerateError::WriteFile {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} ({} bytes)", path.display(), asset.content.len());
        written.push(path);
    }

    Ok(written)
}

/// Check that `name` is a bare file name that cannot overwrite an asset
pub fn validate_archive_name(assets: &AssetSet, name: &str) -> Result<(), GenerateError> {
    let invalid = |reason| {
        Err(GenerateError::InvalidArchiveName {
            path: PathBuf::from(name),
            reason,
        })
    };

    if name.is_empty() || name == "." || name == ".." {
        return invalid("not a file name");
    }
    if name.contains(['/', '\\']) {
        return invalid("must not contain a path separator");
    }
    if assets.get(name).is_some() {
        return invalid("clashes with an asset file");
    }
    Ok(())
}

/// Bundle the written assets into `<dir>/<archive_name>`
///
/// Entries are read back from disk and stored deflated under their bare file
/// names. Timestamps and permissions are fixed so the archive bytes depend
/// only on the file contents.
pub fn write_archive(
    assets: &AssetSet,
    dir: &Path,
    archive_name: &str,
) -> Result<PathBuf, GenerateError> {
    validate_archive_name(assets, archive_name)?;

    let archive_path = dir.join(archive_name);
    let archive_err = |source: ZipError| GenerateError::Archive {
        path: archive_path.clone(),
        source,
    };

    let file = File::create(&archive_path).map_err(|e| archive_err(ZipError::Io(e)))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    for asset in assets {
        let path = dir.join(asset.name);
        let bytes = fs::read(&path).map_err(|source| GenerateError::ReadFile {
            path: path.clone(),
            source,
        })?;

        zip.start_file(asset.name, options).map_err(archive_err)?;
        zip.write_all(&bytes)
            .map_err(|e| archive_err(ZipError::Io(e)))?;
    }

    zip.finish().map_err(archive_err)?;
    info!(
        "archived {} files into {}",
        assets.len(),
        archive_path.display()
    );

    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::render_assets;
    use crate::palette::Palette;
    use crate::renderer::SvgConfig;
    use std::io::Read;
    use tempfile::TempDir;

    fn assets() -> AssetSet {
        render_assets(&Palette::default(), &SvgConfig::default())
    }

    #[test]
    fn test_write_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("a").join("b");

        let written = write_assets(&assets(), &out).unwrap();

        assert_eq!(written.len(), 7);
        assert!(written.iter().all(|p| p.starts_with(&out) && p.is_file()));
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let stale = temp_dir.path().join("emberly-symbol.svg");
        fs::write(&stale, "stale").unwrap();

        write_assets(&assets(), temp_dir.path()).unwrap();

        let content = fs::read_to_string(&stale).unwrap();
        assert!(content.starts_with("<?xml"));
    }

    #[test]
    fn test_write_fails_when_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = write_assets(&assets(), &blocker.join("out")).unwrap_err();
        assert!(matches!(err, GenerateError::CreateDir { .. }));
    }

    #[test]
    fn test_archive_reads_files_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let set = assets();
        write_assets(&set, temp_dir.path()).unwrap();
        fs::write(temp_dir.path().join("emberly-wordmark.svg"), "edited").unwrap();

        let path = write_archive(&set, temp_dir.path(), "suite.zip").unwrap();

        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut content = String::new();
        archive
            .by_name("emberly-wordmark.svg")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "edited");
    }

    #[test]
    fn test_archive_without_written_files_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = write_archive(&assets(), temp_dir.path(), "suite.zip").unwrap_err();
        assert!(matches!(err, GenerateError::ReadFile { .. }));
    }

    #[test]
    fn test_archive_name_validation() {
        let set = assets();
        assert!(validate_archive_name(&set, "suite.zip").is_ok());
        for bad in ["", "..", "sub/suite.zip", "sub\\suite.zip", "emberly-wordmark.svg"] {
            let err = validate_archive_name(&set, bad).unwrap_err();
            assert!(matches!(err, GenerateError::InvalidArchiveName { .. }), "{bad}");
        }
    }

    #[test]
    fn test_archive_refuses_asset_name_without_touching_file() {
        let temp_dir = TempDir::new().unwrap();
        let set = assets();
        write_assets(&set, temp_dir.path()).unwrap();

        let err = write_archive(&set, temp_dir.path(), "emberly-symbol.svg").unwrap_err();

        assert!(matches!(err, GenerateError::InvalidArchiveName { .. }));
        let symbol = fs::read_to_string(temp_dir.path().join("emberly-symbol.svg")).unwrap();
        assert_eq!(symbol, set.by_kind(crate::assets::AssetKind::Symbol).unwrap().content);
    }

    #[test]
    fn test_archive_entries_are_deflated() {
        let temp_dir = TempDir::new().unwrap();
        let set = assets();
        write_assets(&set, temp_dir.path()).unwrap();
        let path = write_archive(&set, temp_dir.path(), "suite.zip").unwrap();

        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        for i in 0..archive.len() {
            let entry = archive.by_index(i).unwrap();
            assert_eq!(entry.compression(), CompressionMethod::Deflated);
            assert!(!entry.name().contains('/'));
        }
    }
}
