//! Gzip-compressed tar extraction with path-traversal defense.
//!
//! Every entry's target path is rebuilt from its normal components only;
//! entries carrying `..`, absolute paths, or link targets are skipped so
//! nothing is ever written outside the destination directory.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use tar::{Archive, EntryType};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised during archive extraction.
///
/// Messages are sanitized: they describe the failure without echoing
/// local filesystem paths.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not open chart archive")]
    Open(#[source] io::Error),

    #[error("archive framing is invalid: {0}")]
    Archive(String),

    #[error("i/o failure while unpacking archive")]
    Io(#[source] io::Error),
}

/// Extract a `.tgz` archive into `destination`, creating it if needed.
///
/// Partial extraction on failure is possible, but never outside
/// `destination`.
pub fn extract_tar_gz(archive: &Path, destination: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive).map_err(ExtractError::Open)?;
    let decoder = GzDecoder::new(file);
    let mut tar = Archive::new(decoder);

    fs::create_dir_all(destination).map_err(ExtractError::Io)?;

    let entries = tar
        .entries()
        .map_err(|e| ExtractError::Archive(e.to_string()))?;

    for entry in entries {
        let mut entry = entry.map_err(|e| ExtractError::Archive(e.to_string()))?;
        let entry_path = entry
            .path()
            .map_err(|e| ExtractError::Archive(e.to_string()))?
            .into_owned();

        let Some(target) = contained_join(destination, &entry_path) else {
            warn!("Skipping archive entry escaping destination: {:?}", entry_path);
            continue;
        };

        match entry.header().entry_type() {
            EntryType::Directory => {
                fs::create_dir_all(&target).map_err(ExtractError::Io)?;
            }
            EntryType::Regular => {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(ExtractError::Io)?;
                }
                let mut out = File::create(&target).map_err(ExtractError::Io)?;
                io::copy(&mut entry, &mut out).map_err(ExtractError::Io)?;
            }
            // Links can point anywhere; never materialize them.
            other => {
                debug!("Skipping unsupported entry type {:?}", other);
            }
        }
    }

    Ok(())
}

/// Join an archive entry path onto `base` keeping only normal components.
/// Returns `None` when the entry tries to step outside (`..`, absolute
/// paths, drive prefixes).
fn contained_join(base: &Path, entry_path: &Path) -> Option<PathBuf> {
    let mut target = base.to_path_buf();
    for component in entry_path.components() {
        match component {
            Component::Normal(part) => target.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(target)
}
