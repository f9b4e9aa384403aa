//! Symlink placement - materializing one group/member destination slot.

pub mod error;

pub use error::LinkError;

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Place a symlink at `out_dir/group/member` pointing to
/// `source_dir/entry_name`, returning the destination path.
///
/// Parent creation is recursive and race-safe, so units sharing a group may
/// run concurrently without coordination. A stale symlink already occupying
/// the destination slot is replaced, which keeps re-runs idempotent; any
/// other occupant fails the entry instead of being deleted.
///
/// `source_mode` carries the source entry's unix permission bits for newly
/// created parent directories; `None` falls back to platform defaults.
///
/// # Errors
/// Returns a `LinkError` naming the step that failed.
pub fn place_link(
    source_dir: &Path,
    out_dir: &Path,
    group: &str,
    member: &str,
    entry_name: &OsStr,
    source_mode: Option<u32>,
) -> Result<PathBuf, LinkError> {
    let source = absolute(&source_dir.join(entry_name))?;
    let dest_parent = absolute(&out_dir.join(group))?;
    let dest = dest_parent.join(member);

    create_dest_parent(&dest_parent, source_mode)?;
    clear_stale_link(&dest)?;

    symlink_dir(&source, &dest).map_err(|e| LinkError::Creation {
        src: source,
        dest: dest.clone(),
        source: e,
    })?;
    Ok(dest)
}

fn absolute(path: &Path) -> Result<PathBuf, LinkError> {
    std::path::absolute(path).map_err(|e| LinkError::PathResolution {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create the destination parent, tolerating it already existing.
fn create_dest_parent(dest_parent: &Path, source_mode: Option<u32>) -> Result<(), LinkError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    if let Some(mode) = source_mode {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode & 0o777);
    }
    #[cfg(not(unix))]
    let _ = source_mode;
    builder.create(dest_parent).map_err(|e| LinkError::ParentCreation {
        path: dest_parent.to_path_buf(),
        source: e,
    })
}

/// Remove a symlink occupying the destination slot, if present.
///
/// The slot is inspected without following links. A real file or directory
/// in the slot is user data and fails the entry.
fn clear_stale_link(dest: &Path) -> Result<(), LinkError> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::remove_file(dest).map_err(|e| LinkError::StaleRemoval {
                path: dest.to_path_buf(),
                source: e,
            })
        }
        Ok(_) => Err(LinkError::Occupied {
            path: dest.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LinkError::Inspection {
            path: dest.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(unix)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}
