use std::fs;
use std::path::Path;

use super::{SiteError, io_error};

/// Replaces the contents of `dest` with a copy of `src`.
///
/// `dest` is created if missing and emptied otherwise; the directory itself
/// is kept. Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotADirectory(src.to_path_buf()));
    }

    clear_directory(dest)?;
    copy_recursive(src, dest)
}

fn clear_directory(dir: &Path) -> Result<(), SiteError> {
    if !dir.exists() {
        return fs::create_dir_all(dir).map_err(io_error(dir));
    }

    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(io_error(&path))?;
        } else {
            fs::remove_file(&path).map_err(io_error(&path))?;
        }
    }
    Ok(())
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_error(src))? {
        let path = entry.map_err(io_error(src))?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_recursive(&path, &target)?;
        } else {
            log::info!("copy {} -> {}", path.display(), target.display());
            fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        }
    }
    Ok(copied)
}
