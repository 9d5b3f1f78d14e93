use std::fs;
use std::path::{Path, PathBuf};

use mdpress_engine::convert_page;
use relative_path::RelativePathBuf;

use super::{SiteError, io_error, template::fill_template};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Converts one Markdown file into a full HTML page at `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from, &template, dest, base_path)
}

/// Generates a page for every `*.md` file under `content_dir`.
///
/// `content/blog/post.md` becomes `dest_dir/blog/post.html`. Returns the
/// written paths in sorted order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let mut sources = Vec::new();
    scan_markdown_files(content_dir, &mut sources)?;
    sources.sort();

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = source
            .strip_prefix(content_dir)
            .ok()
            .and_then(|rel| RelativePathBuf::from_path(rel).ok())
            .ok_or_else(|| SiteError::InvalidPath(source.clone()))?;
        let dest = relative.with_extension(HTML_EXTENSION).to_path(dest_dir);

        write_page(&source, &template, &dest, base_path)?;
        written.push(dest);
    }
    Ok(written)
}

fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<(), SiteError> {
    log::info!("generating page {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = convert_page(&markdown).map_err(|source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    })?;
    let html = fill_template(template, &page, base_path);

    // Create parent directories if they don't exist
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, html).map_err(io_error(dest))
}

fn scan_markdown_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    if !dir.is_dir() {
        return Err(SiteError::NotADirectory(dir.to_path_buf()));
    }

    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();

        if path.is_dir() {
            scan_markdown_files(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            files.push(path);
        }
    }
    Ok(())
}
