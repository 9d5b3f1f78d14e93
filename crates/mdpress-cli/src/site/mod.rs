//! # Site Generation
//!
//! Everything around the engine that touches the filesystem: copying static
//! assets, filling the page template and writing one HTML file per Markdown
//! page.

pub mod copy;
pub mod generate;
pub mod template;

use std::path::{Path, PathBuf};

use mdpress_config::SiteConfig;
use mdpress_engine::ConvertError;

pub use copy::copy_tree;
pub use generate::{generate_page, generate_pages_recursive};
pub use template::fill_template;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Source path '{0}' is not a directory or does not exist.")]
    NotADirectory(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },
    #[error("Path {0} cannot be mapped into the output directory")]
    InvalidPath(PathBuf),
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + use<> {
    let path = path.to_path_buf();
    move |source| SiteError::Io { path, source }
}

/// Result of a full site build.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub assets_copied: usize,
    pub pages: Vec<PathBuf>,
}

/// Rebuilds the output directory: static assets first, then every page.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary, SiteError> {
    let assets_copied = copy_tree(&config.static_dir, &config.output_dir)?;
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )?;
    Ok(BuildSummary {
        assets_copied,
        pages,
    })
}
