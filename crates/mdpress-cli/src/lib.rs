pub mod site;

pub use site::{BuildSummary, SiteError, build_site};
