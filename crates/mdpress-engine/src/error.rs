use crate::{html::RenderError, parsing::inline::InlineError, parsing::title::TitleError};

/// Any failure while turning a whole document into a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Title(#[from] TitleError),
}
