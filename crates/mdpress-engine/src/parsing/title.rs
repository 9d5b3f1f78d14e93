use super::blocks::{BlockKind, classify_block, kinds::Heading, split_blocks};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("markdown does not contain h1 title")]
    NoTitleFound,
}

/// Finds the text of the first level-1 heading line in `document`.
///
/// Any line of a block counts, not only its first line, but code blocks are
/// skipped. The marker must be a single `#` followed by whitespace; the rest
/// of the line is trimmed.
pub fn extract_title(document: &str) -> Result<String, TitleError> {
    split_blocks(document)
        .into_iter()
        .filter(|block| classify_block(block) != BlockKind::Code)
        .flat_map(|block| block.split('\n'))
        .find_map(|line| {
            let rest = line.strip_prefix(Heading::MARKER)?;
            rest.starts_with(char::is_whitespace)
                .then(|| rest.trim().to_string())
        })
        .ok_or(TitleError::NoTitleFound)
}
