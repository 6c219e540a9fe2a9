pub mod json;
pub mod terminal;

use crate::compare::ComparisonResult;

/// Coarse similarity band used in the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Identical,
    VerySimilar,
    SomewhatSimilar,
    SlightlySimilar,
    VeryDifferent,
}

impl Verdict {
    pub fn of(result: &ComparisonResult) -> Self {
        if result.exact_match() {
            Self::Identical
        } else if result.is_similar(95.0) {
            Self::VerySimilar
        } else if result.is_similar(80.0) {
            Self::SomewhatSimilar
        } else if result.is_similar(50.0) {
            Self::SlightlySimilar
        } else {
            Self::VeryDifferent
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Identical => "Images are IDENTICAL",
            Self::VerySimilar => "Images are VERY SIMILAR (>=95% match)",
            Self::SomewhatSimilar => "Images are SOMEWHAT SIMILAR (>=80% match)",
            Self::SlightlySimilar => "Images are SLIGHTLY SIMILAR (>=50% match)",
            Self::VeryDifferent => "Images are VERY DIFFERENT (<50% match)",
        }
    }
}
