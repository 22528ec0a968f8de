/// Search parameters: which words the counters look for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Word counted as straight-line occurrences in all eight directions.
    pub word: String,
    /// Word forming each diagonal arm of the crossing pattern. Must have odd
    /// length so that both arms share a center character.
    pub cross_word: String,
}

impl SearchConfig {
    pub const DEFAULT_WORD: &'static str = "XMAS";
    pub const DEFAULT_CROSS_WORD: &'static str = "MAS";

    pub fn new() -> Self {
        Self {
            word: Self::DEFAULT_WORD.to_owned(),
            cross_word: Self::DEFAULT_CROSS_WORD.to_owned(),
        }
    }

    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    pub fn with_cross_word(mut self, cross_word: impl Into<String>) -> Self {
        self.cross_word = cross_word.into();
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
