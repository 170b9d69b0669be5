use crate::engine::Aligner;
use crate::scoring::ScoringScheme;

/// Step-by-step construction of an [`Aligner`] over a [`ScoringScheme`].
///
/// Unset fields keep the reference scheme's values.
#[derive(Debug, Clone, Default)]
pub struct AlignerBuilder {
    scheme: ScoringScheme,
    max_cells: Option<usize>,
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_scheme(mut self, scheme: ScoringScheme) -> Self {
        self.scheme = scheme;
        self
    }
    pub fn with_match_reward(mut self, match_reward: i32) -> Self {
        self.scheme.match_reward = match_reward;
        self
    }
    pub fn with_mismatch_penalty(mut self, mismatch_penalty: i32) -> Self {
        self.scheme.mismatch_penalty = mismatch_penalty;
        self
    }
    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.scheme.gap_penalty = gap_penalty;
        self
    }
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
    pub fn build(self) -> Aligner<ScoringScheme> {
        match self.max_cells {
            Some(limit) => Aligner::with_max_cells(self.scheme, limit),
            None => Aligner::new(self.scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AlignerBuilder;
    use crate::ScoringScheme;

    #[test]
    fn defaults_to_reference_scheme() {
        let aligner = AlignerBuilder::new().build();
        assert_eq!(*aligner.scorer(), ScoringScheme::default());
        assert_eq!(aligner.max_cells(), None);
    }

    #[test]
    fn individual_setters_override_one_field() {
        let aligner = AlignerBuilder::new()
            .with_match_reward(2)
            .with_gap_penalty(-5)
            .with_max_cells(1_000)
            .build();
        assert_eq!(*aligner.scorer(), ScoringScheme::new(2, -1, -5));
        assert_eq!(aligner.max_cells(), Some(1_000));
    }

    #[test]
    fn later_setters_win_over_scheme() {
        let aligner = AlignerBuilder::new()
            .with_scheme(ScoringScheme::new(3, -3, -3))
            .with_mismatch_penalty(-4)
            .build();
        assert_eq!(*aligner.scorer(), ScoringScheme::new(3, -4, -3));
    }
}
