use crate::Normalized;

/// Scale applied to `|truth - falsity|` to obtain the indeterminacy component.
pub const INDETERMINACY_DAMPING: f64 = 0.1;

/// A neutrosophic (truth, indeterminacy, falsity) reading of a closeness score.
///
/// Components are not clamped. With support and opposition fractions in [0, 1] all three stay in
/// [0, 1], but out-of-range inputs pass straight through (e.g. an opposition of 1.5 yields a
/// falsity of 1.5).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confidence {
    pub truth: f64,
    pub indeterminacy: f64,
    pub falsity: f64,
}

impl Confidence {
    /// Decompose `score` against independent evidence for the alternative (`support`, e.g. a
    /// reliability fraction) and against it (`opposition`, e.g. a risk fraction).
    ///
    /// - truth: `min(support, score)`
    /// - falsity: `max(opposition, 1 - score)`
    /// - indeterminacy: `|truth - falsity| * INDETERMINACY_DAMPING`
    pub fn derive(score: Normalized, support: f64, opposition: f64) -> Self {
        let score = score.as_f64();
        let truth = support.min(score);
        let falsity = opposition.max(1.0 - score);
        Self {
            truth,
            indeterminacy: (truth - falsity).abs() * INDETERMINACY_DAMPING,
            falsity,
        }
    }

    /// Signed summary `truth - falsity`, for display.
    pub fn crisp_score(&self) -> f64 {
        self.truth - self.falsity
    }
}

#[cfg(test)]
mod test {
    use proptest::{prop_assert, proptest};

    use super::{Confidence, INDETERMINACY_DAMPING};
    use crate::{num::assert_within, test::normalized, Normalized};

    #[test]
    fn certain_alternative() {
        let c = Confidence::derive(Normalized::new(0.9).unwrap(), 1.0, 0.0);
        assert_within(c.truth, 0.9, 1e-12);
        assert_within(c.falsity, 0.1, 1e-12);
        assert_within(c.indeterminacy, 0.08, 1e-12);
        assert_within(c.crisp_score(), 0.8, 1e-12);
    }

    #[test]
    fn evidence_dominates_score() {
        let c = Confidence::derive(Normalized::new(0.95).unwrap(), 0.6, 0.3);
        assert_eq!(c.truth, 0.6);
        assert_eq!(c.falsity, 0.3);
        assert_within(c.indeterminacy, 0.03, 1e-12);
    }

    #[test]
    fn out_of_range_evidence_passes_through() {
        let c = Confidence::derive(Normalized::ONE, 1.2, 1.5);
        assert_eq!(c.truth, 1.0);
        assert_eq!(c.falsity, 1.5);
        assert_within(c.crisp_score(), -0.5, 1e-12);
    }

    proptest! {
        #[test]
        fn components_within_bounds(
            score in normalized(),
            support in normalized(),
            opposition in normalized(),
        ) {
            let c = Confidence::derive(score, support.as_f64(), opposition.as_f64());
            prop_assert!((0.0..=1.0).contains(&c.truth));
            prop_assert!((0.0..=1.0).contains(&c.falsity));
            prop_assert!((0.0..=1.0).contains(&c.indeterminacy));
            prop_assert!(c.truth <= score.as_f64());
            prop_assert!(c.falsity >= 1.0 - score.as_f64());
            prop_assert!(
                (c.indeterminacy - (c.truth - c.falsity).abs() * INDETERMINACY_DAMPING).abs()
                    < 1e-15
            );
        }
    }
}
