//! Scoring model properties.
//!
//! - Scores are finite and non-negative for well-formed, non-negative inputs
//! - Saturation bounds each keyword's contribution by its weight
//! - Raising a field boost never lowers a score when the evidence is non-negative

use crate::common::{bm25f_vector, span_vector};
use fieldtune::{Bm25f, Document, ScoringModel, SpanModel};
use proptest::prelude::*;

fn doc(features: Vec<f64>) -> Document {
    Document::new(features, 0.0, "d")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: 0 <= score <= Σ H(i), since every saturation term is below 1.
    #[test]
    fn prop_bm25f_bounded_by_weights(features in bm25f_vector(3, 2)) {
        let model = Bm25f::with_fields(2);
        let weight_sum: f64 = features[1..4].iter().sum();
        let score = model.evaluate(&doc(features)).unwrap();
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
        prop_assert!(score <= weight_sum + 1e-9);
    }

    #[test]
    fn prop_span_bounded_by_weights(features in span_vector(2, 2)) {
        let model = SpanModel::with_fields(2);
        let weight_sum: f64 = features[2..4].iter().sum();
        let score = model.evaluate(&doc(features)).unwrap();
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
        prop_assert!(score <= weight_sum + 1e-9);
    }

    /// Property: boost(1) up means score up (or equal).
    #[test]
    fn prop_bm25f_boost_monotone(features in bm25f_vector(2, 2), extra in 0.0f64..5.0) {
        let model = Bm25f::with_fields(2);
        let base = model.parameters().to_vec();
        let mut boosted = base.clone();
        boosted[3] += extra;
        let d = doc(features);
        let low = model.score_with(&base, &d).unwrap();
        let high = model.score_with(&boosted, &d).unwrap();
        prop_assert!(high >= low - 1e-12);
    }

    /// Property: an uninitialized model scores like one sized for the document.
    #[test]
    fn prop_uninitialized_matches_defaults(features in span_vector(2, 3)) {
        let d = doc(features);
        let fresh = SpanModel::new().evaluate(&d).unwrap();
        let sized = SpanModel::with_fields(3).evaluate(&d).unwrap();
        prop_assert_eq!(fresh, sized);
    }
}
