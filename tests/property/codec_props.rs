//! Codec rejection properties.
//!
//! A vector that is one value short or one value long never decodes; the
//! error names the problem instead of reading garbage.

use crate::common::{bm25f_vector, span_vector};
use fieldtune::{FeatureError, MultiFieldRecord, SpanRecord};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_multi_field_decodes_its_own_layout(k in 0usize..4, f in 1usize..4) {
        let features = vec![k as f64]
            .into_iter()
            .chain(std::iter::repeat(1.0).take(k + f * (k + 1)))
            .collect::<Vec<_>>();
        let record = MultiFieldRecord::decode_any(&features).unwrap();
        prop_assert_eq!(record.keywords(), k);
        prop_assert_eq!(record.fields(), f);
    }

    #[test]
    fn prop_multi_field_rejects_wrong_length(features in bm25f_vector(2, 2), extra in 1usize..3) {
        let mut longer = features.clone();
        longer.extend(std::iter::repeat(0.0).take(extra));
        prop_assert!(MultiFieldRecord::decode(&longer, 2).is_err());

        let shorter = &features[..features.len() - 1];
        prop_assert!(MultiFieldRecord::decode(shorter, 2).is_err());
    }

    #[test]
    fn prop_span_round_trips_counts(features in span_vector(2, 2)) {
        let record = SpanRecord::decode(&features).unwrap();
        prop_assert_eq!(record.keywords(), 2);
        prop_assert_eq!(record.fields(), 2);
    }

    #[test]
    fn prop_span_rejects_trailing_value(features in span_vector(2, 2), junk in -5.0f64..5.0) {
        let mut longer = features;
        longer.push(junk);
        let is_trailing = matches!(
            SpanRecord::decode(&longer),
            Err(FeatureError::TrailingValues { .. })
        );
        prop_assert!(is_trailing);
    }

    #[test]
    fn prop_span_rejects_truncation(features in span_vector(2, 2)) {
        let shorter = &features[..features.len() - 1];
        prop_assert!(SpanRecord::decode(shorter).is_err());
    }

    #[test]
    fn prop_fractional_count_rejected(k in 0.1f64..0.9) {
        let is_invalid = matches!(
            SpanRecord::decode(&[1.0 + k, 1.0]),
            Err(FeatureError::InvalidCount { slot: 1, .. })
        );
        prop_assert!(is_invalid);
    }
}
