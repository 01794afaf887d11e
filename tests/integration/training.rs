//! End-to-end training.

use crate::common::SATURATION_LETOR;
use fieldtune::{
    letor, rank, AscentConfig, Bm25f, CoordinateAscent, Error, FixedOrder, IntentAwareAp,
    MetricKind, ModelKind, ScoringModel, ShuffledOrder, SpanModel,
};

// ============================================================================
// BM25F
// ============================================================================

#[test]
fn test_k1_learned_below_default() {
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    let mut model = Bm25f::new();
    CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut FixedOrder::new(vec![0, 1, 2]))
        .unwrap();
    assert!(model.parameters()[0] < 1.2);
}

#[test]
fn test_boost_learned_above_default() {
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    let mut model = Bm25f::new();
    CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut FixedOrder::new(vec![2, 0, 1]))
        .unwrap();
    assert!(model.parameters()[2] > 1.0);
}

#[test]
fn test_b_learned_when_length_penalty_misleads() {
    // The non-relevant document's huge term frequency comes with a huge
    // length penalty, so stronger length normalization fixes the order.
    let text = "\
1 qid:0 1:2 2:1.0 3:1.0 4:1.0 5:1 6:1 #did=0
0 qid:0 1:2 2:1.0 3:1.0 4:10.0 5:0 6:100 #did=1
";
    let lists = letor::parse_lists(text).unwrap();
    let mut model = Bm25f::new();
    let outcome = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut FixedOrder::new(vec![1, 0, 2]))
        .unwrap();
    assert!(model.parameters()[1] > 0.75);
    assert_eq!(outcome.model.training_score, 1.0);
}

#[test]
fn test_trained_model_ranks_relevant_first() {
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    let mut model = Bm25f::new();
    CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(17))
        .unwrap();
    let ranked = rank(&lists[0], &model).unwrap();
    assert_eq!(ranked.entries[0].document.key, "did=0");
}

// ============================================================================
// SPAN
// ============================================================================

#[test]
fn test_span_model_learns_from_letor() {
    // Relevant document has a tight two-keyword span, the other a loose one.
    let text = "\
1 qid:7 1:1 2:1 3:1.0 4:1.0 5:1 6:2 7:3 #tight
0 qid:7 1:1 2:1 3:1.0 4:1.0 5:2 6:1 7:2 8:1 9:2 #loose
";
    let lists = letor::parse_lists(text).unwrap();
    let mut model = SpanModel::new();
    let outcome = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(4))
        .unwrap();
    assert_eq!(outcome.model.fields, 1);
    assert_eq!(outcome.model.keywords, 1);
    assert_eq!(outcome.model.training_score, 1.0);
}

fn train_span(text: &str, order: Vec<usize>) -> (SpanModel, f64) {
    let lists = letor::parse_lists(text).unwrap();
    let mut model = SpanModel::new();
    let outcome = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut FixedOrder::new(order))
        .unwrap();
    (model, outcome.model.training_score)
}

#[test]
fn test_span_k1_learned_below_default() {
    // Two keywords, one field. The relevant document has two moderate spans,
    // the other one weak and one strong span, which only wins under heavy
    // saturation.
    let text = "\
1 qid:0 1:2 2:1 3:1.0 4:1.0 5:1.0 6:1 7:2 8:10 9:1 10:2 11:10 #did=0
0 qid:0 1:2 2:1 3:1.0 4:1.0 5:1.0 6:1 7:1 8:10 9:1 10:5 11:10 #did=1
";
    let (model, score) = train_span(text, vec![0]);
    assert!(model.parameters()[0] < 0.4);
    assert_eq!(score, 1.0);
}

#[test]
fn test_span_boost_shifts_toward_second_field() {
    // One keyword, two fields. The non-relevant document's single strong span
    // sits in field 1, so field 1 must lose weight against field 2.
    let text = "\
1 qid:0 1:1 2:2 3:1.0 4:1.0 5:1.0 6:1 7:1 8:10 9:1 10:1 11:10 #did=0
0 qid:0 1:1 2:2 3:1.0 4:1.0 5:1.0 6:1 7:10 8:10 9:0 #did=1
";
    let (model, score) = train_span(text, vec![7, 8]);
    assert_eq!(model.boost_range(), 7..9);
    assert!(model.parameters()[7] < model.parameters()[8]);
    assert_eq!(score, 1.0);
}

#[test]
fn test_span_b_learned_below_default() {
    // The relevant document's stronger span comes with a length penalty of
    // 10, so length normalization has to weaken.
    let text = "\
1 qid:0 1:1 2:1 3:1.0 4:10.0 5:1 6:2 7:10 #did=0
0 qid:0 1:1 2:1 3:1.0 4:1.0 5:1 6:1 7:10 #did=1
";
    let (model, score) = train_span(text, vec![3]);
    assert_eq!(model.parameter_name(3), "b(1)");
    assert!(model.parameters()[3] < 0.3);
    assert_eq!(score, 1.0);
}

// ============================================================================
// VALIDATION, CONFIG, ERRORS
// ============================================================================

#[test]
fn test_validation_scored_separately() {
    let train = letor::parse_lists(SATURATION_LETOR).unwrap();
    let validation = letor::parse_lists(
        "\
0 qid:9 1:2 2:1.0 3:1.0 4:1.0 5:1 6:1
1 qid:9 1:2 2:1.0 3:1.0 4:1.0 5:0 6:100
",
    )
    .unwrap();
    let mut model = Bm25f::new();
    let outcome = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(
            &mut model,
            &train,
            Some(&validation),
            &IntentAwareAp,
            &mut FixedOrder::sequential(3),
        )
        .unwrap();
    // Tuned for the opposite preference, so validation drops to rank 2.
    assert_eq!(outcome.model.validation_score, Some(0.5));
}

#[test]
fn test_config_from_json_with_overrides() {
    let config: AscentConfig =
        serde_json::from_str(r#"{"restarts": 1, "max_iterations": 5, "tolerance": 0.01}"#).unwrap();
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    let mut model = Bm25f::new();
    let outcome = CoordinateAscent::new(config)
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(0))
        .unwrap();
    assert_eq!(outcome.restarts.len(), 1);
}

#[test]
fn test_invalid_config_rejected_before_training() {
    let err = CoordinateAscent::new(AscentConfig {
        tolerance: f64::NAN,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_mixed_layouts_fail_with_feature_error() {
    let text = "\
1 qid:0 1:1 2:1.0 3:1.0 4:7 #one-field
0 qid:0 1:1 2:1.0 3:1.0 4:7 5:1.0 6:3 #two-fields
";
    let lists = letor::parse_lists(text).unwrap();
    let mut model = Bm25f::new();
    let err = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(0))
        .unwrap_err();
    assert!(matches!(err, Error::Feature(_)));
}

#[test]
fn test_oversized_keyword_count_is_a_feature_error() {
    let lists = letor::parse_lists("1 qid:0 1:18446744073709551616 2:1\n").unwrap();
    let mut model = Bm25f::new();
    let err = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(0))
        .unwrap_err();
    assert!(matches!(err, Error::Feature(_)));
}

#[test]
fn test_models_and_metrics_built_by_name() {
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    for (model_name, metric_name) in [("bm25f", "MAPIA"), ("bm25f", "NDCG@5")] {
        let mut model = model_name.parse::<ModelKind>().unwrap().build();
        let metric = metric_name.parse::<MetricKind>().unwrap().build();
        let outcome = CoordinateAscent::new(AscentConfig::default())
            .unwrap()
            .learn(model.as_mut(), &lists, None, metric.as_ref(), &mut ShuffledOrder::seeded(1))
            .unwrap();
        assert_eq!(outcome.model.metric, metric_name);
        assert!(outcome.model.training_score > 0.0);
    }
}

#[test]
fn test_report_round_trips_through_json_file() {
    let lists = letor::parse_lists(SATURATION_LETOR).unwrap();
    let mut model = Bm25f::new();
    let outcome = CoordinateAscent::new(AscentConfig::default())
        .unwrap()
        .learn(&mut model, &lists, None, &IntentAwareAp, &mut ShuffledOrder::seeded(8))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    std::fs::write(&path, serde_json::to_string_pretty(&outcome).unwrap()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["model"]["model"], "BM25F");
    let names: Vec<&str> = json["model"]["named_parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["k1", "b(1)", "boost(1)"]);
    assert_eq!(json["restarts"].as_array().unwrap().len(), 5);
}
