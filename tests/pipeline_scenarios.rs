//! End-to-end scenarios for the analysis pipeline.

use std::collections::HashMap;

use relish::frequency::frequency_after_merge;
use relish::pipeline::run_analysis;
use relish::recommend::recommend_top3;
use relish::schema::{normalize, RawTable, ReviewRecord};
use relish::sentiment::sentiment_score;
use relish::similarity::select_top_by_cosine;
use relish::vocabulary::{build_vocabulary, Attribute, Vocabulary};

fn sample_records() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord::new("Joe's Diner", "Great food and friendly service"),
        ReviewRecord::new("Joe's Diner", "Dirty tables, rude staff"),
        ReviewRecord::new("Cafe X", "Clean and fast service"),
    ]
}

fn sample_table() -> RawTable {
    RawTable::new(
        vec!["restaurant".into(), "review".into()],
        sample_records()
            .into_iter()
            .map(|r| vec![r.restaurant, r.review])
            .collect(),
    )
}

#[test]
fn frequency_buckets_sample_reviews() {
    let rows = frequency_after_merge(&sample_records(), &Vocabulary::default());

    let service = rows
        .iter()
        .find(|r| r.attribute == Attribute::Service && r.word == "service")
        .expect("'service' keyword should be counted");
    assert_eq!(service.count, 2);

    for (word, attribute) in [
        ("friendly", Attribute::Service),
        ("staff", Attribute::Service),
        ("rude", Attribute::Service),
        ("clean", Attribute::Cleanliness),
        ("dirty", Attribute::Cleanliness),
    ] {
        let row = rows
            .iter()
            .find(|r| r.word == word)
            .unwrap_or_else(|| panic!("'{word}' should be counted"));
        assert_eq!(row.attribute, attribute, "'{word}' bucketed wrongly");
    }
}

#[test]
fn frequency_rows_satisfy_invariants() {
    let rows = frequency_after_merge(&sample_records(), &Vocabulary::default());

    assert!(rows.iter().all(|r| r.count > 0));

    for attribute in Attribute::ALL {
        let counts: Vec<u64> = rows
            .iter()
            .filter(|r| r.attribute == attribute)
            .map(|r| r.count)
            .collect();
        if counts.is_empty() {
            continue;
        }
        let total: u64 = counts.iter().sum();
        assert!(rows
            .iter()
            .filter(|r| r.attribute == attribute)
            .all(|r| r.attribute_total == total));
    }
}

#[test]
fn sentiment_signs_match_review_tone() {
    assert!(sentiment_score("Great food and friendly service") > 0.0);
    assert!(sentiment_score("Dirty tables, rude staff") < 0.0);
}

#[test]
fn top_one_returns_single_best_match() {
    let result = select_top_by_cosine(&sample_records(), &Vocabulary::default(), 1).unwrap();

    assert_eq!(result.len(), 1);
    // Whatever won must score at least as high as every other review.
    let all = select_top_by_cosine(&sample_records(), &Vocabulary::default(), 3).unwrap();
    assert_eq!(result[0], all[0]);
}

#[test]
fn empty_override_list_keeps_service_defaults() {
    let mut overrides = HashMap::new();
    overrides.insert("service".to_string(), Vec::new());
    let vocabulary = build_vocabulary(Some(&overrides));

    assert_eq!(
        vocabulary.keywords(Attribute::Service),
        Vocabulary::default().keywords(Attribute::Service)
    );
}

#[test]
fn recommendation_uses_only_scored_subset() {
    // With top_n = 1 only the single most relevant review feeds the
    // recommendation, so at most one restaurant can appear.
    let scored = select_top_by_cosine(&sample_records(), &Vocabulary::default(), 1).unwrap();
    let rows = recommend_top3(&scored);

    assert_eq!(rows.len(), 1);
}

#[test]
fn full_report_from_raw_table() {
    let report = run_analysis(&sample_table(), None, 200).unwrap();

    assert_eq!(report.top_reviews.len(), 3);
    assert!(report.recommendations.len() <= 3);
    assert!(!report.frequency.is_empty());

    // Recommendations sorted non-increasing by average sentiment.
    for pair in report.recommendations.windows(2) {
        assert!(pair[0].avg_sentiment >= pair[1].avg_sentiment);
    }
}

#[test]
fn normalize_is_a_fixed_point() {
    let once = normalize(&sample_table()).unwrap();
    let round_trip = RawTable::new(
        vec!["restaurant".into(), "review".into()],
        once.iter()
            .map(|r| vec![r.restaurant.clone(), r.review.clone()])
            .collect(),
    );
    let twice = normalize(&round_trip).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn stages_return_fresh_values() {
    let records = sample_records();
    let before = records.clone();
    let vocabulary = Vocabulary::default();

    let _ = frequency_after_merge(&records, &vocabulary);
    let _ = select_top_by_cosine(&records, &vocabulary, 2).unwrap();

    assert_eq!(records, before);
}
