//! End-to-end matching: catalogue rows in, ranked shortlists out.

use pulsar_catalog::query::{CatalogueIndex, MatchParams, MatchScorer};
use pulsar_core::{Candidate, Row};

const EPSILON: f64 = 1e-9;

fn rows(json: &str) -> Vec<Row> {
    serde_json::from_str(json).unwrap()
}

fn candidates(json: &str) -> Vec<Candidate> {
    rows(json).into_iter().map(Candidate::from_row).collect()
}

#[test]
fn three_candidate_scenario() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[{"name": "PSR A", "period": 0.01, "dm": 100.0}]"#,
    ));
    // periods 0.01, 0.02, 0.05 s; only the first has a DM within 5%
    let cands = candidates(
        r#"[
            {"png_file": "c1.png", "f0_new": 100.0, "dm_new": 103.0},
            {"png_file": "c2.png", "f0_new": 50.0, "dm_new": 140.0},
            {"png_file": "c3.png", "f0_new": 20.0, "dm_new": 60.0}
        ]"#,
    );

    let results = MatchScorer::new(&index).score_all(&cands);
    assert_eq!(results[0].len(), 1);
    assert_eq!(results[0][0].entry.name(), "PSR A");
    assert!((results[0][0].ratio_cp - 1.0).abs() < EPSILON);
    assert!(results[0][0].dm_close);
    assert!(results[1].is_empty());
    assert!(results[2].is_empty());
}

#[test]
fn scenario_with_second_admissible_entry() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[
            {"name": "PSR A", "period": 0.01, "dm": 100.0},
            {"name": "PSR B", "period": 0.0099, "dm": 140.0}
        ]"#,
    ));
    let cands = candidates(r#"[{"f0_new": 50.0, "dm_new": 140.0}]"#);
    let matches = MatchScorer::new(&index).shortlist(&cands[0]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.name(), "PSR B");
}

#[test]
fn harmonic_outranks_off_harmonic() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[
            {"name": "off", "period": 0.008695652173913044, "dm": 50.0},
            {"name": "half", "period": 0.01, "dm": 50.0}
        ]"#,
    ));
    let cands = candidates(r#"[{"f0_new": 50.0, "dm_new": 50.0}]"#);
    let matches = MatchScorer::new(&index).shortlist(&cands[0]);
    assert_eq!(matches[0].entry.name(), "half");
    assert_eq!(matches[0].best_harmonic, 2.0);
    assert!(matches[0].harmonic_distance < 1e-9);
    assert!(matches[0].period_close);
    assert_eq!(matches[1].entry.name(), "off");
    assert!(matches[0].score < matches[1].score);
}

#[test]
fn dm_ratio_outside_band_never_returned() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[{"name": "exact", "period": 0.01, "dm": 100.0}]"#,
    ));
    let cands = candidates(r#"[{"f0_new": 100.0, "dm_new": 130.0}]"#);
    assert!(MatchScorer::new(&index).shortlist(&cands[0]).is_empty());
}

#[test]
fn raw_values_used_when_optimised_missing() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[{"name": "A", "period": 0.01, "dm": 100.0}]"#,
    ));
    let cands = candidates(
        r#"[{"f0_old": "100.0", "f0_new": 0, "dm_old": "100", "dm_new": ""}]"#,
    );
    let matches = MatchScorer::new(&index).shortlist(&cands[0]);
    assert_eq!(matches.len(), 1);
    assert!(matches[0].score < EPSILON);
}

#[test]
fn identifier_positions_drive_angular_cut() {
    // J0835-4510 decodes to roughly (128.75, -45.17)
    let index = CatalogueIndex::from_rows(rows(
        r#"[{"JNAME": "J0835-4510", "P0": 0.089328, "DM": 67.97}]"#,
    ));
    let near = candidates(
        r#"[{"f0_new": 11.19470, "dm_new": 68.0, "ra": "08:36:00", "dec": "-45:00:00"}]"#,
    );
    let far = candidates(
        r#"[{"f0_new": 11.19470, "dm_new": 68.0, "ra": "12:00:00", "dec": "-45:00:00"}]"#,
    );
    let scorer = MatchScorer::new(&index);

    let matches = scorer.shortlist(&near[0]);
    assert_eq!(matches.len(), 1);
    let sep = matches[0].angular_distance.unwrap();
    assert!(sep < 1.0);

    assert!(scorer.shortlist(&far[0]).is_empty());
}

#[test]
fn params_file_overrides() {
    let params: MatchParams =
        serde_json::from_str(r#"{"dm_ratio_max": 1.5, "max_results": 1}"#).unwrap();
    let index = CatalogueIndex::from_rows(rows(
        r#"[
            {"name": "A", "period": 0.01, "dm": 100.0},
            {"name": "B", "period": 0.01, "dm": 101.0}
        ]"#,
    ));
    let cands = candidates(r#"[{"f0_new": 100.0, "dm_new": 130.0}]"#);
    let matches = MatchScorer::with_params(&index, params).shortlist(&cands[0]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entry.name(), "B");
}

#[test]
fn malformed_catalogue_rows_do_not_fail_the_build() {
    let index = CatalogueIndex::from_rows(rows(
        r#"[
            {"name": "good", "period": 0.5, "dm": 10.0},
            {"name": "neg", "period": -0.5, "dm": 10.0},
            {"name": "zero dm", "period": 0.5, "dm": 0},
            {"period": 0.5, "dm": 10.0},
            {"name": "text", "period": "n/a", "dm": 10.0}
        ]"#,
    ));
    assert_eq!(index.len(), 1);
    assert_eq!(index.skipped(), 4);
}
