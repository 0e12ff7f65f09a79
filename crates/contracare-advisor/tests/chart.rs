use contracare_advisor::chart::chart_series;
use contracare_core::{Method, MethodScores, ReferenceRow};

fn row(scores: [f64; Method::COUNT]) -> ReferenceRow {
    ReferenceRow::new("Diabetes", "Type 1", MethodScores::new(scores))
}

#[test]
fn no_row_has_an_empty_series() {
    let series = chart_series(None);
    assert!(series.is_empty());
    assert!(series.bars(40).is_empty());
}

#[test]
fn series_follows_method_order() {
    let row = row([1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    let series = chart_series(Some(&row));
    let points: Vec<(Method, f64)> = series.points.iter().map(|p| (p.method, p.score)).collect();
    assert_eq!(points, row.scores.iter().collect::<Vec<_>>());
}

#[test]
fn bars_scale_to_category_four() {
    let row = row([1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    let lengths: Vec<usize> = chart_series(Some(&row))
        .bar_lengths(40)
        .into_iter()
        .map(|(_, len)| len)
        .collect();
    assert_eq!(lengths, vec![10, 20, 30, 40, 10, 20]);
}

#[test]
fn non_finite_negative_and_oversized_scores_are_bounded() {
    let row = row([f64::NAN, -1.0, 0.0, 9.0, f64::INFINITY, 2.0]);
    let lengths: Vec<usize> = chart_series(Some(&row))
        .bar_lengths(8)
        .into_iter()
        .map(|(_, len)| len)
        .collect();
    assert_eq!(lengths, vec![0, 0, 0, 8, 0, 4]);
}

#[test]
fn bar_rows_are_labelled_and_aligned() {
    let row = row([1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    let bars = chart_series(Some(&row)).bars(4);
    assert_eq!(bars.len(), Method::COUNT);
    assert_eq!(bars[0], "Cu-IUD  | █ 1.0");
    assert_eq!(bars[3], "DMPA    | ████ 4.0");
}
