use contracare_core::{Method, MethodScores, ReferenceRow};
use contracare_table::{NONE_SELECTED, ReferenceTable, is_unselected};

fn table() -> ReferenceTable {
    ReferenceTable::from_rows(vec![
        ReferenceRow::new(
            "Diabetes",
            "Type 1",
            MethodScores::new([1.0, 2.0, 3.0, 4.0, 1.0, 2.0]),
        ),
        ReferenceRow::new(
            "Diabetes",
            "Type 1",
            MethodScores::new([4.0; Method::COUNT]),
        ),
        ReferenceRow::new("Age", "Menarche to < 18 years", MethodScores::new([2.0; Method::COUNT])),
        ReferenceRow::new("None", "None", MethodScores::new([1.0; Method::COUNT])),
    ])
}

#[test]
fn first_matching_row_wins() {
    let table = table();
    let row = table.select_row("Diabetes", "Type 1").unwrap();
    assert_eq!(row.scores.get(Method::CuIud), 1.0);
}

#[test]
fn sentinel_short_circuits_regardless_of_contents() {
    let table = table();
    assert!(table.select_row(NONE_SELECTED, "Type 1").is_none());
    assert!(table.select_row("Diabetes", NONE_SELECTED).is_none());
    assert!(table.select_row(NONE_SELECTED, NONE_SELECTED).is_none());
    assert!(table.select_row("", "Type 1").is_none());
}

#[test]
fn lookup_is_exact() {
    let table = table();
    assert!(table.select_row("diabetes", "Type 1").is_none());
    assert!(table.select_row("Diabetes", " Type 1").is_none());
    assert!(table.select_row("Diabetes", "Type 3").is_none());
}

#[test]
fn hidden_condition_can_still_be_selected() {
    let table = table();
    let row = table.select_row("Age", "Menarche to < 18 years").unwrap();
    assert_eq!(row.scores.get(Method::Chc), 2.0);
}

#[test]
fn sentinel_detection() {
    assert!(is_unselected("None"));
    assert!(is_unselected(""));
    assert!(!is_unselected("none"));
    assert!(!is_unselected("Diabetes"));
}
