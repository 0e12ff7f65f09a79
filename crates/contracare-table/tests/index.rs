use contracare_core::{Method, MethodScores, ReferenceRow};
use contracare_table::{NONE_SELECTED, ReferenceTable};

fn row(condition: &str, sub_condition: &str) -> ReferenceRow {
    ReferenceRow::new(
        condition,
        sub_condition,
        MethodScores::new([1.0; Method::COUNT]),
    )
}

fn table() -> ReferenceTable {
    ReferenceTable::from_rows(vec![
        row("Age", "Menarche to < 18 years"),
        row("Diabetes", "Type 1"),
        row("Smoking", "Age < 35"),
        row("Diabetes", "Type 2"),
        row("AGE", ">= 40 years"),
        row("Diabetes", "Type 1"),
        row("age", "18-39 years"),
    ])
}

#[test]
fn conditions_are_distinct_in_first_appearance_order() {
    assert_eq!(table().conditions(), vec!["Diabetes", "Smoking"]);
}

#[test]
fn age_is_hidden_in_any_case() {
    let table = table();
    let conditions = table.conditions();
    assert!(
        conditions
            .iter()
            .all(|c| !c.eq_ignore_ascii_case("age"))
    );
}

#[test]
fn sub_conditions_are_distinct_for_the_condition() {
    assert_eq!(table().sub_conditions("Diabetes"), vec!["Type 1", "Type 2"]);
}

#[test]
fn sub_conditions_match_condition_case_sensitively() {
    assert!(table().sub_conditions("diabetes").is_empty());
}

#[test]
fn hidden_condition_still_has_sub_conditions() {
    assert_eq!(table().sub_conditions("Age"), vec!["Menarche to < 18 years"]);
}

#[test]
fn unknown_condition_has_no_sub_conditions() {
    assert!(table().sub_conditions("Migraine").is_empty());
}

#[test]
fn unselected_condition_has_no_sub_conditions() {
    let table = table();
    assert!(table.sub_conditions(NONE_SELECTED).is_empty());
    assert!(table.sub_conditions("").is_empty());
}

#[test]
fn empty_table_has_no_conditions() {
    assert!(ReferenceTable::default().conditions().is_empty());
}
