use std::io::Write;
use std::path::Path;

use contracare_core::Method;
use contracare_table::ReferenceTable;
use contracare_table::error::TableError;

const HEADER: &str = "Condition,Sub-Condition,Cu-IUD,LNG-IUD,Implant,DMPA,POP,CHC\n";

fn parse(csv: &str) -> Result<ReferenceTable, TableError> {
    ReferenceTable::from_reader(csv.as_bytes())
}

#[test]
fn loads_rows_in_source_order() {
    let csv = format!("{HEADER}Diabetes,Type 1,1,2,3,4,1,2\nSmoking,Age >= 35,1,1,1,1,1,4\n");
    let table = parse(&csv).unwrap();

    assert_eq!(table.len(), 2);
    let first = &table.rows()[0];
    assert_eq!(first.condition, "Diabetes");
    assert_eq!(first.sub_condition, "Type 1");
    assert_eq!(first.scores.get(Method::Dmpa), 4.0);
    assert_eq!(table.rows()[1].scores.get(Method::Chc), 4.0);
}

#[test]
fn header_only_file_is_an_empty_table() {
    let table = parse(HEADER).unwrap();
    assert!(table.is_empty());
}

#[test]
fn columns_are_found_by_name_not_position() {
    let csv = "CHC,POP,DMPA,Implant,LNG-IUD,Cu-IUD,Sub-Condition,Condition,Notes\n\
               2,1,4,3,2,1,Type 1,Diabetes,ignored\n";
    let table = parse(csv).unwrap();
    let scores: Vec<f64> = table.rows()[0].scores.iter().map(|(_, s)| s).collect();
    assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0, 1.0, 2.0]);
    assert_eq!(table.rows()[0].condition, "Diabetes");
}

#[test]
fn decimal_scores_are_kept_as_is() {
    let csv = format!("{HEADER}Obesity,BMI >= 30,1.0,1.0,1.0,1.0,1.0,2.0\n");
    let table = parse(&csv).unwrap();
    assert_eq!(table.rows()[0].scores.get(Method::Chc), 2.0);
}

#[test]
fn empty_score_cell_loads_as_missing() {
    let csv = format!("{HEADER}Diabetes,Type 1,1,,3,4,1,2\n");
    let table = parse(&csv).unwrap();
    assert!(table.rows()[0].scores.get(Method::LngIud).is_nan());
}

#[test]
fn missing_column_fails_the_load() {
    let csv = "Condition,Sub-Condition,Cu-IUD,LNG-IUD,Implant,DMPA,POP\nA,B,1,1,1,1,1\n";
    let err = parse(csv).unwrap_err();
    assert!(matches!(err, TableError::MissingColumn(name) if name == "CHC"));
}

#[test]
fn non_numeric_score_fails_the_whole_load() {
    let csv = format!("{HEADER}Diabetes,Type 1,1,2,3,4,1,2\nDiabetes,Type 2,1,2,three,4,1,2\n");
    let err = parse(&csv).unwrap_err();
    match err {
        TableError::MalformedScore {
            line,
            column,
            value,
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, "Implant");
            assert_eq!(value, "three");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_row_is_a_csv_error() {
    let csv = format!("{HEADER}Diabetes,Type 1,1,2,3\n");
    assert!(matches!(parse(&csv).unwrap_err(), TableError::Csv(_)));
}

#[test]
fn load_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{HEADER}Diabetes,Type 1,1,2,3,4,1,2\n").unwrap();

    let table = ReferenceTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = ReferenceTable::load(Path::new("/nonexistent/contraceptive_data.csv")).unwrap_err();
    assert!(matches!(err, TableError::Read { .. }));
    assert!(err.to_string().contains("contraceptive_data.csv"));
}
