use serde_json::json;
use tempfile::TempDir;

use ultimate_crypto_toolkit::{
    load, save, Error, Outcome, Pipeline, PipelineConfig, PipelineState,
};

#[test]
fn json_in_csv_out() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.json");
    std::fs::write(
        &input,
        r#"[{"Name": "Ada", "City": "LONDON"}, {"Name": "Alan", "City": "Wilmslow"}]"#,
    )
    .unwrap();
    let output = dir.path().join("reports/people.csv");

    let mut pipeline = Pipeline::new(PipelineConfig::new().with_input(&input).with_output(&output));
    assert_eq!(pipeline.execute().unwrap(), Outcome::Saved(output.clone()));

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "name,city\nada,london\nalan,wilmslow\n"
    );
}

#[test]
fn csv_in_json_out() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rows.csv");
    std::fs::write(&input, "ID,Label\n1,First\n2,SECOND\n").unwrap();
    let output = dir.path().join("rows.json");

    let mut pipeline = Pipeline::new(PipelineConfig::new().with_input(&input).with_output(&output));
    assert!(pipeline.execute().unwrap().is_success());

    assert_eq!(
        load(&output).unwrap(),
        json!([{"id": "1", "label": "first"}, {"id": "2", "label": "second"}])
    );
}

#[test]
fn text_passes_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "Mixed Case Stays").unwrap();

    let mut pipeline = Pipeline::new(PipelineConfig::new().with_input(&input));
    assert_eq!(
        pipeline.execute().unwrap(),
        Outcome::Transformed(json!("Mixed Case Stays"))
    );
}

#[test]
fn single_object_to_text_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("one.json");
    save(&json!({"Key": "VALUE", "Count": 3}), &input).unwrap();
    let output = dir.path().join("one.out");

    let mut pipeline = Pipeline::new(PipelineConfig::new().with_input(&input).with_output(&output));
    pipeline.execute().unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        r#"{"key":"value","count":"3"}"#
    );
}

#[test]
fn missing_input_is_reported_as_invalid() {
    let mut pipeline = Pipeline::new(PipelineConfig::new().with_input("missing.file"));
    assert_eq!(pipeline.execute().unwrap(), Outcome::Invalid);
    assert!(!pipeline.execute().unwrap().is_success());
}

#[test]
fn unwritable_csv_payload_surfaces_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("single.json");
    std::fs::write(&input, r#"{"Only": "One"}"#).unwrap();

    let mut pipeline = Pipeline::new(
        PipelineConfig::new()
            .with_input(&input)
            .with_output(dir.path().join("out.csv")),
    );
    assert!(matches!(pipeline.execute(), Err(Error::UnsupportedPayload(_))));
    assert_eq!(pipeline.state(), PipelineState::Failed);
}
