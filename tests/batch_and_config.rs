//! Integration test: write a path list and a config file to a scratch
//! directory, load the config, and run the batch handler over the list.

use path_grammar::{
    load_grammar_config, save_grammar_config, Absoluteness, BatchEntry, BatchPathHandler,
    GrammarConfig, Operation, OutputFormat, PathGrammar,
};

const PATH_LIST: &str = "# paths to check\r\nC:\\a\\..\\b\r\n\r\n\\..\r\nrel/.\\x\r\n";

#[tokio::test]
async fn normalizes_every_listed_path() {
    let _ = env_logger::try_init();

    let temp_dir = tempfile::tempdir().expect("temp dir");
    let list = temp_dir.path().join("paths.txt");
    std::fs::write(&list, PATH_LIST).expect("write path list");

    let handler = BatchPathHandler::new(PathGrammar::legacy());
    let report = handler
        .process(list.to_str().unwrap(), Operation::Normalize, OutputFormat::Json)
        .await
        .expect("process")
        .expect("report");

    let entries: Vec<BatchEntry> = serde_json::from_str(&report).expect("report is json");
    assert_eq!(entries.len(), 3, "comments and blank lines are skipped");

    assert_eq!(entries[0].input, r"C:\a\..\b");
    assert_eq!(entries[0].output, Some(serde_json::json!(r"C:\b")));

    assert_eq!(entries[1].input, r"\..");
    assert_eq!(entries[1].output, None);
    assert!(entries[1].error.is_some());

    assert_eq!(entries[2].output, Some(serde_json::json!(r"rel\x")));
}

#[tokio::test]
async fn writes_yaml_report_next_to_input() {
    let _ = env_logger::try_init();

    let temp_dir = tempfile::tempdir().expect("temp dir");
    let list = temp_dir.path().join("paths.txt");
    std::fs::write(&list, "C:\\tmp\\file.txt\n\\\\server\\share\n").expect("write path list");

    let handler = BatchPathHandler::default();
    let written = handler
        .write_report(list.to_str().unwrap(), Operation::Basename, OutputFormat::Yaml)
        .await
        .expect("write report")
        .expect("output path");

    assert!(written.ends_with("paths.report.yaml"));
    let yaml = std::fs::read_to_string(&written).expect("read report");
    let entries: Vec<BatchEntry> = serde_yaml::from_str(&yaml).expect("report is yaml");
    assert_eq!(entries[0].output, Some(serde_json::json!("file.txt")));
    assert_eq!(entries[1].output, Some(serde_json::json!("share")));
}

#[tokio::test]
async fn directory_is_not_a_path_list() {
    let _ = env_logger::try_init();

    let temp_dir = tempfile::tempdir().expect("temp dir");
    let report = BatchPathHandler::default()
        .process(
            temp_dir.path().to_str().unwrap(),
            Operation::Drive,
            OutputFormat::Json,
        )
        .await
        .expect("process");
    assert!(report.is_none());
}

#[tokio::test]
async fn config_round_trips_and_selects_policy() {
    let _ = env_logger::try_init();

    let temp_dir = tempfile::tempdir().expect("temp dir");
    assert!(load_grammar_config(temp_dir.path()).await.is_none());

    let config = GrammarConfig {
        absoluteness: Absoluteness::Structural,
        format: OutputFormat::Yaml,
    };
    save_grammar_config(temp_dir.path(), &config)
        .await
        .expect("save config");

    let loaded = load_grammar_config(temp_dir.path())
        .await
        .expect("config present");
    assert_eq!(loaded, config);
    assert!(PathGrammar::from(&loaded).is_absolute(r"\\host:1\share"));
}

#[tokio::test]
async fn malformed_config_is_ignored() {
    let _ = env_logger::try_init();

    let temp_dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(temp_dir.path().join(".pathgrammar.json"), "{ not json").expect("write");
    assert!(load_grammar_config(temp_dir.path()).await.is_none());
}
