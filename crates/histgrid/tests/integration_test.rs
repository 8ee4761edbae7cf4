//! Integration tests for the histgrid command line

use clap::Parser;
use histgrid::{App, AppError, Cli};
use histgrid_common::test_utils::{config_fixtures, data_fixtures};
use histgrid_common::HistGridError;
use std::path::{Path, PathBuf};

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.csv"), data_fixtures::breast_cancer_csv()).unwrap();
        std::fs::write(dir.path().join("config.yaml"), config_fixtures::minimal_config_yaml())
            .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn app(&self, extra: &[&str]) -> Result<App, AppError> {
        let input = self.path("data.csv");
        let config = self.path("config.yaml");
        let output = self.path("results/histograms.png");
        let mut args = vec![
            "histgrid".to_string(),
            "split".to_string(),
            "--input".to_string(),
            input.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
            "--labels".to_string(),
            "0 - benign".to_string(),
            "--labels".to_string(),
            "1 - malignant".to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        App::from_cli(Cli::try_parse_from(args).unwrap())
    }
}

#[test]
fn test_config_file_and_cli_precedence() {
    let ws = Workspace::new();
    let app = ws.app(&["--figure-tag", "7"]).unwrap();

    // bins comes from the file, the tag from the command line.
    assert_eq!(app.config().histogram.bins, 8);
    assert_eq!(app.config().histogram.figure_tag, "7");
    assert_eq!(
        Path::new(&app.config().figure.output_path),
        ws.path("results/histograms.png")
    );
}

#[test]
fn test_invalid_alpha_rejected_at_startup() {
    let ws = Workspace::new();
    let err = ws.app(&["--alpha", "1.5"]).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_split_renders_every_numeric_feature() {
    let ws = Workspace::new();
    let app = ws
        .app(&["--columns", "clump_thickness,unif_size,unif_shape,bare_nuclei,id"])
        .unwrap();

    let figure = app.run().unwrap_or_else(|err| panic!("render failed: {err:?}"));

    assert_eq!(figure.subplot_count(), 5);
    assert_eq!(figure.layout.dimension(), 3);
    assert!(ws.path("results/histograms.png").exists());
    assert_eq!(
        histgrid::app::summary(&figure),
        "Rendered 5 histogram subplot(s) on a 3x3 grid as figure 1"
    );
}

#[test]
fn test_default_columns_skip_class_column() {
    let ws = Workspace::new();
    let app = ws.app(&["--describe"]).unwrap();

    let figure = app.run().unwrap_or_else(|err| panic!("render failed: {err:?}"));

    let columns: Vec<&str> = figure.subplots.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(
        columns,
        vec!["id", "clump_thickness", "unif_size", "unif_shape", "bare_nuclei"]
    );

    let description = app.describe(&figure).unwrap().unwrap();
    assert!(description.contains("position_code: 331"));
    assert!(description.contains("0 - benign"));
}

#[test]
fn test_missing_column_writes_nothing() {
    let ws = Workspace::new();
    let app = ws.app(&["--columns", "unif_size,mitoses"]).unwrap();

    let err = app.run().unwrap_err();
    match err {
        AppError::Library(HistGridError::MissingColumn { column, .. }) => {
            assert_eq!(column, "mitoses");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.path("results/histograms.png").exists());
}

#[test]
fn test_three_labels_rejected() {
    let ws = Workspace::new();
    let app = ws.app(&["--labels", "2 - unknown"]).unwrap();

    let err = app.run().unwrap_err();
    assert!(matches!(
        err,
        AppError::Library(HistGridError::LabelCount { expected: 2, actual: 3 })
    ));
}

#[test]
fn test_pair_missing_file_is_data_error() {
    let ws = Workspace::new();
    let cli = Cli::try_parse_from([
        "histgrid",
        "pair",
        "--negative",
        ws.path("absent_zero.csv").to_str().unwrap(),
        "--positive",
        ws.path("absent_one.csv").to_str().unwrap(),
        "--config",
        ws.path("config.yaml").to_str().unwrap(),
        "-l",
        "a",
        "-l",
        "b",
    ])
    .unwrap();

    let err = App::from_cli(cli).unwrap().run().unwrap_err();
    assert!(matches!(err, AppError::Library(HistGridError::Data { .. })));
}
