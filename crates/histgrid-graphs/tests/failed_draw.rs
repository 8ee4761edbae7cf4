//! A drawing failure must leave the previous output file in place.
//!
//! Runs in its own test binary because it changes the process font
//! configuration.

#![cfg(target_os = "linux")]

use histgrid_common::test_utils::data_fixtures;
use histgrid_common::HistGridError;
use histgrid_graphs::{render, Dataset, RenderOptions};
use std::path::Path;

fn split() -> (Dataset, Dataset) {
    let split = Dataset::from_reader("data.csv", data_fixtures::breast_cancer_csv().as_bytes())
        .unwrap()
        .split_by_class("class")
        .unwrap();
    (split.negative, split.positive)
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_font_failure_keeps_previous_output() {
    let fonts = tempfile::tempdir().unwrap();
    let empty_fonts = fonts.path().join("none");
    std::fs::create_dir_all(&empty_fonts).unwrap();
    let fonts_conf = fonts.path().join("fonts.conf");
    std::fs::write(
        &fonts_conf,
        format!(
            "<?xml version=\"1.0\"?>\n<fontconfig><dir>{}</dir></fontconfig>\n",
            empty_fonts.display()
        ),
    )
    .unwrap();
    std::env::set_var("FONTCONFIG_FILE", &fonts_conf);

    let out = tempfile::tempdir().unwrap();
    let output = out.path().join("histograms.png");
    std::fs::write(&output, b"previous").unwrap();
    let (zero, one) = split();

    let err = render(
        &zero,
        &one,
        &["unif_size"],
        &data_fixtures::class_labels(),
        &RenderOptions::default()
            .with_size(300, 300)
            .with_output_path(&output),
    )
    .unwrap_err();

    assert!(matches!(err, HistGridError::Graph { .. }), "{err:?}");
    assert_eq!(std::fs::read(&output).unwrap(), b"previous");
    assert_eq!(dir_entries(out.path()), vec!["histograms.png"]);
}
