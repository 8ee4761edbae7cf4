//! Test utilities and shared fixtures for the histgrid workspace.
//!
//! Enabled with the `testing` feature so that integration tests in the
//! other crates can reuse them.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests with a debug filter.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "testing")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Tabular fixtures modelled on a binary tumour classification table.
pub mod data_fixtures {
    /// CSV with a `class` column and four numeric features.
    pub fn breast_cancer_csv() -> &'static str {
        concat!(
            "id,clump_thickness,unif_size,unif_shape,bare_nuclei,class\n",
            "1000025,5,1,1,1,0\n",
            "1002945,5,4,4,10,0\n",
            "1015425,3,1,1,2,0\n",
            "1016277,6,8,8,4,1\n",
            "1017023,4,1,1,1,0\n",
            "1017122,8,10,10,10,1\n",
            "1018099,1,1,1,10,0\n",
            "1018561,2,1,2,1,0\n",
            "1033078,2,1,1,1,0\n",
            "1035283,1,1,1,1,0\n",
            "1036172,2,1,1,1,0\n",
            "1041801,5,3,3,3,1\n",
            "1043999,1,1,1,3,0\n",
            "1044572,8,7,5,9,1\n",
            "1047630,7,4,6,1,1\n",
        )
    }

    /// Feature columns of [`breast_cancer_csv`], in file order.
    pub fn feature_columns() -> Vec<String> {
        ["clump_thickness", "unif_size", "unif_shape", "bare_nuclei"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// The two legend labels used throughout the tests.
    pub fn class_labels() -> Vec<String> {
        vec!["0 - benign".to_string(), "1 - malignant".to_string()]
    }
}

/// YAML configuration fixtures.
pub mod config_fixtures {
    /// A minimal configuration that only overrides the bin count.
    pub fn minimal_config_yaml() -> &'static str {
        "histogram:\n  bins: 8\n"
    }

    /// A configuration touching every section.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "figure:\n",
            "  width: 1200\n",
            "  height: 1200\n",
            "  background_color: \"#FFFFFF\"\n",
            "  title_font_size: 32\n",
            "  subplot_font_size: 16\n",
            "  output_path: \"out/histograms.png\"\n",
            "\n",
            "histogram:\n",
            "  figure_tag: \"2\"\n",
            "  alpha: 0.5\n",
            "  bins: 10\n",
            "  style:\n",
            "    colors: [\"#1F77B4\", \"#FF7F0E\"]\n",
            "    edge_color: \"#000000\"\n",
            "    line_width: 2\n",
            "    hist_type: step\n",
            "\n",
            "logging:\n",
            "  level: debug\n",
        )
    }
}
