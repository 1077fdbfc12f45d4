/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

const AS_OF: &str = "2024-06-01";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Create a working directory holding a copy of the sample snapshot.
fn create_test_workspace(dir: &Path) {
    fs::copy(
        fixtures_path().join("sample-fleet.json"),
        dir.join("fleet.json"),
    )
    .unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn prediction_ids(stdout: &[u8]) -> Vec<String> {
    let report: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    report["predictions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["requirementId"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_uses_default_fleet_file() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"eng-mag\""));
    }

    #[test]
    fn test_auto_discovery_applies_format_and_fleet() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::copy(
            fixtures_path().join("sample-fleet.json"),
            dir.path().join("data/hangar.json"),
        )
        .unwrap();
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "fleet: data/hangar.json\nformat: markdown\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("# Maintenance Forecast Report"));
    }

    #[test]
    fn test_auto_discovery_applies_action_filter() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "actions:\n  - Procure\n",
        );

        let output = cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "-q"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(prediction_ids(&output.stdout), vec!["eng-tbo"]);
    }

    #[test]
    fn test_auto_discovery_fail_on_immediate() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "fail_on_immediate: true\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(1);
    }

    #[test]
    fn test_auto_discovery_applies_to_maintenance_commands() {
        let dir = TempDir::new().unwrap();
        fs::copy(
            fixtures_path().join("sample-fleet.json"),
            dir.path().join("hangar.json"),
        )
        .unwrap();
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "fleet: hangar.json\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["remove", "--component", "cmp4"])
            .assert()
            .code(0);

        let content = fs::read_to_string(dir.path().join("hangar.json")).unwrap();
        assert!(!content.contains("cmp4"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "format: markdown\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "--format", "json"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("{"));
    }

    #[test]
    fn test_cli_actions_override_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "actions:\n  - Procure\n",
        );

        let output = cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "-q", "--action", "immediate"])
            .output()
            .unwrap();

        assert_eq!(prediction_ids(&output.stdout), vec!["eng-mag", "elt-expiry"]);
    }

    #[test]
    fn test_cli_within_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(&dir.path().join("skyguard.config.yml"), "within_days: 3\n");

        let output = cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "-q", "--within", "10"])
            .output()
            .unwrap();

        assert_eq!(
            prediction_ids(&output.stdout),
            vec!["eng-mag", "elt-expiry", "eng-tbo"]
        );
    }

    #[test]
    fn test_cli_fleet_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "fleet: missing.json\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "-f", "fleet.json"])
            .assert()
            .code(0);
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: md\n");

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "--config"])
            .arg(&config_path)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("## Fleet Summary"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "-c", "nonexistent.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// Validation and Warning Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_action_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "actions:\n  - Someday\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("actions[0] 'Someday'"));
    }

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(&dir.path().join("skyguard.config.yml"), "format: pdf\n");

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config: format"));
    }

    #[test]
    fn test_invalid_yaml_in_config() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "format: [[[broken",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_field_warning_on_stderr() {
        let dir = TempDir::new().unwrap();
        create_test_workspace(dir.path());
        write_config(
            &dir.path().join("skyguard.config.yml"),
            "format: json\nexclude_packages:\n  - pip\n",
        );

        cargo_bin_cmd!("skyguard")
            .current_dir(dir.path())
            .args(["forecast", "--as-of", AS_OF, "--quiet"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'exclude_packages' will be ignored",
            ));
    }
}
