//! Tests for the generate pipeline.

use super::*;
use crate::cli::ExtractorDirArgs;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::ScaffoldError;
use crate::promote::EXTRACTOR_SOURCE;
use crate::test_support::{DirGuard, create_superproject};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CONFIG: &str = r#"
extractor_name: Canopy Cover
version: "1.2"
description: Computes canopy cover
author_name: Jane Doe
author_email: jane@example.org
repository: https://example.org/canopy.git
"#;

const TEMPLATE: &str = "\
FROM agdrone/drone-base-image:1.2
MAINTAINER placeholder
ENV submodule_home \"\"
ENV RABBITMQ_EXCHANGE=\"terra\" \\
    RABBITMQ_QUEUE=\"terra.dronepipeline.placeholder\" \\
    MAIN_SCRIPT=\"extractor.py\"
";

/// Answers every submodule status query with empty output.
struct NotNested;

impl SubmoduleStatus for NotNested {
    fn submodule_status(&self, _repo_dir: &Path, _target: &Path) -> Result<String> {
        Ok(String::new())
    }
}

/// `<tmp>/parent/canopy` populated with configuration, template and extractor source.
fn extractor_layout(config: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("parent").join("canopy");
    fs::create_dir_all(&dir).unwrap();
    populate(&dir, config);
    (temp_dir, dir)
}

fn populate(dir: &Path, config: &str) {
    fs::write(dir.join(DEFAULT_CONFIG_FILE), config).unwrap();
    fs::write(dir.join(DOCKERFILE_TEMPLATE), TEMPLATE).unwrap();
    fs::write(dir.join(EXTRACTOR_SOURCE), "print('extract')\n").unwrap();
}

fn args(dir: Option<&Path>, settings: &[&str]) -> GenerateArgs {
    GenerateArgs {
        location: ExtractorDirArgs {
            dir: dir.map(Path::to_path_buf),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
        },
        settings: settings.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_generate_standalone_extractor() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);

    let outcome = run_generate(&args(Some(&dir), &[]), &NotNested).unwrap();

    assert!(outcome.promotion.is_none());

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest["name"], "Canopy Cover");
    assert_eq!(manifest["author"], "Jane Doe <jane@example.org>");

    let dockerfile = fs::read_to_string(dir.join(DOCKERFILE)).unwrap();
    assert!(dockerfile.contains("MAINTAINER Jane Doe <jane@example.org>\n"));
    assert!(dockerfile.contains("ENV submodule_home \"\"\n"));
    assert!(dockerfile.contains("    RABBITMQ_QUEUE=\"terra.dronepipeline.canopy_cover\" \\\n"));

    assert!(!dir.parent().unwrap().join(MANIFEST_FILE).exists());
}

#[test]
fn test_generate_with_submodule_setting_promotes_files() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);
    let parent = dir.parent().unwrap().to_path_buf();

    let outcome = run_generate(&args(Some(&dir), &["submodule=./canopy/"]), &NotNested).unwrap();

    match outcome.promotion {
        Some(PromotionOutcome::Promoted(report)) => {
            assert_eq!(report.copied.len(), 2);
        }
        other => panic!("expected promotion, got {other:?}"),
    }

    let dockerfile = fs::read_to_string(dir.join(DOCKERFILE)).unwrap();
    assert!(dockerfile.contains("ENV submodule_home \"./canopy/\"\n"));
    assert_eq!(
        fs::read_to_string(parent.join(MANIFEST_FILE)).unwrap(),
        fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()
    );
    assert!(parent.join(EXTRACTOR_SOURCE).exists());
}

#[test]
fn test_failed_promotion_is_soft() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);
    fs::remove_file(dir.join(EXTRACTOR_SOURCE)).unwrap();
    let parent = dir.parent().unwrap().to_path_buf();

    let outcome = run_generate(&args(Some(&dir), &["submodule=./canopy/"]), &NotNested).unwrap();

    assert!(matches!(
        outcome.promotion,
        Some(PromotionOutcome::RolledBack(_))
    ));
    assert!(!parent.join(MANIFEST_FILE).exists());
    assert!(dir.join(MANIFEST_FILE).exists());
    assert!(dir.join(DOCKERFILE).exists());
}

#[test]
fn test_missing_fields_abort_before_any_output() {
    let (_temp_dir, dir) = extractor_layout("extractor_name: Canopy Cover\n");

    let err = run_generate(&args(Some(&dir), &[]), &NotNested).unwrap_err();

    assert!(matches!(err, ScaffoldError::MissingFields(_)));
    assert!(!dir.join(MANIFEST_FILE).exists());
    assert!(!dir.join(DOCKERFILE).exists());
}

#[test]
fn test_missing_template_keeps_manifest() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);
    fs::remove_file(dir.join(DOCKERFILE_TEMPLATE)).unwrap();

    let err = run_generate(&args(Some(&dir), &[]), &NotNested).unwrap_err();

    assert!(matches!(err, ScaffoldError::UserError(_)));
    assert!(dir.join(MANIFEST_FILE).exists());
    assert!(!dir.join(DOCKERFILE).exists());
}

#[test]
fn test_empty_submodule_setting_is_usage_error() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);

    let err = run_generate(&args(Some(&dir), &["submodule="]), &NotNested).unwrap_err();

    assert!(matches!(err, ScaffoldError::UserError(_)));
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert!(!dir.join(MANIFEST_FILE).exists());
}

#[test]
fn test_missing_configuration_is_user_error() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);
    fs::remove_file(dir.join(DEFAULT_CONFIG_FILE)).unwrap();

    let err = run_generate(&args(Some(&dir), &[]), &NotNested).unwrap_err();
    assert!(matches!(err, ScaffoldError::UserError(_)));
}

#[test]
#[serial]
fn test_defaults_to_current_directory() {
    let (_temp_dir, dir) = extractor_layout(CONFIG);
    let _guard = DirGuard::new(&dir);

    run_generate(&args(None, &[]), &NotNested).unwrap();

    assert!(dir.join(MANIFEST_FILE).exists());
    assert!(dir.join(DOCKERFILE).exists());
}

#[test]
fn test_generate_inside_git_submodule() {
    let project = create_superproject("canopy");
    populate(project.submodule_dir(), CONFIG);

    let outcome = run_generate(&args(Some(project.submodule_dir()), &[]), &GitCli).unwrap();

    assert!(matches!(
        outcome.promotion,
        Some(PromotionOutcome::Promoted(_))
    ));
    assert!(project.root().join(MANIFEST_FILE).exists());
    assert!(project.root().join(EXTRACTOR_SOURCE).exists());

    let dockerfile = fs::read_to_string(project.submodule_dir().join(DOCKERFILE)).unwrap();
    assert!(dockerfile.contains("ENV submodule_home \"./canopy/\"\n"));
}
