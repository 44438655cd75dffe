use std::path::Path;

use tempfile::TempDir;
use vtree_core::dependency::{ArtifactCoordinate, Scope};
use vtree_core::node::DependencyNode;
use vtree_core::project::Project;
use vtree_ops::ops_tree::{tree, TreeOptions};
use vtree_ops::output::{OutputError, OutputTarget};
use vtree_resolver::lockfile::LockfileResolver;
use vtree_resolver::resolver::ResolutionError;
use vtree_resolver::tree::TreeFormat;

fn scratch_project(dir: &Path, extra: &str) -> Project {
    std::fs::write(
        dir.join("Vtree.toml"),
        format!("[project]\ngroup = \"com.example\"\nname = \"app\"\nversion = \"1.0\"\n{extra}"),
    )
    .unwrap();
    Project::load(dir).unwrap()
}

fn app_with_lib(_: &Project) -> Result<DependencyNode, ResolutionError> {
    Ok(
        DependencyNode::new(ArtifactCoordinate::new("com.example", "app", "1.0"), Scope::Compile)
            .with_child(DependencyNode::new(
                ArtifactCoordinate::new("com.example", "lib", "2.0"),
                Scope::Compile,
            )),
    )
}

fn missing(_: &Project) -> Result<DependencyNode, ResolutionError> {
    Err(ResolutionError::Unresolved {
        unresolved: vec![ArtifactCoordinate::new("com.example", "missing", "9.9")],
    })
}

#[test]
fn writes_tree_to_default_location() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "");

    let report = tree(&project, &app_with_lib, &TreeOptions::default());

    assert!(report.is_clean());
    let path = tmp.path().join("target").join("tree.txt");
    assert_eq!(report.target, OutputTarget::File(path.clone()));
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        written,
        "com.example:app:jar:1.0:compile\n└── com.example:lib:jar:2.0:compile\n"
    );
    assert_eq!(written, report.rendered);
}

#[test]
fn resolution_failure_still_writes_empty_output() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "");

    let report = tree(&project, &missing, &TreeOptions::default());

    assert!(report.root.is_none());
    let err = report.resolution_error.as_ref().unwrap();
    assert_eq!(err.unresolved()[0].to_string(), "com.example:missing:jar:9.9");
    assert!(report.output_error.is_none());
    assert_eq!(report.rendered, "");
    let written = std::fs::read_to_string(tmp.path().join("target").join("tree.txt")).unwrap();
    assert_eq!(written, "");
}

#[test]
fn unwritable_destination_is_reported_not_raised() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "");
    let opts = TreeOptions {
        output_file: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };

    let report = tree(&project, &app_with_lib, &opts);

    assert!(report.resolution_error.is_none());
    assert!(matches!(report.output_error, Some(OutputError::Write { .. })));
    assert!(report.rendered.contains("com.example:lib:jar:2.0:compile"));
    assert!(!report.is_clean());
}

#[test]
fn explicit_output_file_beats_manifest() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "[tree]\noutput-file = \"from-manifest.txt\"\n");
    let opts = TreeOptions {
        output_file: Some("reports/deps.txt".into()),
        ..Default::default()
    };

    tree(&project, &app_with_lib, &opts);

    assert!(tmp.path().join("reports").join("deps.txt").is_file());
    assert!(!tmp.path().join("from-manifest.txt").exists());
}

#[test]
fn json_format_and_depth() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "");
    let opts = TreeOptions {
        format: TreeFormat::Json,
        depth: Some(0),
        ..Default::default()
    };

    let report = tree(&project, &app_with_lib, &opts);

    assert!(report.rendered.trim_start().starts_with('{'));
    assert!(!report.rendered.contains("\"lib\""));
}

#[test]
fn reactor_project_is_reported_unsupported() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(tmp.path(), "[workspace]\nmembers = [\"core\"]\n");

    let report = tree(&project, &app_with_lib, &TreeOptions::default());

    assert!(matches!(
        report.resolution_error,
        Some(ResolutionError::ReactorUnsupported { .. })
    ));
    assert!(tmp.path().join("target").join("tree.txt").is_file());
}

#[test]
fn lockfile_resolver_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let project = scratch_project(
        tmp.path(),
        "[[dependencies]]\ncoordinate = \"com.example:lib:2.0\"\n",
    );
    std::fs::write(
        tmp.path().join("Vtree.lock"),
        "[[package]]\ngroup = \"com.example\"\nname = \"lib\"\nversion = \"2.0\"\n",
    )
    .unwrap();
    let resolver = LockfileResolver::for_project(&project).unwrap();

    let report = tree(&project, &resolver, &TreeOptions::default());

    assert!(report.is_clean());
    assert_eq!(report.rendered.lines().count(), 2);
}
