use std::cell::Cell;
use std::path::PathBuf;

use vtree_core::dependency::{ArtifactCoordinate, Scope};
use vtree_core::manifest::Manifest;
use vtree_core::node::DependencyNode;
use vtree_core::project::Project;
use vtree_resolver::resolver::{build_dependency_graph, ResolutionError, ResolutionRequest};

fn project(extra: &str) -> Project {
    let manifest = Manifest::parse_toml(&format!(
        "[project]\ngroup = \"com.example\"\nname = \"app\"\nversion = \"1.0\"\n{extra}"
    ))
    .unwrap();
    Project {
        manifest,
        root_dir: PathBuf::from("/project"),
    }
}

#[test]
fn single_request_delegates_to_resolver() {
    let p = project("");
    let resolver = |p: &Project| -> Result<DependencyNode, ResolutionError> {
        Ok(DependencyNode::new(p.manifest.coordinate(), Scope::Compile))
    };
    let request = ResolutionRequest::for_project(&p);
    assert!(matches!(request, ResolutionRequest::Single { .. }));
    let root = build_dependency_graph(&resolver, &request).unwrap();
    assert_eq!(root.to_string(), "com.example:app:jar:1.0:compile");
}

#[test]
fn resolver_errors_pass_through() {
    let p = project("");
    let resolver = |_: &Project| -> Result<DependencyNode, ResolutionError> {
        Err(ResolutionError::Unresolved {
            unresolved: vec![ArtifactCoordinate::new("com.example", "missing", "9.9")],
        })
    };
    let err = build_dependency_graph(&resolver, &ResolutionRequest::Single { project: &p })
        .unwrap_err();
    assert!(err.to_string().contains("com.example:missing:jar:9.9"));
}

#[test]
fn reactor_request_is_always_unsupported() {
    let p = project("[workspace]\nmembers = [\"core\", \"web\"]\n");
    let calls = Cell::new(0);
    let resolver = |p: &Project| -> Result<DependencyNode, ResolutionError> {
        calls.set(calls.get() + 1);
        Ok(DependencyNode::new(p.manifest.coordinate(), Scope::Compile))
    };
    let request = ResolutionRequest::for_project(&p);
    assert_eq!(request.project().name(), "app");
    let err = build_dependency_graph(&resolver, &request).unwrap_err();
    match err {
        ResolutionError::ReactorUnsupported { members } => {
            assert_eq!(members, vec!["core", "web"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(calls.get(), 0, "resolver must not be consulted");
}
