use vtree_core::dependency::{ArtifactCoordinate, Scope};
use vtree_core::node::DependencyNode;

#[test]
fn builder_preserves_child_order() {
    let root = DependencyNode::new(ArtifactCoordinate::new("g", "root", "1"), Scope::Compile)
        .with_children(["c", "a", "b"].iter().map(|name| {
            DependencyNode::new(ArtifactCoordinate::new("g", name, "1"), Scope::Compile)
        }));
    let names: Vec<&str> = root
        .children()
        .iter()
        .map(|c| c.artifact().artifact_id.as_str())
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn json_shape_is_nested() {
    let root = DependencyNode::new(ArtifactCoordinate::new("g", "root", "1"), Scope::Compile)
        .with_child(
            DependencyNode::new(ArtifactCoordinate::new("g", "opt", "2"), Scope::Runtime)
                .optional(true),
        );
    let value = serde_json::to_value(&root).unwrap();
    assert_eq!(value["artifact"]["group"], "g");
    assert_eq!(value["artifact"]["type"], "jar");
    assert_eq!(value["scope"], "compile");
    assert!(value.get("optional").is_none());
    assert_eq!(value["children"][0]["optional"], true);
    assert_eq!(value["children"][0]["scope"], "runtime");
}

#[test]
fn omitted_flag_is_serialized_only_when_set() {
    let root = DependencyNode::new(ArtifactCoordinate::new("g", "root", "1"), Scope::Compile)
        .with_child(
            DependencyNode::new(ArtifactCoordinate::new("g", "dup", "1"), Scope::Compile)
                .omitted(true),
        );
    assert!(root.children()[0].is_omitted());
    let value = serde_json::to_value(&root).unwrap();
    assert!(value.get("omitted").is_none());
    assert_eq!(value["children"][0]["omitted"], true);
}
