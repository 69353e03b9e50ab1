use std::path::{Path, PathBuf};

use packsmith::error::Error;
use packsmith::path::{resolve, to_resource_id};

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_resolve_full_path() {
    let root = Path::new("/out");
    let subdirs = segments(&["api", "greeting"]);
    let path = resolve(
        root,
        Some("my_pack"),
        Some("functions"),
        &subdirs,
        Some("hello.mcfunction"),
    )
    .unwrap();
    assert_eq!(
        path,
        PathBuf::from("/out/data/my_pack/functions/api/greeting/hello.mcfunction")
    );
}

#[test]
fn test_resolve_directory_path_without_file() {
    let root = Path::new("/out");
    let path = resolve(root, Some("my_pack"), Some("tags"), &[], None).unwrap();
    assert_eq!(path, PathBuf::from("/out/data/my_pack/tags"));
}

#[test]
fn test_resolve_requires_namespace() {
    let result = resolve(Path::new("/out"), None, Some("functions"), &[], None);
    match result {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Namespace not set")),
        other => panic!("Expected ConfigError, got {:?}", other.map(|p| p.display().to_string())),
    }
}

#[test]
fn test_resolve_requires_category() {
    let result = resolve(Path::new("/out"), Some("my_pack"), None, &[], None);
    match result {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("File category not set")),
        other => panic!("Expected ConfigError, got {:?}", other.map(|p| p.display().to_string())),
    }
}

#[test]
fn test_to_resource_id() {
    assert_eq!(to_resource_id("my_pack", &[], "hello"), "my_pack:hello");
    assert_eq!(
        to_resource_id("my_pack", &segments(&["api", "greeting"]), "hello"),
        "my_pack:api/greeting/hello"
    );
}

#[test]
fn test_to_resource_id_keeps_compound_segments() {
    assert_eq!(
        to_resource_id("my_pack", &segments(&["api/greeting"]), "hello"),
        "my_pack:api/greeting/hello"
    );
}
