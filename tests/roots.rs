mod common;

use common::TestWorkspace;
use smartci_lsp::config::Layout;
use smartci_lsp::roots::{find_application_roots, project_root};

#[test]
fn test_common_root_first_then_alphabetical() {
    let ws = TestWorkspace::new();
    for dir in ["appx", "app", "app_common"] {
        ws.create_dir(dir);
    }

    let roots = find_application_roots(ws.root(), &Layout::default());
    assert_eq!(roots.project_root, ws.root());
    assert_eq!(roots.app_dirs, vec!["app_common", "app", "appx"]);
}

#[test]
fn test_only_prefixed_directories_are_roots() {
    let ws = TestWorkspace::new();
    ws.create_dir("app_admin");
    ws.create_dir("system");
    ws.create_dir("Application");
    ws.create_php_file("app_config.php", "<?php");

    let roots = find_application_roots(ws.root(), &Layout::default());
    assert_eq!(roots.app_dirs, vec!["app_admin"]);
}

#[test]
fn test_subproject_becomes_project_root() {
    let ws = TestWorkspace::new();
    ws.create_dir("CI3/app");
    ws.create_dir("app_outside");

    let roots = find_application_roots(ws.root(), &Layout::default());
    assert_eq!(roots.project_root, ws.path("CI3"));
    assert_eq!(roots.app_dirs, vec!["app"]);
}

#[test]
fn test_empty_project_root_falls_back_to_defaults() {
    let ws = TestWorkspace::new();
    let roots = find_application_roots(ws.root(), &Layout::default());
    assert_eq!(roots.app_dirs, vec!["app_common", "app"]);
}

#[test]
fn test_missing_project_root_falls_back_to_defaults() {
    let ws = TestWorkspace::new();
    let missing = ws.path("does/not/exist");

    let roots = find_application_roots(&missing, &Layout::default());
    assert_eq!(roots.project_root, missing);
    assert_eq!(roots.app_dirs, vec!["app_common", "app"]);
}

#[test]
fn test_custom_layout() {
    let ws = TestWorkspace::new();
    ws.create_dir("legacy/site_main");
    ws.create_dir("legacy/site_shared");
    ws.create_dir("legacy/app");

    let layout = Layout {
        subproject_dir: "legacy".to_string(),
        app_prefix: "site".to_string(),
        common_root: "site_shared".to_string(),
        fallback_roots: vec!["site".to_string()],
        models_dir: "models".to_string(),
    };
    assert_eq!(project_root(ws.root(), &layout), ws.path("legacy"));

    let roots = find_application_roots(ws.root(), &layout);
    assert_eq!(roots.app_dirs, vec!["site_shared", "site_main"]);
}
