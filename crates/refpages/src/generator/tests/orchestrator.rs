use super::support::{create_source_root, project, projects};
use crate::{
  config::ProjectsConfig,
  generator::{GenerationWarning, ReferenceGenerator},
};

const API_MAIN_STUB: &str = "# `api.main`\n\n::: src.api.main\n    options:\n      show_root_heading: true\n      show_source: true\n      members_order: source\n";

#[test]
fn test_single_module_scenario() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = projects(vec![("osa", project("osa/src", "osa/reference", &["api.main"]))]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.files.get("osa/reference/api/main.md"), Some(API_MAIN_STUB));
  assert_eq!(
    output.files.edit_path("osa/reference/api/main.md"),
    Some("../osa/src/api/main.py")
  );
  assert_eq!(output.summary_path, "reference/SUMMARY.md");
  assert_eq!(
    output.files.get("reference/SUMMARY.md"),
    Some("* api\n    * [main](osa/reference/api/main.md)\n")
  );
  assert_eq!(output.navigation.get(["api", "main"]), Some("osa/reference/api/main.md"));
  assert_eq!(output.stats.projects_processed, 1);
  assert_eq!(output.stats.stubs_generated, 1);
  assert_eq!(output.stats.nav_entries, 1);
  assert!(output.stats.warnings.is_empty());
}

#[test]
fn test_missing_source_root_skips_project() {
  let root = tempfile::tempdir().unwrap();
  let config = projects(vec![("osa", project("osa/src", "osa/reference", &["api.main", "cli.main"]))]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.files.paths().collect::<Vec<_>>(), vec!["reference/SUMMARY.md"]);
  assert_eq!(output.files.get("reference/SUMMARY.md"), Some(""));
  assert!(output.navigation.is_empty());
  assert_eq!(output.stats.projects_processed, 0);
  assert_eq!(output.stats.projects_skipped, 1);
  assert_eq!(output.stats.stubs_generated, 0);
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::MissingSourceRoot {
      project: "osa".to_string(),
      source_root: "osa/src".to_string(),
    }]
  );
}

#[test]
fn test_skipped_project_does_not_affect_others() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "web/src");
  let config = projects(vec![
    ("missing", project("missing/src", "missing/reference", &["api.main"])),
    ("web", project("web/src", "web/reference", &["views.home"])),
  ]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(
    output.files.paths().collect::<Vec<_>>(),
    vec!["web/reference/views/home.md", "reference/SUMMARY.md"]
  );
  assert_eq!(output.stats.projects_processed, 1);
  assert_eq!(output.stats.projects_skipped, 1);
  assert!(output.stats.warnings[0].is_skipped_item());
}

#[test]
fn test_output_follows_configuration_order() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "b/src");
  create_source_root(root.path(), "a/src");
  let config = projects(vec![
    ("b", project("b/src", "b/ref", &["zeta", "alpha"])),
    ("a", project("a/src", "a/ref", &["mid"])),
  ]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(
    output.files.paths().collect::<Vec<_>>(),
    vec!["b/ref/zeta.md", "b/ref/alpha.md", "a/ref/mid.md", "reference/SUMMARY.md"]
  );
  assert_eq!(
    output.files.get("reference/SUMMARY.md"),
    Some("* [zeta](b/ref/zeta.md)\n* [alpha](b/ref/alpha.md)\n* [mid](a/ref/mid.md)\n")
  );
}

#[test]
fn test_same_leaf_different_parents_stay_distinct() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "one/src");
  create_source_root(root.path(), "two/src");
  let config = projects(vec![
    ("one", project("one/src", "one/reference", &["api.main"])),
    ("two", project("two/src", "two/reference", &["cli.main"])),
  ]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.stats.nav_entries, 2);
  assert_eq!(output.navigation.get(["api", "main"]), Some("one/reference/api/main.md"));
  assert_eq!(output.navigation.get(["cli", "main"]), Some("two/reference/cli/main.md"));
  assert!(output.stats.warnings.is_empty());
}

#[test]
fn test_duplicate_identifier_across_projects_overwrites_nav_and_warns() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "one/src");
  create_source_root(root.path(), "two/src");
  let config = projects(vec![
    ("one", project("one/src", "one/reference", &["api.main", "api.config"])),
    ("two", project("two/src", "two/reference", &["api.main"])),
  ]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert!(output.files.get("one/reference/api/main.md").is_some());
  assert!(output.files.get("two/reference/api/main.md").is_some());
  assert_eq!(output.stats.stubs_generated, 3);
  assert_eq!(output.stats.nav_entries, 2);
  assert_eq!(
    output.files.get("reference/SUMMARY.md"),
    Some("* api\n    * [main](two/reference/api/main.md)\n    * [config](one/reference/api/config.md)\n")
  );
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::DuplicateNavigationEntry {
      project: "two".to_string(),
      module: "api.main".to_string(),
      previous: "one/reference/api/main.md".to_string(),
      replacement: "two/reference/api/main.md".to_string(),
    }]
  );
}

#[test]
fn test_duplicate_identifier_within_project_writes_once() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = projects(vec![("osa", project("osa/src", "osa/reference", &["api.main", "api.main"]))]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.files.len(), 2);
  assert_eq!(output.stats.stubs_generated, 2);
  assert_eq!(output.stats.nav_entries, 1);
  assert_eq!(output.stats.warnings.len(), 1);
}

#[test]
fn test_generation_is_deterministic() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = ProjectsConfig::builtin().unwrap();

  let first = ReferenceGenerator::new(&config, root.path()).generate();
  let second = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(first, second);
}

#[test]
fn test_builtin_project_layout() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = ProjectsConfig::builtin().unwrap();

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.stats.stubs_generated, 13);
  assert_eq!(output.files.len(), 14);
  assert_eq!(
    output.files.edit_path("osa/reference/core/services/llm.md"),
    Some("../osa/src/core/services/llm.py")
  );

  let summary = output.files.get("reference/SUMMARY.md").unwrap();
  let lines: Vec<_> = summary.lines().collect();
  assert_eq!(lines[0], "* api");
  assert_eq!(lines[1], "    * [main](osa/reference/api/main.md)");
  assert!(lines.contains(&"    * [hed_validation](osa/reference/tools/hed_validation.md)"));
  assert_eq!(lines[lines.len() - 3], "* core");
  assert_eq!(lines[lines.len() - 2], "    * services");
  assert_eq!(lines[lines.len() - 1], "        * [llm](osa/reference/core/services/llm.md)");
}

#[test]
fn test_custom_namespace_and_summary_path() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "pkg");
  let config = projects(vec![("lib", project("pkg", "api", &["io.reader"]))])
    .with_namespace("mylib")
    .with_summary_path("api/SUMMARY.md");

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.summary_path, "api/SUMMARY.md");
  assert!(output.files.get("api/io/reader.md").unwrap().contains("\n::: mylib.io.reader\n"));
  assert_eq!(output.files.edit_path("api/io/reader.md"), Some("../pkg/io/reader.py"));
  assert_eq!(
    output.files.get("api/SUMMARY.md"),
    Some("* io\n    * [reader](api/io/reader.md)\n")
  );
}

#[test]
fn test_configured_paths_are_normalized() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = projects(vec![("osa", project("./osa/src", "./osa//reference", &["api.main"]))]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(
    output.files.paths().collect::<Vec<_>>(),
    vec!["osa/reference/api/main.md", "reference/SUMMARY.md"]
  );
  assert_eq!(
    output.files.edit_path("osa/reference/api/main.md"),
    Some("../osa/src/api/main.py")
  );
  assert_eq!(
    output.files.get("reference/SUMMARY.md"),
    Some("* api\n    * [main](osa/reference/api/main.md)\n")
  );
}

#[test]
fn test_equivalent_doc_roots_share_staged_files() {
  let root = tempfile::tempdir().unwrap();
  create_source_root(root.path(), "osa/src");
  let config = projects(vec![
    ("plain", project("osa/src", "osa/reference", &["api.main"])),
    ("dotted", project("./osa/src", "./osa/reference/", &["api.main"])),
  ]);

  let output = ReferenceGenerator::new(&config, root.path()).generate();

  assert_eq!(output.files.len(), 2);
  assert_eq!(output.stats.stubs_generated, 2);
  assert_eq!(output.stats.nav_entries, 1);
  assert_eq!(
    output.stats.warnings,
    vec![GenerationWarning::DuplicateNavigationEntry {
      project: "dotted".to_string(),
      module: "api.main".to_string(),
      previous: "osa/reference/api/main.md".to_string(),
      replacement: "osa/reference/api/main.md".to_string(),
    }]
  );
}
