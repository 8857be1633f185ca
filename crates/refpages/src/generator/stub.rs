use std::path::{Component, Path};

use crate::config::{ModuleId, ProjectConfig};

/// A generated reference page for a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubDocument {
  pub title: String,
  /// Path relative to the docs directory, always `/` separated.
  pub target_path: String,
  pub body: String,
  /// "Edit this page" target, relative to the docs directory.
  pub edit_path: String,
}

impl StubDocument {
  pub fn render(module: &ModuleId, project: &ProjectConfig, namespace: &str) -> Self {
    let module_path = module.as_path();
    let target_path = format!("{}.md", join_posix(project.doc_root(), &module_path));
    let edit_path = format!("../{}.py", join_posix(project.source_root(), &module_path));

    Self {
      title: module.to_string(),
      target_path,
      body: render_body(module.as_str(), &module.qualified(namespace)),
      edit_path,
    }
  }
}

fn render_body(title: &str, qualified: &str) -> String {
  format!(
    r"# `{title}`

::: {qualified}
    options:
      show_root_heading: true
      show_source: true
      members_order: source
"
  )
}

/// Joins a relative `/` path onto `base`, rendering the result with `/`
/// separators regardless of platform.
pub(crate) fn join_posix(base: &Path, relative: &str) -> String {
  let base = posix(base);
  if base.is_empty() {
    relative.to_string()
  } else if base.ends_with('/') {
    format!("{base}{relative}")
  } else {
    format!("{base}/{relative}")
  }
}

/// Renders `path` with `/` separators, dropping `.` components and repeated
/// separators. A path made only of `.` renders as the empty string.
pub(crate) fn posix(path: &Path) -> String {
  let mut rendered = String::new();
  for component in path.components() {
    match component {
      Component::CurDir => continue,
      Component::RootDir => {
        rendered.push('/');
        continue;
      }
      _ => {}
    }
    if !rendered.is_empty() && !rendered.ends_with('/') {
      rendered.push('/');
    }
    rendered.push_str(&component.as_os_str().to_string_lossy().replace('\\', "/"));
  }
  rendered
}

#[cfg(test)]
mod tests {
  use super::*;

  fn osa_project() -> ProjectConfig {
    ProjectConfig::builder()
      .source_root("osa/src")
      .doc_root("osa/reference")
      .build()
  }

  #[test]
  fn test_render_exact_template() {
    let module = ModuleId::parse("api.main").unwrap();
    let stub = StubDocument::render(&module, &osa_project(), "src");

    assert_eq!(stub.title, "api.main");
    assert_eq!(stub.target_path, "osa/reference/api/main.md");
    assert_eq!(stub.edit_path, "../osa/src/api/main.py");
    assert_eq!(
      stub.body,
      "# `api.main`\n\n::: src.api.main\n    options:\n      show_root_heading: true\n      show_source: true\n      members_order: source\n"
    );
  }

  #[test]
  fn test_render_deeply_nested_module() {
    let module = ModuleId::parse("core.services.llm").unwrap();
    let stub = StubDocument::render(&module, &osa_project(), "src");

    assert_eq!(stub.target_path, "osa/reference/core/services/llm.md");
    assert_eq!(stub.edit_path, "../osa/src/core/services/llm.py");
    assert!(stub.body.starts_with("# `core.services.llm`\n"));
    assert!(stub.body.contains("\n::: src.core.services.llm\n"));
  }

  #[test]
  fn test_render_without_namespace() {
    let module = ModuleId::parse("tools.hed").unwrap();
    let stub = StubDocument::render(&module, &osa_project(), "");
    assert!(stub.body.contains("\n::: tools.hed\n"));
  }

  #[test]
  fn test_join_posix() {
    assert_eq!(join_posix(Path::new("osa/reference/"), "api/main"), "osa/reference/api/main");
    assert_eq!(join_posix(Path::new(""), "api/main"), "api/main");
    assert_eq!(join_posix(Path::new("."), "api/main"), "api/main");
    assert_eq!(join_posix(Path::new("docs\\ref"), "x"), "docs/ref/x");
  }

  #[test]
  fn test_posix_drops_current_dir_and_repeated_separators() {
    assert_eq!(posix(Path::new("./osa//reference")), "osa/reference");
    assert_eq!(posix(Path::new("osa/./src/")), "osa/src");
    assert_eq!(posix(Path::new("./")), "");
    assert_eq!(posix(Path::new("/abs/docs")), "/abs/docs");
    assert_eq!(join_posix(Path::new("/"), "api/main"), "/api/main");
    assert_eq!(join_posix(Path::new("./osa//reference"), "api/main"), "osa/reference/api/main");
  }
}
