//! Navigation tree rendered as a literate-nav `SUMMARY.md`.
//!
//! Entries are keyed by a sequence of titles. Each key creates (or reuses) one
//! node per title, so `api.main` and `api.config` share a single `api` section.
//! Sibling order is first-insertion order and never changes when a node's
//! link is replaced.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const MARKDOWN_ESCAPE_CHARS: &[char] = &['!', '#', '(', ')', '*', '+', '-', '[', '\\', ']', '_', '`', '{', '}'];

/// Characters left untouched in link targets, in addition to ASCII alphanumerics.
const LINK_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'_')
  .remove(b'.')
  .remove(b'-')
  .remove(b'~')
  .remove(b'/');

const INDENT: &str = "    ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationTree {
  root: NavNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NavNode {
  link: Option<String>,
  children: IndexMap<String, NavNode>,
}

/// A flattened, depth-first view of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem<'a> {
  pub level: usize,
  pub title: &'a str,
  pub link: Option<&'a str>,
}

impl NavigationTree {
  /// Sets the link for the node addressed by `keys`, creating parent sections
  /// as needed. Returns the link it replaced, if any. An empty key is ignored.
  pub fn insert<'k>(&mut self, keys: impl IntoIterator<Item = &'k str>, link: impl Into<String>) -> Option<String> {
    let mut keys = keys.into_iter().peekable();
    keys.peek()?;

    let mut node = &mut self.root;
    for key in keys {
      node = node.children.entry(key.to_string()).or_default();
    }
    node.link.replace(link.into())
  }

  pub fn get<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Option<&str> {
    let mut node = &self.root;
    for key in keys {
      node = node.children.get(key)?;
    }
    node.link.as_deref()
  }

  pub fn is_empty(&self) -> bool {
    self.root.children.is_empty()
  }

  /// Number of nodes carrying a link.
  pub fn len(&self) -> usize {
    self.items().iter().filter(|item| item.link.is_some()).count()
  }

  pub fn items(&self) -> Vec<NavItem<'_>> {
    let mut items = Vec::new();
    collect_items(&self.root, 0, &mut items);
    items
  }

  pub fn build_literate_nav(&self) -> String {
    self.items().iter().map(render_item).collect()
  }
}

fn collect_items<'a>(node: &'a NavNode, level: usize, items: &mut Vec<NavItem<'a>>) {
  for (title, child) in &node.children {
    items.push(NavItem {
      level,
      title,
      link: child.link.as_deref(),
    });
    collect_items(child, level + 1, items);
  }
}

fn render_item(item: &NavItem<'_>) -> String {
  let mut label = String::with_capacity(item.title.len() + 1);
  if item.title.starts_with(MARKDOWN_ESCAPE_CHARS) {
    label.push('\\');
  }
  label.push_str(item.title);

  let entry = match item.link {
    Some(link) => format!("[{label}]({})", utf8_percent_encode(link, LINK_ENCODE_SET)),
    None => label,
  };
  format!("{}* {entry}\n", INDENT.repeat(item.level))
}
