use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use refpages::{config::ProjectsConfig, generator::StubDocument};

use crate::ui::{Colors, cli::ListCommand, colors::ToTableColor, term_width};

pub async fn list_projects(command: ListCommand, colors: &Colors) -> anyhow::Result<()> {
  let projects = super::load_projects(command.project.config.as_deref()).await?;
  let table = build_table(&projects, &command.project.root, colors, term_width());
  println!("{table}");
  Ok(())
}

fn build_table(projects: &ProjectsConfig, root: &Path, colors: &Colors, width: u16) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(width);

  let mut header = Row::new();
  for title in ["PROJECT", "MODULE", "PAGE", "SOURCE"] {
    header.add_cell(Cell::new(title).fg(colors.label().to_table()));
  }
  table.set_header(header);

  for (name, project) in projects.projects() {
    let source_exists = root.join(project.source_root()).exists();
    let (status, status_color) = if source_exists {
      ("found", colors.success())
    } else {
      ("missing", colors.accent())
    };

    for module in project.modules() {
      let stub = StubDocument::render(module, project, projects.namespace());
      let mut row = Row::new();
      row.add_cell(Cell::new(name).fg(colors.value().to_table()).add_attribute(Attribute::Bold));
      row.add_cell(Cell::new(module).fg(colors.primary().to_table()));
      row.add_cell(Cell::new(&stub.target_path).fg(colors.muted().to_table()));
      row.add_cell(Cell::new(status).fg(status_color.to_table()));
      table.add_row(row);
    }
  }

  table
}
