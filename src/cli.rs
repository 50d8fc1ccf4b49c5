//! Command-line interface for the CSV editor
//!
//! Each subcommand maps to one user action on the table: show, new,
//! add, update, delete. This layer owns all file I/O; the core model
//! and codec never touch the filesystem.
//!
//! Row numbers are 1-indexed on the command line and converted to
//! 0-indexed internally.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use crate::csv;
use crate::model::{Row, TableModel};

/// A minimal CSV table editor
#[derive(Parser, Debug)]
#[command(name = "csved", version, about = "Edit CSV files from the command line")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the table as an aligned grid
    Show {
        /// CSV file to read
        file: PathBuf,

        /// Emit a JSON object {headers, rows} instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Start a new document with the given headers and no rows
    New {
        /// Comma-separated header names, e.g. "name,age,city"
        headers: String,

        /// File to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Append a row at the end of the table
    Add {
        /// CSV file to edit
        file: PathBuf,

        /// Cell value as HEADER=VALUE (repeatable); unset headers stay empty
        #[arg(short = 's', long = "set", value_name = "HEADER=VALUE")]
        sets: Vec<String>,

        /// Write here instead of rewriting FILE in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace row N wholesale (1-indexed)
    Update {
        /// CSV file to edit
        file: PathBuf,

        /// Row number to replace (1-indexed)
        row: usize,

        /// Cell value as HEADER=VALUE (repeatable); unset headers become empty
        #[arg(short = 's', long = "set", value_name = "HEADER=VALUE")]
        sets: Vec<String>,

        /// Write here instead of rewriting FILE in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete row N (1-indexed)
    Delete {
        /// CSV file to edit
        file: PathBuf,

        /// Row number to delete (1-indexed)
        row: usize,

        /// Write here instead of rewriting FILE in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute a parsed command
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Show { file, json } => {
            let model = load(&file)?;
            if json {
                let doc = serde_json::json!({
                    "headers": model.headers(),
                    "rows": model.rows(),
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                print!("{}", render_grid(&model));
            }
            Ok(())
        }
        Command::New { headers, output } => {
            let headers: Vec<String> = headers.split(',').map(str::to_string).collect();
            let model = TableModel::with_headers(headers);
            save(&model, &output)
        }
        Command::Add { file, sets, output } => {
            let mut model = load(&file)?;
            let draft = draft_from_sets(&sets)?;
            model.add_row(&draft)?;
            save(&model, output.as_deref().unwrap_or(&file))
        }
        Command::Update {
            file,
            row,
            sets,
            output,
        } => {
            let mut model = load(&file)?;
            let draft = draft_from_sets(&sets)?;
            let index = to_index(row)?;
            model
                .update_row(index, &draft)
                .with_context(|| format!("cannot update row {}", row))?;
            save(&model, output.as_deref().unwrap_or(&file))
        }
        Command::Delete { file, row, output } => {
            let mut model = load(&file)?;
            let index = to_index(row)?;
            model
                .delete_row(index)
                .with_context(|| format!("cannot delete row {}", row))?;
            save(&model, output.as_deref().unwrap_or(&file))
        }
    }
}

fn load(path: &Path) -> Result<TableModel> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let model =
        csv::decode(&text).with_context(|| format!("cannot decode {}", path.display()))?;
    tracing::debug!(
        rows = model.row_count(),
        columns = model.headers().len(),
        "decoded {}",
        path.display()
    );
    Ok(model)
}

fn save(model: &TableModel, path: &Path) -> Result<()> {
    let text = csv::encode(model);
    fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!(rows = model.row_count(), "wrote {}", path.display());
    Ok(())
}

/// Convert from 1-indexed (user input) to 0-indexed (internal)
fn to_index(row: usize) -> Result<usize> {
    if row == 0 {
        bail!("row numbers start at 1");
    }
    Ok(row - 1)
}

/// Build a draft row from repeated HEADER=VALUE arguments
fn draft_from_sets(sets: &[String]) -> Result<Row> {
    let mut draft = Row::new();
    for set in sets {
        let (header, value) = set
            .split_once('=')
            .with_context(|| format!("invalid --set '{}', expected HEADER=VALUE", set))?;
        draft.set(header, value);
    }
    Ok(draft)
}

const MIN_COLUMN_WIDTH: usize = 4;
const MAX_COLUMN_WIDTH: usize = 40;
/// Rows sampled when sizing columns; keeps `show` cheap on big files
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Render the table as an aligned text grid
pub fn render_grid(model: &TableModel) -> String {
    let headers = model.headers();
    if headers.is_empty() {
        return String::new();
    }

    let widths = column_widths(model);
    let mut out = String::new();

    push_line(&mut out, headers.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in model.rows() {
        push_line(&mut out, headers.iter().map(|h| row.get(h)), &widths);
    }

    out
}

/// Calculate column widths based on content
fn column_widths(model: &TableModel) -> Vec<usize> {
    let headers = model.headers();
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| h.chars().count().clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
        .collect();

    for row in model.rows().iter().take(WIDTH_SAMPLE_ROWS) {
        for (col, header) in headers.iter().enumerate() {
            let cell_width = row.get(header).chars().count();
            widths[col] = widths[col].max(cell_width).min(MAX_COLUMN_WIDTH);
        }
    }

    widths
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    for (col, cell) in cells.enumerate() {
        if col > 0 {
            out.push_str("  ");
        }
        let width = widths.get(col).copied().unwrap_or(MIN_COLUMN_WIDTH);
        let shown: String = cell.chars().take(width).collect();
        out.push_str(&shown);
        // Last column stays unpadded
        if col + 1 < widths.len() {
            for _ in shown.chars().count()..width {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_sets() {
        let sets = vec!["name=Alice".to_string(), "age=30".to_string()];
        let draft = draft_from_sets(&sets).unwrap();

        assert_eq!(draft.get("name"), "Alice");
        assert_eq!(draft.get("age"), "30");
    }

    #[test]
    fn test_draft_from_sets_keeps_equals_in_value() {
        let sets = vec!["formula=a=b".to_string()];
        let draft = draft_from_sets(&sets).unwrap();
        assert_eq!(draft.get("formula"), "a=b");
    }

    #[test]
    fn test_draft_from_sets_rejects_missing_equals() {
        let sets = vec!["noequals".to_string()];
        assert!(draft_from_sets(&sets).is_err());
    }

    #[test]
    fn test_to_index_is_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(7).unwrap(), 6);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn test_render_grid_alignment() {
        let model = csv::decode("a,b\n1,2").unwrap();
        assert_eq!(render_grid(&model), "a     b\n----  ----\n1     2\n");
    }

    #[test]
    fn test_render_grid_truncates_wide_cells() {
        let mut model = TableModel::with_headers(vec!["a".to_string()]);
        let long = "x".repeat(60);
        model.add_row(&Row::from_pairs([("a", long.as_str())])).unwrap();

        let grid = render_grid(&model);
        let cell_line = grid.lines().nth(2).unwrap();
        assert_eq!(cell_line.chars().count(), MAX_COLUMN_WIDTH);
    }

    #[test]
    fn test_render_grid_empty_model() {
        assert_eq!(render_grid(&TableModel::new()), "");
    }
}
