// src/presentation.rs
use std::io::Write;

use keyword_census_domain::DirectoryNode;
use keyword_census_shared_kernel::{Keyword, Result};
use keyword_census_usecase::CensusOutput;
use serde::Serialize;

use crate::config::OutputFormat;

const PATH_WIDTH: usize = 31;

/// Writes `output` to `out` in the requested format.
///
/// # Errors
///
/// Fails when writing to `out` or encoding JSON fails.
pub fn render<W: Write>(out: &mut W, output: &CensusOutput, format: OutputFormat, depth: Option<usize>) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, &output.root, depth),
        OutputFormat::Json => write_json(out, output, depth),
    }
}

/// One two-line block per directory, each parent before its children.
fn write_text<W: Write>(out: &mut W, root: &DirectoryNode, depth: Option<usize>) -> Result<()> {
    for (level, node) in root.pre_order() {
        if depth.is_some_and(|max| level > max) {
            continue;
        }
        let path = node.path().to_string_lossy();
        let report = &node.report;
        writeln!(out, "{path:>width$}", width = PATH_WIDTH)?;
        write!(out, "{:>8} bytes", report.size)?;
        for keyword in Keyword::ALL {
            write!(out, "\t{:>3} {keyword}", report.tally.get(keyword))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    root: DirectoryNode,
    skipped: &'a [keyword_census_usecase::SkippedFile],
}

fn write_json<W: Write>(out: &mut W, output: &CensusOutput, depth: Option<usize>) -> Result<()> {
    let document = JsonDocument { root: prune(&output.root, depth), skipped: &output.skipped };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

/// Copy of `node` without descendants below `depth`; reports keep their full totals.
fn prune(node: &DirectoryNode, depth: Option<usize>) -> DirectoryNode {
    let children = match depth {
        Some(0) => Vec::new(),
        _ => node.children.iter().map(|child| prune(child, depth.map(|d| d - 1))).collect(),
    };
    DirectoryNode { path: node.path.clone(), report: node.report, children }
}
