//! Subcommand implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use xptview_xpt::{LibraryInfo, XptFile, parse_library_info, parse_xpt};

use crate::cli::{DumpArgs, InspectArgs};
use crate::render;

/// Render dataset summaries, schemas, and row previews.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let (file, info) = load(&args.file)?;

    if let Some(name) = &args.dataset {
        let dataset = file
            .dataset(name)
            .with_context(|| format!("dataset {name} not found in {}", file.path))?;
        render::print_dataset(dataset, args.rows, args.schema_only);
        return Ok(());
    }

    render::print_file_summary(&file, &info);
    for dataset in &file.datasets {
        println!();
        render::print_dataset(dataset, args.rows, args.schema_only);
    }
    Ok(())
}

/// Emit the decoded file as the JSON boundary payload.
pub fn run_dump(args: &DumpArgs) -> Result<()> {
    let (file, _info) = load(&args.file)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&file)?
    } else {
        serde_json::to_string(&file)?
    };
    println!("{json}");
    Ok(())
}

/// Read the file's bytes once, then run the pure decoder over them.
///
/// The byte content decides whether this is a transport file; the extension
/// is not trusted.
fn load(path: &Path) -> Result<(XptFile, LibraryInfo)> {
    let data =
        fs::read(path).with_context(|| format!("unable to read file: {}", path.display()))?;
    debug!(bytes = data.len(), path = %path.display(), "read transport file");

    let info = parse_library_info(&data)
        .with_context(|| format!("unable to parse SAS XPORT file: {}", path.display()))?;
    let file = parse_xpt(&data, path.display().to_string())
        .with_context(|| format!("unable to parse SAS XPORT file: {}", path.display()))?;
    debug!(datasets = file.datasets.len(), "decoded transport file");

    Ok((file, info))
}
