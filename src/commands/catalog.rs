//! Catalog listing commands

use std::path::Path;

use stacks::config::LibraryConfig;
use stacks::core::models::Genre;
use stacks::output::{BookListResult, OutputMode, PatronInfo, PatronListResult};

/// List books from the seed catalog
pub fn books(
    config_path: &Path,
    only_out: bool,
    genre: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let genre: Option<Genre> =
        genre.map(str::parse).transpose().map_err(|e: String| anyhow::anyhow!(e))?;
    let library = LibraryConfig::load_from(config_path)?.build_library()?;

    BookListResult::from_library(&library, only_out, genre).render(mode);
    Ok(())
}

/// List patrons from the seed catalog
pub fn patrons(config_path: &Path, only_owing: bool, mode: OutputMode) -> anyhow::Result<()> {
    let library = LibraryConfig::load_from(config_path)?.build_library()?;

    let patrons = if only_owing {
        library.patrons_with_fees().into_iter().map(PatronInfo::from).collect()
    } else {
        library.patrons().iter().map(PatronInfo::from).collect()
    };
    PatronListResult { patrons }.render(mode);
    Ok(())
}
