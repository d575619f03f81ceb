//! Search the stub collections from the terminal.

use std::io::Write;

use cmt_core::Catalog;
use cmt_core::search::SearchQuery;

use super::CliError;

/// Print one line per hit, best score first.
pub fn run(out: &mut impl Write, text: &str, kinds: Option<&str>) -> Result<(), CliError> {
    let query = SearchQuery::parse(text, kinds)?;
    let hits = Catalog::stub().search(&query);
    tracing::debug!(total = hits.len(), "search complete");

    for hit in &hits {
        writeln!(
            out,
            "{:>3}  {:<9}  {:<8}  {}",
            hit.score,
            hit.kind.as_str(),
            hit.id,
            hit.description
        )?;
    }
    writeln!(out, "{} result(s)", hits.len())?;
    Ok(())
}
