//! Paths command handler.

use sumdoc_core::resolve_output_dir;

use crate::error::CliError;

/// Print the resolved output directory in `key = value` format.
pub fn execute(output_dir: Option<&str>) -> Result<(), CliError> {
    let resolved = resolve_output_dir(output_dir)?;
    println!("output_dir = {}", resolved.path.display());
    println!("source = {}", resolved.source);
    println!("exists = {}", resolved.path.is_dir());
    Ok(())
}
