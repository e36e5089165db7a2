//! Writing expression files to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ExpressionError, ExpressionResult};
use crate::table::ExpressionTable;

/// Write `table` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExpressionError::Io`] if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use autocrate_expressions::{ExpressionTable, write_expressions};
///
/// write_expressions(&ExpressionTable::new(), "crate.exp").unwrap();
/// ```
pub fn write_expressions<P: AsRef<Path>>(table: &ExpressionTable, path: P) -> ExpressionResult<()> {
    let path = path.as_ref();
    let text = table.render();

    let file = File::create(path).map_err(|e| ExpressionError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ExpressionError::io(path, e))?;

    info!(path = %path.display(), expressions = table.len(), "Wrote expression file");
    Ok(())
}
