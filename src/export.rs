// File: src/export.rs
use crate::core::types::Segmentation;
use crate::error::ExportError;
use std::borrow::Cow;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// File name offered when the caller does not choose one.
pub const DEFAULT_CSV_NAME: &str = "verse_analysis.csv";

const HEADER: [&str; 3] = ["Index", "Syllable", "L/G"];
const LINE_END: &str = "\r\n";

/// Writes the `Index,Syllable,L/G` table, one 1-based row per syllable.
pub fn write_csv<W: Write>(segmentation: &Segmentation, mut writer: W) -> std::io::Result<()> {
    write_row(&mut writer, &HEADER)?;
    for (i, (syllable, weight)) in segmentation.iter().enumerate() {
        let index = (i + 1).to_string();
        let weight = weight.to_string();
        write_row(&mut writer, &[index.as_str(), syllable, weight.as_str()])?;
    }
    writer.flush()
}

pub fn to_csv_string(segmentation: &Segmentation) -> String {
    let mut buf = Vec::new();
    write_csv(segmentation, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Writes the table to `path` atomically: a temp file in the same
/// directory is filled first and then renamed over the target.
pub fn save_csv(segmentation: &Segmentation, path: &Path) -> Result<(), ExportError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    write_csv(segmentation, BufWriter::new(&temp_file))?;
    temp_file.persist(path)?;

    tracing::trace!(path = %path.display(), rows = segmentation.len(), "csv saved");
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line: Vec<Cow<'_, str>> = fields.iter().map(|f| quote(f)).collect();
    write!(writer, "{}{}", line.join(","), LINE_END)
}

/// Quotes a field only when it holds a separator, a quote or a line break.
fn quote(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
