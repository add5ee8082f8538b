use crate::error::ExportError;
use crate::model::PrintListEntry;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const PRINT_LIST_HEADERS: [&str; 8] = [
    "Parent Part(s)",
    "Sub-Part",
    "Quantity",
    "Support",
    "Brim",
    "Optional",
    "Infill",
    "Notes",
];

pub fn export_csv<P: AsRef<Path>>(entries: &[PrintListEntry], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_csv(entries, file)
}

/// Writes the print list with every field quoted, ready for spreadsheet import.
pub fn write_csv<W: Write>(entries: &[PrintListEntry], out: W) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    writer.write_record(PRINT_LIST_HEADERS)?;

    for entry in entries {
        let parents = entry.parents_label();
        let count = entry.count.to_string();
        writer.write_record([
            parents.as_str(),
            entry.name.as_str(),
            count.as_str(),
            yes_or_blank(entry.metadata.support),
            yes_or_blank(entry.metadata.brim),
            yes_or_blank(entry.metadata.optional),
            entry.metadata.infill.as_str(),
            "",
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

fn yes_or_blank(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        ""
    }
}
