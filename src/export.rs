use std::io;

use crate::data::filter::FilteredView;
use crate::data::model::TitleRecord;

/// Suggested file name for the download.
pub const EXPORT_FILE_NAME: &str = "netflix_filtered_data.csv";
/// MIME type of the download.
pub const EXPORT_MIME: &str = "text/csv";
/// Rows shown by the raw-data explorer.
pub const PREVIEW_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Write the view as CSV: the source header, then every selected row with
/// its original cells. Derived fields are not written.
pub fn write_csv<W: io::Write>(view: &FilteredView<'_>, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&view.dataset().headers)?;
    for rec in view.records() {
        wtr.write_record(&rec.cells)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The CSV export as UTF-8 bytes.
pub fn to_csv(view: &FilteredView<'_>) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_csv(view, &mut buf)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Explorer
// ---------------------------------------------------------------------------

/// The first `limit` titles of the view, in view order.
pub fn preview<'a>(view: &FilteredView<'a>, limit: usize) -> Vec<&'a TitleRecord> {
    view.records().take(limit).collect()
}
