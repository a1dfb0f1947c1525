use std::io::Write;
use std::path::Path;

use crate::data::series::{RollingSeriesBuffer, Sample};
use crate::error::Result;

/// Write samples as CSV with an `x,y,avg` header.
pub fn write_samples_csv<'a, W: Write>(
    mut w: W,
    samples: impl IntoIterator<Item = &'a Sample>,
) -> std::io::Result<()> {
    writeln!(w, "x,y,avg")?;
    for s in samples {
        writeln!(w, "{:.9},{},{}", s.x, s.y, s.avg)?;
    }
    w.flush()
}

/// Save the current window of `buffer` to a CSV file.
pub fn save_samples_csv<P: AsRef<Path>>(path: P, buffer: &RollingSeriesBuffer) -> Result<()> {
    let f = std::fs::File::create(path)?;
    write_samples_csv(std::io::BufWriter::new(f), buffer.iter())?;
    Ok(())
}

/// Default file name for an export made now, e.g. `samples_20240101_120000.csv`.
pub fn default_export_file_name() -> String {
    format!("samples_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
