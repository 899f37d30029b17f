//! Write a history matrix back to CSV in the layout the reader accepts

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use super::{HistoryMatrix, MatrixError};

impl HistoryMatrix {
    /// Write the matrix to a CSV file, replacing it if it exists
    pub fn write_to_path(&self, path: &Path) -> Result<(), MatrixError> {
        let file = File::create(path).map_err(csv::Error::from)?;
        self.write_to(file)?;

        log::info!("History matrix written to {}", path.display());
        Ok(())
    }

    /// Write the matrix as CSV to any sink
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), MatrixError> {
        self.write_csv(WriterBuilder::new().from_writer(sink))
    }

    fn write_csv<W: Write>(&self, mut wtr: csv::Writer<W>) -> Result<(), MatrixError> {
        // Header: empty index name, then columns in their original order
        let mut header = vec![""];
        header.extend(self.column_labels());
        wtr.write_record(&header)?;

        for (g, label) in self.labels.iter().enumerate() {
            let mut record = Vec::with_capacity(self.column_order.len() + 1);
            record.push(label.as_str());
            for &r in &self.column_order {
                record.push(if self.cells[g][r] { "1" } else { "0" });
            }
            wtr.write_record(&record)?;
        }

        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::matching::find_assignment;

    fn to_csv_string(matrix: &HistoryMatrix) -> String {
        let mut buffer = Vec::new();
        matrix.write_to(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_new_matrix() {
        let matrix = HistoryMatrix::new(["A", "B"]).unwrap();

        assert_eq!(to_csv_string(&matrix), ",A,B\nA,1,0\nB,0,1\n");
    }

    #[test]
    fn test_write_keeps_column_order() {
        let source = ",C,A,B\nA,1,0,0\nB,0,0,1\nC,0,1,0\n";
        let matrix = HistoryMatrix::from_reader(source.as_bytes()).unwrap();

        assert_eq!(to_csv_string(&matrix), source);
    }

    #[test]
    fn test_written_matrix_reads_back_with_recorded_pairs() {
        let mut matrix = HistoryMatrix::new(["Ann", "Bob", "Cid", "Dee"]).unwrap();
        let assignment = find_assignment(matrix.participants(), &matrix).unwrap();
        matrix.record(&assignment);

        let reloaded = HistoryMatrix::from_reader(to_csv_string(&matrix).as_bytes())
            .unwrap();

        assert_eq!(reloaded, matrix);
    }

    #[test]
    fn test_write_to_path() {
        let path = std::env::temp_dir().join(format!(
            "fishbowl-writer-test-{}.csv",
            std::process::id()
        ));
        let matrix = HistoryMatrix::new(["A", "B", "C"]).unwrap();

        matrix.write_to_path(&path).unwrap();
        let reloaded = HistoryMatrix::from_path(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(reloaded, matrix);
    }
}
