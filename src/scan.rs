//! Scan input capability
//!
//! Barcode capture is a host concern (camera, decoder, or plain text
//! entry). The core consumes it only as a lazy sequence of raw strings:
//! not restartable, cancelled by the caller simply dropping the source.

use std::io::BufRead;

/// A source of raw scanned part-number strings
pub trait ScanSource {
    /// Next scanned string, or `None` when the source is exhausted
    fn next_scan(&mut self) -> Option<String>;
}

/// Scan source reading one part number per line from any `BufRead`
/// (stdin in the CLI). Blank lines are skipped; a read error ends the
/// stream.
pub struct ReaderScanSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderScanSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ScanSource for ReaderScanSource<R> {
    fn next_scan(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let scan = line.trim();
                    if !scan.is_empty() {
                        return Some(scan.to_string());
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "scan source read failed");
                    return None;
                }
            }
        }
    }
}
