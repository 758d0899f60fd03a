use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// File size in bytes
pub fn file_size(path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Format a byte count as megabytes with two decimals
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Sizes of the source PDF and its text-only copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub original_bytes: u64,
    pub output_bytes: u64,
}

impl SizeReport {
    pub fn new(original_bytes: u64, output_bytes: u64) -> Self {
        Self {
            original_bytes,
            output_bytes,
        }
    }

    /// Stat both files
    pub fn from_files(original: &Path, output: &Path) -> io::Result<Self> {
        Ok(Self::new(file_size(original)?, file_size(output)?))
    }

    /// Percentage saved; negative when the copy is larger
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.original_bytes as f64) * 100.0
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New size: {}", format_mb(self.output_bytes))?;
        write!(f, "Size reduction: {:.1}%", self.reduction_percent())
    }
}
