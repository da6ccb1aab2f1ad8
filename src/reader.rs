use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail on the first read error or stop and report it in the stats
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for a single read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Split a line as delivered by [`LineReader`] into content and terminator.
///
/// The terminator is `"\r\n"`, `"\n"` or empty for a final unterminated line.
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Line-oriented async reader for files and stdin.
///
/// Lines are handed to a callback as soon as they are read, terminator
/// included, so the input bytes can be reproduced exactly.
pub struct LineReader {
    config: ReaderConfig,
}

impl LineReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Stream the lines of `path` into `on_line`
    pub async fn for_each_file_line<P, F>(&self, path: P, on_line: F) -> Result<ReadStats>
    where
        P: AsRef<Path>,
        F: FnMut(&str) -> Result<()>,
    {
        let path = path.as_ref();
        // WHY: a missing input file is always fatal; there is nothing partial to report
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        self.for_each_line(file, &path.display().to_string(), on_line).await
    }

    /// Stream the lines of any async source into `on_line`; `label` names it in stats and logs.
    ///
    /// Errors returned by `on_line` always abort the read. Read and UTF-8
    /// errors abort only in fail-fast mode; otherwise reading stops and the
    /// error is recorded in the returned stats.
    pub async fn for_each_line<R, F>(&self, source: R, label: &str, mut on_line: F) -> Result<ReadStats>
    where
        R: AsyncRead + Unpin,
        F: FnMut(&str) -> Result<()>,
    {
        let start_time = std::time::Instant::now();
        debug!("Starting read of {}", label);

        let mut reader = BufReader::with_capacity(self.config.buffer_size, source);
        let mut raw = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;
        let mut read_error = None;

        loop {
            raw.clear();
            let line = match reader.read_until(b'\n', &mut raw).await {
                Ok(0) => break,
                Ok(_) => std::str::from_utf8(&raw)
                    .map_err(|e| format!("Invalid UTF-8 in {} at line {}: {}", label, line_count + 1, e)),
                Err(e) => Err(format!("Read error in {} at line {}: {}", label, line_count + 1, e)),
            };

            match line {
                Ok(line) => {
                    byte_count += raw.len() as u64;
                    line_count += 1;
                    on_line(line)?;
                }
                Err(error_msg) => {
                    warn!("{}", error_msg);
                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                    read_error = Some(error_msg);
                    break;
                }
            }
        }

        let stats = ReadStats {
            source: label.to_string(),
            lines_read: line_count,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error,
        };

        debug!(
            "Read {}: {} lines, {} bytes in {}ms",
            label, line_count, byte_count, stats.duration_ms
        );
        Ok(stats)
    }
}
