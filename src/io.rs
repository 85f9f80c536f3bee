//! 输入读取（按行 / 整条序列）与结果表写出。

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::batch::ExtractionTable;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const ZIP_MAGIC: [u8; 4] = *b"PK\x03\x04";

/// Container format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Plain,
    Gzip,
    /// First entry of a zip archive.
    Zip,
}

impl InputFormat {
    /// Picks a format from the leading magic bytes of the file.
    pub fn detect(path: &Path) -> Result<InputFormat> {
        let mut head = [0u8; 4];
        let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut n = 0;
        while n < head.len() {
            let read = file.read(&mut head[n..])?;
            if read == 0 {
                break;
            }
            n += read;
        }
        let format = if head[..n].starts_with(&GZIP_MAGIC) {
            InputFormat::Gzip
        } else if head[..n] == ZIP_MAGIC {
            InputFormat::Zip
        } else {
            InputFormat::Plain
        };
        debug!(path = %path.display(), ?format, "detected input format");
        Ok(format)
    }
}

pub fn open_reader(path: &Path, format: InputFormat) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    match format {
        InputFormat::Plain => Ok(Box::new(BufReader::with_capacity(2 << 20, file))),
        InputFormat::Gzip => {
            let decoder = MultiGzDecoder::new(file);
            Ok(Box::new(BufReader::with_capacity(2 << 20, decoder)))
        }
        InputFormat::Zip => {
            let mut archive = zip::ZipArchive::new(file)
                .with_context(|| format!("reading zip archive {}", path.display()))?;
            let mut entry = archive
                .by_index(0)
                .with_context(|| format!("{} has no entries", path.display()))?;
            // 头部声明的大小不可信，由 read_to_end 自行扩容
            let mut buf = Vec::new();
            entry.read_to_end(&mut buf)?;
            Ok(Box::new(Cursor::new(buf)))
        }
    }
}

/// One sequence per row, first comma-separated column, no header.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    while csv.read_byte_record(&mut record)? {
        rows.push(record.get(0).unwrap_or_default().to_vec());
    }
    Ok(rows)
}

pub fn read_rows_from_path(path: &Path) -> Result<Vec<Vec<u8>>> {
    let format = InputFormat::detect(path)?;
    let rows = read_rows(open_reader(path, format)?)
        .with_context(|| format!("reading rows from {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.len(), "read batch");
    Ok(rows)
}

/// Whole decoded text of a single-sequence file.
pub fn load_sequence(path: &Path, format: InputFormat) -> Result<String> {
    let mut text = String::new();
    open_reader(path, format)?
        .read_to_string(&mut text)
        .with_context(|| format!("reading sequence from {}", path.display()))?;
    Ok(text)
}

/// Writes `seq,id,barcode` with a header row, rows in table order.
pub fn write_table<W: Write>(writer: W, table: &ExtractionTable) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["seq", "id", "barcode"])?;
    for row in table.rows() {
        csv.write_record([&row.seq, &row.id, &row.barcode])?;
    }
    csv.flush()?;
    Ok(())
}
