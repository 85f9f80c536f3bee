use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use seq_barcode_tools::io::{load_sequence, read_rows_from_path, write_table, InputFormat};
use seq_barcode_tools::{AnchorConfig, BatchCompiler, SeqError, SequenceMetrics, WindowOverflow};

fn compiler(n_bc: usize) -> BatchCompiler {
    BatchCompiler::new(
        AnchorConfig::default_id().unwrap(),
        AnchorConfig::after("GGGGGT", 3, n_bc).unwrap(),
    )
}

#[test]
fn test_hit_and_miss_rows_keep_order() {
    let rows = ["TTCGATCGAAACAAACGGGGGTACGTACGT", "ACGTACGTACGT"];
    let table = compiler(5).compile(rows).unwrap();
    assert_eq!(table.len(), 2);

    let first = &table.rows()[0];
    assert_eq!(first.seq, rows[0].as_bytes());
    assert_eq!(first.id, b"CGATCG");
    assert_eq!(first.barcode, b"GGTAC");

    let second = &table.rows()[1];
    assert!(second.id.is_empty());
    assert!(second.barcode.is_empty());
}

#[test]
fn test_read_one_then_read_two() {
    // read 1 行反向互补后得到 CGATCGAAACAAAC
    let r1 = ["GTTTGTTTCGATCG"];
    let r2 = ["AAAAAAAAACAAAC"];
    let c = compiler(5);
    let mut table = c.clone().reverse_complement(true).compile(r1).unwrap();
    table.append(c.compile(r2).unwrap());

    let ids: Vec<&[u8]> = table.rows().iter().map(|r| r.id.as_slice()).collect();
    assert_eq!(ids, vec![&b"CGATCG"[..], &b"AAAAAA"[..]]);
    assert_eq!(table.rows()[0].seq, b"CGATCGAAACAAAC");
}

#[test]
fn test_wrap_policy_through_config() {
    let id = AnchorConfig::default_id().unwrap().with_overflow(WindowOverflow::Wrap);
    let c = BatchCompiler::new(id, AnchorConfig::default_barcode().unwrap());
    let table = c.compile(["GGAAACAAAC"]).unwrap();
    assert!(table.rows()[0].id.is_empty());
}

#[test]
fn test_rows_from_gzip_file() {
    let mut file = NamedTempFile::new().unwrap();
    {
        let mut gz = GzEncoder::new(file.as_file_mut(), Compression::default());
        gz.write_all(b"CGATCGAAACAAAC\nTTTT\n").unwrap();
        gz.finish().unwrap();
    }
    let rows = read_rows_from_path(file.path()).unwrap();
    assert_eq!(rows, vec![b"CGATCGAAACAAAC".to_vec(), b"TTTT".to_vec()]);

    let table = compiler(30).compile(&rows).unwrap();
    let mut out = Vec::new();
    write_table(&mut out, &table).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "seq,id,barcode\nCGATCGAAACAAAC,CGATCG,\nTTTT,,\n"
    );
}

#[test]
fn test_malformed_row_reports_index() {
    let err = compiler(5)
        .reverse_complement(true)
        .compile(["ACGT", "ACGT", "AC#T"])
        .unwrap_err();
    assert_eq!(err.to_string(), "row 2: unknown base '#' at position 2");
    assert!(matches!(err, SeqError::MalformedRow { row: 2, .. }));
}

#[test]
fn test_detect_and_load_plain_sequence() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ATGCATGC").unwrap();
    let format = InputFormat::detect(file.path()).unwrap();
    assert_eq!(format, InputFormat::Plain);

    let text = load_sequence(file.path(), format).unwrap();
    let metrics = SequenceMetrics::new(text.trim(), Default::default()).unwrap();
    assert_eq!(metrics.gc_content().unwrap(), 50.0);
}

#[test]
fn test_detect_gzip_sequence() {
    let mut file = NamedTempFile::new().unwrap();
    {
        let mut gz = GzEncoder::new(file.as_file_mut(), Compression::default());
        gz.write_all(b"GGGGCCCC").unwrap();
        gz.finish().unwrap();
    }
    let format = InputFormat::detect(file.path()).unwrap();
    assert_eq!(format, InputFormat::Gzip);
    assert_eq!(load_sequence(file.path(), format).unwrap(), "GGGGCCCC");
}

#[test]
fn test_zip_first_entry_is_loaded() {
    // 只读取压缩包中的第一个条目
    let mut file = NamedTempFile::new().unwrap();
    {
        let mut zip = ZipWriter::new(file.as_file_mut());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file("seq.txt", options).unwrap();
        zip.write_all(b"ATGCATGC\n").unwrap();
        zip.start_file("other.txt", options).unwrap();
        zip.write_all(b"TTTT\n").unwrap();
        zip.finish().unwrap();
    }
    let format = InputFormat::detect(file.path()).unwrap();
    assert_eq!(format, InputFormat::Zip);

    let text = load_sequence(file.path(), format).unwrap();
    assert_eq!(text, "ATGCATGC\n");

    let rows = read_rows_from_path(file.path()).unwrap();
    assert_eq!(rows, vec![b"ATGCATGC".to_vec()]);
}

#[test]
fn test_zip_without_entries_fails() {
    let mut file = NamedTempFile::new().unwrap();
    ZipWriter::new(file.as_file_mut()).finish().unwrap();
    assert!(load_sequence(file.path(), InputFormat::Zip).is_err());
}
