pub mod nxextract;

#[cfg(test)]
mod tests {
    use crate::nxextract::{
        checksum::checksum,
        constants::{CREDIT_HEADER, HEADER_LEN, ORG_TABLE, PIXEL_HEADER},
        errors::ExtractError,
        helpers::{extract_records, max_record_len, read_record, resolve_destination},
        types::{AssetRecord, ExtractOptions},
    };
    use std::{collections::HashSet, fs, io::Cursor, path::Path};
    use tempfile::TempDir;

    fn patterned_source(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 + 7) as u8).collect()
    }

    fn record_for<'a>(
        source: &[u8],
        name: &'a str,
        offset: u64,
        length: u32,
        header: Option<&'a [u8]>,
    ) -> AssetRecord<'a> {
        let start = offset as usize;
        AssetRecord {
            name,
            offset,
            length,
            expected_crc: checksum(&source[start..start + length as usize]),
            header,
        }
    }

    #[test]
    fn test_org_table_shape() {
        assert_eq!(ORG_TABLE.len(), 41);

        let names: HashSet<_> = ORG_TABLE.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), ORG_TABLE.len(), "Record names must be unique");

        for record in ORG_TABLE {
            assert!(record.name.starts_with("org/"), "{}", record.name);
            assert!(record.name.ends_with(".org"), "{}", record.name);
            assert!(record.header.is_none());
            assert!(record.length > 0);
        }

        assert_eq!(max_record_len(ORG_TABLE), 25738);
    }

    #[test]
    fn test_org_table_ranges_do_not_overlap() {
        let mut ranges: Vec<_> = ORG_TABLE.iter().map(|r| (r.offset, r.end())).collect();
        ranges.sort();

        for pair in ranges.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "{:x?} overlaps {:x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_bitmap_headers() {
        for header in [CREDIT_HEADER, PIXEL_HEADER] {
            assert_eq!(header.len(), HEADER_LEN);
            assert_eq!(&header[..2], b"BM");
        }
        // Width 160, heights 240 and 16.
        assert_eq!(CREDIT_HEADER[18], 0xA0);
        assert_eq!(CREDIT_HEADER[22], 0xF0);
        assert_eq!(PIXEL_HEADER[22], 0x10);
    }

    #[test]
    fn test_read_record_prepends_header() {
        let data = patterned_source(256);
        let record = record_for(&data, "pixel.bmp", 16, 32, Some(&PIXEL_HEADER));
        let mut scratch = Vec::new();

        let header_len = read_record(&mut Cursor::new(&data), &record, 256, &mut scratch)
            .expect("Failed to read record");

        assert_eq!(header_len, HEADER_LEN);
        assert_eq!(&scratch[..HEADER_LEN], &PIXEL_HEADER);
        assert_eq!(&scratch[HEADER_LEN..], &data[16..48]);
        assert_eq!(scratch.len(), record.output_len());
    }

    #[test]
    fn test_read_record_reuses_scratch() {
        let data = patterned_source(256);
        let long = record_for(&data, "long", 0, 200, None);
        let short = record_for(&data, "short", 100, 10, None);
        let mut scratch = Vec::with_capacity(max_record_len(&[long, short]));

        read_record(&mut Cursor::new(&data), &long, 256, &mut scratch).unwrap();
        read_record(&mut Cursor::new(&data), &short, 256, &mut scratch).unwrap();

        assert_eq!(scratch, &data[100..110]);
    }

    #[test]
    fn test_read_record_past_end_is_an_error() {
        let data = patterned_source(64);
        let record = AssetRecord {
            name: "org/oversized.org",
            offset: 60,
            length: 8,
            expected_crc: 0,
            header: None,
        };
        let mut scratch = Vec::new();

        let err = read_record(&mut Cursor::new(&data), &record, 64, &mut scratch)
            .expect_err("Record past the end must fail");

        assert!(matches!(err, ExtractError::OutOfBounds { end: 68, .. }));
        assert_eq!(err.record_name(), Some("org/oversized.org"));
    }

    #[test]
    fn test_record_end_saturates_near_u64_max() {
        let data = vec![0u8; 64];
        let record = AssetRecord {
            name: "org/wrapped.org",
            offset: u64::MAX - 1,
            length: 16,
            expected_crc: 0,
            header: None,
        };
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        assert_eq!(record.end(), u64::MAX);

        let err = extract_records(
            &[record],
            &mut Cursor::new(&data),
            temp_dir.path(),
            ExtractOptions::default(),
        )
        .expect_err("Offset near u64::MAX must fail, not wrap");

        assert!(
            matches!(err, ExtractError::OutOfBounds { source_len: 64, .. }),
            "{err:?}"
        );
        assert!(!temp_dir.path().join("org").exists());
    }

    #[test]
    fn test_read_record_short_source_is_a_read_error() {
        // Claimed length is larger than the real stream, so the bounds check
        // passes and read_exact hits EOF.
        let data = patterned_source(64);
        let record = record_for(&data, "tail", 32, 32, None);
        let mut scratch = Vec::new();

        let err = read_record(&mut Cursor::new(&data[..40]), &record, 64, &mut scratch)
            .expect_err("Short read must fail");

        assert!(matches!(err, ExtractError::Read { length: 32, .. }));
    }

    #[test]
    fn test_resolve_destination_normalizes_separators() {
        let root = Path::new("data");

        assert_eq!(
            resolve_destination(root, "org/access.org"),
            root.join("org").join("access.org")
        );
        assert_eq!(
            resolve_destination(root, "org\\access.org"),
            root.join("org").join("access.org")
        );
        assert_eq!(resolve_destination(root, "credit.bmp"), root.join("credit.bmp"));
    }

    #[test]
    fn test_extract_records_with_header() {
        let data = patterned_source(4096);
        let records = [
            record_for(&data, "credit.bmp", 100, 1000, Some(&CREDIT_HEADER)),
            record_for(&data, "org/plain.org", 2000, 500, None),
        ];
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let report = extract_records(
            &records,
            &mut Cursor::new(&data),
            temp_dir.path(),
            ExtractOptions::default(),
        )
        .expect("Extraction should succeed");

        assert!(report.is_clean());
        assert_eq!(report.written.len(), 2);

        let credit = fs::read(temp_dir.path().join("credit.bmp")).unwrap();
        assert_eq!(credit.len(), 1000 + HEADER_LEN);
        assert_eq!(&credit[..HEADER_LEN], &CREDIT_HEADER);
        assert_eq!(&credit[HEADER_LEN..], &data[100..1100]);

        let plain = fs::read(temp_dir.path().join("org").join("plain.org")).unwrap();
        assert_eq!(plain, &data[2000..2500]);
    }

    #[test]
    fn test_no_verify_skips_checksums() {
        let data = patterned_source(512);
        let record = AssetRecord {
            name: "bogus.org",
            offset: 0,
            length: 128,
            expected_crc: 0xDEAD_BEEF,
            header: None,
        };
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let report = extract_records(
            &[record],
            &mut Cursor::new(&data),
            temp_dir.path(),
            ExtractOptions { verify: false },
        )
        .expect("Extraction should succeed");

        assert!(report.is_clean());
        assert!(temp_dir.path().join("bogus.org").is_file());
    }
}
