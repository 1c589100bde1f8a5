use std::{
    fs,
    io::{Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use log::{info, warn};

use super::{
    checksum::checksum,
    constants::ORG_TABLE,
    errors::ExtractError,
    types::{AssetRecord, ChecksumMismatch, ExtractOptions, ExtractReport},
};

/// Extracts every track of [`ORG_TABLE`] from `source` into `destination_root`.
pub fn extract_all<S: Read + Seek>(
    source: &mut S,
    destination_root: &Path,
) -> Result<ExtractReport, ExtractError> {
    extract_records(ORG_TABLE, source, destination_root, ExtractOptions::default())
}

/// Extracts `records` in order.
///
/// Checksum mismatches are logged and collected in the returned report;
/// extraction carries on past them. Any I/O failure stops the run at the
/// failing record and is returned. Files written before the failure stay
/// on disk.
pub fn extract_records<S: Read + Seek>(
    records: &[AssetRecord],
    source: &mut S,
    destination_root: &Path,
    options: ExtractOptions,
) -> Result<ExtractReport, ExtractError> {
    let source_len = source
        .seek(SeekFrom::End(0))
        .map_err(ExtractError::SourceLen)?;

    let header_max = records
        .iter()
        .filter_map(|r| r.header.map(<[u8]>::len))
        .max()
        .unwrap_or(0);
    let mut scratch = Vec::with_capacity(header_max + max_record_len(records));

    let mut report = ExtractReport::default();

    for record in records {
        let path = resolve_destination(destination_root, record.name);
        info!("[ {} ]", path.display());

        let header_len = read_record(source, record, source_len, &mut scratch)?;

        if options.verify {
            let actual = checksum(&scratch[header_len..]);
            if actual != record.expected_crc {
                warn!(
                    "{} failed checksum: expected {:#010x}, got {:#010x}",
                    record.name, record.expected_crc, actual
                );
                report.mismatches.push(ChecksumMismatch {
                    name: record.name.to_string(),
                    expected: record.expected_crc,
                    actual,
                });
            }
        }

        write_output(record, &path, &scratch)?;
        report.written.push(path);
    }

    Ok(report)
}

/// Loads `header ++ raw` for `record` into `scratch`, replacing its contents.
/// Returns the header length, so `scratch[returned..]` is the raw slice.
pub fn read_record<S: Read + Seek>(
    source: &mut S,
    record: &AssetRecord,
    source_len: u64,
    scratch: &mut Vec<u8>,
) -> Result<usize, ExtractError> {
    if record.end() > source_len {
        return Err(ExtractError::OutOfBounds {
            name: record.name.to_string(),
            offset: record.offset,
            end: record.end(),
            source_len,
        });
    }

    source
        .seek(SeekFrom::Start(record.offset))
        .map_err(|source| ExtractError::Seek {
            name: record.name.to_string(),
            offset: record.offset,
            source,
        })?;

    let header = record.header.unwrap_or_default();
    scratch.clear();
    scratch.extend_from_slice(header);
    scratch.resize(header.len() + record.length as usize, 0);

    source
        .read_exact(&mut scratch[header.len()..])
        .map_err(|source| ExtractError::Read {
            name: record.name.to_string(),
            length: record.length,
            source,
        })?;

    Ok(header.len())
}

/// Joins a `/`-separated record name onto `root` using host separators.
pub fn resolve_destination(root: &Path, name: &str) -> PathBuf {
    name.split(['/', '\\'])
        .filter(|component| !component.is_empty())
        .fold(root.to_path_buf(), |path, component| path.join(component))
}

/// Creates the parent directories of `path` and overwrites it with `bytes`.
pub fn write_output(record: &AssetRecord, path: &Path, bytes: &[u8]) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExtractError::CreateDir {
            name: record.name.to_string(),
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, bytes).map_err(|source| ExtractError::Write {
        name: record.name.to_string(),
        path: path.to_path_buf(),
        source,
    })
}

pub fn max_record_len(records: &[AssetRecord]) -> usize {
    records
        .iter()
        .map(|r| r.length as usize)
        .max()
        .unwrap_or(0)
}
