use std::path::PathBuf;

/// One entry of an extraction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRecord<'a> {
    /// Output path relative to the destination root, always `/`-separated.
    pub name: &'a str,
    pub offset: u64,
    /// Length of the raw payload, not counting `header`.
    pub length: u32,
    pub expected_crc: u32,
    /// Prepended to the output file; not covered by `expected_crc`.
    pub header: Option<&'a [u8]>,
}

impl AssetRecord<'_> {
    /// Size of the file this record produces.
    pub fn output_len(&self) -> usize {
        self.header.map_or(0, <[u8]>::len) + self.length as usize
    }

    /// One past the last source byte. Saturates, so an offset near
    /// `u64::MAX` still compares as past the end of any source.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(u64::from(self.length))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Compute and compare checksums. Mismatches are reported, never fatal.
    pub verify: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions { verify: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumMismatch {
    pub name: String,
    pub expected: u32,
    pub actual: u32,
}

#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Destination paths in table order.
    pub written: Vec<PathBuf>,
    pub mismatches: Vec<ChecksumMismatch>,
}

impl ExtractReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}
