// CRC-32 (IEEE 802.3), the variant the original tables were computed with.

pub fn checksum(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}
