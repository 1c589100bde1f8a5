use super::types::AssetRecord;

pub const HEADER_LEN: usize = 25;

pub const DEFAULT_OUTPUT_DIR: &str = "out";

// Bitmap resources embedded in a PE file lack the BITMAPFILEHEADER, so
// bitmaps pulled from the executable need one of these in front. They are
// for bitmap tables passed to `extract_records`; ORG_TABLE has no headers.

/// File header for the 160x240 credits bitmap.
pub const CREDIT_HEADER: [u8; HEADER_LEN] = [
    0x42, 0x4D, 0x76, 0x4B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0x00, 0x00, 0x00, 0x28, 0x00,
    0x00, 0x00, 0xA0, 0x00, 0x00, 0x00, 0xF0, 0x00, 0x00,
];

/// File header for the 160x16 pixel logo bitmap.
pub const PIXEL_HEADER: [u8; HEADER_LEN] = [
    0x42, 0x4D, 0x76, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0x00, 0x00, 0x00, 0x28, 0x00,
    0x00, 0x00, 0xA0, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
];

const fn org(
    name: &'static str,
    offset: u64,
    length: u32,
    expected_crc: u32,
) -> AssetRecord<'static> {
    AssetRecord {
        name,
        offset,
        length,
        expected_crc,
        header: None,
    }
}

/// Organya music tracks embedded in the freeware `Doukutsu.exe`.
pub const ORG_TABLE: &[AssetRecord<'static>] = &[
    org("org/access.org", 0x09B35C, 1138, 0xD965DDDB),
    org("org/balcony.org", 0x09DBBC, 3082, 0x892345CA),
    org("org/balrog.org", 0x0B45A0, 5970, 0xB02093B8),
    org("org/breakdown.org", 0x09F5BC, 2570, 0xF80DD62A),
    org("org/cemetary.org", 0x09FFC8, 4578, 0x2CE377CC),
    org("org/charge.org", 0x0D28D4, 2770, 0x10DEC9D5),
    org("org/credits.org", 0x0A7EAC, 17898, 0xA9ED4834),
    org("org/egg.org", 0x0FEB20, 19626, 0xB651047E),
    org("org/eyesofflame.org", 0x0AEDC0, 21354, 0x6B5FF989),
    org("org/fanfale1.org", 0x0AE25C, 914, 0xAEFD547B),
    org("org/fanfale2.org", 0x0AE98C, 1074, 0x3A5170A6),
    org("org/fanfale3.org", 0x0AE5F0, 922, 0x85813929),
    org("org/gameover.org", 0x0B412C, 1137, 0x525D58F3),
    org("org/geothermal.org", 0x0B5CF4, 13466, 0xDB4795AC),
    org("org/gestation.org", 0x0F83C8, 10458, 0xCE2E68C1),
    org("org/gravity.org", 0x0B9190, 20578, 0x64A9318D),
    org("org/grasstown.org", 0x1037CC, 23706, 0xA27883B6),
    org("org/hell.org", 0x0BE1F4, 18386, 0x93BBF277),
    org("org/heroend.org", 0x0F1598, 9722, 0xFC64D0D0),
    org("org/jenka1.org", 0x0C5E54, 8306, 0xB42D7EAA),
    org("org/jenka2.org", 0x0C7EC8, 11986, 0xC095CBE1),
    org("org/labyrinth.org", 0x0DBCB8, 14786, 0x0292CF2C),
    org("org/lastbattle.org", 0x0CD650, 21122, 0x8888DAC9),
    org("org/lastcave.org", 0x0D33A8, 18122, 0x469B38B9),
    org("org/meltdown2.org", 0x0DF67C, 21074, 0x83D08AED),
    org("org/oppression.org", 0x0C29C8, 13450, 0x3CE4CDBE),
    org("org/oside.org", 0x0E725C, 25634, 0x1E33B095),
    org("org/plant.org", 0x0ED680, 11378, 0x3911E040),
    org("org/pulse.org", 0x0CAD9C, 10418, 0x92EF0330),
    org("org/quiet.org", 0x0F02F4, 4770, 0x0E95A468),
    org("org/run.org", 0x0AC498, 7618, 0x65A4BB85),
    org("org/safety.org", 0x09B7D0, 9194, 0x779E83C2),
    org("org/scorching.org", 0x0FACA4, 15994, 0xD09341E2),
    org("org/seal.org", 0x09E7C8, 3570, 0x373988AD),
    org("org/theme.org", 0x0A11AC, 25738, 0xF5ACE8B0),
    org("org/toroko.org", 0x0F3B94, 18482, 0xC202DE07),
    org("org/town.org", 0x0E48D0, 10634, 0x6A6AA627),
    org("org/tyrant.org", 0x0A7638, 2162, 0xC64DC450),
    org("org/waterway.org", 0x0D7A74, 16962, 0xB533D72A),
    org("org/white.org", 0x109468, 23714, 0xCFF0FB34),
    org("org/zombie.org", 0x10F180, 5346, 0xD217CC29),
];
