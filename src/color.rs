use palette::Srgb;

// ---------------------------------------------------------------------------
// Inferno colormap
// ---------------------------------------------------------------------------

/// Matplotlib's 256-entry inferno lookup table (dark purple → pale yellow).
#[rustfmt::skip]
const INFERNO: [(u8, u8, u8); 256] = [
    (0x00, 0x00, 0x04), (0x01, 0x00, 0x05), (0x01, 0x01, 0x06), (0x01, 0x01, 0x08),
    (0x02, 0x01, 0x0a), (0x02, 0x02, 0x0c), (0x02, 0x02, 0x0e), (0x03, 0x02, 0x10),
    (0x04, 0x03, 0x12), (0x04, 0x03, 0x14), (0x05, 0x04, 0x17), (0x06, 0x04, 0x19),
    (0x07, 0x05, 0x1b), (0x08, 0x05, 0x1d), (0x09, 0x06, 0x1f), (0x0a, 0x07, 0x22),
    (0x0b, 0x07, 0x24), (0x0c, 0x08, 0x26), (0x0d, 0x08, 0x29), (0x0e, 0x09, 0x2b),
    (0x10, 0x09, 0x2d), (0x11, 0x0a, 0x30), (0x12, 0x0a, 0x32), (0x14, 0x0b, 0x34),
    (0x15, 0x0b, 0x37), (0x16, 0x0b, 0x39), (0x18, 0x0c, 0x3c), (0x19, 0x0c, 0x3e),
    (0x1b, 0x0c, 0x41), (0x1c, 0x0c, 0x43), (0x1e, 0x0c, 0x45), (0x1f, 0x0c, 0x48),
    (0x21, 0x0c, 0x4a), (0x23, 0x0c, 0x4c), (0x24, 0x0c, 0x4f), (0x26, 0x0c, 0x51),
    (0x28, 0x0b, 0x53), (0x29, 0x0b, 0x55), (0x2b, 0x0b, 0x57), (0x2d, 0x0b, 0x59),
    (0x2f, 0x0a, 0x5b), (0x31, 0x0a, 0x5c), (0x32, 0x0a, 0x5e), (0x34, 0x0a, 0x5f),
    (0x36, 0x09, 0x61), (0x38, 0x09, 0x62), (0x39, 0x09, 0x63), (0x3b, 0x09, 0x64),
    (0x3d, 0x09, 0x65), (0x3e, 0x09, 0x66), (0x40, 0x0a, 0x67), (0x42, 0x0a, 0x68),
    (0x44, 0x0a, 0x68), (0x45, 0x0a, 0x69), (0x47, 0x0b, 0x6a), (0x49, 0x0b, 0x6a),
    (0x4a, 0x0c, 0x6b), (0x4c, 0x0c, 0x6b), (0x4d, 0x0d, 0x6c), (0x4f, 0x0d, 0x6c),
    (0x51, 0x0e, 0x6c), (0x52, 0x0e, 0x6d), (0x54, 0x0f, 0x6d), (0x55, 0x0f, 0x6d),
    (0x57, 0x10, 0x6e), (0x59, 0x10, 0x6e), (0x5a, 0x11, 0x6e), (0x5c, 0x12, 0x6e),
    (0x5d, 0x12, 0x6e), (0x5f, 0x13, 0x6e), (0x61, 0x13, 0x6e), (0x62, 0x14, 0x6e),
    (0x64, 0x15, 0x6e), (0x65, 0x15, 0x6e), (0x67, 0x16, 0x6e), (0x69, 0x16, 0x6e),
    (0x6a, 0x17, 0x6e), (0x6c, 0x18, 0x6e), (0x6d, 0x18, 0x6e), (0x6f, 0x19, 0x6e),
    (0x71, 0x19, 0x6e), (0x72, 0x1a, 0x6e), (0x74, 0x1a, 0x6e), (0x75, 0x1b, 0x6e),
    (0x77, 0x1c, 0x6d), (0x78, 0x1c, 0x6d), (0x7a, 0x1d, 0x6d), (0x7c, 0x1d, 0x6d),
    (0x7d, 0x1e, 0x6d), (0x7f, 0x1e, 0x6c), (0x80, 0x1f, 0x6c), (0x82, 0x20, 0x6c),
    (0x84, 0x20, 0x6b), (0x85, 0x21, 0x6b), (0x87, 0x21, 0x6b), (0x88, 0x22, 0x6a),
    (0x8a, 0x22, 0x6a), (0x8c, 0x23, 0x69), (0x8d, 0x23, 0x69), (0x8f, 0x24, 0x69),
    (0x90, 0x25, 0x68), (0x92, 0x25, 0x68), (0x93, 0x26, 0x67), (0x95, 0x26, 0x67),
    (0x97, 0x27, 0x66), (0x98, 0x27, 0x66), (0x9a, 0x28, 0x65), (0x9b, 0x29, 0x64),
    (0x9d, 0x29, 0x64), (0x9f, 0x2a, 0x63), (0xa0, 0x2a, 0x63), (0xa2, 0x2b, 0x62),
    (0xa3, 0x2c, 0x61), (0xa5, 0x2c, 0x60), (0xa6, 0x2d, 0x60), (0xa8, 0x2e, 0x5f),
    (0xa9, 0x2e, 0x5e), (0xab, 0x2f, 0x5e), (0xad, 0x30, 0x5d), (0xae, 0x30, 0x5c),
    (0xb0, 0x31, 0x5b), (0xb1, 0x32, 0x5a), (0xb3, 0x32, 0x5a), (0xb4, 0x33, 0x59),
    (0xb6, 0x34, 0x58), (0xb7, 0x35, 0x57), (0xb9, 0x35, 0x56), (0xba, 0x36, 0x55),
    (0xbc, 0x37, 0x54), (0xbd, 0x38, 0x53), (0xbf, 0x39, 0x52), (0xc0, 0x3a, 0x51),
    (0xc1, 0x3a, 0x50), (0xc3, 0x3b, 0x4f), (0xc4, 0x3c, 0x4e), (0xc6, 0x3d, 0x4d),
    (0xc7, 0x3e, 0x4c), (0xc8, 0x3f, 0x4b), (0xca, 0x40, 0x4a), (0xcb, 0x41, 0x49),
    (0xcc, 0x42, 0x48), (0xce, 0x43, 0x47), (0xcf, 0x44, 0x46), (0xd0, 0x45, 0x45),
    (0xd2, 0x46, 0x44), (0xd3, 0x47, 0x43), (0xd4, 0x48, 0x42), (0xd5, 0x4a, 0x41),
    (0xd7, 0x4b, 0x3f), (0xd8, 0x4c, 0x3e), (0xd9, 0x4d, 0x3d), (0xda, 0x4e, 0x3c),
    (0xdb, 0x50, 0x3b), (0xdd, 0x51, 0x3a), (0xde, 0x52, 0x38), (0xdf, 0x53, 0x37),
    (0xe0, 0x55, 0x36), (0xe1, 0x56, 0x35), (0xe2, 0x57, 0x34), (0xe3, 0x59, 0x33),
    (0xe4, 0x5a, 0x31), (0xe5, 0x5c, 0x30), (0xe6, 0x5d, 0x2f), (0xe7, 0x5e, 0x2e),
    (0xe8, 0x60, 0x2d), (0xe9, 0x61, 0x2b), (0xea, 0x63, 0x2a), (0xeb, 0x64, 0x29),
    (0xeb, 0x66, 0x28), (0xec, 0x67, 0x26), (0xed, 0x69, 0x25), (0xee, 0x6a, 0x24),
    (0xef, 0x6c, 0x23), (0xef, 0x6e, 0x21), (0xf0, 0x6f, 0x20), (0xf1, 0x71, 0x1f),
    (0xf1, 0x73, 0x1d), (0xf2, 0x74, 0x1c), (0xf3, 0x76, 0x1b), (0xf3, 0x78, 0x19),
    (0xf4, 0x79, 0x18), (0xf5, 0x7b, 0x17), (0xf5, 0x7d, 0x15), (0xf6, 0x7e, 0x14),
    (0xf6, 0x80, 0x13), (0xf7, 0x82, 0x12), (0xf7, 0x84, 0x10), (0xf8, 0x85, 0x0f),
    (0xf8, 0x87, 0x0e), (0xf8, 0x89, 0x0c), (0xf9, 0x8b, 0x0b), (0xf9, 0x8c, 0x0a),
    (0xf9, 0x8e, 0x09), (0xfa, 0x90, 0x08), (0xfa, 0x92, 0x07), (0xfa, 0x94, 0x07),
    (0xfb, 0x96, 0x06), (0xfb, 0x97, 0x06), (0xfb, 0x99, 0x06), (0xfb, 0x9b, 0x06),
    (0xfb, 0x9d, 0x07), (0xfc, 0x9f, 0x07), (0xfc, 0xa1, 0x08), (0xfc, 0xa3, 0x09),
    (0xfc, 0xa5, 0x0a), (0xfc, 0xa6, 0x0c), (0xfc, 0xa8, 0x0d), (0xfc, 0xaa, 0x0f),
    (0xfc, 0xac, 0x11), (0xfc, 0xae, 0x12), (0xfc, 0xb0, 0x14), (0xfc, 0xb2, 0x16),
    (0xfc, 0xb4, 0x18), (0xfb, 0xb6, 0x1a), (0xfb, 0xb8, 0x1d), (0xfb, 0xba, 0x1f),
    (0xfb, 0xbc, 0x21), (0xfb, 0xbe, 0x23), (0xfa, 0xc0, 0x26), (0xfa, 0xc2, 0x28),
    (0xfa, 0xc4, 0x2a), (0xfa, 0xc6, 0x2d), (0xf9, 0xc7, 0x2f), (0xf9, 0xc9, 0x32),
    (0xf9, 0xcb, 0x35), (0xf8, 0xcd, 0x37), (0xf8, 0xcf, 0x3a), (0xf7, 0xd1, 0x3d),
    (0xf7, 0xd3, 0x40), (0xf6, 0xd5, 0x43), (0xf6, 0xd7, 0x46), (0xf5, 0xd9, 0x49),
    (0xf5, 0xdb, 0x4c), (0xf4, 0xdd, 0x4f), (0xf4, 0xdf, 0x53), (0xf4, 0xe1, 0x56),
    (0xf3, 0xe3, 0x5a), (0xf3, 0xe5, 0x5d), (0xf2, 0xe6, 0x61), (0xf2, 0xe8, 0x65),
    (0xf2, 0xea, 0x69), (0xf1, 0xec, 0x6d), (0xf1, 0xed, 0x71), (0xf1, 0xef, 0x75),
    (0xf1, 0xf1, 0x79), (0xf2, 0xf2, 0x7d), (0xf2, 0xf4, 0x82), (0xf3, 0xf5, 0x86),
    (0xf3, 0xf6, 0x8a), (0xf4, 0xf8, 0x8e), (0xf5, 0xf9, 0x92), (0xf6, 0xfa, 0x96),
    (0xf8, 0xfb, 0x9a), (0xf9, 0xfc, 0x9d), (0xfa, 0xfd, 0xa1), (0xfc, 0xff, 0xa4),
];

/// First gradient position used; the darkest entries are skipped so every
/// shade stays visible against a black curve.
const PALETTE_START: f64 = 0.2;
const PALETTE_END: f64 = 1.0;

/// Color of the inferno map at `t` in `[0, 1]`.
///
/// Like a matplotlib listed colormap, `t` picks table entry `⌊t · 256⌋`
/// (the last entry for `t = 1`); neighbouring entries are not blended.
pub fn inferno(t: f64) -> Srgb<u8> {
    let index = ((t.clamp(0.0, 1.0) * INFERNO.len() as f64) as usize).min(INFERNO.len() - 1);
    let (r, g, b) = INFERNO[index];
    Srgb::new(r, g, b)
}

/// `n` colors from light-on-dark inferno, ordered from the first boundary
/// to the last.
pub fn segment_palette(n: usize) -> Vec<Srgb<u8>> {
    match n {
        0 => Vec::new(),
        1 => vec![inferno(PALETTE_START)],
        _ => {
            let step = (PALETTE_END - PALETTE_START) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = if i == n - 1 {
                        PALETTE_END
                    } else {
                        PALETTE_START + i as f64 * step
                    };
                    inferno(t)
                })
                .collect()
        }
    }
}
