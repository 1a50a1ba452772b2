// libpn532/src/protocol/checksum.rs

/// Compute the length checksum (LCS) for a frame header.
/// LCS satisfies: length + LCS = 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the data checksum (DCS) over the checksummed region of a
/// frame, i.e. the bytes starting at the TFI (TFI + command + payload).
/// DCS satisfies: sum(data) + DCS = 0 (mod 256)
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Verify the mod-256 zero-sum relation over `data` plus the received
/// checksum byte.
pub fn checksum_ok(data: &[u8], checksum: u8) -> bool {
    data.iter()
        .fold(checksum, |acc, &b| acc.wrapping_add(b))
        == 0
}
