//! Hex rendering helpers for raw byte samples.

/// Space separated lowercase hex, e.g. `0a ff 10`.
pub fn hex_string(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hex of at most the first `len` bytes.
pub fn head_sample(data: &[u8], len: usize) -> String {
    hex_string(&data[..len.min(data.len())])
}

/// Hex of at most the last `len` bytes.
pub fn tail_sample(data: &[u8], len: usize) -> String {
    hex_string(&data[data.len().saturating_sub(len)..])
}

/// Contiguous lowercase hex, used where the value is data rather than a sample.
pub fn encode(data: &[u8]) -> String {
    ::hex::encode(data)
}
