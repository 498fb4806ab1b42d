//! ID prefixes and generation helpers.
//!
//! Store-assigned IDs look like `cat-1a2b3c4d`. Seeded categories keep the
//! plain numeric IDs (`"1"`..`"9"`) they were published with.

use crate::errors::CoreError;

pub const PREFIX_CATEGORY: &str = "cat";
pub const PREFIX_USER: &str = "user";

/// Join a prefix and suffix into an ID.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}

/// Eight lowercase hex characters from the OS random source.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn random_suffix() -> Result<String, CoreError> {
    let mut buf = [0u8; 4];
    getrandom::fill(&mut buf)
        .map_err(|error| CoreError::Other(anyhow::anyhow!("random source unavailable: {error}")))?;
    Ok(buf.iter().map(|byte| format!("{byte:02x}")).collect())
}

/// Stable numeric suffix in `0..1000` derived from `input` (FNV-1a).
///
/// The same input always yields the same suffix, across processes.
#[must_use]
pub fn stable_suffix(input: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    input
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
        % 1000
}
