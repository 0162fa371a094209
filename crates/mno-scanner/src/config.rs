use crate::cancel::CancelToken;

/// Starting size of the streaming buffer, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Configuration for a record scan.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────────┐
/// │ Field            │ Purpose                                          │
/// ├──────────────────┼──────────────────────────────────────────────────┤
/// │ initial_capacity │ Streaming buffer size before any growth          │
/// │ cancel           │ Optional token checked once per line             │
/// └──────────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// `initial_capacity` only affects the streaming scanner. The buffer
/// doubles whenever a line does not fit, so a small value is always
/// correct, just slower. Zero is treated as one.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub initial_capacity: usize,
    pub cancel: Option<CancelToken>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
            cancel: None,
        }
    }
}
