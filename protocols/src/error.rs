use thiserror::Error;

/// Decode-time contract violations.
///
/// All of these are fatal for the packet they occurred in: a desynced
/// buffer would otherwise silently yield garbage addresses or fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Master reply shorter than the fixed `getserversResponse` header.
    #[error("packet shorter than the getserversResponse header")]
    MalformedPacket,

    /// A 7-byte address group whose trailing byte is not `0x5c`.
    #[error("expected record delimiter 0x5c at offset {offset}")]
    FramingError { offset: usize },

    /// Status block with a trailing key that has no paired value.
    #[error("status response has a key with no value")]
    MalformedStatus,
}
