use thiserror::Error;

/// Crate Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate Error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Tag length is not one of [`TAG_LENGTHS`](crate::TAG_LENGTHS). This is the
    /// operation error that the failing vectors are built to provoke.
    #[error("operation error: illegal tag length {bits} bits")]
    InvalidTagLength { bits: u16 },

    /// Attempted to import an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// The provider has no instantiation for this IV length.
    #[error("unsupported IV length: {len} bytes")]
    UnsupportedIvLength { len: usize },

    /// Ciphertext too short to hold the tag declared by the algorithm parameters.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Computed authentication tag did not match the input tag.
    #[error("GCM authentication failed (invalid tag)")]
    AuthFailed,

    /// A case was used before its key material was imported.
    #[error("test case \"{name}\" has no imported key")]
    KeyNotImported { name: String },

    /// The underlying AEAD implementation refused the operation.
    #[error("AES-GCM backend error")]
    Backend,
}
