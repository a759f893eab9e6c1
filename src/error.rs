use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while building vectors or views.
///
/// Index and size contracts are not represented here; they are trusted and
/// only checked by debug assertions.
#[derive(Debug, Clone, Error)]
pub enum VectorError {
    /// Backing storage for an owning vector could not be reserved.
    #[error("failed to allocate storage for {len} elements")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("stride must be at least 1")]
    ZeroStride,

    /// The storage handed to a strided view cannot hold every logical element.
    #[error("strided view needs {required} storage elements, found {available}")]
    StorageTooShort { required: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;
