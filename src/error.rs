use alloc::collections::TryReserveError;

/// Represents errors that can occur in the hash table
#[derive(Debug)]
pub enum Error {
    /// Memory for the bucket array or an owned entry could not be reserved
    OutOfMemory(TryReserveError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HashTableError: {self:?}")
    }
}

impl core::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(value: TryReserveError) -> Self {
        Self::OutOfMemory(value)
    }
}

/// Table result
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::Error;

    #[test]
    fn reserve_failure_converts_and_displays() {
        let exhausted = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let error = Error::from(exhausted);

        assert!(matches!(error, Error::OutOfMemory(_)));
        assert!(format!("{error}").starts_with("HashTableError"));
    }
}
