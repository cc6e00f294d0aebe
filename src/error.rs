use thiserror::Error;

/// Errors returned by the sort entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The sequence handle was absent. Nothing was mutated.
    #[error("invalid argument: `{name}` must not be absent")]
    InvalidArgument { name: &'static str },
}

pub type SortResult<T = ()> = Result<T, SortError>;

/// Unwraps a possibly absent sequence argument, rejecting `None` before anything is accessed.
pub(crate) fn required<'a, T>(
    v: Option<&'a mut [T]>,
    name: &'static str,
) -> SortResult<&'a mut [T]> {
    v.ok_or_else(|| {
        tracing::debug!(argument = name, "rejecting absent sequence");
        SortError::InvalidArgument { name }
    })
}
