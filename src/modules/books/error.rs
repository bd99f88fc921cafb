use thiserror::Error;

/// Errors raised while building or printing a book report.
#[derive(Debug, Error)]
pub enum BookError {
    /// A text field would not fit its fixed byte capacity.
    ///
    /// `required` counts the terminating NUL, matching how the capacity
    /// of the legacy fixed-size buffers is expressed.
    #[error("{field} needs {required} bytes but its capacity is {capacity}")]
    CapacityExceeded {
        field: &'static str,
        capacity: usize,
        required: usize,
    },

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
