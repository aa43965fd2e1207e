//! Boundary events for diff operations.
//!
//! The differ, both patch renderers, close-match ranking and file loading wrap
//! their work in a start event and exactly one end or end-error event. Every
//! event carries `component`, `op` and `event`; end events add `duration_ms`.

/// Emit the start event for a diff operation, plus any input sizes.
///
/// # Example
///
/// ```
/// # use seqdiff_core::log_op_start;
/// log_op_start!("unified_diff");
/// log_op_start!("unified_diff", a_len = 3, b_len = 4);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the end event once an operation has produced its output.
///
/// `duration_ms` is required; result sizes such as `hunks` or `lines` may follow.
///
/// # Example
///
/// ```
/// # use seqdiff_core::log_op_end;
/// log_op_end!("unified_diff", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the end-error event for a failed operation.
///
/// The error is converted to [`ExError`](crate::errors::ExError), which supplies
/// the `err_kind` and `err_code` fields.
///
/// # Example
///
/// ```
/// # use seqdiff_core::{log_op_error, errors::DiffError};
/// let err = DiffError::InvalidCount { n: 0 };
/// log_op_error!("get_close_matches", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
