// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Panic guard returning a typed result instead of unwinding.

use crate::{ConfluenceError, Result};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run `f`, converting a panic into [`ConfluenceError::CallbackPanic`].
///
/// The closure is treated as unwind safe: it must not leave shared state
/// half-updated when it panics.
///
/// # Example
///
/// ```
/// use confluence_core::{catch_panic, ConfluenceError};
///
/// assert_eq!(catch_panic(|| 2 + 2), Ok(4));
///
/// let failed = catch_panic(|| -> i32 { panic!("boom") });
/// assert_eq!(failed, Err(ConfluenceError::callback_panic("boom")));
/// ```
pub fn catch_panic<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| ConfluenceError::callback_panic(panic_message(payload.as_ref())))
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
