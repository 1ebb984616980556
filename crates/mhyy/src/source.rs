//! The seam between identities and whatever sends HTTP requests.

use std::sync::Arc;

use mhyy_protocol::UserHeaders;
use mhyy_session::User;

/// Anything that can supply the per-user request headers.
///
/// HTTP clients take `impl HeaderSource` rather than a concrete [`User`],
/// so tests can hand them a fixed header map instead.
///
/// # Example
///
/// ```rust
/// use mhyy::prelude::*;
///
/// struct Fixed;
///
/// impl HeaderSource for Fixed {
///     fn headers(&self) -> UserHeaders {
///         UserHeaders::from([("x-rpc-channel", "mihoyo".to_string())])
///     }
/// }
///
/// fn attach(source: &impl HeaderSource) -> usize {
///     source.headers().len()
/// }
///
/// assert_eq!(attach(&Fixed), 1);
/// ```
pub trait HeaderSource: Send + Sync {
    fn headers(&self) -> UserHeaders;
}

impl HeaderSource for User {
    fn headers(&self) -> UserHeaders {
        User::headers(self)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn headers(&self) -> UserHeaders {
        (**self).headers()
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for Arc<T> {
    fn headers(&self) -> UserHeaders {
        (**self).headers()
    }
}
