//! Re-exports and the macro shared by every error type defined on top of [`ErrorKind`]s.
//!
//! [`ErrorKind`]: ../enum.ErrorKind.html

pub use crate::{def_error_base_on_kind, AnyError, OtherError};
pub use std::fmt;
pub use thiserror::Error;

/// Defines an error type which wraps a kind and a dynamic cause.
///
/// The kind type gets two constructors: `because` wraps any `std::error::Error`, `other` wraps
/// anything printable.
#[macro_export]
macro_rules! def_error_base_on_kind {
    ($error:ident, $error_kind:ty, $comment_error:expr, $comment_because:expr, $comment_other:expr) => {
        #[doc = $comment_error]
        #[derive(Error, Debug, Clone)]
        pub struct $error {
            kind: $error_kind,
            inner: $crate::AnyError,
        }

        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if let Some(err) = self.cause() {
                    if f.alternate() {
                        write!(f, "{}: {}", self.kind(), err)
                    } else {
                        write!(f, "{}({})", self.kind(), err)
                    }
                } else {
                    write!(f, "{}", self.kind())
                }
            }
        }

        impl From<$error_kind> for $error {
            fn from(kind: $error_kind) -> Self {
                kind.because($crate::SilentError)
            }
        }

        impl $error_kind {
            #[doc = $comment_because]
            pub fn because<E>(self, reason: E) -> $error
            where
                E: std::error::Error + Send + Sync + 'static,
            {
                $error {
                    kind: self,
                    inner: reason.into(),
                }
            }

            #[doc = $comment_other]
            pub fn other<T>(self, reason: T) -> $error
            where
                T: fmt::Display + fmt::Debug + Send + Sync + 'static,
            {
                $error {
                    kind: self,
                    inner: $crate::OtherError::new(reason).into(),
                }
            }
        }

        impl $error {
            /// A accessor for the kind of the error.
            pub fn kind(&self) -> $error_kind {
                self.kind
            }

            /// A wrapper around the `downcast_ref` of the inner dynamic error.
            pub fn downcast_ref<T>(&self) -> Option<&T>
            where
                T: fmt::Display + fmt::Debug + Send + Sync + 'static,
            {
                self.inner.downcast_ref::<T>()
            }

            /// The lowest level cause of this error.
            pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
                self.inner.root_cause()
            }

            /// The underlying cause, `None` when the error only carries its kind.
            pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
                if self.inner.downcast_ref::<$crate::SilentError>().is_some() {
                    None
                } else {
                    self.inner.chain().next()
                }
            }
        }
    };
    ($error:ident, $error_kind:ty, $comment_error:expr) => {
        $crate::def_error_base_on_kind!(
            $error,
            $error_kind,
            $comment_error,
            "Creates an error with the kind and a reason.",
            "Creates an error with the kind and a printable reason."
        );
    };
}
