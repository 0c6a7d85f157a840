//! Declares the persistence error enum each repository port exposes.
//!
//! Every repository fails in the same three ways: the store is unreachable,
//! a statement fails, or a write collides with stored state. The macro emits
//! those variants with a message prefixed by the repository name, plus
//! constructors taking anything convertible into `String`:
//!
//! ```ignore
//! define_persistence_error! {
//!     /// Persistence errors raised by user repository adapters.
//!     pub enum UserPersistenceError for "user repository" {
//!         /// The write collides with another stored user.
//!         Conflict,
//!     }
//! }
//!
//! let err = UserPersistenceError::conflict("email is already registered");
//! assert_eq!(err.to_string(), "user repository conflict: email is already registered");
//! ```

macro_rules! define_persistence_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident for $subject:literal {
            $(#[$conflict_meta:meta])*
            Conflict $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// Repository connection could not be established.
            #[error("{subject} connection failed: {message}", subject = $subject)]
            Connection { message: String },
            /// Query or mutation failed during execution.
            #[error("{subject} query failed: {message}", subject = $subject)]
            Query { message: String },
            $(#[$conflict_meta])*
            #[error("{subject} conflict: {message}", subject = $subject)]
            Conflict { message: String },
        }

        impl $name {
            /// The store could not be reached.
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            /// A statement failed to execute.
            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }

            /// The write collides with stored state.
            pub fn conflict(message: impl Into<String>) -> Self {
                Self::Conflict {
                    message: message.into(),
                }
            }
        }
    };
}

pub(crate) use define_persistence_error;
