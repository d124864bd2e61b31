//! # Messaging convention markers.
//!
//! Marker traits establishing the command/query naming convention consumed
//! by the service's dispatcher. The dispatcher itself lives elsewhere; these
//! traits only fix the type hierarchy concrete messages extend.
//!
//! A concrete message declares its result type through [`Message::Result`],
//! and the command/query split is expressed by bounding that result:
//!
//! ```
//! use libris_messaging::{Message, Query, QueryResult, MessageResult};
//!
//! struct GetAuthor {
//!     id: u64,
//! }
//!
//! struct GetAuthorResult {
//!     display_name: String,
//! }
//!
//! impl MessageResult for GetAuthorResult {}
//! impl QueryResult for GetAuthorResult {}
//!
//! impl Message for GetAuthor {
//!     type Result = GetAuthorResult;
//! }
//!
//! impl Query for GetAuthor {}
//! ```

/// Marker for any value produced by handling a message.
pub trait MessageResult {}

/// Marker for values produced by handling a command.
pub trait CommandResult: MessageResult {}

/// Marker for values produced by handling a query.
pub trait QueryResult: MessageResult {}

/// Base trait for messages, generic over the result the handler produces.
pub trait Message {
    type Result: MessageResult;
}

/// A message that mutates state and yields a [`CommandResult`].
pub trait Command: Message
where
    Self::Result: CommandResult,
{
}

/// A message that reads state and yields a [`QueryResult`].
pub trait Query: Message
where
    Self::Result: QueryResult,
{
}
