//! Comments Module
//!
//! Threaded discussion on articles and flashcards.
//!
//! - **`assembler`** - Recursive, depth-capped thread retrieval
//! - **`create`** - Comment and reply creation with precondition checks
//! - **`handlers`** - HTTP handlers
//!
//! Replies store the same article/flashcard reference as their root, so a
//! thread is found by a single indexed lookup for its roots followed by one
//! lookup per comment for its replies.

/// Thread assembly
pub mod assembler;

/// Comment creation
pub mod create;

/// HTTP handlers
pub mod handlers;

pub use assembler::assemble_thread;
pub use create::create_comment;
pub use handlers::{create_comment_handler, get_thread};
