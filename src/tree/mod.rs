//! Directory tree walking logic
//!
//! A [`Filter`] decides which entries are left out, and a [`TreeWalker`]
//! reads the directory hierarchy into a [`TreeNode`] that the renderers in
//! [`crate::output`] consume.

mod config;
mod filter;
mod node;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use filter::Filter;
pub use node::{Iter, TreeNode};
pub use utils::{match_pattern, relative_path};
pub use walker::TreeWalker;
