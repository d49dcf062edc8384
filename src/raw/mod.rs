mod cursor;
mod node;
mod raw_btree;
mod shared;

pub(crate) use cursor::Cursor;
pub(crate) use node::{Node, Target};
pub(crate) use raw_btree::RawBTree;
