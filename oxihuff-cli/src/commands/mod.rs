//! Command implementations for OxiHuff CLI.

pub mod codes;
pub mod compress;
pub mod decompress;
pub mod encode;
pub mod info;
pub mod tree;

pub use codes::cmd_codes;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use encode::cmd_encode;
pub use info::cmd_info;
pub use test::cmd_test;
pub use tree::cmd_tree;
