//! 解码用常量表.

pub(crate) mod floor_lookup;
pub(crate) mod lsp_lookup;
pub(crate) mod mdct_lookup;
pub(crate) mod window_lookup;
