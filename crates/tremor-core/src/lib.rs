//! # tremor-core
//!
//! 定点 Vorbis 解码器的基础设施: 错误类型、小端位序比特流读写、
//! 定点算术与输出声道布局. 本 crate 不包含任何编解码知识.

pub mod bitreader;
pub mod bitwriter;
pub mod channel_layout;
pub mod error;
pub mod fixed;

// 重导出常用类型
pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
pub use channel_layout::{ChannelLayout, ChannelOrder};
pub use error::{VorbisError, VorbisResult};
pub use fixed::VFloat;
