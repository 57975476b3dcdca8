//! # Tremor
//!
//! 纯 Rust 实现的定点 (整数) Vorbis I 音频解码器.
//!
//! 解码全程只用整数运算: 码本 Huffman 解码, floor 0/1 曲线,
//! residue 0/1/2, 声道逆耦合, 定点逆 MDCT, 加窗与重叠相加.
//! 输入是已经从容器中拆出的 Vorbis 包, 输出是交织的 16 位 PCM.
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use tremor::codec::{Decoder, DecoderConfig, Packet, VorbisDecoder};
//!
//! # fn demo(packets: Vec<Packet>) -> tremor::core::VorbisResult<()> {
//! let mut decoder = VorbisDecoder::new(DecoderConfig::default());
//! decoder.open()?;
//! for packet in &packets {
//!     decoder.send_packet(packet)?;
//!     while let Some(frame) = decoder.receive_frame()? {
//!         println!("pts={} samples={}", frame.pts, frame.nb_samples);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `tremor-core` | 错误类型, 比特流读写, 定点算术, 声道布局 |
//! | `tremor-codec` | 头包解析, 码本, floor, residue, IMDCT, 合成与解码器 |

/// 基础设施: 错误码, 比特流, 定点算术
pub use tremor_core as core;

/// 解码器本体
pub use tremor_codec as codec;

pub mod logging;

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
