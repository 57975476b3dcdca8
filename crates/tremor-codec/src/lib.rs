//! # tremor-codec
//!
//! 只用整数运算的 Vorbis 解码器.
//!
//! 解码链路: 包头 mode 选择 → mapping → 每声道 floor 与 residue →
//! 逆耦合 → 逆 MDCT → 加窗 → [`DspState`] 中的重叠相加 → 拉取 PCM.
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use tremor_codec::{Decoder, DecoderConfig, Packet, VorbisDecoder};
//!
//! # fn demo(packets: Vec<Packet>) -> tremor_core::VorbisResult<()> {
//! let mut dec = VorbisDecoder::new(DecoderConfig::default());
//! dec.open()?;
//! for packet in &packets {
//!     dec.send_packet(packet)?;
//!     while let Some(frame) = dec.receive_frame()? {
//!         println!("{} 个样本, pts={}", frame.nb_samples, frame.pts);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod codebook;
pub mod comment;
pub mod decoder;
pub mod dsp;
pub mod floor;
pub mod frame;
pub mod info;
pub mod mapping;
pub mod mdct;
pub mod packet;
pub mod residue;
pub mod synthesis;
mod tables;
pub mod window;

// 重导出常用类型
pub use block::Block;
pub use codebook::{Codebook, StaticCodebook};
pub use comment::Comment;
pub use decoder::{Decoder, DecoderConfig, DecoderState, VorbisDecoder};
pub use dsp::DspState;
pub use frame::AudioFrame;
pub use info::{CodecSetup, HeaderKind, Info, Mode};
pub use packet::Packet;
pub use synthesis::{packet_blocksize, synthesis, synthesis_trackonly};
