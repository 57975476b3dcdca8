//! 解码器 trait 与 Vorbis 解码器外观.
//!
//! 解码流程:
//! 1. 调用 `open()` 进入头包阶段
//! 2. 依次 `send_packet()` 送入 identification、comment、setup 三个头包
//! 3. 之后每送入一个音频包, 用 `receive_frame()` 取出解码后的帧直到返回 `None`
//! 4. seek 后调用 `flush()` 清空重叠历史
//!
//! ## 错误分级
//!
//! - 头包错误是致命的: 解码器进入 `Failed`, 之后所有调用返回 `EINVAL`, 直到重新 `open()`.
//! - 音频包在包头阶段出错 (mode 号越界、长块窗口标志截断) 时整包丢弃, 不进入重叠相加.
//!   下一个包因此被视为序号不连续: granule position 复位为未知, 丢弃的包不计入时长,
//!   时间戳从上一帧接续, 直到下一个携带 granule 的包重新对齐.
//! - 音频包在 floor/residue 阶段出错时只静音受影响的声道, 块照常重叠相加并输出,
//!   随后返回 `EBADPACKET`.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use tremor_core::fixed::clip_to_15;
use tremor_core::{ChannelLayout, ChannelOrder, VorbisError, VorbisResult};

use crate::block::Block;
use crate::comment::Comment;
use crate::dsp::DspState;
use crate::frame::{AudioFrame, NOPTS_VALUE};
use crate::info::{HeaderKind, Info};
use crate::packet::{GRANULE_UNKNOWN, Packet};
use crate::synthesis::{synthesis, synthesis_trackonly};

/// 解码器 trait
pub trait Decoder: Send {
    /// 解码器名称
    fn name(&self) -> &str;

    /// 复位到等待第一个头包的状态
    fn open(&mut self) -> VorbisResult<()>;

    /// 送入一个数据包
    ///
    /// 送入空包表示输入结束, 只影响之后的 `receive_frame`.
    fn send_packet(&mut self, packet: &Packet) -> VorbisResult<()>;

    /// 取出一帧解码数据, `None` 表示需要送入更多数据包
    fn receive_frame(&mut self) -> VorbisResult<Option<AudioFrame>>;

    /// 清空缓存帧与重叠历史 (seek 后使用)
    fn flush(&mut self);
}

/// 解码器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// 输出声道顺序
    pub channel_order: ChannelOrder,
    /// setup 完成时以 debug 级别记录 vendor 与用户注释
    pub log_comments: bool,
    /// 每帧最多包含的样本数 (每声道), 0 表示不拆分
    pub max_frame_samples: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            channel_order: ChannelOrder::Standard,
            log_comments: true,
            max_frame_samples: 4096,
        }
    }
}

/// 解码器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// 尚未 open
    Uninit,
    /// 等待 identification 头
    HeaderId,
    /// 等待 comment 头
    HeaderComment,
    /// 等待 setup 头
    HeaderSetup,
    /// 解码音频包
    Ready,
    /// 头包出错, 整条流不可再用
    Failed,
}

/// setup 完成后才存在的解码状态
struct Stream {
    info: Arc<Info>,
    dsp: DspState,
    block: Block,
    order: Vec<usize>,
    layout: ChannelLayout,
}

/// Vorbis 解码器
pub struct VorbisDecoder {
    config: DecoderConfig,
    state: DecoderState,
    headers: Info,
    comment: Comment,
    stream: Option<Stream>,
    frames: VecDeque<AudioFrame>,
    next_pts: i64,
    flushing: bool,
}

impl VorbisDecoder {
    /// 创建解码器, 需要先调用 `open()`
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            state: DecoderState::Uninit,
            headers: Info::new(),
            comment: Comment::default(),
            stream: None,
            frames: VecDeque::new(),
            next_pts: NOPTS_VALUE,
            flushing: false,
        }
    }

    /// 当前状态
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// 流参数 (头包阶段为已解析的部分)
    pub fn info(&self) -> &Info {
        match &self.stream {
            Some(stream) => stream.info.as_ref(),
            None => &self.headers,
        }
    }

    /// 注释头
    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// 是否已送入结束标记 (空包) 或带 e_o_s 的包
    pub fn is_finished(&self) -> bool {
        self.flushing || self.stream.as_ref().is_some_and(|s| s.dsp.is_eof())
    }

    /// 只推进位置信息, 不产生 PCM (seek 后跳过包)
    pub fn skip_packet(&mut self, packet: &Packet) -> VorbisResult<()> {
        let stream = self.ready_stream()?;
        synthesis_trackonly(&mut stream.block, &stream.dsp, packet)?;
        stream.dsp.blockin(&stream.block)?;
        self.next_pts = NOPTS_VALUE;
        Ok(())
    }

    fn ready_stream(&mut self) -> VorbisResult<&mut Stream> {
        match (self.state, self.stream.as_mut()) {
            (DecoderState::Ready, Some(stream)) => Ok(stream),
            (state, _) => Err(VorbisError::InvalidArgument(format!(
                "解码器状态 {state:?} 不能解码音频包"
            ))),
        }
    }

    fn handle_header(&mut self, packet: &Packet) -> VorbisResult<()> {
        let kind = self.headers.headerin(&mut self.comment, packet)?;
        self.state = match kind {
            HeaderKind::Identification => DecoderState::HeaderComment,
            HeaderKind::Comment => DecoderState::HeaderSetup,
            HeaderKind::Setup => {
                self.start_stream()?;
                DecoderState::Ready
            }
        };
        Ok(())
    }

    fn start_stream(&mut self) -> VorbisResult<()> {
        let info = Arc::new(std::mem::take(&mut self.headers));
        let dsp = DspState::new(info.clone())?;
        let block = Block::new(&info);
        let layout = ChannelLayout::from_channels(info.channels as u32);
        let order = layout.source_order(self.config.channel_order);

        debug!(
            "Vorbis 就绪: {} 声道 ({layout}), {} Hz, 码率 {}/{}/{} {}",
            info.channels,
            info.rate,
            info.bitrate_lower,
            info.bitrate_nominal,
            info.bitrate_upper,
            if info.is_vbr() { "VBR" } else { "CBR" }
        );
        if self.config.log_comments {
            debug!("Vorbis vendor: {}", self.comment.vendor);
            for c in &self.comment.user_comments {
                debug!("Vorbis comment: {c}");
            }
        }

        self.stream = Some(Stream {
            info,
            dsp,
            block,
            order,
            layout,
        });
        Ok(())
    }

    fn handle_audio(&mut self, packet: &Packet) -> VorbisResult<()> {
        let stream = self.ready_stream()?;
        if let Err(e) = synthesis(&mut stream.block, &stream.dsp, packet) {
            // 包头出错: 不调用 blockin, 重叠历史停留在上一个包
            if !stream.block.damaged {
                debug!("包 {} 被丢弃: {e}", packet.packetno);
                return Err(e);
            }
            // 损坏声道已静音, 块仍然参与重叠相加
            warn!("包 {} 部分损坏: {e}", packet.packetno);
            stream.dsp.blockin(&stream.block)?;
            self.drain()?;
            return Err(e);
        }
        stream.dsp.blockin(&stream.block)?;
        self.drain()
    }

    /// 取走 DSP 中全部可用样本, 转换为 16 位交错帧
    fn drain(&mut self) -> VorbisResult<()> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(());
        };
        let count = stream.dsp.pcmout();
        if count == 0 {
            return Ok(());
        }

        let granulepos = stream.dsp.granulepos();
        let mut pts = if granulepos != GRANULE_UNKNOWN {
            granulepos - count as i64
        } else {
            self.next_pts
        };

        let max = match self.config.max_frame_samples {
            0 => count,
            n => n,
        };
        let mut clipped = 0usize;
        let mut start = 0;
        while start < count {
            let nb = max.min(count - start);
            let mut frame = AudioFrame::new(nb as u32, stream.info.rate, stream.layout);
            frame.pts = pts;
            for i in start..start + nb {
                for &src in &stream.order {
                    let raw = stream.dsp.pcm(src)[i] >> 9;
                    let v = clip_to_15(raw);
                    if v != raw {
                        clipped += 1;
                    }
                    frame.data.push(v as i16);
                }
            }
            self.frames.push_back(frame);
            if pts != NOPTS_VALUE {
                pts += nb as i64;
            }
            start += nb;
        }
        if clipped > 0 {
            debug!("块 {} 削波: {clipped} 个样本", stream.block.trace_seq);
        }

        stream.dsp.read(count)?;
        self.next_pts = pts;
        Ok(())
    }
}

impl Default for VorbisDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl Decoder for VorbisDecoder {
    fn name(&self) -> &str {
        "vorbis"
    }

    fn open(&mut self) -> VorbisResult<()> {
        self.state = DecoderState::HeaderId;
        self.headers = Info::new();
        self.comment = Comment::default();
        self.stream = None;
        self.frames.clear();
        self.next_pts = NOPTS_VALUE;
        self.flushing = false;
        Ok(())
    }

    fn send_packet(&mut self, packet: &Packet) -> VorbisResult<()> {
        match self.state {
            DecoderState::Uninit => {
                return Err(VorbisError::InvalidArgument("解码器未打开".into()));
            }
            DecoderState::Failed => {
                return Err(VorbisError::InvalidArgument(
                    "头包解析失败, 解码器不可再用".into(),
                ));
            }
            _ => {}
        }

        if packet.is_empty() {
            self.flushing = true;
            return Ok(());
        }

        if self.state == DecoderState::Ready {
            return self.handle_audio(packet);
        }

        self.handle_header(packet).inspect_err(|e| {
            error!("Vorbis 头包 {} 解析失败: {e}", packet.packetno);
            self.state = DecoderState::Failed;
            self.stream = None;
        })
    }

    fn receive_frame(&mut self) -> VorbisResult<Option<AudioFrame>> {
        match self.state {
            DecoderState::Uninit | DecoderState::Failed => Err(VorbisError::InvalidArgument(
                format!("解码器状态 {:?} 不能取帧", self.state),
            )),
            _ => Ok(self.frames.pop_front()),
        }
    }

    fn flush(&mut self) {
        self.frames.clear();
        self.next_pts = NOPTS_VALUE;
        self.flushing = false;
        if let Some(stream) = self.stream.as_mut() {
            stream.dsp.restart();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_未打开时拒绝调用() {
        let mut dec = VorbisDecoder::default();
        assert_eq!(dec.state(), DecoderState::Uninit);
        assert!(matches!(
            dec.send_packet(&Packet::new(vec![1u8], 0)),
            Err(VorbisError::InvalidArgument(_))
        ));
        assert!(dec.receive_frame().is_err());
    }

    #[test]
    fn test_头包错误进入失败状态() {
        let mut dec = VorbisDecoder::default();
        dec.open().unwrap();
        assert_eq!(dec.state(), DecoderState::HeaderId);
        let err = dec
            .send_packet(&Packet::new(b"\x01notvorbis".to_vec(), 0))
            .unwrap_err();
        assert!(matches!(err, VorbisError::NotVorbis(_)));
        assert_eq!(dec.state(), DecoderState::Failed);

        // 失败后所有调用都是无效调用
        let err = dec
            .send_packet(&Packet::new(b"\x01vorbis".to_vec(), 0))
            .unwrap_err();
        assert_eq!(err.code(), tremor_core::error::OV_EINVAL);
        assert!(dec.receive_frame().is_err());

        // open 重新开始
        dec.open().unwrap();
        assert_eq!(dec.state(), DecoderState::HeaderId);
        assert_eq!(dec.receive_frame().unwrap().map(|f| f.nb_samples), None);
    }

    #[test]
    fn test_空包标记结束() {
        let mut dec = VorbisDecoder::default();
        dec.open().unwrap();
        dec.send_packet(&Packet::empty()).unwrap();
        assert!(dec.is_finished());
        dec.flush();
        assert!(!dec.is_finished());
    }

    #[test]
    fn test_头包阶段不能跳过音频包() {
        let mut dec = VorbisDecoder::default();
        dec.open().unwrap();
        assert!(matches!(
            dec.skip_packet(&Packet::new(vec![0u8], 3)),
            Err(VorbisError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_配置默认值与反序列化() {
        let cfg: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DecoderConfig::default());
        let cfg: DecoderConfig =
            serde_json::from_str(r#"{"channel_order":"vorbis","max_frame_samples":512}"#)
                .unwrap();
        assert_eq!(cfg.channel_order, ChannelOrder::Vorbis);
        assert_eq!(cfg.max_frame_samples, 512);
        assert!(cfg.log_comments);
    }
}
