//! 逐流合成状态: 重叠相加环形缓冲区与 granule position 跟踪.

use std::sync::Arc;

use log::{debug, trace};
use tremor_core::{VorbisError, VorbisResult};

use crate::block::Block;
use crate::info::Info;
use crate::packet::GRANULE_UNKNOWN;
use crate::window::window_for;

/// 逻辑流的合成状态
///
/// 环形缓冲区每声道 `blocksize[1]` 个样本, 分为两个半区交替作为
/// "当前块尾部" 与 "待输出区". 每次 `blockin` 前调用方必须已经通过
/// [`DspState::read`] 取走全部可用样本.
#[derive(Debug)]
pub struct DspState {
    info: Arc<Info>,
    windows: [&'static [i32]; 2],
    pcm: Vec<Vec<i32>>,
    lw: usize,
    w: usize,
    center_w: usize,
    /// None 表示尚未收到第一个音频块
    pcm_returned: Option<usize>,
    pcm_current: usize,
    granulepos: i64,
    sequence: Option<i64>,
    /// 从第一个已知序号的块开始累计的样本数
    sample_count: Option<i64>,
    eofflag: bool,
}

impl DspState {
    /// 三个头包全部读取后创建
    pub fn new(info: Arc<Info>) -> VorbisResult<Self> {
        if !info.is_ready() {
            return Err(VorbisError::InvalidArgument("流参数尚未完整".into()));
        }
        let windows = [window_for(info.blocksizes[0])?, window_for(info.blocksizes[1])?];
        let storage = info.blocksizes[1];
        let mut dsp = Self {
            pcm: vec![vec![0; storage]; info.channels],
            info,
            windows,
            lw: 0,
            w: 0,
            center_w: 0,
            pcm_returned: None,
            pcm_current: 0,
            granulepos: GRANULE_UNKNOWN,
            sequence: None,
            sample_count: None,
            eofflag: false,
        };
        dsp.restart();
        Ok(dsp)
    }

    /// 丢弃重叠历史与位置信息, 保留窗表 (seek 后使用)
    pub fn restart(&mut self) {
        self.center_w = self.info.blocksizes[1] / 2;
        self.pcm_current = self.center_w;
        self.pcm_returned = None;
        self.granulepos = GRANULE_UNKNOWN;
        self.sequence = None;
        self.sample_count = None;
        self.eofflag = false;
    }

    /// 流参数
    pub fn info(&self) -> &Arc<Info> {
        &self.info
    }

    /// 短块与长块的半窗
    pub fn windows(&self) -> [&'static [i32]; 2] {
        self.windows
    }

    /// 最近一块的长短标志
    pub fn w(&self) -> usize {
        self.w
    }

    /// 最近一块结束处的 granule position, 未知时为 -1
    pub fn granulepos(&self) -> i64 {
        self.granulepos
    }

    /// 最近一块的包序号
    pub fn sequence(&self) -> Option<i64> {
        self.sequence
    }

    /// 是否已收到流的最后一个包
    pub fn is_eof(&self) -> bool {
        self.eofflag
    }

    /// 把一个解码完成的块并入输出
    ///
    /// 与上一块的后半部分重叠相加, 本块后半部分留在环形缓冲区中等待
    /// 下一块. 只做跟踪的块 (`pcmend == 0`) 仅更新位置信息.
    pub fn blockin(&mut self, block: &Block) -> VorbisResult<()> {
        let pending = self.pcmout();
        if pending > 0 {
            return Err(VorbisError::InvalidArgument(format!(
                "还有 {pending} 个样本未读取"
            )));
        }

        let bs = self.info.blocksizes;
        self.lw = self.w;
        self.w = block.w;

        if self.sequence.is_none_or(|seq| seq + 1 != block.sequence) {
            if self.sequence.is_some() {
                debug!(
                    "包序号不连续: {:?} -> {}, granule position 置为未知",
                    self.sequence, block.sequence
                );
            }
            self.granulepos = GRANULE_UNKNOWN;
            self.sample_count = None;
        }
        self.sequence = Some(block.sequence);

        if block.pcmend > 0 {
            self.overlap_add(block);
        }

        let step = (bs[self.lw] / 4 + bs[self.w] / 4) as i64;
        self.sample_count = Some(self.sample_count.map_or(0, |count| count + step));

        if self.granulepos == GRANULE_UNKNOWN {
            if block.granulepos != GRANULE_UNKNOWN {
                self.granulepos = block.granulepos;
                let count = self.sample_count.unwrap_or(0);
                if count > self.granulepos {
                    let extra = (count - block.granulepos).max(0);
                    if block.eofflag {
                        // 既是首页又是末页时, 按规则裁掉尾部
                        self.trim_end(extra);
                    } else if let Some(returned) = self.pcm_returned {
                        let trimmed = (returned + extra as usize).min(self.pcm_current);
                        trace!("裁掉开头 {} 个样本", trimmed - returned);
                        self.pcm_returned = Some(trimmed);
                    }
                }
            }
        } else {
            self.granulepos += step;
            if block.granulepos != GRANULE_UNKNOWN && self.granulepos != block.granulepos {
                if self.granulepos > block.granulepos && block.eofflag {
                    self.trim_end(self.granulepos - block.granulepos);
                }
                self.granulepos = block.granulepos;
            }
        }

        if block.eofflag {
            self.eofflag = true;
        }
        Ok(())
    }

    fn overlap_add(&mut self, block: &Block) {
        let bs = self.info.blocksizes;
        let n = bs[self.w] / 2;
        let n0 = bs[0] / 2;
        let n1 = bs[1] / 2;

        let (this_center, prev_center) = if self.center_w != 0 {
            (n1, 0)
        } else {
            (0, n1)
        };

        for (ring, p) in self.pcm.iter_mut().zip(&block.pcm) {
            match (self.lw, self.w) {
                (1, 1) => add_into(&mut ring[prev_center..prev_center + n1], &p[..n1]),
                (1, _) => {
                    let start = prev_center + n1 / 2 - n0 / 2;
                    add_into(&mut ring[start..start + n0], &p[..n0]);
                }
                (_, 1) => {
                    let p = &p[n1 / 2 - n0 / 2..];
                    add_into(&mut ring[prev_center..prev_center + n0], &p[..n0]);
                    ring[prev_center + n0..prev_center + n1 / 2 + n0 / 2]
                        .copy_from_slice(&p[n0..n1 / 2 + n0 / 2]);
                }
                _ => add_into(&mut ring[prev_center..prev_center + n0], &p[..n0]),
            }

            // 本块后半部分保留到下一块
            ring[this_center..this_center + n].copy_from_slice(&p[n..2 * n]);
        }

        self.center_w = if self.center_w != 0 { 0 } else { n1 };

        match self.pcm_returned {
            None => {
                self.pcm_returned = Some(this_center);
                self.pcm_current = this_center;
            }
            Some(_) => {
                self.pcm_returned = Some(prev_center);
                self.pcm_current = prev_center + bs[self.lw] / 4 + bs[self.w] / 4;
            }
        }
    }

    /// 末包声明的位置小于已解码的样本数: 去掉多出的尾部
    fn trim_end(&mut self, extra: i64) {
        let Some(returned) = self.pcm_returned else {
            return;
        };
        let available = self.pcm_current.saturating_sub(returned) as i64;
        let extra = extra.clamp(0, available) as usize;
        if extra > 0 {
            trace!("末包裁掉尾部 {extra} 个样本");
        }
        self.pcm_current -= extra;
    }

    /// 当前可读取的样本数 (每声道)
    pub fn pcmout(&self) -> usize {
        match self.pcm_returned {
            Some(returned) if returned < self.pcm_current => self.pcm_current - returned,
            _ => 0,
        }
    }

    /// 第 `ch` 声道的可读取样本, 长度等于 [`DspState::pcmout`]
    pub fn pcm(&self, ch: usize) -> &[i32] {
        match self.pcm_returned {
            Some(returned) if returned < self.pcm_current => {
                &self.pcm[ch][returned..self.pcm_current]
            }
            _ => &[],
        }
    }

    /// 标记 `n` 个样本已被读取
    pub fn read(&mut self, n: usize) -> VorbisResult<()> {
        if n == 0 {
            return Ok(());
        }
        match self.pcm_returned {
            Some(returned) if returned + n <= self.pcm_current => {
                self.pcm_returned = Some(returned + n);
                Ok(())
            }
            _ => Err(VorbisError::InvalidArgument(format!(
                "读取 {n} 个样本, 可用 {}",
                self.pcmout()
            ))),
        }
    }
}

fn add_into(dst: &mut [i32], src: &[i32]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = d.wrapping_add(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::Codebook;
    use crate::info::{CodecSetup, Mode};

    fn info(channels: usize, blocksizes: [usize; 2]) -> Arc<Info> {
        Arc::new(Info {
            channels,
            rate: 44100,
            blocksizes,
            setup: Some(CodecSetup {
                books: Vec::<Codebook>::new(),
                floors: Vec::new(),
                residues: Vec::new(),
                mappings: Vec::new(),
                modes: vec![Mode {
                    blockflag: false,
                    mapping: 0,
                }],
                floor_looks: Vec::new(),
                residue_looks: Vec::new(),
            }),
            ..Info::default()
        })
    }

    /// 构造一个已 "解码" 的块, 所有样本取固定值
    fn block(info: &Info, w: usize, sequence: i64, value: i32) -> Block {
        let mut b = Block::new(info);
        b.w = w;
        b.pcmend = info.blocksizes[w];
        b.sequence = sequence;
        for ch in b.pcm.iter_mut() {
            ch[..info.blocksizes[w]].fill(value);
        }
        b
    }

    fn drain(dsp: &mut DspState) -> usize {
        let n = dsp.pcmout();
        dsp.read(n).unwrap();
        n
    }

    #[test]
    fn test_重叠相加样本数() {
        let info = info(2, [256, 2048]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        let flags = [0usize, 1, 1, 0, 0, 1, 0, 1, 1];
        let mut total = 0;
        for (i, &w) in flags.iter().enumerate() {
            dsp.blockin(&block(&info, w, i as i64, 1)).unwrap();
            total += drain(&mut dsp);
        }
        let bs = info.blocksizes;
        let expected: usize = flags.iter().map(|&w| bs[w] / 2).sum::<usize>()
            - bs[flags[0]] / 4
            - bs[flags[flags.len() - 1]] / 4;
        assert_eq!(total, expected);
    }

    #[test]
    fn test_首块不输出() {
        let info = info(1, [256, 2048]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        dsp.blockin(&block(&info, 1, 0, 5)).unwrap();
        assert_eq!(dsp.pcmout(), 0);
        dsp.blockin(&block(&info, 1, 1, 7)).unwrap();
        assert_eq!(dsp.pcmout(), 1024);
        // 上一块尾部 + 本块头部
        assert!(dsp.pcm(0).iter().all(|&v| v == 12));
    }

    #[test]
    fn test_短长过渡的复制区() {
        let info = info(1, [256, 2048]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        dsp.blockin(&block(&info, 0, 0, 1)).unwrap();
        dsp.blockin(&block(&info, 1, 1, 10)).unwrap();
        let out = dsp.pcm(0);
        assert_eq!(out.len(), 256 / 4 + 2048 / 4);
        // 前 128 个样本重叠相加, 之后直接复制长块
        assert!(out[..128].iter().all(|&v| v == 11));
        assert!(out[128..].iter().all(|&v| v == 10));
    }

    #[test]
    fn test_未读完不能送入新块() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        dsp.blockin(&block(&info, 0, 0, 0)).unwrap();
        dsp.blockin(&block(&info, 0, 1, 0)).unwrap();
        assert!(matches!(
            dsp.blockin(&block(&info, 0, 2, 0)),
            Err(VorbisError::InvalidArgument(_))
        ));
        assert!(dsp.read(1000).is_err());
        dsp.read(100).unwrap();
        assert_eq!(dsp.pcmout(), 28);
    }

    #[test]
    fn test_末包裁尾() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        let mut b = block(&info, 0, 0, 0);
        b.granulepos = 0;
        dsp.blockin(&b).unwrap();
        assert_eq!(dsp.granulepos(), 0);

        dsp.blockin(&block(&info, 0, 1, 0)).unwrap();
        assert_eq!(dsp.granulepos(), 128);
        drain(&mut dsp);

        let mut b = block(&info, 0, 2, 0);
        b.granulepos = 200;
        b.eofflag = true;
        dsp.blockin(&b).unwrap();
        assert_eq!(dsp.pcmout(), 72);
        assert_eq!(dsp.granulepos(), 200);
        assert!(dsp.is_eof());
    }

    #[test]
    fn test_首页裁头() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        dsp.blockin(&block(&info, 0, 0, 0)).unwrap();
        drain(&mut dsp);
        let mut b = block(&info, 0, 1, 0);
        // 已累计 128 个样本, 页面只声明了 100 个
        b.granulepos = 100;
        dsp.blockin(&b).unwrap();
        assert_eq!(dsp.pcmout(), 100);
    }

    #[test]
    fn test_序号不连续丢失位置() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        let mut b = block(&info, 0, 0, 0);
        b.granulepos = 0;
        dsp.blockin(&b).unwrap();
        drain(&mut dsp);
        dsp.blockin(&block(&info, 0, 5, 0)).unwrap();
        assert_eq!(dsp.granulepos(), GRANULE_UNKNOWN);
        assert_eq!(dsp.sequence(), Some(5));
    }

    #[test]
    fn test_只跟踪不输出() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        let mut b = block(&info, 0, 0, 3);
        b.pcmend = 0;
        b.granulepos = 0;
        dsp.blockin(&b).unwrap();
        let mut b = block(&info, 0, 1, 3);
        b.pcmend = 0;
        dsp.blockin(&b).unwrap();
        assert_eq!(dsp.pcmout(), 0);
        assert_eq!(dsp.granulepos(), 128);
    }

    #[test]
    fn test_重启() {
        let info = info(1, [256, 256]);
        let mut dsp = DspState::new(info.clone()).unwrap();
        dsp.blockin(&block(&info, 0, 0, 1)).unwrap();
        dsp.blockin(&block(&info, 0, 1, 1)).unwrap();
        dsp.restart();
        assert_eq!(dsp.pcmout(), 0);
        assert_eq!(dsp.sequence(), None);
        dsp.blockin(&block(&info, 0, 9, 1)).unwrap();
        assert_eq!(dsp.pcmout(), 0);
    }

    #[test]
    fn test_未完成头包不能创建() {
        let info = Arc::new(Info::default());
        assert!(DspState::new(info).is_err());
    }
}
