//! 解码后的音频帧.

use tremor_core::ChannelLayout;

/// 未知时间戳
pub const NOPTS_VALUE: i64 = i64::MIN;

/// 音频帧: 16 位有符号交错 PCM
#[derive(Debug, Clone)]
pub struct AudioFrame {
    /// 交错采样, 长度为 `nb_samples * channels`
    pub data: Vec<i16>,
    /// 本帧包含的采样数 (每声道)
    pub nb_samples: u32,
    /// 采样率 (Hz)
    pub sample_rate: u32,
    /// 声道布局 (按输出顺序)
    pub channel_layout: ChannelLayout,
    /// 首个采样的时间戳, 以 1/sample_rate 为单位 ([`NOPTS_VALUE`] 表示未知)
    pub pts: i64,
    /// 帧时长, 以 1/sample_rate 为单位
    pub duration: i64,
}

impl AudioFrame {
    /// 创建空帧
    pub fn new(nb_samples: u32, sample_rate: u32, channel_layout: ChannelLayout) -> Self {
        Self {
            data: Vec::with_capacity(nb_samples as usize * channel_layout.channels as usize),
            nb_samples,
            sample_rate,
            channel_layout,
            pts: NOPTS_VALUE,
            duration: i64::from(nb_samples),
        }
    }

    /// 声道数
    pub fn channels(&self) -> usize {
        self.channel_layout.channels as usize
    }

    /// 第 `ch` 个输出声道的采样
    pub fn channel_samples(&self, ch: usize) -> impl Iterator<Item = i16> + '_ {
        self.data
            .iter()
            .skip(ch)
            .step_by(self.channels().max(1))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_按声道取采样() {
        let mut frame = AudioFrame::new(3, 44100, ChannelLayout::STEREO);
        frame.data.extend_from_slice(&[1, -1, 2, -2, 3, -3]);
        assert_eq!(frame.channel_samples(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(frame.channel_samples(1).collect::<Vec<_>>(), vec![-1, -2, -3]);
        assert_eq!(frame.duration, 3);
        assert_eq!(frame.pts, NOPTS_VALUE);
    }
}
