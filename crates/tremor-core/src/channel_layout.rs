//! 输出声道布局.
//!
//! Vorbis 码流内的多声道顺序 (L, C, R, ...) 与常见输出设备的顺序
//! (L, R, C, LFE, ...) 不同, 这里给出两者之间的映射.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// 声道位掩码, 每个位代表一个扬声器位置
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelMask: u32 {
        /// 前方左声道
        const FRONT_LEFT    = 1 << 0;
        /// 前方右声道
        const FRONT_RIGHT   = 1 << 1;
        /// 前方中央声道
        const FRONT_CENTER  = 1 << 2;
        /// 低频效果 (LFE)
        const LOW_FREQUENCY = 1 << 3;
        /// 后方左声道
        const BACK_LEFT     = 1 << 4;
        /// 后方右声道
        const BACK_RIGHT    = 1 << 5;
        /// 后方中央声道
        const BACK_CENTER   = 1 << 8;
        /// 侧方左声道
        const SIDE_LEFT     = 1 << 9;
        /// 侧方右声道
        const SIDE_RIGHT    = 1 << 10;
    }
}

/// 声道排列方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    /// 保持码流内顺序
    Vorbis,
    /// 重排为 L, R, C, LFE, 后方, 侧方
    #[default]
    Standard,
}

/// 声道布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelLayout {
    /// 声道数量
    pub channels: u32,
    /// 声道位掩码 (非标准声道数时为空)
    pub mask: ChannelMask,
}

impl ChannelLayout {
    /// 单声道
    pub const MONO: Self = Self {
        channels: 1,
        mask: ChannelMask::FRONT_CENTER,
    };

    /// 立体声
    pub const STEREO: Self = Self {
        channels: 2,
        mask: ChannelMask::FRONT_LEFT.union(ChannelMask::FRONT_RIGHT),
    };

    /// 3.0 (左 中 右)
    pub const SURROUND_3_0: Self = Self {
        channels: 3,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::FRONT_CENTER),
    };

    /// 四声道
    pub const QUAD: Self = Self {
        channels: 4,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::BACK_LEFT)
            .union(ChannelMask::BACK_RIGHT),
    };

    /// 5.0
    pub const SURROUND_5_0: Self = Self {
        channels: 5,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::FRONT_CENTER)
            .union(ChannelMask::BACK_LEFT)
            .union(ChannelMask::BACK_RIGHT),
    };

    /// 5.1 环绕声
    pub const SURROUND_5_1: Self = Self {
        channels: 6,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::FRONT_CENTER)
            .union(ChannelMask::LOW_FREQUENCY)
            .union(ChannelMask::BACK_LEFT)
            .union(ChannelMask::BACK_RIGHT),
    };

    /// 6.1 环绕声
    pub const SURROUND_6_1: Self = Self {
        channels: 7,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::FRONT_CENTER)
            .union(ChannelMask::LOW_FREQUENCY)
            .union(ChannelMask::BACK_CENTER)
            .union(ChannelMask::SIDE_LEFT)
            .union(ChannelMask::SIDE_RIGHT),
    };

    /// 7.1 环绕声
    pub const SURROUND_7_1: Self = Self {
        channels: 8,
        mask: ChannelMask::FRONT_LEFT
            .union(ChannelMask::FRONT_RIGHT)
            .union(ChannelMask::FRONT_CENTER)
            .union(ChannelMask::LOW_FREQUENCY)
            .union(ChannelMask::BACK_LEFT)
            .union(ChannelMask::BACK_RIGHT)
            .union(ChannelMask::SIDE_LEFT)
            .union(ChannelMask::SIDE_RIGHT),
    };

    /// 根据 Vorbis 声道数创建布局
    pub fn from_channels(channels: u32) -> Self {
        match channels {
            1 => Self::MONO,
            2 => Self::STEREO,
            3 => Self::SURROUND_3_0,
            4 => Self::QUAD,
            5 => Self::SURROUND_5_0,
            6 => Self::SURROUND_5_1,
            7 => Self::SURROUND_6_1,
            8 => Self::SURROUND_7_1,
            n => Self {
                channels: n,
                mask: ChannelMask::empty(),
            },
        }
    }

    /// 输出第 i 个声道取自码流中的哪个声道
    ///
    /// 返回长度等于声道数的映射表. `Vorbis` 顺序下为恒等映射.
    pub fn source_order(&self, order: ChannelOrder) -> Vec<usize> {
        let channels = self.channels as usize;
        if order == ChannelOrder::Vorbis {
            return (0..channels).collect();
        }
        match channels {
            // L, C, R -> L, R, C
            3 => vec![0, 2, 1],
            // L, C, R, BL, BR -> L, R, C, BL, BR
            5 => vec![0, 2, 1, 3, 4],
            // L, C, R, BL, BR, LFE -> L, R, C, LFE, BL, BR
            6 => vec![0, 2, 1, 5, 3, 4],
            // L, C, R, SL, SR, BC, LFE -> L, R, C, LFE, BC, SL, SR
            7 => vec![0, 2, 1, 6, 5, 3, 4],
            // L, C, R, SL, SR, BL, BR, LFE -> L, R, C, LFE, BL, BR, SL, SR
            8 => vec![0, 2, 1, 7, 5, 6, 3, 4],
            _ => (0..channels).collect(),
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MONO => write!(f, "mono"),
            Self::STEREO => write!(f, "stereo"),
            Self::SURROUND_3_0 => write!(f, "3.0"),
            Self::QUAD => write!(f, "quad"),
            Self::SURROUND_5_0 => write!(f, "5.0"),
            Self::SURROUND_5_1 => write!(f, "5.1"),
            Self::SURROUND_6_1 => write!(f, "6.1"),
            Self::SURROUND_7_1 => write!(f, "7.1"),
            _ => write!(f, "{}ch", self.channels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_声道数与掩码一致() {
        for n in 1..=8 {
            let layout = ChannelLayout::from_channels(n);
            assert_eq!(layout.mask.bits().count_ones(), n, "{layout}");
        }
        assert!(ChannelLayout::from_channels(12).mask.is_empty());
        assert_eq!(ChannelLayout::from_channels(12).to_string(), "12ch");
    }

    #[test]
    fn test_重排表为排列() {
        for n in 1..=10u32 {
            let layout = ChannelLayout::from_channels(n);
            let mut order = layout.source_order(ChannelOrder::Standard);
            order.sort_unstable();
            assert_eq!(order, (0..n as usize).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_vorbis顺序不重排() {
        let layout = ChannelLayout::SURROUND_5_1;
        assert_eq!(
            layout.source_order(ChannelOrder::Vorbis),
            vec![0, 1, 2, 3, 4, 5]
        );
        assert_eq!(
            layout.source_order(ChannelOrder::Standard),
            vec![0, 2, 1, 5, 3, 4]
        );
    }
}
