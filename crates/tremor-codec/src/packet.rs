//! Vorbis 数据包.
//!
//! 由外部解复用器 (Ogg 等) 切分好的一个逻辑包, 附带包序号与 granule position.

use bytes::Bytes;

/// 未知 granule position
pub const GRANULE_UNKNOWN: i64 = -1;

/// 压缩数据包
#[derive(Debug, Clone)]
pub struct Packet {
    /// 包数据
    pub data: Bytes,
    /// 逻辑流内的包序号, 头包依次为 0, 1, 2
    pub packetno: i64,
    /// 包结束处的 granule position ([`GRANULE_UNKNOWN`] 表示未知)
    pub granulepos: i64,
    /// 是否为逻辑流的第一个包
    pub b_o_s: bool,
    /// 是否为逻辑流的最后一个包
    pub e_o_s: bool,
}

impl Packet {
    /// 创建空包 (flush)
    pub fn empty() -> Self {
        Self {
            data: Bytes::new(),
            packetno: 0,
            granulepos: GRANULE_UNKNOWN,
            b_o_s: false,
            e_o_s: false,
        }
    }

    /// 从数据与包序号创建
    pub fn new(data: impl Into<Bytes>, packetno: i64) -> Self {
        Self {
            data: data.into(),
            packetno,
            b_o_s: packetno == 0,
            ..Self::empty()
        }
    }

    /// 设置 granule position
    pub fn with_granulepos(mut self, granulepos: i64) -> Self {
        self.granulepos = granulepos;
        self
    }

    /// 标记为流的最后一个包
    pub fn with_eos(mut self) -> Self {
        self.e_o_s = true;
        self
    }

    /// 数据大小 (字节)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 是否为空包
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_首包自动标记bos() {
        let p = Packet::new(vec![1u8, 2, 3], 0);
        assert!(p.b_o_s);
        assert_eq!(p.size(), 3);
        assert_eq!(p.granulepos, GRANULE_UNKNOWN);
        let p = Packet::new(vec![0u8], 5).with_granulepos(4096).with_eos();
        assert!(!p.b_o_s);
        assert!(p.e_o_s);
        assert_eq!(p.granulepos, 4096);
        assert!(Packet::empty().is_empty());
    }
}
