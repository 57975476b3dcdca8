//! 比特流读取器 (oggpack).
//!
//! Vorbis 的所有头包与音频包都按小端位序 (LSB first) 打包:
//! 每个字节先消费最低位, 多位字段的低位在前.
//!
//! 读取越过缓冲区末尾时不 panic, 而是返回 `None` 并进入 EOP (end of packet) 状态,
//! 之后的所有读取都失败. 调用方据此判定 "包被截断, 放弃当前块".

/// 小端位序比特流读取器
///
/// # 示例
/// ```
/// use tremor_core::bitreader::BitReader;
///
/// let data = [0b1011_0010];
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read(1), Some(0));
/// assert_eq!(br.read(3), Some(0b001));
/// assert_eq!(br.look(4), Some(0b1011));
/// assert_eq!(br.read(8), None);
/// assert!(br.is_eop());
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// 源数据
    data: &'a [u8],
    /// 已消费的总位数
    bit_pos: usize,
    /// 是否已越过末尾
    eop: bool,
}

impl<'a> BitReader<'a> {
    /// 创建新的比特流读取器
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_pos: 0,
            eop: false,
        }
    }

    /// 缓冲区总位数
    fn total_bits(&self) -> usize {
        self.data.len().saturating_mul(8)
    }

    /// 剩余可读位数
    pub fn bits_left(&self) -> usize {
        if self.eop {
            return 0;
        }
        self.total_bits().saturating_sub(self.bit_pos)
    }

    /// 已消费的位数
    pub fn bits_read(&self) -> usize {
        self.bit_pos
    }

    /// 已消费的字节数 (向上取整)
    pub fn bytes_read(&self) -> usize {
        self.bit_pos.div_ceil(8)
    }

    /// 是否已越过包尾
    pub fn is_eop(&self) -> bool {
        self.eop
    }

    /// 预读 n 位 (0..=32), 不消费
    ///
    /// 剩余位数不足时返回 `None`.
    pub fn look(&self, n: u32) -> Option<u32> {
        if n == 0 {
            return Some(0);
        }
        if n > 32 || self.eop || self.bit_pos + n as usize > self.total_bits() {
            return None;
        }

        let byte = self.bit_pos >> 3;
        let shift = (self.bit_pos & 7) as u32;
        // 最多跨 5 个字节
        let mut acc = 0u64;
        for (i, &b) in self.data[byte..].iter().take(5).enumerate() {
            acc |= u64::from(b) << (8 * i);
        }
        let mask = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
        Some((acc >> shift) as u32 & mask)
    }

    /// 消费 n 位; 越过末尾时进入 EOP 状态
    pub fn adv(&mut self, n: u32) {
        let target = self.bit_pos + n as usize;
        if target > self.total_bits() {
            self.bit_pos = self.total_bits();
            self.eop = true;
        } else {
            self.bit_pos = target;
        }
    }

    /// 读取 n 位 (0..=32)
    ///
    /// 剩余位数不足时返回 `None`, 并把读取位置推到末尾.
    pub fn read(&mut self, n: u32) -> Option<u32> {
        match self.look(n) {
            Some(v) => {
                self.adv(n);
                Some(v)
            }
            None => {
                self.bit_pos = self.total_bits();
                self.eop = true;
                None
            }
        }
    }

    /// 读取 1 位标志
    pub fn read_flag(&mut self) -> Option<bool> {
        self.read(1).map(|v| v != 0)
    }

    /// 读取 n 位并转为 usize, 便于直接作为索引
    pub fn read_usize(&mut self, n: u32) -> Option<usize> {
        self.read(n).map(|v| v as usize)
    }
}

/// 表示 v 所需的位数 (v = 0 时为 0)
pub fn ilog(v: u32) -> u32 {
    32 - v.leading_zeros()
}

/// 32 位整体位反转
pub fn bitreverse(x: u32) -> u32 {
    x.reverse_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_位序() {
        let data = [0b1011_0010];
        let mut br = BitReader::new(&data);
        assert_eq!(br.read(1), Some(0));
        assert_eq!(br.read(3), Some(0b001));
        assert_eq!(br.read(4), Some(0b1011));
        assert_eq!(br.bits_left(), 0);
    }

    #[test]
    fn test_跨字节读取() {
        let data = [0xff, 0x01, 0x80, 0x12, 0x34, 0x56];
        let mut br = BitReader::new(&data);
        assert_eq!(br.read(4), Some(0xf));
        assert_eq!(br.read(8), Some(0x1f));
        // 0x01 的高 4 位, 0x80, 0x12, 0x34, 0x56 的低 4 位
        assert_eq!(br.read(32), Some(0x6341_2800));
        assert_eq!(br.bits_left(), 4);
    }

    #[test]
    fn test_32位读取() {
        let data = [0x78, 0x56, 0x34, 0x12, 0xff];
        let mut br = BitReader::new(&data);
        assert_eq!(br.read(32), Some(0x1234_5678));
        assert_eq!(br.read(8), Some(0xff));

        let mut br = BitReader::new(&data);
        br.adv(4);
        assert_eq!(br.look(32), Some(0xf123_4567));
    }

    #[test]
    fn test_越界读取进入eop() {
        let data = [0xaa];
        let mut br = BitReader::new(&data);
        assert_eq!(br.look(9), None);
        assert!(!br.is_eop(), "look 不应改变状态");
        assert_eq!(br.read(6), Some(0b10_1010));
        assert_eq!(br.read(3), None);
        assert!(br.is_eop());
        assert_eq!(br.read(1), None, "EOP 之后的读取必须持续失败");
        assert_eq!(br.look(0), Some(0));
    }

    #[test]
    fn test_adv越界() {
        let data = [0x00, 0x00];
        let mut br = BitReader::new(&data);
        br.adv(15);
        assert_eq!(br.look(1), Some(0));
        br.adv(2);
        assert!(br.is_eop());
        assert_eq!(br.look(1), None);
    }

    #[test]
    fn test_ilog() {
        assert_eq!(ilog(0), 0);
        assert_eq!(ilog(1), 1);
        assert_eq!(ilog(2), 2);
        assert_eq!(ilog(3), 2);
        assert_eq!(ilog(255), 8);
        assert_eq!(ilog(256), 9);
        assert_eq!(ilog(u32::MAX), 32);
    }
}
