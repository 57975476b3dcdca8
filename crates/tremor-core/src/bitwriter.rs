//! 比特流写入器.
//!
//! 与 [`BitReader`](crate::bitreader::BitReader) 对应的小端位序 (LSB first) 写入器.
//! 解码器本身不需要编码, 写入器用于构造头包与测试码流.

/// 小端位序比特流写入器
///
/// # 示例
/// ```
/// use tremor_core::bitwriter::BitWriter;
/// use tremor_core::bitreader::BitReader;
///
/// let mut bw = BitWriter::new();
/// bw.write_bits(0b01, 2);
/// bw.write_bits(0x3f, 6);
/// bw.write_bits(0x5, 4);
/// let data = bw.finish();
/// assert_eq!(data, vec![0xfd, 0x05]);
///
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read(2), Some(0b01));
/// assert_eq!(br.read(6), Some(0x3f));
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    /// 输出缓冲区
    data: Vec<u8>,
    /// 当前字节 (正在填充)
    current_byte: u8,
    /// 当前字节中已填充的位数 (0-7)
    bit_count: u32,
}

impl BitWriter {
    /// 创建新的比特流写入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取已写入的总位数
    pub fn bits_written(&self) -> usize {
        self.data.len() * 8 + self.bit_count as usize
    }

    /// 写入值的低 n 位 (n <= 32), 低位在前
    pub fn write_bits(&mut self, value: u32, n: u32) {
        debug_assert!(n <= 32, "write_bits: n={} 超过 32 位", n);
        let mut value = u64::from(value);
        let mut remaining = n.min(32);
        while remaining > 0 {
            let available = 8 - self.bit_count;
            let to_write = remaining.min(available);
            let bits = (value & ((1u64 << to_write) - 1)) as u8;
            self.current_byte |= bits << self.bit_count;
            self.bit_count += to_write;
            if self.bit_count == 8 {
                self.data.push(self.current_byte);
                self.current_byte = 0;
                self.bit_count = 0;
            }
            value >>= to_write;
            remaining -= to_write;
        }
    }

    /// 写入 1 位标志
    pub fn write_flag(&mut self, flag: bool) {
        self.write_bits(u32::from(flag), 1);
    }

    /// 按码本字节序写入一个 Huffman 码字
    ///
    /// `code` 为规范码字 (高位先出现在码流中), `len` 为码长.
    pub fn write_codeword(&mut self, code: u32, len: u32) {
        for i in (0..len).rev() {
            self.write_bits((code >> i) & 1, 1);
        }
    }

    /// 写入字节串 (每字节 8 位)
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_bits(u32::from(b), 8);
        }
    }

    /// 对齐到字节边界 (用 0 填充)
    pub fn align_to_byte(&mut self) {
        if self.bit_count > 0 {
            self.data.push(self.current_byte);
            self.current_byte = 0;
            self.bit_count = 0;
        }
    }

    /// 完成写入, 返回字节数据
    ///
    /// 如果当前不在字节边界, 自动用 0 填充.
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitreader::BitReader;

    #[test]
    fn test_写入后读回() {
        let mut bw = BitWriter::new();
        bw.write_bits(1, 1);
        bw.write_bits(0x1234_5678, 32);
        bw.write_bits(0x3, 2);
        bw.write_bytes(b"vorbis");
        assert_eq!(bw.bits_written(), 1 + 32 + 2 + 48);
        let data = bw.finish();

        let mut br = BitReader::new(&data);
        assert_eq!(br.read(1), Some(1));
        assert_eq!(br.read(32), Some(0x1234_5678));
        assert_eq!(br.read(2), Some(0x3));
        for &c in b"vorbis" {
            assert_eq!(br.read(8), Some(u32::from(c)));
        }
    }

    #[test]
    fn test_码字按高位先写() {
        let mut bw = BitWriter::new();
        // 规范码字 0b0100 (4 位): 码流中依次为 0,1,0,0
        bw.write_codeword(0b0100, 4);
        let data = bw.finish();
        assert_eq!(data, vec![0b0000_0010]);
    }
}
