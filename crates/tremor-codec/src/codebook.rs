//! 码本 (Huffman + VQ).
//!
//! [`StaticCodebook`] 是 setup 头中码本的原始描述; [`Codebook`] 是由它构建的解码结构:
//! 按位反转后排序的码字表、以前 K 位直接索引的首级表 (命中即得条目,
//! 未命中则给出二分查找区间提示) 以及反量化后的定点数值表.

use tremor_core::bitreader::{BitReader, bitreverse, ilog};
use tremor_core::fixed::VFloat;
use tremor_core::{VorbisError, VorbisResult};

/// 码本同步字 "BCV"
const CODEBOOK_SYNC: u32 = 0x56_4342;

/// 码本数值映射方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupType {
    /// 无数值映射, 只能做标量解码
    None,
    /// 格点: 每个条目的各维由同一组量化值按进制展开
    Lattice,
    /// 列表: 每个条目的每一维单独给出量化值
    Listed,
}

/// setup 头中的码本描述
#[derive(Debug, Clone)]
pub struct StaticCodebook {
    /// 向量维数
    pub dim: usize,
    /// 条目数
    pub entries: usize,
    /// 每个条目的码长, 0 表示未使用
    pub lengths: Vec<u8>,
    /// 数值映射方式
    pub lookup: LookupType,
    /// 量化最小值
    pub q_min: VFloat,
    /// 量化步长
    pub q_delta: VFloat,
    /// 是否累加 (序列) 模式
    pub q_sequencep: bool,
    /// 量化值列表
    pub quantlist: Vec<u32>,
}

fn bad_book(msg: impl Into<String>) -> VorbisError {
    VorbisError::BadHeader(format!("码本: {}", msg.into()))
}

impl StaticCodebook {
    /// 从 setup 头中解析一个码本
    pub fn unpack(br: &mut BitReader<'_>) -> VorbisResult<Self> {
        let eof = || bad_book("数据截断");

        let sync = br.read(24).ok_or_else(eof)?;
        if sync != CODEBOOK_SYNC {
            return Err(bad_book(format!("同步字错误: 0x{sync:06x}")));
        }
        let dim = br.read_usize(16).ok_or_else(eof)?;
        let entries = br.read_usize(24).ok_or_else(eof)?;
        if entries == 0 {
            return Err(bad_book("条目数为 0"));
        }
        if ilog(dim as u32) + ilog(entries as u32) > 24 {
            return Err(bad_book(format!("维数 {dim} 与条目数 {entries} 过大")));
        }

        let mut lengths = vec![0u8; entries];
        let ordered = br.read_flag().ok_or_else(eof)?;
        if !ordered {
            let sparse = br.read_flag().ok_or_else(eof)?;
            for len in lengths.iter_mut() {
                if sparse && !br.read_flag().ok_or_else(eof)? {
                    continue;
                }
                *len = br.read(5).ok_or_else(eof)? as u8 + 1;
            }
        } else {
            let mut length = br.read(5).ok_or_else(eof)? + 1;
            let mut i = 0usize;
            while i < entries {
                if length > 32 {
                    return Err(bad_book("有序码长超过 32"));
                }
                let num = br.read_usize(ilog((entries - i) as u32)).ok_or_else(eof)?;
                if num > entries - i {
                    return Err(bad_book(format!(
                        "有序码长游程越界: {num} > 剩余 {}",
                        entries - i
                    )));
                }
                lengths[i..i + num].fill(length as u8);
                i += num;
                length += 1;
            }
        }

        let maptype = br.read(4).ok_or_else(eof)?;
        let lookup = match maptype {
            0 => LookupType::None,
            1 => LookupType::Lattice,
            2 => LookupType::Listed,
            other => return Err(bad_book(format!("不支持的映射类型 {other}"))),
        };

        let mut book = Self {
            dim,
            entries,
            lengths,
            lookup,
            q_min: VFloat::ZERO,
            q_delta: VFloat::ZERO,
            q_sequencep: false,
            quantlist: Vec::new(),
        };
        if lookup == LookupType::None {
            return Ok(book);
        }
        if dim == 0 {
            return Err(bad_book("VQ 码本维数为 0"));
        }

        book.q_min = VFloat::unpack(br.read(32).ok_or_else(eof)?);
        book.q_delta = VFloat::unpack(br.read(32).ok_or_else(eof)?);
        let q_quant = br.read(4).ok_or_else(eof)? + 1;
        book.q_sequencep = br.read_flag().ok_or_else(eof)?;

        let quantvals = book.quantvals();
        book.quantlist = Vec::with_capacity(quantvals);
        for _ in 0..quantvals {
            book.quantlist.push(br.read(q_quant).ok_or_else(eof)?);
        }
        Ok(book)
    }

    /// 已使用条目数
    pub fn used_entries(&self) -> usize {
        self.lengths.iter().filter(|&&l| l > 0).count()
    }

    /// 量化值个数
    pub fn quantvals(&self) -> usize {
        match self.lookup {
            LookupType::None => 0,
            LookupType::Lattice => maptype1_quantvals(self.entries, self.dim),
            LookupType::Listed => self.entries * self.dim,
        }
    }
}

/// 满足 `vals^dim <= entries` 的最大 vals
fn maptype1_quantvals(entries: usize, dim: usize) -> usize {
    if dim == 0 || entries == 0 {
        return 0;
    }
    let pow = |base: usize| -> usize {
        let mut acc = 1usize;
        for _ in 0..dim {
            acc = acc.saturating_mul(base);
            if acc > entries {
                break;
            }
        }
        acc
    };

    let bits = ilog(entries as u32) as usize;
    let mut vals = (entries >> ((bits - 1) * (dim - 1) / dim)).max(1);
    loop {
        let acc = pow(vals);
        let acc1 = pow(vals + 1);
        if acc <= entries && acc1 > entries {
            return vals;
        }
        if acc > entries {
            vals -= 1;
        } else {
            vals += 1;
        }
    }
}

/// 按码长表分配规范码字 (高位先出现在码流中, 右对齐)
///
/// 过满的树直接拒绝; 欠满的树也拒绝, 只有 "只有一个条目" 的退化树例外.
fn make_words(lengths: &[u8], used: usize) -> Option<Vec<u32>> {
    let mut marker = [0u32; 33];
    let mut words = Vec::with_capacity(used);

    for &len in lengths {
        if len == 0 {
            continue;
        }
        let length = len as usize;
        let mut entry = marker[length];
        if length < 32 && (entry >> length) != 0 {
            return None;
        }
        words.push(entry);

        for j in (1..=length).rev() {
            if marker[j] & 1 != 0 {
                if j == 1 {
                    marker[1] = marker[1].wrapping_add(1);
                } else {
                    marker[j] = marker[j - 1] << 1;
                }
                break;
            }
            marker[j] = marker[j].wrapping_add(1);
        }

        // 更长的标记原本挂在刚占用的节点下, 改挂到新节点
        for j in length + 1..33 {
            if marker[j] >> 1 == entry {
                entry = marker[j];
                marker[j] = marker[j - 1] << 1;
            } else {
                break;
            }
        }
    }

    if used != 1 {
        for (i, &m) in marker.iter().enumerate().skip(1) {
            if m & (u32::MAX >> (32 - i)) != 0 {
                return None;
            }
        }
    }
    Some(words)
}

/// 解码用码本
#[derive(Debug, Clone)]
pub struct Codebook {
    /// 向量维数
    pub dim: usize,
    /// 条目总数
    pub entries: usize,
    /// 已使用条目数
    pub used_entries: usize,
    /// 数值表的公共二进制小数点
    binarypoint: i32,
    /// 反量化数值, 按排序后的条目下标存放, 每条 dim 个
    valuelist: Vec<i32>,
    /// 左对齐的规范码字, 升序
    codelist: Vec<u32>,
    /// 排序下标 -> 原始条目号
    dec_index: Vec<u32>,
    /// 排序下标 -> 码长
    dec_codelengths: Vec<u8>,
    /// 首级直接查找表
    dec_firsttable: Vec<u32>,
    dec_firsttablen: u32,
    dec_maxlength: u32,
}

impl Codebook {
    /// 由码本描述构建解码结构
    pub fn new(s: &StaticCodebook) -> VorbisResult<Self> {
        let used = s.used_entries();
        let mut book = Self {
            dim: s.dim,
            entries: s.entries,
            used_entries: used,
            binarypoint: 0,
            valuelist: Vec::new(),
            codelist: Vec::new(),
            dec_index: Vec::new(),
            dec_codelengths: Vec::new(),
            dec_firsttable: Vec::new(),
            dec_firsttablen: 0,
            dec_maxlength: 0,
        };
        if used == 0 {
            return Ok(book);
        }

        let words = make_words(&s.lengths, used)
            .ok_or_else(|| bad_book("Huffman 码长表不构成完整的前缀码"))?;
        let used_lengths: Vec<u8> = s.lengths.iter().copied().filter(|&l| l > 0).collect();
        let left_justified: Vec<u32> = words
            .iter()
            .zip(&used_lengths)
            .map(|(&w, &l)| if l >= 32 { w } else { w << (32 - u32::from(l)) })
            .collect();

        let mut order: Vec<usize> = (0..used).collect();
        order.sort_by_key(|&i| left_justified[i]);
        let mut sortindex = vec![0usize; used];
        for (rank, &pos) in order.iter().enumerate() {
            sortindex[pos] = rank;
        }

        book.codelist = vec![0; used];
        book.dec_codelengths = vec![0; used];
        book.dec_index = vec![0; used];
        let used_entries = s
            .lengths
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l > 0)
            .map(|(e, _)| e);
        for (i, entry) in used_entries.enumerate() {
            let rank = sortindex[i];
            book.codelist[rank] = left_justified[i];
            book.dec_codelengths[rank] = used_lengths[i];
            book.dec_index[rank] = entry as u32;
        }

        if let Some((values, point)) = unquantize(s, &sortindex) {
            book.valuelist = values;
            book.binarypoint = point;
        }

        book.build_firsttable();
        Ok(book)
    }

    fn build_firsttable(&mut self) {
        let n = self.used_entries;
        let tablen = (ilog(n as u32) as i32 - 4).clamp(5, 8) as u32;
        let tabn = 1usize << tablen;
        self.dec_firsttablen = tablen;
        self.dec_firsttable = vec![0; tabn];
        self.dec_maxlength = 0;

        for i in 0..n {
            let len = u32::from(self.dec_codelengths[i]);
            self.dec_maxlength = self.dec_maxlength.max(len);
            if len <= tablen {
                let orig = bitreverse(self.codelist[i]) as usize;
                for j in 0..(1usize << (tablen - len)) {
                    self.dec_firsttable[orig | (j << len)] = i as u32 + 1;
                }
            }
        }

        // 未直接命中的位置填入二分查找区间 {lo, used-hi}, 各 15 位
        let mask = 0xffff_fffeu32 << (31 - tablen);
        let (mut lo, mut hi) = (0usize, 0usize);
        for i in 0..tabn {
            let word = (i as u32) << (32 - tablen);
            let slot = bitreverse(word) as usize;
            if self.dec_firsttable[slot] != 0 {
                continue;
            }
            while lo + 1 < n && self.codelist[lo + 1] <= word {
                lo += 1;
            }
            while hi < n && word >= (self.codelist[hi] & mask) {
                hi += 1;
            }
            let loval = lo.min(0x7fff) as u32;
            let hival = (n - hi).min(0x7fff) as u32;
            self.dec_firsttable[slot] = 0x8000_0000 | (loval << 15) | hival;
        }
    }

    /// 码本是否带数值表 (可用于向量解码)
    pub fn has_values(&self) -> bool {
        !self.valuelist.is_empty()
    }

    /// 解码一个码字, 返回排序下标
    fn decode_packed_entry(&self, br: &mut BitReader<'_>) -> Option<usize> {
        let mut read = self.dec_maxlength;
        let (mut lo, mut hi);

        match br.look(self.dec_firsttablen) {
            Some(lok) => {
                let entry = self.dec_firsttable[lok as usize];
                if entry & 0x8000_0000 != 0 {
                    lo = ((entry >> 15) & 0x7fff) as usize;
                    hi = self.used_entries - (entry & 0x7fff) as usize;
                } else {
                    let idx = entry as usize - 1;
                    br.adv(u32::from(self.dec_codelengths[idx]));
                    return Some(idx);
                }
            }
            None => {
                lo = 0;
                hi = self.used_entries;
            }
        }

        let mut lok = br.look(read);
        while lok.is_none() && read > 1 {
            read -= 1;
            lok = br.look(read);
        }
        let Some(lok) = lok else {
            br.adv(1);
            return None;
        };

        let testword = bitreverse(lok);
        while hi - lo > 1 {
            let p = (hi - lo) >> 1;
            if self.codelist[lo + p] > testword {
                hi -= p;
            } else {
                lo += p;
            }
        }

        let len = u32::from(self.dec_codelengths[lo]);
        if len <= read {
            br.adv(len);
            return Some(lo);
        }
        br.adv(read + 1);
        None
    }

    /// 标量解码, 返回原始条目号; 失败 (截断或无匹配) 返回 `None`
    pub fn decode(&self, br: &mut BitReader<'_>) -> Option<usize> {
        if self.used_entries == 0 {
            return None;
        }
        self.decode_packed_entry(br)
            .map(|i| self.dec_index[i] as usize)
    }

    fn entry_values(&self, packed: usize) -> &[i32] {
        let start = packed * self.dim;
        self.valuelist.get(start..start + self.dim).unwrap_or(&[])
    }

    /// 交错累加: 读 `n/dim` 个向量, 第 j 个向量的第 i 维加到 `a[i*step + j]`
    ///
    /// 先解出全部条目号 (存入 `scratch`, 至少 `n/dim` 长) 再累加,
    /// 中途截断时 `a` 保持不变.
    pub fn decodevs_add(
        &self,
        a: &mut [i32],
        br: &mut BitReader<'_>,
        n: usize,
        point: i32,
        scratch: &mut [i32],
    ) -> Option<()> {
        if self.used_entries == 0 || self.dim == 0 {
            return Some(());
        }
        let step = (n / self.dim).min(scratch.len());
        let shift = point - self.binarypoint;
        for slot in scratch[..step].iter_mut() {
            *slot = self.decode_packed_entry(br)? as i32;
        }
        for (j, &entry) in scratch[..step].iter().enumerate() {
            for (i, &v) in self.entry_values(entry as usize).iter().enumerate() {
                if let Some(slot) = a.get_mut(i * step + j) {
                    *slot = slot.wrapping_add(apply_shift(v, shift));
                }
            }
        }
        Some(())
    }

    /// 连续累加: 依次读向量, 顺序加到 `a[0..n]`
    pub fn decodev_add(
        &self,
        a: &mut [i32],
        br: &mut BitReader<'_>,
        n: usize,
        point: i32,
    ) -> Option<()> {
        if self.used_entries == 0 {
            return Some(());
        }
        let shift = point - self.binarypoint;
        let n = n.min(a.len());
        let mut i = 0;
        while i < n {
            let entry = self.decode_packed_entry(br)?;
            for &v in self.entry_values(entry) {
                if i >= n {
                    break;
                }
                a[i] = a[i].wrapping_add(apply_shift(v, shift));
                i += 1;
            }
        }
        Some(())
    }

    /// 连续写入: 依次读向量, 覆盖 `a[0..n]`
    pub fn decodev_set(
        &self,
        a: &mut [i32],
        br: &mut BitReader<'_>,
        n: usize,
        point: i32,
    ) -> Option<()> {
        if self.used_entries == 0 {
            return Some(());
        }
        let shift = point - self.binarypoint;
        let n = n.min(a.len());
        let mut i = 0;
        while i < n {
            let entry = self.decode_packed_entry(br)?;
            for &v in self.entry_values(entry) {
                if i >= n {
                    break;
                }
                a[i] = apply_shift(v, shift);
                i += 1;
            }
        }
        Some(())
    }

    /// 多声道轮转累加: 交错下标 k 的数值加到 `a[chans[k % ch]][k / ch]`
    ///
    /// 覆盖交错下标 `[offset, offset + n)`, `ch = chans.len()`.
    /// 最后一个向量超出范围的维被丢弃.
    pub fn decodevv_add(
        &self,
        a: &mut [Vec<i32>],
        chans: &[usize],
        offset: usize,
        br: &mut BitReader<'_>,
        n: usize,
        point: i32,
    ) -> Option<()> {
        if self.used_entries == 0 || chans.is_empty() {
            return Some(());
        }
        let ch = chans.len();
        let shift = point - self.binarypoint;
        let mut i = offset / ch;
        let mut chptr = offset % ch;
        let mut left = n;
        while left > 0 {
            let entry = self.decode_packed_entry(br)?;
            for &v in self.entry_values(entry) {
                if left == 0 {
                    break;
                }
                if let Some(slot) = a[chans[chptr]].get_mut(i) {
                    *slot = slot.wrapping_add(apply_shift(v, shift));
                }
                left -= 1;
                chptr += 1;
                if chptr == ch {
                    chptr = 0;
                    i += 1;
                }
            }
        }
        Some(())
    }
}

#[inline]
fn apply_shift(v: i32, shift: i32) -> i32 {
    if shift >= 0 {
        v >> shift.min(31)
    } else {
        v.wrapping_shl((-shift).min(31) as u32)
    }
}

/// 反量化: 返回按排序下标排列的数值表与公共二进制小数点
fn unquantize(s: &StaticCodebook, sortindex: &[usize]) -> Option<(Vec<i32>, i32)> {
    if s.lookup == LookupType::None {
        return None;
    }
    let dim = s.dim;
    let used = sortindex.len();
    let mut values = vec![VFloat::ZERO; used * dim];
    let quantvals = s.quantvals();
    let mut maxpoint = s.q_min.exponent;

    let used_entries = s
        .lengths
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l > 0)
        .map(|(e, _)| e);
    for (count, j) in used_entries.enumerate() {
        let mut last = VFloat::ZERO;
        let mut indexdiv = 1usize;
        for k in 0..dim {
            let q = match s.lookup {
                LookupType::Lattice => {
                    let index = (j / indexdiv) % quantvals.max(1);
                    indexdiv = indexdiv.saturating_mul(quantvals);
                    s.quantlist.get(index).copied().unwrap_or(0)
                }
                _ => s.quantlist.get(j * dim + k).copied().unwrap_or(0),
            };
            // 加法不对称 (先加数取整, 后加数截断), 顺序不可交换
            let val = s.q_min.add(s.q_delta.mul_int(q.min(i32::MAX as u32) as i32));
            let val = last.add(val);
            if s.q_sequencep {
                last = val;
            }
            values[sortindex[count] * dim + k] = val;
            maxpoint = maxpoint.max(val.exponent);
        }
    }

    let list = values
        .iter()
        .map(|v| {
            if v.exponent < maxpoint {
                v.mantissa >> (maxpoint - v.exponent).min(31)
            } else {
                v.mantissa
            }
        })
        .collect();
    Some((list, maxpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tremor_core::bitwriter::BitWriter;

    fn scalar_book(lengths: &[u8]) -> StaticCodebook {
        StaticCodebook {
            dim: 1,
            entries: lengths.len(),
            lengths: lengths.to_vec(),
            lookup: LookupType::None,
            q_min: VFloat::ZERO,
            q_delta: VFloat::ZERO,
            q_sequencep: false,
            quantlist: Vec::new(),
        }
    }

    /// 把条目 e 的码字 (后接填充位) 写成码流
    fn encode_entry(lengths: &[u8], e: usize, pad: u32) -> Vec<u8> {
        let used = lengths.iter().filter(|&&l| l > 0).count();
        let words = make_words(lengths, used).unwrap();
        let rank = lengths[..e].iter().filter(|&&l| l > 0).count();
        let mut bw = BitWriter::new();
        bw.write_codeword(words[rank], u32::from(lengths[e]));
        bw.write_bits(pad, 24);
        bw.finish()
    }

    #[test]
    fn test_huffman_官方示例映射() {
        let lengths = [2u8, 4, 4, 4, 4, 2, 3, 3];
        let book = Codebook::new(&scalar_book(&lengths)).unwrap();
        // (码流中按读取顺序排列的位, 码长, 期望条目)
        let cases = [
            (0b00u32, 2u32, 0usize),
            (0b0010, 4, 1),
            (0b1010, 4, 2),
            (0b0110, 4, 3),
            (0b1110, 4, 4),
            (0b01, 2, 5),
            (0b011, 3, 6),
            (0b111, 3, 7),
        ];
        for (bits, len, expected) in cases {
            let mut bw = BitWriter::new();
            bw.write_bits(bits, len);
            bw.write_bits(0, 16);
            let data = bw.finish();
            let mut br = BitReader::new(&data);
            assert_eq!(book.decode(&mut br), Some(expected), "bits={bits:b}");
            assert_eq!(br.bits_read(), len as usize);
        }
    }

    #[test]
    fn test_过满与欠满的树被拒绝() {
        assert!(Codebook::new(&scalar_book(&[1, 1, 1])).is_err());
        assert!(Codebook::new(&scalar_book(&[2, 2, 2])).is_err());
        // 单条目退化树允许
        let book = Codebook::new(&scalar_book(&[0, 3, 0])).unwrap();
        let data = [0u8; 2];
        let mut br = BitReader::new(&data);
        assert_eq!(book.decode(&mut br), Some(1));
    }

    #[test]
    fn test_截断时返回none() {
        let lengths = [1u8, 2, 3, 3];
        let book = Codebook::new(&scalar_book(&lengths)).unwrap();
        // 只剩 2 位 "11", 能匹配的码字需要 3 位
        let data = [0xc0u8];
        let mut br = BitReader::new(&data);
        br.adv(6);
        assert_eq!(book.decode(&mut br), None);
    }

    #[test]
    fn test_解析有序码长() {
        // 7 个条目: 码长 2 x1, 3 x2, 4 x4 (欠满, 仅测试解析)
        let mut bw = BitWriter::new();
        bw.write_bits(CODEBOOK_SYNC, 24);
        bw.write_bits(1, 16);
        bw.write_bits(7, 24);
        bw.write_flag(true);
        bw.write_bits(1, 5); // 起始码长 2
        bw.write_bits(1, ilog(7)); // 1 个码长 2
        bw.write_bits(2, ilog(6)); // 2 个码长 3
        bw.write_bits(4, ilog(4)); // 4 个码长 4
        bw.write_bits(0, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let book = StaticCodebook::unpack(&mut br).unwrap();
        assert_eq!(book.lengths, vec![2, 3, 3, 4, 4, 4, 4]);
        assert_eq!(book.lookup, LookupType::None);
    }

    #[test]
    fn test_有序码长游程越界() {
        let mut bw = BitWriter::new();
        bw.write_bits(CODEBOOK_SYNC, 24);
        bw.write_bits(1, 16);
        bw.write_bits(4, 24);
        bw.write_flag(true);
        bw.write_bits(0, 5);
        bw.write_bits(7, ilog(4)); // 7 > 4
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let err = StaticCodebook::unpack(&mut br).unwrap_err();
        assert!(matches!(err, VorbisError::BadHeader(_)));
    }

    #[test]
    fn test_零条目码本被拒绝() {
        let mut bw = BitWriter::new();
        bw.write_bits(CODEBOOK_SYNC, 24);
        bw.write_bits(1, 16);
        bw.write_bits(0, 24);
        bw.write_bits(0, 8);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        assert!(matches!(
            StaticCodebook::unpack(&mut br),
            Err(VorbisError::BadHeader(_))
        ));
    }

    #[test]
    fn test_格点量化值个数() {
        assert_eq!(maptype1_quantvals(81, 4), 3);
        assert_eq!(maptype1_quantvals(80, 4), 2);
        assert_eq!(maptype1_quantvals(25, 2), 5);
        assert_eq!(maptype1_quantvals(7, 1), 7);
        assert_eq!(maptype1_quantvals(1, 8), 1);
    }

    #[test]
    fn test_格点反量化与向量解码() {
        // dim=2, 4 个量化值 {0,1,2,3} -> 值 = q - 1, 16 个条目码长均为 4
        let s = StaticCodebook {
            dim: 2,
            entries: 16,
            lengths: vec![4u8; 16],
            lookup: LookupType::Lattice,
            q_min: VFloat::new(-0x4000_0000, -30),
            q_delta: VFloat::new(0x4000_0000, -30),
            q_sequencep: false,
            quantlist: vec![0, 1, 2, 3],
        };
        let book = Codebook::new(&s).unwrap();
        assert!(book.has_values());

        // 条目 6: q = (6 % 4, 6 / 4) = (2, 1) -> 值 (1, 0)
        let data = encode_entry(&s.lengths, 6, 0);
        let mut out = [0i32; 2];
        let mut br = BitReader::new(&data);
        book.decodev_set(&mut out, &mut br, 2, 0).unwrap();
        assert_eq!(out, [1, 0]);

        // point = -4: 左移 4 位再累加
        let data = encode_entry(&s.lengths, 3, 0);
        let mut out = [10i32, 10];
        let mut br = BitReader::new(&data);
        book.decodev_add(&mut out, &mut br, 2, -4).unwrap();
        // 条目 3: q = (3, 0) -> 值 (2, -1)
        assert_eq!(out, [10 + 32, 10 - 16]);
    }

    #[test]
    fn test_序列模式累加() {
        let s = StaticCodebook {
            dim: 3,
            entries: 2,
            lengths: vec![1, 1],
            lookup: LookupType::Listed,
            q_min: VFloat::ZERO,
            q_delta: VFloat::new(0x4000_0000, -30),
            q_sequencep: true,
            quantlist: vec![1, 2, 3, 0, 0, 5],
        };
        let book = Codebook::new(&s).unwrap();
        let data = encode_entry(&s.lengths, 0, 0);
        let mut out = [0i32; 3];
        let mut br = BitReader::new(&data);
        book.decodev_set(&mut out, &mut br, 3, 0).unwrap();
        assert_eq!(out, [1, 3, 6]);
    }

    /// dim=2 格点码本, 条目 e 的值为 (e % 4 - 1, e / 4 - 1), 码字即条目号
    fn lattice_pair_book() -> Codebook {
        let s = StaticCodebook {
            dim: 2,
            entries: 16,
            lengths: vec![4u8; 16],
            lookup: LookupType::Lattice,
            q_min: VFloat::new(-0x4000_0000, -30),
            q_delta: VFloat::new(0x4000_0000, -30),
            q_sequencep: false,
            quantlist: vec![0, 1, 2, 3],
        };
        Codebook::new(&s).unwrap()
    }

    #[test]
    fn test_轮转累加从声道中间开始() {
        let book = lattice_pair_book();
        let mut bw = BitWriter::new();
        bw.write_codeword(6, 4); // (1, 0)
        bw.write_codeword(3, 4); // (2, -1)
        bw.write_bits(0, 16);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let mut pcm = vec![vec![0i32; 4], vec![0i32; 4]];
        // 交错下标 3, 4, 5 -> (声道 1, 位置 1), (0, 2), (1, 2); 多出的一维丢弃
        book.decodevv_add(&mut pcm, &[0, 1], 3, &mut br, 3, 0)
            .unwrap();
        assert_eq!(pcm[0], vec![0, 0, 0, 0]);
        assert_eq!(pcm[1], vec![0, 1, 2, 0]);
        assert_eq!(br.bits_read(), 8);
    }

    #[test]
    fn test_交错累加截断时不写入() {
        let book = lattice_pair_book();
        let mut bw = BitWriter::new();
        bw.write_codeword(15, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        br.adv(4);
        let mut out = [7i32; 4];
        let mut scratch = [0i32; 2];
        assert!(book.decodevs_add(&mut out, &mut br, 4, 0, &mut scratch).is_none());
        assert_eq!(out, [7; 4]);

        // 两个向量 (2, 2) 与 (-1, 0): 第 i 维写到 a[i*2 + j]
        let mut bw = BitWriter::new();
        bw.write_codeword(15, 4);
        bw.write_codeword(4, 4);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        book.decodevs_add(&mut out, &mut br, 4, 0, &mut scratch).unwrap();
        assert_eq!(out, [9, 6, 9, 7]);
    }

    /// 通过随机分裂叶子生成完整的 Huffman 码长表
    fn complete_lengths(splits: &[u32], unused: &[bool]) -> Vec<u8> {
        let mut leaves = vec![0u8];
        for &s in splits {
            let i = s as usize % leaves.len();
            if leaves[i] >= 24 {
                continue;
            }
            let d = leaves.remove(i) + 1;
            leaves.push(d);
            leaves.insert(i, d);
        }
        let mut lengths = Vec::new();
        for (i, l) in leaves.into_iter().enumerate() {
            if unused.get(i).copied().unwrap_or(false) {
                lengths.push(0);
            }
            lengths.push(l);
        }
        lengths
    }

    proptest! {
        #[test]
        fn test_码字无前缀冲突(
            splits in prop::collection::vec(any::<u32>(), 1..150),
            unused in prop::collection::vec(any::<bool>(), 0..150),
            pad in any::<u32>(),
        ) {
            let lengths = complete_lengths(&splits, &unused);
            let book = Codebook::new(&scalar_book(&lengths)).unwrap();
            for (e, &len) in lengths.iter().enumerate() {
                if len == 0 {
                    continue;
                }
                let data = encode_entry(&lengths, e, pad & 0xff_ffff);
                let mut br = BitReader::new(&data);
                prop_assert_eq!(book.decode(&mut br), Some(e));
                prop_assert_eq!(br.bits_read(), len as usize);
            }

            // 两两之间不存在前缀关系
            let used = lengths.iter().filter(|&&l| l > 0).count();
            let words = make_words(&lengths, used).unwrap();
            let lens: Vec<u8> = lengths.iter().copied().filter(|&l| l > 0).collect();
            for a in 0..used {
                for b in 0..used {
                    if a == b || lens[a] > lens[b] {
                        continue;
                    }
                    let shifted = words[b] >> (lens[b] - lens[a]);
                    prop_assert_ne!(shifted, words[a]);
                }
            }
        }
    }
}
