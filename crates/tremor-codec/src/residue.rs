//! 残差 (residue) 0/1/2: 分区分类向量量化.
//!
//! 频谱 `[begin, end)` 被切成长度为 `grouping` 的分区. 第 0 级先用分组码本
//! 为每 `dim` 个分区解出一个分类字, 经 decodemap 展开为每个分区的类别;
//! 之后每一级对类别在该级启用的分区, 用对应码本解出向量并累加到频谱.

use log::trace;
use tremor_core::bitreader::{BitReader, ilog};
use tremor_core::{VorbisError, VorbisResult};

use crate::block::Arena;
use crate::codebook::Codebook;

/// 残差输出的定点小数位 (Q24 频谱, 码本数值左移对齐)
const RESIDUE_POINT: i32 = -8;

/// 残差类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueType {
    /// 每声道独立, 向量各维按分区内步长交错
    Residue0,
    /// 每声道独立, 向量各维连续
    Residue1,
    /// 所有声道轮转交错为一条长向量
    Residue2,
}

impl ResidueType {
    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Residue0),
            1 => Some(Self::Residue1),
            2 => Some(Self::Residue2),
            _ => None,
        }
    }

    /// 类型号
    pub fn code(self) -> u32 {
        match self {
            Self::Residue0 => 0,
            Self::Residue1 => 1,
            Self::Residue2 => 2,
        }
    }
}

/// setup 头中的残差描述
#[derive(Debug, Clone)]
pub struct ResidueInfo {
    /// 残差类型
    pub kind: ResidueType,
    /// 起始频点
    pub begin: usize,
    /// 结束频点 (不含)
    pub end: usize,
    /// 每个分区的频点数
    pub grouping: usize,
    /// 分区类别数
    pub partitions: usize,
    /// 分组 (分类字) 码本
    pub groupbook: usize,
    /// 每个类别启用的级 (位掩码)
    pub secondstages: Vec<u32>,
    /// 按类别、级顺序展开的码本列表
    pub booklist: Vec<usize>,
}

impl ResidueInfo {
    /// 读取 16 位类型号并解析参数
    pub(crate) fn unpack(br: &mut BitReader<'_>, books: &[Codebook]) -> VorbisResult<Self> {
        let eof = || VorbisError::BadHeader("residue: 数据截断".into());

        let code = br.read(16).ok_or_else(eof)?;
        let kind = ResidueType::from_code(code)
            .ok_or_else(|| VorbisError::BadHeader(format!("不支持的 residue 类型: {code}")))?;

        let begin = br.read_usize(24).ok_or_else(eof)?;
        let end = br.read_usize(24).ok_or_else(eof)?;
        let grouping = br.read_usize(24).ok_or_else(eof)? + 1;
        let partitions = br.read_usize(6).ok_or_else(eof)? + 1;
        let groupbook = br.read_usize(8).ok_or_else(eof)?;

        let mut secondstages = Vec::with_capacity(partitions);
        let mut acc = 0;
        for _ in 0..partitions {
            let mut cascade = br.read(3).ok_or_else(eof)?;
            if br.read_flag().ok_or_else(eof)? {
                cascade |= br.read(5).ok_or_else(eof)? << 3;
            }
            acc += cascade.count_ones() as usize;
            secondstages.push(cascade);
        }
        let mut booklist = Vec::with_capacity(acc);
        for _ in 0..acc {
            booklist.push(br.read_usize(8).ok_or_else(eof)?);
        }

        let Some(phrasebook) = books.get(groupbook) else {
            return Err(VorbisError::BadHeader(format!(
                "residue: 分组码本索引越界 {groupbook}"
            )));
        };
        for &book in &booklist {
            match books.get(book) {
                Some(b) if b.has_values() => {}
                Some(_) => {
                    return Err(VorbisError::BadHeader(format!(
                        "residue: 码本 {book} 没有数值映射"
                    )));
                }
                None => {
                    return Err(VorbisError::BadHeader(format!(
                        "residue: 码本索引越界 {book}"
                    )));
                }
            }
        }

        // 分类字所能表示的组合数不能超过分组码本的条目数
        if phrasebook.dim < 1 {
            return Err(VorbisError::BadHeader("residue: 分组码本维数为 0".into()));
        }
        let mut partvals = 1usize;
        for _ in 0..phrasebook.dim {
            partvals *= partitions;
            if partvals > phrasebook.entries {
                return Err(VorbisError::BadHeader(format!(
                    "residue: 分类组合数超过分组码本条目数 {}",
                    phrasebook.entries
                )));
            }
        }

        Ok(Self {
            kind,
            begin,
            end,
            grouping,
            partitions,
            groupbook,
            secondstages,
            booklist,
        })
    }

    /// 预计算各类别各级的码本与分类字展开表
    pub(crate) fn look(&self, books: &[Codebook]) -> ResidueLook {
        let mut acc = 0;
        let mut stages = 0;
        let partbooks = self
            .secondstages
            .iter()
            .map(|&cascade| {
                let n = ilog(cascade) as usize;
                stages = stages.max(n);
                (0..n)
                    .map(|k| {
                        if cascade & (1 << k) != 0 {
                            acc += 1;
                            Some(self.booklist[acc - 1])
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        let dim = books[self.groupbook].dim;
        let parts = self.partitions;
        let partvals = parts.pow(dim as u32);
        let decodemap = (0..partvals)
            .map(|j| {
                let mut val = j;
                let mut mult = partvals / parts;
                (0..dim)
                    .map(|_| {
                        let deco = val / mult;
                        val -= deco * mult;
                        mult = (mult / parts).max(1);
                        deco
                    })
                    .collect()
            })
            .collect();

        ResidueLook {
            info: self.clone(),
            partbooks,
            stages,
            partvals,
            decodemap,
        }
    }
}

/// 解码期使用的残差查找结构
#[derive(Debug, Clone)]
pub(crate) struct ResidueLook {
    info: ResidueInfo,
    /// 类别 -> 各级码本
    partbooks: Vec<Vec<Option<usize>>>,
    /// 最大级数
    stages: usize,
    /// 分类字取值数 (partitions^dim)
    partvals: usize,
    /// 分类字 -> 每个分区的类别
    decodemap: Vec<Vec<usize>>,
}

impl ResidueLook {
    /// 按残差类型挑出本子映射需要解码的声道, 写入 `out`
    ///
    /// 类型 0/1 只解码非静音声道; 类型 2 只要有一个成员声道非静音就解码全部成员.
    /// `nonzero` 按全局声道号索引.
    pub(crate) fn select_channels(
        &self,
        members: &[usize],
        nonzero: &[bool],
        out: &mut Vec<usize>,
    ) {
        out.clear();
        match self.info.kind {
            ResidueType::Residue0 | ResidueType::Residue1 => {
                out.extend(members.iter().copied().filter(|&c| nonzero[c]));
            }
            ResidueType::Residue2 => {
                if members.iter().any(|&c| nonzero[c]) {
                    out.extend_from_slice(members);
                }
            }
        }
    }

    /// 解码残差并累加到 `pcm[chans[..]]` 的频谱
    ///
    /// `chans` 由 [`select_channels`](Self::select_channels) 给出, 为空时不读取任何位.
    /// 包截断视为正常结束; 分类字超出 decodemap 视为坏包.
    pub(crate) fn inverse(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
        pcm: &mut [Vec<i32>],
        chans: &[usize],
        pcmend: usize,
    ) -> VorbisResult<()> {
        if chans.is_empty() {
            return Ok(());
        }
        match self.info.kind {
            ResidueType::Residue0 | ResidueType::Residue1 => {
                self.inverse01(books, br, arena, pcm, chans, pcmend)
            }
            ResidueType::Residue2 => self.inverse2(books, br, arena, pcm, chans, pcmend),
        }
    }

    fn check_classword(&self, temp: usize) -> VorbisResult<()> {
        if temp >= self.partvals {
            return Err(VorbisError::BadPacket(format!(
                "residue: 分类字越界 {temp} >= {}",
                self.partvals
            )));
        }
        Ok(())
    }

    fn inverse01(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
        pcm: &mut [Vec<i32>],
        chans: &[usize],
        pcmend: usize,
    ) -> VorbisResult<()> {
        let info = &self.info;
        let ch = chans.len();
        let spp = info.grouping;
        let phrasebook = &books[info.groupbook];
        let per_word = phrasebook.dim;
        let end = info.end.min(pcmend >> 1);
        if end <= info.begin {
            return Ok(());
        }
        let partvals = (end - info.begin) / spp;
        let partwords = partvals.div_ceil(per_word);
        // 每声道每个分类字的取值, 第 0 级解出, 后续级复用; 其后是类型 0 的条目号暂存
        let span = arena.alloc(ch * partwords + spp);
        let (partword, scratch) = arena.get_mut(span).split_at_mut(ch * partwords);

        for s in 0..self.stages {
            let mut i = 0;
            let mut l = 0;
            while i < partvals {
                if s == 0 {
                    for j in 0..ch {
                        let Some(temp) = phrasebook.decode(br) else {
                            trace!("residue: 分类字处截断, 第 {s} 级");
                            return Ok(());
                        };
                        self.check_classword(temp)?;
                        partword[j * partwords + l] = temp as i32;
                    }
                }

                let mut k = 0;
                while k < per_word && i < partvals {
                    for (j, &c) in chans.iter().enumerate() {
                        let class = self.decodemap[partword[j * partwords + l] as usize][k];
                        if info.secondstages[class] & (1 << s) == 0 {
                            continue;
                        }
                        let Some(Some(book)) = self.partbooks[class].get(s) else {
                            continue;
                        };
                        let stagebook = &books[*book];
                        let offset = info.begin + i * spp;
                        let Some(out) = pcm[c].get_mut(offset..) else {
                            continue;
                        };
                        let done = match info.kind {
                            ResidueType::Residue0 => {
                                stagebook.decodevs_add(out, br, spp, RESIDUE_POINT, scratch)
                            }
                            _ => stagebook.decodev_add(out, br, spp, RESIDUE_POINT),
                        };
                        if done.is_none() {
                            trace!("residue: 向量处截断, 第 {s} 级分区 {i}");
                            return Ok(());
                        }
                    }
                    k += 1;
                    i += 1;
                }
                l += 1;
            }
        }
        Ok(())
    }

    /// 类型 2: 所有声道按样本交错成一条长度 `ch * n/2` 的向量, 按类型 1 解码
    fn inverse2(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
        pcm: &mut [Vec<i32>],
        chans: &[usize],
        pcmend: usize,
    ) -> VorbisResult<()> {
        let info = &self.info;
        let ch = chans.len();
        let spp = info.grouping;
        let phrasebook = &books[info.groupbook];
        let per_word = phrasebook.dim;
        let end = info.end.min((pcmend * ch) >> 1);
        if end <= info.begin {
            return Ok(());
        }
        let partvals = (end - info.begin) / spp;
        let partwords = partvals.div_ceil(per_word);
        let span = arena.alloc(partwords);
        let partword = arena.get_mut(span);

        for s in 0..self.stages {
            let mut i = 0;
            let mut l = 0;
            while i < partvals {
                if s == 0 {
                    let Some(temp) = phrasebook.decode(br) else {
                        trace!("residue2: 分类字处截断");
                        return Ok(());
                    };
                    self.check_classword(temp)?;
                    partword[l] = temp as i32;
                }

                let mut k = 0;
                while k < per_word && i < partvals {
                    let class = self.decodemap[partword[l] as usize][k];
                    let stagebook = match self.partbooks[class].get(s) {
                        Some(Some(book)) if info.secondstages[class] & (1 << s) != 0 => {
                            Some(&books[*book])
                        }
                        _ => None,
                    };
                    if let Some(stagebook) = stagebook {
                        // 交错下标, 不要求与声道数对齐
                        let offset = info.begin + i * spp;
                        if stagebook
                            .decodevv_add(pcm, chans, offset, br, spp, RESIDUE_POINT)
                            .is_none()
                        {
                            trace!("residue2: 向量处截断, 第 {s} 级分区 {i}");
                            return Ok(());
                        }
                    }
                    k += 1;
                    i += 1;
                }
                l += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::{LookupType, StaticCodebook};
    use proptest::prelude::*;
    use tremor_core::bitwriter::BitWriter;
    use tremor_core::fixed::VFloat;

    /// 4 条目 2 位等长码本; 数值映射为格点 {-1, 0, 1, 2} (dim 维)
    fn vq_book(dim: usize) -> Codebook {
        let entries = 4usize.pow(dim as u32);
        let bits = (entries.trailing_zeros()) as u8;
        let s = StaticCodebook {
            dim,
            entries,
            lengths: vec![bits; entries],
            lookup: LookupType::Lattice,
            q_min: VFloat::new(-0x4000_0000, -30),
            q_delta: VFloat::new(0x4000_0000, -30),
            q_sequencep: false,
            quantlist: vec![0, 1, 2, 3],
        };
        Codebook::new(&s).unwrap()
    }

    /// 标量码本: n 个等长条目
    fn scalar_book(entries: usize, dim: usize) -> Codebook {
        let bits = entries.trailing_zeros() as u8;
        let s = StaticCodebook {
            dim,
            entries,
            lengths: vec![bits; entries],
            lookup: LookupType::None,
            q_min: VFloat::ZERO,
            q_delta: VFloat::ZERO,
            q_sequencep: false,
            quantlist: Vec::new(),
        };
        Codebook::new(&s).unwrap()
    }

    fn info(kind: ResidueType, end: usize, grouping: usize) -> ResidueInfo {
        ResidueInfo {
            kind,
            begin: 0,
            end,
            grouping,
            partitions: 2,
            groupbook: 0,
            // 类别 0 不解码, 类别 1 在第 0 级解码
            secondstages: vec![0, 1],
            booklist: vec![1],
        }
    }

    /// 把码字按码本顺序写入 (等长码本的码字即条目号)
    fn write_codes(bw: &mut BitWriter, codes: &[u32], bits: u32) {
        for &c in codes {
            bw.write_codeword(c, bits);
        }
    }

    #[test]
    fn test_decodemap展开() {
        // 2 个类别, 分组码本 dim = 2: 分类字 j 的两位按高位在前展开
        let books = vec![scalar_book(4, 2), vq_book(2)];
        let look = info(ResidueType::Residue0, 64, 8).look(&books);
        assert_eq!(look.partvals, 4);
        assert_eq!(look.decodemap, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(look.stages, 1);
        assert_eq!(look.partbooks, vec![vec![], vec![Some(1)]]);
    }

    /// 以 0..pcm.len() 为子映射成员, 按残差类型挑声道后解码, 返回读取的位数
    fn run(
        look: &ResidueLook,
        books: &[Codebook],
        data: &[u8],
        pcm: &mut [Vec<i32>],
        nonzero: &[bool],
        pcmend: usize,
    ) -> VorbisResult<usize> {
        let members: Vec<usize> = (0..pcm.len()).collect();
        let mut chans = Vec::new();
        look.select_channels(&members, nonzero, &mut chans);
        let mut br = BitReader::new(data);
        let mut arena = Arena::new();
        look.inverse(books, &mut br, &mut arena, pcm, &chans, pcmend)?;
        Ok(br.bits_read())
    }

    /// 每个分区写 1 位分类字; 类别 1 的分区随后写 grouping 个 2 位码字 (循环取自 codes)
    fn encode_partitions(classes: &[bool], codes: &[u32], grouping: usize) -> Vec<u8> {
        let mut bw = BitWriter::new();
        let mut next = codes.iter().cycle();
        for &active in classes {
            bw.write_codeword(u32::from(active), 1);
            if active {
                for _ in 0..grouping {
                    bw.write_codeword(next.next().copied().unwrap_or(0), 2);
                }
            }
        }
        bw.finish()
    }

    /// 参照实现: 把所有声道交错成一条单声道向量按类型 1 解码, 再拆回各声道
    fn interleaved_reference(
        books: &[Codebook],
        ri: &ResidueInfo,
        data: &[u8],
        ch: usize,
        half: usize,
    ) -> (Vec<Vec<i32>>, usize) {
        let mut mono = ri.clone();
        mono.kind = ResidueType::Residue1;
        let look = mono.look(books);
        let mut flat = vec![vec![0i32; ch * half]];
        let bits = run(&look, books, data, &mut flat, &[true], 2 * ch * half).unwrap();
        let out = (0..ch)
            .map(|c| (0..half).map(|p| flat[0][p * ch + c]).collect())
            .collect();
        (out, bits)
    }

    fn check_against_reference(
        ch: usize,
        grouping: usize,
        begin: usize,
        classes: &[bool],
        codes: &[u32],
    ) -> Result<(), TestCaseError> {
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let mut ri = info(ResidueType::Residue2, 0, grouping);
        ri.begin = begin;
        ri.end = begin + classes.len() * grouping;
        let half = ri.end.div_ceil(ch) + 1;
        let data = encode_partitions(classes, codes, grouping);

        let (expected, expected_bits) = interleaved_reference(&books, &ri, &data, ch, half);
        let look = ri.look(&books);
        let mut pcm = vec![vec![0i32; half]; ch];
        let bits = run(&look, &books, &data, &mut pcm, &vec![true; ch], 2 * half).unwrap();
        prop_assert_eq!(pcm, expected);
        prop_assert_eq!(bits, expected_bits);
        Ok(())
    }

    proptest! {
        #[test]
        fn test_类型2多声道等价于交错解码(
            ch in 2usize..=3,
            per_channel in 1usize..=4,
            begin_frames in 0usize..3,
            classes in prop::collection::vec(any::<bool>(), 1..12),
            codes in prop::collection::vec(0u32..4, 1..48),
        ) {
            check_against_reference(ch, ch * per_channel, ch * begin_frames, &classes, &codes)?;
        }

        #[test]
        fn test_类型2分区长度不整除声道数(
            ch in 2usize..=3,
            grouping in 1usize..=7,
            begin in 0usize..5,
            classes in prop::collection::vec(any::<bool>(), 1..12),
            codes in prop::collection::vec(0u32..4, 1..48),
        ) {
            prop_assume!(grouping % ch != 0);
            check_against_reference(ch, grouping, begin, &classes, &codes)?;
        }
    }

    #[test]
    fn test_类型2奇数分区长度按交错下标写入() {
        // 双声道, 每个分区 3 个交错样本: 分区边界落在声道中间
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let look = info(ResidueType::Residue2, 6, 3).look(&books);
        let mut bw = BitWriter::new();
        write_codes(&mut bw, &[1], 1);
        write_codes(&mut bw, &[3, 0, 2], 2);
        write_codes(&mut bw, &[1], 1);
        write_codes(&mut bw, &[1, 3, 0], 2);
        let data = bw.finish();

        let mut pcm = vec![vec![0i32; 4], vec![0i32; 4]];
        let bits = run(&look, &books, &data, &mut pcm, &[true, true], 8).unwrap();
        // 交错值 2, -1, 1, 0, 2, -1
        assert_eq!(pcm[0], vec![2 << 8, 1 << 8, 2 << 8, 0]);
        assert_eq!(pcm[1], vec![-1 << 8, 0, -1 << 8, 0]);
        assert_eq!(bits, 14);
    }

    #[test]
    fn test_类型2与类型1在单声道下一致() {
        // 单声道时轮转交错退化为连续写入
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let mut bw = BitWriter::new();
        for _ in 0..4 {
            write_codes(&mut bw, &[1], 1);
            write_codes(&mut bw, &[0, 3], 2);
        }
        let data = bw.finish();

        let mut outs = Vec::new();
        for kind in [ResidueType::Residue1, ResidueType::Residue2] {
            let look = info(kind, 8, 2).look(&books);
            let mut pcm = vec![vec![0i32; 16]];
            run(&look, &books, &data, &mut pcm, &[true], 16).unwrap();
            outs.push(pcm.remove(0));
        }
        assert_eq!(outs[0], outs[1]);
        // 值 -1 与 2, 移到 Q24 之上再左移 8 位
        assert_eq!(outs[0][0], -1 << 8);
        assert_eq!(outs[0][1], 2 << 8);
    }

    #[test]
    fn test_静音声道不解码() {
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let look = info(ResidueType::Residue0, 8, 2).look(&books);
        let data = [0xffu8; 8];
        let mut pcm = vec![vec![0i32; 16]];
        let bits = run(&look, &books, &data, &mut pcm, &[false], 16).unwrap();
        assert!(pcm[0].iter().all(|&v| v == 0));
        assert_eq!(bits, 0);
    }

    #[test]
    fn test_按类型挑选声道() {
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let nonzero = [false, true, false, true];
        let mut chans = Vec::new();

        let look = info(ResidueType::Residue1, 8, 2).look(&books);
        look.select_channels(&[0, 1, 2], &nonzero, &mut chans);
        assert_eq!(chans, vec![1]);

        // 类型 2: 有一个成员非静音就解码全部成员
        let look = info(ResidueType::Residue2, 8, 2).look(&books);
        look.select_channels(&[0, 1, 2], &nonzero, &mut chans);
        assert_eq!(chans, vec![0, 1, 2]);
        look.select_channels(&[0, 2], &nonzero, &mut chans);
        assert!(chans.is_empty());
    }

    #[test]
    fn test_截断视为正常结束() {
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let look = info(ResidueType::Residue1, 8, 2).look(&books);
        // 第二个分区只有一个码字, 之后码流耗尽
        let mut bw = BitWriter::new();
        write_codes(&mut bw, &[1], 1);
        write_codes(&mut bw, &[3, 3], 2);
        write_codes(&mut bw, &[1], 1);
        write_codes(&mut bw, &[0], 2);
        let data = bw.finish();
        assert_eq!(data.len(), 1);
        let mut pcm = vec![vec![0i32; 16]];
        run(&look, &books, &data, &mut pcm, &[true], 16).unwrap();
        assert_eq!(&pcm[0][..4], &[2 << 8, 2 << 8, -1 << 8, 0]);
    }

    #[test]
    fn test_分类字越界为坏包() {
        // 分组码本有 4 个条目, 但只有 2 个类别 (partvals = 2)
        let books = vec![scalar_book(4, 1), vq_book(1)];
        let look = info(ResidueType::Residue0, 8, 2).look(&books);
        let mut bw = BitWriter::new();
        write_codes(&mut bw, &[3], 2);
        let data = bw.finish();
        let mut pcm = vec![vec![0i32; 16]];
        let err = run(&look, &books, &data, &mut pcm, &[true], 16).unwrap_err();
        assert!(matches!(err, VorbisError::BadPacket(_)));
    }

    #[test]
    fn test_解析与越界检查() {
        let books = vec![scalar_book(2, 1), vq_book(1)];
        let encode = |groupbook: u32, stagebook: u32| {
            let mut bw = BitWriter::new();
            bw.write_bits(1, 16);
            bw.write_bits(0, 24);
            bw.write_bits(64, 24);
            bw.write_bits(1, 24); // grouping = 2
            bw.write_bits(1, 6); // partitions = 2
            bw.write_bits(groupbook, 8);
            bw.write_bits(0, 3);
            bw.write_flag(false);
            bw.write_bits(1, 3);
            bw.write_flag(false);
            bw.write_bits(stagebook, 8);
            bw.finish()
        };

        let data = encode(0, 1);
        let ri = ResidueInfo::unpack(&mut BitReader::new(&data), &books).unwrap();
        assert_eq!(ri.kind, ResidueType::Residue1);
        assert_eq!(ri.grouping, 2);
        assert_eq!(ri.secondstages, vec![0, 1]);
        assert_eq!(ri.booklist, vec![1]);

        let data = encode(5, 1);
        assert!(ResidueInfo::unpack(&mut BitReader::new(&data), &books).is_err());
        // 级码本没有数值映射
        let data = encode(0, 0);
        assert!(ResidueInfo::unpack(&mut BitReader::new(&data), &books).is_err());
    }
}
