//! Mapping0: 声道到 floor/residue 的绑定与声道耦合.
//!
//! 码流只定义了 mapping 类型 0. 一个音频块的解码顺序:
//! floor 第一阶段 → 耦合标记传播 → 各子映射 residue → 逆耦合 →
//! floor 第二阶段 (乘入包络) → 逆 MDCT → 加窗.

use log::{trace, warn};
use tremor_core::bitreader::{BitReader, ilog};
use tremor_core::{VorbisError, VorbisResult};

use crate::block::Block;
use crate::info::CodecSetup;
use crate::mdct::mdct_backward;
use crate::window::apply_window;

/// 一对耦合声道
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouplingStep {
    /// 幅度声道
    pub magnitude: usize,
    /// 角度声道
    pub angle: usize,
}

/// setup 头中的 mapping 描述
#[derive(Debug, Clone)]
pub struct MappingInfo {
    /// 子映射数
    pub submaps: usize,
    /// 每个声道所属的子映射
    pub chmuxlist: Vec<usize>,
    /// 每个子映射使用的 floor
    pub floorsubmap: Vec<usize>,
    /// 每个子映射使用的 residue
    pub residuesubmap: Vec<usize>,
    /// 耦合步骤 (按声明顺序)
    pub coupling: Vec<CouplingStep>,
    /// 每个子映射包含的声道, 由 chmuxlist 展开
    members: Vec<Vec<usize>>,
}

impl MappingInfo {
    /// 读取 16 位类型号并解析参数
    pub(crate) fn unpack(
        br: &mut BitReader<'_>,
        channels: usize,
        floors: usize,
        residues: usize,
    ) -> VorbisResult<Self> {
        let eof = || VorbisError::BadHeader("mapping: 数据截断".into());
        let bad = |msg: String| VorbisError::BadHeader(format!("mapping: {msg}"));

        let kind = br.read(16).ok_or_else(eof)?;
        if kind != 0 {
            return Err(bad(format!("不支持的类型 {kind}")));
        }

        let submaps = if br.read_flag().ok_or_else(eof)? {
            br.read_usize(4).ok_or_else(eof)? + 1
        } else {
            1
        };

        let mut coupling = Vec::new();
        if br.read_flag().ok_or_else(eof)? {
            let steps = br.read_usize(8).ok_or_else(eof)? + 1;
            let bits = ilog(channels.saturating_sub(1) as u32);
            for _ in 0..steps {
                let magnitude = br.read_usize(bits).ok_or_else(eof)?;
                let angle = br.read_usize(bits).ok_or_else(eof)?;
                if magnitude == angle || magnitude >= channels || angle >= channels {
                    return Err(bad(format!("耦合声道非法: {magnitude}/{angle}")));
                }
                coupling.push(CouplingStep { magnitude, angle });
            }
        }

        if br.read(2).ok_or_else(eof)? != 0 {
            return Err(bad("保留位非零".into()));
        }

        let mut chmuxlist = vec![0; channels];
        if submaps > 1 {
            for mux in chmuxlist.iter_mut() {
                *mux = br.read_usize(4).ok_or_else(eof)?;
                if *mux >= submaps {
                    return Err(bad(format!("声道子映射越界: {mux}")));
                }
            }
        }

        let mut floorsubmap = Vec::with_capacity(submaps);
        let mut residuesubmap = Vec::with_capacity(submaps);
        for _ in 0..submaps {
            // time 子映射, 未使用
            br.read(8).ok_or_else(eof)?;
            let floor = br.read_usize(8).ok_or_else(eof)?;
            if floor >= floors {
                return Err(bad(format!("floor 索引越界: {floor}")));
            }
            let residue = br.read_usize(8).ok_or_else(eof)?;
            if residue >= residues {
                return Err(bad(format!("residue 索引越界: {residue}")));
            }
            floorsubmap.push(floor);
            residuesubmap.push(residue);
        }

        let members = (0..submaps)
            .map(|submap| (0..channels).filter(|&j| chmuxlist[j] == submap).collect())
            .collect();

        Ok(Self {
            submaps,
            chmuxlist,
            floorsubmap,
            residuesubmap,
            coupling,
            members,
        })
    }

    /// 解码一个音频块到 `block.pcm`, 输出为加窗后的 `blocksize[w]` 个时域样本
    ///
    /// 某个声道的 floor 或 residue 数据损坏时, 该声道静音并设置
    /// `block.damaged`, 其余声道照常输出, 最后返回 `BadPacket`.
    pub(crate) fn inverse(
        &self,
        setup: &CodecSetup,
        blocksizes: [usize; 2],
        windows: [&[i32]; 2],
        block: &mut Block,
        br: &mut BitReader<'_>,
    ) -> VorbisResult<()> {
        let (lw, w, nw) = (block.lw, block.w, block.nw);
        let n = blocksizes[w];
        let half = n / 2;
        let channels = block.pcm.len();
        let mut failure = None;

        let pcm = &mut block.pcm;
        let arena = &mut block.arena;
        let floormemo = &mut block.floormemo;
        let nonzero = &mut block.nonzero;
        let chans = &mut block.chans;

        // floor 第一阶段
        for i in 0..channels {
            let floor = &setup.floor_looks[self.floorsubmap[self.chmuxlist[i]]];
            floormemo[i] = match floor.inverse1(&setup.books, br, arena) {
                Ok(memo) => memo,
                Err(e) => {
                    warn!("声道 {i} floor 解码失败, 本块静音: {e}");
                    failure.get_or_insert(e);
                    None
                }
            };
            nonzero[i] = floormemo[i].is_some();
            pcm[i][..half].fill(0);
        }

        // 耦合的两个声道只要有一个非静音, 两者都需要解码
        for step in &self.coupling {
            if nonzero[step.magnitude] || nonzero[step.angle] {
                nonzero[step.magnitude] = true;
                nonzero[step.angle] = true;
            }
        }

        for (submap, members) in self.members.iter().enumerate() {
            let residue = &setup.residue_looks[self.residuesubmap[submap]];
            residue.select_channels(members, nonzero, chans);
            if let Err(e) = residue.inverse(&setup.books, br, arena, pcm, chans, n) {
                warn!("子映射 {submap} residue 解码失败, 相关声道静音: {e}");
                failure.get_or_insert(e);
                for &j in members {
                    floormemo[j] = None;
                }
            }
        }

        // 逆耦合, 按声明的逆序
        for step in self.coupling.iter().rev() {
            let (mag, ang) = pair_mut(pcm, step.magnitude, step.angle);
            for (m, a) in mag[..half].iter_mut().zip(ang[..half].iter_mut()) {
                let (vm, va) = (*m, *a);
                if vm > 0 {
                    if va > 0 {
                        *a = vm.wrapping_sub(va);
                    } else {
                        *a = vm;
                        *m = vm.wrapping_add(va);
                    }
                } else if va > 0 {
                    *a = vm.wrapping_add(va);
                } else {
                    *a = vm;
                    *m = vm.wrapping_sub(va);
                }
            }
        }

        // floor 第二阶段: 乘入包络
        for i in 0..channels {
            let floor = &setup.floor_looks[self.floorsubmap[self.chmuxlist[i]]];
            let memo = floormemo[i].map(|span| arena.get(span));
            floor.inverse2(w, memo, &mut pcm[i][..half]);
        }

        // 逆变换与加窗; 被静音的声道整块置零
        for i in 0..channels {
            if !nonzero[i] {
                pcm[i][..n].fill(0);
                continue;
            }
            mdct_backward(n, &mut pcm[i]);
            apply_window(&mut pcm[i], windows, blocksizes, lw, w, nw);
        }
        let active = nonzero.iter().filter(|&&nz| nz).count();

        trace!(
            "mapping0: 块 {} 长度 {n}, 非静音声道 {active}/{channels}",
            block.trace_seq
        );
        block.trace_seq += channels as u64;

        match failure {
            Some(e) => {
                block.damaged = true;
                Err(e)
            }
            None => Ok(()),
        }
    }
}

/// 同时可变借用两个不同声道
fn pair_mut(pcm: &mut [Vec<i32>], a: usize, b: usize) -> (&mut [i32], &mut [i32]) {
    if a < b {
        let (lo, hi) = pcm.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = pcm.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::bitwriter::BitWriter;

    fn unpack(data: &[u8], channels: usize) -> VorbisResult<MappingInfo> {
        MappingInfo::unpack(&mut BitReader::new(data), channels, 2, 2)
    }

    #[test]
    fn test_解析立体声耦合() {
        let mut bw = BitWriter::new();
        bw.write_bits(0, 16);
        bw.write_flag(false); // 单子映射
        bw.write_flag(true);
        bw.write_bits(0, 8); // 1 步耦合
        bw.write_bits(0, 1); // 幅度 = 0 (ilog(1) = 1 位)
        bw.write_bits(1, 1); // 角度 = 1
        bw.write_bits(0, 2);
        bw.write_bits(0, 8);
        bw.write_bits(1, 8); // floor 1
        bw.write_bits(0, 8); // residue 0
        let data = bw.finish();

        let m = unpack(&data, 2).unwrap();
        assert_eq!(m.submaps, 1);
        assert_eq!(m.chmuxlist, vec![0, 0]);
        assert_eq!(m.floorsubmap, vec![1]);
        assert_eq!(m.residuesubmap, vec![0]);
        assert_eq!(m.members, vec![vec![0, 1]]);
        assert_eq!(
            m.coupling,
            vec![CouplingStep {
                magnitude: 0,
                angle: 1
            }]
        );
    }

    #[test]
    fn test_耦合声道相同被拒绝() {
        let mut bw = BitWriter::new();
        bw.write_bits(0, 16);
        bw.write_flag(false);
        bw.write_flag(true);
        bw.write_bits(0, 8);
        bw.write_bits(1, 1);
        bw.write_bits(1, 1);
        let data = bw.finish();
        assert!(matches!(unpack(&data, 2), Err(VorbisError::BadHeader(_))));
    }

    #[test]
    fn test_子映射引用越界() {
        let mut bw = BitWriter::new();
        bw.write_bits(0, 16);
        bw.write_flag(false);
        bw.write_flag(false);
        bw.write_bits(0, 2);
        bw.write_bits(0, 8);
        bw.write_bits(2, 8); // 只有 2 个 floor
        bw.write_bits(0, 8);
        let data = bw.finish();
        assert!(unpack(&data, 1).is_err());
    }

    #[test]
    fn test_非零类型与保留位() {
        let mut bw = BitWriter::new();
        bw.write_bits(1, 16);
        assert!(unpack(&bw.finish(), 1).is_err());

        let mut bw = BitWriter::new();
        bw.write_bits(0, 16);
        bw.write_flag(false);
        bw.write_flag(false);
        bw.write_bits(1, 2);
        assert!(unpack(&bw.finish(), 1).is_err());
    }

    #[test]
    fn test_双声道同时借用() {
        let mut pcm = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        let (a, b) = pair_mut(&mut pcm, 2, 0);
        a[0] = 50;
        b[1] = 20;
        assert_eq!(pcm, vec![vec![1, 20], vec![3, 4], vec![50, 6]]);
    }
}
