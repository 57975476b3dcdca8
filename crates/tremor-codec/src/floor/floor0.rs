//! Floor0: LSP 谱包络.
//!
//! 包络由 `order` 个线谱对频率描述. 每个输出频点上求
//! `∏(cos ω_i - cos w)` 的乘积, 全程整数运算, 用共享指数跟踪量级,
//! 每两项做一次查表归一化, 最后经 dB 查表转为线性幅度乘入频谱.

use log::debug;
use tremor_core::bitreader::{BitReader, ilog};
use tremor_core::fixed::{mult31_shift15, mult32};
use tremor_core::{VorbisError, VorbisResult};

use crate::block::{Arena, Span};
use crate::codebook::Codebook;
use crate::tables::lsp_lookup::{
    ADJUST_SQRT2, BARK_LOOKUP, COS_LOOKUP_I, COS_LOOKUP_I_MASK, COS_LOOKUP_I_SHIFT,
    COS_LOOKUP_I_SZ, FROMDB_LOOKUP, FROMDB_SHIFT, FROMDB2_LOOKUP, FROMDB2_MASK, FROMDB2_SHIFT,
    INVSQ_LOOKUP_I, INVSQ_LOOKUP_I_MASK, INVSQ_LOOKUP_I_SHIFT, MLOOP_1, MLOOP_2, MLOOP_3,
};

/// Floor0 参数
#[derive(Debug, Clone)]
pub struct Floor0Info {
    /// LSP 阶数
    pub order: usize,
    /// 采样率
    pub rate: u32,
    /// bark 刻度频点数
    pub barkmap: usize,
    /// 幅度位宽
    pub ampbits: u32,
    /// 幅度 dB 范围
    pub amp_db: u32,
    /// 可选码本
    pub books: Vec<usize>,
}

impl Floor0Info {
    pub(crate) fn unpack(br: &mut BitReader<'_>, books: &[Codebook]) -> VorbisResult<Self> {
        let eof = || VorbisError::BadHeader("floor0: 数据截断".into());

        let order = br.read_usize(8).ok_or_else(eof)?;
        let rate = br.read(16).ok_or_else(eof)?;
        let barkmap = br.read_usize(16).ok_or_else(eof)?;
        let ampbits = br.read(6).ok_or_else(eof)?;
        let amp_db = br.read(8).ok_or_else(eof)?;
        let numbooks = br.read_usize(4).ok_or_else(eof)? + 1;

        if order < 1 || rate < 1 || barkmap < 1 {
            return Err(VorbisError::BadHeader(format!(
                "floor0: 参数非法 order={order} rate={rate} barkmap={barkmap}"
            )));
        }
        if ampbits > 32 {
            return Err(VorbisError::BadHeader(format!(
                "floor0: 幅度位宽 {ampbits} 超过 32"
            )));
        }

        let mut list = Vec::with_capacity(numbooks);
        for _ in 0..numbooks {
            let book = br.read_usize(8).ok_or_else(eof)?;
            match books.get(book) {
                Some(b) if b.has_values() && b.dim > 0 => list.push(book),
                Some(_) => {
                    return Err(VorbisError::BadHeader(format!(
                        "floor0: 码本 {book} 没有数值映射"
                    )));
                }
                None => {
                    return Err(VorbisError::BadHeader(format!(
                        "floor0: 码本索引越界 {book}"
                    )));
                }
            }
        }

        Ok(Self {
            order,
            rate,
            barkmap,
            ampbits,
            amp_db,
            books: list,
        })
    }
}

/// Floor0 预计算表
#[derive(Debug, Clone)]
pub struct Floor0Look {
    info: Floor0Info,
    /// 每种块长: 线性频点 -> bark 频点
    linearmap: [Vec<usize>; 2],
    /// 每个 bark 频点的 cos 值 (Q14)
    lsp_look: Vec<i32>,
}

/// 频率 (Hz) 转 bark 刻度, Q14
fn to_bark(n: i64) -> i64 {
    for i in 0..BARK_LOOKUP.len() - 1 {
        let (lo, hi) = (i64::from(BARK_LOOKUP[i]), i64::from(BARK_LOOKUP[i + 1]));
        if n >= lo && n < hi {
            return ((i as i64) << 14) + (((n - lo) * ((1i64 << 31) / (hi - lo))) >> 17);
        }
    }
    (BARK_LOOKUP.len() as i64) << 14
}

/// 插值 cos 查表, 输入 0.16 格式 (65536 = π), 输出 Q14
fn coslook_i(a: i32) -> i32 {
    let i = (a >> COS_LOOKUP_I_SHIFT) as usize;
    let d = a & COS_LOOKUP_I_MASK;
    COS_LOOKUP_I[i] - ((d * (COS_LOOKUP_I[i] - COS_LOOKUP_I[i + 1])) >> COS_LOOKUP_I_SHIFT)
}

/// 同上, 先放大后插值
fn coslook2_i(a: i32) -> i32 {
    let i = (a >> COS_LOOKUP_I_SHIFT) as usize;
    let d = a & COS_LOOKUP_I_MASK;
    ((COS_LOOKUP_I[i] << COS_LOOKUP_I_SHIFT) - d * (COS_LOOKUP_I[i] - COS_LOOKUP_I[i + 1]))
        >> COS_LOOKUP_I_SHIFT
}

/// `1/sqrt(a · 2^e)`, a 已归一化到 [0x8000, 0xffff]
fn invsqlook_i(a: u32, e: i32) -> i64 {
    let i = ((a & 0x7fff) >> INVSQ_LOOKUP_I_SHIFT) as usize;
    let d = (a as i32) & INVSQ_LOOKUP_I_MASK;
    let val = INVSQ_LOOKUP_I[i]
        - (((INVSQ_LOOKUP_I[i] - INVSQ_LOOKUP_I[i + 1]) * d) >> INVSQ_LOOKUP_I_SHIFT);
    let val = i64::from(val) * i64::from(ADJUST_SQRT2[(e & 1) as usize]);
    let shift = (e >> 1) + 21;
    if shift >= 63 {
        0
    } else if shift >= 0 {
        val >> shift
    } else {
        (val << (-shift).min(31)).min(i64::from(i32::MAX))
    }
}

/// dB (Q12, 非正) 转线性幅度, Q31
fn fromdblook_i(a: i64) -> i32 {
    let i = (-a) >> (12 - FROMDB2_SHIFT);
    if i < 0 {
        return 0x7fff_ffff;
    }
    if i >= (FROMDB_LOOKUP.len() as i64) << FROMDB_SHIFT {
        return 0;
    }
    let i = i as usize;
    FROMDB_LOOKUP[i >> FROMDB_SHIFT] * FROMDB2_LOOKUP[i & FROMDB2_MASK as usize]
}

/// 查表给出把 (pi|qi) 归一化到 16 位所需的右移量
#[inline]
fn mloop_shift(v: u32) -> u32 {
    let s = MLOOP_1[((v >> 25) as usize).min(63)];
    if s != 0 {
        return u32::from(s);
    }
    let s = MLOOP_2[((v >> 19) & 0x3f) as usize];
    if s != 0 {
        return u32::from(s);
    }
    u32::from(MLOOP_3[((v >> 16) & 0x7) as usize])
}

impl Floor0Look {
    pub(crate) fn new(info: &Floor0Info, blocksizes: [usize; 2]) -> Self {
        let ln = info.barkmap;
        let half_rate = i64::from(info.rate / 2);
        let bark_nyquist = to_bark(half_rate);

        let map_for = |n: usize| -> Vec<usize> {
            (0..n)
                .map(|j| {
                    if bark_nyquist == 0 {
                        return 0;
                    }
                    let freq = half_rate * j as i64 / n as i64;
                    let val = (ln as i64 * ((to_bark(freq) << 11) / bark_nyquist)) >> 11;
                    (val.max(0) as usize).min(ln - 1)
                })
                .collect()
        };
        let linearmap = [map_for(blocksizes[0] / 2), map_for(blocksizes[1] / 2)];

        let lsp_look = (0..ln)
            .map(|j| coslook2_i((0x10000 * j / ln) as i32))
            .collect();

        Self {
            info: info.clone(),
            linearmap,
            lsp_look,
        }
    }

    /// 读取幅度与 LSP 系数; 幅度为 0 表示本声道无 floor
    pub(crate) fn inverse1(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
    ) -> VorbisResult<Option<Span>> {
        let info = &self.info;
        let truncated = || VorbisError::BadPacket("floor0: 包截断".into());

        let ampraw = br.read(info.ampbits).ok_or_else(truncated)?;
        if ampraw == 0 {
            return Ok(None);
        }
        let maxval = (1i64 << info.ampbits) - 1;
        let amp = (((i64::from(ampraw) * i64::from(info.amp_db)) << 4) / maxval) as i32;

        let booknum = br
            .read_usize(ilog(info.books.len() as u32))
            .ok_or_else(truncated)?;
        let Some(&book_index) = info.books.get(booknum) else {
            return Err(VorbisError::BadPacket(format!(
                "floor0: 码本序号越界 {booknum}"
            )));
        };
        let book = &books[book_index];
        let m = info.order;
        let dim = book.dim;

        let span = arena.alloc(m + dim);
        let lsp = arena.get_mut(span);
        let mut j = 0;
        while j < m {
            book.decodev_set(&mut lsp[j..j + dim], br, dim, -24)
                .ok_or_else(|| VorbisError::BadPacket("floor0: LSP 系数解码失败".into()))?;
            j += dim;
        }

        // 系数按增量编码, 每组加上前一组的末项
        let mut last = 0i32;
        let mut j = 0;
        while j < m {
            for _ in 0..dim {
                lsp[j] = lsp[j].wrapping_add(last);
                j += 1;
            }
            last = lsp[j - 1];
        }
        lsp[m] = amp;
        Ok(Some(span))
    }

    /// 把包络曲线乘入频谱; 无 floor 时把频谱清零
    pub(crate) fn inverse2(&self, w: usize, memo: Option<&[i32]>, out: &mut [i32]) {
        let map = &self.linearmap[w];
        let n = map.len().min(out.len());
        match memo {
            Some(lsp) => {
                let m = self.info.order;
                lsp_to_curve(
                    &mut out[..n],
                    &map[..n],
                    &lsp[..m],
                    lsp[m],
                    self.info.amp_db as i32,
                    &self.lsp_look,
                );
            }
            None => out[..n].fill(0),
        }
    }
}

/// LSP 系数求值并乘入 curve
fn lsp_to_curve(
    curve: &mut [i32],
    map: &[usize],
    lsp: &[i32],
    amp: i32,
    ampoffset: i32,
    icos: &[i32],
) {
    let m = lsp.len();
    let n = curve.len();
    let ampoffseti = i64::from(ampoffset) * 4096;
    let ampi = i64::from(amp);

    // lsp 为 8.24 弧度, 转为 0.16 格式 (65536 = π) 后查 cos
    let mut ilsp = Vec::with_capacity(m);
    for &coef in lsp {
        let val = mult32(coef, 0x517cc2);
        if val < 0 || (val >> COS_LOOKUP_I_SHIFT) >= COS_LOOKUP_I_SZ {
            debug!("floor0: LSP 系数越界 {coef}, 曲线置零");
            curve.fill(0);
            return;
        }
        ilsp.push(coslook_i(val));
    }
    let diff = |c: i32, w: i32| (c - w).unsigned_abs();

    let mut i = 0;
    while i < n {
        let k = map[i];
        let wi = icos[k];
        // 2^-0.5, 0.16 格式
        let mut qi: u32 = 46341;
        let mut pi: u32 = 46341;
        let mut qexp: i32 = 0;

        qi = qi.wrapping_mul(diff(ilsp[0], wi));
        if m > 1 {
            pi = pi.wrapping_mul(diff(ilsp[1], wi));
        }

        let mut j = 3;
        while j < m {
            let shift = mloop_shift(pi | qi);
            qi = (qi >> shift).wrapping_mul(diff(ilsp[j - 1], wi));
            pi = (pi >> shift).wrapping_mul(diff(ilsp[j], wi));
            qexp += shift as i32;
            j += 2;
        }
        let mut shift = mloop_shift(pi | qi);

        if m & 1 == 1 {
            // 奇数阶: 最后一个系数只进 q
            qi >>= shift;
            if m > 1 {
                qi = qi.wrapping_mul(diff(ilsp[j - 1], wi));
            }
            pi = (pi >> shift) << 14;
            qexp += shift as i32;

            shift = mloop_shift(pi | qi);
            pi >>= shift;
            qi >>= shift;
            qexp += shift as i32 - 14 * ((m as i32 + 1) >> 1);

            pi = pi.wrapping_mul(pi) >> 16;
            qi = qi.wrapping_mul(qi) >> 16;
            qexp = qexp * 2 + m as i32;

            pi = pi.wrapping_mul(((1 << 14) - ((wi * wi) >> 14)) as u32);
            qi = qi.wrapping_add(pi >> 14);
        } else {
            pi >>= shift;
            qi >>= shift;
            qexp += shift as i32 - 7 * m as i32;

            pi = pi.wrapping_mul(pi) >> 16;
            qi = qi.wrapping_mul(qi) >> 16;
            qexp = qexp * 2 + m as i32;

            pi = pi.wrapping_mul(((1 << 14) - wi) as u32);
            qi = qi.wrapping_mul(((1 << 14) + wi) as u32);
            qi = qi.wrapping_add(pi) >> 14;
        }

        // 查表前重新归一化到 [0x8000, 0xffff]
        if qi & 0xffff_0000 != 0 {
            qi >>= 1;
            qexp += 1;
        } else {
            while qi != 0 && qi & 0x8000 == 0 {
                qi <<= 1;
                qexp -= 1;
            }
        }

        let db = ampi * invsqlook_i(qi, qexp) - ampoffseti;
        let lin = fromdblook_i(db);

        curve[i] = mult31_shift15(curve[i], lin);
        i += 1;
        while i < n && map[i] == k {
            curve[i] = mult31_shift15(curve[i], lin);
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_info() -> Floor0Info {
        Floor0Info {
            order: 4,
            rate: 44100,
            barkmap: 64,
            ampbits: 6,
            amp_db: 80,
            books: vec![0],
        }
    }

    #[test]
    fn test_bark刻度单调() {
        let mut prev = -1;
        for f in (0..22050).step_by(50) {
            let b = to_bark(f);
            assert!(b >= prev, "f={f}");
            prev = b;
        }
        assert_eq!(to_bark(0), 0);
        assert_eq!(to_bark(100_000), 54 << 14);
    }

    #[test]
    fn test_线性映射范围() {
        let look = Floor0Look::new(&test_info(), [256, 2048]);
        assert_eq!(look.linearmap[0].len(), 128);
        assert_eq!(look.linearmap[1].len(), 1024);
        for map in &look.linearmap {
            assert_eq!(map[0], 0);
            assert!(map.windows(2).all(|w| w[0] <= w[1]));
            assert!(map.iter().all(|&v| v < 64));
        }
    }

    #[test]
    fn test_cos查表端点() {
        assert_eq!(coslook_i(0), 16384);
        assert_eq!(coslook_i(0x8000), 0);
        assert_eq!(coslook2_i(0), 16384);
        assert_eq!(coslook2_i(0x10000 - 512), COS_LOOKUP_I[127]);
    }

    #[test]
    fn test_db查表() {
        assert_eq!(fromdblook_i(1), 0x7fff_ffff);
        assert_eq!(fromdblook_i(0), FROMDB_LOOKUP[0] * FROMDB2_LOOKUP[0]);
        assert_eq!(fromdblook_i(-(140 << 12)), 0);
        // -6dB 约为 0.5
        let half = fromdblook_i(-(6 << 12)) as f64 / 2147483648.0;
        assert!((half - 0.5).abs() < 0.01, "half={half}");
    }

    #[test]
    fn test_平方根倒数查表() {
        // a = 0x8000 (0.5), e = 0 -> 1/sqrt(0.5)
        let v = invsqlook_i(0x8000, 0);
        let expected = (92681i64 * 8192) >> 21;
        assert_eq!(v, expected);
        // 指数为奇数时乘以 1/sqrt(2)
        let odd = invsqlook_i(0x8000, 1);
        assert_eq!(odd, (92681i64 * 5792) >> 21);
    }

    #[test]
    fn test_无floor时清零() {
        let look = Floor0Look::new(&test_info(), [256, 2048]);
        let mut out = vec![7i32; 128];
        look.inverse2(0, None, &mut out);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_越界lsp系数使曲线置零() {
        let mut curve = vec![1 << 20; 16];
        let map: Vec<usize> = (0..16).map(|i| i / 4).collect();
        let icos = vec![0; 4];
        lsp_to_curve(&mut curve, &map, &[-5, 1 << 24], 10, 80, &icos);
        assert!(curve.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_曲线共享bark频点() {
        let look = Floor0Look::new(&test_info(), [256, 2048]);
        let mut curve = vec![16; 128];
        // 均匀分布的 LSP 系数 (8.24 弧度)
        let pi_824 = (std::f64::consts::PI * (1u64 << 24) as f64) as i32;
        let lsp: Vec<i32> = (1..=4).map(|i| pi_824 / 5 * i).collect();
        lsp_to_curve(
            &mut curve,
            &look.linearmap[0],
            &lsp,
            600,
            80,
            &look.lsp_look,
        );
        for i in 1..128 {
            if look.linearmap[0][i] == look.linearmap[0][i - 1] {
                assert_eq!(curve[i], curve[i - 1], "同一 bark 频点的幅度必须相同");
            }
        }
        assert!(curve.iter().all(|&v| v >= 0));
    }
}
