//! Floor1: 分段线性谱包络.
//!
//! 包络由一组 X 位置固定的 "post" 描述. 每个 post 的 Y 值相对于其两个
//! 已解码邻居的线性插值做预测编码; 渲染时按 X 顺序在相邻的有效 post 之间
//! 画 Bresenham 直线, 每个 Y (dB 步进) 查表转为线性幅度乘入频谱.

use tremor_core::bitreader::{BitReader, ilog};
use tremor_core::fixed::mult31_shift15;
use tremor_core::{VorbisError, VorbisResult};

use crate::block::{Arena, Span};
use crate::codebook::Codebook;
use crate::tables::floor_lookup::FLOOR_FROMDB_LOOKUP;

/// 除两个端点外最多允许的 post 数
const VIF_POSIT: usize = 63;

/// "按预测值原样使用" 标记位
const POST_PREDICTED: i32 = 0x8000;

/// 分区类别
#[derive(Debug, Clone)]
pub struct Floor1Class {
    /// 每个分区覆盖的 post 数
    pub dim: usize,
    /// 级联选择位数
    pub subs: u32,
    /// 级联选择码本
    pub book: usize,
    /// 各级码本, `None` 表示该级的 post 固定为 0
    pub subbooks: Vec<Option<usize>>,
}

/// Floor1 参数及由其导出的排序/邻居表
#[derive(Debug, Clone)]
pub struct Floor1Info {
    /// 每个分区的类别
    pub partitionclass: Vec<usize>,
    /// 类别表
    pub classes: Vec<Floor1Class>,
    /// Y 值倍率 (1..=4)
    pub mult: i32,
    /// 所有 post 的 X 位置 (解码顺序, 前两个为端点)
    pub postlist: Vec<i32>,
    /// 按 X 排序后的 post 下标
    forward_index: Vec<usize>,
    /// 第 i+2 个 post 的低侧邻居
    loneighbor: Vec<usize>,
    /// 第 i+2 个 post 的高侧邻居
    hineighbor: Vec<usize>,
    /// Y 值量化级数
    quant_q: i32,
}

impl Floor1Info {
    pub(crate) fn unpack(br: &mut BitReader<'_>, books: &[Codebook]) -> VorbisResult<Self> {
        let eof = || VorbisError::BadHeader("floor1: 数据截断".into());
        let book_ref = |book: usize| -> VorbisResult<usize> {
            if book < books.len() {
                Ok(book)
            } else {
                Err(VorbisError::BadHeader(format!("floor1: 码本索引越界 {book}")))
            }
        };

        let partitions = br.read_usize(5).ok_or_else(eof)?;
        let mut partitionclass = Vec::with_capacity(partitions);
        for _ in 0..partitions {
            partitionclass.push(br.read_usize(4).ok_or_else(eof)?);
        }
        let class_count = partitionclass.iter().max().map_or(0, |&m| m + 1);

        let mut classes = Vec::with_capacity(class_count);
        for _ in 0..class_count {
            let dim = br.read_usize(3).ok_or_else(eof)? + 1;
            let subs = br.read(2).ok_or_else(eof)?;
            let book = if subs > 0 {
                book_ref(br.read_usize(8).ok_or_else(eof)?)?
            } else {
                0
            };
            let mut subbooks = Vec::with_capacity(1 << subs);
            for _ in 0..(1 << subs) {
                let raw = br.read_usize(8).ok_or_else(eof)?;
                subbooks.push(match raw {
                    0 => None,
                    n => Some(book_ref(n - 1)?),
                });
            }
            classes.push(Floor1Class {
                dim,
                subs,
                book,
                subbooks,
            });
        }

        let mult = br.read(2).ok_or_else(eof)? as i32 + 1;
        let rangebits = br.read(4).ok_or_else(eof)?;

        let mut postlist = vec![0i32, 1 << rangebits];
        for &class in &partitionclass {
            let dim = classes[class].dim;
            if postlist.len() - 2 + dim > VIF_POSIT {
                return Err(VorbisError::BadHeader(format!(
                    "floor1: post 数超过 {}",
                    VIF_POSIT + 2
                )));
            }
            for _ in 0..dim {
                postlist.push(br.read(rangebits).ok_or_else(eof)? as i32);
            }
        }

        let posts = postlist.len();
        let mut forward_index: Vec<usize> = (0..posts).collect();
        forward_index.sort_by_key(|&i| postlist[i]);
        if forward_index
            .windows(2)
            .any(|w| postlist[w[0]] == postlist[w[1]])
        {
            return Err(VorbisError::BadHeader("floor1: post 位置重复".into()));
        }

        let quant_q = match mult {
            1 => 256,
            2 => 128,
            3 => 86,
            _ => 64,
        };

        // 在已解码的 post 中找最近的左右邻居
        let mut loneighbor = Vec::with_capacity(posts - 2);
        let mut hineighbor = Vec::with_capacity(posts - 2);
        for j in 0..posts - 2 {
            let (mut lo, mut hi) = (0usize, 1usize);
            let (mut lx, mut hx) = (0i32, postlist[1]);
            let currentx = postlist[j + 2];
            for (k, &x) in postlist.iter().enumerate().take(j + 2) {
                if x > lx && x < currentx {
                    lo = k;
                    lx = x;
                }
                if x < hx && x > currentx {
                    hi = k;
                    hx = x;
                }
            }
            loneighbor.push(lo);
            hineighbor.push(hi);
        }

        Ok(Self {
            partitionclass,
            classes,
            mult,
            postlist,
            forward_index,
            loneighbor,
            hineighbor,
            quant_q,
        })
    }

    /// post 总数 (含两个端点)
    pub fn posts(&self) -> usize {
        self.postlist.len()
    }

    /// 读取并还原所有 post 的 Y 值; 首位为 0 表示本声道无 floor
    pub(crate) fn inverse1(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
    ) -> VorbisResult<Option<Span>> {
        let truncated = || VorbisError::BadPacket("floor1: 包截断".into());

        if !br.read_flag().ok_or_else(truncated)? {
            return Ok(None);
        }

        let posts = self.posts();
        let span = arena.alloc(posts);
        let fit_value = arena.get_mut(span);
        let ybits = ilog((self.quant_q - 1) as u32);
        fit_value[0] = br.read(ybits).ok_or_else(truncated)? as i32;
        fit_value[1] = br.read(ybits).ok_or_else(truncated)? as i32;

        let mut j = 2;
        for &class in &self.partitionclass {
            let class = &self.classes[class];
            let csub = (1usize << class.subs) - 1;
            let mut cval = 0usize;
            if class.subs > 0 {
                cval = books[class.book]
                    .decode(br)
                    .ok_or_else(|| VorbisError::BadPacket("floor1: 级联选择解码失败".into()))?;
            }
            for k in 0..class.dim {
                let sub = class.subbooks[cval & csub];
                cval >>= class.subs;
                fit_value[j + k] = match sub {
                    Some(book) => books[book]
                        .decode(br)
                        .ok_or_else(|| VorbisError::BadPacket("floor1: post 值解码失败".into()))?
                        as i32,
                    None => 0,
                };
            }
            j += class.dim;
        }

        for i in 2..posts {
            let lo = self.loneighbor[i - 2];
            let hi = self.hineighbor[i - 2];
            let predicted = render_point(
                self.postlist[lo],
                self.postlist[hi],
                fit_value[lo],
                fit_value[hi],
                self.postlist[i],
            );
            let hiroom = self.quant_q - predicted;
            let loroom = predicted;
            let room = hiroom.min(loroom) << 1;
            let mut val = fit_value[i];

            if val != 0 {
                if val >= room {
                    val = if hiroom > loroom {
                        val - loroom
                    } else {
                        -1 - (val - hiroom)
                    };
                } else if val & 1 != 0 {
                    val = -((val + 1) >> 1);
                } else {
                    val >>= 1;
                }
                fit_value[i] = val + predicted;
                fit_value[lo] &= 0x7fff;
                fit_value[hi] &= 0x7fff;
            } else {
                fit_value[i] = predicted | POST_PREDICTED;
            }
        }

        Ok(Some(span))
    }

    /// 按 X 顺序渲染包络并乘入频谱 (前 n 个频点); 无 floor 时清零
    pub(crate) fn inverse2(&self, memo: Option<&[i32]>, out: &mut [i32]) {
        let Some(fit_value) = memo else {
            out.fill(0);
            return;
        };
        let n = out.len() as i32;

        let mut hx = 0;
        let mut lx = 0;
        let mut ly = fit_value[0] * self.mult;
        for &current in self.forward_index.iter().skip(1) {
            let hy = fit_value[current] & 0x7fff;
            if hy == fit_value[current] {
                let hy = hy * self.mult;
                hx = self.postlist[current];
                render_line(n, lx, hx, ly, hy, out);
                lx = hx;
                ly = hy;
            }
        }

        let tail = FLOOR_FROMDB_LOOKUP[ly.clamp(0, 255) as usize];
        for v in out.iter_mut().skip(hx.max(0) as usize) {
            *v = mult31_shift15(*v, tail);
        }
    }
}

/// 两点间线性插值 (截断)
fn render_point(x0: i32, x1: i32, y0: i32, y1: i32, x: i32) -> i32 {
    let y0 = y0 & 0x7fff;
    let y1 = y1 & 0x7fff;
    let dy = y1 - y0;
    let adx = x1 - x0;
    if adx == 0 {
        return y0;
    }
    let off = (dy.abs() * (x - x0)) / adx;
    if dy < 0 { y0 - off } else { y0 + off }
}

/// Bresenham 直线, 每点的 Y 查表后乘入 d
fn render_line(n: i32, x0: i32, x1: i32, y0: i32, y1: i32, d: &mut [i32]) {
    let dy = y1 - y0;
    let adx = x1 - x0;
    if adx <= 0 {
        return;
    }
    let base = dy / adx;
    let sy = if dy < 0 { base - 1 } else { base + 1 };
    let mut ady = dy.abs();
    let n = n.min(x1);
    ady -= (base * adx).abs();

    let lookup = |y: i32| FLOOR_FROMDB_LOOKUP[y.clamp(0, 255) as usize];
    let mut x = x0;
    let mut y = y0;
    let mut err = 0;

    if x < n {
        d[x as usize] = mult31_shift15(d[x as usize], lookup(y));
    }
    x += 1;
    while x < n {
        err += ady;
        if err >= adx {
            err -= adx;
            y += sy;
        } else {
            y += base;
        }
        d[x as usize] = mult31_shift15(d[x as usize], lookup(y));
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::bitwriter::BitWriter;

    fn info_with_posts(extra: &[i32], mult: i32) -> Floor1Info {
        let mut postlist = vec![0, 128];
        postlist.extend_from_slice(extra);
        let posts = postlist.len();
        let mut forward_index: Vec<usize> = (0..posts).collect();
        forward_index.sort_by_key(|&i| postlist[i]);
        let mut lo_n = Vec::new();
        let mut hi_n = Vec::new();
        for j in 0..posts - 2 {
            let (mut lo, mut hi, mut lx, mut hx) = (0, 1, 0, postlist[1]);
            for (k, &x) in postlist.iter().enumerate().take(j + 2) {
                if x > lx && x < postlist[j + 2] {
                    lo = k;
                    lx = x;
                }
                if x < hx && x > postlist[j + 2] {
                    hi = k;
                    hx = x;
                }
            }
            lo_n.push(lo);
            hi_n.push(hi);
        }
        Floor1Info {
            partitionclass: Vec::new(),
            classes: Vec::new(),
            mult,
            postlist,
            forward_index,
            loneighbor: lo_n,
            hineighbor: hi_n,
            quant_q: 256,
        }
    }

    #[test]
    fn test_插值截断() {
        assert_eq!(render_point(0, 10, 0, 5, 3), 1);
        assert_eq!(render_point(0, 10, 5, 0, 3), 4);
        // 忽略预测标记位
        assert_eq!(render_point(0, 10, 0x8000 | 10, 20, 5), 15);
    }

    #[test]
    fn test_直线渲染端点() {
        let mut d = vec![1 << 15; 16];
        render_line(16, 0, 8, 0, 255, &mut d);
        assert_eq!(d[0], FLOOR_FROMDB_LOOKUP[0]);
        // 未到 x1 的点都被写入, x1 本身留给下一段
        assert!(d[7] > d[0]);
        assert_eq!(d[8], 1 << 15);
        for x in 1..8 {
            assert!(d[x] >= d[x - 1], "x={x}");
        }
    }

    #[test]
    fn test_平直包络() {
        let info = info_with_posts(&[64], 1);
        // 三个 post Y 值相同, 包络应处处相等
        let memo = [100, 100, 100];
        let mut out = vec![1 << 15; 128];
        info.inverse2(Some(&memo), &mut out);
        let expected = FLOOR_FROMDB_LOOKUP[100];
        assert!(out.iter().all(|&v| v == expected));
    }

    #[test]
    fn test_预测post不参与渲染() {
        let info = info_with_posts(&[64], 1);
        // 中间 post 带预测标记, 直接从 (0,0) 画到 (128,200)
        let memo = [0, 200, 100 | POST_PREDICTED];
        let mut with_mid = vec![1 << 15; 128];
        info.inverse2(Some(&memo), &mut with_mid);
        let mut direct = vec![1 << 15; 128];
        render_line(128, 0, 128, 0, 200, &mut direct);
        assert_eq!(with_mid, direct);
    }

    #[test]
    fn test_超出最后post的频点沿用末值() {
        let mut info = info_with_posts(&[], 1);
        info.postlist[1] = 32;
        let memo = [10, 50];
        let mut out = vec![1 << 15; 64];
        info.inverse2(Some(&memo), &mut out);
        let tail = FLOOR_FROMDB_LOOKUP[50];
        assert!(out[32..].iter().all(|&v| v == tail));
    }

    #[test]
    fn test_room展开() {
        // 无分区, post 为两个端点 + 一个由外部写入的 post
        let info = info_with_posts(&[64], 1);
        let mut arena = Arena::new();
        let mut bw = BitWriter::new();
        bw.write_flag(true);
        bw.write_bits(40, 8);
        bw.write_bits(80, 8);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let span = info.inverse1(&[], &mut br, &mut arena).unwrap().unwrap();
        let fit = arena.get(span);
        // 中间 post 没有读到值: 标记为预测值 (40+80)/2
        assert_eq!(fit[0], 40);
        assert_eq!(fit[1], 80);
        assert_eq!(fit[2], 60 | POST_PREDICTED);
    }

    #[test]
    fn test_首位为0表示无floor() {
        let info = info_with_posts(&[], 1);
        let data = [0u8];
        let mut br = BitReader::new(&data);
        let mut arena = Arena::new();
        assert!(info.inverse1(&[], &mut br, &mut arena).unwrap().is_none());
        let mut out = vec![5; 8];
        info.inverse2(None, &mut out);
        assert_eq!(out, vec![0; 8]);
    }

    #[test]
    fn test_截断返回坏包() {
        let info = info_with_posts(&[], 1);
        let data = [0x01u8];
        let mut br = BitReader::new(&data);
        let mut arena = Arena::new();
        assert!(matches!(
            info.inverse1(&[], &mut br, &mut arena),
            Err(VorbisError::BadPacket(_))
        ));
    }

    #[test]
    fn test_post位置重复被拒绝() {
        let mut bw = BitWriter::new();
        bw.write_bits(1, 5); // 1 个分区
        bw.write_bits(0, 4); // 类别 0
        bw.write_bits(1, 3); // dim = 2
        bw.write_bits(0, 2); // 无级联
        bw.write_bits(0, 8); // subbook 0: 无
        bw.write_bits(0, 2); // mult = 1
        bw.write_bits(7, 4); // rangebits = 7
        bw.write_bits(30, 7);
        bw.write_bits(30, 7);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        assert!(matches!(
            Floor1Info::unpack(&mut br, &[]),
            Err(VorbisError::BadHeader(_))
        ));
    }

    #[test]
    fn test_邻居表() {
        let info = info_with_posts(&[64, 32, 96, 16], 1);
        // post 2 (x=64): 邻居为两个端点
        assert_eq!((info.loneighbor[0], info.hineighbor[0]), (0, 1));
        // post 3 (x=32): 0 与 64
        assert_eq!((info.loneighbor[1], info.hineighbor[1]), (0, 2));
        // post 4 (x=96): 64 与 128
        assert_eq!((info.loneighbor[2], info.hineighbor[2]), (2, 1));
        // post 5 (x=16): 0 与 32
        assert_eq!((info.loneighbor[3], info.hineighbor[3]), (0, 3));
        assert_eq!(info.forward_index, vec![0, 5, 3, 2, 4, 1]);
    }
}
