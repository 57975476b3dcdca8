//! 定点逆 MDCT.
//!
//! 长度 n 为 2 的幂 (64..=8192). 流程: 预旋转 → 蝶形 (通用级 + 展开的
//! 32/16/8 点) → 位反转重排 → 后旋转 → 镜像展开. 全部乘法为截断的
//! `mult31`/`mult32`, 加减按 32 位回绕.
//!
//! 输出未归一化: `y[m] = Σ_k X[k] · cos(2π/n · (m + 1/2 + n/4) · (k + 1/2))`.

use tremor_core::fixed::{mult31, xnprod31, xprod31, xprod32};

use crate::tables::mdct_lookup::{SINCOS_LOOKUP0, SINCOS_LOOKUP1};

const C_PI3_8: i32 = 0x30fb_c54d;
const C_PI2_8: i32 = 0x5a82_799a;
const C_PI1_8: i32 = 0x7641_af3d;

/// 支持的最短变换长度
pub const MDCT_MIN: usize = 64;
/// 支持的最长变换长度
pub const MDCT_MAX: usize = 8192;

/// 返回 `x[hi] - x[lo]`, 并令 `x[hi] += x[lo]`
#[inline(always)]
fn fold(x: &mut [i32], hi: usize, lo: usize) -> i32 {
    let r = x[hi].wrapping_sub(x[lo]);
    x[hi] = x[hi].wrapping_add(x[lo]);
    r
}

/// 返回 `x[lo] - x[hi]`, 并令 `x[hi] += x[lo]`
#[inline(always)]
fn fold_rev(x: &mut [i32], hi: usize, lo: usize) -> i32 {
    let r = x[lo].wrapping_sub(x[hi]);
    x[hi] = x[hi].wrapping_add(x[lo]);
    r
}

#[inline(always)]
fn set2(x: &mut [i32], at: usize, (a, b): (i32, i32)) {
    x[at] = a;
    x[at + 1] = b;
}

fn bf8(x: &mut [i32]) {
    let r0 = x[4].wrapping_add(x[0]);
    let r1 = x[4].wrapping_sub(x[0]);
    let r2 = x[5].wrapping_add(x[1]);
    let r3 = x[5].wrapping_sub(x[1]);
    let r4 = x[6].wrapping_add(x[2]);
    let r5 = x[6].wrapping_sub(x[2]);
    let r6 = x[7].wrapping_add(x[3]);
    let r7 = x[7].wrapping_sub(x[3]);

    x[0] = r5.wrapping_add(r3);
    x[1] = r7.wrapping_sub(r1);
    x[2] = r5.wrapping_sub(r3);
    x[3] = r7.wrapping_add(r1);
    x[4] = r4.wrapping_sub(r0);
    x[5] = r6.wrapping_sub(r2);
    x[6] = r4.wrapping_add(r0);
    x[7] = r6.wrapping_add(r2);
}

fn bf16(x: &mut [i32]) {
    let r0 = fold_rev(x, 8, 0);
    let r1 = fold_rev(x, 9, 1);
    x[0] = mult31(r0.wrapping_add(r1), C_PI2_8);
    x[1] = mult31(r1.wrapping_sub(r0), C_PI2_8);

    let r0 = fold(x, 10, 2);
    let r1 = fold_rev(x, 11, 3);
    x[2] = r1;
    x[3] = r0;

    let r0 = fold(x, 12, 4);
    let r1 = fold(x, 13, 5);
    x[4] = mult31(r0.wrapping_sub(r1), C_PI2_8);
    x[5] = mult31(r0.wrapping_add(r1), C_PI2_8);

    let r0 = fold(x, 14, 6);
    let r1 = fold(x, 15, 7);
    x[6] = r0;
    x[7] = r1;

    bf8(&mut x[..8]);
    bf8(&mut x[8..16]);
}

fn bf32(x: &mut [i32]) {
    let r0 = fold(x, 30, 14);
    let r1 = fold(x, 31, 15);
    x[14] = r0;
    x[15] = r1;

    let r0 = fold(x, 28, 12);
    let r1 = fold(x, 29, 13);
    set2(x, 12, xnprod31(r0, r1, C_PI1_8, C_PI3_8));

    let r0 = fold(x, 26, 10);
    let r1 = fold(x, 27, 11);
    x[10] = mult31(r0.wrapping_sub(r1), C_PI2_8);
    x[11] = mult31(r0.wrapping_add(r1), C_PI2_8);

    let r0 = fold(x, 24, 8);
    let r1 = fold(x, 25, 9);
    set2(x, 8, xnprod31(r0, r1, C_PI3_8, C_PI1_8));

    let r0 = fold(x, 22, 6);
    let r1 = fold_rev(x, 23, 7);
    x[6] = r1;
    x[7] = r0;

    let r0 = fold_rev(x, 20, 4);
    let r1 = fold_rev(x, 21, 5);
    set2(x, 4, xprod31(r0, r1, C_PI3_8, C_PI1_8));

    let r0 = fold_rev(x, 18, 2);
    let r1 = fold_rev(x, 19, 3);
    x[2] = mult31(r1.wrapping_add(r0), C_PI2_8);
    x[3] = mult31(r1.wrapping_sub(r0), C_PI2_8);

    let r0 = fold_rev(x, 16, 0);
    let r1 = fold_rev(x, 17, 1);
    set2(x, 0, xprod31(r0, r1, C_PI1_8, C_PI3_8));

    bf16(&mut x[..16]);
    bf16(&mut x[16..32]);
}

/// 通用蝶形级: 四个象限分别以正/反旋转, `trig` 为查表步长
fn bfgen(x: &mut [i32], points: usize, trig: usize) {
    let t0 = &SINCOS_LOOKUP0;
    let mut x1 = points - 8;
    let mut x2 = (points >> 1) - 8;
    let mut t = 0usize;

    loop {
        for k in [6, 4, 2, 0] {
            let r0 = fold(x, x1 + k, x2 + k);
            let r1 = fold_rev(x, x1 + k + 1, x2 + k + 1);
            set2(x, x2 + k, xprod31(r1, r0, t0[t], t0[t + 1]));
            t += trig;
        }
        x1 = x1.wrapping_sub(8);
        x2 = x2.wrapping_sub(8);
        if t >= 1024 {
            break;
        }
    }
    loop {
        for k in [6, 4, 2, 0] {
            let r0 = fold(x, x1 + k, x2 + k);
            let r1 = fold(x, x1 + k + 1, x2 + k + 1);
            set2(x, x2 + k, xnprod31(r0, r1, t0[t], t0[t + 1]));
            t -= trig;
        }
        x1 = x1.wrapping_sub(8);
        x2 = x2.wrapping_sub(8);
        if t == 0 {
            break;
        }
    }
    loop {
        for k in [6, 4, 2, 0] {
            let r0 = fold_rev(x, x1 + k, x2 + k);
            let r1 = fold_rev(x, x1 + k + 1, x2 + k + 1);
            set2(x, x2 + k, xprod31(r0, r1, t0[t], t0[t + 1]));
            t += trig;
        }
        x1 = x1.wrapping_sub(8);
        x2 = x2.wrapping_sub(8);
        if t >= 1024 {
            break;
        }
    }
    loop {
        for k in [6, 4, 2, 0] {
            let r0 = fold(x, x1 + k, x2 + k);
            let r1 = fold(x, x1 + k + 1, x2 + k + 1);
            set2(x, x2 + k, xnprod31(r1, r0, t0[t], t0[t + 1]));
            t -= trig;
        }
        x1 = x1.wrapping_sub(8);
        x2 = x2.wrapping_sub(8);
        if t == 0 {
            break;
        }
    }
}

fn butterflies(x: &mut [i32], points: usize, shift: u32) {
    let stages = 7 - shift;
    for i in 0..stages {
        let span = points >> i;
        for j in 0..(1usize << i) {
            bfgen(&mut x[span * j..span * (j + 1)], span, 4 << (i + shift));
        }
    }
    for chunk in x[..points].chunks_exact_mut(32) {
        bf32(chunk);
    }
}

const BITREV4: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

#[inline(always)]
fn bitrev12(x: usize) -> usize {
    BITREV4[x >> 8] | (BITREV4[(x & 0xf0) >> 4] << 4) | (BITREV4[x & 0xf] << 8)
}

/// 位反转读取一对复数并做旋转, 返回 `[r0+r2, r1+r3, r0-r2, r3-r1]`
#[inline(always)]
fn reverse_pair(x: &[i32], half: usize, shift: u32, bit: usize, t: i32, v: i32) -> [i32; 4] {
    let r = bitrev12(bit);
    let x0 = half + ((r ^ 0xfff) >> shift) - 1;
    let x1 = half + (r >> shift);

    let r0 = x[x0].wrapping_add(x[x1]);
    let r1 = x[x1 + 1].wrapping_sub(x[x0 + 1]);
    let (r2, r3) = xprod32(r0, r1, t, v);

    let r0 = x[x0 + 1].wrapping_add(x[x1 + 1]) >> 1;
    let r1 = x[x0].wrapping_sub(x[x1]) >> 1;
    [
        r0.wrapping_add(r2),
        r1.wrapping_add(r3),
        r0.wrapping_sub(r2),
        r3.wrapping_sub(r1),
    ]
}

fn bitreverse(x: &mut [i32], n: usize, step: usize, shift: u32) {
    let half = n >> 1;
    let (tab, mut t): (&[i32], usize) = if step >= 4 {
        (&SINCOS_LOOKUP0, step >> 1)
    } else {
        (&SINCOS_LOOKUP1, 0)
    };
    let ttop = t + 1024;
    let mut bit = 0usize;
    let mut w0 = 0usize;
    let mut w1 = half;

    loop {
        let a = reverse_pair(x, half, shift, bit, tab[t + 1], tab[t]);
        t += step;
        w1 -= 4;
        x[w0] = a[0];
        x[w0 + 1] = a[1];
        x[w1 + 2] = a[2];
        x[w1 + 3] = a[3];

        let b = reverse_pair(x, half, shift, bit + 1, tab[t + 1], tab[t]);
        t += step;
        x[w0 + 2] = b[0];
        x[w0 + 3] = b[1];
        x[w1] = b[2];
        x[w1 + 1] = b[3];

        bit += 2;
        w0 += 4;
        if t >= ttop {
            break;
        }
    }
    loop {
        t -= step;
        let a = reverse_pair(x, half, shift, bit, tab[t], tab[t + 1]);
        w1 -= 4;
        x[w0] = a[0];
        x[w0 + 1] = a[1];
        x[w1 + 2] = a[2];
        x[w1 + 3] = a[3];

        t -= step;
        let b = reverse_pair(x, half, shift, bit + 1, tab[t], tab[t + 1]);
        x[w0 + 2] = b[0];
        x[w0 + 3] = b[1];
        x[w1] = b[2];
        x[w1 + 1] = b[3];

        bit += 2;
        w0 += 4;
        if w0 >= w1 {
            break;
        }
    }
}

/// 预旋转: 读 `x[..n/2]`, 写 `x[n/2..n]`
fn presymmetry(x: &mut [i32], n: usize, step: usize) {
    let n2 = n >> 1;
    let n4 = n >> 2;
    let t0 = &SINCOS_LOOKUP0;
    let (src, dst) = x.split_at_mut(n2);
    let s = |i: isize| src[i as usize];

    let mut ix = n2 as isize - 7;
    let mut ox = n4;
    let mut t = 0usize;
    loop {
        ox -= 4;
        set2(dst, ox + 2, xprod31(s(ix + 4), s(ix + 6), t0[t], t0[t + 1]));
        t += step;
        set2(dst, ox, xprod31(s(ix), s(ix + 2), t0[t], t0[t + 1]));
        t += step;
        ix -= 8;
        if ix < n4 as isize {
            break;
        }
    }
    loop {
        ox -= 4;
        set2(dst, ox + 2, xprod31(s(ix + 4), s(ix + 6), t0[t + 1], t0[t]));
        t -= step;
        set2(dst, ox, xprod31(s(ix), s(ix + 2), t0[t + 1], t0[t]));
        t -= step;
        ix -= 8;
        if ix < 0 {
            break;
        }
    }

    let mut ix = n2 as isize - 8;
    let mut ox = n4;
    let mut t = 0usize;
    loop {
        t += step;
        set2(dst, ox, xnprod31(s(ix + 6), s(ix + 4), t0[t], t0[t + 1]));
        t += step;
        set2(dst, ox + 2, xnprod31(s(ix + 2), s(ix), t0[t], t0[t + 1]));
        ix -= 8;
        ox += 4;
        if ix < n4 as isize {
            break;
        }
    }
    loop {
        t -= step;
        set2(dst, ox, xnprod31(s(ix + 6), s(ix + 4), t0[t + 1], t0[t]));
        t -= step;
        set2(dst, ox + 2, xnprod31(s(ix + 2), s(ix), t0[t + 1], t0[t]));
        ix -= 8;
        ox += 4;
        if ix < 0 {
            break;
        }
    }
}

/// 后旋转, `step` 为查表步长 (0 与 1 时在两张表之间插值)
fn postrotate(x: &mut [i32], n: usize, step: usize) {
    let n2 = n >> 1;
    let n4 = n >> 2;
    let mut ox1 = n2 + n4;
    let mut ox2 = n2 + n4;
    let mut ix = 0usize;

    // 读 x[ix], -x[ix+1] 旋转后写到 x[ox1 + a], x[ox2 + b]
    let rot = |x: &mut [i32], ix: usize, oa: usize, ob: usize, t: i32, v: i32| {
        let (a, b) = xprod31(x[ix], x[ix + 1].wrapping_neg(), t, v);
        x[oa] = a;
        x[ob] = b;
    };

    let t0 = &SINCOS_LOOKUP0;
    let t1 = &SINCOS_LOOKUP1;

    if step >= 2 {
        let (tab, mut t): (&[i32], usize) = if step >= 4 {
            (t0, step >> 1)
        } else {
            (t1, 0)
        };
        loop {
            ox1 -= 4;
            for k in 0..4 {
                rot(x, ix + 2 * k, ox1 + 3 - k, ox2 + k, tab[t], tab[t + 1]);
                t += step;
            }
            ox2 += 4;
            ix += 8;
            if ix >= ox1 {
                break;
            }
        }
    } else if step == 1 {
        let (mut ti, mut vi) = (0usize, 0usize);
        let mut a0 = t0[ti] >> 1;
        let mut a1 = t0[ti + 1] >> 1;
        ti += 2;
        loop {
            ox1 -= 4;
            let mut b0 = t1[vi] >> 1;
            let mut b1 = t1[vi + 1] >> 1;
            vi += 2;
            a0 += b0;
            a1 += b1;
            rot(x, ix, ox1 + 3, ox2, a0, a1);

            a0 = t0[ti] >> 1;
            a1 = t0[ti + 1] >> 1;
            ti += 2;
            b0 += a0;
            b1 += a1;
            rot(x, ix + 2, ox1 + 2, ox2 + 1, b0, b1);

            b0 = t1[vi] >> 1;
            b1 = t1[vi + 1] >> 1;
            vi += 2;
            a0 += b0;
            a1 += b1;
            rot(x, ix + 4, ox1 + 1, ox2 + 2, a0, a1);

            a0 = t0[ti] >> 1;
            a1 = t0[ti + 1] >> 1;
            ti += 2;
            b0 += a0;
            b1 += a1;
            rot(x, ix + 6, ox1, ox2 + 3, b0, b1);

            ox2 += 4;
            ix += 8;
            if ix >= ox1 {
                break;
            }
        }
    } else {
        let (mut ti, mut vi) = (0usize, 0usize);
        let mut a0 = t0[ti];
        let mut a1 = t0[ti + 1];
        ti += 2;
        loop {
            ox1 -= 4;
            let mut b0 = t1[vi];
            let mut b1 = t1[vi + 1];
            vi += 2;
            let q0 = (b0 - a0) >> 2;
            let q1 = (b1 - a1) >> 2;
            a0 += q0;
            a1 += q1;
            rot(x, ix, ox1 + 3, ox2, a0, a1);
            a0 = b0 - q0;
            a1 = b1 - q1;
            rot(x, ix + 2, ox1 + 2, ox2 + 1, a0, a1);

            a0 = t0[ti];
            a1 = t0[ti + 1];
            ti += 2;
            let q0 = (a0 - b0) >> 2;
            let q1 = (a1 - b1) >> 2;
            b0 += q0;
            b1 += q1;
            rot(x, ix + 4, ox1 + 1, ox2 + 2, b0, b1);
            b0 = a0 - q0;
            b1 = a1 - q1;
            rot(x, ix + 6, ox1, ox2 + 3, b0, b1);

            ox2 += 4;
            ix += 8;
            if ix >= ox1 {
                break;
            }
        }
    }
}

/// 利用对称性由中间半段展开出完整输出
fn mirror(x: &mut [i32], n: usize) {
    let n2 = n >> 1;
    let n4 = n >> 2;

    let mut ix = n2 + n4;
    let mut ox1 = n4;
    let mut ox2 = n4;
    loop {
        ox1 -= 4;
        ix -= 4;
        for k in 0..4 {
            x[ox1 + 3 - k] = x[ix + 3 - k];
            x[ox2 + k] = x[ix + 3 - k].wrapping_neg();
        }
        ox2 += 4;
        if ox2 >= ix {
            break;
        }
    }

    let mut ix = n2 + n4;
    let mut ox1 = n2 + n4;
    loop {
        ox1 -= 4;
        x[ox1] = x[ix + 3];
        x[ox1 + 1] = x[ix + 2];
        x[ox1 + 2] = x[ix + 1];
        x[ox1 + 3] = x[ix];
        ix += 4;
        if ox1 <= n2 {
            break;
        }
    }
}

/// 原地逆变换: 输入为 `x[..n/2]` 的频谱, 输出 `x[..n]` 的时域样本
///
/// `n` 必须是 [`MDCT_MIN`]..=[`MDCT_MAX`] 范围内的 2 的幂, 且 `x.len() >= n`.
pub fn mdct_backward(n: usize, x: &mut [i32]) {
    debug_assert!(n.is_power_of_two() && (MDCT_MIN..=MDCT_MAX).contains(&n));
    let n2 = n >> 1;
    let shift = 13 - n.trailing_zeros();
    let step = 2usize << shift;

    presymmetry(x, n, step);
    butterflies(&mut x[n2..n], n2, shift);
    bitreverse(x, n, step, shift);
    postrotate(x, n, step >> 2);
    mirror(x, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn reference(n: usize, spectrum: &[i32]) -> Vec<f64> {
        let n2 = n / 2;
        (0..n)
            .map(|m| {
                let c = PI / n2 as f64 * (m as f64 + 0.5 + n2 as f64 / 2.0);
                spectrum
                    .iter()
                    .enumerate()
                    .map(|(k, &v)| f64::from(v) * (c * (k as f64 + 0.5)).cos())
                    .sum()
            })
            .collect()
    }

    /// 简单线性同余序列, 保证测试可复现
    fn pseudo_random(n: usize, seed: u32) -> Vec<i32> {
        let mut s = seed;
        (0..n)
            .map(|_| {
                s = s.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                ((s >> 11) as i32) - (1 << 20)
            })
            .collect()
    }

    fn check_against_reference(n: usize) {
        let spectrum = pseudo_random(n / 2, n as u32);
        let mut x = vec![0i32; n];
        x[..n / 2].copy_from_slice(&spectrum);
        mdct_backward(n, &mut x);

        let expected = reference(n, &spectrum);
        let tolerance = 2.0 * n as f64;
        for (m, (&got, &want)) in x.iter().zip(expected.iter()).enumerate() {
            let err = (f64::from(got) - want).abs();
            assert!(err <= tolerance, "n={n} m={m}: {got} vs {want:.1}");
        }
    }

    #[test]
    fn test_短块与参考变换一致() {
        check_against_reference(64);
        check_against_reference(256);
    }

    #[test]
    fn test_长块与参考变换一致() {
        check_against_reference(2048);
    }

    #[test]
    fn test_插值路径与参考变换一致() {
        // 4096 与 8192 走两张三角表之间的插值
        check_against_reference(4096);
        check_against_reference(8192);
    }

    #[test]
    fn test_全零输入输出全零() {
        let mut x = vec![0i32; 512];
        mdct_backward(512, &mut x);
        assert!(x.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_输出对称性() {
        // 前后四分之一互为镜像取反
        let n = 256;
        let mut x = vec![0i32; n];
        x[..n / 2].copy_from_slice(&pseudo_random(n / 2, 7));
        mdct_backward(n, &mut x);
        for i in 0..n / 4 {
            assert_eq!(x[n / 4 + i], -x[n / 4 - 1 - i]);
            assert_eq!(x[3 * n / 4 + i], x[3 * n / 4 - 1 - i]);
        }
    }
}
