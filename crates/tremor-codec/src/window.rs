//! 窗函数与加窗.

use tremor_core::fixed::mult31;
use tremor_core::{VorbisError, VorbisResult};

use crate::tables::window_lookup::{
    VWIN64, VWIN128, VWIN256, VWIN512, VWIN1024, VWIN2048, VWIN4096, VWIN8192,
};

/// 按块长取半窗 (上升沿, blocksize/2 项)
pub fn window_for(blocksize: usize) -> VorbisResult<&'static [i32]> {
    Ok(match blocksize {
        64 => &VWIN64,
        128 => &VWIN128,
        256 => &VWIN256,
        512 => &VWIN512,
        1024 => &VWIN1024,
        2048 => &VWIN2048,
        4096 => &VWIN4096,
        8192 => &VWIN8192,
        other => {
            return Err(VorbisError::BadHeader(format!("不支持的块长: {other}")));
        }
    })
}

/// 对一个逆变换输出块加窗
///
/// 左侧按与上一块的重叠长度上升, 右侧按与下一块的重叠长度下降,
/// 重叠区之外的部分置零.
pub fn apply_window(
    d: &mut [i32],
    windows: [&[i32]; 2],
    blocksizes: [usize; 2],
    lw: usize,
    w: usize,
    nw: usize,
) {
    let n = blocksizes[w];
    let ln = blocksizes[lw];
    let rn = blocksizes[nw];

    let leftbegin = n / 4 - ln / 4;
    let leftend = leftbegin + ln / 2;
    let rightbegin = n / 2 + n / 4 - rn / 4;
    let rightend = rightbegin + rn / 2;

    d[..leftbegin].fill(0);
    for (v, &wv) in d[leftbegin..leftend].iter_mut().zip(windows[lw]) {
        *v = mult31(*v, wv);
    }
    for (v, &wv) in d[rightbegin..rightend]
        .iter_mut()
        .zip(windows[nw][..rn / 2].iter().rev())
    {
        *v = mult31(*v, wv);
    }
    d[rightend..n].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_窗表长度() {
        for bs in [64usize, 128, 256, 512, 1024, 2048, 4096, 8192] {
            assert_eq!(window_for(bs).unwrap().len(), bs / 2);
        }
        assert!(window_for(32).is_err());
        assert!(window_for(3000).is_err());
    }

    #[test]
    fn test_窗单调上升() {
        let w = window_for(256).unwrap();
        assert!(w.windows(2).all(|p| p[0] < p[1]));
        assert!(w[0] > 0);
    }

    #[test]
    fn test_功率互补() {
        // w(i)^2 + w(n/2-1-i)^2 ≈ 1 (Q31)
        let w = window_for(512).unwrap();
        let half = w.len();
        for i in 0..half {
            let a = f64::from(w[i]) / f64::from(i32::MAX);
            let b = f64::from(w[half - 1 - i]) / f64::from(i32::MAX);
            assert!((a * a + b * b - 1.0).abs() < 1e-6, "i={i}");
        }
    }

    #[test]
    fn test_短长过渡加窗范围() {
        let blocksizes = [256, 2048];
        let windows = [window_for(256).unwrap(), window_for(2048).unwrap()];
        let one = i32::MAX;
        let mut d = vec![one; 2048];
        // 长块, 前一块为短块, 后一块为长块
        apply_window(&mut d, windows, blocksizes, 0, 1, 1);
        let leftbegin = 2048 / 4 - 256 / 4;
        assert!(d[..leftbegin].iter().all(|&v| v == 0));
        assert_eq!(d[leftbegin], mult31(one, windows[0][0]));
        assert_eq!(d[leftbegin + 127], mult31(one, windows[0][127]));
        // 左侧上升沿与右侧下降沿之间不加窗
        assert_eq!(d[leftbegin + 128], one);
        assert_eq!(d[1023], one);
        assert_eq!(d[1024], mult31(one, windows[1][1023]));
        assert_eq!(d[2047], mult31(one, windows[1][0]));
    }
}
