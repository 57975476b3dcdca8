//! 定点算术.
//!
//! 解码链路全程使用 32 位定点数. 乘法取 64 位中间结果后右移截断,
//! 从不做四舍五入: 截断行为本身是码流兼容性的一部分.
//!
//! 量化码本中的最小值/步长以 "尾数 + 指数" 对 ([`VFloat`]) 表示,
//! 其加法/乘法在整数域内完成.

/// `(x * y) >> 32`
#[inline(always)]
pub fn mult32(x: i32, y: i32) -> i32 {
    ((i64::from(x) * i64::from(y)) >> 32) as i32
}

/// `mult32(x, y) << 1`, Q31 乘法 (最低位恒为 0)
#[inline(always)]
pub fn mult31(x: i32, y: i32) -> i32 {
    mult32(x, y).wrapping_shl(1)
}

/// `(x * y) >> 15`, 截断到 32 位
#[inline(always)]
pub fn mult31_shift15(x: i32, y: i32) -> i32 {
    ((i64::from(x) * i64::from(y)) >> 15) as i32
}

/// 复数旋转 (Q32): 返回 `(a*t + b*v, b*t - a*v)`
#[inline(always)]
pub fn xprod32(a: i32, b: i32, t: i32, v: i32) -> (i32, i32) {
    (
        mult32(a, t).wrapping_add(mult32(b, v)),
        mult32(b, t).wrapping_sub(mult32(a, v)),
    )
}

/// 复数旋转 (Q31): 返回 `(a*t + b*v, b*t - a*v)`
#[inline(always)]
pub fn xprod31(a: i32, b: i32, t: i32, v: i32) -> (i32, i32) {
    (
        mult31(a, t).wrapping_add(mult31(b, v)),
        mult31(b, t).wrapping_sub(mult31(a, v)),
    )
}

/// 反向复数旋转 (Q31): 返回 `(a*t - b*v, b*t + a*v)`
#[inline(always)]
pub fn xnprod31(a: i32, b: i32, t: i32, v: i32) -> (i32, i32) {
    (
        mult31(a, t).wrapping_sub(mult31(b, v)),
        mult31(b, t).wrapping_add(mult31(a, v)),
    )
}

/// 饱和到 16 位有符号范围
#[inline(always)]
pub fn clip_to_15(x: i32) -> i32 {
    x.clamp(-32768, 32767)
}

/// 尾数/指数对表示的数值: `mantissa * 2^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VFloat {
    /// 有符号尾数
    pub mantissa: i32,
    /// 二进制指数
    pub exponent: i32,
}

/// 码本浮点格式: 21 位尾数
const VQ_FMAN: u32 = 21;
/// 码本浮点格式: 指数偏置
const VQ_FEXP_BIAS: i32 = 768;

impl VFloat {
    /// 零值 (指数无意义)
    pub const ZERO: Self = Self {
        mantissa: 0,
        exponent: 0,
    };

    /// 构造
    pub const fn new(mantissa: i32, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// 解包码本头中的 32 位压缩浮点数
    ///
    /// 布局: bit31 符号, bit21..30 指数 (偏置 768), bit0..20 尾数.
    /// 结果尾数被规格化到 bit30.
    pub fn unpack(packed: u32) -> Self {
        let mut mant = (packed & 0x1f_ffff) as i32;
        let negative = packed & 0x8000_0000 != 0;
        let mut exp = ((packed & 0x7fe0_0000) >> VQ_FMAN) as i32;
        exp -= (VQ_FMAN as i32 - 1) + VQ_FEXP_BIAS;

        if mant == 0 {
            return Self::new(0, -9999);
        }
        while mant & 0x4000_0000 == 0 {
            mant <<= 1;
            exp -= 1;
        }
        if negative {
            mant = -mant;
        }
        Self::new(mant, exp)
    }

    /// 打包为码本头中的 32 位压缩浮点格式 (用于构造码流)
    ///
    /// 尾数超过 21 位时截断低位.
    pub fn pack(self) -> u32 {
        if self.mantissa == 0 {
            return 0;
        }
        let negative = self.mantissa < 0;
        let mut mant = self.mantissa.unsigned_abs();
        let mut exp = self.exponent;
        while mant > 0x1f_ffff {
            mant >>= 1;
            exp += 1;
        }
        let biased = (exp + VQ_FEXP_BIAS + VQ_FMAN as i32 - 1).clamp(0, 0x3ff) as u32;
        (u32::from(negative) << 31) | (biased << VQ_FMAN) | mant
    }

    /// 是否为零
    pub fn is_zero(self) -> bool {
        self.mantissa == 0
    }

    /// 乘法: 指数相加, 尾数取 `mult32`
    pub fn mul(self, other: Self) -> Self {
        if self.mantissa == 0 || other.mantissa == 0 {
            return Self::ZERO;
        }
        Self::new(
            mult32(self.mantissa, other.mantissa),
            self.exponent + other.exponent + 32,
        )
    }

    /// 与非负整数相乘; 整数先规格化到 bit30
    pub fn mul_int(self, i: i32) -> Self {
        if i == 0 {
            return Self::ZERO;
        }
        let ip = ilog(i.unsigned_abs()) as i32 - 31;
        self.mul(Self::new(i << -ip, ip))
    }

    /// 加法: 对齐到较大指数后相加, 再做一次规格化
    pub fn add(self, other: Self) -> Self {
        if self.mantissa == 0 {
            return other;
        }
        if other.mantissa == 0 {
            return self;
        }

        let (mut a, mut b) = (self.mantissa, other.mantissa);
        let mut p;
        if self.exponent > other.exponent {
            let shift = self.exponent - other.exponent + 1;
            p = self.exponent + 1;
            a >>= 1;
            b = if shift < 32 {
                ((i64::from(b) + (1i64 << (shift - 1))) >> shift) as i32
            } else {
                0
            };
        } else {
            let shift = other.exponent - self.exponent + 1;
            p = other.exponent + 1;
            b >>= 1;
            a = if shift < 32 {
                ((i64::from(a) + (1i64 << (shift - 1))) >> shift) as i32
            } else {
                0
            };
        }

        a = a.wrapping_add(b);
        let top = a as u32 & 0xc000_0000;
        if top == 0xc000_0000 || top == 0 {
            a = a.wrapping_shl(1);
            p -= 1;
        }
        Self::new(a, p)
    }
}

fn ilog(v: u32) -> u32 {
    32 - v.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_mult31_shift15(x: i32, y: i32) -> i32 {
        let wide = (x as i64) * (y as i64);
        (wide >> 15) as i32
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10_000))]

        #[test]
        fn test_mult31_shift15_截断一致(x in any::<i32>(), y in any::<i32>()) {
            prop_assert_eq!(mult31_shift15(x, y), reference_mult31_shift15(x, y));
        }

        #[test]
        fn test_mult31_为mult32左移(x in any::<i32>(), y in any::<i32>()) {
            let m32 = (((x as i64) * (y as i64)) >> 32) as i32;
            prop_assert_eq!(mult32(x, y), m32);
            prop_assert_eq!(mult31(x, y), m32.wrapping_shl(1));
            prop_assert_eq!(mult31(x, y) & 1, 0);
        }
    }

    #[test]
    fn test_负数截断向下取整() {
        // -1 * 1 >> 15 向负无穷取整为 -1, 而非 0
        assert_eq!(mult31_shift15(-1, 1), -1);
        assert_eq!(mult32(-1, 1), -1);
        // 2^62 >> 32 << 1 回绕为 i32::MIN
        assert_eq!(mult31(i32::MIN, i32::MIN), i32::MIN);
    }

    #[test]
    fn test_xprod_旋转() {
        let one = 0x7fff_ffff;
        // t=0, v≈1
        let (re, im) = xprod31(1 << 20, 3 << 20, 0, one);
        assert_eq!(re, mult31(3 << 20, one));
        assert_eq!(im, -mult31(1 << 20, one));
        let (re, im) = xnprod31(1 << 20, 3 << 20, one, 0);
        assert_eq!(re, mult31(1 << 20, one));
        assert_eq!(im, mult31(3 << 20, one));
    }

    #[test]
    fn test_clip_to_15() {
        assert_eq!(clip_to_15(40000), 32767);
        assert_eq!(clip_to_15(-40000), -32768);
        assert_eq!(clip_to_15(123), 123);
    }

    #[test]
    fn test_vfloat_解包() {
        // 1.0 = 尾数 1, 指数 788 (偏置后)
        let one = VFloat::unpack((788 << 21) | 1);
        assert_eq!(one, VFloat::new(0x4000_0000, -30));
        let neg = VFloat::unpack(0x8000_0000 | (788 << 21) | 3);
        assert_eq!(neg, VFloat::new(-0x6000_0000, -29));
        assert!(VFloat::unpack(0).is_zero());
    }

    #[test]
    fn test_vfloat_打包往返() {
        let v = VFloat::new(5, 0);
        assert_eq!(VFloat::unpack(v.pack()), VFloat::new(0x5000_0000, -28));
    }

    #[test]
    fn test_vfloat_运算() {
        let one = VFloat::new(0x4000_0000, -30);
        let three = one.mul_int(3);
        // 3.0 = 0x6000_0000 * 2^-29, mult32 会损失最低位
        let value = f64::from(three.mantissa) * 2f64.powi(three.exponent);
        assert!((value - 3.0).abs() < 1e-6, "value={value}");

        let sum = one.add(three);
        let value = f64::from(sum.mantissa) * 2f64.powi(sum.exponent);
        assert!((value - 4.0).abs() < 1e-6, "value={value}");

        assert_eq!(one.add(VFloat::ZERO), one);
        assert_eq!(VFloat::ZERO.add(three), three);
        assert!(one.mul_int(0).is_zero());
    }
}
