//! Floor0 (LSP) 曲线求值使用的整数查找表.

pub(crate) const COS_LOOKUP_I_SHIFT: u32 = 9;
pub(crate) const COS_LOOKUP_I_MASK: i32 = 511;
pub(crate) const COS_LOOKUP_I_SZ: i32 = 128;

/// `16384 · cos(πi/128)`
pub(crate) static COS_LOOKUP_I: [i32; 129] = [
    16384, 16379, 16364, 16340, 16305, 16261, 16207, 16143,
    16069, 15986, 15893, 15791, 15679, 15557, 15426, 15286,
    15137, 14978, 14811, 14635, 14449, 14256, 14053, 13842,
    13623, 13395, 13160, 12916, 12665, 12406, 12140, 11866,
    11585, 11297, 11003, 10702, 10394, 10080, 9760, 9434,
    9102, 8765, 8423, 8076, 7723, 7366, 7005, 6639,
    6270, 5897, 5520, 5139, 4756, 4370, 3981, 3590,
    3196, 2801, 2404, 2006, 1606, 1205, 804, 402,
    0, -402, -804, -1205, -1606, -2006, -2404, -2801,
    -3196, -3590, -3981, -4370, -4756, -5139, -5520, -5897,
    -6270, -6639, -7005, -7366, -7723, -8076, -8423, -8765,
    -9102, -9434, -9760, -10080, -10394, -10702, -11003, -11297,
    -11585, -11866, -12140, -12406, -12665, -12916, -13160, -13395,
    -13623, -13842, -14053, -14256, -14449, -14635, -14811, -14978,
    -15137, -15286, -15426, -15557, -15679, -15791, -15893, -15986,
    -16069, -16143, -16207, -16261, -16305, -16340, -16364, -16379,
    -16384,
];

pub(crate) const INVSQ_LOOKUP_I_SHIFT: u32 = 9;
pub(crate) const INVSQ_LOOKUP_I_MASK: i32 = 511;

/// `65536 / sqrt(0.5 + i/128)`
pub(crate) static INVSQ_LOOKUP_I: [i32; 65] = [
    92681, 91966, 91266, 90583, 89914, 89260, 88620, 87994,
    87381, 86780, 86192, 85615, 85050, 84496, 83953, 83420,
    82897, 82383, 81880, 81385, 80899, 80422, 79953, 79492,
    79039, 78594, 78156, 77725, 77302, 76885, 76475, 76071,
    75674, 75283, 74898, 74519, 74145, 73777, 73415, 73057,
    72705, 72358, 72016, 71679, 71346, 71018, 70694, 70375,
    70060, 69750, 69443, 69141, 68842, 68547, 68256, 67969,
    67685, 67405, 67128, 66854, 66584, 66317, 66054, 65793,
    65536,
];

/// 奇偶指数的 sqrt(2) 校正 (Q13)
pub(crate) static ADJUST_SQRT2: [i32; 2] = [8192, 5792];

pub(crate) const FROMDB_SHIFT: u32 = 5;
pub(crate) const FROMDB2_SHIFT: u32 = 3;
pub(crate) const FROMDB2_MASK: i32 = 31;

/// 粗粒度 4dB 步长, Q22
pub(crate) static FROMDB_LOOKUP: [i32; 35] = [
    0x003fffff, 0x0028619b, 0x00197a96, 0x0010137a,
    0x000a24b0, 0x00066666, 0x000409c3, 0x00028c42,
    0x00019b8c, 0x000103ab, 0x0000a3d7, 0x00006760,
    0x0000413a, 0x00002928, 0x000019f8, 0x00001062,
    0x00000a56, 0x00000686, 0x0000041e, 0x00000299,
    0x000001a3, 0x00000109, 0x000000a7, 0x00000069,
    0x00000042, 0x0000002a, 0x0000001a, 0x00000011,
    0x0000000b, 0x00000007, 0x00000004, 0x00000003,
    0x00000002, 0x00000001, 0x00000001,
];

/// 细粒度 0.125dB 步长, Q9
pub(crate) static FROMDB2_LOOKUP: [i32; 32] = [
    0x000001fc, 0x000001f5, 0x000001ee, 0x000001e7,
    0x000001e0, 0x000001d9, 0x000001d2, 0x000001cc,
    0x000001c5, 0x000001bf, 0x000001b8, 0x000001b2,
    0x000001ac, 0x000001a6, 0x000001a0, 0x0000019a,
    0x00000194, 0x0000018e, 0x00000188, 0x00000183,
    0x0000017d, 0x00000178, 0x00000172, 0x0000016d,
    0x00000168, 0x00000163, 0x0000015e, 0x00000159,
    0x00000154, 0x0000014f, 0x0000014a, 0x00000145,
];

/// 半 bark 刻度对应的频率 (Hz)
pub(crate) static BARK_LOOKUP: [i32; 54] = [
    0, 51, 102, 154, 206, 258, 311, 365,
    420, 477, 535, 594, 656, 719, 785, 854,
    926, 1002, 1082, 1166, 1256, 1352, 1454, 1564,
    1683, 1812, 1953, 2107, 2276, 2463, 2670, 2900,
    3155, 3440, 3756, 4106, 4493, 4919, 5387, 5901,
    6466, 7094, 7798, 8599, 9528, 10622, 11924, 13483,
    15355, 17600, 20287, 23492, 27299, 31799,
];

/// 归一化移位量: 高 7 位
pub(crate) static MLOOP_1: [u8; 64] = [
    0, 10, 11, 11, 12, 12, 12, 12, 13, 13, 13, 13, 13, 13, 13, 13,
    14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
];

/// 归一化移位量: 次 6 位
pub(crate) static MLOOP_2: [u8; 64] = [
    0, 4, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 7, 7, 7, 7,
    8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
    9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
];

/// 归一化移位量: 低 3 位
pub(crate) static MLOOP_3: [u8; 8] = [0, 1, 2, 2, 3, 3, 3, 3];
