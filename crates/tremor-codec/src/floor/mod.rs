//! 谱包络 (floor).
//!
//! 码流只定义了两种 floor, 以封闭枚举分派.

mod floor0;
mod floor1;

pub use floor0::{Floor0Info, Floor0Look};
pub use floor1::{Floor1Class, Floor1Info};

use tremor_core::bitreader::BitReader;
use tremor_core::{VorbisError, VorbisResult};

use crate::block::{Arena, Span};
use crate::codebook::Codebook;

/// setup 头中的 floor 描述
#[derive(Debug, Clone)]
pub enum FloorInfo {
    /// LSP 模型
    Floor0(Floor0Info),
    /// 分段线性模型
    Floor1(Floor1Info),
}

impl FloorInfo {
    /// 读取 16 位类型号并解析对应参数
    pub(crate) fn unpack(br: &mut BitReader<'_>, books: &[Codebook]) -> VorbisResult<Self> {
        let kind = br
            .read(16)
            .ok_or_else(|| VorbisError::BadHeader("floor: 数据截断".into()))?;
        match kind {
            0 => Ok(Self::Floor0(Floor0Info::unpack(br, books)?)),
            1 => Ok(Self::Floor1(Floor1Info::unpack(br, books)?)),
            other => Err(VorbisError::BadHeader(format!("不支持的 floor 类型: {other}"))),
        }
    }

    /// 类型号
    pub fn kind(&self) -> u32 {
        match self {
            Self::Floor0(_) => 0,
            Self::Floor1(_) => 1,
        }
    }

    /// 按流的两种块长预计算查找结构
    pub(crate) fn look(&self, blocksizes: [usize; 2]) -> FloorLook {
        match self {
            Self::Floor0(info) => FloorLook::Floor0(Floor0Look::new(info, blocksizes)),
            Self::Floor1(info) => FloorLook::Floor1(info.clone()),
        }
    }
}

/// 解码期使用的 floor 查找结构
#[derive(Debug, Clone)]
pub(crate) enum FloorLook {
    Floor0(Floor0Look),
    Floor1(Floor1Info),
}

impl FloorLook {
    /// 第一阶段: 从包中读取包络参数, `None` 表示本声道静音
    pub(crate) fn inverse1(
        &self,
        books: &[Codebook],
        br: &mut BitReader<'_>,
        arena: &mut Arena,
    ) -> VorbisResult<Option<Span>> {
        match self {
            Self::Floor0(look) => look.inverse1(books, br, arena),
            Self::Floor1(info) => info.inverse1(books, br, arena),
        }
    }

    /// 第二阶段: 渲染包络并乘入 `out` (长度为 blocksize/2)
    pub(crate) fn inverse2(&self, w: usize, memo: Option<&[i32]>, out: &mut [i32]) {
        match self {
            Self::Floor0(look) => look.inverse2(w, memo, out),
            Self::Floor1(info) => info.inverse2(memo, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::bitwriter::BitWriter;

    #[test]
    fn test_未知floor类型() {
        let mut bw = BitWriter::new();
        bw.write_bits(2, 16);
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let err = FloorInfo::unpack(&mut br, &[]).unwrap_err();
        assert!(matches!(err, VorbisError::BadHeader(_)));
    }

    #[test]
    fn test_floor1分派() {
        let mut bw = BitWriter::new();
        bw.write_bits(1, 16);
        bw.write_bits(0, 5); // 无分区
        bw.write_bits(1, 2); // mult = 2
        bw.write_bits(8, 4); // rangebits = 8
        let data = bw.finish();
        let mut br = BitReader::new(&data);
        let info = FloorInfo::unpack(&mut br, &[]).unwrap();
        assert_eq!(info.kind(), 1);
        let FloorInfo::Floor1(f1) = &info else {
            panic!("应为 floor1");
        };
        assert_eq!(f1.mult, 2);
        assert_eq!(f1.postlist, vec![0, 256]);
        assert!(matches!(info.look([256, 2048]), FloorLook::Floor1(_)));
    }
}
