//! 流参数与三个头包的解析.
//!
//! 一条逻辑流必须依次提供 identification、comment、setup 三个头包.
//! setup 头中的码本、floor、residue、mapping 与 mode 解析后不再修改,
//! 由所有音频包只读共享.

use log::debug;
use tremor_core::bitreader::BitReader;
use tremor_core::{VorbisError, VorbisResult};

use crate::codebook::{Codebook, StaticCodebook};
use crate::comment::Comment;
use crate::floor::{FloorInfo, FloorLook};
use crate::mapping::MappingInfo;
use crate::mdct::MDCT_MAX;
use crate::packet::Packet;
use crate::residue::{ResidueInfo, ResidueLook};

/// 头包类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// 0x01
    Identification,
    /// 0x03
    Comment,
    /// 0x05
    Setup,
}

impl HeaderKind {
    fn from_code(code: u32) -> Option<Self> {
        match code {
            0x01 => Some(Self::Identification),
            0x03 => Some(Self::Comment),
            0x05 => Some(Self::Setup),
            _ => None,
        }
    }
}

/// 一种块模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    /// true 为长块
    pub blockflag: bool,
    /// 使用的 mapping
    pub mapping: usize,
}

/// setup 头解析结果
#[derive(Debug, Clone)]
pub struct CodecSetup {
    /// 码本
    pub books: Vec<Codebook>,
    /// floor 描述
    pub floors: Vec<FloorInfo>,
    /// residue 描述
    pub residues: Vec<ResidueInfo>,
    /// mapping 描述
    pub mappings: Vec<MappingInfo>,
    /// 块模式
    pub modes: Vec<Mode>,
    pub(crate) floor_looks: Vec<FloorLook>,
    pub(crate) residue_looks: Vec<ResidueLook>,
}

/// 流参数 (identification 头) 与 setup 结果
#[derive(Debug, Clone, Default)]
pub struct Info {
    /// 版本号, 只接受 0
    pub version: u32,
    /// 声道数
    pub channels: usize,
    /// 采样率, 0 表示尚未读到 identification 头
    pub rate: u32,
    /// 码率上限 (bps, 0 或负数表示未设置)
    pub bitrate_upper: i32,
    /// 标称码率
    pub bitrate_nominal: i32,
    /// 码率下限
    pub bitrate_lower: i32,
    /// 短块与长块长度
    pub blocksizes: [usize; 2],
    /// setup 头解析结果, 读到 setup 头之前为 None
    pub setup: Option<CodecSetup>,
    pub(crate) comment_seen: bool,
}

impl Info {
    /// 空的流参数, 等待头包
    pub fn new() -> Self {
        Self::default()
    }

    /// 三个头包是否均已读取
    pub fn is_ready(&self) -> bool {
        self.setup.is_some()
    }

    /// 是否为可变码率
    pub fn is_vbr(&self) -> bool {
        self.bitrate_lower != self.bitrate_nominal || self.bitrate_upper != self.bitrate_nominal
    }

    /// mode 数
    pub fn modes(&self) -> usize {
        self.setup.as_ref().map_or(0, |s| s.modes.len())
    }

    /// 读取一个头包
    ///
    /// 头包顺序: identification 必须是流的第一个包且只出现一次;
    /// comment 需要在 identification 之后; setup 需要前两者都已读取.
    /// 任何错误对整条流都是致命的.
    pub fn headerin(&mut self, comment: &mut Comment, packet: &Packet) -> VorbisResult<HeaderKind> {
        let mut br = BitReader::new(&packet.data);

        let code = br
            .read(8)
            .ok_or_else(|| VorbisError::NotVorbis("空的头包".into()))?;
        let mut magic = [0u8; 6];
        for b in magic.iter_mut() {
            *b = br.read(8).unwrap_or(0) as u8;
        }
        if &magic != b"vorbis" {
            return Err(VorbisError::NotVorbis("缺少 \"vorbis\" 标识".into()));
        }

        let kind = HeaderKind::from_code(code)
            .ok_or_else(|| VorbisError::BadHeader(format!("未知的头包类型 0x{code:02x}")))?;
        match kind {
            HeaderKind::Identification => {
                if !packet.b_o_s {
                    return Err(VorbisError::BadHeader(
                        "identification 头不是流的第一个包".into(),
                    ));
                }
                if self.rate != 0 {
                    return Err(VorbisError::BadHeader("重复的 identification 头".into()));
                }
                self.unpack_info(&mut br)?;
            }
            HeaderKind::Comment => {
                if self.rate == 0 {
                    return Err(VorbisError::BadHeader(
                        "comment 头之前缺少 identification 头".into(),
                    ));
                }
                *comment = Comment::unpack(&mut br)?;
                self.comment_seen = true;
                debug!(
                    "Vorbis comment: vendor=\"{}\", {} 条注释",
                    comment.vendor,
                    comment.user_comments.len()
                );
            }
            HeaderKind::Setup => {
                if self.rate == 0 || !self.comment_seen {
                    return Err(VorbisError::BadHeader(
                        "setup 头之前缺少 identification 或 comment 头".into(),
                    ));
                }
                if self.setup.is_some() {
                    return Err(VorbisError::BadHeader("重复的 setup 头".into()));
                }
                self.setup = Some(self.unpack_books(&mut br)?);
            }
        }
        Ok(kind)
    }

    fn unpack_info(&mut self, br: &mut BitReader<'_>) -> VorbisResult<()> {
        let eof = || VorbisError::BadHeader("identification 头: 数据截断".into());

        let version = br.read(32).ok_or_else(eof)?;
        if version != 0 {
            return Err(VorbisError::Version(version));
        }
        let channels = br.read_usize(8).ok_or_else(eof)?;
        let rate = br.read(32).ok_or_else(eof)?;
        let bitrate_upper = br.read(32).ok_or_else(eof)? as i32;
        let bitrate_nominal = br.read(32).ok_or_else(eof)? as i32;
        let bitrate_lower = br.read(32).ok_or_else(eof)? as i32;
        let bs0 = 1usize << br.read(4).ok_or_else(eof)?;
        let bs1 = 1usize << br.read(4).ok_or_else(eof)?;

        if rate < 1 || channels < 1 {
            return Err(VorbisError::BadHeader(format!(
                "identification 头: 采样率 {rate} 或声道数 {channels} 非法"
            )));
        }
        if bs0 < 64 || bs1 < bs0 || bs1 > MDCT_MAX {
            return Err(VorbisError::BadHeader(format!(
                "identification 头: 块长非法 {bs0}/{bs1}"
            )));
        }
        if br.read_flag() != Some(true) {
            return Err(VorbisError::BadHeader(
                "identification 头: 结束标志位缺失".into(),
            ));
        }

        self.version = version;
        self.channels = channels;
        self.rate = rate;
        self.bitrate_upper = bitrate_upper;
        self.bitrate_nominal = bitrate_nominal;
        self.bitrate_lower = bitrate_lower;
        self.blocksizes = [bs0, bs1];
        debug!(
            "Vorbis identification: {channels} 声道, {rate} Hz, 块长 {bs0}/{bs1}, 码率 {}/{}/{}",
            bitrate_lower, bitrate_nominal, bitrate_upper
        );
        Ok(())
    }

    fn unpack_books(&self, br: &mut BitReader<'_>) -> VorbisResult<CodecSetup> {
        let eof = || VorbisError::BadHeader("setup 头: 数据截断".into());
        let bad = |msg: String| VorbisError::BadHeader(format!("setup 头: {msg}"));

        let count = br.read_usize(8).ok_or_else(eof)? + 1;
        let mut books = Vec::with_capacity(count);
        for _ in 0..count {
            let book = StaticCodebook::unpack(br)?;
            books.push(Codebook::new(&book)?);
        }

        // time 变换只有占位类型 0
        let times = br.read_usize(6).ok_or_else(eof)? + 1;
        for _ in 0..times {
            let kind = br.read(16).ok_or_else(eof)?;
            if kind != 0 {
                return Err(bad(format!("time 类型 {kind} 非法")));
            }
        }

        let count = br.read_usize(6).ok_or_else(eof)? + 1;
        let mut floors = Vec::with_capacity(count);
        for _ in 0..count {
            floors.push(FloorInfo::unpack(br, &books)?);
        }

        let count = br.read_usize(6).ok_or_else(eof)? + 1;
        let mut residues = Vec::with_capacity(count);
        for _ in 0..count {
            residues.push(ResidueInfo::unpack(br, &books)?);
        }

        let count = br.read_usize(6).ok_or_else(eof)? + 1;
        let mut mappings = Vec::with_capacity(count);
        for _ in 0..count {
            mappings.push(MappingInfo::unpack(
                br,
                self.channels,
                floors.len(),
                residues.len(),
            )?);
        }

        let count = br.read_usize(6).ok_or_else(eof)? + 1;
        let mut modes = Vec::with_capacity(count);
        for i in 0..count {
            let blockflag = br.read_flag().ok_or_else(eof)?;
            let windowtype = br.read(16).ok_or_else(eof)?;
            let transformtype = br.read(16).ok_or_else(eof)?;
            let mapping = br.read_usize(8).ok_or_else(eof)?;
            if windowtype != 0 || transformtype != 0 {
                return Err(bad(format!(
                    "mode {i}: 窗类型 {windowtype} / 变换类型 {transformtype} 非法"
                )));
            }
            if mapping >= mappings.len() {
                return Err(bad(format!("mode {i}: mapping 索引越界 {mapping}")));
            }
            modes.push(Mode { blockflag, mapping });
        }

        if br.read_flag() != Some(true) {
            return Err(bad("结束标志位缺失".into()));
        }

        let floor_looks = floors.iter().map(|f| f.look(self.blocksizes)).collect();
        let residue_looks = residues.iter().map(|r| r.look(&books)).collect();
        debug!(
            "Vorbis setup: {} 码本, {} floor, {} residue, {} mapping, {} mode",
            books.len(),
            floors.len(),
            residues.len(),
            mappings.len(),
            modes.len()
        );

        Ok(CodecSetup {
            books,
            floors,
            residues,
            mappings,
            modes,
            floor_looks,
            residue_looks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::bitwriter::BitWriter;

    fn header(code: u8) -> BitWriter {
        let mut bw = BitWriter::new();
        bw.write_bits(u32::from(code), 8);
        bw.write_bytes(b"vorbis");
        bw
    }

    fn ident(channels: u32, rate: u32, bs: (u32, u32)) -> Packet {
        let mut bw = header(0x01);
        bw.write_bits(0, 32);
        bw.write_bits(channels, 8);
        bw.write_bits(rate, 32);
        bw.write_bits(0, 32);
        bw.write_bits(128_000, 32);
        bw.write_bits(0, 32);
        bw.write_bits(bs.0, 4);
        bw.write_bits(bs.1, 4);
        bw.write_flag(true);
        Packet::new(bw.finish(), 0)
    }

    fn comment() -> Packet {
        let mut bw = header(0x03);
        bw.write_bits(4, 32);
        bw.write_bytes(b"test");
        bw.write_bits(0, 32);
        bw.write_flag(true);
        Packet::new(bw.finish(), 1)
    }

    /// 最小 setup: 1 个 2 条目码本, floor1 无分区, residue 0 无级, 单声道 mapping
    fn setup(modes: &[(bool, u32)]) -> Packet {
        let mut bw = header(0x05);
        bw.write_bits(0, 8);
        bw.write_bits(0x56_4342, 24);
        bw.write_bits(1, 16);
        bw.write_bits(2, 24);
        bw.write_flag(false);
        bw.write_flag(false);
        bw.write_bits(0, 5);
        bw.write_bits(0, 5);
        bw.write_bits(0, 4);

        bw.write_bits(0, 6);
        bw.write_bits(0, 16);

        bw.write_bits(0, 6);
        bw.write_bits(1, 16);
        bw.write_bits(0, 5);
        bw.write_bits(1, 2);
        bw.write_bits(8, 4);

        bw.write_bits(0, 6);
        bw.write_bits(0, 16);
        bw.write_bits(0, 24);
        bw.write_bits(128, 24);
        bw.write_bits(31, 24);
        bw.write_bits(0, 6);
        bw.write_bits(0, 8);
        bw.write_bits(0, 3);
        bw.write_flag(false);

        bw.write_bits(0, 6);
        bw.write_bits(0, 16);
        bw.write_flag(false);
        bw.write_flag(false);
        bw.write_bits(0, 2);
        bw.write_bits(0, 8);
        bw.write_bits(0, 8);
        bw.write_bits(0, 8);

        bw.write_bits(modes.len() as u32 - 1, 6);
        for &(flag, mapping) in modes {
            bw.write_flag(flag);
            bw.write_bits(0, 16);
            bw.write_bits(0, 16);
            bw.write_bits(mapping, 8);
        }
        bw.write_flag(true);
        Packet::new(bw.finish(), 2)
    }

    #[test]
    fn test_三个头包依次解析() {
        let mut info = Info::new();
        let mut vc = Comment::default();
        assert_eq!(
            info.headerin(&mut vc, &ident(2, 44100, (8, 11))).unwrap(),
            HeaderKind::Identification
        );
        assert_eq!(info.channels, 2);
        assert_eq!(info.rate, 44100);
        assert_eq!(info.blocksizes, [256, 2048]);
        assert!(info.is_vbr());
        assert!(!info.is_ready());

        assert_eq!(
            info.headerin(&mut vc, &comment()).unwrap(),
            HeaderKind::Comment
        );
        assert_eq!(vc.vendor, "test");

        assert_eq!(
            info.headerin(&mut vc, &setup(&[(false, 0), (true, 0)])).unwrap(),
            HeaderKind::Setup
        );
        assert!(info.is_ready());
        assert_eq!(info.modes(), 2);
        let s = info.setup.as_ref().unwrap();
        assert_eq!(s.books.len(), 1);
        assert_eq!(s.floors[0].kind(), 1);
        assert_eq!(
            s.modes[1],
            Mode {
                blockflag: true,
                mapping: 0
            }
        );
    }

    #[test]
    fn test_头包顺序错误() {
        let mut info = Info::new();
        let mut vc = Comment::default();
        assert!(matches!(
            info.headerin(&mut vc, &comment()),
            Err(VorbisError::BadHeader(_))
        ));

        // identification 必须带 b_o_s
        let mut p = ident(1, 8000, (8, 8));
        p.b_o_s = false;
        assert!(matches!(
            info.headerin(&mut vc, &p),
            Err(VorbisError::BadHeader(_))
        ));

        info.headerin(&mut vc, &ident(1, 8000, (8, 8))).unwrap();
        assert!(matches!(
            info.headerin(&mut vc, &setup(&[(false, 0)])),
            Err(VorbisError::BadHeader(_))
        ));
        assert!(matches!(
            info.headerin(&mut vc, &ident(1, 8000, (8, 8))),
            Err(VorbisError::BadHeader(_))
        ));
    }

    #[test]
    fn test_魔数与版本() {
        let mut info = Info::new();
        let mut vc = Comment::default();
        let p = Packet::new(b"\x01vorbiz_______".to_vec(), 0);
        assert!(matches!(
            info.headerin(&mut vc, &p),
            Err(VorbisError::NotVorbis(_))
        ));
        assert!(matches!(
            info.headerin(&mut vc, &Packet::new(vec![0x01, b'v'], 0)),
            Err(VorbisError::NotVorbis(_))
        ));

        let mut bw = header(0x01);
        bw.write_bits(1, 32);
        assert!(matches!(
            info.headerin(&mut vc, &Packet::new(bw.finish(), 0)),
            Err(VorbisError::Version(1))
        ));

        let bw = header(0x07);
        assert!(matches!(
            info.headerin(&mut vc, &Packet::new(bw.finish(), 0)),
            Err(VorbisError::BadHeader(_))
        ));
    }

    #[test]
    fn test_块长限制() {
        for bs in [(5, 8), (9, 8), (8, 14)] {
            let mut info = Info::new();
            let mut vc = Comment::default();
            assert!(
                matches!(
                    info.headerin(&mut vc, &ident(1, 8000, bs)),
                    Err(VorbisError::BadHeader(_))
                ),
                "{bs:?}"
            );
        }
        let mut info = Info::new();
        assert!(info
            .headerin(&mut Comment::default(), &ident(0, 8000, (8, 8)))
            .is_err());
    }

    #[test]
    fn test_mode_引用越界() {
        let mut info = Info::new();
        let mut vc = Comment::default();
        info.headerin(&mut vc, &ident(1, 8000, (8, 11))).unwrap();
        info.headerin(&mut vc, &comment()).unwrap();
        assert!(matches!(
            info.headerin(&mut vc, &setup(&[(false, 1)])),
            Err(VorbisError::BadHeader(_))
        ));
        assert!(!info.is_ready());
    }

    #[test]
    fn test_setup_只有码本计数() {
        let mut info = Info::new();
        let mut vc = Comment::default();
        info.headerin(&mut vc, &ident(1, 8000, (8, 11))).unwrap();
        info.headerin(&mut vc, &comment()).unwrap();
        let mut bw = header(0x05);
        bw.write_bits(0, 8);
        let err = info
            .headerin(&mut vc, &Packet::new(bw.finish(), 2))
            .unwrap_err();
        assert_eq!(err.code(), tremor_core::error::OV_EBADHEADER);
    }
}
