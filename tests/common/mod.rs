//! 集成测试共用的合成码流构造器.
//!
//! 所有流共用两个码本:
//! - 码本 0: 1 维 2 条目, 码长均为 1, 无数值映射 (residue 分类字)
//! - 码本 1: 1 维 4 条目, 码长均为 2, 格点映射到 {-1, 0, 1, 2}
//!
//! residue 的分区长度固定为 32, 类别 0 不含任何级, 类别 1 的第 0 级使用码本 1.

#![allow(dead_code)]

use tremor::codec::Packet;
use tremor::core::{BitWriter, VFloat};

/// 采样率
pub const RATE: u32 = 44100;
/// 短块/长块长度
pub const BLOCKSIZES: [usize; 2] = [256, 2048];
/// residue 分区长度
pub const GROUPING: usize = 32;

/// floor 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorKind {
    /// 无分区 floor1, 只有两个端点
    Floor1,
    /// 2 阶 LSP floor0, 仅有码本 1 一个可选码本
    Floor0,
}

/// setup 头参数
#[derive(Debug, Clone)]
pub struct StreamSpec {
    pub channels: usize,
    pub floor: FloorKind,
    /// residue 类型 0/1/2
    pub residue_type: u32,
    /// 立体声时是否声明 0/1 耦合
    pub coupling: bool,
    /// 每个 mode 的长块标志
    pub modes: Vec<bool>,
    /// (upper, nominal, lower)
    pub bitrates: (i32, i32, i32),
}

impl StreamSpec {
    /// floor1 + residue 1, 短/长两个 mode
    pub fn new(channels: usize) -> Self {
        Self {
            channels,
            floor: FloorKind::Floor1,
            residue_type: 1,
            coupling: false,
            modes: vec![false, true],
            bitrates: (0, 128_000, 0),
        }
    }

    pub fn residue_type(mut self, kind: u32) -> Self {
        self.residue_type = kind;
        self
    }

    pub fn floor(mut self, floor: FloorKind) -> Self {
        self.floor = floor;
        self
    }

    pub fn coupling(mut self) -> Self {
        self.coupling = true;
        self
    }

    pub fn modes(mut self, modes: &[bool]) -> Self {
        self.modes = modes.to_vec();
        self
    }

    pub fn bitrates(mut self, upper: i32, nominal: i32, lower: i32) -> Self {
        self.bitrates = (upper, nominal, lower);
        self
    }

    /// residue 覆盖的结束位置; 类型 2 按交织后的长度计
    pub fn residue_end(&self) -> usize {
        if self.residue_type == 2 {
            128 * self.channels
        } else {
            128
        }
    }

    /// 每个音频包中的 residue 分区数 (长短块相同)
    pub fn partitions(&self) -> usize {
        self.residue_end() / GROUPING
    }

    /// mode 号位宽
    pub fn mode_bits(&self) -> u32 {
        ilog(self.modes.len() as u32 - 1)
    }

    /// 三个头包
    pub fn headers(&self) -> [Packet; 3] {
        [
            ident_packet(self.channels, self.bitrates),
            comment_packet("tremor-tests", &["TITLE=合成测试", "ARTIST=tremor"]),
            setup_packet(self),
        ]
    }
}

fn ilog(v: u32) -> u32 {
    32 - v.leading_zeros()
}

fn header(code: u8) -> BitWriter {
    let mut bw = BitWriter::new();
    bw.write_bits(u32::from(code), 8);
    bw.write_bytes(b"vorbis");
    bw
}

pub fn ident_packet(channels: usize, bitrates: (i32, i32, i32)) -> Packet {
    let mut bw = header(0x01);
    bw.write_bits(0, 32);
    bw.write_bits(channels as u32, 8);
    bw.write_bits(RATE, 32);
    bw.write_bits(bitrates.0 as u32, 32);
    bw.write_bits(bitrates.1 as u32, 32);
    bw.write_bits(bitrates.2 as u32, 32);
    bw.write_bits(BLOCKSIZES[0].trailing_zeros(), 4);
    bw.write_bits(BLOCKSIZES[1].trailing_zeros(), 4);
    bw.write_flag(true);
    Packet::new(bw.finish(), 0)
}

pub fn comment_packet(vendor: &str, comments: &[&str]) -> Packet {
    let mut bw = header(0x03);
    bw.write_bits(vendor.len() as u32, 32);
    bw.write_bytes(vendor.as_bytes());
    bw.write_bits(comments.len() as u32, 32);
    for c in comments {
        bw.write_bits(c.len() as u32, 32);
        bw.write_bytes(c.as_bytes());
    }
    bw.write_flag(true);
    Packet::new(bw.finish(), 1)
}

/// 只写到码本计数就结束的 setup 头
pub fn truncated_setup_packet() -> Packet {
    let mut bw = header(0x05);
    bw.write_bits(1, 8);
    Packet::new(bw.finish(), 2)
}

fn write_books(bw: &mut BitWriter) {
    bw.write_bits(1, 8);

    // 码本 0
    bw.write_bits(0x56_4342, 24);
    bw.write_bits(1, 16);
    bw.write_bits(2, 24);
    bw.write_flag(false);
    bw.write_flag(false);
    bw.write_bits(0, 5);
    bw.write_bits(0, 5);
    bw.write_bits(0, 4);

    // 码本 1
    bw.write_bits(0x56_4342, 24);
    bw.write_bits(1, 16);
    bw.write_bits(4, 24);
    bw.write_flag(false);
    bw.write_flag(false);
    for _ in 0..4 {
        bw.write_bits(1, 5);
    }
    bw.write_bits(1, 4);
    bw.write_bits(VFloat::new(-0x4000_0000, -30).pack(), 32);
    bw.write_bits(VFloat::new(0x4000_0000, -30).pack(), 32);
    bw.write_bits(1, 4);
    bw.write_flag(false);
    for q in 0..4 {
        bw.write_bits(q, 2);
    }
}

pub fn setup_packet(spec: &StreamSpec) -> Packet {
    let mut bw = header(0x05);
    write_books(&mut bw);

    bw.write_bits(0, 6);
    bw.write_bits(0, 16);

    // floor
    bw.write_bits(0, 6);
    match spec.floor {
        FloorKind::Floor1 => {
            bw.write_bits(1, 16);
            bw.write_bits(0, 5);
            bw.write_bits(0, 2);
            bw.write_bits(8, 4);
        }
        FloorKind::Floor0 => {
            bw.write_bits(0, 16);
            bw.write_bits(2, 8);
            bw.write_bits(RATE, 16);
            bw.write_bits(64, 16);
            bw.write_bits(6, 6);
            bw.write_bits(40, 8);
            bw.write_bits(0, 4);
            bw.write_bits(1, 8);
        }
    }

    // residue
    bw.write_bits(0, 6);
    bw.write_bits(spec.residue_type, 16);
    bw.write_bits(0, 24);
    bw.write_bits(spec.residue_end() as u32, 24);
    bw.write_bits(GROUPING as u32 - 1, 24);
    bw.write_bits(1, 6);
    bw.write_bits(0, 8);
    bw.write_bits(0, 3);
    bw.write_flag(false);
    bw.write_bits(1, 3);
    bw.write_flag(false);
    bw.write_bits(1, 8);

    // mapping
    bw.write_bits(0, 6);
    bw.write_bits(0, 16);
    bw.write_flag(false);
    if spec.coupling {
        let bits = ilog(spec.channels as u32 - 1);
        bw.write_flag(true);
        bw.write_bits(0, 8);
        bw.write_bits(0, bits);
        bw.write_bits(1, bits);
    } else {
        bw.write_flag(false);
    }
    bw.write_bits(0, 2);
    bw.write_bits(0, 8);
    bw.write_bits(0, 8);
    bw.write_bits(0, 8);

    // mode
    bw.write_bits(spec.modes.len() as u32 - 1, 6);
    for &blockflag in &spec.modes {
        bw.write_flag(blockflag);
        bw.write_bits(0, 16);
        bw.write_bits(0, 16);
        bw.write_bits(0, 8);
    }
    bw.write_flag(true);
    Packet::new(bw.finish(), 2)
}

/// 一个声道在音频包中的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// floor 标记为未使用
    Silent,
    /// floor1 两端点取该值 (0..=255); floor0 时为 6 位幅度
    Level(u32),
}

/// 一个音频块的描述
#[derive(Debug, Clone)]
pub struct AudioBlock {
    pub mode: usize,
    /// 前一块是否为长块
    pub lw: bool,
    /// 后一块是否为长块
    pub nw: bool,
    pub channels: Vec<Channel>,
}

impl AudioBlock {
    /// 所有声道使用同一电平
    pub fn uniform(mode: usize, channels: usize, level: u32) -> Self {
        Self {
            mode,
            lw: false,
            nw: false,
            channels: vec![Channel::Level(level); channels],
        }
    }

    pub fn silent(mode: usize, channels: usize) -> Self {
        Self {
            mode,
            lw: false,
            nw: false,
            channels: vec![Channel::Silent; channels],
        }
    }
}

/// 第 `part` 个分区第 `k` 个频点使用的码本 1 条目
pub fn residue_entry(part: usize, k: usize) -> u32 {
    ((part + k) % 4) as u32
}

/// 按给定的 mode 序列生成音频块, 自动填写前后窗口标志
pub fn block_sequence(spec: &StreamSpec, modes: &[usize], level: u32) -> Vec<AudioBlock> {
    let long = |m: usize| spec.modes[m];
    modes
        .iter()
        .enumerate()
        .map(|(i, &mode)| {
            let mut block = AudioBlock::uniform(mode, spec.channels, level);
            block.lw = i > 0 && long(modes[i - 1]);
            block.nw = modes.get(i + 1).is_some_and(|&m| long(m));
            block
        })
        .collect()
}

/// 写出一个音频包的比特内容
pub fn audio_bits(spec: &StreamSpec, block: &AudioBlock) -> Vec<u8> {
    let mut bw = BitWriter::new();
    bw.write_flag(false);
    bw.write_bits(block.mode as u32, spec.mode_bits());
    if spec.modes[block.mode] {
        bw.write_flag(block.lw);
        bw.write_flag(block.nw);
    }

    for ch in &block.channels {
        match (spec.floor, *ch) {
            (FloorKind::Floor1, Channel::Silent) => bw.write_flag(false),
            (FloorKind::Floor1, Channel::Level(y)) => {
                bw.write_flag(true);
                bw.write_bits(y, 8);
                bw.write_bits(y, 8);
            }
            (FloorKind::Floor0, Channel::Silent) => bw.write_bits(0, 6),
            (FloorKind::Floor0, Channel::Level(amp)) => {
                bw.write_bits(amp, 6);
                bw.write_bits(0, 1);
                // 两个 LSP 增量都取 1.0
                bw.write_codeword(2, 2);
                bw.write_codeword(2, 2);
            }
        }
    }

    let mut active: Vec<bool> = block
        .channels
        .iter()
        .map(|ch| *ch != Channel::Silent)
        .collect();
    if spec.coupling && (active[0] || active[1]) {
        active[0] = true;
        active[1] = true;
    }

    if spec.residue_type == 2 {
        if active.iter().any(|&a| a) {
            for part in 0..spec.partitions() {
                bw.write_codeword(1, 1);
                for k in 0..GROUPING {
                    bw.write_codeword(residue_entry(part, k), 2);
                }
            }
        }
    } else {
        let used = active.iter().filter(|&&a| a).count();
        for part in 0..spec.partitions() {
            for _ in 0..used {
                bw.write_codeword(1, 1);
            }
            for _ in 0..used {
                for k in 0..GROUPING {
                    bw.write_codeword(residue_entry(part, k), 2);
                }
            }
        }
    }
    bw.finish()
}

/// 音频包, 包序号从 3 开始
pub fn audio_packet(spec: &StreamSpec, block: &AudioBlock, index: usize) -> Packet {
    Packet::new(audio_bits(spec, block), 3 + index as i64)
}

/// 按序号生成一串音频包 (granule position 未知)
pub fn audio_packets(spec: &StreamSpec, blocks: &[AudioBlock]) -> Vec<Packet> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| audio_packet(spec, b, i))
        .collect()
}
