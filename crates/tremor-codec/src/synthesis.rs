//! 单个音频包的解码入口.
//!
//! 读取包头的 mode 与窗口标志, 填好 [`Block`] 的元数据, 再交给 mapping
//! 完成频谱重建与逆变换. 之后由调用方把块送入 [`DspState::blockin`].

use tremor_core::bitreader::{BitReader, ilog};
use tremor_core::{VorbisError, VorbisResult};

use crate::block::Block;
use crate::dsp::DspState;
use crate::info::{CodecSetup, Info};
use crate::packet::Packet;

/// 解码一个音频包到 `block`
///
/// 返回 `BadPacket` 时若 `block.damaged` 为真, 块中仍是可用的输出
/// (损坏声道已静音), 应当照常送入 `blockin` 以保持重叠历史连续.
pub fn synthesis(block: &mut Block, dsp: &DspState, packet: &Packet) -> VorbisResult<()> {
    let info = dsp.info();
    let setup = ready_setup(info)?;
    let mut br = BitReader::new(&packet.data);
    read_block_header(block, setup, packet, &mut br)?;

    block.pcmend = info.blocksizes[block.w];
    let mapping = &setup.mappings[setup.modes[block.mode].mapping];
    mapping.inverse(setup, info.blocksizes, dsp.windows(), block, &mut br)
}

/// 只解析包头并填好块的位置信息, 不产生 PCM
///
/// 用于 seek 后快速推进 granule position.
pub fn synthesis_trackonly(block: &mut Block, dsp: &DspState, packet: &Packet) -> VorbisResult<()> {
    let setup = ready_setup(dsp.info())?;
    let mut br = BitReader::new(&packet.data);
    read_block_header(block, setup, packet, &mut br)?;
    block.pcmend = 0;
    Ok(())
}

/// 不解码, 只求出一个音频包的块长
pub fn packet_blocksize(info: &Info, packet: &Packet) -> VorbisResult<usize> {
    let setup = ready_setup(info)?;
    let mut br = BitReader::new(&packet.data);
    let mode = read_mode(setup, &mut br)?;
    Ok(info.blocksizes[usize::from(setup.modes[mode].blockflag)])
}

fn ready_setup(info: &Info) -> VorbisResult<&CodecSetup> {
    info.setup
        .as_ref()
        .ok_or_else(|| VorbisError::InvalidArgument("头包尚未读取完整".into()))
}

fn read_mode(setup: &CodecSetup, br: &mut BitReader<'_>) -> VorbisResult<usize> {
    match br.read(1) {
        None => return Err(VorbisError::BadPacket("空包".into())),
        Some(1) => return Err(VorbisError::NotAudio),
        Some(_) => {}
    }
    let modes = setup.modes.len();
    let mode = br
        .read_usize(ilog(modes.saturating_sub(1) as u32))
        .ok_or_else(|| VorbisError::BadPacket("mode 号截断".into()))?;
    if mode >= modes {
        return Err(VorbisError::BadPacket(format!(
            "mode 号 {mode} 超出 mode 数 {modes}"
        )));
    }
    Ok(mode)
}

/// 读 mode 与前后窗口标志; 出错时不修改块的元数据
fn read_block_header(
    block: &mut Block,
    setup: &CodecSetup,
    packet: &Packet,
    br: &mut BitReader<'_>,
) -> VorbisResult<()> {
    block.ripcord();
    let mode = read_mode(setup, br)?;
    let w = usize::from(setup.modes[mode].blockflag);
    // 窗口形状标志只用于选窗, 不经过 mode 映射
    let (lw, nw) = if w == 1 {
        let lw = br.read(1);
        let nw = br
            .read(1)
            .ok_or_else(|| VorbisError::BadPacket("窗口标志截断".into()))?;
        (lw.unwrap_or(0) as usize, nw as usize)
    } else {
        (0, 0)
    };

    block.mode = mode;
    block.w = w;
    block.lw = lw;
    block.nw = nw;
    block.granulepos = packet.granulepos;
    block.sequence = packet.packetno;
    block.eofflag = packet.e_o_s;
    Ok(())
}
