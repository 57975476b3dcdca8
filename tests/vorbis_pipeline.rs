//! Vorbis 解码管线端到端测试.
//!
//! 码流由 `common` 中的构造器合成, 覆盖头包状态机、重叠相加的样本数、
//! granule position 与时间戳、错误分级以及输出声道顺序.

mod common;

use std::f64::consts::{FRAC_PI_2, PI};

use common::{AudioBlock, BLOCKSIZES, Channel, FloorKind, RATE, StreamSpec};
use tremor::codec::frame::NOPTS_VALUE;
use tremor::codec::{
    AudioFrame, Decoder, DecoderConfig, DecoderState, Packet, VorbisDecoder, packet_blocksize,
};
use tremor::core::error::{OV_EBADHEADER, OV_EBADPACKET, OV_EINVAL, OV_ENOTAUDIO};
use tremor::core::{BitWriter, ChannelOrder, VorbisError};

fn open_with(spec: &StreamSpec, config: DecoderConfig) -> VorbisDecoder {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut dec = VorbisDecoder::new(config);
    dec.open().unwrap();
    for header in spec.headers() {
        dec.send_packet(&header).unwrap();
    }
    assert_eq!(dec.state(), DecoderState::Ready);
    dec
}

fn open(spec: &StreamSpec) -> VorbisDecoder {
    open_with(spec, DecoderConfig::default())
}

fn take_frames(dec: &mut VorbisDecoder) -> Vec<AudioFrame> {
    let mut frames = Vec::new();
    while let Some(frame) = dec.receive_frame().unwrap() {
        frames.push(frame);
    }
    frames
}

fn sample_count(frames: &[AudioFrame]) -> usize {
    frames.iter().map(|f| f.nb_samples as usize).sum()
}

/// 解码全部包, 返回每个包产生的帧
fn decode(dec: &mut VorbisDecoder, packets: &[Packet]) -> Vec<Vec<AudioFrame>> {
    packets
        .iter()
        .map(|p| {
            dec.send_packet(p).unwrap();
            take_frames(dec)
        })
        .collect()
}

#[test]
fn test_头包状态机与流参数() {
    let spec = StreamSpec::new(2).bitrates(128_000, 128_000, 128_000);
    let [ident, comment, setup] = spec.headers();
    let mut dec = VorbisDecoder::default();
    dec.open().unwrap();

    dec.send_packet(&ident).unwrap();
    assert_eq!(dec.state(), DecoderState::HeaderComment);
    assert_eq!(dec.info().channels, 2);
    assert_eq!(dec.info().rate, RATE);
    assert_eq!(dec.info().blocksizes, BLOCKSIZES);
    assert!(dec.receive_frame().unwrap().is_none());

    dec.send_packet(&comment).unwrap();
    assert_eq!(dec.state(), DecoderState::HeaderSetup);
    assert_eq!(dec.comment().vendor, "tremor-tests");
    assert_eq!(dec.comment().query("title", 0), Some("合成测试"));
    assert_eq!(dec.comment().query_count("ARTIST"), 1);
    assert_eq!(dec.comment().query("ARTIST", 1), None);

    dec.send_packet(&setup).unwrap();
    assert_eq!(dec.state(), DecoderState::Ready);
    assert!(dec.info().is_ready());
    assert!(!dec.info().is_vbr());
    assert_eq!(dec.info().modes(), 2);
    assert_eq!(dec.name(), "vorbis");
}

#[test]
fn test_重叠相加样本数守恒() {
    let spec = StreamSpec::new(1);
    let modes = [0, 0, 1, 1, 0, 1, 0, 0];
    let blocks = common::block_sequence(&spec, &modes, 200);
    let packets = common::audio_packets(&spec, &blocks);
    let mut dec = open(&spec);

    let per_packet = decode(&mut dec, &packets);
    let bs = |m: usize| BLOCKSIZES[usize::from(spec.modes[m])];
    assert_eq!(sample_count(&per_packet[0]), 0);
    let mut expected_total = 0;
    for i in 1..modes.len() {
        let expected = bs(modes[i - 1]) / 4 + bs(modes[i]) / 4;
        assert_eq!(sample_count(&per_packet[i]), expected, "第 {i} 个包");
        expected_total += expected;
    }

    let frames: Vec<AudioFrame> = per_packet.into_iter().flatten().collect();
    assert_eq!(sample_count(&frames), expected_total);
    for frame in &frames {
        assert_eq!(frame.sample_rate, RATE);
        assert_eq!(frame.channels(), 1);
        assert_eq!(frame.data.len(), frame.nb_samples as usize);
        assert_eq!(frame.pts, NOPTS_VALUE);
    }
}

#[test]
fn test_granule位置换算时间戳() {
    let spec = StreamSpec::new(1);
    let blocks = common::block_sequence(&spec, &[0, 0, 0, 0], 200);
    let packets: Vec<Packet> = common::audio_packets(&spec, &blocks)
        .into_iter()
        .enumerate()
        .map(|(i, p)| p.with_granulepos(128 * i as i64))
        .collect();
    let mut dec = open(&spec);

    let per_packet = decode(&mut dec, &packets);
    assert!(per_packet[0].is_empty());
    for (i, frames) in per_packet.iter().enumerate().skip(1) {
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].nb_samples, 128);
        assert_eq!(frames[0].pts, 128 * (i as i64 - 1));
    }
}

#[test]
fn test_末包按granule裁掉尾部() {
    let spec = StreamSpec::new(1);
    let blocks = common::block_sequence(&spec, &[0, 0, 0], 200);
    let mut packets = common::audio_packets(&spec, &blocks);
    let last = packets.pop().unwrap().with_granulepos(200).with_eos();
    packets.push(last);
    let mut dec = open(&spec);

    let per_packet = decode(&mut dec, &packets);
    assert_eq!(sample_count(&per_packet[1]), 128);
    assert_eq!(sample_count(&per_packet[2]), 72);
    assert_eq!(per_packet[2][0].pts, 128);
    assert!(dec.is_finished());
}

#[test]
fn test_长块按最大帧长拆分() {
    let spec = StreamSpec::new(1);
    let blocks = common::block_sequence(&spec, &[1, 1], 200);
    let packets: Vec<Packet> = common::audio_packets(&spec, &blocks)
        .into_iter()
        .enumerate()
        .map(|(i, p)| p.with_granulepos(1024 * i as i64))
        .collect();
    let config = DecoderConfig {
        max_frame_samples: 100,
        ..DecoderConfig::default()
    };
    let mut dec = open_with(&spec, config);

    let per_packet = decode(&mut dec, &packets);
    let frames = &per_packet[1];
    assert_eq!(frames.len(), 11);
    assert_eq!(sample_count(frames), 1024);
    assert_eq!(frames[10].nb_samples, 24);
    for (k, frame) in frames.iter().enumerate() {
        assert_eq!(frame.pts, 100 * k as i64);
    }
}

#[test]
fn test_静音包输出全零() {
    let spec = StreamSpec::new(2);
    let blocks: Vec<AudioBlock> = (0..3).map(|_| AudioBlock::silent(0, 2)).collect();
    let packets = common::audio_packets(&spec, &blocks);
    let mut dec = open(&spec);

    let frames: Vec<AudioFrame> = decode(&mut dec, &packets).into_iter().flatten().collect();
    assert_eq!(sample_count(&frames), 256);
    assert!(frames.iter().all(|f| f.data.iter().all(|&s| s == 0)));
    assert!(frames.iter().all(|f| f.data.len() == 2 * f.nb_samples as usize));
}

/// 窗口上升沿: 长度 len 的斜坡第 i 点
fn slope(i: usize, len: usize) -> f64 {
    let x = (i as f64 + 0.5) / len as f64 * FRAC_PI_2;
    (FRAC_PI_2 * x.sin().powi(2)).sin()
}

/// 块长 n 的块内位置 m 的窗值, 斜坡长度由前后相邻块决定
fn window_at(m: usize, n: usize, prev: usize, next: usize) -> f64 {
    let lw = n.min(prev) / 2;
    let left_begin = n / 4 - lw / 2;
    let rw = n.min(next) / 2;
    let right_begin = 3 * n / 4 - rw / 2;
    if m < left_begin {
        0.0
    } else if m < left_begin + lw {
        slope(m - left_begin, lw)
    } else if m < right_begin {
        1.0
    } else if m < right_begin + rw {
        slope(right_begin + rw - 1 - m, rw)
    } else {
        0.0
    }
}

/// 合成流单声道块的逆 MDCT (浮点, 未归一化), 频谱只取 residue 数值部分
fn imdct_reference(n: usize, m: usize) -> f64 {
    let end = 128;
    (0..end)
        .map(|k| {
            let entry = common::residue_entry(k / common::GROUPING, k % common::GROUPING);
            let v = f64::from(entry) - 1.0;
            let n = n as f64;
            let phase = 2.0 * PI / n * (m as f64 + 0.5 + n / 4.0) * (k as f64 + 0.5);
            v * phase.cos()
        })
        .sum()
}

#[test]
fn test_短长短过渡的重叠区只加一次窗() {
    let spec = StreamSpec::new(1);
    let modes = [0usize, 1, 0, 0];
    let blocks = common::block_sequence(&spec, &modes, 158);
    let mut dec = open(&spec);
    let frames = decode(&mut dec, &common::audio_packets(&spec, &blocks));
    let out: Vec<f64> = frames
        .iter()
        .flatten()
        .flat_map(|f| f.data.iter().map(|&v| f64::from(v)))
        .collect();

    // 每个块在时间轴上的起点: 相邻块中心相距 n_prev/4 + n/4
    let sizes: Vec<usize> = modes.iter().map(|&m| BLOCKSIZES[m]).collect();
    let mut starts = Vec::new();
    let mut center = sizes[0] / 2;
    for (i, &n) in sizes.iter().enumerate() {
        if i > 0 {
            center += sizes[i - 1] / 4 + n / 4;
        }
        starts.push(center as i64 - (n / 2) as i64);
    }
    let first = sizes[0] / 2;
    assert_eq!(out.len(), center - first);

    let expected: Vec<f64> = (first..center)
        .map(|t| {
            sizes
                .iter()
                .enumerate()
                .filter_map(|(i, &n)| {
                    let m = t as i64 - starts[i];
                    if m < 0 || m >= n as i64 {
                        return None;
                    }
                    let m = m as usize;
                    let prev = if i > 0 { sizes[i - 1] } else { n };
                    let next = sizes.get(i + 1).copied().unwrap_or(n);
                    Some(window_at(m, n, prev, next) * imdct_reference(n, m))
                })
                .sum()
        })
        .collect();

    // 只拟合一个全局幅度 (floor 为常数), 波形必须一致
    let dot: f64 = out.iter().zip(&expected).map(|(a, b)| a * b).sum();
    let energy: f64 = expected.iter().map(|b| b * b).sum();
    let scale = dot / energy;
    assert!(scale > 0.0);
    let residual = |range: std::ops::Range<usize>| {
        let err: f64 = range
            .clone()
            .map(|i| (out[i] - scale * expected[i]).powi(2))
            .sum();
        let sig: f64 = range.map(|i| (scale * expected[i]).powi(2)).sum();
        err / sig
    };
    assert!(residual(0..out.len()) < 1e-3, "整体误差 {}", residual(0..out.len()));

    // 三段重叠区: 短->长, 长->短, 短->短
    for t0 in [first, starts[2] as usize, starts[3] as usize] {
        let range = t0 - first..t0 - first + 128;
        let r = residual(range.clone());
        assert!(r < 1e-3, "重叠区 {range:?} 误差 {r}");
    }
}

#[test]
fn test_单声道residue2与residue1等价() {
    let type1 = StreamSpec::new(1);
    let type2 = StreamSpec::new(1).residue_type(2);
    let blocks = common::block_sequence(&type1, &[0, 1, 0, 0], 200);

    let mut dec1 = open(&type1);
    let mut dec2 = open(&type2);
    let out1: Vec<i16> = decode(&mut dec1, &common::audio_packets(&type1, &blocks))
        .into_iter()
        .flatten()
        .flat_map(|f| f.data)
        .collect();
    let out2: Vec<i16> = decode(&mut dec2, &common::audio_packets(&type2, &blocks))
        .into_iter()
        .flatten()
        .flat_map(|f| f.data)
        .collect();

    assert_eq!(out1.len(), 576 + 576 + 128);
    assert_eq!(out1, out2);
    assert!(out1.iter().any(|&s| s != 0));
}

#[test]
fn test_环绕声输出顺序() {
    let spec = StreamSpec::new(6);
    let mut block = AudioBlock::silent(0, 6);
    // 码流声道 1 为中置
    block.channels[1] = Channel::Level(200);
    let blocks = vec![block; 3];
    let packets = common::audio_packets(&spec, &blocks);

    let nonzero_channels = |order: ChannelOrder| -> Vec<usize> {
        let config = DecoderConfig {
            channel_order: order,
            ..DecoderConfig::default()
        };
        let mut dec = open_with(&spec, config);
        let frames: Vec<AudioFrame> = decode(&mut dec, &packets).into_iter().flatten().collect();
        assert_eq!(sample_count(&frames), 256);
        (0..6)
            .filter(|&ch| {
                frames
                    .iter()
                    .any(|f| f.channel_samples(ch).any(|s| s != 0))
            })
            .collect()
    };

    assert_eq!(nonzero_channels(ChannelOrder::Vorbis), vec![1]);
    assert_eq!(nonzero_channels(ChannelOrder::Standard), vec![2]);
}

#[test]
fn test_耦合立体声() {
    let spec = StreamSpec::new(2).coupling().residue_type(2);
    let blocks = common::block_sequence(&spec, &[0, 1, 1, 0], 200);
    let packets = common::audio_packets(&spec, &blocks);
    let mut dec = open(&spec);

    let frames: Vec<AudioFrame> = decode(&mut dec, &packets).into_iter().flatten().collect();
    assert_eq!(sample_count(&frames), 576 + 1024 + 576);
    assert!(frames.iter().all(|f| f.channels() == 2));
    assert!(frames.iter().any(|f| f.data.iter().any(|&s| s != 0)));
}

#[test]
fn test_setup截断是致命错误() {
    let spec = StreamSpec::new(1);
    let [ident, comment, _] = spec.headers();
    let mut dec = VorbisDecoder::default();
    dec.open().unwrap();
    dec.send_packet(&ident).unwrap();
    dec.send_packet(&comment).unwrap();

    let err = dec
        .send_packet(&common::truncated_setup_packet())
        .unwrap_err();
    assert_eq!(err.code(), OV_EBADHEADER);
    assert!(err.is_fatal());
    assert_eq!(dec.state(), DecoderState::Failed);

    let blocks = [AudioBlock::uniform(0, 1, 200)];
    let err = dec
        .send_packet(&common::audio_packet(&spec, &blocks[0], 0))
        .unwrap_err();
    assert_eq!(err.code(), OV_EINVAL);
}

#[test]
fn test_floor0码本序号越界只丢当前包() {
    let spec = StreamSpec::new(1).floor(FloorKind::Floor0);
    let mut dec = open(&spec);

    let mut bw = BitWriter::new();
    bw.write_flag(false);
    bw.write_bits(0, 1);
    bw.write_bits(63, 6);
    // 只有一个可选码本, 序号 1 越界
    bw.write_bits(1, 1);
    let bad = Packet::new(bw.finish(), 3);
    let err = dec.send_packet(&bad).unwrap_err();
    assert_eq!(err.code(), OV_EBADPACKET);
    assert!(!err.is_fatal());
    assert_eq!(dec.state(), DecoderState::Ready);
    assert!(take_frames(&mut dec).is_empty());

    for index in 1..3 {
        let block = AudioBlock::uniform(0, 1, 40);
        dec.send_packet(&common::audio_packet(&spec, &block, index))
            .unwrap();
        assert_eq!(sample_count(&take_frames(&mut dec)), 128);
    }
}

#[test]
fn test_音频阶段收到头包() {
    let spec = StreamSpec::new(1);
    let mut dec = open(&spec);
    let [ident, _, _] = spec.headers();

    let err = dec.send_packet(&ident).unwrap_err();
    assert!(matches!(err, VorbisError::NotAudio));
    assert_eq!(err.code(), OV_ENOTAUDIO);
    assert_eq!(dec.state(), DecoderState::Ready);

    let blocks = common::block_sequence(&spec, &[0, 0], 200);
    let out = decode(&mut dec, &common::audio_packets(&spec, &blocks));
    assert_eq!(sample_count(&out[1]), 128);
}

#[test]
fn test_mode号越界与块长查询() {
    let spec = StreamSpec::new(1).modes(&[false, true, false]);
    let mut dec = open(&spec);
    assert_eq!(spec.mode_bits(), 2);

    let mut bw = BitWriter::new();
    bw.write_flag(false);
    bw.write_bits(3, 2);
    let bad = Packet::new(bw.finish(), 3);
    assert!(matches!(
        packet_blocksize(dec.info(), &bad),
        Err(VorbisError::BadPacket(_))
    ));
    let err = dec.send_packet(&bad).unwrap_err();
    assert_eq!(err.code(), OV_EBADPACKET);
    assert_eq!(dec.state(), DecoderState::Ready);

    let short = common::audio_packet(&spec, &AudioBlock::uniform(2, 1, 200), 1);
    let mut long_block = AudioBlock::uniform(1, 1, 200);
    long_block.lw = false;
    let long = common::audio_packet(&spec, &long_block, 2);
    assert_eq!(packet_blocksize(dec.info(), &short).unwrap(), 256);
    assert_eq!(packet_blocksize(dec.info(), &long).unwrap(), 2048);
    assert!(matches!(
        packet_blocksize(dec.info(), &spec.headers()[0]),
        Err(VorbisError::NotAudio)
    ));
    assert!(matches!(
        packet_blocksize(dec.info(), &Packet::new(Vec::new(), 9)),
        Err(VorbisError::BadPacket(_))
    ));

    dec.send_packet(&short).unwrap();
    dec.send_packet(&long).unwrap();
    assert_eq!(sample_count(&take_frames(&mut dec)), 64 + 512);
}

#[test]
fn test_包头出错的包不参与重叠() {
    let spec = StreamSpec::new(1).modes(&[false, true, false]);
    let blocks = common::block_sequence(&spec, &[0, 0, 0, 0, 0, 0], 200);
    let mut packets = common::audio_packets(&spec, &blocks);
    packets[0] = packets[0].clone().with_granulepos(0);
    packets[5] = packets[5].clone().with_granulepos(640);
    // 第 3 个包的 mode 号越界, 在 blockin 之前就被丢弃
    let mut bw = BitWriter::new();
    bw.write_flag(false);
    bw.write_bits(3, 2);
    packets[2] = Packet::new(bw.finish(), packets[2].packetno);

    let mut dec = open(&spec);
    let mut pts = Vec::new();
    for (i, packet) in packets.iter().enumerate() {
        let result = dec.send_packet(packet);
        let frames = take_frames(&mut dec);
        if i == 2 {
            assert_eq!(result.unwrap_err().code(), OV_EBADPACKET);
            assert!(frames.is_empty());
            continue;
        }
        result.unwrap();
        pts.extend(frames.iter().map(|f| (f.nb_samples, f.pts)));
    }
    // 丢弃的包不计入时长: 之后的时间戳从上一帧接续, 直到下一个带 granule 的包重新对齐
    assert_eq!(pts, vec![(128, 0), (128, 128), (128, 256), (128, 512)]);
}

#[test]
fn test_跳过包与flush() {
    let spec = StreamSpec::new(1);
    let blocks = common::block_sequence(&spec, &[0, 0, 0, 0, 0], 200);
    let packets = common::audio_packets(&spec, &blocks);
    let mut dec = open(&spec);

    let out = decode(&mut dec, &packets[..2]);
    assert_eq!(sample_count(&out[1]), 128);

    dec.skip_packet(&packets[2]).unwrap();
    assert!(take_frames(&mut dec).is_empty());

    dec.send_packet(&packets[3]).unwrap();
    let frames = take_frames(&mut dec);
    assert_eq!(sample_count(&frames), 128);
    assert_eq!(frames[0].pts, NOPTS_VALUE);

    // flush 后重新从第一个块开始, 不产生输出
    dec.flush();
    dec.send_packet(&packets[4]).unwrap();
    assert!(take_frames(&mut dec).is_empty());
    assert_eq!(dec.state(), DecoderState::Ready);
}

#[test]
fn test_空包标记输入结束() {
    let spec = StreamSpec::new(1);
    let mut dec = open(&spec);
    assert!(!dec.is_finished());
    dec.send_packet(&Packet::empty()).unwrap();
    assert!(dec.is_finished());
    assert!(dec.receive_frame().unwrap().is_none());
}

#[test]
fn test_解码器可跨线程移动() {
    fn assert_send<T: Send>() {}
    assert_send::<VorbisDecoder>();
    let spec = StreamSpec::new(1);
    let dec = open(&spec);
    let handle = std::thread::spawn(move || dec.state());
    assert_eq!(handle.join().unwrap(), DecoderState::Ready);
}
