//! 注释头 (vendor 与用户 `TAG=value` 列表).

use tremor_core::bitreader::BitReader;
use tremor_core::{VorbisError, VorbisResult};

/// 注释头内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// 编码器标识
    pub vendor: String,
    /// 用户注释, 形如 `ARTIST=...`
    pub user_comments: Vec<String>,
}

fn read_string(br: &mut BitReader<'_>, len: usize) -> Option<String> {
    if br.bits_left() < len.saturating_mul(8) {
        return None;
    }
    let mut bytes = Vec::with_capacity(len);
    for _ in 0..len {
        bytes.push(br.read(8)? as u8);
    }
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

impl Comment {
    /// 解析注释头 (包类型与 "vorbis" 标识之后的部分)
    pub(crate) fn unpack(br: &mut BitReader<'_>) -> VorbisResult<Self> {
        let eof = || VorbisError::BadHeader("注释头: 数据截断".into());

        let vendor_len = br.read_usize(32).ok_or_else(eof)?;
        let vendor = read_string(br, vendor_len).ok_or_else(eof)?;
        let count = br.read_usize(32).ok_or_else(eof)?;
        // 每条注释至少占 4 字节长度字段
        if count.saturating_mul(32) > br.bits_left() {
            return Err(VorbisError::BadHeader(format!("注释头: 注释条数 {count} 超出包长")));
        }
        let mut user_comments = Vec::with_capacity(count);
        for _ in 0..count {
            let len = br.read_usize(32).ok_or_else(eof)?;
            user_comments.push(read_string(br, len).ok_or_else(eof)?);
        }
        if br.read_flag() != Some(true) {
            return Err(VorbisError::BadHeader("注释头: 结束标志位缺失".into()));
        }
        Ok(Self {
            vendor,
            user_comments,
        })
    }

    /// 第 `index` 个名为 `tag` 的注释值 (标签名不区分大小写)
    pub fn query(&self, tag: &str, index: usize) -> Option<&str> {
        self.user_comments
            .iter()
            .filter_map(|c| tag_value(c, tag))
            .nth(index)
    }

    /// 名为 `tag` 的注释条数
    pub fn query_count(&self, tag: &str) -> usize {
        self.user_comments
            .iter()
            .filter(|c| tag_value(c, tag).is_some())
            .count()
    }
}

fn tag_value<'a>(comment: &'a str, tag: &str) -> Option<&'a str> {
    let (name, value) = comment.split_once('=')?;
    name.eq_ignore_ascii_case(tag).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::bitwriter::BitWriter;

    fn build(vendor: &str, comments: &[&str], framing: bool) -> Vec<u8> {
        let mut bw = BitWriter::new();
        bw.write_bits(vendor.len() as u32, 32);
        bw.write_bytes(vendor.as_bytes());
        bw.write_bits(comments.len() as u32, 32);
        for c in comments {
            bw.write_bits(c.len() as u32, 32);
            bw.write_bytes(c.as_bytes());
        }
        bw.write_flag(framing);
        bw.finish()
    }

    #[test]
    fn test_解析与查询() {
        let data = build(
            "Xiph.Org libVorbis",
            &["ARTIST=甲", "title=歌", "Artist=乙", "NOEQUALS"],
            true,
        );
        let c = Comment::unpack(&mut BitReader::new(&data)).unwrap();
        assert_eq!(c.vendor, "Xiph.Org libVorbis");
        assert_eq!(c.user_comments.len(), 4);
        assert_eq!(c.query_count("artist"), 2);
        assert_eq!(c.query("ARTIST", 0), Some("甲"));
        assert_eq!(c.query("artist", 1), Some("乙"));
        assert_eq!(c.query("artist", 2), None);
        assert_eq!(c.query("TITLE", 0), Some("歌"));
        assert_eq!(c.query_count("NOEQUALS"), 0);
    }

    #[test]
    fn test_标签前缀不误匹配() {
        let data = build("v", &["ARTISTS=x"], true);
        let c = Comment::unpack(&mut BitReader::new(&data)).unwrap();
        assert_eq!(c.query_count("ARTIST"), 0);
    }

    #[test]
    fn test_缺少结束标志() {
        let data = build("v", &[], false);
        assert!(matches!(
            Comment::unpack(&mut BitReader::new(&data)),
            Err(VorbisError::BadHeader(_))
        ));
    }

    #[test]
    fn test_长度超出包长() {
        let mut bw = BitWriter::new();
        bw.write_bits(1000, 32);
        bw.write_bytes(b"abc");
        let data = bw.finish();
        assert!(Comment::unpack(&mut BitReader::new(&data)).is_err());
    }
}
