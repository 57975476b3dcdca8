//! 统一错误类型定义.
//!
//! Vorbis 解码链路共用的错误类型. 每个变体对应一个既有的数值状态码,
//! 便于与以整数返回值交互的调用方对接.

use thiserror::Error;

/// 成功
pub const OV_OK: i32 = 0;
/// 内部不变量被破坏
pub const OV_EFAULT: i32 = -129;
/// 调用方式错误
pub const OV_EINVAL: i32 = -131;
/// 不是 Vorbis 数据 (包类型或魔数错误)
pub const OV_ENOTVORBIS: i32 = -132;
/// 头包损坏
pub const OV_EBADHEADER: i32 = -133;
/// 不支持的 Vorbis 版本
pub const OV_EVERSION: i32 = -134;
/// 不是音频包
pub const OV_ENOTAUDIO: i32 = -135;
/// 音频包损坏 (截断或索引非法)
pub const OV_EBADPACKET: i32 = -136;

/// Vorbis 解码统一错误类型
#[derive(Debug, Error)]
pub enum VorbisError {
    /// 包类型或 "vorbis" 魔数不匹配
    #[error("不是 Vorbis 数据: {0}")]
    NotVorbis(String),

    /// identification 头中的版本号不为 0
    #[error("不支持的 Vorbis 版本: {0}")]
    Version(u32),

    /// 头包内容非法, 整条逻辑流不可再用
    #[error("头包损坏: {0}")]
    BadHeader(String),

    /// 音频包截断或引用越界, 仅影响当前包
    #[error("音频包损坏: {0}")]
    BadPacket(String),

    /// 音频阶段收到首位为 1 的包
    #[error("不是音频包")]
    NotAudio,

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Fault(String),

    /// 调用方式错误 (状态机未就绪、读取越界等)
    #[error("无效调用: {0}")]
    InvalidArgument(String),
}

impl VorbisError {
    /// 对应的数值状态码
    pub fn code(&self) -> i32 {
        match self {
            Self::NotVorbis(_) => OV_ENOTVORBIS,
            Self::Version(_) => OV_EVERSION,
            Self::BadHeader(_) => OV_EBADHEADER,
            Self::BadPacket(_) => OV_EBADPACKET,
            Self::NotAudio => OV_ENOTAUDIO,
            Self::Fault(_) => OV_EFAULT,
            Self::InvalidArgument(_) => OV_EINVAL,
        }
    }

    /// 头包阶段的错误对整条逻辑流是致命的
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NotVorbis(_) | Self::Version(_) | Self::BadHeader(_)
        )
    }
}

/// Vorbis 解码统一 Result 类型
pub type VorbisResult<T> = Result<T, VorbisError>;

/// 将 `VorbisResult` 折叠为数值状态码
pub fn status_code<T>(result: &VorbisResult<T>) -> i32 {
    match result {
        Ok(_) => OV_OK,
        Err(e) => e.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_状态码映射() {
        assert_eq!(VorbisError::NotVorbis("x".into()).code(), -132);
        assert_eq!(VorbisError::Version(1).code(), -134);
        assert_eq!(VorbisError::BadHeader("x".into()).code(), -133);
        assert_eq!(VorbisError::BadPacket("x".into()).code(), -136);
        assert_eq!(VorbisError::NotAudio.code(), -135);
        assert_eq!(VorbisError::Fault("x".into()).code(), -129);
        assert_eq!(VorbisError::InvalidArgument("x".into()).code(), -131);
        assert_eq!(status_code::<()>(&Ok(())), OV_OK);
    }

    #[test]
    fn test_致命错误分类() {
        assert!(VorbisError::BadHeader("setup".into()).is_fatal());
        assert!(VorbisError::Version(3).is_fatal());
        assert!(!VorbisError::BadPacket("残缺".into()).is_fatal());
        assert!(!VorbisError::InvalidArgument("read".into()).is_fatal());
    }
}
