//! 单包解码状态与包内临时分配区.

use crate::info::Info;

/// 每声道 floor 第一阶段的结果, `None` 表示静音
pub(crate) type FloorMemo = Option<Span>;

/// 包内分配区中的一段, 以下标表示, 分配区扩容后依旧有效
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    /// 长度
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// 包内临时分配区
///
/// 单调递增分配, 不支持单独释放; 每个包开始时整体复位.
/// 底层缓冲区保留到流结束, 稳定后不再产生堆分配.
#[derive(Debug, Default)]
pub struct Arena {
    buf: Vec<i32>,
    top: usize,
    peak: usize,
}

impl Arena {
    /// 创建空分配区
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配 len 个清零的 i32
    pub fn alloc(&mut self, len: usize) -> Span {
        let start = self.top;
        let end = start + len;
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[start..end].fill(0);
        self.top = end;
        self.peak = self.peak.max(end);
        Span { start, len }
    }

    /// 读取一段
    pub fn get(&self, span: Span) -> &[i32] {
        &self.buf[span.start..span.start + span.len]
    }

    /// 写入一段
    pub fn get_mut(&mut self, span: Span) -> &mut [i32] {
        &mut self.buf[span.start..span.start + span.len]
    }

    /// 整体复位 (ripcord), 之前分配的 Span 全部作废
    pub fn reset(&mut self) {
        self.top = 0;
    }

    /// 当前已分配量
    pub fn used(&self) -> usize {
        self.top
    }

    /// 历史最大分配量
    pub fn peak(&self) -> usize {
        self.peak
    }
}

/// 单个音频包的解码状态
///
/// 长期复用: 每个包开始时复位分配区与标志, PCM 缓冲区按长块大小一次分配.
#[derive(Debug)]
pub struct Block {
    /// 每声道时域输出 (前 pcmend 个有效)
    pub pcm: Vec<Vec<i32>>,
    /// 上一块的长短标志
    pub lw: usize,
    /// 本块的长短标志
    pub w: usize,
    /// 下一块的长短标志
    pub nw: usize,
    /// 本块样本数 (blocksize[w])
    pub pcmend: usize,
    /// 本块使用的 mode
    pub mode: usize,
    /// 是否为流的最后一个包
    pub eofflag: bool,
    /// 包携带的 granule position (-1 表示未知)
    pub granulepos: i64,
    /// 音频包序号 (从 0 开始)
    pub sequence: i64,
    /// 本块是否有声道因数据损坏被静音
    pub damaged: bool,
    /// 跟踪日志用的块序号, 每个包按声道数递增
    pub trace_seq: u64,
    pub(crate) arena: Arena,
    pub(crate) floormemo: Vec<FloorMemo>,
    pub(crate) nonzero: Vec<bool>,
    /// 当前子映射送入 residue 的声道
    pub(crate) chans: Vec<usize>,
}

impl Block {
    /// 按流参数创建
    pub fn new(info: &Info) -> Self {
        let long = info.blocksizes[1];
        Self {
            pcm: vec![vec![0; long]; info.channels],
            lw: 0,
            w: 0,
            nw: 0,
            pcmend: 0,
            mode: 0,
            eofflag: false,
            granulepos: -1,
            sequence: 0,
            damaged: false,
            trace_seq: 0,
            arena: Arena::new(),
            floormemo: vec![None; info.channels],
            nonzero: vec![false; info.channels],
            chans: Vec::with_capacity(info.channels),
        }
    }

    /// 开始一个新包: 复位分配区与损坏标志
    pub(crate) fn ripcord(&mut self) {
        self.arena.reset();
        self.damaged = false;
    }

    /// 本块每声道有效样本
    pub fn channel(&self, ch: usize) -> &[i32] {
        &self.pcm[ch][..self.pcmend]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_分配区复位后复用() {
        let mut arena = Arena::new();
        let a = arena.alloc(4);
        arena.get_mut(a).copy_from_slice(&[1, 2, 3, 4]);
        let b = arena.alloc(3);
        assert_eq!(arena.get(b), &[0, 0, 0]);
        assert_eq!(arena.used(), 7);

        arena.reset();
        assert_eq!(arena.used(), 0);
        let c = arena.alloc(2);
        assert_eq!(arena.get(c), &[0, 0], "复位后重新分配必须清零");
        assert_eq!(arena.peak(), 7);
    }

    #[test]
    fn test_扩容后旧span仍有效() {
        let mut arena = Arena::new();
        let a = arena.alloc(2);
        arena.get_mut(a)[1] = 9;
        let _ = arena.alloc(10_000);
        assert_eq!(arena.get(a), &[0, 9]);
        assert_eq!(a.len(), 2);
    }
}
