//! 以 anchor 为参照截取窗口。
//!
//! anchor 是在整条 read 上搜索的正则表达式，只用最左侧的第一个匹配；
//! 窗口取在匹配起点之前（ID 模式），或起点之后固定碱基数处（barcode 模式）。
//! 找不到 anchor 时返回空窗口。

use regex::bytes::Regex;

use crate::error::SeqError;

pub const DEFAULT_ID_PATTERN: &str = "AAACAAAC";
pub const DEFAULT_ID_WINDOW: usize = 6;
pub const DEFAULT_BARCODE_PATTERN: &str = "GGGGGT";
pub const DEFAULT_BARCODE_SKIP: usize = 3;
pub const DEFAULT_BARCODE_WINDOW: usize = 30;

/// What `locate_before` does when fewer than `n` bases precede the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WindowOverflow {
    /// Keep whatever precedes the anchor.
    #[default]
    Clamp,
    /// Negative window start counts back from the end of the read, as with
    /// zero-based negative indexing; usually yields an empty window.
    Wrap,
}

/// Where the window sits relative to the anchor match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Before,
    After { skip: usize },
}

/// One locator: pattern, side and window length.
#[derive(Debug, Clone)]
pub struct AnchorConfig {
    pattern: Regex,
    side: AnchorSide,
    window: usize,
    overflow: WindowOverflow,
}

impl AnchorConfig {
    /// ID-style locator: `window` bases before the anchor.
    pub fn before(pattern: &str, window: usize) -> Result<Self, SeqError> {
        Ok(AnchorConfig {
            pattern: Regex::new(pattern)?,
            side: AnchorSide::Before,
            window,
            overflow: WindowOverflow::default(),
        })
    }

    /// Barcode-style locator: `window` bases starting `skip` bases after the
    /// anchor start.
    pub fn after(pattern: &str, skip: usize, window: usize) -> Result<Self, SeqError> {
        Ok(AnchorConfig {
            pattern: Regex::new(pattern)?,
            side: AnchorSide::After { skip },
            window,
            overflow: WindowOverflow::default(),
        })
    }

    pub fn default_id() -> Result<Self, SeqError> {
        Self::before(DEFAULT_ID_PATTERN, DEFAULT_ID_WINDOW)
    }

    pub fn default_barcode() -> Result<Self, SeqError> {
        Self::after(DEFAULT_BARCODE_PATTERN, DEFAULT_BARCODE_SKIP, DEFAULT_BARCODE_WINDOW)
    }

    pub fn with_overflow(mut self, overflow: WindowOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn side(&self) -> AnchorSide {
        self.side
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn locate<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        match self.side {
            AnchorSide::Before => locate_before(seq, &self.pattern, self.window, self.overflow),
            AnchorSide::After { skip } => locate_after(seq, &self.pattern, skip, self.window),
        }
    }
}

/// `n` bases immediately preceding the first match of `pattern`.
pub fn locate_before<'a>(
    seq: &'a [u8],
    pattern: &Regex,
    n: usize,
    overflow: WindowOverflow,
) -> &'a [u8] {
    let Some(m) = pattern.find(seq) else {
        return &[];
    };
    let end = m.start();
    let start = match end.checked_sub(n) {
        Some(start) => start,
        None => match overflow {
            WindowOverflow::Clamp => 0,
            // start - n < 0  =>  len + start - n, floored at 0
            WindowOverflow::Wrap => (seq.len() + end).saturating_sub(n),
        },
    };
    if start >= end {
        return &[];
    }
    &seq[start..end]
}

/// `n` bases starting `skip` bases after the first match start of `pattern`,
/// cut short at the end of the read.
pub fn locate_after<'a>(seq: &'a [u8], pattern: &Regex, skip: usize, n: usize) -> &'a [u8] {
    let Some(m) = pattern.find(seq) else {
        return &[];
    };
    let start = m.start().saturating_add(skip);
    if start >= seq.len() {
        return &[];
    }
    let end = start.saturating_add(n).min(seq.len());
    &seq[start..end]
}
