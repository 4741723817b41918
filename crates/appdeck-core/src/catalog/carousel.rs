//! LoopingCarousel - 無限ループするカルーセルの index 計算
//!
//! リストを 3 回並べて描画し、真ん中のコピーに常に戻すことで
//! 端のないスクロールに見せます。
//! - 初期位置は真ん中のコピーの先頭（`len`）
//! - スクロールが止まったら、前後のコピーにいれば真ん中へ戻す
//! - 自動送りは `+1` するだけ（止まった時点で戻す）

/// 空リストでは作れない（`new` が `None` を返す）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopingCarousel {
    len: usize,
}

impl LoopingCarousel {
    /// 何回並べるか
    pub const COPIES: usize = 3;

    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// 描画する要素数（`len * 3`）
    pub fn extended_len(&self) -> usize {
        self.len * Self::COPIES
    }

    pub fn initial_index(&self) -> usize {
        self.len
    }

    /// スクロール位置から最も近い要素の index
    pub fn index_for_offset(&self, offset: f64, item_extent: f64) -> usize {
        if item_extent <= 0.0 || !offset.is_finite() || offset <= 0.0 {
            return 0;
        }
        let index = (offset / item_extent).round() as usize;
        index.min(self.extended_len() - 1)
    }

    /// スクロール停止時の index を真ん中のコピーに戻す
    pub fn settle(&self, index: usize) -> usize {
        if index < self.len {
            index + self.len
        } else if index >= self.len * 2 {
            index - self.len
        } else {
            index
        }
    }

    /// 自動送りの次の index
    pub fn next(&self, index: usize) -> usize {
        index + 1
    }

    /// 描画 index が指す元リストの要素
    pub fn item_at(&self, index: usize) -> usize {
        index % self.len
    }
}
