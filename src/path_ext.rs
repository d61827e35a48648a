//! Path 拡張トレイト
//!
//! 標準ライブラリの `Path` に便利メソッドを追加する。

use std::path::{Path, PathBuf};

/// Path の拡張トレイト
pub trait PathExt {
    /// カスタムパスまたはデフォルトパスを結合する
    ///
    /// `custom` が `Some` の場合はそのパスを、`None` の場合は `default` を
    /// ベースパスに結合して返す。
    fn join_or(&self, custom: Option<&str>, default: &str) -> PathBuf;

    /// `.md` ファイルかどうか
    fn is_markdown(&self) -> bool;
}

impl PathExt for Path {
    fn join_or(&self, custom: Option<&str>, default: &str) -> PathBuf {
        custom
            .map(|p| self.join(p))
            .unwrap_or_else(|| self.join(default))
    }

    fn is_markdown(&self) -> bool {
        self.extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "path_ext_test.rs"]
mod tests;
