//! ファイルシステム抽象化
//!
//! コンテンツストアで使用するファイル操作の抽象化レイヤー。
//! テスト時に MockFs を注入してファイル操作をモック化できる。

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsFileType {
    File,
    Dir,
}

/// ファイルシステム抽象化のための独自 DirEntry
#[derive(Debug, Clone)]
pub struct FsDirEntry {
    pub path: PathBuf,
    pub file_type: FsFileType,
}

impl FsDirEntry {
    /// ファイルかどうか
    pub fn is_file(&self) -> bool {
        self.file_type == FsFileType::File
    }
}

/// ファイルシステム操作を抽象化するトレイト
///
/// テスト時に MockFs を注入してファイル操作をモック化できる。
/// 本番コードでは RealFs を使用する。
pub trait FileSystem: Send + Sync {
    /// パスが存在するか
    fn exists(&self, path: &Path) -> bool;

    /// ディレクトリかどうか
    fn is_dir(&self, path: &Path) -> bool;

    /// ディレクトリを再帰的に作成
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// ファイル内容を読み込み
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// ファイルに書き込み
    ///
    /// - 親ディレクトリは自動作成
    /// - 既存ファイルは上書き
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// ファイルを移動（リネーム）
    ///
    /// - 同一ファイルシステム内でのリネーム
    /// - クロスデバイス時は Err
    fn rename(&self, src: &Path, dst: &Path) -> Result<()>;

    /// 最終更新時刻を取得
    fn mtime(&self, path: &Path) -> Result<SystemTime>;

    /// ディレクトリ内のエントリを取得
    ///
    /// - FsDirEntry のベクタを返す
    /// - 順序は未定義
    /// - 引数がディレクトリでない場合は Err
    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>>;
}

/// 本番用ファイルシステム実装
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        // 親ディレクトリを作成
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    fn rename(&self, src: &Path, dst: &Path) -> Result<()> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::rename(src, dst)?;
        Ok(())
    }

    fn mtime(&self, path: &Path) -> Result<SystemTime> {
        let metadata = std::fs::metadata(path)?;
        Ok(metadata.modified()?)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FsDirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_type = if entry.path().is_dir() {
                FsFileType::Dir
            } else {
                FsFileType::File
            };
            entries.push(FsDirEntry {
                path: entry.path(),
                file_type,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "fs_test.rs"]
mod tests;
