//! コンテンツストア
//!
//! テンプレート・下書き・公開済み投稿の3ディレクトリを管理する。
//! ファイル操作は FileSystem トレイト経由で行い、テストでは MockFs を注入する。

use crate::config::Config;
use crate::error::{BpmError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::path_ext::PathExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// テンプレート一覧のエントリ
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// ファイル名の語幹（例: "post-with-images"）
    pub name: String,
    /// メニュー表示用ラベル（例: "Post with images"）
    pub label: String,
    pub path: PathBuf,
}

/// 下書き・公開済み一覧のエントリ
#[derive(Debug, Clone)]
pub struct DocumentEntry {
    /// ファイル名（例: "my-post.md"）
    pub name: String,
    pub path: PathBuf,
    pub mtime: SystemTime,
}

impl DocumentEntry {
    /// 拡張子を除いた語幹
    pub fn stem(&self) -> &str {
        self.name.strip_suffix(".md").unwrap_or(&self.name)
    }
}

/// コンテンツストア
pub struct ContentStore {
    config: Config,
    fs: Arc<dyn FileSystem>,
}

impl ContentStore {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            fs: Arc::new(RealFs),
        }
    }

    #[cfg(test)]
    pub fn with_fs(config: Config, fs: Arc<dyn FileSystem>) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 3ディレクトリを作成する（既存ならそのまま）
    pub fn ensure_layout(&self) -> Result<()> {
        self.fs.create_dir_all(&self.config.templates_dir)?;
        self.fs.create_dir_all(&self.config.drafts_dir)?;
        self.fs.create_dir_all(&self.config.posts_dir)?;
        Ok(())
    }

    // ========================================
    // テンプレート
    // ========================================

    /// テンプレート一覧を取得（name昇順）
    ///
    /// テンプレートディレクトリが存在しない場合は空のベクタを返す。
    pub fn list_templates(&self) -> Result<Vec<TemplateEntry>> {
        if !self.fs.is_dir(&self.config.templates_dir) {
            return Ok(Vec::new());
        }

        let mut templates: Vec<TemplateEntry> = self
            .fs
            .read_dir(&self.config.templates_dir)?
            .into_iter()
            .filter(|e| e.is_file() && e.path.is_markdown())
            .filter_map(|e| {
                let name = e.path.file_stem()?.to_string_lossy().to_string();
                Some(TemplateEntry {
                    label: humanize(&name),
                    name,
                    path: e.path,
                })
            })
            .collect();

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    /// テンプレート本文を読み込む
    pub fn read_template(&self, name: &str) -> Result<String> {
        let path = self.template_path(name);
        if !self.fs.exists(&path) {
            return Err(BpmError::TemplateNotFound(name.to_string()));
        }
        self.fs.read_to_string(&path)
    }

    /// テンプレートを配置する
    ///
    /// 既存のファイルは上書きしない。配置したら true を返す。
    pub fn install_template(&self, name: &str, content: &str) -> Result<bool> {
        let path = self.template_path(name);
        if self.fs.exists(&path) {
            return Ok(false);
        }
        self.fs.write(&path, content.as_bytes())?;
        Ok(true)
    }

    // ========================================
    // 下書き
    // ========================================

    /// 下書き一覧を取得（name昇順）
    pub fn list_drafts(&self) -> Result<Vec<DocumentEntry>> {
        self.list_documents(&self.config.drafts_dir)
    }

    /// 下書き本文を読み込む
    pub fn read_draft(&self, name: &str) -> Result<String> {
        let path = self.config.drafts_dir.join(name);
        if !self.fs.exists(&path) {
            return Err(BpmError::DraftNotFound(name.to_string()));
        }
        self.fs.read_to_string(&path)
    }

    /// 新しい下書きを書き込む（既存なら Err）
    pub fn write_draft(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.config.drafts_dir.join(name);
        if self.fs.exists(&path) {
            return Err(BpmError::DraftExists(name.to_string()));
        }
        self.fs.write(&path, content.as_bytes())?;
        Ok(path)
    }

    /// 既存の下書きを上書きする（存在しなければ Err）
    pub fn update_draft(&self, name: &str, content: &str) -> Result<()> {
        let path = self.config.drafts_dir.join(name);
        if !self.fs.exists(&path) {
            return Err(BpmError::DraftNotFound(name.to_string()));
        }
        self.fs.write(&path, content.as_bytes())
    }

    /// 下書きを公開ディレクトリへ移動する
    ///
    /// 公開側に同名ファイルがあれば Err。移動先のパスを返す。
    pub fn move_draft_to_published(
        &self,
        draft_name: &str,
        published_name: &str,
    ) -> Result<PathBuf> {
        let src = self.config.drafts_dir.join(draft_name);
        if !self.fs.exists(&src) {
            return Err(BpmError::DraftNotFound(draft_name.to_string()));
        }

        let dst = self.config.posts_dir.join(published_name);
        if self.fs.exists(&dst) {
            return Err(BpmError::PostExists(published_name.to_string()));
        }

        self.fs.rename(&src, &dst)?;
        Ok(dst)
    }

    // ========================================
    // 公開済み
    // ========================================

    /// 公開済み投稿の一覧を取得（name昇順）
    pub fn list_published(&self) -> Result<Vec<DocumentEntry>> {
        self.list_documents(&self.config.posts_dir)
    }

    /// 公開済み投稿の本文を読み込む
    pub fn read_published(&self, name: &str) -> Result<String> {
        self.fs.read_to_string(&self.config.posts_dir.join(name))
    }

    // ========================================
    // 内部
    // ========================================

    fn template_path(&self, name: &str) -> PathBuf {
        self.config.templates_dir.join(format!("{name}.md"))
    }

    fn list_documents(&self, dir: &Path) -> Result<Vec<DocumentEntry>> {
        if !self.fs.is_dir(dir) {
            return Ok(Vec::new());
        }

        let mut documents: Vec<DocumentEntry> = Vec::new();
        for entry in self.fs.read_dir(dir)? {
            if !entry.is_file() || !entry.path.is_markdown() {
                continue;
            }
            let name = match entry.path.file_name() {
                Some(n) => n.to_string_lossy().to_string(),
                None => continue,
            };
            let mtime = self.fs.mtime(&entry.path)?;
            documents.push(DocumentEntry {
                name,
                path: entry.path,
                mtime,
            });
        }

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(documents)
    }
}

/// ファイル語幹をメニュー表示用ラベルに変換する
///
/// ハイフンを空白にし、先頭だけ大文字化する（"post-with-images" → "Post with images"）。
fn humanize(stem: &str) -> String {
    let spaced = stem.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
