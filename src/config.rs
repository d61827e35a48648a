//! ブログワークスペース設定
//!
//! ルートディレクトリの解決と blog.toml の読み込みを行う。
//! 優先順位: --dir フラグ > BPM_ROOT 環境変数 > カレントディレクトリ

use crate::env::EnvVar;
use crate::error::Result;
use crate::path_ext::PathExt;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// ルート直下の設定ファイル名
pub const CONFIG_FILE: &str = "blog.toml";

/// ルート指定の環境変数
pub const ROOT_ENV_VAR: &str = "BPM_ROOT";

pub const DEFAULT_TEMPLATES_DIR: &str = "_templates";
pub const DEFAULT_DRAFTS_DIR: &str = "_drafts";
pub const DEFAULT_POSTS_DIR: &str = "_posts";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// blog.toml の内容
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub paths: RawPaths,
    #[serde(default)]
    pub post: RawPost,
}

/// [paths] セクション
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPaths {
    pub templates: Option<String>,
    pub drafts: Option<String>,
    pub posts: Option<String>,
}

/// [post] セクション
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPost {
    pub date_format: Option<String>,
}

/// 解決済みワークスペース設定
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub templates_dir: PathBuf,
    pub drafts_dir: PathBuf,
    pub posts_dir: PathBuf,
    /// 公開日のフォーマット（chrono書式、{{date}} と公開ファイル名の両方に使う）
    pub date_format: String,
}

impl Config {
    /// ワークスペース設定を解決する
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        let root = match dir {
            Some(d) => d.to_path_buf(),
            None => match EnvVar::path(ROOT_ENV_VAR) {
                Some(p) => p,
                None => std::env::current_dir()?,
            },
        };
        let raw = load_raw(&root)?;
        Ok(Self::from_raw(root, raw))
    }

    /// RawConfig からパスを確定させる
    fn from_raw(root: PathBuf, raw: RawConfig) -> Self {
        let templates_dir = root.join_or(raw.paths.templates.as_deref(), DEFAULT_TEMPLATES_DIR);
        let drafts_dir = root.join_or(raw.paths.drafts.as_deref(), DEFAULT_DRAFTS_DIR);
        let posts_dir = root.join_or(raw.paths.posts.as_deref(), DEFAULT_POSTS_DIR);
        let date_format = raw
            .post
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        Self {
            root,
            templates_dir,
            drafts_dir,
            posts_dir,
            date_format,
        }
    }

    /// 表示用にルートからの相対パスへ変換する
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// blog.toml を読み込む（存在しなければデフォルト）
fn load_raw(root: &Path) -> Result<RawConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(RawConfig::default());
    }
    let text = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
