//! 投稿ドキュメント処理
//!
//! Jekyll互換の `---` 区切りYAMLフロントマターを扱う。

use crate::error::Result;
use serde_yaml::{Mapping, Value};

/// フロントマターと本文に分割する
///
/// 先頭の `---` 行から次の `---` 行までをYAML部として返す。
/// フロントマターがないドキュメントは None。
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---\n")?;
    if let Some(end) = rest.find("\n---\n") {
        return Some((&rest[..end], &rest[end + 5..]));
    }
    // 閉じの --- がファイル末尾で改行なしの場合（本文なし）
    if let Some(yaml) = rest.strip_suffix("\n---") {
        return Some((yaml, ""));
    }
    None
}

/// フロントマターの `date:` を設定する
///
/// 既存のキーと順序は保持する。フロントマターがないドキュメントには
/// `date` のみの最小のフロントマターを付ける。
pub fn stamp_date(text: &str, date: &str) -> Result<String> {
    let (mut mapping, body) = match split_front_matter(text) {
        Some((yaml, body)) => {
            let mapping: Mapping = serde_yaml::from_str(yaml)?;
            (mapping, body)
        }
        None => (Mapping::new(), text),
    };

    mapping.insert(
        Value::String("date".to_string()),
        Value::String(date.to_string()),
    );

    let yaml = serde_yaml::to_string(&mapping)?;
    Ok(format!("---\n{yaml}---\n{body}"))
}

/// フロントマターの `title:` を取得する
pub fn title_of(text: &str) -> Option<String> {
    let (yaml, _) = split_front_matter(text)?;
    let mapping: Mapping = serde_yaml::from_str(yaml).ok()?;
    mapping
        .get(Value::String("title".to_string()))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// 公開ファイル名を組み立てる（`<date>-<stem>.md`）
pub fn published_filename(date: &str, stem: &str) -> String {
    format!("{date}-{stem}.md")
}

#[cfg(test)]
#[path = "post_test.rs"]
mod tests;
