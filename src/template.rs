//! テンプレート置換
//!
//! `{{ key }}` 形式のプレースホルダを値に置き換える。

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// プレースホルダにマッチする正規表現（空白は許容）
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap())
}

/// プレースホルダを置換する
///
/// マッピングにないプレースホルダはそのまま残す。
pub fn apply_replacements(text: &str, replacements: &BTreeMap<String, String>) -> String {
    placeholder_re()
        .replace_all(text, |caps: &regex::Captures| {
            match replacements.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .to_string()
}

/// 未解決のプレースホルダ名を列挙する（出現順、重複排除）
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_re().captures_iter(text) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// タイトルをファイル名向けスラグに変換する
///
/// 英数字は小文字化して残し、それ以外の文字の連続はハイフン1つにまとめる。
/// 先頭・末尾のハイフンは付かない。
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
