//! bpm list コマンド
//!
//! 下書き・公開済み投稿の一覧を表示する。

use crate::config::Config;
use crate::post;
use crate::store::{ContentStore, DocumentEntry};
use chrono::{DateTime, Local};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Debug, Parser)]
pub struct Args {
    /// List published posts instead of drafts
    #[arg(long)]
    pub published: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only file names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,

    /// Workspace root (defaults to BPM_ROOT or the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// 一覧1行分の出力用構造体
#[derive(Debug, Clone, Serialize)]
struct DocumentRow {
    name: String,
    title: Option<String>,
    modified: String,
}

pub fn run(args: Args) -> Result<(), String> {
    let config = Config::resolve(args.dir.as_deref()).map_err(|e| e.to_string())?;
    let store = ContentStore::new(config);

    // 1. 一覧を取得（name昇順はストア側で保証される）
    let documents = if args.published {
        store.list_published().map_err(|e| e.to_string())?
    } else {
        store.list_drafts().map_err(|e| e.to_string())?
    };

    // 2. フロントマターのタイトルを引いて出力用の行へ変換
    let rows = build_rows(&store, &documents, args.published);

    // 3. 出力
    if args.json {
        print_json(&rows)?;
    } else if args.simple {
        print_simple(&rows, args.published);
    } else {
        print_table(&rows, args.published);
    }

    Ok(())
}

/// 一覧エントリを出力用の行に変換する
///
/// タイトルはフロントマターの `title:` から取る。本文が読めない・
/// フロントマターがない場合は None のままにする。
fn build_rows(
    store: &ContentStore,
    documents: &[DocumentEntry],
    published: bool,
) -> Vec<DocumentRow> {
    documents
        .iter()
        .map(|doc| {
            let text = if published {
                store.read_published(&doc.name).ok()
            } else {
                store.read_draft(&doc.name).ok()
            };
            DocumentRow {
                name: doc.name.clone(),
                title: text.as_deref().and_then(post::title_of),
                modified: format_mtime(doc.mtime),
            }
        })
        .collect()
}

/// 更新時刻をローカル時刻で表示用に整形する
fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn empty_message(published: bool) -> &'static str {
    if published {
        "No published posts found"
    } else {
        "No drafts found"
    }
}

fn print_table(rows: &[DocumentRow], published: bool) {
    if rows.is_empty() {
        println!("{}", empty_message(published));
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Title", "Modified"]);

    for row in rows {
        table.add_row(vec![
            row.name.as_str(),
            row.title.as_deref().unwrap_or("-"),
            row.modified.as_str(),
        ]);
    }

    println!("{table}");
}

fn print_json(rows: &[DocumentRow]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(rows)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize documents: {}", e))
}

fn print_simple(rows: &[DocumentRow], published: bool) {
    if rows.is_empty() {
        println!("{}", empty_message(published));
        return;
    }
    for row in rows {
        println!("{}", row.name);
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
