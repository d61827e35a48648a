//! bpm release コマンド
//!
//! 下書きのフロントマターに公開日を刻印し、`<date>-<stem>.md` として
//! 公開ディレクトリへ移動する。下書き未指定のときは選択メニューを表示する。

use crate::config::Config;
use crate::error::{BpmError, Result};
use crate::output::CommandSummary;
use crate::post;
use crate::store::{ContentStore, DocumentEntry};
use crate::tui;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Draft file name (interactive menu when omitted)
    pub name: Option<String>,

    /// Publication date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Workspace root (defaults to BPM_ROOT or the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let config = Config::resolve(args.dir.as_deref()).map_err(|e| e.to_string())?;
    let store = ContentStore::new(config);

    // 1. 下書きを決める
    let drafts = store.list_drafts().map_err(|e| e.to_string())?;
    if drafts.is_empty() {
        CommandSummary::notice("No drafts found").print();
        return Ok(());
    }
    let draft = pick_draft(&drafts, args.name.as_deref())
        .map_err(|e| e.to_string())?
        .clone();

    // 2. 公開日を決めてフロントマターに刻印
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let date_str = date.format(&store.config().date_format).to_string();

    let text = store.read_draft(&draft.name).map_err(|e| e.to_string())?;
    let stamped = post::stamp_date(&text, &date_str).map_err(|e| e.to_string())?;
    store
        .update_draft(&draft.name, &stamped)
        .map_err(|e| e.to_string())?;

    // 3. 公開ディレクトリへ移動
    let published_name = post::published_filename(&date_str, draft.stem());
    let path = store
        .move_draft_to_published(&draft.name, &published_name)
        .map_err(|e| e.to_string())?;

    CommandSummary::success(format!(
        "Released: {}",
        store.config().display_path(&path)
    ))
    .print();

    Ok(())
}

/// 指定があれば名前で探し、なければ選択メニューを表示する
///
/// 名前は `my-post.md` でも語幹の `my-post` でもよい。
fn pick_draft<'a>(drafts: &'a [DocumentEntry], requested: Option<&str>) -> Result<&'a DocumentEntry> {
    match requested {
        Some(name) => drafts
            .iter()
            .find(|d| d.name == name || d.stem() == name)
            .ok_or_else(|| BpmError::DraftNotFound(name.to_string())),
        None => tui::select_draft(drafts),
    }
}

#[cfg(test)]
#[path = "release_test.rs"]
mod tests;
