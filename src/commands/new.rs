//! bpm new コマンド
//!
//! テンプレートから新しい下書きを作成する。
//! テンプレート未指定のときは選択メニューを表示する。

use crate::config::Config;
use crate::error::{BpmError, Result};
use crate::output::CommandSummary;
use crate::store::{ContentStore, TemplateEntry};
use crate::template::{apply_replacements, slugify, unresolved_placeholders};
use crate::tui;
use chrono::Local;
use clap::Parser;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Post title (prompted interactively when omitted)
    pub title: Option<String>,

    /// Template to use, by file stem (interactive menu when omitted)
    #[arg(long)]
    pub template: Option<String>,

    /// File name stem for the draft (derived from the title when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Workspace root (defaults to BPM_ROOT or the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let config = Config::resolve(args.dir.as_deref()).map_err(|e| e.to_string())?;
    let store = ContentStore::new(config);

    // 1. テンプレートを決める
    let templates = store.list_templates().map_err(|e| e.to_string())?;
    if templates.is_empty() {
        return Err(
            "No templates found. Run `bpm init` to install the starter templates".to_string(),
        );
    }
    let template =
        pick_template(&templates, args.template.as_deref()).map_err(|e| e.to_string())?;

    // 2. タイトルとスラグを決める
    let title = match args.title {
        Some(title) => title,
        None => prompt_title().map_err(|e| e.to_string())?,
    };
    let slug = args.slug.unwrap_or_else(|| slugify(&title));
    if slug.is_empty() {
        return Err(BpmError::InvalidTitle(format!(
            "cannot derive a file name from {title:?}; pass --slug"
        ))
        .to_string());
    }

    // 3. 置換して書き込む
    let text = store.read_template(&template.name).map_err(|e| e.to_string())?;
    let date = Local::now().format(&store.config().date_format).to_string();
    let rendered = apply_replacements(&text, &replacements(&title, &date, &slug));

    let draft_name = format!("{slug}.md");
    let path = store
        .write_draft(&draft_name, &rendered)
        .map_err(|e| e.to_string())?;

    // 4. 結果を表示
    CommandSummary::success(format!(
        "Draft created: {}",
        store.config().display_path(&path)
    ))
    .print();
    for name in unresolved_placeholders(&rendered) {
        println!("{} unresolved placeholder: {{{{{name}}}}}", "•".yellow());
    }

    Ok(())
}

/// 置換マッピングを組み立てる
fn replacements(title: &str, date: &str, slug: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("title".to_string(), title.to_string()),
        ("date".to_string(), date.to_string()),
        ("slug".to_string(), slug.to_string()),
    ])
}

/// 指定があれば名前で探し、なければ選択メニューを表示する
fn pick_template<'a>(
    templates: &'a [TemplateEntry],
    requested: Option<&str>,
) -> Result<&'a TemplateEntry> {
    match requested {
        Some(name) => templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| BpmError::TemplateNotFound(name.to_string())),
        None => tui::select_template(templates),
    }
}

/// タイトルを対話的に入力させる
fn prompt_title() -> Result<String> {
    print!("Post title: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let title = line.trim().to_string();
    if title.is_empty() {
        return Err(BpmError::InvalidTitle("title must not be empty".to_string()));
    }
    Ok(title)
}

#[cfg(test)]
#[path = "new_test.rs"]
mod tests;
