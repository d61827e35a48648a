use clap::{Parser, Subcommand};

use crate::commands::{init, list, new, release};

#[derive(Debug, Parser)]
#[command(name = "bpm")]
#[command(about = "Blog Post Manager CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ワークスペースの初期化
    Init(init::Args),

    /// テンプレートから下書きを作成
    New(new::Args),

    /// 下書きを公開
    Release(release::Args),

    /// 下書き・公開済み投稿の一覧
    List(list::Args),
}
