//! bpm init コマンド
//!
//! ワークスペースのディレクトリとスターターテンプレートを配置する。
//! 既存のファイルには触れないので、何度実行しても安全。

use crate::config::{Config, CONFIG_FILE};
use crate::output::CommandSummary;
use crate::store::ContentStore;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Workspace root (defaults to BPM_ROOT or the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// スターターテンプレート（ファイル語幹と本文）
const STARTER_TEMPLATES: [(&str, &str); 4] = [
    ("empty-post", EMPTY_POST),
    ("post-with-text", POST_WITH_TEXT),
    ("post-with-images", POST_WITH_IMAGES),
    ("post-with-everything", POST_WITH_EVERYTHING),
];

const EMPTY_POST: &str = "\
---
title: \"{{title}}\"
---
";

const POST_WITH_TEXT: &str = "\
---
title: \"{{title}}\"
---

## Introduction

Write your opening paragraph here.

## Details

Flesh out the body of the post.
";

const POST_WITH_IMAGES: &str = "\
---
title: \"{{title}}\"
---

![cover](/images/{{slug}}/cover.png)

Describe the cover image, then add more images as needed:

![detail](/images/{{slug}}/detail.png)
";

const POST_WITH_EVERYTHING: &str = "\
---
title: \"{{title}}\"
---

![cover](/images/{{slug}}/cover.png)

## Introduction

Write your opening paragraph here.

## Details

Flesh out the body of the post.

```text
Code or command output goes here.
```

## Wrapping up

Close with a takeaway.
";

/// blog.toml の初期内容（すべてデフォルト値のコメント）
const CONFIG_TEMPLATE: &str = "\
# bpm workspace configuration

[paths]
# templates = \"_templates\"
# drafts = \"_drafts\"
# posts = \"_posts\"

[post]
# date_format = \"%Y-%m-%d\"
";

pub fn run(args: Args) -> Result<(), String> {
    let config = Config::resolve(args.dir.as_deref()).map_err(|e| e.to_string())?;
    let store = ContentStore::new(config);

    // 1. ディレクトリを作成
    store.ensure_layout().map_err(|e| e.to_string())?;

    // 2. スターターテンプレートを配置（既存はスキップ）
    let mut created = 0;
    let mut skipped = 0;
    for (name, content) in STARTER_TEMPLATES {
        if store.install_template(name, content).map_err(|e| e.to_string())? {
            created += 1;
        } else {
            skipped += 1;
        }
    }

    // 3. blog.toml がなければ置く
    let config_path = store.config().root.join(CONFIG_FILE);
    if !config_path.exists() {
        std::fs::write(&config_path, CONFIG_TEMPLATE).map_err(|e| e.to_string())?;
    }

    CommandSummary::format_install(created, skipped).print();
    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
