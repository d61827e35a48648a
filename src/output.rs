use owo_colors::OwoColorize;

/// コマンド結果の1行サマリ
pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// 成功
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            prefix: "✓".green().to_string(),
            message: message.into(),
        }
    }

    /// 注意（何も行わなかった場合など）
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            prefix: "•".yellow().to_string(),
            message: message.into(),
        }
    }

    /// テンプレート配置結果のサマリ
    pub fn format_install(created: usize, skipped: usize) -> Self {
        match (created, skipped) {
            (0, _) => Self::notice("All templates already present"),
            (c, 0) => Self::success(format!("{} template(s) installed", c.green())),
            (c, s) => Self::success(format!(
                "{} template(s) installed, {} already present",
                c.green(),
                s.yellow()
            )),
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}
