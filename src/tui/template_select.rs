//! テンプレート選択メニュー

use crate::error::Result;
use crate::store::TemplateEntry;
use crate::tui::select_option;

/// テンプレート選択メニューを表示し、選ばれたエントリを返す
pub fn select_template(templates: &[TemplateEntry]) -> Result<&TemplateEntry> {
    println!("Select a template (up/down: move, enter: confirm):");

    let labels: Vec<String> = templates.iter().map(|t| t.label.clone()).collect();
    let index = select_option(&labels)?;
    Ok(&templates[index])
}

#[cfg(test)]
mod tests {
    // メニューのテストは実際のターミナルが必要なためスキップ
}
