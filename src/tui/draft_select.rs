//! 下書き選択メニュー

use crate::error::Result;
use crate::store::DocumentEntry;
use crate::tui::select_option;

/// 下書き選択メニューを表示し、選ばれたエントリを返す
pub fn select_draft(drafts: &[DocumentEntry]) -> Result<&DocumentEntry> {
    println!("Select a draft to release (up/down: move, enter: confirm):");

    let labels: Vec<String> = drafts.iter().map(|d| d.name.clone()).collect();
    let index = select_option(&labels)?;
    Ok(&drafts[index])
}
