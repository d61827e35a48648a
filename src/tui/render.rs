//! メニュー描画
//!
//! 確保済みのスクリーン領域に選択肢を上書き描画する。
//! 行のテキストは選択状態によらず同一で、強調は反転スタイルのみで表現する。
//! 全行を同じパディングで書き直すため、前回の強調が残ることはない。

use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// 1行分の表示テキストを組み立てる
pub fn row_text(label: &str) -> String {
    format!("  {label}  ")
}

/// 選択肢ブロック全体を描画する
///
/// 選択肢 `i` は `origin_row + i` 行目の桁0から描画される。
pub fn draw(
    out: &mut impl Write,
    origin_row: u16,
    options: &[String],
    selected: usize,
) -> io::Result<()> {
    for (i, label) in options.iter().enumerate() {
        out.queue(MoveTo(0, origin_row + i as u16))?;
        let row = row_text(label);
        if i == selected {
            out.queue(PrintStyledContent(row.reverse()))?;
        } else {
            out.queue(Print(row))?;
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
