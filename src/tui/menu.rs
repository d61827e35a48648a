//! 選択メニュー本体
//!
//! 画面の固定領域に選択肢を描画し、上下キーで選択、Enterで確定する。
//! 1回の呼び出しがターミナルモードの取得から解放までを所有する。

use super::key::{self, MenuKey};
use super::render;
use super::state::MenuState;
use super::terminal::{self, TerminalGuard};
use crate::error::{BpmError, Result};
use crossterm::cursor::MoveTo;
use crossterm::event;
use crossterm::style::Print;
use crossterm::ExecutableCommand;
use std::io::{stdout, Write};

/// 選択肢数の上限
pub const MAX_OPTIONS: usize = 256;

/// 入力ループの終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Confirmed(usize),
    Interrupted,
}

/// 選択メニューを表示し、確定された選択肢の0始まりインデックスを返す
///
/// 選択肢は1〜256件。ラベルに制御文字は使えない。どちらの違反も
/// ターミナルモードを変更する前に弾く。見出しが必要なら呼び出し側が
/// 事前に出力しておく（メニューは選択肢の行だけを描画する）。
pub fn select_option(options: &[String]) -> Result<usize> {
    validate_options(options)?;
    terminal::require_tty()?;

    // 選択肢の行数だけ空行を確保する。以降はこの領域だけを再描画するので、
    // メニューより上の出力がスクロールで巻き込まれることはない。
    let mut out = stdout();
    for _ in 0..options.len() {
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let mut guard = TerminalGuard::acquire()?;
    let origin_row = terminal::origin_row(options.len())?;

    let outcome = run_loop(&mut out, origin_row, options)?;

    // メニューの下の行へ抜けてから復元する
    out.execute(MoveTo(0, origin_row + options.len() as u16))?;
    out.execute(Print("\r\n"))?;
    guard.restore();

    match outcome {
        Outcome::Confirmed(index) => Ok(index),
        // 割り込みは呼び出し元に戻らない。復元済みなのでそのまま終了する。
        Outcome::Interrupted => std::process::exit(130),
    }
}

/// 描画→入力→遷移のループ
fn run_loop(out: &mut impl Write, origin_row: u16, options: &[String]) -> Result<Outcome> {
    let mut state = MenuState::new(options.len());
    loop {
        render::draw(out, origin_row, options, state.selected())?;
        let menu_key = key::decode(&event::read()?);
        if let Some(outcome) = step(&mut state, menu_key) {
            return Ok(outcome);
        }
    }
}

/// 1キーイベント分の状態遷移
///
/// Up/Down はラップアラウンドで移動、Confirm/Interrupt でループを抜ける。
/// それ以外は何もしない。
fn step(state: &mut MenuState, menu_key: MenuKey) -> Option<Outcome> {
    match menu_key {
        MenuKey::Up => {
            state.move_up();
            None
        }
        MenuKey::Down => {
            state.move_down();
            None
        }
        MenuKey::Confirm => Some(Outcome::Confirmed(state.selected())),
        MenuKey::Interrupt => Some(Outcome::Interrupted),
        MenuKey::Ignored => None,
    }
}

/// 選択肢の事前検証
fn validate_options(options: &[String]) -> Result<()> {
    if options.is_empty() || options.len() > MAX_OPTIONS {
        return Err(BpmError::InvalidOptionCount {
            count: options.len(),
        });
    }
    if let Some(label) = options.iter().find(|l| l.chars().any(char::is_control)) {
        return Err(BpmError::InvalidOptionLabel(label.clone()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
