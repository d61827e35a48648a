//! キー入力デコーダ
//!
//! crossterm のイベントを選択メニューのキーイベントに写像する。
//! 入力バックエンドを差し替えられるよう、デコードはここに分離している。

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// 選択メニューが解釈するキーイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
    Interrupt,
    Ignored,
}

/// イベントをデコードする
///
/// 矢印上下・Enter・Ctrl-C 以外はすべて Ignored（状態を変えない）。
pub fn decode(event: &Event) -> MenuKey {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Up => MenuKey::Up,
            KeyCode::Down => MenuKey::Down,
            KeyCode::Enter => MenuKey::Confirm,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                MenuKey::Interrupt
            }
            _ => MenuKey::Ignored,
        },
        _ => MenuKey::Ignored,
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod tests;
