//! ターミナルモード管理
//!
//! rawモード + カーソル非表示を「取得したら必ず返す」リソースとして扱う。
//! 通常終了・エラー・割り込みのどの経路でも復元する。

use crate::error::{BpmError, Result};
use crossterm::cursor::{self, Hide, Show};
use crossterm::terminal;
use crossterm::tty::IsTty;
use crossterm::ExecutableCommand;
use std::io::{stdin, stdout};

/// 標準入出力がターミナルに接続されているか検証する
pub fn require_tty() -> Result<()> {
    if !stdin().is_tty() || !stdout().is_tty() {
        return Err(BpmError::TerminalUnavailable(
            "stdin/stdout is not a terminal".to_string(),
        ));
    }
    Ok(())
}

/// rawモード + カーソル非表示のスコープ付きガード
///
/// Drop で必ず元に戻す。SIGINT では Drop が走らないため、
/// unix ではシグナルハンドラからも同じ復元処理を呼ぶ。
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// rawモードへ切り替え、カーソルを隠す
    ///
    /// 途中で失敗した場合はターミナルを元に戻してから Err を返す。
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| BpmError::TerminalUnavailable(e.to_string()))?;

        if let Err(e) = stdout().execute(Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(BpmError::TerminalUnavailable(e.to_string()));
        }

        install_interrupt_handler();
        Ok(Self { restored: false })
    }

    /// ターミナルを元に戻す（冪等）
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        restore_terminal();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// カーソル再表示とrawモード解除
///
/// Drop とシグナルハンドラの両方から呼ばれる。
fn restore_terminal() {
    let _ = stdout().execute(Show);
    let _ = terminal::disable_raw_mode();
}

/// メニュー先頭行（origin row）を割り出す
///
/// 確保した空行ブロック直後のカーソル行から選択肢数を引く。
/// ブロックの下端を基準にするため、確保時に画面がスクロールしても正しい。
pub fn origin_row(option_count: usize) -> Result<u16> {
    let (_, row) = cursor::position().map_err(|e| BpmError::TerminalUnavailable(e.to_string()))?;
    row.checked_sub(option_count as u16).ok_or_else(|| {
        BpmError::TerminalUnavailable(format!("terminal too short for {option_count} options"))
    })
}

/// SIGINT ハンドラを登録する
///
/// rawモード中の Ctrl-C はキーイベントとして届くので、ここで捕まえるのは
/// 外部から送られた割り込みのみ。復元してから即座にプロセスを終える。
#[cfg(unix)]
fn install_interrupt_handler() {
    let handler = handle_interrupt as extern "C" fn(libc::c_int);
    unsafe {
        libc::signal(libc::SIGINT, handler as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
fn install_interrupt_handler() {}

#[cfg(unix)]
extern "C" fn handle_interrupt(_signal: libc::c_int) {
    restore_terminal();
    unsafe { libc::_exit(130) };
}
