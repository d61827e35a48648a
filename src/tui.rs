//! TUI (Terminal User Interface) コンポーネント
//!
//! crossterm を使用した選択メニューを提供する。
//! メニューは代替スクリーンを使わず、確保した行領域だけをその場で再描画する。

mod draft_select;
mod key;
mod menu;
mod render;
mod state;
mod template_select;
mod terminal;

pub use draft_select::select_draft;
pub use menu::{select_option, MAX_OPTIONS};
pub use template_select::select_template;
