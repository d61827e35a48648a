use super::*;
use crossterm::event::KeyEvent;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_decode_arrows() {
    assert_eq!(decode(&press(KeyCode::Up)), MenuKey::Up);
    assert_eq!(decode(&press(KeyCode::Down)), MenuKey::Down);
}

#[test]
fn test_decode_confirm() {
    assert_eq!(decode(&press(KeyCode::Enter)), MenuKey::Confirm);
}

#[test]
fn test_decode_interrupt() {
    let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(decode(&event), MenuKey::Interrupt);
}

#[test]
fn test_decode_plain_c_is_ignored() {
    assert_eq!(decode(&press(KeyCode::Char('c'))), MenuKey::Ignored);
}

#[test]
fn test_decode_other_keys_ignored() {
    assert_eq!(decode(&press(KeyCode::Left)), MenuKey::Ignored);
    assert_eq!(decode(&press(KeyCode::Right)), MenuKey::Ignored);
    assert_eq!(decode(&press(KeyCode::Esc)), MenuKey::Ignored);
    assert_eq!(decode(&press(KeyCode::Char('j'))), MenuKey::Ignored);
    assert_eq!(decode(&press(KeyCode::Tab)), MenuKey::Ignored);
}

#[test]
fn test_decode_release_is_ignored() {
    let event = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Up,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert_eq!(decode(&event), MenuKey::Ignored);
}

#[test]
fn test_decode_non_key_events_ignored() {
    assert_eq!(decode(&Event::Resize(80, 24)), MenuKey::Ignored);
    assert_eq!(decode(&Event::FocusGained), MenuKey::Ignored);
}
