//! 영문 키 입력 -> 한글 통합 변환기

use crate::session::{InputMode, InputSession};

/// 백스페이스로 취급하는 제어 문자
pub const BACKSPACE: char = '\u{8}';

/// 영문 키 입력 문자열을 한글 문자열로 변환
/// 영문 알파벳이 아닌 문자(숫자, 특수문자, 공백)는 그대로 유지하고,
/// `BACKSPACE`는 자모 단위로 지웁니다.
pub fn convert(input: &str) -> String {
    let mut session = InputSession::new(InputMode::Hangul);

    for c in input.chars() {
        if c == BACKSPACE {
            session.backspace();
        } else {
            session.type_char(c);
        }
    }

    session.finish()
}
