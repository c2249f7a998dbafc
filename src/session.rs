//! 입력 세션: 한/영 모드 전환과 키 라우팅
//!
//! 호스트 편집기의 포커스 하나에 세션 하나를 둡니다. 한글 모드에서 영문 알파벳은
//! 조합 FSM으로, 그 밖의 문자는 조합을 끝낸 뒤 그대로 입력됩니다.

use crate::core::edit::EditInstruction;
use crate::core::hangul_fsm::{HangulFsm, KeyEvent};
use crate::core::jamo_mapper::letter_key;
use crate::core::text_buffer::TextBuffer;

/// 입력 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    English,
    Hangul,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::English => InputMode::Hangul,
            InputMode::Hangul => InputMode::English,
        }
    }
}

/// 편집 포커스 하나에 묶인 입력 세션
#[derive(Debug, Clone)]
pub struct InputSession {
    mode: InputMode,
    fsm: HangulFsm,
    buffer: TextBuffer,
}

impl InputSession {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            fsm: HangulFsm::new(),
            buffer: TextBuffer::new(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn fsm(&self) -> &HangulFsm {
        &self.fsm
    }

    /// 문자 하나 입력
    /// 반환: 조합 FSM이 낸 편집 명령 (FSM을 거치지 않은 문자는 빈 목록)
    pub fn type_char(&mut self, c: char) -> Vec<EditInstruction> {
        if self.mode == InputMode::Hangul {
            if let Some((letter, shift)) = letter_key(c) {
                let edits = self.fsm.handle(KeyEvent::JamoKey { letter, shift });
                self.buffer.apply_all(&edits);
                return edits;
            }
        }

        // 한글 키가 아니면 조합을 끝내고 그대로 입력
        self.end_editing();
        self.buffer.insert(c);
        Vec::new()
    }

    /// 백스페이스
    pub fn backspace(&mut self) -> Vec<EditInstruction> {
        match self.mode {
            InputMode::Hangul => {
                let edits = self.fsm.handle(KeyEvent::Backspace);
                self.buffer.apply_all(&edits);
                edits
            }
            InputMode::English => {
                self.buffer.delete_backward();
                Vec::new()
            }
        }
    }

    /// 한/영 전환 (조합 중이던 글자는 확정)
    pub fn toggle_mode(&mut self) -> InputMode {
        self.end_editing();
        self.mode = self.mode.toggled();
        log::info!("입력 모드 전환: {:?}", self.mode);
        self.mode
    }

    /// 조합 영역을 확정하고 FSM 초기화
    /// 포커스 이동, 커서 점프, 모드 전환 시 호출
    pub fn end_editing(&mut self) {
        self.buffer.finish_composing();
        self.fsm.handle(KeyEvent::Reset);
    }

    /// 화면에 보이는 전체 텍스트
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn composing(&self) -> Option<char> {
        self.buffer.composing()
    }

    /// 세션 종료 및 최종 텍스트 반환
    pub fn finish(mut self) -> String {
        self.end_editing();
        self.buffer.committed().to_string()
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new(InputMode::Hangul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hangul_fsm::CompositionState;

    fn type_str(session: &mut InputSession, input: &str) {
        for c in input.chars() {
            session.type_char(c);
        }
    }

    #[test]
    fn test_hangul_mode_composes() {
        let mut session = InputSession::new(InputMode::Hangul);
        type_str(&mut session, "gksrm");
        assert_eq!(session.text(), "한그");
        assert_eq!(session.composing(), Some('그'));
        type_str(&mut session, "f");
        assert_eq!(session.finish(), "한글");
    }

    #[test]
    fn test_non_letter_ends_composition() {
        let mut session = InputSession::new(InputMode::Hangul);
        type_str(&mut session, "rk1");
        assert_eq!(session.fsm().state(), CompositionState::Empty);
        assert_eq!(session.composing(), None);
        // 확정된 뒤에는 새 음절로 시작
        type_str(&mut session, "k");
        assert_eq!(session.finish(), "가1ㅏ");
    }

    #[test]
    fn test_english_mode_passthrough() {
        let mut session = InputSession::new(InputMode::English);
        type_str(&mut session, "rk");
        session.backspace();
        assert_eq!(session.finish(), "r");
    }

    #[test]
    fn test_toggle_mode_commits() {
        let mut session = InputSession::new(InputMode::Hangul);
        type_str(&mut session, "rk");
        assert_eq!(session.toggle_mode(), InputMode::English);
        type_str(&mut session, "k");
        assert_eq!(session.toggle_mode(), InputMode::Hangul);
        type_str(&mut session, "k");
        assert_eq!(session.finish(), "가kㅏ");
    }

    #[test]
    fn test_backspace_after_end_editing_deletes_committed() {
        let mut session = InputSession::new(InputMode::Hangul);
        type_str(&mut session, "rksk");
        session.end_editing();
        let edits = session.backspace();
        assert_eq!(edits, vec![EditInstruction::DeleteKeyPassthrough]);
        assert_eq!(session.text(), "가");
    }

    #[test]
    fn test_backspace_undoes_one_jamo() {
        let mut session = InputSession::new(InputMode::Hangul);
        type_str(&mut session, "dkfr");
        assert_eq!(session.text(), "앍");
        session.backspace();
        assert_eq!(session.text(), "알");
        session.backspace();
        assert_eq!(session.text(), "아");
        session.backspace();
        assert_eq!(session.text(), "ㅇ");
        session.backspace();
        assert_eq!(session.text(), "");
    }
}
