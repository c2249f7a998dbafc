//! 편집 명령을 적용하는 호스트 편집기 모델
//!
//! 확정된 텍스트와 아직 확정되지 않은 조합 영역을 따로 관리합니다.

use crate::core::edit::EditInstruction;

/// 확정 텍스트 + 조합 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    committed: String,
    composing: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 편집 명령 하나를 적용
    pub fn apply(&mut self, instruction: &EditInstruction) {
        match *instruction {
            EditInstruction::Start(c) => {
                self.finish_composing();
                self.composing.push(c);
            }
            EditInstruction::Replace(c) => {
                self.composing.clear();
                self.composing.push(c);
            }
            EditInstruction::CommitAndStart(c) => {
                self.finish_composing();
                self.composing.push(c);
            }
            EditInstruction::RemoveLast => {
                self.composing.pop();
            }
            EditInstruction::DeleteKeyPassthrough => self.delete_backward(),
        }
    }

    /// 여러 편집 명령을 순서대로 적용
    pub fn apply_all(&mut self, instructions: &[EditInstruction]) {
        for instruction in instructions {
            self.apply(instruction);
        }
    }

    /// 조합 영역을 확정 텍스트로 옮김
    pub fn finish_composing(&mut self) {
        if !self.composing.is_empty() {
            self.committed.push_str(&self.composing);
            self.composing.clear();
        }
    }

    /// 조합 영역과 무관한 문자를 커서 위치에 넣음
    pub fn insert(&mut self, c: char) {
        self.finish_composing();
        self.committed.push(c);
    }

    /// 삭제 키: 조합 영역이 있으면 그 글자를, 없으면 확정 텍스트의 마지막 글자를 지움
    /// 지울 글자가 없으면 아무것도 하지 않음
    pub fn delete_backward(&mut self) {
        if self.composing.pop().is_none() {
            self.committed.pop();
        }
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// 조합 중인 글자 (없으면 None)
    pub fn composing(&self) -> Option<char> {
        self.composing.chars().last()
    }

    /// 화면에 보이는 전체 텍스트
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.committed.len() + self.composing.len());
        text.push_str(&self.committed);
        text.push_str(&self.composing);
        text
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.composing.is_empty()
    }
}
