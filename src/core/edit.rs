//! 조합 결과를 호스트 편집기에 전달하는 편집 명령

/// 호스트 편집기가 조합 영역에 적용할 편집 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInstruction {
    /// 새 조합 영역을 열고 한 글자를 넣음
    Start(char),
    /// 현재 조합 영역의 글자를 교체
    Replace(char),
    /// 현재 조합 영역을 확정하고 새 조합 영역을 엶
    CommitAndStart(char),
    /// 조합 영역의 마지막 글자를 지움
    RemoveLast,
    /// 조합 중이 아니므로 삭제 키를 그대로 편집기에 전달
    DeleteKeyPassthrough,
}

impl EditInstruction {
    /// 명령이 조합 영역에 남기는 글자
    pub fn code_point(&self) -> Option<char> {
        match self {
            EditInstruction::Start(c)
            | EditInstruction::Replace(c)
            | EditInstruction::CommitAndStart(c) => Some(*c),
            EditInstruction::RemoveLast | EditInstruction::DeleteKeyPassthrough => None,
        }
    }
}

pub(crate) fn start(c: char) -> Vec<EditInstruction> {
    vec![EditInstruction::Start(c)]
}

pub(crate) fn replace(c: char) -> Vec<EditInstruction> {
    vec![EditInstruction::Replace(c)]
}

/// 화면에 보이던 글자를 최종값으로 다시 쓴 뒤 확정하고 다음 글자를 시작
///
/// 조합 영역에는 항상 한 글자만 있으므로, 버려지는 상태의 글자를 확정하기 전에
/// 먼저 Replace로 최종값을 써야 편집기 상태와 엔진 상태가 어긋나지 않습니다.
pub(crate) fn finalize_and_restart(finalized: char, next: char) -> Vec<EditInstruction> {
    vec![
        EditInstruction::Replace(finalized),
        EditInstruction::CommitAndStart(next),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_and_restart_order() {
        assert_eq!(
            finalize_and_restart('가', 'ㄴ'),
            vec![
                EditInstruction::Replace('가'),
                EditInstruction::CommitAndStart('ㄴ'),
            ]
        );
    }

    #[test]
    fn test_code_point() {
        assert_eq!(EditInstruction::Start('ㄱ').code_point(), Some('ㄱ'));
        assert_eq!(EditInstruction::CommitAndStart('가').code_point(), Some('가'));
        assert_eq!(EditInstruction::RemoveLast.code_point(), None);
        assert_eq!(EditInstruction::DeleteKeyPassthrough.code_point(), None);
    }
}
