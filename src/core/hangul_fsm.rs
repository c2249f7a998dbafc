//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 자모 키를 하나씩 받아 조합 중인 음절을 갱신하고, 호스트 편집기가 적용할
//! 편집 명령을 돌려줍니다. 백스페이스는 마지막으로 더해진 자모 하나만 되돌립니다.

use crate::core::compound::{try_compound, Role};
use crate::core::edit::{self, EditInstruction};
use crate::core::jamo_mapper::{key_offset, map_key, JamoIndex};
use crate::core::unicode::{bare_jamo_char, choseong_order, jongseong_order, syllable_char};

/// 두 자모가 합쳐진 겹자모 (입력 순서 그대로 보관)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundJamo {
    /// 먼저 입력된 자모
    pub first: JamoIndex,
    /// 나중에 입력된 자모
    pub second: JamoIndex,
    /// 조합 결과
    pub compound: JamoIndex,
}

/// 중성 자리: 단모음 또는 이중모음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoSlot {
    Single(JamoIndex),
    Compound(CompoundJamo),
}

impl JamoSlot {
    /// 실제로 음절에 쓰이는 자모
    pub fn resolved(&self) -> JamoIndex {
        match self {
            JamoSlot::Single(jamo) => *jamo,
            JamoSlot::Compound(c) => c.compound,
        }
    }

    /// 처음 입력된 자모
    pub fn base(&self) -> JamoIndex {
        match self {
            JamoSlot::Single(jamo) => *jamo,
            JamoSlot::Compound(c) => c.first,
        }
    }

    /// 두 번째로 입력된 자모 (이중모음일 때만)
    pub fn second(&self) -> Option<JamoIndex> {
        match self {
            JamoSlot::Single(_) => None,
            JamoSlot::Compound(c) => Some(c.second),
        }
    }
}

/// 조합 상태
///
/// 각 상태는 그 상태에서 유효한 자모만 가지고 있으므로,
/// 상태와 자모 슬롯이 어긋나는 조합은 표현할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionState {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Initial { choseong: JamoIndex },
    /// 초성이 겹자음의 앞부분으로 조합됨 (예: ㄱ+ㅅ = ㄳ)
    InitialPendingCompound { choseong: CompoundJamo },
    /// 초성 없이 모음만 입력됨 (이중모음 포함)
    Medial { jungseong: JamoSlot },
    /// 초성+중성
    InitialMedial { choseong: JamoIndex, jungseong: JamoSlot },
    /// 초성+중성+종성
    InitialMedialFinal {
        choseong: JamoIndex,
        jungseong: JamoSlot,
        jongseong: JamoIndex,
    },
    /// 초성+중성+겹받침
    InitialMedialFinalPendingCompound {
        choseong: JamoIndex,
        jungseong: JamoSlot,
        jongseong: CompoundJamo,
    },
}

/// 현재 음절에 실제로 입력된 키 기록 (위치별)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeyHistory {
    pub initial_base: Option<JamoIndex>,
    pub initial_second: Option<JamoIndex>,
    pub medial_base: Option<JamoIndex>,
    pub medial_second: Option<JamoIndex>,
    pub final_base: Option<JamoIndex>,
    pub final_second: Option<JamoIndex>,
}

/// 현재 음절에 적용되는 초성/중성/종성
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedJamo {
    pub choseong: Option<JamoIndex>,
    pub jungseong: Option<JamoIndex>,
    pub jongseong: Option<JamoIndex>,
}

/// 호스트 키 라우팅 계층에서 들어오는 입력 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// 글자 키 (0~25 = a~z) 와 Shift 여부
    JamoKey { letter: u8, shift: bool },
    Backspace,
    Reset,
}

/// 한글 조합 FSM
///
/// 하나의 편집 포커스에 하나씩 두고, 포커스가 바뀌면 반드시 `reset` 해야 합니다.
#[derive(Debug, Clone)]
pub struct HangulFsm {
    state: CompositionState,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self {
            state: CompositionState::Empty,
        }
    }

    pub fn state(&self) -> CompositionState {
        self.state
    }

    /// 조합 중인 음절이 있는지
    pub fn is_composing(&self) -> bool {
        self.state != CompositionState::Empty
    }

    /// 이벤트 하나를 처리하고 편집 명령 목록을 반환
    pub fn handle(&mut self, event: KeyEvent) -> Vec<EditInstruction> {
        match event {
            KeyEvent::JamoKey { letter, shift } => self.feed(map_key(key_offset(letter, shift))),
            KeyEvent::Backspace => vec![self.undo()],
            KeyEvent::Reset => {
                self.reset();
                Vec::new()
            }
        }
    }

    /// 자모를 입력하여 상태 전이
    ///
    /// 겹자음(ㄳ 등)은 키로 입력될 수 없으므로 직접 넣으면 panic 합니다.
    pub fn feed(&mut self, jamo: JamoIndex) -> Vec<EditInstruction> {
        assert!(
            jamo.is_vowel() || choseong_order(jamo).is_some(),
            "키로 입력될 수 없는 자모: {:?}",
            jamo
        );

        let before = self.state;
        let edits = if jamo.is_consonant() {
            self.feed_consonant(jamo)
        } else {
            self.feed_vowel(jamo)
        };
        log::debug!("{:?} + {:?} -> {:?}", before, jamo, self.state);
        log::trace!("edits: {:?}", edits);
        edits
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, jamo: JamoIndex) -> Vec<EditInstruction> {
        match self.state {
            CompositionState::Empty => {
                self.state = CompositionState::Initial { choseong: jamo };
                edit::start(bare_jamo_char(jamo))
            }
            CompositionState::Initial { choseong } => {
                match try_compound(Role::Initial, choseong, jamo) {
                    Some(compound) => {
                        self.state = CompositionState::InitialPendingCompound {
                            choseong: CompoundJamo {
                                first: choseong,
                                second: jamo,
                                compound,
                            },
                        };
                        edit::replace(bare_jamo_char(compound))
                    }
                    None => {
                        // 기존 초성은 단독 자모로 확정, 새 자음이 초성
                        self.state = CompositionState::Initial { choseong: jamo };
                        edit::finalize_and_restart(bare_jamo_char(choseong), bare_jamo_char(jamo))
                    }
                }
            }
            CompositionState::InitialPendingCompound { choseong } => {
                // 겹자음 그대로 확정
                self.state = CompositionState::Initial { choseong: jamo };
                edit::finalize_and_restart(
                    bare_jamo_char(choseong.compound),
                    bare_jamo_char(jamo),
                )
            }
            CompositionState::Medial { jungseong } => {
                self.state = CompositionState::Initial { choseong: jamo };
                edit::finalize_and_restart(
                    bare_jamo_char(jungseong.resolved()),
                    bare_jamo_char(jamo),
                )
            }
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => {
                if jongseong_order(jamo).is_some() {
                    self.state = CompositionState::InitialMedialFinal {
                        choseong,
                        jungseong,
                        jongseong: jamo,
                    };
                    edit::replace(syllable_char(choseong, jungseong.resolved(), Some(jamo)))
                } else {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.state = CompositionState::Initial { choseong: jamo };
                    edit::finalize_and_restart(
                        syllable_char(choseong, jungseong.resolved(), None),
                        bare_jamo_char(jamo),
                    )
                }
            }
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                jongseong,
            } => match try_compound(Role::Final, jongseong, jamo) {
                Some(compound) => {
                    self.state = CompositionState::InitialMedialFinalPendingCompound {
                        choseong,
                        jungseong,
                        jongseong: CompoundJamo {
                            first: jongseong,
                            second: jamo,
                            compound,
                        },
                    };
                    edit::replace(syllable_char(choseong, jungseong.resolved(), Some(compound)))
                }
                None => {
                    // 겹받침 불가 -> 현재 글자 확정, 새 초성
                    self.state = CompositionState::Initial { choseong: jamo };
                    edit::finalize_and_restart(
                        syllable_char(choseong, jungseong.resolved(), Some(jongseong)),
                        bare_jamo_char(jamo),
                    )
                }
            },
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => {
                self.state = CompositionState::Initial { choseong: jamo };
                edit::finalize_and_restart(
                    syllable_char(choseong, jungseong.resolved(), Some(jongseong.compound)),
                    bare_jamo_char(jamo),
                )
            }
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, jamo: JamoIndex) -> Vec<EditInstruction> {
        match self.state {
            CompositionState::Empty => {
                self.state = CompositionState::Medial {
                    jungseong: JamoSlot::Single(jamo),
                };
                edit::start(bare_jamo_char(jamo))
            }
            CompositionState::Initial { choseong } => {
                self.state = CompositionState::InitialMedial {
                    choseong,
                    jungseong: JamoSlot::Single(jamo),
                };
                edit::replace(syllable_char(choseong, jamo, None))
            }
            CompositionState::InitialPendingCompound { choseong } => {
                // 겹자음의 앞 자음은 단독으로 확정, 뒤 자음이 다음 음절의 초성
                self.state = CompositionState::InitialMedial {
                    choseong: choseong.second,
                    jungseong: JamoSlot::Single(jamo),
                };
                edit::finalize_and_restart(
                    bare_jamo_char(choseong.first),
                    syllable_char(choseong.second, jamo, None),
                )
            }
            CompositionState::Medial { jungseong } => {
                match extend_medial(jungseong, jamo) {
                    Some(extended) => {
                        self.state = CompositionState::Medial {
                            jungseong: extended,
                        };
                        edit::replace(bare_jamo_char(extended.resolved()))
                    }
                    None => {
                        self.state = CompositionState::Medial {
                            jungseong: JamoSlot::Single(jamo),
                        };
                        edit::finalize_and_restart(
                            bare_jamo_char(jungseong.resolved()),
                            bare_jamo_char(jamo),
                        )
                    }
                }
            }
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => match extend_medial(jungseong, jamo) {
                Some(extended) => {
                    self.state = CompositionState::InitialMedial {
                        choseong,
                        jungseong: extended,
                    };
                    edit::replace(syllable_char(choseong, extended.resolved(), None))
                }
                None => {
                    // 현재 글자 확정 후 모음만 새로 시작
                    self.state = CompositionState::Medial {
                        jungseong: JamoSlot::Single(jamo),
                    };
                    edit::finalize_and_restart(
                        syllable_char(choseong, jungseong.resolved(), None),
                        bare_jamo_char(jamo),
                    )
                }
            },
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                jongseong,
            } => {
                // 종성 전체를 다음 초성으로 분리
                self.state = CompositionState::InitialMedial {
                    choseong: jongseong,
                    jungseong: JamoSlot::Single(jamo),
                };
                edit::finalize_and_restart(
                    syllable_char(choseong, jungseong.resolved(), None),
                    syllable_char(jongseong, jamo, None),
                )
            }
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => {
                // 겹받침의 첫 자음은 종성으로 남기고, 둘째 자음은 다음 초성
                self.state = CompositionState::InitialMedial {
                    choseong: jongseong.second,
                    jungseong: JamoSlot::Single(jamo),
                };
                edit::finalize_and_restart(
                    syllable_char(choseong, jungseong.resolved(), Some(jongseong.first)),
                    syllable_char(jongseong.second, jamo, None),
                )
            }
        }
    }

    /// 백스페이스: 마지막으로 더해진 자모 하나를 되돌림
    pub fn undo(&mut self) -> EditInstruction {
        let before = self.state;
        let instruction = match self.state {
            CompositionState::Empty => EditInstruction::DeleteKeyPassthrough,
            CompositionState::Initial { .. } => {
                self.state = CompositionState::Empty;
                EditInstruction::RemoveLast
            }
            CompositionState::InitialPendingCompound { choseong } => {
                self.state = CompositionState::Initial {
                    choseong: choseong.first,
                };
                EditInstruction::Replace(bare_jamo_char(choseong.first))
            }
            CompositionState::Medial { jungseong } => match jungseong {
                JamoSlot::Single(_) => {
                    self.state = CompositionState::Empty;
                    EditInstruction::RemoveLast
                }
                JamoSlot::Compound(c) => {
                    self.state = CompositionState::Medial {
                        jungseong: JamoSlot::Single(c.first),
                    };
                    EditInstruction::Replace(bare_jamo_char(c.first))
                }
            },
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => match jungseong {
                JamoSlot::Compound(c) => {
                    self.state = CompositionState::InitialMedial {
                        choseong,
                        jungseong: JamoSlot::Single(c.first),
                    };
                    EditInstruction::Replace(syllable_char(choseong, c.first, None))
                }
                JamoSlot::Single(_) => {
                    self.state = CompositionState::Initial { choseong };
                    EditInstruction::Replace(bare_jamo_char(choseong))
                }
            },
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                ..
            } => {
                self.state = CompositionState::InitialMedial {
                    choseong,
                    jungseong,
                };
                EditInstruction::Replace(syllable_char(choseong, jungseong.resolved(), None))
            }
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => {
                self.state = CompositionState::InitialMedialFinal {
                    choseong,
                    jungseong,
                    jongseong: jongseong.first,
                };
                EditInstruction::Replace(syllable_char(
                    choseong,
                    jungseong.resolved(),
                    Some(jongseong.first),
                ))
            }
        };
        log::debug!("backspace {:?} -> {:?}", before, self.state);
        log::trace!("edit: {:?}", instruction);
        instruction
    }

    /// 상태 초기화
    pub fn reset(&mut self) {
        if self.state != CompositionState::Empty {
            log::debug!("reset {:?}", self.state);
        }
        self.state = CompositionState::Empty;
    }

    /// 현재 조합 영역에 보여야 하는 글자
    pub fn composing_char(&self) -> Option<char> {
        match self.state {
            CompositionState::Empty => None,
            CompositionState::Initial { choseong } => Some(bare_jamo_char(choseong)),
            CompositionState::InitialPendingCompound { choseong } => {
                Some(bare_jamo_char(choseong.compound))
            }
            CompositionState::Medial { jungseong } => Some(bare_jamo_char(jungseong.resolved())),
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => Some(syllable_char(choseong, jungseong.resolved(), None)),
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                jongseong,
            } => Some(syllable_char(choseong, jungseong.resolved(), Some(jongseong))),
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => Some(syllable_char(
                choseong,
                jungseong.resolved(),
                Some(jongseong.compound),
            )),
        }
    }

    /// 현재 음절의 초성/중성/종성
    pub fn resolved(&self) -> ResolvedJamo {
        match self.state {
            CompositionState::Empty => ResolvedJamo::default(),
            CompositionState::Initial { choseong } => ResolvedJamo {
                choseong: Some(choseong),
                ..Default::default()
            },
            CompositionState::InitialPendingCompound { choseong } => ResolvedJamo {
                choseong: Some(choseong.compound),
                ..Default::default()
            },
            CompositionState::Medial { jungseong } => ResolvedJamo {
                jungseong: Some(jungseong.resolved()),
                ..Default::default()
            },
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => ResolvedJamo {
                choseong: Some(choseong),
                jungseong: Some(jungseong.resolved()),
                jongseong: None,
            },
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                jongseong,
            } => ResolvedJamo {
                choseong: Some(choseong),
                jungseong: Some(jungseong.resolved()),
                jongseong: Some(jongseong),
            },
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => ResolvedJamo {
                choseong: Some(choseong),
                jungseong: Some(jungseong.resolved()),
                jongseong: Some(jongseong.compound),
            },
        }
    }

    /// 현재 음절을 이루는 실제 입력 키
    pub fn raw_keys(&self) -> RawKeyHistory {
        let mut keys = RawKeyHistory::default();
        let medial = |keys: &mut RawKeyHistory, slot: JamoSlot| {
            keys.medial_base = Some(slot.base());
            keys.medial_second = slot.second();
        };
        match self.state {
            CompositionState::Empty => {}
            CompositionState::Initial { choseong } => {
                keys.initial_base = Some(choseong);
            }
            CompositionState::InitialPendingCompound { choseong } => {
                keys.initial_base = Some(choseong.first);
                keys.initial_second = Some(choseong.second);
            }
            CompositionState::Medial { jungseong } => medial(&mut keys, jungseong),
            CompositionState::InitialMedial {
                choseong,
                jungseong,
            } => {
                keys.initial_base = Some(choseong);
                medial(&mut keys, jungseong);
            }
            CompositionState::InitialMedialFinal {
                choseong,
                jungseong,
                jongseong,
            } => {
                keys.initial_base = Some(choseong);
                medial(&mut keys, jungseong);
                keys.final_base = Some(jongseong);
            }
            CompositionState::InitialMedialFinalPendingCompound {
                choseong,
                jungseong,
                jongseong,
            } => {
                keys.initial_base = Some(choseong);
                medial(&mut keys, jungseong);
                keys.final_base = Some(jongseong.first);
                keys.final_second = Some(jongseong.second);
            }
        }
        keys
    }
}

/// 단모음에 모음을 더해 이중모음을 만들 수 있으면 반환
/// 이미 이중모음이면 더 이상 조합하지 않음
fn extend_medial(slot: JamoSlot, jamo: JamoIndex) -> Option<JamoSlot> {
    match slot {
        JamoSlot::Single(base) => try_compound(Role::Medial, base, jamo).map(|compound| {
            JamoSlot::Compound(CompoundJamo {
                first: base,
                second: jamo,
                compound,
            })
        }),
        JamoSlot::Compound(_) => None,
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}
