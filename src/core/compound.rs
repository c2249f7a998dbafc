//! 겹자음/이중모음 조합 판정

use crate::core::jamo_mapper::JamoIndex;

/// 조합이 일어나는 음절 내 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// 초성
    Initial,
    /// 중성
    Medial,
    /// 종성
    Final,
}

/// 같은 위치의 두 자모를 합친 겹자모 반환
///
/// 순서가 중요합니다: `current`가 먼저 입력된 자모, `incoming`이 나중 자모입니다.
/// 아래 표에 없는 쌍은 모두 조합 불가(None)입니다.
pub fn try_compound(role: Role, current: JamoIndex, incoming: JamoIndex) -> Option<JamoIndex> {
    match role {
        // 초성 자리에서도 종성과 같은 겹자음 표를 씀 (ㄱ,ㅅ 입력 시 ㄳ 표시)
        Role::Initial | Role::Final => combine_consonants(current, incoming),
        Role::Medial => combine_vowels(current, incoming),
    }
}

fn combine_consonants(first: JamoIndex, second: JamoIndex) -> Option<JamoIndex> {
    match (first, second) {
        (JamoIndex::GIYEOK, JamoIndex::SIOS) => Some(JamoIndex::GIYEOK_SIOS), // ㄱ + ㅅ = ㄳ
        (JamoIndex::NIEUN, JamoIndex::JIEUJ) => Some(JamoIndex::NIEUN_JIEUJ), // ㄴ + ㅈ = ㄵ
        (JamoIndex::NIEUN, JamoIndex::HIEUH) => Some(JamoIndex::NIEUN_HIEUH), // ㄴ + ㅎ = ㄶ
        (JamoIndex::RIEUL, JamoIndex::GIYEOK) => Some(JamoIndex::RIEUL_GIYEOK), // ㄹ + ㄱ = ㄺ
        (JamoIndex::RIEUL, JamoIndex::MIEUM) => Some(JamoIndex::RIEUL_MIEUM), // ㄹ + ㅁ = ㄻ
        (JamoIndex::RIEUL, JamoIndex::BIEUP) => Some(JamoIndex::RIEUL_BIEUP), // ㄹ + ㅂ = ㄼ
        (JamoIndex::RIEUL, JamoIndex::SIOS) => Some(JamoIndex::RIEUL_SIOS), // ㄹ + ㅅ = ㄽ
        (JamoIndex::RIEUL, JamoIndex::TIEUT) => Some(JamoIndex::RIEUL_TIEUT), // ㄹ + ㅌ = ㄾ
        (JamoIndex::RIEUL, JamoIndex::PIEUP) => Some(JamoIndex::RIEUL_PIEUP), // ㄹ + ㅍ = ㄿ
        (JamoIndex::RIEUL, JamoIndex::HIEUH) => Some(JamoIndex::RIEUL_HIEUH), // ㄹ + ㅎ = ㅀ
        (JamoIndex::BIEUP, JamoIndex::SIOS) => Some(JamoIndex::BIEUP_SIOS), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

fn combine_vowels(first: JamoIndex, second: JamoIndex) -> Option<JamoIndex> {
    match (first, second) {
        (JamoIndex::O, JamoIndex::A) => Some(JamoIndex::WA),   // ㅗ + ㅏ = ㅘ
        (JamoIndex::O, JamoIndex::AE) => Some(JamoIndex::WAE), // ㅗ + ㅐ = ㅙ
        (JamoIndex::O, JamoIndex::I) => Some(JamoIndex::OE),   // ㅗ + ㅣ = ㅚ
        (JamoIndex::U, JamoIndex::EO) => Some(JamoIndex::WEO), // ㅜ + ㅓ = ㅝ
        (JamoIndex::U, JamoIndex::E) => Some(JamoIndex::WE),   // ㅜ + ㅔ = ㅞ
        (JamoIndex::U, JamoIndex::I) => Some(JamoIndex::WI),   // ㅜ + ㅣ = ㅟ
        (JamoIndex::EU, JamoIndex::I) => Some(JamoIndex::YI),  // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_final() {
        assert_eq!(
            try_compound(Role::Final, JamoIndex::RIEUL, JamoIndex::GIYEOK),
            Some(JamoIndex::RIEUL_GIYEOK)
        );
        assert_eq!(
            try_compound(Role::Final, JamoIndex::BIEUP, JamoIndex::SIOS),
            Some(JamoIndex::BIEUP_SIOS)
        );
        assert_eq!(
            try_compound(Role::Final, JamoIndex::NIEUN, JamoIndex::HIEUH),
            Some(JamoIndex::NIEUN_HIEUH)
        );
        assert_eq!(try_compound(Role::Final, JamoIndex::GIYEOK, JamoIndex::GIYEOK), None);
    }

    #[test]
    fn test_compound_initial_uses_cluster_table() {
        assert_eq!(
            try_compound(Role::Initial, JamoIndex::GIYEOK, JamoIndex::SIOS),
            Some(JamoIndex::GIYEOK_SIOS)
        );
        assert_eq!(try_compound(Role::Initial, JamoIndex::GIYEOK, JamoIndex::NIEUN), None);
    }

    #[test]
    fn test_diphthong() {
        assert_eq!(try_compound(Role::Medial, JamoIndex::O, JamoIndex::A), Some(JamoIndex::WA));
        assert_eq!(try_compound(Role::Medial, JamoIndex::O, JamoIndex::AE), Some(JamoIndex::WAE));
        assert_eq!(try_compound(Role::Medial, JamoIndex::U, JamoIndex::EO), Some(JamoIndex::WEO));
        assert_eq!(try_compound(Role::Medial, JamoIndex::U, JamoIndex::I), Some(JamoIndex::WI));
        assert_eq!(try_compound(Role::Medial, JamoIndex::EU, JamoIndex::I), Some(JamoIndex::YI));
        assert_eq!(try_compound(Role::Medial, JamoIndex::A, JamoIndex::A), None);
    }

    #[test]
    fn test_order_matters() {
        assert_eq!(try_compound(Role::Final, JamoIndex::SIOS, JamoIndex::GIYEOK), None);
        assert_eq!(try_compound(Role::Medial, JamoIndex::A, JamoIndex::O), None);
        assert_eq!(try_compound(Role::Medial, JamoIndex::I, JamoIndex::EU), None);
    }

    #[test]
    fn test_cross_class_never_combines() {
        assert_eq!(try_compound(Role::Medial, JamoIndex::GIYEOK, JamoIndex::SIOS), None);
        assert_eq!(try_compound(Role::Final, JamoIndex::O, JamoIndex::A), None);
    }
}
