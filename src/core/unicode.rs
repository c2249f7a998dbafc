//! 유니코드 한글 조합/분해 유틸리티

use crate::core::jamo_mapper::JamoIndex;

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 마지막 한글 음절 오프셋 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 11171;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자음 시작 코드포인트 (ㄱ)
const COMPAT_CONSONANT_BASE: u32 = 0x3131;
/// 호환용 모음 시작 코드포인트 (ㅏ)
const COMPAT_VOWEL_BASE: u32 = 0x314F;

// 자음 인덱스 -> 초성 순서 (None이면 초성 불가: 겹자음)
// 초성 순서: ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
//           ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
const CHOSEONG_ORDER: [Option<u8>; 30] = [
    Some(0),  // ㄱ
    Some(1),  // ㄲ
    None,     // ㄳ
    Some(2),  // ㄴ
    None,     // ㄵ
    None,     // ㄶ
    Some(3),  // ㄷ
    Some(4),  // ㄸ
    Some(5),  // ㄹ
    None,     // ㄺ
    None,     // ㄻ
    None,     // ㄼ
    None,     // ㄽ
    None,     // ㄾ
    None,     // ㄿ
    None,     // ㅀ
    Some(6),  // ㅁ
    Some(7),  // ㅂ
    Some(8),  // ㅃ
    None,     // ㅄ
    Some(9),  // ㅅ
    Some(10), // ㅆ
    Some(11), // ㅇ
    Some(12), // ㅈ
    Some(13), // ㅉ
    Some(14), // ㅊ
    Some(15), // ㅋ
    Some(16), // ㅌ
    Some(17), // ㅍ
    Some(18), // ㅎ
];

// 자음 인덱스 -> 종성 순서 (0이면 종성 불가: ㄸ, ㅃ, ㅉ)
// 종성 순서: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
//           ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
//           ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
const JONGSEONG_ORDER: [u8; 30] = [
    1, 2, 3, 4, 5, 6, 7,
    0,  // ㄸ
    8, 9, 10, 11, 12, 13, 14, 15, 16, 17,
    0,  // ㅃ
    18, 19, 20, 21, 22,
    0,  // ㅉ
    23, 24, 25, 26, 27,
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자모의 초성 순서 (자음이 아니거나 겹자음이면 None)
pub fn choseong_order(jamo: JamoIndex) -> Option<u32> {
    if !jamo.is_consonant() {
        return None;
    }
    CHOSEONG_ORDER[jamo.value() as usize].map(u32::from)
}

/// 자모의 중성 순서 (모음이 아니면 None)
pub fn jungseong_order(jamo: JamoIndex) -> Option<u32> {
    if !jamo.is_vowel() {
        return None;
    }
    Some(jamo.vowel_offset() as u32)
}

/// 자모의 종성 순서
/// 모음이거나 종성이 될 수 없는 자음(ㄸ, ㅃ, ㅉ)이면 None
pub fn jongseong_order(jamo: JamoIndex) -> Option<u32> {
    if !jamo.is_consonant() {
        return None;
    }
    match JONGSEONG_ORDER[jamo.value() as usize] {
        0 => None,
        order => Some(order as u32),
    }
}

/// 자모 인덱스로 음절 문자 생성
///
/// 초성이 될 수 없는 자음, 모음이 아닌 중성, 종성이 될 수 없는 자음이
/// 들어오면 조합 규칙 위반이므로 panic 합니다.
pub fn syllable_char(
    choseong: JamoIndex,
    jungseong: JamoIndex,
    jongseong: Option<JamoIndex>,
) -> char {
    let cho = match choseong_order(choseong) {
        Some(order) => order,
        None => panic!("초성이 될 수 없는 자모: {:?}", choseong),
    };
    let jung = match jungseong_order(jungseong) {
        Some(order) => order,
        None => panic!("중성이 될 수 없는 자모: {:?}", jungseong),
    };
    let jong = match jongseong {
        None => 0,
        Some(jamo) => match jongseong_order(jamo) {
            Some(order) => order,
            None => panic!("종성이 될 수 없는 자모: {:?}", jamo),
        },
    };
    match compose_syllable(cho, jung, jong) {
        Some(c) => c,
        None => unreachable!("음절 인덱스는 항상 범위 안에 있음"),
    }
}

/// 자모 단독 문자 (호환용 자모)
pub fn bare_jamo_char(jamo: JamoIndex) -> char {
    let code = if jamo.is_consonant() {
        COMPAT_CONSONANT_BASE + jamo.value() as u32
    } else {
        COMPAT_VOWEL_BASE + jamo.vowel_offset() as u32
    };
    match char::from_u32(code) {
        Some(c) => c,
        None => unreachable!("호환용 자모 영역은 항상 유효한 문자"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_syllable_char() {
        assert_eq!(syllable_char(JamoIndex::HIEUH, JamoIndex::A, Some(JamoIndex::NIEUN)), '한');
        assert_eq!(syllable_char(JamoIndex::GIYEOK, JamoIndex::EU, Some(JamoIndex::RIEUL)), '글');
        assert_eq!(
            syllable_char(JamoIndex::IEUNG, JamoIndex::I, Some(JamoIndex::RIEUL_GIYEOK)),
            '읽'
        );
        assert_eq!(syllable_char(JamoIndex::IEUNG, JamoIndex::WA, None), '와');
        assert_eq!(syllable_char(JamoIndex::SSANGSIOS, JamoIndex::A, None), '싸');
    }

    #[test]
    #[should_panic]
    fn test_cluster_as_choseong_panics() {
        syllable_char(JamoIndex::GIYEOK_SIOS, JamoIndex::A, None);
    }

    #[test]
    fn test_jongseong_order() {
        assert_eq!(jongseong_order(JamoIndex::GIYEOK), Some(1));
        assert_eq!(jongseong_order(JamoIndex::BIEUP_SIOS), Some(18));
        assert_eq!(jongseong_order(JamoIndex::HIEUH), Some(27));

        // 종성 불가 쌍자음
        assert_eq!(jongseong_order(JamoIndex::SSANGDIGEUD), None);
        assert_eq!(jongseong_order(JamoIndex::SSANGBIEUP), None);
        assert_eq!(jongseong_order(JamoIndex::SSANGJIEUJ), None);
        assert_eq!(jongseong_order(JamoIndex::A), None);
    }

    #[test]
    fn test_choseong_order() {
        assert_eq!(choseong_order(JamoIndex::GIYEOK), Some(0));
        assert_eq!(choseong_order(JamoIndex::NIEUN), Some(2));
        assert_eq!(choseong_order(JamoIndex::HIEUH), Some(18));
        assert_eq!(choseong_order(JamoIndex::RIEUL_GIYEOK), None);
        assert_eq!(choseong_order(JamoIndex::O), None);
    }

    #[test]
    fn test_jongseong_order_is_consistent_with_compat_table() {
        // 종성 가능한 자음은 음절로 조합 후 다시 분해해도 순서가 같아야 함
        for value in 0..30u8 {
            let jamo = JamoIndex::new(value);
            if let Some(jong) = jongseong_order(jamo) {
                let c = syllable_char(JamoIndex::GIYEOK, JamoIndex::A, Some(jamo));
                assert_eq!(decompose_syllable(c), Some((0, 0, jong)));
            }
        }
    }

    #[test]
    fn test_bare_jamo_char() {
        assert_eq!(bare_jamo_char(JamoIndex::GIYEOK), 'ㄱ');
        assert_eq!(bare_jamo_char(JamoIndex::GIYEOK_SIOS), 'ㄳ');
        assert_eq!(bare_jamo_char(JamoIndex::HIEUH), 'ㅎ');
        assert_eq!(bare_jamo_char(JamoIndex::A), 'ㅏ');
        assert_eq!(bare_jamo_char(JamoIndex::YI), 'ㅢ');
        assert_eq!(bare_jamo_char(JamoIndex::I), 'ㅣ');
    }
}
