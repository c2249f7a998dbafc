//! 두벌식 자판 키 -> 한글 자모 인덱스 매핑
//!
//! 자모 인덱스는 호환용 자모(U+3131 ~ U+3163) 순서를 따릅니다.
//! 0~29는 자음(겹자음 포함), 30~50은 모음(이중모음 포함)입니다.

use std::fmt;

/// 자음 영역 크기 (ㄱ ~ ㅎ, 겹자음 포함)
pub const CONSONANT_COUNT: u8 = 30;
/// 자모 인덱스 개수 (자음 30 + 모음 21)
pub const JAMO_COUNT: u8 = 51;
/// 키 오프셋 개수 (a~z 26개 + Shift a~z 26개)
pub const KEY_OFFSET_COUNT: usize = 52;

/// 자모 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoClass {
    /// 자음 (초성/종성)
    Consonant,
    /// 모음 (중성)
    Vowel,
}

/// 한글 자모 하나를 가리키는 인덱스 (0~50)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JamoIndex(u8);

impl JamoIndex {
    pub const GIYEOK: JamoIndex = JamoIndex(0); // ㄱ
    pub const SSANGGIYEOK: JamoIndex = JamoIndex(1); // ㄲ
    pub const GIYEOK_SIOS: JamoIndex = JamoIndex(2); // ㄳ
    pub const NIEUN: JamoIndex = JamoIndex(3); // ㄴ
    pub const NIEUN_JIEUJ: JamoIndex = JamoIndex(4); // ㄵ
    pub const NIEUN_HIEUH: JamoIndex = JamoIndex(5); // ㄶ
    pub const DIGEUD: JamoIndex = JamoIndex(6); // ㄷ
    pub const SSANGDIGEUD: JamoIndex = JamoIndex(7); // ㄸ
    pub const RIEUL: JamoIndex = JamoIndex(8); // ㄹ
    pub const RIEUL_GIYEOK: JamoIndex = JamoIndex(9); // ㄺ
    pub const RIEUL_MIEUM: JamoIndex = JamoIndex(10); // ㄻ
    pub const RIEUL_BIEUP: JamoIndex = JamoIndex(11); // ㄼ
    pub const RIEUL_SIOS: JamoIndex = JamoIndex(12); // ㄽ
    pub const RIEUL_TIEUT: JamoIndex = JamoIndex(13); // ㄾ
    pub const RIEUL_PIEUP: JamoIndex = JamoIndex(14); // ㄿ
    pub const RIEUL_HIEUH: JamoIndex = JamoIndex(15); // ㅀ
    pub const MIEUM: JamoIndex = JamoIndex(16); // ㅁ
    pub const BIEUP: JamoIndex = JamoIndex(17); // ㅂ
    pub const SSANGBIEUP: JamoIndex = JamoIndex(18); // ㅃ
    pub const BIEUP_SIOS: JamoIndex = JamoIndex(19); // ㅄ
    pub const SIOS: JamoIndex = JamoIndex(20); // ㅅ
    pub const SSANGSIOS: JamoIndex = JamoIndex(21); // ㅆ
    pub const IEUNG: JamoIndex = JamoIndex(22); // ㅇ
    pub const JIEUJ: JamoIndex = JamoIndex(23); // ㅈ
    pub const SSANGJIEUJ: JamoIndex = JamoIndex(24); // ㅉ
    pub const CHIEUCH: JamoIndex = JamoIndex(25); // ㅊ
    pub const KIEUK: JamoIndex = JamoIndex(26); // ㅋ
    pub const TIEUT: JamoIndex = JamoIndex(27); // ㅌ
    pub const PIEUP: JamoIndex = JamoIndex(28); // ㅍ
    pub const HIEUH: JamoIndex = JamoIndex(29); // ㅎ

    pub const A: JamoIndex = JamoIndex(30); // ㅏ
    pub const AE: JamoIndex = JamoIndex(31); // ㅐ
    pub const YA: JamoIndex = JamoIndex(32); // ㅑ
    pub const YAE: JamoIndex = JamoIndex(33); // ㅒ
    pub const EO: JamoIndex = JamoIndex(34); // ㅓ
    pub const E: JamoIndex = JamoIndex(35); // ㅔ
    pub const YEO: JamoIndex = JamoIndex(36); // ㅕ
    pub const YE: JamoIndex = JamoIndex(37); // ㅖ
    pub const O: JamoIndex = JamoIndex(38); // ㅗ
    pub const WA: JamoIndex = JamoIndex(39); // ㅘ
    pub const WAE: JamoIndex = JamoIndex(40); // ㅙ
    pub const OE: JamoIndex = JamoIndex(41); // ㅚ
    pub const YO: JamoIndex = JamoIndex(42); // ㅛ
    pub const U: JamoIndex = JamoIndex(43); // ㅜ
    pub const WEO: JamoIndex = JamoIndex(44); // ㅝ
    pub const WE: JamoIndex = JamoIndex(45); // ㅞ
    pub const WI: JamoIndex = JamoIndex(46); // ㅟ
    pub const YU: JamoIndex = JamoIndex(47); // ㅠ
    pub const EU: JamoIndex = JamoIndex(48); // ㅡ
    pub const YI: JamoIndex = JamoIndex(49); // ㅢ
    pub const I: JamoIndex = JamoIndex(50); // ㅣ

    /// 인덱스 값으로 생성 (범위 밖이면 호출자 계약 위반으로 panic)
    pub fn new(value: u8) -> Self {
        assert!(value < JAMO_COUNT, "자모 인덱스 범위 초과: {}", value);
        JamoIndex(value)
    }

    /// 원시 인덱스 값
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn class(self) -> JamoClass {
        if self.0 < CONSONANT_COUNT {
            JamoClass::Consonant
        } else {
            JamoClass::Vowel
        }
    }

    /// 자음인지 확인
    pub fn is_consonant(self) -> bool {
        self.class() == JamoClass::Consonant
    }

    /// 모음인지 확인
    pub fn is_vowel(self) -> bool {
        self.class() == JamoClass::Vowel
    }

    /// 모음 영역 내 0부터 시작하는 순서 (ㅏ = 0)
    pub(crate) fn vowel_offset(self) -> u8 {
        debug_assert!(self.is_vowel());
        self.0 - CONSONANT_COUNT
    }
}

impl fmt::Debug for JamoIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match char::from_u32(0x3131 + self.0 as u32) {
            Some(c) => write!(f, "JamoIndex({} {})", self.0, c),
            None => write!(f, "JamoIndex({})", self.0),
        }
    }
}

// 두벌식 배열: a~z 순서
#[rustfmt::skip]
const UNSHIFTED_KEYS: [u8; 26] = [
    16, // a ㅁ
    47, // b ㅠ
    25, // c ㅊ
    22, // d ㅇ
    6,  // e ㄷ
    8,  // f ㄹ
    29, // g ㅎ
    38, // h ㅗ
    32, // i ㅑ
    34, // j ㅓ
    30, // k ㅏ
    50, // l ㅣ
    48, // m ㅡ
    43, // n ㅜ
    31, // o ㅐ
    35, // p ㅔ
    17, // q ㅂ
    0,  // r ㄱ
    3,  // s ㄴ
    20, // t ㅅ
    36, // u ㅕ
    28, // v ㅍ
    23, // w ㅈ
    27, // x ㅌ
    42, // y ㅛ
    26, // z ㅋ
];

// Shift 배열: q w e r t o p 만 쌍자음/ㅒ/ㅖ로 바뀜
#[rustfmt::skip]
const SHIFTED_KEYS: [u8; 26] = [
    16, // A ㅁ
    47, // B ㅠ
    25, // C ㅊ
    22, // D ㅇ
    7,  // E ㄸ
    8,  // F ㄹ
    29, // G ㅎ
    38, // H ㅗ
    32, // I ㅑ
    34, // J ㅓ
    30, // K ㅏ
    50, // L ㅣ
    48, // M ㅡ
    43, // N ㅜ
    33, // O ㅒ
    37, // P ㅖ
    18, // Q ㅃ
    1,  // R ㄲ
    3,  // S ㄴ
    21, // T ㅆ
    36, // U ㅕ
    28, // V ㅍ
    24, // W ㅉ
    27, // X ㅌ
    42, // Y ㅛ
    26, // Z ㅋ
];

/// 키 오프셋(0~51)을 자모 인덱스로 변환
///
/// 0~25는 Shift 없는 a~z, 26~51은 Shift 누른 a~z입니다.
/// 범위 밖 오프셋은 호출자 계약 위반이므로 panic 합니다.
pub fn map_key(offset: usize) -> JamoIndex {
    assert!(offset < KEY_OFFSET_COUNT, "키 오프셋 범위 초과: {}", offset);
    if offset < 26 {
        JamoIndex(UNSHIFTED_KEYS[offset])
    } else {
        JamoIndex(SHIFTED_KEYS[offset - 26])
    }
}

/// 글자 키(0~25)와 Shift 여부를 키 오프셋으로 합침
pub fn key_offset(letter: u8, shift: bool) -> usize {
    assert!(letter < 26, "글자 키 범위 초과: {}", letter);
    letter as usize + if shift { 26 } else { 0 }
}

/// 영문 문자 하나를 (글자 키, Shift 여부)로 변환
/// 영문 알파벳이 아닌 문자는 None 반환
pub fn letter_key(c: char) -> Option<(u8, bool)> {
    match c {
        'a'..='z' => Some((c as u8 - b'a', false)),
        'A'..='Z' => Some((c as u8 - b'A', true)),
        _ => None,
    }
}

/// 영문 문자 하나를 자모로 바로 변환
pub fn map_char(c: char) -> Option<JamoIndex> {
    letter_key(c).map(|(letter, shift)| map_key(key_offset(letter, shift)))
}
