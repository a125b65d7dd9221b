// src/catalog.rs

/// Class count used when no grade has been chosen yet.
pub const DEFAULT_MAX_CLASS: u8 = 10;

/// Largest class number of any grade.
pub const MAX_CLASS_ANY_GRADE: u8 = 11;

pub const MAX_STUDENT_NUMBER: u8 = 30;

pub const GRADES: std::ops::RangeInclusive<u8> = 1..=6;

/// Number of classes per grade.
const CLASS_CAPACITY: [(u8, u8); 6] = [(1, 6), (2, 8), (3, 9), (4, 11), (5, 10), (6, 10)];

/// Returns the highest class number selectable for `grade`.
///
/// An unset or unknown grade falls back to [`DEFAULT_MAX_CLASS`].
pub fn max_class(grade: Option<u8>) -> u8 {
    grade
        .and_then(|g| CLASS_CAPACITY.iter().find(|(k, _)| *k == g))
        .map(|(_, max)| *max)
        .unwrap_or(DEFAULT_MAX_CLASS)
}

/// Class numbers offered for `grade`, starting at 1.
pub fn class_options(grade: Option<u8>) -> Vec<u8> {
    (1..=max_class(grade)).collect()
}

pub const MISSIONS: [&str; 39] = [
    "구해줘! 펭수",
    "달려라! 펭수",
    "뚜앙과 블록코딩 첫걸음",
    "잡지마! 펭수",
    "점박이와 코딩을!",
    "옥토스튜디오로 지구 살리기 - 도전! 퓨처비 챌리지 미니",
    "마인크래프트 히어로의 여정 (Minecraft Hero's Journey)",
    "뮤직랩 (Music Lab: Jam Session)",
    "코딩은 동물도 춤추게 한다?",
    "엔트리로 만드는 교과세상",
    "코드아카데미",
    "구름콩콩",
    "블록코딩 챌린지",
    "흰동가리를 찾아라",
    "알고리즘으로 여는 세상",
    "처음 시작하는 코딩",
    "하랑이와 함께 하는 한글 코딩",
    "파이썬으로 떠나는 헬로빗의 당근 수집 여행",
    "달려라! AI펭카",
    "날아라! 펭보드",
    "인공지능 스마트팜",
    "바다환경을 위한 AI (AI for Oceans)",
    "댄스파티 (Dance Party) AI 에디션",
    "지피틴즈 AI와 함께하는 진로탐험",
    "스크래치로 함께 공부하는 AI",
    "누구를 구할까요",
    "나의 AI 프라이버시",
    "판다공항",
    "챗코에게 질문해요",
    "S.O.S 세계수를 구하라!",
    "모모의 신비한 AI상점",
    "도와줘! 펭카페",
    "체셔의 퀴즈",
    "펫 키우기",
    "알고리즘 온라인저지",
    "CT 잠재력 테스트",
    "코드 아케이드",
    "매직 핑거",
    "AI 탐험대",
];

pub fn is_mission(name: &str) -> bool {
    MISSIONS.contains(&name)
}
