//! Known substances and hazard thresholds
//!
//! CAS numbers with their canonical (Korean) ingredient names, and the
//! concentrations above which an ingredient needs an explicit hazard review.

use serde::{Deserialize, Serialize};

/// Concentration limit for a hazardous substance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardThreshold {
    pub max_safe_percentage: f64,
    pub warning_text: String,
}

/// CAS number -> canonical name
pub const KNOWN_SUBSTANCES: &[(&str, &str)] = &[
    ("7732-18-5", "정제수"),
    ("64-17-5", "에탄올"),
    ("67-56-1", "메탄올"),
    ("67-63-0", "이소프로필알코올"),
    ("67-64-1", "아세톤"),
    ("108-88-3", "톨루엔"),
    ("1330-20-7", "자일렌"),
    ("100-41-4", "에틸벤젠"),
    ("71-43-2", "벤젠"),
    ("110-54-3", "노말헥산"),
    ("141-78-6", "초산에틸"),
    ("111-76-2", "2-부톡시에탄올"),
    ("50-00-0", "포름알데히드"),
    ("57-55-6", "프로필렌글리콜"),
    ("56-81-5", "글리세린"),
    ("7647-14-5", "염화나트륨"),
    ("1310-73-2", "수산화나트륨"),
    ("7647-01-0", "염산"),
    ("7664-93-9", "황산"),
    ("7697-37-2", "질산"),
    ("7722-84-1", "과산화수소"),
];

/// CAS number -> (max safe percentage, warning text)
pub const HAZARDOUS_SUBSTANCES: &[(&str, f64, &str)] = &[
    ("71-43-2", 0.1, "벤젠은 발암성 물질(1A)로 0.1% 초과 함유 시 특별관리물질 표시가 필요합니다"),
    ("50-00-0", 0.1, "포름알데히드는 발암성 물질(1A)로 0.1% 초과 함유 시 특별관리물질 표시가 필요합니다"),
    ("67-56-1", 3.0, "메탄올 3% 초과 시 급성 독성 및 특정표적장기 독성 표시를 확인하세요"),
    ("110-54-3", 5.0, "노말헥산 5% 초과 시 생식독성 및 신경독성 표시를 확인하세요"),
    ("108-88-3", 10.0, "톨루엔 10% 초과 시 생식독성 및 인화성 액체 표시를 확인하세요"),
    ("1310-73-2", 2.0, "수산화나트륨 2% 초과 시 피부 부식성(구분 1) 표시가 필요합니다"),
    ("7647-01-0", 10.0, "염산 10% 초과 시 피부 부식성 및 호흡기 자극 표시가 필요합니다"),
    ("7664-93-9", 15.0, "황산 15% 초과 시 피부 부식성(구분 1A) 표시가 필요합니다"),
    ("7697-37-2", 20.0, "질산 20% 초과 시 산화성 액체 및 피부 부식성 표시가 필요합니다"),
    ("7722-84-1", 8.0, "과산화수소 8% 초과 시 산화성 액체 및 심한 눈 손상 표시가 필요합니다"),
];
