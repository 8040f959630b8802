//! Ingredient name aliases
//!
//! Common English, abbreviated, and spelling-variant names mapped to the
//! canonical names used in the known-substance table.

/// Alias -> canonical name. Lookup is case-insensitive.
pub const NAME_ALIASES: &[(&str, &str)] = &[
    ("water", "정제수"),
    ("purified water", "정제수"),
    ("물", "정제수"),
    ("증류수", "정제수"),
    ("ethanol", "에탄올"),
    ("ethyl alcohol", "에탄올"),
    ("에틸알코올", "에탄올"),
    ("에틸 알코올", "에탄올"),
    ("methanol", "메탄올"),
    ("methyl alcohol", "메탄올"),
    ("메틸알코올", "메탄올"),
    ("isopropyl alcohol", "이소프로필알코올"),
    ("isopropanol", "이소프로필알코올"),
    ("ipa", "이소프로필알코올"),
    ("2-propanol", "이소프로필알코올"),
    ("이소프로판올", "이소프로필알코올"),
    ("acetone", "아세톤"),
    ("toluene", "톨루엔"),
    ("xylene", "자일렌"),
    ("크실렌", "자일렌"),
    ("benzene", "벤젠"),
    ("n-hexane", "노말헥산"),
    ("hexane", "노말헥산"),
    ("n-헥산", "노말헥산"),
    ("ethyl acetate", "초산에틸"),
    ("아세트산에틸", "초산에틸"),
    ("formaldehyde", "포름알데히드"),
    ("포름알데하이드", "포름알데히드"),
    ("propylene glycol", "프로필렌글리콜"),
    ("glycerin", "글리세린"),
    ("glycerol", "글리세린"),
    ("sodium chloride", "염화나트륨"),
    ("sodium hydroxide", "수산화나트륨"),
    ("caustic soda", "수산화나트륨"),
    ("가성소다", "수산화나트륨"),
    ("hydrochloric acid", "염산"),
    ("sulfuric acid", "황산"),
    ("sulphuric acid", "황산"),
    ("nitric acid", "질산"),
    ("hydrogen peroxide", "과산화수소"),
];
