//! Category catalog: display metadata and synthetic datasets per category
//!
//! A single mapping from [`FacilityCategory`] to everything the generator
//! and the renderer need: display name, icon, name pool, distance range and
//! result cap. Large hospitals are deliberately modeled as farther away
//! than clinics and pharmacies, and capped at fewer results.

use crate::types::FacilityCategory;

/// Distance range in meters for clinics and pharmacies, half-open
pub const CLINIC_DISTANCE_RANGE_M: (f64, f64) = (50.0, 1_550.0);

/// Distance range in meters for general hospitals, half-open
pub const HOSPITAL_DISTANCE_RANGE_M: (f64, f64) = (1_000.0, 9_000.0);

/// Maximum results for general hospitals
pub const HOSPITAL_MAX_RESULTS: usize = 6;

/// Maximum results for every other category
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// City prefix used for every synthesized address
pub const CITY: &str = "서울시";

/// The seven fixed district names addresses are drawn from
pub const DISTRICTS: [&str; 7] =
    ["강남구", "서초구", "송파구", "마포구", "용산구", "중구", "종로구"];

/// Display metadata and synthetic dataset for one facility category
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    /// Human-readable category label
    pub display_name: &'static str,
    /// Icon shown next to facility names
    pub icon: &'static str,
    /// Pool of plausible facility names for this category
    pub name_pool: &'static [&'static str],
    /// Half-open distance range in meters facilities are placed within
    pub distance_range_m: (f64, f64),
    /// Upper bound on the number of generated facilities
    pub max_results: usize,
}

impl CategoryInfo {
    /// Number of facilities a search in this category yields:
    /// the result cap, further capped by the pool size
    pub fn result_count(&self) -> usize {
        self.max_results.min(self.name_pool.len())
    }
}

const INTERNAL_MEDICINE_NAMES: &[&str] = &[
    "튼튼내과", "맑은내과", "연세내과", "본내과", "희망내과", "건강내과", "서울내과", "중앙내과",
    "행복내과", "미래내과", "새로운내과", "좋은내과",
];

const ORTHOPEDIC_NAMES: &[&str] = &[
    "튼튼정형외과", "바른정형외과", "참정형외과", "본정형외과", "행복정형외과", "건강정형외과",
    "서울정형외과", "중앙정형외과", "미래정형외과", "새로운정형외과", "좋은정형외과",
    "우리정형외과",
];

const DENTAL_NAMES: &[&str] = &[
    "미소치과", "밝은치과", "연세치과", "튼튼치과", "스마일치과", "건강치과", "서울치과",
    "중앙치과", "행복치과", "미래치과", "새로운치과", "좋은치과",
];

const ENT_NAMES: &[&str] = &[
    "코앤귀이비인후과", "맑은이비인후과", "소리이비인후과", "편한이비인후과", "사랑이비인후과",
    "건강이비인후과", "서울이비인후과", "중앙이비인후과", "행복이비인후과", "미래이비인후과",
];

const OPHTHALMOLOGY_NAMES: &[&str] = &[
    "밝은안과", "글로리아안과", "드림안과", "본안과", "연세안과", "건강안과", "서울안과",
    "중앙안과", "행복안과", "미래안과", "새로운안과", "좋은안과",
];

const PEDIATRIC_NAMES: &[&str] = &[
    "아이사랑소아과", "꼬마소아과", "튼튼소아과", "행복소아과", "미소소아과", "건강소아과",
    "서울소아과", "중앙소아과", "미래소아과", "새로운소아과", "우리소아과", "좋은소아과",
];

const GYNECOLOGY_NAMES: &[&str] = &[
    "여성병원", "마더스산부인과", "행복산부인과", "사랑산부인과", "여성의원", "건강산부인과",
    "서울산부인과", "중앙산부인과", "미래산부인과", "새로운산부인과",
];

const DERMATOLOGY_NAMES: &[&str] = &[
    "깨끗한피부과", "아름다운피부과", "건강피부과", "맑은피부과", "청춘피부과", "서울피부과",
    "중앙피부과", "행복피부과", "미래피부과", "새로운피부과", "좋은피부과", "우리피부과",
];

const NEUROLOGY_NAMES: &[&str] = &[
    "브레인신경과", "건강신경과", "맑은신경과", "행복신경과", "튼튼신경과", "서울신경과",
    "중앙신경과", "미래신경과", "새로운신경과", "좋은신경과",
];

const GENERAL_HOSPITAL_NAMES: &[&str] = &[
    "서울대학교병원", "삼성서울병원", "세브란스병원", "서울아산병원", "고려대학교병원",
    "한양대학교병원", "중앙대학교병원", "성균관대학교병원",
];

const PHARMACY_NAMES: &[&str] = &[
    "온누리약국", "참약국", "미소약국", "건강약국", "사랑약국", "서울약국", "중앙약국",
    "행복약국", "미래약국", "새로운약국", "좋은약국", "우리약국", "튼튼약국", "맑은약국",
];

/// Look up the catalog entry for a category
pub const fn info(category: FacilityCategory) -> CategoryInfo {
    match category {
        FacilityCategory::InternalMedicine => CategoryInfo {
            display_name: "내과",
            icon: "🩺",
            name_pool: INTERNAL_MEDICINE_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Orthopedic => CategoryInfo {
            display_name: "정형외과",
            icon: "🦴",
            name_pool: ORTHOPEDIC_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Dental => CategoryInfo {
            display_name: "치과",
            icon: "🦷",
            name_pool: DENTAL_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Ent => CategoryInfo {
            display_name: "이비인후과",
            icon: "👂",
            name_pool: ENT_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Ophthalmology => CategoryInfo {
            display_name: "안과",
            icon: "👁️",
            name_pool: OPHTHALMOLOGY_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Pediatric => CategoryInfo {
            display_name: "소아과",
            icon: "👶",
            name_pool: PEDIATRIC_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Gynecology => CategoryInfo {
            display_name: "산부인과",
            icon: "👩‍⚕️",
            name_pool: GYNECOLOGY_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Dermatology => CategoryInfo {
            display_name: "피부과",
            icon: "🧴",
            name_pool: DERMATOLOGY_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::Neurology => CategoryInfo {
            display_name: "신경과",
            icon: "🧠",
            name_pool: NEUROLOGY_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
        FacilityCategory::GeneralHospital => CategoryInfo {
            display_name: "대형병원",
            icon: "🏥",
            name_pool: GENERAL_HOSPITAL_NAMES,
            distance_range_m: HOSPITAL_DISTANCE_RANGE_M,
            max_results: HOSPITAL_MAX_RESULTS,
        },
        FacilityCategory::Pharmacy => CategoryInfo {
            display_name: "약국",
            icon: "💊",
            name_pool: PHARMACY_NAMES,
            distance_range_m: CLINIC_DISTANCE_RANGE_M,
            max_results: DEFAULT_MAX_RESULTS,
        },
    }
}
