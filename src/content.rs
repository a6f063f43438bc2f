//! Static copy and tables rendered by the landing page.

use crate::components::icon::IconKind;

/// Identifiers of every section that takes part in reveal animation.
pub mod section {
    pub const STATS: &str = "stats";
    pub const SERVICES_TITLE: &str = "services-title";
    pub const FEATURES_TITLE: &str = "features-title";
    pub const FEATURES_LIST: &str = "features-list";
    pub const FEATURES_VISUAL: &str = "features-visual";
    pub const CTA: &str = "cta";
    /// One per entry of [`super::SERVICES`], in order.
    pub const SERVICES: [&str; 3] = ["service-0", "service-1", "service-2"];
}

/// Reveal delay between consecutive service cards.
pub const SERVICE_STAGGER_MS: u32 = 200;
pub const DASHBOARD_DELAY_MS: u32 = 300;

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

pub static STATS: [Stat; 4] = [
    Stat { number: "150+", label: "파트너 병원", icon: IconKind::Users },
    Stat { number: "32%", label: "평균 수익 증가", icon: IconKind::TrendingUp },
    Stat { number: "89%", label: "데이터 활용도", icon: IconKind::BarChart },
    Stat { number: "24/7", label: "지원 서비스", icon: IconKind::Shield },
];

/// A titled card used by both the services grid and the features list.
pub struct Card {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub color_class: &'static str,
}

pub static SERVICES: [Card; 3] = [
    Card {
        icon: IconKind::Database,
        title: "AI 데이터 분석",
        description: "머신러닝과 AI를 활용한 고도화된 의료 데이터 분석으로 숨겨진 인사이트를 발견합니다.",
        color_class: "service-blue",
    },
    Card {
        icon: IconKind::Clock,
        title: "스마트 시간 관리",
        description: "진료 외 시간을 효율적으로 관리하고 최적화하여 추가 수익원을 창출합니다.",
        color_class: "service-green",
    },
    Card {
        icon: IconKind::TrendingUp,
        title: "수익 최적화",
        description: "데이터 기반의 전략적 접근으로 병원의 수익성을 극대화하고 지속 성장을 보장합니다.",
        color_class: "service-purple",
    },
];

pub static FEATURES: [Card; 3] = [
    Card {
        icon: IconKind::Users,
        title: "의료 전문가 팀",
        description: "10년+ 경험의 의료 데이터 전문가들이 직접 컨설팅하고 전략을 수립합니다.",
        color_class: "feature-blue",
    },
    Card {
        icon: IconKind::Shield,
        title: "보안과 신뢰성",
        description: "의료 데이터의 보안과 개인정보 보호를 최우선으로 하는 검증된 시스템을 제공합니다.",
        color_class: "feature-green",
    },
    Card {
        icon: IconKind::Award,
        title: "검증된 성과",
        description: "150+ 병원과의 파트너십을 통해 검증된 수익 증대와 효율성 개선 사례를 보유하고 있습니다.",
        color_class: "feature-purple",
    },
];

/// Dashboard metric with the bar fill it animates to once revealed.
#[derive(Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub progress: u8,
    pub color_class: &'static str,
}

pub static METRICS: [Metric; 3] = [
    Metric { label: "월별 수익 증가율", value: "+32%", progress: 80, color_class: "metric-blue" },
    Metric { label: "데이터 활용도", value: "89%", progress: 89, color_class: "metric-green" },
    Metric { label: "환자 만족도", value: "95%", progress: 95, color_class: "metric-purple" },
];

pub struct Badge {
    pub icon: IconKind,
    pub label: &'static str,
}

pub static CTA_BADGES: [Badge; 3] = [
    Badge { icon: IconKind::Shield, label: "100% 보안" },
    Badge { icon: IconKind::Clock, label: "24/7 지원" },
    Badge { icon: IconKind::Award, label: "검증된 성과" },
];

/// Decorative floating blobs and their animation delay in seconds.
pub static FLOATING_ELEMENTS: [(&str, f64); 4] = [
    ("float-1", 0.0),
    ("float-2", 1.0),
    ("float-3", 2.0),
    ("float-4", 1.5),
];

pub fn metric(label: &str) -> Option<&'static Metric> {
    METRICS.iter().find(|metric| metric.label == label)
}
