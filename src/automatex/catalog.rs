//! # Catalog Store
//!
//! The fixed collection of marketplace projects. Records are built once, on first
//! access, and never mutated afterwards; every API instance gets its own clone.
//!
//! Order matters: the filter engine returns matches in catalog order, so the list
//! below is the order a browsing user sees.
//!
//! Only some projects have a listing page ([`ProjectDetail`]) with a price. The
//! cart and checkout only accept those.

use crate::model::{
    Category, CreatorProfile, Difficulty, ProjectDetail, ProjectRecord, ProjectStatus,
};
use once_cell::sync::Lazy;

static FEATURED: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(featured_projects(), listing_pages()));

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    details: Vec<ProjectDetail>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>, details: Vec<ProjectDetail>) -> Self {
        Self { records, details }
    }

    /// The storefront's featured projects.
    pub fn featured() -> Self {
        FEATURED.clone()
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn detail(&self, id: u32) -> Option<&ProjectDetail> {
        self.details.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn featured_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            1,
            "SmileCare AI",
            Category::HealthcareAi,
            Difficulty::Advanced,
            ProjectStatus::InProgress,
            "Real-time dental diagnostics, patient engagement tools",
            4.8,
        ),
        ProjectRecord::new(
            2,
            "EcoTrack",
            Category::Sustainability,
            Difficulty::Intermediate,
            ProjectStatus::Available,
            "Carbon footprint tracker with gamified UX",
            4.6,
        ),
        ProjectRecord::new(
            3,
            "Finlytics",
            Category::DataScience,
            Difficulty::Advanced,
            ProjectStatus::Completed,
            "Predictive analytics for financial markets",
            4.9,
        ),
        ProjectRecord::new(
            4,
            "EduConnect",
            Category::EdTech,
            Difficulty::Beginner,
            ProjectStatus::Available,
            "Interactive learning platform with quizzes & flashcards",
            4.5,
        ),
        ProjectRecord::new(
            5,
            "VisionHub",
            Category::ComputerVision,
            Difficulty::Advanced,
            ProjectStatus::InProgress,
            "Radiograph analysis with automated reporting",
            4.7,
        ),
        ProjectRecord::new(
            6,
            "DataFlow",
            Category::DataScience,
            Difficulty::Intermediate,
            ProjectStatus::Available,
            "Real-time data pipeline with visualization",
            4.4,
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn listing_pages() -> Vec<ProjectDetail> {
    vec![
        ProjectDetail {
            id: 1,
            title: "SmileCare AI".to_string(),
            tag: Category::HealthcareAi,
            price: 4999,
            bundle_count: 8,
            rating: 4.8,
            reviews: 128,
            downloads: 1250,
            description: "Unlock the power of dental diagnostics with 8+ AI-powered projects \
                covering Real-time dental analysis, Patient engagement tools, and Diagnostic \
                algorithms, using cutting-edge frameworks like TensorFlow and PyTorch."
                .to_string(),
            sub_projects: strings(&[
                "Real-time Dental Diagnostics Engine",
                "Patient Engagement Platform",
                "AI-Powered Disease Detection",
                "Treatment Recommendation System",
                "Dental Imaging Processor",
                "Patient Records Manager",
                "Analytics Dashboard",
                "Mobile Application",
            ]),
            features: strings(&[
                "8+ complete healthcare AI projects",
                "Medical-grade frameworks",
                "HIPAA-compliant datasets",
                "Production-ready code",
                "Real-time processing capabilities",
                "Mobile-optimized solutions",
            ]),
            creator: CreatorProfile {
                name: "Dr. Sarah Chen".to_string(),
                title: "AI Healthcare Specialist".to_string(),
                followers: 2400,
                projects: 12,
                rating: 4.9,
                bio: "Specialized in healthcare AI and dental technology with 8+ years of \
                    experience"
                    .to_string(),
            },
        },
        ProjectDetail {
            id: 2,
            title: "EcoTrack".to_string(),
            tag: Category::Sustainability,
            price: 2999,
            bundle_count: 6,
            rating: 4.6,
            reviews: 94,
            downloads: 856,
            description: "Transform environmental awareness with 6+ sustainability projects \
                featuring Carbon footprint tracking, Gamified user experience, and Real-time \
                emissions monitoring, using modern frameworks like React and Django."
                .to_string(),
            sub_projects: strings(&[
                "Carbon Footprint Calculator",
                "Sustainability Dashboard",
                "Emission Tracker Widget",
                "Gamification Engine",
                "Community Challenges Platform",
                "Impact Report Generator",
            ]),
            features: strings(&[
                "6+ complete sustainability projects",
                "Gamification mechanics included",
                "Real-time data tracking",
                "User-friendly interfaces",
                "API integration ready",
                "Mobile responsive design",
            ]),
            creator: CreatorProfile {
                name: "Marcus Green".to_string(),
                title: "Sustainability Developer".to_string(),
                followers: 1800,
                projects: 9,
                rating: 4.7,
                bio: "Environmental tech enthusiast building solutions for a greener planet"
                    .to_string(),
            },
        },
        ProjectDetail {
            id: 3,
            title: "Finlytics".to_string(),
            tag: Category::DataScience,
            price: 5999,
            bundle_count: 12,
            rating: 4.9,
            reviews: 167,
            downloads: 2100,
            description: "Master financial prediction with 12+ data science projects covering \
                Predictive analytics, Risk assessment, Portfolio optimization, and Market \
                analysis, using advanced libraries like scikit-learn and TensorFlow."
                .to_string(),
            sub_projects: strings(&[
                "Stock Price Predictor",
                "Risk Assessment Engine",
                "Portfolio Optimizer",
                "Market Anomaly Detector",
                "Fraud Detection System",
                "Credit Scoring Model",
                "Economic Trend Analyzer",
                "Options Pricing Calculator",
                "Sentiment Analysis for Stocks",
                "Backtesting Framework",
                "Automated Trading Bot",
                "Performance Attribution Tool",
            ]),
            features: strings(&[
                "12+ advanced analytics projects",
                "Real market datasets included",
                "Backtesting framework",
                "Machine learning models",
                "Advanced statistical analysis",
                "Professional reporting tools",
            ]),
            creator: CreatorProfile {
                name: "Alex Patel".to_string(),
                title: "Data Science & Finance Expert".to_string(),
                followers: 3200,
                projects: 15,
                rating: 4.95,
                bio: "10+ years in quantitative finance and machine learning".to_string(),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_catalog_has_six_records_in_order() {
        let catalog = Catalog::featured();
        let ids: Vec<u32> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn details_match_their_records() {
        let catalog = Catalog::featured();
        for id in 1..=3 {
            let record = catalog.get(id).unwrap();
            let detail = catalog.detail(id).unwrap();
            assert_eq!(record.title, detail.title);
            assert_eq!(record.category, detail.tag);
        }
        assert!(catalog.detail(4).is_none());
    }

    #[test]
    fn creator_first_name() {
        let catalog = Catalog::featured();
        assert_eq!(catalog.detail(2).unwrap().creator.first_name(), "Marcus");
    }
}
