//! Core data types: catalog records and their facets, orders, user accounts and the cart.
//!
//! Every closed set (category, difficulty, status, role...) is an enum with a
//! display label. Parsing accepts the label or its kebab-case slug, ignoring case,
//! so both `"In Progress"` and `in-progress` name [`ProjectStatus::InProgress`].

use crate::error::{MarketError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

fn parse_label<T: Copy>(
    input: &str,
    all: &[T],
    label: fn(&T) -> &'static str,
    what: &str,
) -> Result<T> {
    let wanted = normalize(input);
    all.iter()
        .copied()
        .find(|v| normalize(label(v)) == wanted)
        .ok_or_else(|| {
            let valid: Vec<&str> = all.iter().map(label).collect();
            MarketError::Parse(format!(
                "Unknown {} '{}' (expected one of: {})",
                what,
                input,
                valid.join(", ")
            ))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "AI")]
    Ai,
    Design,
    Business,
    Healthcare,
    #[serde(rename = "Healthcare AI")]
    HealthcareAi,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    Sustainability,
    #[serde(rename = "EdTech")]
    EdTech,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::DataScience,
        Category::WebDevelopment,
        Category::Ai,
        Category::Design,
        Category::Business,
        Category::Healthcare,
        Category::HealthcareAi,
        Category::ComputerVision,
        Category::Sustainability,
        Category::EdTech,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::DataScience => "Data Science",
            Category::WebDevelopment => "Web Development",
            Category::Ai => "AI",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Healthcare => "Healthcare",
            Category::HealthcareAi => "Healthcare AI",
            Category::ComputerVision => "Computer Vision",
            Category::Sustainability => "Sustainability",
            Category::EdTech => "EdTech",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Available,
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Available,
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Available => "Available",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub status: ProjectStatus,
    pub highlights: String,
    pub rating: f32,
}

impl ProjectRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: Category,
        difficulty: Difficulty,
        status: ProjectStatus,
        highlights: impl Into<String>,
        rating: f32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            difficulty,
            status,
            highlights: highlights.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub title: String,
    pub followers: u32,
    pub projects: u32,
    pub rating: f32,
    pub bio: String,
}

impl CreatorProfile {
    /// The creator's first name, as used in "more projects by ..." links.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// The listing page of a purchasable project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: u32,
    pub title: String,
    pub tag: Category,
    /// Price in whole US dollars.
    pub price: u32,
    pub bundle_count: u32,
    pub rating: f32,
    pub reviews: u32,
    pub downloads: u32,
    pub description: String,
    pub sub_projects: Vec<String>,
    pub features: Vec<String>,
    pub creator: CreatorProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Creator,
    Customer,
    Educator,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Creator, Role::Customer, Role::Educator];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Creator => "Creator",
            Role::Customer => "Customer",
            Role::Educator => "Educator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub project: String,
    /// Whole dollars.
    pub amount: u64,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub join_date: NaiveDate,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub project_id: u32,
    pub title: String,
    pub price: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Adds one unit of the project, merging with an existing line.
    pub fn add(&mut self, detail: &ProjectDetail) {
        match self.lines.iter_mut().find(|l| l.project_id == detail.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                project_id: detail.id,
                title: detail.title.clone(),
                price: detail.price,
                quantity: 1,
            }),
        }
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $what:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = MarketError;

            fn from_str(s: &str) -> Result<Self> {
                parse_label(s, &<$ty>::ALL, <$ty>::label, $what)
            }
        }
    };
}

impl_label_traits!(Category, "category");
impl_label_traits!(Difficulty, "difficulty");
impl_label_traits!(ProjectStatus, "status");
impl_label_traits!(Role, "role");
impl_label_traits!(OrderStatus, "order status");

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!(
            "Data Science".parse::<Category>().unwrap(),
            Category::DataScience
        );
        assert_eq!(
            "data-science".parse::<Category>().unwrap(),
            Category::DataScience
        );
        assert_eq!("ai".parse::<Category>().unwrap(), Category::Ai);
        assert_eq!(
            "in_progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
        assert_eq!(
            "ADVANCED".parse::<Difficulty>().unwrap(),
            Difficulty::Advanced
        );
        assert_eq!("educator".parse::<Role>().unwrap(), Role::Educator);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "Robotics".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'Robotics'"));
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }

    #[test]
    fn cart_merges_lines_and_totals() {
        let detail = crate::catalog::Catalog::featured().detail(2).unwrap().clone();
        let mut cart = Cart::default();
        cart.add(&detail);
        cart.add(&detail);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 2 * 2999);
    }
}
