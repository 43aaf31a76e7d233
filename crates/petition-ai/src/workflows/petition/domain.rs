use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of completed criteria required before an application can be submitted.
pub const ELIGIBILITY_THRESHOLD: usize = 3;

/// Evidentiary categories an applicant can satisfy.
///
/// Declaration order is significant: it is the tie-break order used when ranking
/// recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Awards,
    Membership,
    PublishedMaterial,
    Judging,
    Contributions,
    Authorship,
    CriticalEmployment,
    Remuneration,
}

impl Criterion {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Awards,
            Self::Membership,
            Self::PublishedMaterial,
            Self::Judging,
            Self::Contributions,
            Self::Authorship,
            Self::CriticalEmployment,
            Self::Remuneration,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Awards => "awards",
            Self::Membership => "membership",
            Self::PublishedMaterial => "published_material",
            Self::Judging => "judging",
            Self::Contributions => "contributions",
            Self::Authorship => "authorship",
            Self::CriticalEmployment => "critical_employment",
            Self::Remuneration => "remuneration",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Awards => "Awards",
            Self::Membership => "Membership",
            Self::PublishedMaterial => "Published Material",
            Self::Judging => "Judging",
            Self::Contributions => "Original Contributions",
            Self::Authorship => "Scholarly Articles",
            Self::CriticalEmployment => "Critical Employment",
            Self::Remuneration => "High Remuneration",
        }
    }

    pub fn definition(self) -> &'static CriterionDefinition {
        match self {
            Self::Awards => &CATALOG[0],
            Self::Membership => &CATALOG[1],
            Self::PublishedMaterial => &CATALOG[2],
            Self::Judging => &CATALOG[3],
            Self::Contributions => &CATALOG[4],
            Self::Authorship => &CATALOG[5],
            Self::CriticalEmployment => &CATALOG[6],
            Self::Remuneration => &CATALOG[7],
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable reference data describing one criterion.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionDefinition {
    pub criterion: Criterion,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub examples: &'static [&'static str],
    /// 1 is the most commonly accepted criterion; used only for default display order.
    pub commonality: u8,
}

/// Catalog in commonality order.
pub fn definitions() -> &'static [CriterionDefinition] {
    &CATALOG
}

static CATALOG: [CriterionDefinition; 8] = [
    CriterionDefinition {
        criterion: Criterion::Awards,
        title: "Awards",
        short_description: "Nationally or internationally recognized prizes or awards",
        full_description: "Documentation of receipt of lesser nationally or internationally recognized prizes or awards for excellence in the field of endeavor.",
        examples: &[
            "Industry awards (e.g., Emmy, Grammy, Oscar equivalents in your field)",
            "Best paper awards at major conferences",
            "Government or foundation grants for exceptional work",
            "Company-wide recognition awards for outstanding contributions",
        ],
        commonality: 1,
    },
    CriterionDefinition {
        criterion: Criterion::Membership,
        title: "Membership",
        short_description: "Membership in associations requiring outstanding achievement",
        full_description: "Documentation of membership in associations in the field which require outstanding achievements as judged by recognized experts.",
        examples: &[
            "Fellow status in professional societies (IEEE Fellow, ACM Fellow)",
            "Invitation-only membership organizations",
            "Boards of directors for industry associations",
            "Advisory committees requiring expertise",
        ],
        commonality: 2,
    },
    CriterionDefinition {
        criterion: Criterion::PublishedMaterial,
        title: "Published Material",
        short_description: "Published material about you in major media",
        full_description: "Published material in professional or major trade publications or major media about the person and their work.",
        examples: &[
            "Feature articles in major newspapers (NYT, WSJ, etc.)",
            "Profiles in industry publications",
            "Interviews in trade magazines",
            "Coverage by major online tech publications",
        ],
        commonality: 3,
    },
    CriterionDefinition {
        criterion: Criterion::Judging,
        title: "Judging",
        short_description: "Participation as a judge of others' work",
        full_description: "Evidence of participation as a judge of the work of others, either individually or on a panel.",
        examples: &[
            "Peer reviewer for academic journals",
            "Grant proposal reviewer (NSF, NIH, etc.)",
            "Judge at industry competitions or hackathons",
            "Technical committee member for conferences",
        ],
        commonality: 4,
    },
    CriterionDefinition {
        criterion: Criterion::Contributions,
        title: "Original Contributions",
        short_description: "Original contributions of major significance",
        full_description: "Evidence of original scientific, scholarly, or business-related contributions of major significance in the field.",
        examples: &[
            "Patents with significant commercial impact",
            "Open-source projects widely adopted in industry",
            "Novel algorithms or methodologies cited by others",
            "Products or features used by millions of users",
        ],
        commonality: 5,
    },
    CriterionDefinition {
        criterion: Criterion::Authorship,
        title: "Scholarly Articles",
        short_description: "Authorship of scholarly articles",
        full_description: "Evidence of authorship of scholarly articles in professional journals or other major media.",
        examples: &[
            "Peer-reviewed journal publications",
            "Conference papers at top venues",
            "Technical books or book chapters",
            "Widely-cited blog posts or technical articles",
        ],
        commonality: 6,
    },
    CriterionDefinition {
        criterion: Criterion::CriticalEmployment,
        title: "Critical Employment",
        short_description: "Employment in a critical or essential capacity",
        full_description: "Evidence of employment in a critical or essential capacity for organizations with a distinguished reputation.",
        examples: &[
            "Lead engineer or architect for major products",
            "Department head or VP at notable companies",
            "Founding team member of successful startups",
            "Key contributor to mission-critical systems",
        ],
        commonality: 7,
    },
    CriterionDefinition {
        criterion: Criterion::Remuneration,
        title: "High Remuneration",
        short_description: "High salary or remuneration compared to others",
        full_description: "Evidence of commanding a high salary or other significantly high remuneration for services.",
        examples: &[
            "Salary in top 10% for your role and location",
            "Significant equity compensation",
            "Large signing bonuses",
            "High consulting fees or speaking honorariums",
        ],
        commonality: 8,
    },
];

/// Opaque identifier shared by criterion entries and intake records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Visa currently held by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    B1B2,
    F1,
    H1b,
    J1,
    L1,
    E2,
    Tn,
    Other,
    #[default]
    None,
}

impl VisaType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::B1B2 => "B-1/B-2 (Visitor)",
            Self::F1 => "F-1 (Student)",
            Self::H1b => "H-1B (Specialty Occupation)",
            Self::J1 => "J-1 (Exchange Visitor)",
            Self::L1 => "L-1 (Intracompany Transferee)",
            Self::E2 => "E-2 (Treaty Investor)",
            Self::Tn => "TN (NAFTA Professional)",
            Self::Other => "Other",
            Self::None => "No current visa",
        }
    }
}

/// Applicant identity and address captured on the landing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub country_of_birth: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub current_visa_type: VisaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_image: Option<super::evidence::FileAttachment>,
}

/// Partial demographics update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicsPatch {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub country_of_birth: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub current_visa_type: Option<VisaType>,
    pub passport_image: Option<super::evidence::FileAttachment>,
}

impl Demographics {
    pub fn apply(&mut self, patch: DemographicsPatch) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        set(&mut self.first_name, patch.first_name);
        if patch.middle_name.is_some() {
            self.middle_name = patch.middle_name;
        }
        set(&mut self.last_name, patch.last_name);
        set(&mut self.country_of_birth, patch.country_of_birth);
        set(&mut self.street_address, patch.street_address);
        set(&mut self.city, patch.city);
        set(&mut self.state, patch.state);
        set(&mut self.zip_code, patch.zip_code);
        set(&mut self.country, patch.country);
        set(&mut self.current_visa_type, patch.current_visa_type);
        if patch.passport_image.is_some() {
            self.passport_image = patch.passport_image;
        }
    }
}

/// Label controlling which affordances are shown. Carries no authorization weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Applicant,
    Reviewer,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicant => "Applicant",
            Self::Reviewer => "Reviewer",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Applicant => Self::Reviewer,
            Self::Reviewer => Self::Applicant,
        }
    }
}
