//! # Fixed catalogs shared by forms and tables
//!
//! The backend identifies these by small integer ids; the dashboard shows the
//! labels. None of them are fetched: the id ↔ label tables are part of the
//! API contract.
//!
//! | Type | Ids |
//! |------|-----|
//! | [`Timeline`] | 1 Monthly, 2 Quarterly, 3 Half-Yearly, 4 Yearly |
//! | [`BillingCycle`] | 1 Monthly, 2 Quarterly, 3 Half Yearly, 4 Yearly |
//! | [`Platform`] | 1 iOS, 2 Android, 3 Web |
//! | [`PackageTier`] | 1 Basic, 2 Advanced, 3 Premium |
//! | [`ClientStatus`] | `"Active"`, `"Deactive"`, anything else is `Unknown` |
//! | [`EnquiryStatus`] | `"Pending"` (1), `"In Progress"` (2), `"Resolved"` (3) |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::value_to_int;

/// Subscription length of a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "u8")]
pub enum Timeline {
    #[default]
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Monthly,
        Timeline::Quarterly,
        Timeline::HalfYearly,
        Timeline::Yearly,
    ];

    pub fn id(self) -> u8 {
        match self {
            Timeline::Monthly => 1,
            Timeline::Quarterly => 2,
            Timeline::HalfYearly => 3,
            Timeline::Yearly => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Monthly => "Monthly",
            Timeline::Quarterly => "Quarterly",
            Timeline::HalfYearly => "Half-Yearly",
            Timeline::Yearly => "Yearly",
        }
    }

    /// Accepts an id (`"3"`) or a label in any case (`"half-yearly"`).
    /// Unrecognised or empty input is `Monthly`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().to_string() == input || t.label().eq_ignore_ascii_case(input))
            .unwrap_or_default()
    }
}

impl From<Value> for Timeline {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Timeline::parse(&s),
            other => value_to_int(&other)
                .map(|id| Timeline::parse(&id.to_string()))
                .unwrap_or_default(),
        }
    }
}

impl From<Timeline> for u8 {
    fn from(t: Timeline) -> u8 {
        t.id()
    }
}

/// Billing period of a package. Same ids as [`Timeline`], different labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 4] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::HalfYearly,
        BillingCycle::Yearly,
    ];

    pub fn id(self) -> i64 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 2,
            BillingCycle::HalfYearly => 3,
            BillingCycle::Yearly => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::HalfYearly => "Half Yearly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Where a product runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    pub fn id(self) -> i64 {
        match self {
            Platform::Ios => 1,
            Platform::Android => 2,
            Platform::Web => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Web => "Web",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// Package name; the backend stores the tier id in `package_Id` on create.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageTier {
    Basic,
    Advanced,
    Premium,
}

impl PackageTier {
    pub const ALL: [PackageTier; 3] = [PackageTier::Basic, PackageTier::Advanced, PackageTier::Premium];

    pub fn id(self) -> i64 {
        match self {
            PackageTier::Basic => 1,
            PackageTier::Advanced => 2,
            PackageTier::Premium => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PackageTier::Basic => "Basic",
            PackageTier::Advanced => "Advanced",
            PackageTier::Premium => "Premium",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let tier = Self::ALL.into_iter().find(|t| t.label().eq_ignore_ascii_case(name));
        if tier.is_none() && !name.is_empty() {
            tracing::warn!("package name {name:?} does not match a known tier");
        }
        tier
    }
}

/// Whether a client's subscription is live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ClientStatus {
    Active,
    Deactive,
    #[default]
    Unknown,
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Deactive => "Deactive",
            ClientStatus::Unknown => "Unknown",
        }
    }
}

impl From<Option<String>> for ClientStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("Active") => ClientStatus::Active,
            Some("Deactive") => ClientStatus::Deactive,
            _ => ClientStatus::Unknown,
        }
    }
}

/// Progress of a sales lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum EnquiryStatus {
    Pending,
    InProgress,
    Resolved,
    #[default]
    Unknown,
}

impl EnquiryStatus {
    /// The three states an admin can pick.
    pub const CHOICES: [EnquiryStatus; 3] = [
        EnquiryStatus::Pending,
        EnquiryStatus::InProgress,
        EnquiryStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "Pending",
            EnquiryStatus::InProgress => "In Progress",
            EnquiryStatus::Resolved => "Resolved",
            EnquiryStatus::Unknown => "Unknown",
        }
    }

    /// Code sent as `en_Status` on update.
    pub fn code(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "1",
            EnquiryStatus::InProgress => "2",
            EnquiryStatus::Resolved | EnquiryStatus::Unknown => "3",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::from(Some(label.to_string()))
    }
}

impl From<Option<String>> for EnquiryStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("Pending") => EnquiryStatus::Pending,
            Some("In Progress") => EnquiryStatus::InProgress,
            Some("Resolved") => EnquiryStatus::Resolved,
            _ => EnquiryStatus::Unknown,
        }
    }
}
