use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical page identifier, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKey {
    Home,
    About,
    MissionVision,
    QualityPolicy,
    CodeOfEthics,
    Accreditation,
    Partnerships,
    IsoServices,
    Iso9001,
    Iso14001,
    Iso22301,
    Iso27001,
    Iso37001,
    Iso39001,
    Iso45001,
    Iso50001,
    Haccp,
    CeMarking,
    Services,
    EnergyEfficiency,
    StaffTraining,
    ProfessionalCard,
    TechnologicalCard,
    EquipmentEvaluation,
    Contact,
    Faq,
    TermsConditions,
    Certificates,
    CertificateVerify,
    QuoteForm,
    Blog,
    BlogPost,
}

impl RouteKey {
    /// Every route key in matching order.
    pub const ALL: [RouteKey; 32] = [
        RouteKey::Home,
        RouteKey::About,
        RouteKey::MissionVision,
        RouteKey::QualityPolicy,
        RouteKey::CodeOfEthics,
        RouteKey::Accreditation,
        RouteKey::Partnerships,
        RouteKey::IsoServices,
        RouteKey::Iso9001,
        RouteKey::Iso14001,
        RouteKey::Iso22301,
        RouteKey::Iso27001,
        RouteKey::Iso37001,
        RouteKey::Iso39001,
        RouteKey::Iso45001,
        RouteKey::Iso50001,
        RouteKey::Haccp,
        RouteKey::CeMarking,
        RouteKey::Services,
        RouteKey::EnergyEfficiency,
        RouteKey::StaffTraining,
        RouteKey::ProfessionalCard,
        RouteKey::TechnologicalCard,
        RouteKey::EquipmentEvaluation,
        RouteKey::Contact,
        RouteKey::Faq,
        RouteKey::TermsConditions,
        RouteKey::Certificates,
        RouteKey::CertificateVerify,
        RouteKey::QuoteForm,
        RouteKey::Blog,
        RouteKey::BlogPost,
    ];

    /// The camelCase name used in URLs, JSON and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::About => "about",
            RouteKey::MissionVision => "missionVision",
            RouteKey::QualityPolicy => "qualityPolicy",
            RouteKey::CodeOfEthics => "codeOfEthics",
            RouteKey::Accreditation => "accreditation",
            RouteKey::Partnerships => "partnerships",
            RouteKey::IsoServices => "isoServices",
            RouteKey::Iso9001 => "iso9001",
            RouteKey::Iso14001 => "iso14001",
            RouteKey::Iso22301 => "iso22301",
            RouteKey::Iso27001 => "iso27001",
            RouteKey::Iso37001 => "iso37001",
            RouteKey::Iso39001 => "iso39001",
            RouteKey::Iso45001 => "iso45001",
            RouteKey::Iso50001 => "iso50001",
            RouteKey::Haccp => "haccp",
            RouteKey::CeMarking => "ceMarking",
            RouteKey::Services => "services",
            RouteKey::EnergyEfficiency => "energyEfficiency",
            RouteKey::StaffTraining => "staffTraining",
            RouteKey::ProfessionalCard => "professionalCard",
            RouteKey::TechnologicalCard => "technologicalCard",
            RouteKey::EquipmentEvaluation => "equipmentEvaluation",
            RouteKey::Contact => "contact",
            RouteKey::Faq => "faq",
            RouteKey::TermsConditions => "termsConditions",
            RouteKey::Certificates => "certificates",
            RouteKey::CertificateVerify => "certificateVerify",
            RouteKey::QuoteForm => "quoteForm",
            RouteKey::Blog => "blog",
            RouteKey::BlogPost => "blogPost",
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteKey {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RouteError::UnknownRoute(s.to_string()))
    }
}
