//! Built-in route data for the public site.

use crate::routing::RouteKey;

/// Literal path templates of one route, in `Language::ALL` order (en, sq, it).
#[derive(Debug, Clone, Copy)]
pub struct RouteDefinition {
    pub key: RouteKey,
    pub templates: [&'static str; 3],
}

pub(crate) const fn route(key: RouteKey, en: &'static str, sq: &'static str, it: &'static str) -> RouteDefinition {
    RouteDefinition {
        key,
        templates: [en, sq, it],
    }
}

pub const SITE_ROUTES: &[RouteDefinition] = &[
    route(RouteKey::Home, "/", "/sq/", "/it/"),
    // About
    route(RouteKey::About, "/about-us/", "/sq/rreth-nesh/", "/it/chi-siamo/"),
    route(
        RouteKey::MissionVision,
        "/about-us/mission-vision/",
        "/sq/rreth-nesh/misioni-dhe-vizioni/",
        "/it/chi-siamo/missione-e-visione/",
    ),
    route(
        RouteKey::QualityPolicy,
        "/about-us/quality-policy/",
        "/sq/rreth-nesh/politika-e-cilesise/",
        "/it/chi-siamo/politica-della-qualita/",
    ),
    route(
        RouteKey::CodeOfEthics,
        "/about-us/code-of-ethics/",
        "/sq/rreth-nesh/kodi-i-etikes/",
        "/it/chi-siamo/codice-etico/",
    ),
    route(
        RouteKey::Accreditation,
        "/about-us/accreditation/",
        "/sq/rreth-nesh/akreditimi/",
        "/it/chi-siamo/accreditamento/",
    ),
    route(
        RouteKey::Partnerships,
        "/about-us/partnerships/",
        "/sq/rreth-nesh/partneritetet/",
        "/it/chi-siamo/partnership/",
    ),
    // ISO standards
    route(RouteKey::IsoServices, "/services/iso", "/sq/sherbimet/iso", "/it/servizi/iso"),
    route(
        RouteKey::Iso9001,
        "/services/iso/iso-9001",
        "/sq/sherbimet/iso/iso-9001",
        "/it/servizi/iso/iso-9001",
    ),
    route(
        RouteKey::Iso14001,
        "/services/iso/iso-14001",
        "/sq/sherbimet/iso/iso-14001",
        "/it/servizi/iso/iso-14001",
    ),
    route(
        RouteKey::Iso22301,
        "/services/iso/iso-22301",
        "/sq/sherbimet/iso/iso-22301",
        "/it/servizi/iso/iso-22301",
    ),
    route(
        RouteKey::Iso27001,
        "/services/iso/iso-27001",
        "/sq/sherbimet/iso/iso-27001",
        "/it/servizi/iso/iso-27001",
    ),
    route(
        RouteKey::Iso37001,
        "/services/iso/iso-37001",
        "/sq/sherbimet/iso/iso-37001",
        "/it/servizi/iso/iso-37001",
    ),
    route(
        RouteKey::Iso39001,
        "/services/iso/iso-39001",
        "/sq/sherbimet/iso/iso-39001",
        "/it/servizi/iso/iso-39001",
    ),
    route(
        RouteKey::Iso45001,
        "/services/iso/iso-45001",
        "/sq/sherbimet/iso/iso-45001",
        "/it/servizi/iso/iso-45001",
    ),
    route(
        RouteKey::Iso50001,
        "/services/iso/iso-50001",
        "/sq/sherbimet/iso/iso-50001",
        "/it/servizi/iso/iso-50001",
    ),
    route(
        RouteKey::Haccp,
        "/services/iso/haccp",
        "/sq/sherbimet/iso/haccp",
        "/it/servizi/iso/haccp",
    ),
    route(
        RouteKey::CeMarking,
        "/services/ce-marking",
        "/sq/sherbimet/markimi-ce",
        "/it/servizi/marcatura-ce",
    ),
    // Services
    route(RouteKey::Services, "/services", "/sq/sherbimet", "/it/servizi"),
    route(
        RouteKey::EnergyEfficiency,
        "/services/additional/energy-efficiency",
        "/sq/sherbimet/eficenca-energjetike",
        "/it/servizi/efficienza-energetica",
    ),
    route(
        RouteKey::StaffTraining,
        "/services/additional/staff-training",
        "/sq/sherbimet/trajnimi-i-stafit",
        "/it/servizi/formazione-del-personale",
    ),
    route(
        RouteKey::ProfessionalCard,
        "/services/additional/professional-card",
        "/sq/sherbimet/karta-profesionale",
        "/it/servizi/tessera-professionale",
    ),
    route(
        RouteKey::TechnologicalCard,
        "/services/additional/technological-card",
        "/sq/sherbimet/karta-teknologjike",
        "/it/servizi/tessera-tecnologica",
    ),
    route(
        RouteKey::EquipmentEvaluation,
        "/services/additional/equipment-evaluation",
        "/sq/sherbimet/vleresimi-i-pajisjeve",
        "/it/servizi/valutazione-attrezzature",
    ),
    // Info pages
    route(RouteKey::Contact, "/contact", "/sq/kontakt", "/it/contatti"),
    route(RouteKey::Faq, "/faq", "/sq/pyetje-te-shpeshta", "/it/domande-frequenti"),
    route(
        RouteKey::TermsConditions,
        "/terms-and-conditions",
        "/sq/kushtet-dhe-afatet",
        "/it/termini-e-condizioni",
    ),
    // Certificates
    route(RouteKey::Certificates, "/certificates", "/sq/certifikatat", "/it/certificati"),
    route(
        RouteKey::CertificateVerify,
        "/certificate/:secureId",
        "/sq/certifikata/:secureId",
        "/it/certificato/:secureId",
    ),
    // Quote wizard
    route(
        RouteKey::QuoteForm,
        "/quote/:isoCode",
        "/sq/kerkese-oferte/:isoCode",
        "/it/richiesta-preventivo/:isoCode",
    ),
    // Blog
    route(RouteKey::Blog, "/blog", "/sq/blog", "/it/blog"),
    route(RouteKey::BlogPost, "/blog/:slug", "/sq/blog/:slug", "/it/blog/:slug"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_defined_once_in_order() {
        let keys: Vec<_> = SITE_ROUTES.iter().map(|def| def.key).collect();
        assert_eq!(keys, RouteKey::ALL.to_vec());
    }
}
