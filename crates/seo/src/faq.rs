//! Local FAQ for a zone landing page.
//!
//! The FAQ always has five entries in a fixed order: pricing, walker
//! verification, best walking spots, group walks and booking.

use balade_core::{Service, Zone};
use serde::Serialize;

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(question: String, answer: String) -> Self {
        Self { question, answer }
    }
}

/// Build the FAQ of `service` in `zone`.
///
/// Every answer mentions the zone by name. An empty highlight list still
/// yields a well-formed (if thin) answer to the walking-spots question.
#[must_use]
pub fn local_faq(zone: &Zone, service: &Service) -> [FaqEntry; 5] {
    let name = &zone.name;
    let service_name = service.name_lowercase();

    [
        FaqEntry::new(
            format!("Quel est le prix d'une {service_name} à {name} ?"),
            format!(
                "À {name}, les tarifs d'une {service_name} commencent à partir de 15 € pour \
                 30 minutes. Chaque intervenant fixe ses propres prix selon la durée, le nombre \
                 d'animaux et les besoins de votre compagnon. Les tarifs sont affichés sur chaque \
                 profil, sans frais cachés."
            ),
        ),
        FaqEntry::new(
            format!("Les promeneurs de chiens à {name} sont-ils vérifiés ?"),
            format!(
                "Oui. Tous nos intervenants à {name} passent par un processus de vérification : \
                 contrôle d'identité, entretien individuel et validation de leur expérience avec \
                 les animaux. Chaque prestation réservée sur Balade est couverte par notre \
                 assurance."
            ),
        ),
        FaqEntry::new(
            format!("Quels sont les meilleurs endroits pour promener son chien à {name} ?"),
            format!(
                "À {name}, nos promeneurs apprécient particulièrement : {}. Ces lieux offrent \
                 de l'espace pour se dépenser et de nombreuses occasions de socialiser avec \
                 d'autres chiens.",
                zone.highlights_list()
            ),
        ),
        FaqEntry::new(
            format!("Proposez-vous des promenades en groupe à {name} ?"),
            format!(
                "Oui, certains promeneurs à {name} proposent des sorties en petit groupe, \
                 limitées à 4 chiens, idéales pour la socialisation. Les promenades \
                 individuelles restent disponibles pour les chiens qui préfèrent le calme."
            ),
        ),
        FaqEntry::new(
            format!("Comment réserver une {service_name} à {name} ?"),
            format!(
                "Réserver à {name} ne prend que quelques minutes : parcourez les profils des \
                 intervenants disponibles, comparez leurs avis et leurs tarifs, puis réservez \
                 directement en ligne. Vous pouvez échanger avec l'intervenant avant la \
                 première {service_name}."
            ),
        ),
    ]
}
