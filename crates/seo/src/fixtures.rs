//! Small registry shared by the unit tests.

use balade_core::{Registry, Service, Zone};

const ZONES: &str = r#"
zones:
  - id: lyon
    name: Lyon
    slug: lyon
    type: city
    priority: 1
    department: "69"
    department_name: Rhône
    image: /images/zones/lyon.jpg
    image_alt: Quais de Saône à Lyon
    description: Entre Rhône et Saône, Lyon offre de grands parcs.
    population: 522 000
    highlights:
      - "Parc de la Tête d'Or"
      - Vieux Lyon
      - "Presqu'île"
  - id: lyon-6e
    name: 6e arrondissement
    slug: lyon-6e
    type: arrondissement
    parent: lyon
    priority: 2
    department: "69"
    image: /images/zones/lyon-6e.jpg
    image_alt: Parc de la Tête d'Or
    description: Les Brotteaux.
    highlights: []
  - id: orphan
    name: Quartier perdu
    slug: orphan
    type: quartier
    parent: nowhere
    priority: 4
    image: https://cdn.example.com/orphan.jpg
    image_alt: Rue
    description: Parent inconnu.
    highlights: [Place & Square]
"#;

const SERVICES: &str = r"
services:
  - id: promenade-chien
    name: Promenade de chien
    slug: promenade-chien
    description: Des balades quotidiennes avec un promeneur vérifié.
  - id: garde-chien
    name: Garde de chien
    slug: garde-chien
    description: Votre chien gardé pendant vos absences.
";

#[allow(clippy::unwrap_used)]
pub fn registry() -> Registry {
    Registry::from_yaml(ZONES, SERVICES).unwrap()
}

#[allow(clippy::unwrap_used)]
pub fn zone<'a>(registry: &'a Registry, id: &str) -> &'a Zone {
    registry.zone(id).unwrap()
}

#[allow(clippy::unwrap_used)]
pub fn walk(registry: &Registry) -> &Service {
    registry.service("promenade-chien").unwrap()
}
