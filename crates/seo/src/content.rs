//! Long-form marketing copy for a zone landing page.
//!
//! The copy is line-oriented markdown: `## ` headings, `- ` bullets and plain
//! paragraphs separated by blank lines. [`render_html`] turns it into HTML for
//! embedding in a page.

use balade_core::{Registry, Service, Zone};
use comrak::{Options, markdown_to_html};

/// Zone name, qualified by its parent when the parent resolves.
///
/// `"6e arrondissement (Lyon)"`, or just `"Lyon"` for a top-level zone or a
/// dangling parent reference.
#[must_use]
pub fn location_label(registry: &Registry, zone: &Zone) -> String {
    registry.parent_of(zone).map_or_else(
        || zone.name.clone(),
        |parent| format!("{} ({})", zone.name, parent.name),
    )
}

/// Build the marketing copy of `service` in `zone`.
///
/// Optional zone fields only contribute a sentence when they are set.
#[must_use]
pub fn local_content(registry: &Registry, zone: &Zone, service: &Service) -> String {
    let name = &zone.name;
    let label = location_label(registry, zone);
    let service_name = service.name_lowercase();

    let mut blocks: Vec<String> = vec![
        format!("## {} à {label}", service.name),
        format!(
            "Vous cherchez une {service_name} à {name} ? Balade met en relation les \
             propriétaires d'animaux avec des promeneurs et pet-sitters vérifiés, passionnés et \
             disponibles près de chez vous. {}",
            service.description
        ),
        zone.description.clone(),
    ];

    if let Some(population) = &zone.population {
        blocks.push(format!(
            "Avec ses {population} habitants, {name} compte de nombreux propriétaires de chiens \
             à la recherche d'une solution fiable pour leur compagnon."
        ));
    }

    blocks.push(format!("## Pourquoi choisir Balade à {name} ?"));
    blocks.push(
        [
            "- Des intervenants vérifiés : identité contrôlée et entretien individuel",
            "- Une assurance incluse pour chaque prestation",
            "- Des nouvelles et des photos après chaque sortie",
            "- Une réservation et un paiement sécurisés en ligne",
        ]
        .join("\n"),
    );

    blocks.push(format!("## Les meilleurs lieux de promenade à {name}"));
    if zone.highlights.is_empty() {
        blocks.push(format!(
            "Nos promeneurs connaissent les parcs, squares et chemins de {name} et choisissent \
             l'itinéraire le mieux adapté à votre chien."
        ));
    } else {
        blocks.push(
            zone.highlights
                .iter()
                .map(|highlight| format!("- {highlight}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    blocks.push(format!("## Comment réserver à {name} ?"));
    blocks.push(format!(
        "- Parcourez les profils des intervenants disponibles à {name}\n\
         - Échangez avec l'intervenant de votre choix\n\
         - Réservez et payez en ligne en toute sécurité"
    ));
    blocks.push(format!(
        "Réservez dès maintenant votre {service_name} à {label} et offrez à votre compagnon \
         l'attention qu'il mérite."
    ));

    blocks.join("\n\n")
}

/// Render generated copy to HTML.
///
/// Raw HTML in the input is omitted, since zone fields are data rather than
/// trusted markup. Text around the tags is kept.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.header_ids = Some(String::new());

    markdown_to_html(markdown, &options)
}
