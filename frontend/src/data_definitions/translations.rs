//! UI labels for the supported languages. Unknown keys are shown as-is.

pub fn translate(language_code: &str, key: &str) -> String {
    let label = match language_code {
        "fr" => french(key),
        _ => None,
    };
    label.or_else(|| english(key)).unwrap_or(key).to_string()
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "filters" => "Filters",
        "species" => "Species",
        "datasets" => "Datasets",
        "areas" => "Areas",
        "dataImports" => "Data imports",
        "dateRange" => "Date range",
        "from" => "From",
        "to" => "To",
        "status" => "Status",
        "all" => "All",
        "seen" => "Seen",
        "unseen" => "Unseen",
        "clearAll" => "Clear all filters",
        "copyLink" => "Copy link",
        "linkCopied" => "Link copied to clipboard.",
        "map" => "Map",
        "table" => "Table",
        "observations" => "observations",
        "observationsMatching" => "observations match the selected filters",
        "markAllAsSeen" => "Mark all as seen",
        "markAsSeenQueued" => "Observations are being marked as seen.",
        "search" => "Search",
        "selectTag" => "Select tag",
        "none" => "None",
        "scientificName" => "Scientific name",
        "vernacularName" => "Vernacular name",
        "gbifTaxonKey" => "GBIF taxon key",
        "name" => "Name",
        "gbifKey" => "GBIF key",
        "type" => "Type",
        "id" => "Id",
        "date" => "Date",
        "numberOfObservations" => "Observations",
        "dataset" => "Dataset",
        "userSpecific" => "My areas",
        "shared" => "Public",
        "baseLayer" => "Base layer",
        "zoom" => "Zoom",
        "aggregated" => "Hexagon grid",
        "raw" => "Individual observations",
        "hexagonSize" => "Hexagon size",
        "previous" => "Previous",
        "next" => "Next",
        "page" => "Page",
        "histogram" => "Observations per month",
        "noData" => "No observations",
        "dashboardSubtitle" => "Observation dashboard",
        "dataLayerOpacity" => "Data layer opacity",
        "showAreaOutlines" => "Show selected areas",
        _ => return None,
    })
}

fn french(key: &str) -> Option<&'static str> {
    Some(match key {
        "filters" => "Filtres",
        "species" => "Espèces",
        "datasets" => "Jeux de données",
        "areas" => "Zones",
        "dataImports" => "Imports de données",
        "dateRange" => "Période",
        "from" => "Du",
        "to" => "Au",
        "status" => "Statut",
        "all" => "Tous",
        "seen" => "Vues",
        "unseen" => "Non vues",
        "clearAll" => "Effacer tous les filtres",
        "copyLink" => "Copier le lien",
        "linkCopied" => "Lien copié.",
        "map" => "Carte",
        "table" => "Tableau",
        "observations" => "observations",
        "observationsMatching" => "observations correspondent aux filtres",
        "markAllAsSeen" => "Tout marquer comme vu",
        "markAsSeenQueued" => "Les observations sont en cours de marquage.",
        "search" => "Rechercher",
        "selectTag" => "Sélectionner le tag",
        "none" => "Aucun",
        "scientificName" => "Nom scientifique",
        "vernacularName" => "Nom vernaculaire",
        "name" => "Nom",
        "date" => "Date",
        "dataset" => "Jeu de données",
        "userSpecific" => "Mes zones",
        "shared" => "Publique",
        "baseLayer" => "Fond de carte",
        "aggregated" => "Grille hexagonale",
        "raw" => "Observations individuelles",
        "hexagonSize" => "Taille des hexagones",
        "previous" => "Précédent",
        "next" => "Suivant",
        "page" => "Page",
        "histogram" => "Observations par mois",
        "noData" => "Aucune observation",
        "dashboardSubtitle" => "Tableau de bord des observations",
        "dataLayerOpacity" => "Opacité des données",
        "showAreaOutlines" => "Afficher les zones sélectionnées",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english_then_key() {
        assert_eq!(translate("fr", "species"), "Espèces");
        assert_eq!(translate("fr", "gbifKey"), "GBIF key");
        assert_eq!(translate("nl", "areas"), "Areas");
        assert_eq!(translate("en", "unknownKey"), "unknownKey");
    }

    #[test]
    fn navbar_and_map_labels_exist_in_both_languages() {
        for key in ["dashboardSubtitle", "dataLayerOpacity", "showAreaOutlines"] {
            assert_ne!(translate("en", key), key);
            assert_ne!(translate("fr", key), translate("en", key));
        }
    }
}
