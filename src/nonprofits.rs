use crate::errors::RoundupError;
use crate::vault::VaultReadable;
use clap::ValueEnum;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animals,
    Humans,
    Environment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animals => "animals",
            Category::Humans => "humans",
            Category::Environment => "environment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Nonprofit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Nonprofit {
    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.description.to_lowercase().contains(query)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Nonprofit>")]
pub struct Catalog {
    nonprofits: Vec<Nonprofit>,
}

impl VaultReadable for Catalog {
    const KEY: &'static str = "nonprofits";
}

impl Catalog {
    pub fn new(nonprofits: Vec<Nonprofit>) -> Result<Catalog, RoundupError> {
        if nonprofits.is_empty() {
            return Err(RoundupError::EmptyCatalog);
        }
        Ok(Catalog { nonprofits })
    }

    pub fn all(&self) -> &[Nonprofit] {
        &self.nonprofits
    }

    pub fn first(&self) -> Result<&Nonprofit, RoundupError> {
        self.nonprofits.first().ok_or(RoundupError::EmptyCatalog)
    }

    pub fn find(&self, id: &str) -> Result<&Nonprofit, RoundupError> {
        self.nonprofits
            .iter()
            .find(|nonprofit| nonprofit.id == id)
            .ok_or_else(|| RoundupError::UnknownNonprofit(id.to_string()))
    }

    /// Case-insensitive search over name and description, narrowed to a
    /// category when one is given. An empty query matches everything.
    pub fn filter(&self, query: &str, category: Option<Category>) -> Vec<&Nonprofit> {
        let query = query.trim().to_lowercase();
        self.nonprofits
            .iter()
            .filter(|nonprofit| nonprofit.matches(&query))
            .filter(|nonprofit| category.map_or(true, |category| nonprofit.category == category))
            .collect()
    }
}

impl TryFrom<Vec<Nonprofit>> for Catalog {
    type Error = RoundupError;

    fn try_from(nonprofits: Vec<Nonprofit>) -> Result<Self, Self::Error> {
        Catalog::new(nonprofits)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let nonprofits = DEFAULT_NONPROFITS
            .iter()
            .map(|(id, name, description, category, icon, logo)| Nonprofit {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                category: *category,
                icon: Some(icon.to_string()),
                logo: Some(logo.to_string()),
            })
            .collect();
        Catalog { nonprofits }
    }
}

type NonprofitRow = (
    &'static str,
    &'static str,
    &'static str,
    Category,
    &'static str,
    &'static str,
);

const DEFAULT_NONPROFITS: [NonprofitRow; 7] = [
    (
        "arsis",
        "ΑΡΣΙΣ",
        "Παρέχει κοινωνική υποστήριξη και προστασία σε ευάλωτες ομάδες πληθυσμού.",
        Category::Humans,
        "heart",
        "https://youbehero.com/images/cause/265/l/arsis_logo.png",
    ),
    (
        "selianitika-ilios",
        "Πολιτιστικός Σύλλογος Σελιανιτίκων Ήλιος",
        "Προωθεί τον πολιτισμό, τις παραδόσεις και την ανάπτυξη της τοπικής κοινότητας.",
        Category::Humans,
        "users",
        "https://youbehero.com/images/cause/389/l/politistikos-sillogos-selianitikon-logo.jpg",
    ),
    (
        "kids-fair-collection",
        "Kids Fair Collection",
        "Ο κόσμος γίνεται πιο φωτεινός, όταν τα παιδιά δημιουργούν και προσφέρουν – με αγάπη, με χρώμα, με σκοπό.",
        Category::Humans,
        "users",
        "https://youbehero.com/images/cause/394/l/kids-fair-collection-logo.png",
    ),
    (
        "anagennisi",
        "Σύλλογος Γονέων και Φίλων Αυτιστικών Ατόμων Αναγέννηση",
        "Υποστηρίζει άτομα με αυτισμό και τις οικογένειές τους, προσφέροντας εκπαίδευση, υποστήριξη και προστασία.",
        Category::Humans,
        "heart",
        "https://youbehero.com/images/cause/176/l/anagennisi_logo_tn.png",
    ),
    (
        "espi",
        "Ελληνικός Σύλλογος Προστασίας Ιπποειδών",
        "Αφοσιωμένη στην προστασία και ευζωία των ιπποειδών (άλογα, γαϊδούρια, μουλάρια).",
        Category::Animals,
        "dog",
        "https://youbehero.com/images/cause/183/l/espi_logo.jpg",
    ),
    (
        "moiazw",
        "ΜΟΙΑΖΩ",
        "Υποστηρίζει άτομα με αυτισμό και τις οικογένειές τους, προωθώντας την ένταξη και την ποιότητα ζωής.",
        Category::Humans,
        "heart",
        "https://youbehero.com/images/cause/221/l/moiazw_logo.png",
    ),
    (
        "ariel",
        "«Ariel» Φιλοζωϊκό-Πολιτιστικό Σωματείο",
        "Συνδυάζει την προστασία και φροντίδα ζώων με πολιτιστικές δραστηριότητες.",
        Category::Animals,
        "dog",
        "https://youbehero.com/images/cause/197/l/logoariel.jpeg",
    ),
];
