//! Intent detection over normalized text.
//!
//! Pure keyword containment against ordered rule tables - no ML, no regex.
//! Precedence is data, not control flow: cross-cutting rules are evaluated
//! before any topic, then topics with pool taking priority, then per-topic
//! sub-intent rules. First match wins.
//!
//! Input must already be in the canonical form produced by
//! [`super::normalizer::normalize`] (lowercase, accent-free).

use serde::Serialize;
use std::fmt;

/// Finer-grained topic within the pool intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolIntent {
    /// Budget question ("prix", "tarif", ...)
    Price,
    /// Pool built from a shipping container
    Container,
    /// Polyester shell pool ("coque")
    Shell,
    /// Reinforced-concrete pool ("maçonnée", "béton")
    Masonry,
    /// Filtration and water treatment
    Filtration,
    /// Pool topic without a recognized sub-intent
    General,
}

/// Finer-grained topic within the outdoor-amenities intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutdoorIntent {
    /// Wood/composite/stone terrace
    Deck,
    /// Outdoor staircase
    Stairs,
    /// Fence, gate or privacy screen
    Fence,
    /// Rockwork and embankment stabilization
    Rockwork,
    /// Outdoor topic without a recognized sub-intent
    General,
}

/// Finer-grained topic within the architectural-container intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerIntent {
    /// Pool house conversion
    PoolHouse,
    /// Office, workshop or studio conversion
    Office,
    /// Budget question
    Price,
    /// Container topic without a recognized sub-intent
    General,
}

/// Detected intent for one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Nothing left after normalization
    Empty,
    /// Greeting ("bonjour", "salut", ...)
    Greeting,
    /// Thanks ("merci", ...)
    Thanks,
    /// Contact or appointment request
    Contact,
    /// Lead-time / duration question
    LeadTime,
    /// Service-area question
    Zone,
    /// Guarantee / insurance question
    Guarantee,
    /// "How does a project unfold" question
    Process,
    /// Who-are-you / company identity question
    Company,
    /// Pool topic with sub-intent
    Pool(PoolIntent),
    /// Outdoor-amenities topic with sub-intent
    Outdoor(OutdoorIntent),
    /// Architectural-container topic with sub-intent (pool absent)
    Container(ContainerIntent),
    /// No keyword matched at all
    Fallback,
}

impl Intent {
    /// Returns a stable, human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Empty => "empty",
            Intent::Greeting => "greeting",
            Intent::Thanks => "thanks",
            Intent::Contact => "contact",
            Intent::LeadTime => "lead_time",
            Intent::Zone => "zone",
            Intent::Guarantee => "guarantee",
            Intent::Process => "process",
            Intent::Company => "company",
            Intent::Pool(PoolIntent::Price) => "pool.price",
            Intent::Pool(PoolIntent::Container) => "pool.container",
            Intent::Pool(PoolIntent::Shell) => "pool.shell",
            Intent::Pool(PoolIntent::Masonry) => "pool.masonry",
            Intent::Pool(PoolIntent::Filtration) => "pool.filtration",
            Intent::Pool(PoolIntent::General) => "pool.general",
            Intent::Outdoor(OutdoorIntent::Deck) => "outdoor.deck",
            Intent::Outdoor(OutdoorIntent::Stairs) => "outdoor.stairs",
            Intent::Outdoor(OutdoorIntent::Fence) => "outdoor.fence",
            Intent::Outdoor(OutdoorIntent::Rockwork) => "outdoor.rockwork",
            Intent::Outdoor(OutdoorIntent::General) => "outdoor.general",
            Intent::Container(ContainerIntent::PoolHouse) => "container.pool_house",
            Intent::Container(ContainerIntent::Office) => "container.office",
            Intent::Container(ContainerIntent::Price) => "container.price",
            Intent::Container(ContainerIntent::General) => "container.general",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One cross-cutting rule: matches if the message contains any keyword.
struct KeywordRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Topic keyword sets, the vocabulary of the site's three service families.
const POOL_KEYWORDS: &[&str] = &["piscine", "bassin"];
const OUTDOOR_KEYWORDS: &[&str] = &[
    "amenagement",
    "terrasse",
    "exterieur",
    "exterieure",
    "exterieurs",
];
const CONTAINER_KEYWORDS: &[&str] = &["container", "conteneur"];

/// Budget keywords, shared by the pool and container sub-rules.
const PRICE_KEYWORDS: &[&str] = &["prix", "tarif", "cout", "budget"];

/// Cross-cutting rules, evaluated before any topic. Table order is the
/// precedence contract: a greeting beats a thanks beats a contact request,
/// and all of them beat topic detection.
///
/// NOTE: the zone rule avoids the bare word "ou" - accent-stripped from
/// "où" it is a substring of most French sentences ("pour", "vous", ...),
/// so the rule relies on unambiguous words instead.
const CROSS_RULES: &[KeywordRule] = &[
    KeywordRule {
        intent: Intent::Greeting,
        keywords: &["bonjour", "bonsoir", "salut", "hello", "coucou"],
    },
    KeywordRule {
        intent: Intent::Thanks,
        keywords: &["merci", "merci beaucoup", "thanks"],
    },
    KeywordRule {
        intent: Intent::Contact,
        keywords: &[
            "contact",
            "rdv",
            "rendez-vous",
            "rencontre",
            "visite",
            "devis",
            "appel",
            "telephone",
        ],
    },
    KeywordRule {
        intent: Intent::LeadTime,
        keywords: &["delai", "duree", "combien de temps"],
    },
    KeywordRule {
        intent: Intent::Zone,
        keywords: &[
            "zone",
            "secteur",
            "region",
            "intervenez",
            "deplacement",
            "localisation",
        ],
    },
    KeywordRule {
        intent: Intent::Guarantee,
        keywords: &["garantie", "assurance", "decennale"],
    },
    KeywordRule {
        intent: Intent::Process,
        keywords: &["etape", "deroulement", "processus", "comment ca se passe"],
    },
    KeywordRule {
        intent: Intent::Company,
        keywords: &["qui etes", "entreprise", "societe", "eclat de jardin"],
    },
];

/// Pool sub-intent rules, in priority order.
const POOL_RULES: &[(PoolIntent, &[&str])] = &[
    (PoolIntent::Price, PRICE_KEYWORDS),
    (PoolIntent::Container, CONTAINER_KEYWORDS),
    (PoolIntent::Shell, &["coque"]),
    (PoolIntent::Masonry, &["maconnee", "beton"]),
    (PoolIntent::Filtration, &["filtration", "filtre", "traitement"]),
];

/// Outdoor sub-intent rules, in priority order.
const OUTDOOR_RULES: &[(OutdoorIntent, &[&str])] = &[
    (OutdoorIntent::Deck, &["terrasse"]),
    (OutdoorIntent::Stairs, &["escalier"]),
    (
        OutdoorIntent::Fence,
        &["cloture", "portail", "brise-vue", "brise vue"],
    ),
    (OutdoorIntent::Rockwork, &["enrochement", "talus"]),
];

/// Container sub-intent rules (only reached when no pool keyword is present).
const CONTAINER_RULES: &[(ContainerIntent, &[&str])] = &[
    (
        ContainerIntent::PoolHouse,
        &["pool house", "pool-house", "poolhouse"],
    ),
    (ContainerIntent::Office, &["bureau", "atelier", "studio"]),
    (ContainerIntent::Price, PRICE_KEYWORDS),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

fn match_sub<T: Copy>(text: &str, rules: &[(T, &[&str])], fallback: T) -> T {
    rules
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(fallback)
}

/// Intent classifier over the static rule tables above.
///
/// Stateless: classification is a pure function of the input and the tables,
/// so repeated calls with the same input always agree.
pub struct IntentClassifier;

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a normalized message.
    ///
    /// Pool wins over the outdoor and container topics when several topics
    /// are present ("piscine et terrasse" is a pool question), and a pool
    /// message mentioning a container resolves to the pool/container
    /// sub-branch rather than the standalone container topic.
    pub fn classify(&self, text: &str) -> Intent {
        if text.is_empty() {
            return Intent::Empty;
        }

        for rule in CROSS_RULES {
            if contains_any(text, rule.keywords) {
                return rule.intent;
            }
        }

        if contains_any(text, POOL_KEYWORDS) {
            return Intent::Pool(match_sub(text, POOL_RULES, PoolIntent::General));
        }
        if contains_any(text, OUTDOOR_KEYWORDS) {
            return Intent::Outdoor(match_sub(text, OUTDOOR_RULES, OutdoorIntent::General));
        }
        if contains_any(text, CONTAINER_KEYWORDS) {
            return Intent::Container(match_sub(
                text,
                CONTAINER_RULES,
                ContainerIntent::General,
            ));
        }

        Intent::Fallback
    }
}
