#![forbid(unsafe_code)]

//! Built-in noun data.
//!
//! Everything here is immutable after first use. Engines copy the irregular
//! baseline into their own mutable table; the classical lookup and the word
//! sets are shared read-only across every engine.
//!
//! All keys are lowercase.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// Singular/plural pairs that no suffix rule derives.
pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("quiz", "quizzes"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("bacterium", "bacteria"),
    ("alumnus", "alumni"),
    ("alumna", "alumnae"),
    ("corpus", "corpora"),
    ("genus", "genera"),
    ("octopus", "octopuses"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("ellipsis", "ellipses"),
    ("hypothesis", "hypotheses"),
    ("oasis", "oases"),
    ("parenthesis", "parentheses"),
    ("synopsis", "synopses"),
    ("thesis", "theses"),
    ("stomach", "stomachs"),
    ("epoch", "epochs"),
    ("monarch", "monarchs"),
    ("patriarch", "patriarchs"),
    ("matriarch", "matriarchs"),
    ("eunuch", "eunuchs"),
    ("movie", "movies"),
    ("cookie", "cookies"),
    ("zombie", "zombies"),
    ("calorie", "calories"),
    ("brownie", "brownies"),
    ("prairie", "prairies"),
    ("rookie", "rookies"),
    ("goalie", "goalies"),
    ("genie", "genies"),
    ("pie", "pies"),
    ("tie", "ties"),
    ("lie", "lies"),
    ("passerby", "passersby"),
    ("mother-in-law", "mothers-in-law"),
    ("father-in-law", "fathers-in-law"),
    ("son-in-law", "sons-in-law"),
    ("daughter-in-law", "daughters-in-law"),
    ("brother-in-law", "brothers-in-law"),
    ("sister-in-law", "sisters-in-law"),
];

/// Singulars and their Latin/Greek plurals, used in ancient mode only.
pub const CLASSICAL_PLURALS: &[(&str, &str)] = &[
    // -a -> -ae
    ("formula", "formulae"),
    ("antenna", "antennae"),
    ("alga", "algae"),
    ("vertebra", "vertebrae"),
    ("nebula", "nebulae"),
    ("larva", "larvae"),
    ("supernova", "supernovae"),
    ("amoeba", "amoebae"),
    ("aurora", "aurorae"),
    ("hydra", "hydrae"),
    // -um -> -a
    ("stadium", "stadia"),
    ("medium", "media"),
    ("memorandum", "memoranda"),
    ("curriculum", "curricula"),
    ("aquarium", "aquaria"),
    ("millennium", "millennia"),
    ("symposium", "symposia"),
    ("consortium", "consortia"),
    ("moratorium", "moratoria"),
    ("referendum", "referenda"),
    ("spectrum", "spectra"),
    ("maximum", "maxima"),
    ("minimum", "minima"),
    ("quantum", "quanta"),
    ("podium", "podia"),
    // -us -> -i
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("focus", "foci"),
    ("radius", "radii"),
    ("nucleus", "nuclei"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("genius", "genii"),
    ("hippopotamus", "hippopotami"),
    ("terminus", "termini"),
    ("octopus", "octopodes"),
    ("opus", "opera"),
    // -ex/-ix -> -ices
    ("index", "indices"),
    ("appendix", "appendices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("apex", "apices"),
    ("cortex", "cortices"),
    ("vortex", "vortices"),
    ("codex", "codices"),
    // -on -> -a
    ("automaton", "automata"),
    ("ganglion", "ganglia"),
    // -ma -> -mata
    ("stigma", "stigmata"),
    ("dogma", "dogmata"),
    ("schema", "schemata"),
    ("lemma", "lemmata"),
    ("enema", "enemata"),
    ("trauma", "traumata"),
    // -o -> -i
    ("tempo", "tempi"),
    ("libretto", "libretti"),
    ("virtuoso", "virtuosi"),
    ("soprano", "soprani"),
    ("concerto", "concerti"),
    ("graffito", "graffiti"),
    // -eau -> -eaux
    ("bureau", "bureaux"),
    ("plateau", "plateaux"),
    ("chateau", "chateaux"),
    ("tableau", "tableaux"),
    ("beau", "beaux"),
    // Hebrew and archaic
    ("seraph", "seraphim"),
    ("cherub", "cherubim"),
    ("brother", "brethren"),
];

/// Nouns whose plural is the singular.
pub const UNCHANGED_NOUNS: &[&str] = &[
    "sheep", "fish", "deer", "reindeer", "moose", "swine", "bison", "salmon", "trout", "cod",
    "cattle", "series", "species", "aircraft", "hovercraft", "spacecraft", "watercraft",
    "offspring", "news", "information", "rice", "equipment", "money", "furniture", "luggage",
    "baggage", "advice", "software", "hardware", "police", "corps", "headquarters", "means",
    "mews", "scissors", "trousers", "pliers", "tongs", "jeans", "pants", "chassis", "innings",
    "gallows", "barracks", "crossroads", "diabetes", "measles", "mumps", "rabies", "physics",
    "mathematics", "economics", "ethics", "kudos", "pathos", "ethos", "chaos", "progress",
    "knowledge", "traffic", "music", "homework", "research", "feedback", "evidence", "weather",
    "wheat",
];

/// Herd animals: unchanged plural in classical herd mode, `+s` otherwise.
pub const HERD_NOUNS: &[&str] = &[
    "antelope", "wildebeest", "eland", "buffalo", "elk", "rhinoceros", "zucchini", "caribou",
    "dace", "grouse", "haddock", "hake", "halibut", "herring", "mackerel", "pickerel", "pike",
    "roe", "shad", "snipe", "teal", "turbot",
];

/// `-man` words that take a plain `+s`. Words ending in `human` are handled
/// separately.
pub const MAN_EXCEPTIONS: &[&str] = &[
    "german", "shaman", "talisman", "ottoman", "caiman", "cayman", "desman", "dolman", "hetman",
    "leman", "ataman", "roman", "walkman",
];

/// Singulars ending in `-men` that the `-men -> -man` inverse must skip.
pub const MEN_SINGULARS: &[&str] = &[
    "specimen", "abdomen", "omen", "stamen", "regimen", "hymen", "acumen", "bitumen", "lumen",
    "albumen", "foramen", "cerumen", "rumen", "dolmen", "amen",
];

/// Singulars whose plural replaces a final `-f`/`-fe` with `-ves`.
pub const VES_BASES: &[&str] = &[
    "knife", "penknife", "jackknife", "pocketknife", "wife", "midwife", "housewife", "fishwife",
    "life", "afterlife", "leaf", "loaf", "sheaf", "thief", "wolf", "werewolf", "half", "calf",
    "shelf", "bookshelf", "self", "elf", "scarf", "wharf", "hoof",
];

/// Consonant + `-o` words that take a plain `+s`.
pub const O_PLUS_S: &[&str] = &[
    "photo", "piano", "halo", "memo", "kilo", "solo", "canto", "pro", "auto", "disco", "logo",
    "casino", "kimono", "tuxedo", "avocado", "burrito", "taco", "poncho", "combo", "euro", "ego",
    "typo", "demo", "silo", "lasso", "ghetto", "commando", "alto", "basso", "contralto",
    "soprano", "tempo", "libretto", "concerto", "virtuoso", "macro", "micro", "metro", "retro",
    "hippo", "rhino", "limo", "condo", "gizmo", "dynamo", "albino", "armadillo", "embryo",
    "inferno", "magneto", "quarto", "octavo", "espresso", "cappuccino", "gecko", "jumbo",
    "merino", "sombrero", "stiletto", "burro", "bronco", "crescendo", "falsetto", "fiasco",
    "lingo", "maestro", "piccolo", "pimento", "placebo", "proviso", "torso", "zero",
];

/// Singulars ending in a single `-s` whose plural appends `-es`.
pub const S_SINGULARS: &[&str] = &[
    "bus", "omnibus", "gas", "lens", "atlas", "canvas", "iris", "bonus", "virus", "campus",
    "census", "circus", "status", "alias", "plus", "chorus", "walrus", "cactus", "hippopotamus",
    "apparatus", "prospectus", "sinus", "thesaurus", "fetus", "focus", "genius", "radius",
    "minus", "surplus", "bias", "caucus", "crocus", "syllabus", "onus", "pelvis", "trellis",
    "ibis", "cosmos", "fungus", "stimulus", "nucleus", "terminus", "impetus", "lotus",
    "rhinoceros", "platypus", "abacus", "metropolis", "bolus", "hiatus", "isthmus", "ruckus",
];

/// Singulars ending in `-oe`: their plural only appends `-s`.
pub const OE_SINGULARS: &[&str] = &[
    "shoe", "snowshoe", "horseshoe", "toe", "tiptoe", "mistletoe", "canoe", "hoe", "oboe",
    "foe", "doe", "floe", "roe", "sloe", "woe", "throe", "aloe", "felloe",
];

/// Singulars ending in `-che`/`-sse`: their plural only appends `-s`.
pub const E_SINGULARS: &[&str] = &[
    "ache", "headache", "toothache", "niche", "cache", "quiche", "avalanche", "moustache",
    "mustache", "microfiche", "cliche", "psyche", "creche", "crevasse", "finesse", "impasse",
    "lacrosse", "demitasse", "posse", "bouillabaisse", "largesse",
];

/// Bidirectional singular/plural map.
///
/// # Invariants
///
/// 1. Every live pair is present in both directions: `singular_of(p)` is
///    `Some` exactly when some singular currently maps to `p`.
/// 2. When several singulars share a plural, the reverse lookup answers with
///    the most recently inserted one.
/// 3. Replacing or removing a pair hands the reverse entry back to the next
///    most recent singular that still maps to the same plural.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularTable {
    plurals: FxHashMap<String, String>,
    /// Singulars per plural, oldest first.
    owners: FxHashMap<String, Vec<String>>,
}

impl IrregularTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(singular, plural)` pairs, lowercasing both.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new();
        for (singular, plural) in pairs {
            table.insert(singular, plural);
        }
        table
    }

    /// The built-in irregular baseline.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// The Latin/Greek lookup consulted in ancient mode.
    #[must_use]
    pub fn classical() -> &'static Self {
        &CLASSICAL
    }

    /// Plural registered for a lowercase singular.
    #[must_use]
    pub fn plural_of(&self, singular: &str) -> Option<&str> {
        self.plurals.get(singular).map(String::as_str)
    }

    /// Most recent singular registered for a lowercase plural.
    #[must_use]
    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.owners
            .get(plural)
            .and_then(|owners| owners.last())
            .map(String::as_str)
    }

    /// Whether `singular` has a forward entry.
    #[must_use]
    pub fn contains(&self, singular: &str) -> bool {
        self.plurals.contains_key(singular)
    }

    /// Insert a pair, returning the plural it replaced.
    pub fn insert(&mut self, singular: &str, plural: &str) -> Option<String> {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        let previous = self.plurals.insert(singular.clone(), plural.clone());
        if let Some(old) = &previous {
            self.release(old, &singular);
        }
        self.owners.entry(plural).or_default().push(singular);
        previous
    }

    /// Remove the pair keyed by a lowercase singular, returning its plural.
    pub fn remove(&mut self, singular: &str) -> Option<String> {
        let plural = self.plurals.remove(singular)?;
        self.release(&plural, singular);
        Some(plural)
    }

    /// Number of singular entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plurals.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plurals.is_empty()
    }

    /// Iterate over `(singular, plural)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.plurals.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }

    fn release(&mut self, plural: &str, singular: &str) {
        if let Some(owners) = self.owners.get_mut(plural) {
            owners.retain(|owner| owner != singular);
            if owners.is_empty() {
                self.owners.remove(plural);
            }
        }
    }
}

static BUILTIN: LazyLock<IrregularTable> =
    LazyLock::new(|| IrregularTable::from_pairs(IRREGULAR_NOUNS));

static CLASSICAL: LazyLock<IrregularTable> =
    LazyLock::new(|| IrregularTable::from_pairs(CLASSICAL_PLURALS));

static UNCHANGED: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| UNCHANGED_NOUNS.iter().copied().collect());

static HERD: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| HERD_NOUNS.iter().copied().collect());

/// Whether a lowercase word keeps its form in both directions.
#[must_use]
pub fn is_unchanged(lower: &str) -> bool {
    UNCHANGED.contains(lower)
}

/// Whether a lowercase word is a herd animal.
#[must_use]
pub fn is_herd(lower: &str) -> bool {
    HERD.contains(lower)
}

/// Whether a lowercase word is a nationality-style invariant
/// (`Chinese`, `Portuguese`, `Iroquois`).
///
/// Narrower than a plain `-ese` test: `-ese` after another `e` (`cheese`)
/// is an ordinary noun and takes the suffix cascade.
#[must_use]
pub fn is_nationality(lower: &str) -> bool {
    if lower.ends_with("ois") {
        return true;
    }
    lower
        .strip_suffix("ese")
        .and_then(|stem| stem.chars().next_back())
        .is_some_and(|before| before != 'e')
}
