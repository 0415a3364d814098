use std::collections::HashSet;
use std::sync::LazyLock;

/// Recognized skill keywords. Exact set-membership lookup, not fuzzy
/// matching; multi-word entries are matched by substring scan.
pub const SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "html",
    "css",
    "typescript",
    "rust",
    "c++",
    "c#",
    ".net",
    "spring",
    "django",
    "flask",
    "fastapi",
    "machine learning",
    "ai",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "jenkins",
    "terraform",
    "ansible",
    "prometheus",
    "grafana",
    "splunk",
    "tableau",
    "powerbi",
];

/// Skill vocabulary as a set for O(1) per-token lookup
pub static SKILL_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKILLS.iter().copied().collect());

/// Multi-word skills, matched by substring scan of the lowercased transcript
pub static MULTI_WORD_SKILLS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| SKILLS.iter().copied().filter(|s| s.contains(' ')).collect());

/// Terms that must never be returned as a location, even when an analyzer
/// labels them GPE: skill names, tech jargon, and region words too generic
/// to be a candidate's location.
pub const EXCLUDED_LOCATION_TERMS: &[&str] = &[
    "api",
    "rest",
    "graphql",
    "json",
    "xml",
    "http",
    "https",
    "programming",
    "code",
    "software",
    "developer",
    "india",
    "south india",
    "north india",
    "east india",
    "west india",
    "usa",
    "uk",
    "united states",
    "us",
];

/// Excluded-location lookup set (skills are folded in at build time)
pub static EXCLUDED_LOCATION_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    EXCLUDED_LOCATION_TERMS
        .iter()
        .chain(SKILLS.iter())
        .copied()
        .collect()
});

/// Known degree-specialization phrases, ordered by specificity. The degree
/// extractor must always prefer a longer phrase over a shorter substring of
/// it ("computer science engineering" beats "computer science" beats
/// "science"), so lookups go through [`SPECIALIZATIONS_LONGEST_FIRST`].
pub const SPECIALIZATIONS: &[&str] = &[
    "computer science engineering",
    "computer science and engineering",
    "cse",
    "computer science",
    "computer engineering",
    "information technology engineering",
    "information technology",
    "mechanical engineering",
    "civil engineering",
    "electrical engineering",
    "electronics engineering",
    "chemical engineering",
    "aerospace engineering",
    "biotechnology",
    "biomedical engineering",
    "data science",
    "artificial intelligence",
    "machine learning",
    "software engineering",
    "business administration",
    "management",
    "finance",
    "marketing",
    "accounting",
    "mathematics",
    "physics",
    "chemistry",
    "biology",
    "statistics",
    "economics",
    // least specific, kept last
    "it",
];

/// Specialization table sorted longest-first for matching
pub static SPECIALIZATIONS_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut specs: Vec<&'static str> = SPECIALIZATIONS.to_vec();
    specs.sort_by(|a, b| b.len().cmp(&a.len()));
    specs
});

/// Keywords marking a sentence as graduation context
pub const GRADUATION_KEYWORDS: &[&str] = &[
    "graduate",
    "graduation",
    "graduated",
    "completed",
    "finished",
    "degree",
    "pass out",
    "passout",
    "passed out",
    "studied",
];

/// Tokens that identify an ORG span as an educational institution
pub const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school", "academy"];

/// Curated city gazetteer for tier-1 location matching
pub const CITIES: &[&str] = &[
    "chennai",
    "mumbai",
    "delhi",
    "bangalore",
    "hyderabad",
    "pune",
    "kolkata",
    "ahmedabad",
    "jaipur",
    "surat",
    "lucknow",
    "kanpur",
    "nagpur",
    "indore",
    "thane",
    "bhopal",
    "visakhapatnam",
    "patna",
    "vadodara",
    "ghaziabad",
    "ludhiana",
    "agra",
    "nashik",
    "faridabad",
    "meerut",
    "rajkot",
    "varanasi",
    "srinagar",
    "amritsar",
    "jodhpur",
    "raipur",
    "allahabad",
    "coimbatore",
    "jabalpur",
    "gwalior",
    "vijayawada",
    "madurai",
    "kota",
    "guwahati",
    "chandigarh",
    "solapur",
    "hubli",
    "bareilly",
    "moradabad",
    "gurgaon",
    "aligarh",
    "jalandhar",
    "tiruchirappalli",
    "bhubaneswar",
    "salem",
    "warangal",
    "thiruvananthapuram",
    "gorakhpur",
    "guntur",
    "bikaner",
    "amravati",
    "noida",
    "bhavnagar",
    "dehradun",
    "kolhapur",
    "ajmer",
    "udaipur",
    "tirunelveli",
    "kozhikode",
    "kurnool",
    "rajahmundry",
    "agartala",
    "bhagalpur",
    "latur",
    "puducherry",
    "rourkela",
    "ujjain",
    "sangli",
    "ratlam",
    "mangalore",
    "mysore",
    "kochi",
    "nellore",
];

/// Toponyms the built-in tagger labels GPE when they appear capitalized.
/// Includes ambiguous names that are also skills ("java"); the location
/// extractor is responsible for rejecting those.
pub const WORLD_TOPONYMS: &[&str] = &[
    "london",
    "new york",
    "san francisco",
    "seattle",
    "toronto",
    "sydney",
    "singapore",
    "dubai",
    "tokyo",
    "berlin",
    "paris",
    "amsterdam",
    "dublin",
    "zurich",
    "java",
    "karnataka",
    "maharashtra",
    "tamil nadu",
    "kerala",
    "telangana",
    "gujarat",
    "rajasthan",
    "punjab",
];

/// GPE gazetteer: cities plus world toponyms
pub static TOPONYM_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    CITIES.iter().chain(WORLD_TOPONYMS.iter()).copied().collect()
});

/// Words a PERSON span must not consist of: greetings, fillers, pronouns.
/// Interview speech-to-text routinely mislabels these as names.
pub const NON_NAME_WORDS: &[&str] = &[
    "i", "me", "my", "you", "he", "she", "we", "they", "hi", "hello", "hey", "yeah", "yes", "ok",
    "okay", "um", "uh", "hmm", "good", "morning", "afternoon", "evening", "thanks", "thank",
    "welcome", "sir", "madam", "dear",
];

/// Non-name lookup set
pub static NON_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_NAME_WORDS.iter().copied().collect());
