//! Fixed vocabularies for the review heuristics.
//!
//! Single-word terms are matched as whole words; terms containing a space are
//! matched as phrases. Pain points use plain substring membership.

pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "fantastic", "wonderful", "outstanding",
    "love", "loved", "loves", "lovely", "best", "perfect", "recommend", "recommended", "friendly",
    "helpful", "fast", "quick", "easy", "reliable", "professional", "clean", "delicious",
    "pleasant", "happy", "satisfied", "impressed", "efficient", "affordable", "polite",
    "attentive", "comfortable", "beautiful", "superb", "smooth", "enjoyed", "fresh", "worth",
];

pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "poor", "disappointed", "disappointing",
    "slow", "rude", "dirty", "broken", "waste", "useless", "overpriced", "unprofessional",
    "unhelpful", "frustrating", "frustrated", "annoying", "angry", "hate", "hated", "cold",
    "late", "wrong", "never", "refund", "complaint", "problem", "problems", "issue", "issues",
    "mediocre", "bland", "noisy", "crowded", "scam", "confusing", "buggy",
];

/// (label, needles). A review mentions the pain point if any needle is a substring.
pub(crate) const PAIN_POINTS: &[(&str, &[&str])] = &[
    ("long wait times", &["wait", "waiting", "delay", "took forever", "queue"]),
    ("high prices", &["expensive", "overpriced", "pricey", "too much money", "hidden fee"]),
    ("poor customer service", &["rude", "unhelpful", "ignored", "bad service", "terrible service", "poor service"]),
    ("quality problems", &["broken", "defect", "poor quality", "low quality", "cheap material", "stopped working"]),
    ("delivery issues", &["late delivery", "never arrived", "lost package", "damaged", "shipping"]),
    ("billing problems", &["charged twice", "billing", "overcharged", "refund"]),
    ("difficult to use", &["confusing", "complicated", "hard to use", "difficult", "not intuitive"]),
    ("reliability issues", &["crash", "buggy", "outage", "downtime", "unreliable"]),
    ("cleanliness", &["dirty", "filthy", "smell", "unclean"]),
    ("poor communication", &["no response", "never called", "didn't reply", "no reply", "communication"]),
];

pub(crate) const SEGMENTS: &[(&str, &[&str])] = &[
    ("families", &["family", "families", "kids", "children", "my son", "my daughter"]),
    ("professionals", &["work", "office", "meeting", "colleague", "colleagues", "business trip"]),
    ("students", &["student", "students", "college", "university", "campus", "exam"]),
    ("seniors", &["retired", "grandparents", "grandkids", "senior", "seniors"]),
    ("small business owners", &["my business", "small business", "my shop", "my store", "our company"]),
    ("tourists", &["vacation", "holiday", "tourist", "trip", "visiting"]),
    ("pet owners", &["dog", "cat", "pet", "pets", "puppy"]),
    ("couples", &["date night", "anniversary", "my wife", "my husband", "partner"]),
];

pub(crate) const EMOTIONS: &[(&str, &[&str])] = &[
    ("joy", &["happy", "love", "loved", "delighted", "enjoyed", "amazing"]),
    ("trust", &["reliable", "trust", "trustworthy", "honest", "recommend"]),
    ("frustration", &["frustrating", "frustrated", "annoying", "annoyed", "waste"]),
    ("anger", &["angry", "furious", "rude", "unacceptable", "outraged"]),
    ("disappointment", &["disappointed", "disappointing", "expected more", "let down"]),
    ("surprise", &["surprised", "unexpected", "wow", "surprisingly"]),
    ("relief", &["relieved", "finally", "saved me", "lifesaver"]),
];

pub(crate) const TOPICS: &[(&str, &[&str])] = &[
    ("pricing", &["price", "prices", "cost", "expensive", "cheap", "affordable", "value", "overpriced"]),
    ("customer service", &["service", "staff", "support", "employee", "employees", "team", "manager"]),
    ("product quality", &["quality", "product", "products", "material", "durable", "broken"]),
    ("delivery", &["delivery", "shipping", "arrived", "package", "courier"]),
    ("speed", &["fast", "quick", "slow", "wait", "waited", "delay"]),
    ("usability", &["easy", "intuitive", "confusing", "complicated", "interface", "app"]),
    ("atmosphere", &["atmosphere", "ambience", "music", "decor", "clean", "dirty", "noisy"]),
    ("food", &["food", "meal", "dish", "menu", "delicious", "taste"]),
    ("location", &["location", "parking", "downtown", "neighborhood", "convenient"]),
];

pub(crate) const DEMOGRAPHICS: &[(&str, &[&str])] = &[
    ("parents with young children", &["kids", "children", "my son", "my daughter", "toddler"]),
    ("students and young adults", &["student", "college", "university", "campus"]),
    ("working professionals", &["work", "office", "colleague", "business trip", "commute"]),
    ("retirees", &["retired", "retirement", "grandkids", "grandchildren"]),
    ("local residents", &["neighborhood", "local", "live nearby", "around the corner"]),
    ("visitors and tourists", &["tourist", "vacation", "visiting", "trip"]),
];

pub(crate) const PSYCHOGRAPHICS: &[(&str, &[&str])] = &[
    ("quality-focused", &["quality", "well made", "premium", "craftsmanship"]),
    ("price-conscious", &["price", "cheap", "affordable", "deal", "discount", "value for money"]),
    ("convenience-seeking", &["convenient", "quick", "easy", "fast", "on the go"]),
    ("experience-driven", &["experience", "atmosphere", "ambience", "memorable"]),
    ("eco-conscious", &["sustainable", "eco", "organic", "recycling", "recycled", "plastic"]),
    ("health-conscious", &["healthy", "organic", "vegan", "gluten", "fitness"]),
    ("relationship-oriented", &["staff knows", "personal", "remembered", "family run", "friendly"]),
];

pub(crate) const GOALS: &[(&str, &[&str])] = &[
    ("save time", &["quick", "fast", "saved time", "on time", "efficient"]),
    ("save money", &["affordable", "cheap", "deal", "discount", "budget"]),
    ("get reliable results", &["reliable", "consistent", "always works", "dependable"]),
    ("enjoy a great experience", &["enjoyed", "experience", "fun", "memorable"]),
    ("solve a specific problem", &["fixed", "solved", "helped me", "problem"]),
    ("grow their business", &["my business", "customers", "sales", "grow"]),
];

pub(crate) const CHANNELS: &[(&str, &[&str])] = &[
    ("word of mouth", &["recommended by", "friend recommended", "word of mouth", "told me about"]),
    ("google search", &["google", "searched", "search online"]),
    ("instagram", &["instagram", "insta"]),
    ("facebook", &["facebook"]),
    ("tiktok", &["tiktok"]),
    ("review sites", &["yelp", "tripadvisor", "trustpilot", "reviews online"]),
    ("mobile app", &["app", "mobile"]),
    ("email", &["email", "newsletter"]),
    ("walk-in", &["walked in", "walked by", "passing by", "drop in"]),
];

pub(crate) const PURCHASING_BEHAVIOR: &[(&str, &[&str])] = &[
    ("repeat customer", &["again", "every week", "regular", "always come", "keep coming", "returning"]),
    ("first-time buyer", &["first time", "first visit", "tried for the first"]),
    ("researches before buying", &["read the reviews", "compared", "research", "after reading"]),
    ("subscription buyer", &["subscription", "monthly plan", "membership", "subscribe"]),
    ("bulk buyer", &["bulk", "large order", "for the whole team", "for the office"]),
    ("impulse buyer", &["impulse", "spontaneous", "on a whim", "couldn't resist"]),
    ("gift buyer", &["gift", "present", "birthday", "christmas"]),
];
