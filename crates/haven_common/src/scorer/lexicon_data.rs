//! Static tables for the lexicon scorer.
//!
//! Valences are on a -4..=4 scale. The word list favours vocabulary that
//! shows up in accommodation reviews (rooms, staff, location, noise) on top
//! of general-purpose sentiment words and common emoticons.

/// Booster step added to (or subtracted from) a neighbouring valence
pub const B_INCR: f64 = 0.293;
pub const B_DECR: f64 = -0.293;

/// Word valences, lowercase
pub const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("able", 0.6),
    ("accessible", 1.2),
    ("accommodating", 1.8),
    ("adorable", 2.2),
    ("affordable", 1.5),
    ("agreeable", 1.8),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amusing", 1.6),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("attentive", 1.9),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("bliss", 2.7),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.5),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("cleaner", 1.4),
    ("comfort", 1.5),
    ("comfortable", 2.0),
    ("comfy", 2.0),
    ("convenient", 1.6),
    ("cool", 1.3),
    ("cosy", 1.8),
    ("cozy", 1.8),
    ("courteous", 2.3),
    ("cute", 2.0),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delighted", 2.9),
    ("delightful", 2.9),
    ("dependable", 1.9),
    ("easy", 1.9),
    ("efficient", 1.8),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 1.5),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fav", 2.0),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("generous", 2.3),
    ("gentle", 1.8),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("hospitable", 2.1),
    ("ideal", 2.4),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incredible", 2.8),
    ("inviting", 1.8),
    ("joy", 2.8),
    ("kind", 2.4),
    ("lively", 1.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("magnificent", 3.4),
    ("marvelous", 2.9),
    ("neat", 2.0),
    ("nice", 1.8),
    ("outstanding", 3.0),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 1.9),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("professional", 1.3),
    ("quiet", 0.5),
    ("recommend", 1.5),
    ("recommended", 0.8),
    ("relaxed", 2.2),
    ("relaxing", 2.2),
    ("reliable", 1.9),
    ("responsive", 1.5),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("secure", 1.4),
    ("smile", 1.5),
    ("smiling", 1.9),
    ("spacious", 1.5),
    ("spotless", 2.2),
    ("stunning", 2.9),
    ("super", 2.9),
    ("superb", 3.1),
    ("supportive", 1.2),
    ("sweet", 2.0),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tidy", 1.6),
    ("top", 0.8),
    ("valuable", 2.1),
    ("warm", 0.9),
    ("welcome", 2.0),
    ("welcoming", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // Negative
    ("abandoned", -1.9),
    ("abuse", -3.2),
    ("aggressive", -0.6),
    ("alarming", -2.0),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("appalling", -2.6),
    ("arrogant", -2.2),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bedbug", -2.0),
    ("bedbugs", -2.0),
    ("bitter", -1.8),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("bug", -1.2),
    ("bugs", -1.2),
    ("careless", -1.5),
    ("chaos", -2.2),
    ("chaotic", -1.8),
    ("cheated", -2.4),
    ("cold", -0.3),
    ("complain", -1.5),
    ("complained", -1.5),
    ("complaint", -1.2),
    ("confused", -1.3),
    ("confusing", -0.9),
    ("cramped", -1.2),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crowded", -1.0),
    ("cry", -2.1),
    ("damaged", -1.9),
    ("damp", -0.9),
    ("dangerous", -2.1),
    ("dark", -0.8),
    ("dead", -3.3),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dismal", -3.0),
    ("dreadful", -2.7),
    ("dull", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("filthy", -2.4),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hell", -3.6),
    ("horrible", -2.5),
    ("horrid", -2.5),
    ("hostile", -2.2),
    ("hurt", -2.4),
    ("ignored", -1.3),
    ("impolite", -1.6),
    ("inconvenient", -1.5),
    ("insecure", -1.8),
    ("lame", -1.8),
    ("leak", -1.4),
    ("leaking", -1.4),
    ("lost", -1.3),
    ("loud", -0.2),
    ("mess", -1.5),
    ("messy", -1.5),
    ("miserable", -2.2),
    ("mold", -1.6),
    ("mouldy", -1.6),
    ("moldy", -1.6),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("nightmare", -3.2),
    ("no", -1.2),
    ("noisy", -0.7),
    ("noise", -0.5),
    ("offensive", -2.2),
    ("overpriced", -1.8),
    ("pain", -2.3),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("poorly", -1.8),
    ("problem", -1.7),
    ("problems", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.0),
    ("scared", -1.9),
    ("shabby", -1.6),
    ("shame", -2.1),
    ("shocking", -1.7),
    ("sick", -2.3),
    ("sketchy", -1.5),
    ("slow", -1.0),
    ("smelly", -1.5),
    ("smell", -0.6),
    ("stink", -1.7),
    ("stinks", -1.5),
    ("stolen", -2.2),
    ("stressful", -1.7),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("theft", -1.7),
    ("tired", -1.9),
    ("ugly", -2.3),
    ("uncomfortable", -1.6),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("unhelpful", -1.7),
    ("unpleasant", -2.1),
    ("unsafe", -2.0),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -2.7),
    ("wrong", -2.1),
    ("yuck", -1.8),
    // Emoticons
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.9),
    (":-d", 2.3),
    (";)", 0.9),
    (":p", 1.4),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    (":'(", -2.2),
    (":/", -1.4),
    (">:(", -2.7),
];

/// Words that amplify (positive) or dampen (negative) the next valence
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("truly", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

/// Negation words
pub const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not",
    "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt", "werent", "oughtn't",
    "shan't", "shouldn't", "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
    "wouldn't", "rarely", "seldom", "despite",
];
