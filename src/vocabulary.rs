//! Controlled vocabulary for the Singapore education system.
//!
//! Two hand-maintained alias tables map a canonical subject / level band to
//! its known abbreviations and exam-level variants. They are exposed as
//! plain data so new curriculum entries can be added without touching the
//! matching logic, and so the tables can be unit-tested on their own.

/// Canonical subject → known variants (abbreviations, H1/H2 exam forms).
pub const SUBJECT_GROUPS: &[(&str, &[&str])] = &[
    (
        "mathematics",
        &[
            "math",
            "maths",
            "e maths",
            "a maths",
            "elementary mathematics",
            "additional mathematics",
            "h1 math",
            "h2 math",
            "h1 maths",
            "h2 maths",
        ],
    ),
    ("science", &["sciences", "combined science", "integrated science"]),
    ("physics", &["phys", "h1 physics", "h2 physics"]),
    ("chemistry", &["chem", "h1 chemistry", "h2 chemistry"]),
    ("biology", &["bio", "h1 biology", "h2 biology"]),
    (
        "english",
        &[
            "eng",
            "english language",
            "english literature",
            "h1 english",
            "h2 english",
        ],
    ),
    (
        "chinese",
        &[
            "mandarin",
            "higher chinese",
            "h1 chinese",
            "h2 chinese",
            "hcl",
            "cl",
            "mother tongue",
        ],
    ),
    ("malay", &["higher malay", "h1 malay", "h2 malay"]),
    ("tamil", &["higher tamil", "h1 tamil", "h2 tamil"]),
    ("general paper", &["gp", "h1 gp", "knowledge and inquiry", "ki"]),
    (
        "economics",
        &["econs", "econ", "h1 economics", "h2 economics", "h1 econs", "h2 econs"],
    ),
    ("geography", &["geog", "geo", "h1 geography", "h2 geography"]),
    ("history", &["hist", "h1 history", "h2 history"]),
    (
        "literature",
        &["lit", "english literature", "h1 literature", "h2 literature"],
    ),
    (
        "accounting",
        &["acc", "accounts", "accountancy", "h1 accounting", "h2 accounting"],
    ),
    (
        "computing",
        &["comp", "computer science", "cs", "h1 computing", "h2 computing"],
    ),
    ("art", &["h1 art", "h2 art", "visual arts"]),
    ("music", &["h1 music", "h2 music"]),
];

/// Canonical level band → known variants (short forms, year codes, exams).
pub const LEVEL_GROUPS: &[(&str, &[&str])] = &[
    (
        "primary school",
        &[
            "pri",
            "primary",
            "p1",
            "p2",
            "p3",
            "p4",
            "p5",
            "p6",
            "primary 1",
            "primary 2",
            "primary 3",
            "primary 4",
            "primary 5",
            "primary 6",
            "primary 1-3",
            "primary 4-6",
        ],
    ),
    (
        "secondary school",
        &[
            "sec",
            "secondary",
            "s1",
            "s2",
            "s3",
            "s4",
            "s5",
            "secondary 1",
            "secondary 2",
            "secondary 3",
            "secondary 4",
            "secondary 5",
            "secondary 1-2",
            "secondary 3-4",
            "o level",
            "o-level",
            "n level",
            "n-level",
        ],
    ),
    (
        "junior college",
        &[
            "jc",
            "jc1",
            "jc2",
            "j1",
            "j2",
            "junior college 1",
            "junior college 2",
            "jc 1-2",
            "a level",
            "a-level",
        ],
    ),
    (
        "pre-school",
        &["preschool", "kindergarten", "k1", "k2", "nursery", "pre school"],
    ),
    ("ib", &["international baccalaureate", "ib diploma", "ibdp"]),
    ("igcse", &["international gcse", "cambridge igcse"]),
    ("diploma", &["polytechnic", "poly", "dip"]),
];

/// True when some form of the group (canonical or variant) is a substring
/// of `text`, or `text` is a substring of the form.
fn group_covers(canonical: &str, variants: &[&str], text: &str) -> bool {
    std::iter::once(canonical)
        .chain(variants.iter().copied())
        .any(|form| text.contains(form) || form.contains(text))
}

/// True iff some single group in either table covers both inputs. Both the
/// subject and the level table are consulted: the same free-text field can
/// need to match by either semantics, so a hit in either table counts.
///
/// Inputs must already be normalized (see `normalize::normalize`).
pub fn shares_vocabulary_group(a: &str, b: &str) -> bool {
    SUBJECT_GROUPS
        .iter()
        .chain(LEVEL_GROUPS.iter())
        .any(|&(canonical, variants)| {
            group_covers(canonical, variants, a) && group_covers(canonical, variants, b)
        })
}
