//! Static name-to-index maps shared by the profile and career vectorizers

/// An ordered list of known terms. A term's position is its vector index.
#[derive(Debug)]
pub struct Vocabulary {
    pub name: &'static str,
    terms: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
}

impl Vocabulary {
    pub const fn new(
        name: &'static str,
        terms: &'static [&'static str],
        aliases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, terms, aliases }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &'static [&'static str] {
        self.terms
    }

    /// Index of a term, matched case-insensitively with `_`/`-` read as spaces.
    /// Unknown terms yield `None`.
    pub fn position(&self, term: &str) -> Option<usize> {
        let key = normalize_term(term);
        if key.is_empty() {
            return None;
        }

        let canonical = self
            .aliases
            .iter()
            .find(|(alias, _)| normalize_term(alias) == key)
            .map(|(_, target)| normalize_term(target))
            .unwrap_or(key);

        self.terms.iter().position(|t| normalize_term(t) == canonical)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.position(term).is_some()
    }

    /// Canonical spelling of a term.
    pub fn canonical(&self, term: &str) -> Option<&'static str> {
        self.position(term).map(|i| self.terms[i])
    }
}

pub fn normalize_term(term: &str) -> String {
    term.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub const ACADEMIC_SUBJECTS_LEN: usize = 15;
pub const ACTIVITIES_LEN: usize = 15;
pub const TECHNICAL_SKILLS_LEN: usize = 20;
pub const SOFT_SKILLS_LEN: usize = 15;
pub const RIASEC_LEN: usize = 6;
pub const INTERESTS_LEN: usize = 20;
pub const CAREER_PREFERENCES_LEN: usize = 10;
pub const LOCATIONS_LEN: usize = 8;
pub const SALARY_BANDS_LEN: usize = 4;
pub const WORK_ENVIRONMENTS_LEN: usize = 6;
pub const DEMAND_LEVELS_LEN: usize = 4;
pub const GROWTH_LEVELS_LEN: usize = 4;
pub const ESSENTIAL_SKILLS_LEN: usize = TECHNICAL_SKILLS_LEN + SOFT_SKILLS_LEN;

pub static ACADEMIC_SUBJECTS: Vocabulary = Vocabulary::new(
    "academic_subjects",
    &[
        "Mathematics",
        "Physics",
        "Chemistry",
        "Biology",
        "Computer Science",
        "English",
        "History",
        "Geography",
        "Economics",
        "Business Studies",
        "Accountancy",
        "Psychology",
        "Political Science",
        "Fine Arts",
        "Physical Education",
    ],
    &[
        ("Math", "Mathematics"),
        ("Maths", "Mathematics"),
        ("CS", "Computer Science"),
        ("Computing", "Computer Science"),
        ("Accounting", "Accountancy"),
        ("Business", "Business Studies"),
        ("Art", "Fine Arts"),
        ("PE", "Physical Education"),
        ("Civics", "Political Science"),
    ],
);

pub static ACTIVITIES: Vocabulary = Vocabulary::new(
    "extracurricular_activities",
    &[
        "Sports",
        "Music",
        "Drama",
        "Debate",
        "Coding Club",
        "Robotics",
        "Art",
        "Volunteering",
        "Student Council",
        "Science Olympiad",
        "Model UN",
        "Photography",
        "Creative Writing",
        "Entrepreneurship Club",
        "Environmental Club",
    ],
    &[("Theatre", "Drama"), ("Community Service", "Volunteering"), ("MUN", "Model UN")],
);

pub static TECHNICAL_SKILLS: Vocabulary = Vocabulary::new(
    "technical_skills",
    &[
        "Programming",
        "Python",
        "Java",
        "JavaScript",
        "C++",
        "SQL",
        "Data Analysis",
        "Machine Learning",
        "Web Development",
        "Mobile Development",
        "Cloud Computing",
        "Cybersecurity",
        "Networking",
        "Statistics",
        "Spreadsheets",
        "CAD",
        "Graphic Design",
        "Video Editing",
        "Electronics",
        "Laboratory Techniques",
    ],
    &[
        ("Coding", "Programming"),
        ("JS", "JavaScript"),
        ("Excel", "Spreadsheets"),
        ("ML", "Machine Learning"),
        ("Lab Work", "Laboratory Techniques"),
        ("AutoCAD", "CAD"),
    ],
);

pub static SOFT_SKILLS: Vocabulary = Vocabulary::new(
    "soft_skills",
    &[
        "Communication",
        "Leadership",
        "Teamwork",
        "Problem Solving",
        "Critical Thinking",
        "Creativity",
        "Time Management",
        "Adaptability",
        "Empathy",
        "Negotiation",
        "Public Speaking",
        "Organization",
        "Attention to Detail",
        "Decision Making",
        "Conflict Resolution",
    ],
    &[("Collaboration", "Teamwork"), ("Organisation", "Organization")],
);

pub static RIASEC_DIMENSIONS: Vocabulary = Vocabulary::new(
    "personality_dimensions",
    &["Realistic", "Investigative", "Artistic", "Social", "Enterprising", "Conventional"],
    &[("R", "Realistic"), ("I", "Investigative"), ("A", "Artistic"), ("S", "Social"), ("E", "Enterprising"), ("C", "Conventional")],
);

pub static INTERESTS: Vocabulary = Vocabulary::new(
    "interests",
    &[
        "Technology",
        "Science",
        "Healthcare",
        "Business",
        "Finance",
        "Arts",
        "Design",
        "Education",
        "Law",
        "Engineering",
        "Environment",
        "Media",
        "Sports",
        "Social Work",
        "Research",
        "Government",
        "Entrepreneurship",
        "Agriculture",
        "Hospitality",
        "Manufacturing",
    ],
    &[("Medicine", "Healthcare"), ("Tech", "Technology"), ("Teaching", "Education")],
);

pub static CAREER_PREFERENCES: Vocabulary = Vocabulary::new(
    "career_preferences",
    &[
        "Job Security",
        "High Salary",
        "Work-Life Balance",
        "Creativity",
        "Helping Others",
        "Leadership",
        "Independence",
        "Travel",
        "Innovation",
        "Prestige",
    ],
    &[],
);

pub static LOCATIONS: Vocabulary = Vocabulary::new(
    "location_preferences",
    &[
        "Metro City",
        "Tier 2 City",
        "Small Town",
        "Rural",
        "Remote",
        "International",
        "Coastal",
        "Industrial Hub",
    ],
    &[("Metro", "Metro City"), ("Abroad", "International"), ("Work From Home", "Remote")],
);

pub static SALARY_BANDS: Vocabulary = Vocabulary::new("salary_band", &["Low", "Medium", "High", "Very High"], &[]);

pub static WORK_ENVIRONMENTS: Vocabulary = Vocabulary::new(
    "work_environment",
    &["Office", "Remote", "Hybrid", "Field", "Laboratory", "Studio"],
    &[("Lab", "Laboratory"), ("Outdoors", "Field")],
);

pub static DEMAND_LEVELS: Vocabulary = Vocabulary::new("market_demand", &["Low", "Moderate", "High", "Very High"], &[]);

pub static GROWTH_LEVELS: Vocabulary = Vocabulary::new("growth_prospect", &["Slow", "Moderate", "Fast", "Very Fast"], &[]);
