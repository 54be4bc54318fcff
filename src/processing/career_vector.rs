//! Fixed-length vector encoding of career records

use crate::assessment::dimension::RiasecDimension;
use crate::error::{CareerMatcherError, Result};
use crate::processing::catalog::CareerRecord;
use crate::processing::vocabulary::*;
use log::debug;

/// Lengths of the eight career sub-vectors, in flattening order.
pub const CAREER_SECTION_LENGTHS: [usize; 8] = [
    ACADEMIC_SUBJECTS_LEN,
    ESSENTIAL_SKILLS_LEN,
    RIASEC_LEN,
    INTERESTS_LEN,
    SALARY_BANDS_LEN,
    DEMAND_LEVELS_LEN,
    LOCATIONS_LEN,
    GROWTH_LEVELS_LEN,
];

pub const CAREER_VECTOR_LEN: usize = ACADEMIC_SUBJECTS_LEN
    + ESSENTIAL_SKILLS_LEN
    + RIASEC_LEN
    + INTERESTS_LEN
    + SALARY_BANDS_LEN
    + DEMAND_LEVELS_LEN
    + LOCATIONS_LEN
    + GROWTH_LEVELS_LEN;

#[derive(Debug, Clone, PartialEq)]
pub struct CareerVector {
    pub education_requirements: [f64; ACADEMIC_SUBJECTS_LEN],
    /// Technical skills followed by soft skills.
    pub essential_skills: [f64; ESSENTIAL_SKILLS_LEN],
    pub personality_fit: [f64; RIASEC_LEN],
    pub industry_trends: [f64; INTERESTS_LEN],
    pub salary_band: [f64; SALARY_BANDS_LEN],
    pub market_demand: [f64; DEMAND_LEVELS_LEN],
    pub location_availability: [f64; LOCATIONS_LEN],
    pub growth_prospect: [f64; GROWTH_LEVELS_LEN],
}

impl CareerVector {
    pub fn zeroed() -> Self {
        Self {
            education_requirements: [0.0; ACADEMIC_SUBJECTS_LEN],
            essential_skills: [0.0; ESSENTIAL_SKILLS_LEN],
            personality_fit: [0.0; RIASEC_LEN],
            industry_trends: [0.0; INTERESTS_LEN],
            salary_band: [0.0; SALARY_BANDS_LEN],
            market_demand: [0.0; DEMAND_LEVELS_LEN],
            location_availability: [0.0; LOCATIONS_LEN],
            growth_prospect: [0.0; GROWTH_LEVELS_LEN],
        }
    }

    pub fn sub_vectors(&self) -> [(&'static str, &[f64]); 8] {
        [
            ("education_requirements", &self.education_requirements[..]),
            ("essential_skills", &self.essential_skills[..]),
            ("personality_fit", &self.personality_fit[..]),
            ("industry_trends", &self.industry_trends[..]),
            ("salary_band", &self.salary_band[..]),
            ("market_demand", &self.market_demand[..]),
            ("location_availability", &self.location_availability[..]),
            ("growth_prospect", &self.growth_prospect[..]),
        ]
    }

    pub fn flatten(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(CAREER_VECTOR_LEN);
        for (_, values) in self.sub_vectors() {
            flat.extend_from_slice(values);
        }
        flat
    }
}

/// Encodes career records. Labels that drive one-hot slots must be known;
/// unknown education, skill, industry and location names are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerVectorizer;

impl CareerVectorizer {
    pub fn new() -> Self {
        Self
    }

    pub fn vectorize(&self, record: &CareerRecord) -> Result<CareerVector> {
        let mut vector = CareerVector::zeroed();

        for subject in &record.required_education {
            match ACADEMIC_SUBJECTS.position(subject) {
                Some(i) => vector.education_requirements[i] = 1.0,
                None => debug!("{}: education '{}' has no vector slot", record.id, subject),
            }
        }

        for skill in &record.required_skills {
            if let Some(i) = TECHNICAL_SKILLS.position(skill) {
                vector.essential_skills[i] = 1.0;
            } else if let Some(i) = SOFT_SKILLS.position(skill) {
                vector.essential_skills[TECHNICAL_SKILLS_LEN + i] = 1.0;
            } else {
                debug!("{}: skill '{}' has no vector slot", record.id, skill);
            }
        }

        for code in &record.personality_fit {
            let dimension = RiasecDimension::parse(code).ok_or_else(|| {
                CareerMatcherError::InvalidCatalog(format!(
                    "{}: personality code '{}' is not one of R, I, A, S, E, C",
                    record.id, code
                ))
            })?;
            vector.personality_fit[dimension.index()] = 1.0;
        }

        for industry in &record.industries {
            match INTERESTS.position(industry) {
                Some(i) => vector.industry_trends[i] = 1.0,
                None => debug!("{}: industry '{}' has no vector slot", record.id, industry),
            }
        }

        for location in &record.locations {
            match LOCATIONS.position(location) {
                Some(i) => vector.location_availability[i] = 1.0,
                None => debug!("{}: location '{}' has no vector slot", record.id, location),
            }
        }

        vector.salary_band[one_hot_index(&SALARY_BANDS, &record.salary_band, &record.id)?] = 1.0;
        vector.market_demand[one_hot_index(&DEMAND_LEVELS, &record.demand, &record.id)?] = 1.0;
        vector.growth_prospect[one_hot_index(&GROWTH_LEVELS, &record.growth, &record.id)?] = 1.0;

        Ok(vector)
    }
}

fn one_hot_index(vocabulary: &Vocabulary, label: &str, id: &str) -> Result<usize> {
    vocabulary.position(label).ok_or_else(|| {
        CareerMatcherError::InvalidCatalog(format!(
            "{}: unknown {} '{}' (expected one of {})",
            id,
            vocabulary.name,
            label,
            vocabulary.terms().join(", ")
        ))
    })
}
