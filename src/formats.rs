use serde::{Deserialize, Serialize};

/// One row of the surah listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahRef {
    pub id: u32,
    pub transliteration: String,
    #[serde(rename = "bengaliName")]
    pub bengali_name: String,
    pub url: String,
    pub total_verses: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub id: u32,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(rename = "type")]
    pub revelation_type: RevelationType,
    pub total_verses: u32,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: u32,
    pub text: String,
    pub transliteration: String,
    pub translation_bn: String,
    pub translation_en: String,
}

/// Entry of `failed_surahs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedSurah {
    pub id: u32,
    pub transliteration: String,
}

impl From<&SurahRef> for FailedSurah {
    fn from(surah: &SurahRef) -> Self {
        Self {
            id: surah.id,
            transliteration: surah.transliteration.clone(),
        }
    }
}
