//! Surah page parsing.
//!
//! Each ayah is rendered as a row `{number, arabic, transliteration}`
//! followed by one or two rows whose first cell is blank and whose other
//! cells hold the Bengali and English translations. Extraction is best
//! effort: anything that does not match this layout is skipped, never
//! reported as an error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::dom;
use crate::formats::{RevelationType, Verse};

static VERSE_TABLE: LazyLock<Selector> = LazyLock::new(|| dom::selector("table.table-striped"));
static ANY_TABLE: LazyLock<Selector> = LazyLock::new(|| dom::selector("table"));
static TR: LazyLock<Selector> = LazyLock::new(|| dom::selector("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| dom::selector("td"));

static NAME_SOURCES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".info-box.bg-aqua .info-box-number",
        "h1",
        ".content-header h1",
        "title",
    ]
    .into_iter()
    .map(dom::selector)
    .collect()
});
static MEANING_BOX: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(".info-box.bg-yellow .progress-description"));
static INFO_CONTENT: LazyLock<Selector> =
    LazyLock::new(|| dom::selector(".info-box.bg-yellow .info-box-content"));

static ARABIC_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\s]+")
        .unwrap_or_else(|err| panic!("static regex: {err}"))
});
static MEANING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Meaning:\s*([^-—]+)").unwrap_or_else(|err| panic!("static regex: {err}"))
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Starts a new verse.
    Ayah {
        id: u32,
        text: String,
        transliteration: String,
    },
    /// Translation cells that passed [`is_translation_text`].
    Continuation {
        bn: Option<String>,
        en: Option<String>,
    },
    Ignored,
}

pub fn classify_row(cells: &[String]) -> RowKind {
    let [first, second, third, ..] = cells else {
        return RowKind::Ignored;
    };

    if first.is_empty() {
        return RowKind::Continuation {
            bn: Some(second).filter(|t| is_translation_text(t)).cloned(),
            en: Some(third).filter(|t| is_translation_text(t)).cloned(),
        };
    }

    match first.parse::<u32>() {
        Ok(id) if id > 0 => RowKind::Ayah {
            id,
            text: second.clone(),
            transliteration: third.clone(),
        },
        _ => RowKind::Ignored,
    }
}

/// Rejects stray page numbers and single-character artifacts.
pub fn is_translation_text(text: &str) -> bool {
    !text.is_empty()
        && text.chars().count() > 1
        && !text.chars().all(|ch| ch.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct VerseBuilder {
    id: u32,
    text: String,
    transliteration: String,
    translation_bn: Option<String>,
    translation_en: Option<String>,
}

impl VerseBuilder {
    fn new(id: u32, text: String, transliteration: String) -> Self {
        Self {
            id,
            text,
            transliteration,
            translation_bn: None,
            translation_en: None,
        }
    }

    fn absorb(&mut self, bn: Option<String>, en: Option<String>) {
        if self.translation_bn.is_none() {
            self.translation_bn = bn;
        }
        if self.translation_en.is_none() {
            self.translation_en = en;
        }
    }

    /// A verse is only complete once both translations are present.
    fn finish(self) -> Option<Verse> {
        let (Some(translation_bn), Some(translation_en)) = (self.translation_bn, self.translation_en)
        else {
            return None;
        };
        Some(Verse {
            id: self.id,
            text: self.text,
            transliteration: self.transliteration,
            translation_bn,
            translation_en,
        })
    }
}

#[derive(Debug, Default)]
struct Reconstruction {
    committed: Vec<Verse>,
    pending: Option<VerseBuilder>,
}

impl Reconstruction {
    fn step(mut self, row: RowKind) -> Self {
        match row {
            RowKind::Ayah {
                id,
                text,
                transliteration,
            } => {
                self.flush();
                self.pending = Some(VerseBuilder::new(id, text, transliteration));
            }
            RowKind::Continuation { bn, en } => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.absorb(bn, en);
                }
            }
            RowKind::Ignored => {}
        }
        self
    }

    fn flush(&mut self) {
        if let Some(verse) = self.pending.take().and_then(VerseBuilder::finish) {
            self.committed.push(verse);
        }
    }

    fn finish(mut self) -> Vec<Verse> {
        self.flush();
        self.committed
    }
}

/// Folds the rows of one table into verses, in row order.
pub fn reconstruct<I>(rows: I) -> Vec<Verse>
where
    I: IntoIterator<Item = RowKind>,
{
    rows.into_iter()
        .fold(Reconstruction::default(), Reconstruction::step)
        .finish()
}

/// Verses of every verse table on the page, in document order.
pub fn extract_verses(document: &Html) -> Vec<Verse> {
    dom::tables_or_all(document, &VERSE_TABLE, &ANY_TABLE)
        .into_iter()
        .flat_map(|table| {
            let rows = table
                .select(&TR)
                .map(|row| classify_row(&dom::cell_texts(row, &TD)))
                .collect::<Vec<_>>();
            reconstruct(rows)
        })
        .collect()
}

/// Unique by id (first occurrence wins), ascending.
pub fn dedup_and_sort(verses: Vec<Verse>) -> Vec<Verse> {
    let mut seen = HashSet::new();
    let mut unique = verses
        .into_iter()
        .filter(|verse| seen.insert(verse.id))
        .collect::<Vec<_>>();
    unique.sort_by_key(|verse| verse.id);
    unique
}

/// First Arabic-script run longer than two characters in the page headers.
pub fn extract_surah_name(document: &Html) -> Option<String> {
    NAME_SOURCES.iter().find_map(|selector| {
        let element = document.select(selector).next()?;
        let text = dom::text_of(element);
        ARABIC_RUN
            .find_iter(&text)
            .map(|run| run.as_str().trim())
            .find(|run| run.chars().count() > 2)
            .map(str::to_owned)
    })
}

/// English gloss from the `Meaning: ...` info box line.
pub fn extract_meaning(document: &Html) -> Option<String> {
    let text = document
        .select(&MEANING_BOX)
        .map(dom::text_of)
        .find(|text| text.to_lowercase().contains("meaning:"))?;
    let caps = MEANING.captures(&text)?;
    let meaning = caps.get(1)?.as_str().trim();
    if meaning.is_empty() {
        return None;
    }
    Some(meaning.to_owned())
}

/// Defaults to Meccan when the info box says neither.
pub fn extract_revelation_type(document: &Html) -> RevelationType {
    let text = document
        .select(&INFO_CONTENT)
        .map(|element| element.text().collect::<String>())
        .collect::<String>();
    let lower = text.to_lowercase();

    if text.contains("Mecca") || lower.contains("meccan") {
        return RevelationType::Meccan;
    }
    if text.contains("Medina") || lower.contains("medinan") {
        return RevelationType::Medinan;
    }
    RevelationType::Meccan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayah(id: u32) -> RowKind {
        RowKind::Ayah {
            id,
            text: format!("arabic {id}"),
            transliteration: format!("translit {id}"),
        }
    }

    fn cont(bn: Option<&str>, en: Option<&str>) -> RowKind {
        RowKind::Continuation {
            bn: bn.map(str::to_owned),
            en: en.map(str::to_owned),
        }
    }

    fn verse(id: u32, text: &str) -> Verse {
        Verse {
            id,
            text: text.to_owned(),
            transliteration: String::new(),
            translation_bn: "bn".to_owned(),
            translation_en: "en".to_owned(),
        }
    }

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn classify_row_recognizes_layouts() {
        assert_eq!(
            classify_row(&cells(&["2", "ذَٰلِكَ", "Zalika"])),
            RowKind::Ayah {
                id: 2,
                text: "ذَٰلِكَ".to_owned(),
                transliteration: "Zalika".to_owned(),
            }
        );
        assert_eq!(
            classify_row(&cells(&["", "এটি সেই কিতাব", "This is the Book"])),
            cont(Some("এটি সেই কিতাব"), Some("This is the Book"))
        );
        assert_eq!(classify_row(&cells(&["0", "a", "b"])), RowKind::Ignored);
        assert_eq!(classify_row(&cells(&["note", "a", "b"])), RowKind::Ignored);
        assert_eq!(classify_row(&cells(&["", "only two"])), RowKind::Ignored);
    }

    #[test]
    fn continuation_rejects_numeric_and_single_char_cells() {
        assert_eq!(classify_row(&cells(&["", "12", "x"])), cont(None, None));
        assert_eq!(
            classify_row(&cells(&["", "", "English"])),
            cont(None, Some("English"))
        );
    }

    #[test]
    fn alternating_rows_commit_each_complete_verse() {
        let verses = reconstruct([
            ayah(1),
            cont(Some("bn 1"), Some("en 1")),
            ayah(2),
            cont(Some("bn 2"), None),
            cont(None, Some("en 2")),
            ayah(3),
            cont(Some("bn 3"), Some("en 3")),
        ]);

        let ids = verses.iter().map(|v| v.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(verses[1].translation_bn, "bn 2");
        assert_eq!(verses[1].translation_en, "en 2");
        assert_eq!(verses[0].text, "arabic 1");
        assert_eq!(verses[0].transliteration, "translit 1");
    }

    #[test]
    fn table_ending_mid_ayah_drops_the_verse() {
        let verses = reconstruct([
            ayah(1),
            cont(Some("bn 1"), Some("en 1")),
            ayah(2),
            cont(Some("bn 2"), None),
        ]);

        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].id, 1);
    }

    #[test]
    fn incomplete_verse_is_dropped_when_next_ayah_starts() {
        let verses = reconstruct([ayah(1), ayah(2), cont(Some("bn"), Some("en"))]);

        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].id, 2);
    }

    #[test]
    fn first_qualifying_continuation_wins() {
        let verses = reconstruct([
            ayah(5),
            cont(Some("first bn"), Some("first en")),
            cont(Some("second bn"), Some("second en")),
        ]);

        assert_eq!(verses[0].translation_bn, "first bn");
        assert_eq!(verses[0].translation_en, "first en");
    }

    #[test]
    fn continuation_before_any_ayah_is_ignored() {
        let verses = reconstruct([cont(Some("bn"), Some("en")), RowKind::Ignored]);
        assert!(verses.is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let merged = dedup_and_sort(vec![
            verse(2, "page one"),
            verse(3, "page one"),
            verse(3, "page two"),
            verse(4, "page two"),
        ]);

        let threes = merged.iter().filter(|v| v.id == 3).collect::<Vec<_>>();
        assert_eq!(threes.len(), 1);
        assert_eq!(threes[0].text, "page one");
    }

    #[test]
    fn dedup_sorts_ascending() {
        let merged = dedup_and_sort(vec![verse(9, "a"), verse(1, "b"), verse(4, "c")]);
        let ids = merged.iter().map(|v| v.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 4, 9]);
    }

    #[test]
    fn extract_verses_reads_striped_tables() {
        let document = Html::parse_document(
            r#"<html><body>
<table class="table"><tr><td>99</td><td>ignored</td><td>ignored</td></tr></table>
<table class="table table-striped">
  <tr><td>1</td><td>بِسْمِ اللَّهِ</td><td>Bismillah</td></tr>
  <tr><td> </td><td>পরম করুণাময়</td><td>In the name of Allah</td></tr>
  <tr><td>2</td><td>الْحَمْدُ</td><td>Alhamdu</td></tr>
  <tr><td></td><td>সমস্ত প্রশংসা</td><td>7</td></tr>
</table>
</body></html>"#,
        );

        let verses = extract_verses(&document);

        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].id, 1);
        assert_eq!(verses[0].translation_en, "In the name of Allah");
    }

    #[test]
    fn extract_verses_falls_back_to_any_table() {
        let document = Html::parse_document(
            r#"<table>
  <tr><td>1</td><td>a</td><td>b</td></tr>
  <tr><td></td><td>bengali</td><td>english</td></tr>
</table>"#,
        );

        assert_eq!(extract_verses(&document).len(), 1);
    }

    #[test]
    fn metadata_is_read_from_info_boxes() {
        let document = Html::parse_document(
            r#"<html><head><title>Surah 36</title></head><body>
<div class="info-box bg-aqua"><span class="info-box-number">Surah 36 يس سورة</span></div>
<div class="info-box bg-yellow"><div class="info-box-content">
  <span class="progress-description">Revealed: Makkah</span>
  <span class="progress-description">Meaning: Ya Sin - extra</span>
  Medinan
</div></div>
</body></html>"#,
        );

        assert_eq!(extract_surah_name(&document).as_deref(), Some("يس سورة"));
        assert_eq!(extract_meaning(&document).as_deref(), Some("Ya Sin"));
        assert_eq!(extract_revelation_type(&document), RevelationType::Medinan);
    }

    #[test]
    fn metadata_is_absent_on_bare_pages() {
        let document = Html::parse_document("<html><body><p>nothing</p></body></html>");

        assert_eq!(extract_surah_name(&document), None);
        assert_eq!(extract_meaning(&document), None);
        assert_eq!(extract_revelation_type(&document), RevelationType::Meccan);
    }
}
