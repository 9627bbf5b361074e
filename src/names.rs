//! Static corrections for the surah listing.
//!
//! The listing page truncates some transliterations and garbles Arabic glyphs
//! for others, so both are taken from fixed tables keyed by surah number.

pub const SURAH_COUNT: usize = 114;

pub fn canonical_transliteration(id: u32) -> Option<&'static str> {
    lookup(&TRANSLITERATIONS, id)
}

pub fn canonical_arabic_name(id: u32) -> Option<&'static str> {
    lookup(&ARABIC_NAMES, id)
}

/// English gloss used when the surah page has no `Meaning:` line.
pub fn fallback_translation(id: u32) -> Option<&'static str> {
    ENGLISH_GLOSSES
        .iter()
        .find(|(gloss_id, _)| *gloss_id == id)
        .map(|(_, gloss)| *gloss)
}

/// The table transliteration always wins over the extracted one.
pub fn transliteration(id: u32, extracted: &str) -> String {
    canonical_transliteration(id).unwrap_or(extracted).to_owned()
}

pub fn arabic_name(id: u32, extracted: Option<&str>) -> String {
    match canonical_arabic_name(id).or(extracted) {
        Some(name) => name.to_owned(),
        None => format!("سورة {id}"),
    }
}

fn lookup(table: &'static [&'static str], id: u32) -> Option<&'static str> {
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    table.get(index).copied()
}

static TRANSLITERATIONS: [&str; SURAH_COUNT] = [
    "Al-Fatihah",
    "Al-Baqarah",
    "Al-Imran",
    "An-Nisa",
    "Al-Maidah",
    "Al-AnAm",
    "Al-A'Raf",
    "Al-Anfal",
    "At-Tawbah",
    "Yunus",
    "Hud",
    "Yusuf",
    "Ar-Ra'd",
    "Ibrahim",
    "Al-Hijr",
    "An-Nahl",
    "Israel",
    "Al-Kahf",
    "Maryam",
    "Ta-ha",
    "Al-Anbiyaa",
    "Al-Haj",
    "Al-Muminun",
    "An-Nur",
    "Al-Furqan",
    "Ash-Shu'ara",
    "An-Naml",
    "Al-Qasas",
    "Al-Ankabut",
    "Ar-Rum",
    "Luqman",
    "As-Sajdah",
    "Al-Ahzab",
    "Saba",
    "Fatir",
    "Ya-Sin",
    "As-Saffat",
    "Sad",
    "Az-Zumar",
    "Al-Mumin",
    "Ha-Mim",
    "Ash-Shuraa",
    "Az-Zukhruf",
    "Ad-Dukhan",
    "Al-Jathiyah",
    "Al-Ahqaf",
    "Muhammad",
    "Al-Fath",
    "Al-Hujurat",
    "Qaf",
    "Az-Zariyat",
    "At-Tur",
    "An-Najm",
    "Al-Qamar",
    "Ar-Rahman",
    "Al-Waqiah",
    "Al-Hadid",
    "Al-Mujadila",
    "Al-Hashr",
    "Al-Mumtahanah",
    "As-Saf",
    "Al-Jumu'ah",
    "Al-Munafiqun",
    "At-Taghabun",
    "At-Talaq",
    "At-Tahrim",
    "Al-Mulk",
    "Al-Qalam",
    "Al-Haqqah",
    "Al-Ma'arij",
    "Nuh",
    "Al-Jinn",
    "Al-Muzzammil",
    "Al-Muddaththir",
    "Al-Qiyamah",
    "Ad-Dahr",
    "Al-Mursalat",
    "An-Naba",
    "An-Nazi'at",
    "Abasa",
    "At-Takwir",
    "Al-Infitar",
    "Al-Mutaffifin",
    "Al-Inshiqaq",
    "Al-Buruj",
    "At-Tariq",
    "Al-A'la",
    "Al-Ghashiyah",
    "Al-Fajr",
    "Al-Balad",
    "Ash-Shams",
    "Al-Layl",
    "Ad-Duhaa",
    "Ash-Sharh",
    "At-Tin",
    "Al-Alaq",
    "Al-Qadr",
    "Al-Bayyinah",
    "Az-Zalzalah",
    "Al-Adiyat",
    "Al-Qari'a",
    "At-Takathur",
    "Al-Asr",
    "Al-Humaza",
    "Al-Fil",
    "Quraysh",
    "Al-Ma'un",
    "Al-Kauthar",
    "Al-Kafirun",
    "An-Nasr",
    "Lahab",
    "Al-Ikhlas",
    "Al-Falaq",
    "An-Nas",
];

static ARABIC_NAMES: [&str; SURAH_COUNT] = [
    "الفاتحة",
    "البقرة",
    "آل عمران",
    "النساء",
    "المائدة",
    "الأنعام",
    "الأعراف",
    "الأنفال",
    "التوبة",
    "يونس",
    "هود",
    "يوسف",
    "الرعد",
    "إبراهيم",
    "الحجر",
    "النحل",
    "الإسراء",
    "الكهف",
    "مريم",
    "طه",
    "الأنبياء",
    "الحج",
    "المؤمنون",
    "النور",
    "الفرقان",
    "الشعراء",
    "النمل",
    "القصص",
    "العنكبوت",
    "الروم",
    "لقمان",
    "السجدة",
    "الأحزاب",
    "سبإ",
    "فاطر",
    "يس",
    "الصافات",
    "ص",
    "الزمر",
    "غافر",
    "فصلت",
    "الشورى",
    "الزخرف",
    "الدخان",
    "الجاثية",
    "الأحقاف",
    "محمد",
    "الفتح",
    "الحجرات",
    "ق",
    "الذاريات",
    "الطور",
    "النجم",
    "القمر",
    "الرحمن",
    "الواقعة",
    "الحديد",
    "المجادلة",
    "الحشر",
    "الممتحنة",
    "الصف",
    "الجمعة",
    "المنافقون",
    "التغابن",
    "الطلاق",
    "التحريم",
    "الملك",
    "القلم",
    "الحاقة",
    "المعارج",
    "نوح",
    "الجن",
    "المزمل",
    "المدثر",
    "القيامة",
    "الإنسان",
    "المرسلات",
    "النبأ",
    "النازعات",
    "عبس",
    "التكوير",
    "الانفطار",
    "المطففين",
    "الانشقاق",
    "البروج",
    "الطارق",
    "الأعلى",
    "الغاشية",
    "الفجر",
    "البلد",
    "الشمس",
    "الليل",
    "الضحى",
    "الشرح",
    "التين",
    "العلق",
    "القدر",
    "البينة",
    "الزلزلة",
    "العاديات",
    "القارعة",
    "التكاثر",
    "العصر",
    "الهمزة",
    "الفيل",
    "قريش",
    "الماعون",
    "الكوثر",
    "الكافرون",
    "النصر",
    "المسد",
    "الإخلاص",
    "الفلق",
    "الناس",
];

static ENGLISH_GLOSSES: [(u32, &str); 28] = [
    (1, "The Opening"),
    (2, "The Cow"),
    (3, "Family of Imran"),
    (4, "The Women"),
    (5, "The Table Spread"),
    (6, "The Cattle"),
    (7, "The Heights"),
    (8, "The Spoils of War"),
    (9, "The Repentance"),
    (10, "Jonah"),
    (11, "Hud"),
    (12, "Joseph"),
    (13, "The Thunder"),
    (14, "Abraham"),
    (15, "The Rocky Tract"),
    (16, "The Bee"),
    (17, "The Night Journey"),
    (18, "The Cave"),
    (19, "Mary"),
    (20, "Ta-Ha"),
    (67, "The Sovereignty"),
    (68, "The Pen"),
    (69, "The Reality"),
    (70, "The Ascending Stairways"),
    (71, "Noah"),
    (72, "The Jinn"),
    (73, "The Enshrouded One"),
    (74, "The Cloaked One"),
];
