use scraper::{ElementRef, Html, Selector};

/// Parses a selector literal. Only call with static CSS known to be valid.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("static selector {css:?} is invalid: {err}"))
}

/// Concatenated descendant text, trimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Direct and nested `td` cells of a row, as trimmed text.
pub fn cell_texts(row: ElementRef<'_>, td: &Selector) -> Vec<String> {
    row.select(td).map(text_of).collect()
}

/// Tables matching `primary`, or every table when none match.
pub fn tables_or_all<'a>(
    document: &'a Html,
    primary: &Selector,
    any: &Selector,
) -> Vec<ElementRef<'a>> {
    let matched = document.select(primary).collect::<Vec<_>>();
    if matched.is_empty() {
        return document.select(any).collect();
    }
    matched
}
