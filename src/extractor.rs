//! Pulls titles, descriptions and member listings out of dartdoc pages.
//!
//! Everything here works on HTML strings and returns plain data; reading the
//! files is left to the caller.

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Summary sections of a library page, by element id, in output order.
pub const LIBRARY_SECTIONS: &[(&str, &str)] = &[
    ("classes", "Classes"),
    ("enums", "Enums"),
    ("mixins", "Mixins"),
    ("extensions", "Extensions"),
    ("constants", "Constants"),
    ("properties", "Properties"),
    ("functions", "Functions"),
    ("typedefs", "Typedefs"),
];

/// Member sections of a class page, by element id, in output order.
pub const CLASS_SECTIONS: &[(&str, &str)] = &[
    ("constructors", "Constructors"),
    ("instance-properties", "Properties"),
    ("instance-methods", "Methods"),
    ("static-methods", "Static Methods"),
];

/// One `<dt>`/`<dd>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDoc {
    pub name: String,
    pub friendly_name: String,
    pub description: Option<String>,
    pub sections: Vec<Section>,
    /// `href`s of linked class pages, de-duplicated, in document order.
    pub class_links: Vec<String>,
    pub classes: Vec<ClassDoc>,
}

/// How `<dt>` text becomes an entry name.
#[derive(Debug, Clone, Copy)]
enum EntryName {
    /// Prefer the `span.name` inside the `dt`.
    NameSpan,
    /// Use the whole `dt` text, signature included.
    FullText,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Joins the trimmed, non-empty text nodes below `element` with single spaces.
pub fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `game_logic_player` -> `Game > Logic > Player`.
pub fn friendly_name(lib_name: &str) -> String {
    let spaced = lib_name.replace('_', " > ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_alpha = false;

    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    document.select(&selector(css)).next().map(|e| element_text(&e))
}

fn next_dd<'a>(dt: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    dt.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "dd")
}

fn collect_entries(section: &ElementRef, naming: EntryName) -> Vec<Entry> {
    let dt_selector = selector("dt");
    let name_selector = selector("span.name");

    section
        .select(&dt_selector)
        .map(|dt| {
            let name = match naming {
                EntryName::NameSpan => dt
                    .select(&name_selector)
                    .next()
                    .map(|span| element_text(&span))
                    .unwrap_or_else(|| element_text(&dt)),
                EntryName::FullText => element_text(&dt),
            };
            let description = next_dd(&dt).map(|dd| element_text(&dd)).unwrap_or_default();

            Entry { name, description }
        })
        .collect()
}

fn collect_sections(
    document: &Html,
    element: &str,
    ids: &[(&str, &'static str)],
    naming: EntryName,
) -> Vec<Section> {
    ids.iter()
        .filter_map(|&(id, title)| {
            let section = document.select(&selector(&format!("{}#{}", element, id))).next()?;
            Some(Section {
                title,
                entries: collect_entries(&section, naming),
            })
        })
        .collect()
}

pub fn extract_library(html: &str, lib_name: &str) -> LibraryDoc {
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let class_links = document
        .select(&selector("a[href*=\"-class.html\"]"))
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| seen.insert(href.to_string()))
        .map(str::to_string)
        .collect();

    LibraryDoc {
        name: lib_name.to_string(),
        friendly_name: friendly_name(lib_name),
        description: first_text(&document, "section.desc"),
        sections: collect_sections(&document, "section.summary", LIBRARY_SECTIONS, EntryName::NameSpan),
        class_links,
        classes: Vec::new(),
    }
}

pub fn extract_class(html: &str) -> ClassDoc {
    let document = Html::parse_document(html);

    ClassDoc {
        title: first_text(&document, "h1"),
        description: first_text(&document, "section.desc"),
        sections: collect_sections(&document, "section", CLASS_SECTIONS, EntryName::FullText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"
        <html><body>
          <h1><span>helper_game_state</span> library</h1>
          <section class="desc markdown">
            <p>Tracks the <b>state</b> of a game.</p>
          </section>
          <section class="summary offset-anchor" id="classes">
            <h2>Classes</h2>
            <dl>
              <dt id="GameState"><span class="name"><a href="helper_game_state/GameState-class.html">GameState</a></span></dt>
              <dd>Holds the board.</dd>
              <dt id="Move"><a href="helper_game_state/Move-class.html">Move</a></dt>
              <dd></dd>
            </dl>
          </section>
          <section class="summary offset-anchor" id="functions">
            <dl>
              <dt><span class="name">copyState</span><span class="signature">(GameState s) → GameState</span></dt>
            </dl>
          </section>
          <aside><a href="helper_game_state/GameState-class.html">GameState</a></aside>
        </body></html>
    "#;

    #[test]
    fn friendly_names_are_title_cased() {
        assert_eq!(friendly_name("game_logic_player"), "Game > Logic > Player");
        assert_eq!(friendly_name("main"), "Main");
        assert_eq!(friendly_name("quoridor_game"), "Quoridor > Game");
        assert_eq!(friendly_name("views_pages_2d"), "Views > Pages > 2D");
    }

    #[test]
    fn extracts_library_summary() {
        let doc = extract_library(LIBRARY, "helper_game_state");

        assert_eq!(doc.friendly_name, "Helper > Game > State");
        assert_eq!(doc.description.as_deref(), Some("Tracks the state of a game."));

        let titles: Vec<_> = doc.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Classes", "Functions"]);

        let classes = &doc.sections[0].entries;
        assert_eq!(classes[0].name, "GameState");
        assert_eq!(classes[0].description, "Holds the board.");
        assert_eq!(classes[1].name, "Move");
        assert_eq!(classes[1].description, "");

        let functions = &doc.sections[1].entries;
        assert_eq!(functions[0].name, "copyState");
        assert_eq!(functions[0].description, "");
    }

    #[test]
    fn class_links_are_deduplicated() {
        let doc = extract_library(LIBRARY, "helper_game_state");
        assert_eq!(
            doc.class_links,
            vec![
                "helper_game_state/GameState-class.html".to_string(),
                "helper_game_state/Move-class.html".to_string(),
            ]
        );
    }

    #[test]
    fn extracts_class_members_with_full_signatures() {
        let html = r#"
            <html><body>
              <h1><span class="kind-class">GameState</span> class</h1>
              <section class="desc markdown"><p>Board snapshot.</p></section>
              <section class="summary offset-anchor" id="constructors">
                <dl class="constructor-summary-list">
                  <dt id="GameState"><span class="name"><a>GameState</a></span><span class="signature">(int size)</span></dt>
                  <dd>Creates a board.</dd>
                </dl>
              </section>
              <section class="summary offset-anchor" id="instance-methods">
                <dl class="callables">
                  <dt><span class="name">reset</span><span class="signature">() → void</span></dt>
                  <dd>Clears everything.</dd>
                </dl>
              </section>
            </body></html>
        "#;

        let class = extract_class(html);

        assert_eq!(class.title.as_deref(), Some("GameState class"));
        assert_eq!(class.description.as_deref(), Some("Board snapshot."));

        let titles: Vec<_> = class.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Constructors", "Methods"]);
        assert_eq!(class.sections[0].entries[0].name, "GameState (int size)");
        assert_eq!(class.sections[1].entries[0].name, "reset () → void");
        assert_eq!(class.sections[1].entries[0].description, "Clears everything.");
    }

    #[test]
    fn page_without_known_sections_yields_empty_doc() {
        let class = extract_class("<html><body><p>nothing</p></body></html>");
        assert_eq!(class, ClassDoc::default());
    }
}
