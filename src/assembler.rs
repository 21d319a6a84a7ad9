use slug::slugify;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use crate::extractor::{ClassDoc, LibraryDoc, Section};

/// Escapes text for use in element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Base anchor id for a library; see [`HtmlAssembler`] for uniqueness.
fn anchor_id(lib_name: &str) -> String {
    let slug = slugify(lib_name);
    if slug.is_empty() {
        "library".to_string()
    } else {
        slug
    }
}

/// Builds the flat HTML document handed to the PDF renderer.
///
/// Call order mirrors the document: [`table_of_contents`](Self::table_of_contents),
/// then one [`library`](Self::library) per extracted library, then
/// [`finish`](Self::finish).
///
/// Each library name gets one anchor id, shared by its TOC link and its
/// heading. Names that slugify alike get `-2`, `-3`, ... suffixes.
pub struct HtmlAssembler {
    html: String,
    anchors: HashMap<String, String>,
    used_anchors: HashSet<String>,
}

impl HtmlAssembler {
    pub fn new(title: &str, subtitle: &str, date: &str, stylesheet: &str) -> Self {
        let title = escape_html(title);
        let mut html = String::new();

        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{stylesheet}</style>
</head>
<body>
<h1>{title}</h1>
<p><strong>{subtitle}</strong></p>
<p>Date: {date}</p>
<hr>
"#,
            title = title,
            stylesheet = stylesheet,
            subtitle = escape_html(subtitle),
            date = escape_html(date),
        );

        Self {
            html,
            anchors: HashMap::new(),
            used_anchors: HashSet::new(),
        }
    }

    fn anchor(&mut self, lib_name: &str) -> String {
        if let Some(id) = self.anchors.get(lib_name) {
            return id.clone();
        }

        let base = anchor_id(lib_name);
        let mut id = base.clone();
        let mut n = 2;
        while !self.used_anchors.insert(id.clone()) {
            id = format!("{}-{}", base, n);
            n += 1;
        }

        self.anchors.insert(lib_name.to_string(), id.clone());
        id
    }

    /// `entries` pairs each library name with its display name.
    pub fn table_of_contents<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.html.push_str("<h2>Table of Contents</h2>\n<ul>\n");
        for (name, friendly) in entries {
            let id = self.anchor(name);
            let _ = writeln!(
                self.html,
                r##"<li><a href="#{}">{}</a></li>"##,
                id,
                escape_html(friendly)
            );
        }
        self.html.push_str("</ul>\n<hr>\n");
    }

    pub fn library(&mut self, doc: &LibraryDoc) {
        let id = self.anchor(&doc.name);
        let _ = writeln!(
            self.html,
            r#"<h2 id="{}">{}</h2>"#,
            id,
            escape_html(&doc.friendly_name)
        );

        if let Some(description) = &doc.description {
            let _ = writeln!(self.html, "<p>{}</p>", escape_html(description));
        }

        for section in &doc.sections {
            self.definition_list("h3", section);
        }

        for class in &doc.classes {
            self.class(class);
        }

        self.html.push_str("<hr>\n");
    }

    fn class(&mut self, class: &ClassDoc) {
        if let Some(title) = &class.title {
            let _ = writeln!(self.html, "<h3>Class: {}</h3>", escape_html(title));
        }

        if let Some(description) = &class.description {
            let _ = writeln!(self.html, "<p><em>{}</em></p>", escape_html(description));
        }

        for section in &class.sections {
            self.definition_list("h4", section);
        }
    }

    fn definition_list(&mut self, heading: &str, section: &Section) {
        let _ = writeln!(self.html, "<{0}>{1}</{0}>\n<dl>", heading, section.title);
        for entry in &section.entries {
            let _ = writeln!(
                self.html,
                "<dt><code>{}</code></dt>\n<dd>{}</dd>",
                escape_html(&entry.name),
                escape_html(&entry.description)
            );
        }
        self.html.push_str("</dl>\n");
    }

    pub fn finish(mut self) -> String {
        self.html.push_str("</body>\n</html>\n");
        self.html
    }
}
