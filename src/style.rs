/// Print stylesheet for the generated document. A4, one library per page.
pub const PRINT_STYLESHEET: &str = r#"
@page {
    size: A4;
    margin: 2cm 2.5cm;
}
* {
    box-sizing: border-box;
}
body {
    font-family: Georgia, serif;
    font-size: 9pt;
    line-height: 1.5;
    color: #333;
    max-width: 100%;
    overflow-x: hidden;
}
h1 {
    color: #0066cc;
    border-bottom: 3px solid #0066cc;
    padding-bottom: 10px;
    font-size: 18pt;
}
h2 {
    color: #0088dd;
    border-bottom: 2px solid #ddd;
    padding-bottom: 5px;
    margin-top: 30px;
    font-size: 14pt;
    page-break-before: always;
}
h3 {
    color: #666;
    margin-top: 20px;
    font-size: 12pt;
}
h4 {
    color: #888;
    margin-top: 15px;
    font-size: 10pt;
}
code {
    font-family: "Courier New", monospace;
    font-size: 7.5pt;
    background: #f5f5f5;
    padding: 3px 5px;
    border-radius: 2px;
    word-break: break-word;
    overflow-wrap: break-word;
    hyphens: none;
}
ul {
    margin-left: 20px;
}
li {
    margin-bottom: 8px;
}
dl {
    margin-left: 10px;
    margin-right: 10px;
    max-width: 100%;
}
dt {
    font-weight: bold;
    margin-top: 12px;
    color: #444;
    page-break-inside: avoid;
    page-break-after: avoid;
    max-width: 100%;
}
dt code {
    display: block;
    padding: 8px;
    background: #f8f8f8;
    border-left: 3px solid #0066cc;
    margin: 5px 0;
    word-break: break-word;
    overflow-wrap: break-word;
    white-space: normal;
    max-width: 100%;
    line-height: 1.6;
    hyphens: none;
}
dd {
    margin-left: 20px;
    margin-bottom: 15px;
    margin-top: 5px;
    word-wrap: break-word;
    overflow-wrap: break-word;
    page-break-inside: avoid;
    max-width: 100%;
}
hr {
    border: none;
    border-top: 1px solid #ddd;
    margin: 25px 0;
    page-break-after: avoid;
}
a {
    color: #0066cc;
    text-decoration: none;
    word-wrap: break-word;
}
p {
    margin: 10px 0;
    text-align: justify;
    max-width: 100%;
}
"#;
