//! DOCX Writer
//!
//! Serializes a `FormattedDocument` into a minimal WordprocessingML package:
//! content types, package relationships, styles, a bullet numbering
//! definition and the document body.

use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use requirements_analyzer_core::{Block, FormattedDocument, HeadingLevel, TextRun};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::services::formatter::split_emphasis;
use crate::utils::error::{AnalyzerError, AnalyzerResult};

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Twentieths of a point; 360 = 0.25 inch.
const STORY_INDENT: &str = "360";
const LIST_INDENT: &str = "720";
const LIST_HANGING: &str = "360";
const PARAGRAPH_SPACING_AFTER: &str = "120";
const BULLET_NUM_ID: &str = "1";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/></w:rPr></w:rPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="36"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="30"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="200" w:after="80"/><w:outlineLvl w:val="2"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading4"><w:name w:val="heading 4"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="160" w:after="60"/><w:outlineLvl w:val="3"/></w:pPr><w:rPr><w:b/><w:sz w:val="24"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:spacing w:after="60"/></w:pPr></w:style></w:styles>"#;

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#;

/// Render a formatted document as `.docx` bytes.
pub fn export_docx(document: &FormattedDocument) -> AnalyzerResult<Vec<u8>> {
    let body = document_xml(document)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &[u8]); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
        ("word/document.xml", &body),
        ("word/styles.xml", STYLES_XML.as_bytes()),
        ("word/numbering.xml", NUMBERING_XML.as_bytes()),
    ];
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| AnalyzerError::export(format!("Failed to add {}: {}", name, e)))?;
        zip.write_all(content)
            .map_err(|e| AnalyzerError::export(format!("Failed to write {}: {}", name, e)))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| AnalyzerError::export(format!("Failed to finish DOCX archive: {}", e)))?;
    Ok(cursor.into_inner())
}

/// Thin wrapper mapping writer failures to export errors.
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn event(&mut self, event: Event<'_>) -> AnalyzerResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| AnalyzerError::export(format!("XML write error: {}", e)))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> AnalyzerResult<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Start(elem))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> AnalyzerResult<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Empty(elem))
    }

    fn end(&mut self, name: &str) -> AnalyzerResult<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text(&mut self, text: &str) -> AnalyzerResult<()> {
        self.event(Event::Text(BytesText::new(text)))
    }

    fn into_inner(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Paragraph properties derived from the block kind.
struct ParagraphStyle {
    style_id: Option<&'static str>,
    indent: Option<&'static str>,
    bullet: bool,
    bold: bool,
}

fn paragraph_style(block: &Block) -> ParagraphStyle {
    match block {
        Block::Heading { level, .. } => ParagraphStyle {
            style_id: Some(match level {
                HeadingLevel::Title => "Heading1",
                HeadingLevel::Section => "Heading2",
                HeadingLevel::Epic => "Heading3",
                HeadingLevel::Story => "Heading4",
            }),
            indent: level.is_indented().then_some(STORY_INDENT),
            bullet: false,
            bold: true,
        },
        Block::ListItem { .. } => ParagraphStyle {
            style_id: Some("ListBullet"),
            indent: Some(LIST_INDENT),
            bullet: true,
            bold: false,
        },
        Block::Paragraph { .. } => ParagraphStyle {
            style_id: None,
            indent: None,
            bullet: false,
            bold: false,
        },
    }
}

fn block_runs(block: &Block) -> Vec<TextRun> {
    match block {
        Block::Heading { text, .. } => vec![TextRun::bold(text.as_str())],
        Block::ListItem { text } => split_emphasis(text),
        Block::Paragraph { runs } => runs.clone(),
    }
}

/// Build `word/document.xml`.
fn document_xml(document: &FormattedDocument) -> AnalyzerResult<Vec<u8>> {
    let mut out = XmlOut::new();
    out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    out.start("w:document", &[("xmlns:w", WORDPROCESSING_NS)])?;
    out.start("w:body", &[])?;

    for block in document.blocks() {
        write_paragraph(&mut out, &paragraph_style(block), &block_runs(block))?;
    }

    out.empty("w:sectPr", &[])?;
    out.end("w:body")?;
    out.end("w:document")?;
    Ok(out.into_inner())
}

fn write_paragraph(out: &mut XmlOut, style: &ParagraphStyle, runs: &[TextRun]) -> AnalyzerResult<()> {
    out.start("w:p", &[])?;

    out.start("w:pPr", &[])?;
    if let Some(style_id) = style.style_id {
        out.empty("w:pStyle", &[("w:val", style_id)])?;
    }
    if style.bullet {
        out.start("w:numPr", &[])?;
        out.empty("w:ilvl", &[("w:val", "0")])?;
        out.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
        out.end("w:numPr")?;
    }
    if style.style_id.is_none() {
        out.empty("w:spacing", &[("w:after", PARAGRAPH_SPACING_AFTER)])?;
    }
    if let Some(indent) = style.indent {
        if style.bullet {
            out.empty("w:ind", &[("w:left", indent), ("w:hanging", LIST_HANGING)])?;
        } else {
            out.empty("w:ind", &[("w:left", indent)])?;
        }
    }
    out.end("w:pPr")?;

    for run in runs {
        out.start("w:r", &[])?;
        if run.bold || style.bold {
            out.start("w:rPr", &[])?;
            out.empty("w:b", &[])?;
            out.end("w:rPr")?;
        }
        out.start("w:t", &[("xml:space", "preserve")])?;
        out.text(&run.text)?;
        out.end("w:t")?;
        out.end("w:r")?;
    }

    out.end("w:p")
}
