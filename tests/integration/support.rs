//! Shared test fixtures.

use std::io::{Cursor, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use requirements_analyzer_llm::{
    LlmError, LlmProvider, LlmRequestOptions, LlmResponse, LlmResult, Message, ProviderConfig,
    StopReason, UsageStats,
};

/// Provider answering from a fixed script, counting calls.
pub struct ScriptedProvider {
    config: ProviderConfig,
    script: Mutex<Vec<LlmResult<String>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<LlmResult<String>>) -> Self {
        Self {
            config: ProviderConfig::default(),
            script: Mutex::new(script.into_iter().rev().collect()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds on every call, echoing a per-call label.
    pub fn always_ok(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(|l| Ok(l.to_string())).collect())
    }

    /// Succeeds until call `k` (1-indexed), which fails.
    pub fn failing_at(k: usize) -> Self {
        let script = (1..=4)
            .map(|i| {
                if i == k {
                    Err(LlmError::ServerError {
                        message: "upstream exploded".to_string(),
                        status: Some(500),
                    })
                } else {
                    Ok(format!("section {}", i))
                }
            })
            .collect();
        Self::new(script)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        _system: Option<String>,
        _request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = messages.into_iter().next() {
            self.prompts.lock().unwrap().push(message.content);
        }
        let next = self
            .script
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(LlmError::Other {
                message: "script exhausted".to_string(),
            }))?;
        Ok(LlmResponse {
            content: Some(next),
            stop_reason: StopReason::EndTurn,
            usage: UsageStats::default(),
            model: self.config.model.clone(),
        })
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Build a minimal DOCX package whose body holds the given paragraphs.
pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p)
            }
        })
        .collect();
    docx_with_body(&body)
}

/// Build a minimal DOCX package around raw body XML.
pub fn docx_with_body(body: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(b"<Types/>").unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap().into_inner()
}

/// Build a PDF with one page per entry, each page showing its text in
/// Helvetica. An empty entry gives a page with an empty content stream.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        let content = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text)
        };
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len() + 1,
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
    }
    let xref_start = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.extend_from_slice(xref.as_bytes());
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_start
        )
        .as_bytes(),
    );
    pdf
}
