//! The downloadable answer document: an ordered list of blocks assembled from
//! a [`ResponseBundle`], independent of the file format it is saved in.

pub mod docx;

use crate::catalog::School;
use crate::pipeline::ResponseBundle;

pub const TITLE: &str = "Diccionario de Problemas Económicos";
pub const PROBLEM_HEADING: &str = "Problema";
pub const SOURCES_HEADING: &str = "Fuentes";
pub const FOOTER: &str = "Nota: Este documento fue generado por un asistente de IA. \
    Verifica la información con fuentes académicas para un análisis más profundo.";
pub const CITATION: &str = "Cómo citar: Polanco, M. (2024). Diccionario de Problemas Económicos \
    [Aplicación web]. https://dicproblemas.streamlit.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullet(String),
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Block::Title(t) | Block::Paragraph(t) | Block::Bullet(t) => t,
            Block::Heading { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.push(Block::Heading {
            level,
            text: text.into(),
        });
    }
}

#[cfg(test)]
impl Document {
    /// Plain text of every block, one per line.
    pub fn text_content(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Body paragraphs following the heading `text`, up to the next heading.
    pub fn section(&self, text: &str) -> Vec<&str> {
        self.blocks
            .iter()
            .skip_while(|b| !matches!(b, Block::Heading { text: t, .. } if t == text))
            .skip(1)
            .take_while(|b| !matches!(b, Block::Heading { .. }))
            .map(Block::text)
            .collect()
    }
}

/// Assemble the document. Every source URL is listed, in bundle order.
pub fn build_document(question: &str, answers: &[(School, String)], sources: &[String]) -> Document {
    let mut doc = Document::default();
    doc.push(Block::Title(TITLE.to_string()));

    doc.heading(1, PROBLEM_HEADING);
    doc.push(Block::Paragraph(question.to_string()));

    for (school, answer) in answers {
        doc.heading(2, school.name());
        doc.push(Block::Paragraph(answer.clone()));
    }

    doc.heading(1, SOURCES_HEADING);
    for url in sources {
        doc.push(Block::Bullet(url.clone()));
    }

    doc.push(Block::Paragraph(FOOTER.to_string()));
    doc.push(Block::Paragraph(CITATION.to_string()));
    doc
}

impl From<&ResponseBundle> for Document {
    fn from(bundle: &ResponseBundle) -> Self {
        build_document(&bundle.question, &bundle.answers, &bundle.sources)
    }
}

/// Longest question prefix, in bytes, kept in a file name. Stays well under
/// the 255-byte name limit of common filesystems.
const MAX_STEM_BYTES: usize = 120;

/// `Respuesta_<question>.docx`, with spaces and path separators turned into
/// underscores and the question cut at [`MAX_STEM_BYTES`].
pub fn document_file_name(question: &str) -> String {
    let mut stem: String = question
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            _ => c,
        })
        .collect();
    stem.truncate(stem.floor_char_boundary(MAX_STEM_BYTES));
    format!("Respuesta_{stem}.docx")
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFLATION: &str = "¿Qué efectos tiene la inflación en la economía?";

    fn school(name: &str) -> School {
        School::parse(name).unwrap()
    }

    fn sample() -> Document {
        build_document(
            INFLATION,
            &[
                (school("Keynesianismo"), "Demanda agregada.".into()),
                (school("Monetarismo"), "Friedman: siempre monetaria.".into()),
            ],
            &["https://a.example".into(), "https://b.example".into()],
        )
    }

    #[test]
    fn problem_section_is_the_exact_question() {
        assert_eq!(sample().section(PROBLEM_HEADING), vec![INFLATION]);
    }

    #[test]
    fn school_headings_follow_answer_order() {
        let doc = sample();
        let level2: Vec<&str> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level: 2, text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(level2, vec!["Keynesianismo", "Monetarismo"]);
        assert_eq!(doc.section("Monetarismo"), vec!["Friedman: siempre monetaria."]);
    }

    #[test]
    fn sources_are_bullets_then_footer() {
        let doc = sample();
        let bullets: Vec<&str> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Bullet(url) => Some(url.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(bullets, vec!["https://a.example", "https://b.example"]);
        assert_eq!(doc.blocks.first(), Some(&Block::Title(TITLE.into())));
        assert_eq!(doc.blocks.last().map(Block::text), Some(CITATION));
        assert!(doc.text_content().contains(FOOTER));
    }

    #[test]
    fn long_source_lists_are_not_truncated() {
        let sources: Vec<String> = (0..25).map(|i| format!("https://s{i}.example")).collect();
        let doc = build_document("q", &[(school("Marxismo"), "a".into())], &sources);
        let count = doc.blocks.iter().filter(|b| matches!(b, Block::Bullet(_))).count();
        assert_eq!(count, 25);
    }

    #[test]
    fn building_twice_is_identical() {
        assert_eq!(sample().text_content(), sample().text_content());
        assert_eq!(sample(), sample());
    }

    #[test]
    fn from_bundle_matches_build_document() {
        let bundle = ResponseBundle {
            question: "q".into(),
            answers: vec![(school("Socialismo"), "a".into())],
            sources: vec!["https://x.example".into()],
        };
        assert_eq!(
            Document::from(&bundle),
            build_document("q", &bundle.answers, &bundle.sources)
        );
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(
            document_file_name(INFLATION),
            "Respuesta_¿Qué_efectos_tiene_la_inflación_en_la_economía?.docx"
        );
    }

    #[test]
    fn long_questions_are_cut_on_a_char_boundary() {
        let question = "¿Cómo afecta la política económica ".repeat(8);
        assert!(question.len() > 300);

        let name = document_file_name(&question);
        let stem = name
            .strip_prefix("Respuesta_")
            .and_then(|s| s.strip_suffix(".docx"))
            .unwrap();
        assert!(stem.len() <= MAX_STEM_BYTES, "stem is {} bytes", stem.len());
        assert!(question.replace(' ', "_").starts_with(stem));
    }

    #[test]
    fn file_name_cannot_escape_directory() {
        assert_eq!(document_file_name("a/b\\c d"), "Respuesta_a_b_c_d.docx");
    }
}
