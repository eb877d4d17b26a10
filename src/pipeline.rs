//! Per-school answer generation: validate the request, then search and
//! generate once per school, in selection order.

use tracing::{debug, info};

use crate::catalog::{MAX_SCHOOLS, School, question_at};
use crate::serper::{SearchClient, SearchResult, SerperError};
use crate::together::{AnswerGenerator, TogetherError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Has seleccionado más de 5 corrientes ({0}). Por favor, selecciona un máximo de 5.")]
    TooManySchools(usize),

    #[error("Por favor, selecciona un problema y al menos una corriente.")]
    MissingQuestion,

    #[error("Por favor, selecciona un problema y al menos una corriente.")]
    NoSchools,

    #[error("Corriente desconocida: '{0}'. Usa `dicproblemas schools` para ver la lista.")]
    UnknownSchool(String),

    #[error("No existe el problema número {0}. Usa `dicproblemas questions` para ver la lista.")]
    QuestionOutOfRange(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("search failed for {school}: {source}")]
    Search {
        school: School,
        #[source]
        source: SerperError,
    },

    #[error("answer generation failed for {school}: {source}")]
    Generate {
        school: School,
        #[source]
        source: TogetherError,
    },
}

/// Where the question comes from: typed by the user or picked from the catalog.
#[derive(Debug, Clone)]
pub enum QuestionInput {
    Custom(String),
    Catalog(usize),
}

/// A validated submission: non-empty question, 1 to 5 distinct schools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    question: String,
    schools: Vec<School>,
}

impl AskRequest {
    /// Resolve and validate raw user input. Repeated schools collapse to their
    /// first occurrence before the limit is checked.
    pub fn parse(question: QuestionInput, school_names: &[String]) -> Result<Self, ValidationError> {
        let mut schools: Vec<School> = Vec::with_capacity(school_names.len());
        for name in school_names {
            let school =
                School::parse(name).ok_or_else(|| ValidationError::UnknownSchool(name.clone()))?;
            if !schools.contains(&school) {
                schools.push(school);
            }
        }

        let question = match question {
            QuestionInput::Custom(text) => text,
            QuestionInput::Catalog(position) => question_at(position)
                .ok_or(ValidationError::QuestionOutOfRange(position))?
                .to_string(),
        };

        Self::new(question, schools)
    }

    pub fn new(question: impl Into<String>, schools: Vec<School>) -> Result<Self, ValidationError> {
        let question = question.into();
        if schools.len() > MAX_SCHOOLS {
            return Err(ValidationError::TooManySchools(schools.len()));
        }
        if question.trim().is_empty() {
            return Err(ValidationError::MissingQuestion);
        }
        if schools.is_empty() {
            return Err(ValidationError::NoSchools);
        }
        Ok(Self { question, schools })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }
}

/// Everything one submission produced. Answers keep selection order; sources
/// are each school's result URLs concatenated in processing order, duplicates
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBundle {
    pub question: String,
    pub answers: Vec<(School, String)>,
    pub sources: Vec<String>,
}

/// Hooks for reporting progress while schools are processed.
pub trait ProgressNotifier {
    fn on_school_start(&self, _index: usize, _total: usize, _school: School) {}
    fn on_school_done(&self, _index: usize, _total: usize, _school: School) {}
}

impl ProgressNotifier for () {}

/// Newline-joined snippet text handed to the generator as grounding context.
/// Every result contributes a line, including those without a snippet.
pub fn build_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| r.snippet.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn source_urls(results: Vec<SearchResult>) -> impl Iterator<Item = String> {
    results.into_iter().map(|r| r.url).filter(|u| !u.is_empty())
}

/// Search then generate for each school, strictly one after another. The
/// first failure aborts the submission; answers gathered so far are dropped.
pub async fn answer_all(
    search: &impl SearchClient,
    generator: &impl AnswerGenerator,
    request: &AskRequest,
    progress: &impl ProgressNotifier,
) -> Result<ResponseBundle, PipelineError> {
    let question = request.question();
    let total = request.schools().len();
    let mut answers = Vec::with_capacity(total);
    let mut sources = Vec::new();

    for (index, &school) in request.schools().iter().enumerate() {
        progress.on_school_start(index, total, school);

        let results = search
            .search(question, school)
            .await
            .map_err(|source| PipelineError::Search { school, source })?;
        let context = build_context(&results);
        debug!(%school, results = results.len(), context_chars = context.len(), "search done");

        let answer = generator
            .generate(question, school, &context)
            .await
            .map_err(|source| PipelineError::Generate { school, source })?;

        answers.push((school, answer));
        sources.extend(source_urls(results));
        progress.on_school_done(index, total, school);
    }

    info!(
        schools = answers.len(),
        sources = sources.len(),
        "all answers generated"
    );

    Ok(ResponseBundle {
        question: question.to_string(),
        answers,
        sources,
    })
}
