mod errors;
mod params;
mod progress;

pub use errors::AppError;
pub use params::{AskArgs, Cli, Command};

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use crate::catalog::{School, questions};
use crate::config::{self, SerperConfig, TogetherConfig};
use crate::document::docx::{DocxError, write_docx};
use crate::document::{Document, document_file_name};
use crate::markdown::format_bundle;
use crate::pipeline::{ProgressNotifier, ResponseBundle, answer_all};
use crate::serper::SerperClient;
use crate::together::TogetherClient;
use progress::Spinner;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const ABOUT: &str = "\
Diccionario de Problemas Económicos

Obtiene respuestas a problemas económicos según la interpretación de diversas
corrientes económicas.

Cómo usar la aplicación:
  1. Elija un problema de la lista (`dicproblemas questions`, luego `ask --pick N`)
     o proponga su propio problema (`ask --question \"...\"`).
  2. Seleccione de una a cinco corrientes con `--school` (`dicproblemas schools`).
  3. Lea las respuestas y fuentes proporcionadas.
  4. El documento DOCX con toda la información se guarda en `--out-dir`.

Autor y actualización: Moris Polanco, 26 ag 2024

Cómo citar esta aplicación (formato APA):
  Polanco, M. (2024). Diccionario de Problemas Económicos [Aplicación web].
  https://dicproblemas.streamlit.app

Nota: Esta aplicación utiliza inteligencia artificial para generar respuestas
basadas en información disponible en línea. Siempre verifique la información con
fuentes académicas para un análisis más profundo.";

/// Search and generation clients for one process.
///
/// Configuration via environment variables:
/// - `SERPER_API_KEY`, `TOGETHER_API_KEY`: required
/// - `SERPER_URL`, `TOGETHER_URL`, `TOGETHER_MODEL`, `TOGETHER_MAX_TOKENS`,
///   `TOGETHER_REPETITION_PENALTY`, `DICPROBLEMAS_TIMEOUT_SECS`: optional
pub struct App {
    serper: SerperClient,
    together: TogetherClient,
}

/// What a successful `ask` produced. A failed DOCX write does not discard
/// the answers.
#[derive(Debug)]
pub struct AskOutcome {
    pub bundle: ResponseBundle,
    /// `None` with `--no-docx`.
    pub document: Option<Result<PathBuf, DocxError>>,
}

impl App {
    pub fn from_env() -> Result<Self, AppError> {
        let serper = SerperConfig::from_env()?;
        let together = TogetherConfig::from_env()?;
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config::request_timeout()?)
            .build()?;
        Ok(Self::new(http, serper, together))
    }

    pub fn new(http: Client, serper: SerperConfig, together: TogetherConfig) -> Self {
        Self {
            serper: SerperClient::new(http.clone(), serper),
            together: TogetherClient::new(http, together),
        }
    }

    /// Validate, answer every school, then save the document unless
    /// `--no-docx` was given. Invalid input never reaches the network.
    pub async fn ask(
        &self,
        args: &AskArgs,
        progress: &impl ProgressNotifier,
    ) -> Result<AskOutcome, AppError> {
        let request = args.to_request()?;

        info!(
            question = %request.question(),
            schools = request.schools().len(),
            "command:ask"
        );

        let bundle = answer_all(&self.serper, &self.together, &request, progress).await?;

        let document = (!args.no_docx).then(|| {
            let doc = Document::from(&bundle);
            write_docx(&doc, &args.out_dir, &document_file_name(&bundle.question))
        });

        Ok(AskOutcome { bundle, document })
    }
}

pub async fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Questions => {
            for (i, question) in questions().iter().enumerate() {
                println!("{:>3}. {question}", i + 1);
            }
            ExitCode::SUCCESS
        }
        Command::Schools => {
            for school in School::all() {
                println!("{school}");
            }
            ExitCode::SUCCESS
        }
        Command::About => {
            println!("{ABOUT}");
            ExitCode::SUCCESS
        }
        Command::Ask(args) => match ask(&args).await {
            Ok(outcome) => {
                println!("{}", format_bundle(&outcome.bundle));
                match outcome.document {
                    Some(Ok(path)) => {
                        println!("Documento guardado en {}", path.display());
                        ExitCode::SUCCESS
                    }
                    Some(Err(e)) => report(AppError::from(e)),
                    None => ExitCode::SUCCESS,
                }
            }
            Err(e) => report(e),
        },
    }
}

fn report(e: AppError) -> ExitCode {
    if !matches!(e, AppError::Validation(_)) {
        error!(error = %e, "ask failed");
    }
    eprintln!("{}", e.user_message());
    e.exit_code()
}

async fn ask(args: &AskArgs) -> Result<AskOutcome, AppError> {
    let app = App::from_env()?;
    let spinner = Spinner::new();
    let outcome = app.ask(args, &spinner).await;
    spinner.finish();
    outcome
}
