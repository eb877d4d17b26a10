use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::pipeline::{AskRequest, QuestionInput, ValidationError};

#[derive(Parser, Debug)]
#[command(
    name = "dicproblemas",
    version,
    about = "Diccionario de Problemas Económicos: answers an economic question according to several schools of thought"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the predefined economic questions, numbered for `ask --pick`
    Questions,
    /// List the schools of economic thought
    Schools,
    /// How to use and how to cite this application
    About,
    /// Answer a question according to one to five schools of thought
    Ask(AskArgs),
}

#[derive(Args, Debug, Default)]
pub struct AskArgs {
    /// Your own economic question
    #[arg(short, long)]
    pub question: Option<String>,
    /// Number of a predefined question (see `dicproblemas questions`)
    #[arg(short, long, conflicts_with = "question")]
    pub pick: Option<usize>,
    /// School of thought; repeat for up to five schools
    #[arg(short, long = "school", value_name = "SCHOOL")]
    pub schools: Vec<String>,
    /// Directory where the DOCX file is written
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Print the answers without writing a DOCX file
    #[arg(long)]
    pub no_docx: bool,
}

impl AskArgs {
    pub fn question_input(&self) -> QuestionInput {
        match self.pick {
            Some(position) => QuestionInput::Catalog(position),
            None => QuestionInput::Custom(self.question.clone().unwrap_or_default()),
        }
    }

    pub fn to_request(&self) -> Result<AskRequest, ValidationError> {
        AskRequest::parse(self.question_input(), &self.schools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_parses_repeated_schools() {
        let cli = Cli::try_parse_from([
            "dicproblemas",
            "ask",
            "--question",
            "¿Qué es la curva de Laffer?",
            "-s",
            "Keynesianismo",
            "--school",
            "Monetarismo",
            "--no-docx",
        ])
        .unwrap();

        let Command::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.schools, vec!["Keynesianismo", "Monetarismo"]);
        assert!(args.no_docx);
        assert_eq!(args.out_dir, PathBuf::from("."));
        let request = args.to_request().unwrap();
        assert_eq!(request.question(), "¿Qué es la curva de Laffer?");
    }

    #[test]
    fn pick_and_question_conflict() {
        let result = Cli::try_parse_from([
            "dicproblemas",
            "ask",
            "--question",
            "q",
            "--pick",
            "3",
            "-s",
            "Marxismo",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_question_is_a_validation_warning() {
        let args = AskArgs {
            schools: vec!["Marxismo".into()],
            ..Default::default()
        };
        assert_eq!(args.to_request().unwrap_err(), ValidationError::MissingQuestion);
    }

    #[test]
    fn pick_selects_catalog_question() {
        let args = AskArgs {
            pick: Some(2),
            schools: vec!["Marxismo".into()],
            ..Default::default()
        };
        assert_eq!(
            args.to_request().unwrap().question(),
            crate::catalog::questions()[1]
        );
    }
}
