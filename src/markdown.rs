use crate::pipeline::ResponseBundle;

/// A free-typed question may span lines; a heading must not.
fn single_line(question: &str) -> String {
    question.replace(['\r', '\n'], " ")
}

/// Terminal rendering of a bundle: one bold-labelled answer per school, then
/// the collected sources.
pub(crate) fn format_bundle(bundle: &ResponseBundle) -> String {
    let mut output = format!(
        "## Respuestas para el problema: {}\n\n",
        single_line(&bundle.question)
    );

    for (school, answer) in &bundle.answers {
        output.push_str(&format!("**{school}:** {answer}\n\n"));
    }

    if !bundle.sources.is_empty() {
        output.push_str("---\n**Fuentes:**\n");
        for url in &bundle.sources {
            output.push_str(&format!("- <{url}>\n"));
        }
    }

    output
}
