use crate::catalog::School;

/// Generation halts here so the model cannot invent a follow-up problem block.
pub const STOP_SEQUENCE: &str = "Problema:";

/// Deterministic decoding; `top_p` and `top_k` are inert at temperature 0.
pub const TEMPERATURE: f64 = 0.0;
pub const TOP_P: f64 = 0.7;
pub const TOP_K: u32 = 50;

/// Dictionary-style instruction that answers `question` in the voice of
/// `school`, grounded on the search `context`.
pub fn build_prompt(question: &str, school: School, context: &str) -> String {
    format!(
        "Contexto: {context}\n\n\
         Problema: {question}\n\
         Escuela: {school}\n\n\
         Proporciona una respuesta al problema económico '{question}' según la interpretación del {school}. \
         La respuesta debe ser concisa pero informativa, similar a una entrada de diccionario. \
         Si es posible, incluye una referencia a una obra o figura específica de {school} que trate este concepto.\n\n\
         Respuesta:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_context_question_and_school() {
        let school = School::parse("Monetarismo").unwrap();
        let prompt = build_prompt("¿Qué es la inflación por demanda?", school, "snippet uno\nsnippet dos");

        assert!(prompt.starts_with("Contexto: snippet uno\nsnippet dos\n\nProblema: ¿Qué es la inflación por demanda?\nEscuela: Monetarismo\n\n"));
        assert!(prompt.contains("'¿Qué es la inflación por demanda?' según la interpretación del Monetarismo. La respuesta"));
        assert!(prompt.contains("figura específica de Monetarismo que trate"));
        assert!(prompt.ends_with("\n\nRespuesta:"));
    }

    #[test]
    fn empty_context_keeps_template_shape() {
        let school = School::parse("Fisiocracia").unwrap();
        let prompt = build_prompt("q", school, "");
        assert!(prompt.starts_with("Contexto: \n\nProblema: q\n"));
    }
}
