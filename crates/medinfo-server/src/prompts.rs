//! Prompt templates submitted to the completion API.

/// System persona for the medical-text simplifier.
pub const SIMPLIFIER_PERSONA: &str =
    "Tu es un assistant médical qui vulgarise les textes médicaux.";

/// Instruction asking for a lay explanation of a medical text.
pub fn simplification(text: &str) -> String {
    format!(
        "Explique simplement ce texte médical pour qu'un patient non spécialiste puisse le comprendre :\n{text}"
    )
}

/// Instruction asking for a gentle preventive-health recommendation.
pub fn health_advice(question: &str) -> String {
    format!(
        "Donne un conseil de prévention santé clair et bienveillant pour la question suivante : {question}. \
         Utilise un ton simple et empathique, accessible à tous."
    )
}

#[cfg(test)]
mod tests {
    use super::{health_advice, simplification};

    #[test]
    fn simplification_embeds_text_on_its_own_line() {
        let prompt = simplification("Le patient présente une dyspnée.");
        assert!(prompt.ends_with(":\nLe patient présente une dyspnée."));
    }

    #[test]
    fn health_advice_embeds_question_verbatim() {
        let prompt = health_advice("Comment mieux dormir ?");
        assert!(prompt.contains("la question suivante : Comment mieux dormir ?."));
        assert!(prompt.ends_with("accessible à tous."));
    }
}
