//! LLM prompt engineering for record extraction

/// Builds the extraction prompt around one source document.
///
/// The prompt is a fixed French instruction block (the corpus is a French
/// martyrology), the verbatim source text, and a literal example of the
/// expected JSON array shape. Pure string interpolation, no side effects.
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for one document's text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Extraction rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The text to analyze
        prompt.push_str("Texte source :\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Tu es un système d'extraction d'informations.
Ta tâche : EXTRAIRE UNIQUEMENT ce qui est explicitement écrit dans le texte.
Règles :
- Une seule entrée JSON par saint/martyr.
- Chaque entrée doit contenir exactement un "lieu", une "epoque", un "nom" et un "titre" (ex: évêque, abbé).
- Si le lieu ou l'époque n'est pas mentionné, mets "".
- Si aucun titre n'est mentionné, mets "aucun".
- IMPORTANT : ne renvoie que le titre principal, concis (ex : "évêque" au lieu de "évêque de cette ville").
- Ne rien inventer, ne rien inférer.
- Pas de texte hors du JSON."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Renvoie UNIQUEMENT un JSON sous forme de liste :
[
  {
    "lieu": "",
    "epoque": "",
    "nom": "",
    "titre": ""
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text_verbatim() {
        let builder = PromptBuilder::new("Saint Martin, évêque de Tours, au IVe siècle.");
        let prompt = builder.build();
        assert!(prompt.contains("Saint Martin, évêque de Tours, au IVe siècle."));
    }

    #[test]
    fn test_prompt_includes_rules() {
        let prompt = PromptBuilder::new("texte").build();
        assert!(prompt.contains("Une seule entrée JSON par saint/martyr."));
        assert!(prompt.contains(r#"mets "aucun""#));
        assert!(prompt.contains("Ne rien inventer"));
        assert!(prompt.contains("Pas de texte hors du JSON."));
    }

    #[test]
    fn test_prompt_includes_example_schema() {
        let prompt = PromptBuilder::new("texte").build();
        assert!(prompt.contains(r#""lieu": """#));
        assert!(prompt.contains(r#""epoque": """#));
        assert!(prompt.contains(r#""nom": """#));
        assert!(prompt.contains(r#""titre": """#));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptBuilder::new("même texte").build();
        let b = PromptBuilder::new("même texte").build();
        assert_eq!(a, b);
    }
}
