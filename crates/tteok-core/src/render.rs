use handlebars::Handlebars;

use crate::card::CardData;

/// Template substitution, injected so the engine can be swapped
/// without touching the flattener or resolver.
pub trait CardRenderer: Send + Sync {
    /// Fill `template` with `card` as the variable context.
    fn render(&self, card: &CardData, template: &str) -> Result<String, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
}

/// Handlebars-backed renderer.
///
/// Strict mode is on: a template referencing a field the card data
/// does not carry is a hard error, since the flattener guarantees key
/// completeness. Output is Markdown, so HTML escaping is disabled.
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("inc", Box::new(inc_helper));
        registry.register_helper("bold_term", Box::new(bold_term_helper));
        Self { registry }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer for HandlebarsRenderer {
    fn render(&self, card: &CardData, template: &str) -> Result<String, RenderError> {
        Ok(self.registry.render_template(template, card)?)
    }
}

/// `{{inc @index}}` turns zero-based loop indices into the numbering
/// the card shows.
fn inc_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let n = h.param(0).and_then(|v| v.value().as_u64()).unwrap_or(0);
    out.write(&(n + 1).to_string())?;
    Ok(())
}

/// `{{bold_term text term}}` bolds every occurrence of the headword
/// inside example text.
fn bold_term_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let text = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    let term = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");
    if term.is_empty() {
        out.write(text)?;
    } else {
        out.write(&text.replace(term, &format!("**{term}**")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardDefinition, HanjaComponent};

    fn sample_card() -> CardData {
        CardData {
            word: "사랑".to_string(),
            part_of_speech: "명사".to_string(),
            hanja: String::new(),
            hanja_components: Vec::new(),
            pronunciations: vec!["사랑".to_string()],
            definitions: vec![CardDefinition {
                definition: Some("깊은 정을 느끼는 마음".to_string()),
                translated_word: Some("love".to_string()),
                translated_definition: Some("a deep feeling of affection".to_string()),
                example_sentences: vec!["사랑을 느끼다.".to_string()],
                ..CardDefinition::default()
            }],
        }
    }

    #[test]
    fn renders_numbered_definitions() {
        let renderer = HandlebarsRenderer::new();
        let template = "{{#each definitions}}{{inc @index}}. {{definition}}\n{{/each}}";

        let out = renderer.render(&sample_card(), template).unwrap();
        assert_eq!(out, "1. 깊은 정을 느끼는 마음\n");
    }

    #[test]
    fn bolds_the_headword_in_examples() {
        let renderer = HandlebarsRenderer::new();
        let template =
            "{{#each definitions}}{{#each example_sentences}}{{bold_term this @root.word}}{{/each}}{{/each}}";

        let out = renderer.render(&sample_card(), template).unwrap();
        assert_eq!(out, "**사랑**을 느끼다.");
    }

    #[test]
    fn does_not_html_escape_markdown() {
        let renderer = HandlebarsRenderer::new();
        let mut card = sample_card();
        card.definitions[0].definition = Some("a < b & c".to_string());

        let out = renderer
            .render(&card, "{{#each definitions}}{{definition}}{{/each}}")
            .unwrap();
        assert_eq!(out, "a < b & c");
    }

    #[test]
    fn unknown_field_is_a_hard_error() {
        let renderer = HandlebarsRenderer::new();
        let err = renderer.render(&sample_card(), "{{no_such_field}}");
        assert!(err.is_err());
    }

    #[test]
    fn empty_card_renders_without_error() {
        let renderer = HandlebarsRenderer::new();
        let card = CardData {
            word: "사랑".to_string(),
            part_of_speech: String::new(),
            hanja: String::new(),
            hanja_components: Vec::new(),
            pronunciations: Vec::new(),
            definitions: Vec::new(),
        };
        let template = "# {{word}}\n{{#each definitions}}{{definition}}{{/each}}";

        let out = renderer.render(&card, template).unwrap();
        assert_eq!(out, "# 사랑\n");
    }

    #[test]
    fn hanja_components_are_reachable() {
        let renderer = HandlebarsRenderer::new();
        let mut card = sample_card();
        card.hanja = "電話".to_string();
        card.hanja_components = vec![HanjaComponent {
            character: "電".to_string(),
            readings: vec!["번개 전".to_string()],
        }];
        let template =
            "{{hanja}}: {{#each hanja_components}}{{character}} ({{#each readings}}{{this}}{{/each}}){{/each}}";

        let out = renderer.render(&card, template).unwrap();
        assert_eq!(out, "電話: 電 (번개 전)");
    }
}
