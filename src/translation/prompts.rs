/*!
 * Prompt templates for XLIFF fragment translation and context analysis.
 *
 * Translation prompts ask for a flat JSON object keyed by input index so the
 * reply can be mapped back onto the chunk without any positional guessing.
 */

use crate::language_utils::display_language;

/// Separator placed between the guidance block and the instructions
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Separator placed between samples in the analysis prompt
pub const SAMPLE_SEPARATOR: &str = "\n---\n";

/// Instructions shared by both translation prompt variants.
const TRANSLATION_RULES: &str = r#"REQUIREMENTS:
- Translate ALL {count} texts, keeping each one at its index
- Preserve every markup tag exactly as written: <g id="...">...</g>, <x id="..."/>, <bx/>, <ex/>, <br/>, <b>, <i>, <em>, <strong>
- Never translate, reorder, add or drop tags, tag names or attribute values
- Keep placeholders, numbers and URLs unchanged
- An empty text stays an empty string

RESPONSE FORMAT:
Return ONLY a JSON object mapping each index (as a string) to its translation, for example:
{"0": "first translation", "1": "second translation"}
Do not wrap the JSON in markdown and do not add any explanation before or after it."#;

/// Render the numbered text list appended at the end of a prompt
fn enumerate_texts(texts: &[String]) -> String {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| format!("{}: {}", index, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the instruction sent to the model for one chunk
///
/// With guidance, the block is placed first verbatim so the model reads the
/// domain and terminology rules before the texts.
pub fn build_translation_prompt(
    texts: &[String],
    source_lang: &str,
    target_lang: &str,
    context: Option<&str>,
) -> String {
    let source = display_language(source_lang);
    let target = display_language(target_lang);
    let rules = TRANSLATION_RULES.replace("{count}", &texts.len().to_string());

    let mut prompt = String::new();
    match context {
        Some(guidance) => {
            prompt.push_str(guidance);
            prompt.push_str(CONTEXT_SEPARATOR);
            prompt.push_str(&format!(
                "Using the translation context above, translate the following {} texts from {} to {}. \
                 Apply its terminology, tone and audience guidance consistently.\n\n",
                texts.len(),
                source,
                target
            ));
        }
        None => {
            prompt.push_str(&format!(
                "You are a professional translator of e-learning and XLIFF content. \
                 Translate the following {} texts from {} to {}.\n\n",
                texts.len(),
                source,
                target
            ));
        }
    }

    prompt.push_str(&rules);
    prompt.push_str("\n\nTEXTS:\n");
    prompt.push_str(&enumerate_texts(texts));
    prompt
}

/// Build the analysis prompt used to derive a translation context block
///
/// Only the first `max_samples` samples are included.
pub fn build_context_prompt(
    samples: &[String],
    max_samples: usize,
    user_context: Option<&str>,
    target_lang: &str,
    content_type: &str,
) -> String {
    let joined = samples
        .iter()
        .take(max_samples)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(SAMPLE_SEPARATOR);

    let user_section = match user_context {
        Some(requirements) => format!(
            "\nUSER REQUIREMENTS (must be reflected in the block):\n{}\n",
            requirements
        ),
        None => String::new(),
    };

    let user_field = if user_context.is_some() {
        "**USER REQUIREMENTS**: [the user's requirements, condensed]\n"
    } else {
        ""
    };

    format!(
        "Analyze these sample texts extracted from an XLIFF file and write translation guidance \
         for translating them into {target}.\n\
         Content type hint: {content_type}\n{user_section}\n\
         SAMPLE TEXTS:\n{joined}\n\n\
         Respond with exactly this structure and nothing else:\n\
         **CONTENT TYPE**: [kind of content]\n\
         **DOMAIN**: [subject area]\n\
         **TERMINOLOGY APPROACH**: [how to handle specialised terms]\n\
         **TONE**: [register and voice]\n\
         **AUDIENCE**: [who reads the translation]\n\
         **SPECIAL CONSIDERATIONS**: [UI strings, tags, formatting or cultural points]\n\
         {user_field}\
         **QUALITY STANDARDS**: [what a good translation must achieve]\n\n\
         Keep the whole response under 800 characters.",
        target = display_language(target_lang),
        content_type = content_type,
        user_section = user_section,
        joined = joined,
        user_field = user_field,
    )
}
