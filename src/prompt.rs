//! Prompt templates for each generation operation.
//! Pure string building: nothing here fails or truncates input.

use crate::request::VariationKind;

pub const CALL_TO_ACTION: &str = "Follow for more tips";

/// Section labels every script carries, in order
pub const SECTION_LABELS: [&str; 5] =
[   "🎬 HOOK:"
  , "📝 PROBLEM:"
  , "💡 SOLUTION:"
  , "🔥 PROOF/BENEFIT:"
  , "✅ CALL TO ACTION:"
];

const GENERIC_VARIATION: &str = "Create a variation of this script";

/// Instruction text for a variation kind
pub fn variation_instruction(kind: Option<VariationKind>) -> &'static str
{   match kind
    {   Some(VariationKind::Shorter) => {
          "Create a shorter, more concise version (30-40 seconds when \
           spoken). Keep the core message but make it punchier and more \
           direct."
        }
      , Some(VariationKind::Engaging) => {
          "Make it more engaging and entertaining. Add more personality, \
           excitement, and social media flair. Use more emojis and \
           interactive elements."
        }
      , Some(VariationKind::Social) => {
          "Adapt it specifically for social media posts (Instagram, TikTok, \
           etc.). Make it more casual, use trending language, and include \
           relevant hashtags."
        }
      , None => GENERIC_VARIATION
    }
}

/// Prompt for a fresh 60-second script
pub fn build_script_prompt(request: &crate::request::GenerationRequest)
  -> String
{   format!(
"You are an expert scriptwriter for short-form video content. Create a \
compelling 60-second video script for a beginner audience.

REQUIREMENTS:
- Topic: {topic}
- Core Message/Hook: {hook}
- Style: {style}
- Call to Action: \"{cta}\"
- Target Length: 60 seconds when spoken
- Format: Include clear hook, problem, solution, and call to action
- Do NOT include a title

STRUCTURE:
{l0} [Attention-grabbing opening]
{l1} [What challenge does the audience face?]
{l2} [Your practical advice/steps]
{l3} [Why this works/social proof]
{l4} {cta}

Make it engaging, actionable, and perfect for social media video content. \
Use emojis strategically to enhance readability.",
      topic = request.effective_topic(),
      hook = request.hook,
      style = request.style,
      cta = CALL_TO_ACTION,
      l0 = SECTION_LABELS[0],
      l1 = SECTION_LABELS[1],
      l2 = SECTION_LABELS[2],
      l3 = SECTION_LABELS[3],
      l4 = SECTION_LABELS[4],
    )
}

/// Prompt rewriting an existing script
pub fn build_variation_prompt(
  original_script: &str
, variation_type: &str
) -> String
{   let instruction
      = variation_instruction(VariationKind::from_name(variation_type));

    format!(
"Take this video script and {instruction}:

ORIGINAL SCRIPT:
{original_script}

INSTRUCTIONS:
- Maintain the core message and value
- {instruction}
- Keep it authentic and valuable to the script's intended audience
- Ensure it flows well for video content

Generate the new version now:"
    )
}

/// Prompt asking for `limit` topic ideas, one per line
pub fn build_suggestion_prompt(query: &str, limit: usize) -> String
{   format!(
"Based on the user's input: \"{query}\", generate exactly {limit} specific, \
actionable video topic suggestions that would make great 60-second videos.

Focus on:
- Practical how-to topics
- Problem-solving content
- Tips and tricks
- Beginner-friendly subjects
- Trending or popular topics in that area

Return only the suggestions, one per line, without numbers, bullets or \
labels. Make them specific and engaging."
    )
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::request::GenerationRequest;

    fn request(topic: &str, refined: &str) -> GenerationRequest
    {   GenerationRequest
        {   topic: topic.to_string()
          , refined_topic: refined.to_string()
          , hook: "Save an hour every day".to_string()
          , style: "Humorous".to_string()
          , ..GenerationRequest::default()
        }
    }

    #[test]
    fn script_prompt_prefers_refined_topic()
    {   let prompt = build_script_prompt(&request("Email", "Inbox zero in 5 minutes"));
        assert!(prompt.contains("- Topic: Inbox zero in 5 minutes\n"));
        assert!(!prompt.contains("- Topic: Email"));
    }

    #[test]
    fn script_prompt_falls_back_to_topic()
    {   let prompt = build_script_prompt(&request("Email", ""));
        assert!(prompt.contains("- Topic: Email\n"));
    }

    #[test]
    fn script_prompt_has_sections_and_constraints()
    {   let prompt = build_script_prompt(&request("Email", ""));
        for label in SECTION_LABELS
        {   assert!(prompt.contains(label), "missing {}", label);
        }
        assert!(prompt.contains("- Core Message/Hook: Save an hour every day"));
        assert!(prompt.contains("- Style: Humorous"));
        assert!(prompt.contains("Do NOT include a title"));
        assert!(prompt.contains("60 seconds when spoken"));
        assert!(prompt.contains("✅ CALL TO ACTION: Follow for more tips"));
    }

    #[test]
    fn variation_prompt_embeds_script_and_instruction()
    {   let script = "line one\nline two";
        let prompt = build_variation_prompt(script, "social");
        assert!(prompt.contains("ORIGINAL SCRIPT:\nline one\nline two\n"));
        assert!(prompt.contains("hashtags"));
        assert!(prompt.contains("Maintain the core message and value"));
        assert!(!prompt.contains("coffee"));
    }

    #[test]
    fn unknown_variation_uses_generic_instruction()
    {   let prompt = build_variation_prompt("x", "longer");
        assert!(prompt.starts_with(
          "Take this video script and Create a variation of this script:"
        ));
    }

    #[test]
    fn suggestion_prompt_embeds_query_and_count()
    {   let prompt = build_suggestion_prompt("sourdough \"starter\"", 4);
        assert!(prompt.contains("input: \"sourdough \"starter\"\""));
        assert!(prompt.contains("generate exactly 4 specific"));
        assert!(prompt.contains("one per line"));
    }
}
