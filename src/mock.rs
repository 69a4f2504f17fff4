//! Deterministic stand-in content used whenever no live completion
//! is available. No I/O, no randomness.

use crate::prompt::SECTION_LABELS;
use crate::request::VariationKind;

/// Style used when the requested one has no entry
pub const DEFAULT_STYLE: &str = "Casual";

/// Opening line and tone for a script style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleVoice
{   pub hook: &'static str
  , pub tone: &'static str
}

const DEFAULT_VOICE: StyleVoice = StyleVoice
{   hook: "Hey friends! Want to know the simple secret nobody told \
           you about getting started?"
  , tone: "friendly and approachable"
};

const STYLE_VOICES: [(&str, StyleVoice); 4] =
[   ("Authoritative", StyleVoice
    {   hook: "Think you need expensive gear and years of practice to get \
               real results? Think again!"
      , tone: "confident and expert"
    })
  , ("Humorous", StyleVoice
    {   hook: "I used to fail at this so badly my friends made it a \
               drinking game... until I figured this out!"
      , tone: "fun and relatable"
    })
  , (DEFAULT_STYLE, DEFAULT_VOICE)
  , ("Formal", StyleVoice
    {   hook: "Today I will demonstrate the three essential steps to \
               professional-quality results."
      , tone: "structured and professional"
    })
];

pub const SHORTER_VARIATION: &str = "\
⚡ QUICK TIP: You don't need the expensive version!

Get pro-level results with 3 simple moves:
• Start with the basics you already own
• Practice 10 minutes a day
• Fix one mistake at a time

Small steps beat big budgets.

Follow for more tips! ⚡";

pub const ENGAGING_VARIATION: &str = "\
🚨 STOP scrolling: this will change how you start!

I spent YEARS thinking I needed fancy gear and perfect timing... I was SO wrong!

Here's what the pros don't say out loud:

✨ The basics you own beat the gadget you don't
✨ 10 focused minutes > 2 distracted hours
✨ Fixing one mistake at a time = real progress

My friends think I'm some kind of wizard now! 🧙

Drop a 🔥 if you're ready to level up!

Follow for more tips!";

pub const SOCIAL_VARIATION: &str = "\
POV: You just got better results than the experts with zero extra budget 😎

The secret? Three game-changing habits:
→ Master the basics
→ Practice a little every day
→ Fix one mistake at a time

Who else is tired of being told you need to spend more?

#LifeHacks #LearnOnTikTok #BeginnerTips #DailyHabits #LevelUp";

/// Voice for a style, falling back to `DEFAULT_STYLE`
pub fn style_voice(style: &str) -> StyleVoice
{   STYLE_VOICES.iter()
      .find(|(key, _)| *key == style)
      .map(|(_, voice)| *voice)
      .unwrap_or(DEFAULT_VOICE)
}

/// Five-section fallback script for a style
pub fn mock_script(style: &str) -> String
{   let voice = style_voice(style);

    format!(
"{l0} \"{hook}\"

{l1} Most beginners believe great results require expensive equipment \
and years of training.

{l2} With three simple habits, anyone can get there:

1️⃣ Start with the basics you already have - they matter more than gear
2️⃣ Practice ten focused minutes a day - consistency beats intensity
3️⃣ Fix one mistake at a time - small corrections add up fast

{l3} This is the exact routine I've followed for two years, and people \
constantly ask who trained me!

{l4} {cta} that'll save you time and money!

⏰ Total investment: ten minutes a day. Total game-changer: priceless.",
      l0 = SECTION_LABELS[0],
      l1 = SECTION_LABELS[1],
      l2 = SECTION_LABELS[2],
      l3 = SECTION_LABELS[3],
      l4 = SECTION_LABELS[4],
      hook = voice.hook,
      cta = crate::prompt::CALL_TO_ACTION,
    )
}

/// Fixed variation text; unknown kinds get the shorter one
pub fn mock_variation(variation_type: &str) -> &'static str
{   match VariationKind::from_name(variation_type)
    {   Some(VariationKind::Engaging) => ENGAGING_VARIATION
      , Some(VariationKind::Social) => SOCIAL_VARIATION
      , Some(VariationKind::Shorter) | None => SHORTER_VARIATION
    }
}

/// Catalog suggestions for the query
pub fn mock_suggestions(query: &str, limit: usize) -> Vec<String>
{   crate::catalog::suggestions_for(query, limit)
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn unknown_style_matches_default_style()
    {   let default = mock_script(DEFAULT_STYLE);
        for style in ["", "casual", "Sarcastic", "Formal ", "🤖"]
        {   assert_eq!(mock_script(style), default, "style {:?}", style);
        }
    }

    #[test]
    fn default_style_is_in_the_table()
    {   assert!(STYLE_VOICES.iter().any(|(key, voice)| {
          *key == DEFAULT_STYLE && *voice == DEFAULT_VOICE
        }));
        assert_eq!(style_voice("Unlisted"), style_voice(DEFAULT_STYLE));
    }

    #[test]
    fn known_styles_differ()
    {   assert_ne!(mock_script("Formal"), mock_script("Humorous"));
        assert!(mock_script("Formal").contains(style_voice("Formal").hook));
    }

    #[test]
    fn script_has_all_sections_in_order()
    {   let script = mock_script("Authoritative");
        let mut last = 0;
        for label in SECTION_LABELS
        {   let at = script.find(label).expect(label);
            assert!(at >= last);
            last = at;
        }
    }

    #[test]
    fn unknown_variation_is_shorter_text()
    {   for kind in ["", "longer", "Shorter", "tweet"]
        {   assert_eq!(mock_variation(kind), SHORTER_VARIATION);
        }
        assert_eq!(mock_variation("engaging"), ENGAGING_VARIATION);
        assert_eq!(mock_variation("social"), SOCIAL_VARIATION);
    }

    #[test]
    fn near_miss_variation_names_get_shorter_text()
    {   for kind in ["Engaging", " social", "SHORTER", "Social", "engaging "]
        {   assert_eq!(mock_variation(kind), SHORTER_VARIATION, "kind {:?}", kind);
        }
    }

    #[test]
    fn fallback_is_idempotent()
    {   assert_eq!(mock_script("Humorous"), mock_script("Humorous"));
        assert_eq!(mock_variation("social"), mock_variation("social"));
        assert_eq!(
          mock_suggestions("fitness goals", 4),
          mock_suggestions("fitness goals", 4)
        );
    }

    #[test]
    fn no_coffee_leftovers()
    {   let all = [
          mock_script("Casual")
        , SHORTER_VARIATION.to_string()
        , ENGAGING_VARIATION.to_string()
        , SOCIAL_VARIATION.to_string()
        ];
        for text in all
        {   assert!(!text.to_lowercase().contains("coffee"));
        }
    }
}
