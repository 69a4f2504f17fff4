//! Static topic suggestions and the keyword matcher over them

/// One suggestion category with its trigger keywords
pub struct Category
{   pub name: &'static str
  , pub keywords: &'static [&'static str]
  , pub suggestions: [&'static str; 6]
}

/// Categories in matching order
pub static CATEGORIES: [Category; 6] =
[   Category
    {   name: "cooking"
      , keywords: &[
          "cook", "recipe", "food", "kitchen", "meal", "eat", "chef", "bake"
        ]
      , suggestions: [
          "5-minute breakfast recipes for busy mornings"
        , "How to meal prep like a pro"
        , "Kitchen hacks that save time and money"
        , "Cooking mistakes everyone makes"
        , "Essential spices every kitchen needs"
        , "One-pot meals for easy cleanup"
        ]
    }
  , Category
    {   name: "fitness"
      , keywords: &[
          "workout", "exercise", "fitness", "health", "gym", "run", "yoga",
          "diet"
        ]
      , suggestions: [
          "10-minute morning workout routine"
        , "How to stay motivated to exercise"
        , "Bodyweight exercises for small spaces"
        , "Stretches to do at your desk"
        , "Building healthy habits that stick"
        , "Pre and post-workout nutrition tips"
        ]
    }
  , Category
    {   name: "productivity"
      , keywords: &[
          "productive", "organize", "time", "work", "focus", "habit",
          "efficient"
        ]
      , suggestions: [
          "Time management techniques that actually work"
        , "How to organize your workspace for focus"
        , "Digital detox strategies for better focus"
        , "Morning routines of successful people"
        , "Beating procrastination once and for all"
        , "Tools to automate your daily tasks"
        ]
    }
  , Category
    {   name: "technology"
      , keywords: &[
          "tech", "computer", "phone", "app", "digital", "online", "software"
        ]
      , suggestions: [
          "Essential phone apps everyone should have"
        , "How to protect your privacy online"
        , "Tech shortcuts to save time daily"
        , "Setting up the perfect home office"
        , "Troubleshooting common tech problems"
        , "Future tech trends to watch"
        ]
    }
  , Category
    {   name: "business"
      , keywords: &[
          "business", "money", "career", "job", "entrepreneur", "startup",
          "finance"
        ]
      , suggestions: [
          "Starting a side hustle with no money"
        , "Networking tips for introverts"
        , "How to negotiate your salary"
        , "Building a personal brand online"
        , "Time management for entrepreneurs"
        , "Common business mistakes to avoid"
        ]
    }
  , Category
    {   name: "lifestyle"
      , keywords: &[
          "life", "home", "style", "personal", "self", "daily", "routine"
        ]
      , suggestions: [
          "Minimalism tips for beginners"
        , "How to develop a reading habit"
        , "Creating a budget that works"
        , "Self-care routines for busy people"
        , "Organizing your home in 30 minutes"
        , "Building confidence in social situations"
        ]
    }
];

/// Used when no category matches
pub static GENERAL_SUGGESTIONS: [&str; 6] =
[   "How to master any skill in 30 days"
  , "Life hacks that actually work"
  , "Common mistakes beginners make"
  , "Essential tools every beginner needs"
  , "Quick tips for immediate results"
  , "Secrets professionals don't tell you"
];

/// Find the category for a query.
/// A category name anywhere in the query beats any keyword hit.
pub fn match_category(query: &str) -> Option<&'static Category>
{   let query = query.to_lowercase();

    CATEGORIES.iter()
      .find(|c| query.contains(c.name))
      .or_else(|| {
        CATEGORIES.iter().find(|c| {
          c.keywords.iter().any(|k| query.contains(k))
        })
      })
}

/// Up to `limit` suggestions for the query, never padded
pub fn suggestions_for(query: &str, limit: usize) -> Vec<String>
{   let list: &[&str] = match match_category(query)
    {   Some(category) => &category.suggestions
      , None => &GENERAL_SUGGESTIONS
    };

    list.iter()
      .take(limit)
      .map(|s| s.to_string())
      .collect()
}

#[cfg(test)]
mod tests
{   use super::*;

    fn category(name: &str) -> &'static Category
    {   CATEGORIES.iter()
          .find(|c| c.name == name)
          .unwrap()
    }

    #[test]
    fn cook_dinner_returns_cooking_list_in_order()
    {   let got = suggestions_for("I want to cook dinner", 6);
        assert_eq!(got, category("cooking").suggestions.to_vec());
    }

    #[test]
    fn category_name_returns_prefix_of_that_list()
    {   for c in CATEGORIES.iter()
        {   for limit in 1..=8
            {   let query = format!("Ideas about {} please", c.name.to_uppercase());
                let got = suggestions_for(&query, limit);
                assert_eq!(got.len(), limit.min(6));
                assert_eq!(got[..], c.suggestions[..got.len()]);
            }
        }
    }

    #[test]
    fn category_name_beats_earlier_keyword()
    {   // "eat" is a cooking keyword, but "business" is named outright
        let got = suggestions_for("great business ideas", 3);
        assert_eq!(got, category("business").suggestions[..3].to_vec());
    }

    #[test]
    fn keyword_order_follows_category_order()
    {   // "run" hits fitness before "home" hits lifestyle
        let got = suggestions_for("run at home", 6);
        assert_eq!(got, category("fitness").suggestions.to_vec());
    }

    #[test]
    fn unmatched_query_returns_general_prefix()
    {   for limit in [1, 4, 6, 20]
        {   let got = suggestions_for("knitting", limit);
            assert_eq!(got.len(), limit.min(6));
            assert_eq!(got[..], GENERAL_SUGGESTIONS[..got.len()]);
        }
    }

    #[test]
    fn zero_limit_is_empty()
    {   assert!(suggestions_for("cooking", 0).is_empty());
    }
}
