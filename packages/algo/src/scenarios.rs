//! Static per-context lookup tables: scenario prompts and new-skill
//! suggestions. No algorithmic content here; unknown contexts fall back to
//! the default context's first entry.

/// Context used when the requested one is unrecognized.
pub const DEFAULT_CONTEXT: &str = "Airport";

const SCENARIOS: &[(&str, &[&str])] = &[
    (
        "Airport",
        &[
            "You are at the check-in counter. Your bag is overweight. Ask what you can do.",
            "You missed your connection. Talk to the airline staff to rebook.",
            "Security asks you to remove items from your bag. Ask what is allowed.",
        ],
    ),
    (
        "Restaurant",
        &[
            "You want a table for two and have dietary restrictions. Make the request.",
            "Your order arrived wrong. Politely ask for a fix.",
            "Ask for recommendations and then order with modifications.",
        ],
    ),
    (
        "Classroom",
        &[
            "You didn't understand the assignment. Ask the professor for clarification.",
            "You want to form a study group. Invite a classmate.",
            "Ask for an extension with a valid reason.",
        ],
    ),
    (
        "Office",
        &[
            "You need to give a status update to your manager.",
            "A teammate disagrees with your approach. Resolve it respectfully.",
            "You want to schedule a meeting across time zones.",
        ],
    ),
    (
        "Shopping",
        &[
            "You want to return an item without a receipt. Explain your situation.",
            "Ask about discounts and warranties.",
            "The product is out of stock. Ask for alternatives.",
        ],
    ),
];

const SUGGESTED_SKILLS: &[(&str, &[&str])] = &[
    (
        "Airport",
        &["phrase:check_in", "vocab:overweight_bag", "phrase:rebook_flight"],
    ),
    (
        "Restaurant",
        &["phrase:table_for_two", "vocab:allergy", "phrase:order_modification"],
    ),
    (
        "Classroom",
        &["phrase:ask_clarification", "phrase:request_extension", "vocab:assignment"],
    ),
    (
        "Office",
        &["phrase:status_update", "phrase:disagree_politely", "phrase:schedule_meeting"],
    ),
    (
        "Shopping",
        &["phrase:return_item", "vocab:refund", "phrase:ask_alternative"],
    ),
];

fn lookup<'a>(table: &'a [(&str, &'a [&'a str])], context: &str) -> &'a [&'a str] {
    table
        .iter()
        .find(|(name, _)| *name == context)
        .or_else(|| table.iter().find(|(name, _)| *name == DEFAULT_CONTEXT))
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// First scenario prompt for the context; deterministic.
pub fn scenario_prompt(context: &str) -> &'static str {
    lookup(SCENARIOS, context).first().copied().unwrap_or("")
}

/// Fixed ordered vocabulary of suggested new skill ids for the context.
pub fn suggested_skills(context: &str) -> &'static [&'static str] {
    lookup(SUGGESTED_SKILLS, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_context_prompt_is_first_entry() {
        assert!(scenario_prompt("Restaurant").starts_with("You want a table for two"));
        assert!(scenario_prompt("Office").starts_with("You need to give a status update"));
    }

    #[test]
    fn test_unknown_context_falls_back_to_default() {
        assert_eq!(scenario_prompt("Spaceport"), scenario_prompt(DEFAULT_CONTEXT));
        assert_eq!(suggested_skills(""), suggested_skills(DEFAULT_CONTEXT));
    }

    #[test]
    fn test_every_context_has_suggestions_and_prompts() {
        for &(context, _) in SCENARIOS {
            assert!(!scenario_prompt(context).is_empty());
            assert_eq!(suggested_skills(context).len(), 3);
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        assert_eq!(scenario_prompt("Airport"), scenario_prompt("Airport"));
    }
}
