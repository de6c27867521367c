//! Keyword matcher behind the chat assistant.
//!
//! The "assistant" is a fixed, ordered list of trigger substrings. The first
//! rule whose trigger appears in the lower-cased input selects the canned
//! response; nothing else is inferred.

/// Produces one reply for a user-authored message.
pub trait Responder: Send + Sync + std::fmt::Debug {
    fn respond(&self, input: &str) -> &'static str;
}

/// One rule: any trigger present selects `response`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

pub const HEADACHE_ADVICE: &str = "Based on your description of headache, this could be due to several factors including stress, dehydration, or tension. I recommend: 1) Stay hydrated 2) Take a short rest in a quiet, dark room 3) Consider over-the-counter pain relievers if appropriate. If headaches persist or worsen, please consult a healthcare professional.";

pub const FEVER_ADVICE: &str = "Fever can indicate your body is fighting an infection. I recommend: 1) Rest and stay hydrated 2) Take appropriate fever reducers if temperature is above 100.4°F (38°C) 3) Monitor your temperature regularly. Seek medical attention if fever persists over 3 days or exceeds 103°F (39.4°C).";

pub const COLD_ADVICE: &str = "For cough and cold symptoms, I recommend: 1) Plenty of rest and fluids 2) Honey and warm liquids to soothe throat 3) Humidifier to ease congestion. If symptoms include difficulty breathing or persistent high fever, please seek medical attention immediately.";

pub const PAIN_ADVICE: &str = "Pain can have many causes. To help provide more specific guidance: 1) Can you describe the location and intensity of the pain? 2) When did it start? 3) Does anything make it better or worse? This information would help me give you more tailored recommendations.";

pub const DIET_ADVICE: &str = "A balanced diet is essential for overall health. I recommend: 1) Plenty of fruits, vegetables, and whole grains 2) Lean proteins and healthy fats 3) Limited processed foods and added sugars 4) Staying well-hydrated. Would you like more specific nutritional recommendations for a particular health goal?";

pub const SLEEP_ADVICE: &str = "Quality sleep is crucial for health. I recommend: 1) Maintain a regular sleep schedule 2) Create a relaxing bedtime routine 3) Limit screen time before bed 4) Ensure your sleeping environment is dark, quiet, and cool. If sleep problems persist, consider discussing with a healthcare provider.";

pub const STRESS_ADVICE: &str = "For stress and anxiety management, consider: 1) Regular physical activity 2) Mindfulness or meditation practices 3) Deep breathing exercises 4) Adequate rest and leisure time. If stress or anxiety significantly impacts your daily life, speaking with a mental health professional can be beneficial.";

pub const FALLBACK_ADVICE: &str = "Thank you for sharing your health concerns. To provide you with the most accurate guidance, could you please provide more specific details about your symptoms? Include information such as when they started, their severity, and any factors that seem to improve or worsen them.";

/// Rules in priority order. Earlier rules win on overlap.
pub const RULES: [Rule; 7] = [
    Rule {
        triggers: &["headache"],
        response: HEADACHE_ADVICE,
    },
    Rule {
        triggers: &["fever", "temperature"],
        response: FEVER_ADVICE,
    },
    Rule {
        triggers: &["cough", "cold"],
        response: COLD_ADVICE,
    },
    Rule {
        triggers: &["pain"],
        response: PAIN_ADVICE,
    },
    Rule {
        triggers: &["diet", "nutrition"],
        response: DIET_ADVICE,
    },
    Rule {
        triggers: &["sleep", "insomnia"],
        response: SLEEP_ADVICE,
    },
    Rule {
        triggers: &["stress", "anxiety"],
        response: STRESS_ADVICE,
    },
];

/// Ordered substring scan over [`RULES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn respond(&self, input: &str) -> &'static str {
        let lowered = input.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| lowered.contains(t)))
            .map_or(FALLBACK_ADVICE, |rule| rule.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(input: &str) -> &'static str {
        KeywordResponder.respond(input)
    }

    #[test]
    fn test_headache_wins_regardless_of_other_keywords() {
        for input in [
            "I have a headache",
            "HEADACHE and fever",
            "stress, cough, pain and a Headache",
            "my headache keeps me from sleep",
        ] {
            assert_eq!(respond(input), HEADACHE_ADVICE, "input: {input}");
        }
    }

    #[test]
    fn test_each_trigger_selects_its_rule() {
        let cases = [
            ("running a fever", FEVER_ADVICE),
            ("high Temperature today", FEVER_ADVICE),
            ("dry cough", COLD_ADVICE),
            ("caught a cold", COLD_ADVICE),
            ("back pain", PAIN_ADVICE),
            ("what diet should I follow", DIET_ADVICE),
            ("nutrition tips", DIET_ADVICE),
            ("cannot sleep", SLEEP_ADVICE),
            ("insomnia again", SLEEP_ADVICE),
            ("work stress", STRESS_ADVICE),
            ("anxiety attacks", STRESS_ADVICE),
        ];
        for (input, expected) in cases {
            assert_eq!(respond(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_rule_order_breaks_ties() {
        assert_eq!(respond("fever with a cough"), FEVER_ADVICE);
        assert_eq!(respond("cold sweat and stress"), COLD_ADVICE);
        assert_eq!(respond("painful sleep"), PAIN_ADVICE);
        // "sleep" sits before "stress" in the rule list.
        assert_eq!(respond("stress ruins my sleep"), SLEEP_ADVICE);
    }

    #[test]
    fn test_no_trigger_falls_back() {
        for input in ["hello there", "", "my knee feels odd", "p a i n"] {
            assert_eq!(respond(input), FALLBACK_ADVICE, "input: {input}");
        }
    }
}
