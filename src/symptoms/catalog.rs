//! Fixed catalog of symptom categories.

use serde::Serialize;

/// Informational entry for one body-system grouping.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SymptomCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub causes: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub medications: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
    pub preventive_measures: &'static [&'static str],
}

pub static CATALOG: [SymptomCategory; 5] = [
    SymptomCategory {
        id: "heart",
        label: "Cardiovascular",
        description: "Cardiovascular symptoms may indicate conditions affecting your heart and blood vessels. Early detection is crucial for effective treatment.",
        causes: &[
            "High blood pressure",
            "High cholesterol",
            "Smoking",
            "Physical inactivity",
            "Obesity",
            "Diabetes",
            "Family history",
            "Age and gender",
        ],
        precautions: &[
            "Regular exercise (at least 30 minutes daily)",
            "Heart-healthy diet rich in fruits and vegetables",
            "Regular blood pressure monitoring",
            "Stress management through meditation or yoga",
            "Quit smoking and limit alcohol",
            "Maintain healthy weight",
            "Regular health checkups",
            "Adequate sleep (7-9 hours)",
        ],
        medications: &[
            "Beta blockers",
            "ACE inhibitors",
            "Statins",
            "Anticoagulants",
        ],
        risk_factors: &[
            "Advanced age",
            "Family history of heart disease",
            "Sedentary lifestyle",
            "Poor diet",
        ],
        preventive_measures: &[
            "Regular cardiovascular screening",
            "Blood pressure management",
            "Cholesterol monitoring",
            "Weight management",
        ],
    },
    SymptomCategory {
        id: "brain",
        label: "Neurological",
        description: "Neurological symptoms involve the brain, spine, and nerves. Understanding these symptoms helps in early intervention.",
        causes: &[
            "Head trauma",
            "Genetic factors",
            "Infections",
            "Sleep disorders",
            "Chronic stress",
            "Autoimmune conditions",
            "Tumors",
            "Vascular problems",
        ],
        precautions: &[
            "Wear protective gear during activities",
            "Get adequate sleep (7-9 hours nightly)",
            "Practice stress reduction techniques",
            "Regular mental exercises and puzzles",
            "Stay hydrated and maintain nutrition",
            "Avoid excessive alcohol",
            "Regular exercise",
            "Mental health maintenance",
        ],
        medications: &[
            "Anticonvulsants",
            "Pain relievers",
            "Anti-inflammatory drugs",
            "Antidepressants",
        ],
        risk_factors: &[
            "Age",
            "Family history",
            "Previous head injuries",
            "Substance abuse",
        ],
        preventive_measures: &[
            "Regular neurological checkups",
            "Brain-stimulating activities",
            "Proper nutrition",
            "Stress management",
        ],
    },
    SymptomCategory {
        id: "digestive",
        label: "Digestive",
        description: "Digestive issues can significantly impact daily life. Understanding your symptoms helps in managing digestive health effectively.",
        causes: &[
            "Poor diet",
            "Food intolerances",
            "Stress",
            "Bacterial infections",
            "Medication side effects",
            "Inflammatory conditions",
            "Enzyme deficiencies",
            "Lifestyle factors",
        ],
        precautions: &[
            "Eat a balanced diet with fiber",
            "Stay hydrated throughout the day",
            "Regular meal times",
            "Avoid trigger foods",
            "Manage stress levels",
            "Chew food thoroughly",
            "Limit alcohol and caffeine",
            "Regular exercise",
        ],
        medications: &[
            "Antacids",
            "Probiotics",
            "Anti-inflammatory medications",
            "Digestive enzymes",
        ],
        risk_factors: &[
            "Poor dietary habits",
            "Stress",
            "Genetic factors",
            "Medical conditions",
        ],
        preventive_measures: &[
            "Regular digestive health screenings",
            "Food diary maintenance",
            "Stress management",
            "Dietary modifications",
        ],
    },
    SymptomCategory {
        id: "bone",
        label: "Musculoskeletal",
        description: "Musculoskeletal conditions affect bones, muscles, and joints. Early intervention can prevent long-term complications.",
        causes: &[
            "Poor posture",
            "Overuse injuries",
            "Lack of exercise",
            "Age-related changes",
            "Trauma or accidents",
            "Genetic factors",
            "Inflammatory conditions",
            "Occupational hazards",
        ],
        precautions: &[
            "Maintain good posture",
            "Regular strength training",
            "Proper lifting techniques",
            "Adequate calcium and vitamin D",
            "Weight management",
            "Ergonomic workspace setup",
            "Regular stretching",
            "Joint-friendly exercises",
        ],
        medications: &[
            "Pain relievers",
            "Anti-inflammatory drugs",
            "Muscle relaxants",
            "Bone strengtheners",
        ],
        risk_factors: &[
            "Age",
            "Sedentary lifestyle",
            "Obesity",
            "Previous injuries",
        ],
        preventive_measures: &[
            "Regular bone density screenings",
            "Exercise program",
            "Proper nutrition",
            "Ergonomic adjustments",
        ],
    },
    SymptomCategory {
        id: "fever",
        label: "Fever/Pain",
        description: "Fever and pain are common symptoms that can indicate various underlying conditions. Proper monitoring is essential.",
        causes: &[
            "Infections",
            "Inflammation",
            "Dehydration",
            "Overexertion",
            "Environmental factors",
            "Autoimmune responses",
            "Injuries",
            "Medical conditions",
        ],
        precautions: &[
            "Stay hydrated",
            "Rest adequately",
            "Monitor temperature regularly",
            "Maintain hygiene",
            "Seek medical attention if severe",
            "Proper medication timing",
            "Environmental control",
            "Regular health monitoring",
        ],
        medications: &[
            "Antipyretics",
            "Pain relievers",
            "Anti-inflammatory drugs",
            "Antibiotics (if prescribed)",
        ],
        risk_factors: &[
            "Weak immune system",
            "Chronic conditions",
            "Environmental exposure",
            "Poor nutrition",
        ],
        preventive_measures: &[
            "Regular health checkups",
            "Immunizations",
            "Good hygiene practices",
            "Healthy lifestyle",
        ],
    },
];

/// Look up a category by id.
pub fn find(id: &str) -> Option<&'static SymptomCategory> {
    CATALOG.iter().find(|category| category.id == id)
}
