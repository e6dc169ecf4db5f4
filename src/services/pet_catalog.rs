//! Read-only pet care content shown on the site's learn pages.
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
    Fish,
    Bird,
    Hamster,
    Rabbit,
    GuineaPig,
    Turtle,
    Other,
}

impl PetType {
    pub fn id(self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
            PetType::Fish => "fish",
            PetType::Bird => "bird",
            PetType::Hamster => "hamster",
            PetType::Rabbit => "rabbit",
            PetType::GuineaPig => "guinea_pig",
            PetType::Turtle => "turtle",
            PetType::Other => "other",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        PETS.iter().map(|p| p.pet_type).find(|t| t.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CareLevel {
    Easy,
    Medium,
    Advanced,
}

#[derive(Debug, Serialize)]
pub struct Routine {
    pub frequency: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Exercise {
    pub amount: &'static str,
    pub activities: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct CommonIssue {
    pub title: &'static str,
    pub solution: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetProfile {
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub lifespan: &'static str,
    pub care_level: CareLevel,
    pub space_needed: &'static str,
    pub daily_care: &'static [&'static str],
    pub fun_fact: &'static str,
    pub feeding_guide: Routine,
    pub grooming: Routine,
    pub exercise: Exercise,
    pub common_issues: &'static [CommonIssue],
}

#[derive(Debug, Serialize)]
pub struct PetFact {
    pub pet: PetType,
    pub fact: &'static str,
}

pub fn all() -> &'static [PetProfile] {
    PETS
}

pub fn get(pet_type: PetType) -> Option<&'static PetProfile> {
    PETS.iter().find(|p| p.pet_type == pet_type)
}

pub fn facts() -> &'static [PetFact] {
    FACTS
}

static PETS: &[PetProfile] = &[
    PetProfile {
        pet_type: PetType::Dog,
        name: "Dogs",
        emoji: "🐕",
        description: "Dogs are loyal, loving companions who become part of your family. They need regular walks, playtime, and lots of love!",
        lifespan: "10-15 years",
        care_level: CareLevel::Medium,
        space_needed: "Medium to Large (yard is helpful)",
        daily_care: &["Feed twice daily", "Fresh water always", "Walk 30-60 min", "Playtime", "Potty breaks"],
        fun_fact: "Dogs can learn over 100 words and gestures!",
        feeding_guide: Routine {
            frequency: "2 times per day",
            tips: &[
                "Use age-appropriate dog food",
                "Measure portions based on weight",
                "Avoid chocolate, grapes, and onions",
                "Keep water bowl fresh and full",
            ],
        },
        grooming: Routine {
            frequency: "Weekly brushing, monthly baths",
            tips: &[
                "Brush coat regularly to prevent matting",
                "Trim nails every 2-4 weeks",
                "Clean ears weekly",
                "Brush teeth with dog toothpaste",
            ],
        },
        exercise: Exercise {
            amount: "30-60 minutes daily",
            activities: &["Walking", "Playing fetch", "Tug-of-war", "Running", "Swimming"],
        },
        common_issues: &[
            CommonIssue { title: "Barking too much", solution: "Train \"quiet\" command, ensure enough exercise and mental stimulation" },
            CommonIssue { title: "Chewing furniture", solution: "Provide appropriate chew toys, crate train when unsupervised" },
            CommonIssue { title: "Jumping on people", solution: "Ignore until calm, reward four-on-floor behavior" },
        ],
    },
    PetProfile {
        pet_type: PetType::Cat,
        name: "Cats",
        emoji: "🐱",
        description: "Cats are independent, curious, and affectionate pets. They groom themselves and enjoy both playtime and napping!",
        lifespan: "12-18 years",
        care_level: CareLevel::Easy,
        space_needed: "Small to Medium (indoors)",
        daily_care: &["Feed twice daily", "Fresh water", "Scoop litter box", "Playtime", "Brushing"],
        fun_fact: "Cats spend 70% of their lives sleeping!",
        feeding_guide: Routine {
            frequency: "2 times per day",
            tips: &[
                "High-quality wet or dry cat food",
                "Avoid milk (most cats are lactose intolerant)",
                "Keep food and water away from litter box",
                "Measure portions to prevent obesity",
            ],
        },
        grooming: Routine {
            frequency: "Brush 2-3 times per week",
            tips: &[
                "Short-haired cats need less brushing",
                "Long-haired cats may need daily brushing",
                "Trim nails every 2-3 weeks",
                "Check ears for wax buildup",
            ],
        },
        exercise: Exercise {
            amount: "15-30 minutes daily",
            activities: &["Feather toys", "Laser pointers", "Cat trees", "Puzzle feeders", "String toys"],
        },
        common_issues: &[
            CommonIssue { title: "Scratching furniture", solution: "Provide scratching posts, use deterrent sprays" },
            CommonIssue { title: "Not using litter box", solution: "Keep box clean, try different litter types, check for health issues" },
            CommonIssue { title: "Biting during play", solution: "Use toys instead of hands, stop play when biting occurs" },
        ],
    },
    PetProfile {
        pet_type: PetType::Fish,
        name: "Fish",
        emoji: "🐟",
        description: "Fish are peaceful pets that bring beauty and calm to your home. They require clean water and proper tank maintenance.",
        lifespan: "2-10 years (varies by species)",
        care_level: CareLevel::Medium,
        space_needed: "Tank (5+ gallons recommended)",
        daily_care: &["Feed once or twice", "Check water temperature", "Observe fish health", "Top off water"],
        fun_fact: "Goldfish can recognize their owners' faces!",
        feeding_guide: Routine {
            frequency: "1-2 times per day",
            tips: &[
                "Feed only what they can eat in 2 minutes",
                "Use species-appropriate food",
                "Avoid overfeeding (common mistake!)",
                "Skip feeding one day per week",
            ],
        },
        grooming: Routine {
            frequency: "Weekly tank maintenance",
            tips: &[
                "Change 25% of water weekly",
                "Clean algae from glass",
                "Rinse filter media monthly",
                "Test water parameters regularly",
            ],
        },
        exercise: Exercise {
            amount: "Enrichment through environment",
            activities: &["Tank decorations", "Live plants", "Appropriate tank mates", "Varied feeding spots"],
        },
        common_issues: &[
            CommonIssue { title: "Cloudy water", solution: "Check filter, reduce feeding, do partial water change" },
            CommonIssue { title: "Fish not eating", solution: "Check water temperature and quality, try different food" },
            CommonIssue { title: "White spots on fish", solution: "Could be ich disease - raise temperature, use treatment" },
        ],
    },
    PetProfile {
        pet_type: PetType::Bird,
        name: "Birds",
        emoji: "🐦",
        description: "Birds are intelligent, social pets that can learn tricks and some can even talk! They need mental stimulation and social interaction.",
        lifespan: "5-50+ years (varies greatly)",
        care_level: CareLevel::Medium,
        space_needed: "Cage + flight time outside",
        daily_care: &["Fresh food & water", "Clean cage bottom", "Social interaction", "Out-of-cage time", "Cover at night"],
        fun_fact: "Parrots can learn hundreds of words and even use them in context!",
        feeding_guide: Routine {
            frequency: "Fresh food daily",
            tips: &[
                "Pellets should be main diet",
                "Offer fresh fruits and vegetables",
                "Avoid avocado, chocolate, caffeine",
                "Change water multiple times daily",
            ],
        },
        grooming: Routine {
            frequency: "Weekly maintenance",
            tips: &[
                "Provide bird bath or mist with water",
                "Wing clipping (optional, consult vet)",
                "Nail trimming as needed",
                "Perches help keep nails worn",
            ],
        },
        exercise: Exercise {
            amount: "2-4 hours outside cage daily",
            activities: &["Flying in safe room", "Climbing toys", "Foraging toys", "Training sessions", "Social interaction"],
        },
        common_issues: &[
            CommonIssue { title: "Feather plucking", solution: "Increase stimulation, check diet, consult avian vet" },
            CommonIssue { title: "Screaming", solution: "Establish routine, ignore screaming, reward quiet behavior" },
            CommonIssue { title: "Biting", solution: "Learn body language, use positive reinforcement training" },
        ],
    },
    PetProfile {
        pet_type: PetType::Hamster,
        name: "Hamsters",
        emoji: "🐹",
        description: "Hamsters are small, adorable pets that are active at night. They love running on wheels and storing food in their cheeks!",
        lifespan: "2-3 years",
        care_level: CareLevel::Easy,
        space_needed: "Cage (minimum 450 sq inches)",
        daily_care: &["Fresh food & water", "Check food stash", "Observe health", "Handle gently", "Empty wheel if dirty"],
        fun_fact: "Hamsters can run up to 5 miles on their wheel in one night!",
        feeding_guide: Routine {
            frequency: "Once daily (evening)",
            tips: &[
                "Commercial hamster mix as base",
                "Offer fresh veggies sparingly",
                "Avoid citrus and sugary foods",
                "They hoard food - don't overfill",
            ],
        },
        grooming: Routine {
            frequency: "Minimal - they self-groom",
            tips: &[
                "Provide sand bath for cleaning",
                "Spot clean cage daily",
                "Full cage clean weekly",
                "Never bathe in water",
            ],
        },
        exercise: Exercise {
            amount: "Active at night",
            activities: &["Exercise wheel (essential)", "Tunnels and tubes", "Playpen time", "Digging substrate", "Climbing toys"],
        },
        common_issues: &[
            CommonIssue { title: "Biting", solution: "Handle during awake hours, move slowly, wash hands before handling" },
            CommonIssue { title: "Escaping", solution: "Check cage for gaps, secure doors, ensure adequate space" },
            CommonIssue { title: "Wet tail", solution: "Serious condition - see vet immediately, keep cage clean" },
        ],
    },
    PetProfile {
        pet_type: PetType::Rabbit,
        name: "Rabbits",
        emoji: "🐰",
        description: "Rabbits are gentle, social pets that can be litter trained. They need space to hop and lots of hay to munch!",
        lifespan: "8-12 years",
        care_level: CareLevel::Medium,
        space_needed: "Large enclosure + exercise area",
        daily_care: &["Unlimited hay", "Fresh veggies", "Clean water", "Litter box cleaning", "Exercise time", "Social time"],
        fun_fact: "When rabbits are happy, they do a jump called a \"binky\"!",
        feeding_guide: Routine {
            frequency: "Hay always available, veggies daily",
            tips: &[
                "80% of diet should be hay",
                "Leafy greens daily",
                "Limited pellets",
                "Avoid iceberg lettuce and carrots in excess",
            ],
        },
        grooming: Routine {
            frequency: "Brush weekly (daily when shedding)",
            tips: &[
                "Never bathe rabbits (stressful)",
                "Trim nails monthly",
                "Check teeth regularly",
                "Long-haired breeds need more brushing",
            ],
        },
        exercise: Exercise {
            amount: "3-4 hours free-roam daily",
            activities: &["Hopping and running", "Digging boxes", "Tunnels", "Tossing toys", "Exploring bunny-proofed areas"],
        },
        common_issues: &[
            CommonIssue { title: "Not eating", solution: "Emergency - see vet immediately (GI stasis risk)" },
            CommonIssue { title: "Chewing wires", solution: "Bunny-proof the area, provide safe chew toys" },
            CommonIssue { title: "Spraying/marking", solution: "Spay or neuter (also improves health)" },
        ],
    },
    PetProfile {
        pet_type: PetType::GuineaPig,
        name: "Guinea Pigs",
        emoji: "🐹",
        description: "Guinea pigs are social, vocal pets that love company. They \"wheek\" when excited and need a friend of their own kind!",
        lifespan: "5-7 years",
        care_level: CareLevel::Medium,
        space_needed: "Large cage (7.5+ sq feet for one)",
        daily_care: &["Unlimited hay", "Fresh veggies with vitamin C", "Clean water", "Spot clean cage", "Floor time", "Social time"],
        fun_fact: "Guinea pigs \"popcorn\" (jump with joy) when they're happy!",
        feeding_guide: Routine {
            frequency: "Hay always, veggies twice daily",
            tips: &[
                "They need vitamin C daily (can't make their own)",
                "Bell peppers are great for vitamin C",
                "Unlimited timothy hay",
                "Limit pellets and fruits",
            ],
        },
        grooming: Routine {
            frequency: "Brush weekly",
            tips: &[
                "Long-haired breeds need daily brushing",
                "Trim nails every 2-4 weeks",
                "Rarely need baths",
                "Check grease gland (especially in males)",
            ],
        },
        exercise: Exercise {
            amount: "1-2 hours floor time daily",
            activities: &["Running laps (zoomies)", "Tunnels and hideys", "Foraging for food", "Socializing with cage mates"],
        },
        common_issues: &[
            CommonIssue { title: "Vitamin C deficiency", solution: "Add bell pepper daily, consider supplements" },
            CommonIssue { title: "Respiratory issues", solution: "Keep cage clean, avoid dusty bedding, see vet" },
            CommonIssue { title: "Loneliness", solution: "Get a same-sex companion (they're social animals)" },
        ],
    },
    PetProfile {
        pet_type: PetType::Turtle,
        name: "Turtles",
        emoji: "🐢",
        description: "Turtles are fascinating, long-lived pets that need proper lighting and water. They're fun to watch but require specific care!",
        lifespan: "20-40+ years",
        care_level: CareLevel::Advanced,
        space_needed: "10 gallons per inch of shell",
        daily_care: &["Feed (schedule varies)", "Check water quality", "Ensure proper temps", "Check basking spot", "Observe health"],
        fun_fact: "A turtle's shell is made of over 50 bones fused together!",
        feeding_guide: Routine {
            frequency: "Young: daily, Adults: every 2-3 days",
            tips: &[
                "Commercial turtle pellets as base",
                "Leafy greens for aquatic turtles",
                "Occasional protein (insects, fish)",
                "Calcium supplements important",
            ],
        },
        grooming: Routine {
            frequency: "Tank cleaning weekly",
            tips: &[
                "Strong filter is essential",
                "25-50% water change weekly",
                "Clean algae from shell gently",
                "UV-B light must be replaced every 6 months",
            ],
        },
        exercise: Exercise {
            amount: "Swimming and basking",
            activities: &["Swimming space", "Basking platform", "Exploring tank", "Hunting live food (enrichment)"],
        },
        common_issues: &[
            CommonIssue { title: "Soft shell", solution: "Calcium deficiency - add cuttlebone, check UV-B lighting" },
            CommonIssue { title: "Not basking", solution: "Check temperatures, may indicate illness" },
            CommonIssue { title: "Cloudy eyes", solution: "Vitamin A deficiency or infection - see reptile vet" },
        ],
    },
    PetProfile {
        pet_type: PetType::Other,
        name: "Other Pets",
        emoji: "🐾",
        description: "There are many wonderful pets beyond the common ones! Each has unique needs - always research thoroughly before getting a new pet.",
        lifespan: "Varies by species",
        care_level: CareLevel::Medium,
        space_needed: "Varies by species",
        daily_care: &["Feed appropriately", "Fresh water", "Clean habitat", "Health checks", "Social needs vary"],
        fun_fact: "There are over 500 million pet animals in the world!",
        feeding_guide: Routine {
            frequency: "Species-dependent",
            tips: &[
                "Research your specific pet's needs",
                "Use appropriate commercial food when available",
                "Learn what foods are toxic for your pet",
                "Consult with a specialized vet",
            ],
        },
        grooming: Routine {
            frequency: "Species-dependent",
            tips: &[
                "Keep habitat clean",
                "Learn species-specific grooming needs",
                "Handle according to pet's comfort",
                "Regular health observations",
            ],
        },
        exercise: Exercise {
            amount: "Species-dependent",
            activities: &["Appropriate enrichment", "Safe exploration", "Species-appropriate toys", "Social interaction if needed"],
        },
        common_issues: &[
            CommonIssue { title: "Research gap", solution: "Always research before getting a pet, join species-specific communities" },
            CommonIssue { title: "Finding a vet", solution: "Locate exotic pet vets before bringing pet home" },
            CommonIssue { title: "Proper housing", solution: "Invest in appropriate enclosure before purchase" },
        ],
    },
];

static FACTS: &[PetFact] = &[
    PetFact { pet: PetType::Dog, fact: "A dog's nose print is unique, just like a human fingerprint!" },
    PetFact { pet: PetType::Cat, fact: "Cats have over 20 different vocalizations, including the meow!" },
    PetFact { pet: PetType::Fish, fact: "Fish can recognize their owners and get excited when they see them!" },
    PetFact { pet: PetType::Bird, fact: "Parrots can live to be over 80 years old!" },
    PetFact { pet: PetType::Hamster, fact: "Hamsters can run backwards just as fast as forwards!" },
    PetFact { pet: PetType::Rabbit, fact: "Rabbits can't vomit, so their diet is super important!" },
    PetFact { pet: PetType::GuineaPig, fact: "Baby guinea pigs are born with fur and open eyes!" },
    PetFact { pet: PetType::Turtle, fact: "Turtles have been on Earth for over 200 million years!" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_exactly_one_profile() {
        let ids: Vec<_> = all().iter().map(|p| p.pet_type.id()).collect();
        assert_eq!(
            ids,
            ["dog", "cat", "fish", "bird", "hamster", "rabbit", "guinea_pig", "turtle", "other"]
        );
        for profile in all() {
            assert_eq!(PetType::from_id(profile.pet_type.id()), Some(profile.pet_type));
            assert_eq!(profile.common_issues.len(), 3);
        }
    }

    #[test]
    fn lookup_by_type() {
        let turtle = get(PetType::Turtle).unwrap();
        assert_eq!(turtle.care_level, CareLevel::Advanced);
        assert_eq!(PetType::from_id("dragon"), None);
    }

    #[test]
    fn profile_serializes_with_site_field_names() {
        let json = serde_json::to_value(get(PetType::GuineaPig).unwrap()).unwrap();
        assert_eq!(json["type"], "guinea_pig");
        assert_eq!(json["careLevel"], "Medium");
        assert_eq!(json["feedingGuide"]["frequency"], "Hay always, veggies twice daily");
        assert!(json["commonIssues"][0]["solution"].is_string());
    }

    #[test]
    fn facts_skip_other() {
        assert_eq!(facts().len(), 8);
        assert!(facts().iter().all(|f| f.pet != PetType::Other));
    }
}
