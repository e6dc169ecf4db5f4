use serde::{Deserialize, Serialize};

/// Quick-select conversation starters offered by the chat widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickTopic {
    DogCare,
    CatCare,
    HamsterCare,
    GuineaPigCare,
    FunFacts,
    WhyPaws,
}

impl QuickTopic {
    /// Display order of the quick-reply buttons.
    pub const ALL: [QuickTopic; 6] = [
        QuickTopic::DogCare,
        QuickTopic::CatCare,
        QuickTopic::HamsterCare,
        QuickTopic::GuineaPigCare,
        QuickTopic::FunFacts,
        QuickTopic::WhyPaws,
    ];

    pub fn id(self) -> &'static str {
        match self {
            QuickTopic::DogCare => "dog-care",
            QuickTopic::CatCare => "cat-care",
            QuickTopic::HamsterCare => "hamster-care",
            QuickTopic::GuineaPigCare => "guinea-pig-care",
            QuickTopic::FunFacts => "fun-facts",
            QuickTopic::WhyPaws => "why-paws",
        }
    }

    /// Button label, also used as the user message when the input is empty.
    pub fn label(self) -> &'static str {
        match self {
            QuickTopic::DogCare => "🐶 Dog Care",
            QuickTopic::CatCare => "🐱 Cat Care",
            QuickTopic::HamsterCare => "🐹⚙️ Hamster Care",
            QuickTopic::GuineaPigCare => "🐹🥕 Guinea Pig Care",
            QuickTopic::FunFacts => "🐾 Fun Pet Facts",
            QuickTopic::WhyPaws => "❤️ Why Paws & Purpose?",
        }
    }

    /// Extra instruction the relay appends after the conversation.
    pub fn guidance(self) -> &'static str {
        match self {
            QuickTopic::DogCare => {
                "The user wants to learn about dog care. Provide helpful tips about caring for dogs."
            }
            QuickTopic::CatCare => {
                "The user wants to learn about cat care. Share useful information about caring for cats."
            }
            QuickTopic::HamsterCare => {
                "The user wants to learn about hamster care 🐹⚙️. Give tips specific to hamsters."
            }
            QuickTopic::GuineaPigCare => {
                "The user wants to learn about guinea pig care 🐹🥕. Share information about guinea pigs."
            }
            QuickTopic::FunFacts => {
                "The user wants to hear fun pet facts! Share an interesting and fun animal fact."
            }
            QuickTopic::WhyPaws => {
                "The user wants to know about Lovable Paws & Purpose's mission. Explain the purpose of teaching responsible pet care to families."
            }
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_serde_names() {
        for topic in QuickTopic::ALL {
            let json = serde_json::to_string(&topic).unwrap();
            assert_eq!(json, format!("\"{}\"", topic.id()));
            assert_eq!(QuickTopic::from_id(topic.id()), Some(topic));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(QuickTopic::from_id("unknown-tag"), None);
        assert_eq!(QuickTopic::from_id(""), None);
        assert_eq!(QuickTopic::from_id("Dog-Care"), None);
    }
}
