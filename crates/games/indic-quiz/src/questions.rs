use indic_core::model::Question;

struct Entry {
    id: u32,
    prompt: &'static str,
    options: [&'static str; 4],
    correct_answer: usize,
    points: u32,
    category: &'static str,
    explanation: &'static str,
}

const BANK: [Entry; 5] = [
    Entry {
        id: 1,
        prompt: "In the Ramayana, who is the devoted brother of Lord Rama?",
        options: ["Bharata", "Lakshmana", "Shatrughna", "Hanuman"],
        correct_answer: 1,
        points: 100,
        category: "Mythology",
        explanation: "Lakshmana was Rama's devoted younger brother who accompanied him during his 14-year exile.",
    },
    Entry {
        id: 2,
        prompt: "Which festival is known as the 'Festival of Lights'?",
        options: ["Holi", "Diwali", "Dussehra", "Karva Chauth"],
        correct_answer: 1,
        points: 75,
        category: "Festivals",
        explanation: "Diwali symbolizes the victory of light over darkness and good over evil.",
    },
    Entry {
        id: 3,
        prompt: "Who was the founder of the Maurya Empire?",
        options: ["Ashoka", "Chandragupta Maurya", "Bindusara", "Bimbisara"],
        correct_answer: 1,
        points: 150,
        category: "History",
        explanation: "Chandragupta Maurya founded the Maurya Empire around 321 BCE.",
    },
    Entry {
        id: 4,
        prompt: "Which classical dance form originated in Tamil Nadu?",
        options: ["Kathak", "Bharatanatyam", "Odissi", "Manipuri"],
        correct_answer: 1,
        points: 125,
        category: "Culture",
        explanation: "Bharatanatyam is one of the oldest classical dance forms, originating in Tamil Nadu.",
    },
    Entry {
        id: 5,
        prompt: "What is the sacred river mentioned in many Hindu scriptures?",
        options: ["Yamuna", "Ganga", "Saraswati", "Narmada"],
        correct_answer: 1,
        points: 100,
        category: "Geography",
        explanation: "The Ganga (Ganges) is considered the most sacred river in Hinduism.",
    },
];

/// Ids of every question in the bank, in bank order.
pub fn all_ids() -> Vec<u32> {
    BANK.iter().map(|e| e.id).collect()
}

pub fn bank_len() -> usize {
    BANK.len()
}

pub fn question(id: u32) -> Option<Question> {
    BANK.iter().find(|e| e.id == id).map(|e| Question {
        id: e.id,
        prompt: e.prompt.to_string(),
        options: e.options.iter().map(|o| o.to_string()).collect(),
        correct_answer: e.correct_answer,
        points: e.points,
        category: e.category.to_string(),
        explanation: e.explanation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_ids_resolve() {
        let ids = all_ids();
        assert_eq!(ids.len(), bank_len());
        for id in ids {
            let q = question(id).unwrap();
            assert!(q.correct_answer < q.options.len());
            assert!(q.points > 0);
        }
        assert!(question(99).is_none());
    }

    #[test]
    fn full_bank_is_worth_550() {
        let total: u32 = all_ids()
            .into_iter()
            .filter_map(question)
            .map(|q| q.points)
            .sum();
        assert_eq!(total, 550);
    }
}
