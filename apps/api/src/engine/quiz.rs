//! Quiz Scorer: maps answered questions of the fixed aptitude quiz to a
//! percentage per aptitude category.
//!
//! Each question is pre-tagged with one category. The chosen option does not
//! affect the score: answering a question adds one to its category counter.
//! Percentages are taken over the total question count, so an abandoned quiz
//! sums to less than 100. Each category is rounded on its own, which lets a
//! complete quiz round up past 100 (8 questions: 38 + 25 + 13 + 13 + 13).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Question index → selected option index. One answer per question; inserting
/// again for the same index overwrites the earlier choice.
pub type QuizAnswers = BTreeMap<usize, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Analytical,
    Creative,
    Leadership,
    Communication,
}

impl Category {
    /// Fixed enumeration order used for every score list.
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Analytical,
        Category::Creative,
        Category::Leadership,
        Category::Communication,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Technical => "Technical Skills",
            Category::Analytical => "Analytical Thinking",
            Category::Creative => "Creative Problem Solving",
            Category::Leadership => "Leadership",
            Category::Communication => "Communication",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub category: Category,
}

pub const QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        question: "When faced with a complex problem, what's your first approach?",
        options: [
            "Break it down into smaller, manageable parts",
            "Research similar problems and solutions",
            "Brainstorm creative alternatives",
            "Consult with team members for input",
        ],
        category: Category::Analytical,
    },
    Question {
        id: 2,
        question: "Which type of project excites you most?",
        options: [
            "Building a new software application",
            "Analyzing data to find insights",
            "Designing user interfaces",
            "Leading a team to achieve goals",
        ],
        category: Category::Technical,
    },
    Question {
        id: 3,
        question: "How do you prefer to learn new technologies?",
        options: [
            "Hands-on experimentation and building",
            "Reading documentation and tutorials",
            "Watching video courses",
            "Learning from mentors and peers",
        ],
        category: Category::Technical,
    },
    Question {
        id: 4,
        question: "In a team setting, you naturally tend to:",
        options: [
            "Take charge and organize tasks",
            "Provide technical expertise",
            "Generate innovative ideas",
            "Facilitate communication between members",
        ],
        category: Category::Leadership,
    },
    Question {
        id: 5,
        question: "What motivates you most in your work?",
        options: [
            "Solving challenging technical problems",
            "Creating something visually appealing",
            "Making data-driven decisions",
            "Helping others achieve their goals",
        ],
        category: Category::Creative,
    },
    Question {
        id: 6,
        question: "When presenting ideas, you prefer to:",
        options: [
            "Use detailed technical explanations",
            "Show visual mockups and prototypes",
            "Present data and analytics",
            "Tell compelling stories",
        ],
        category: Category::Communication,
    },
    Question {
        id: 7,
        question: "Your ideal work environment is:",
        options: [
            "Quiet space for deep focus",
            "Collaborative open office",
            "Flexible remote setup",
            "Dynamic, fast-paced environment",
        ],
        category: Category::Analytical,
    },
    Question {
        id: 8,
        question: "When debugging code, you typically:",
        options: [
            "Use systematic debugging tools",
            "Add console logs strategically",
            "Review code line by line",
            "Ask colleagues for fresh perspective",
        ],
        category: Category::Technical,
    },
];

pub const TOTAL_QUESTIONS: usize = QUESTIONS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// 0 – 100
    pub score: u32,
}

/// A scored quiz as stored on the profile and in the quiz history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub category_scores: Vec<CategoryScore>,
    pub completed_at: DateTime<Utc>,
    pub total_questions: usize,
    pub answers: QuizAnswers,
}

impl QuizResult {
    pub fn new(answers: QuizAnswers, completed_at: DateTime<Utc>) -> Self {
        Self {
            category_scores: score(&answers),
            completed_at,
            total_questions: TOTAL_QUESTIONS,
            answers,
        }
    }
}

/// Scores an answer set. All five categories are always present, in
/// `Category::ALL` order. Answers for unknown question indices are ignored.
pub fn score(answers: &QuizAnswers) -> Vec<CategoryScore> {
    let mut counters = [0u32; Category::ALL.len()];

    for question_index in answers.keys() {
        if let Some(question) = QUESTIONS.get(*question_index) {
            counters[category_slot(question.category)] += 1;
        }
    }

    Category::ALL
        .iter()
        .zip(counters)
        .map(|(category, count)| CategoryScore {
            category: *category,
            score: ((count as f64 / TOTAL_QUESTIONS as f64) * 100.0).round() as u32,
        })
        .collect()
}

fn category_slot(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default()
}

/// Reason an answer set cannot be accepted from a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerProblem {
    #[error("question index {0} is out of range (0-7)")]
    UnknownQuestion(usize),

    #[error("option {option} is not valid for question {question}")]
    UnknownOption { question: usize, option: usize },
}

/// Boundary check for answers arriving over the wire. The scorer itself does
/// not require this.
pub fn validate_answers(answers: &QuizAnswers) -> Result<(), AnswerProblem> {
    for (&question, &option) in answers {
        let Some(q) = QUESTIONS.get(question) else {
            return Err(AnswerProblem::UnknownQuestion(question));
        };
        if option >= q.options.len() {
            return Err(AnswerProblem::UnknownOption { question, option });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_answered() -> QuizAnswers {
        (0..TOTAL_QUESTIONS).map(|q| (q, 0)).collect()
    }

    fn score_of(scores: &[CategoryScore], category: Category) -> u32 {
        scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
            .unwrap()
    }

    #[test]
    fn test_full_quiz_distribution() {
        let scores = score(&all_answered());
        assert_eq!(score_of(&scores, Category::Technical), 38);
        assert_eq!(score_of(&scores, Category::Analytical), 25);
        assert_eq!(score_of(&scores, Category::Leadership), 13);
        assert_eq!(score_of(&scores, Category::Creative), 13);
        assert_eq!(score_of(&scores, Category::Communication), 13);
    }

    #[test]
    fn test_all_categories_present_in_fixed_order() {
        let scores = score(&QuizAnswers::new());
        let order: Vec<Category> = scores.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert!(scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_option_choice_does_not_change_score() {
        let first: QuizAnswers = (0..TOTAL_QUESTIONS).map(|q| (q, 0)).collect();
        let last: QuizAnswers = (0..TOTAL_QUESTIONS).map(|q| (q, 3)).collect();
        assert_eq!(score(&first), score(&last));
    }

    #[test]
    fn test_abandoned_quiz_sums_below_100() {
        let answers: QuizAnswers = [(0, 1), (1, 2)].into_iter().collect();
        let scores = score(&answers);
        let sum: u32 = scores.iter().map(|s| s.score).sum();
        assert!(sum < 100, "sum was {sum}");
        assert_eq!(score_of(&scores, Category::Analytical), 13);
        assert_eq!(score_of(&scores, Category::Technical), 13);
    }

    #[test]
    fn test_later_answer_overwrites_earlier() {
        let mut answers = QuizAnswers::new();
        answers.insert(3, 0);
        answers.insert(3, 2);
        assert_eq!(answers.len(), 1);
        assert_eq!(score_of(&score(&answers), Category::Leadership), 13);
    }

    #[test]
    fn test_unknown_question_is_ignored() {
        let answers: QuizAnswers = [(42, 0)].into_iter().collect();
        assert!(score(&answers).iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_scores_bounded_for_every_prefix() {
        for answered in 0..=TOTAL_QUESTIONS {
            let answers: QuizAnswers = (0..answered).map(|q| (q, 1)).collect();
            let scores = score(&answers);
            assert!(scores.iter().all(|s| s.score <= 100));
        }
    }

    #[test]
    fn test_full_quiz_rounds_each_category_independently() {
        // 37.5 + 25 + 12.5 * 3 = 100 before rounding; each half rounds up.
        let sum: u32 = score(&all_answered()).iter().map(|s| s.score).sum();
        assert_eq!(sum, 102);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad_question: QuizAnswers = [(8, 0)].into_iter().collect();
        assert_eq!(
            validate_answers(&bad_question),
            Err(AnswerProblem::UnknownQuestion(8))
        );

        let bad_option: QuizAnswers = [(2, 4)].into_iter().collect();
        assert_eq!(
            validate_answers(&bad_option),
            Err(AnswerProblem::UnknownOption {
                question: 2,
                option: 4
            })
        );

        assert!(validate_answers(&all_answered()).is_ok());
    }

    #[test]
    fn test_quiz_result_records_total_and_answers() {
        let result = QuizResult::new(all_answered(), Utc::now());
        assert_eq!(result.total_questions, 8);
        assert_eq!(result.answers.len(), 8);
        assert_eq!(result.category_scores.len(), 5);
    }
}
