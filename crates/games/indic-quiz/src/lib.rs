pub mod questions;
pub mod story;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use indic_core::game_trait::{
    GameEvent, GameMetadata, GameOutcome, GameResult, GameSetup, MiniGame,
};
use indic_core::mini_game_boilerplate;
use indic_core::model::Question;

pub const MAX_LEVEL: u32 = 5;
pub const STARTING_LIVES: u8 = 3;
pub const EXPERIENCE_PER_ANSWER: u32 = 50;
pub const SCORE_MASTER_THRESHOLD: u32 = 500;
pub const LEVEL_CHAMPION_THRESHOLD: u32 = 3;
/// Seconds the result stays on screen after a correct answer.
pub const CORRECT_FEEDBACK_SECS: f32 = 3.0;
/// Seconds the result stays on screen after a wrong answer.
pub const WRONG_FEEDBACK_SECS: f32 = 2.0;

pub const SCORE_MASTER: &str = "Score Master";
pub const LEVEL_CHAMPION: &str = "Level Champion";

const OPENING_QUEST: &str = "Begin your cultural journey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizPhase {
    Menu,
    Story,
    Quiz,
    Feedback,
    Completed,
}

impl QuizPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Story => "story",
            Self::Quiz => "quiz",
            Self::Feedback => "feedback",
            Self::Completed => "completed",
        }
    }
}

/// Input from the player. JSON form is `"start"` or `{"select": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizInput {
    Start,
    Continue,
    Select(usize),
    Submit,
    Reset,
}

/// Result of the last submitted answer, shown until the delay runs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub points: u32,
    pub explanation: String,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizState {
    pub theme: String,
    pub level: u32,
    pub score: u32,
    pub lives: u8,
    pub experience: u32,
    pub achievements: Vec<String>,
    pub inventory: Vec<String>,
    pub current_quest: String,
    /// Whole seconds of play.
    pub game_time: u32,
    /// Sub-second remainder carried between ticks.
    pub time_carry: f32,
    pub phase: QuizPhase,
    pub story_text: String,
    pub current_question: Option<Question>,
    pub selected: Option<usize>,
    pub remaining_questions: Vec<u32>,
    pub feedback: Option<AnswerFeedback>,
    pub result: Option<GameResult>,
    pub game_over: bool,
}

impl QuizState {
    fn new(theme: &str) -> Self {
        Self {
            theme: theme.to_string(),
            level: 1,
            score: 0,
            lives: STARTING_LIVES,
            experience: 0,
            achievements: Vec::new(),
            inventory: Vec::new(),
            current_quest: OPENING_QUEST.to_string(),
            game_time: 0,
            time_carry: 0.0,
            phase: QuizPhase::Menu,
            story_text: String::new(),
            current_question: None,
            selected: None,
            remaining_questions: questions::all_ids(),
            feedback: None,
            result: None,
            game_over: false,
        }
    }

    fn is_playing(&self) -> bool {
        !matches!(self.phase, QuizPhase::Menu | QuizPhase::Completed)
    }

    fn unlock(&mut self, name: &str, events: &mut Vec<GameEvent>) {
        if !self.achievements.iter().any(|a| a == name) {
            self.achievements.push(name.to_string());
            events.push(GameEvent::AchievementUnlocked {
                name: name.to_string(),
            });
        }
    }
}

/// The story quiz mini-game.
pub struct QuizQuest {
    state: QuizState,
    setup: GameSetup,
    rng: StdRng,
    paused: bool,
    /// Events produced by inputs, flushed on the next update.
    pending_events: Vec<GameEvent>,
}

impl QuizQuest {
    pub fn new() -> Self {
        let setup = GameSetup::default();
        Self {
            state: QuizState::new(&setup.theme),
            rng: StdRng::seed_from_u64(rand::random()),
            setup,
            paused: false,
            pending_events: Vec::new(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Play time as `m:ss`.
    pub fn formatted_time(&self) -> String {
        indic_core::time::format_time(self.state.game_time)
    }

    fn reseed(&mut self) {
        let seed = self.setup.seed.unwrap_or_else(rand::random);
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn set_phase(&mut self, phase: QuizPhase) {
        self.state.phase = phase;
        self.pending_events.push(GameEvent::PhaseChanged {
            phase: phase.as_str().to_string(),
        });
    }

    fn start(&mut self) {
        if self.state.phase != QuizPhase::Menu {
            return;
        }
        self.state.story_text = story::story_for(&self.state.theme, 1).to_string();
        self.set_phase(QuizPhase::Story);
    }

    /// Draw one question without replacement and move to the quiz.
    fn continue_story(&mut self) {
        if self.state.phase != QuizPhase::Story || self.state.remaining_questions.is_empty() {
            return;
        }
        let pick = self.rng.random_range(0..self.state.remaining_questions.len());
        let id = self.state.remaining_questions.swap_remove(pick);
        self.state.current_question = questions::question(id);
        self.state.selected = None;
        self.state.feedback = None;
        self.set_phase(QuizPhase::Quiz);
    }

    fn select(&mut self, option: usize) {
        if self.state.phase != QuizPhase::Quiz {
            return;
        }
        if let Some(question) = &self.state.current_question
            && option < question.options.len()
        {
            self.state.selected = Some(option);
        }
    }

    fn submit(&mut self) {
        if self.state.phase != QuizPhase::Quiz {
            return;
        }
        let (Some(choice), Some(question)) =
            (self.state.selected, self.state.current_question.clone())
        else {
            return;
        };

        let correct = question.is_correct(choice);
        let mut events = Vec::new();
        if correct {
            self.state.score += question.points;
            self.state.experience += EXPERIENCE_PER_ANSWER;
            self.state
                .inventory
                .push(format!("Sacred Knowledge: {}", question.category));
            events.push(GameEvent::ScoreUpdate {
                score: self.state.score,
            });
            if self.state.score >= SCORE_MASTER_THRESHOLD {
                self.state.unlock(SCORE_MASTER, &mut events);
            }
            if self.state.level >= LEVEL_CHAMPION_THRESHOLD {
                self.state.unlock(LEVEL_CHAMPION, &mut events);
            }
        } else {
            self.state.lives = self.state.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost {
                lives: self.state.lives,
            });
        }
        tracing::debug!(
            question = question.id,
            correct,
            score = self.state.score,
            lives = self.state.lives,
            "Quiz answer submitted"
        );

        self.state.feedback = Some(AnswerFeedback {
            correct,
            points: if correct { question.points } else { 0 },
            explanation: question.explanation.clone(),
            remaining_secs: if correct {
                CORRECT_FEEDBACK_SECS
            } else {
                WRONG_FEEDBACK_SECS
            },
        });
        self.pending_events.extend(events);

        let result = if self.state.lives == 0 {
            Some(GameResult::Defeat)
        } else if self.state.remaining_questions.is_empty() {
            Some(GameResult::Victory)
        } else {
            None
        };
        match result {
            Some(result) => self.finish(result),
            None => self.set_phase(QuizPhase::Feedback),
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.state.result = Some(result);
        self.state.game_over = true;
        self.state.current_quest = match result {
            GameResult::Victory => "Quest Completed!",
            GameResult::Defeat => "Game Over",
        }
        .to_string();
        self.set_phase(QuizPhase::Completed);
        if let Some(outcome) = self.outcome() {
            self.pending_events.push(GameEvent::GameOver { outcome });
        }
        tracing::info!(?result, score = self.state.score, "Quiz finished");
    }

    fn reset(&mut self) {
        self.state = QuizState::new(&self.setup.theme);
        self.reseed();
        self.paused = false;
        self.pending_events.push(GameEvent::PhaseChanged {
            phase: QuizPhase::Menu.as_str().to_string(),
        });
    }

    /// Leave the feedback screen once its delay has run out.
    fn finish_feedback(&mut self, events: &mut Vec<GameEvent>) {
        let Some(feedback) = self.state.feedback.take() else {
            return;
        };
        if feedback.correct {
            if self.state.level < MAX_LEVEL {
                self.state.level += 1;
                events.push(GameEvent::LevelUp {
                    level: self.state.level,
                });
            }
            self.state.story_text = story::story_for(&self.state.theme, self.state.level).to_string();
        } else {
            self.state.story_text = story::CAREFUL_TEXT.to_string();
        }
        self.state.current_question = None;
        self.state.selected = None;
        self.set_phase(QuizPhase::Story);
    }
}

impl Default for QuizQuest {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniGame for QuizQuest {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Cultural Quest".to_string(),
            description: "Follow the story and answer questions about Indian culture.".to_string(),
            estimated_duration: Duration::from_secs(180),
        }
    }

    fn init(&mut self, setup: &GameSetup) {
        self.setup = setup.clone();
        self.state = QuizState::new(&setup.theme);
        self.paused = false;
        self.pending_events.clear();
        self.reseed();
    }

    fn apply_input(&mut self, input: &[u8]) {
        match rmp_serde::from_slice::<QuizInput>(input) {
            Err(e) => {
                tracing::debug!(error = %e, "Dropped malformed quiz input");
            },
            Ok(QuizInput::Reset) => self.reset(),
            Ok(_) if self.paused => {},
            Ok(QuizInput::Start) => self.start(),
            Ok(QuizInput::Continue) => self.continue_story(),
            Ok(QuizInput::Select(option)) => self.select(option),
            Ok(QuizInput::Submit) => self.submit(),
        }
    }

    fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        if self.paused || !self.state.is_playing() {
            return events;
        }

        self.state.time_carry += dt;
        while self.state.time_carry >= 1.0 {
            self.state.time_carry -= 1.0;
            self.state.game_time += 1;
        }

        if self.state.phase == QuizPhase::Feedback
            && let Some(feedback) = self.state.feedback.as_mut()
        {
            feedback.remaining_secs -= dt;
            if feedback.remaining_secs <= 0.0 {
                self.finish_feedback(&mut events);
                events.append(&mut self.pending_events);
            }
        }
        events
    }

    mini_game_boilerplate!(state_type: QuizState);

    fn snapshot(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(&self.state).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert("formatted_time".into(), self.formatted_time().into());
            map.insert("paused".into(), self.paused.into());
        }
        value
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.state.result.map(|result| GameOutcome {
            result,
            score: self.state.score,
            level: self.state.level,
        })
    }
}
