use crate::model::{Course, Player, RoundResult};
use chrono::NaiveDate;

/// The screens a scoring session moves through, in their normal order.
/// History and Settings sit outside the main flow and are always
/// reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Course,
    Players,
    Scores,
    Results,
    Comparison,
    Evolution,
    History,
    Settings,
}

impl Default for Step {
    fn default() -> Self {
        Step::Course
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionModel {
    pub step: Step,
    pub course: Option<Course>,
    pub date: Option<NaiveDate>,
    pub players: Vec<Player>,
    pub results: Vec<RoundResult>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Msg {
    CourseSelected(Course, NaiveDate),
    PlayersUpdated(Vec<Player>),
    PlayerSetupComplete,
    ResultsComplete(Vec<RoundResult>),
    NavigateTo(Step),
    NewRound,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistSession,
}

impl SessionModel {
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.course.is_some()
    }

    /// Navigation guard for each step. Scores needs a head-to-head, so
    /// at least two players must be selected first.
    #[must_use]
    pub fn can_navigate_to(&self, step: Step) -> bool {
        match step {
            Step::Course | Step::History | Step::Settings => true,
            Step::Players => self.has_session(),
            Step::Scores => self.has_session() && self.players.len() >= 2,
            Step::Results | Step::Comparison | Step::Evolution => !self.results.is_empty(),
        }
    }
}

/// Pure state transition; effects are carried out by the caller.
pub fn update(model: &mut SessionModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::CourseSelected(course, date) => {
            model.course = Some(course);
            model.date = Some(date);
            model.players.clear();
            model.results.clear();
            model.error = None;
            model.step = Step::Players;
            vec![]
        }
        Msg::PlayersUpdated(players) => {
            model.players = players;
            vec![]
        }
        Msg::PlayerSetupComplete => {
            if model.can_navigate_to(Step::Scores) {
                model.step = Step::Scores;
            } else {
                model.error = Some("select at least two players before scoring".to_string());
            }
            vec![]
        }
        Msg::ResultsComplete(results) => {
            model.results = results;
            model.step = Step::Results;
            vec![Effect::PersistSession]
        }
        Msg::NavigateTo(step) => {
            if model.can_navigate_to(step) {
                model.step = step;
            }
            vec![]
        }
        Msg::NewRound => {
            *model = SessionModel::default();
            vec![]
        }
        Msg::Failed(message) => {
            model.error = Some(message);
            vec![]
        }
    }
}
