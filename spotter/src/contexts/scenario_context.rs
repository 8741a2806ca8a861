/// Observable state of the training scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    /// No scenario is in progress
    Idle,
    /// The scenario is running
    Running,
    /// The scenario is suspended and can be resumed
    Paused,
}

/// The session controller for the training scenario.
///
/// Passed into the systems that need it rather than living in a global, so
/// tests (and hosts embedding several sessions) can own as many as they like.
/// Invalid commands are ignored: pausing an idle scenario does nothing.
#[derive(Debug)]
pub struct ScenarioContext {
    /// Current scenario state
    pub state: ScenarioState,
    /// Number of correct classification calls this run
    pub correct: u32,
    /// Number of incorrect classification calls this run
    pub incorrect: u32,
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self {
            state: ScenarioState::Idle,
            correct: 0,
            incorrect: 0,
        }
    }
}

impl ScenarioContext {
    /// Begin a new run, resetting the score
    pub fn start(&mut self) {
        if self.state == ScenarioState::Idle {
            self.correct = 0;
            self.incorrect = 0;
            self.transition(ScenarioState::Running);
        }
    }

    /// Suspend a running scenario
    pub fn pause(&mut self) {
        if self.state == ScenarioState::Running {
            self.transition(ScenarioState::Paused);
        }
    }

    /// Resume a paused scenario
    pub fn resume(&mut self) {
        if self.state == ScenarioState::Paused {
            self.transition(ScenarioState::Running);
        }
    }

    /// End the scenario, keeping the score for the summary screen
    pub fn stop(&mut self) {
        if self.state != ScenarioState::Idle {
            self.transition(ScenarioState::Idle);
        }
    }

    /// Is a run currently in progress?
    pub fn is_running(&self) -> bool {
        self.state == ScenarioState::Running
    }

    /// Record the outcome of a classification call
    pub fn record_outcome(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    fn transition(&mut self, next: ScenarioState) {
        println!("[SPOTTER_SCENARIO] {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
