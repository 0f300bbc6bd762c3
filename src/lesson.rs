//! Lesson round state and the attempt log.
//!
//! A round moves `Analysis -> Quiz` when the learner's picks pass, and
//! `Quiz -> Analysis` with a fresh trace once the quiz is done. A rejected
//! transition leaves the state as it was.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SeismoError};
use crate::grade::{grade, GradeResult, Submission};
use crate::params::{GenerationProfile, Tolerances};
use crate::synth::generate;
use crate::trace::{GroundTruth, SeismicTrace, TraceView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Analysis,
    Quiz,
}

#[derive(Debug, Clone)]
pub struct LessonState {
    learner: String,
    stage: Stage,
    round: u32,
    profile: GenerationProfile,
    trace: SeismicTrace,
}

/// Seeded profiles shift the seed each round so rounds differ but replay
fn round_profile(profile: &GenerationProfile, round: u32) -> GenerationProfile {
    GenerationProfile {
        random_seed: profile
            .random_seed
            .map(|seed| seed.wrapping_add(u64::from(round - 1))),
        ..profile.clone()
    }
}

impl LessonState {
    pub fn start(learner: impl Into<String>, profile: GenerationProfile) -> Result<Self> {
        let trace = generate(&round_profile(&profile, 1))?;
        let learner = learner.into();
        info!(learner = %learner, "lesson started");
        Ok(Self {
            learner,
            stage: Stage::Analysis,
            round: 1,
            profile,
            trace,
        })
    }

    pub fn learner(&self) -> &str {
        &self.learner
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 1-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Samples of the current trace for display
    pub fn view(&self) -> TraceView<'_> {
        self.trace.view()
    }

    /// True onsets and distance, released only once the picks have passed
    pub fn answer(&self) -> Option<&GroundTruth> {
        match self.stage {
            Stage::Quiz => Some(self.trace.ground_truth()),
            Stage::Analysis => None,
        }
    }

    /// Grade picks; a pass moves the lesson on to the quiz.
    /// On error the state is left unchanged.
    pub fn submit(
        &mut self,
        submission: &Submission,
        tolerances: &Tolerances,
    ) -> Result<GradeResult> {
        if self.stage != Stage::Analysis {
            return Err(SeismoError::InvalidTransition(
                "picks can only be submitted during analysis",
            ));
        }

        let result = grade(&self.trace, submission, tolerances)?;
        if result.passed {
            info!(learner = %self.learner, round = self.round, "analysis passed");
            self.stage = Stage::Quiz;
        }
        Ok(result)
    }

    /// Finish the quiz and start the next round on a new trace
    pub fn complete_quiz(&mut self) -> Result<()> {
        if self.stage != Stage::Quiz {
            return Err(SeismoError::InvalidTransition(
                "quiz can only be completed after a passing analysis",
            ));
        }

        let round = self.round + 1;
        self.trace = generate(&round_profile(&self.profile, round))?;
        self.round = round;
        self.stage = Stage::Analysis;
        info!(learner = %self.learner, round, "next round");
        Ok(())
    }

    /// Replace the current trace without changing stage or round
    pub fn regenerate(&mut self) -> Result<()> {
        let profile = GenerationProfile {
            random_seed: None,
            ..self.profile.clone()
        };
        self.trace = generate(&profile)?;
        Ok(())
    }

    /// Log row for a graded submission
    pub fn record(&self, result: &GradeResult) -> AttemptRecord {
        AttemptRecord {
            learner: self.learner.clone(),
            timestamp_unix_s: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            round: self.round,
            passed: result.passed,
            time_error_s: result.time_error,
            distance_error_km: result.distance_error,
        }
    }
}

/// One graded attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub learner: String,
    pub timestamp_unix_s: u64,
    pub round: u32,
    pub passed: bool,
    pub time_error_s: f64,
    #[serde(default)]
    pub distance_error_km: Option<f64>,
}

/// Append-only attempt log scanned by learner name
pub trait AttemptStore {
    fn append(&mut self, record: &AttemptRecord) -> Result<()>;
    fn records_for(&self, learner: &str) -> Result<Vec<AttemptRecord>>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<AttemptRecord>,
}

impl AttemptStore for MemoryStore {
    fn append(&mut self, record: &AttemptRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records_for(&self, learner: &str) -> Result<Vec<AttemptRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.learner == learner)
            .cloned()
            .collect())
    }
}

/// JSON-lines file store, one record per line
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AttemptStore for JsonLinesStore {
    fn append(&mut self, record: &AttemptRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn records_for(&self, learner: &str) -> Result<Vec<AttemptRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for line in BufReader::new(File::open(&self.path)?).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: AttemptRecord = serde_json::from_str(&line)?;
            if record.learner == learner {
                records.push(record);
            }
        }
        Ok(records)
    }
}
