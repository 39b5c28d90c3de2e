//! The dispatch table. Maps each analysis button to its prompt and heading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{
    ATS_SCORE_PROMPT, COVER_LETTER_PROMPT, HIGHLIGHT_SKILLS_PROMPT, IMPROVE_SKILLS_PROMPT,
    RESUME_ANALYSIS_PROMPT, RESUME_QUESTIONS_PROMPT, SKILLS_MATCH_PROMPT, WEAKNESSES_PROMPT,
};
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisAction {
    ResumeAnalysis,
    HighlightSkills,
    ImproveSkills,
    SkillsMatch,
    Weaknesses,
    AtsScore,
    CoverLetter,
    ResumeQuestions,
}

impl AnalysisAction {
    /// Every action, in the order the buttons are laid out.
    pub const ALL: [AnalysisAction; 8] = [
        AnalysisAction::ResumeAnalysis,
        AnalysisAction::HighlightSkills,
        AnalysisAction::ImproveSkills,
        AnalysisAction::SkillsMatch,
        AnalysisAction::Weaknesses,
        AnalysisAction::AtsScore,
        AnalysisAction::CoverLetter,
        AnalysisAction::ResumeQuestions,
    ];

    /// Wire id, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisAction::ResumeAnalysis => "resume-analysis",
            AnalysisAction::HighlightSkills => "highlight-skills",
            AnalysisAction::ImproveSkills => "improve-skills",
            AnalysisAction::SkillsMatch => "skills-match",
            AnalysisAction::Weaknesses => "weaknesses",
            AnalysisAction::AtsScore => "ats-score",
            AnalysisAction::CoverLetter => "cover-letter",
            AnalysisAction::ResumeQuestions => "resume-questions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisAction::ResumeAnalysis => "Resume Analysis",
            AnalysisAction::HighlightSkills => "Highlight Skills",
            AnalysisAction::ImproveSkills => "Improve Skills",
            AnalysisAction::SkillsMatch => "Skills Match %",
            AnalysisAction::Weaknesses => "Resume Weaknesses",
            AnalysisAction::AtsScore => "ATS Score",
            AnalysisAction::CoverLetter => "Generate Cover Letter",
            AnalysisAction::ResumeQuestions => "Question on resume",
        }
    }

    /// Title printed above the model's answer.
    pub fn heading(self) -> &'static str {
        match self {
            AnalysisAction::ResumeAnalysis => "Resume Analysis",
            AnalysisAction::HighlightSkills => "Skills in the Resume",
            AnalysisAction::ImproveSkills => "Suggestions to Improve Skills",
            AnalysisAction::SkillsMatch => "Skills Match Percentage",
            AnalysisAction::Weaknesses => "Resume Weaknesses",
            AnalysisAction::AtsScore => "Estimated ATS Score",
            AnalysisAction::CoverLetter => "Generated Cover Letter",
            AnalysisAction::ResumeQuestions => "Questions on resume",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            AnalysisAction::ResumeAnalysis => RESUME_ANALYSIS_PROMPT,
            AnalysisAction::HighlightSkills => HIGHLIGHT_SKILLS_PROMPT,
            AnalysisAction::ImproveSkills => IMPROVE_SKILLS_PROMPT,
            AnalysisAction::SkillsMatch => SKILLS_MATCH_PROMPT,
            AnalysisAction::Weaknesses => WEAKNESSES_PROMPT,
            AnalysisAction::AtsScore => ATS_SCORE_PROMPT,
            AnalysisAction::CoverLetter => COVER_LETTER_PROMPT,
            AnalysisAction::ResumeQuestions => RESUME_QUESTIONS_PROMPT,
        }
    }

    /// Only the cover letter is offered as a file.
    pub fn download_file_name(self) -> Option<&'static str> {
        match self {
            AnalysisAction::CoverLetter => Some("cover_letter.txt"),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        AnalysisAction::ALL
            .into_iter()
            .find(|a| a.as_str() == id)
            .ok_or_else(|| AppError::Validation(format!("Unknown analysis action '{id}'")))
    }
}

/// One row of the dispatch table as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ActionDescriptor {
    pub id: AnalysisAction,
    pub label: &'static str,
    pub heading: &'static str,
    pub downloadable: bool,
}

impl From<AnalysisAction> for ActionDescriptor {
    fn from(action: AnalysisAction) -> Self {
        Self {
            id: action,
            label: action.label(),
            heading: action.heading(),
            downloadable: action.download_file_name().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_id_matches_serde() {
        for action in AnalysisAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            let back: AnalysisAction = serde_json::from_str(&json).unwrap();
            assert_eq!(back, action);
        }
    }

    #[test]
    fn test_from_str_accepts_every_id() {
        for action in AnalysisAction::ALL {
            assert_eq!(action.as_str().parse::<AnalysisAction>().unwrap(), action);
        }
        assert_eq!(
            " ats-score\n".parse::<AnalysisAction>().unwrap(),
            AnalysisAction::AtsScore
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "salary-estimate".parse::<AnalysisAction>().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_every_action_has_a_distinct_prompt() {
        let prompts: HashSet<_> = AnalysisAction::ALL.iter().map(|a| a.prompt()).collect();
        assert_eq!(prompts.len(), AnalysisAction::ALL.len());
        assert!(AnalysisAction::ALL.iter().all(|a| !a.prompt().trim().is_empty()));
    }

    #[test]
    fn test_ats_prompt_has_no_placeholders() {
        let prompt = AnalysisAction::AtsScore.prompt();
        assert!(!prompt.contains("[Insert"));
        assert!(prompt.contains("a good resume should score around 70–80"));
        assert!(prompt.ends_with("summary table of your scoring breakdown."));
    }

    #[test]
    fn test_headings() {
        assert_eq!(AnalysisAction::AtsScore.heading(), "Estimated ATS Score");
        assert_eq!(AnalysisAction::SkillsMatch.heading(), "Skills Match Percentage");
        assert_eq!(AnalysisAction::HighlightSkills.heading(), "Skills in the Resume");
    }

    #[test]
    fn test_only_cover_letter_downloads() {
        let downloadable: Vec<_> = AnalysisAction::ALL
            .into_iter()
            .filter(|a| a.download_file_name().is_some())
            .collect();
        assert_eq!(downloadable, vec![AnalysisAction::CoverLetter]);
        assert_eq!(
            AnalysisAction::CoverLetter.download_file_name(),
            Some("cover_letter.txt")
        );
    }
}
