pub mod candidate;
pub mod job;
pub mod recommendation;

pub use candidate::{CandidateProfile, EducationLabel, ExperienceLevel, ResumeSignals};
pub use job::{JobPosting, NewJobPosting};
pub use recommendation::{BonusBreakdown, Recommendation, RecommendationSummary};
