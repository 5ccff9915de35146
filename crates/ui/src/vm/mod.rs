mod attempt_vm;
mod catalog_vm;
mod practice_vm;
mod time_fmt;

pub use attempt_vm::{AttemptRowVm, RECENT_ATTEMPTS, map_recent_attempts};
pub use catalog_vm::{
    CategorySectionVm, TopicCardVm, level_label, load_catalog, map_catalog, map_topic_card,
};
pub use practice_vm::{
    AnswerDraft, FeedbackVm, PracticeVm, QuestionVm, StepRowVm, level_change_label,
    map_feedback, map_question, start_practice,
};
pub use time_fmt::format_time;
